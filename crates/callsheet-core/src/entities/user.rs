//! User entity - a staff member or a part-scoped administrator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Staff specialty category that partitions admin visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Part {
    Videographer,
    Photographer,
    Iphonesnapper,
}

impl Part {
    /// Stored string label, also the staff role value for this part
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Videographer => "VIDEOGRAPHER",
            Self::Photographer => "PHOTOGRAPHER",
            Self::Iphonesnapper => "IPHONESNAPPER",
        }
    }

    /// Parse from a stored label
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "VIDEOGRAPHER" => Some(Self::Videographer),
            "PHOTOGRAPHER" => Some(Self::Photographer),
            "IPHONESNAPPER" => Some(Self::Iphonesnapper),
            _ => None,
        }
    }

    /// The staff role belonging to this part
    #[must_use]
    pub fn staff_role(self) -> StaffRole {
        match self {
            Self::Videographer => StaffRole::Videographer,
            Self::Photographer => StaffRole::Photographer,
            Self::Iphonesnapper => StaffRole::Iphonesnapper,
        }
    }

    /// The admin role governing this part
    #[must_use]
    pub fn admin_role(self) -> StaffRole {
        match self {
            Self::Videographer => StaffRole::AdminVideographer,
            Self::Photographer => StaffRole::AdminPhotographer,
            Self::Iphonesnapper => StaffRole::AdminIphonesnapper,
        }
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role enum - three staff specialties and their admin counterparts
///
/// Admin roles carry the `ADMIN_` prefix in storage; stripping it yields
/// the part the admin governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    Videographer,
    #[default]
    Photographer,
    Iphonesnapper,
    AdminVideographer,
    AdminPhotographer,
    AdminIphonesnapper,
}

impl StaffRole {
    /// Stored string label
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Videographer => "VIDEOGRAPHER",
            Self::Photographer => "PHOTOGRAPHER",
            Self::Iphonesnapper => "IPHONESNAPPER",
            Self::AdminVideographer => "ADMIN_VIDEOGRAPHER",
            Self::AdminPhotographer => "ADMIN_PHOTOGRAPHER",
            Self::AdminIphonesnapper => "ADMIN_IPHONESNAPPER",
        }
    }

    /// Parse from a stored label
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "VIDEOGRAPHER" => Some(Self::Videographer),
            "PHOTOGRAPHER" => Some(Self::Photographer),
            "IPHONESNAPPER" => Some(Self::Iphonesnapper),
            "ADMIN_VIDEOGRAPHER" => Some(Self::AdminVideographer),
            "ADMIN_PHOTOGRAPHER" => Some(Self::AdminPhotographer),
            "ADMIN_IPHONESNAPPER" => Some(Self::AdminIphonesnapper),
            _ => None,
        }
    }

    /// Check if this is an admin role
    #[inline]
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(
            self,
            Self::AdminVideographer | Self::AdminPhotographer | Self::AdminIphonesnapper
        )
    }

    /// The part an admin role governs, None for staff roles
    #[must_use]
    pub fn admin_part(self) -> Option<Part> {
        match self {
            Self::AdminVideographer => Some(Part::Videographer),
            Self::AdminPhotographer => Some(Part::Photographer),
            Self::AdminIphonesnapper => Some(Part::Iphonesnapper),
            _ => None,
        }
    }

    /// The specialty this role belongs to, admin or not
    #[must_use]
    pub fn part(self) -> Part {
        match self {
            Self::Videographer | Self::AdminVideographer => Part::Videographer,
            Self::Photographer | Self::AdminPhotographer => Part::Photographer,
            Self::Iphonesnapper | Self::AdminIphonesnapper => Part::Iphonesnapper,
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assignment eligibility flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    /// Stored string label
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }

    /// Parse from a stored label
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "INACTIVE" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// User entity
///
/// `phone` is the login identifier; the `(phone, name)` pair authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub phone: String,
    pub role: StaffRole,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub main_location: Option<String>,
    pub has_vehicle: bool,
    pub start_date: Option<String>,
    pub birth_date: Option<String>,
    pub status: Option<UserStatus>,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, name: String, phone: String, role: StaffRole) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            phone,
            role,
            gender: None,
            address: None,
            main_location: None,
            has_vehicle: false,
            start_date: None,
            birth_date: None,
            status: None,
            memo: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this user holds an admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if this user is eligible for assignment
    ///
    /// A missing status counts as active; inactivity must be explicit.
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self.status, Some(UserStatus::Inactive))
    }

    /// Bump the modification timestamp after a field merge
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
