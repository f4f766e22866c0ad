//! User entity <-> model mapper

use callsheet_core::entities::{StaffRole, User, UserStatus};
use callsheet_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// Unknown role labels fall back to the default staff role rather than
/// failing the whole row.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            name: model.name,
            phone: model.phone,
            role: StaffRole::parse(&model.role).unwrap_or_default(),
            gender: model.gender,
            address: model.address,
            main_location: model.main_location,
            has_vehicle: model.has_vehicle,
            start_date: model.start_date,
            birth_date: model.birth_date,
            status: model.status.as_deref().and_then(UserStatus::parse),
            memo: model.memo,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
