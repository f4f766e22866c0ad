//! Schedule entity <-> model mapper

use callsheet_core::entities::{Schedule, ScheduleStatus};
use callsheet_core::value_objects::Snowflake;

use crate::models::ScheduleModel;

/// Convert ScheduleModel to Schedule entity
///
/// Unknown status labels fall back to unassigned rather than failing
/// the whole row.
impl From<ScheduleModel> for Schedule {
    fn from(model: ScheduleModel) -> Self {
        Schedule {
            id: Snowflake::new(model.id),
            main_user: model.main_user.map(Snowflake::new),
            sub_user: model.sub_user.map(Snowflake::new),
            groom: model.groom,
            bride: model.bride,
            date: model.date,
            time: model.time,
            user_arrival_time: model.user_arrival_time,
            location: model.location,
            venue: model.venue,
            memo: model.memo,
            status: ScheduleStatus::parse(&model.status).unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
