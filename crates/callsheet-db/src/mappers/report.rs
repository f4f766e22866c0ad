//! Report entity <-> model mapper

use callsheet_core::entities::{Report, ReportRole, ReportStatus};
use callsheet_core::value_objects::Snowflake;

use crate::models::ReportModel;

/// Convert ReportModel to Report entity
///
/// Unknown labels fall back to the main slot and the pending status
/// rather than failing the whole row.
impl From<ReportModel> for Report {
    fn from(model: ReportModel) -> Self {
        Report {
            id: Snowflake::new(model.id),
            schedule_id: Snowflake::new(model.schedule_id),
            user_id: Snowflake::new(model.user_id),
            role: ReportRole::parse(&model.role).unwrap_or(ReportRole::Main),
            status: ReportStatus::parse(&model.status).unwrap_or_default(),
            estimated_time: model.estimated_time,
            current_step: model.current_step,
            memo: model.memo,
            reported_at: model.reported_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
