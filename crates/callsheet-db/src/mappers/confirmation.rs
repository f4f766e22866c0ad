//! Confirmation entity <-> model mapper

use callsheet_core::entities::Confirmation;
use callsheet_core::value_objects::Snowflake;

use crate::models::ConfirmationModel;

impl From<ConfirmationModel> for Confirmation {
    fn from(model: ConfirmationModel) -> Self {
        Confirmation {
            id: Snowflake::new(model.id),
            schedule_id: Snowflake::new(model.schedule_id),
            user_id: Snowflake::new(model.user_id),
            confirmed: model.confirmed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
