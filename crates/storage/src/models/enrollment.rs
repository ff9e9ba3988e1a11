use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One registered participant slot in an event, as stored: either an
/// individual fisher or a named team, never both and never neither. The raw
/// row keeps the two nullable columns; consumers go through
/// [`crate::services::standings::resolver`] to obtain the validated tagged
/// form instead of re-checking the mutual exclusion everywhere.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Enrollment {
    pub enrollment_id: Uuid,
    pub event_id: Uuid,
    pub fisher_id: Option<Uuid>,
    pub team_name: Option<String>,
}

/// A fisher listed on a team enrollment's roster.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamMember {
    pub enrollment_id: Uuid,
    pub fisher_id: Uuid,
}
