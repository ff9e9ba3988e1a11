use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// The recorded outcome for one enrollment in one event. Ranks and points
/// are produced by the weigh-in process after the event concludes; `points`
/// stays null until the placement conversion has run, and such results are
/// simply not yet creditable toward standings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventResult {
    pub enrollment_id: Uuid,
    pub event_id: Uuid,
    pub peg: i16,
    pub weight: Decimal,
    pub sector_rank: Option<i32>,
    pub overall_rank: Option<i32>,
    pub points: Option<i32>,
}
