use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "event_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Series,
    Free,
    Pair,
}

/// A single competition occurrence. `discipline_id` and `series_round` are
/// set iff the event belongs to a season series; free and pair events carry
/// neither (enforced by a CHECK constraint in the schema).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub event_type: EventType,
    pub season_id: Uuid,
    pub discipline_id: Option<Uuid>,
    pub series_round: Option<i16>,
    pub starts_at: chrono::NaiveDateTime,
}

impl Event {
    pub fn is_series(&self) -> bool {
        self.event_type == EventType::Series
    }
}
