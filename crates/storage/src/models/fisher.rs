use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Membership status of a competitor. Only club members appear in season
/// standings; guests fish events but are never ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "fisher_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FisherType {
    ClubMember,
    Guest,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fisher {
    pub fisher_id: Uuid,
    pub name: String,
    pub fisher_type: FisherType,
}

impl Fisher {
    pub fn is_club_member(&self) -> bool {
        self.fisher_type == FisherType::ClubMember
    }
}
