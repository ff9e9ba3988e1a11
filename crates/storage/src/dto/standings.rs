use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct StandingsFilter {
    /// Season label, e.g. "2025".
    #[validate(length(min = 1, message = "season must not be empty"))]
    pub season: String,
    /// Discipline name, e.g. "feeder".
    #[validate(length(min = 1, message = "discipline must not be empty"))]
    pub discipline: String,
}

/// One club member's line in the season standings for a discipline.
///
/// Points are placement-style: lower is better. `net_points` excludes the
/// dropped worst events once the fisher has fished enough rounds;
/// `gross_points` never excludes anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeasonStanding {
    pub fisher_id: Uuid,
    pub fisher_name: String,
    pub total_events: u32,
    pub completed_series_events: u32,
    pub net_points: i32,
    pub gross_points: i32,
    pub worst_point: i32,
    pub last_series_round: i16,
    pub eligible_for_publication: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeasonInfo {
    pub season_id: Uuid,
    pub label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DisciplineInfo {
    pub discipline_id: Uuid,
    pub name: String,
}

/// The rule constants the standings were computed under, echoed back so a
/// client can explain the numbers it displays.
#[derive(Debug, Serialize, ToSchema)]
pub struct RulesInfo {
    pub drop_count: u32,
    pub min_events: u32,
    pub publication_round: i16,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsResponse {
    pub season: SeasonInfo,
    pub discipline: DisciplineInfo,
    pub rules: RulesInfo,
    pub standings: Vec<SeasonStanding>,
}
