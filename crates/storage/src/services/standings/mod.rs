//! The season standings engine.
//!
//! A pure pipeline over a read-only snapshot of one season/discipline pair:
//! team enrollments expand to their rosters (`resolver`), scored series
//! results become de-duplicated per-fisher credits (`credit`), each fisher's
//! credits are ordered worst to best and the drop rule applied (`ranker`),
//! and the event-count and round gates produce the final records
//! (`publisher`). Recomputing on the same snapshot yields identical output;
//! nothing here touches the database.

use std::collections::HashMap;

use crate::dto::standings::SeasonStanding;
use crate::error::Result;
use crate::models::{Discipline, Enrollment, Event, EventResult, Fisher, Season, TeamMember};

pub mod credit;
pub mod publisher;
pub mod ranker;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testutil;

/// Season rule constants. Kept as a value rather than literals so a rule
/// change for a future season is configuration, not code.
#[derive(Debug, Clone, Copy)]
pub struct StandingsRules {
    /// How many worst events are excluded from the net total.
    pub drop_count: u32,
    /// Minimum credited events before the drop rule applies and the fisher
    /// appears in standings at all.
    pub min_events: u32,
    /// Minimum series round a fisher must have reached before their standing
    /// may be published.
    pub publication_round: i16,
}

impl Default for StandingsRules {
    fn default() -> Self {
        Self {
            drop_count: 2,
            min_events: 5,
            publication_round: 3,
        }
    }
}

/// A consistent, read-only snapshot of everything the engine consumes for
/// one (season, discipline) pair. Obtained under a single transaction by
/// [`crate::repository::standings::StandingsRepository`].
#[derive(Debug, Clone)]
pub struct SeasonSnapshot {
    pub season: Season,
    pub discipline: Discipline,
    pub events: Vec<Event>,
    pub enrollments: Vec<Enrollment>,
    pub team_members: Vec<TeamMember>,
    pub fishers: Vec<Fisher>,
    pub results: Vec<EventResult>,
}

/// Run the full pipeline. Output carries one record per fisher who passed
/// the minimum-events gate, in fisher-id order; display ordering and the
/// publication filter are the caller's concern (see
/// [`publisher::published_order`]).
pub fn compute_standings(
    snapshot: &SeasonSnapshot,
    rules: &StandingsRules,
) -> Result<Vec<SeasonStanding>> {
    let credits = credit::aggregate_credits(snapshot)?;
    let ranked = ranker::rank_fishers(credits, rules);
    let fishers: HashMap<_, _> = snapshot
        .fishers
        .iter()
        .map(|fisher| (fisher.fisher_id, fisher))
        .collect();
    publisher::publish(ranked, &fishers, rules)
}
