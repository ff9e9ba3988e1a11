use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::standings::SeasonStanding;
use crate::error::{Result, StorageError};
use crate::models::Fisher;

use super::StandingsRules;
use super::ranker::FisherSeries;

/// Apply the minimum-events gate and compute publication eligibility.
///
/// Fishers below `min_events` are not part of any standings at all, not
/// merely scored as non-droppable. The round gate does not remove records
/// here; it sets `eligible_for_publication`, and the published view filters
/// on that flag.
pub fn publish(
    ranked: Vec<FisherSeries>,
    fishers: &HashMap<Uuid, &Fisher>,
    rules: &StandingsRules,
) -> Result<Vec<SeasonStanding>> {
    ranked
        .into_iter()
        .filter(|series| series.total_events >= rules.min_events)
        .map(|series| {
            let fisher = fishers.get(&series.fisher_id).ok_or_else(|| {
                StorageError::Integrity(format!("credited fisher {} is unknown", series.fisher_id))
            })?;

            Ok(SeasonStanding {
                fisher_id: series.fisher_id,
                fisher_name: fisher.name.clone(),
                total_events: series.total_events,
                completed_series_events: series.total_events,
                net_points: series.net_points,
                gross_points: series.gross_points,
                worst_point: series.worst_point,
                last_series_round: series.last_series_round,
                eligible_for_publication: series.last_series_round >= rules.publication_round,
            })
        })
        .collect()
}

/// The published view: eligible records only, lowest net points first, ties
/// broken by fisher name. Ordering is a display concern, which is why it
/// lives here and not in the pipeline itself.
pub fn published_order(standings: Vec<SeasonStanding>) -> Vec<SeasonStanding> {
    let mut published: Vec<SeasonStanding> = standings
        .into_iter()
        .filter(|standing| standing.eligible_for_publication)
        .collect();
    published.sort_by(|a, b| {
        a.net_points
            .cmp(&b.net_points)
            .then_with(|| a.fisher_name.cmp(&b.fisher_name))
    });
    published
}
