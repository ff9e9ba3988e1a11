use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Event;

use super::SeasonSnapshot;
use super::resolver;

/// A single credited series event for one fisher, after team expansion and
/// de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCredit {
    pub event_id: Uuid,
    pub series_round: i16,
    pub points: i32,
}

/// Expand every scored series result into per-fisher credits.
///
/// A club member can be reached through more than one credit path in the
/// same event (enrolled individually and on a team, or on two teams sharing
/// a roster). Colliding credits keep the minimum points value: points are
/// placement-style, so the minimum is the fisher's best recorded placement
/// for that event. Guests are discarded here; results without points are
/// not yet creditable and are skipped.
pub fn aggregate_credits(snapshot: &SeasonSnapshot) -> Result<HashMap<Uuid, Vec<EventCredit>>> {
    let events: HashMap<Uuid, &Event> = snapshot
        .events
        .iter()
        .map(|event| (event.event_id, event))
        .collect();
    let enrollments: HashMap<Uuid, _> = snapshot
        .enrollments
        .iter()
        .map(|enrollment| (enrollment.enrollment_id, enrollment))
        .collect();
    let rosters = resolver::rosters(&snapshot.team_members);
    let club_members: HashSet<Uuid> = snapshot
        .fishers
        .iter()
        .filter(|fisher| fisher.is_club_member())
        .map(|fisher| fisher.fisher_id)
        .collect();

    // Best (lowest) candidate per (fisher, event).
    let mut best: HashMap<(Uuid, Uuid), EventCredit> = HashMap::new();

    for result in &snapshot.results {
        let Some(points) = result.points else {
            continue;
        };

        let event = events.get(&result.event_id).ok_or_else(|| {
            StorageError::Integrity(format!(
                "result for enrollment {} references unknown event {}",
                result.enrollment_id, result.event_id
            ))
        })?;
        if !event.is_series() {
            continue;
        }
        let series_round = event.series_round.ok_or_else(|| {
            StorageError::Integrity(format!(
                "series event {} has no series round",
                event.event_id
            ))
        })?;

        let enrollment = enrollments.get(&result.enrollment_id).ok_or_else(|| {
            StorageError::Integrity(format!(
                "result references unknown enrollment {}",
                result.enrollment_id
            ))
        })?;
        let kind = resolver::resolve(enrollment, &rosters)?;

        for &fisher_id in kind.credited_fishers() {
            if !club_members.contains(&fisher_id) {
                continue;
            }
            let candidate = EventCredit {
                event_id: event.event_id,
                series_round,
                points,
            };
            best.entry((fisher_id, event.event_id))
                .and_modify(|credit| {
                    if candidate.points < credit.points {
                        *credit = candidate;
                    }
                })
                .or_insert(candidate);
        }
    }

    let mut credits: HashMap<Uuid, Vec<EventCredit>> = HashMap::new();
    for ((fisher_id, _), credit) in best {
        credits.entry(fisher_id).or_default().push(credit);
    }

    Ok(credits)
}
