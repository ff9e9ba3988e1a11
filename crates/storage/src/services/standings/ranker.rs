use std::cmp::Ordering;
use std::collections::HashMap;

use uuid::Uuid;

use super::StandingsRules;
use super::credit::EventCredit;

/// One credited event in a fisher's worst-to-best ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEvent {
    pub event_id: Uuid,
    pub series_round: i16,
    pub points: i32,
    /// 1-based position in the worst-to-best ordering; rank 1 is the single
    /// worst event.
    pub drop_rank: u32,
    pub dropped: bool,
}

/// A fisher's full season line before the publication gates are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FisherSeries {
    pub fisher_id: Uuid,
    pub events: Vec<RankedEvent>,
    pub total_events: u32,
    pub net_points: i32,
    pub gross_points: i32,
    pub worst_point: i32,
    pub last_series_round: i16,
}

/// Worst-to-best ordering of a fisher's credits: numerically highest points
/// first (points are placement-style, so highest is worst), ties broken by
/// ascending event id. The tie-break only makes the ordering deterministic;
/// it encodes no scoring preference.
pub fn worse_first(a: &EventCredit, b: &EventCredit) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| a.event_id.cmp(&b.event_id))
}

/// Order each fisher's credits worst to best and apply the drop rule: once a
/// fisher has fished `min_events` or more, the `drop_count` worst ranked
/// slots are excluded from the net total. The drop is over ranked slots, not
/// distinct values, so ties at the worst rank still drop exactly
/// `drop_count` events.
pub fn rank_fishers(
    credits: HashMap<Uuid, Vec<EventCredit>>,
    rules: &StandingsRules,
) -> Vec<FisherSeries> {
    let mut series: Vec<FisherSeries> = credits
        .into_iter()
        .filter(|(_, events)| !events.is_empty())
        .map(|(fisher_id, mut events)| {
            events.sort_by(worse_first);

            let total_events = events.len() as u32;
            let drops = if total_events >= rules.min_events {
                rules.drop_count as usize
            } else {
                0
            };

            let events: Vec<RankedEvent> = events
                .iter()
                .enumerate()
                .map(|(index, credit)| RankedEvent {
                    event_id: credit.event_id,
                    series_round: credit.series_round,
                    points: credit.points,
                    drop_rank: index as u32 + 1,
                    dropped: index < drops,
                })
                .collect();

            let gross_points = events.iter().map(|event| event.points).sum();
            let net_points = events
                .iter()
                .filter(|event| !event.dropped)
                .map(|event| event.points)
                .sum();
            let worst_point = events[0].points;
            let last_series_round = events
                .iter()
                .map(|event| event.series_round)
                .max()
                .unwrap_or(0);

            FisherSeries {
                fisher_id,
                events,
                total_events,
                net_points,
                gross_points,
                worst_point,
                last_series_round,
            }
        })
        .collect();

    // Deterministic output order, so recomputation on the same snapshot is
    // byte-identical.
    series.sort_by_key(|fisher| fisher.fisher_id);
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::standings::testutil::{credit, id};

    fn rules() -> StandingsRules {
        StandingsRules::default()
    }

    fn rank_one(credits: Vec<EventCredit>) -> FisherSeries {
        let mut map = HashMap::new();
        map.insert(id(10), credits);
        rank_fishers(map, &rules()).remove(0)
    }

    #[test]
    fn comparator_orders_highest_points_first() {
        let worse = credit(100, 1, 15);
        let better = credit(101, 2, 6);
        assert_eq!(worse_first(&worse, &better), Ordering::Less);
        assert_eq!(worse_first(&better, &worse), Ordering::Greater);
    }

    #[test]
    fn comparator_breaks_ties_by_ascending_event_id() {
        let a = credit(100, 1, 10);
        let b = credit(101, 2, 10);
        assert_eq!(worse_first(&a, &b), Ordering::Less);
        assert_eq!(worse_first(&b, &a), Ordering::Greater);
        assert_eq!(worse_first(&a, &a), Ordering::Equal);
    }

    #[test]
    fn five_events_drop_the_two_worst() {
        // Points 10, 8, 15, 6, 9 over rounds 1-5: worst-to-best is
        // 15, 10, 9, 8, 6; the 15 and the 10 are dropped.
        let series = rank_one(vec![
            credit(100, 1, 10),
            credit(101, 2, 8),
            credit(102, 3, 15),
            credit(103, 4, 6),
            credit(104, 5, 9),
        ]);

        assert_eq!(series.total_events, 5);
        assert_eq!(series.net_points, 23);
        assert_eq!(series.gross_points, 48);
        assert_eq!(series.worst_point, 15);
        assert_eq!(series.last_series_round, 5);

        let dropped: Vec<i32> = series
            .events
            .iter()
            .filter(|event| event.dropped)
            .map(|event| event.points)
            .collect();
        assert_eq!(dropped, vec![15, 10]);

        let ranks: Vec<u32> = series.events.iter().map(|event| event.drop_rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn below_threshold_nothing_is_dropped() {
        let series = rank_one(vec![
            credit(100, 1, 10),
            credit(101, 2, 8),
            credit(102, 3, 15),
            credit(103, 4, 6),
        ]);

        assert_eq!(series.total_events, 4);
        assert!(series.events.iter().all(|event| !event.dropped));
        assert_eq!(series.net_points, series.gross_points);
        assert_eq!(series.worst_point, 15);
    }

    #[test]
    fn ties_at_the_worst_rank_still_drop_exactly_two_events() {
        // Three events tied at 12: the drop applies to ranked slots, so two
        // of the tied events go and the third stays.
        let series = rank_one(vec![
            credit(100, 1, 12),
            credit(101, 2, 12),
            credit(102, 3, 12),
            credit(103, 4, 5),
            credit(104, 5, 4),
        ]);

        assert_eq!(series.events.iter().filter(|event| event.dropped).count(), 2);
        assert_eq!(series.net_points, 12 + 5 + 4);
        // Tie-break puts the lowest event ids first among the 12s.
        assert_eq!(series.events[0].event_id, id(100));
        assert_eq!(series.events[1].event_id, id(101));
    }

    #[test]
    fn output_is_sorted_by_fisher_id() {
        let mut map = HashMap::new();
        map.insert(id(11), vec![credit(100, 1, 3)]);
        map.insert(id(10), vec![credit(100, 1, 4)]);
        let series = rank_fishers(map, &rules());
        assert_eq!(series[0].fisher_id, id(10));
        assert_eq!(series[1].fisher_id, id(11));
    }
}
