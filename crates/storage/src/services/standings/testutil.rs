use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    Discipline, Enrollment, Event, EventResult, EventType, Fisher, FisherType, Season, TeamMember,
};

use super::SeasonSnapshot;
use super::credit::EventCredit;

pub fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn snapshot() -> SeasonSnapshot {
    SeasonSnapshot {
        season: Season {
            season_id: id(1000),
            label: "2025".to_string(),
            starts_on: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ends_on: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        },
        discipline: Discipline {
            discipline_id: id(2000),
            name: "feeder".to_string(),
        },
        events: Vec::new(),
        enrollments: Vec::new(),
        team_members: Vec::new(),
        fishers: Vec::new(),
        results: Vec::new(),
    }
}

pub fn member(n: u128) -> Fisher {
    Fisher {
        fisher_id: id(n),
        name: format!("Fisher {n}"),
        fisher_type: FisherType::ClubMember,
    }
}

pub fn guest(n: u128) -> Fisher {
    Fisher {
        fisher_id: id(n),
        name: format!("Guest {n}"),
        fisher_type: FisherType::Guest,
    }
}

fn starts_at(round: i16) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, round as u32 + 1)
        .unwrap()
        .and_hms_opt(7, 0, 0)
        .unwrap()
}

pub fn series_event(n: u128, round: i16) -> Event {
    Event {
        event_id: id(n),
        event_type: EventType::Series,
        season_id: id(1000),
        discipline_id: Some(id(2000)),
        series_round: Some(round),
        starts_at: starts_at(round),
    }
}

pub fn free_event(n: u128) -> Event {
    Event {
        event_id: id(n),
        event_type: EventType::Free,
        season_id: id(1000),
        discipline_id: None,
        series_round: None,
        starts_at: starts_at(1),
    }
}

pub fn individual(n: u128, event: u128, fisher: u128) -> Enrollment {
    Enrollment {
        enrollment_id: id(n),
        event_id: id(event),
        fisher_id: Some(id(fisher)),
        team_name: None,
    }
}

pub fn team(n: u128, event: u128, name: &str) -> Enrollment {
    Enrollment {
        enrollment_id: id(n),
        event_id: id(event),
        fisher_id: None,
        team_name: Some(name.to_string()),
    }
}

pub fn roster(enrollment: u128, fisher: u128) -> TeamMember {
    TeamMember {
        enrollment_id: id(enrollment),
        fisher_id: id(fisher),
    }
}

pub fn scored(enrollment: u128, event: u128, points: Option<i32>) -> EventResult {
    EventResult {
        enrollment_id: id(enrollment),
        event_id: id(event),
        peg: enrollment as i16,
        weight: Decimal::ZERO,
        sector_rank: points.map(|_| 1),
        overall_rank: points,
        points,
    }
}

pub fn credit(event: u128, round: i16, points: i32) -> EventCredit {
    EventCredit {
        event_id: id(event),
        series_round: round,
        points,
    }
}
