use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Enrollment, TeamMember};

/// The validated shape of an enrollment: exactly one of the two stored
/// columns is set. Resolving once here means no downstream stage ever
/// re-checks the mutual-exclusion invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentKind {
    Individual { fisher_id: Uuid },
    Team { name: String, members: Vec<Uuid> },
}

impl EnrollmentKind {
    /// The set of fishers this enrollment credits. A team whose roster has
    /// not been populated yet credits nobody.
    pub fn credited_fishers(&self) -> &[Uuid] {
        match self {
            Self::Individual { fisher_id } => std::slice::from_ref(fisher_id),
            Self::Team { members, .. } => members,
        }
    }
}

/// Group team rosters by their owning enrollment.
pub fn rosters(team_members: &[TeamMember]) -> HashMap<Uuid, Vec<Uuid>> {
    let mut rosters: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for member in team_members {
        rosters
            .entry(member.enrollment_id)
            .or_default()
            .push(member.fisher_id);
    }
    rosters
}

/// Resolve a stored enrollment row into its tagged form.
///
/// An enrollment carrying both a fisher and a team name, or neither, means
/// the upstream data is corrupt; that is surfaced as an error rather than
/// patched over.
pub fn resolve(enrollment: &Enrollment, rosters: &HashMap<Uuid, Vec<Uuid>>) -> Result<EnrollmentKind> {
    match (enrollment.fisher_id, enrollment.team_name.as_deref()) {
        (Some(fisher_id), None) => Ok(EnrollmentKind::Individual { fisher_id }),
        (None, Some(name)) => Ok(EnrollmentKind::Team {
            name: name.to_string(),
            members: rosters
                .get(&enrollment.enrollment_id)
                .cloned()
                .unwrap_or_default(),
        }),
        (Some(_), Some(_)) => Err(StorageError::Integrity(format!(
            "enrollment {} references both a fisher and a team",
            enrollment.enrollment_id
        ))),
        (None, None) => Err(StorageError::Integrity(format!(
            "enrollment {} references neither a fisher nor a team",
            enrollment.enrollment_id
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn enrollment(n: u128, fisher: Option<u128>, team: Option<&str>) -> Enrollment {
        Enrollment {
            enrollment_id: id(n),
            event_id: id(900),
            fisher_id: fisher.map(id),
            team_name: team.map(str::to_string),
        }
    }

    #[test]
    fn individual_resolves_to_singleton() {
        let kind = resolve(&enrollment(1, Some(10), None), &HashMap::new()).unwrap();
        assert_eq!(kind, EnrollmentKind::Individual { fisher_id: id(10) });
        assert_eq!(kind.credited_fishers(), &[id(10)]);
    }

    #[test]
    fn team_resolves_to_roster() {
        let members = vec![
            TeamMember { enrollment_id: id(2), fisher_id: id(20) },
            TeamMember { enrollment_id: id(2), fisher_id: id(21) },
        ];
        let kind = resolve(&enrollment(2, None, Some("Lakeview")), &rosters(&members)).unwrap();
        assert_eq!(kind.credited_fishers(), &[id(20), id(21)]);
    }

    #[test]
    fn unpopulated_team_roster_credits_nobody() {
        let kind = resolve(&enrollment(3, None, Some("Lakeview")), &HashMap::new()).unwrap();
        assert!(kind.credited_fishers().is_empty());
    }

    #[test]
    fn both_fisher_and_team_is_an_integrity_error() {
        let err = resolve(&enrollment(4, Some(10), Some("Lakeview")), &HashMap::new());
        assert!(matches!(err, Err(StorageError::Integrity(_))));
    }

    #[test]
    fn neither_fisher_nor_team_is_an_integrity_error() {
        let err = resolve(&enrollment(5, None, None), &HashMap::new());
        assert!(matches!(err, Err(StorageError::Integrity(_))));
    }
}
