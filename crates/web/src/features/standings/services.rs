use sqlx::PgPool;
use storage::{
    dto::standings::{DisciplineInfo, RulesInfo, SeasonInfo, StandingsFilter, StandingsResponse},
    error::Result,
    repository::standings::StandingsRepository,
    services::standings::{self, StandingsRules, publisher},
};

/// Load a consistent snapshot, run the standings pipeline and shape the
/// published view: eligible entries only, lowest net points first.
pub async fn get_standings(pool: &PgPool, filter: &StandingsFilter) -> Result<StandingsResponse> {
    let repo = StandingsRepository::new(pool);
    let snapshot = repo.load_snapshot(&filter.season, &filter.discipline).await?;

    let rules = StandingsRules::default();
    let standings = standings::compute_standings(&snapshot, &rules)?;
    let published = publisher::published_order(standings);

    tracing::debug!(
        season = %snapshot.season.label,
        discipline = %snapshot.discipline.name,
        entries = published.len(),
        "computed season standings"
    );

    Ok(StandingsResponse {
        season: SeasonInfo {
            season_id: snapshot.season.season_id,
            label: snapshot.season.label,
        },
        discipline: DisciplineInfo {
            discipline_id: snapshot.discipline.discipline_id,
            name: snapshot.discipline.name,
        },
        rules: RulesInfo {
            drop_count: rules.drop_count,
            min_events: rules.min_events,
            publication_round: rules.publication_round,
        },
        standings: published,
    })
}
