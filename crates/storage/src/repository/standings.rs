use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{Discipline, Enrollment, Event, EventResult, Fisher, Season, TeamMember};
use crate::services::standings::SeasonSnapshot;

pub struct StandingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StandingsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load everything the standings engine consumes for one
    /// (season, discipline) pair.
    ///
    /// All reads happen inside a single repeatable-read transaction, so a
    /// weigh-in committing mid-computation cannot mix partially written
    /// results into the snapshot.
    pub async fn load_snapshot(
        &self,
        season_label: &str,
        discipline_name: &str,
    ) -> Result<SeasonSnapshot> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let season = sqlx::query_as::<_, Season>(
            "SELECT season_id, label, starts_on, ends_on FROM seasons WHERE label = $1",
        )
        .bind(season_label)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let discipline = sqlx::query_as::<_, Discipline>(
            "SELECT discipline_id, name FROM disciplines WHERE name = $1",
        )
        .bind(discipline_name)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, event_type, season_id, discipline_id, series_round, starts_at
            FROM events
            WHERE season_id = $1 AND discipline_id = $2 AND event_type = 'series'
            ORDER BY series_round
            "#,
        )
        .bind(season.season_id)
        .bind(discipline.discipline_id)
        .fetch_all(&mut *tx)
        .await?;

        let enrollments = sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT en.enrollment_id, en.event_id, en.fisher_id, en.team_name
            FROM enrollments en
            INNER JOIN events ev ON en.event_id = ev.event_id
            WHERE ev.season_id = $1 AND ev.discipline_id = $2 AND ev.event_type = 'series'
            "#,
        )
        .bind(season.season_id)
        .bind(discipline.discipline_id)
        .fetch_all(&mut *tx)
        .await?;

        let team_members = sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT tm.enrollment_id, tm.fisher_id
            FROM team_members tm
            INNER JOIN enrollments en ON tm.enrollment_id = en.enrollment_id
            INNER JOIN events ev ON en.event_id = ev.event_id
            WHERE ev.season_id = $1 AND ev.discipline_id = $2 AND ev.event_type = 'series'
            "#,
        )
        .bind(season.season_id)
        .bind(discipline.discipline_id)
        .fetch_all(&mut *tx)
        .await?;

        let fishers =
            sqlx::query_as::<_, Fisher>("SELECT fisher_id, name, fisher_type FROM fishers")
                .fetch_all(&mut *tx)
                .await?;

        let results = sqlx::query_as::<_, EventResult>(
            r#"
            SELECT r.enrollment_id, r.event_id, r.peg, r.weight,
                   r.sector_rank, r.overall_rank, r.points
            FROM results r
            INNER JOIN events ev ON r.event_id = ev.event_id
            WHERE ev.season_id = $1 AND ev.discipline_id = $2 AND ev.event_type = 'series'
            "#,
        )
        .bind(season.season_id)
        .bind(discipline.discipline_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(SeasonSnapshot {
            season,
            discipline,
            events,
            enrollments,
            team_members,
            fishers,
            results,
        })
    }
}
