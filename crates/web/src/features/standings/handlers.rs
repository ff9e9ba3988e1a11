use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::standings::StandingsFilter};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/standings",
    params(StandingsFilter),
    responses(
        (status = 200, description = "Published season standings", body = storage::dto::standings::StandingsResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 404, description = "Unknown season or discipline")
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(db): State<Database>,
    Query(filter): Query<StandingsFilter>,
) -> Result<Response, WebError> {
    filter.validate()?;

    let response = services::get_standings(db.pool(), &filter).await?;

    Ok(Json(response).into_response())
}
