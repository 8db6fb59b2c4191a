use axum::{
    Json,
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};

use crate::analyzers::{
    self,
    types::{DailyStatistics, MapData, RegionDaily, RegionStatistics, Summary},
};
use crate::boundary::read_boundary;
use crate::server::SharedState;
use crate::server::error::ApiError;

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

#[tracing::instrument(skip(state))]
pub async fn daily_statistics(
    State(state): State<SharedState>,
) -> Result<Json<DailyStatistics>, ApiError> {
    let stats = state.query(analyzers::daily_statistics).await?;
    Ok(Json(stats))
}

#[tracing::instrument(skip(state))]
pub async fn region_statistics(
    State(state): State<SharedState>,
) -> Result<Json<RegionStatistics>, ApiError> {
    let stats = state.query(analyzers::region_statistics).await?;
    Ok(Json(stats))
}

#[tracing::instrument(skip(state))]
pub async fn region_daily(State(state): State<SharedState>) -> Result<Json<RegionDaily>, ApiError> {
    let matrix = state.query(analyzers::region_daily).await?;
    Ok(Json(matrix))
}

#[tracing::instrument(skip(state))]
pub async fn map_data(State(state): State<SharedState>) -> Result<Json<MapData>, ApiError> {
    let map = state.query(analyzers::map_data).await?;
    Ok(Json(map))
}

#[tracing::instrument(skip(state))]
pub async fn summary(State(state): State<SharedState>) -> Result<Json<Summary>, ApiError> {
    let summary = state.query(analyzers::summary).await?;
    Ok(Json(summary))
}

/// Serves the boundary geometry file as-is.
#[tracing::instrument(skip(state))]
pub async fn hongkong_map(State(state): State<SharedState>) -> Result<Response, ApiError> {
    let bytes = read_boundary(&state.boundary_path).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".into())
}
