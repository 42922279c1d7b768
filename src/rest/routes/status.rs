use axum::{extract::State, Json};

use crate::{
    db::models::{StatusCheck, StatusCheckCreate},
    error::ApiError,
    AppState,
};

pub async fn create_status_check(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ApiError> {
    let check = StatusCheck::from(input);
    state.db.insert_status_check(&check).await?;
    Ok(Json(check))
}

pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    Ok(Json(state.db.list_status_checks().await?))
}
