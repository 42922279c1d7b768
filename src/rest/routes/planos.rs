use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    db::models::{PlanoEstudos, PlanoEstudosCreate},
    error::ApiError,
    AppState,
};

pub async fn list_planos(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanoEstudos>>, ApiError> {
    Ok(Json(state.db.list_planos().await?))
}

pub async fn create_plano(
    State(state): State<AppState>,
    Json(input): Json<PlanoEstudosCreate>,
) -> Result<Json<PlanoEstudos>, ApiError> {
    let plano = PlanoEstudos::from(input);
    state.db.insert_plano(&plano).await?;
    Ok(Json(plano))
}

pub async fn get_plano(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlanoEstudos>, ApiError> {
    match state.db.get_plano(&id).await? {
        Some(plano) => Ok(Json(plano)),
        None => Err(ApiError::NotFound(
            "Plano de estudos não encontrado".to_string(),
        )),
    }
}
