use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use netage_core::party::MASTER_TYPE_EXISTS;
use netage_db::constraints;
use netage_db::models::master_type::{CreateMasterType, MasterType};
use netage_db::repositories::MasterTypeRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /master-types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMasterType>,
) -> AppResult<(StatusCode, Json<MasterType>)> {
    input.validate()?;
    let master_type = MasterTypeRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::conflict_on(e, constraints::MASTER_TYPE_NAME, MASTER_TYPE_EXISTS))?;
    tracing::info!(type_id = master_type.type_id, "Master type created");
    Ok((StatusCode::CREATED, Json(master_type)))
}

/// GET /master-types
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MasterType>>> {
    let types = MasterTypeRepo::list(&state.pool).await?;
    Ok(Json(types))
}
