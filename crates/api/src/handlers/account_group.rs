use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use netage_core::party::ACCOUNT_GROUP_EXISTS;
use netage_db::constraints;
use netage_db::models::account_group::{AccountGroup, CreateAccountGroup};
use netage_db::repositories::AccountGroupRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /account-groups
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAccountGroup>,
) -> AppResult<(StatusCode, Json<AccountGroup>)> {
    input.validate()?;
    let group = AccountGroupRepo::create(&state.pool, &input)
        .await
        .map_err(|e| {
            AppError::conflict_on(e, constraints::ACCOUNT_GROUP_PAIR, ACCOUNT_GROUP_EXISTS)
        })?;
    tracing::info!(group_id = group.group_id, "Account group created");
    Ok((StatusCode::CREATED, Json(group)))
}

/// GET /account-groups
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AccountGroup>>> {
    let groups = AccountGroupRepo::list(&state.pool).await?;
    Ok(Json(groups))
}
