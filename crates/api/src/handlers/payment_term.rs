//! Handlers for `/payment-terms`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use netage_db::models::payment_term::{CreatePaymentTerm, PaymentTerm};
use netage_db::repositories::PaymentTermRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /payment-terms
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePaymentTerm>,
) -> AppResult<(StatusCode, Json<PaymentTerm>)> {
    input.validate()?;
    let term = PaymentTermRepo::create(&state.pool, &input).await?;
    tracing::info!(term_id = term.term_id, "Payment term created");
    Ok((StatusCode::CREATED, Json(term)))
}

/// GET /payment-terms
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PaymentTerm>>> {
    let terms = PaymentTermRepo::list(&state.pool).await?;
    Ok(Json(terms))
}
