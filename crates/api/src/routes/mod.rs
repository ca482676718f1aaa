pub mod health;
pub mod party;
pub mod reference;

use axum::routing::MethodRouter;
use axum::Router;

use crate::state::AppState;

/// Build the full route tree. Everything is mounted at the root.
///
/// ```text
/// /                        welcome
/// /health                  liveness + database probe
///
/// /parties                 party aggregate and dependents
/// /products                product catalogue
/// /payment-terms           payment terms
/// /master-types            firm types
/// /account-groups          chart-of-accounts groups
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(party::router())
        .merge(reference::router())
}

/// Route `path` both with and without a trailing slash.
pub(crate) fn route_with_slash(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}
