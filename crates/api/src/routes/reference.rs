//! Route definitions for the reference data tables.

use axum::routing::get;
use axum::Router;

use crate::handlers::{account_group, master_type, payment_term, product};
use crate::routes::route_with_slash;
use crate::state::AppState;

/// ```text
/// GET    /products          -> list (?skip=&limit=&search=)
/// POST   /products          -> create
/// GET    /payment-terms     -> list
/// POST   /payment-terms     -> create
/// GET    /master-types      -> list
/// POST   /master-types      -> create
/// GET    /account-groups    -> list
/// POST   /account-groups    -> create
/// ```
pub fn router() -> Router<AppState> {
    let mut router = Router::new();
    for (path, method_router) in [
        ("/products", get(product::list).post(product::create)),
        (
            "/payment-terms",
            get(payment_term::list).post(payment_term::create),
        ),
        (
            "/master-types",
            get(master_type::list).post(master_type::create),
        ),
        (
            "/account-groups",
            get(account_group::list).post(account_group::create),
        ),
    ] {
        router = route_with_slash(router, path, method_router);
    }
    router
}
