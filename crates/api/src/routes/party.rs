//! Route definitions for the `/parties` resource and its dependents.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{
    account_details, address, bank_details, contact, party, party_payment_term, party_product,
};
use crate::routes::route_with_slash;
use crate::state::AppState;

/// Routes mounted at `/parties`. Each path also answers with a trailing slash.
///
/// ```text
/// GET    /parties                                 -> list
/// POST   /parties                                 -> create
/// GET    /parties/{id}                            -> get_by_id
/// PUT    /parties/{id}                            -> update
/// DELETE /parties/{id}                            -> delete
///
/// GET    /parties/{id}/addresses                  -> list_by_party
/// POST   /parties/{id}/addresses                  -> create
/// GET    /parties/{id}/contacts                   -> list_by_party
/// POST   /parties/{id}/contacts                   -> create
/// GET    /parties/{id}/account-details            -> get_by_party
/// POST   /parties/{id}/account-details            -> create
/// GET    /parties/{id}/bank-details               -> list_by_party
/// POST   /parties/{id}/bank-details               -> create
/// GET    /parties/{id}/products                   -> list_by_party
/// POST   /parties/{id}/products                   -> attach
/// DELETE /parties/{id}/products/{product_id}      -> detach
/// GET    /parties/{id}/payment-terms              -> list_by_party
/// POST   /parties/{id}/payment-terms              -> attach
/// ```
pub fn router() -> Router<AppState> {
    let mut router = Router::new();
    for (path, method_router) in [
        ("/parties", get(party::list).post(party::create)),
        (
            "/parties/{id}",
            get(party::get_by_id).put(party::update).delete(party::delete),
        ),
        (
            "/parties/{id}/addresses",
            get(address::list_by_party).post(address::create),
        ),
        (
            "/parties/{id}/contacts",
            get(contact::list_by_party).post(contact::create),
        ),
        (
            "/parties/{id}/account-details",
            get(account_details::get_by_party).post(account_details::create),
        ),
        (
            "/parties/{id}/bank-details",
            get(bank_details::list_by_party).post(bank_details::create),
        ),
        (
            "/parties/{id}/products",
            get(party_product::list_by_party).post(party_product::attach),
        ),
        (
            "/parties/{id}/products/{product_id}",
            delete(party_product::detach),
        ),
        (
            "/parties/{id}/payment-terms",
            get(party_payment_term::list_by_party).post(party_payment_term::attach),
        ),
    ] {
        router = route_with_slash(router, path, method_router);
    }
    router
}
