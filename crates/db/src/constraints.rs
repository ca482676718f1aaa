//! Unique constraint names declared in `db/migrations`.
//!
//! Kept in one place so handlers can map a violation to a domain conflict
//! without repeating string literals.

pub const PARTY_CODE: &str = "uq_party_master_party_code";
pub const PRODUCT_CODE: &str = "uq_products_product_code";
pub const PARTY_PRODUCT: &str = "uq_party_products_party_product";
pub const PARTY_PAYMENT_TERM: &str = "uq_party_payment_terms_party_term";
pub const PARTY_ACCOUNT_DETAILS: &str = "uq_party_account_details_party";
pub const MASTER_TYPE_NAME: &str = "uq_master_types_type_name";
pub const ACCOUNT_GROUP_PAIR: &str = "uq_account_groups_main_group_group_name";
