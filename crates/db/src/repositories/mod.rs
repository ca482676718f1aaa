//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Read paths accept `&PgPool`; inserts for party dependents accept any
//! Postgres executor so they can run inside the aggregate transaction.

pub mod account_details_repo;
pub mod account_group_repo;
pub mod address_repo;
pub mod bank_details_repo;
pub mod contact_repo;
pub mod master_type_repo;
pub mod party_payment_term_repo;
pub mod party_product_repo;
pub mod party_repo;
pub mod payment_term_repo;
pub mod product_repo;

pub use account_details_repo::PartyAccountDetailsRepo;
pub use account_group_repo::AccountGroupRepo;
pub use address_repo::PartyAddressRepo;
pub use bank_details_repo::BankDetailsRepo;
pub use contact_repo::ContactPersonRepo;
pub use master_type_repo::MasterTypeRepo;
pub use party_payment_term_repo::PartyPaymentTermRepo;
pub use party_product_repo::PartyProductRepo;
pub use party_repo::PartyRepo;
pub use payment_term_repo::PaymentTermRepo;
pub use product_repo::ProductRepo;
