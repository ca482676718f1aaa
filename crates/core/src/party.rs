//! Party master business rules.
//!
//! Entity names used in `NotFound` errors, the human-readable conflict
//! messages reported for each unique key, and the few cross-field checks
//! the write paths apply before touching the database.

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Entity names
// ---------------------------------------------------------------------------

pub const ENTITY_PARTY: &str = "Party";
pub const ENTITY_PRODUCT: &str = "Product";
pub const ENTITY_PAYMENT_TERM: &str = "Payment term";
/// Account details are looked up by their owning party, so the id in the
/// message is the party id.
pub const ENTITY_ACCOUNT_DETAILS: &str = "Account details for party";
/// Party-product links are detached by product id.
pub const ENTITY_PARTY_PRODUCT: &str = "Party product";

// ---------------------------------------------------------------------------
// Conflict messages
// ---------------------------------------------------------------------------

pub const PARTY_CODE_EXISTS: &str = "Party code already exists";
pub const PRODUCT_CODE_EXISTS: &str = "Product code already exists";
pub const PRODUCT_ALREADY_ASSIGNED: &str = "Product already assigned to party";
pub const PAYMENT_TERM_ALREADY_ASSIGNED: &str = "Payment term already assigned to party";
pub const ACCOUNT_DETAILS_EXIST: &str = "Account details already exist for this party";
pub const MASTER_TYPE_EXISTS: &str = "Master type already exists";
pub const ACCOUNT_GROUP_EXISTS: &str = "Account group already exists";

pub const ACCOUNT_NUMBER_MISMATCH: &str = "Account numbers do not match";

pub const PARTY_DELETED: &str = "Party deleted successfully";
pub const PRODUCT_REMOVED: &str = "Product removed from party successfully";

// ---------------------------------------------------------------------------
// Numeric column shapes
// ---------------------------------------------------------------------------

/// `parties.credit_limit` is `NUMERIC(15,2)`.
pub const CREDIT_LIMIT_PRECISION: u32 = 15;
pub const CREDIT_LIMIT_SCALE: u32 = 2;
/// `payment_terms.cash_discount` is `NUMERIC(5,2)`.
pub const CASH_DISCOUNT_PRECISION: u32 = 5;
pub const CASH_DISCOUNT_SCALE: u32 = 2;

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// A bank account is only accepted when its number was typed identically
/// twice. The comparison is exact (no trimming, case-sensitive).
pub fn ensure_account_numbers_match(
    account_number: &str,
    confirm_account_number: &str,
) -> Result<(), CoreError> {
    if account_number == confirm_account_number {
        Ok(())
    } else {
        Err(CoreError::Validation(ACCOUNT_NUMBER_MISMATCH.to_string()))
    }
}

/// `validator` hook for required text fields: rejects empty and
/// whitespace-only values.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Whether `value` can be stored in a `NUMERIC(precision, scale)` column
/// without rounding or overflow. Trailing zeros do not count towards the
/// scale, so `10.50` fits a scale of 1.
pub fn fits_numeric(value: &Decimal, precision: u32, scale: u32) -> bool {
    if value.normalize().scale() > scale {
        return false;
    }
    let integer_digits = precision.saturating_sub(scale);
    match 10u64.checked_pow(integer_digits) {
        Some(bound) => value.abs() < Decimal::from(bound),
        None => true,
    }
}

fn numeric_error(precision: u32, scale: u32) -> ValidationError {
    let mut err = ValidationError::new("numeric_range");
    err.message = Some(
        format!(
            "must have at most {} integer digits and {scale} decimal places",
            precision - scale
        )
        .into(),
    );
    err.add_param("precision".into(), &precision);
    err.add_param("scale".into(), &scale);
    err
}

/// `validator` hook for party credit limits.
pub fn credit_limit_fits(value: &Decimal) -> Result<(), ValidationError> {
    if fits_numeric(value, CREDIT_LIMIT_PRECISION, CREDIT_LIMIT_SCALE) {
        Ok(())
    } else {
        Err(numeric_error(CREDIT_LIMIT_PRECISION, CREDIT_LIMIT_SCALE))
    }
}

/// `validator` hook for payment term cash discounts.
pub fn cash_discount_fits(value: &Decimal) -> Result<(), ValidationError> {
    if fits_numeric(value, CASH_DISCOUNT_PRECISION, CASH_DISCOUNT_SCALE) {
        Ok(())
    } else {
        Err(numeric_error(CASH_DISCOUNT_PRECISION, CASH_DISCOUNT_SCALE))
    }
}
