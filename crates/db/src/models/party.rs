//! Party master model and DTOs.
//!
//! A party owns its addresses, contact persons, account details, bank
//! details and product / payment-term links. [`CreateParty`] carries the
//! optional dependents so the whole aggregate can be written in one
//! transaction; [`PartyDetail`] is the nested read model.

use netage_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::account_details::{CreatePartyAccountDetails, PartyAccountDetails};
use crate::models::address::{CreatePartyAddress, PartyAddress};
use crate::models::bank_details::{BankDetails, CreateBankDetails};
use crate::models::contact::{ContactPerson, CreateContactPerson};
use crate::models::party_payment_term::PartyPaymentTermDetail;
use crate::models::party_product::PartyProductDetail;
use crate::models::{double_option, null_as_empty};

/// A row from the `party_master` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Party {
    pub party_id: DbId,
    pub party_code: String,
    pub party_name: String,
    pub type_of_firm: String,
    pub email_id: String,
    pub mobile_number: String,
    pub gst_number: Option<String>,
    pub fssai_number: Option<String>,
    pub pan_number: String,
    pub tan_number: Option<String>,
    pub credit_limit: Option<Decimal>,
    pub credit_days: Option<i32>,
    pub udyam_aadhar_number: Option<String>,
    pub court_case_pending: bool,
    pub billing_same_as_shipping: bool,
    pub turnover_declaration_certificate: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a party together with its dependents.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateParty {
    #[validate(length(max = 20), custom(function = "netage_core::party::not_blank"))]
    pub party_code: String,
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub party_name: String,
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub type_of_firm: String,
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub email_id: String,
    #[validate(length(max = 15), custom(function = "netage_core::party::not_blank"))]
    pub mobile_number: String,
    #[validate(length(max = 20))]
    pub gst_number: Option<String>,
    #[validate(length(max = 20))]
    pub fssai_number: Option<String>,
    #[validate(length(max = 20), custom(function = "netage_core::party::not_blank"))]
    pub pan_number: String,
    #[validate(length(max = 20))]
    pub tan_number: Option<String>,
    #[validate(custom(function = "netage_core::party::credit_limit_fits"))]
    pub credit_limit: Option<Decimal>,
    pub credit_days: Option<i32>,
    #[validate(length(max = 20))]
    pub udyam_aadhar_number: Option<String>,
    /// Defaults to `false` if omitted.
    pub court_case_pending: Option<bool>,
    /// Defaults to `false` if omitted.
    pub billing_same_as_shipping: Option<bool>,
    pub turnover_declaration_certificate: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(nested)]
    pub addresses: Vec<CreatePartyAddress>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(nested)]
    pub contact_persons: Vec<CreateContactPerson>,
    #[validate(nested)]
    pub account_details: Option<CreatePartyAccountDetails>,
    #[validate(nested)]
    pub bank_details: Option<CreateBankDetails>,
}

/// DTO for a partial party update.
///
/// Absent fields are left untouched. Nullable columns use a double option so
/// an explicit `null` clears the stored value. `party_code` is immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateParty {
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub party_name: Option<String>,
    #[validate(length(max = 50), custom(function = "netage_core::party::not_blank"))]
    pub type_of_firm: Option<String>,
    #[validate(length(max = 100), custom(function = "netage_core::party::not_blank"))]
    pub email_id: Option<String>,
    #[validate(length(max = 15), custom(function = "netage_core::party::not_blank"))]
    pub mobile_number: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 20))]
    pub gst_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 20))]
    pub fssai_number: Option<Option<String>>,
    #[validate(length(max = 20), custom(function = "netage_core::party::not_blank"))]
    pub pan_number: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 20))]
    pub tan_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(custom(function = "netage_core::party::credit_limit_fits"))]
    pub credit_limit: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub credit_days: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 20))]
    pub udyam_aadhar_number: Option<Option<String>>,
    pub court_case_pending: Option<bool>,
    pub billing_same_as_shipping: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub turnover_declaration_certificate: Option<Option<String>>,
}

impl UpdateParty {
    /// Merge the fields present in this patch into `party`.
    pub fn apply_to(&self, party: &mut Party) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }

        set(&mut party.party_name, &self.party_name);
        set(&mut party.type_of_firm, &self.type_of_firm);
        set(&mut party.email_id, &self.email_id);
        set(&mut party.mobile_number, &self.mobile_number);
        set(&mut party.gst_number, &self.gst_number);
        set(&mut party.fssai_number, &self.fssai_number);
        set(&mut party.pan_number, &self.pan_number);
        set(&mut party.tan_number, &self.tan_number);
        set(&mut party.credit_limit, &self.credit_limit);
        set(&mut party.credit_days, &self.credit_days);
        set(&mut party.udyam_aadhar_number, &self.udyam_aadhar_number);
        set(&mut party.court_case_pending, &self.court_case_pending);
        set(&mut party.billing_same_as_shipping, &self.billing_same_as_shipping);
        set(
            &mut party.turnover_declaration_certificate,
            &self.turnover_declaration_certificate,
        );
    }
}

/// Flattened row for the party listing: the primary contact's name and the
/// primary address's city are resolved in the query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PartySummary {
    pub party_id: DbId,
    pub party_code: String,
    pub party_name: String,
    pub gst_number: Option<String>,
    pub fssai_number: Option<String>,
    pub contact_person: Option<String>,
    pub mobile_number: String,
    pub location: Option<String>,
}

/// A party with every dependent nested.
#[derive(Debug, Clone, Serialize)]
pub struct PartyDetail {
    #[serde(flatten)]
    pub party: Party,
    pub addresses: Vec<PartyAddress>,
    pub contact_persons: Vec<ContactPerson>,
    pub account_details: Option<PartyAccountDetails>,
    pub bank_details: Vec<BankDetails>,
    pub products: Vec<PartyProductDetail>,
    pub payment_terms: Vec<PartyPaymentTermDetail>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use validator::Validate;

    use super::*;

    fn stored_party() -> Party {
        let now = Utc::now();
        Party {
            party_id: 1,
            party_code: "SNET345".to_string(),
            party_name: "LALIT KIRANA (MOTALA)".to_string(),
            type_of_firm: "Sole Proprietorship".to_string(),
            email_id: "lalitkiranastore@gmail.com".to_string(),
            mobile_number: "868-333-4878".to_string(),
            gst_number: Some("24AABCU9603R1ZV".to_string()),
            fssai_number: None,
            pan_number: "ABCDE1234F".to_string(),
            tan_number: None,
            credit_limit: Some(Decimal::new(500_000, 0)),
            credit_days: Some(30),
            udyam_aadhar_number: None,
            court_case_pending: false,
            billing_same_as_shipping: false,
            turnover_declaration_certificate: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn absent_fields_are_left_untouched() {
        let patch: UpdateParty = serde_json::from_str(r#"{"credit_limit": 750000}"#).unwrap();
        let mut party = stored_party();
        patch.apply_to(&mut party);

        assert_eq!(party.credit_limit, Some(Decimal::new(750_000, 0)));
        assert_eq!(party.party_name, "LALIT KIRANA (MOTALA)");
        assert_eq!(party.gst_number.as_deref(), Some("24AABCU9603R1ZV"));
        assert_eq!(party.credit_days, Some(30));
    }

    #[test]
    fn explicit_null_clears_nullable_field() {
        let patch: UpdateParty = serde_json::from_str(r#"{"gst_number": null}"#).unwrap();
        assert_eq!(patch.gst_number, Some(None));

        let mut party = stored_party();
        patch.apply_to(&mut party);
        assert_eq!(party.gst_number, None);
    }

    #[test]
    fn explicit_null_on_required_field_is_ignored() {
        let patch: UpdateParty = serde_json::from_str(r#"{"party_name": null}"#).unwrap();
        let mut party = stored_party();
        patch.apply_to(&mut party);
        assert_eq!(party.party_name, "LALIT KIRANA (MOTALA)");
    }

    #[test]
    fn nested_lists_accept_null_and_absent() {
        let body = r#"{
            "party_code": "SNET1", "party_name": "A", "type_of_firm": "Partnership",
            "email_id": "a@example.com", "mobile_number": "1", "pan_number": "P",
            "addresses": null
        }"#;
        let party: CreateParty = serde_json::from_str(body).unwrap();
        assert!(party.addresses.is_empty());
        assert!(party.contact_persons.is_empty());
        assert!(party.account_details.is_none());
    }

    #[test]
    fn oversized_party_code_fails_validation() {
        let body = r#"{
            "party_code": "THIS-CODE-IS-FAR-TOO-LONG", "party_name": "A",
            "type_of_firm": "Partnership", "email_id": "a@example.com",
            "mobile_number": "1", "pan_number": "P"
        }"#;
        let party: CreateParty = serde_json::from_str(body).unwrap();
        assert!(party.validate().is_err());
    }

    #[test]
    fn nested_address_is_validated() {
        let body = r#"{
            "party_code": "SNET1", "party_name": "A", "type_of_firm": "Partnership",
            "email_id": "a@example.com", "mobile_number": "1", "pan_number": "P",
            "addresses": [{"shipping_address": " ", "country": "India",
                           "state": "Gujarat", "zip_code": "395001"}]
        }"#;
        let party: CreateParty = serde_json::from_str(body).unwrap();
        assert!(party.validate().is_err());
    }

    #[test]
    fn credit_limit_beyond_column_fails_validation() {
        let body = r#"{
            "party_code": "SNET1", "party_name": "A", "type_of_firm": "Partnership",
            "email_id": "a@example.com", "mobile_number": "1", "pan_number": "P",
            "credit_limit": 1e14
        }"#;
        let party: CreateParty = serde_json::from_str(body).unwrap();
        let errors = party.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("credit_limit"));
    }

    #[test]
    fn patched_credit_limit_is_validated() {
        let patch: UpdateParty = serde_json::from_str(r#"{"credit_limit": 1e14}"#).unwrap();
        assert!(patch.validate().is_err());

        let patch: UpdateParty = serde_json::from_str(r#"{"credit_limit": null}"#).unwrap();
        assert!(patch.validate().is_ok());

        let patch: UpdateParty = serde_json::from_str(r#"{"credit_limit": 1250.5}"#).unwrap();
        assert!(patch.validate().is_ok());
    }
}
