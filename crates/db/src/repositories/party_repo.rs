//! Repository for the `party_master` table and the party aggregate.

use netage_core::types::DbId;
use sqlx::PgPool;

use crate::models::party::{CreateParty, Party, PartyDetail, PartySummary, UpdateParty};
use crate::repositories::{
    BankDetailsRepo, ContactPersonRepo, PartyAccountDetailsRepo, PartyAddressRepo,
    PartyPaymentTermRepo, PartyProductRepo,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "party_id, party_code, party_name, type_of_firm, email_id, \
    mobile_number, gst_number, fssai_number, pan_number, tan_number, credit_limit, \
    credit_days, udyam_aadhar_number, court_case_pending, billing_same_as_shipping, \
    turnover_declaration_certificate, created_at, updated_at";

/// Provides CRUD operations for parties.
pub struct PartyRepo;

impl PartyRepo {
    /// Insert a party together with every dependent in `input`, in one
    /// transaction.
    ///
    /// Any failing insert drops the transaction, so no party is left behind
    /// with a partial set of children. A duplicate code surfaces as a
    /// violation of `uq_party_master_party_code`.
    pub async fn create(pool: &PgPool, input: &CreateParty) -> Result<PartyDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO party_master \
                (party_code, party_name, type_of_firm, email_id, mobile_number, gst_number, \
                 fssai_number, pan_number, tan_number, credit_limit, credit_days, \
                 udyam_aadhar_number, court_case_pending, billing_same_as_shipping, \
                 turnover_declaration_certificate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, \
                     COALESCE($13, FALSE), COALESCE($14, FALSE), $15) \
             RETURNING {COLUMNS}"
        );
        let party = sqlx::query_as::<_, Party>(&query)
            .bind(&input.party_code)
            .bind(&input.party_name)
            .bind(&input.type_of_firm)
            .bind(&input.email_id)
            .bind(&input.mobile_number)
            .bind(&input.gst_number)
            .bind(&input.fssai_number)
            .bind(&input.pan_number)
            .bind(&input.tan_number)
            .bind(input.credit_limit)
            .bind(input.credit_days)
            .bind(&input.udyam_aadhar_number)
            .bind(input.court_case_pending)
            .bind(input.billing_same_as_shipping)
            .bind(&input.turnover_declaration_certificate)
            .fetch_one(&mut *tx)
            .await?;
        let party_id = party.party_id;

        let mut addresses = Vec::with_capacity(input.addresses.len());
        for address in &input.addresses {
            addresses.push(PartyAddressRepo::create(&mut *tx, party_id, address).await?);
        }

        let mut contact_persons = Vec::with_capacity(input.contact_persons.len());
        for contact in &input.contact_persons {
            contact_persons.push(ContactPersonRepo::create(&mut *tx, party_id, contact).await?);
        }

        let account_details = match &input.account_details {
            Some(details) => {
                Some(PartyAccountDetailsRepo::create(&mut *tx, party_id, details).await?)
            }
            None => None,
        };

        let mut bank_details = Vec::new();
        if let Some(bank) = &input.bank_details {
            bank_details.push(BankDetailsRepo::create(&mut *tx, party_id, bank).await?);
        }

        tx.commit().await?;

        Ok(PartyDetail {
            party,
            addresses,
            contact_persons,
            account_details,
            bank_details,
            products: Vec::new(),
            payment_terms: Vec::new(),
        })
    }

    /// Find a party row by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Party>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM party_master WHERE party_id = $1");
        sqlx::query_as::<_, Party>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a party with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM party_master WHERE party_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Find a party with every dependent nested.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<PartyDetail>, sqlx::Error> {
        let Some(party) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        Self::load_detail(pool, party).await.map(Some)
    }

    /// Paginated summary listing ordered by id.
    ///
    /// `pattern` is an `ILIKE` pattern matched against name, code and GST
    /// number. The contact name and location come from the first primary
    /// contact and first primary address; either is null when absent.
    pub async fn list_summaries(
        pool: &PgPool,
        pattern: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PartySummary>, sqlx::Error> {
        sqlx::query_as::<_, PartySummary>(
            "SELECT p.party_id, p.party_code, p.party_name, p.gst_number, p.fssai_number, \
                (SELECT c.name FROM contact_person c \
                  WHERE c.party_id = p.party_id AND c.is_primary \
                  ORDER BY c.contact_id LIMIT 1) AS contact_person, \
                p.mobile_number, \
                (SELECT a.city FROM party_address a \
                  WHERE a.party_id = p.party_id AND a.is_primary \
                  ORDER BY a.address_id LIMIT 1) AS location \
             FROM party_master p \
             WHERE $1::TEXT IS NULL \
                OR p.party_name ILIKE $1 \
                OR p.party_code ILIKE $1 \
                OR p.gst_number ILIKE $1 \
             ORDER BY p.party_id \
             LIMIT $2 OFFSET $3",
        )
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Merge `input` into the stored party and return the refreshed aggregate.
    ///
    /// The row is locked for the read-merge-write. `updated_at` is refreshed
    /// by the table trigger. Returns `None` if the party does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateParty,
    ) -> Result<Option<PartyDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM party_master WHERE party_id = $1 FOR UPDATE");
        let Some(mut party) = sqlx::query_as::<_, Party>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        input.apply_to(&mut party);

        let update = format!(
            "UPDATE party_master SET \
                party_name = $2, type_of_firm = $3, email_id = $4, mobile_number = $5, \
                gst_number = $6, fssai_number = $7, pan_number = $8, tan_number = $9, \
                credit_limit = $10, credit_days = $11, udyam_aadhar_number = $12, \
                court_case_pending = $13, billing_same_as_shipping = $14, \
                turnover_declaration_certificate = $15 \
             WHERE party_id = $1 \
             RETURNING {COLUMNS}"
        );
        let party = sqlx::query_as::<_, Party>(&update)
            .bind(id)
            .bind(&party.party_name)
            .bind(&party.type_of_firm)
            .bind(&party.email_id)
            .bind(&party.mobile_number)
            .bind(&party.gst_number)
            .bind(&party.fssai_number)
            .bind(&party.pan_number)
            .bind(&party.tan_number)
            .bind(party.credit_limit)
            .bind(party.credit_days)
            .bind(&party.udyam_aadhar_number)
            .bind(party.court_case_pending)
            .bind(party.billing_same_as_shipping)
            .bind(&party.turnover_declaration_certificate)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Self::load_detail(pool, party).await.map(Some)
    }

    /// Delete a party. Dependents go with it through the cascading foreign
    /// keys. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM party_master WHERE party_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn load_detail(pool: &PgPool, party: Party) -> Result<PartyDetail, sqlx::Error> {
        let id = party.party_id;
        Ok(PartyDetail {
            addresses: PartyAddressRepo::list_by_party(pool, id).await?,
            contact_persons: ContactPersonRepo::list_by_party(pool, id).await?,
            account_details: PartyAccountDetailsRepo::find_by_party(pool, id).await?,
            bank_details: BankDetailsRepo::list_by_party(pool, id).await?,
            products: PartyProductRepo::list_by_party(pool, id).await?,
            payment_terms: PartyPaymentTermRepo::list_by_party(pool, id).await?,
            party,
        })
    }
}
