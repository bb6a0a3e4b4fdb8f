//! # Session
//!
//! The entry point the shell talks to. A session owns its catalog, its
//! pricing policy and its record store for as long as the process runs.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shell call                       Session                               │
//! │  ──────────                       ───────                               │
//! │  lookup_product(code)        ──►  catalog.lookup                        │
//! │  add_purchase(code, qty, m)  ──►  validate → lookup → snapshot → append │
//! │  all_records()               ──►  store.records (read only)             │
//! │  compute_total(records)      ──►  pricing.total                         │
//! │  search(keyword)             ──►  search::search over the store         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::PricingPolicy;
use crate::search::{self, SearchOutcome};
use crate::store::RecordStore;
use crate::types::{Product, PurchaseRecord};
use crate::validation::{validate_code, validate_quantity, validate_shipping_method};

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: Catalog,
    pricing: PricingPolicy,
    store: RecordStore,
}

impl Session {
    /// Starts an empty session.
    pub fn new(catalog: Catalog, pricing: PricingPolicy) -> Self {
        Session {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            catalog,
            pricing,
            store: RecordStore::new(),
        }
    }

    /// Empty session over the standard catalog and default pricing.
    pub fn standard() -> CoreResult<Self> {
        Ok(Session::new(Catalog::standard()?, PricingPolicy::default()))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn lookup_product(&self, code: i64) -> Option<&Product> {
        self.catalog.lookup(code)
    }

    /// Validates raw input, snapshots the product, and records the purchase.
    ///
    /// ## Checks, in prompt order
    /// 1. code within 0..=39
    /// 2. code present in the catalog
    /// 3. quantity within 1..=49
    /// 4. shipping method exactly `Pick-up` or `Delivery`
    ///
    /// Nothing is appended unless every check passes.
    pub fn add_purchase(
        &mut self,
        code: i64,
        quantity: i64,
        shipping_method: &str,
    ) -> Result<PurchaseRecord, ValidationError> {
        let code = validate_code(code)?;
        let product = self
            .catalog
            .lookup(code as i64)
            .ok_or(ValidationError::UnknownProduct { code })?;
        let quantity = validate_quantity(quantity)?;
        let shipping_method = validate_shipping_method(shipping_method)?;

        let record = PurchaseRecord::from_product(product, quantity, shipping_method);
        self.store.append(record.clone());
        Ok(record)
    }

    /// Every record in insertion order.
    pub fn all_records(&self) -> &[PurchaseRecord] {
        self.store.records()
    }

    /// Total of any record sequence under this session's pricing.
    pub fn compute_total<'a, I>(&self, records: I) -> Money
    where
        I: IntoIterator<Item = &'a PurchaseRecord>,
    {
        self.pricing.total(records)
    }

    /// Total of the whole store.
    pub fn total(&self) -> Money {
        self.pricing.total(&self.store)
    }

    /// Searches the store by product name.
    pub fn search(&self, keyword: &str) -> CoreResult<SearchOutcome> {
        search::search(&self.store, keyword, &self.pricing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::{ShippingMethod, ValueTier};

    #[test]
    fn test_add_purchase_resolves_catalog_fields() {
        let mut session = Session::standard().unwrap();

        let record = session.add_purchase(4, 2, "Delivery").unwrap();
        assert_eq!(record.name, "Knife Block Set");
        assert_eq!(record.value_tier, ValueTier::High);
        assert_eq!(record.unit_price, Money::from_cents(9995));
        assert_eq!(record.shipping_method, ShippingMethod::Delivery);

        assert_eq!(session.all_records(), &[record]);
        assert_eq!(session.total(), Money::from_cents(22389));
    }

    #[test]
    fn test_code_zero_is_accepted() {
        let mut session = Session::standard().unwrap();
        let record = session.add_purchase(0, 3, "Delivery").unwrap();
        assert_eq!(record.name, "Salad Server Set");
        assert_eq!(session.total(), Money::from_cents(6171));
    }

    #[test]
    fn test_invalid_input_appends_nothing() {
        let mut session = Session::standard().unwrap();

        assert!(matches!(
            session.add_purchase(40, 1, "Pick-up"),
            Err(ValidationError::OutOfRange { field: "code", .. })
        ));
        assert!(matches!(
            session.add_purchase(3, 50, "Pick-up"),
            Err(ValidationError::OutOfRange { field: "quantity", .. })
        ));
        assert!(matches!(
            session.add_purchase(3, 1, "pick-up"),
            Err(ValidationError::NotAllowed { .. })
        ));
        assert!(session.all_records().is_empty());
        assert!(session.total().is_zero());
    }

    #[test]
    fn test_unknown_product_in_small_catalog() {
        let catalog = Catalog::new(vec![Product::new(1, "Apron", Money::from_cents(2995))]).unwrap();
        let mut session = Session::new(catalog, PricingPolicy::default());

        assert_eq!(
            session.add_purchase(2, 1, "Pick-up"),
            Err(ValidationError::UnknownProduct { code: 2 })
        );
        assert!(session.lookup_product(2).is_none());
        assert!(session.lookup_product(1).is_some());
    }

    #[test]
    fn test_compute_total_over_subset() {
        let mut session = Session::standard().unwrap();
        session.add_purchase(4, 2, "Pick-up").unwrap();
        session.add_purchase(8, 1, "Pick-up").unwrap();

        let first = &session.all_records()[..1];
        assert_eq!(session.compute_total(first), Money::from_cents(19990));
        assert_eq!(session.compute_total(session.all_records()), session.total());
    }

    #[test]
    fn test_search_through_session() {
        let mut session = Session::standard().unwrap();
        session.add_purchase(16, 2, "Pick-up").unwrap();
        session.add_purchase(16, 3, "Delivery").unwrap();

        let outcome = session.search("teapot").unwrap();
        assert_eq!(outcome.rows().len(), 1);
        assert_eq!(outcome.rows()[0].aggregated_quantity, 5);

        assert_eq!(session.search(" "), Err(CoreError::EmptyKeyword));
        assert_eq!(session.search("grater").unwrap(), SearchOutcome::NoMatches);
    }
}
