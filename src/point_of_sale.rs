//! Checkout service.
//!
//! [`PointOfSale`] runs a checkout end to end: validate the request against
//! the catalog, build the agreement, save it, and hand it back.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::calculation::validate_checkout;
use crate::config::ToolCatalog;
use crate::error::EngineResult;
use crate::models::{ContractRequest, RentalAgreement, RentalPolicy};
use crate::store::AgreementStore;

/// A completed checkout.
#[derive(Debug, Clone)]
pub struct Checkout {
    /// Identifier the agreement was stored under.
    pub agreement_id: Uuid,
    /// The priced agreement.
    pub agreement: RentalAgreement,
}

/// Checks tools out against a catalog and records the agreements.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use rental_engine::config::CatalogLoader;
/// use rental_engine::models::ContractRequest;
/// use rental_engine::point_of_sale::PointOfSale;
/// use rental_engine::store::InMemoryAgreementStore;
/// use chrono::NaiveDate;
///
/// let pos = PointOfSale::new(
///     Arc::new(CatalogLoader::load("./config/catalog")?),
///     Arc::new(InMemoryAgreementStore::new()),
/// );
/// let checkout = pos.checkout(&ContractRequest {
///     tool_code: "LADW".to_string(),
///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
///     rental_day_count: 3,
///     discount_percent: 10,
/// })?;
/// print!("{}", checkout.agreement);
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
#[derive(Clone)]
pub struct PointOfSale {
    catalog: Arc<dyn ToolCatalog>,
    store: Arc<dyn AgreementStore>,
}

impl PointOfSale {
    /// Creates a point of sale over a catalog and an agreement store.
    pub fn new(catalog: Arc<dyn ToolCatalog>, store: Arc<dyn AgreementStore>) -> Self {
        Self { catalog, store }
    }

    /// Returns every rentable tool, sorted by tool code.
    pub fn list_tools(&self) -> EngineResult<Vec<RentalPolicy>> {
        self.catalog.list_tools()
    }

    /// Validates the request, builds the agreement and saves it.
    ///
    /// # Errors
    ///
    /// Validation errors from
    /// [`validate_checkout`](crate::calculation::validate_checkout),
    /// [`EngineError::ToolCodeMismatch`](crate::error::EngineError::ToolCodeMismatch)
    /// if the catalog resolves a code to another tool's policy, and catalog
    /// or store failures, all unchanged. Nothing is saved on error.
    pub fn checkout(&self, request: &ContractRequest) -> EngineResult<Checkout> {
        let validated = validate_checkout(request, self.catalog.as_ref())?;
        let agreement = RentalAgreement::from_validated(&validated)?;
        let stored = self.store.save(&agreement)?;

        info!(
            agreement_id = %stored.id,
            tool_code = %agreement.tool_code(),
            final_charge = %agreement.final_charge(),
            "Rental agreement created\n{}",
            agreement
        );

        Ok(Checkout {
            agreement_id: stored.id,
            agreement,
        })
    }

    /// Returns the agreement store.
    pub fn store(&self) -> &dyn AgreementStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogLoader;
    use crate::error::EngineError;
    use crate::models::ChargeableDays;
    use crate::store::InMemoryAgreementStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn request(tool_code: &str, checkout: &str, days: i64, percent: i64) -> ContractRequest {
        ContractRequest {
            tool_code: tool_code.to_string(),
            checkout_date: make_date(checkout),
            rental_day_count: days,
            discount_percent: percent,
        }
    }

    fn point_of_sale() -> PointOfSale {
        PointOfSale::new(
            Arc::new(CatalogLoader::load("./config/catalog").unwrap()),
            Arc::new(InMemoryAgreementStore::new()),
        )
    }

    /// Resolves every code to the chainsaw policy.
    struct MiswiredCatalog;

    impl ToolCatalog for MiswiredCatalog {
        fn lookup(&self, _tool_code: &str) -> EngineResult<Option<RentalPolicy>> {
            Ok(Some(RentalPolicy {
                tool_code: "CHNS".to_string(),
                tool_type: "Chainsaw".to_string(),
                brand: "Stihl".to_string(),
                daily_charge: dec("1.49"),
                chargeable_days: ChargeableDays {
                    weekday: true,
                    weekend: false,
                    holiday: true,
                },
            }))
        }

        fn list_tools(&self) -> EngineResult<Vec<RentalPolicy>> {
            Ok(Vec::new())
        }
    }

    /// Fails every lookup.
    struct UnavailableCatalog;

    impl ToolCatalog for UnavailableCatalog {
        fn lookup(&self, _tool_code: &str) -> EngineResult<Option<RentalPolicy>> {
            Err(EngineError::ConfigNotFound {
                path: "catalog offline".to_string(),
            })
        }

        fn list_tools(&self) -> EngineResult<Vec<RentalPolicy>> {
            self.lookup("").map(|_| Vec::new())
        }
    }

    #[test]
    fn test_checkout_saves_agreement() {
        let pos = point_of_sale();
        let checkout = pos.checkout(&request("LADW", "2020-07-02", 3, 10)).unwrap();

        assert_eq!(checkout.agreement.final_charge(), dec("3.58"));
        let stored = pos.store().get(checkout.agreement_id).unwrap().unwrap();
        assert_eq!(stored.agreement, checkout.agreement);
    }

    #[test]
    fn test_failed_checkout_saves_nothing() {
        let pos = point_of_sale();

        assert!(pos.checkout(&request("JAKR", "2015-09-03", 5, 101)).is_err());
        assert!(pos.checkout(&request("INVD", "2015-09-03", 5, 0)).is_err());
        assert!(pos.store().list().unwrap().is_empty());
    }

    #[test]
    fn test_list_tools_sorted() {
        let codes: Vec<String> = point_of_sale()
            .list_tools()
            .unwrap()
            .into_iter()
            .map(|policy| policy.tool_code)
            .collect();
        assert_eq!(codes, vec!["CHNS", "JAKD", "JAKR", "LADW"]);
    }

    #[test]
    fn test_miswired_catalog_is_a_consistency_error() {
        let pos = PointOfSale::new(
            Arc::new(MiswiredCatalog),
            Arc::new(InMemoryAgreementStore::new()),
        );

        let error = pos.checkout(&request("LADW", "2020-07-02", 3, 10)).unwrap_err();
        assert!(matches!(error, EngineError::ToolCodeMismatch { .. }));
        assert!(!error.is_validation());
        assert!(pos.store().list().unwrap().is_empty());
    }

    #[test]
    fn test_catalog_failure_propagates() {
        let pos = PointOfSale::new(
            Arc::new(UnavailableCatalog),
            Arc::new(InMemoryAgreementStore::new()),
        );

        assert!(matches!(
            pos.checkout(&request("LADW", "2020-07-02", 3, 10)),
            Err(EngineError::ConfigNotFound { .. })
        ));
        assert!(pos.list_tools().is_err());
    }

    #[test]
    fn test_longest_rental_keeps_audit_trace_small() {
        let pos = point_of_sale();
        let days = (NaiveDate::MAX - make_date("2020-07-02")).num_days();

        let checkout = pos.checkout(&request("LADW", "2020-07-02", days, 0)).unwrap();

        assert_eq!(checkout.agreement.due_date(), NaiveDate::MAX);
        let trace = serde_json::to_vec(checkout.agreement.audit_trace()).unwrap();
        assert!(trace.len() < 4096, "audit trace is {} bytes", trace.len());

        let charge_days = checkout
            .agreement
            .audit_trace()
            .steps
            .iter()
            .find(|step| step.rule_id == "charge_days")
            .unwrap();
        assert!(charge_days.output["observed_holiday_count"].as_u64().unwrap() > 100_000);
    }

    #[test]
    fn test_validation_precedes_catalog_access() {
        let pos = PointOfSale::new(
            Arc::new(UnavailableCatalog),
            Arc::new(InMemoryAgreementStore::new()),
        );

        assert!(matches!(
            pos.checkout(&request("LADW", "2020-07-02", 0, 10)),
            Err(EngineError::InvalidRentalDayCount { .. })
        ));
    }
}
