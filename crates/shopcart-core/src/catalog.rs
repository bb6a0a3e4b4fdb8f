//! # Catalog
//!
//! The fixed product table, loaded once at startup and never mutated.
//!
//! Products keep their table order for listing; lookups go through a
//! code-keyed index.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_code, validate_product_name, validate_unit_price};

/// The standard kitchenware table: `(code, name, price in cents)`.
const STANDARD_PRODUCTS: &[(u32, &str, i64)] = &[
    (0, "Salad Server Set", 1870),
    (1, "Party Serviette Holder", 1195),
    (2, "Tea Set", 3995),
    (3, "Mixing Bowl Set", 4995),
    (4, "Knife Block Set", 9995),
    (5, "Coffee Capsule Holder", 2995),
    (6, "Plastic Sensor Soap Pump", 7995),
    (7, "Storage Bucket", 2495),
    (8, "Oven Glove", 995),
    (9, "Apron", 2995),
    (10, "Biscuit Barrel", 1995),
    (11, "Chopping Board", 1295),
    (12, "Carioca Cups", 5495),
    (13, "Soup Bowls", 4300),
    (14, "Elevate Wood Turner", 1995),
    (15, "Pasta Machine", 11495),
    (16, "Teapot", 2995),
    (17, "Cake Pop Scoop", 995),
    (18, "Cookbook Stand", 3495),
    (19, "Chocolate Station", 3495),
    (20, "Coffee Maker", 2900),
    (21, "Pepper Mill", 8494),
    (22, "Salt Mill", 8495),
    (23, "Glass Storage Jar", 495),
    (24, "Measuring Jug", 1995),
    (25, "Kitchen Scale", 3995),
    (26, "Tenderiser", 3495),
    (27, "Pizza Docker", 1995),
    (28, "Knife Sharpener", 7995),
    (29, "Steel Cork Opener", 3695),
    (30, "Steel Garlic Press", 3495),
    (31, "Steel Can Opener", 3695),
    (32, "Stainless Steel Crank Flour Sifter", 3395),
    (33, "Mineral Stone Mortar and Pestle", 7495),
    (34, "Citrus Catcher", 1995),
    (35, "Cherry & Olive Pitter", 2795),
    (36, "Multi Grater-Detachable", 2695),
    (37, "Stainless Steel Colander", 4495),
    (38, "Steel Pizza Pan", 1295),
    (39, "Pop Container", 2295),
];

/// Immutable, ordered product table with O(1) lookup by code.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<u32, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting tables that would break record encoding.
    ///
    /// ## Load-time Checks
    /// - every code is within 0..=39 and unique
    /// - every price is positive
    /// - no name is blank or contains `/`
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            validate_code(product.code as i64).map_err(CoreError::InvalidCatalog)?;
            validate_product_name(&product.name).map_err(CoreError::InvalidCatalog)?;
            validate_unit_price(product.unit_price).map_err(CoreError::InvalidCatalog)?;

            if index.insert(product.code, position).is_some() {
                return Err(CoreError::InvalidCatalog(ValidationError::Duplicate {
                    field: "code".to_string(),
                    value: product.code.to_string(),
                }));
            }
        }

        Ok(Catalog { products, index })
    }

    /// The standard 40-product kitchenware catalog.
    pub fn standard() -> CoreResult<Self> {
        let products = STANDARD_PRODUCTS
            .iter()
            .map(|&(code, name, cents)| Product::new(code, name, Money::from_cents(cents)))
            .collect();

        Catalog::new(products)
    }

    /// Looks up a product by raw code. Negative or unknown codes give `None`.
    pub fn lookup(&self, code: i64) -> Option<&Product> {
        let code = u32::try_from(code).ok()?;
        self.index.get(&code).map(|&position| &self.products[position])
    }

    /// Products in table order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueTier;

    #[test]
    fn test_standard_catalog_loads() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.len(), 40);
        assert_eq!(catalog.products()[0].name, "Salad Server Set");
        assert_eq!(catalog.products()[39].name, "Pop Container");
    }

    #[test]
    fn test_every_valid_code_resolves() {
        let catalog = Catalog::standard().unwrap();
        for code in 0..=39 {
            let product = catalog.lookup(code).unwrap();
            assert_eq!(product.code as i64, code);
        }
        for code in [-1, 40, 41, 1000, i64::MIN, i64::MAX] {
            assert!(catalog.lookup(code).is_none(), "code {} resolved", code);
        }
    }

    #[test]
    fn test_value_tier_matches_threshold_for_every_entry() {
        let catalog = Catalog::standard().unwrap();
        for product in catalog.products() {
            let expected = if product.unit_price >= Money::from_cents(3000) {
                ValueTier::High
            } else {
                ValueTier::Low
            };
            assert_eq!(product.value_tier(), expected, "{}", product.name);
        }

        assert_eq!(catalog.lookup(0).unwrap().value_tier(), ValueTier::Low);
        assert_eq!(catalog.lookup(4).unwrap().value_tier(), ValueTier::High);
        // $29.95 sits just below the line
        assert_eq!(catalog.lookup(16).unwrap().value_tier(), ValueTier::Low);
    }

    #[test]
    fn test_rejects_duplicate_codes() {
        let result = Catalog::new(vec![
            Product::new(1, "Apron", Money::from_cents(2995)),
            Product::new(1, "Oven Glove", Money::from_cents(995)),
        ]);
        assert!(matches!(
            result,
            Err(CoreError::InvalidCatalog(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_rejects_separator_in_name() {
        let result = Catalog::new(vec![Product::new(
            3,
            "Salt/Pepper Set",
            Money::from_cents(1500),
        )]);
        assert!(matches!(
            result,
            Err(CoreError::InvalidCatalog(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_code_and_free_items() {
        assert!(Catalog::new(vec![Product::new(40, "Spoon", Money::from_cents(100))]).is_err());
        assert!(Catalog::new(vec![Product::new(5, "Spoon", Money::zero())]).is_err());
    }
}
