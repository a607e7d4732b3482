//! # Catalog File
//!
//! JSON description of a store's products and deals.
//!
//! ## Format
//! ```json
//! {
//!   "products": [
//!     { "code": "A", "price": 20 },
//!     { "code": "B", "price": 50 }
//!   ],
//!   "deals": [
//!     { "price": 150, "items": [{ "code": "B", "quantity": 4 }, { "code": "A", "quantity": 2 }] }
//!   ]
//! }
//! ```
//!
//! Deals are added in file order, which is their priority order. Deal items
//! refer to products by code and must name a product listed in the same file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use till_core::{Catalog, Deal, DealRequirement, Money, Product};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub products: Vec<ProductEntry>,

    #[serde(default)]
    pub deals: Vec<DealEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductEntry {
    pub code: String,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DealEntry {
    pub price: i64,
    pub items: Vec<DealItemEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DealItemEntry {
    pub code: String,
    pub quantity: u32,
}

impl CatalogFile {
    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = json.len(), "Catalog file read");
        Self::parse(&json)
    }

    pub fn parse(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a catalog, enforcing every catalog invariant on the way.
    pub fn into_catalog(self) -> AppResult<Catalog> {
        let mut catalog = Catalog::new();

        for entry in self.products {
            debug!(code = %entry.code, price = entry.price, "Adding product");
            catalog.add_product(Product::new(entry.code, Money::new(entry.price)))?;
        }

        for (position, entry) in self.deals.into_iter().enumerate() {
            let mut requirements = Vec::with_capacity(entry.items.len());
            for item in entry.items {
                let product = catalog
                    .product(&item.code)
                    .cloned()
                    .ok_or_else(|| AppError::UnknownDealProduct {
                        code: item.code.clone(),
                    })?;
                requirements.push(DealRequirement::new(product, item.quantity)?);
            }

            let deal = Deal::new(Money::new(entry.price), requirements)?;
            let id = catalog.add_deal(deal);
            debug!(%id, position, price = entry.price, "Adding deal");
        }

        info!(
            products = catalog.product_count(),
            deals = catalog.deal_count(),
            "Catalog built"
        );
        Ok(catalog)
    }
}
