//! Domain models
//!
//! Row types for the two ledger tables and the projected asset view
//! produced by every asset read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type AssetId = i64;
pub type UserId = i64;
pub type CategoryId = i64;

pub const ASSETS_TABLE: &str = "assets";
pub const CATEGORIES_TABLE: &str = "user_asset_categories";

/// Lifecycle state of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Active,
    Inactive,
    Sold,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 3] = [AssetStatus::Active, AssetStatus::Inactive, AssetStatus::Sold];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::Inactive => "inactive",
            AssetStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown asset status '{0}': expected one of active, inactive, sold")]
pub struct UnknownStatus(pub String);

impl FromStr for AssetStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for AssetStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A category owned by exactly one user; read-only from the ledger's side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AssetCategory {
    pub id: CategoryId,
    pub name: String,
}

/// Mutable columns of an asset row, as written by insert and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub category_id: CategoryId,
    pub user_id: UserId,
    pub amount: Decimal,
    pub purchase_price: Decimal,
    pub status: AssetStatus,
}

/// Asset joined to its category, with the derived total purchase price.
///
/// Never persisted. `total_purchase_price` is computed by the database as
/// `amount * purchase_price` in the same projection that reads the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AssetView {
    pub id: AssetId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: String,
    pub amount: Decimal,
    pub purchase_price: Decimal,
    #[sqlx(try_from = "String")]
    pub status: AssetStatus,
    pub total_purchase_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_text() {
        for status in AssetStatus::ALL {
            assert_eq!(status.as_str().parse::<AssetStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_rejects_unknown_and_case_variants() {
        assert!("archived".parse::<AssetStatus>().is_err());
        assert!("Active".parse::<AssetStatus>().is_err());
        assert!(AssetStatus::try_from(String::new()).is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&AssetStatus::Sold).unwrap();
        assert_eq!(json, "\"sold\"");
    }
}
