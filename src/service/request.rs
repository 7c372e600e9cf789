//! Mutation request bodies and their field rules

use crate::service::validation::ValidationErrors;
use ledger_store::{Asset, AssetStatus, CategoryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const NAME_MAX_CHARS: usize = 100;

/// Body of a submit or update request.
///
/// Every field is optional at the type level so that a missing field is
/// reported as a validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRequest {
    pub name: Option<String>,
    pub category_id: Option<CategoryId>,
    pub amount: Option<Decimal>,
    pub purchase_price: Option<Decimal>,
    pub status: Option<String>,
}

pub type SubmitAssetRequest = AssetRequest;
pub type UpdateAssetRequest = AssetRequest;

impl AssetRequest {
    /// Request with every field supplied
    pub fn new(
        name: impl Into<String>,
        category_id: CategoryId,
        amount: Decimal,
        purchase_price: Decimal,
        status: AssetStatus,
    ) -> Self {
        Self {
            name: Some(name.into()),
            category_id: Some(category_id),
            amount: Some(amount),
            purchase_price: Some(purchase_price),
            status: Some(status.as_str().to_string()),
        }
    }

    /// Check every field and, if all pass, produce the row to write for
    /// `user_id`. All failures are reported together.
    pub fn validate(&self, user_id: UserId) -> Result<Asset, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => {
                if name.chars().count() > NAME_MAX_CHARS {
                    errors.add("name", format!("must be at most {} characters", NAME_MAX_CHARS));
                }
                Some(name)
            }
            _ => {
                errors.add("name", "is required");
                None
            }
        };

        let category_id = match self.category_id {
            Some(id) if id > 0 => Some(id),
            Some(_) => {
                errors.add("category_id", "must be greater than 0");
                None
            }
            None => {
                errors.add("category_id", "is required");
                None
            }
        };

        let amount = positive(&mut errors, "amount", self.amount);
        let purchase_price = positive(&mut errors, "purchase_price", self.purchase_price);

        let status = match self.status.as_deref() {
            None | Some("") => {
                errors.add("status", "is required");
                None
            }
            Some(text) => match text.parse::<AssetStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    errors.add("status", "must be one of active, inactive, sold");
                    None
                }
            },
        };

        match (name, category_id, amount, purchase_price, status) {
            (Some(name), Some(category_id), Some(amount), Some(purchase_price), Some(status))
                if errors.is_empty() =>
            {
                Ok(Asset {
                    name: name.to_string(),
                    category_id,
                    user_id,
                    amount,
                    purchase_price,
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}

fn positive(errors: &mut ValidationErrors, field: &'static str, value: Option<Decimal>) -> Option<Decimal> {
    match value {
        Some(value) if value > Decimal::ZERO => Some(value),
        Some(_) => {
            errors.add(field, "must be greater than 0");
            None
        }
        None => {
            errors.add(field, "is required");
            None
        }
    }
}
