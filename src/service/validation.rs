//! Per-field validation errors

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Validation failures keyed by field name, each with one or more messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for `field`, if any
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// `Ok(value)` when nothing was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_messages_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "is required");
        errors.add("amount", "must be greater than 0");
        errors.add("name", "must be at most 100 characters");

        assert_eq!(errors.field("name").map(<[String]>::len), Some(2));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["amount", "name"]);
        assert_eq!(
            errors.to_string(),
            "amount: must be greater than 0; name: is required; name: must be at most 100 characters"
        );
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("status", "must be one of active, inactive, sold");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": ["must be one of active, inactive, sold"]})
        );
    }

    #[test]
    fn test_empty_errors_pass_value_through() {
        assert_eq!(ValidationErrors::new().into_result(5), Ok(5));
    }
}
