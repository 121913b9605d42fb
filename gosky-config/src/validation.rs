// Configuration validation

use crate::{ConfigError, Result};
use std::collections::HashSet;
use std::hash::Hash;

/// Settings structs that check their own invariants after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reusable validation rules.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Value must not be empty or whitespace.
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// List must have at least one element.
    pub fn non_empty_list<T>(values: &[T], field: &str) -> Result<()> {
        if values.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} must contain at least one entry",
                field
            )));
        }
        Ok(())
    }

    /// List must not repeat an element.
    pub fn unique<T: Eq + Hash>(values: &[T], field: &str) -> Result<()> {
        let mut seen = HashSet::with_capacity(values.len());
        if values.iter().all(|v| seen.insert(v)) {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(format!(
                "{} contains duplicate entries",
                field
            )))
        }
    }

    /// Value must be one of `allowed`.
    pub fn one_of<T: PartialEq>(value: &T, allowed: &[T], field: &str) -> Result<()> {
        if !allowed.contains(value) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be one of the allowed values",
                field
            )));
        }
        Ok(())
    }
}
