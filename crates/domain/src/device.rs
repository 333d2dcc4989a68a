//! Device state changes applied through the knowledge base.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Requested target temperature for a named device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSetting {
    pub device: String,
    pub value: f64,
}

impl TemperatureSetting {
    /// Create a setting after checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyDevice`] when `device` is blank, or
    /// [`ValidationError::NonFiniteValue`] when `value` is NaN or infinite.
    pub fn new(device: impl Into<String>, value: f64) -> Result<Self, ValidationError> {
        let setting = Self {
            device: device.into(),
            value,
        };
        setting.validate()?;
        Ok(setting)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// See [`TemperatureSetting::new`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.device.trim().is_empty() {
            return Err(ValidationError::EmptyDevice);
        }
        if !self.value.is_finite() {
            return Err(ValidationError::NonFiniteValue);
        }
        Ok(())
    }
}
