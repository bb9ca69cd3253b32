//! Configuration for a draw session.

use crate::error::{TarotError, TarotResult};

/// Largest cosmetic tilt accepted, in degrees.
pub const MAX_ROTATION_LIMIT: f64 = 45.0;

/// Configuration for a draw session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// RNG seed for reproducible shuffles. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Cards tilt uniformly within `[-max_rotation, +max_rotation]` degrees.
    pub max_rotation: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_rotation: 3.0,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum cosmetic rotation in degrees.
    pub fn with_max_rotation(mut self, degrees: f64) -> Self {
        self.max_rotation = degrees;
        self
    }

    /// Check that the rotation range is finite and within `0..=45` degrees.
    pub fn validate(&self) -> TarotResult<()> {
        if !self.max_rotation.is_finite()
            || !(0.0..=MAX_ROTATION_LIMIT).contains(&self.max_rotation)
        {
            return Err(TarotError::InvalidConfig(format!(
                "max_rotation must be between 0 and {MAX_ROTATION_LIMIT} degrees, got {}",
                self.max_rotation
            )));
        }
        Ok(())
    }
}
