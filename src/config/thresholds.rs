// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Confidence cut-points for highlight levels.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Four descending cut-points mapping a confidence to a level.
///
/// Invariant (checked by [`HighlightThresholds::validate`]): every value lies
/// in `[0, 1]` and `exact >= similar >= related >= context`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightThresholds {
    pub exact: f64,
    pub similar: f64,
    pub related: f64,
    pub context: f64,
}

impl HighlightThresholds {
    pub const DEFAULT: HighlightThresholds = HighlightThresholds {
        exact: 1.0,
        similar: 0.8,
        related: 0.6,
        context: 0.4,
    };

    /// Build and validate in one step.
    pub fn new(exact: f64, similar: f64, related: f64, context: f64) -> Result<Self> {
        let thresholds = HighlightThresholds {
            exact,
            similar,
            related,
            context,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        let named = [
            ("exact", self.exact),
            ("similar", self.similar),
            ("related", self.related),
            ("context", self.context),
        ];

        for (field, value) in named {
            check_unit_interval(field, value)?;
        }

        for pair in named.windows(2) {
            let (higher, high) = pair[0];
            let (lower, low) = pair[1];
            if high < low {
                return Err(ConfigError::ThresholdsNotDescending { higher, lower });
            }
        }

        Ok(())
    }
}

impl Default for HighlightThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `value` must be a real number in `[0, 1]`; NaN fails the range check.
pub(crate) fn check_unit_interval(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { field, value })
    }
}
