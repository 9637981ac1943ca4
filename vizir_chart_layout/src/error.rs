// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors.
//!
//! Layout computation itself never fails. These errors come from the opt-in checks in
//! [`ChartProps::validate`](crate::ChartProps::validate) and
//! [`AxisElement::validate`](crate::AxisElement::validate).

use thiserror::Error;

use crate::axis::AxisKey;

/// A chart or axis configuration that would produce a meaningless layout.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PropsError {
    /// The chart size is not positive and finite.
    #[error("chart size must be positive and finite, got {width}x{height}")]
    InvalidSize {
        /// Chart width.
        width: f64,
        /// Chart height.
        height: f64,
    },

    /// A domain override has a non-finite endpoint.
    #[error("{axis} domain must be finite, got [{min}, {max}]")]
    NonFiniteDomain {
        /// The affected axis.
        axis: AxisKey,
        /// First endpoint.
        min: f64,
        /// Second endpoint.
        max: f64,
    },

    /// Domain padding is negative or not finite.
    #[error("{axis} domain padding must be finite and non-negative, got {padding}")]
    InvalidDomainPadding {
        /// The affected axis.
        axis: AxisKey,
        /// The configured padding.
        padding: f64,
    },

    /// Tick values mix strings and numbers.
    #[error("{axis} axis tick values mix strings and numbers")]
    MixedTickValues {
        /// The affected axis.
        axis: AxisKey,
    },
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_axis() {
        let err = PropsError::NonFiniteDomain {
            axis: AxisKey::Dependent,
            min: 0.0,
            max: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "dependent domain must be finite, got [0, inf]");

        let err = PropsError::MixedTickValues {
            axis: AxisKey::Independent,
        };
        assert_eq!(
            err.to_string(),
            "independent axis tick values mix strings and numbers"
        );
    }
}
