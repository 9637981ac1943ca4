// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw data values as declared on chart children.
//!
//! Data, tick values and categories can each hold numbers or strings. Strings are categorical:
//! they only become positions once they have been assigned a code in a
//! [`StringMap`](crate::StringMap).

extern crate alloc;

use alloc::string::String;

use crate::AxisKey;

/// A single raw value: either a number or a categorical string.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    /// A numeric value in data units.
    Number(f64),
    /// A categorical value.
    Text(String),
}

impl Datum {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Returns the string value, if this is categorical.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    /// Returns `true` for categorical values.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Datum {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One data point of a series.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Value along the independent axis.
    pub x: Datum,
    /// Value along the dependent axis.
    pub y: Datum,
}

impl DataPoint {
    /// Creates a data point from anything convertible into [`Datum`].
    pub fn new(x: impl Into<Datum>, y: impl Into<Datum>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Returns the value for the given axis key.
    pub fn get(&self, axis: AxisKey) -> &Datum {
        match axis {
            AxisKey::Independent => &self.x,
            AxisKey::Dependent => &self.y,
        }
    }
}

/// Returns `true` if `values` is non-empty and every value is a string.
pub fn contains_only_strings(values: &[Datum]) -> bool {
    !values.is_empty() && values.iter().all(Datum::is_text)
}

/// Returns `true` if any value is a string.
pub fn contains_strings(values: &[Datum]) -> bool {
    values.iter().any(Datum::is_text)
}
