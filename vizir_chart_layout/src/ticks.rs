// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick positions and tick label formatting.
//!
//! Explicit tick values on an axis always win. Without them, ticks come from declared
//! categories, then from the string map. If none of those exist, the scale picks its own
//! ticks downstream and [`get_ticks`] returns `None`.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::AxisElement;
use crate::datum::{Datum, contains_only_strings, contains_strings};
use crate::scale::{Scale, TickFormatFn};
use crate::string_map::StringMap;

/// Maps a tick position to its label.
#[derive(Clone)]
pub enum TickFormat {
    /// The position itself, printed as a number.
    Identity,
    /// Labels indexed by integer position, with a blank slot at each end.
    Labels(Vec<String>),
    /// A caller- or scale-provided formatter.
    Custom(TickFormatFn),
}

impl fmt::Debug for TickFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Labels(labels) => f.debug_tuple("Labels").field(labels).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl TickFormat {
    /// Builds the categorical formatter for `map`: `["", s1, .., sn, ""]`.
    ///
    /// The blank ends line up with positions `0` and `n + 1`, which a padded domain may show.
    pub fn from_string_map(map: &StringMap) -> Self {
        let mut labels = Vec::with_capacity(map.len() + 2);
        labels.push(String::new());
        labels.extend(
            map.codes()
                .filter_map(|code| map.label(code))
                .map(String::from),
        );
        labels.push(String::new());
        Self::Labels(labels)
    }

    /// Formats the tick at `position`.
    ///
    /// Categorical labels only exist at integer positions; anything else is blank.
    pub fn format(&self, position: f64) -> String {
        match self {
            Self::Identity => format!("{position}"),
            Self::Labels(labels) => label_index(position)
                .and_then(|i| labels.get(i))
                .cloned()
                .unwrap_or_default(),
            Self::Custom(f) => f(position),
        }
    }
}

fn label_index(position: f64) -> Option<usize> {
    if !position.is_finite() || position < 0.0 || position.round() != position {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "checked to be a finite, non-negative integer"
    )]
    let index = position as usize;
    Some(index)
}

fn explicit_tick_values(axis: Option<&AxisElement>) -> Option<&[Datum]> {
    axis?.tick_values.as_deref().filter(|v| !v.is_empty())
}

fn positions(values: &[Datum], string_map: Option<&StringMap>) -> Vec<f64> {
    match string_map {
        Some(map) if contains_only_strings(values) => values
            .iter()
            .filter_map(|v| v.as_text().and_then(|s| map.code(s)))
            .map(f64::from)
            .collect(),
        _ => values.iter().filter_map(Datum::as_number).collect(),
    }
}

/// Ticks declared on the axis itself.
///
/// String ticks are positioned through `string_map`; numeric ticks pass through unchanged.
pub fn ticks_from_axis(axis: Option<&AxisElement>, string_map: Option<&StringMap>) -> Option<Vec<f64>> {
    explicit_tick_values(axis).map(|values| positions(values, string_map))
}

/// Ticks derived from category data, falling back to every string code.
pub fn ticks_from_data(
    categories: Option<&[Datum]>,
    string_map: Option<&StringMap>,
) -> Option<Vec<f64>> {
    let from_categories = categories
        .map(|c| positions(c, string_map))
        .filter(|t| !t.is_empty());
    from_categories.or_else(|| string_map.map(|m| m.codes().map(f64::from).collect()))
}

/// Resolves tick positions: explicit axis ticks first, then data-derived ticks.
pub fn get_ticks(
    axis: Option<&AxisElement>,
    categories: Option<&[Datum]>,
    string_map: Option<&StringMap>,
) -> Option<Vec<f64>> {
    ticks_from_axis(axis, string_map).or_else(|| ticks_from_data(categories, string_map))
}

/// Resolves the tick label formatter.
///
/// Numeric explicit ticks are labeled as-is, even when a string map exists. Otherwise a string
/// map gives categorical labels, and the scale's own formatter is the last resort.
pub fn get_tick_format(
    axis: Option<&AxisElement>,
    string_map: Option<&StringMap>,
    scale: Option<&dyn Scale>,
) -> TickFormat {
    if explicit_tick_values(axis).is_some_and(|v| !contains_strings(v)) {
        return TickFormat::Identity;
    }
    if let Some(map) = string_map {
        return TickFormat::from_string_map(map);
    }
    scale
        .and_then(|s| s.tick_format())
        .map_or(TickFormat::Identity, TickFormat::Custom)
}
