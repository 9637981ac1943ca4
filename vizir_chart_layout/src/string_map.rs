// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical string codes.
//!
//! A categorical axis positions each distinct string at an integer code. Codes are dense,
//! start at `1` and follow first-seen order; `0` and `n + 1` are left free so that a padded
//! domain has an empty slot at each end.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::axis::{AxisElement, AxisKey, axis_element};
use crate::datum::Datum;
use crate::element::Child;

/// A dense `string -> code` table, codes `1..=n` in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringMap {
    /// Labels by code; `labels[i]` has code `i + 1`.
    labels: Vec<String>,
    codes: HashMap<String, u32>,
}

impl StringMap {
    /// Builds a map from `strings`, skipping repeats.
    ///
    /// Returns `None` if `strings` is empty.
    pub fn from_strings<I, S>(strings: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::default();
        for s in strings {
            map.insert(s.as_ref());
        }
        (!map.is_empty()).then_some(map)
    }

    fn insert(&mut self, s: &str) {
        if self.codes.contains_key(s) {
            return;
        }
        self.labels.push(String::from(s));
        let code = u32::try_from(self.labels.len()).unwrap_or(u32::MAX);
        self.codes.insert(String::from(s), code);
    }

    /// Returns the code for `s`.
    pub fn code(&self, s: &str) -> Option<u32> {
        self.codes.get(s).copied()
    }

    /// Returns the string for `code`.
    pub fn label(&self, code: u32) -> Option<&str> {
        let index = usize::try_from(code).ok()?.checked_sub(1)?;
        self.labels.get(index).map(String::as_str)
    }

    /// Number of distinct strings.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the map holds no strings.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(string, code)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels.iter().map(String::as_str).zip(1..)
    }

    /// Iterates codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = u32> {
        self.iter().map(|(_, code)| code)
    }
}

/// Strings declared on an axis: its string tick values, or its tick labels if it has no tick
/// values.
pub fn strings_from_axis(axis: &AxisElement) -> Vec<&str> {
    match (&axis.tick_values, &axis.tick_labels) {
        (Some(values), _) => values.iter().filter_map(Datum::as_text).collect(),
        (None, Some(labels)) => labels.iter().map(String::as_str).collect(),
        (None, None) => Vec::new(),
    }
}

/// String categories declared by any child for `axis`, in child order.
pub fn strings_from_categories<'a>(children: &[&'a Child], axis: AxisKey) -> Vec<&'a str> {
    children
        .iter()
        .copied()
        .filter_map(|child| child.categories(axis))
        .flat_map(|c| c.as_values().iter().filter_map(Datum::as_text))
        .collect()
}

/// String data values of every series for `axis`, in child and data order.
pub fn strings_from_data<'a>(children: &[&'a Child], axis: AxisKey) -> Vec<&'a str> {
    children
        .iter()
        .copied()
        .filter_map(|child| match child {
            Child::Series(s) => Some(s),
            _ => None,
        })
        .flat_map(|s| s.points().filter_map(move |p| p.get(axis).as_text()))
        .collect()
}

/// Builds the string map for `axis`, or `None` if the axis has no categorical values.
///
/// Strings are collected from the axis tick values first, then from categories, then from
/// data, so explicitly listed ticks get the lowest codes.
pub fn create_string_map(children: &[&Child], axis: AxisKey) -> Option<StringMap> {
    let axis_strings = axis_element(children, axis)
        .map(strings_from_axis)
        .unwrap_or_default();
    let category_strings = strings_from_categories(children, axis);
    let data_strings = strings_from_data(children, axis);
    StringMap::from_strings(
        axis_strings
            .into_iter()
            .chain(category_strings)
            .chain(data_strings),
    )
}
