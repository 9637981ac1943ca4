// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar group centers.

extern crate alloc;

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::axis::AxisKey;
use crate::datum::Datum;
use crate::element::{Categories, Child, SeriesElement, SeriesRole};
use crate::string_map::StringMap;

fn group_centers(categories: &Categories, string_map: Option<&StringMap>) -> SmallVec<[f64; 8]> {
    match categories {
        Categories::Groups(groups) => groups
            .iter()
            .filter(|g| !g.is_empty())
            .map(|g| g.iter().sum::<f64>() / g.len() as f64)
            .collect(),
        Categories::Values(values) => values
            .iter()
            .filter_map(|v| match v {
                Datum::Number(n) => Some(*n),
                Datum::Text(s) => string_map.and_then(|m| m.code(s)).map(f64::from),
            })
            .collect(),
    }
}

/// Collects the category centers of every bar series.
///
/// Grouped categories are reduced to the mean of each group; flat categories are used as
/// positions, with strings placed at their code in `string_map` (the independent axis map).
/// Returns `None` when the chart has no bar series.
pub fn get_categories(children: &[&Child], string_map: Option<&StringMap>) -> Option<Vec<f64>> {
    let bars: SmallVec<[&SeriesElement; 1]> = children
        .iter()
        .copied()
        .filter_map(|child| match child {
            Child::Series(s) if s.role == SeriesRole::Bar => Some(s),
            _ => None,
        })
        .collect();
    if bars.is_empty() {
        return None;
    }

    let mut out: Vec<f64> = Vec::new();
    for bar in bars {
        let Some(categories) = bar
            .categories
            .as_ref()
            .and_then(|c| c.get(AxisKey::Independent))
        else {
            continue;
        };
        for center in group_centers(categories, string_map) {
            if center.is_finite() && !out.contains(&center) {
                out.push(center);
            }
        }
    }
    Some(out)
}
