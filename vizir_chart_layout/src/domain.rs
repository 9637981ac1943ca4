// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared domain resolution.
//!
//! Each axis key gets one domain for the whole chart:
//! 1. an explicit override from [`ChartProps::domain`], or the union of every child's reported
//!    domain (`[0, 1]` when nobody reports one),
//! 2. padded outward by [`ChartProps::domain_padding`] pixels,
//! 3. reversed when the perpendicular axis sits on its non-default side.

use crate::axis::{AxisKey, AxisOrient, AxisPair, axis_orientations};
use crate::element::Child;
use crate::props::ChartProps;
use crate::string_map::StringMap;

/// A `(min, max)` pair in data units. Orientation may swap the endpoints.
pub type Domain = (f64, f64);

/// The domain used when no child reports one.
const DEFAULT_DOMAIN: Domain = (0.0, 1.0);

/// The `(min, max)` of the finite values, or `None` if there are none.
pub(crate) fn extent(values: impl IntoIterator<Item = f64>) -> Option<Domain> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Returns the explicit domain override for `axis`, if any.
pub fn domain_from_props(props: &ChartProps, axis: AxisKey) -> Option<Domain> {
    props.domain.as_ref().and_then(|d| d.get(axis)).copied()
}

/// Merges the domains reported by `children` for `axis`.
pub fn domain_from_children(
    children: &[&Child],
    axis: AxisKey,
    string_map: Option<&StringMap>,
) -> Domain {
    let endpoints = children
        .iter()
        .filter_map(|child| child.domain(axis, string_map))
        .flat_map(|(a, b)| [a, b]);
    extent(endpoints).unwrap_or(DEFAULT_DOMAIN)
}

/// The domain before padding and orientation.
pub fn base_domain(
    props: &ChartProps,
    children: &[&Child],
    axis: AxisKey,
    string_map: Option<&StringMap>,
) -> Domain {
    domain_from_props(props, axis)
        .unwrap_or_else(|| domain_from_children(children, axis, string_map))
}

/// Expands `domain` by the configured padding, given in pixels.
///
/// The padding is converted to data units so that the original endpoints land exactly
/// `padding` pixels inside the axis range: the domain span is scaled by
/// `padding / (extent - 2 * padding)` at each end, `extent` being the axis pixel range length.
/// A domain that does not cross zero is never padded across it.
///
/// The result is always ordered `(min, max)`. Without padding (or without room for it) that
/// ordered domain is returned as is.
pub fn pad_domain(domain: Domain, props: &ChartProps, axis: AxisKey) -> Domain {
    let min = domain.0.min(domain.1);
    let max = domain.0.max(domain.1);
    let Some(padding) = props.domain_padding.as_ref().and_then(|p| p.get(axis)).copied() else {
        return (min, max);
    };
    if !padding.is_finite() || padding <= 0.0 {
        return (min, max);
    }
    let (r0, r1) = props.range(axis);
    let room = (r1 - r0).abs() - 2.0 * padding;
    if room <= 0.0 {
        return (min, max);
    }

    let pad = (max - min) * padding / room;
    let padded_min = min - pad;
    let padded_max = max + pad;
    (
        if min >= 0.0 && padded_min <= 0.0 {
            0.0
        } else {
            padded_min
        },
        if max <= 0.0 && padded_max >= 0.0 {
            0.0
        } else {
            padded_max
        },
    )
}

/// Orders `domain` to match the chart's axis orientations.
///
/// The independent domain runs right-to-left when the dependent axis is on the right; the
/// dependent domain runs top-to-bottom when the independent axis is on top.
pub fn orient_domain(domain: Domain, orientations: &AxisPair<AxisOrient>, axis: AxisKey) -> Domain {
    let reversed = match axis {
        AxisKey::Independent => orientations.dependent == AxisOrient::Right,
        AxisKey::Dependent => orientations.independent == AxisOrient::Top,
    };
    if reversed {
        (domain.1, domain.0)
    } else {
        domain
    }
}

/// Resolves the final padded, oriented domain for `axis`.
pub fn get_domain(
    props: &ChartProps,
    children: &[&Child],
    axis: AxisKey,
    string_map: Option<&StringMap>,
) -> Domain {
    let base = base_domain(props, children, axis, string_map);
    let padded = pad_domain(base, props, axis);
    orient_domain(padded, &axis_orientations(children), axis)
}
