// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis placement.

use kurbo::Vec2;

use crate::axis::{AxisElement, AxisKey, AxisOrient, AxisPair};
use crate::domain::Domain;
use crate::props::ChartProps;
use crate::scale::Scale;

/// The value the perpendicular axis crosses at: zero when the domain reaches it, else the
/// domain's minimum.
fn origin(domain: Domain) -> f64 {
    domain.0.min(domain.1).max(0.0)
}

/// Computes where the axis lines are drawn, as pixel distances from the anchoring chart edges.
///
/// `x` places the dependent (vertical) axis, measured from the left edge, or from the right
/// edge when that axis is oriented right. `y` places the independent (horizontal) axis,
/// measured from the bottom edge, or from the top edge when that axis is oriented top. An
/// explicit `offset_x` on the dependent axis or `offset_y` on the independent axis wins.
pub fn get_axis_offset<S: Scale>(
    props: &ChartProps,
    axes: AxisPair<Option<&AxisElement>>,
    domains: &AxisPair<Domain>,
    scales: &AxisPair<S>,
) -> Vec2 {
    let orient = |axis: AxisKey| {
        axes.get(axis)
            .map_or_else(|| AxisOrient::default_for(axis), AxisElement::orient)
    };
    let anchor_x = if orient(AxisKey::Dependent) == AxisOrient::Left {
        0.0
    } else {
        props.size.width
    };
    let anchor_y = if orient(AxisKey::Independent) == AxisOrient::Bottom {
        props.size.height
    } else {
        0.0
    };

    let x = (anchor_x - scales.independent.map(origin(domains.independent))).abs();
    let y = (anchor_y - scales.dependent.map(origin(domains.dependent))).abs();

    Vec2::new(
        axes.dependent.and_then(|a| a.offset_x).unwrap_or(x),
        axes.independent.and_then(|a| a.offset_y).unwrap_or(y),
    )
}
