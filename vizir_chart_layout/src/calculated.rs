// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full layout pipeline for one render pass.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;

use crate::axis::{AxisKey, AxisOrient, AxisPair, axis_element, axis_orientations};
use crate::categories::get_categories;
use crate::children::{DefaultAxes, Rejection, Selection, select_children};
use crate::datum::Datum;
use crate::domain::{Domain, get_domain};
use crate::element::{Categories, Child};
use crate::error::PropsError;
use crate::offset::get_axis_offset;
use crate::props::ChartProps;
use crate::scale::{Scale, ScaleLinear};
use crate::string_map::{StringMap, create_string_map};
use crate::ticks::{TickFormat, get_tick_format, get_ticks};

/// Everything a composed chart derives from its children before generating marks.
///
/// Built from scratch by each call; nothing is shared between calculations.
#[derive(Clone, Debug)]
pub struct ChartCalculation<'a, S = ScaleLinear> {
    /// The selected children, followed by any injected default axes.
    pub children: Vec<&'a Child>,
    /// Children dropped during selection.
    pub rejections: Vec<Rejection>,
    /// Categorical string codes per axis.
    pub string_maps: AxisPair<Option<StringMap>>,
    /// Padded, oriented domains.
    pub domains: AxisPair<Domain>,
    /// Effective axis orientations.
    pub orientations: AxisPair<AxisOrient>,
    /// One scale per axis, mapping its domain onto [`ChartProps::range`].
    pub scales: AxisPair<S>,
    /// Bar group centers; `None` without a bar series.
    pub categories: Option<Vec<f64>>,
    /// Tick positions; `None` leaves tick selection to the scale.
    pub ticks: AxisPair<Option<Vec<f64>>>,
    /// Tick label formatters.
    pub tick_formats: AxisPair<TickFormat>,
    /// Axis line placement, see [`get_axis_offset`].
    pub offset: Vec2,
}

impl<'a> ChartCalculation<'a, ScaleLinear> {
    /// Runs the pipeline with linear scales.
    pub fn compute(props: &ChartProps, children: &'a [Child], defaults: &'a DefaultAxes) -> Self {
        Self::compute_with(props, children, defaults, |_, domain, range| {
            ScaleLinear::new(domain, range)
        })
    }

    /// Validates `props` and the selected axes, then runs the pipeline with linear scales.
    pub fn try_compute(
        props: &ChartProps,
        children: &'a [Child],
        defaults: &'a DefaultAxes,
    ) -> Result<Self, PropsError> {
        props.validate()?;
        let calculation = Self::compute(props, children, defaults);
        for child in &calculation.children {
            if let Child::Axis(axis) = child {
                axis.validate()?;
            }
        }
        Ok(calculation)
    }
}

impl<'a, S: Scale> ChartCalculation<'a, S> {
    /// Runs the pipeline, building each axis scale with `make_scale(axis, domain, range)`.
    pub fn compute_with(
        props: &ChartProps,
        children: &'a [Child],
        defaults: &'a DefaultAxes,
        mut make_scale: impl FnMut(AxisKey, Domain, (f64, f64)) -> S,
    ) -> Self {
        let Selection {
            children,
            rejections,
        } = select_children(children, defaults);

        let string_maps = AxisPair::from_fn(|axis| create_string_map(&children, axis));
        let orientations = axis_orientations(&children);
        let domains = AxisPair::from_fn(|axis| {
            get_domain(props, &children, axis, string_maps.get(axis).as_ref())
        });
        let scales = domains.map(|axis, domain| make_scale(axis, domain, props.range(axis)));
        let categories = get_categories(&children, string_maps.independent.as_ref());

        let axes = AxisPair::from_fn(|axis| axis_element(&children, axis));
        let ticks = AxisPair::from_fn(|axis| {
            let data = category_values(&children, axis);
            get_ticks(
                *axes.get(axis),
                Some(data.as_slice()),
                string_maps.get(axis).as_ref(),
            )
        });
        let tick_formats = AxisPair::from_fn(|axis| {
            get_tick_format(
                *axes.get(axis),
                string_maps.get(axis).as_ref(),
                Some(scales.get(axis) as &dyn Scale),
            )
        });
        let offset = get_axis_offset(props, axes, &domains, &scales);

        Self {
            children,
            rejections,
            string_maps,
            domains,
            orientations,
            scales,
            categories,
            ticks,
            tick_formats,
            offset,
        }
    }

    /// The label of each tick on `axis`, or `None` when the scale picks the ticks.
    pub fn tick_labels(&self, axis: AxisKey) -> Option<Vec<String>> {
        let format = self.tick_formats.get(axis);
        self.ticks
            .get(axis)
            .as_ref()
            .map(|ticks| ticks.iter().map(|&t| format.format(t)).collect())
    }
}

/// The flat category values every selected child declares for `axis`, in order.
fn category_values(children: &[&Child], axis: AxisKey) -> Vec<Datum> {
    children
        .iter()
        .filter_map(|child| child.categories(axis))
        .flat_map(Categories::as_values)
        .cloned()
        .collect()
}
