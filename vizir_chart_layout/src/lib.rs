// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived layout for composed charts.
//!
//! A composed chart declares a flat list of child elements (axes and data series). Before any
//! marks are generated, the chart needs a handful of derived values that depend on *all* of its
//! children at once:
//! - **Child selection**: which children take part (at most one axis per axis key, at most one
//!   bar series), with default axes injected where none were declared.
//! - **String maps**: a dense `string -> code` table for categorical axes.
//! - **Domains**: one shared `(min, max)` per axis key, merged from every child, then padded and
//!   oriented.
//! - **Ticks**: explicit or derived tick positions plus a label formatter.
//! - **Categories**: deduplicated bar group centers.
//! - **Axis offset**: where each axis line is drawn so the axes cross at the origin.
//!
//! Every function here is a pure function of its inputs. Nothing is cached between calls;
//! [`ChartCalculation::compute`] runs the whole pipeline for one render pass.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod calculated;
mod categories;
mod children;
mod datum;
mod domain;
mod element;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod offset;
#[cfg(test)]
mod pipeline_tests;
mod props;
mod scale;
mod string_map;
mod ticks;

pub use axis::{AxisElement, AxisKey, AxisOrient, AxisPair, axis_element, axis_orientations};
pub use calculated::ChartCalculation;
pub use categories::get_categories;
pub use children::{DefaultAxes, Rejection, Selection, select_children};
pub use datum::{DataPoint, Datum, contains_only_strings, contains_strings};
pub use domain::{
    Domain, base_domain, domain_from_children, domain_from_props, get_domain, orient_domain,
    pad_domain,
};
pub use element::{Categories, Child, PerAxis, Role, SeriesElement, SeriesRole};
pub use error::PropsError;
pub use offset::get_axis_offset;
pub use props::ChartProps;
pub use scale::{Scale, ScaleLinear, TickFormatFn};
pub use string_map::{
    StringMap, create_string_map, strings_from_axis, strings_from_categories, strings_from_data,
};
pub use ticks::{TickFormat, get_tick_format, get_ticks, ticks_from_axis, ticks_from_data};
