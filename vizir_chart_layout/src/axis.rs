// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis keys, orientations and axis elements.
//!
//! Vega models an axis by its `orient` (`top`, `bottom`, `left`, `right`). A composed chart
//! additionally needs to know which *data* dimension an axis belongs to. We call that the
//! [`AxisKey`]: the independent axis is drawn horizontally and the dependent axis vertically.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::datum::{Datum, contains_only_strings, contains_strings};
use crate::domain::{Domain, extent};
use crate::element::Child;
use crate::error::PropsError;
use crate::string_map::StringMap;

/// Identifies one of the two data dimensions of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKey {
    /// The independent dimension, drawn along x.
    Independent,
    /// The dependent dimension, drawn along y.
    Dependent,
}

impl AxisKey {
    /// Both axis keys, independent first.
    pub const ALL: [Self; 2] = [Self::Independent, Self::Dependent];
}

impl fmt::Display for AxisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Independent => f.write_str("independent"),
            Self::Dependent => f.write_str("dependent"),
        }
    }
}

/// Axis orientation, matching Vega’s axis `orient` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

impl AxisOrient {
    /// The orientation used when an axis does not declare one.
    pub fn default_for(axis: AxisKey) -> Self {
        match axis {
            AxisKey::Independent => Self::Bottom,
            AxisKey::Dependent => Self::Left,
        }
    }

    /// The axis key an axis with this orientation belongs to.
    pub fn axis_key(self) -> AxisKey {
        match self {
            Self::Top | Self::Bottom => AxisKey::Independent,
            Self::Left | Self::Right => AxisKey::Dependent,
        }
    }
}

/// A value for each axis key.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisPair<T> {
    /// Value for [`AxisKey::Independent`].
    pub independent: T,
    /// Value for [`AxisKey::Dependent`].
    pub dependent: T,
}

impl<T> AxisPair<T> {
    /// Creates a pair from its two values.
    pub fn new(independent: T, dependent: T) -> Self {
        Self {
            independent,
            dependent,
        }
    }

    /// Builds a pair by evaluating `f` for the independent key, then the dependent key.
    pub fn from_fn(mut f: impl FnMut(AxisKey) -> T) -> Self {
        let independent = f(AxisKey::Independent);
        let dependent = f(AxisKey::Dependent);
        Self {
            independent,
            dependent,
        }
    }

    /// Returns the value for `axis`.
    pub fn get(&self, axis: AxisKey) -> &T {
        match axis {
            AxisKey::Independent => &self.independent,
            AxisKey::Dependent => &self.dependent,
        }
    }

    /// Maps both values, passing the axis key along.
    pub fn map<U>(self, mut f: impl FnMut(AxisKey, T) -> U) -> AxisPair<U> {
        AxisPair {
            independent: f(AxisKey::Independent, self.independent),
            dependent: f(AxisKey::Dependent, self.dependent),
        }
    }
}

/// An axis declared as a chart child.
///
/// Which axis key it serves is decided by [`AxisElement::orientation`] when set, otherwise by
/// [`AxisElement::dependent_axis`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisElement {
    /// Marks this as the dependent axis when no orientation is given.
    pub dependent_axis: bool,
    /// Explicit placement.
    pub orientation: Option<AxisOrient>,
    /// Explicit tick values. These win over any computed ticks.
    pub tick_values: Option<Vec<Datum>>,
    /// Tick labels given as a list rather than a function.
    ///
    /// They only contribute categorical strings when no tick values are set.
    pub tick_labels: Option<Vec<String>>,
    /// Explicit domain reported by this axis.
    pub domain: Option<Domain>,
    /// Explicit horizontal offset, used when this is the vertical axis.
    pub offset_x: Option<f64>,
    /// Explicit vertical offset, used when this is the horizontal axis.
    pub offset_y: Option<f64>,
}

impl AxisElement {
    /// A plain independent axis.
    pub fn independent() -> Self {
        Self::default()
    }

    /// A plain dependent axis.
    pub fn dependent() -> Self {
        Self {
            dependent_axis: true,
            ..Self::default()
        }
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: AxisOrient) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Set explicit tick values.
    pub fn with_tick_values<I, D>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Datum>,
    {
        self.tick_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set a list of tick labels.
    pub fn with_tick_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tick_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Set the domain this axis reports.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Set the explicit horizontal offset.
    pub fn with_offset_x(mut self, offset: f64) -> Self {
        self.offset_x = Some(offset);
        self
    }

    /// Set the explicit vertical offset.
    pub fn with_offset_y(mut self, offset: f64) -> Self {
        self.offset_y = Some(offset);
        self
    }

    /// The axis key this axis serves.
    pub fn axis_key(&self) -> AxisKey {
        match self.orientation {
            Some(orient) => orient.axis_key(),
            None if self.dependent_axis => AxisKey::Dependent,
            None => AxisKey::Independent,
        }
    }

    /// The declared orientation, or the default for this axis key.
    pub fn orient(&self) -> AxisOrient {
        self.orientation
            .unwrap_or_else(|| AxisOrient::default_for(self.axis_key()))
    }

    /// The domain this axis reports for `axis`.
    ///
    /// An axis only reports for its own key: its explicit domain, else the extent of its tick
    /// values once at least two are declared. String ticks are positioned through `string_map`,
    /// so repeated strings share one code; strings without a code are ignored.
    pub fn domain(&self, axis: AxisKey, string_map: Option<&StringMap>) -> Option<Domain> {
        if axis != self.axis_key() {
            return None;
        }
        if let Some(domain) = self.domain {
            return Some(domain);
        }
        let ticks = self.tick_values.as_deref()?;
        if ticks.len() < 2 {
            return None;
        }
        extent(ticks.iter().filter_map(|tick| match tick {
            Datum::Number(v) => Some(*v),
            Datum::Text(s) => string_map.and_then(|m| m.code(s)).map(f64::from),
        }))
    }

    /// Checks the axis configuration.
    ///
    /// Computation never requires this; it reports inputs that would produce surprising
    /// results.
    pub fn validate(&self) -> Result<(), PropsError> {
        let axis = self.axis_key();
        if let Some(ticks) = self.tick_values.as_deref()
            && contains_strings(ticks)
            && !contains_only_strings(ticks)
        {
            return Err(PropsError::MixedTickValues { axis });
        }
        if let Some((min, max)) = self.domain
            && !(min.is_finite() && max.is_finite())
        {
            return Err(PropsError::NonFiniteDomain { axis, min, max });
        }
        Ok(())
    }
}

/// Returns the first axis element serving `axis`.
pub fn axis_element<'a>(children: &[&'a Child], axis: AxisKey) -> Option<&'a AxisElement> {
    children.iter().copied().find_map(|child| match child {
        Child::Axis(a) if a.axis_key() == axis => Some(a),
        _ => None,
    })
}

/// Returns the effective orientation of each axis.
pub fn axis_orientations(children: &[&Child]) -> AxisPair<AxisOrient> {
    AxisPair::from_fn(|axis| {
        axis_element(children, axis)
            .map(AxisElement::orient)
            .unwrap_or_else(|| AxisOrient::default_for(axis))
    })
}
