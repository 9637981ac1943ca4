// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart children and their roles.
//!
//! Children form a closed set: axes, data series, and untyped nodes that take no part in
//! layout. Each role answers the same questions (what is your domain on this axis, which
//! categories do you declare) by matching on the variant rather than through open-ended lookup.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::axis::{AxisElement, AxisKey};
use crate::datum::{DataPoint, Datum};
use crate::domain::{Domain, extent};
use crate::string_map::StringMap;

/// Either one value shared by both axes, or a value per axis key.
#[derive(Clone, Debug, PartialEq)]
pub enum PerAxis<T> {
    /// The same value for both axis keys.
    Shared(T),
    /// Separate, optional values.
    Each {
        /// Value for [`AxisKey::Independent`].
        independent: Option<T>,
        /// Value for [`AxisKey::Dependent`].
        dependent: Option<T>,
    },
}

impl<T> PerAxis<T> {
    /// A value for a single axis key.
    pub fn only(axis: AxisKey, value: T) -> Self {
        match axis {
            AxisKey::Independent => Self::Each {
                independent: Some(value),
                dependent: None,
            },
            AxisKey::Dependent => Self::Each {
                independent: None,
                dependent: Some(value),
            },
        }
    }

    /// Returns the value that applies to `axis`.
    pub fn get(&self, axis: AxisKey) -> Option<&T> {
        match self {
            Self::Shared(value) => Some(value),
            Self::Each {
                independent,
                dependent,
            } => match axis {
                AxisKey::Independent => independent.as_ref(),
                AxisKey::Dependent => dependent.as_ref(),
            },
        }
    }
}

/// The role tag of a chart child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// An axis.
    Axis,
    /// A grouped bar series.
    Bar,
    /// A line series.
    Line,
    /// A scatter series.
    Scatter,
    /// An area series.
    Area,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Axis => "axis",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Area => "area",
        })
    }
}

/// The role of a data series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesRole {
    /// Grouped bars.
    Bar,
    /// Lines.
    Line,
    /// Points.
    Scatter,
    /// Filled areas.
    Area,
}

impl SeriesRole {
    /// Returns the matching child role.
    pub fn role(self) -> Role {
        match self {
            Self::Bar => Role::Bar,
            Self::Line => Role::Line,
            Self::Scatter => Role::Scatter,
            Self::Area => Role::Area,
        }
    }

    /// Whether the dependent domain always includes the zero baseline.
    fn includes_zero(self) -> bool {
        matches!(self, Self::Bar | Self::Area)
    }
}

/// Categories declared on a series.
#[derive(Clone, Debug, PartialEq)]
pub enum Categories {
    /// A flat list of category values (numeric positions or labels).
    Values(Vec<Datum>),
    /// One list of raw values per category; each group is centered at its mean.
    Groups(Vec<Vec<f64>>),
}

impl Categories {
    /// Categories given as a list of labels or positions.
    pub fn values<I, D>(values: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Datum>,
    {
        Self::Values(values.into_iter().map(Into::into).collect())
    }

    /// Categories given as groups of raw values.
    pub fn groups<I, G>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = f64>,
    {
        Self::Groups(
            groups
                .into_iter()
                .map(|g| g.into_iter().collect())
                .collect(),
        )
    }

    /// The flat category values; empty for grouped categories.
    pub fn as_values(&self) -> &[Datum] {
        match self {
            Self::Values(values) => values,
            Self::Groups(_) => &[],
        }
    }
}

/// A data series declared as a chart child.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesElement {
    /// The series role.
    pub role: SeriesRole,
    /// One or more datasets. Bars take several datasets to draw grouped bars.
    pub data: SmallVec<[Vec<DataPoint>; 1]>,
    /// Explicit domain, replacing the data extent.
    pub domain: Option<PerAxis<Domain>>,
    /// Declared categories.
    pub categories: Option<PerAxis<Categories>>,
}

impl SeriesElement {
    /// Creates an empty series.
    pub fn new(role: SeriesRole) -> Self {
        Self {
            role,
            data: SmallVec::new(),
            domain: None,
            categories: None,
        }
    }

    /// Creates an empty bar series.
    pub fn bar() -> Self {
        Self::new(SeriesRole::Bar)
    }

    /// Creates an empty line series.
    pub fn line() -> Self {
        Self::new(SeriesRole::Line)
    }

    /// Creates an empty scatter series.
    pub fn scatter() -> Self {
        Self::new(SeriesRole::Scatter)
    }

    /// Creates an empty area series.
    pub fn area() -> Self {
        Self::new(SeriesRole::Area)
    }

    /// Append a dataset.
    pub fn with_data(mut self, points: impl IntoIterator<Item = DataPoint>) -> Self {
        self.data.push(points.into_iter().collect());
        self
    }

    /// Set the explicit domain.
    pub fn with_domain(mut self, domain: PerAxis<Domain>) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Set categories for the independent axis.
    pub fn with_categories(mut self, categories: Categories) -> Self {
        self.categories = Some(PerAxis::only(AxisKey::Independent, categories));
        self
    }

    /// Set categories per axis key.
    pub fn with_axis_categories(mut self, categories: PerAxis<Categories>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Iterates every data point of every dataset.
    pub fn points(&self) -> impl Iterator<Item = &DataPoint> {
        self.data.iter().flatten()
    }

    /// The domain this series reports for `axis`.
    ///
    /// String values are positioned through `string_map`; strings without a code are ignored.
    pub fn domain(&self, axis: AxisKey, string_map: Option<&StringMap>) -> Option<Domain> {
        if let Some(domain) = self.domain.as_ref().and_then(|d| d.get(axis)) {
            return Some(*domain);
        }
        let values = self.points().filter_map(|p| match p.get(axis) {
            Datum::Number(v) => Some(*v),
            Datum::Text(s) => string_map.and_then(|m| m.code(s)).map(f64::from),
        });
        let (min, max) = extent(values)?;
        if axis == AxisKey::Dependent && self.role.includes_zero() {
            Some((min.min(0.0), max.max(0.0)))
        } else {
            Some((min, max))
        }
    }
}

/// A declared chart child.
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    /// An axis.
    Axis(AxisElement),
    /// A data series.
    Series(SeriesElement),
    /// A node with no chart role (a decoration, a text node, an empty slot).
    Untyped,
}

impl Child {
    /// Returns the role tag, or `None` for untyped children.
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Axis(_) => Some(Role::Axis),
            Self::Series(s) => Some(s.role.role()),
            Self::Untyped => None,
        }
    }

    /// Returns the domain this child reports for `axis`.
    pub fn domain(&self, axis: AxisKey, string_map: Option<&StringMap>) -> Option<Domain> {
        match self {
            Self::Axis(a) => a.domain(axis, string_map),
            Self::Series(s) => s.domain(axis, string_map),
            Self::Untyped => None,
        }
    }

    /// Returns the categories this child declares for `axis`.
    pub fn categories(&self, axis: AxisKey) -> Option<&Categories> {
        match self {
            Self::Series(s) => s.categories.as_ref().and_then(|c| c.get(axis)),
            Self::Axis(_) | Self::Untyped => None,
        }
    }
}

impl From<AxisElement> for Child {
    fn from(value: AxisElement) -> Self {
        Self::Axis(value)
    }
}

impl From<SeriesElement> for Child {
    fn from(value: SeriesElement) -> Self {
        Self::Series(value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn per_axis_shared_applies_to_both_keys() {
        let shared = PerAxis::Shared(3);
        assert_eq!(shared.get(AxisKey::Independent), Some(&3));
        assert_eq!(shared.get(AxisKey::Dependent), Some(&3));

        let only = PerAxis::only(AxisKey::Dependent, 7);
        assert_eq!(only.get(AxisKey::Independent), None);
        assert_eq!(only.get(AxisKey::Dependent), Some(&7));
    }

    #[test]
    fn series_domain_covers_all_datasets() {
        let series = SeriesElement::line()
            .with_data([DataPoint::new(1, 5), DataPoint::new(3, -2)])
            .with_data([DataPoint::new(-4, 8)]);
        assert_eq!(series.domain(AxisKey::Independent, None), Some((-4.0, 3.0)));
        assert_eq!(series.domain(AxisKey::Dependent, None), Some((-2.0, 8.0)));
    }

    #[test]
    fn bar_domain_includes_zero_baseline() {
        let bar = SeriesElement::bar().with_data([DataPoint::new(1, 4), DataPoint::new(2, 9)]);
        assert_eq!(bar.domain(AxisKey::Dependent, None), Some((0.0, 9.0)));
        assert_eq!(bar.domain(AxisKey::Independent, None), Some((1.0, 2.0)));

        let line = SeriesElement::line().with_data([DataPoint::new(1, 4), DataPoint::new(2, 9)]);
        assert_eq!(line.domain(AxisKey::Dependent, None), Some((4.0, 9.0)));
    }

    #[test]
    fn string_values_are_positioned_through_the_map() {
        let map = StringMap::from_strings(["a", "b", "c"]);
        let series = SeriesElement::scatter()
            .with_data([DataPoint::new("b", 1), DataPoint::new("c", 2), DataPoint::new("z", 3)]);
        assert_eq!(
            series.domain(AxisKey::Independent, map.as_ref()),
            Some((2.0, 3.0))
        );
        assert_eq!(series.domain(AxisKey::Independent, None), None);
    }

    #[test]
    fn explicit_series_domain_wins_over_data() {
        let series = SeriesElement::line()
            .with_data([DataPoint::new(1, 1)])
            .with_domain(PerAxis::only(AxisKey::Dependent, (-10.0, 10.0)));
        assert_eq!(series.domain(AxisKey::Dependent, None), Some((-10.0, 10.0)));
        assert_eq!(series.domain(AxisKey::Independent, None), Some((1.0, 1.0)));
    }

    #[test]
    fn untyped_children_report_nothing() {
        assert_eq!(Child::Untyped.role(), None);
        assert_eq!(Child::Untyped.domain(AxisKey::Independent, None), None);
        let bar: Child = SeriesElement::bar()
            .with_categories(Categories::values(vec!["x", "y"]))
            .into();
        assert_eq!(bar.role(), Some(Role::Bar));
        assert_eq!(
            bar.categories(AxisKey::Independent).map(Categories::as_values).map(<[_]>::len),
            Some(2)
        );
        assert_eq!(bar.categories(AxisKey::Dependent), None);
    }
}
