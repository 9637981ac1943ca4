// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child selection.
//!
//! A chart draws at most one axis per axis key and at most one bar series (bars group several
//! datasets themselves). Extra children are dropped with a warning; missing axes are filled in
//! from [`DefaultAxes`].

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::axis::{AxisElement, AxisKey};
use crate::element::{Child, Role, SeriesRole};

/// The axes injected when the chart declares none for an axis key.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultAxes {
    /// Used when no independent axis is declared.
    pub independent: Child,
    /// Used when no dependent axis is declared.
    pub dependent: Child,
}

impl Default for DefaultAxes {
    fn default() -> Self {
        Self {
            independent: Child::Axis(AxisElement::independent()),
            dependent: Child::Axis(AxisElement::dependent()),
        }
    }
}

impl DefaultAxes {
    /// Returns the default axis for `axis`.
    pub fn get(&self, axis: AxisKey) -> &Child {
        match axis {
            AxisKey::Independent => &self.independent,
            AxisKey::Dependent => &self.dependent,
        }
    }
}

/// A child dropped by [`select_children`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// A second axis for the same axis key.
    Axis {
        /// The axis key that already has an axis.
        axis: AxisKey,
        /// Position of the dropped child in the declared list.
        index: usize,
    },
    /// A second child of a role limited to one per chart.
    Role {
        /// The limited role.
        role: Role,
        /// Position of the dropped child in the declared list.
        index: usize,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axis { axis, index } => write!(
                f,
                "only one {axis} axis is allowed per chart; using the first and ignoring the \
                 axis at position {index}. Compose multi-axis charts manually."
            ),
            Self::Role { role, index } => write!(
                f,
                "only one {role} series is allowed per chart; ignoring the {role} at position \
                 {index}. To plot several datasets, pass them all to a single {role} series."
            ),
        }
    }
}

/// The outcome of [`select_children`].
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<'a> {
    /// The children to lay out, in declaration order, followed by any injected default axes.
    pub children: Vec<&'a Child>,
    /// Children that were dropped, in declaration order.
    pub rejections: Vec<Rejection>,
}

/// The cardinality bucket a child is counted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Axis(AxisKey),
    Bar,
    Unlimited,
}

impl Slot {
    fn of(child: &Child) -> Option<Self> {
        match child {
            Child::Axis(a) => Some(Self::Axis(a.axis_key())),
            Child::Series(s) if s.role == SeriesRole::Bar => Some(Self::Bar),
            Child::Series(_) => Some(Self::Unlimited),
            Child::Untyped => None,
        }
    }

    /// The rejection for the `count`-th occurrence, if that is over the limit.
    fn over_limit(self, count: usize, index: usize) -> Option<Rejection> {
        match self {
            Self::Axis(axis) if count > 1 => Some(Rejection::Axis { axis, index }),
            Self::Bar if count > 1 => Some(Rejection::Role {
                role: Role::Bar,
                index,
            }),
            Self::Axis(_) | Self::Bar | Self::Unlimited => None,
        }
    }
}

/// Occurrences seen so far in one selection pass. Rejected children still count.
#[derive(Clone, Copy, Debug, Default)]
struct SlotCounts {
    independent_axis: usize,
    dependent_axis: usize,
    bar: usize,
}

impl SlotCounts {
    /// Records one occurrence and returns the new count for `slot`.
    fn record(&mut self, slot: Slot) -> usize {
        let count = match slot {
            Slot::Axis(AxisKey::Independent) => &mut self.independent_axis,
            Slot::Axis(AxisKey::Dependent) => &mut self.dependent_axis,
            Slot::Bar => &mut self.bar,
            Slot::Unlimited => return 0,
        };
        *count += 1;
        *count
    }

    fn axes(&self, axis: AxisKey) -> usize {
        match axis {
            AxisKey::Independent => self.independent_axis,
            AxisKey::Dependent => self.dependent_axis,
        }
    }
}

/// Selects the children to lay out.
///
/// Children without a role are skipped silently. A child over its role's limit is dropped,
/// logged with `log::warn!` and reported in [`Selection::rejections`]. Afterwards, every axis key
/// without a declared axis gets its default axis appended (independent first).
pub fn select_children<'a>(children: &'a [Child], defaults: &'a DefaultAxes) -> Selection<'a> {
    let mut counts = SlotCounts::default();
    let mut selected = Vec::with_capacity(children.len() + 2);
    let mut rejections = Vec::new();

    for (index, child) in children.iter().enumerate() {
        let Some(slot) = Slot::of(child) else {
            continue;
        };
        let count = counts.record(slot);
        if let Some(rejection) = slot.over_limit(count, index) {
            log::warn!("{rejection}");
            rejections.push(rejection);
        } else {
            selected.push(child);
        }
    }

    for axis in AxisKey::ALL {
        if counts.axes(axis) == 0 {
            selected.push(defaults.get(axis));
        }
    }

    Selection {
        children: selected,
        rejections,
    }
}
