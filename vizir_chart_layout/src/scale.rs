// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scale seam.
//!
//! Layout needs two things from a scale: a data-to-pixel mapping (to place the axis crossing)
//! and, optionally, a default tick label formatter. [`ScaleLinear`] is the stock
//! implementation; renderers with their own scales implement [`Scale`] directly.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::domain::Domain;

/// A tick label formatter: tick position to label.
pub type TickFormatFn = Arc<dyn Fn(f64) -> String>;

/// Tick count used when a scale picks its own ticks.
const DEFAULT_TICK_COUNT: usize = 10;

/// Maps data values to pixel coordinates.
pub trait Scale {
    /// Maps a value from domain space into range space.
    fn map(&self, value: f64) -> f64;

    /// The scale's own tick label formatter, if it has one.
    fn tick_format(&self) -> Option<TickFormatFn> {
        None
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: Domain,
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: Domain, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns “nice-ish” tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

impl Scale for ScaleLinear {
    fn map(&self, value: f64) -> f64 {
        Self::map(self, value)
    }

    /// Formats labels with as many decimals as the default tick step needs.
    fn tick_format(&self) -> Option<TickFormatFn> {
        let step = tick_step(&self.ticks(DEFAULT_TICK_COUNT));
        Some(Arc::new(move |v| format_with_step(v, step)))
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step = nice_step(span / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    // Unlike a "nice" domain, ticks stay inside the domain.
    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

/// Formats `v` with just enough decimals to tell ticks `step` apart.
fn format_with_step(v: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        // Nice steps are `m * 10^k`; allow for `log10` landing just below an integer.
        let d = (-(step.log10() + 1e-9).floor()).clamp(0.0, 12.0);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=12")]
        {
            d as usize
        }
    } else {
        0
    };
    // Avoid printing `-0`.
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v:.decimals$}")
}
