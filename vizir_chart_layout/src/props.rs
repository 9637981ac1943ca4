// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-level configuration.

use kurbo::{Insets, Size};

use crate::axis::AxisKey;
use crate::domain::Domain;
use crate::element::PerAxis;
use crate::error::PropsError;

/// Props of the composing chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartProps {
    /// Overall chart size in pixels.
    pub size: Size,
    /// Space between the chart edge and the plot area.
    ///
    /// `x0`/`y0`/`x1`/`y1` are the left/top/right/bottom paddings.
    pub padding: Insets,
    /// Explicit domain, replacing whatever the children report.
    pub domain: Option<PerAxis<Domain>>,
    /// Extra room, in pixels, added at both ends of each domain.
    pub domain_padding: Option<PerAxis<f64>>,
}

impl Default for ChartProps {
    /// A 450x300 chart with 50px padding on every side.
    fn default() -> Self {
        Self {
            size: Size::new(450.0, 300.0),
            padding: Insets::uniform(50.0),
            domain: None,
            domain_padding: None,
        }
    }
}

impl ChartProps {
    /// Set the chart size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the plot padding.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set an explicit domain.
    pub fn with_domain(mut self, domain: PerAxis<Domain>) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Set the domain padding in pixels.
    pub fn with_domain_padding(mut self, padding: PerAxis<f64>) -> Self {
        self.domain_padding = Some(padding);
        self
    }

    /// The pixel range `axis` is mapped onto.
    ///
    /// The dependent range runs bottom-up, so its first endpoint is the larger one.
    pub fn range(&self, axis: AxisKey) -> (f64, f64) {
        let p = self.padding;
        match axis {
            AxisKey::Independent => (p.x0, self.size.width - p.x1),
            AxisKey::Dependent => (self.size.height - p.y1, p.y0),
        }
    }

    /// Checks the configuration.
    ///
    /// Computation never requires this; it reports inputs that would produce surprising
    /// results.
    pub fn validate(&self) -> Result<(), PropsError> {
        let Size { width, height } = self.size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PropsError::InvalidSize { width, height });
        }
        for axis in AxisKey::ALL {
            if let Some(&(min, max)) = self.domain.as_ref().and_then(|d| d.get(axis))
                && !(min.is_finite() && max.is_finite())
            {
                return Err(PropsError::NonFiniteDomain { axis, min, max });
            }
            if let Some(&padding) = self.domain_padding.as_ref().and_then(|p| p.get(axis))
                && !(padding.is_finite() && padding >= 0.0)
            {
                return Err(PropsError::InvalidDomainPadding { axis, padding });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn ranges_follow_padding() {
        let props = ChartProps::default()
            .with_size(Size::new(400.0, 300.0))
            .with_padding(Insets::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(props.range(AxisKey::Independent), (10.0, 370.0));
        assert_eq!(props.range(AxisKey::Dependent), (260.0, 20.0));
    }

    #[test]
    fn default_props_are_valid() {
        assert_eq!(ChartProps::default().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_bad_inputs() {
        let zero = ChartProps::default().with_size(Size::new(0.0, 300.0));
        assert!(matches!(zero.validate(), Err(PropsError::InvalidSize { .. })));

        let nan = ChartProps::default().with_domain(PerAxis::only(AxisKey::Dependent, (0.0, f64::NAN)));
        assert!(matches!(
            nan.validate(),
            Err(PropsError::NonFiniteDomain {
                axis: AxisKey::Dependent,
                ..
            })
        ));

        let negative = ChartProps::default().with_domain_padding(PerAxis::Shared(-4.0));
        assert_eq!(
            negative.validate(),
            Err(PropsError::InvalidDomainPadding {
                axis: AxisKey::Independent,
                padding: -4.0
            })
        );
    }
}
