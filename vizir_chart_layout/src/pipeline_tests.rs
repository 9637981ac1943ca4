// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Insets, Size};

use crate::{
    AxisElement, AxisKey, AxisOrient, AxisPair, Categories, ChartCalculation, ChartProps, Child,
    DataPoint, DefaultAxes, PerAxis, Rejection, Role, SeriesElement, SeriesRole, TickFormat,
};

fn labels(format: &TickFormat, positions: impl IntoIterator<Item = f64>) -> Vec<String> {
    positions.into_iter().map(|p| format.format(p)).collect()
}

fn is_bar(child: &Child) -> bool {
    matches!(child, Child::Series(s) if s.role == SeriesRole::Bar)
}

#[test]
fn selection_keeps_one_axis_per_key_and_one_bar() {
    let defaults = DefaultAxes::default();
    let lists: Vec<Vec<Child>> = vec![
        vec![],
        vec![Child::Untyped],
        vec![
            AxisElement::independent().into(),
            AxisElement::independent().into(),
            AxisElement::dependent().into(),
            AxisElement::dependent().into(),
        ],
        vec![
            SeriesElement::bar().into(),
            SeriesElement::bar().into(),
            SeriesElement::bar().into(),
            SeriesElement::scatter().into(),
            SeriesElement::scatter().into(),
        ],
        vec![
            AxisElement::dependent()
                .with_orientation(AxisOrient::Right)
                .into(),
            AxisElement::independent()
                .with_orientation(AxisOrient::Left)
                .into(),
            SeriesElement::area().into(),
        ],
    ];

    for children in &lists {
        let calc = ChartCalculation::compute(&ChartProps::default(), children, &defaults);
        for axis in AxisKey::ALL {
            let count = calc
                .children
                .iter()
                .filter(|c| matches!(c, Child::Axis(a) if a.axis_key() == axis))
                .count();
            assert_eq!(count, 1, "{axis} axes in {children:?}");
        }
        assert!(calc.children.iter().filter(|c| is_bar(c)).count() <= 1);
        assert!(calc.children.iter().all(|c| c.role().is_some()));
    }
}

#[test]
fn rejected_bar_does_not_contribute_categories() {
    let defaults = DefaultAxes::default();
    let children = [
        Child::from(
            SeriesElement::bar()
                .with_categories(Categories::groups([vec![1.0, 3.0], vec![5.0, 7.0]])),
        ),
        Child::from(SeriesElement::bar().with_categories(Categories::values([2.0, 6.0, 9.0]))),
    ];
    let calc = ChartCalculation::compute(&ChartProps::default(), &children, &defaults);
    assert_eq!(calc.categories, Some(vec![2.0, 6.0]));
    assert_eq!(
        calc.rejections,
        vec![Rejection::Role {
            role: Role::Bar,
            index: 1
        }]
    );
}

#[test]
fn string_categories_become_bar_centers() {
    let defaults = DefaultAxes::default();
    let children = [Child::from(
        SeriesElement::bar()
            .with_data([DataPoint::new("a", 3), DataPoint::new("b", 5)])
            .with_categories(Categories::values(["a", "b"])),
    )];
    let calc = ChartCalculation::compute(&ChartProps::default(), &children, &defaults);
    assert_eq!(calc.categories, Some(vec![1.0, 2.0]));
}

#[test]
fn string_codes_are_dense() {
    let defaults = DefaultAxes::default();
    let children = [
        Child::from(AxisElement::independent().with_tick_labels(["mon", "tue"])),
        Child::from(SeriesElement::line().with_data([
            DataPoint::new("wed", 1),
            DataPoint::new("mon", 2),
            DataPoint::new("thu", 3),
            DataPoint::new("wed", 4),
        ])),
    ];
    let calc = ChartCalculation::compute(&ChartProps::default(), &children, &defaults);
    let map = calc
        .string_maps
        .independent
        .as_ref()
        .expect("categorical x axis");
    let mut codes: Vec<u32> = map.iter().map(|(_, code)| code).collect();
    codes.sort_unstable();
    assert_eq!(codes, vec![1, 2, 3, 4]);
    assert_eq!(map.code("thu"), Some(4));
}

#[test]
fn child_domains_merge_without_padding() {
    let defaults = DefaultAxes::default();
    let children = [
        Child::from(SeriesElement::line().with_domain(PerAxis::Shared((2.0, 8.0)))),
        Child::from(SeriesElement::scatter().with_domain(PerAxis::Shared((-1.0, 5.0)))),
    ];
    let props = ChartProps::default().with_domain_padding(PerAxis::Shared(0.0));
    let calc = ChartCalculation::compute(&props, &children, &defaults);
    assert_eq!(calc.domains, AxisPair::new((-1.0, 8.0), (-1.0, 8.0)));
}

#[test]
fn categorical_axis_ticks_and_labels() {
    let defaults = DefaultAxes::default();
    let children = [Child::from(SeriesElement::scatter().with_data([
        DataPoint::new("a", 4),
        DataPoint::new("b", 1),
        DataPoint::new("c", 9),
    ]))];
    let calc = ChartCalculation::compute(&ChartProps::default(), &children, &defaults);
    assert_eq!(calc.domains.independent, (1.0, 3.0));
    assert_eq!(calc.ticks.independent, Some(vec![1.0, 2.0, 3.0]));
    assert_eq!(
        labels(&calc.tick_formats.independent, [0.0, 1.0, 2.0, 3.0, 4.0]),
        vec!["", "a", "b", "c", ""]
    );

    // The numeric axis falls back to the scale's formatter.
    assert_eq!(calc.ticks.dependent, None);
    assert!(matches!(calc.tick_formats.dependent, TickFormat::Custom(_)));
    assert_eq!(calc.tick_formats.dependent.format(4.0), "4");
}

#[test]
fn explicit_numeric_ticks_ignore_the_string_map() {
    let defaults = DefaultAxes::default();
    let children = [
        Child::from(AxisElement::independent().with_tick_values([0.5, 2.0, 7.0])),
        Child::from(SeriesElement::line().with_data([
            DataPoint::new("a", 1),
            DataPoint::new("b", 2),
        ])),
    ];
    let calc = ChartCalculation::compute(&ChartProps::default(), &children, &defaults);
    assert!(calc.string_maps.independent.is_some());
    assert_eq!(calc.ticks.independent, Some(vec![0.5, 2.0, 7.0]));
    assert_eq!(
        calc.tick_labels(AxisKey::Independent),
        Some(vec!["0.5".into(), "2".into(), "7".into()])
    );
}

#[test]
fn offset_crosses_at_zero() {
    let defaults = DefaultAxes::default();
    let props = ChartProps::default()
        .with_size(Size::new(400.0, 300.0))
        .with_domain(PerAxis::only(AxisKey::Independent, (-2.0, 10.0)));
    let calc = ChartCalculation::compute(&props, &[], &defaults);
    assert_eq!(calc.domains.independent, (-2.0, 10.0));
    assert_eq!(
        calc.offset.x,
        (0.0 - calc.scales.independent.map(0.0)).abs()
    );
}

#[test]
fn right_axis_reverses_the_independent_domain() {
    let defaults = DefaultAxes::default();
    let children = [
        Child::from(AxisElement::dependent().with_orientation(AxisOrient::Right)),
        Child::from(SeriesElement::line().with_data([
            DataPoint::new(0, 0),
            DataPoint::new(10, 5),
        ])),
    ];
    let props = ChartProps::default()
        .with_size(Size::new(400.0, 300.0))
        .with_padding(Insets::ZERO);
    let calc = ChartCalculation::compute(&props, &children, &defaults);
    assert_eq!(calc.orientations.dependent, AxisOrient::Right);
    assert_eq!(calc.domains.independent, (10.0, 0.0));
    // Zero now maps to the right edge, where the axis is anchored.
    assert_eq!(calc.offset.x, 0.0);
}

#[test]
fn pipeline_is_idempotent() {
    let defaults = DefaultAxes::default();
    let children = [
        Child::from(AxisElement::dependent().with_orientation(AxisOrient::Right)),
        Child::from(
            SeriesElement::bar()
                .with_data([DataPoint::new("q1", 3), DataPoint::new("q2", -2)])
                .with_categories(Categories::values(["q2", "q1"])),
        ),
        Child::from(SeriesElement::bar()),
        Child::from(SeriesElement::line().with_data([DataPoint::new("q3", 8)])),
        Child::Untyped,
    ];
    let props = ChartProps::default().with_domain_padding(PerAxis::Shared(20.0));

    let first = ChartCalculation::compute(&props, &children, &defaults);
    let second = ChartCalculation::compute(&props, &children, &defaults);

    assert_eq!(first.children, second.children);
    assert_eq!(first.rejections, second.rejections);
    assert_eq!(first.string_maps, second.string_maps);
    assert_eq!(first.domains, second.domains);
    assert_eq!(first.scales, second.scales);
    assert_eq!(first.categories, second.categories);
    assert_eq!(first.ticks, second.ticks);
    for axis in AxisKey::ALL {
        assert_eq!(first.tick_labels(axis), second.tick_labels(axis));
    }
    assert_eq!(first.offset.x.to_bits(), second.offset.x.to_bits());
    assert_eq!(first.offset.y.to_bits(), second.offset.y.to_bits());
}
