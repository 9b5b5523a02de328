//! Illustrative chart datasets and the small amount of scale math needed to
//! draw them.
//!
//! The numbers are hand-authored sample data, not computed from anything.

use serde::Serialize;

use crate::icon::Swatch;

/// Which chart a content block embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Donut breakdown of line items by coding.
    CostDistribution,
    /// Grouped bars comparing budget and actual cost.
    BudgetVsActual,
}

// =============================================================================
// DONUT
// =============================================================================

/// One slice of a proportion chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonutSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: Swatch,
}

/// Slice border, matching the card background.
pub const DONUT_BORDER: Swatch = Swatch::WHITE;

/// Donut border width in pixels.
pub const DONUT_BORDER_WIDTH: f32 = 4.0;

pub static COST_DISTRIBUTION: [DonutSlice; 4] = [
    DonutSlice {
        label: "Line items with WBS code",
        value: 45.0,
        color: Swatch::rgb(0x3b, 0x82, 0xf6),
    },
    DonutSlice {
        label: "Line items with fund code",
        value: 25.0,
        color: Swatch::rgb(0x8b, 0x5c, 0xf6),
    },
    DonutSlice {
        label: "Line items with both",
        value: 20.0,
        color: Swatch::rgb(0x10, 0xb9, 0x81),
    },
    DonutSlice {
        label: "Other",
        value: 10.0,
        color: Swatch::rgb(0xf5, 0x9e, 0x0b),
    },
];

/// A slice placed on the circle, as fractions of a full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    pub slice: DonutSlice,
    /// Where the slice starts, clockwise from 12 o'clock.
    pub start: f64,
    /// How much of the turn the slice covers.
    pub sweep: f64,
}

impl DonutSegment {
    /// Share of the total as a whole percentage.
    pub fn percent(&self) -> f64 {
        (self.sweep * 100.0).round()
    }
}

/// Lay slices out around the circle in dataset order.
///
/// Non-positive values get no arc. If nothing is positive the result is
/// empty.
pub fn donut_segments(slices: &[DonutSlice]) -> Vec<DonutSegment> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    slices
        .iter()
        .map(|slice| {
            let sweep = slice.value.max(0.0) / total;
            let segment = DonutSegment {
                slice: *slice,
                start,
                sweep,
            };
            start += sweep;
            segment
        })
        .collect()
}

// =============================================================================
// GROUPED BARS
// =============================================================================

/// One series of a grouped bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarSeries {
    pub label: &'static str,
    pub values: &'static [f64],
    pub fill: Swatch,
    pub stroke: Swatch,
}

/// Grouped bar chart data: one group per category, one bar per series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarChart {
    pub categories: &'static [&'static str],
    pub series: &'static [BarSeries],
}

impl BarChart {
    /// Largest value across every series.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Value of `series` at `category`, zero when the series is short.
    pub fn value(&self, series: usize, category: usize) -> f64 {
        self.series
            .get(series)
            .and_then(|s| s.values.get(category))
            .copied()
            .unwrap_or(0.0)
    }
}

const BLUE: Swatch = Swatch::rgb(59, 130, 246);
const RED: Swatch = Swatch::rgb(239, 68, 68);

pub static BUDGET_VS_ACTUAL: BarChart = BarChart {
    categories: &[
        "Commitments",
        "Invoices",
        "Cost Sheet",
        "Journal Entries",
        "Change Orders",
    ],
    series: &[
        BarSeries {
            label: "Budget Amount",
            values: &[100_000.0, 180_000.0, 80_000.0, 150_000.0, 110_000.0],
            fill: BLUE.with_alpha(0.2),
            stroke: BLUE,
        },
        BarSeries {
            label: "Actual Cost",
            values: &[95_000.0, 165_000.0, 75_000.0, 120_000.0, 98_000.0],
            fill: RED.with_alpha(0.2),
            stroke: RED,
        },
    ],
};

/// Bar corner radius in pixels.
pub const BAR_RADIUS: f32 = 8.0;

// =============================================================================
// AXIS
// =============================================================================

/// A zero-based value axis with evenly spaced ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub max: f64,
    pub step: f64,
}

impl Axis {
    /// Choose a "nice" step so that `max_value` fits in at most
    /// `target_ticks` intervals starting at zero.
    pub fn nice(max_value: f64, target_ticks: usize) -> Self {
        let target = target_ticks.max(1) as f64;
        if max_value <= 0.0 || !max_value.is_finite() {
            return Self { max: 1.0, step: 1.0 };
        }

        let rough = max_value / target;
        let magnitude = 10f64.powf(rough.log10().floor());
        let normalized = rough / magnitude;
        let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
            .into_iter()
            .find(|candidate| *candidate >= normalized)
            .unwrap_or(10.0);
        let step = nice * magnitude;
        let max = (max_value / step).ceil() * step;
        Self { max, step }
    }

    /// Tick values from zero to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }

    /// Position of `value` on the axis in `0.0..=1.0`.
    pub fn fraction(&self, value: f64) -> f64 {
        (value / self.max).clamp(0.0, 1.0)
    }
}

/// Format a currency amount in thousands: `100000` becomes `$100K`.
pub fn format_thousands(value: f64) -> String {
    format!("${}K", value / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_formatting_matches_axis_labels() {
        assert_eq!(format_thousands(100_000.0), "$100K");
        assert_eq!(format_thousands(95_000.0), "$95K");
        assert_eq!(format_thousands(0.0), "$0K");
        assert_eq!(format_thousands(2_500.0), "$2.5K");
    }

    #[test]
    fn donut_segments_cover_the_circle_in_order() {
        let segments = donut_segments(&COST_DISTRIBUTION);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].start, 0.0);
        assert!((segments[0].sweep - 0.45).abs() < 1e-9);
        assert!((segments[3].start - 0.90).abs() < 1e-9);
        let total: f64 = segments.iter().map(|s| s.sweep).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(segments[1].percent(), 25.0);
    }

    #[test]
    fn donut_with_no_positive_values_is_empty() {
        let slices = [DonutSlice {
            label: "none",
            value: 0.0,
            color: Swatch::WHITE,
        }];
        assert!(donut_segments(&slices).is_empty());
    }

    #[test]
    fn axis_rounds_up_to_a_nice_step() {
        let axis = Axis::nice(BUDGET_VS_ACTUAL.max_value(), 5);
        assert_eq!(axis.step, 50_000.0);
        assert_eq!(axis.max, 200_000.0);
        assert_eq!(
            axis.ticks(),
            vec![0.0, 50_000.0, 100_000.0, 150_000.0, 200_000.0]
        );
        assert_eq!(axis.fraction(100_000.0), 0.5);
    }

    #[test]
    fn bar_chart_lookups_are_total() {
        assert_eq!(BUDGET_VS_ACTUAL.max_value(), 180_000.0);
        assert_eq!(BUDGET_VS_ACTUAL.value(1, 4), 98_000.0);
        assert_eq!(BUDGET_VS_ACTUAL.value(7, 0), 0.0);
    }
}
