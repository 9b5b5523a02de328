//! Inline SVG geometry for the two charts.
//!
//! Coordinates are computed here and handed to the template as strings, so
//! the template only places attributes.

use std::f64::consts::{FRAC_PI_2, TAU};

use bpguide_model::{
    Axis, BAR_RADIUS, BarChart, DONUT_BORDER, DONUT_BORDER_WIDTH, DonutSlice, donut_segments,
    format_thousands,
};

const DONUT_WIDTH: f64 = 400.0;
const DONUT_HEIGHT: f64 = 320.0;

const BARS_WIDTH: f64 = 720.0;
const BARS_HEIGHT: f64 = 320.0;
const AXIS_GUTTER: f64 = 64.0;
const CATEGORY_GUTTER: f64 = 32.0;
const TOP_GUTTER: f64 = 24.0;

/// A legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: String,
}

/// One donut slice as an annular sector path.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub d: String,
    pub fill: String,
    pub tooltip: String,
    pub label_x: String,
    pub label_y: String,
    pub percent: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Donut {
    pub view_box: String,
    pub border: String,
    pub border_width: String,
    pub arcs: Vec<Arc>,
    pub legend: Vec<LegendEntry>,
}

/// Lay out a donut with the inner half of the radius cut out.
pub fn donut(slices: &[DonutSlice]) -> Donut {
    let (cx, cy) = (DONUT_WIDTH / 2.0, DONUT_HEIGHT / 2.0);
    let outer = DONUT_HEIGHT / 2.0 - f64::from(DONUT_BORDER_WIDTH) * 2.0;
    let inner = outer / 2.0;
    let label_radius = (outer + inner) / 2.0;

    let arcs = donut_segments(slices)
        .iter()
        .filter(|segment| segment.sweep > 0.0)
        .map(|segment| {
            // A full turn has coincident endpoints; stop just short of it.
            let sweep = segment.sweep.min(0.9999);
            let start = -FRAC_PI_2 + segment.start * TAU;
            let end = start + sweep * TAU;
            let large = u8::from(sweep > 0.5);
            let point = |radius: f64, angle: f64| {
                (cx + radius * angle.cos(), cy + radius * angle.sin())
            };
            let (ox0, oy0) = point(outer, start);
            let (ox1, oy1) = point(outer, end);
            let (ix1, iy1) = point(inner, end);
            let (ix0, iy0) = point(inner, start);
            let mid = start + sweep * TAU / 2.0;
            let (lx, ly) = point(label_radius, mid);

            Arc {
                d: format!(
                    "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 {large} 1 {ox1:.2} {oy1:.2} \
                     L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
                ),
                fill: segment.slice.color.css(),
                tooltip: format!("{}: {}%", segment.slice.label, segment.slice.value),
                label_x: format!("{lx:.2}"),
                label_y: format!("{ly:.2}"),
                percent: format!("{}%", segment.percent()),
            }
        })
        .collect();

    Donut {
        view_box: format!("0 0 {DONUT_WIDTH} {DONUT_HEIGHT}"),
        border: DONUT_BORDER.css(),
        border_width: DONUT_BORDER_WIDTH.to_string(),
        arcs,
        legend: slices
            .iter()
            .map(|slice| LegendEntry {
                label: slice.label,
                color: slice.color.css(),
            })
            .collect(),
    }
}

/// A horizontal grid line with its value tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub y: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    pub fill: String,
    pub stroke: String,
    pub tooltip: String,
}

/// A category name under its bar group.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabel {
    pub x: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bars {
    pub view_box: String,
    pub plot_left: String,
    pub plot_right: String,
    pub tick_x: String,
    pub category_y: String,
    pub radius: String,
    pub grid: Vec<GridLine>,
    pub bars: Vec<Bar>,
    pub categories: Vec<CategoryLabel>,
    pub legend: Vec<LegendEntry>,
}

/// Lay out a grouped bar chart on a zero-based axis.
pub fn bars(chart: &BarChart) -> Bars {
    let plot_x = AXIS_GUTTER;
    let plot_y = TOP_GUTTER;
    let plot_width = BARS_WIDTH - AXIS_GUTTER;
    let plot_height = BARS_HEIGHT - CATEGORY_GUTTER - TOP_GUTTER;
    let axis = Axis::nice(chart.max_value(), 5);
    let y_of = |value: f64| plot_y + plot_height * (1.0 - axis.fraction(value));

    let grid = axis
        .ticks()
        .into_iter()
        .map(|tick| GridLine {
            y: format!("{:.2}", y_of(tick)),
            label: format_thousands(tick),
        })
        .collect();

    let group_width = plot_width / chart.categories.len().max(1) as f64;
    let slot = group_width * 0.8 / chart.series.len().max(1) as f64;
    let bar_width = slot * 0.9;

    let mut bars = Vec::new();
    let mut categories = Vec::new();
    for (category_index, category) in chart.categories.iter().enumerate() {
        let group_x = plot_x + group_width * category_index as f64;
        for (series_index, series) in chart.series.iter().enumerate() {
            let value = chart.value(series_index, category_index);
            let top = y_of(value);
            let x = group_x + group_width * 0.1 + slot * series_index as f64 + slot * 0.05;
            bars.push(Bar {
                x: format!("{x:.2}"),
                y: format!("{top:.2}"),
                width: format!("{bar_width:.2}"),
                height: format!("{:.2}", plot_y + plot_height - top),
                fill: series.fill.css(),
                stroke: series.stroke.css(),
                tooltip: format!("{category} - {}: {}", series.label, format_thousands(value)),
            });
        }
        categories.push(CategoryLabel {
            x: format!("{:.2}", group_x + group_width / 2.0),
            label: *category,
        });
    }

    Bars {
        view_box: format!("0 0 {BARS_WIDTH} {BARS_HEIGHT}"),
        plot_left: format!("{plot_x:.2}"),
        plot_right: format!("{:.2}", plot_x + plot_width),
        tick_x: format!("{:.2}", plot_x - 8.0),
        category_y: format!("{:.2}", plot_y + plot_height + CATEGORY_GUTTER / 2.0 + 4.0),
        radius: BAR_RADIUS.to_string(),
        grid,
        bars,
        categories,
        legend: chart
            .series
            .iter()
            .map(|series| LegendEntry {
                label: series.label,
                color: series.stroke.css(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use bpguide_model::{BUDGET_VS_ACTUAL, COST_DISTRIBUTION};

    use super::*;

    #[test]
    fn donut_has_one_arc_per_slice_in_order() {
        let chart = donut(&COST_DISTRIBUTION);
        assert_eq!(chart.arcs.len(), 4);
        assert_eq!(chart.arcs[0].percent, "45%");
        assert_eq!(chart.arcs[3].percent, "10%");
        assert!(chart.arcs[0].tooltip.starts_with("Line items with WBS code"));
        // First slice starts at 12 o'clock.
        assert!(chart.arcs[0].d.starts_with("M 200.00 "));
    }

    #[test]
    fn only_slices_over_half_use_the_large_arc_flag() {
        let slices = [
            DonutSlice {
                label: "big",
                value: 3.0,
                color: DONUT_BORDER,
            },
            DonutSlice {
                label: "small",
                value: 1.0,
                color: DONUT_BORDER,
            },
        ];
        let chart = donut(&slices);
        assert!(chart.arcs[0].d.contains(" 0 1 1 "));
        assert!(chart.arcs[1].d.contains(" 0 0 1 "));
    }

    #[test]
    fn bars_use_thousands_labels() {
        let chart = bars(&BUDGET_VS_ACTUAL);
        assert_eq!(chart.bars.len(), 10);
        assert_eq!(chart.categories.len(), 5);
        assert_eq!(chart.grid.first().map(|g| g.label.as_str()), Some("$0K"));
        assert_eq!(chart.grid.last().map(|g| g.label.as_str()), Some("$200K"));
        assert_eq!(chart.bars[0].tooltip, "Commitments - Budget Amount: $100K");
        assert_eq!(chart.bars[1].tooltip, "Commitments - Actual Cost: $95K");
    }

    #[test]
    fn taller_values_reach_higher() {
        let chart = bars(&BUDGET_VS_ACTUAL);
        let top = |i: usize| chart.bars[i].y.parse::<f64>().unwrap_or(f64::NAN);
        // Invoices budget (180K) is above commitments budget (100K).
        assert!(top(2) < top(0));
    }
}
