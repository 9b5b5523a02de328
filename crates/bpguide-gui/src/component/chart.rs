//! Canvas charts for the cost management page.
//!
//! Both charts draw static sample data. Values are labelled on the chart
//! itself and a legend sits underneath, since there is no hover tooltip.

use std::f32::consts::{FRAC_PI_2, TAU};

use bpguide_model::{
    Axis, BAR_RADIUS, BUDGET_VS_ACTUAL, BarChart, COST_DISTRIBUTION, ChartKind, DONUT_BORDER,
    DONUT_BORDER_WIDTH, DonutSlice, Swatch, donut_segments, format_thousands,
};
use iced::widget::canvas::{self, Frame, LineDash, Path, Stroke, path::Arc};
use iced::widget::{column, container, row, text};
use iced::{
    Border, Color, Element, Length, Pixels, Point, Radians, Rectangle, Renderer, Size, Theme,
    Vector, mouse,
};

use crate::theme::{CHART_HEIGHT, FONT_SIZE_SMALL, GuideColors, SPACING_MD, SPACING_SM, swatch};

/// Axis and data label size.
const LABEL_SIZE: f32 = 12.0;

/// Space reserved left of the plot for value ticks.
const AXIS_GUTTER: f32 = 56.0;

/// Space reserved under the plot for category names.
const CATEGORY_GUTTER: f32 = 28.0;

/// Space above the tallest bar for its value label.
const TOP_GUTTER: f32 = 20.0;

/// Creates the chart for `kind` with its legend.
pub fn chart<'a, M: 'a>(kind: ChartKind) -> Element<'a, M> {
    match kind {
        ChartKind::CostDistribution => {
            let legend_entries = COST_DISTRIBUTION
                .iter()
                .map(|slice| (slice.label, slice.color))
                .collect();
            column![
                canvas::Canvas::new(Donut {
                    slices: &COST_DISTRIBUTION
                })
                .width(Length::Fill)
                .height(Length::Fixed(CHART_HEIGHT)),
                legend(legend_entries),
            ]
            .spacing(SPACING_MD)
            .into()
        }
        ChartKind::BudgetVsActual => {
            let legend_entries = BUDGET_VS_ACTUAL
                .series
                .iter()
                .map(|series| (series.label, series.stroke))
                .collect();
            column![
                canvas::Canvas::new(Bars {
                    chart: &BUDGET_VS_ACTUAL
                })
                .width(Length::Fill)
                .height(Length::Fixed(CHART_HEIGHT)),
                legend(legend_entries),
            ]
            .spacing(SPACING_MD)
            .into()
        }
    }
}

fn legend<'a, M: 'a>(entries: Vec<(&'static str, Swatch)>) -> Element<'a, M> {
    let mut items = row![].spacing(SPACING_MD);
    for (label, color) in entries {
        let color = swatch(color);
        let chip = container(text(""))
            .width(Length::Fixed(12.0))
            .height(Length::Fixed(12.0))
            .style(move |_theme: &Theme| container::Style {
                background: Some(color.into()),
                border: Border {
                    radius: 2.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            });
        items = items.push(
            row![
                chip,
                text(label)
                    .size(FONT_SIZE_SMALL)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.guide().text_muted),
                    }),
            ]
            .spacing(SPACING_SM)
            .align_y(iced::Alignment::Center),
        );
    }
    container(items.wrap()).center_x(Length::Fill).into()
}

/// Text centered on `at`, roughly: the canvas has no text measurement, so
/// the width is estimated from the character count.
fn centered_label(frame: &mut Frame, content: String, at: Point, color: Color) {
    let width = content.chars().count() as f32 * LABEL_SIZE * 0.55;
    frame.fill_text(canvas::Text {
        content,
        position: Point::new(at.x - width / 2.0, at.y - LABEL_SIZE / 2.0),
        color,
        size: Pixels(LABEL_SIZE),
        ..canvas::Text::default()
    });
}

// =============================================================================
// DONUT
// =============================================================================

struct Donut {
    slices: &'static [DonutSlice],
}

impl<M> canvas::Program<M> for Donut {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let outer = bounds.width.min(bounds.height) / 2.0 - DONUT_BORDER_WIDTH;
        // Half the radius is cut out.
        let thickness = outer / 2.0;
        let radius = outer - thickness / 2.0;
        let segments = donut_segments(self.slices);

        for segment in &segments {
            let start = -FRAC_PI_2 + segment.start as f32 * TAU;
            let end = start + segment.sweep as f32 * TAU;
            let arc = Path::new(|builder| {
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(end),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_color(swatch(segment.slice.color))
                    .with_width(thickness),
            );
        }

        // Slice borders are drawn on top as radial separators.
        for segment in &segments {
            let angle = -FRAC_PI_2 + segment.start as f32 * TAU;
            let direction = Vector::new(angle.cos(), angle.sin());
            let separator = Path::line(
                center + direction * (outer - thickness),
                center + direction * outer,
            );
            frame.stroke(
                &separator,
                Stroke::default()
                    .with_color(swatch(DONUT_BORDER))
                    .with_width(DONUT_BORDER_WIDTH),
            );
        }

        for segment in &segments {
            let mid = -FRAC_PI_2 + (segment.start + segment.sweep / 2.0) as f32 * TAU;
            let at = center + Vector::new(mid.cos(), mid.sin()) * radius;
            centered_label(
                &mut frame,
                format!("{}%", segment.percent()),
                at,
                Color::WHITE,
            );
        }

        vec![frame.into_geometry()]
    }
}

// =============================================================================
// GROUPED BARS
// =============================================================================

struct Bars {
    chart: &'static BarChart,
}

impl<M> canvas::Program<M> for Bars {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let guide = theme.guide();
        let mut frame = Frame::new(renderer, bounds.size());

        let plot = Rectangle {
            x: AXIS_GUTTER,
            y: TOP_GUTTER,
            width: (bounds.width - AXIS_GUTTER).max(1.0),
            height: (bounds.height - CATEGORY_GUTTER - TOP_GUTTER).max(1.0),
        };
        let axis = Axis::nice(self.chart.max_value(), 5);
        let y_of = |value: f64| plot.y + plot.height * (1.0 - axis.fraction(value) as f32);

        // Dashed horizontal grid with value ticks.
        for tick in axis.ticks() {
            let y = y_of(tick);
            let grid = Path::line(Point::new(plot.x, y), Point::new(plot.x + plot.width, y));
            frame.stroke(
                &grid,
                Stroke {
                    line_dash: LineDash {
                        segments: &[2.0, 4.0],
                        offset: 0,
                    },
                    ..Stroke::default()
                        .with_color(guide.border_subtle)
                        .with_width(1.0)
                },
            );
            let label = format_thousands(tick);
            let width = label.chars().count() as f32 * LABEL_SIZE * 0.55;
            frame.fill_text(canvas::Text {
                content: label,
                position: Point::new(plot.x - width - 8.0, y - LABEL_SIZE / 2.0),
                color: guide.text_muted,
                size: Pixels(LABEL_SIZE),
                ..canvas::Text::default()
            });
        }

        let categories = self.chart.categories.len().max(1);
        let series_count = self.chart.series.len().max(1);
        let group_width = plot.width / categories as f32;
        let slot = group_width * 0.8 / series_count as f32;
        let bar_width = slot * 0.9;

        for (category_index, category) in self.chart.categories.iter().enumerate() {
            let group_x = plot.x + group_width * category_index as f32;

            for (series_index, series) in self.chart.series.iter().enumerate() {
                let value = self.chart.value(series_index, category_index);
                let top = y_of(value);
                let x = group_x + group_width * 0.1 + slot * series_index as f32 + slot * 0.05;
                let bar = Path::rounded_rectangle(
                    Point::new(x, top),
                    Size::new(bar_width, plot.y + plot.height - top),
                    BAR_RADIUS.into(),
                );
                frame.fill(&bar, swatch(series.fill));
                frame.stroke(
                    &bar,
                    Stroke::default()
                        .with_color(swatch(series.stroke))
                        .with_width(2.0),
                );
                centered_label(
                    &mut frame,
                    format_thousands(value),
                    Point::new(x + bar_width / 2.0, top - LABEL_SIZE),
                    guide.text_muted,
                );
            }

            centered_label(
                &mut frame,
                (*category).to_string(),
                Point::new(
                    group_x + group_width / 2.0,
                    plot.y + plot.height + CATEGORY_GUTTER / 2.0,
                ),
                guide.text_muted,
            );
        }

        vec![frame.into_geometry()]
    }
}
