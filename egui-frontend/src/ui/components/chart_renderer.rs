//! # Chart Renderer Module
//!
//! The egui side of the chart presenter: a [`ChartSurface`] that keeps the
//! created chart and paints it with `egui_plot` every frame.
//!
//! ## Key Functions:
//! - `EguiChartSurface` - holds the live chart between frames
//! - `draw_chart_section()` - chart controls plus the plot itself
//!
//! Each created chart gets its own plot id, so a redraw starts from fresh
//! plot memory instead of inheriting bounds from the chart it replaced.

use eframe::egui;
use egui_plot::{Bar, BarChart, CoordinatesFormatter, Corner, GridMark, Legend, Line, Plot, PlotPoints, Points};
use log::{debug, warn};
use shared::{ChartKind, ChartMetric, ChartPeriod, ChartSelection};

use crate::backend::domain::chart_service::{smooth_line, ChartSpec, ChartSurface};
use crate::backend::domain::DashboardCommand;
use crate::ui::components::theme::to_color32;

/// Interpolated samples per segment when a line chart is smoothed
const SMOOTHING_SAMPLES: usize = 12;
const CHART_HEIGHT: f32 = 280.0;

/// Proof of a chart created on an [`EguiChartSurface`]
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle(u64);

struct LiveChart {
    id: u64,
    spec: ChartSpec,
    /// Line path after smoothing, unused for bar charts
    path: Vec<[f64; 2]>,
}

#[derive(Default)]
pub struct EguiChartSurface {
    next_id: u64,
    live: Vec<LiveChart>,
}

impl EguiChartSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_chart_count(&self) -> usize {
        self.live.len()
    }

    /// Spec of the chart currently painted
    pub fn active_spec(&self) -> Option<&ChartSpec> {
        self.live.last().map(|chart| &chart.spec)
    }

    /// Paint the live chart into `ui`
    pub fn draw(&self, ui: &mut egui::Ui) {
        let Some(chart) = self.live.last() else {
            ui.label("No chart selected");
            return;
        };
        if self.live.len() > 1 {
            warn!("CHART: {} charts alive, painting the newest", self.live.len());
        }

        let spec = &chart.spec;
        let style = spec.style;
        let border = to_color32(style.border);
        let fill = to_color32(style.fill);
        let labels = spec.labels.clone();
        let axis_labels = spec.labels.clone();
        let label_count = labels.len();

        let mut plot = Plot::new(("sales_chart", chart.id))
            .height(CHART_HEIGHT)
            .legend(Legend::default().position(Corner::LeftTop))
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_x(false)
            .x_grid_spacer(move |_input| {
                (0..label_count)
                    .map(|i| GridMark { value: i as f64, step_size: 1.0 })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| axis_label(&axis_labels, mark.value))
            .coordinates_formatter(
                Corner::RightBottom,
                CoordinatesFormatter::new(move |point, _bounds| {
                    let label = axis_label(&labels, point.x.round());
                    if label.is_empty() {
                        format!("{:.0}", point.y)
                    } else {
                        format!("{}: {:.0}", label, point.y)
                    }
                }),
            );
        if style.begin_at_zero {
            plot = plot.include_y(0.0);
        }

        plot.show(ui, |plot_ui| match spec.kind() {
            ChartKind::Line => {
                let mut line = Line::new(PlotPoints::from(chart.path.clone()))
                    .color(border)
                    .width(style.border_width)
                    .name(&spec.series_label);
                if style.fill_area {
                    line = line.fill(0.0);
                }
                plot_ui.line(line);

                if style.point_radius > 0.0 {
                    plot_ui.points(
                        Points::new(PlotPoints::from(spec.points()))
                            .radius(style.point_radius)
                            .color(border)
                            .filled(true),
                    );
                }
            }
            ChartKind::Bar => {
                let bars: Vec<Bar> = spec
                    .points()
                    .into_iter()
                    .zip(&spec.labels)
                    .map(|([x, y], label)| {
                        Bar::new(x, y)
                            .name(label)
                            .fill(fill)
                            .stroke(egui::Stroke::new(style.border_width, border))
                            .width(0.6)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(&spec.series_label).color(border));
            }
        });
    }
}

/// Category label for an x position, empty between or beyond the categories
fn axis_label(labels: &[String], x: f64) -> String {
    if x < 0.0 || x.fract() != 0.0 {
        return String::new();
    }
    labels.get(x as usize).cloned().unwrap_or_default()
}

impl ChartSurface for EguiChartSurface {
    type Handle = ChartHandle;

    fn create(&mut self, spec: &ChartSpec) -> ChartHandle {
        self.next_id += 1;
        let path = match spec.kind() {
            ChartKind::Line => smooth_line(&spec.points(), spec.style.tension, SMOOTHING_SAMPLES),
            ChartKind::Bar => Vec::new(),
        };
        self.live.push(LiveChart {
            id: self.next_id,
            spec: spec.clone(),
            path,
        });
        debug!("CHART: created chart #{}", self.next_id);
        ChartHandle(self.next_id)
    }

    fn destroy(&mut self, handle: ChartHandle) {
        self.live.retain(|chart| chart.id != handle.0);
        debug!("CHART: destroyed chart #{}", handle.0);
    }
}

/// Chart card: period/metric/kind selectors followed by the plot
pub fn draw_chart_section(
    ui: &mut egui::Ui,
    selection: ChartSelection,
    surface: &EguiChartSurface,
    commands: &mut Vec<DashboardCommand>,
) {
    ui.horizontal(|ui| {
        let mut period = selection.period;
        egui::ComboBox::from_id_source("chart_period")
            .selected_text(period.label())
            .show_ui(ui, |ui| {
                for option in ChartPeriod::ALL {
                    ui.selectable_value(&mut period, option, option.label());
                }
            });
        if period != selection.period {
            commands.push(DashboardCommand::SelectPeriod(period));
        }

        let mut metric = selection.metric;
        egui::ComboBox::from_id_source("chart_metric")
            .selected_text(metric.label())
            .show_ui(ui, |ui| {
                for option in ChartMetric::ALL {
                    ui.selectable_value(&mut metric, option, option.label());
                }
            });
        if metric != selection.metric {
            commands.push(DashboardCommand::SelectMetric(metric));
        }

        let mut kind = selection.kind;
        egui::ComboBox::from_id_source("chart_kind")
            .selected_text(kind.label())
            .show_ui(ui, |ui| {
                for option in ChartKind::ALL {
                    ui.selectable_value(&mut kind, option, option.label());
                }
            });
        if kind != selection.kind {
            commands.push(DashboardCommand::SelectKind(kind));
        }
    });

    ui.add_space(8.0);
    surface.draw(ui);
}
