//! # Chart Service
//!
//! Maps a chart selection (period, metric, kind) onto one of the fixed demo
//! datasets and draws it through a [`ChartSurface`].
//!
//! ## Key pieces:
//! - `dataset()` / `chart_spec()` - selection to data mapping
//! - `SeriesStyle::for_kind()` - colours and line shape per chart kind
//! - `ChartPresenter` - owns the single live chart on a surface
//! - `smooth_line()` - curve smoothing for line charts
//!
//! The datasets are static sample figures and are not derived from the
//! recorded transactions.

use log::{debug, info};
use shared::{ChartKind, ChartMetric, ChartPeriod, ChartSelection};

/// Labels and both metric series for one period
#[derive(Debug)]
pub struct Dataset {
    pub labels: &'static [&'static str],
    pub sales: &'static [f64],
    pub profit: &'static [f64],
}

impl Dataset {
    pub fn series(&self, metric: ChartMetric) -> &'static [f64] {
        match metric {
            ChartMetric::Sales => self.sales,
            ChartMetric::Profit => self.profit,
        }
    }
}

static MONTHLY: Dataset = Dataset {
    labels: &["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"],
    sales: &[3100.0, 4500.0, 5000.0, 6200.0, 7200.0, 6900.0, 8100.0],
    profit: &[465.0, 675.0, 750.0, 930.0, 1080.0, 1035.0, 1215.0],
};

static QUARTERLY: Dataset = Dataset {
    labels: &["Q1", "Q2", "Q3", "Q4"],
    sales: &[12600.0, 18900.0, 20500.0, 17500.0],
    profit: &[1890.0, 2835.0, 3075.0, 2625.0],
};

static YEARLY: Dataset = Dataset {
    labels: &["2021", "2022", "2023", "2024", "2025"],
    sales: &[52000.0, 68000.0, 74500.0, 81000.0, 89500.0],
    profit: &[7800.0, 10200.0, 11175.0, 12150.0, 13425.0],
};

pub fn dataset(period: ChartPeriod) -> &'static Dataset {
    match period {
        ChartPeriod::Monthly => &MONTHLY,
        ChartPeriod::Quarterly => &QUARTERLY,
        ChartPeriod::Yearly => &YEARLY,
    }
}

/// sRGB colour with CSS-style alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Alpha scaled to a byte
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

const ACCENT: Rgba = Rgba::opaque(79, 70, 229);

/// Visual encoding of the single plotted series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub fill: Rgba,
    pub border: Rgba,
    pub border_width: f32,
    /// Curve smoothing factor, 0 draws straight segments
    pub tension: f64,
    /// Shade the area between the line and the x axis
    pub fill_area: bool,
    pub point_radius: f32,
    pub begin_at_zero: bool,
}

impl SeriesStyle {
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar => Self {
                fill: Rgba::new(79, 70, 229, 0.6),
                border: ACCENT,
                border_width: 2.0,
                tension: 0.0,
                fill_area: false,
                point_radius: 0.0,
                begin_at_zero: true,
            },
            ChartKind::Line => Self {
                fill: Rgba::new(79, 70, 229, 0.2),
                border: ACCENT,
                border_width: 2.0,
                tension: 0.4,
                fill_area: true,
                point_radius: 4.0,
                begin_at_zero: true,
            },
        }
    }
}

/// Everything a surface needs to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub selection: ChartSelection,
    /// Legend text, the capitalised metric name
    pub series_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        self.selection.kind
    }

    /// `[x, y]` pairs with the label index as x
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| [i as f64, *value])
            .collect()
    }
}

pub fn chart_spec(selection: ChartSelection) -> ChartSpec {
    let data = dataset(selection.period);
    ChartSpec {
        selection,
        series_label: selection.metric.label().to_string(),
        labels: data.labels.iter().map(|label| label.to_string()).collect(),
        values: data.series(selection.metric).to_vec(),
        style: SeriesStyle::for_kind(selection.kind),
    }
}

/// A drawing backend that can hold chart instances
///
/// A surface may happily keep several charts alive; it is the presenter's
/// job to make sure only one ever is.
pub trait ChartSurface {
    type Handle;

    fn create(&mut self, spec: &ChartSpec) -> Self::Handle;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Owns the one live chart on a surface
pub struct ChartPresenter<S: ChartSurface> {
    surface: S,
    current: Option<S::Handle>,
    selection: ChartSelection,
}

impl<S: ChartSurface> ChartPresenter<S> {
    /// Presenter with nothing drawn yet
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
            selection: ChartSelection::default(),
        }
    }

    /// Draw `selection`, destroying the previously drawn chart first
    pub fn show(&mut self, selection: ChartSelection) {
        if let Some(previous) = self.current.take() {
            debug!("CHART: destroying previous {:?} chart", self.selection.kind);
            self.surface.destroy(previous);
        }

        let spec = chart_spec(selection);
        self.current = Some(self.surface.create(&spec));
        self.selection = selection;

        info!(
            "CHART: showing {} {} as {} chart",
            selection.period.label(),
            selection.metric.label(),
            selection.kind.label()
        );
    }

    pub fn selection(&self) -> ChartSelection {
        self.selection
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Interpolate a polyline into a smooth curve through every input point.
///
/// Uses cubic Hermite segments whose tangents are `tension` times the chord
/// between the neighbouring points, producing `samples` points per segment
/// plus the final point. With `tension == 0`, fewer than three points or
/// fewer than two samples the input is returned unchanged.
pub fn smooth_line(points: &[[f64; 2]], tension: f64, samples: usize) -> Vec<[f64; 2]> {
    if tension == 0.0 || points.len() < 3 || samples < 2 {
        return points.to_vec();
    }

    let tangent = |i: usize| -> [f64; 2] {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(points.len() - 1)];
        [tension * (next[0] - prev[0]), tension * (next[1] - prev[1])]
    };

    let mut curve = Vec::with_capacity((points.len() - 1) * samples + 1);
    for i in 0..points.len() - 1 {
        let (p1, p2) = (points[i], points[i + 1]);
        let (m1, m2) = (tangent(i), tangent(i + 1));

        for step in 0..samples {
            let t = step as f64 / samples as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;
            curve.push([
                h00 * p1[0] + h10 * m1[0] + h01 * p2[0] + h11 * m2[0],
                h00 * p1[1] + h10 * m1[1] + h01 * p2[1] + h11 * m2[1],
            ]);
        }
    }
    curve.push(points[points.len() - 1]);
    curve
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that tracks which chart ids are alive
    #[derive(Default)]
    struct RecordingSurface {
        next_id: u32,
        live: Vec<u32>,
        created: Vec<ChartSpec>,
    }

    impl ChartSurface for RecordingSurface {
        type Handle = u32;

        fn create(&mut self, spec: &ChartSpec) -> u32 {
            self.next_id += 1;
            self.live.push(self.next_id);
            self.created.push(spec.clone());
            self.next_id
        }

        fn destroy(&mut self, handle: u32) {
            self.live.retain(|id| *id != handle);
        }
    }

    fn selection(period: ChartPeriod, metric: ChartMetric, kind: ChartKind) -> ChartSelection {
        ChartSelection { period, metric, kind }
    }

    #[test]
    fn test_dataset_lengths_line_up() {
        for period in ChartPeriod::ALL {
            let data = dataset(period);
            assert_eq!(data.labels.len(), data.sales.len(), "{:?}", period);
            assert_eq!(data.labels.len(), data.profit.len(), "{:?}", period);
        }
    }

    #[test]
    fn test_chart_spec_selects_period_and_metric() {
        let spec = chart_spec(selection(ChartPeriod::Quarterly, ChartMetric::Profit, ChartKind::Bar));

        assert_eq!(spec.series_label, "Profit");
        assert_eq!(spec.labels, vec!["Q1", "Q2", "Q3", "Q4"]);
        assert_eq!(spec.values, vec![1890.0, 2835.0, 3075.0, 2625.0]);
        assert_eq!(spec.kind(), ChartKind::Bar);
        assert_eq!(spec.points()[3], [3.0, 2625.0]);

        let spec = chart_spec(selection(ChartPeriod::Yearly, ChartMetric::Sales, ChartKind::Line));
        assert_eq!(spec.labels.first().map(String::as_str), Some("2021"));
        assert_eq!(spec.values.last(), Some(&89500.0));
    }

    #[test]
    fn test_style_policy_per_kind() {
        let bar = SeriesStyle::for_kind(ChartKind::Bar);
        let line = SeriesStyle::for_kind(ChartKind::Line);

        assert_eq!(bar.fill.alpha_u8(), 153);
        assert_eq!(line.fill.alpha_u8(), 51);
        assert_eq!(bar.tension, 0.0);
        assert_eq!(line.tension, 0.4);
        assert!(line.fill_area && !bar.fill_area);
        assert!(bar.begin_at_zero && line.begin_at_zero);
    }

    #[test]
    fn test_show_keeps_exactly_one_live_chart() {
        let mut presenter = ChartPresenter::new(RecordingSurface::default());
        assert!(presenter.surface().live.is_empty());

        presenter.show(ChartSelection::default());
        presenter.show(selection(ChartPeriod::Yearly, ChartMetric::Sales, ChartKind::Bar));
        presenter.show(selection(ChartPeriod::Yearly, ChartMetric::Profit, ChartKind::Bar));

        let surface = presenter.surface();
        assert_eq!(surface.created.len(), 3);
        assert_eq!(surface.live, vec![3]);
        assert_eq!(presenter.selection().metric, ChartMetric::Profit);
    }

    #[test]
    fn test_smooth_line_passes_through_points() {
        let points = [[0.0, 3100.0], [1.0, 4500.0], [2.0, 5000.0], [3.0, 6200.0]];
        let curve = smooth_line(&points, 0.4, 8);

        assert_eq!(curve.len(), 3 * 8 + 1);
        for (i, point) in points.iter().enumerate() {
            let sampled = curve[i * 8];
            assert!((sampled[0] - point[0]).abs() < 1e-9);
            assert!((sampled[1] - point[1]).abs() < 1e-9);
        }
        // x stays monotonic for evenly spaced input
        assert!(curve.windows(2).all(|w| w[1][0] > w[0][0]));
    }

    #[test]
    fn test_smooth_line_identity_cases() {
        let points = [[0.0, 1.0], [1.0, 5.0], [2.0, 2.0]];
        assert_eq!(smooth_line(&points, 0.0, 8), points.to_vec());
        assert_eq!(smooth_line(&points[..2], 0.4, 8), points[..2].to_vec());
        assert_eq!(smooth_line(&points, 0.4, 1), points.to_vec());
    }
}
