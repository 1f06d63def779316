//! Backend-agnostic chart description and the surfaces that can draw it.
//!
//! Numeric code only ever builds a [`Chart`]; what happens to it is up to the
//! [`Surface`] handed in by the caller. [`FileSurface`] renders to PNG or SVG
//! via `plotters`, [`NullSurface`] discards everything, and
//! [`RecordingSurface`] keeps every chart for later inspection.
//!
//! ```
//! use infwell::render::{ Chart, RecordingSurface, Series, Surface };
//! use plotters::style::BLACK;
//!
//! let mut chart = Chart::new("line", "x", "y");
//! chart.series.push(Series::solid(vec![(0.0, 0.0), (1.0, 1.0)], BLACK));
//! let mut surface = RecordingSurface::default();
//! surface.draw(&chart).unwrap();
//! assert_eq!(surface.charts.len(), 1);
//! ```

use std::{ fs, path::{ Path, PathBuf } };
use plotters::prelude::*;
use crate::error::RenderError;

pub type RenderResult<T> = Result<T, RenderError>;

/// Configuration for customizing level diagrams.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 800)
    pub width: u32,
    /// Image height in pixels (default: 800)
    pub height: u32,
    /// Plot title (default: "Infinite square well")
    pub title: String,
    /// X-axis label (default: "Well width [m]")
    pub xlabel: String,
    /// Y-axis label (default: "Energy [eV]")
    pub ylabel: String,
    /// Color of the dashed energy lines (default: BLACK)
    pub level_color: RGBColor,
    /// Color of the wavefunction curves (default: BLUE)
    pub wave_color: RGBColor,
    /// Legend entry for the energy lines (default: "Energies")
    pub level_label: String,
    /// Legend entry for the wavefunctions (default: "Wavefunction")
    pub wave_label: String,
    /// Background color (default: WHITE)
    pub background: RGBColor,
    /// Line width in pixels (default: 2)
    pub line_width: u32,
    /// Number of grid points spanned by each dash (default: 3)
    pub dash_len: usize,
    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "Infinite square well".to_string(),
            xlabel: "Well width [m]".to_string(),
            ylabel: "Energy [eV]".to_string(),
            level_color: BLACK,
            wave_color: BLUE,
            level_label: "Energies".to_string(),
            wave_label: "Wavefunction".to_string(),
            background: WHITE,
            line_width: 2,
            dash_len: 3,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Default configuration with a custom title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }
}

/// A single polyline in a [`Chart`].
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// (x, y) vertices, in drawing order.
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub dashed: bool,
    /// Legend entry, if any.
    pub label: Option<String>,
}

impl Series {
    pub fn solid(points: Vec<(f64, f64)>, color: RGBColor) -> Self {
        Self { points, color, dashed: false, label: None }
    }

    pub fn dashed(points: Vec<(f64, f64)>, color: RGBColor) -> Self {
        Self { points, color, dashed: true, label: None }
    }

    /// Attach a legend entry.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A complete two-dimensional line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        xlabel: impl Into<String>,
        ylabel: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            xlabel: xlabel.into(),
            ylabel: ylabel.into(),
            series: Vec::new(),
        }
    }

    /// Data ranges `((x_min, x_max), (y_min, y_max))` over all series, with
    /// 10% vertical padding. Degenerate ranges are widened so that they can
    /// always be used as plot axes.
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let (mut x0, mut x1) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y0, mut y1) = (f64::INFINITY, f64::NEG_INFINITY);
        self.series.iter()
            .flat_map(|s| s.points.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .for_each(|&(x, y)| {
                x0 = x0.min(x);
                x1 = x1.max(x);
                y0 = y0.min(y);
                y1 = y1.max(y);
            });
        (widen(x0, x1, 0.0), widen(y0, y1, 0.1))
    }
}

fn widen(lo: f64, hi: f64, pad: f64) -> (f64, f64) {
    if !(lo.is_finite() && hi.is_finite()) {
        (0.0, 1.0)
    } else if hi > lo {
        let d = pad * (hi - lo);
        (lo - d, hi + d)
    } else {
        let d = if lo == 0.0 { 1.0 } else { 0.5 * lo.abs() };
        (lo - d, hi + d)
    }
}

/// Split a polyline into dashes of `dash_len` segments separated by gaps of
/// equal length.
pub fn dash_segments(points: &[(f64, f64)], dash_len: usize)
    -> Vec<Vec<(f64, f64)>>
{
    let step = dash_len.max(1);
    (0..points.len()).step_by(2 * step)
        .map(|start| points[start..(start + step + 1).min(points.len())].to_vec())
        .filter(|seg| seg.len() >= 2)
        .collect()
}

/// Anything that can take a [`Chart`] and do something with it.
pub trait Surface {
    fn draw(&mut self, chart: &Chart) -> RenderResult<()>;
}

/// Discards every chart.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn draw(&mut self, _chart: &Chart) -> RenderResult<()> { Ok(()) }
}

/// Keeps a copy of every chart it is asked to draw.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub charts: Vec<Chart>,
}

impl Surface for RecordingSurface {
    fn draw(&mut self, chart: &Chart) -> RenderResult<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

/// Renders charts to an image file with `plotters`.
///
/// The backend is chosen from the file extension: `.svg` produces an SVG
/// document, anything else a bitmap (PNG for `.png`). Missing parent
/// directories are created.
#[derive(Clone, Debug)]
pub struct FileSurface {
    pub path: PathBuf,
    pub config: PlotConfig,
}

impl FileSurface {
    pub fn new<P>(path: P, config: PlotConfig) -> Self
    where P: AsRef<Path>
    {
        Self { path: path.as_ref().to_path_buf(), config }
    }
}

impl Surface for FileSurface {
    fn draw(&mut self, chart: &Chart) -> RenderResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let size = (self.config.width, self.config.height);
        let ext = self.path.extension().and_then(|s| s.to_str());
        match ext {
            Some("svg") => {
                let backend = SVGBackend::new(&self.path, size);
                draw_on(backend, chart, &self.config)?;
            },
            _ => {
                let backend = BitMapBackend::new(&self.path, size);
                draw_on(backend, chart, &self.config)?;
            },
        }
        log::info!("wrote chart to {}", self.path.display());
        Ok(())
    }
}

fn draw_on<DB>(backend: DB, chart: &Chart, config: &PlotConfig)
    -> RenderResult<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background).map_err(RenderError::backend)?;

    let ((x0, x1), (y0, y1)) = chart.bounds();
    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 30).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(RenderError::backend)?;

    let x_fmt = |x: &f64| format!("{:.1e}", x);
    let y_fmt = |y: &f64| format!("{:.3}", y);
    let mut mesh = ctx.configure_mesh();
    mesh.x_desc(&chart.xlabel)
        .y_desc(&chart.ylabel)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt);
    if config.show_grid {
        mesh.draw().map_err(RenderError::backend)?;
    } else {
        mesh.disable_mesh().draw().map_err(RenderError::backend)?;
    }

    let width = config.line_width;
    for series in chart.series.iter() {
        let color = series.color;
        let style = color.stroke_width(width);
        let drawn
            = if series.dashed {
                ctx.draw_series(
                    dash_segments(&series.points, config.dash_len)
                        .into_iter()
                        .map(|seg| PathElement::new(seg, style)),
                )
            } else {
                ctx.draw_series(
                    LineSeries::new(series.points.iter().copied(), style))
            };
        let anno = drawn.map_err(RenderError::backend)?;
        if let Some(label) = series.label.as_ref() {
            anno.label(label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)], color.stroke_width(width))
                });
        }
    }

    if chart.series.iter().any(|s| s.label.is_some()) {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(RenderError::backend)?;
    }

    root.present().map_err(RenderError::backend)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = PlotConfig::default();
        assert_eq!((config.width, config.height), (800, 800));
        assert_eq!(config.xlabel, "Well width [m]");
        assert_eq!(config.ylabel, "Energy [eV]");
        assert_eq!(config.level_color, BLACK);
        assert_eq!(config.wave_color, BLUE);
        assert_eq!(PlotConfig::titled("electron").title, "electron");
    }

    #[test]
    fn dashes_alternate() {
        let points: Vec<(f64, f64)> = (0..10).map(|k| (k as f64, 0.0)).collect();
        let dashes = dash_segments(&points, 2);
        // starts at 0, 4, 8; the last dash is cut short by the end of the line
        assert_eq!(dashes.len(), 3);
        assert_eq!(dashes[0], vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(dashes[1][0], (4.0, 0.0));
        assert_eq!(dashes[2], vec![(8.0, 0.0), (9.0, 0.0)]);
        assert!(dash_segments(&points[..1], 2).is_empty());
        assert_eq!(dash_segments(&points[..2], 0).len(), 1);
    }

    #[test]
    fn bounds_padding() {
        let mut chart = Chart::new("", "", "");
        assert_eq!(chart.bounds(), ((0.0, 1.0), (0.0, 1.0)));
        chart.series.push(Series::solid(vec![(0.0, 1.0), (2.0, 3.0)], BLUE));
        let ((x0, x1), (y0, y1)) = chart.bounds();
        assert_eq!((x0, x1), (0.0, 2.0));
        assert!((y0 - 0.8).abs() < 1e-12);
        assert!((y1 - 3.2).abs() < 1e-12);
    }

    #[test]
    fn bounds_flat_line() {
        let mut chart = Chart::new("", "", "");
        chart.series.push(Series::dashed(vec![(0.0, 2.0), (1.0, 2.0)], BLACK));
        let (_, (y0, y1)) = chart.bounds();
        assert_eq!((y0, y1), (1.0, 3.0));
    }

    #[test]
    fn recording_keeps_charts() {
        let mut surface = RecordingSurface::default();
        let chart = Chart::new("a", "x", "y");
        surface.draw(&chart).unwrap();
        surface.draw(&chart).unwrap();
        assert_eq!(surface.charts, vec![chart.clone(), chart]);
        assert!(NullSurface.draw(&Chart::new("", "", "")).is_ok());
    }

    #[test]
    fn labels() {
        let s = Series::solid(vec![], RED).with_label("psi");
        assert_eq!(s.label.as_deref(), Some("psi"));
        assert!(!s.dashed);
    }
}
