//! Level diagrams: every wavefunction drawn on top of its own energy line.
//!
//! ```
//! use infwell::{ render::RecordingSurface, visualize::visualize, well::Well };
//!
//! let well = Well::electron(1e-9).unwrap();
//! let mut surface = RecordingSurface::default();
//! let spectrum = visualize(4, &well, 100, &mut surface).unwrap();
//! assert_eq!(spectrum.energies.len(), 3);
//! // one dashed line and one curve per level
//! assert_eq!(surface.charts[0].series.len(), 6);
//! ```

use ndarray as nd;
use crate::{
    error::WellError,
    render::{ Chart, PlotConfig, Series, Surface },
    scale::DisplayScale,
    well::{ Well, WellResult },
};

/// Numeric content of a level diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    /// Grid positions (m).
    pub x: nd::Array1<f64>,
    /// Level energies (eV).
    pub energies: nd::Array1<f64>,
    /// One wavefunction per row, sampled on `x`.
    pub waveforms: nd::Array2<f64>,
}

impl Spectrum {
    /// Compute energies and wavefunctions of levels `1..states_excl` on a
    /// grid of `samples` points.
    pub fn compute(states_excl: usize, well: &Well, samples: usize)
        -> WellResult<Self>
    {
        WellError::check_states(states_excl)?;
        WellError::check_samples(samples)?;
        let energies = well.energies(states_excl);
        let (x, waveforms) = well.wavefunctions(states_excl, samples);
        Ok(Self { x, energies, waveforms })
    }

    /// Number of levels.
    pub fn levels(&self) -> usize { self.energies.len() }

    /// Wavefunction at position `i` as drawn in a level diagram,
    /// `ψ * b + E`, or `None` if there is no such level.
    pub fn shifted_waveform(&self, i: usize, b: f64) -> Option<nd::Array1<f64>> {
        (i < self.levels())
            .then(|| self.waveforms.row(i).mapv(|psi| psi * b + self.energies[i]))
    }
}

/// Assemble the level diagram for `spectrum` without drawing it.
///
/// For each level the chart holds a dashed line at the level's energy across
/// every grid position, followed by the wavefunction scaled by the level's
/// display factor and shifted up to that energy. Only the first level's pair
/// carries legend entries.
pub fn level_chart(spectrum: &Spectrum, scale: &DisplayScale, config: &PlotConfig)
    -> Chart
{
    let mut chart = Chart::new(&config.title, &config.xlabel, &config.ylabel);
    let factors = scale.factors.iter().copied();
    for (i, (e, b)) in spectrum.energies.iter().copied().zip(factors).enumerate() {
        let line: Vec<(f64, f64)> = spectrum.x.iter().map(|&xk| (xk, e)).collect();
        let curve: Vec<(f64, f64)>
            = spectrum.x.iter().zip(spectrum.waveforms.row(i))
            .map(|(&xk, &psi)| (xk, psi * b + e))
            .collect();
        let mut line = Series::dashed(line, config.level_color);
        let mut curve = Series::solid(curve, config.wave_color);
        if i == 0 {
            line = line.with_label(&config.level_label);
            curve = curve.with_label(&config.wave_label);
        }
        chart.series.push(line);
        chart.series.push(curve);
    }
    chart
}

/// Compute levels `1..states_excl` of `well` on a grid of `samples` points,
/// hand the level diagram to `surface`, and return the numeric results.
///
/// Uses [`PlotConfig::default`] for chart text and colors; see
/// [`visualize_with`].
pub fn visualize<F>(
    states_excl: usize,
    well: &Well,
    samples: usize,
    surface: &mut F,
) -> WellResult<Spectrum>
where F: Surface + ?Sized
{
    visualize_with(states_excl, well, samples, &PlotConfig::default(), surface)
}

/// Like [`visualize`], but with a custom chart configuration.
///
/// Invalid arguments are reported before anything is computed. A failure to
/// draw is logged and otherwise ignored, so the returned [`Spectrum`] is
/// always complete.
pub fn visualize_with<F>(
    states_excl: usize,
    well: &Well,
    samples: usize,
    config: &PlotConfig,
    surface: &mut F,
) -> WellResult<Spectrum>
where F: Surface + ?Sized
{
    let spectrum = Spectrum::compute(states_excl, well, samples)?;
    let scale = DisplayScale::new(well.width(), &spectrum.energies);
    let chart = level_chart(&spectrum, &scale, config);
    if let Err(err) = surface.draw(&chart) {
        log::warn!("could not draw level diagram: {}", err);
    }
    Ok(spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ error::RenderError, render::RecordingSurface };

    struct Broken;

    impl Surface for Broken {
        fn draw(&mut self, _chart: &Chart) -> Result<(), RenderError> {
            Err(RenderError::Backend("no display".to_string()))
        }
    }

    fn electron() -> Well { Well::electron(1e-9).unwrap() }

    #[test]
    fn chart_layout() {
        let well = electron();
        let spectrum = Spectrum::compute(4, &well, 50).unwrap();
        let scale = DisplayScale::new(well.width(), &spectrum.energies);
        let chart = level_chart(&spectrum, &scale, &PlotConfig::default());
        assert_eq!(chart.series.len(), 6);
        for (i, pair) in chart.series.chunks(2).enumerate() {
            let (line, curve) = (&pair[0], &pair[1]);
            assert!(line.dashed && !curve.dashed);
            assert_eq!(line.points.len(), 50);
            assert!(line.points.iter().all(|&(_, y)| y == spectrum.energies[i]));
            assert_eq!(line.points[0].0, 0.0);
            assert_eq!(line.points[49].0, well.width());
            let shifted = spectrum.shifted_waveform(i, scale.factors[i]).unwrap();
            assert!(curve.points.iter().zip(&shifted).all(|(&(_, y), s)| y == *s));
            assert_eq!(line.label.is_some(), i == 0);
            assert_eq!(curve.label.is_some(), i == 0);
        }
    }

    #[test]
    fn curves_straddle_energy() {
        let well = electron();
        let mut surface = RecordingSurface::default();
        let spectrum = visualize(3, &well, 101, &mut surface).unwrap();
        let chart = &surface.charts[0];
        // the wavefunction vanishes at the walls, so each curve starts and
        // ends on its energy line
        for (i, curve) in chart.series.iter().skip(1).step_by(2).enumerate() {
            let e = spectrum.energies[i];
            assert!((curve.points[0].1 - e).abs() < 1e-9 * e);
            assert!((curve.points[100].1 - e).abs() < 1e-9 * e);
        }
    }

    #[test]
    fn render_failure_keeps_results() {
        let well = electron();
        let spectrum = visualize(5, &well, 100, &mut Broken).unwrap();
        assert_eq!(spectrum, Spectrum::compute(5, &well, 100).unwrap());
    }

    #[test]
    fn empty_range_draws_empty_chart() {
        let mut surface = RecordingSurface::default();
        let spectrum = visualize(1, &electron(), 100, &mut surface).unwrap();
        assert_eq!(spectrum.levels(), 0);
        assert_eq!(spectrum.x.len(), 100);
        assert!(surface.charts[0].series.is_empty());
        assert!(spectrum.shifted_waveform(0, 1.0).is_none());
    }

    #[test]
    fn rejects_before_drawing() {
        let mut surface = RecordingSurface::default();
        assert!(matches!(
            visualize(3, &electron(), 1, &mut surface),
            Err(WellError::BadSamples(1)),
        ));
        assert!(matches!(
            visualize(0, &electron(), 100, &mut surface),
            Err(WellError::BadStates(0)),
        ));
        assert!(surface.charts.is_empty());
    }

    #[test]
    fn custom_config() {
        let mut surface = RecordingSurface::default();
        let config = PlotConfig::titled("proton");
        visualize_with(3, &electron(), 10, &config, &mut surface).unwrap();
        assert_eq!(surface.charts[0].title, "proton");
        assert_eq!(surface.charts[0].series[0].label.as_deref(), Some("Energies"));
    }
}
