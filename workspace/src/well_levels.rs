use std::path::PathBuf;
use anyhow::{ bail, Context };
use infwell::{
    render::{ FileSurface, PlotConfig },
    units,
    visualize_with,
    Well,
    DEF_SAMPLES,
};

const USAGE: &str = "\
usage: well_levels <states_excl> <width_m> [mass_kg] [samples] [output_path]

Computes levels n = 1, ..., states_excl - 1 of a particle in an infinite
square well and draws them to output_path (default: output/well_levels.png).
mass_kg defaults to the electron mass and samples to 100.";

#[derive(Clone, Debug)]
struct Args {
    states_excl: usize,
    width: f64,
    mass: f64,
    samples: usize,
    output: PathBuf,
}

impl Args {
    fn parse<I>(mut args: I) -> anyhow::Result<Self>
    where I: Iterator<Item = String>
    {
        let states_excl: usize
            = args.next()
            .context("missing states_excl")?
            .parse()
            .context("states_excl must be a non-negative integer")?;
        let width: f64
            = args.next()
            .context("missing width_m")?
            .parse()
            .context("width_m must be a number")?;
        let mass: f64
            = args.next()
            .map(|s| s.parse::<f64>())
            .transpose()
            .context("mass_kg must be a number")?
            .unwrap_or(units::me);
        let samples: usize
            = args.next()
            .map(|s| s.parse::<usize>())
            .transpose()
            .context("samples must be a non-negative integer")?
            .unwrap_or(DEF_SAMPLES);
        let output: PathBuf
            = args.next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("output").join("well_levels.png"));
        if let Some(extra) = args.next() {
            bail!("unexpected argument '{}'", extra);
        }
        Ok(Self { states_excl, width, mass, samples, output })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.is_empty() || argv.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }
    let args = Args::parse(argv.into_iter())
        .with_context(|| format!("invalid arguments\n\n{}", USAGE))?;
    log::debug!("{:?}", args);

    let well = Well::new(args.width, args.mass)
        .context("invalid well parameters")?;
    let config = PlotConfig::titled(
        format!("Infinite well, a = {:.3e} m, m = {:.3e} kg", args.width, args.mass));
    let mut surface = FileSurface::new(&args.output, config.clone());
    let spectrum = visualize_with(
        args.states_excl, &well, args.samples, &config, &mut surface)
        .context("could not compute levels")?;

    for (i, e) in spectrum.energies.iter().enumerate() {
        println!("{:>3}  {:.6e} eV", i + 1, e);
    }
    Ok(())
}
