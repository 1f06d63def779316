use std::path::PathBuf;
use infwell::{
    render::{ FileSurface, PlotConfig },
    units,
    visualize,
    Well,
};

const WIDTH: f64 = 1e-9; // m
const STATES_EXCL: usize = 6; // levels 1..=5

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let well = Well::new(WIDTH, units::me)?;
    let outdir = PathBuf::from("output");
    let mut surface = FileSurface::new(
        outdir.join("electron_nm.svg"),
        PlotConfig::titled("Electron in a 1 nm infinite well"),
    );
    let spectrum = visualize(STATES_EXCL, &well, infwell::DEF_SAMPLES, &mut surface)?;

    println!("{:>3}  {:>12}  {:>12}", "n", "E [eV]", "E / E1");
    let e1 = spectrum.energies[0];
    for (i, e) in spectrum.energies.iter().enumerate() {
        println!("{:>3}  {:>12.6}  {:>12.3}", i + 1, e, e / e1);
    }
    Ok(())
}
