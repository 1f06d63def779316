use infwell::{ units, Well };

// print the ground-state energy for a range of widths and particle masses to
// show the 1/(m a²) dependence

fn main() {
    const WIDTHS: [f64; 4] = [0.25e-9, 0.5e-9, 1e-9, 2e-9]; // m
    let particles = [("electron", units::me), ("proton", units::mp)];

    for (name, mass) in particles {
        println!("{}:", name);
        for a in WIDTHS {
            let well = Well::new(a, mass).unwrap();
            // E(n = 1) and the 1 → 2 gap
            println!(
                "  a = {:.2e} m: E1 = {:.4e} eV, E2 - E1 = {:.4e} eV",
                a, well.energy(1), -well.transition_energy(1, 2),
            );
        }
    }
}
