use pitch_fusion_sim::{SimSettings, run_simulation};

fn main() {
    let settings = SimSettings::default();

    // Fresh OS-seeded generator so every run sees a different noise
    // realization, passed explicitly into the pipeline.
    let mut rng = rand::rng();

    let result = run_simulation(&settings, &mut rng);

    println!("{}", result.summary());
}
