/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Random-walk flight path starting over the Redmond test field, with the
    // pilot handing over to the autopilot partway through.
    let mut latitude = 47.6414_f64;
    let mut longitude = -122.1401_f64;
    let mut heading = 0.35_f64;

    let segments = [("manual", 40usize), ("guided", 30), ("auto", 50)];
    let step_deg = 0.00035_f64;

    let output_path = "sample_track.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["latitude", "longitude", "mode"])
        .expect("Failed to write header");

    let mut total = 0usize;
    for (mode, count) in segments {
        for _ in 0..count {
            heading += rng.gauss(0.0, 0.25);
            latitude += step_deg * heading.sin() + rng.gauss(0.0, step_deg * 0.1);
            longitude += step_deg * heading.cos() + rng.gauss(0.0, step_deg * 0.1);

            writer
                .write_record([
                    format!("{latitude:.7}"),
                    format!("{longitude:.7}"),
                    mode.to_string(),
                ])
                .expect("Failed to write row");
            total += 1;
        }
    }
    writer.flush().expect("Failed to flush output file");

    println!("Wrote {total} samples to {output_path}");
}
