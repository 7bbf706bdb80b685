//! Sensor noise injection for the pitch fusion simulation

use rand::Rng;

use crate::truth::TruthSignals;
use crate::types::SimSettings;

/// Noisy sensor measurement streams
///
/// Synthetic gyroscope and accelerometer-derived angle readings produced by
/// adding scaled uniform noise to the ground truth signals. Both sequences
/// have the same length as the truth they were derived from.
#[derive(Debug, Clone)]
pub struct SensorReadings {
    /// Gyroscope measurements in degrees per second
    pub gyro: Vec<f32>,
    /// Accelerometer-derived angle measurements in degrees
    pub accel: Vec<f32>,
}

impl SensorReadings {
    /// Number of samples in the measurement streams
    pub fn len(&self) -> usize {
        self.gyro.len()
    }

    /// Whether the measurement streams are empty
    pub fn is_empty(&self) -> bool {
        self.gyro.is_empty()
    }
}

/// Draw a single noise sample uniformly from [-1, 1]
///
/// The noise model is intentionally uniform rather than Gaussian; the
/// `sigma` settings that scale it are peak amplitudes, not standard
/// deviations.
///
/// # Example
/// ```
/// let mut rng = rand::rng();
/// let sample = pitch_fusion_sim::uniform_symmetric_noise(&mut rng);
/// assert!((-1.0..=1.0).contains(&sample));
/// ```
pub fn uniform_symmetric_noise<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(-1.0..=1.0)
}

/// Corrupt the ground truth with independent sensor noise
///
/// For each sample, draws two independent noise values from
/// [`uniform_symmetric_noise`] and adds them, scaled by the configured
/// amplitudes, to the true rate (gyroscope) and the true pitch
/// (accelerometer). The gyroscope draw happens first at every step, so a
/// seeded generator reproduces the exact measurement streams.
///
/// # Arguments
/// * `truth` - Ground truth trajectory to corrupt
/// * `settings` - Noise amplitudes
/// * `rng` - Random number generator, passed explicitly rather than taken
///   from process-wide state
pub fn corrupt<R: Rng + ?Sized>(
    truth: &TruthSignals,
    settings: &SimSettings,
    rng: &mut R,
) -> SensorReadings {
    let n = truth.len();
    let mut gyro = Vec::with_capacity(n);
    let mut accel = Vec::with_capacity(n);

    for k in 0..n {
        gyro.push(truth.rate[k] + settings.gyro_noise_sigma * uniform_symmetric_noise(rng));
        accel.push(truth.pitch[k] + settings.accel_noise_sigma * uniform_symmetric_noise(rng));
    }

    SensorReadings { gyro, accel }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::truth::generate_truth;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_noise_stays_in_bounds() {
        let mut rng = Pcg64::seed_from_u64(1);
        for _ in 0..10_000 {
            let sample = uniform_symmetric_noise(&mut rng);
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_noise_covers_both_signs() {
        let mut rng = Pcg64::seed_from_u64(2);
        let mut positive = 0usize;
        let mut negative = 0usize;
        for _ in 0..10_000 {
            if uniform_symmetric_noise(&mut rng) >= 0.0 {
                positive += 1;
            } else {
                negative += 1;
            }
        }
        // A symmetric distribution should land on both sides often.
        assert!(positive > 4_000, "positive draws: {}", positive);
        assert!(negative > 4_000, "negative draws: {}", negative);
    }

    #[test]
    fn test_measurement_lengths_match_truth() {
        let settings = SimSettings::default();
        let truth = generate_truth(&settings);
        let mut rng = Pcg64::seed_from_u64(3);
        let sensors = corrupt(&truth, &settings, &mut rng);

        assert_eq!(sensors.gyro.len(), truth.len());
        assert_eq!(sensors.accel.len(), truth.len());
    }

    #[test]
    fn test_noise_bounded_by_sigma() {
        let settings = SimSettings::default();
        let truth = generate_truth(&settings);
        let mut rng = Pcg64::seed_from_u64(4);
        let sensors = corrupt(&truth, &settings, &mut rng);

        for k in 0..truth.len() {
            assert!((sensors.gyro[k] - truth.rate[k]).abs() <= settings.gyro_noise_sigma);
            assert!((sensors.accel[k] - truth.pitch[k]).abs() <= settings.accel_noise_sigma);
        }
    }

    #[test]
    fn test_zero_sigma_reproduces_truth() {
        let settings = SimSettings {
            gyro_noise_sigma: 0.0,
            accel_noise_sigma: 0.0,
            ..Default::default()
        };
        let truth = generate_truth(&settings);
        let mut rng = Pcg64::seed_from_u64(5);
        let sensors = corrupt(&truth, &settings, &mut rng);

        assert_eq!(sensors.gyro, truth.rate);
        assert_eq!(sensors.accel, truth.pitch);
    }

    #[test]
    fn test_seeded_generator_reproduces_streams() {
        let settings = SimSettings::default();
        let truth = generate_truth(&settings);

        let mut rng_a = Pcg64::seed_from_u64(6);
        let mut rng_b = Pcg64::seed_from_u64(6);
        let sensors_a = corrupt(&truth, &settings, &mut rng_a);
        let sensors_b = corrupt(&truth, &settings, &mut rng_b);

        assert_eq!(sensors_a.gyro, sensors_b.gyro);
        assert_eq!(sensors_a.accel, sensors_b.accel);
    }
}
