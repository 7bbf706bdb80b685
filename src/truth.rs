//! Ground truth trajectory generation for the pitch fusion simulation

use core::f32::consts::PI;

use crate::types::SimSettings;

/// Idealized pitch trajectory and its rate
///
/// Holds the noise-free reference signals: a sinusoidal pitch angle and the
/// angular rate obtained by backward finite difference. Both sequences have
/// length `settings.sample_count()`.
#[derive(Debug, Clone)]
pub struct TruthSignals {
    /// True pitch angle in degrees, indexed by sample
    pub pitch: Vec<f32>,
    /// True pitch rate in degrees per second, indexed by sample
    ///
    /// `rate[0]` is 0 by convention since there is no prior sample to
    /// difference against.
    pub rate: Vec<f32>,
}

impl TruthSignals {
    /// Number of samples in the trajectory
    pub fn len(&self) -> usize {
        self.pitch.len()
    }

    /// Whether the trajectory is empty
    pub fn is_empty(&self) -> bool {
        self.pitch.is_empty()
    }
}

/// Generate the ground truth trajectory for the given settings
///
/// The pitch angle is `amplitude * sin(2π * frequency * k * dt)` and the rate
/// is its first backward difference. Pure function of the settings.
///
/// # Example
/// ```
/// use pitch_fusion_sim::{SimSettings, generate_truth};
///
/// let settings = SimSettings::default();
/// let truth = generate_truth(&settings);
///
/// assert_eq!(truth.len(), settings.sample_count());
/// assert_eq!(truth.pitch[0], 0.0);
/// assert_eq!(truth.rate[0], 0.0);
/// ```
pub fn generate_truth(settings: &SimSettings) -> TruthSignals {
    let n = settings.sample_count();
    let dt = settings.delta_time();
    let omega = 2.0 * PI * settings.frequency;

    let mut pitch = Vec::with_capacity(n);
    let mut rate = Vec::with_capacity(n);

    for k in 0..n {
        let t = k as f32 * dt;
        pitch.push(settings.amplitude * (omega * t).sin());
        if k == 0 {
            rate.push(0.0);
        } else {
            rate.push((pitch[k] - pitch[k - 1]) / dt);
        }
    }

    TruthSignals { pitch, rate }
}
