//! Simulation settings for the pitch fusion simulation

/// Simulation settings
///
/// Configuration parameters for one simulation run. These settings control
/// the synthetic motion profile, the sensor noise amplitudes, and the
/// complementary filter blend coefficient.
///
/// # Example
/// ```
/// use pitch_fusion_sim::SimSettings;
///
/// let settings = SimSettings {
///     duration: 10.0,         // shorter run
///     accel_noise_sigma: 0.0, // noise-free accelerometer
///     ..Default::default()
/// };
/// assert_eq!(settings.sample_count(), 2001);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SimSettings {
    /// Sample rate in Hz
    pub sample_rate: f32,
    /// Total simulated time in seconds
    pub duration: f32,
    /// Peak amplitude of the true pitch motion in degrees
    pub amplitude: f32,
    /// Frequency of the true pitch motion in Hz
    pub frequency: f32,
    /// Gyroscope noise amplitude in degrees per second
    ///
    /// Scales a symmetric uniform draw on [-1, 1]; despite the name this is
    /// a peak amplitude, not a Gaussian standard deviation.
    pub gyro_noise_sigma: f32,
    /// Accelerometer-derived angle noise amplitude in degrees
    ///
    /// Scales a symmetric uniform draw on [-1, 1], same convention as
    /// `gyro_noise_sigma`.
    pub accel_noise_sigma: f32,
    /// Complementary filter blend coefficient in (0, 1)
    ///
    /// Weight of the accelerometer channel against the integrated gyroscope
    /// channel at each step. Small values correct gyroscope drift slowly
    /// without amplifying accelerometer noise.
    pub alpha: f32,
}

impl SimSettings {
    /// Sample interval in seconds
    pub fn delta_time(&self) -> f32 {
        1.0 / self.sample_rate
    }

    /// Number of samples in the run: `floor(duration * sample_rate) + 1`
    pub fn sample_count(&self) -> usize {
        (self.duration * self.sample_rate) as usize + 1
    }
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            sample_rate: 200.0,
            duration: 20.0,
            amplitude: 10.0,
            frequency: 0.2,
            gyro_noise_sigma: 1.0,
            accel_noise_sigma: 3.0,
            alpha: 0.02,
        }
    }
}
