//! Complementary filter implementation for the pitch fusion simulation

/// One-dimensional complementary filter
///
/// Fuses a gyroscope rate stream with an accelerometer-derived angle stream
/// into a single pitch estimate. The state is one scalar: at each step the
/// previous estimate is propagated by integrating the current gyroscope
/// sample, then blended with the accelerometer angle. The blend is a
/// high-pass filter on the gyroscope path and a low-pass filter on the
/// accelerometer path, summing to unity gain.
///
/// The first update seeds the estimate directly from the accelerometer
/// reading, since there is no prior estimate to propagate.
///
/// # Example
/// ```
/// use pitch_fusion_sim::ComplementaryFilter;
///
/// let mut filter = ComplementaryFilter::new(0.02);
///
/// // First sample: estimate taken straight from the accelerometer.
/// let est = filter.update(0.0, 1.5, 0.005);
/// assert_eq!(est, 1.5);
///
/// // Later samples: integrated gyroscope blended with the accelerometer.
/// let est = filter.update(12.0, 1.6, 0.005);
/// assert!(est > 1.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ComplementaryFilter {
    /// Blend coefficient weighting the accelerometer channel
    alpha: f32,
    /// Current pitch estimate in degrees
    estimate: f32,
    /// Whether the estimate has been seeded from a first measurement
    initialised: bool,
}

impl ComplementaryFilter {
    /// Create a new filter with the given blend coefficient
    ///
    /// # Arguments
    /// * `alpha` - Accelerometer weight in (0, 1); typical values are small,
    ///   around 0.02
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            estimate: 0.0,
            initialised: false,
        }
    }

    /// Advance the filter by one sample and return the new estimate
    ///
    /// # Arguments
    /// * `gyro_meas` - Gyroscope reading in degrees per second
    /// * `accel_meas` - Accelerometer-derived angle reading in degrees
    /// * `delta_time` - Sample interval in seconds
    pub fn update(&mut self, gyro_meas: f32, accel_meas: f32, delta_time: f32) -> f32 {
        if !self.initialised {
            self.estimate = accel_meas;
            self.initialised = true;
        } else {
            let gyro_pred = self.estimate + gyro_meas * delta_time;
            self.estimate = (1.0 - self.alpha) * gyro_pred + self.alpha * accel_meas;
        }
        self.estimate
    }

    /// Run the filter over complete measurement streams
    ///
    /// Returns the full estimate sequence, one value per input sample. The
    /// filter state afterwards reflects the last sample processed.
    ///
    /// # Panics
    /// Debug builds assert that both streams have the same length.
    pub fn run(&mut self, gyro_meas: &[f32], accel_meas: &[f32], delta_time: f32) -> Vec<f32> {
        debug_assert_eq!(gyro_meas.len(), accel_meas.len());

        let mut estimates = Vec::with_capacity(gyro_meas.len());
        for (&gyro, &accel) in gyro_meas.iter().zip(accel_meas) {
            estimates.push(self.update(gyro, accel, delta_time));
        }
        estimates
    }

    /// Current pitch estimate in degrees
    ///
    /// Zero until the first update seeds the state.
    pub fn estimate(&self) -> f32 {
        self.estimate
    }

    /// Blend coefficient this filter was built with
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Whether the estimate has been seeded from a measurement
    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// Reset the filter to its unseeded state
    ///
    /// The next update will again take its estimate straight from the
    /// accelerometer reading.
    pub fn reset(&mut self) {
        self.estimate = 0.0;
        self.initialised = false;
    }
}
