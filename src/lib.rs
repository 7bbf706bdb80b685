//! Pitch Fusion Sim - a one-dimensional complementary filter simulation
//!
//! This is a Rust port of a small C demonstration program that fuses a
//! synthetic gyroscope stream with a synthetic accelerometer-derived angle
//! stream and reports how well the fused estimate tracks the ground truth.
//!
//! The pipeline has four stages, each exposed as its own module so the
//! stages can be exercised independently:
//!
//! 1. Truth generation - a sinusoidal pitch trajectory and its
//!    backward-difference rate
//! 2. Noise injection - independent uniform noise on both sensor channels
//! 3. Complementary filtering - a single-state blend of the integrated
//!    gyroscope and the accelerometer angle
//! 4. Evaluation - RMSE between estimate and truth
//!
//! # Quick Start
//!
//! ```rust
//! use pitch_fusion_sim::{SimSettings, run_simulation};
//!
//! let settings = SimSettings::default();
//! let mut rng = rand::rng();
//!
//! let result = run_simulation(&settings, &mut rng);
//!
//! println!("{}", result.summary());
//! assert!(result.rmse >= 0.0);
//! ```
//!
//! The filter can also be driven sample by sample:
//!
//! ```rust
//! use pitch_fusion_sim::ComplementaryFilter;
//!
//! let mut filter = ComplementaryFilter::new(0.02);
//! let estimate = filter.update(1.2, 0.4, 0.005);
//! ```

mod filter;
mod metrics;
mod noise;
mod simulation;
mod truth;
mod types;

// Re-export all public types and functions
pub use filter::ComplementaryFilter;
pub use metrics::rmse;
pub use noise::{SensorReadings, corrupt, uniform_symmetric_noise};
pub use simulation::{SimulationResult, run_simulation};
pub use truth::{TruthSignals, generate_truth};
pub use types::SimSettings;
