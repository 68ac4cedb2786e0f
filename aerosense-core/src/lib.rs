//! Core reading types for Aerosense
//!
//! Bundles one round of air-quality sensor output - particulate matter,
//! temperature, humidity, pressure, altitude - and derives
//! humidity-corrected particulate values from empirical compensation
//! curves. Designed for microcontroller sensor nodes with limited
//! resources.
//!
//! Key constraints:
//! - Runs on 32KB RAM targets (no heap allocation)
//! - `no_std` by default; `std` is a feature
//! - One `powf` per normalized value, nothing slower
//!
//! ```
//! use aerosense_core::Reading;
//!
//! // pm2.5, pm10, temperature, humidity, altitude, pressure in Pa
//! let mut reading = Reading::new(35.0, 80.0, 21.5, 60.0, 120.0, 101325.0);
//!
//! assert!(reading.is_ok());
//! assert_eq!(reading.pressure, 1013.25); // stored in hPa
//!
//! // Humidity-corrected concentrations, computed once and cached
//! let pm25 = reading.normalize_pm25();
//! assert!(pm25 < 35.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod compensation;
pub mod constants;
pub mod errors;
pub mod reading;

// Public API
pub use compensation::{altitude_from_pressure, HumidityCurve, PM10_CURVE, PM25_CURVE};
pub use errors::{ReadingError, ReadingResult};
pub use reading::Reading;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
