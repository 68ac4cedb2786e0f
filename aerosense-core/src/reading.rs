//! The Reading Value Object
//!
//! ## Overview
//!
//! One [`Reading`] is one sensor sample on an air-quality node: raw PM2.5
//! and PM10 from the particulate counter plus temperature, humidity,
//! pressure, and altitude from the environmental sensor. A sampling
//! collaborator constructs it, display and transmission collaborators
//! consume it, and it is discarded after use.
//!
//! ## Design
//!
//! - **Value semantics**: `Copy`, no heap, no handles. Fits comfortably in
//!   a task's stack frame on a 32KB-RAM target.
//! - **No input validation**: the constructor accepts whatever the drivers
//!   report, including out-of-physical-range values. Plausibility checks
//!   belong to the caller; [`Reading::check`] covers the two states this
//!   unit can actually distinguish (empty, non-finite).
//! - **Lazy normalization**: the humidity-corrected particulate values are
//!   computed on first access through the curves in
//!   [`crate::compensation`] and cached in the reading itself. The cache
//!   uses 0.0 as its not-yet-computed sentinel, so a result of exactly
//!   zero is recomputed on every call.
//! - **Single ownership**: normalization takes `&mut self`, so the cache
//!   mutation cannot race - a reading is owned or uniquely borrowed for
//!   its entire lifetime.
//!
//! ## Units
//!
//! Pressure is supplied in Pascals (what BME280-class drivers report) and
//! stored in hectopascals; the division happens exactly once, at
//! construction. Temperature is stored as supplied - the node decides
//! Celsius or Fahrenheit, this type does not care.

use core::fmt::{self, Write as _};

use heapless::String;

use crate::compensation::{PM10_CURVE, PM25_CURVE};
use crate::constants::physics::PA_PER_HPA;
use crate::errors::{ReadingError, ReadingResult};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

/// One sensor sample: raw measurements plus lazily computed
/// humidity-corrected particulate values
///
/// Construct with [`Reading::new`] for a real sample or [`Reading::empty`]
/// for the absent-measurement placeholder. Always gate on [`Reading::is_ok`]
/// (or [`Reading::check`]) before trusting the fields of a reading that may
/// have come from [`Reading::empty`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Raw PM2.5 mass concentration (µg/m³)
    pub pm25: f32,

    /// Raw PM10 mass concentration (µg/m³)
    pub pm10: f32,

    // Normalization caches. 0.0 doubles as the not-yet-computed sentinel,
    // so a genuinely zero result is recomputed on every access.
    pm25_normalized: f32,
    pm10_normalized: f32,

    /// Relative humidity (%)
    pub humidity: f32,

    /// Ambient temperature, unit as supplied by the sampler
    pub temperature: f32,

    /// Altitude above sea level (m)
    pub altitude: f32,

    /// Barometric pressure (hPa)
    pub pressure: f32,

    valid: bool,
}

impl Reading {
    /// The absent-measurement placeholder
    ///
    /// All fields are zero and carry no meaning; [`Reading::is_ok`] returns
    /// false.
    pub const fn empty() -> Self {
        Self {
            pm25: 0.0,
            pm10: 0.0,
            pm25_normalized: 0.0,
            pm10_normalized: 0.0,
            humidity: 0.0,
            temperature: 0.0,
            altitude: 0.0,
            pressure: 0.0,
            valid: false,
        }
    }

    /// Build a reading from one round of sensor output
    ///
    /// `pressure_pa` is in Pascals and is stored divided by
    /// [`PA_PER_HPA`]; every other value is stored exactly as supplied.
    /// Nothing is validated or clamped - negative, zero, and
    /// out-of-physical-range inputs are all accepted.
    pub fn new(
        pm25: f32,
        pm10: f32,
        temperature: f32,
        humidity: f32,
        altitude: f32,
        pressure_pa: f32,
    ) -> Self {
        Self {
            pm25,
            pm10,
            pm25_normalized: 0.0,
            pm10_normalized: 0.0,
            humidity,
            temperature,
            altitude,
            pressure: pressure_pa / PA_PER_HPA,
            valid: true,
        }
    }

    /// Whether this reading holds real measurements
    ///
    /// False only for [`Reading::empty`] (and `Default`) constructions.
    pub const fn is_ok(&self) -> bool {
        self.valid
    }

    /// Result-flavored companion to [`Reading::is_ok`]
    ///
    /// Fails with [`ReadingError::Empty`] for the placeholder construction
    /// and [`ReadingError::NotFinite`] if any measurement is NaN or
    /// infinite. Never runs at construction time.
    pub fn check(&self) -> ReadingResult<()> {
        if !self.valid {
            return Err(ReadingError::Empty);
        }

        let fields = [
            ("pm25", self.pm25),
            ("pm10", self.pm10),
            ("humidity", self.humidity),
            ("temperature", self.temperature),
            ("altitude", self.altitude),
            ("pressure", self.pressure),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ReadingError::NotFinite { field });
            }
        }

        Ok(())
    }

    /// Humidity-corrected PM2.5 concentration (µg/m³)
    ///
    /// Computed through [`PM25_CURVE`] on first access and cached; at or
    /// below 0% RH the raw value passes through unchanged.
    pub fn normalize_pm25(&mut self) -> f32 {
        if self.pm25_normalized == 0.0 {
            self.pm25_normalized = PM25_CURVE.apply(self.pm25, self.humidity);
            log_trace!(
                "pm2.5 {} -> {} ug/m3 at {}% RH",
                self.pm25,
                self.pm25_normalized,
                self.humidity
            );
        }
        self.pm25_normalized
    }

    /// Humidity-corrected PM10 concentration (µg/m³)
    ///
    /// Same policy as [`Reading::normalize_pm25`], through [`PM10_CURVE`].
    pub fn normalize_pm10(&mut self) -> f32 {
        if self.pm10_normalized == 0.0 {
            self.pm10_normalized = PM10_CURVE.apply(self.pm10, self.humidity);
            log_trace!(
                "pm10 {} -> {} ug/m3 at {}% RH",
                self.pm10,
                self.pm10_normalized,
                self.humidity
            );
        }
        self.pm10_normalized
    }

    /// Compact display adapter for small screens and status lines
    ///
    /// Renders `temp: {t} / hum: {h} / pre: {p} / alt: {a}` with each value
    /// truncated toward zero to a whole number.
    pub const fn short(&self) -> ShortReading<'_> {
        ShortReading(self)
    }

    /// Render the full display line into a fixed-capacity string
    ///
    /// For consumers without `alloc`. Fails with
    /// [`ReadingError::BufferOverflow`] when `N` is too small for the
    /// formatted text.
    pub fn render<const N: usize>(&self) -> ReadingResult<String<N>> {
        let mut out = String::new();
        write!(out, "{}", self).map_err(|_| ReadingError::BufferOverflow)?;
        Ok(out)
    }

    /// Render the compact line into a fixed-capacity string
    pub fn render_short<const N: usize>(&self) -> ReadingResult<String<N>> {
        let mut out = String::new();
        write!(out, "{}", self.short()).map_err(|_| ReadingError::BufferOverflow)?;
        Ok(out)
    }
}

impl Default for Reading {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Reading {
    /// Labeled full line, one field per label, comma-space separated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PM10: {}, PM2.5: {}, Temperature: {}, Humidity: {}, Pressure: {}, Altitude: {}",
            self.pm10, self.pm25, self.temperature, self.humidity, self.pressure, self.altitude,
        )
    }
}

/// Display adapter produced by [`Reading::short`]
pub struct ShortReading<'a>(&'a Reading);

impl fmt::Display for ShortReading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temp: {} / hum: {} / pre: {} / alt: {}",
            self.0.temperature as i32,
            self.0.humidity as i32,
            self.0.pressure as i32,
            self.0.altitude as i32,
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Reading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Reading {{ pm2.5: {}, pm10: {}, temp: {}, rh: {}%, p: {} hPa, alt: {} m }}",
            self.pm25, self.pm10, self.temperature, self.humidity, self.pressure, self.altitude,
        )
    }
}
