//! Physical Constants for Aerosense
//!
//! This module defines the unit ratios and empirical coefficients used by
//! the reading types and humidity compensation curves. All values are based
//! on established physics or published sensor co-location results.

// ===== UNIT CONVERSIONS =====

/// Pascals per hectopascal (Pa/hPa).
///
/// Barometer drivers such as the BME280 report pressure in Pascals, while
/// weather conventions (and this crate's stored readings) use hectopascals.
/// The full constructor divides the supplied pressure by this value exactly
/// once; the stored reading is never re-derived.
///
/// Source: SI prefix definition (hecto = 10²)
pub const PA_PER_HPA: f32 = 100.0;

/// Standard atmospheric pressure at sea level (hPa/mbar).
///
/// Reference pressure used for altitude estimation. Actual pressure varies
/// with weather patterns and altitude.
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_HPA: f32 = 1013.25;

// ===== HUMIDITY COMPENSATION COEFFICIENTS =====
//
// Low-cost optical particle counters (SDS011 class) over-read in humid air:
// hygroscopic particles absorb water and scatter more light, inflating the
// reported mass concentration. The correction divides the raw value by an
// empirical growth factor
//
//     1 + gain * (RH/100)^exponent
//
// with a separate (gain, exponent) fit per size fraction, obtained from
// co-location of SDS011 nodes against reference-grade instruments.

/// Gain of the PM2.5 humidity growth factor (dimensionless).
///
/// Source: SDS011 co-location fits against reference monitors
pub const PM25_HUMIDITY_GAIN: f32 = 0.48756;

/// Exponent of the PM2.5 humidity growth factor (dimensionless).
///
/// The steep exponent keeps the correction negligible below ~60% RH while
/// growing quickly toward saturation.
///
/// Source: SDS011 co-location fits against reference monitors
pub const PM25_HUMIDITY_EXPONENT: f32 = 8.60068;

/// Gain of the PM10 humidity growth factor (dimensionless).
///
/// Source: SDS011 co-location fits against reference monitors
pub const PM10_HUMIDITY_GAIN: f32 = 0.81559;

/// Exponent of the PM10 humidity growth factor (dimensionless).
///
/// Shallower than the PM2.5 exponent: the coarse fraction picks up water
/// at lower humidity than fine particles do.
///
/// Source: SDS011 co-location fits against reference monitors
pub const PM10_HUMIDITY_EXPONENT: f32 = 5.83411;
