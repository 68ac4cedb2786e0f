//! Basic Reading Example
//!
//! This example demonstrates the simplest use case of Aerosense:
//! bundling one round of sensor output into a reading and deriving the
//! humidity-corrected particulate values.
//!
//! ## What You'll Learn
//!
//! - Constructing a reading from raw driver output
//! - Gating on validity before trusting the fields
//! - Lazy humidity normalization and its caching
//! - Both display renderings
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_reading
//! ```

use aerosense_core::{altitude_from_pressure, Reading};

fn main() {
    println!("Aerosense Basic Reading Example");
    println!("===============================\n");

    // Raw values as a SDS011 + BME280 pair would report them:
    // particulates in ug/m3, humidity in %RH, pressure in Pascals.
    let pm25 = 35.2;
    let pm10 = 68.4;
    let temperature = 21.5;
    let humidity = 72.0;
    let pressure_pa = 99_400.0;

    // The node derives its altitude from the barometer
    let altitude = altitude_from_pressure(pressure_pa / 100.0, 1013.25);
    println!("Estimated altitude: {:.0} m\n", altitude);

    let mut reading = Reading::new(pm25, pm10, temperature, humidity, altitude, pressure_pa);

    // A reading from the sampler is always valid; only the empty
    // placeholder fails this gate
    assert!(reading.is_ok());

    println!("Raw PM2.5:        {:.1} ug/m3", reading.pm25);
    println!("Normalized PM2.5: {:.1} ug/m3", reading.normalize_pm25());
    println!("Raw PM10:         {:.1} ug/m3", reading.pm10);
    println!("Normalized PM10:  {:.1} ug/m3", reading.normalize_pm10());
    println!();

    // Full line for logs and serial consoles
    println!("{}", reading);

    // Compact line for small displays
    println!("{}", reading.short());

    // The empty placeholder is how "no sample yet" is represented
    let placeholder = Reading::empty();
    println!("\nPlaceholder valid: {}", placeholder.is_ok());
    if let Err(e) = placeholder.check() {
        println!("Placeholder check: {}", e);
    }
}
