//! Decimal-place rounding helpers for `f64`.

/// Keep `places` decimal places, rounding the next digit up.
pub fn ceil_to(value: f64, places: u8) -> f64 {
    let k = 10f64.powi(places.into());
    (value * k).ceil() / k
}

/// Keep `places` decimal places, rounding the next digit down.
pub fn floor_to(value: f64, places: u8) -> f64 {
    let k = 10f64.powi(places.into());
    (value * k).floor() / k
}

/// Keep `places` decimal places, rounding half away from zero.
pub fn round_to(value: f64, places: u8) -> f64 {
    let k = 10f64.powi(places.into());
    (value * k).round() / k
}
