use log::Level;

/// Scroll distance (px) past which the navigation bar turns solid.
pub const NAV_SOLID_THRESHOLD: f64 = 100.0;

/// Fraction of the scroll speed the hero background moves at.
pub const PARALLAX_FACTOR: f64 = 0.5;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
