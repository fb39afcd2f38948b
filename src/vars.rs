/* # astronomy */

pub const OBLIQUITY: f64 = 23.433333; // axial tilt in degrees, peak of the declination cycle
pub const YEAR_DAYS: usize = 365;
pub const DECLINATION_PHASE: f64 = 284.0; // day offset aligning the cycle with the december solstice
pub const DEGREES_PER_HOUR: f64 = 15.0; // apparent rotation of the sun

/* # sampling grids */

pub const HOUR_SAMPLES: usize = 200; // clock samples over a full day
pub const HOUR_SAMPLES_FINE: usize = 500; // finer grid for the hour-by-hour yield curve
pub const TILT_SAMPLES: usize = 200; // tilt candidates for the fixed-panel sweep
pub const TILT_MAX: usize = 90; // integer tilt candidates for the coarse sweeps
