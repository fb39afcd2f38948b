use crate::units::{Degrees, Radians, Unit};
use crate::util::linspace;
use crate::vars::{DECLINATION_PHASE, DEGREES_PER_HOUR, OBLIQUITY, YEAR_DAYS};
use std::f64::consts::TAU;

/* # sun position */

/// solar declination for a given day of the year
pub fn declination(day: f64) -> Degrees {
    Degrees::confine(OBLIQUITY * (TAU * (day + DECLINATION_PHASE) / YEAR_DAYS as f64).sin())
}

/// hour angle of the sun at a given clock hour
pub fn hour_angle(hour: f64) -> Degrees {
    Degrees::confine(DEGREES_PER_HOUR * (hour - 12.0))
}

/// clock hours sampled evenly over a full day
pub fn hour_grid(samples: usize) -> Vec<f64> {
    linspace(0.0, 24.0, samples)
}

/// hour angles for a full sampled day
pub fn hour_angle_grid(samples: usize) -> Vec<Radians> {
    hour_grid(samples)
        .into_iter()
        .map(|hour| hour_angle(hour).radians())
        .collect()
}

/// latitude and declination terms of the elevation formula, fixed for one day
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarDay {
    a: f64,
    b: f64,
}

impl SolarDay {
    pub fn new(latitude: Degrees, day: f64) -> Self {
        let gamma = declination(day).radians().release();
        let phi = latitude.radians().release();
        Self {
            a: gamma.sin() * phi.sin(),
            b: gamma.cos() * phi.cos(),
        }
    }

    /// sun elevation angle at a given hour angle
    ///
    /// negative at night; pathological latitude and declination pairs can
    /// push the asin argument marginally out of range, so it is clamped
    pub fn elevation(&self, hra: Radians) -> Radians {
        Radians::confine(
            (self.a + self.b * hra.release().cos())
                .clamp(-1.0, 1.0)
                .asin(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use float_eq::assert_float_eq;
    const EPSILON: f64 = 0.0000_01;

    #[test]
    fn declination_bounded() {
        for day in 0..=365 {
            let gamma = declination(day as f64).release();
            assert!(gamma.abs() <= OBLIQUITY + f64::EPSILON);
        }
    }

    #[test]
    fn hour_angle_values() {
        assert_float_eq!(hour_angle(12.0).release(), 0.0, abs <= EPSILON);
        assert_float_eq!(hour_angle(18.0).release(), 90.0, abs <= EPSILON);
        assert_float_eq!(hour_angle(0.0).release(), -180.0, abs <= EPSILON);
    }

    #[test]
    fn equinox_equator_noon_is_zenith() {
        // day 81 puts the declination cycle through zero
        let day = SolarDay::new(Degrees::confine(0.0), 81.0);
        let alpha = day.elevation(hour_angle(12.0).radians());
        assert_float_eq!(alpha.degrees().release(), 90.0, abs <= 0.001);
    }

    #[test]
    fn midnight_sun_below_horizon() {
        let day = SolarDay::new(Degrees::confine(50.0), 30.0);
        assert!(day.elevation(hour_angle(0.0).radians()).release() < 0.0);
        assert!(day.elevation(hour_angle(12.0).radians()).release() > 0.0);
    }

    #[test]
    fn hour_grid_spans_day() {
        let grid = hour_grid(200);
        assert_float_eq!(grid[0], 0.0, abs <= EPSILON);
        assert_float_eq!(grid[199], 24.0, abs <= EPSILON);
    }
}
