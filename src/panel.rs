use crate::solar::{self, SolarDay};
use crate::units::{Degrees, Radians, Unit};
use crate::vars::{HOUR_SAMPLES, TILT_MAX, YEAR_DAYS};
use log::trace;
use ord_subset::OrdSubsetIterExt;
use rayon::prelude::*;

/* # instantaneous yield */

/// irradiance fraction captured by a south-facing panel at a fixed tilt
///
/// spherical projection of the sun vector onto the panel normal, as a
/// percentage; `None` while the sun is below the horizon
pub fn fixed_yield(tilt: Radians, hra: Radians, elevation: Radians) -> Option<f64> {
    let alpha = elevation.release();
    if alpha.sin() <= 0.0 {
        return None;
    }
    let hour = hra.release();
    let beta = tilt.release();
    let ta = alpha.max(0.0).tan();
    let y = beta.sin() * ta - beta.cos() * hour.cos();
    let x = 1.0 + ta.powi(2);
    let v_a = (1.0 - hour.sin().powi(2) / x).sqrt();
    let v_b = (1.0 - y.powi(2) / x).sqrt();
    let v_ab = y * hour.sin() / x;
    Some(100.0 * (1.0 - (v_ab / (v_a * v_b)).powi(2)).sqrt() * v_a * v_b)
}

/// irradiance fraction for a panel rotating to face the sun while holding
/// a fixed tilt offset; `None` while the sun is below the horizon
pub fn tracking_yield(tilt: Radians, elevation: Radians) -> Option<f64> {
    let alpha = elevation.release();
    if alpha.sin() <= 0.0 {
        return None;
    }
    Some(100.0 * (alpha + tilt.release()).max(0.0).sin())
}

/* # day averages */

/// mean fixed-tilt yield over one day, normalized by the full sample grid
pub fn fixed_day_average(day: &SolarDay, hras: &[Radians], tilt: Radians) -> f64 {
    let total: f64 = hras
        .iter()
        .filter_map(|&hra| fixed_yield(tilt, hra, day.elevation(hra)))
        .sum();
    total / hras.len() as f64
}

/// mean tracking yield over the daytime samples of one day; zero when the
/// sun never rises
pub fn tracking_day_average(day: &SolarDay, hras: &[Radians], tilt: Radians) -> f64 {
    let daylight: Vec<f64> = hras
        .iter()
        .map(|&hra| day.elevation(hra).release())
        .filter(|&alpha| alpha > 0.0)
        .collect();
    if daylight.is_empty() {
        return 0.0;
    }
    let beta = tilt.release();
    100.0
        * daylight
            .iter()
            .map(|alpha| (beta + alpha).sin().max(0.0))
            .sum::<f64>()
        / daylight.len() as f64
}

/* # tilt sweeps */

/// day-average fixed-tilt yield for every given tilt candidate
pub fn fixed_sweep(day: &SolarDay, hras: &[Radians], tilts: &[f64]) -> Vec<f64> {
    tilts
        .iter()
        .map(|&tilt| fixed_day_average(day, hras, Degrees::confine(tilt).radians()))
        .collect()
}

/// day-average tracking yield for every integer tilt candidate
pub fn tracking_sweep(day: &SolarDay, hras: &[Radians]) -> Vec<f64> {
    (0..TILT_MAX)
        .map(|tilt| tracking_day_average(day, hras, Degrees::confine(tilt as f64).radians()))
        .collect()
}

/* # yearly integration */

/// tracking yield for every integer tilt, integrated over a full year
///
/// the heaviest recomputation in the crate; tilt candidates are swept in
/// parallel so a slider change stays within an interactive delay
pub fn yearly_sweep(latitude: Degrees) -> Vec<f64> {
    trace!("integrating yearly yield");
    let hras = solar::hour_angle_grid(HOUR_SAMPLES);
    let daylight: Vec<f64> = (0..YEAR_DAYS)
        .flat_map(|n| {
            let day = SolarDay::new(latitude, n as f64);
            hras.iter()
                .map(move |&hra| day.elevation(hra).release())
                .filter(|&alpha| alpha > 0.0)
        })
        .collect();
    let norm = (HOUR_SAMPLES * YEAR_DAYS) as f64;
    (0..TILT_MAX)
        .into_par_iter()
        .map(|tilt| {
            let beta = (tilt as f64).to_radians();
            let acc: f64 = daylight
                .iter()
                .map(|alpha| (beta + alpha).sin().max(0.0))
                .sum();
            acc / norm * 200.0
        })
        .collect()
}

/* # curve maximum */

/// location and height of the maximum of a yield curve
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
    pub tilt: f64,
    pub percent: f64,
}

pub fn max_marker(tilts: &[f64], percents: &[f64]) -> Option<Marker> {
    tilts
        .iter()
        .zip(percents)
        .ord_subset_max_by_key(|(_, &percent)| percent)
        .map(|(&tilt, &percent)| Marker { tilt, percent })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::linspace;
    use float_eq::assert_float_eq;
    const EPSILON: f64 = 0.0000_01;

    fn radians(deg: f64) -> Radians {
        Degrees::confine(deg).radians()
    }

    #[test]
    fn fixed_yield_flat_panel_noon_zenith() {
        let percent = fixed_yield(radians(0.0), radians(0.0), radians(90.0)).unwrap();
        assert_float_eq!(percent, 100.0, abs <= 0.0001);
    }

    #[test]
    fn fixed_yield_none_at_night() {
        assert!(fixed_yield(radians(5.0), radians(-120.0), radians(-10.0)).is_none());
        assert!(fixed_yield(radians(5.0), radians(0.0), radians(0.0)).is_none());
    }

    #[test]
    fn tracking_yield_flat_panel_tracks_elevation() {
        for alpha in [5.0, 30.0, 60.0, 88.0] {
            let percent = tracking_yield(radians(0.0), radians(alpha)).unwrap();
            assert_float_eq!(
                percent,
                100.0 * alpha.to_radians().sin(),
                abs <= EPSILON
            );
        }
        assert!(tracking_yield(radians(0.0), radians(-3.0)).is_none());
    }

    #[test]
    fn day_averages_within_bounds() {
        let day = SolarDay::new(Degrees::confine(50.0), 30.0);
        let hras = solar::hour_angle_grid(200);
        for tilt in [0.0, 30.0, 60.0, 89.0] {
            let fixed = fixed_day_average(&day, &hras, radians(tilt));
            let tracking = tracking_day_average(&day, &hras, radians(tilt));
            assert!((0.0..=100.0).contains(&fixed));
            assert!((0.0..=100.0).contains(&tracking));
        }
    }

    #[test]
    fn polar_night_average_is_zero() {
        // midwinter above the arctic circle
        let day = SolarDay::new(Degrees::confine(80.0), 355.0);
        let hras = solar::hour_angle_grid(200);
        assert_float_eq!(
            tracking_day_average(&day, &hras, radians(30.0)),
            0.0,
            abs <= EPSILON
        );
    }

    #[test]
    fn sweeps_are_idempotent() {
        let day = SolarDay::new(Degrees::confine(50.0), 30.0);
        let hras = solar::hour_angle_grid(200);
        let tilts = linspace(0.0, 90.0, 200);
        assert_eq!(
            fixed_sweep(&day, &hras, &tilts),
            fixed_sweep(&day, &hras, &tilts)
        );
        assert_eq!(tracking_sweep(&day, &hras), tracking_sweep(&day, &hras));
    }

    #[test]
    fn yearly_sweep_argmax_tracks_latitude() {
        let argmax = |latitude: f64| {
            let percents = yearly_sweep(Degrees::confine(latitude));
            let tilts: Vec<f64> = (0..percents.len()).map(|j| j as f64).collect();
            max_marker(&tilts, &percents).unwrap().tilt
        };
        let low = argmax(10.0);
        let mid = argmax(35.0);
        let high = argmax(60.0);
        assert!(low <= mid && mid <= high);
        // physically, the optimal tilt sits near the latitude
        assert!((mid - 35.0).abs() < 15.0);
    }

    #[test]
    fn yearly_sweep_unimodal_away_from_poles() {
        let percents = yearly_sweep(Degrees::confine(45.0));
        let peak = percents
            .iter()
            .enumerate()
            .ord_subset_max_by_key(|(_, &p)| p)
            .map(|(j, _)| j)
            .unwrap();
        for window in percents[..=peak].windows(2) {
            assert!(window[0] <= window[1]);
        }
        for window in percents[peak..].windows(2) {
            assert!(window[0] >= window[1]);
        }
        for percent in percents {
            assert!((0.0..=100.0).contains(&percent));
        }
    }

    #[test]
    fn max_marker_finds_argmax() {
        let marker = max_marker(&[0.0, 1.0, 2.0], &[10.0, 30.0, 20.0]).unwrap();
        assert_float_eq!(marker.tilt, 1.0, abs <= EPSILON);
        assert_float_eq!(marker.percent, 30.0, abs <= EPSILON);
        assert!(max_marker(&[], &[]).is_none());
    }
}
