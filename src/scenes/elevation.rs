use crate::chart::figure::{Axis, Figure, Layer, Samples, Slider, Style};
use crate::error::Error;
use crate::solar::{self, SolarDay};
use crate::units::{Degrees, Unit};
use crate::vars::HOUR_SAMPLES;
use log::trace;

/* # sun elevation over a day */

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub latitude: f64,
    pub day: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            latitude: 50.0,
            day: 30.0,
        }
    }
}

/// elevation curve over the clock hours, zero-clipped so night reads flat
fn curve(params: &Params) -> Samples {
    let hours = solar::hour_grid(HOUR_SAMPLES);
    let day = SolarDay::new(Degrees::confine(params.latitude), params.day);
    let angles = hours
        .iter()
        .map(|&hour| {
            day.elevation(solar::hour_angle(hour).radians())
                .degrees()
                .release()
                .max(0.0)
        })
        .collect();
    Samples::full(hours, angles)
}

pub fn figure(params: &Params) -> Result<Figure, Error> {
    trace!("building sun elevation figure");
    Ok(Figure {
        title: "Sun height over a day.".to_string(),
        width: 1000,
        height: 300,
        match_aspect: false,
        x_axis: Axis::new(
            "Hours",
            Some((0.0, 24.0)),
            (0..=24).step_by(3).map(|h| h as f64).collect(),
        ),
        y_axis: Axis::new(
            "Sun angle (°)",
            Some((0.0, 90.0)),
            (0..=90).step_by(15).map(|a| a as f64).collect(),
        ),
        layers: vec![Layer::line("lines", curve(params), Style::line("steelblue"))],
        sliders: vec![
            Slider::new("Latitude", 0.0, 90.0, 0.00001, params.latitude),
            Slider::new("Days since 1st of Jan.", 0.0, 365.0, 1.0, params.day),
        ],
        tooltips: vec![
            ("x".to_string(), "Hour".to_string()),
            ("y".to_string(), "Elevation°".to_string()),
        ],
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn curve_is_clipped_to_daylight() {
        let samples = curve(&Params::default());
        assert_eq!(samples.x.len(), HOUR_SAMPLES);
        // midnight reads as zero, not negative
        assert_float_eq!(samples.y[0].unwrap(), 0.0, abs <= 1e-9);
        // noon is the brightest sample
        let noon = samples.y[HOUR_SAMPLES / 2].unwrap();
        assert!(samples.y.iter().all(|y| y.unwrap() <= noon + 1e-9));
    }

    #[test]
    fn figure_declares_two_sliders() {
        let figure = figure(&Params::default()).unwrap();
        assert_eq!(figure.sliders.len(), 2);
        assert_eq!(figure.layers.len(), 1);
    }
}
