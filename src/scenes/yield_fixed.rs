use crate::chart::figure::{Axis, Figure, Layer, Samples, Slider, Style};
use crate::error::Error;
use crate::panel;
use crate::solar::{self, SolarDay};
use crate::units::{Degrees, Unit};
use crate::vars::HOUR_SAMPLES_FINE;
use log::trace;

/* # hour-by-hour yield, fixed south-facing panel */

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub latitude: f64,
    pub day: f64,
    pub tilt: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            latitude: 50.0,
            day: 30.0,
            tilt: 5.0,
        }
    }
}

/// yield curve over the clock hours; night samples stay undefined
fn curve(params: &Params) -> Samples {
    let hours = solar::hour_grid(HOUR_SAMPLES_FINE);
    let day = SolarDay::new(Degrees::confine(params.latitude), params.day);
    let tilt = Degrees::confine(params.tilt).radians();
    let percents = hours
        .iter()
        .map(|&hour| {
            let hra = solar::hour_angle(hour).radians();
            panel::fixed_yield(tilt, hra, day.elevation(hra))
        })
        .collect();
    Samples::new(hours, percents)
}

pub fn figure(params: &Params) -> Result<Figure, Error> {
    trace!("building fixed panel yield figure");
    Ok(Figure {
        title: "Yield of a fixed solar panel facing south.".to_string(),
        width: 1000,
        height: 300,
        match_aspect: false,
        x_axis: Axis::new(
            "Hours",
            Some((0.0, 24.0)),
            (0..=24).step_by(3).map(|h| h as f64).collect(),
        ),
        y_axis: Axis::new(
            "Energy ratio (%)",
            Some((0.0, 105.0)),
            (0..=100).step_by(25).map(|p| p as f64).collect(),
        ),
        layers: vec![Layer::line("lines", curve(params), Style::line("steelblue"))],
        sliders: vec![
            Slider::new("Latitude", 0.0, 90.0, 0.00001, params.latitude),
            Slider::new("Days since 1st of Jan.", 0.0, 365.0, 1.0, params.day),
            Slider::new("Solar panel tilt angle.", 0.0, 90.0, 0.25, params.tilt),
        ],
        tooltips: vec![
            ("x".to_string(), "Hour".to_string()),
            ("y".to_string(), "Ratio".to_string()),
        ],
    })
}
