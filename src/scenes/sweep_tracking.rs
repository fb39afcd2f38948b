use crate::chart::figure::{Axis, Figure, Layer, Samples, Slider, Style};
use crate::error::Error;
use crate::panel;
use crate::scenes::max_marker_layer;
use crate::solar::{self, SolarDay};
use crate::units::{Degrees, Unit};
use crate::vars::{HOUR_SAMPLES, TILT_MAX};
use log::trace;

/* # day-average yield vs tilt, sun-tracking panel */

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

pub fn figure(params: &Params) -> Result<Figure, Error> {
    trace!("building tracking panel tilt sweep figure");
    let day = SolarDay::new(Degrees::confine(params.latitude), params.day);
    let hras = solar::hour_angle_grid(HOUR_SAMPLES);
    let tilts: Vec<f64> = (0..TILT_MAX).map(|tilt| tilt as f64).collect();
    let percents = panel::tracking_sweep(&day, &hras);
    let marker = panel::max_marker(&tilts, &percents)
        .ok_or(Error::Domain("yield curve has no samples"))?;

    Ok(Figure {
        title: "Average yield over a day for a rotating panel.".to_string(),
        width: 1000,
        height: 300,
        match_aspect: false,
        x_axis: Axis::new(
            "Tilt angle °",
            Some((0.0, 90.0)),
            (0..=90).step_by(5).map(|t| t as f64).collect(),
        ),
        y_axis: Axis::new(
            "Yield (%)",
            Some((0.0, 105.0)),
            (0..=100).step_by(25).map(|p| p as f64).collect(),
        ),
        layers: vec![
            Layer::line(
                "lines",
                Samples::full(tilts, percents),
                Style::line("steelblue"),
            ),
            max_marker_layer(marker),
        ],
        sliders: vec![
            Slider::new("Latitude", 0.0, 90.0, 0.00001, params.latitude),
            Slider::new("Days since 1st of Jan.", 0.0, 365.0, 1.0, params.day),
        ],
        tooltips: vec![
            ("x".to_string(), "Angle (°)".to_string()),
            ("y".to_string(), "Yield (%)".to_string()),
        ],
    })
}
