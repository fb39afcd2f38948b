use crate::chart::figure::{Axis, Figure, Layer, Samples, Slider, Style};
use crate::error::Error;
use crate::shade::SpacingScene;
use crate::units::{Degrees, Unit};
use log::trace;

/* # shade of a solar panel row */

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub panel_size: f64,
    pub panel_angle: f64,
    pub sun_angle: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            panel_size: 1.0,
            panel_angle: 20.0,
            sun_angle: 60.0,
        }
    }
}

pub fn figure(params: &Params) -> Result<Figure, Error> {
    trace!("building panel spacing figure");
    let scene = SpacingScene {
        panel_size: params.panel_size,
        panel_angle: Degrees::confine(params.panel_angle),
        sun_angle: Degrees::confine(params.sun_angle),
    };
    let panel = scene.panel();

    Ok(Figure {
        title: "Shade of a solar panel.".to_string(),
        width: 700,
        height: 400,
        match_aspect: true,
        x_axis: Axis::free(),
        y_axis: Axis::free(),
        layers: vec![
            Layer::patch("ground", scene.soil()?, Style::patch("brown", "saddlebrown")),
            Layer::patch(
                "sun",
                scene.sunlit_region()?,
                Style::patch("darkorange", "gold"),
            ),
            Layer::line(
                "panel",
                Samples::segment(panel[0], panel[1]),
                Style::line("dimgray").with_width(5.0),
            ),
        ],
        sliders: vec![
            Slider::new("Panel size", 0.25, 20.0, 0.25, params.panel_size),
            Slider::new("Panel angle", 0.0, 89.5, 0.25, params.panel_angle),
            Slider::new("Sun elevation angle.", 0.5, 90.0, 0.25, params.sun_angle),
        ],
        tooltips: vec![],
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn figure_layers_and_sliders() {
        let figure = figure(&Params::default()).unwrap();
        assert_eq!(figure.layers.len(), 3);
        assert_eq!(figure.sliders.len(), 3);
    }

    #[test]
    fn lower_sun_throws_longer_shade() {
        let high = figure(&Params {
            sun_angle: 60.0,
            ..Params::default()
        })
        .unwrap();
        let low = figure(&Params {
            sun_angle: 20.0,
            ..Params::default()
        })
        .unwrap();
        let extent = |figure: &Figure| match &figure.layers[0] {
            Layer::Patch { polygon, .. } => polygon
                .exterior()
                .0
                .iter()
                .map(|c| c.x)
                .fold(f64::NEG_INFINITY, f64::max),
            _ => unreachable!(),
        };
        assert!(extent(&low) > extent(&high));
    }
}
