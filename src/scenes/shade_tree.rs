use crate::chart::figure::{Axis, Figure, Layer, Samples, Slider, Style};
use crate::error::Error;
use crate::shade::TreeScene;
use crate::units::{Degrees, Unit};
use log::trace;

/* # shade of a tree over a wall */

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub tree_height: f64,
    pub wall_height: f64,
    pub wall_distance: f64,
    pub sun_angle: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            tree_height: 3.0,
            wall_height: 2.0,
            wall_distance: 4.0,
            sun_angle: 60.0,
        }
    }
}

pub fn figure(params: &Params) -> Result<Figure, Error> {
    trace!("building tree shade figure");
    let scene = TreeScene {
        tree_height: params.tree_height,
        wall_height: params.wall_height,
        wall_distance: params.wall_distance,
        sun_angle: Degrees::confine(params.sun_angle),
    };
    let rays = scene.sunlit_region()?;
    let lit_extent = rays
        .exterior()
        .0
        .iter()
        .map(|c| c.x)
        .fold(f64::NEG_INFINITY, f64::max);
    let wall = scene.wall();

    Ok(Figure {
        title: "Shade of a tree over a wall VS sun angle.".to_string(),
        width: 700,
        height: 400,
        match_aspect: true,
        x_axis: Axis::free(),
        y_axis: Axis::free(),
        layers: vec![
            Layer::patch("tree", scene.tree_outline(), Style::patch("green", "green")),
            Layer::patch(
                "ground",
                scene.ground(lit_extent),
                Style::patch("brown", "saddlebrown"),
            ),
            Layer::patch("rays", rays, Style::patch("darkorange", "gold")),
            Layer::line(
                "wall",
                Samples::segment(wall[0], wall[1]),
                Style::line("dimgray").with_width(5.0),
            ),
        ],
        sliders: vec![
            Slider::new("Tree height", 0.5, 50.0, 0.25, params.tree_height),
            Slider::new("Wall-Tree distance", 0.0, 100.0, 0.25, params.wall_distance),
            Slider::new("Wall height", 0.5, 50.0, 0.25, params.wall_height),
            Slider::new("Sun angle", 1.0, 89.0, 0.25, params.sun_angle),
        ],
        tooltips: vec![],
    })
}
