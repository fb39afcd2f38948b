use crate::error::Error;
use crate::units::{Degrees, Unit};
use geo::{LineString, Polygon};
use log::trace;

/* # ray casting */

const RAY_ORIGIN_X: f64 = -2.0; // where the leading ray enters the scene
const RAY_OVERHANG: f64 = 3.0; // lit ground kept past the last shadow edge

fn ray_slope(sun_angle: Degrees) -> Result<f64, Error> {
    let slope = sun_angle.radians().release().tan();
    if slope <= 0.0 {
        return Err(Error::Domain("sun angle must lie strictly above the horizon"));
    }
    Ok(slope)
}

fn closed_polygon(points: Vec<(f64, f64)>) -> Polygon<f64> {
    Polygon::new(LineString::from(points), vec![])
}

/* # tree over a wall */

// tree silhouette template, y normalized to unit height
const TREE_X: [f64; 16] = [
    -0.5, -0.5, -2.0, -1.0, -1.5, -0.5, -1.0, 0.0, 1.0, 0.5, 1.5, 1.0, 2.0, 0.5, 0.5, -0.5,
];
const TREE_Y: [f64; 16] = [
    0.0, 0.25, 0.25, 0.5, 0.5, 0.75, 0.75, 1.0, 0.75, 0.75, 0.5, 0.5, 0.25, 0.25, 0.0, 0.0,
];

/// a tree standing west of a wall, lit by the afternoon sun
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeScene {
    pub tree_height: f64,
    pub wall_height: f64,
    pub wall_distance: f64,
    pub sun_angle: Degrees,
}

impl TreeScene {
    /// ordered outline of the sunlit region
    ///
    /// always seven vertices so the layer shape matches across branches;
    /// the full-shadow branch repeats its closing vertex
    pub fn sunlit_region(&self) -> Result<Polygon<f64>, Error> {
        let slope = ray_slope(self.sun_angle)?;
        let x0 = RAY_ORIGIN_X;
        let y0 = self.tree_height - x0 * slope;
        // ground intersection of the ray cast from the tree top
        let reach = self.tree_height / slope;
        // ground intersection of the ray grazing the wall top
        let clear = self.wall_height / slope + self.wall_distance;
        // height at which the tree-top ray meets the wall face
        let strike = self.tree_height - slope * self.wall_distance;

        let mut points = vec![(x0, y0)];
        if strike < self.wall_height {
            let close = clear + RAY_OVERHANG - y0 / slope;
            if reach > self.wall_distance {
                // shadow reaches past the wall base: wall face partially lit
                trace!("tree shade: wall partially lit");
                points.extend([
                    (self.wall_distance, strike),
                    (self.wall_distance, self.wall_height),
                    (clear, 0.0),
                    (clear, 0.0),
                    (clear + RAY_OVERHANG, 0.0),
                    (close, y0),
                ]);
            } else {
                // shadow ends before the wall: wall fully lit
                trace!("tree shade: wall fully lit");
                points.extend([
                    (reach, 0.0),
                    (self.wall_distance, 0.0),
                    (self.wall_distance, self.wall_height),
                    (clear, 0.0),
                    (clear + RAY_OVERHANG, 0.0),
                    (close, y0),
                ]);
            }
        } else {
            // the wall sits entirely inside the shadow
            trace!("tree shade: wall shaded");
            let close = reach + RAY_OVERHANG - y0 / slope;
            points.extend([
                (reach, 0.0),
                (reach + RAY_OVERHANG, 0.0),
                (close, y0),
                (close, y0),
                (close, y0),
                (close, y0),
            ]);
        }
        Ok(closed_polygon(points))
    }

    /// tree silhouette scaled to the current height
    pub fn tree_outline(&self) -> Polygon<f64> {
        closed_polygon(
            TREE_X
                .iter()
                .zip(&TREE_Y)
                .map(|(&x, &y)| (x, y * self.tree_height))
                .collect(),
        )
    }

    /// the wall as a two-point segment
    pub fn wall(&self) -> Vec<(f64, f64)> {
        vec![
            (self.wall_distance, 0.0),
            (self.wall_distance, self.wall_height),
        ]
    }

    /// ground slab stretched to the lit extent
    pub fn ground(&self, lit_extent: f64) -> Polygon<f64> {
        closed_polygon(vec![
            (RAY_ORIGIN_X, 0.0),
            (lit_extent + 2.0, 0.0),
            (lit_extent + 2.0, -0.5),
            (RAY_ORIGIN_X, -0.5),
        ])
    }
}

/* # panel spacing */

/// a tilted panel chord and the shadow it throws on the row behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingScene {
    pub panel_size: f64,
    pub panel_angle: Degrees,
    pub sun_angle: Degrees,
}

impl SpacingScene {
    /// horizontal footprint and raised edge height of the panel chord
    fn chord(&self) -> (f64, f64) {
        let beta = self.panel_angle.radians().release();
        (self.panel_size * beta.cos(), self.panel_size * beta.sin())
    }

    /// the panel as a two-point segment
    pub fn panel(&self) -> Vec<(f64, f64)> {
        let (footprint, height) = self.chord();
        vec![(0.0, 0.0), (footprint, height)]
    }

    /// horizontal reach of the panel shadow on the ground
    pub fn shadow_reach(&self) -> Result<f64, Error> {
        let (_, height) = self.chord();
        Ok(height / ray_slope(self.sun_angle)?)
    }

    /// ordered outline of the sunlit region around the panel
    pub fn sunlit_region(&self) -> Result<Polygon<f64>, Error> {
        let slope = ray_slope(self.sun_angle)?;
        let (footprint, height) = self.chord();
        let reach = height / slope;
        let band = 2.0 * height.max(1.0); // sky band closing the polygon
        let offset = band / slope;
        let far = footprint + reach + 1.0;
        Ok(closed_polygon(vec![
            (-1.0, 0.0),
            (0.0, 0.0),
            (footprint, height),
            (footprint + reach, 0.0),
            (far, 0.0),
            (far - offset, band),
            (-1.0 - offset, band),
        ]))
    }

    /// soil slab under the panel and its shadow
    pub fn soil(&self) -> Result<Polygon<f64>, Error> {
        let (footprint, _) = self.chord();
        let far = footprint + self.shadow_reach()? + 1.0;
        Ok(closed_polygon(vec![
            (-1.0, 0.0),
            (far, 0.0),
            (far, -0.1),
            (-1.0, -0.1),
        ]))
    }
}
