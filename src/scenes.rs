use crate::chart::figure::{Layer, Samples, Style};
use crate::panel::Marker;

pub mod elevation;
pub mod shade_spacing;
pub mod shade_tree;
pub mod sweep_fixed;
pub mod sweep_tracking;
pub mod yield_fixed;
pub mod yield_tracking;
pub mod yield_year;

/// dashed vertical segment marking the maximum of a yield curve
pub(crate) fn max_marker_layer(marker: Marker) -> Layer {
    Layer::line(
        "max",
        Samples::segment((marker.tilt, 0.0), (marker.tilt, marker.percent)),
        Style::dashed("black"),
    )
}
