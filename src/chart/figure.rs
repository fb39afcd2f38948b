use geo::Polygon;
use serde::Serialize;

/* # datasets */

/// sampled curve; `None` marks samples with no defined value (night),
/// rendered as a gap rather than a zero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Samples {
    pub x: Vec<f64>,
    pub y: Vec<Option<f64>>,
}

impl Samples {
    pub fn new(x: Vec<f64>, y: Vec<Option<f64>>) -> Self {
        Self { x, y }
    }

    /// a curve defined everywhere
    pub fn full(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y: y.into_iter().map(Some).collect(),
        }
    }

    /// a two-point segment
    pub fn segment(from: (f64, f64), to: (f64, f64)) -> Self {
        Self::full(vec![from.0, to.0], vec![from.1, to.1])
    }
}

/* # styling */

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    pub color: &'static str,
    pub fill: Option<&'static str>,
    pub width: f64,
    pub alpha: f64,
    pub fill_alpha: f64,
    pub dashed: bool,
}

impl Style {
    pub fn line(color: &'static str) -> Self {
        Self {
            color,
            fill: None,
            width: 3.0,
            alpha: 0.7,
            fill_alpha: 1.0,
            dashed: false,
        }
    }

    pub fn dashed(color: &'static str) -> Self {
        Self {
            dashed: true,
            width: 1.5,
            ..Self::line(color)
        }
    }

    pub fn patch(color: &'static str, fill: &'static str) -> Self {
        Self {
            fill: Some(fill),
            fill_alpha: 0.4,
            ..Self::line(color)
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_fill_alpha(mut self, fill_alpha: f64) -> Self {
        self.fill_alpha = fill_alpha;
        self
    }
}

/* # layers */

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    Line {
        name: String,
        samples: Samples,
        style: Style,
    },
    Patch {
        name: String,
        polygon: Polygon<f64>,
        style: Style,
    },
}

impl Layer {
    pub fn line(name: &str, samples: Samples, style: Style) -> Self {
        Self::Line {
            name: name.to_string(),
            samples,
            style,
        }
    }

    pub fn patch(name: &str, polygon: Polygon<f64>, style: Style) -> Self {
        Self::Patch {
            name: name.to_string(),
            polygon,
            style,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Line { name, .. } | Self::Patch { name, .. } => name,
        }
    }
}

/* # widgets */

/// numeric slider declaration for the external widget runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slider {
    pub title: String,
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub value: f64,
}

impl Slider {
    pub fn new(title: &str, start: f64, end: f64, step: f64, value: f64) -> Self {
        Self {
            title: title.to_string(),
            start,
            end,
            step,
            value,
        }
    }
}

/* # figures */

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub range: Option<(f64, f64)>,
    pub ticks: Vec<f64>,
}

impl Axis {
    pub fn new(label: &str, range: Option<(f64, f64)>, ticks: Vec<f64>) -> Self {
        Self {
            label: label.to_string(),
            range,
            ticks,
        }
    }

    /// unlabeled axis fitted to the data
    pub fn free() -> Self {
        Self::new("", None, Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// force equal unit scales on both axes
    pub match_aspect: bool,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub layers: Vec<Layer>,
    pub sliders: Vec<Slider>,
    /// hover bindings, dataset field to display label
    pub tooltips: Vec<(String, String)>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn samples_constructors() {
        let full = Samples::full(vec![0.0, 1.0], vec![2.0, 3.0]);
        assert_eq!(full.y, vec![Some(2.0), Some(3.0)]);
        let segment = Samples::segment((5.0, 0.0), (5.0, 80.0));
        assert_eq!(segment.x, vec![5.0, 5.0]);
    }

    #[test]
    fn layer_names() {
        let layer = Layer::line("lines", Samples::full(vec![], vec![]), Style::line("black"));
        assert_eq!(layer.name(), "lines");
    }
}
