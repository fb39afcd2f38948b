use crate::chart::figure::{Figure, Layer, Samples};
use crate::error::Error;
use geo::Polygon;
use itertools::Itertools;
use log::trace;
use std::fs;
use std::path::Path;
use svg::node;
use svg::node::element::{Path as SvgPath, Rectangle, Text};
use svg::Document;

/* # data to screen projection */

const MARGIN_LEFT: f64 = 62.0;
const MARGIN_RIGHT: f64 = 18.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 48.0;
const AUTO_PAD: f64 = 0.05; // relative padding around fitted data

struct Projection {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

/// every defined data point of every layer
fn data_points(figure: &Figure) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for layer in &figure.layers {
        match layer {
            Layer::Line { samples, .. } => {
                for (&x, y) in samples.x.iter().zip(&samples.y) {
                    if let Some(y) = y {
                        points.push((x, *y));
                    }
                }
            }
            Layer::Patch { polygon, .. } => {
                points.extend(polygon.exterior().0.iter().map(|c| (c.x, c.y)));
            }
        }
    }
    points
}

fn padded(span: (f64, f64)) -> (f64, f64) {
    let pad = AUTO_PAD * (span.1 - span.0);
    (span.0 - pad, span.1 + pad)
}

fn widened(span: (f64, f64)) -> (f64, f64) {
    if span.1 - span.0 > f64::EPSILON {
        span
    } else {
        (span.0 - 1.0, span.1 + 1.0)
    }
}

impl Projection {
    fn fit(figure: &Figure) -> Self {
        let points = data_points(figure);
        let (x_min, mut x_max) = widened(figure.x_axis.range.unwrap_or_else(|| {
            padded(
                points
                    .iter()
                    .map(|p| p.0)
                    .minmax()
                    .into_option()
                    .unwrap_or((0.0, 1.0)),
            )
        }));
        let (y_min, mut y_max) = widened(figure.y_axis.range.unwrap_or_else(|| {
            padded(
                points
                    .iter()
                    .map(|p| p.1)
                    .minmax()
                    .into_option()
                    .unwrap_or((0.0, 1.0)),
            )
        }));

        let left = MARGIN_LEFT;
        let right = figure.width as f64 - MARGIN_RIGHT;
        let top = MARGIN_TOP;
        let bottom = figure.height as f64 - MARGIN_BOTTOM;

        if figure.match_aspect {
            // keep the minima anchored and stretch the shorter span
            let x_scale = (right - left) / (x_max - x_min);
            let y_scale = (bottom - top) / (y_max - y_min);
            if x_scale < y_scale {
                y_max = y_min + (bottom - top) / x_scale;
            } else {
                x_max = x_min + (right - left) / y_scale;
            }
        }

        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            left,
            right,
            top,
            bottom,
        }
    }

    fn x(&self, x: f64) -> f64 {
        self.left + (x - self.x_min) / (self.x_max - self.x_min) * (self.right - self.left)
    }

    fn y(&self, y: f64) -> f64 {
        self.bottom - (y - self.y_min) / (self.y_max - self.y_min) * (self.bottom - self.top)
    }
}

/* # geometry to svg */

/// path data for a sampled curve; undefined samples lift the pen
fn samples_to_svg(samples: &Samples, proj: &Projection) -> String {
    let mut data = String::new();
    let mut pen_down = false;
    for (&x, y) in samples.x.iter().zip(&samples.y) {
        match y {
            Some(y) => {
                let verb = if pen_down { 'L' } else { 'M' };
                data.push_str(&format!("{}{} {}", verb, proj.x(x), proj.y(*y)));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    data
}

fn poly_to_svg(poly: &Polygon<f64>, proj: &Projection) -> String {
    if poly.exterior().0.is_empty() {
        "".into()
    } else {
        let ring = poly
            .exterior()
            .0
            .iter()
            .map(|c| format!("{} {}", proj.x(c.x), proj.y(c.y)))
            .join("L");
        format!("M{}Z", ring)
    }
}

fn layer_to_svg(layer: &Layer, proj: &Projection) -> SvgPath {
    match layer {
        Layer::Line {
            name,
            samples,
            style,
        } => {
            let mut path = SvgPath::new()
                .set("class", name.as_str())
                .set("d", samples_to_svg(samples, proj))
                .set("fill", "none")
                .set("stroke", style.color)
                .set("stroke-width", style.width)
                .set("stroke-opacity", style.alpha);
            if style.dashed {
                path = path.set("stroke-dasharray", "6 4");
            }
            path
        }
        Layer::Patch {
            name,
            polygon,
            style,
        } => SvgPath::new()
            .set("class", name.as_str())
            .set("d", poly_to_svg(polygon, proj))
            .set("fill", style.fill.unwrap_or(style.color))
            .set("fill-opacity", style.fill_alpha)
            .set("stroke", style.color)
            .set("stroke-width", style.width)
            .set("stroke-opacity", style.alpha),
    }
}

/* # annotations */

fn label(content: &str, x: f64, y: f64, size: f64, anchor: &str) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("font-size", size)
        .set("text-anchor", anchor)
        .set("fill", "#444444")
        .add(node::Text::new(content))
}

fn grid(figure: &Figure, proj: &Projection) -> SvgPath {
    let mut data = String::new();
    for &tick in &figure.x_axis.ticks {
        if (proj.x_min..=proj.x_max).contains(&tick) {
            data.push_str(&format!(
                "M{} {}L{} {}",
                proj.x(tick),
                proj.bottom,
                proj.x(tick),
                proj.top
            ));
        }
    }
    for &tick in &figure.y_axis.ticks {
        if (proj.y_min..=proj.y_max).contains(&tick) {
            data.push_str(&format!(
                "M{} {}L{} {}",
                proj.left,
                proj.y(tick),
                proj.right,
                proj.y(tick)
            ));
        }
    }
    SvgPath::new()
        .set("d", data)
        .set("stroke", "#dddddd")
        .set("stroke-width", 1)
        .set("fill", "none")
}

/* # figure assembly */

pub fn document(figure: &Figure) -> Document {
    trace!("rendering figure into svg");
    let proj = Projection::fit(figure);
    let mut image = Document::new()
        .set("viewBox", (0u32, 0u32, figure.width, figure.height))
        .set("width", figure.width)
        .set("height", figure.height)
        .set("font-family", "sans-serif")
        .add(
            Rectangle::new()
                .set("width", figure.width)
                .set("height", figure.height)
                .set("fill", "white"),
        )
        .add(grid(figure, &proj));

    for layer in &figure.layers {
        image = image.add(layer_to_svg(layer, &proj));
    }

    // frame over the layers, then tick and axis annotations
    image = image.add(
        Rectangle::new()
            .set("x", proj.left)
            .set("y", proj.top)
            .set("width", proj.right - proj.left)
            .set("height", proj.bottom - proj.top)
            .set("fill", "none")
            .set("stroke", "#999999"),
    );
    for &tick in &figure.x_axis.ticks {
        if (proj.x_min..=proj.x_max).contains(&tick) {
            image = image.add(label(
                &format!("{}", tick),
                proj.x(tick),
                proj.bottom + 16.0,
                11.0,
                "middle",
            ));
        }
    }
    for &tick in &figure.y_axis.ticks {
        if (proj.y_min..=proj.y_max).contains(&tick) {
            image = image.add(label(
                &format!("{}", tick),
                proj.left - 8.0,
                proj.y(tick) + 4.0,
                11.0,
                "end",
            ));
        }
    }
    image = image.add(label(
        &figure.x_axis.label,
        (proj.left + proj.right) / 2.0,
        proj.bottom + 36.0,
        13.0,
        "middle",
    ));
    let y_label = label(
        &figure.y_axis.label,
        18.0,
        (proj.top + proj.bottom) / 2.0,
        13.0,
        "middle",
    )
    .set(
        "transform",
        format!("rotate(-90 18 {})", (proj.top + proj.bottom) / 2.0),
    );
    image = image.add(y_label);
    image.add(label(
        &figure.title,
        (proj.left + proj.right) / 2.0,
        24.0,
        15.0,
        "middle",
    ))
}

/* # artifacts */

/// render a figure into a standalone html page carrying the svg plus the
/// serialized dataset, slider and tooltip bundle for the widget runtime
pub fn html(figure: &Figure, page_title: &str) -> Result<String, Error> {
    let bundle = serde_json::to_string(figure)?;
    let image = document(figure);
    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n\
         <script type=\"application/json\" id=\"figure\">\n{}\n</script>\n\
         </body>\n</html>\n",
        page_title, image, bundle
    ))
}

/// write the html artifact, creating missing parent directories
pub fn save<P: AsRef<Path>>(figure: &Figure, path: P, page_title: &str) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, html(figure, page_title)?)?;
    trace!("wrote figure to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chart::figure::{Axis, Style};
    use float_eq::assert_float_eq;
    use geo::{LineString, Polygon};

    fn line_figure() -> Figure {
        Figure {
            title: "test".to_string(),
            width: 400,
            height: 200,
            match_aspect: false,
            x_axis: Axis::new("x", Some((0.0, 10.0)), vec![0.0, 5.0, 10.0]),
            y_axis: Axis::new("y", Some((0.0, 100.0)), vec![0.0, 50.0, 100.0]),
            layers: vec![Layer::line(
                "lines",
                Samples::new(
                    vec![0.0, 1.0, 2.0, 3.0],
                    vec![Some(1.0), None, Some(3.0), Some(4.0)],
                ),
                Style::line("steelblue"),
            )],
            sliders: vec![],
            tooltips: vec![],
        }
    }

    #[test]
    fn projection_maps_corners() {
        let figure = line_figure();
        let proj = Projection::fit(&figure);
        assert_float_eq!(proj.x(0.0), MARGIN_LEFT, abs <= 1e-9);
        assert_float_eq!(proj.x(10.0), 400.0 - MARGIN_RIGHT, abs <= 1e-9);
        assert_float_eq!(proj.y(0.0), 200.0 - MARGIN_BOTTOM, abs <= 1e-9);
        assert_float_eq!(proj.y(100.0), MARGIN_TOP, abs <= 1e-9);
    }

    #[test]
    fn gap_lifts_the_pen() {
        let figure = line_figure();
        let proj = Projection::fit(&figure);
        if let Layer::Line { samples, .. } = &figure.layers[0] {
            let data = samples_to_svg(samples, &proj);
            assert_eq!(data.matches('M').count(), 2);
            assert_eq!(data.matches('L').count(), 1);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn polygon_path_is_closed() {
        let figure = line_figure();
        let proj = Projection::fit(&figure);
        let poly = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
            vec![],
        );
        let data = poly_to_svg(&poly, &proj);
        assert!(data.starts_with('M'));
        assert!(data.ends_with('Z'));
    }

    #[test]
    fn html_embeds_the_bundle() {
        let page = html(&line_figure(), "a test page").unwrap();
        assert!(page.contains("<svg"));
        assert!(page.contains("application/json"));
        assert!(page.contains("\"sliders\""));
        assert!(page.contains("<title>a test page</title>"));
    }
}
