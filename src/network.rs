//! Decorative node network diagram.
//!
//! Columns of evenly spaced nodes where every node links to every node of
//! the next column, drawn as SVG lines under SVG circles.

use maud::{Markup, html};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const NODE_FILL: &str = "rgba(0,255,163,0.3)";
const NODE_STROKE: &str = "rgba(0,255,163,0.85)";
const NODE_STROKE_WIDTH: &str = "2";
const EDGE_STROKE: &str = "rgba(0,255,163,0.35)";
const EDGE_STROKE_WIDTH: &str = "1.2";

/// Node centre in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Column layout of the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkLayout {
    columns: Vec<usize>,
    width: f64,
    height: f64,
    pad_x: f64,
    pad_y: f64,
    radius: f64,
}

impl Default for NetworkLayout {
    fn default() -> Self {
        Self {
            columns: vec![6, 5, 7, 5, 6, 5],
            width: 1100.0,
            height: 420.0,
            pad_x: 80.0,
            pad_y: 40.0,
            radius: 9.0,
        }
    }
}

impl NetworkLayout {
    /// Creates layout with the given node count per column and the default
    /// canvas.
    pub fn new(columns: Vec<usize>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Sets canvas size and padding.
    pub fn with_canvas(mut self, width: f64, height: f64, pad_x: f64, pad_y: f64) -> Self {
        self.width = width;
        self.height = height;
        self.pad_x = pad_x;
        self.pad_y = pad_y;
        self
    }

    /// `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    fn column_x(&self, column: usize) -> f64 {
        if self.columns.len() < 2 {
            return self.width / 2.0;
        }
        let spacing = (self.width - self.pad_x * 2.0) / (self.columns.len() - 1) as f64;
        self.pad_x + column as f64 * spacing
    }

    /// Node centres grouped by column.
    ///
    /// Node `j` of `n` sits at the middle of the `j`th of `n` equal vertical
    /// bands between the paddings.
    pub fn nodes(&self) -> Vec<Vec<Point>> {
        let band = self.height - self.pad_y * 2.0;
        self.columns
            .iter()
            .enumerate()
            .map(|(column, &count)| {
                let x = self.column_x(column);
                (0..count)
                    .map(|row| Point {
                        x,
                        y: self.pad_y + band * (row as f64 + 0.5) / count as f64,
                    })
                    .collect()
            })
            .collect()
    }

    /// Lines between every node pair of adjacent columns.
    pub fn edges(&self) -> Vec<(Point, Point)> {
        let nodes = self.nodes();
        nodes
            .windows(2)
            .flat_map(|pair| {
                pair[0]
                    .iter()
                    .flat_map(move |&a| pair[1].iter().map(move |&b| (a, b)))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.columns.iter().sum()
    }

    /// Renders diagram as an `<svg>` element with optional id.
    ///
    /// Edges are emitted before nodes so circles paint on top.
    pub fn svg(&self, id: Option<&str>) -> Markup {
        let nodes = self.nodes();
        html! {
            svg xmlns=(SVG_NS) id=[id] viewBox=(self.view_box()) role="img" aria-label="Node network diagram" {
                @for (a, b) in self.edges() {
                    line x1=(a.x) y1=(a.y) x2=(b.x) y2=(b.y)
                        stroke=(EDGE_STROKE) stroke-width=(EDGE_STROKE_WIDTH) {}
                }
                @for point in nodes.iter().flatten() {
                    circle cx=(point.x) cy=(point.y) r=(self.radius)
                        fill=(NODE_FILL) stroke=(NODE_STROKE) stroke-width=(NODE_STROKE_WIDTH) {}
                }
            }
        }
    }

    /// Renders standalone SVG document text.
    pub fn to_svg_string(&self) -> String {
        self.svg(None).into_string()
    }
}
