//! # Retained SVG scenes
//!
//! Each drawing surface on the page (two progress bars, one radar) owns a
//! [`Scene`]: its size plus an ordered list of [`Shape`]s. Drawing routines
//! clear the scene before appending, so drawing the same input twice leaves
//! the same shapes, never a second copy. The UI turns a scene into SVG
//! elements one-to-one.

mod progress;
mod radar;

pub use progress::{ProgressBar, BAR_BACKGROUND, BAR_HEIGHT};
pub use radar::{RadarChart, INNER_OFFSET, LABEL_FONT_SIZE, MARGIN, RING_COUNT};

/// One SVG primitive, in absolute scene coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        fill_opacity: f64,
    },
    /// Closed outline through `points`.
    Polygon {
        points: Vec<(f64, f64)>,
        fill: String,
        stroke: String,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: f64,
        fill: String,
    },
}

impl Shape {
    /// `points` attribute value for a polygon.
    pub fn points_attr(points: &[(f64, f64)]) -> String {
        points
            .iter()
            .map(|(x, y)| format!("{x:.2},{y:.2}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A drawing surface and the shapes currently on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Accessible title, rendered as an SVG `<title>`.
    pub title: Option<String>,
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: None,
            shapes: Vec::new(),
        }
    }

    /// Remove every shape and resize.
    pub fn reset(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.shapes.clear();
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}
