use std::f64::consts::PI;

use super::{Scene, Shape};
use crate::SkillTotal;

/// Reserved space between the outermost ring and the surface edge.
pub const MARGIN: f64 = 60.0;
/// Radius the smallest value is drawn at.
pub const INNER_OFFSET: f64 = 20.0;
pub const RING_COUNT: usize = 5;
pub const LABEL_FONT_SIZE: f64 = 10.0;

const RING_FILL: &str = "Crimson";
const RING_OPACITY: f64 = 0.2;
const AREA_FILL: &str = "rgba(0, 255, 127, 0.5)";
const AREA_STROKE: &str = "rgba(200, 250, 120, 1)";
const LABEL_FILL: &str = "white";
/// Labels sit at the radius a value 10% above the maximum would get.
const LABEL_REACH: f64 = 1.1;

/// Radar (spider) chart of skill totals.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart<'a> {
    skills: &'a [SkillTotal],
    title: Option<&'a str>,
}

impl<'a> RadarChart<'a> {
    pub fn new(skills: &'a [SkillTotal]) -> Self {
        Self {
            skills,
            title: None,
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Clear `scene` and draw the chart in a `width` × `height` area.
    ///
    /// Returns `false` (and leaves the scene empty) when there is nothing to plot.
    pub fn draw(&self, scene: &mut Scene, width: f64, height: f64) -> bool {
        scene.reset(width, height);
        scene.title = self.title.map(str::to_string);

        if self.skills.is_empty() {
            tracing::warn!("No skills to plot, radar chart left empty");
            return false;
        }

        let cx = width / 2.0;
        let cy = height / 2.0;
        let radius = (width.min(height) / 2.0 - MARGIN).max(INNER_OFFSET);
        let scale = RadialScale::new(self.max(), radius);
        let step = 2.0 * PI / self.skills.len() as f64;

        for i in 0..RING_COUNT {
            scene.push(Shape::Circle {
                cx,
                cy,
                r: radius / RING_COUNT as f64 * (i + 1) as f64,
                fill: RING_FILL.to_string(),
                fill_opacity: RING_OPACITY,
            });
        }

        let points = self
            .skills
            .iter()
            .enumerate()
            .map(|(i, skill)| polar(cx, cy, scale.apply(skill.amount as f64), step * i as f64))
            .collect();
        scene.push(Shape::Polygon {
            points,
            fill: AREA_FILL.to_string(),
            stroke: AREA_STROKE.to_string(),
        });

        let label_radius = scale.apply(self.max() * LABEL_REACH);
        for (i, skill) in self.skills.iter().enumerate() {
            let (x, y) = polar(cx, cy, label_radius, step * i as f64);
            scene.push(Shape::Text {
                x,
                y,
                content: skill.label.clone(),
                font_size: LABEL_FONT_SIZE,
                fill: LABEL_FILL.to_string(),
            });
        }
        true
    }

    fn max(&self) -> f64 {
        self.skills.iter().map(|s| s.amount).max().unwrap_or(0) as f64
    }
}

/// Linear map from `[0, max]` onto `[INNER_OFFSET, radius]`.
/// A zero domain maps everything to the middle of the range.
struct RadialScale {
    max: f64,
    radius: f64,
}

impl RadialScale {
    fn new(max: f64, radius: f64) -> Self {
        Self { max, radius }
    }

    fn apply(&self, value: f64) -> f64 {
        let t = if self.max > 0.0 { value / self.max } else { 0.5 };
        INNER_OFFSET + (self.radius - INNER_OFFSET) * t
    }
}

/// Point at distance `r` from the center, `angle` radians clockwise from 12 o'clock.
fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let theta = angle - PI / 2.0;
    (cx + r * theta.cos(), cy + r * theta.sin())
}
