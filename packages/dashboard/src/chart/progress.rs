use super::{Scene, Shape};
use crate::BarView;

pub const BAR_HEIGHT: f64 = 20.0;
pub const BAR_BACKGROUND: &str = "#e0e0e0";

/// Horizontal bar: full-width background with a foreground scaled to `percent`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub percent: f64,
    pub color: String,
}

impl ProgressBar {
    pub fn new(percent: f64, color: impl Into<String>) -> Self {
        Self {
            percent,
            color: color.into(),
        }
    }

    /// Clear `scene` and draw the bar across `width`.
    pub fn draw(&self, scene: &mut Scene, width: f64) {
        let width = width.max(0.0);
        scene.reset(width, BAR_HEIGHT);

        let fraction = if self.percent.is_finite() {
            (self.percent / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };

        scene.push(Shape::Rect {
            x: 0.0,
            y: 0.0,
            width,
            height: BAR_HEIGHT,
            fill: BAR_BACKGROUND.to_string(),
        });
        scene.push(Shape::Rect {
            x: 0.0,
            y: 0.0,
            width: fraction * width,
            height: BAR_HEIGHT,
            fill: self.color.clone(),
        });
    }
}

impl From<&BarView> for ProgressBar {
    fn from(bar: &BarView) -> Self {
        Self::new(bar.percent, bar.color)
    }
}
