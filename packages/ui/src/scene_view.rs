use dashboard::{Scene, Shape};
use dioxus::prelude::*;

/// Draws a [`Scene`] as an `<svg>` filling its container's width.
///
/// Shapes are keyed by position, so a redrawn scene replaces the previous
/// elements instead of adding to them.
#[component]
pub fn SceneSvg(
    id: &'static str,
    scene: Scene,
    /// Fixed pixel height; `None` fills the container.
    height: Option<f64>,
) -> Element {
    let height = match height {
        Some(h) => format!("{h}"),
        None => "100%".to_string(),
    };

    rsx! {
        svg {
            id: "{id}",
            "width": "100%",
            "height": "{height}",
            "viewBox": scene.view_box(),
            "preserveAspectRatio": "none",
            if let Some(title) = scene.title.clone() {
                title { "{title}" }
            }
            for (i, shape) in scene.shapes().iter().cloned().enumerate() {
                ShapeNode { key: "{i}", shape }
            }
        }
    }
}

#[component]
fn ShapeNode(shape: Shape) -> Element {
    match shape {
        Shape::Rect { x, y, width, height, fill } => rsx! {
            rect {
                "x": "{x}",
                "y": "{y}",
                "width": "{width}",
                "height": "{height}",
                "fill": "{fill}",
            }
        },
        Shape::Circle { cx, cy, r, fill, fill_opacity } => rsx! {
            circle {
                "cx": "{cx}",
                "cy": "{cy}",
                "r": "{r}",
                "fill": "{fill}",
                "fill-opacity": "{fill_opacity}",
            }
        },
        Shape::Polygon { points, fill, stroke } => rsx! {
            polygon {
                "points": Shape::points_attr(&points),
                "fill": "{fill}",
                "stroke": "{stroke}",
            }
        },
        Shape::Text { x, y, content, font_size, fill } => rsx! {
            text {
                "x": "{x}",
                "y": "{y}",
                "font-size": "{font_size}px",
                "text-anchor": "middle",
                "fill": "{fill}",
                "{content}"
            }
        },
    }
}
