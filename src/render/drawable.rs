//! Conversion from layout geometry to styled drawable primitives.
//!
//! This is the only place where style meets geometry. Anything time-dependent
//! (the glow pulse) takes the presentation time as an argument.

use crate::{
    animation::morph::{Frame, FrameItem},
    foundation::core::{Line, Point, Rect, RoundedRect, Rgba8},
    layout::engine::{NODE_HEIGHT, NODE_WIDTH, TreeLayout},
    render::theme::Theme,
};

/// Horizontal anchoring of a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TextAnchor {
    Start,
    Middle,
}

/// A styled primitive in world coordinates, ready for a backend.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Drawable {
    /// Vertical gradient filling `rect`.
    Background { rect: Rect, stops: Vec<Rgba8> },
    Glow {
        center: Point,
        radius: f64,
        color: Rgba8,
        opacity: f64,
    },
    NodeBox {
        shape: RoundedRect,
        fill: Rgba8,
        stroke: Rgba8,
        stroke_width: f64,
        opacity: f64,
    },
    /// Node label centered on `at`.
    Label {
        text: String,
        at: Point,
        size: f64,
        family: String,
        color: Rgba8,
        outline: Rgba8,
        opacity: f64,
    },
    Edge {
        line: Line,
        color: Rgba8,
        width: f64,
        opacity: f64,
    },
    /// Headers, bullets and captions. `at` is the baseline-center or baseline-start.
    Text {
        text: String,
        at: Point,
        size: f64,
        color: Rgba8,
        anchor: TextAnchor,
    },
}

/// Drawables for a laid-out tree.
pub fn drawables_for(layout: &TreeLayout, theme: &Theme, time_s: f64) -> Vec<Drawable> {
    drawables_for_frame(&Frame::from(layout), theme, time_s)
}

/// Drawables for a frame, preserving its painter's order. Fully transparent
/// items are skipped.
pub fn drawables_for_frame(frame: &Frame, theme: &Theme, time_s: f64) -> Vec<Drawable> {
    let glow = theme.glow_opacity_at(time_s);
    let mut out = Vec::with_capacity(frame.items.len() * 3);
    for item in &frame.items {
        match item {
            FrameItem::Edge {
                start,
                end,
                opacity,
            } => {
                if *opacity <= 0.0 {
                    continue;
                }
                out.push(Drawable::Edge {
                    line: Line::new(*start, *end),
                    color: theme.edge_color,
                    width: theme.edge_width,
                    opacity: *opacity,
                });
            }
            FrameItem::Node {
                label,
                position,
                opacity,
            } => {
                if *opacity <= 0.0 {
                    continue;
                }
                if theme.glow {
                    out.push(Drawable::Glow {
                        center: *position,
                        radius: theme.glow_radius,
                        color: theme.glow_color,
                        opacity: glow * opacity,
                    });
                }
                let rect = Rect::from_center_size(*position, (NODE_WIDTH, NODE_HEIGHT));
                out.push(Drawable::NodeBox {
                    shape: RoundedRect::from_rect(rect, theme.node_corner_radius),
                    fill: theme.node_fill,
                    stroke: theme.node_stroke,
                    stroke_width: theme.node_stroke_width,
                    opacity: *opacity,
                });
                out.push(Drawable::Label {
                    text: label.to_string(),
                    at: *position,
                    size: theme.label_size,
                    family: theme.font_family.clone(),
                    color: theme.label_color,
                    outline: theme.label_outline,
                    opacity: *opacity,
                });
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/drawable.rs"]
mod tests;
