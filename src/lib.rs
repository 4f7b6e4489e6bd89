//! Splaydeck lays out binary trees as slide diagrams and renders splay-tree
//! rotation walkthroughs.
//!
//! # Pipeline overview
//!
//! 1. **Model**: a [`Node`] tree (or a [`FlatTree`] id table) per step, grouped into a [`Deck`]
//! 2. **Layout**: `Node + LayoutParams -> TreeLayout` (positions, levels, edge anchors)
//! 3. **Animate** (optional): `TreeLayout x TreeLayout -> Morph`, sampled into a [`Frame`]
//! 4. **Render**: `Frame -> Vec<Drawable> -> RenderBackend` (SVG backend included)
//!
//! Layout is pure: no IO, no global state, and the same input always yields
//! the same geometry. World coordinates grow upward; backends flip as needed.
#![forbid(unsafe_code)]

mod animation;
mod deck;
mod foundation;
mod layout;
mod render;
mod tree;

pub use animation::ease::Ease;
pub use animation::morph::{Frame, FrameItem, Morph};
pub use deck::builtin::splay_rotations;
pub use deck::model::{CaptionTone, Deck, Slide, SlideLayout, Step, StepLayout};
pub use foundation::core::{Line, Point, Rect, Rgba8, RoundedRect, Vec2};
pub use foundation::error::{SplayError, SplayResult};
pub use layout::engine::{
    EDGE_NUDGE, EdgeAnchors, LayoutParams, NODE_HEIGHT, NODE_WIDTH, NodeId, PositionedNode,
    RIGHT_SKEW, SPACING_DECAY, Side, TreeLayout, horizontal_offset, layout,
};
pub use render::backend::{RenderBackend, execute_drawables};
pub use render::drawable::{Drawable, TextAnchor, drawables_for, drawables_for_frame};
pub use render::scene::{bullet_drawables, step_drawables, title_drawables};
pub use render::svg::{DEFAULT_PIXELS_PER_UNIT, SvgBackend, default_view, render_svg};
pub use render::theme::Theme;
pub use tree::flat::{FlatNode, FlatTree};
pub use tree::model::{Label, Node};
