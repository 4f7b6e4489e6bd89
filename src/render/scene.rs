//! Whole-slide composition: background, header, body and caption.

use crate::{
    animation::morph::Frame,
    deck::model::{CaptionTone, Deck, Slide},
    foundation::core::{Point, Rect},
    render::{
        drawable::{Drawable, TextAnchor, drawables_for_frame},
        theme::Theme,
    },
};

/// Distance from the top of the view to the header baseline.
const HEADER_MARGIN: f64 = 0.6;
/// Gap between the lowest node box and the caption baseline.
const CAPTION_GAP: f64 = 0.55;
const BULLET_INDENT: f64 = 0.6;
const BULLET_SPACING: f64 = 0.6;

fn background(view: Rect, theme: &Theme) -> Option<Drawable> {
    (!theme.background.is_empty()).then(|| Drawable::Background {
        rect: view,
        stops: theme.background.clone(),
    })
}

fn header(text: &str, view: Rect, theme: &Theme) -> Drawable {
    Drawable::Text {
        text: text.to_string(),
        at: Point::new(view.center().x, view.y1 - HEADER_MARGIN),
        size: theme.header_size,
        color: theme.header_color,
        anchor: TextAnchor::Middle,
    }
}

/// Title slide: deck title with the subtitle underneath.
pub fn title_drawables(deck: &Deck, view: Rect) -> Vec<Drawable> {
    let theme = &deck.theme;
    let mut out: Vec<Drawable> = background(view, theme).into_iter().collect();
    let c = view.center();
    out.push(Drawable::Text {
        text: deck.title.clone(),
        at: Point::new(c.x, c.y + theme.header_size),
        size: theme.header_size * 1.4,
        color: theme.header_color,
        anchor: TextAnchor::Middle,
    });
    if !deck.subtitle.is_empty() {
        out.push(Drawable::Text {
            text: deck.subtitle.clone(),
            at: Point::new(c.x, c.y - theme.text_size),
            size: theme.text_size,
            color: theme.text_color,
            anchor: TextAnchor::Middle,
        });
    }
    out
}

/// Header plus one bullet per line, left-aligned.
pub fn bullet_drawables(slide: &Slide, theme: &Theme, view: Rect) -> Vec<Drawable> {
    let mut out: Vec<Drawable> = background(view, theme).into_iter().collect();
    out.push(header(&slide.header, view, theme));
    let top = view.y1 - HEADER_MARGIN - 2.0 * BULLET_SPACING;
    for (i, line) in slide.bullets.iter().enumerate() {
        out.push(Drawable::Text {
            text: format!("• {line}"),
            at: Point::new(view.x0 + BULLET_INDENT, top - i as f64 * BULLET_SPACING),
            size: theme.text_size,
            color: theme.text_color,
            anchor: TextAnchor::Start,
        });
    }
    out
}

/// Header, tree frame and caption. The caption sits under the tree's bounds.
pub fn step_drawables(
    slide: &Slide,
    caption: &str,
    tone: CaptionTone,
    frame: &Frame,
    theme: &Theme,
    view: Rect,
    time_s: f64,
) -> Vec<Drawable> {
    let mut out: Vec<Drawable> = background(view, theme).into_iter().collect();
    out.push(header(&slide.header, view, theme));
    out.extend(drawables_for_frame(frame, theme, time_s));
    let bounds = frame.bounds();
    out.push(Drawable::Text {
        text: caption.to_string(),
        at: Point::new(bounds.center().x, bounds.y0 - CAPTION_GAP),
        size: theme.caption_size,
        color: theme.caption_color(tone),
        anchor: TextAnchor::Middle,
    });
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
