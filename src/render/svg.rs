//! SVG output.
//!
//! World space has y growing upward; SVG has y growing downward. The view
//! rectangle's top-left corner maps to pixel (0, 0).

use std::fmt::Write as _;

use crate::{
    foundation::core::{Point, Rect, Rgba8},
    foundation::error::{SplayError, SplayResult},
    render::{
        backend::{RenderBackend, execute_drawables},
        drawable::{Drawable, TextAnchor},
    },
};

/// Default output scale.
pub const DEFAULT_PIXELS_PER_UNIT: f64 = 100.0;

/// Standard 16:9 presentation view, centered on the origin.
pub fn default_view() -> Rect {
    Rect::from_center_size(Point::ORIGIN, (128.0 / 9.0, 8.0))
}

#[derive(Debug)]
pub struct SvgBackend {
    pixels_per_unit: f64,
    view: Option<Rect>,
    body: String,
    gradients: usize,
    finished: bool,
}

impl SvgBackend {
    pub fn new(pixels_per_unit: f64) -> SplayResult<Self> {
        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return Err(SplayError::validation(
                "svg pixels_per_unit must be finite and > 0",
            ));
        }
        Ok(Self {
            pixels_per_unit,
            view: None,
            body: String::new(),
            gradients: 0,
            finished: false,
        })
    }

    /// The finished document.
    pub fn into_svg(self) -> SplayResult<String> {
        if !self.finished {
            return Err(SplayError::render("svg document was not finished"));
        }
        Ok(self.body)
    }

    fn view(&self) -> SplayResult<Rect> {
        match (self.view, self.finished) {
            (Some(v), false) => Ok(v),
            (_, true) => Err(SplayError::render("svg document is already finished")),
            (None, false) => Err(SplayError::render("svg draw before begin")),
        }
    }

    fn px(&self, view: Rect, p: Point) -> (f64, f64) {
        (
            (p.x - view.x0) * self.pixels_per_unit,
            (view.y1 - p.y) * self.pixels_per_unit,
        )
    }

    fn scale(&self, v: f64) -> f64 {
        v * self.pixels_per_unit
    }
}

impl RenderBackend for SvgBackend {
    fn begin(&mut self, view: Rect) -> SplayResult<()> {
        if self.view.is_some() {
            return Err(SplayError::render("svg backend can only render one document"));
        }
        let w = self.scale(view.width());
        let h = self.scale(view.height());
        let _ = writeln!(
            self.body,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.3} {h:.3}">"#
        );
        self.view = Some(view);
        Ok(())
    }

    fn draw(&mut self, drawable: &Drawable) -> SplayResult<()> {
        let view = self.view()?;
        match drawable {
            Drawable::Background { rect, stops } => {
                let (x, y) = self.px(view, Point::new(rect.x0, rect.y1));
                let (w, h) = (self.scale(rect.width()), self.scale(rect.height()));
                match stops.as_slice() {
                    [] => {}
                    [only] => {
                        let _ = writeln!(
                            self.body,
                            r#"<rect x="{x:.3}" y="{y:.3}" width="{w:.3}" height="{h:.3}" {}/>"#,
                            fill(*only, 1.0)
                        );
                    }
                    many => {
                        let id = format!("bg{}", self.gradients);
                        self.gradients += 1;
                        let _ = writeln!(
                            self.body,
                            r#"<defs><linearGradient id="{id}" x1="0" y1="0" x2="0" y2="1">"#
                        );
                        let last = (many.len() - 1) as f64;
                        for (i, c) in many.iter().enumerate() {
                            let _ = writeln!(
                                self.body,
                                r#"<stop offset="{:.4}" stop-color="{}" stop-opacity="{:.3}"/>"#,
                                i as f64 / last,
                                rgb(*c),
                                alpha(*c, 1.0)
                            );
                        }
                        let _ = writeln!(self.body, "</linearGradient></defs>");
                        let _ = writeln!(
                            self.body,
                            r#"<rect x="{x:.3}" y="{y:.3}" width="{w:.3}" height="{h:.3}" fill="url(#{id})"/>"#
                        );
                    }
                }
            }
            Drawable::Glow {
                center,
                radius,
                color,
                opacity,
            } => {
                let (cx, cy) = self.px(view, *center);
                let r = self.scale(*radius);
                let _ = writeln!(
                    self.body,
                    r#"<circle cx="{cx:.3}" cy="{cy:.3}" r="{r:.3}" {}/>"#,
                    fill(*color, *opacity)
                );
            }
            Drawable::NodeBox {
                shape,
                fill: fill_color,
                stroke,
                stroke_width,
                opacity,
            } => {
                let r = shape.rect();
                let (x, y) = self.px(view, Point::new(r.x0, r.y1));
                let (w, h) = (self.scale(r.width()), self.scale(r.height()));
                let rx = self.scale(shape.radii().top_left);
                let sw = self.scale(*stroke_width);
                let _ = writeln!(
                    self.body,
                    r#"<rect x="{x:.3}" y="{y:.3}" width="{w:.3}" height="{h:.3}" rx="{rx:.3}" {} stroke="{}" stroke-opacity="{:.3}" stroke-width="{sw:.3}"/>"#,
                    fill(*fill_color, *opacity),
                    rgb(*stroke),
                    alpha(*stroke, *opacity),
                );
            }
            Drawable::Label {
                text,
                at,
                size,
                family,
                color,
                outline,
                opacity,
            } => {
                let (x, y) = self.px(view, *at);
                let size = self.scale(*size);
                let outline_w = size * 0.08;
                let _ = writeln!(
                    self.body,
                    r#"<text x="{x:.3}" y="{y:.3}" font-family="{}" font-size="{size:.3}" font-weight="bold" text-anchor="middle" dominant-baseline="central" {} stroke="{}" stroke-opacity="{:.3}" stroke-width="{outline_w:.3}" paint-order="stroke">{}</text>"#,
                    escape(family),
                    fill(*color, *opacity),
                    rgb(*outline),
                    alpha(*outline, *opacity),
                    escape(text)
                );
            }
            Drawable::Edge {
                line,
                color,
                width,
                opacity,
            } => {
                let (x1, y1) = self.px(view, line.p0);
                let (x2, y2) = self.px(view, line.p1);
                let w = self.scale(*width);
                let _ = writeln!(
                    self.body,
                    r#"<line x1="{x1:.3}" y1="{y1:.3}" x2="{x2:.3}" y2="{y2:.3}" stroke="{}" stroke-opacity="{:.3}" stroke-width="{w:.3}" stroke-linecap="round"/>"#,
                    rgb(*color),
                    alpha(*color, *opacity),
                );
            }
            Drawable::Text {
                text,
                at,
                size,
                color,
                anchor,
            } => {
                let (x, y) = self.px(view, *at);
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                };
                let size = self.scale(*size);
                let _ = writeln!(
                    self.body,
                    r#"<text x="{x:.3}" y="{y:.3}" font-size="{size:.3}" text-anchor="{anchor}" {}>{}</text>"#,
                    fill(*color, 1.0),
                    escape(text)
                );
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> SplayResult<()> {
        self.view()?;
        self.body.push_str("</svg>\n");
        self.finished = true;
        Ok(())
    }
}

/// Render `drawables` into a standalone SVG document.
#[tracing::instrument(level = "debug", skip(drawables), fields(count = drawables.len()))]
pub fn render_svg(drawables: &[Drawable], view: Rect, pixels_per_unit: f64) -> SplayResult<String> {
    let mut backend = SvgBackend::new(pixels_per_unit)?;
    execute_drawables(&mut backend, view, drawables)?;
    backend.into_svg()
}

fn rgb(c: Rgba8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn alpha(c: Rgba8, opacity: f64) -> f64 {
    (f64::from(c.a) / 255.0 * opacity).clamp(0.0, 1.0)
}

fn fill(c: Rgba8, opacity: f64) -> String {
    format!(r#"fill="{}" fill-opacity="{:.3}""#, rgb(c), alpha(c, opacity))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
