use crate::{
    foundation::core::Rect,
    foundation::error::{SplayError, SplayResult},
    render::drawable::Drawable,
};

/// Something that can paint [`Drawable`]s.
///
/// `view` is the world-space rectangle mapped onto the output surface.
pub trait RenderBackend {
    fn begin(&mut self, view: Rect) -> SplayResult<()>;

    fn draw(&mut self, drawable: &Drawable) -> SplayResult<()>;

    fn finish(&mut self) -> SplayResult<()>;
}

/// Paint `drawables` in order, bracketed by `begin`/`finish`.
pub fn execute_drawables<B: RenderBackend + ?Sized>(
    backend: &mut B,
    view: Rect,
    drawables: &[Drawable],
) -> SplayResult<()> {
    if !(view.width() > 0.0 && view.height() > 0.0) {
        return Err(SplayError::render("view rectangle must have positive area"));
    }
    backend.begin(view)?;
    for d in drawables {
        backend.draw(d)?;
    }
    backend.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
