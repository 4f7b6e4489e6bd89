use super::*;
use crate::foundation::core::{Line, Point, Rgba8};

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
    fail_on_draw: bool,
}

impl RenderBackend for Recorder {
    fn begin(&mut self, view: Rect) -> SplayResult<()> {
        self.calls.push(format!("begin {}x{}", view.width(), view.height()));
        Ok(())
    }

    fn draw(&mut self, _drawable: &Drawable) -> SplayResult<()> {
        if self.fail_on_draw {
            return Err(SplayError::render("boom"));
        }
        self.calls.push("draw".to_string());
        Ok(())
    }

    fn finish(&mut self) -> SplayResult<()> {
        self.calls.push("finish".to_string());
        Ok(())
    }
}

fn edge() -> Drawable {
    Drawable::Edge {
        line: Line::new(Point::ZERO, Point::new(1.0, 1.0)),
        color: Rgba8::WHITE,
        width: 0.1,
        opacity: 1.0,
    }
}

#[test]
fn drawables_are_bracketed() {
    let mut r = Recorder::default();
    let view = Rect::new(0.0, 0.0, 4.0, 2.0);
    execute_drawables(&mut r, view, &[edge(), edge()]).unwrap();
    assert_eq!(r.calls, ["begin 4x2", "draw", "draw", "finish"]);
}

#[test]
fn empty_view_is_rejected_before_begin() {
    let mut r = Recorder::default();
    let err = execute_drawables(&mut r, Rect::ZERO, &[edge()]).unwrap_err();
    assert!(matches!(err, SplayError::Render(_)));
    assert!(r.calls.is_empty());
}

#[test]
fn draw_errors_stop_execution() {
    let mut r = Recorder {
        fail_on_draw: true,
        ..Recorder::default()
    };
    assert!(execute_drawables(&mut r, Rect::new(0.0, 0.0, 1.0, 1.0), &[edge()]).is_err());
    assert_eq!(r.calls, ["begin 1x1"]);
}
