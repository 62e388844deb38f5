// filepath: src/scene.rs
//! Draw every element of a scene onto one frame.

use log::{error, info};

use crate::backend::{FontBackend, ImageBackend};
use crate::config::{Element, Scene};
use crate::draw::Canvas;
use crate::elements::{icon_button, text_button, text_label};
use crate::error::RenderError;

/// Outcome of rendering a scene
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneReport {
    /// Number of elements drawn successfully
    pub drawn: usize,
    /// Index and status code of every element that was skipped
    pub failed: Vec<(usize, i32)>,
}

impl SceneReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Draw one element with the primitive matching its kind
pub fn draw_element<F, I>(
    canvas: &mut Canvas,
    fonts: &F,
    images: &I,
    element: &Element,
) -> Result<(), RenderError>
where
    F: FontBackend,
    I: ImageBackend,
{
    match element {
        Element::TextButton {
            rect,
            text,
            font,
            bg_color,
        } => text_button(canvas, fonts, *rect, text, font, *bg_color),
        Element::IconButton {
            rect,
            icon_path,
            bg_color,
            options,
        } => icon_button(canvas, images, *rect, icon_path, *bg_color, *options),
        Element::TextLabel { x, y, text, font } => text_label(canvas, fonts, font, text, *x, *y),
    }
}

/// Clear the canvas and draw the scene's elements in order.
///
/// A failing element is logged and left out; the rest of the frame is still drawn.
pub fn render_scene<F, I>(canvas: &mut Canvas, fonts: &F, images: &I, scene: &Scene) -> SceneReport
where
    F: FontBackend,
    I: ImageBackend,
{
    canvas.clear(scene.clear_color);

    let mut report = SceneReport::default();
    for (index, element) in scene.elements.iter().enumerate() {
        match draw_element(canvas, fonts, images, element) {
            Ok(()) => report.drawn += 1,
            Err(e) => {
                error!("Error drawing element {} (status {}): {}", index, e.code(), e);
                report.failed.push((index, e.code()));
            }
        }
    }

    info!(
        "Rendered scene: {} drawn, {} failed",
        report.drawn,
        report.failed.len()
    );
    report
}
