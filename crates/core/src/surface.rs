//! Render surface contract.
//!
//! The core only ever pushes primitive draw calls into a [`Surface`]; it never
//! reads anything back. Text alignment is part of the call so that centered
//! banners need no font metrics from the backend.

use crate::geom::Rect;
use crate::types::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// `x` is the left edge of the text.
    Left,
    /// `x` is the horizontal center of the text.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextStyle {
    /// Font size in screen pixels.
    pub size: i32,
    pub color: Rgb,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn left(size: i32, color: Rgb) -> Self {
        Self {
            size,
            color,
            align: TextAlign::Left,
        }
    }

    pub fn centered(size: i32, color: Rgb) -> Self {
        Self {
            size,
            color,
            align: TextAlign::Center,
        }
    }
}

/// Primitive drawing backend.
pub trait Surface {
    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Outline `rect` with a stroke `width` pixels thick, drawn inside the rect.
    fn stroke_rect(&mut self, rect: Rect, width: i32, color: Rgb);

    /// Fill the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Rect, color: Rgb);

    /// Draw `text` with its baseline at `y`.
    fn text(&mut self, x: i32, y: i32, text: &str, style: TextStyle);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Rgb),
    FillRect(Rect, Rgb),
    StrokeRect(Rect, i32, Rgb),
    FillEllipse(Rect, Rgb),
    Text {
        x: i32,
        y: i32,
        text: String,
        style: TextStyle,
    },
}

/// A [`Surface`] that records every call, for headless harnesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping the allocation.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All text drawn so far, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, width: i32, color: Rgb) {
        self.commands.push(DrawCommand::StrokeRect(rect, width, color));
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Rgb) {
        self.commands.push(DrawCommand::FillEllipse(bounds, color));
    }

    fn text(&mut self, x: i32, y: i32, text: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            style,
        });
    }
}
