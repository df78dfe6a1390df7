use crate::config::RenderConfig;
use crate::fonts::FontFace;
use geo_report_types::Color;

pub const TEXT_COLOR: Color = Color::rgb(31, 41, 55);
pub const MUTED_COLOR: Color = Color::rgb(107, 114, 128);

/// Font, size and color of a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(face: FontFace, size: f32, color: Color) -> Self {
        Self { face, size, color }
    }

    pub fn body(config: &RenderConfig) -> Self {
        Self::new(FontFace::Regular, config.body_font_size, TEXT_COLOR)
    }

    pub fn strong(config: &RenderConfig) -> Self {
        Self::new(FontFace::Bold, config.body_font_size, TEXT_COLOR)
    }

    pub fn muted(config: &RenderConfig) -> Self {
        Self::new(FontFace::Regular, config.body_font_size - 1.0, MUTED_COLOR)
    }

    pub fn code(config: &RenderConfig) -> Self {
        Self::new(FontFace::Mono, config.code_font_size, TEXT_COLOR)
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
}

/// Heading levels used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Report part, e.g. "Executive Summary".
    Part,
    /// Entry inside a part, e.g. one category or one page.
    Entry,
    /// Small caption above a list.
    Caption,
}

impl HeadingLevel {
    pub fn style(&self, config: &RenderConfig) -> TextStyle {
        let base = config.body_font_size;
        match self {
            HeadingLevel::Part => TextStyle::new(FontFace::Bold, base + 8.0, TEXT_COLOR),
            HeadingLevel::Entry => TextStyle::new(FontFace::Bold, base + 3.0, TEXT_COLOR),
            HeadingLevel::Caption => TextStyle::new(FontFace::Bold, base, MUTED_COLOR),
        }
    }
}
