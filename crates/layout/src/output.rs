//! Output types of the layout engine.
//!
//! A [`Page`] is a list of positioned [`Primitive`]s in page coordinates with the
//! origin at the top-left corner and Y growing downwards. Backends flip the axis
//! when they need to.

use crate::fonts::FontFace;
use geo_report_types::{Color, Rect};
use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A single line of text; `y` is the top of the glyph box.
    Text {
        x: f32,
        y: f32,
        size: f32,
        face: FontFace,
        color: Color,
        content: String,
    },
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Color>,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        fill: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    },
}

/// One finished page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Zero-based physical page index.
    pub index: usize,
    pub width: f32,
    pub height: f32,
    pub primitives: Vec<Primitive>,
}

impl Page {
    pub fn new(index: usize, width: f32, height: f32) -> Self {
        Self {
            index,
            width,
            height,
            primitives: Vec::new(),
        }
    }

    /// Text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

/// Receives pages as soon as the composer finishes them.
pub trait PageSink {
    type Error;

    fn emit_page(&mut self, page: Page) -> Result<(), Self::Error>;
}

/// In-memory sink that records every page; used to inspect layout without a backend.
#[derive(Debug, Default)]
pub struct PageTrace {
    pub pages: Vec<Page>,
}

impl PageTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text of one page joined by newlines.
    pub fn page_text(&self, index: usize) -> String {
        self.pages
            .get(index)
            .map(|p| p.texts().collect::<Vec<_>>().join("\n"))
            .unwrap_or_default()
    }

    /// Index of the first page whose text contains `needle`.
    pub fn find_page(&self, needle: &str) -> Option<usize> {
        self.pages
            .iter()
            .position(|p| p.texts().any(|t| t.contains(needle)))
    }
}

impl PageSink for PageTrace {
    type Error = Infallible;

    fn emit_page(&mut self, page: Page) -> Result<(), Infallible> {
        self.pages.push(page);
        Ok(())
    }
}
