use crate::LayoutError;
use crate::style::HeadingLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed-size regions such as the cover's score grid need this much body height.
const MIN_BODY_HEIGHT: f32 = 144.0;

/// Physical page size in PDF points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Legal,
    #[serde(untagged)]
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions(&self) -> (f32, f32) {
        match *self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (width, height),
        }
    }
}

/// Page geometry and typographic constants shared by every render run.
///
/// Loaded once and treated as immutable; wrap it in an `Arc` to share it across
/// concurrent runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub page_size: PageSize,
    /// Uniform page margin.
    pub margin: f32,
    pub body_font_size: f32,
    /// Line advance as a multiple of the font size.
    pub line_height: f32,
    /// Vertical space inserted after every block.
    pub block_gap: f32,
    pub code_font_size: f32,
    /// Maximum number of displayed lines in a code block, including the truncation marker.
    pub code_line_cap: usize,
    pub code_min_height: f32,
    /// Total vertical padding of a code block (split between top and bottom).
    pub code_padding: f32,
    /// Height reserved for the running header on every page after the cover.
    pub header_height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margin: 50.0,
            body_font_size: 10.0,
            line_height: 1.4,
            block_gap: 8.0,
            code_font_size: 8.0,
            code_line_cap: 18,
            code_min_height: 24.0,
            code_padding: 12.0,
            header_height: 32.0,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Rejects geometry that leaves no room for content.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let (width, height) = self.page_size.dimensions();
        if !(width > 0.0 && height > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "page size must be positive, got {width}x{height}"
            )));
        }
        if self.content_width() <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "margin {} leaves no horizontal space on a {width}pt page",
                self.margin
            )));
        }
        if self.body_font_size <= 0.0 || self.code_font_size <= 0.0 || self.line_height < 1.0 {
            return Err(LayoutError::InvalidConfig(
                "font sizes must be positive and line height at least 1.0".into(),
            ));
        }
        let needed = self.min_body_height();
        if self.body_height() < needed {
            return Err(LayoutError::InvalidConfig(format!(
                "margins and header leave a {:.1}pt page body, at least {needed:.1}pt is needed",
                self.body_height()
            )));
        }
        if self.code_line_cap < 2 {
            return Err(LayoutError::InvalidConfig(
                "codeLineCap must allow at least one line plus the truncation marker".into(),
            ));
        }
        Ok(())
    }

    pub fn page_width(&self) -> f32 {
        self.page_size.dimensions().0
    }

    pub fn page_height(&self) -> f32 {
        self.page_size.dimensions().1
    }

    pub fn content_width(&self) -> f32 {
        self.page_width() - 2.0 * self.margin
    }

    /// Top of the flowing content area on pages that carry the running header.
    pub fn body_top(&self) -> f32 {
        self.margin + self.header_height
    }

    pub fn body_bottom(&self) -> f32 {
        self.page_height() - self.margin
    }

    pub fn body_height(&self) -> f32 {
        self.body_bottom() - self.body_top()
    }

    pub fn line_advance(&self, font_size: f32) -> f32 {
        font_size * self.line_height
    }

    /// Smallest page body that holds the cover's score grid and a part heading
    /// followed by two body lines.
    pub fn min_body_height(&self) -> f32 {
        let heading = self.line_advance(HeadingLevel::Part.style(self).size);
        let lines = 2.0 * self.line_advance(self.body_font_size);
        MIN_BODY_HEIGHT.max(heading + lines)
    }
}
