//! Single-pass page composer.
//!
//! Every unit of content goes through the same check-then-write step: measure it,
//! start a new page when it does not fit below the cursor, draw it, advance the
//! cursor. Finished pages are handed to the [`PageSink`] immediately, so memory
//! holds one page at a time.

use crate::algorithms::pagination::{check_child_fit, fits_on_empty_page};
use crate::config::RenderConfig;
use crate::fonts::{FontFace, text_width};
use crate::output::{Page, PageSink, Primitive};
use crate::state::LayoutState;
use crate::style::{HeadingLevel, TextStyle};
use crate::text::{clip_to_width, wrap_text};
use geo_report_types::{Color, Rect};
use std::sync::Arc;

const BULLET: &str = "\u{2022}";
const BULLET_INDENT: f32 = 14.0;
const CODE_INSET: f32 = 8.0;
const TRUNCATION_MARKER: &str = "...";
const HEADER_FONT_SIZE: f32 = 8.0;
const PILL_FONT_SIZE: f32 = 8.0;
const PILL_PADDING: f32 = 5.0;
const RULE_SPACE: f32 = 10.0;
/// Body lines a heading must be able to keep on its page.
const KEEP_WITH_NEXT_LINES: f32 = 2.0;

const CODE_BACKGROUND: Color = Color::gray(245);
const CODE_BORDER: Color = Color::gray(215);
const RULE_COLOR: Color = Color::gray(210);

pub struct PageComposer<S: PageSink> {
    config: Arc<RenderConfig>,
    header_label: String,
    sink: S,
    page: Page,
    state: LayoutState,
}

impl<S: PageSink> PageComposer<S> {
    /// Opens the first page. It carries no running header and its content starts at
    /// the top margin.
    pub fn new(config: Arc<RenderConfig>, header_label: impl Into<String>, sink: S) -> Self {
        let page = Page::new(0, config.page_width(), config.page_height());
        let state = LayoutState::new(0, config.margin);
        Self {
            config,
            header_label: header_label.into(),
            sink,
            page,
            state,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn left(&self) -> f32 {
        self.config.margin
    }

    pub fn content_width(&self) -> f32 {
        self.config.content_width()
    }

    fn page_top(&self) -> f32 {
        if self.state.page_index == 0 {
            self.config.margin
        } else {
            self.config.body_top()
        }
    }

    /// Flowing area of the open page.
    fn bounds(&self) -> Rect {
        let top = self.page_top();
        Rect::new(
            self.config.margin,
            top,
            self.config.content_width(),
            self.config.body_bottom() - top,
        )
    }

    /// Flowing area of a page with a running header, the smallest a page gets.
    fn full_page_bounds(&self) -> Rect {
        Rect::new(
            self.config.margin,
            self.config.body_top(),
            self.config.content_width(),
            self.config.body_height(),
        )
    }

    fn at_page_top(&self) -> bool {
        self.state.cursor_y <= self.page_top() + 0.01
    }

    /// Starts a new page when `height` does not fit below the cursor.
    ///
    /// Never breaks on a page that is still empty, so a unit taller than a page is
    /// placed (and clipped by its caller) instead of looping. Returns whether a break
    /// happened.
    pub fn ensure_space(&mut self, height: f32) -> Result<bool, S::Error> {
        let bounds = self.bounds();
        let fit = check_child_fit(self.state.cursor_y - bounds.y, height, bounds);
        if fit.should_break && !self.at_page_top() {
            log::debug!(
                "Page break after page {}: {:.1}pt needed, {:.1}pt left",
                self.state.page_index + 1,
                height,
                fit.remaining_height
            );
            self.new_page()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Emits the open page and starts the next one below its running header.
    pub fn new_page(&mut self) -> Result<(), S::Error> {
        let next = self.state.next_page(self.config.body_top());
        let fresh = Page::new(next.page_index, self.config.page_width(), self.config.page_height());
        let finished = std::mem::replace(&mut self.page, fresh);
        self.sink.emit_page(finished)?;
        self.state = next;
        self.draw_running_header();
        Ok(())
    }

    fn draw_running_header(&mut self) {
        let style = TextStyle::muted(&self.config).with_size(HEADER_FONT_SIZE);
        let top = self.config.margin;
        let number = format!("Page {}", self.state.page_index + 1);
        let number_x = self.left() + self.content_width() - text_width(&number, style.face, style.size);
        let label = self.header_label.clone();
        self.push_text(self.left(), top, label, style);
        self.push_text(number_x, top, number, style);

        let rule_y = self.config.body_top() - self.config.header_height / 3.0;
        self.push(Primitive::Line {
            from: (self.left(), rule_y),
            to: (self.left() + self.content_width(), rule_y),
            width: 0.5,
            color: RULE_COLOR,
        });
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.page.primitives.push(primitive);
    }

    fn push_text(&mut self, x: f32, y: f32, content: String, style: TextStyle) {
        self.push(Primitive::Text {
            x,
            y,
            size: style.size,
            face: style.face,
            color: style.color,
            content,
        });
    }

    pub fn advance(&mut self, dy: f32) {
        self.state = self.state.advanced(dy);
    }

    pub fn gap(&mut self) {
        self.advance(self.config.block_gap);
    }

    fn line_advance(&self, style: TextStyle) -> f32 {
        self.config.line_advance(style.size)
    }

    /// Draws one line box at the cursor and moves below it.
    fn draw_line(&mut self, x: f32, content: String, style: TextStyle) {
        let advance = self.line_advance(style);
        let y = self.state.cursor_y + (advance - style.size) / 2.0;
        self.push_text(x, y, content, style);
        self.advance(advance);
    }

    /// Places already wrapped lines as one unit, or line by line when the block is
    /// taller than a page. `marker` is drawn in the gutter of the first line.
    fn lines_block(
        &mut self,
        lines: Vec<String>,
        style: TextStyle,
        indent: f32,
        marker: Option<&str>,
    ) -> Result<(), S::Error> {
        if lines.is_empty() {
            return Ok(());
        }
        let advance = self.line_advance(style);
        let height = lines.len() as f32 * advance;
        let whole = fits_on_empty_page(height, self.full_page_bounds());
        if whole {
            self.ensure_space(height)?;
        } else {
            log::debug!("Flowing {} lines across pages", lines.len());
        }

        let x = self.left() + indent;
        for (i, line) in lines.into_iter().enumerate() {
            if !whole {
                self.ensure_space(advance)?;
            }
            if i == 0 {
                if let Some(marker) = marker {
                    let y = self.state.cursor_y + (advance - style.size) / 2.0;
                    self.push_text(x - BULLET_INDENT + 4.0, y, marker.to_string(), style);
                }
            }
            self.draw_line(x, line, style);
        }
        Ok(())
    }

    /// Wrapped text indented from the left margin, without the trailing block gap.
    pub fn text_block(&mut self, text: &str, style: TextStyle, indent: f32) -> Result<(), S::Error> {
        let lines = wrap_text(text, style.face, style.size, self.content_width() - indent);
        self.lines_block(lines, style, indent, None)
    }

    pub fn paragraph(&mut self, text: &str, style: TextStyle) -> Result<(), S::Error> {
        if text.trim().is_empty() {
            return Ok(());
        }
        self.text_block(text, style, 0.0)?;
        self.gap();
        Ok(())
    }

    /// Bulleted items, each an independent unit. An empty list draws nothing.
    pub fn bullet_list<T: AsRef<str>>(&mut self, items: &[T], style: TextStyle) -> Result<(), S::Error> {
        if items.is_empty() {
            return Ok(());
        }
        let width = self.content_width() - BULLET_INDENT;
        for item in items {
            let lines = wrap_text(item.as_ref(), style.face, style.size, width);
            self.lines_block(lines, style, BULLET_INDENT, Some(BULLET))?;
            self.advance(style.size * 0.2);
        }
        self.gap();
        Ok(())
    }

    /// Heading kept on the same page as the first lines that follow it.
    pub fn heading(&mut self, text: &str, level: HeadingLevel) -> Result<(), S::Error> {
        let style = level.style(&self.config);
        let lines = wrap_text(text, style.face, style.size, self.content_width());
        let height = lines.len() as f32 * self.line_advance(style);
        if fits_on_empty_page(height, self.full_page_bounds()) {
            self.keep_with_next(height)?;
        }
        self.lines_block(lines, style, 0.0, None)?;
        self.advance(style.size * 0.3);
        Ok(())
    }

    /// Heading with a colored label pill at the right edge.
    pub fn labeled_heading(
        &mut self,
        text: &str,
        level: HeadingLevel,
        label: &str,
        label_color: Color,
    ) -> Result<(), S::Error> {
        let style = level.style(&self.config);
        let pill_style = TextStyle::new(FontFace::Bold, PILL_FONT_SIZE, Color::WHITE);
        let pill_width = text_width(label, pill_style.face, pill_style.size) + 2.0 * PILL_PADDING;
        let pill_height = PILL_FONT_SIZE + 2.0 * 2.0;

        let lines = wrap_text(text, style.face, style.size, self.content_width() - pill_width - 8.0);
        let advance = self.line_advance(style);
        let height = lines.len() as f32 * advance;
        if fits_on_empty_page(height, self.full_page_bounds()) {
            self.keep_with_next(height)?;
        } else {
            self.ensure_space(advance)?;
        }

        let pill_x = self.left() + self.content_width() - pill_width;
        let pill_y = self.state.cursor_y + (advance - pill_height) / 2.0;
        self.push(Primitive::Rect {
            rect: Rect::new(pill_x, pill_y, pill_width, pill_height),
            fill: Some(label_color),
            stroke: None,
        });
        self.push_text(pill_x + PILL_PADDING, pill_y + 2.0, label.to_string(), pill_style);

        self.lines_block(lines, style, 0.0, None)?;
        self.advance(style.size * 0.3);
        Ok(())
    }

    fn keep_with_next(&mut self, heading_height: f32) -> Result<(), S::Error> {
        let follow = KEEP_WITH_NEXT_LINES * self.config.line_advance(self.config.body_font_size);
        self.ensure_space(heading_height + follow)?;
        Ok(())
    }

    /// Monospaced snippet inside a filled box sized to the displayed lines.
    ///
    /// Snippets longer than the configured line cap are cut before measuring, overlong
    /// lines are clipped to the box, and a box that would still be taller than a page is
    /// cut to fit one.
    pub fn code_block(&mut self, code: &str) -> Result<(), S::Error> {
        if code.trim().is_empty() {
            return Ok(());
        }
        let style = TextStyle::code(&self.config);
        let advance = self.line_advance(style);
        let padding = self.config.code_padding;
        let inner_width = self.content_width() - 2.0 * CODE_INSET;

        let mut lines: Vec<String> = code
            .lines()
            .map(|l| l.trim_end().replace('\t', "    "))
            .collect();
        let cap = self.config.code_line_cap.max(2);
        if lines.len() > cap {
            log::debug!("Truncating code block from {} to {} lines", lines.len(), cap);
            lines.truncate(cap - 1);
            lines.push(TRUNCATION_MARKER.to_string());
        }

        let page_height = self.config.body_height();
        let max_lines = ((page_height - padding) / advance).floor().max(0.0) as usize;
        if lines.len() > max_lines {
            log::warn!(
                "Code block of {} lines is taller than a page; clipping to {} lines",
                lines.len(),
                max_lines
            );
            lines.truncate(max_lines.saturating_sub(1));
            if max_lines > 0 {
                lines.push(TRUNCATION_MARKER.to_string());
            }
        }
        let lines: Vec<String> = lines
            .iter()
            .map(|l| clip_to_width(l, style.face, style.size, inner_width))
            .collect();

        let height = ((lines.len() as f32 * advance).max(self.config.code_min_height) + padding)
            .min(page_height);
        self.ensure_space(height)?;

        let top = self.state.cursor_y;
        self.push(Primitive::Rect {
            rect: Rect::new(self.left(), top, self.content_width(), height),
            fill: Some(CODE_BACKGROUND),
            stroke: Some(CODE_BORDER),
        });
        let x = self.left() + CODE_INSET;
        let mut y = top + padding / 2.0;
        for line in lines {
            self.push_text(x, y + (advance - style.size) / 2.0, line, style);
            y += advance;
        }
        self.advance(height);
        self.gap();
        Ok(())
    }

    /// Bold key in a left column with its wrapped value beside it.
    pub fn key_value_row(&mut self, key: &str, value: &str) -> Result<(), S::Error> {
        let key_style = TextStyle::strong(&self.config);
        let value_style = TextStyle::body(&self.config);
        let key_width = self.content_width() * 0.35;
        let key_lines = wrap_text(key, key_style.face, key_style.size, key_width - 8.0);
        let value_lines = wrap_text(value, value_style.face, value_style.size, self.content_width() - key_width);
        let advance = self.line_advance(value_style);
        let height = key_lines.len().max(value_lines.len()) as f32 * advance;

        if !fits_on_empty_page(height, self.full_page_bounds()) {
            self.lines_block(key_lines, key_style, 0.0, None)?;
            return self.lines_block(value_lines, value_style, key_width, None);
        }
        self.ensure_space(height)?;
        let top = self.state.cursor_y;
        for (i, line) in key_lines.into_iter().enumerate() {
            let y = top + i as f32 * advance + (advance - key_style.size) / 2.0;
            self.push_text(self.left(), y, line, key_style);
        }
        for (i, line) in value_lines.into_iter().enumerate() {
            let y = top + i as f32 * advance + (advance - value_style.size) / 2.0;
            self.push_text(self.left() + key_width, y, line, value_style);
        }
        self.advance(height);
        Ok(())
    }

    pub fn rule(&mut self) -> Result<(), S::Error> {
        self.ensure_space(RULE_SPACE)?;
        let y = self.state.cursor_y + RULE_SPACE / 2.0;
        self.push(Primitive::Line {
            from: (self.left(), y),
            to: (self.left() + self.content_width(), y),
            width: 0.5,
            color: RULE_COLOR,
        });
        self.advance(RULE_SPACE);
        Ok(())
    }

    /// Reserves a full-width region of `height` below the cursor and lets `draw` fill it
    /// with absolutely positioned primitives.
    ///
    /// A region taller than a page body is shrunk to the body height, so `draw` must
    /// keep its primitives inside the rectangle it is given.
    pub fn place<F>(&mut self, height: f32, draw: F) -> Result<Rect, S::Error>
    where
        F: FnOnce(Rect, &mut Vec<Primitive>),
    {
        let max = self.full_page_bounds().height;
        let height = if fits_on_empty_page(height, self.full_page_bounds()) {
            height
        } else {
            log::warn!("Shrinking a {height:.1}pt region to the {max:.1}pt page body");
            max
        };
        self.ensure_space(height)?;
        let region = Rect::new(self.left(), self.state.cursor_y, self.content_width(), height);
        draw(region, &mut self.page.primitives);
        self.advance(height);
        Ok(region)
    }

    /// Emits the last page and hands back the sink with the number of pages produced.
    pub fn finish(mut self) -> Result<(S, usize), S::Error> {
        let pages = self.state.page_index + 1;
        self.sink.emit_page(self.page)?;
        log::debug!("Layout finished with {pages} pages");
        Ok((self.sink, pages))
    }
}
