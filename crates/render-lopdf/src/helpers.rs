//! Encoding of laid-out pages into PDF content streams.

use geo_report_layout::{FontFace, Page, Primitive};
use geo_report_render_core::utils::{flip_y, font_resource_name};
use geo_report_types::{Color, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Control point offset for approximating a quarter circle with a cubic Bezier.
const KAPPA: f32 = 0.552_284_8;
/// Baseline position below the top of the glyph box, as a fraction of the font size.
const ASCENT: f32 = 0.8;

/// Encodes text for the standard fonts' WinAnsiEncoding.
///
/// Latin-1 maps directly, common typographic punctuation is mapped to its WinAnsi
/// code point and anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{20AC}' => 0x80,
            '\u{2122}' => 0x99,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Builds the content stream of one page.
pub fn page_to_content(page: &Page) -> Content {
    let mut ctx = PageContext::new(page.height);
    for primitive in &page.primitives {
        ctx.draw(primitive);
    }
    ctx.finish()
}

#[derive(Default)]
struct DrawState {
    font: Option<(FontFace, f32)>,
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: Option<f32>,
}

struct PageContext {
    page_height: f32,
    content: Content,
    state: DrawState,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: DrawState::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw(&mut self, primitive: &Primitive) {
        match primitive {
            Primitive::Text {
                x,
                y,
                size,
                face,
                color,
                content,
            } => self.draw_text(*x, *y, *size, *face, *color, content),
            Primitive::Rect { rect, fill, stroke } => self.draw_rect(*rect, *fill, *stroke),
            Primitive::Circle { cx, cy, radius, fill } => self.draw_circle(*cx, *cy, *radius, *fill),
            Primitive::Line {
                from,
                to,
                width,
                color,
            } => self.draw_line(*from, *to, *width, *color),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill != Some(color) {
            let [r, g, b] = color.unit_rgb();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke != Some(color) {
            let [r, g, b] = color.unit_rgb();
            self.op("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke = Some(color);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.state.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn set_font(&mut self, face: FontFace, size: f32) {
        if self.state.font != Some((face, size)) {
            let name = font_resource_name(face).as_bytes().to_vec();
            self.op("Tf", vec![Object::Name(name), size.into()]);
            self.state.font = Some((face, size));
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, size: f32, face: FontFace, color: Color, content: &str) {
        if content.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        self.set_font(face, size);
        self.set_fill_color(color);
        let baseline = flip_y(y + size * ASCENT, self.page_height);
        self.op("Td", vec![x.into(), baseline.into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(content), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    fn draw_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<Color>) {
        let painter = match (fill, stroke) {
            (Some(_), Some(_)) => "B",
            (Some(_), None) => "f",
            (None, Some(_)) => "S",
            (None, None) => return,
        };
        if let Some(color) = fill {
            self.set_fill_color(color);
        }
        if let Some(color) = stroke {
            self.set_stroke_color(color);
            self.set_line_width(0.75);
        }
        let bottom = flip_y(rect.bottom(), self.page_height);
        self.op(
            "re",
            vec![rect.x.into(), bottom.into(), rect.width.into(), rect.height.into()],
        );
        self.op(painter, vec![]);
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, r: f32, fill: Color) {
        self.set_fill_color(fill);
        let cy = flip_y(cy, self.page_height);
        let k = r * KAPPA;
        self.op("m", vec![(cx + r).into(), cy.into()]);
        let quarters = [
            [cx + r, cy + k, cx + k, cy + r, cx, cy + r],
            [cx - k, cy + r, cx - r, cy + k, cx - r, cy],
            [cx - r, cy - k, cx - k, cy - r, cx, cy - r],
            [cx + k, cy - r, cx + r, cy - k, cx + r, cy],
        ];
        for points in quarters {
            self.op("c", points.iter().map(|v| Object::Real(*v)).collect());
        }
        self.op("f", vec![]);
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        self.set_stroke_color(color);
        self.set_line_width(width);
        self.op("m", vec![from.0.into(), flip_y(from.1, self.page_height).into()]);
        self.op("l", vec![to.0.into(), flip_y(to.1, self.page_height).into()]);
        self.op("S", vec![]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(content: &Content) -> Vec<&str> {
        content.operations.iter().map(|o| o.operator.as_str()).collect()
    }

    #[test]
    fn win_ansi_maps_typography() {
        assert_eq!(to_win_ansi("a\u{2014}b"), vec![b'a', 0x97, b'b']);
        assert_eq!(to_win_ansi("\u{2022} caf\u{e9}"), vec![0x95, b' ', b'c', b'a', b'f', 0xE9]);
        assert_eq!(to_win_ansi("\u{6f22}"), vec![b'?']);
    }

    #[test]
    fn text_is_placed_on_flipped_baseline() {
        let mut page = Page::new(0, 612.0, 792.0);
        page.primitives.push(Primitive::Text {
            x: 50.0,
            y: 100.0,
            size: 10.0,
            face: FontFace::Bold,
            color: Color::BLACK,
            content: "Hello".into(),
        });
        let content = page_to_content(&page);
        assert_eq!(operators(&content), vec!["BT", "Tf", "rg", "Td", "Tj", "ET"]);
        let td = &content.operations[3];
        assert!(matches!(td.operands[1], Object::Real(v) if (v - 684.0).abs() < 0.001));
    }

    #[test]
    fn state_changes_are_not_repeated() {
        let mut page = Page::new(0, 612.0, 792.0);
        for y in [100.0, 120.0] {
            page.primitives.push(Primitive::Text {
                x: 50.0,
                y,
                size: 10.0,
                face: FontFace::Regular,
                color: Color::BLACK,
                content: "Line".into(),
            });
        }
        let ops = page_to_content(&page);
        assert_eq!(operators(&ops).iter().filter(|o| **o == "Tf").count(), 1);
    }

    #[test]
    fn circle_is_four_curves() {
        let mut page = Page::new(0, 612.0, 792.0);
        page.primitives.push(Primitive::Circle {
            cx: 306.0,
            cy: 200.0,
            radius: 60.0,
            fill: Color::rgb(34, 197, 94),
        });
        let ops = page_to_content(&page);
        assert_eq!(operators(&ops), vec!["rg", "m", "c", "c", "c", "c", "f"]);
    }

    #[test]
    fn rect_without_paint_is_skipped() {
        let mut page = Page::new(0, 612.0, 792.0);
        page.primitives.push(Primitive::Rect {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            fill: None,
            stroke: None,
        });
        assert!(page_to_content(&page).operations.is_empty());
    }
}
