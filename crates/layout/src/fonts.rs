//! Width metrics for the PDF standard fonts used by the report.
//!
//! The standard 14 fonts are never embedded, so their advance widths are
//! carried here (in 1/1000 em, from the Adobe AFM files) to let the layout
//! measure text without a font file.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
    Mono,
}

impl FontFace {
    pub const ALL: [FontFace; 3] = [FontFace::Regular, FontFace::Bold, FontFace::Mono];

    pub fn postscript_name(&self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
            FontFace::Mono => "Courier",
        }
    }
}

/// Helvetica widths for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold widths for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;

/// Advance width of one character in 1/1000 em.
///
/// Characters outside ASCII use the width of the WinAnsi glyph they are encoded
/// as, or of `?` when they have no WinAnsi equivalent.
pub fn char_width(face: FontFace, c: char) -> u16 {
    if face == FontFace::Mono {
        return COURIER_WIDTH;
    }
    let table = match face {
        FontFace::Bold => &HELVETICA_BOLD,
        _ => &HELVETICA,
    };
    let ascii = match c {
        ' '..='~' => c,
        '\u{2013}' => return 556,
        '\u{2014}' | '\u{2026}' => return 1000,
        '\u{2022}' => return 350,
        '\u{2018}' | '\u{2019}' => return if face == FontFace::Bold { 278 } else { 222 },
        '\u{201C}' | '\u{201D}' => return if face == FontFace::Bold { 500 } else { 333 },
        '\u{00A0}' => ' ',
        _ => '?',
    };
    table[ascii as usize - 32]
}

/// Width of `text` in points at `size`.
pub fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(face, c))).sum();
    units as f32 * size / 1000.0
}
