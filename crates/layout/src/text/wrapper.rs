use crate::fonts::{FontFace, text_width};

const EPSILON: f32 = 0.01;
const CLIP_MARKER: &str = "...";

/// Greedy word wrap against the standard font metrics.
///
/// Hard line breaks are kept, runs of whitespace collapse to one space and a word
/// wider than `max_width` is broken between characters. Blank input yields no lines.
pub fn wrap_text(text: &str, face: FontFace, size: f32, max_width: f32) -> Vec<String> {
    let text = text.trim_end();
    if text.trim().is_empty() {
        return Vec::new();
    }
    let space = text_width(" ", face, size);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = text_width(word, face, size);

            if word_width > max_width + EPSILON {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut pieces = split_word(word, face, size, max_width);
                let last = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                current_width = text_width(&last, face, size);
                current = last;
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width > max_width + EPSILON {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            }
        }
        lines.push(current);
    }
    lines
}

/// Breaks one overlong word into pieces that each fit `max_width`.
/// Every piece holds at least one character, so this always terminates.
fn split_word(word: &str, face: FontFace, size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        let mut candidate = current.clone();
        candidate.push(c);
        if !current.is_empty() && text_width(&candidate, face, size) > max_width + EPSILON {
            pieces.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Shortens a single line to `max_width`, marking the cut with `...`.
/// Returns the text unchanged when it already fits.
pub fn clip_to_width(text: &str, face: FontFace, size: f32, max_width: f32) -> String {
    if text_width(text, face, size) <= max_width + EPSILON {
        return text.to_string();
    }
    let budget = max_width - text_width(CLIP_MARKER, face, size);
    let mut clipped = String::new();
    let mut width = 0.0;
    for c in text.chars() {
        let w = text_width(c.encode_utf8(&mut [0; 4]), face, size);
        if width + w > budget + EPSILON {
            break;
        }
        clipped.push(c);
        width += w;
    }
    clipped.push_str(CLIP_MARKER);
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap_text("Hello world", FontFace::Regular, 10.0, 500.0), vec!["Hello world"]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap_text("", FontFace::Regular, 10.0, 100.0).is_empty());
        assert!(wrap_text("  \n ", FontFace::Regular, 10.0, 100.0).is_empty());
    }

    #[test]
    fn wraps_at_word_boundaries_within_width() {
        let text = "The quick brown fox jumps over the lazy dog and keeps running far away";
        let lines = wrap_text(text, FontFace::Regular, 10.0, 100.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, FontFace::Regular, 10.0) <= 100.0 + EPSILON, "{line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn keeps_hard_breaks() {
        let lines = wrap_text("first\n\nthird", FontFace::Regular, 10.0, 300.0);
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn breaks_overlong_words() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, FontFace::Mono, 10.0, 60.0);
        // 6pt per glyph, ten glyphs per line.
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().all(|l| l.len() == 10));
    }

    #[test]
    fn clip_marks_truncation() {
        let clipped = clip_to_width(&"a".repeat(100), FontFace::Mono, 10.0, 60.0);
        assert_eq!(clipped, "aaaaaaa...");
        assert_eq!(clip_to_width("short", FontFace::Mono, 10.0, 60.0), "short");
    }
}
