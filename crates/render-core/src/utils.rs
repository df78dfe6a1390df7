use chrono::{DateTime, Utc};
use geo_report_layout::FontFace;

/// Resource name of a standard font in every page's font dictionary.
pub fn font_resource_name(face: FontFace) -> &'static str {
    match face {
        FontFace::Regular => "F1",
        FontFace::Bold => "F2",
        FontFace::Mono => "F3",
    }
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// RFC 3339 timestamp to a PDF date string (`D:YYYYMMDDHHmmSSZ`), in UTC.
pub fn pdf_date(rfc3339: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(rfc3339)
        .ok()
        .map(|d| d.with_timezone(&Utc).format("D:%Y%m%d%H%M%SZ").to_string())
}
