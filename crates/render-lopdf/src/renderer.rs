use crate::helpers::{self, to_win_ansi};
use crate::writer::StreamingPdfWriter;
use geo_report_layout::{FontFace, Page};
use geo_report_render_core::utils::{font_resource_name, pdf_date};
use geo_report_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use lopdf::{Dictionary, Object, ObjectId, StringFormat, dictionary};
use std::io::{Cursor, Seek, Write};

/// A PDF renderer using the `lopdf` library that streams each page to the writer
/// as soon as it is rendered.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<StreamingPdfWriter<W>>,
}

impl<W: Write + Seek + Send> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new() -> Self {
        Self { writer: None }
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or(RenderError::NoDocument)
    }
}

impl LopdfRenderer<Cursor<Vec<u8>>> {
    /// Convenience method for in-memory completion.
    pub fn finish_into_buffer(mut self, page_ids: Vec<ObjectId>) -> Result<Vec<u8>, RenderError> {
        let mut writer = self
            .writer
            .take()
            .ok_or(RenderError::NoDocument)?;
        writer.set_page_ids(page_ids);
        Ok(writer.finish()?.into_inner())
    }
}

/// The three standard Type1 faces, all WinAnsi encoded.
fn font_dictionary() -> Dictionary {
    let mut font_dict = Dictionary::new();
    for face in FontFace::ALL {
        let single_font_dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        };
        font_dict.set(font_resource_name(face), Object::Dictionary(single_font_dict));
    }
    font_dict
}

fn text_object(text: &str) -> Object {
    Object::String(to_win_ansi(text), StringFormat::Literal)
}

fn info_dictionary(info: &DocumentInfo) -> Dictionary {
    let mut dict = Dictionary::new();
    for (key, value) in [
        ("Title", &info.title),
        ("Author", &info.author),
        ("Subject", &info.subject),
        ("Creator", &info.creator),
        ("Producer", &info.producer),
    ] {
        if !value.is_empty() {
            dict.set(key, text_object(value));
        }
    }
    match info.creation_date.as_deref().map(|d| (d, pdf_date(d))) {
        Some((_, Some(date))) => {
            dict.set("CreationDate", text_object(&date));
        }
        Some((raw, None)) => log::warn!("Ignoring unparseable creation date '{raw}'"),
        None => {}
    }
    if let Some(id) = &info.report_id {
        dict.set("ReportId", text_object(id));
    }
    dict
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError> {
        let mut pdf = StreamingPdfWriter::new(writer, "1.7", font_dictionary())?;
        pdf.set_info(info_dictionary(info));
        self.writer = Some(pdf);
        Ok(())
    }

    fn render_page_content(&mut self, page: &Page) -> Result<ObjectId, RenderError> {
        let content = helpers::page_to_content(page);
        let encoded = content.encode()?;
        let writer = self.writer_mut()?;
        Ok(writer.write_content_stream(encoded)?)
    }

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => writer.resources_id,
        };
        Ok(writer.write_object(page_dict.into())?)
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let mut writer = renderer
            .writer
            .take()
            .ok_or(RenderError::NoDocument)?;
        log::debug!("Finishing PDF with {} pages", page_ids.len());
        writer.set_page_ids(page_ids);
        Ok(writer.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_report_types::Color;
    use geo_report_layout::Primitive;

    fn page_with_text(index: usize, text: &str) -> Page {
        let mut page = Page::new(index, 612.0, 792.0);
        page.primitives.push(Primitive::Text {
            x: 50.0,
            y: 60.0,
            size: 12.0,
            face: FontFace::Regular,
            color: Color::BLACK,
            content: text.into(),
        });
        page
    }

    fn string_value<'a>(dict: &'a Dictionary, key: &[u8]) -> &'a [u8] {
        match dict.get(key) {
            Ok(Object::String(bytes, _)) => bytes,
            other => panic!("expected string, got {other:?}"),
        }
    }

    fn render(pages: &[Page], info: &DocumentInfo) -> Vec<u8> {
        let mut renderer = LopdfRenderer::new();
        renderer.begin_document(Cursor::new(Vec::new()), info).unwrap();
        let mut page_ids = Vec::new();
        for page in pages {
            let content = renderer.render_page_content(page).unwrap();
            page_ids.push(renderer.write_page_object(vec![content], page.width, page.height).unwrap());
        }
        renderer.finish_into_buffer(page_ids).unwrap()
    }

    #[test]
    fn renders_loadable_pdf_with_text() {
        let bytes = render(
            &[page_with_text(0, "Hello report"), page_with_text(1, "Second page")],
            &DocumentInfo::new("Audit"),
        );
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        assert!(doc.extract_text(&[1]).unwrap().contains("Hello report"));
        assert!(doc.extract_text(&[2]).unwrap().contains("Second page"));
    }

    #[test]
    fn writes_information_dictionary() {
        let info = DocumentInfo {
            title: "GEO Audit: example.com".into(),
            author: "GEO Report Generator".into(),
            subject: "AI citation readiness audit for example.com".into(),
            creation_date: Some("2024-03-05T14:07:09Z".into()),
            report_id: Some("geo-example-com-20240305140709-abc123".into()),
            ..DocumentInfo::default()
        };
        let bytes = render(&[page_with_text(0, "x")], &info);
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").and_then(Object::as_reference).unwrap();
        let dict = doc.get_dictionary(info_id).unwrap();
        assert_eq!(string_value(dict, b"Title"), b"GEO Audit: example.com");
        assert_eq!(string_value(dict, b"Author"), b"GEO Report Generator");
        assert_eq!(string_value(dict, b"CreationDate"), b"D:20240305140709Z");
        assert_eq!(string_value(dict, b"ReportId"), b"geo-example-com-20240305140709-abc123");
        assert!(dict.get(b"Producer").is_err());
    }

    #[test]
    fn rendering_before_begin_fails() {
        let mut renderer: LopdfRenderer<Cursor<Vec<u8>>> = LopdfRenderer::new();
        assert!(matches!(
            renderer.render_page_content(&page_with_text(0, "x")),
            Err(RenderError::NoDocument)
        ));
    }
}
