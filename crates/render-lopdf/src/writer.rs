use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::{Dictionary, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

const RESOURCES_ID: ObjectId = (1, 0);
const PAGES_ID: ObjectId = (2, 0);
const CATALOG_ID: ObjectId = (3, 0);
const FIRST_FREE_ID: u32 = 4;

/// Writes PDF objects to the output as soon as they are complete.
///
/// Page content streams and page dictionaries go out immediately. The shared
/// resources, the page tree, the catalog and the information dictionary reference
/// every page, so they are deferred to [`StreamingPdfWriter::finish`].
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    /// Byte offset of every object written so far.
    xref: Xref,
    next_id: u32,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    info_id: Option<ObjectId>,
    page_ids: Vec<ObjectId>,
    deferred: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        // The binary comment marks the file as containing 8-bit data.
        writer.write_all(format!("%PDF-{version}\n%\u{e2}\u{e3}\u{cf}\u{d3}\n").as_bytes())?;

        let mut deferred = BTreeMap::new();
        deferred.insert(RESOURCES_ID, dictionary! { "Font" => font_dict }.into());
        Ok(Self {
            writer,
            xref: Xref::new(0, XrefType::CrossReferenceTable),
            next_id: FIRST_FREE_ID,
            pages_id: PAGES_ID,
            resources_id: RESOURCES_ID,
            info_id: None,
            page_ids: Vec::new(),
            deferred,
        })
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = (self.next_id, 0);
        self.next_id += 1;
        id
    }

    fn emit(&mut self, id: ObjectId, object: &Object) -> io::Result<()> {
        let offset = u32::try_from(self.writer.stream_position()?)
            .map_err(|_| io::Error::other("PDF output exceeds the 4 GiB cross-reference limit"))?;
        self.xref.insert(
            id.0,
            XrefEntry::Normal {
                offset,
                generation: id.1,
            },
        );
        let mut buf = format!("{} {} obj\n", id.0, id.1).into_bytes();
        encode(&mut buf, object);
        buf.extend_from_slice(b"\nendobj\n");
        self.writer.write_all(&buf)
    }

    /// Writes `object` immediately and returns its new id.
    pub fn write_object(&mut self, object: Object) -> io::Result<ObjectId> {
        let id = self.allocate_id();
        self.emit(id, &object)?;
        Ok(id)
    }

    /// Writes an already encoded content stream immediately.
    pub fn write_content_stream(&mut self, encoded: Vec<u8>) -> io::Result<ObjectId> {
        self.write_object(Object::Stream(Stream::new(Dictionary::new(), encoded)))
    }

    pub fn set_info(&mut self, info: Dictionary) {
        let id = self.allocate_id();
        self.deferred.insert(id, info.into());
        self.info_id = Some(id);
    }

    pub fn set_page_ids(&mut self, page_ids: Vec<ObjectId>) {
        self.page_ids = page_ids;
    }

    /// Writes the deferred objects, the cross-reference table and the trailer.
    pub fn finish(mut self) -> io::Result<W> {
        let kids: Vec<Object> = self.page_ids.iter().copied().map(Object::Reference).collect();
        let count = kids.len() as i64;
        self.deferred.insert(
            PAGES_ID,
            dictionary! { "Type" => "Pages", "Kids" => kids, "Count" => count }.into(),
        );
        self.deferred.insert(
            CATALOG_ID,
            dictionary! { "Type" => "Catalog", "Pages" => PAGES_ID }.into(),
        );

        for (id, object) in std::mem::take(&mut self.deferred) {
            self.emit(id, &object)?;
        }

        let xref_start = self.writer.stream_position()?;
        self.xref.size = self.next_id;
        let mut tail = xref_table(&self.xref).into_bytes();

        let mut trailer = dictionary! { "Size" => i64::from(self.xref.size), "Root" => CATALOG_ID };
        if let Some(info_id) = self.info_id {
            trailer.set("Info", info_id);
        }
        tail.extend_from_slice(b"trailer\n");
        encode_dictionary(&mut tail, &trailer);
        tail.extend_from_slice(format!("\nstartxref\n{xref_start}\n%%EOF").as_bytes());
        self.writer.write_all(&tail)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Cross-reference table covering object numbers `0..xref.size`, split into runs of
/// consecutive written objects. Numbers that were never written are listed as free.
fn xref_table(xref: &Xref) -> String {
    let written = |n: u32| matches!(xref.entries.get(&n), Some(XrefEntry::Normal { .. }));
    let mut out = String::from("xref\n");
    let mut id = 0;
    while id < xref.size {
        let start = id;
        let run_written = written(id);
        while id < xref.size && written(id) == run_written {
            id += 1;
        }
        out.push_str(&format!("{start} {}\n", id - start));
        for n in start..id {
            match xref.entries.get(&n) {
                Some(XrefEntry::Normal { offset, generation }) => {
                    out.push_str(&format!("{offset:010} {generation:05} n \n"))
                }
                _ => out.push_str("0000000000 65535 f \n"),
            }
        }
    }
    out
}

fn encode(out: &mut Vec<u8>, object: &Object) {
    match object {
        Object::Null => out.extend_from_slice(b"null"),
        Object::Boolean(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
        Object::Integer(i) => out.extend_from_slice(i.to_string().as_bytes()),
        Object::Real(r) => out.extend_from_slice(format!("{r:.3}").as_bytes()),
        Object::Name(name) => {
            out.push(b'/');
            out.extend_from_slice(name);
        }
        Object::String(bytes, StringFormat::Literal) => {
            out.push(b'(');
            for &byte in bytes {
                if matches!(byte, b'(' | b')' | b'\\') {
                    out.push(b'\\');
                }
                out.push(byte);
            }
            out.push(b')');
        }
        Object::String(bytes, StringFormat::Hexadecimal) => {
            out.push(b'<');
            for byte in bytes {
                out.extend_from_slice(format!("{byte:02X}").as_bytes());
            }
            out.push(b'>');
        }
        Object::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b' ');
                }
                encode(out, item);
            }
            out.push(b']');
        }
        Object::Dictionary(dict) => encode_dictionary(out, dict),
        Object::Stream(stream) => {
            let mut dict = stream.dict.clone();
            dict.set("Length", stream.content.len() as i64);
            encode_dictionary(out, &dict);
            out.extend_from_slice(b"\nstream\n");
            out.extend_from_slice(&stream.content);
            out.extend_from_slice(b"\nendstream");
        }
        Object::Reference((number, generation)) => {
            out.extend_from_slice(format!("{number} {generation} R").as_bytes());
        }
    }
}

/// Keys are written in byte order so identical input gives identical output.
fn encode_dictionary(out: &mut Vec<u8>, dict: &Dictionary) {
    let mut entries: Vec<_> = dict.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    out.extend_from_slice(b"<<");
    for (key, value) in entries {
        out.push(b'/');
        out.extend_from_slice(key);
        out.push(b' ');
        encode(out, value);
        out.push(b' ');
    }
    out.extend_from_slice(b">>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn writer() -> StreamingPdfWriter<Cursor<Vec<u8>>> {
        StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", Dictionary::new()).unwrap()
    }

    #[test]
    fn objects_are_written_before_finish() {
        let mut pdf = writer();
        let id = pdf.write_content_stream(b"BT ET".to_vec()).unwrap();
        assert_eq!(id, (FIRST_FREE_ID, 0));
        let written = String::from_utf8_lossy(pdf.writer.get_ref()).to_string();
        assert!(written.contains("4 0 obj"), "{written}");
        assert!(written.contains("BT ET"), "{written}");
    }

    #[test]
    fn finished_file_parses() {
        let mut pdf = writer();
        pdf.set_info(dictionary! { "Title" => Object::string_literal("Audit") });
        let bytes = pdf.finish().unwrap().into_inner();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.ends_with(b"%%EOF"));
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert!(doc.trailer.get(b"Info").is_ok());
        assert_eq!(doc.get_pages().len(), 0);
    }

    #[test]
    fn xref_marks_gaps_as_free() {
        let mut xref = Xref::new(5, XrefType::CrossReferenceTable);
        for (id, offset) in [(1, 15), (2, 40), (4, 90)] {
            xref.insert(id, XrefEntry::Normal { offset, generation: 0 });
        }
        let table = xref_table(&xref);
        assert_eq!(
            table,
            "xref\n0 1\n0000000000 65535 f \n1 2\n0000000015 00000 n \n0000000040 00000 n \n\
             3 1\n0000000000 65535 f \n4 1\n0000000090 00000 n \n"
        );
    }

    #[test]
    fn literal_strings_are_escaped() {
        let mut out = Vec::new();
        encode(&mut out, &Object::string_literal("a(b)\\c"));
        assert_eq!(out, b"(a\\(b\\)\\\\c)");
    }
}
