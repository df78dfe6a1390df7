/// Document-level metadata written into the output's information dictionary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub creator: String,
    pub producer: String,
    /// RFC 3339 timestamp; converted to the PDF date format when written.
    pub creation_date: Option<String>,
    /// Opaque identifier stored under a custom key for traceability.
    pub report_id: Option<String>,
}

impl DocumentInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
