/// The renderer's only mutable layout state: which page is open and where the
/// next unit of content starts on it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutState {
    pub page_index: usize,
    /// Absolute Y of the write position, measured down from the top of the page.
    pub cursor_y: f32,
}

impl LayoutState {
    pub fn new(page_index: usize, cursor_y: f32) -> Self {
        Self { page_index, cursor_y }
    }

    pub fn advanced(self, dy: f32) -> Self {
        Self {
            cursor_y: self.cursor_y + dy.max(0.0),
            ..self
        }
    }

    pub fn next_page(self, top: f32) -> Self {
        Self {
            page_index: self.page_index + 1,
            cursor_y: top,
        }
    }
}
