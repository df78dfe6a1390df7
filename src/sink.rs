use geo_report_layout::{Page, PageSink};
use geo_report_render_core::{DocumentRenderer, RenderError};
use lopdf::ObjectId;
use std::io::{Seek, Write};
use std::marker::PhantomData;

/// Feeds composed pages straight into a [`DocumentRenderer`], one page at a time.
pub struct RendererSink<R, W> {
    renderer: R,
    page_ids: Vec<ObjectId>,
    _writer: PhantomData<fn() -> W>,
}

impl<R, W> RendererSink<R, W>
where
    R: DocumentRenderer<W>,
    W: Write + Seek + Send,
{
    /// Wraps a renderer whose document has already been started.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            page_ids: Vec::new(),
            _writer: PhantomData,
        }
    }

    pub fn finish(self) -> Result<W, RenderError> {
        Box::new(self.renderer).finish(self.page_ids)
    }
}

impl<R, W> PageSink for RendererSink<R, W>
where
    R: DocumentRenderer<W>,
    W: Write + Seek + Send,
{
    type Error = RenderError;

    fn emit_page(&mut self, page: Page) -> Result<(), RenderError> {
        let content_id = self.renderer.render_page_content(&page)?;
        let page_id = self
            .renderer
            .write_page_object(vec![content_id], page.width, page.height)?;
        self.page_ids.push(page_id);
        Ok(())
    }
}
