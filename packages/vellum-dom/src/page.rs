use crate::node::LayoutBox;

/// A page of the paginated document: the page box (carrying the `@page` style) and the
/// box of the document's root element laid out on it.
#[derive(Debug, Clone)]
pub struct Page {
    pub page_box: LayoutBox,
    pub root: LayoutBox,
}

impl Page {
    pub fn new(page_box: LayoutBox, root: LayoutBox) -> Self {
        Self { page_box, root }
    }

    /// Re-arms the background idempotence flags so the page can be painted again.
    pub fn reset_paint_state(&self) {
        self.page_box.reset_paint_state();
        self.root.reset_paint_state();
    }
}
