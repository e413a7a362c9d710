/// Folds everything that happened during one loop iteration into a single draw
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Coalescer {
    dirty: bool,
    resize: Option<(u16, u16)>,
}

impl Coalescer {
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Several resizes in one iteration collapse into the last one
    pub fn resized(&mut self, width: u16, height: u16) {
        self.resize = Some((width, height));
        self.dirty = true;
    }

    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resize.take()
    }

    /// Whether to draw now; clears the request
    pub fn take_render(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
