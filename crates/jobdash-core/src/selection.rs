/// Cursor position within the results list.
///
/// Knows nothing about the items themselves; callers pass the list length
/// wherever a bound is needed.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.index = index;
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        self.index = Some(match self.index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Clamp to a valid position after the list changes size.
    pub fn clamp(&mut self, len: usize) {
        if let Some(idx) = self.index {
            if len == 0 {
                self.index = None;
            } else if idx >= len {
                self.index = Some(len - 1);
            }
        }
    }
}
