use std::collections::HashSet;

/// Hover and legend state shared by every chart on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSync {
    hidden: HashSet<String>,
    hover_index: Option<usize>,
}

impl ChartSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips whether a technology is hidden.
    pub fn toggle(&mut self, key: &str) {
        if !self.hidden.remove(key) {
            self.hidden.insert(key.to_string());
        }
    }

    /// Last write wins, whichever chart it comes from.
    pub fn set_hover(&mut self, index: Option<usize>) {
        self.hover_index = index;
    }

    pub fn is_hidden(&self, key: &str) -> bool {
        self.hidden.contains(key)
    }

    pub fn hidden(&self) -> &HashSet<String> {
        &self.hidden
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }
}
