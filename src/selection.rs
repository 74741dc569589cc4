//! File Selection
//!
//! Tracks which rendered file rows are checked for bulk actions.

use std::collections::BTreeSet;

/// Tri-state of the "select all" header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderCheck {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

/// What the file list needs to draw checkboxes and the bulk button
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionSummary {
    pub selected: BTreeSet<String>,
    pub count: usize,
    pub header: HeaderCheck,
}

impl SelectionSummary {
    pub fn contains(&self, path: &str) -> bool {
        self.selected.contains(path)
    }
}

/// Selected paths, always a subset of the rendered ones
#[derive(Debug, Clone, Default)]
pub struct Selection {
    rendered: Vec<String>,
    selected: BTreeSet<String>,
}

impl Selection {
    /// New file rows were rendered; every checkbox starts unchecked.
    pub fn replace_rendered(&mut self, paths: Vec<String>) {
        self.rendered = paths;
        self.selected.clear();
    }

    pub fn set_checked(&mut self, path: &str, checked: bool) {
        if !self.rendered.iter().any(|p| p == path) {
            return;
        }
        if checked {
            self.selected.insert(path.to_string());
        } else {
            self.selected.remove(path);
        }
    }

    pub fn set_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.rendered.iter().cloned().collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected paths in display order
    pub fn paths(&self) -> Vec<String> {
        self.rendered
            .iter()
            .filter(|p| self.selected.contains(*p))
            .cloned()
            .collect()
    }

    pub fn header(&self) -> HeaderCheck {
        if self.selected.is_empty() {
            HeaderCheck::Unchecked
        } else if self.selected.len() == self.rendered.len() {
            HeaderCheck::Checked
        } else {
            HeaderCheck::Indeterminate
        }
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            selected: self.selected.clone(),
            count: self.selected.len(),
            header: self.header(),
        }
    }
}
