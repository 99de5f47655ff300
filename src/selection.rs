//! "Choose 2–3 of N" selection over the programs of one major.

use serde::Serialize;

use crate::catalog::{Major, Program};

/// Most programs that can be compared side by side.
pub const MAX_SELECTED: usize = 3;

/// Fewest programs needed for a comparison.
pub const MIN_TO_COMPARE: usize = 2;

/// Ordered program ids chosen for comparison.
///
/// Ids are only meaningful within the major they were picked from; the
/// owner must clear the set whenever the major changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the set with `program` toggled.
    ///
    /// Selected programs are removed, keeping the rest in order. Unselected
    /// programs are appended while there is room. At capacity the set comes
    /// back unchanged.
    pub fn toggled(&self, program: &Program) -> Self {
        let mut next = self.clone();
        next.toggle(program);
        next
    }

    /// In-place form of [`toggled`](Self::toggled). Returns whether the set
    /// changed.
    pub fn toggle(&mut self, program: &Program) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| *id == program.id) {
            self.ids.remove(pos);
            return true;
        }
        if self.ids.len() < MAX_SELECTED {
            self.ids.push(program.id.clone());
            return true;
        }
        false
    }

    pub fn contains(&self, program: &Program) -> bool {
        self.ids.iter().any(|id| *id == program.id)
    }

    /// True when the set is full and `program` is not part of it.
    pub fn is_disabled(&self, program: &Program) -> bool {
        self.is_full() && !self.contains(program)
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTED
    }

    pub fn can_compare(&self) -> bool {
        self.ids.len() >= MIN_TO_COMPARE
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Resolve the selection against its major, in selection order.
    pub fn resolve<'a>(&self, major: &'a Major) -> Vec<&'a Program> {
        self.ids.iter().filter_map(|id| major.program(id)).collect()
    }
}
