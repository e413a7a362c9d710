use crate::{
    core::{cmd::Cmd, msg::list::ListMsg},
    domain::{sort::sort_indices, Company, SortOrder},
};

/// Display order of the accumulated items.
///
/// Recomputed only when the item list (by revision) or the sort order changes. The
/// items themselves are never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortProjection {
    key: Option<(u64, SortOrder)>,
    indices: Vec<usize>,
}

impl SortProjection {
    /// Returns true when the projection had to be recomputed
    pub fn refresh(&mut self, items: &[Company], revision: u64, order: SortOrder) -> bool {
        let key = Some((revision, order));
        if self.key == key && self.indices.len() == items.len() {
            return false;
        }
        self.indices = sort_indices(items, order);
        self.key = key;
        true
    }

    /// Indices into the item list, in display order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Companies in display order
    pub fn view<'a>(&'a self, items: &'a [Company]) -> impl Iterator<Item = &'a Company> + 'a {
        self.indices.iter().filter_map(|&i| items.get(i))
    }
}

/// List-related state: the projection and the highlighted card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub projection: SortProjection,
    /// Position within the projection
    pub selected: Option<usize>,
}

impl ListState {
    pub fn update(&mut self, msg: ListMsg) -> Vec<Cmd> {
        let len = self.projection.len();
        if len == 0 {
            self.selected = None;
            return vec![];
        }
        let last = len - 1;

        self.selected = Some(match (msg, self.selected) {
            (ListMsg::SelectFirst, _) | (ListMsg::SelectNext, None) => 0,
            (ListMsg::SelectLast, _) | (ListMsg::SelectPrevious, None) => last,
            (ListMsg::SelectNext, Some(i)) => (i + 1).min(last),
            (ListMsg::SelectPrevious, Some(i)) => i.saturating_sub(1),
        });
        vec![]
    }

    /// Recompute the projection if needed and keep the selection in range
    pub fn refresh(&mut self, items: &[Company], revision: u64, order: SortOrder) {
        if self.projection.refresh(items, revision, order) {
            log::trace!("sort projection recomputed ({order:?}, {} items)", items.len());
        }
        self.selected = match (self.selected, self.projection.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => None,
        };
    }

    /// The highlighted company, if any
    pub fn selected_company<'a>(&self, items: &'a [Company]) -> Option<&'a Company> {
        self.selected
            .and_then(|i| self.projection.indices().get(i))
            .and_then(|&index| items.get(index))
    }
}
