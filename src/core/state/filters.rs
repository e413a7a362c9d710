//! Filter state holder with a trailing-edge debounce
//!
//! Edits land in the draft immediately so the inputs always echo what was typed.
//! Only after `delay` passes without another edit does the draft's query part become
//! the settled filter that drives fetching. Every edit bumps a generation counter; a
//! timer that fires with an older generation is ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    core::cmd::Cmd,
    domain::{CompanyFilter, FilterField, FilterState, SortOrder},
};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Messages that can be sent to update the filter state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    FieldEdited { field: FilterField, value: String },
    SortOrderChanged(SortOrder),
    SortCycled,
    Cleared,
    DebounceElapsed { generation: u64 },
}

/// What an update produced: commands for the executor, and the newly settled filter
/// when the settled value actually changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    pub cmds: Vec<Cmd>,
    pub settled: Option<CompanyFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiltersState {
    draft: FilterState,
    settled: CompanyFilter,
    delay: Duration,
    generation: u64,
    pending: bool,
}

impl Default for FiltersState {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl FiltersState {
    pub fn new(delay: Duration) -> Self {
        Self {
            draft: FilterState::default(),
            settled: CompanyFilter::default(),
            delay,
            generation: 0,
            pending: false,
        }
    }

    /// The live values, as shown in the inputs
    pub fn draft(&self) -> &FilterState {
        &self.draft
    }

    pub fn settled(&self) -> &CompanyFilter {
        &self.settled
    }

    pub fn sort_order(&self) -> SortOrder {
        self.draft.sort_order
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn update(&mut self, message: Message) -> Effects {
        match message {
            Message::FieldEdited { field, value } => {
                if self.draft.get(field) == value {
                    return Effects::default();
                }
                let next = self.draft.with_field(field, value);
                self.replace(next)
            }
            Message::SortOrderChanged(sort_order) => {
                self.draft = self.draft.with_sort_order(sort_order);
                Effects::default()
            }
            Message::SortCycled => {
                self.draft = self.draft.with_sort_order(self.draft.sort_order.cycle());
                Effects::default()
            }
            Message::Cleared => {
                let next = FilterState {
                    sort_order: self.draft.sort_order,
                    ..FilterState::default()
                };
                if next == self.draft {
                    return Effects::default();
                }
                self.replace(next)
            }
            Message::DebounceElapsed { generation } => {
                if !self.pending || generation != self.generation {
                    log::debug!(
                        "ignoring debounce timer {generation} (current {}, pending {})",
                        self.generation,
                        self.pending
                    );
                    return Effects::default();
                }
                self.settle()
            }
        }
    }

    /// Drop any pending timer; nothing settles afterwards
    pub fn teardown(&mut self) -> Vec<Cmd> {
        if !self.pending {
            return vec![];
        }
        self.pending = false;
        vec![Cmd::CancelDebounce]
    }

    fn replace(&mut self, next: FilterState) -> Effects {
        self.draft = next;
        self.generation += 1;
        self.pending = true;

        if self.delay.is_zero() {
            return self.settle();
        }
        Effects {
            cmds: vec![Cmd::ScheduleDebounce {
                generation: self.generation,
                delay: self.delay,
            }],
            settled: None,
        }
    }

    fn settle(&mut self) -> Effects {
        self.pending = false;
        let filter = self.draft.query_filter();
        if filter == self.settled {
            return Effects::default();
        }
        self.settled = filter.clone();
        Effects {
            cmds: vec![],
            settled: Some(filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn edit(field: FilterField, value: &str) -> Message {
        Message::FieldEdited {
            field,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_edit_updates_draft_and_schedules() {
        let mut filters = FiltersState::default();
        let effects = filters.update(edit(FilterField::Name, "a"));

        assert_eq!(filters.draft().name, "a");
        assert_eq!(filters.settled(), &CompanyFilter::default());
        assert_eq!(
            effects.cmds,
            vec![Cmd::ScheduleDebounce {
                generation: 1,
                delay: DEFAULT_DEBOUNCE
            }]
        );
        assert_eq!(effects.settled, None);
    }

    #[test]
    fn test_burst_settles_once_with_final_value() {
        let mut filters = FiltersState::default();
        filters.update(edit(FilterField::Name, "a"));
        filters.update(edit(FilterField::Name, "ac"));
        filters.update(edit(FilterField::Name, "acm"));
        assert_eq!(filters.generation(), 3);

        // superseded timers do nothing
        assert_eq!(
            filters.update(Message::DebounceElapsed { generation: 1 }),
            Effects::default()
        );
        let effects = filters.update(Message::DebounceElapsed { generation: 3 });
        assert_eq!(effects.settled.map(|f| f.name), Some("acm".to_string()));
        assert!(!filters.is_pending());
    }

    #[test]
    fn test_same_value_is_no_op() {
        let mut filters = FiltersState::default();
        let effects = filters.update(edit(FilterField::Country, ""));
        assert_eq!(effects, Effects::default());
        assert_eq!(filters.generation(), 0);
    }

    #[test]
    fn test_settling_back_to_previous_value_changes_nothing() {
        let mut filters = FiltersState::default();
        filters.update(edit(FilterField::Industry, "x"));
        filters.update(edit(FilterField::Industry, ""));
        let effects = filters.update(Message::DebounceElapsed { generation: 2 });
        assert_eq!(effects.settled, None);
    }

    #[test]
    fn test_sort_order_applies_immediately_without_settling() {
        let mut filters = FiltersState::default();
        let effects = filters.update(Message::SortCycled);
        assert_eq!(effects, Effects::default());
        assert_eq!(filters.sort_order(), SortOrder::Asc);

        filters.update(Message::SortOrderChanged(SortOrder::None));
        assert_eq!(filters.sort_order(), SortOrder::None);
        assert_eq!(filters.generation(), 0);
    }

    #[test]
    fn test_cleared_keeps_sort_order() {
        let mut filters = FiltersState::default();
        filters.update(Message::SortOrderChanged(SortOrder::Desc));
        filters.update(edit(FilterField::Country, "Japan"));
        filters.update(Message::DebounceElapsed { generation: 1 });

        filters.update(Message::Cleared);
        assert_eq!(filters.draft().country, "");
        assert_eq!(filters.sort_order(), SortOrder::Desc);
        let effects = filters.update(Message::DebounceElapsed { generation: 2 });
        assert_eq!(effects.settled, Some(CompanyFilter::default()));
    }

    #[test]
    fn test_zero_delay_settles_immediately() {
        let mut filters = FiltersState::new(Duration::ZERO);
        let effects = filters.update(edit(FilterField::Name, "a"));
        assert!(effects.cmds.is_empty());
        assert_eq!(effects.settled.map(|f| f.name), Some("a".to_string()));
    }

    #[test]
    fn test_teardown_cancels_pending() {
        let mut filters = FiltersState::default();
        assert!(filters.teardown().is_empty());

        filters.update(edit(FilterField::Name, "a"));
        assert_eq!(filters.teardown(), vec![Cmd::CancelDebounce]);
        let effects = filters.update(Message::DebounceElapsed { generation: 1 });
        assert_eq!(effects.settled, None);
    }
}
