use crate::core::{
    cmd::Cmd,
    msg::{system::SystemMsg, Msg},
    state::{filters, pagination, sentinel, AppState},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
///
/// After the message itself is handled, the sentinel subscription is reconciled with the
/// new pagination state. A re-registration whose initial evaluation fires feeds a
/// `LoadMoreRequested` straight back into pagination; the loop ends once the
/// registration is stable (usually immediately, since that request closes the gate).
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let revision_before = state.pagination.revision();
    let mut commands = dispatch(msg, &mut state);

    loop {
        if state.pagination.revision() != revision_before {
            // items changed; the sentinel geometry on record is from the old list
            state.sentinel.invalidate_layout();
        }
        let registration = state.registration();
        if !state.sentinel.reconcile(registration) {
            break;
        }
        commands.extend(
            state
                .pagination
                .update(pagination::Message::LoadMoreRequested),
        );
    }

    state.list.refresh(
        state.pagination.items(),
        state.pagination.revision(),
        state.filters.sort_order(),
    );

    (state, commands)
}

fn dispatch(msg: Msg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let mut commands = Vec::new();
            if system_msg == SystemMsg::Quit {
                state
                    .sentinel
                    .update(sentinel::Message::Teardown, &state.pagination.gate());
                commands.extend(state.filters.teardown());
            }
            commands.extend(state.system.update(system_msg));
            commands
        }

        // UI mode (delegated to UiState)
        Msg::Ui(ui_msg) => state.ui.update(ui_msg),

        // Selection (delegated to ListState)
        Msg::List(list_msg) => state.list.update(list_msg),

        // Filter edits; a settled change starts a new pagination epoch
        Msg::Filters(filters_msg) => {
            let filters::Effects { mut cmds, settled } = state.filters.update(filters_msg);
            if let Some(filter) = settled {
                cmds.extend(
                    state
                        .pagination
                        .update(pagination::Message::FiltersSettled(filter)),
                );
            }
            cmds
        }

        // Paging (delegated to PaginationState)
        Msg::Pagination(pagination_msg) => state.pagination.update(pagination_msg),

        // Sentinel geometry; a crossing asks pagination for the next page
        Msg::Sentinel(sentinel_msg) => {
            let gate = state.pagination.gate();
            if state.sentinel.update(sentinel_msg, &gate) {
                state
                    .pagination
                    .update(pagination::Message::LoadMoreRequested)
            } else {
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::list::ListMsg,
            state::{
                pagination::FetchTicket,
                sentinel::{RowSpan, SentinelLayout},
            },
        },
        domain::{Company, CompanyFilter, FilterField, SortOrder},
        test_helpers::{apply_all, companies},
    };

    fn loaded(ticket: FetchTicket, batch: Vec<Company>) -> Msg {
        Msg::Pagination(pagination::Message::PageLoaded {
            ticket,
            result: Ok(batch),
        })
    }

    fn laid_out(offset: u32, sentinel_top: u32) -> Msg {
        Msg::Sentinel(sentinel::Message::NodeLaidOut(Some(SentinelLayout {
            viewport: RowSpan::new(offset, 20),
            sentinel: RowSpan::new(sentinel_top, 1),
        })))
    }

    fn fetched_pages(cmds: &[Cmd]) -> Vec<u32> {
        cmds.iter()
            .filter_map(|cmd| match cmd {
                Cmd::FetchPage { ticket, .. } => Some(ticket.page),
                _ => None,
            })
            .collect()
    }

    fn started() -> AppState {
        let mut state = AppState::default();
        let cmds = state.init();
        assert_eq!(fetched_pages(&cmds), vec![1]);
        state
    }

    #[test]
    fn test_quit_tears_down() {
        let (state, _) = apply_all(
            started(),
            [
                Msg::Filters(filters::Message::FieldEdited {
                    field: FilterField::Name,
                    value: "a".into(),
                }),
                Msg::System(SystemMsg::Quit),
            ],
        );
        assert!(state.system.should_quit);
        assert!(!state.filters.is_pending());
        assert!(!state.sentinel.is_observing());
    }

    #[test]
    fn test_sentinel_far_below_waits_for_scroll() {
        let (state, cmds) = apply_all(
            started(),
            [
                loaded(FetchTicket { epoch: 0, page: 1 }, companies(10)),
                laid_out(0, 60),
            ],
        );
        assert!(fetched_pages(&cmds).is_empty());
        assert!(state.sentinel.is_observing());

        let (state, cmds) = update(laid_out(45, 60), state);
        assert_eq!(fetched_pages(&cmds), vec![2]);
        assert!(state.pagination.is_loading());
        assert!(!state.sentinel.is_observing());
    }

    #[test]
    fn test_visible_sentinel_chains_pages_until_exhausted() {
        // short list: the sentinel stays on screen after each page
        let (state, cmds) = apply_all(
            started(),
            [
                loaded(FetchTicket { epoch: 0, page: 1 }, companies(2)),
                laid_out(0, 8),
            ],
        );
        assert_eq!(fetched_pages(&cmds), vec![2]);

        let (state, cmds) = apply_all(
            state,
            [
                loaded(FetchTicket { epoch: 0, page: 2 }, vec![]),
                laid_out(0, 8),
            ],
        );
        assert!(fetched_pages(&cmds).is_empty());
        assert!(!state.pagination.has_more());
        assert!(!state.sentinel.is_observing());
    }

    #[test]
    fn test_sentinel_does_not_fire_on_stale_geometry() {
        let (state, cmds) = apply_all(
            started(),
            [
                laid_out(0, 0),
                loaded(FetchTicket { epoch: 0, page: 1 }, companies(10)),
            ],
        );
        // the empty-list geometry was invalidated by the new items
        assert!(fetched_pages(&cmds).is_empty());
        assert!(state.sentinel.wants_layout(state.sentinel.node()));
    }

    #[test]
    fn test_settled_filter_resets_and_refetches() {
        let (state, _) = apply_all(
            started(),
            [
                loaded(FetchTicket { epoch: 0, page: 1 }, companies(10)),
                Msg::Filters(filters::Message::FieldEdited {
                    field: FilterField::Country,
                    value: "Japan".into(),
                }),
            ],
        );
        assert_eq!(state.pagination.items().len(), 10);

        let generation = state.filters.generation();
        let (state, cmds) = update(
            Msg::Filters(filters::Message::DebounceElapsed { generation }),
            state,
        );
        assert!(state.pagination.items().is_empty());
        assert!(state.pagination.is_resetting());
        assert_eq!(state.pagination.epoch(), 1);
        assert_eq!(
            state.pagination.filter(),
            &CompanyFilter {
                country: "Japan".into(),
                ..Default::default()
            }
        );
        assert_eq!(fetched_pages(&cmds), vec![1]);
    }

    #[test]
    fn test_sort_reorders_projection_only() {
        let batch = vec![Company::new("beta"), Company::new("Alpha")];
        let (state, cmds) = apply_all(
            started(),
            [
                loaded(FetchTicket { epoch: 0, page: 1 }, batch),
                Msg::Filters(filters::Message::SortOrderChanged(SortOrder::Asc)),
                Msg::List(ListMsg::SelectFirst),
            ],
        );
        assert!(fetched_pages(&cmds).is_empty());
        let names: Vec<_> = state.visible_companies().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
        assert_eq!(state.pagination.items()[0].name, "beta");
        assert_eq!(state.selected_company().map(|c| c.name.as_str()), Some("Alpha"));
    }
}
