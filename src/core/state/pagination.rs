//! Pagination controller
//!
//! This module follows the Elm Architecture pattern:
//! - State changes only through `update`
//! - All transitions are explicit `Message` variants
//! - Side effects are returned as `Cmd`s, never performed here
//!
//! Every fetch is tagged with a [`FetchTicket`] naming the filter epoch and page it was
//! issued for. A response is applied only while its ticket is the one in flight, so a
//! late answer from a superseded epoch can never touch a freshly reset list.

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        cmd::Cmd,
        state::{cache::ResponseCache, sentinel::LoadGate},
    },
    domain::{query::DEFAULT_PAGE_SIZE, Company, CompanyFilter, CompanyQuery},
    infrastructure::api::FetchError,
};

/// Identity of one page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchTicket {
    pub epoch: u64,
    pub page: u32,
}

/// Messages that can be sent to update the pagination state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    /// The directory was mounted; load page 1 of epoch 0
    Started,
    /// The debounced filters changed; start a new epoch
    FiltersSettled(CompanyFilter),
    /// The sentinel asked for the next page
    LoadMoreRequested,
    /// The user asked to re-issue the failed request
    RetryRequested,
    /// A response (or failure) arrived for `ticket`
    PageLoaded {
        ticket: FetchTicket,
        result: Result<Vec<Company>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    page: u32,
    items: Vec<Company>,
    loading: bool,
    error: Option<String>,
    has_more: bool,
    resetting: bool,
    epoch: u64,
    filter: CompanyFilter,
    in_flight: Option<FetchTicket>,
    revision: u64,
    page_size: u32,
    cache: Option<ResponseCache>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, true)
    }
}

impl PaginationState {
    pub fn new(page_size: u32, cache_enabled: bool) -> Self {
        Self {
            page: 1,
            items: Vec::new(),
            loading: false,
            error: None,
            has_more: true,
            resetting: false,
            epoch: 0,
            filter: CompanyFilter::default(),
            in_flight: None,
            revision: 0,
            page_size: page_size.max(1),
            cache: cache_enabled.then(ResponseCache::new),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Accumulated companies in arrival order
    pub fn items(&self) -> &[Company] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn filter(&self) -> &CompanyFilter {
        &self.filter
    }

    pub fn in_flight(&self) -> Option<FetchTicket> {
        self.in_flight
    }

    /// Bumped whenever `items` changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_ref()
    }

    /// The four suppression conditions of the sentinel
    pub fn gate(&self) -> LoadGate {
        LoadGate {
            loading: self.loading,
            failed: self.error.is_some(),
            has_more: self.has_more,
            resetting: self.resetting,
        }
    }

    /// "No companies found": exhausted or idle with nothing to show
    pub fn is_empty_result(&self) -> bool {
        self.items.is_empty() && !self.loading && self.error.is_none()
    }

    /// Update the pagination state based on a message
    pub fn update(&mut self, message: Message) -> Vec<Cmd> {
        match message {
            Message::Started => self.begin_fetch(),
            Message::FiltersSettled(filter) => {
                self.reset(filter);
                self.begin_fetch()
            }
            Message::LoadMoreRequested => {
                if !self.gate().is_open() {
                    log::debug!("load more suppressed: {:?}", self.gate());
                    return vec![];
                }
                self.page += 1;
                self.begin_fetch()
            }
            Message::RetryRequested => {
                if self.error.is_none() || self.loading || !self.has_more {
                    return vec![];
                }
                self.begin_fetch()
            }
            Message::PageLoaded { ticket, result } => {
                self.complete_fetch(ticket, result);
                vec![]
            }
        }
    }

    fn reset(&mut self, filter: CompanyFilter) {
        self.epoch += 1;
        if !self.items.is_empty() {
            self.items.clear();
            self.revision += 1;
        }
        self.page = 1;
        self.has_more = true;
        self.error = None;
        self.loading = false;
        self.resetting = true;
        self.in_flight = None;
        self.filter = filter;
        log::info!("filters settled, epoch {} ({:?})", self.epoch, self.filter);
    }

    fn begin_fetch(&mut self) -> Vec<Cmd> {
        let ticket = FetchTicket {
            epoch: self.epoch,
            page: self.page,
        };
        if self.in_flight == Some(ticket) {
            log::debug!("fetch already in flight: {ticket:?}");
            return vec![];
        }

        let query = CompanyQuery::new(self.page, self.page_size, self.filter.clone());
        self.error = None;

        if let Some(batch) = self
            .cache
            .as_ref()
            .and_then(|cache| cache.get(&query.to_query_string()))
        {
            log::debug!("cache hit for {}", query.to_query_string());
            self.items.extend_from_slice(batch);
            self.revision += 1;
            self.loading = false;
            self.resetting = false;
            return vec![];
        }

        self.loading = true;
        self.in_flight = Some(ticket);
        vec![Cmd::FetchPage { ticket, query }]
    }

    fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Company>, FetchError>) {
        if self.in_flight != Some(ticket) {
            log::debug!(
                "discarding stale response {ticket:?} (in flight: {:?})",
                self.in_flight
            );
            return;
        }
        self.in_flight = None;
        self.loading = false;
        self.resetting = false;

        match result {
            Ok(batch) if batch.is_empty() => {
                log::info!("no more companies after page {}", ticket.page);
                self.has_more = false;
            }
            Ok(batch) => {
                if let Some(cache) = self.cache.as_mut() {
                    let key =
                        CompanyQuery::new(ticket.page, self.page_size, self.filter.clone())
                            .to_query_string();
                    cache.insert(key, &batch);
                }
                self.items.extend(batch);
                self.revision += 1;
            }
            Err(e) => {
                log::error!("failed to fetch page {}: {e}", ticket.page);
                self.error = Some(e.user_message().to_string());
            }
        }
    }
}
