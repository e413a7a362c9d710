//! Test helpers shared by unit and integration tests
//!
//! [`ScriptedSource`] stands in for the HTTP API: responses are keyed by the exact query
//! string and every request is recorded.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::FutureExt;

use crate::{
    core::{
        cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update,
    },
    domain::{Company, CompanyQuery},
    infrastructure::api::{CompanySource, FetchError, FetchFuture},
};

/// `n` distinct companies named "Company 001", "Company 002", ...
pub fn companies(n: usize) -> Vec<Company> {
    companies_from(1, n)
}

/// `n` companies numbered from `first`
pub fn companies_from(first: usize, n: usize) -> Vec<Company> {
    (first..first + n)
        .map(|i| {
            Company::new(format!("Company {i:03}"))
                .industry("Software")
                .city("Osaka")
                .country("Japan")
                .employees(10 * i as u64)
                .founded(1990 + (i % 30) as i32)
        })
        .collect()
}

#[derive(Debug, Clone)]
struct Scripted {
    result: Result<Vec<Company>, FetchError>,
    delay: Duration,
}

/// In-memory [`CompanySource`]; unscripted queries answer with an empty page.
///
/// Scripting the same query several times plays the answers in order; the last one
/// repeats.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    responses: Mutex<HashMap<String, VecDeque<Scripted>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `batch`
    pub fn page(self, query: &str, batch: Vec<Company>) -> Self {
        self.script(query, Ok(batch), Duration::ZERO)
    }

    /// Answer `query` with `batch` after `delay`
    pub fn delayed_page(self, query: &str, batch: Vec<Company>, delay: Duration) -> Self {
        self.script(query, Ok(batch), delay)
    }

    /// Fail `query` with `error`
    pub fn failure(self, query: &str, error: FetchError) -> Self {
        self.script(query, Err(error), Duration::ZERO)
    }

    fn script(
        self,
        query: &str,
        result: Result<Vec<Company>, FetchError>,
        delay: Duration,
    ) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses
                .entry(query.to_string())
                .or_default()
                .push_back(Scripted { result, delay });
        }
        self
    }

    fn next_answer(&self, key: &str) -> Scripted {
        let empty = Scripted {
            result: Ok(vec![]),
            delay: Duration::ZERO,
        };
        let Ok(mut responses) = self.responses.lock() else {
            return empty;
        };
        match responses.get_mut(key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(empty),
            Some(queue) => queue.front().cloned().unwrap_or(empty),
            None => empty,
        }
    }

    /// Query strings requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl CompanySource for ScriptedSource {
    fn fetch_page<'a>(&'a self, query: &'a CompanyQuery) -> FetchFuture<'a> {
        async move {
            let key = query.to_query_string();
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(key.clone());
            }
            let scripted = self.next_answer(&key);
            if !scripted.delay.is_zero() {
                tokio::time::sleep(scripted.delay).await;
            }
            scripted.result
        }
        .boxed()
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Translate `raw` against `state` and fold the resulting messages through `update`
pub fn apply_raw(state: AppState, raw: RawMsg) -> (AppState, Vec<Cmd>) {
    let msgs = translate_raw_to_domain(raw, &state);
    apply_all(state, msgs)
}

/// Fold `msgs` through `update`, collecting every command
pub fn apply_all(
    mut state: AppState,
    msgs: impl IntoIterator<Item = Msg>,
) -> (AppState, Vec<Cmd>) {
    let mut cmds = Vec::new();
    for msg in msgs {
        let (next, mut produced) = update(msg, state);
        state = next;
        cmds.append(&mut produced);
    }
    (state, cmds)
}
