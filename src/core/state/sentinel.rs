//! Scroll sentinel observer
//!
//! The sentinel is a marker placed right after the last loaded card. After each render
//! the list reports where the sentinel and the viewport are; the observer turns that
//! geometry into "load more" signals.
//!
//! The observer keeps at most one [`Subscription`]. It is released and re-created
//! whenever its [`Registration`] (gate, page, epoch) changes, and a fresh subscription
//! evaluates the current geometry once, like an initial intersection notification.
//! A subscription fires when the intersection ratio rises to the threshold, and only if
//! the gate read at that moment is open.

use serde::{Deserialize, Serialize};

/// A vertical range of content rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpan {
    pub top: u32,
    pub height: u32,
}

impl RowSpan {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// Where the sentinel sits relative to the scrolled viewport, in content rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentinelLayout {
    pub viewport: RowSpan,
    pub sentinel: RowSpan,
}

impl SentinelLayout {
    /// Visible share of the sentinel with the viewport grown by `root_margin` rows on
    /// both edges
    pub fn intersection_ratio(&self, root_margin: u32) -> f64 {
        let root_top = i64::from(self.viewport.top) - i64::from(root_margin);
        let root_bottom = i64::from(self.viewport.bottom()) + i64::from(root_margin);
        let top = i64::from(self.sentinel.top);
        let bottom = i64::from(self.sentinel.bottom());

        if self.sentinel.height == 0 {
            return if top >= root_top && top < root_bottom {
                1.0
            } else {
                0.0
            };
        }

        let overlap = (bottom.min(root_bottom) - top.max(root_top)).max(0);
        overlap as f64 / f64::from(self.sentinel.height)
    }
}

/// Tunables of the observer.
///
/// The default pre-fetches once half the sentinel is within five rows of the viewport.
/// `threshold = 1.0, root_margin = 0` waits for the sentinel to be fully on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: u32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            root_margin: 5,
        }
    }
}

impl ObserverOptions {
    pub fn full_visibility() -> Self {
        Self {
            threshold: 1.0,
            root_margin: 0,
        }
    }
}

/// Suppression conditions for "load more"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadGate {
    pub loading: bool,
    pub failed: bool,
    pub has_more: bool,
    pub resetting: bool,
}

impl LoadGate {
    pub fn is_open(&self) -> bool {
        !self.loading && !self.failed && self.has_more && !self.resetting
    }
}

/// Everything a subscription's predicate depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub gate: LoadGate,
    pub epoch: u64,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    id: u64,
    last_ratio: Option<f64>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    /// The list was rendered; `None` when there is no room for it
    NodeLaidOut(Option<SentinelLayout>),
    /// The owning view is going away
    Teardown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentinelObserver {
    options: ObserverOptions,
    node: Option<SentinelLayout>,
    layout_current: bool,
    subscription: Option<Subscription>,
    registration: Option<Registration>,
    next_id: u64,
}

impl Default for SentinelObserver {
    fn default() -> Self {
        Self::new(ObserverOptions::default())
    }
}

impl SentinelObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            node: None,
            layout_current: false,
            subscription: None,
            registration: None,
            next_id: 0,
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn node(&self) -> Option<&SentinelLayout> {
        self.node.as_ref()
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    /// Whether the host should report `layout` after a render
    pub fn wants_layout(&self, layout: Option<&SentinelLayout>) -> bool {
        !self.layout_current || self.node.as_ref() != layout
    }

    /// The geometry on record no longer matches the content (items changed)
    pub fn invalidate_layout(&mut self) {
        self.layout_current = false;
    }

    /// Returns true when "load more" should fire
    pub fn update(&mut self, message: Message, gate: &LoadGate) -> bool {
        match message {
            Message::NodeLaidOut(layout) => {
                let was_mounted = self.node.is_some();
                self.node = layout;
                self.layout_current = true;
                if was_mounted != self.node.is_some() {
                    // mounted or unmounted: force a fresh registration
                    self.release();
                    self.registration = None;
                    return false;
                }
                self.evaluate(gate)
            }
            Message::Teardown => {
                self.release();
                self.registration = None;
                self.node = None;
                self.layout_current = false;
                false
            }
        }
    }

    /// Bring the subscription in line with `registration`.
    ///
    /// Returns true when the (new) subscription's initial evaluation fires.
    pub fn reconcile(&mut self, registration: Registration) -> bool {
        if self.registration == Some(registration) {
            return false;
        }
        self.registration = Some(registration);
        self.release();

        if !registration.gate.is_open() || self.node.is_none() {
            return false;
        }

        self.next_id += 1;
        log::debug!("sentinel subscription {} created", self.next_id);
        self.subscription = Some(Subscription {
            id: self.next_id,
            last_ratio: None,
        });
        self.evaluate(&registration.gate)
    }

    fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            log::debug!("sentinel subscription {} released", subscription.id);
        }
    }

    fn evaluate(&mut self, gate: &LoadGate) -> bool {
        if !self.layout_current {
            return false;
        }
        let threshold = self.options.threshold;
        let root_margin = self.options.root_margin;
        let (Some(subscription), Some(node)) = (self.subscription.as_mut(), self.node.as_ref())
        else {
            return false;
        };

        let ratio = node.intersection_ratio(root_margin);
        let reached = |r: f64| r > 0.0 && r >= threshold;
        let was_reached = subscription.last_ratio.is_some_and(reached);
        subscription.last_ratio = Some(ratio);

        reached(ratio) && !was_reached && gate.is_open()
    }
}
