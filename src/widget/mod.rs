//! Search widget controller
//!
//! Wires the query state, the debounce scheduler, a suggestion backend and
//! the renderer together. All state is owned by one `Controller` and
//! mutated from one task; the only concurrency is the spawned fetches,
//! whose outcomes come back over a channel tagged with the token of the
//! request that produced them. Only the latest token is ever rendered.

pub mod event;

pub use event::Event;

use crate::fetch::{self, Outcome, SuggestionService};
use crate::projection::{PixelPoint, Projector};
use crate::query::QueryState;
use crate::render::{ElementId, Page, Renderer};
use crate::scheduler::Scheduler;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Monotonic tag attached to every dispatched search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestToken(pub u64);

impl RequestToken {
    fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finished search, on its way back to the controller
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub token: RequestToken,
    pub outcome: Outcome,
}

/// Owner of all widget state
pub struct Controller<S: SuggestionService> {
    service: Arc<S>,
    query: QueryState,
    scheduler: Scheduler,
    renderer: Renderer,
    latest: RequestToken,
    rendered: RequestToken,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<S: SuggestionService> Controller<S> {
    pub fn new(service: S, scheduler: Scheduler, projector: Projector) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            service: Arc::new(service),
            query: QueryState::new(),
            scheduler,
            renderer: Renderer::new(projector),
            latest: RequestToken::default(),
            rendered: RequestToken::default(),
            completions_tx,
            completions_rx,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn page(&self) -> &Page {
        self.renderer.page()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Token of the most recently dispatched search
    pub fn latest_token(&self) -> RequestToken {
        self.latest
    }

    /// Apply one user event synchronously
    ///
    /// Returns the token of the search it dispatched, if any. Debounced
    /// input only arms the scheduler; the search happens when it expires.
    pub fn handle(&mut self, event: Event) -> Option<RequestToken> {
        match event {
            Event::Input(field, value) => {
                self.query.set(field, value);
                self.scheduler.request_soon();
                None
            }
            Event::Confirm => Some(self.search_now()),
            Event::MapClick(x, y) => {
                let coords = self.renderer.projector().to_geo(PixelPoint::new(x, y));
                self.query.set_coordinates(coords);
                Some(self.search_now())
            }
            Event::MarkerClick(id) => {
                let coords = self.renderer.marker_target(id)?;
                self.query.set_coordinates(coords);
                Some(self.search_now())
            }
            Event::HoverIn(id) => {
                self.hover(id, true);
                None
            }
            Event::HoverOut(id) => {
                self.hover(id, false);
                None
            }
        }
    }

    fn hover(&mut self, id: ElementId, on: bool) {
        let found = if on {
            self.renderer.hover(id)
        } else {
            self.renderer.unhover(id)
        };
        if !found {
            debug!("hover on element {} ignored, not on page", id);
        }
    }

    /// Cancel any pending debounce and search with the current query
    pub fn search_now(&mut self) -> RequestToken {
        self.scheduler.request_now();
        self.dispatch()
    }

    /// Issue a search for the current query state
    fn dispatch(&mut self) -> RequestToken {
        self.latest = self.latest.next();
        let token = self.latest;
        let request = self.query.to_request();

        self.renderer.show_searching(&request.term);
        info!("search {} dispatched: {}", token, request.path_and_query());

        let service = Arc::clone(&self.service);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let outcome = fetch::search(service.as_ref(), &request).await;
            // The receiver lives in the controller; a send error means it is gone
            let _ = tx.send(Completion { token, outcome });
        });

        token
    }

    /// Render a completion if it answers the latest search
    ///
    /// Returns false when the completion was stale and discarded.
    pub fn apply(&mut self, completion: Completion) -> bool {
        if completion.token != self.latest {
            debug!(
                "discarding stale {} outcome for search {} (latest {})",
                completion.outcome.kind(),
                completion.token,
                self.latest
            );
            return false;
        }
        self.renderer.render(&completion.outcome);
        self.rendered = completion.token;
        true
    }

    /// Whether the latest dispatched search has not been rendered yet
    pub fn is_searching(&self) -> bool {
        self.rendered != self.latest
    }

    /// Wait for the next search to finish, whatever its token
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.recv().await
    }

    /// Wait for the debounce deadline and dispatch the delayed search
    pub async fn fire_pending(&mut self) -> RequestToken {
        self.scheduler.expired().await;
        self.dispatch()
    }

    /// Wait until the latest search has been rendered
    pub async fn settle(&mut self) {
        while self.is_searching() {
            match self.next_completion().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => return,
            }
        }
    }

    /// Run the widget event loop until the event channel closes
    ///
    /// `on_change` is called with the page after every event, dispatched
    /// search or rendered completion. Searches still in flight when the
    /// input ends are awaited and rendered before returning.
    pub async fn run<F>(mut self, mut events: mpsc::Receiver<Event>, mut on_change: F) -> Page
    where
        F: FnMut(&Page),
    {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        self.handle(event);
                        on_change(self.page());
                    }
                    None => break,
                },
                _ = self.scheduler.expired() => {
                    self.dispatch();
                    on_change(self.page());
                }
                Some(completion) = self.completions_rx.recv() => {
                    if self.apply(completion) {
                        on_change(self.page());
                    }
                }
            }
        }

        if self.scheduler.is_pending() {
            self.fire_pending().await;
            on_change(self.page());
        }
        if self.is_searching() {
            self.settle().await;
            on_change(self.page());
        }
        self.renderer.page().clone()
    }
}
