//! Event list controller: filters and fetch lifecycle as a reducer.
//!
//! `update` is a pure transition `(state, event) -> (state, Option<FetchRequest>)`.
//! The shell performs the requested fetch and feeds the outcome back as
//! `FetchResolved` / `FetchRejected`. Outcomes are applied only when the
//! snapshot they were fetched for is still the current one.

use crate::fetch::FetchCompletion;
use crate::model::{
    EventRecord, FetchError, FilterPatch, FilterState, PageNavigation, PageWindow, ResultsPage,
};
use tracing::debug;

// ===== LoadingState =====

/// Fetch lifecycle. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadingState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch for the current filters is in flight.
    Loading,
    /// The latest fetch for the current filters succeeded.
    Loaded(ResultsPage),
    /// The latest fetch for the current filters failed.
    Failed(Vec<FetchError>),
}

// ===== Events and commands =====

/// Inputs to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Initial fetch with the default filters.
    Mount,
    /// Merge a partial filter update.
    FilterPatch(FilterPatch),
    /// Move between pages, clamped to the known page range.
    Navigate(PageNavigation),
    /// Fetch the current filters again. Ignored while a fetch is in flight.
    Refresh,
    /// A fetch succeeded.
    FetchResolved {
        /// Snapshot the request was built from.
        filters: FilterState,
        /// The page returned.
        page: ResultsPage,
    },
    /// A fetch failed.
    FetchRejected {
        /// Snapshot the request was built from.
        filters: FilterState,
        /// Why it failed.
        error: FetchError,
    },
}

impl From<FetchCompletion> for ControllerEvent {
    fn from(completion: FetchCompletion) -> Self {
        match completion.outcome {
            Ok(page) => ControllerEvent::FetchResolved {
                filters: completion.filters,
                page,
            },
            Err(error) => ControllerEvent::FetchRejected {
                filters: completion.filters,
                error,
            },
        }
    }
}

/// Side effect requested by a transition: fetch this snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Filters to fetch.
    pub filters: FilterState,
}

// ===== EventListState =====

/// Single source of truth for the event list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListState {
    title: String,
    filters: FilterState,
    loading: LoadingState,
}

impl EventListState {
    /// New state in `Idle` with the given title and initial filters.
    pub fn new(title: impl Into<String>, filters: FilterState) -> Self {
        Self {
            title: title.into(),
            filters,
            loading: LoadingState::Idle,
        }
    }

    /// Screen title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current filter snapshot.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current fetch lifecycle state.
    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    /// Pagination window for the loaded page, if any.
    pub fn page_window(&self) -> Option<PageWindow> {
        match &self.loading {
            LoadingState::Loaded(page) => Some(PageWindow::compute(
                page.page,
                page.page_size,
                page.total_results,
            )),
            _ => None,
        }
    }

    /// Read-only projection handed to the presentation layer.
    ///
    /// Errors, loading and results are mutually exclusive: at most one of
    /// `errors`, `loading` and `results` is non-empty/true.
    pub fn view(&self) -> EventListView<'_> {
        let loading = matches!(self.loading, LoadingState::Loading);
        let errors: &[FetchError] = match &self.loading {
            LoadingState::Failed(errors) => errors.as_slice(),
            _ => &[],
        };
        let (results, total_results) = match &self.loading {
            LoadingState::Loaded(page) => (page.results.as_slice(), page.total_results),
            _ => (&[][..], 0),
        };

        EventListView {
            title: &self.title,
            filters: &self.filters,
            loading,
            errors,
            results,
            total_results,
            window: self.page_window(),
        }
    }

    fn start_fetch(self, filters: FilterState) -> (Self, Option<FetchRequest>) {
        let request = FetchRequest {
            filters: filters.clone(),
        };
        let next = Self {
            filters,
            loading: LoadingState::Loading,
            ..self
        };
        (next, Some(request))
    }

    /// Target page for `nav`, or `None` when the page range is unknown.
    fn navigation_target(&self, nav: PageNavigation) -> Option<u32> {
        let current = self.filters.page();
        match self.page_window() {
            Some(window) => Some(window.navigate(current, nav)),
            None => match nav {
                PageNavigation::First => Some(1),
                PageNavigation::Prev => Some(current.saturating_sub(1).max(1)),
                PageNavigation::Next | PageNavigation::Last => None,
            },
        }
    }
}

/// What the presentation layer renders. Recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventListView<'a> {
    /// Screen title.
    pub title: &'a str,
    /// Current filters.
    pub filters: &'a FilterState,
    /// Whether a fetch for the current filters is in flight.
    pub loading: bool,
    /// Errors from the latest fetch.
    pub errors: &'a [FetchError],
    /// Records of the loaded page.
    pub results: &'a [EventRecord],
    /// Total records for the current filters (0 unless loaded).
    pub total_results: u64,
    /// Pagination window (only when loaded).
    pub window: Option<PageWindow>,
}

// ===== Transition =====

/// Apply `event` to `state`.
///
/// Returns the next state and, when the transition needs one, the fetch the
/// shell must start.
pub fn update(state: EventListState, event: ControllerEvent) -> (EventListState, Option<FetchRequest>) {
    match event {
        ControllerEvent::Mount => {
            if state.loading != LoadingState::Idle {
                return (state, None);
            }
            let filters = state.filters.clone();
            state.start_fetch(filters)
        }

        ControllerEvent::FilterPatch(patch) => {
            let merged = state.filters.merge(&patch);
            if merged == state.filters {
                return (state, None);
            }
            state.start_fetch(merged)
        }

        ControllerEvent::Navigate(nav) => match state.navigation_target(nav) {
            Some(page) => update(state, ControllerEvent::FilterPatch(FilterPatch::page(page))),
            None => (state, None),
        },

        ControllerEvent::Refresh => {
            // A second request for the same snapshot would pass the guard too.
            if state.loading == LoadingState::Loading {
                return (state, None);
            }
            let filters = state.filters.clone();
            state.start_fetch(filters)
        }

        ControllerEvent::FetchResolved { filters, page } => {
            if filters != state.filters {
                debug!(
                    stale_page = filters.page(),
                    current_page = state.filters.page(),
                    "Discarding stale results"
                );
                return (state, None);
            }
            let next = EventListState {
                loading: LoadingState::Loaded(page),
                ..state
            };
            (next, None)
        }

        ControllerEvent::FetchRejected { filters, error } => {
            if filters != state.filters {
                debug!(%error, "Discarding error from stale request");
                return (state, None);
            }
            let next = EventListState {
                loading: LoadingState::Failed(vec![error]),
                ..state
            };
            (next, None)
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
