//! Results fetching (impure edge).
//!
//! - [`ResultsFetcher`] turns a filter snapshot into one results page.
//! - [`HttpResultsFetcher`] is the reqwest implementation.
//! - [`FetchDispatcher`] runs fetches on a tokio runtime and delivers each
//!   outcome, tagged with the snapshot it was issued for, over a channel
//!   that the UI loop drains.

pub mod http;

pub use http::HttpResultsFetcher;

use crate::model::{FetchError, FilterState, ResultsPage};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Produces one results page for a filter snapshot.
///
/// Implementations issue exactly one request per call, never retry and
/// never cache.
pub trait ResultsFetcher {
    /// Fetch the page described by `filters`.
    fn fetch(
        &self,
        filters: &FilterState,
    ) -> impl Future<Output = Result<ResultsPage, FetchError>> + Send;
}

/// Outcome of one fetch, tagged with the snapshot it was issued for.
///
/// The snapshot is what the staleness guard compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    /// Filters the request was built from.
    pub filters: FilterState,
    /// Page or error.
    pub outcome: Result<ResultsPage, FetchError>,
}

/// Spawns fetches and funnels completions back to a single receiver.
///
/// In-flight requests are never aborted; superseded results are discarded
/// by the receiver instead.
pub struct FetchDispatcher<F> {
    fetcher: Arc<F>,
    runtime: Handle,
    completions: UnboundedSender<FetchCompletion>,
}

impl<F> FetchDispatcher<F>
where
    F: ResultsFetcher + Send + Sync + 'static,
{
    /// Create a dispatcher and the receiver its completions arrive on.
    pub fn new(fetcher: F, runtime: Handle) -> (Self, UnboundedReceiver<FetchCompletion>) {
        let (completions, receiver) = mpsc::unbounded_channel();
        let dispatcher = Self {
            fetcher: Arc::new(fetcher),
            runtime,
            completions,
        };
        (dispatcher, receiver)
    }

    /// Start fetching `filters` in the background.
    pub fn dispatch(&self, filters: FilterState) {
        let fetcher = Arc::clone(&self.fetcher);
        let completions = self.completions.clone();

        debug!(page = filters.page(), "Dispatching fetch");
        self.runtime.spawn(async move {
            let outcome = fetcher.fetch(&filters).await;
            if completions.send(FetchCompletion { filters, outcome }).is_err() {
                debug!("Fetch completed after the receiver was dropped");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    /// Answers page 1 slowly and every other page immediately.
    struct SlowFirstPage;

    impl ResultsFetcher for SlowFirstPage {
        async fn fetch(&self, filters: &FilterState) -> Result<ResultsPage, FetchError> {
            if filters.page() == 1 {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            Ok(ResultsPage::empty(filters.page(), filters.page_size()))
        }
    }

    fn filters(page: u32) -> FilterState {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        FilterState::defaults_for(today, 20).merge(&crate::model::FilterPatch::page(page))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn completions_carry_their_snapshot_in_arrival_order() {
        let (dispatcher, mut receiver) = FetchDispatcher::new(SlowFirstPage, Handle::current());

        dispatcher.dispatch(filters(1));
        dispatcher.dispatch(filters(2));

        let first = receiver.recv().await.expect("first completion");
        let second = receiver.recv().await.expect("second completion");

        assert_eq!(first.filters, filters(2), "fast request should land first");
        assert_eq!(second.filters, filters(1));
        assert_eq!(second.outcome, Ok(ResultsPage::empty(1, 20)));
    }

    #[tokio::test]
    async fn dropped_receiver_does_not_panic_the_task() {
        let (dispatcher, receiver) = FetchDispatcher::new(SlowFirstPage, Handle::current());
        drop(receiver);

        dispatcher.dispatch(filters(2));
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
