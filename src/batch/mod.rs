//! Bounded-concurrency batch resolution.
//!
//! Given a list of artist names, drives the Resolver (through the cache)
//! with a fixed-size worker pool, collects one outcome per usable query,
//! and returns the rows in submission order. Completion order is unordered;
//! each item carries its submission index through the pipeline and is
//! re-slotted when it finishes, so re-running the same input against the
//! same remote responses yields an identical table.
//!
//! A single item's failure yields exactly one error row and never aborts,
//! retries, or blocks the other items.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::{StreamExt, stream};

use crate::cache::ResolutionCache;
use crate::resolver::{ArtistApi, Outcome, Resolver};

/// Default worker-pool size. The remote API documents no concurrency
/// allowance, so the fan-out stays modest by default.
pub const DEFAULT_CONCURRENCY: usize = 6;

/// Upper bound on the worker pool, matching the interactive slider's range.
pub const MAX_CONCURRENCY: usize = 16;

/// Error reason recorded for queries skipped after cancellation.
pub const CANCELLED_REASON: &str = "cancelled";

/// Pairing of an input query with its terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub search_term: String,
    pub outcome: Outcome,
}

/// Cooperative cancellation flag shared with in-flight workers.
///
/// Once signaled, workers finish the call they are on and queries that have
/// not started yet short-circuit to an error row - the output table still
/// has one row per usable query. Already-issued network calls are not
/// aborted early.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Filter raw multi-line input down to usable artist names: trim each line,
/// drop blank lines and `#` comments.
pub fn clean_artist_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Single-lookup path: the batch pipeline with a batch of one.
pub async fn resolve_one<A: ArtistApi>(
    resolver: &Resolver<A>,
    cache: &ResolutionCache,
    name: &str,
) -> Outcome {
    cache.get_or_resolve(name, || resolver.resolve(name)).await
}

/// Resolve every usable query with at most `concurrency` resolver calls in
/// flight, reporting `(completed, total)` after each item finishes.
///
/// The returned rows follow the submission order of the input, regardless
/// of completion order. `concurrency` is clamped to 1..=[`MAX_CONCURRENCY`].
pub async fn run_batch<A, F>(
    resolver: &Resolver<A>,
    cache: &ResolutionCache,
    queries: &[String],
    concurrency: usize,
    cancel: &CancelToken,
    mut on_progress: F,
) -> Vec<ResultRow>
where
    A: ArtistApi,
    F: FnMut(usize, usize),
{
    let concurrency = concurrency.clamp(1, MAX_CONCURRENCY);

    // Ingestion is expected to have filtered the input already; re-validate
    // here so a stray blank or comment line can't reach the network.
    let usable: Vec<String> = queries
        .iter()
        .map(|q| q.trim())
        .filter(|q| !q.is_empty() && !q.starts_with('#'))
        .map(str::to_string)
        .collect();

    let total = usable.len();
    let mut rows: Vec<Option<ResultRow>> = vec![None; total];

    let mut outcomes = stream::iter(usable.into_iter().enumerate())
        .map(|(index, term)| {
            let cancel = cancel.clone();
            async move {
                let outcome = if cancel.is_cancelled() {
                    Outcome::Error(CANCELLED_REASON.to_string())
                } else {
                    cache.get_or_resolve(&term, || resolver.resolve(&term)).await
                };
                (index, ResultRow { search_term: term, outcome })
            }
        })
        .buffer_unordered(concurrency);

    let mut completed = 0;
    while let Some((index, row)) = outcomes.next().await {
        completed += 1;
        on_progress(completed, total);
        rows[index] = Some(row);
    }

    rows.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::traits::mocks::MockArtistApi;
    use std::sync::atomic::Ordering as AtomicOrdering;
    use std::time::Duration;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Resolver plus a handle on its instrumented mock.
    fn resolver_for_abc() -> (Resolver<Arc<MockArtistApi>>, Arc<MockArtistApi>) {
        let api = Arc::new(
            MockArtistApi::no_matches()
                .with_artist("A", MockArtistApi::artist(1, "A"))
                .with_artist("C", MockArtistApi::artist(3, "C"))
                .failing_on("B"),
        );
        (Resolver::new(api.clone()), api)
    }

    #[test]
    fn test_clean_artist_list_filters_blank_and_comment_lines() {
        let raw = "Rihanna\n\n# headliners below\n  Tycho  \n   \nSeal";
        assert_eq!(clean_artist_list(raw), strings(&["Rihanna", "Tycho", "Seal"]));
    }

    #[tokio::test]
    async fn test_rows_follow_submission_order_and_isolate_failures() {
        let (resolver, _api) = resolver_for_abc();
        let cache = ResolutionCache::default();

        let rows = run_batch(
            &resolver,
            &cache,
            &strings(&["A", "B", "C"]),
            2,
            &CancelToken::new(),
            |_, _| {},
        )
        .await;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].search_term, "A");
        assert_eq!(rows[1].search_term, "B");
        assert_eq!(rows[2].search_term, "C");

        assert_eq!(rows[0].outcome.artist().unwrap().id, 1);
        assert!(rows[1].outcome.error_reason().is_some());
        assert_eq!(rows[2].outcome.artist().unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_concurrency_bound_is_respected() {
        let names: Vec<String> = (0..12).map(|i| format!("artist-{i}")).collect();
        let mut api = MockArtistApi::no_matches().with_delay(Duration::from_millis(20));
        for (i, name) in names.iter().enumerate() {
            api = api.with_artist(name, MockArtistApi::artist(i as u64 + 1, name));
        }
        let api = Arc::new(api);
        let resolver = Resolver::new(api.clone());
        let cache = ResolutionCache::default();

        let rows = run_batch(&resolver, &cache, &names, 3, &CancelToken::new(), |_, _| {}).await;

        assert_eq!(rows.len(), 12);
        let high_water = api.high_water.load(AtomicOrdering::SeqCst);
        assert!(high_water <= 3, "high-water mark {high_water} exceeds bound");
        assert_eq!(high_water, 3, "pool should saturate with 12 queued items");
    }

    #[tokio::test]
    async fn test_progress_is_monotonic_and_complete() {
        let (resolver, _api) = resolver_for_abc();
        let cache = ResolutionCache::default();
        let mut reports = Vec::new();

        run_batch(
            &resolver,
            &cache,
            &strings(&["A", "B", "C"]),
            3,
            &CancelToken::new(),
            |done, total| reports.push((done, total)),
        )
        .await;

        assert_eq!(reports, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[tokio::test]
    async fn test_blank_and_comment_queries_never_reach_resolution() {
        let (resolver, api) = resolver_for_abc();
        let cache = ResolutionCache::default();

        let rows = run_batch(
            &resolver,
            &cache,
            &strings(&["A", "", "   ", "# comment", "C"]),
            2,
            &CancelToken::new(),
            |_, _| {},
        )
        .await;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].search_term, "A");
        assert_eq!(rows[1].search_term, "C");
        assert_eq!(api.search_calls.load(AtomicOrdering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_identical_inputs_yield_identical_tables() {
        let (resolver, _api) = resolver_for_abc();
        let queries = strings(&["A", "B", "C", "A"]);

        // Fresh cache per run so both runs exercise the full pipeline.
        let first = run_batch(
            &resolver,
            &ResolutionCache::default(),
            &queries,
            4,
            &CancelToken::new(),
            |_, _| {},
        )
        .await;
        let second = run_batch(
            &resolver,
            &ResolutionCache::default(),
            &queries,
            4,
            &CancelToken::new(),
            |_, _| {},
        )
        .await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_duplicate_queries_get_their_own_rows() {
        let api =
            Arc::new(MockArtistApi::no_matches().with_artist("A", MockArtistApi::artist(1, "A")));
        let resolver = Resolver::new(api.clone());
        let cache = ResolutionCache::default();

        let rows = run_batch(
            &resolver,
            &cache,
            &strings(&["A", "A"]),
            1,
            &CancelToken::new(),
            |_, _| {},
        )
        .await;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
        // With one worker the second lookup is a cache hit.
        assert_eq!(api.search_calls.load(AtomicOrdering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits_without_network_calls() {
        let (resolver, api) = resolver_for_abc();
        let cache = ResolutionCache::default();
        let cancel = CancelToken::new();
        cancel.cancel();

        let rows = run_batch(
            &resolver,
            &cache,
            &strings(&["A", "B", "C"]),
            2,
            &cancel,
            |_, _| {},
        )
        .await;

        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.outcome, Outcome::Error(CANCELLED_REASON.to_string()));
        }
        assert_eq!(api.search_calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_concurrency_is_clamped_to_one() {
        let (resolver, _api) = resolver_for_abc();
        let cache = ResolutionCache::default();

        let rows = run_batch(
            &resolver,
            &cache,
            &strings(&["A"]),
            0,
            &CancelToken::new(),
            |_, _| {},
        )
        .await;

        assert_eq!(rows.len(), 1);
        assert!(rows[0].outcome.is_found());
    }

    #[tokio::test]
    async fn test_resolve_one_uses_the_cache() {
        let api =
            Arc::new(MockArtistApi::no_matches().with_artist("u2", MockArtistApi::artist(12, "U2")));
        let resolver = Resolver::new(api.clone());
        let cache = ResolutionCache::default();

        let first = resolve_one(&resolver, &cache, "u2").await;
        let second = resolve_one(&resolver, &cache, "U2 ").await;

        assert_eq!(first, second);
        assert_eq!(api.search_calls.load(AtomicOrdering::SeqCst), 1);
    }
}
