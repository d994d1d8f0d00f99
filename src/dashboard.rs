//! Aggregate sentiment statistics across every act.

use futures::stream::{self, StreamExt};

use crate::client::ActsClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{ActDetails, ActName};
use crate::sentiment::{SentimentBadge, SentimentTally};
use crate::traits::HttpClient;

/// Upper bound on `/fetch` requests in flight during [`DashboardStats::collect`].
pub const MAX_CONCURRENT_FETCHES: usize = 4;

/// One row of the per-act overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActOverview {
    pub act: ActName,
    pub overall: SentimentBadge,
    pub comment_count: usize,
    pub tally: SentimentTally,
}

impl ActOverview {
    pub fn from_details(details: &ActDetails) -> Self {
        Self {
            act: details.act.clone(),
            overall: SentimentBadge::new(details.overall_sentiment.clone()),
            comment_count: details.comments.len(),
            tally: SentimentTally::from_labels(details.comment_labels()),
        }
    }
}

/// Totals over all acts the backend lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Acts the backend listed, including ones whose details failed
    pub total_acts: usize,
    pub total_comments: usize,
    /// Comment sentiments across every act that loaded
    pub tally: SentimentTally,
    /// Loaded acts, in list order
    pub per_act: Vec<ActOverview>,
    /// Acts whose details could not be fetched
    pub failed_acts: Vec<(ActName, ApiError)>,
}

impl DashboardStats {
    /// Fold per-act fetch results, paired with the act names in list order.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (ActName, ApiResult<ActDetails>)>,
    {
        let mut stats = Self::default();
        for (act, result) in results {
            stats.total_acts += 1;
            match result {
                Ok(details) => {
                    let overview = ActOverview::from_details(&details);
                    stats.total_comments += overview.comment_count;
                    stats.tally.merge(&overview.tally);
                    stats.per_act.push(overview);
                }
                Err(err) => stats.failed_acts.push((act, err)),
            }
        }
        stats
    }

    /// List acts, fetch each act's details with at most
    /// [`MAX_CONCURRENT_FETCHES`] in flight, and tally.
    ///
    /// Results stay in list order. A failed listing fails the whole call. A
    /// failed detail fetch is recorded in `failed_acts` and the remaining
    /// acts still count.
    pub async fn collect<C: HttpClient>(client: &ActsClient<C>) -> ApiResult<Self> {
        let acts = client.list_acts().await?;
        let results: Vec<ApiResult<ActDetails>> =
            stream::iter(acts.iter().map(|act| client.fetch_act_details(act)))
                .buffered(MAX_CONCURRENT_FETCHES)
                .collect()
                .await;

        let stats = Self::from_results(acts.into_iter().zip(results));
        for (act, err) in &stats.failed_acts {
            tracing::warn!(%act, error_code = err.error_code(), "Skipping act in dashboard");
        }
        tracing::debug!(
            acts = stats.total_acts,
            comments = stats.total_comments,
            "Dashboard statistics collected"
        );
        Ok(stats)
    }

    pub fn loaded_acts(&self) -> usize {
        self.per_act.len()
    }
}
