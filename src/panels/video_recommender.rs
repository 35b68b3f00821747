//! Video recommender panel: search plus difficulty and length filters.

use std::sync::{Arc, Mutex};

use tracing::info;

use super::{Submission, lock, reject, settle};
use crate::config::EdulinkConfig;
use crate::error::{PanelError, require};
use crate::job::{Delay, SimulatedJob, no_progress};
use crate::models::{VideoFilter, VideoRecommendation};
use crate::notice::Notices;
use crate::services::VideoSearch;
use crate::services::videos::seeded_catalog;

const FAILED: &str = "Search Failed";
const PANEL: &str = "video_recommender";

pub struct VideoRecommender {
    query: Mutex<String>,
    filter: Mutex<VideoFilter>,
    videos: Mutex<Vec<VideoRecommendation>>,
    notices: Notices,
    job: SimulatedJob,
    search: Arc<dyn VideoSearch>,
    delay: Delay,
}

impl VideoRecommender {
    #[must_use]
    pub fn new(search: Arc<dyn VideoSearch>, config: &EdulinkConfig) -> Self {
        Self {
            query: Mutex::new(String::new()),
            filter: Mutex::new(VideoFilter::default()),
            videos: Mutex::new(seeded_catalog()),
            notices: Notices::new(),
            job: SimulatedJob::new(PANEL, config.job_timeout),
            search,
            delay: config.video_search(),
        }
    }

    #[must_use]
    pub fn query(&self) -> String {
        lock(&self.query).clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        *lock(&self.query) = query.into();
    }

    #[must_use]
    pub fn filter(&self) -> VideoFilter {
        *lock(&self.filter)
    }

    pub fn set_filter(&self, filter: VideoFilter) {
        *lock(&self.filter) = filter;
    }

    /// Every recommendation, newest search results first.
    #[must_use]
    pub fn videos(&self) -> Vec<VideoRecommendation> {
        lock(&self.videos).clone()
    }

    /// Recommendations passing the current filter.
    #[must_use]
    pub fn visible(&self) -> Vec<VideoRecommendation> {
        let filter = self.filter();
        lock(&self.videos).iter().filter(|v| filter.matches(v)).cloned().collect()
    }

    #[must_use]
    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    #[must_use]
    pub fn job(&self) -> &SimulatedJob {
        &self.job
    }

    pub fn unmount(&self) {
        self.job.cancel();
    }

    /// Search for the current query and prepend the results.
    ///
    /// # Errors
    ///
    /// `MissingField` when the query is blank; `Service` if the search fails.
    pub async fn search(&self) -> Result<Submission<Vec<VideoRecommendation>>, PanelError> {
        if self.job.is_pending() {
            return Ok(Submission::Ignored);
        }
        let raw = self.query();
        let query = match require(&raw, || {
            PanelError::missing("query", "Search Query Required", "Please enter a topic to search for videos.")
        }) {
            Ok(q) => q.to_string(),
            Err(e) => return reject(PANEL, &self.notices, e),
        };

        let Some(flight) = self.job.try_begin() else {
            return Ok(Submission::Ignored);
        };
        info!(%query, "video_recommender: searching");

        let outcome = self
            .job
            .run(&flight, &self.delay, &mut no_progress, self.search.search(&query))
            .await;
        let submission = settle(PANEL, FAILED, &self.notices, outcome)?;

        if let Submission::Completed(found) = &submission {
            info!(%query, found = found.len(), "video_recommender: results");
            let mut videos = lock(&self.videos);
            let older = std::mem::take(&mut *videos);
            *videos = found.iter().cloned().chain(older).collect();
        }
        drop(flight);
        Ok(submission)
    }
}

#[cfg(test)]
#[path = "video_recommender_test.rs"]
mod video_recommender_test;
