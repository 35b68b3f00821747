use serde::Serialize;

use super::Difficulty;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRecommendation {
    pub id: String,
    pub title: String,
    pub channel: String,
    /// `mm:ss` display string.
    pub duration: String,
    pub views: String,
    pub likes: String,
    pub rating: f32,
    pub thumbnail: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub topics: Vec<String>,
    /// Opaque external link, never dereferenced.
    pub url: String,
}

impl VideoRecommendation {
    /// Whole minutes read from the leading number of `duration`.
    #[must_use]
    pub fn duration_minutes(&self) -> Option<u32> {
        let digits: String = self.duration.trim().chars().take_while(char::is_ascii_digit).collect();
        digits.parse().ok()
    }

    #[must_use]
    pub fn has_topic(&self, needle: &str) -> bool {
        self.topics.iter().any(|t| t.contains(needle))
    }
}

/// Length buckets offered by the duration filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthFilter {
    #[default]
    All,
    /// Under 15 minutes.
    Short,
    /// 15 to under 30 minutes.
    Medium,
    /// 30 minutes or more.
    Long,
}

impl LengthFilter {
    #[must_use]
    pub fn matches(self, minutes: Option<u32>) -> bool {
        match (self, minutes) {
            (Self::All, _) => true,
            (_, None) => false,
            (Self::Short, Some(m)) => m < 15,
            (Self::Medium, Some(m)) => (15..30).contains(&m),
            (Self::Long, Some(m)) => m >= 30,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoFilter {
    /// `None` means every difficulty.
    pub difficulty: Option<Difficulty>,
    pub length: LengthFilter,
}

impl VideoFilter {
    #[must_use]
    pub fn with_difficulty(self, difficulty: Option<Difficulty>) -> Self {
        Self { difficulty, ..self }
    }

    #[must_use]
    pub fn with_length(self, length: LengthFilter) -> Self {
        Self { length, ..self }
    }

    #[must_use]
    pub fn matches(&self, video: &VideoRecommendation) -> bool {
        let difficulty_ok = self.difficulty.is_none_or(|d| d == video.difficulty);
        difficulty_ok && self.length.matches(video.duration_minutes())
    }
}
