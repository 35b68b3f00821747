//! Canned video search and the seeded recommendation catalog.

use async_trait::async_trait;
use uuid::Uuid;

use super::{ServiceError, VideoSearch};
use crate::models::{Difficulty, VideoRecommendation};

pub struct CannedVideoSearch;

#[async_trait]
impl VideoSearch for CannedVideoSearch {
    async fn search(&self, query: &str) -> Result<Vec<VideoRecommendation>, ServiceError> {
        Ok(results_for(query))
    }
}

/// The two template results returned for any query, tutorial first.
#[must_use]
pub fn results_for(query: &str) -> Vec<VideoRecommendation> {
    vec![
        VideoRecommendation {
            id: Uuid::new_v4().to_string(),
            title: format!("{query} - Complete Tutorial"),
            channel: "Educational Content".into(),
            duration: "20:15".into(),
            views: "850K".into(),
            likes: "25K".into(),
            rating: 4.5,
            thumbnail: "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?w=300&h=200&fit=crop".into(),
            description: format!("Comprehensive tutorial covering {query} with examples and practice problems."),
            difficulty: Difficulty::Intermediate,
            topics: vec![query.to_string()],
            url: "https://youtube.com/watch?v=search".into(),
        },
        VideoRecommendation {
            id: Uuid::new_v4().to_string(),
            title: format!("{query} for Beginners"),
            channel: "Learn Easy".into(),
            duration: "12:30".into(),
            views: "500K".into(),
            likes: "18K".into(),
            rating: 4.3,
            thumbnail: "https://images.unsplash.com/photo-1553729459-efe14ef6055d?w=300&h=200&fit=crop".into(),
            description: format!("Perfect starting point for learning {query} from scratch."),
            difficulty: Difficulty::Beginner,
            topics: vec![query.to_string(), "Beginner".into()],
            url: "https://youtube.com/watch?v=beginner".into(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: &str,
    title: &str,
    channel: &str,
    duration: &str,
    views: &str,
    likes: &str,
    rating: f32,
    thumbnail: &str,
    description: &str,
    difficulty: Difficulty,
    topics: &[&str],
    url: &str,
) -> VideoRecommendation {
    VideoRecommendation {
        id: id.into(),
        title: title.into(),
        channel: channel.into(),
        duration: duration.into(),
        views: views.into(),
        likes: likes.into(),
        rating,
        thumbnail: thumbnail.into(),
        description: description.into(),
        difficulty,
        topics: topics.iter().map(|t| (*t).to_string()).collect(),
        url: url.into(),
    }
}

/// The four recommendations every recommender panel starts with.
#[must_use]
pub fn seeded_catalog() -> Vec<VideoRecommendation> {
    vec![
        seeded(
            "1",
            "Machine Learning Explained - A Complete Beginner's Guide",
            "Tech Education Hub",
            "15:24",
            "1.2M",
            "45K",
            4.8,
            "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=300&h=200&fit=crop",
            "Perfect introduction to machine learning concepts with real-world examples and easy-to-understand explanations.",
            Difficulty::Beginner,
            &["Machine Learning", "AI", "Data Science"],
            "https://youtube.com/watch?v=example1",
        ),
        seeded(
            "2",
            "Advanced Calculus: Derivatives and Applications",
            "Math Masters",
            "28:45",
            "890K",
            "32K",
            4.9,
            "https://images.unsplash.com/photo-1509228627152-72ae9ae6848d?w=300&h=200&fit=crop",
            "Deep dive into calculus derivatives with step-by-step problem solving and practical applications.",
            Difficulty::Advanced,
            &["Calculus", "Mathematics", "Derivatives"],
            "https://youtube.com/watch?v=example2",
        ),
        seeded(
            "3",
            "Photosynthesis Process - Biology Explained",
            "Biology Simplified",
            "12:33",
            "2.1M",
            "78K",
            4.7,
            "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=300&h=200&fit=crop",
            "Complete explanation of photosynthesis with animations and diagrams to help you understand the process.",
            Difficulty::Intermediate,
            &["Biology", "Photosynthesis", "Plant Science"],
            "https://youtube.com/watch?v=example3",
        ),
        seeded(
            "4",
            "World War II: Key Events and Timeline",
            "History Channel Education",
            "35:12",
            "1.8M",
            "56K",
            4.6,
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=300&h=200&fit=crop",
            "Comprehensive overview of World War II major events, battles, and historical significance.",
            Difficulty::Intermediate,
            &["History", "World War II", "Timeline"],
            "https://youtube.com/watch?v=example4",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_tag_query() {
        let results = results_for("Thermodynamics");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|v| v.has_topic("Thermodynamics")));
        assert_eq!(results[0].title, "Thermodynamics - Complete Tutorial");
        assert_eq!(results[1].difficulty, Difficulty::Beginner);
    }

    #[test]
    fn catalog_has_four_distinct_entries() {
        let catalog = seeded_catalog();
        assert_eq!(catalog.len(), 4);
        let ids: Vec<&str> = catalog.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }
}
