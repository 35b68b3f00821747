//! Canned document analyzer and the seeded sample document.

use async_trait::async_trait;
use rand::Rng;
use rand::seq::IndexedRandom;
use uuid::Uuid;

use super::{DocumentAnalyzer, ServiceError};
use crate::models::{AnalyzedDocument, ChoiceQuestion, Difficulty, QuestionSet, UploadedFile, WrittenQuestion};

pub struct CannedAnalyzer;

#[async_trait]
impl DocumentAnalyzer for CannedAnalyzer {
    async fn analyze(&self, file: &UploadedFile) -> Result<AnalyzedDocument, ServiceError> {
        let (reading_minutes, difficulty) = {
            let mut rng = rand::rng();
            let minutes = rng.random_range(5..=19);
            let difficulty = Difficulty::ALL.choose(&mut rng).copied().unwrap_or_default();
            (minutes, difficulty)
        };
        Ok(analysis_of(file, reading_minutes, difficulty))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Template analysis for an uploaded file.
#[must_use]
pub fn analysis_of(file: &UploadedFile, reading_minutes: u32, difficulty: Difficulty) -> AnalyzedDocument {
    AnalyzedDocument {
        id: Uuid::new_v4().to_string(),
        name: file.name.clone(),
        size_label: file.size_label(),
        uploaded_at: crate::models::now(),
        summary: "This newly uploaded document has been analyzed using advanced AI techniques. The content covers \
                  important academic topics with detailed explanations and examples that are relevant for students \
                  at various levels."
            .into(),
        key_points: strings(&[
            "Key concept 1 extracted from the document",
            "Important principle 2 identified in the text",
            "Critical information 3 found in the analysis",
            "Relevant detail 4 highlighted by the AI",
            "Essential point 5 summarized from content",
        ]),
        questions: QuestionSet {
            mcq: vec![ChoiceQuestion {
                prompt: "Based on the document content, which statement is most accurate?".into(),
                options: strings(&["Option A", "Option B", "Option C", "Option D"]),
                correct: 1,
            }],
            short: vec![WrittenQuestion { prompt: "Summarize the main argument presented in the document.".into(), points: 5 }],
            long: vec![WrittenQuestion {
                prompt: "Provide a detailed analysis of the key concepts discussed in this document.".into(),
                points: 15,
            }],
        },
        reading_minutes,
        difficulty,
    }
}

/// The document every analyzer panel starts with.
#[must_use]
pub fn seeded_documents() -> Vec<AnalyzedDocument> {
    let uploaded_at = time::macros::datetime!(2024-01-15 00:00 UTC);
    vec![AnalyzedDocument {
        id: "1".into(),
        name: "Introduction to Machine Learning.pdf".into(),
        size_label: "2.4 MB".into(),
        uploaded_at,
        summary: "This document provides a comprehensive introduction to machine learning, covering fundamental \
                  concepts including supervised learning, unsupervised learning, and reinforcement learning. It \
                  discusses various algorithms such as linear regression, decision trees, and neural networks, along \
                  with their practical applications in real-world scenarios."
            .into(),
        key_points: strings(&[
            "Machine learning is a subset of artificial intelligence",
            "Three main types: supervised, unsupervised, and reinforcement learning",
            "Common algorithms include regression, classification, and clustering",
            "Applications span across industries like healthcare, finance, and technology",
            "Data quality and preprocessing are crucial for model performance",
        ]),
        questions: QuestionSet {
            mcq: vec![
                ChoiceQuestion {
                    prompt: "Which of the following is NOT a type of machine learning?".into(),
                    options: strings(&[
                        "Supervised Learning",
                        "Unsupervised Learning",
                        "Reinforcement Learning",
                        "Deterministic Learning",
                    ]),
                    correct: 3,
                },
                ChoiceQuestion {
                    prompt: "What is the primary goal of supervised learning?".into(),
                    options: strings(&[
                        "Find hidden patterns",
                        "Learn from labeled data",
                        "Optimize rewards",
                        "Reduce dimensions",
                    ]),
                    correct: 1,
                },
            ],
            short: vec![
                WrittenQuestion {
                    prompt: "Explain the difference between supervised and unsupervised learning.".into(),
                    points: 5,
                },
                WrittenQuestion { prompt: "Name three common applications of machine learning in business.".into(), points: 5 },
            ],
            long: vec![WrittenQuestion {
                prompt: "Discuss the importance of data preprocessing in machine learning and provide examples of \
                         common preprocessing techniques."
                    .into(),
                points: 15,
            }],
        },
        reading_minutes: 12,
        difficulty: Difficulty::Intermediate,
    }]
}
