//! Canned test author: template questions driven by the requested counts.
//!
//! Question ids run `q1`, `q2`, ... in kind order. Points per kind:
//!
//! | kind            | practice | assessment |
//! |-----------------|----------|------------|
//! | multiple choice | 2        | 2          |
//! | true/false      | n/a      | 1          |
//! | short answer    | 5        | 3          |
//! | long answer     | 15       | n/a        |
//! | essay           | n/a      | 10         |

use async_trait::async_trait;
use uuid::Uuid;

use super::{AssessmentRequest, PracticeTestRequest, ServiceError, TestAuthor};
use crate::models::{GeneratedTest, Question, QuestionKind, Test, TestStatus};

pub const MCQ_POINTS: u32 = 2;
pub const TRUE_FALSE_POINTS: u32 = 1;
pub const PRACTICE_SHORT_POINTS: u32 = 5;
pub const PRACTICE_LONG_POINTS: u32 = 15;
pub const ASSESSMENT_SHORT_POINTS: u32 = 3;
pub const ESSAY_POINTS: u32 = 10;

pub struct CannedTestAuthor;

#[async_trait]
impl TestAuthor for CannedTestAuthor {
    async fn practice_test(&self, request: &PracticeTestRequest) -> Result<GeneratedTest, ServiceError> {
        Ok(practice_test(request))
    }

    async fn assessment(&self, request: &AssessmentRequest) -> Result<Test, ServiceError> {
        Ok(assessment(request))
    }
}

/// Sequential `q{n}` ids across every kind of a single test.
struct IdSeq(u32);

impl IdSeq {
    fn next(&mut self) -> String {
        self.0 += 1;
        format!("q{}", self.0)
    }
}

#[must_use]
pub fn practice_test(req: &PracticeTestRequest) -> GeneratedTest {
    let topic = &req.topic;
    let mut ids = IdSeq(0);
    let mut questions = Vec::new();

    for n in 1..=req.mcq_count {
        let options: Vec<String> = ["Option A", "Option B", "Option C", "Option D"].map(String::from).to_vec();
        questions.push(
            Question::new(
                ids.next(),
                QuestionKind::MultipleChoice,
                format!("Which of the following best describes {topic}? (Question {n})"),
                MCQ_POINTS,
            )
            .with_correct_answer(options[0].clone())
            .with_options(options),
        );
    }
    for n in 1..=req.short_answer_count {
        questions.push(Question::new(
            ids.next(),
            QuestionKind::ShortAnswer,
            format!("Explain the key concepts of {topic} in 2-3 sentences. (Short Answer {n})"),
            PRACTICE_SHORT_POINTS,
        ));
    }
    for n in 1..=req.long_answer_count {
        questions.push(Question::new(
            ids.next(),
            QuestionKind::LongAnswer,
            format!(
                "Provide a detailed analysis of {topic} including its applications and significance. (Long Answer {n})"
            ),
            PRACTICE_LONG_POINTS,
        ));
    }

    GeneratedTest {
        id: format!("practice_{}", Uuid::new_v4().simple()),
        topic: topic.clone(),
        difficulty: req.difficulty,
        duration_minutes: req.duration_minutes,
        questions,
    }
}

#[must_use]
pub fn assessment(req: &AssessmentRequest) -> Test {
    let topic = &req.topic;
    let mut ids = IdSeq(0);
    let mut questions = Vec::new();

    for n in 1..=req.mcq_count {
        let correct = format!("Correct answer about {topic}");
        questions.push(
            Question::new(
                ids.next(),
                QuestionKind::MultipleChoice,
                format!("Which of the following best describes {topic}? (Question {n})"),
                MCQ_POINTS,
            )
            .with_options(vec![
                correct.clone(),
                "Incorrect option A".into(),
                "Incorrect option B".into(),
                "Incorrect option C".into(),
            ])
            .with_correct_answer(correct),
        );
    }
    for n in 1..=req.true_false_count {
        questions.push(
            Question::new(
                ids.next(),
                QuestionKind::TrueFalse,
                format!("{topic} is an important concept in this field. (T/F {n})"),
                TRUE_FALSE_POINTS,
            )
            .with_options(vec!["True".into(), "False".into()])
            .with_correct_answer("True"),
        );
    }
    for n in 1..=req.short_answer_count {
        questions.push(Question::new(
            ids.next(),
            QuestionKind::ShortAnswer,
            format!("Briefly explain the key aspects of {topic}. (Short Answer {n})"),
            ASSESSMENT_SHORT_POINTS,
        ));
    }
    for n in 1..=req.essay_count {
        questions.push(Question::new(
            ids.next(),
            QuestionKind::Essay,
            format!("Write a comprehensive essay about {topic}, discussing its importance and applications. (Essay {n})"),
            ESSAY_POINTS,
        ));
    }

    Test {
        id: format!("test_{}", Uuid::new_v4().simple()),
        title: format!("{topic} Assessment"),
        subject: topic.clone(),
        difficulty: req.difficulty,
        questions,
        duration_minutes: req.duration_minutes,
        created_at: crate::models::now(),
        status: TestStatus::Draft,
        assigned_to: Vec::new(),
    }
}

#[cfg(test)]
#[path = "test_author_test.rs"]
mod test_author_test;
