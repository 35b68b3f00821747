use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    LongAnswer,
    Essay,
}

impl QuestionKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple Choice",
            Self::TrueFalse => "True/False",
            Self::ShortAnswer => "Short Answer",
            Self::LongAnswer => "Long Answer",
            Self::Essay => "Essay",
        }
    }
}

/// A single test question. Never mutated in place: edits go through
/// [`Question::apply`], which returns a changed copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    pub points: u32,
}

/// One field-level change to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionEdit {
    Prompt(String),
    /// Replace the text of the option at `index`. Out-of-range indexes and
    /// questions without options are left unchanged.
    Option { index: usize, text: String },
    Points(u32),
    CorrectAnswer(String),
}

impl Question {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: QuestionKind, prompt: impl Into<String>, points: u32) -> Self {
        Self { id: id.into(), kind, prompt: prompt.into(), options: None, correct_answer: None, points }
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn with_correct_answer(mut self, answer: impl Into<String>) -> Self {
        self.correct_answer = Some(answer.into());
        self
    }

    /// Copy of this question with `edit` applied.
    #[must_use]
    pub fn apply(&self, edit: QuestionEdit) -> Self {
        let mut next = self.clone();
        match edit {
            QuestionEdit::Prompt(text) => next.prompt = text,
            QuestionEdit::Option { index, text } => {
                if let Some(slot) = next.options.as_mut().and_then(|opts| opts.get_mut(index)) {
                    *slot = text;
                }
            }
            QuestionEdit::Points(points) => next.points = points,
            QuestionEdit::CorrectAnswer(answer) => next.correct_answer = Some(answer),
        }
        next
    }
}

/// Sum of question points. The only way a total is ever computed.
#[must_use]
pub fn total_points(questions: &[Question]) -> u32 {
    questions.iter().map(|q| q.points).sum()
}
