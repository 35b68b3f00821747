//! Student and teacher dashboards.
//!
//! ARCHITECTURE
//! ============
//! A dashboard is a tab strip over independently owned panels plus static
//! header content (profile, stats, activity). Panels share only their
//! collaborator handles; no panel reads another's state. Switching tabs
//! changes which panel is shown and nothing else, so a job started on one
//! tab keeps running while another is visible.
//!
//! Closing the dashboard calls `unmount`, which cancels every panel's job.
//! Results of a job still in flight at that point are discarded.

use std::sync::Mutex;

use serde::Serialize;
use tracing::info;

use crate::config::EdulinkConfig;
use crate::panels::{ChatPanel, PdfAnalyzer, TestGenerator, TestManager, VideoRecommender, lock};
use crate::services::Collaborators;
use crate::session::TeacherSession;

/// One header stat tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
}

impl StatCard {
    fn new(title: &'static str, value: impl ToString, change: &'static str) -> Self {
        Self { title, value: value.to_string(), change }
    }
}

// =============================================================================
// STUDENT
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudentTab {
    #[default]
    TestGenerator,
    AiChat,
    PdfAnalyzer,
    VideoRecommender,
}

impl StudentTab {
    pub const ALL: [Self; 4] = [Self::TestGenerator, Self::AiChat, Self::PdfAnalyzer, Self::VideoRecommender];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TestGenerator => "Test Generator",
            Self::AiChat => "AI Chat",
            Self::PdfAnalyzer => "PDF Analyzer",
            Self::VideoRecommender => "Videos",
        }
    }
}

/// Static learner profile shown in the student header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentProfile {
    pub name: String,
    pub email: String,
    pub tests_completed: u32,
    pub study_hours: u32,
    pub pdfs_uploaded: u32,
    pub average_score: u32,
    pub current_streak: u32,
    pub level: String,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".into(),
            email: "alex.johnson@student.edu".into(),
            tests_completed: 24,
            study_hours: 156,
            pdfs_uploaded: 18,
            average_score: 87,
            current_streak: 12,
            level: "Advanced".into(),
        }
    }
}

impl StudentProfile {
    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Welcome back, {}!", self.name)
    }

    #[must_use]
    pub fn stats(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Tests Completed", self.tests_completed, "+3 from last week"),
            StatCard::new("Study Hours", format!("{}h", self.study_hours), "+12h from last week"),
            StatCard::new("PDFs Analyzed", self.pdfs_uploaded, "+5 from last week"),
            StatCard::new("Average Score", format!("{}%", self.average_score), ""),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentOverview {
    pub greeting: String,
    pub tagline: &'static str,
    pub level: String,
    pub streak_days: u32,
    pub stats: Vec<StatCard>,
    pub active_tab: StudentTab,
    pub tabs: Vec<&'static str>,
}

pub struct StudentDashboard {
    profile: StudentProfile,
    tab: Mutex<StudentTab>,
    pub test_generator: TestGenerator,
    pub chat: ChatPanel,
    pub pdf_analyzer: PdfAnalyzer,
    pub videos: VideoRecommender,
}

impl StudentDashboard {
    #[must_use]
    pub fn new(collab: &Collaborators, config: &EdulinkConfig) -> Self {
        Self {
            profile: StudentProfile::default(),
            tab: Mutex::new(StudentTab::default()),
            test_generator: TestGenerator::new(collab.tests.clone(), config),
            chat: ChatPanel::new(collab.assistant.clone(), config),
            pdf_analyzer: PdfAnalyzer::new(collab.analyzer.clone(), config),
            videos: VideoRecommender::new(collab.videos.clone(), config),
        }
    }

    #[must_use]
    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    #[must_use]
    pub fn tab(&self) -> StudentTab {
        *lock(&self.tab)
    }

    pub fn select_tab(&self, tab: StudentTab) {
        *lock(&self.tab) = tab;
    }

    #[must_use]
    pub fn overview(&self) -> StudentOverview {
        StudentOverview {
            greeting: self.profile.greeting(),
            tagline: "Continue your learning journey",
            level: self.profile.level.clone(),
            streak_days: self.profile.current_streak,
            stats: self.profile.stats(),
            active_tab: self.tab(),
            tabs: StudentTab::ALL.iter().map(|t| t.label()).collect(),
        }
    }

    /// Cancel every panel's in-flight job.
    pub fn unmount(&self) {
        info!("dashboard: student unmounted");
        self.test_generator.unmount();
        self.chat.unmount();
        self.pdf_analyzer.unmount();
        self.videos.unmount();
    }
}

// =============================================================================
// TEACHER
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeacherTab {
    #[default]
    Tests,
    AiChat,
    PdfAnalyzer,
}

impl TeacherTab {
    pub const ALL: [Self; 3] = [Self::Tests, Self::AiChat, Self::PdfAnalyzer];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tests => "Test Manager",
            Self::AiChat => "AI Assistant",
            Self::PdfAnalyzer => "PDF Analyzer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Test,
    Assignment,
    Pdf,
    Submission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub action: &'static str,
    pub item: &'static str,
    pub time: &'static str,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassScore {
    pub class: &'static str,
    pub percent: u8,
}

#[must_use]
pub fn teacher_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Tests Created", 12, "+3 this month"),
        StatCard::new("Students Taught", 156, "+8 new enrollments"),
        StatCard::new("PDFs Analyzed", 34, "+7 this week"),
        StatCard::new("Avg. Test Score", "85%", "+5% improvement"),
    ]
}

#[must_use]
pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity { action: "Created test", item: "React Fundamentals Quiz", time: "2 hours ago", kind: ActivityKind::Test },
        Activity {
            action: "Assigned test",
            item: "JavaScript Basics to CS101-A",
            time: "4 hours ago",
            kind: ActivityKind::Assignment,
        },
        Activity { action: "Analyzed PDF", item: "Advanced Algorithms.pdf", time: "1 day ago", kind: ActivityKind::Pdf },
        Activity {
            action: "Student submitted",
            item: "Final Project - John Smith",
            time: "2 days ago",
            kind: ActivityKind::Submission,
        },
    ]
}

#[must_use]
pub fn class_performance() -> Vec<ClassScore> {
    vec![
        ClassScore { class: "CS101-A", percent: 92 },
        ClassScore { class: "CS101-B", percent: 87 },
        ClassScore { class: "CS201", percent: 94 },
        ClassScore { class: "CS301", percent: 89 },
    ]
}

pub const QUICK_ACTIONS: [&str; 4] = ["New Test", "Grade Papers", "View Reports", "Settings"];

#[derive(Debug, Clone, Serialize)]
pub struct TeacherOverview {
    pub greeting: String,
    pub subject: String,
    pub school: String,
    pub stats: Vec<StatCard>,
    pub recent_activity: Vec<Activity>,
    pub class_performance: Vec<ClassScore>,
    pub quick_actions: Vec<&'static str>,
    pub active_tab: TeacherTab,
    pub tabs: Vec<&'static str>,
}

pub struct TeacherDashboard {
    session: TeacherSession,
    tab: Mutex<TeacherTab>,
    pub tests: TestManager,
    pub chat: ChatPanel,
    pub pdf_analyzer: PdfAnalyzer,
}

impl TeacherDashboard {
    #[must_use]
    pub fn new(session: TeacherSession, collab: &Collaborators, config: &EdulinkConfig) -> Self {
        Self {
            session,
            tab: Mutex::new(TeacherTab::default()),
            tests: TestManager::new(collab.tests.clone(), config),
            chat: ChatPanel::new(collab.assistant.clone(), config),
            pdf_analyzer: PdfAnalyzer::new(collab.analyzer.clone(), config),
        }
    }

    #[must_use]
    pub fn session(&self) -> &TeacherSession {
        &self.session
    }

    #[must_use]
    pub fn tab(&self) -> TeacherTab {
        *lock(&self.tab)
    }

    pub fn select_tab(&self, tab: TeacherTab) {
        *lock(&self.tab) = tab;
    }

    #[must_use]
    pub fn overview(&self) -> TeacherOverview {
        TeacherOverview {
            greeting: self.session.greeting(),
            subject: self.session.subject.clone(),
            school: self.session.school.clone(),
            stats: teacher_stats(),
            recent_activity: recent_activity(),
            class_performance: class_performance(),
            quick_actions: QUICK_ACTIONS.to_vec(),
            active_tab: self.tab(),
            tabs: TeacherTab::ALL.iter().map(|t| t.label()).collect(),
        }
    }

    /// Cancel every panel's in-flight job.
    pub fn unmount(&self) {
        info!(teacher = %self.session.name, "dashboard: teacher unmounted");
        self.tests.unmount();
        self.chat.unmount();
        self.pdf_analyzer.unmount();
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;
