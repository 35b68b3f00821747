//! Landing page content: navigation, hero, feature cards and platform stats.
//!
//! Everything here is static. The only state is the mobile menu toggle,
//! and the only behavior is mapping a login call-to-action to a route.

use serde::Serialize;

pub const BRAND: &str = "EduLink";

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Features", anchor: "#features" },
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Contact", anchor: "#contact" },
];

/// Login call-to-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Login {
    Teacher,
    Student,
}

impl Login {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Teacher => "Teacher Login",
            Self::Student => "Student Login",
        }
    }

    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Teacher => "/teacher-dashboard",
            Self::Student => "/student-dashboard",
        }
    }
}

/// Navigation bar state. On narrow screens the links collapse into a menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    pub menu_open: bool,
}

impl Navigation {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follow a login button. The mobile menu closes on navigation.
    pub fn login(&mut self, which: Login) -> &'static str {
        self.menu_open = false;
        which.route()
    }
}

// =============================================================================
// CONTENT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub subheading: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub icons: [&'static str; 4],
}

pub const HERO: Hero = Hero {
    badge: "AI-Powered Learning Platform",
    headline: "Transform Your Learning Journey",
    subheading: "Experience the future of education with AI-powered test generation, personalized learning paths, \
                 and intelligent study assistance.",
    primary_cta: "Start Learning Today",
    secondary_cta: "Watch Demo",
    icons: ["AI Tests", "Smart Chat", "PDF Analysis", "Video Recs"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
}

pub const FEATURES: [FeatureCard; 6] = [
    FeatureCard {
        title: "AI Test Generation",
        description: "Create personalized tests based on any topic with customizable difficulty levels, question \
                      types, and formats.",
        badge: "Smart",
    },
    FeatureCard {
        title: "AI Study Assistant",
        description: "Get instant answers to your questions with our intelligent chatbot that understands your \
                      learning context.",
        badge: "24/7",
    },
    FeatureCard {
        title: "PDF Analysis",
        description: "Upload documents and get instant summaries, key insights, and automatically generated \
                      questions.",
        badge: "Instant",
    },
    FeatureCard {
        title: "Video Recommendations",
        description: "Discover relevant YouTube videos tailored to your current study topics and learning progress.",
        badge: "Curated",
    },
    FeatureCard {
        title: "Progress Tracking",
        description: "Monitor your learning journey with detailed analytics on test performance and study habits.",
        badge: "Analytics",
    },
    FeatureCard {
        title: "Time Management",
        description: "Track study sessions and get insights on your most productive learning periods.",
        badge: "Efficiency",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PLATFORM_STATS: [PlatformStat; 4] = [
    PlatformStat { label: "Tests Generated", value: "10K+" },
    PlatformStat { label: "Questions Answered", value: "50K+" },
    PlatformStat { label: "PDFs Analyzed", value: "5K+" },
    PlatformStat { label: "Study Hours", value: "25K+" },
];

pub const FEATURES_HEADING: &str = "Everything You Need to Excel in Learning";

// =============================================================================
// RENDER
// =============================================================================

/// Plain-text rendering of the whole landing page.
#[must_use]
pub fn render(nav: &Navigation) -> String {
    let links: Vec<&str> = NAV_LINKS.iter().map(|l| l.label).collect();
    let mut lines = vec![format!(
        "{BRAND}  |  {}  |  [{}] [{}]",
        links.join("  "),
        Login::Teacher.label(),
        Login::Student.label()
    )];
    if nav.menu_open {
        lines.extend(NAV_LINKS.iter().map(|link| format!("  > {} ({})", link.label, link.anchor)));
    }

    lines.push(format!("\n  * {}", HERO.badge));
    lines.push(format!("  {}", HERO.headline));
    lines.push(format!("  {}", HERO.subheading));
    lines.push(format!("  [{}] [{}]", HERO.primary_cta, HERO.secondary_cta));
    lines.push(format!("  {}", HERO.icons.join(" · ")));

    lines.push(format!("\n{FEATURES_HEADING}"));
    lines.extend(PLATFORM_STATS.iter().map(|stat| format!("  {:>6}  {}", stat.value, stat.label)));
    lines.extend(
        FEATURES
            .iter()
            .map(|card| format!("\n  {} [{}]\n    {}", card.title, card.badge, card.description)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
