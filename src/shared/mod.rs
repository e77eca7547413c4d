//! Shared resources, events, and states for Scholar Clickers.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// SCREEN STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

/// One session walks Setup → Quiz → Game → Finished and restarts back to
/// Setup. Loading is the boot state where the data layer seeds the catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum Screen {
    #[default]
    Loading,
    Setup,
    Quiz,
    Game,
    Finished,
}

// ═══════════════════════════════════════════════════════════════════════
// GRADE
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Elementary,
    MiddleSchool,
    HighSchool,
    University,
}

impl Default for Grade {
    fn default() -> Self {
        Grade::HighSchool
    }
}

impl Grade {
    pub const ALL: [Grade; 4] = [
        Grade::Elementary,
        Grade::MiddleSchool,
        Grade::HighSchool,
        Grade::University,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Grade::Elementary => "Elementary",
            Grade::MiddleSchool => "Middle School",
            Grade::HighSchool => "High School",
            Grade::University => "University",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// QUIZ CONTENT
// ═══════════════════════════════════════════════════════════════════════

/// A single multiple-choice question. Immutable once constructed:
/// exactly `OPTIONS_PER_QUESTION` options, `correct_index` in range.
/// The content provider validates both before building a `QuizSet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// An ordered question set for one session. Read-only after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSet {
    pub topic: String,
    pub grade: Grade,
    pub questions: Vec<Question>,
}

impl QuizSet {
    /// Fails fast on an empty question list. An empty set would otherwise
    /// complete the quiz silently with score 0/0.
    pub fn new(topic: String, grade: Grade, questions: Vec<Question>) -> Result<Self, String> {
        if questions.is_empty() {
            return Err(format!("quiz for '{}' has no questions", topic));
        }
        Ok(Self {
            topic,
            grade,
            questions,
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// The quiz installed for the current session. Absent until the content
/// provider delivers one; cleared on restart.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveQuiz {
    pub set: Option<QuizSet>,
}

/// Walks the active `QuizSet` one question at a time.
///
/// `answered`/`selected` describe the current question only and reset on
/// advance. `complete` latches after the final advance so completion is
/// emitted exactly once.
#[derive(Resource, Debug, Clone, Default)]
pub struct QuizProgress {
    pub current: usize,
    pub score: u32,
    pub answered: bool,
    pub selected: Option<usize>,
    pub complete: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// ECONOMY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// Raises the gain of each manual click.
    PerClick,
    /// Raises the passive per-second rate.
    PerSecond,
}

/// A purchasable roster entry. `cost` is always the integer price of the
/// NEXT unit: `ceil(base_cost * multiplier^owned)`. Only `owned` and `cost`
/// mutate after seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upgrade {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub kind: UpgradeKind,
    pub value: f64,
    pub base_cost: u64,
    pub multiplier: f64,
    pub cost: u64,
    pub owned: u32,
}

/// The player's currency balance. Accumulates as f64 so the 100 ms passive
/// drip keeps fractional remainders; the UI floors for display.
#[derive(Resource, Debug, Clone, Default)]
pub struct Wallet {
    pub balance: f64,
}

/// The live upgrade set for the current session. Seeded from
/// `UpgradeCatalog` on entering the game, reset on restart.
#[derive(Resource, Debug, Clone, Default)]
pub struct UpgradeRoster {
    pub upgrades: Vec<Upgrade>,
}

impl UpgradeRoster {
    pub fn get(&self, id: &str) -> Option<&Upgrade> {
        self.upgrades.iter().find(|u| u.id == id)
    }
}

/// Immutable upgrade template roster, populated once by the data layer.
#[derive(Resource, Debug, Clone, Default)]
pub struct UpgradeCatalog {
    pub upgrades: Vec<Upgrade>,
}

// ═══════════════════════════════════════════════════════════════════════
// THEMING
// ═══════════════════════════════════════════════════════════════════════

/// Cosmetic skin for the clicker screen. Picked by topic keyword; the
/// economy never reads it.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub currency_icon: String,
    pub currency_name: String,
    pub main_glyphs: Vec<String>,
    pub background: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Sushi".into(),
            currency_icon: "🍣".into(),
            currency_name: "Sushi".into(),
            main_glyphs: vec![
                "🍣".into(),
                "🍤".into(),
                "🍙".into(),
                "🍘".into(),
                "🍥".into(),
                "🥢".into(),
            ],
            background: Color::srgb(0.97, 0.98, 0.99),
            accent: Color::srgb(0.94, 0.27, 0.27),
        }
    }
}

/// Named theme table, populated once by the data layer.
#[derive(Resource, Debug, Clone, Default)]
pub struct ThemeCatalog {
    pub themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Case-insensitive substring match on the topic; the default sushi
    /// theme covers everything else.
    pub fn resolve(&self, topic: &str) -> Theme {
        let needle = topic.to_lowercase();
        self.themes
            .iter()
            .find(|t| needle.contains(&t.name.to_lowercase()))
            .cloned()
            .unwrap_or_default()
    }
}

/// The resolved theme for the running session. Set when the quiz unlocks
/// the game, reset to the default on restart.
#[derive(Resource, Debug, Clone, Default)]
pub struct SessionTheme {
    pub theme: Theme,
}

// ═══════════════════════════════════════════════════════════════════════
// OFFLINE QUESTION BANK
// ═══════════════════════════════════════════════════════════════════════

/// One topic's pool of bank questions.
#[derive(Debug, Clone)]
pub struct BankPool {
    pub topic: String,
    pub questions: Vec<Question>,
}

/// Built-in question pools, populated once by the data layer. Serves as
/// the offline transport and the fallback when the remote call fails.
#[derive(Resource, Debug, Clone, Default)]
pub struct QuestionBank {
    pub pools: Vec<BankPool>,
    /// General-knowledge pool used when no topic pool matches.
    pub general: Vec<Question>,
}

impl QuestionBank {
    /// Case-insensitive substring match, same rule as the theme lookup.
    pub fn pool_for(&self, topic: &str) -> Option<&[Question]> {
        let needle = topic.to_lowercase();
        self.pools
            .iter()
            .find(|p| needle.contains(&p.topic.to_lowercase()))
            .map(|p| p.questions.as_slice())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SESSION STATUS & STATS
// ═══════════════════════════════════════════════════════════════════════

/// Drives the setup screen: the spinner while a generation call is in
/// flight, and the last error when one failed.
#[derive(Resource, Debug, Clone, Default)]
pub struct SetupStatus {
    pub loading: bool,
    pub error: Option<String>,
}

/// Per-session play counters, shown on the finished screen.
#[derive(Resource, Debug, Clone, Default)]
pub struct SessionStats {
    pub total_clicks: u64,
    pub click_earned: f64,
    pub passive_earned: f64,
    pub upgrades_bought: u32,
    pub quiz_score: u32,
    pub quiz_total: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// Sent by the setup screen when the player confirms topic + grade.
#[derive(Event, Debug, Clone)]
pub struct GenerateQuizEvent {
    pub topic: String,
    pub grade: Grade,
}

/// Sent by the provider when a validated quiz has been installed.
#[derive(Event, Debug, Clone)]
pub struct QuizGeneratedEvent {
    pub topic: String,
    pub question_count: usize,
}

/// Sent by the provider when generation failed (call error, empty payload,
/// schema violation, timeout).
#[derive(Event, Debug, Clone)]
pub struct QuizGenerationFailedEvent {
    pub message: String,
}

/// Sent by the quiz screen when the player locks in an option.
#[derive(Event, Debug, Clone)]
pub struct AnswerSelectedEvent {
    pub option_index: usize,
}

/// Sent by the quiz screen to move past an answered question.
#[derive(Event, Debug, Clone)]
pub struct AdvanceQuestionEvent;

/// Emitted exactly once when the final question is advanced past.
#[derive(Event, Debug, Clone)]
pub struct QuizCompletedEvent {
    pub score: u32,
    pub total: u32,
}

/// Sent by the game screen for each manual click.
#[derive(Event, Debug, Clone)]
pub struct ClickRequestEvent;

/// Emitted by the economy with the amount a click earned, for transient
/// UI feedback.
#[derive(Event, Debug, Clone)]
pub struct ClickScoredEvent {
    pub amount: f64,
}

/// Sent by the game screen when the player confirms a purchase.
#[derive(Event, Debug, Clone)]
pub struct PurchaseRequestEvent {
    pub upgrade_id: String,
}

/// Emitted exactly once when the countdown reaches zero.
#[derive(Event, Debug, Clone)]
pub struct TimeExpiredEvent;

/// Sent by the finished screen to reset everything and return to Setup.
#[derive(Event, Debug, Clone)]
pub struct RestartRequestEvent;

/// Transient on-screen notification.
#[derive(Event, Debug, Clone)]
pub struct ToastEvent {
    pub message: String,
    pub duration_secs: f32,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 540.0;

/// Whole clicker session length: 5 minutes.
pub const SESSION_DURATION_MS: u64 = 300_000;
/// Countdown granularity. The clock only ever moves in whole ticks.
pub const CLOCK_TICK_SECS: f32 = 1.0;
/// Passive income granularity: 10 drips per second.
pub const ACCRUAL_TICK_SECS: f32 = 0.1;

pub const QUIZ_QUESTION_COUNT: usize = 5;
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Base gain of a click before any upgrades.
pub const BASE_CLICK_GAIN: f64 = 1.0;

/// A generation call that has not answered after this long is failed.
pub const GENERATION_TIMEOUT_SECS: f32 = 30.0;

// ═══════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_index: 0,
        }
    }

    #[test]
    fn test_quiz_set_rejects_empty_question_list() {
        let result = QuizSet::new("Naruto".into(), Grade::HighSchool, vec![]);
        assert!(result.is_err(), "Empty question list must not build a set");
    }

    #[test]
    fn test_quiz_set_accepts_questions() {
        let set = QuizSet::new(
            "Naruto".into(),
            Grade::Elementary,
            vec![question(1), question(2)],
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.topic, "Naruto");
    }

    #[test]
    fn test_theme_catalog_substring_match_is_case_insensitive() {
        let mut catalog = ThemeCatalog::default();
        catalog.themes.push(Theme {
            name: "Naruto".into(),
            currency_icon: "🍜".into(),
            currency_name: "Ramen".into(),
            main_glyphs: vec!["🍜".into()],
            background: Color::WHITE,
            accent: Color::BLACK,
        });

        assert_eq!(catalog.resolve("naruto shippuden").name, "Naruto");
        assert_eq!(catalog.resolve("NARUTO").name, "Naruto");
    }

    #[test]
    fn test_theme_catalog_falls_back_to_default() {
        let catalog = ThemeCatalog::default();
        let theme = catalog.resolve("Quantum Physics");
        assert_eq!(theme.name, "Sushi", "Unmatched topics get the default theme");
        assert!(!theme.main_glyphs.is_empty());
    }

    #[test]
    fn test_question_bank_pool_lookup() {
        let mut bank = QuestionBank::default();
        bank.pools.push(BankPool {
            topic: "One Piece".into(),
            questions: vec![question(1)],
        });

        assert!(bank.pool_for("one piece lore").is_some());
        assert!(bank.pool_for("History").is_none());
    }

    #[test]
    fn test_grade_display_names() {
        assert_eq!(Grade::Elementary.display_name(), "Elementary");
        assert_eq!(Grade::MiddleSchool.display_name(), "Middle School");
        assert_eq!(Grade::HighSchool.display_name(), "High School");
        assert_eq!(Grade::University.display_name(), "University");
    }

    #[test]
    fn test_default_grade_is_high_school() {
        assert_eq!(Grade::default(), Grade::HighSchool);
    }
}
