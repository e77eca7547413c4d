//! Headless integration tests for Scholar Clickers.
//!
//! These tests exercise the game's ECS logic without a window or GPU.
//! They use Bevy's `MinimalPlugins` to tick the app, register the
//! logic plugins (skipping all rendering/UI), and verify that a whole
//! session walks Loading → Setup → Quiz → Game → Finished → Setup.
//!
//! The offline quiz transport resolves on the IO task pool, so tests that
//! wait for generation pump the app with short sleeps between frames.
//!
//! Run with: `cargo test --test headless`

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use scholar_clickers::clicker::{AccrualTimer, ClickerPlugin};
use scholar_clickers::data::DataPlugin;
use scholar_clickers::provider::{PendingGeneration, ProviderPlugin};
use scholar_clickers::quiz::QuizPlugin;
use scholar_clickers::session::{SessionClock, SessionPlugin};
use scholar_clickers::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builds a minimal Bevy app with all shared resources, events, and logic
/// plugins registered, but NO rendering, windowing, or asset loading.
/// The UI plugin is the only one omitted.
fn build_game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);

    // ── Screen State ─────────────────────────────────────────────────────
    app.init_state::<Screen>();

    // ── Shared Resources (mirrors main.rs) ───────────────────────────────
    app.init_resource::<ActiveQuiz>()
        .init_resource::<QuizProgress>()
        .init_resource::<Wallet>()
        .init_resource::<UpgradeRoster>()
        .init_resource::<SessionTheme>()
        .init_resource::<SetupStatus>()
        .init_resource::<SessionStats>()
        .init_resource::<UpgradeCatalog>()
        .init_resource::<ThemeCatalog>()
        .init_resource::<QuestionBank>();

    // ── Shared Events (mirrors main.rs) ──────────────────────────────────
    app.add_event::<GenerateQuizEvent>()
        .add_event::<QuizGeneratedEvent>()
        .add_event::<QuizGenerationFailedEvent>()
        .add_event::<AnswerSelectedEvent>()
        .add_event::<AdvanceQuestionEvent>()
        .add_event::<QuizCompletedEvent>()
        .add_event::<ClickRequestEvent>()
        .add_event::<ClickScoredEvent>()
        .add_event::<PurchaseRequestEvent>()
        .add_event::<TimeExpiredEvent>()
        .add_event::<RestartRequestEvent>()
        .add_event::<ToastEvent>();

    // ── Logic Plugins ────────────────────────────────────────────────────
    app.add_plugins(DataPlugin)
        .add_plugins(ProviderPlugin)
        .add_plugins(QuizPlugin)
        .add_plugins(ClickerPlugin)
        .add_plugins(SessionPlugin);

    app
}

fn current_screen(app: &App) -> Screen {
    *app.world().resource::<State<Screen>>().get()
}

/// Pumps the app until `done` returns true, sleeping briefly between
/// frames so background transports get scheduled. Panics after `max`
/// frames.
fn pump_until(app: &mut App, max: usize, what: &str, done: impl Fn(&App) -> bool) {
    for _ in 0..max {
        app.update();
        if done(app) {
            return;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    panic!("Timed out waiting for {}", what);
}

/// Boots through Loading: the first update populates the catalogs, the
/// second applies the queued transition to Setup.
fn boot_to_setup(app: &mut App) {
    app.update();
    app.update();
    assert_eq!(
        current_screen(app),
        Screen::Setup,
        "Expected to reach Setup after loading data"
    );
}

/// Requests a quiz and pumps the app until the quiz screen is reached.
fn start_quiz(app: &mut App, topic: &str, grade: Grade) {
    app.world_mut().send_event(GenerateQuizEvent {
        topic: topic.to_string(),
        grade,
    });
    pump_until(app, 400, "the quiz screen", |a| {
        current_screen(a) == Screen::Quiz
    });
}

/// Answers every question (correctly when `ace` is true, always wrongly
/// otherwise) and advances through the whole set. Returns the score the
/// answers should have produced, with the question count.
fn complete_quiz(app: &mut App, ace: bool) -> (u32, u32) {
    let set = app
        .world()
        .resource::<ActiveQuiz>()
        .set
        .clone()
        .expect("An active quiz should be installed");

    let mut expected_score = 0u32;
    for q in &set.questions {
        let pick = if ace {
            q.correct_index
        } else {
            (q.correct_index + 1) % q.options.len()
        };
        if pick == q.correct_index {
            expected_score += 1;
        }
        app.world_mut()
            .send_event(AnswerSelectedEvent { option_index: pick });
        app.update();
        app.world_mut().send_event(AdvanceQuestionEvent);
        app.update();
    }

    // Let the completion event reach the screen controller and the
    // queued transition apply.
    for _ in 0..4 {
        app.update();
    }
    (expected_score, set.len() as u32)
}

/// Full path to the game screen: boot, generate a quiz, ace it.
fn start_session(app: &mut App, topic: &str) {
    boot_to_setup(app);
    start_quiz(app, topic, Grade::HighSchool);
    complete_quiz(app, true);
    assert_eq!(
        current_screen(app),
        Screen::Game,
        "Acing the quiz should unlock the game screen"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot & Catalogs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_headless_boot_populates_catalogs_and_reaches_setup() {
    let mut app = build_game_app();
    boot_to_setup(&mut app);

    let catalog = app.world().resource::<UpgradeCatalog>();
    assert_eq!(catalog.upgrades.len(), 11, "Upgrade catalog should hold the full roster");
    for u in &catalog.upgrades {
        assert_eq!(u.cost, u.base_cost, "'{}' should start at its base cost", u.id);
        assert_eq!(u.owned, 0, "'{}' should start unowned", u.id);
        assert!(u.value > 0.0, "'{}' should contribute a positive rate", u.id);
        assert!(u.multiplier > 1.0, "'{}' should get more expensive over time", u.id);
    }
    let mut ids: Vec<&str> = catalog.upgrades.iter().map(|u| u.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 11, "Upgrade ids must be unique");

    let themes = app.world().resource::<ThemeCatalog>();
    assert_eq!(themes.themes.len(), 8, "Theme catalog should hold every skin");
    for t in &themes.themes {
        assert!(!t.main_glyphs.is_empty(), "Theme '{}' needs click glyphs", t.name);
        assert!(!t.currency_icon.is_empty(), "Theme '{}' needs a currency icon", t.name);
    }

    let bank = app.world().resource::<QuestionBank>();
    assert_eq!(bank.pools.len(), 11, "Every built-in topic gets a question pool");
    for pool in &bank.pools {
        assert!(
            pool.questions.len() >= QUIZ_QUESTION_COUNT,
            "Pool '{}' must cover a full quiz",
            pool.topic
        );
    }
    assert!(
        bank.general.len() >= QUIZ_QUESTION_COUNT,
        "The general pool must cover a full quiz"
    );
    let all_questions = bank
        .pools
        .iter()
        .flat_map(|p| p.questions.iter())
        .chain(bank.general.iter());
    for q in all_questions {
        assert!(!q.text.trim().is_empty(), "Bank question {} has empty text", q.id);
        assert_eq!(
            q.options.len(),
            OPTIONS_PER_QUESTION,
            "Bank question '{}' has the wrong option count",
            q.text
        );
        assert!(
            q.correct_index < q.options.len(),
            "Bank question '{}' marks a nonexistent option correct",
            q.text
        );
    }

    // Smoke: run a small frame budget on the setup screen without panic.
    for _ in 0..60 {
        app.update();
    }
    assert_eq!(current_screen(&app), Screen::Setup);
}

// ─────────────────────────────────────────────────────────────────────────────
// Quiz Generation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_generation_installs_quiz_and_enters_quiz_screen() {
    let mut app = build_game_app();
    boot_to_setup(&mut app);
    start_quiz(&mut app, "Naruto", Grade::MiddleSchool);

    let active = app.world().resource::<ActiveQuiz>();
    let set = active.set.as_ref().expect("A quiz should be installed");
    assert_eq!(set.topic, "Naruto");
    assert_eq!(set.grade, Grade::MiddleSchool);
    assert_eq!(set.len(), QUIZ_QUESTION_COUNT);
    let ids: Vec<u32> = set.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5], "Questions are numbered in play order");

    let progress = app.world().resource::<QuizProgress>();
    assert_eq!(progress.current, 0);
    assert_eq!(progress.score, 0);
    assert!(!progress.answered);
    assert!(!progress.complete);

    let status = app.world().resource::<SetupStatus>();
    assert!(!status.loading, "The spinner must stop once the quiz lands");
    assert!(status.error.is_none());
    assert!(
        app.world().get_resource::<PendingGeneration>().is_none(),
        "The in-flight call must be cleaned up"
    );
}

#[test]
fn test_empty_topic_is_rejected_without_leaving_setup() {
    let mut app = build_game_app();
    boot_to_setup(&mut app);

    app.world_mut().send_event(GenerateQuizEvent {
        topic: "   ".into(),
        grade: Grade::HighSchool,
    });
    for _ in 0..3 {
        app.update();
    }

    assert_eq!(current_screen(&app), Screen::Setup);
    let status = app.world().resource::<SetupStatus>();
    assert_eq!(status.error.as_deref(), Some("Enter a topic first."));
    assert!(!status.loading, "A rejected topic must not start a call");
    assert!(app.world().resource::<ActiveQuiz>().set.is_none());
    assert!(app.world().get_resource::<PendingGeneration>().is_none());
}

#[test]
fn test_generation_with_empty_bank_fails_and_stays_on_setup() {
    let mut app = build_game_app();
    boot_to_setup(&mut app);

    {
        let mut bank = app.world_mut().resource_mut::<QuestionBank>();
        bank.pools.clear();
        bank.general.clear();
    }

    app.world_mut().send_event(GenerateQuizEvent {
        topic: "Naruto".into(),
        grade: Grade::HighSchool,
    });
    pump_until(&mut app, 400, "the generation failure", |a| {
        a.world().resource::<SetupStatus>().error.is_some()
    });

    assert_eq!(current_screen(&app), Screen::Setup, "Failure keeps the setup screen");
    let status = app.world().resource::<SetupStatus>();
    assert!(!status.loading);
    let error = status.error.as_deref().unwrap_or_default();
    assert!(
        error.contains("no bank questions"),
        "Error should say the bank is empty: {}",
        error
    );
    assert!(app.world().resource::<ActiveQuiz>().set.is_none());
    assert!(app.world().get_resource::<PendingGeneration>().is_none());
}

#[test]
fn test_duplicate_request_while_loading_is_ignored() {
    let mut app = build_game_app();
    boot_to_setup(&mut app);

    // Both events land in the same frame; only the first may win.
    app.world_mut().send_event(GenerateQuizEvent {
        topic: "One Piece".into(),
        grade: Grade::HighSchool,
    });
    app.world_mut().send_event(GenerateQuizEvent {
        topic: "Naruto".into(),
        grade: Grade::Elementary,
    });
    pump_until(&mut app, 400, "the quiz screen", |a| {
        current_screen(a) == Screen::Quiz
    });

    let active = app.world().resource::<ActiveQuiz>();
    let set = active.set.as_ref().expect("A quiz should be installed");
    assert_eq!(set.topic, "One Piece", "The first request wins");
    assert_eq!(set.grade, Grade::HighSchool);
}

// ─────────────────────────────────────────────────────────────────────────────
// Quiz Play
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_acing_the_quiz_scores_full_and_unlocks_the_game() {
    let mut app = build_game_app();
    boot_to_setup(&mut app);
    start_quiz(&mut app, "One Piece", Grade::HighSchool);

    let (score, total) = complete_quiz(&mut app, true);
    assert_eq!(score, 5);
    assert_eq!(total, 5);
    assert_eq!(current_screen(&app), Screen::Game);

    let progress = app.world().resource::<QuizProgress>();
    assert!(progress.complete);
    assert_eq!(progress.score, 5);

    let stats = app.world().resource::<SessionStats>();
    assert_eq!(stats.quiz_score, 5);
    assert_eq!(stats.quiz_total, 5);

    // The topic matched a named theme on the way in.
    let theme = &app.world().resource::<SessionTheme>().theme;
    assert_eq!(theme.name, "One Piece");
    assert_eq!(theme.currency_name, "Meat");

    // Game entry seeded a fresh economy and started the clock.
    assert_eq!(app.world().resource::<Wallet>().balance, 0.0);
    assert_eq!(app.world().resource::<UpgradeRoster>().upgrades.len(), 11);
    let clock = app
        .world()
        .get_resource::<SessionClock>()
        .expect("The session clock should be running");
    assert_eq!(clock.remaining_ms, SESSION_DURATION_MS);
    assert!(app.world().get_resource::<AccrualTimer>().is_some());
}

#[test]
fn test_all_wrong_answers_score_zero_and_fall_back_to_default_theme() {
    let mut app = build_game_app();
    boot_to_setup(&mut app);
    start_quiz(&mut app, "Quantum Physics", Grade::University);

    let (score, total) = complete_quiz(&mut app, false);
    assert_eq!(score, 0, "Every answer was deliberately wrong");
    assert_eq!(total, 5);
    assert_eq!(current_screen(&app), Screen::Game, "A zero score still unlocks the game");

    let stats = app.world().resource::<SessionStats>();
    assert_eq!(stats.quiz_score, 0);
    assert_eq!(stats.quiz_total, 5);

    let theme = &app.world().resource::<SessionTheme>().theme;
    assert_eq!(theme.name, "Sushi", "Unthemed topics use the default skin");
}

#[test]
fn test_invalid_quiz_input_is_ignored() {
    let mut app = build_game_app();
    boot_to_setup(&mut app);
    start_quiz(&mut app, "Demon Slayer", Grade::HighSchool);

    // Out-of-range option: nothing recorded.
    app.world_mut()
        .send_event(AnswerSelectedEvent { option_index: 99 });
    app.update();
    {
        let progress = app.world().resource::<QuizProgress>();
        assert!(!progress.answered, "An out-of-range option must not lock in");
        assert_eq!(progress.score, 0);
    }

    // Advance without an answer: stays on the first question.
    app.world_mut().send_event(AdvanceQuestionEvent);
    app.update();
    assert_eq!(app.world().resource::<QuizProgress>().current, 0);

    // A real answer locks in and a second submission cannot change it.
    let correct = {
        let active = app.world().resource::<ActiveQuiz>();
        active.set.as_ref().unwrap().questions[0].correct_index
    };
    app.world_mut()
        .send_event(AnswerSelectedEvent { option_index: correct });
    app.update();
    let wrong = (correct + 1) % OPTIONS_PER_QUESTION;
    app.world_mut()
        .send_event(AnswerSelectedEvent { option_index: wrong });
    app.update();

    let progress = app.world().resource::<QuizProgress>();
    assert!(progress.answered);
    assert_eq!(progress.score, 1);
    assert_eq!(progress.selected, Some(correct), "The first lock-in stands");
}

// ─────────────────────────────────────────────────────────────────────────────
// Clicker Economy
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_click_events_earn_base_gain_and_count() {
    let mut app = build_game_app();
    start_session(&mut app, "Spy x Family");

    for _ in 0..20 {
        app.world_mut().send_event(ClickRequestEvent);
    }
    app.update();

    assert_eq!(app.world().resource::<Wallet>().balance, 20.0);
    let stats = app.world().resource::<SessionStats>();
    assert_eq!(stats.total_clicks, 20);
    assert_eq!(stats.click_earned, 20.0);
    assert_eq!(
        app.world().resource::<Events<ClickScoredEvent>>().len(),
        20,
        "Every click reports its gain for UI feedback"
    );
}

#[test]
fn test_purchases_deduct_reprice_and_raise_rates() {
    let mut app = build_game_app();
    start_session(&mut app, "Attack on Titan");

    app.world_mut().resource_mut::<Wallet>().balance = 20.0;
    app.world_mut().send_event(PurchaseRequestEvent {
        upgrade_id: "basic-tool".into(),
    });
    app.update();

    assert_eq!(app.world().resource::<Wallet>().balance, 5.0);
    {
        let roster = app.world().resource::<UpgradeRoster>();
        let bought = roster.get("basic-tool").unwrap();
        assert_eq!(bought.owned, 1);
        assert_eq!(bought.cost, 18, "Next unit is repriced up the curve");
    }
    assert_eq!(app.world().resource::<SessionStats>().upgrades_bought, 1);

    // The owned upgrade raises the click rate from 1 to 2.
    app.world_mut().send_event(ClickRequestEvent);
    app.update();
    assert_eq!(app.world().resource::<Wallet>().balance, 7.0);

    // Unaffordable and unknown purchases change nothing.
    app.world_mut().send_event(PurchaseRequestEvent {
        upgrade_id: "universal-singularity".into(),
    });
    app.world_mut().send_event(PurchaseRequestEvent {
        upgrade_id: "warp-drive".into(),
    });
    app.update();

    assert_eq!(app.world().resource::<Wallet>().balance, 7.0);
    let roster = app.world().resource::<UpgradeRoster>();
    assert_eq!(roster.get("universal-singularity").unwrap().owned, 0);
    assert_eq!(app.world().resource::<SessionStats>().upgrades_bought, 1);
}

#[test]
fn test_passive_accrual_drips_only_with_generators() {
    let mut app = build_game_app();
    start_session(&mut app, "Chainsaw Man");

    // Without a generator the drip never starts, even across real time.
    for _ in 0..6 {
        app.update();
        std::thread::sleep(Duration::from_millis(25));
    }
    assert_eq!(
        app.world().resource::<Wallet>().balance,
        0.0,
        "No passive income before the first generator"
    );

    {
        let mut roster = app.world_mut().resource_mut::<UpgradeRoster>();
        let generator = roster
            .upgrades
            .iter_mut()
            .find(|u| u.id == "apprentice")
            .expect("The apprentice generator exists");
        generator.owned = 1;
    }

    // Rate 1/sec drips 0.1 every 100 ms; half a second is plenty to see it.
    for _ in 0..30 {
        app.update();
        std::thread::sleep(Duration::from_millis(20));
    }

    let balance = app.world().resource::<Wallet>().balance;
    assert!(balance > 0.0, "The drip should have started: {}", balance);
    let stats = app.world().resource::<SessionStats>();
    assert!(stats.passive_earned > 0.0);
    assert_eq!(
        stats.passive_earned, balance,
        "With zero clicks the whole balance is passive"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Session End & Restart
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_time_expiry_freezes_the_session_on_the_results_screen() {
    let mut app = build_game_app();
    start_session(&mut app, "Jujutsu Kaisen");

    app.world_mut().resource_mut::<Wallet>().balance = 50.0;
    app.world_mut().send_event(TimeExpiredEvent);
    for _ in 0..3 {
        app.update();
    }

    assert_eq!(current_screen(&app), Screen::Finished);
    assert!(
        app.world().get_resource::<SessionClock>().is_none(),
        "The clock must stop with the session"
    );
    assert!(
        app.world().get_resource::<AccrualTimer>().is_none(),
        "The drip must stop with the session"
    );

    // Give a generator no chance to earn anything posthumously.
    {
        let mut roster = app.world_mut().resource_mut::<UpgradeRoster>();
        if let Some(g) = roster.upgrades.iter_mut().find(|u| u.id == "apprentice") {
            g.owned = 10;
        }
    }
    for _ in 0..6 {
        app.update();
        std::thread::sleep(Duration::from_millis(25));
    }
    assert_eq!(
        app.world().resource::<Wallet>().balance,
        50.0,
        "The final balance is frozen on the results screen"
    );
}

#[test]
fn test_session_clock_expires_in_real_time() {
    let mut app = build_game_app();
    start_session(&mut app, "One Punch Man");

    // Shorten the countdown to its final second and let real time run out.
    app.world_mut()
        .resource_mut::<SessionClock>()
        .remaining_ms = 1_000;
    pump_until(&mut app, 1_500, "the session to expire", |a| {
        current_screen(a) == Screen::Finished
    });

    assert!(app.world().get_resource::<SessionClock>().is_none());
}

#[test]
fn test_full_lifecycle_restart_resets_everything_and_replays() {
    let mut app = build_game_app();
    start_session(&mut app, "One Piece");

    // Dirty every per-session resource.
    for _ in 0..5 {
        app.world_mut().send_event(ClickRequestEvent);
    }
    app.update();
    app.world_mut().resource_mut::<Wallet>().balance = 1_000.0;
    app.world_mut().send_event(PurchaseRequestEvent {
        upgrade_id: "apprentice".into(),
    });
    app.update();
    app.world_mut().send_event(TimeExpiredEvent);
    for _ in 0..3 {
        app.update();
    }
    assert_eq!(current_screen(&app), Screen::Finished);

    app.world_mut().send_event(RestartRequestEvent);
    for _ in 0..3 {
        app.update();
    }

    assert_eq!(current_screen(&app), Screen::Setup, "Restart returns to setup");
    assert_eq!(app.world().resource::<Wallet>().balance, 0.0);
    assert!(app.world().resource::<ActiveQuiz>().set.is_none());
    let progress = app.world().resource::<QuizProgress>();
    assert_eq!(progress.score, 0);
    assert!(!progress.complete);
    assert!(app.world().resource::<UpgradeRoster>().upgrades.is_empty());
    assert_eq!(app.world().resource::<SessionTheme>().theme.name, "Sushi");
    let stats = app.world().resource::<SessionStats>();
    assert_eq!(stats.total_clicks, 0);
    assert_eq!(stats.upgrades_bought, 0);
    assert_eq!(stats.quiz_total, 0);
    let status = app.world().resource::<SetupStatus>();
    assert!(!status.loading);
    assert!(status.error.is_none());

    // The catalogs survive restarts untouched.
    assert_eq!(app.world().resource::<UpgradeCatalog>().upgrades.len(), 11);
    assert_eq!(app.world().resource::<ThemeCatalog>().themes.len(), 8);

    // And a second session plays cleanly on top of the reset state.
    start_quiz(&mut app, "Naruto", Grade::Elementary);
    complete_quiz(&mut app, true);
    assert_eq!(current_screen(&app), Screen::Game);
    assert_eq!(app.world().resource::<Wallet>().balance, 0.0);
    assert_eq!(
        app.world()
            .get_resource::<SessionClock>()
            .expect("A fresh clock for the second session")
            .remaining_ms,
        SESSION_DURATION_MS
    );
    assert_eq!(app.world().resource::<SessionTheme>().theme.name, "Naruto");
}
