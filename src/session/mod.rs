//! Session domain — owns the screen state machine and the countdown clock.
//!
//! Responsible for:
//! - Every Screen transition: Setup → Quiz → Game → Finished → Setup
//! - The five-minute countdown while the game screen is active
//! - Resolving the session theme from the quiz topic on game entry
//! - Resetting all per-session resources on restart
//!
//! Domain plugins announce what happened through events; only this module
//! ever writes NextState<Screen>.

use bevy::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Game), start_session_clock);
        app.add_systems(OnExit(Screen::Game), stop_session_clock);

        app.add_systems(
            Update,
            handle_generation_success.run_if(in_state(Screen::Setup)),
        );
        app.add_systems(
            Update,
            handle_quiz_completed.run_if(in_state(Screen::Quiz)),
        );
        app.add_systems(
            Update,
            (tick_session_clock, handle_time_expired)
                .chain()
                .run_if(in_state(Screen::Game)),
        );
        app.add_systems(Update, handle_restart.run_if(in_state(Screen::Finished)));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clock
// ─────────────────────────────────────────────────────────────────────────────

/// The session countdown. Exists only while the game screen is active;
/// its absence everywhere else is what guarantees no background ticking.
#[derive(Resource, Debug)]
pub struct SessionClock {
    pub remaining_ms: u64,
    pub timer: Timer,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self {
            remaining_ms: SESSION_DURATION_MS,
            timer: Timer::from_seconds(CLOCK_TICK_SECS, TimerMode::Repeating),
        }
    }
}

/// Apply one whole clock tick. Returns true exactly when this tick
/// exhausted the clock; an already-exhausted clock stays at zero and
/// never reports expiry again.
pub fn apply_second(clock: &mut SessionClock) -> bool {
    if clock.remaining_ms == 0 {
        return false;
    }
    if clock.remaining_ms <= 1_000 {
        clock.remaining_ms = 0;
        true
    } else {
        clock.remaining_ms -= 1_000;
        false
    }
}

/// Format remaining time as m:ss. Partial seconds round up so the display
/// never reads 0:00 while time remains.
pub fn format_clock(remaining_ms: u64) -> String {
    let total_secs = remaining_ms.div_ceil(1_000);
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

// ─────────────────────────────────────────────────────────────────────────────
// Clock systems
// ─────────────────────────────────────────────────────────────────────────────

/// OnEnter(Game): start a fresh five-minute countdown.
pub fn start_session_clock(mut commands: Commands) {
    commands.insert_resource(SessionClock::default());
    info!(
        "[Session] Clock started: {}",
        format_clock(SESSION_DURATION_MS)
    );
}

/// OnExit(Game): drop the clock so nothing ticks outside the game screen.
pub fn stop_session_clock(mut commands: Commands) {
    commands.remove_resource::<SessionClock>();
    info!("[Session] Clock stopped");
}

/// Advances the countdown in whole seconds and emits TimeExpiredEvent
/// exactly once, on the tick that reaches zero.
pub fn tick_session_clock(
    time: Res<Time>,
    clock: Option<ResMut<SessionClock>>,
    mut expired: EventWriter<TimeExpiredEvent>,
) {
    let Some(mut clock) = clock else {
        return;
    };

    let ticks = clock.timer.tick(time.delta()).times_finished_this_tick();
    for _ in 0..ticks {
        if apply_second(&mut clock) {
            info!("[Session] Time expired");
            expired.send(TimeExpiredEvent);
            break;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transitions
// ─────────────────────────────────────────────────────────────────────────────

/// Setup → Quiz once the provider installs a validated quiz.
pub fn handle_generation_success(
    mut events: EventReader<QuizGeneratedEvent>,
    mut next_state: ResMut<NextState<Screen>>,
) {
    for ev in events.read() {
        info!(
            "[Session] Quiz ready for '{}' ({} questions) — entering quiz",
            ev.topic, ev.question_count
        );
        next_state.set(Screen::Quiz);
    }
}

/// Quiz → Game once the final question is advanced past. The session
/// theme is resolved here so the game screen spawns already themed.
pub fn handle_quiz_completed(
    mut events: EventReader<QuizCompletedEvent>,
    active: Res<ActiveQuiz>,
    themes: Res<ThemeCatalog>,
    mut session_theme: ResMut<SessionTheme>,
    mut next_state: ResMut<NextState<Screen>>,
) {
    for ev in events.read() {
        if let Some(set) = &active.set {
            session_theme.theme = themes.resolve(&set.topic);
            info!(
                "[Session] Theme '{}' selected for topic '{}'",
                session_theme.theme.name, set.topic
            );
        }
        info!(
            "[Session] Quiz finished {}/{} — entering game",
            ev.score, ev.total
        );
        next_state.set(Screen::Game);
    }
}

/// Game → Finished when the countdown reports expiry.
pub fn handle_time_expired(
    mut events: EventReader<TimeExpiredEvent>,
    mut next_state: ResMut<NextState<Screen>>,
) {
    for _ in events.read() {
        info!("[Session] Session over — entering results");
        next_state.set(Screen::Finished);
    }
}

/// Finished → Setup. Every per-session resource returns to its default;
/// the catalogs populated at boot are left untouched.
pub fn handle_restart(
    mut events: EventReader<RestartRequestEvent>,
    mut active: ResMut<ActiveQuiz>,
    mut progress: ResMut<QuizProgress>,
    mut wallet: ResMut<Wallet>,
    mut roster: ResMut<UpgradeRoster>,
    mut session_theme: ResMut<SessionTheme>,
    mut status: ResMut<SetupStatus>,
    mut stats: ResMut<SessionStats>,
    mut next_state: ResMut<NextState<Screen>>,
) {
    for _ in events.read() {
        *active = ActiveQuiz::default();
        *progress = QuizProgress::default();
        *wallet = Wallet::default();
        *roster = UpgradeRoster::default();
        *session_theme = SessionTheme::default();
        *status = SetupStatus::default();
        *stats = SessionStats::default();
        next_state.set(Screen::Setup);
        info!("[Session] Session reset — returning to setup");
    }
}
