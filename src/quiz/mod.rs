//! Quiz domain — walks the active question set and keeps score.
//!
//! Responsible for:
//! - Recording answer submissions (one per question, first lock-in wins)
//! - Advancing through the set once the current question is answered
//! - Emitting QuizCompletedEvent exactly once after the final advance
//!
//! The rules live in pure functions over QuizProgress; the systems only
//! bridge events to them and log the outcomes.

use bevy::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct QuizPlugin;

impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        // Submit before advance so a same-frame "lock in, then next" pair
        // resolves in player order.
        app.add_systems(
            Update,
            (handle_answer_selected, handle_advance)
                .chain()
                .run_if(in_state(Screen::Quiz)),
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rules
// ─────────────────────────────────────────────────────────────────────────────

/// Result of an answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer was recorded. `correct` says whether it scored.
    Recorded { correct: bool },
    /// The current question already has a locked-in answer, or the quiz
    /// is already complete. Nothing changed.
    AlreadyAnswered,
    /// The option index does not exist on the current question.
    OutOfRange,
}

/// Result of an advance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next question; selection state was reset.
    Moved,
    /// The final question was advanced past. Fires exactly once.
    Completed { score: u32, total: u32 },
    /// The current question has no locked-in answer yet. Nothing changed.
    NotAnswered,
    /// The quiz already completed earlier. Nothing changed.
    AlreadyComplete,
}

/// Lock in an answer for the current question.
///
/// The first submission per question wins; later ones are ignored so the
/// score can never be farmed by re-clicking the correct option.
pub fn submit_answer(
    progress: &mut QuizProgress,
    set: &QuizSet,
    option_index: usize,
) -> SubmitOutcome {
    if progress.complete || progress.answered {
        return SubmitOutcome::AlreadyAnswered;
    }

    let question = &set.questions[progress.current];
    if option_index >= question.options.len() {
        return SubmitOutcome::OutOfRange;
    }

    progress.answered = true;
    progress.selected = Some(option_index);

    let correct = option_index == question.correct_index;
    if correct {
        progress.score += 1;
    }
    SubmitOutcome::Recorded { correct }
}

/// Move past the current question, or complete the quiz if it was the
/// last one. Blocked until the current question has an answer.
pub fn advance_question(progress: &mut QuizProgress, set: &QuizSet) -> AdvanceOutcome {
    if progress.complete {
        return AdvanceOutcome::AlreadyComplete;
    }
    if !progress.answered {
        return AdvanceOutcome::NotAnswered;
    }

    if progress.current + 1 >= set.len() {
        progress.complete = true;
        return AdvanceOutcome::Completed {
            score: progress.score,
            total: set.len() as u32,
        };
    }

    progress.current += 1;
    progress.answered = false;
    progress.selected = None;
    AdvanceOutcome::Moved
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Processes AnswerSelectedEvents against the active quiz.
pub fn handle_answer_selected(
    mut events: EventReader<AnswerSelectedEvent>,
    active: Res<ActiveQuiz>,
    mut progress: ResMut<QuizProgress>,
) {
    let set = match &active.set {
        Some(set) => set,
        None => {
            events.clear();
            return;
        }
    };

    for ev in events.read() {
        match submit_answer(&mut progress, set, ev.option_index) {
            SubmitOutcome::Recorded { correct } => {
                info!(
                    "[Quiz] Question {}: option {} locked in ({}). Score {}/{}",
                    progress.current + 1,
                    ev.option_index,
                    if correct { "correct" } else { "wrong" },
                    progress.score,
                    set.len()
                );
            }
            SubmitOutcome::AlreadyAnswered => {
                warn!(
                    "[Quiz] Ignoring answer {} — question {} already answered",
                    ev.option_index,
                    progress.current + 1
                );
            }
            SubmitOutcome::OutOfRange => {
                warn!(
                    "[Quiz] Ignoring answer {} — question {} has only {} options",
                    ev.option_index,
                    progress.current + 1,
                    OPTIONS_PER_QUESTION
                );
            }
        }
    }
}

/// Processes AdvanceQuestionEvents. Completion updates the session stats
/// and emits QuizCompletedEvent for the screen controller.
pub fn handle_advance(
    mut events: EventReader<AdvanceQuestionEvent>,
    active: Res<ActiveQuiz>,
    mut progress: ResMut<QuizProgress>,
    mut stats: ResMut<SessionStats>,
    mut completed: EventWriter<QuizCompletedEvent>,
) {
    let set = match &active.set {
        Some(set) => set,
        None => {
            events.clear();
            return;
        }
    };

    for _ in events.read() {
        match advance_question(&mut progress, set) {
            AdvanceOutcome::Moved => {
                info!(
                    "[Quiz] Advanced to question {}/{}",
                    progress.current + 1,
                    set.len()
                );
            }
            AdvanceOutcome::Completed { score, total } => {
                stats.quiz_score = score;
                stats.quiz_total = total;
                info!("[Quiz] Quiz complete: {}/{} correct", score, total);
                completed.send(QuizCompletedEvent { score, total });
            }
            AdvanceOutcome::NotAnswered => {
                warn!(
                    "[Quiz] Ignoring advance — question {} has no answer yet",
                    progress.current + 1
                );
            }
            AdvanceOutcome::AlreadyComplete => {
                warn!("[Quiz] Ignoring advance — quiz already complete");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, correct_index: usize) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index,
        }
    }

    fn make_set() -> QuizSet {
        QuizSet::new(
            "Test Topic".into(),
            Grade::HighSchool,
            vec![
                question(1, 0),
                question(2, 1),
                question(3, 2),
                question(4, 3),
                question(5, 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_correct_answer_scores() {
        let set = make_set();
        let mut progress = QuizProgress::default();

        let outcome = submit_answer(&mut progress, &set, 0);
        assert_eq!(outcome, SubmitOutcome::Recorded { correct: true });
        assert_eq!(progress.score, 1);
        assert!(progress.answered);
        assert_eq!(progress.selected, Some(0));
    }

    #[test]
    fn test_wrong_answer_records_without_scoring() {
        let set = make_set();
        let mut progress = QuizProgress::default();

        let outcome = submit_answer(&mut progress, &set, 3);
        assert_eq!(outcome, SubmitOutcome::Recorded { correct: false });
        assert_eq!(progress.score, 0);
        assert!(progress.answered);
        assert_eq!(progress.selected, Some(3));
    }

    #[test]
    fn test_second_submission_is_ignored() {
        let set = make_set();
        let mut progress = QuizProgress::default();

        submit_answer(&mut progress, &set, 3);
        let outcome = submit_answer(&mut progress, &set, 0);

        assert_eq!(outcome, SubmitOutcome::AlreadyAnswered);
        assert_eq!(progress.score, 0, "Re-submitting must not rescore");
        assert_eq!(progress.selected, Some(3), "First lock-in stands");
    }

    #[test]
    fn test_out_of_range_option_is_ignored() {
        let set = make_set();
        let mut progress = QuizProgress::default();

        let outcome = submit_answer(&mut progress, &set, 4);
        assert_eq!(outcome, SubmitOutcome::OutOfRange);
        assert!(!progress.answered);
        assert_eq!(progress.selected, None);
    }

    #[test]
    fn test_advance_blocked_until_answered() {
        let set = make_set();
        let mut progress = QuizProgress::default();

        assert_eq!(advance_question(&mut progress, &set), AdvanceOutcome::NotAnswered);
        assert_eq!(progress.current, 0);
    }

    #[test]
    fn test_advance_moves_and_resets_selection() {
        let set = make_set();
        let mut progress = QuizProgress::default();

        submit_answer(&mut progress, &set, 0);
        assert_eq!(advance_question(&mut progress, &set), AdvanceOutcome::Moved);

        assert_eq!(progress.current, 1);
        assert!(!progress.answered);
        assert_eq!(progress.selected, None);
        assert_eq!(progress.score, 1, "Score carries across questions");
    }

    #[test]
    fn test_final_advance_completes_exactly_once() {
        let set = make_set();
        let mut progress = QuizProgress {
            current: 4,
            score: 3,
            ..Default::default()
        };

        submit_answer(&mut progress, &set, 1);
        let outcome = advance_question(&mut progress, &set);
        assert_eq!(outcome, AdvanceOutcome::Completed { score: 4, total: 5 });
        assert!(progress.complete);

        assert_eq!(
            advance_question(&mut progress, &set),
            AdvanceOutcome::AlreadyComplete,
            "Completion must not fire twice"
        );
    }

    #[test]
    fn test_submission_after_completion_is_ignored() {
        let set = make_set();
        let mut progress = QuizProgress {
            current: 4,
            answered: true,
            complete: true,
            ..Default::default()
        };

        assert_eq!(
            submit_answer(&mut progress, &set, 0),
            SubmitOutcome::AlreadyAnswered
        );
    }

    #[test]
    fn test_full_walkthrough_scores_three_of_five() {
        let set = make_set();
        let mut progress = QuizProgress::default();

        // Correct, correct, wrong, wrong, correct.
        let picks = [0usize, 1, 0, 0, 1];
        for (i, pick) in picks.iter().enumerate() {
            assert_eq!(progress.current, i);
            submit_answer(&mut progress, &set, *pick);
            let outcome = advance_question(&mut progress, &set);
            if i < picks.len() - 1 {
                assert_eq!(outcome, AdvanceOutcome::Moved);
            } else {
                assert_eq!(outcome, AdvanceOutcome::Completed { score: 3, total: 5 });
            }
        }

        assert_eq!(progress.score, 3);
        assert!(progress.complete);
        assert_eq!(progress.current, 4, "Index stays on the last question");
    }
}
