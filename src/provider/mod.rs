//! Quiz content provider — turns a topic + grade pick into a validated,
//! playable QuizSet.
//!
//! Responsible for:
//! - Building the generation prompt (grade-specific difficulty wording)
//! - The remote transport (wasm builds POST the prompt to a worker endpoint)
//! - The offline transport (sampling the built-in QuestionBank)
//! - Schema validation of whatever comes back: exactly 4 options per
//!   question, correct index in range, no blank text
//! - The in-flight PendingGeneration resource and its timeout
//!
//! At most one generation is in flight at a time. Results arrive over a
//! std::sync::mpsc channel so the same polling system serves both the
//! native task-pool path and the wasm spawn_local path.

#[cfg(target_arch = "wasm32")]
mod remote;

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Mutex;

use bevy::prelude::*;
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct ProviderPlugin;

impl Plugin for ProviderPlugin {
    fn build(&self, app: &mut App) {
        // Generation only ever starts and resolves on the setup screen;
        // successful resolution is what lets the session leave Setup.
        app.add_systems(
            Update,
            (begin_generation, poll_generation)
                .chain()
                .run_if(in_state(Screen::Setup)),
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────────

/// One question as the generation endpoint returns it. Field names are the
/// endpoint's camelCase JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
}

/// Build the generation prompt for a topic + grade pair.
///
/// The difficulty block is the contract with the model: every grade gets
/// its own wording so "photosynthesis" for Elementary and University come
/// back as genuinely different quizzes.
pub fn build_prompt(topic: &str, grade: Grade) -> String {
    format!(
        "Generate {count} high-quality multiple choice questions about the topic: \"{topic}\".\n\n\
         CRITICAL DIFFICULTY INSTRUCTIONS: The questions MUST be tailored for a {grade} student level.\n\
         - Elementary: Simple facts, easy-to-understand words.\n\
         - Middle School: Intermediate concepts, requires some connecting of ideas.\n\
         - High School: Advanced details, complex vocabulary, and analytical reasoning.\n\
         - University: Nuanced mastery, historical/thematic depth, and technical terminology.\n\n\
         Each question must have exactly {options} options. If the topic is a Manga or Anime \
         series, focus on plot points, character development, and lore consistent with the \
         requested difficulty.",
        count = QUIZ_QUESTION_COUNT,
        topic = topic,
        grade = grade.display_name(),
        options = OPTIONS_PER_QUESTION,
    )
}

/// Validate a raw wire payload and build a QuizSet from it.
///
/// Rejects the whole payload on the first malformed question rather than
/// dropping it: a partially generated quiz would silently change the
/// score denominator.
pub fn validate_payload(
    topic: &str,
    grade: Grade,
    wire: Vec<WireQuestion>,
) -> Result<QuizSet, String> {
    if wire.is_empty() {
        return Err(format!("provider returned no questions for '{}'", topic));
    }

    let mut questions = Vec::with_capacity(wire.len());
    for (i, wq) in wire.into_iter().enumerate() {
        if wq.question.trim().is_empty() {
            return Err(format!("question {} has empty text", i + 1));
        }
        if wq.options.len() != OPTIONS_PER_QUESTION {
            return Err(format!(
                "question {} has {} options, expected {}",
                i + 1,
                wq.options.len(),
                OPTIONS_PER_QUESTION
            ));
        }
        if wq.options.iter().any(|o| o.trim().is_empty()) {
            return Err(format!("question {} has a blank option", i + 1));
        }
        if wq.correct_answer_index >= wq.options.len() {
            return Err(format!(
                "question {} marks option {} correct but only {} options exist",
                i + 1,
                wq.correct_answer_index,
                wq.options.len()
            ));
        }
        questions.push(Question {
            id: (i + 1) as u32,
            text: wq.question,
            options: wq.options,
            correct_index: wq.correct_answer_index,
        });
    }

    QuizSet::new(topic.to_string(), grade, questions)
}

// ─────────────────────────────────────────────────────────────────────────────
// Offline transport
// ─────────────────────────────────────────────────────────────────────────────

/// Sample a quiz from the built-in bank.
///
/// Topic pools are matched with the same case-insensitive substring rule
/// as themes; anything unmatched draws from the general-knowledge pool.
/// Pools smaller than the target count yield a shorter quiz rather than
/// an error.
pub fn generate_from_bank(
    bank: &QuestionBank,
    topic: &str,
    grade: Grade,
) -> Result<QuizSet, String> {
    let pool = bank.pool_for(topic).unwrap_or(&bank.general);
    if pool.is_empty() {
        return Err(format!("no bank questions available for '{}'", topic));
    }

    let mut rng = rand::thread_rng();
    let mut picked: Vec<Question> = pool
        .choose_multiple(&mut rng, QUIZ_QUESTION_COUNT.min(pool.len()))
        .cloned()
        .collect();

    // Re-number so ids run 1..=n in play order regardless of pool order.
    for (i, q) in picked.iter_mut().enumerate() {
        q.id = (i + 1) as u32;
    }

    QuizSet::new(topic.to_string(), grade, picked)
}

// ─────────────────────────────────────────────────────────────────────────────
// In-flight call
// ─────────────────────────────────────────────────────────────────────────────

/// An in-flight generation call. Present only between request and
/// response; removing it is what re-arms the setup form.
#[derive(Resource)]
pub struct PendingGeneration {
    pub topic: String,
    pub grade: Grade,
    /// Receiver is Send but not Sync; the Mutex wrapper satisfies the
    /// Resource bound. Only poll_generation ever locks it.
    rx: Mutex<Receiver<Result<QuizSet, String>>>,
    timeout: Timer,
}

/// Handles GenerateQuizEvent: spawns the transport and installs
/// PendingGeneration. Requests that arrive while a call is already in
/// flight are dropped with a warning; the setup screen disables itself
/// while loading, but a queued key press can still race one frame.
pub fn begin_generation(
    mut events: EventReader<GenerateQuizEvent>,
    pending: Option<Res<PendingGeneration>>,
    bank: Res<QuestionBank>,
    mut status: ResMut<SetupStatus>,
    mut commands: Commands,
) {
    let mut in_flight = pending.is_some();
    for ev in events.read() {
        if in_flight {
            warn!(
                "[Provider] Generation already in flight, ignoring request for '{}'",
                ev.topic
            );
            continue;
        }

        let topic = ev.topic.trim().to_string();
        if topic.is_empty() {
            status.error = Some("Enter a topic first.".into());
            continue;
        }

        status.loading = true;
        status.error = None;

        let (tx, rx) = channel();
        spawn_transport(&bank, topic.clone(), ev.grade, tx);

        commands.insert_resource(PendingGeneration {
            topic: topic.clone(),
            grade: ev.grade,
            rx: Mutex::new(rx),
            timeout: Timer::from_seconds(GENERATION_TIMEOUT_SECS, TimerMode::Once),
        });
        in_flight = true;

        info!(
            "[Provider] Generation started for '{}' ({})",
            topic,
            ev.grade.display_name()
        );
    }
}

/// Native builds have no generation endpoint; the bank sample is produced
/// on the IO pool so the polling path stays identical to the wasm one.
#[cfg(not(target_arch = "wasm32"))]
fn spawn_transport(
    bank: &QuestionBank,
    topic: String,
    grade: Grade,
    tx: Sender<Result<QuizSet, String>>,
) {
    let sampled = generate_from_bank(bank, &topic, grade);
    bevy::tasks::IoTaskPool::get()
        .spawn(async move {
            let _ = tx.send(sampled);
        })
        .detach();
}

/// Wasm builds call the worker endpoint and fall back to the bank when
/// the call or its payload is bad. The fallback is sampled up front so
/// the async block owns everything it needs.
#[cfg(target_arch = "wasm32")]
fn spawn_transport(
    bank: &QuestionBank,
    topic: String,
    grade: Grade,
    tx: Sender<Result<QuizSet, String>>,
) {
    let fallback = generate_from_bank(bank, &topic, grade);
    let prompt = build_prompt(&topic, grade);

    wasm_bindgen_futures::spawn_local(async move {
        let result = match remote::fetch_quiz(&topic, grade, &prompt).await {
            Ok(wire) => match validate_payload(&topic, grade, wire) {
                Ok(set) => Ok(set),
                Err(e) => {
                    warn!("[Provider] Remote payload invalid: {}. Using bank fallback.", e);
                    fallback
                }
            },
            Err(e) => {
                warn!("[Provider] Remote call failed: {}. Using bank fallback.", e);
                fallback
            }
        };
        let _ = tx.send(result);
    });
}

/// Drains the in-flight call. On a payload: installs the quiz, resets
/// progress, and announces the result. On timeout: fails the call. Both
/// paths remove PendingGeneration.
pub fn poll_generation(
    pending: Option<ResMut<PendingGeneration>>,
    time: Res<Time>,
    mut active: ResMut<ActiveQuiz>,
    mut progress: ResMut<QuizProgress>,
    mut status: ResMut<SetupStatus>,
    mut generated: EventWriter<QuizGeneratedEvent>,
    mut failed: EventWriter<QuizGenerationFailedEvent>,
    mut toasts: EventWriter<ToastEvent>,
    mut commands: Commands,
) {
    let Some(mut pending) = pending else {
        return;
    };

    let received = match pending.rx.lock() {
        Ok(rx) => match rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err("generation task dropped without a result".into()))
            }
        },
        Err(_) => Some(Err("generation channel poisoned".into())),
    };

    let outcome = if let Some(result) = received {
        result
    } else if pending.timeout.tick(time.delta()).just_finished() {
        Err(format!("generation for '{}' timed out", pending.topic))
    } else {
        return;
    };

    match outcome {
        Ok(set) => {
            info!(
                "[Provider] Quiz ready: '{}' with {} questions",
                set.topic,
                set.len()
            );
            status.loading = false;
            status.error = None;
            *progress = QuizProgress::default();
            generated.send(QuizGeneratedEvent {
                topic: set.topic.clone(),
                question_count: set.len(),
            });
            active.set = Some(set);
        }
        Err(message) => {
            warn!("[Provider] Generation failed: {}", message);
            status.loading = false;
            status.error = Some(message.clone());
            failed.send(QuizGenerationFailedEvent {
                message: message.clone(),
            });
            toasts.send(ToastEvent {
                message,
                duration_secs: 4.0,
            });
        }
    }

    commands.remove_resource::<PendingGeneration>();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(text: &str, options: &[&str], correct: usize) -> WireQuestion {
        WireQuestion {
            question: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer_index: correct,
        }
    }

    fn good_payload() -> Vec<WireQuestion> {
        vec![
            wire("Q1?", &["a", "b", "c", "d"], 0),
            wire("Q2?", &["a", "b", "c", "d"], 1),
            wire("Q3?", &["a", "b", "c", "d"], 2),
            wire("Q4?", &["a", "b", "c", "d"], 3),
            wire("Q5?", &["a", "b", "c", "d"], 1),
        ]
    }

    #[test]
    fn test_validate_accepts_wellformed_payload() {
        let set = validate_payload("Naruto", Grade::HighSchool, good_payload()).unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.topic, "Naruto");
        assert_eq!(set.grade, Grade::HighSchool);
        // IDs are assigned in play order.
        let ids: Vec<u32> = set.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_validate_rejects_empty_payload() {
        let result = validate_payload("Naruto", Grade::HighSchool, vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_option_count() {
        let mut payload = good_payload();
        payload[2].options.pop();
        let err = validate_payload("Naruto", Grade::HighSchool, payload).unwrap_err();
        assert!(err.contains("question 3"), "Error should name the question: {}", err);
        assert!(err.contains("3 options"), "Error should state the count: {}", err);
    }

    #[test]
    fn test_validate_rejects_out_of_range_correct_index() {
        let mut payload = good_payload();
        payload[4].correct_answer_index = 4;
        let err = validate_payload("Naruto", Grade::HighSchool, payload).unwrap_err();
        assert!(err.contains("question 5"), "Error should name the question: {}", err);
    }

    #[test]
    fn test_validate_rejects_blank_question_text() {
        let mut payload = good_payload();
        payload[0].question = "   ".into();
        assert!(validate_payload("Naruto", Grade::HighSchool, payload).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_option() {
        let mut payload = good_payload();
        payload[1].options[2] = "".into();
        assert!(validate_payload("Naruto", Grade::HighSchool, payload).is_err());
    }

    #[test]
    fn test_wire_question_parses_camel_case_json() {
        let json = r#"{
            "question": "What is 2 + 2?",
            "options": ["3", "4", "5", "6"],
            "correctAnswerIndex": 1
        }"#;
        let wq: WireQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(wq.question, "What is 2 + 2?");
        assert_eq!(wq.options.len(), 4);
        assert_eq!(wq.correct_answer_index, 1);
    }

    #[test]
    fn test_build_prompt_carries_topic_grade_and_shape() {
        let prompt = build_prompt("One Piece", Grade::University);
        assert!(prompt.contains("\"One Piece\""));
        assert!(prompt.contains("University student level"));
        assert!(prompt.contains("Generate 5"));
        assert!(prompt.contains("exactly 4 options"));
    }

    fn bank_question(id: u32) -> Question {
        Question {
            id,
            text: format!("Bank question {}", id),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: (id as usize) % OPTIONS_PER_QUESTION,
        }
    }

    fn test_bank() -> QuestionBank {
        let mut bank = QuestionBank::default();
        bank.pools.push(BankPool {
            topic: "One Piece".into(),
            questions: (1..=8).map(bank_question).collect(),
        });
        bank.general = (1..=6).map(bank_question).collect();
        bank
    }

    #[test]
    fn test_bank_sampling_draws_five_from_matching_pool() {
        let bank = test_bank();
        let set = generate_from_bank(&bank, "one piece trivia", Grade::Elementary).unwrap();
        assert_eq!(set.len(), QUIZ_QUESTION_COUNT);
        assert_eq!(set.grade, Grade::Elementary);
        for q in &set.questions {
            assert!(q.text.starts_with("Bank question"));
            assert_eq!(q.options.len(), OPTIONS_PER_QUESTION);
        }
        let ids: Vec<u32> = set.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5], "IDs are renumbered in play order");
    }

    #[test]
    fn test_bank_sampling_falls_back_to_general_pool() {
        let bank = test_bank();
        let set = generate_from_bank(&bank, "Underwater Basket Weaving", Grade::HighSchool).unwrap();
        assert_eq!(set.len(), QUIZ_QUESTION_COUNT);
    }

    #[test]
    fn test_bank_sampling_short_pool_yields_short_quiz() {
        let mut bank = QuestionBank::default();
        bank.pools.push(BankPool {
            topic: "Tiny".into(),
            questions: (1..=3).map(bank_question).collect(),
        });
        let set = generate_from_bank(&bank, "tiny topic", Grade::MiddleSchool).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_bank_sampling_empty_bank_errors() {
        let bank = QuestionBank::default();
        assert!(generate_from_bank(&bank, "anything", Grade::HighSchool).is_err());
    }
}
