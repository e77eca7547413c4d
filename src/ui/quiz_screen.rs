use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct QuizScreenRoot;

#[derive(Component)]
pub struct QuizCounterText;

#[derive(Component)]
pub struct QuizQuestionText;

#[derive(Component)]
pub struct OptionItem {
    pub index: usize,
}

#[derive(Component)]
pub struct OptionText {
    pub index: usize,
}

#[derive(Component)]
pub struct QuizHintText;

/// Tracks which option the cursor sits on.
#[derive(Resource)]
pub struct QuizUiState {
    pub cursor: usize,
}

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_quiz_screen(mut commands: Commands, active: Res<ActiveQuiz>) {
    commands.insert_resource(QuizUiState { cursor: 0 });

    let topic = active
        .set
        .as_ref()
        .map(|s| s.topic.clone())
        .unwrap_or_else(|| "Quiz".to_string());

    commands
        .spawn((
            QuizScreenRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.97, 0.98, 0.99)),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(640.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(24.0)),
                        row_gap: Val::Px(12.0),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::WHITE),
                    BorderColor(Color::srgb(0.8, 0.84, 0.9)),
                ))
                .with_children(|panel| {
                    panel
                        .spawn(Node {
                            width: Val::Percent(100.0),
                            justify_content: JustifyContent::SpaceBetween,
                            ..default()
                        })
                        .with_children(|header| {
                            header.spawn((
                                Text::new(topic),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(0.94, 0.27, 0.27)),
                            ));
                            header.spawn((
                                QuizCounterText,
                                Text::new("Question 1 of 5"),
                                TextFont {
                                    font_size: 14.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(0.5, 0.55, 0.6)),
                            ));
                        });

                    panel.spawn((
                        QuizQuestionText,
                        Text::new(""),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.15, 0.18, 0.25)),
                    ));

                    for i in 0..OPTIONS_PER_QUESTION {
                        panel
                            .spawn((
                                OptionItem { index: i },
                                Node {
                                    width: Val::Percent(100.0),
                                    padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                                    ..default()
                                },
                                BackgroundColor(Color::srgba(0.85, 0.87, 0.9, 0.6)),
                            ))
                            .with_children(|row| {
                                row.spawn((
                                    OptionText { index: i },
                                    Text::new(""),
                                    TextFont {
                                        font_size: 16.0,
                                        ..default()
                                    },
                                    TextColor(Color::srgb(0.2, 0.24, 0.32)),
                                ));
                            });
                    }

                    panel.spawn((
                        QuizHintText,
                        Text::new("Up/Down: Select | Enter: Lock in"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.6, 0.65, 0.7)),
                    ));
                });
        });
}

pub fn despawn_quiz_screen(
    mut commands: Commands,
    query: Query<Entity, With<QuizScreenRoot>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<QuizUiState>();
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE / INTERACTION
// ═══════════════════════════════════════════════════════════════════════

pub fn update_quiz_display(
    ui_state: Option<Res<QuizUiState>>,
    active: Res<ActiveQuiz>,
    progress: Res<QuizProgress>,
    mut counter_query: Query<&mut Text, With<QuizCounterText>>,
    mut question_query: Query<&mut Text, (With<QuizQuestionText>, Without<QuizCounterText>)>,
    mut option_texts: Query<
        (&OptionText, &mut Text),
        (Without<QuizCounterText>, Without<QuizQuestionText>, Without<QuizHintText>),
    >,
    mut option_rows: Query<(&OptionItem, &mut BackgroundColor)>,
    mut hint_query: Query<
        &mut Text,
        (With<QuizHintText>, Without<QuizCounterText>, Without<QuizQuestionText>),
    >,
) {
    let Some(ui_state) = ui_state else { return };
    let Some(set) = &active.set else { return };
    let question = &set.questions[progress.current.min(set.len() - 1)];

    for mut text in &mut counter_query {
        **text = format!(
            "Question {} of {} | Score {}",
            progress.current + 1,
            set.len(),
            progress.score
        );
    }

    for mut text in &mut question_query {
        **text = question.text.clone();
    }

    for (marker, mut text) in &mut option_texts {
        if let Some(option) = question.options.get(marker.index) {
            **text = format!("{}) {}", OPTION_LETTERS[marker.index], option);
        } else {
            **text = String::new();
        }
    }

    // Before the lock-in the cursor row is blue; after it the correct
    // option turns green and a wrong pick turns red.
    for (item, mut bg) in &mut option_rows {
        *bg = if progress.answered {
            if item.index == question.correct_index {
                BackgroundColor(Color::srgb(0.35, 0.72, 0.42))
            } else if progress.selected == Some(item.index) {
                BackgroundColor(Color::srgb(0.85, 0.3, 0.3))
            } else {
                BackgroundColor(Color::srgba(0.85, 0.87, 0.9, 0.6))
            }
        } else if item.index == ui_state.cursor {
            BackgroundColor(Color::srgb(0.4, 0.56, 0.9))
        } else {
            BackgroundColor(Color::srgba(0.85, 0.87, 0.9, 0.6))
        };
    }

    for mut text in &mut hint_query {
        **text = if !progress.answered {
            "Up/Down: Select | Enter: Lock in | 1-4: Quick answer".to_string()
        } else if progress.current + 1 < set.len() {
            "Enter: Next Question".to_string()
        } else {
            "Enter: Unlock Game".to_string()
        };
    }
}

pub fn quiz_navigation(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut ui_state: Option<ResMut<QuizUiState>>,
    progress: Res<QuizProgress>,
    mut answers: EventWriter<AnswerSelectedEvent>,
    mut advances: EventWriter<AdvanceQuestionEvent>,
) {
    let Some(ref mut ui_state) = ui_state else { return };

    if !progress.answered {
        if keyboard.just_pressed(KeyCode::ArrowDown)
            && ui_state.cursor < OPTIONS_PER_QUESTION - 1
        {
            ui_state.cursor += 1;
        }
        if keyboard.just_pressed(KeyCode::ArrowUp) && ui_state.cursor > 0 {
            ui_state.cursor -= 1;
        }

        if keyboard.just_pressed(KeyCode::Enter) {
            answers.send(AnswerSelectedEvent {
                option_index: ui_state.cursor,
            });
        }

        let digits = [
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
        ];
        for (i, key) in digits.iter().enumerate() {
            if keyboard.just_pressed(*key) {
                ui_state.cursor = i;
                answers.send(AnswerSelectedEvent { option_index: i });
            }
        }
    } else if keyboard.just_pressed(KeyCode::Enter) {
        advances.send(AdvanceQuestionEvent);
        ui_state.cursor = 0;
    }
}
