use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct SetupScreenRoot;

#[derive(Component)]
pub struct TopicItem {
    pub index: usize,
}

#[derive(Component)]
pub struct GradeItem {
    pub index: usize,
}

#[derive(Component)]
pub struct TopicInputText;

#[derive(Component)]
pub struct SetupStatusText;

/// Which column the arrow keys steer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFocus {
    Topics,
    Grades,
}

/// Tracks setup selection and the typed custom topic.
#[derive(Resource)]
pub struct SetupUiState {
    pub topic_cursor: usize,
    pub grade_cursor: usize,
    pub focus: SetupFocus,
    /// Custom topic typed by the player. When non-empty it overrides the
    /// highlighted suggestion.
    pub topic_input: String,
}

/// Suggested topics: three school subjects, then the manga shelf.
pub const TOPIC_CHOICES: &[&str] = &[
    "Ancient History",
    "Quantum Physics",
    "Japanese Cuisine",
    "One Piece",
    "Naruto",
    "One Punch Man",
    "Jujutsu Kaisen",
    "Demon Slayer",
    "Attack on Titan",
    "Spy x Family",
    "Chainsaw Man",
];
const SUBJECT_COUNT: usize = 3;

const MAX_TOPIC_LEN: usize = 60;

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_setup_screen(mut commands: Commands) {
    let default_grade = Grade::ALL
        .iter()
        .position(|g| *g == Grade::default())
        .unwrap_or(0);

    commands.insert_resource(SetupUiState {
        topic_cursor: 0,
        grade_cursor: default_grade,
        focus: SetupFocus::Topics,
        topic_input: String::new(),
    });

    commands
        .spawn((
            SetupScreenRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(14.0),
                ..default()
            },
            BackgroundColor(Color::srgb(0.97, 0.98, 0.99)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("SCHOLAR CLICKERS"),
                TextFont {
                    font_size: 44.0,
                    ..default()
                },
                TextColor(Color::srgb(0.16, 0.2, 0.3)),
            ));
            parent.spawn((
                Text::new("Pass the quiz to unlock the clicker!"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.45, 0.5, 0.6)),
            ));

            parent.spawn((
                TopicInputText,
                Text::new(format!("Topic: {}", TOPIC_CHOICES[0])),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.2, 0.25, 0.35)),
            ));

            // Two columns: topic suggestions on the left, grade on the right.
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(40.0),
                    ..default()
                })
                .with_children(|columns| {
                    columns
                        .spawn(Node {
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(3.0),
                            ..default()
                        })
                        .with_children(|topics| {
                            topics.spawn((
                                Text::new("SUBJECTS"),
                                TextFont {
                                    font_size: 12.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(0.55, 0.6, 0.65)),
                            ));
                            for (i, label) in TOPIC_CHOICES.iter().enumerate() {
                                if i == SUBJECT_COUNT {
                                    topics.spawn((
                                        Text::new("MANGA & ANIME"),
                                        TextFont {
                                            font_size: 12.0,
                                            ..default()
                                        },
                                        TextColor(Color::srgb(0.55, 0.6, 0.65)),
                                    ));
                                }
                                topics
                                    .spawn((
                                        TopicItem { index: i },
                                        Node {
                                            width: Val::Px(220.0),
                                            padding: UiRect::axes(Val::Px(10.0), Val::Px(3.0)),
                                            ..default()
                                        },
                                        BackgroundColor(Color::NONE),
                                    ))
                                    .with_children(|row| {
                                        row.spawn((
                                            Text::new(*label),
                                            TextFont {
                                                font_size: 15.0,
                                                ..default()
                                            },
                                            TextColor(Color::srgb(0.25, 0.3, 0.4)),
                                        ));
                                    });
                            }
                        });

                    columns
                        .spawn(Node {
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(3.0),
                            ..default()
                        })
                        .with_children(|grades| {
                            grades.spawn((
                                Text::new("GRADE LEVEL"),
                                TextFont {
                                    font_size: 12.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(0.55, 0.6, 0.65)),
                            ));
                            for (i, grade) in Grade::ALL.iter().enumerate() {
                                grades
                                    .spawn((
                                        GradeItem { index: i },
                                        Node {
                                            width: Val::Px(160.0),
                                            padding: UiRect::axes(Val::Px(10.0), Val::Px(3.0)),
                                            ..default()
                                        },
                                        BackgroundColor(Color::NONE),
                                    ))
                                    .with_children(|row| {
                                        row.spawn((
                                            Text::new(grade.display_name()),
                                            TextFont {
                                                font_size: 15.0,
                                                ..default()
                                            },
                                            TextColor(Color::srgb(0.25, 0.3, 0.4)),
                                        ));
                                    });
                            }
                        });
                });

            parent.spawn((
                SetupStatusText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.4, 0.2)),
            ));

            parent.spawn((
                Text::new("Type a topic or pick one | Tab: Switch column | Enter: Start"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.65, 0.7)),
            ));
        });
}

pub fn despawn_setup_screen(
    mut commands: Commands,
    query: Query<Entity, With<SetupScreenRoot>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<SetupUiState>();
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE / INTERACTION
// ═══════════════════════════════════════════════════════════════════════

pub fn update_setup_display(
    ui_state: Option<Res<SetupUiState>>,
    status: Res<SetupStatus>,
    mut input_query: Query<&mut Text, With<TopicInputText>>,
    mut status_query: Query<
        (&mut Text, &mut TextColor),
        (With<SetupStatusText>, Without<TopicInputText>),
    >,
    mut topic_rows: Query<(&TopicItem, &mut BackgroundColor), Without<GradeItem>>,
    mut grade_rows: Query<(&GradeItem, &mut BackgroundColor), Without<TopicItem>>,
) {
    let Some(ui_state) = ui_state else { return };

    for mut text in &mut input_query {
        if ui_state.topic_input.is_empty() {
            **text = format!("Topic: {}", TOPIC_CHOICES[ui_state.topic_cursor]);
        } else {
            **text = format!("Topic: {}▌", ui_state.topic_input);
        }
    }

    for (mut text, mut color) in &mut status_query {
        if status.loading {
            **text = "Generating quiz…".to_string();
            *color = TextColor(Color::srgb(0.3, 0.5, 0.75));
        } else if let Some(ref error) = status.error {
            **text = error.clone();
            *color = TextColor(Color::srgb(0.85, 0.25, 0.25));
        } else {
            **text = String::new();
        }
    }

    // Focused column gets the saturated highlight.
    let topic_active = ui_state.focus == SetupFocus::Topics;
    for (item, mut bg) in &mut topic_rows {
        *bg = row_background(item.index == ui_state.topic_cursor, topic_active);
    }
    for (item, mut bg) in &mut grade_rows {
        *bg = row_background(item.index == ui_state.grade_cursor, !topic_active);
    }
}

fn row_background(selected: bool, focused: bool) -> BackgroundColor {
    match (selected, focused) {
        (true, true) => BackgroundColor(Color::srgb(0.94, 0.27, 0.27)),
        (true, false) => BackgroundColor(Color::srgba(0.94, 0.27, 0.27, 0.35)),
        _ => BackgroundColor(Color::NONE),
    }
}

pub fn setup_navigation(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut keystrokes: EventReader<KeyboardInput>,
    mut ui_state: Option<ResMut<SetupUiState>>,
    status: Res<SetupStatus>,
    mut generate: EventWriter<GenerateQuizEvent>,
) {
    let Some(ref mut ui_state) = ui_state else { return };

    // Printable keys build the custom topic; the highlighted suggestion
    // fills in whenever the field is empty.
    for ev in keystrokes.read() {
        if !ev.state.is_pressed() {
            continue;
        }
        match &ev.logical_key {
            Key::Character(c) => {
                if ui_state.topic_input.len() < MAX_TOPIC_LEN
                    && !c.chars().any(|ch| ch.is_control())
                {
                    ui_state.topic_input.push_str(c.as_str());
                }
            }
            Key::Space => {
                if !ui_state.topic_input.is_empty()
                    && ui_state.topic_input.len() < MAX_TOPIC_LEN
                {
                    ui_state.topic_input.push(' ');
                }
            }
            Key::Backspace => {
                ui_state.topic_input.pop();
            }
            _ => {}
        }
    }

    if keyboard.just_pressed(KeyCode::Tab) {
        ui_state.focus = match ui_state.focus {
            SetupFocus::Topics => SetupFocus::Grades,
            SetupFocus::Grades => SetupFocus::Topics,
        };
    }

    let (cursor, len) = match ui_state.focus {
        SetupFocus::Topics => (&mut ui_state.topic_cursor, TOPIC_CHOICES.len()),
        SetupFocus::Grades => (&mut ui_state.grade_cursor, Grade::ALL.len()),
    };
    if keyboard.just_pressed(KeyCode::ArrowDown) && *cursor < len - 1 {
        *cursor += 1;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) && *cursor > 0 {
        *cursor -= 1;
    }

    if keyboard.just_pressed(KeyCode::Enter) && !status.loading {
        let topic = if ui_state.topic_input.trim().is_empty() {
            TOPIC_CHOICES[ui_state.topic_cursor].to_string()
        } else {
            ui_state.topic_input.trim().to_string()
        };
        let grade = Grade::ALL[ui_state.grade_cursor];
        generate.send(GenerateQuizEvent { topic, grade });
    }
}
