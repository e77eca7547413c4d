use bevy::prelude::*;
use rand::Rng;

use crate::clicker::{format_amount, per_click_rate, per_second_rate};
use crate::session::{format_clock, SessionClock};
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct GameScreenRoot;

#[derive(Component)]
pub struct ClockText;

#[derive(Component)]
pub struct BalanceText;

#[derive(Component)]
pub struct RateText;

#[derive(Component)]
pub struct BigGlyphText;

#[derive(Component)]
pub struct ClickArea;

#[derive(Component)]
pub struct UpgradeRow {
    pub index: usize,
}

#[derive(Component)]
pub struct UpgradeRowText {
    pub index: usize,
}

#[derive(Component)]
pub struct UpgradeDetailText;

/// A transient "+N" that drifts up from the click glyph and fades.
#[derive(Component)]
pub struct FloatingGain {
    pub timer: Timer,
}

/// Tracks which upgrade row the cursor sits on.
#[derive(Resource)]
pub struct GameUiState {
    pub cursor: usize,
}

const FEEDBACK_LIFETIME_SECS: f32 = 0.8;
const FEEDBACK_RISE_PX_PER_SEC: f32 = 70.0;

/// Main glyph for the click button. Rotates through the theme's glyph
/// list, holding each one for five clicks.
pub fn glyph_for_count(glyphs: &[String], count: u64) -> &str {
    if glyphs.is_empty() {
        return "🍣";
    }
    let index = (count as usize % (glyphs.len() * 5)) / 5;
    &glyphs[index]
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_game_screen(
    mut commands: Commands,
    theme: Res<SessionTheme>,
    catalog: Res<UpgradeCatalog>,
    active: Res<ActiveQuiz>,
) {
    commands.insert_resource(GameUiState { cursor: 0 });

    let theme = &theme.theme;
    let topic = active
        .set
        .as_ref()
        .map(|s| s.topic.clone())
        .unwrap_or_else(|| theme.name.clone());

    // Dark-skinned themes need light text.
    let ink = if theme.background.to_srgba().red < 0.5 {
        Color::srgb(0.92, 0.94, 0.97)
    } else {
        Color::srgb(0.16, 0.2, 0.3)
    };

    commands
        .spawn((
            GameScreenRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(14.0)),
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(theme.background),
        ))
        .with_children(|parent| {
            // ─── Top bar: clock, topic, balance ───
            parent
                .spawn(Node {
                    width: Val::Percent(100.0),
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|bar| {
                    bar.spawn((
                        ClockText,
                        Text::new(format_clock(SESSION_DURATION_MS)),
                        TextFont {
                            font_size: 30.0,
                            ..default()
                        },
                        TextColor(theme.accent),
                    ));
                    bar.spawn((
                        Text::new(topic),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(ink),
                    ));
                    bar.spawn((
                        BalanceText,
                        Text::new(format!("{} 0", theme.currency_icon)),
                        TextFont {
                            font_size: 26.0,
                            ..default()
                        },
                        TextColor(ink),
                    ));
                });

            parent.spawn((
                RateText,
                Text::new("+1/click | 0/sec"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(ink.with_alpha(0.7)),
            ));

            // ─── Main row: click area left, upgrade list right ───
            parent
                .spawn(Node {
                    width: Val::Percent(100.0),
                    flex_grow: 1.0,
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(16.0),
                    ..default()
                })
                .with_children(|main| {
                    main.spawn((
                        ClickArea,
                        Node {
                            flex_grow: 1.0,
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                    ))
                    .with_children(|area| {
                        area.spawn((
                            BigGlyphText,
                            Text::new(glyph_for_count(&theme.main_glyphs, 0)),
                            TextFont {
                                font_size: 110.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });

                    main.spawn(Node {
                        width: Val::Px(380.0),
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(3.0),
                        overflow: Overflow::clip(),
                        ..default()
                    })
                    .with_children(|list| {
                        list.spawn((
                            Text::new("UPGRADES"),
                            TextFont {
                                font_size: 12.0,
                                ..default()
                            },
                            TextColor(ink.with_alpha(0.7)),
                        ));
                        for i in 0..catalog.upgrades.len() {
                            list.spawn((
                                UpgradeRow { index: i },
                                Node {
                                    width: Val::Percent(100.0),
                                    padding: UiRect::axes(Val::Px(8.0), Val::Px(3.0)),
                                    ..default()
                                },
                                BackgroundColor(Color::NONE),
                            ))
                            .with_children(|row| {
                                row.spawn((
                                    UpgradeRowText { index: i },
                                    Text::new(""),
                                    TextFont {
                                        font_size: 13.0,
                                        ..default()
                                    },
                                    TextColor(ink),
                                ));
                            });
                        }
                        list.spawn((
                            UpgradeDetailText,
                            Text::new(""),
                            TextFont {
                                font_size: 12.0,
                                ..default()
                            },
                            TextColor(ink.with_alpha(0.8)),
                        ));
                    });
                });

            parent.spawn((
                Text::new(format!(
                    "Space: Make {}! | Up/Down: Browse upgrades | Enter: Buy",
                    theme.currency_name
                )),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(ink.with_alpha(0.7)),
            ));
        });
}

pub fn despawn_game_screen(
    mut commands: Commands,
    query: Query<Entity, With<GameScreenRoot>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<GameUiState>();
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE / INTERACTION
// ═══════════════════════════════════════════════════════════════════════

pub fn update_game_display(
    ui_state: Option<Res<GameUiState>>,
    clock: Option<Res<SessionClock>>,
    wallet: Res<Wallet>,
    roster: Res<UpgradeRoster>,
    theme: Res<SessionTheme>,
    stats: Res<SessionStats>,
    mut clock_query: Query<&mut Text, With<ClockText>>,
    mut balance_query: Query<&mut Text, (With<BalanceText>, Without<ClockText>)>,
    mut rate_query: Query<&mut Text, (With<RateText>, Without<ClockText>, Without<BalanceText>)>,
    mut glyph_query: Query<
        &mut Text,
        (With<BigGlyphText>, Without<ClockText>, Without<BalanceText>, Without<RateText>),
    >,
    mut row_texts: Query<
        (&UpgradeRowText, &mut Text, &mut TextColor),
        (Without<ClockText>, Without<BalanceText>, Without<RateText>, Without<BigGlyphText>),
    >,
    mut rows: Query<(&UpgradeRow, &mut BackgroundColor)>,
    mut detail_query: Query<
        &mut Text,
        (
            With<UpgradeDetailText>,
            Without<ClockText>,
            Without<BalanceText>,
            Without<RateText>,
            Without<BigGlyphText>,
            Without<UpgradeRowText>,
        ),
    >,
) {
    let Some(ui_state) = ui_state else { return };
    let theme = &theme.theme;

    if let Some(clock) = clock {
        for mut text in &mut clock_query {
            **text = format_clock(clock.remaining_ms);
        }
    }

    for mut text in &mut balance_query {
        **text = format!("{} {}", theme.currency_icon, format_amount(wallet.balance));
    }

    for mut text in &mut rate_query {
        **text = format!(
            "+{}/click | {}/sec",
            format_amount(per_click_rate(&roster)),
            format_amount(per_second_rate(&roster))
        );
    }

    for mut text in &mut glyph_query {
        **text = glyph_for_count(&theme.main_glyphs, stats.total_clicks).to_string();
    }

    let ink_ok = Color::srgb(0.2, 0.6, 0.3);
    let ink_poor = Color::srgb(0.75, 0.35, 0.35);
    for (marker, mut text, mut color) in &mut row_texts {
        let Some(upgrade) = roster.upgrades.get(marker.index) else {
            **text = String::new();
            continue;
        };
        **text = format!(
            "{} {}  x{}  {} {}",
            upgrade.icon,
            upgrade.name,
            upgrade.owned,
            format_amount(upgrade.cost as f64),
            theme.currency_icon
        );
        *color = if wallet.balance >= upgrade.cost as f64 {
            TextColor(ink_ok)
        } else {
            TextColor(ink_poor)
        };
    }

    for (row, mut bg) in &mut rows {
        *bg = if row.index == ui_state.cursor {
            BackgroundColor(theme.accent.with_alpha(0.3))
        } else {
            BackgroundColor(Color::NONE)
        };
    }

    for mut text in &mut detail_query {
        **text = roster
            .upgrades
            .get(ui_state.cursor)
            .map(|u| u.description.clone())
            .unwrap_or_default();
    }
}

pub fn game_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut ui_state: Option<ResMut<GameUiState>>,
    roster: Res<UpgradeRoster>,
    mut clicks: EventWriter<ClickRequestEvent>,
    mut purchases: EventWriter<PurchaseRequestEvent>,
) {
    let Some(ref mut ui_state) = ui_state else { return };

    if keyboard.just_pressed(KeyCode::Space) {
        clicks.send(ClickRequestEvent);
    }

    let count = roster.upgrades.len();
    if keyboard.just_pressed(KeyCode::ArrowDown) && count > 0 && ui_state.cursor < count - 1 {
        ui_state.cursor += 1;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) && ui_state.cursor > 0 {
        ui_state.cursor -= 1;
    }

    if keyboard.just_pressed(KeyCode::Enter) {
        if let Some(upgrade) = roster.upgrades.get(ui_state.cursor) {
            purchases.send(PurchaseRequestEvent {
                upgrade_id: upgrade.id.clone(),
            });
        }
    }
}

/// Spawns a floating "+N" inside the click area for every scored click.
pub fn spawn_click_feedback(
    mut commands: Commands,
    mut events: EventReader<ClickScoredEvent>,
    theme: Res<SessionTheme>,
    area_query: Query<Entity, With<ClickArea>>,
) {
    let Ok(area) = area_query.get_single() else {
        events.clear();
        return;
    };

    let mut rng = rand::thread_rng();
    for ev in events.read() {
        let jitter = rng.gen_range(-50.0_f32..50.0_f32);
        let gain = commands
            .spawn((
                FloatingGain {
                    timer: Timer::from_seconds(FEEDBACK_LIFETIME_SECS, TimerMode::Once),
                },
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(120.0),
                    left: Val::Percent(50.0),
                    margin: UiRect {
                        left: Val::Px(jitter),
                        ..default()
                    },
                    ..default()
                },
                Text::new(format!("+{}", format_amount(ev.amount))),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(theme.theme.accent),
            ))
            .id();
        commands.entity(area).add_child(gain);
    }
}

/// Drifts click feedback upward and fades it out.
pub fn update_click_feedback(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut FloatingGain, &mut Node, &mut TextColor)>,
) {
    for (entity, mut gain, mut node, mut color) in &mut query {
        gain.timer.tick(time.delta());
        if gain.timer.finished() {
            commands.entity(entity).despawn_recursive();
            continue;
        }

        if let Val::Px(bottom) = node.bottom {
            node.bottom = Val::Px(bottom + FEEDBACK_RISE_PX_PER_SEC * time.delta_secs());
        }

        let alpha = 1.0 - gain.timer.fraction();
        color.0 = color.0.with_alpha(alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs() -> Vec<String> {
        vec!["🍣".into(), "🍤".into(), "🍙".into()]
    }

    #[test]
    fn test_glyph_holds_for_five_clicks() {
        let g = glyphs();
        for count in 0..5 {
            assert_eq!(glyph_for_count(&g, count), "🍣");
        }
        assert_eq!(glyph_for_count(&g, 5), "🍤");
        assert_eq!(glyph_for_count(&g, 9), "🍤");
        assert_eq!(glyph_for_count(&g, 10), "🍙");
    }

    #[test]
    fn test_glyph_cycle_wraps_around() {
        let g = glyphs();
        // Three glyphs × five clicks each: the cycle restarts at 15.
        assert_eq!(glyph_for_count(&g, 15), "🍣");
        assert_eq!(glyph_for_count(&g, 20), "🍤");
    }

    #[test]
    fn test_empty_glyph_list_falls_back() {
        assert_eq!(glyph_for_count(&[], 42), "🍣");
    }
}
