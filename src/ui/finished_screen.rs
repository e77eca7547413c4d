use bevy::prelude::*;

use crate::clicker::format_amount;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct FinishedScreenRoot;

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

/// The results are frozen the moment this spawns; nothing on this screen
/// updates afterwards.
pub fn spawn_finished_screen(
    mut commands: Commands,
    wallet: Res<Wallet>,
    stats: Res<SessionStats>,
    theme: Res<SessionTheme>,
) {
    let theme = &theme.theme;

    let stat_lines = [
        format!("Quiz score: {}/{}", stats.quiz_score, stats.quiz_total),
        format!("Total clicks: {}", stats.total_clicks),
        format!("Earned by clicking: {}", format_amount(stats.click_earned)),
        format!("Earned passively: {}", format_amount(stats.passive_earned)),
        format!("Upgrades bought: {}", stats.upgrades_bought),
    ];

    commands
        .spawn((
            FinishedScreenRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(theme.background),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(460.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(28.0)),
                        row_gap: Val::Px(10.0),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::WHITE),
                    BorderColor(theme.accent),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("TIME'S UP!"),
                        TextFont {
                            font_size: 36.0,
                            ..default()
                        },
                        TextColor(theme.accent),
                    ));

                    panel.spawn((
                        Text::new(format!(
                            "{} {}",
                            theme.currency_icon,
                            format_amount(wallet.balance)
                        )),
                        TextFont {
                            font_size: 48.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.16, 0.2, 0.3)),
                    ));

                    panel.spawn((
                        Text::new(format!("{} made in five minutes", theme.currency_name)),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.45, 0.5, 0.6)),
                    ));

                    for line in stat_lines {
                        panel.spawn((
                            Text::new(line),
                            TextFont {
                                font_size: 15.0,
                                ..default()
                            },
                            TextColor(Color::srgb(0.3, 0.35, 0.45)),
                        ));
                    }

                    panel.spawn((
                        Text::new("Enter: Play Again"),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.6, 0.65, 0.7)),
                    ));
                });
        });
}

pub fn despawn_finished_screen(
    mut commands: Commands,
    query: Query<Entity, With<FinishedScreenRoot>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INTERACTION
// ═══════════════════════════════════════════════════════════════════════

pub fn finished_navigation(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut restarts: EventWriter<RestartRequestEvent>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::Space) {
        restarts.send(RestartRequestEvent);
    }
}
