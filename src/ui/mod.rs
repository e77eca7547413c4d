mod finished_screen;
mod game_screen;
mod quiz_screen;
mod setup_screen;
mod toast;

use bevy::prelude::*;
use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // ─── TOASTS — always present ───
        app.add_systems(Startup, toast::spawn_toast_container);
        app.add_systems(
            Update,
            (toast::handle_toast_events, toast::update_toasts).chain(),
        );

        // ─── SETUP SCREEN ───
        app.add_systems(OnEnter(Screen::Setup), setup_screen::spawn_setup_screen);
        app.add_systems(OnExit(Screen::Setup), setup_screen::despawn_setup_screen);
        app.add_systems(
            Update,
            (
                setup_screen::setup_navigation,
                setup_screen::update_setup_display,
            )
                .run_if(in_state(Screen::Setup)),
        );

        // ─── QUIZ SCREEN ───
        app.add_systems(OnEnter(Screen::Quiz), quiz_screen::spawn_quiz_screen);
        app.add_systems(OnExit(Screen::Quiz), quiz_screen::despawn_quiz_screen);
        app.add_systems(
            Update,
            (
                quiz_screen::quiz_navigation,
                quiz_screen::update_quiz_display,
            )
                .run_if(in_state(Screen::Quiz)),
        );

        // ─── GAME SCREEN ───
        app.add_systems(OnEnter(Screen::Game), game_screen::spawn_game_screen);
        app.add_systems(OnExit(Screen::Game), game_screen::despawn_game_screen);
        app.add_systems(
            Update,
            (
                game_screen::game_input,
                game_screen::update_game_display,
                game_screen::spawn_click_feedback,
                game_screen::update_click_feedback,
            )
                .run_if(in_state(Screen::Game)),
        );

        // ─── FINISHED SCREEN ───
        app.add_systems(OnEnter(Screen::Finished), finished_screen::spawn_finished_screen);
        app.add_systems(OnExit(Screen::Finished), finished_screen::despawn_finished_screen);
        app.add_systems(
            Update,
            finished_screen::finished_navigation.run_if(in_state(Screen::Finished)),
        );
    }
}
