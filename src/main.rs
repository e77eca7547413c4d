mod shared;
mod clicker;
mod data;
mod provider;
mod quiz;
mod session;
mod ui;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Scholar Clickers".into(),
                    resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                    present_mode: PresentMode::AutoVsync,
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        // Screen state
        .init_state::<Screen>()
        // Shared resources
        .init_resource::<ActiveQuiz>()
        .init_resource::<QuizProgress>()
        .init_resource::<Wallet>()
        .init_resource::<UpgradeRoster>()
        .init_resource::<SessionTheme>()
        .init_resource::<SetupStatus>()
        .init_resource::<SessionStats>()
        .init_resource::<UpgradeCatalog>()
        .init_resource::<ThemeCatalog>()
        .init_resource::<QuestionBank>()
        // Events
        .add_event::<GenerateQuizEvent>()
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
        .add_event::<ToastEvent>()
        // Domain plugins
        .add_plugins(provider::ProviderPlugin)
        .add_plugins(quiz::QuizPlugin)
        .add_plugins(clicker::ClickerPlugin)
        .add_plugins(session::SessionPlugin)
        .add_plugins(ui::UiPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
