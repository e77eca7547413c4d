//! Data layer — populates all catalogs at game startup.
//!
//! This plugin runs in OnEnter(Screen::Loading), fills every catalog
//! (UpgradeCatalog, ThemeCatalog, QuestionBank) from the hard-coded
//! game-design data defined in submodules, then transitions the game
//! into Screen::Setup.
//!
//! No other domain needs to seed these resources. All domain plugins can
//! safely read them once Screen has advanced past Loading.

mod bank;
mod themes;
mod upgrades;

use bevy::prelude::*;
use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Loading), load_all_data);
    }
}

/// Single system that populates every catalog and then transitions to Setup.
///
/// The catalogs never change after this point; sessions copy what they
/// need (the upgrade roster) into their own resources.
fn load_all_data(
    mut upgrade_catalog: ResMut<UpgradeCatalog>,
    mut theme_catalog: ResMut<ThemeCatalog>,
    mut question_bank: ResMut<QuestionBank>,
    mut next_state: ResMut<NextState<Screen>>,
) {
    info!("DataPlugin: populating catalogs…");

    upgrades::populate_upgrades(&mut upgrade_catalog);
    info!(
        "  Upgrades loaded: {}",
        upgrade_catalog.upgrades.len()
    );

    themes::populate_themes(&mut theme_catalog);
    info!(
        "  Themes loaded: {}",
        theme_catalog.themes.len()
    );

    bank::populate_bank(&mut question_bank);
    let pooled: usize = question_bank.pools.iter().map(|p| p.questions.len()).sum();
    info!(
        "  Bank questions loaded: {} across {} pools, {} general",
        pooled,
        question_bank.pools.len(),
        question_bank.general.len()
    );

    info!("DataPlugin: all catalogs populated. Transitioning to Setup.");
    next_state.set(Screen::Setup);
}
