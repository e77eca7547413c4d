//! Clicker domain — the incremental economy behind the game screen.
//!
//! Responsible for:
//! - Seeding the session's upgrade roster and wallet on game entry
//! - Scoring manual clicks (base gain plus owned per-click upgrades)
//! - The 100 ms passive income drip while any per-second upgrade is owned
//! - Purchases against the geometric cost curve
//!
//! All arithmetic lives in pure functions; the systems bridge events and
//! the accrual timer to them. The wallet holds f64 so the drip keeps its
//! fractional remainders; displays floor it.

use bevy::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct ClickerPlugin;

impl Plugin for ClickerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Game), setup_economy);
        app.add_systems(OnExit(Screen::Game), teardown_economy);

        // Purchases run before the drip so a freshly bought generator
        // counts from this frame's tick.
        app.add_systems(
            Update,
            (handle_clicks, handle_purchases, tick_accrual)
                .chain()
                .run_if(in_state(Screen::Game)),
        );

        info!("[Clicker] ClickerPlugin registered.");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────────────────

/// Drives the passive income drip. Exists only while the game screen is
/// active so a finished session can never keep accruing.
#[derive(Resource, Debug)]
pub struct AccrualTimer {
    pub timer: Timer,
}

impl Default for AccrualTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(ACCRUAL_TICK_SECS, TimerMode::Repeating),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rates & cost curve
// ─────────────────────────────────────────────────────────────────────────────

/// Gain of one manual click: the base gain plus every owned per-click
/// upgrade at full value.
pub fn per_click_rate(roster: &UpgradeRoster) -> f64 {
    let bonus: f64 = roster
        .upgrades
        .iter()
        .filter(|u| u.kind == UpgradeKind::PerClick)
        .map(|u| u.value * u.owned as f64)
        .sum();
    BASE_CLICK_GAIN + bonus
}

/// Passive income per second: every owned per-second upgrade at full
/// value. Zero until the first generator is bought.
pub fn per_second_rate(roster: &UpgradeRoster) -> f64 {
    roster
        .upgrades
        .iter()
        .filter(|u| u.kind == UpgradeKind::PerSecond)
        .map(|u| u.value * u.owned as f64)
        .sum()
}

/// Price of the next unit after `owned` copies: ceil(base * multiplier^owned).
pub fn next_cost(base_cost: u64, multiplier: f64, owned: u32) -> u64 {
    (base_cost as f64 * multiplier.powi(owned as i32)).ceil() as u64
}

// ─────────────────────────────────────────────────────────────────────────────
// Mutations
// ─────────────────────────────────────────────────────────────────────────────

/// Apply one manual click to the wallet. Returns the amount gained.
pub fn apply_click(wallet: &mut Wallet, roster: &UpgradeRoster) -> f64 {
    let gain = per_click_rate(roster);
    wallet.balance += gain;
    gain
}

/// Apply one 100 ms drip to the wallet: a tenth of the per-second rate.
/// Returns the amount gained.
pub fn apply_accrual_tick(wallet: &mut Wallet, roster: &UpgradeRoster) -> f64 {
    let gain = per_second_rate(roster) / 10.0;
    wallet.balance += gain;
    gain
}

/// Result of a purchase attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    /// Deducted the displayed price, incremented ownership, and repriced
    /// the next unit.
    Purchased { cost_paid: u64 },
    /// The wallet cannot cover the displayed price. Nothing changed.
    InsufficientFunds { needed: u64, have: f64 },
    /// No roster entry has this id. Nothing changed.
    UnknownUpgrade,
}

/// Attempt to buy one unit of an upgrade.
///
/// The price charged is the displayed pre-purchase `cost`; the repriced
/// `cost` only applies from the next unit on.
pub fn apply_purchase(
    wallet: &mut Wallet,
    roster: &mut UpgradeRoster,
    upgrade_id: &str,
) -> PurchaseOutcome {
    let upgrade = match roster.upgrades.iter_mut().find(|u| u.id == upgrade_id) {
        Some(u) => u,
        None => return PurchaseOutcome::UnknownUpgrade,
    };

    let price = upgrade.cost;
    if wallet.balance < price as f64 {
        return PurchaseOutcome::InsufficientFunds {
            needed: price,
            have: wallet.balance,
        };
    }

    wallet.balance -= price as f64;
    upgrade.owned += 1;
    upgrade.cost = next_cost(upgrade.base_cost, upgrade.multiplier, upgrade.owned);

    PurchaseOutcome::Purchased { cost_paid: price }
}

/// Format a currency amount for display: floored, thousands-separated.
pub fn format_amount(amount: f64) -> String {
    let whole = amount.max(0.0).floor() as u64;
    let s = whole.to_string();
    let mut result = String::new();
    let digits: Vec<char> = s.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// OnEnter(Game): seed the session economy from the catalog and start the
/// accrual timer. Every session starts from a zero wallet and a fresh
/// roster copy.
pub fn setup_economy(
    catalog: Res<UpgradeCatalog>,
    mut wallet: ResMut<Wallet>,
    mut roster: ResMut<UpgradeRoster>,
    mut commands: Commands,
) {
    *wallet = Wallet::default();
    roster.upgrades = catalog.upgrades.clone();
    commands.insert_resource(AccrualTimer::default());
    info!(
        "[Clicker] Economy seeded: {} upgrades available",
        roster.upgrades.len()
    );
}

/// OnExit(Game): drop the accrual timer so nothing drips outside the
/// game screen.
pub fn teardown_economy(mut commands: Commands) {
    commands.remove_resource::<AccrualTimer>();
    info!("[Clicker] Economy torn down");
}

/// Processes ClickRequestEvents and reports each gain for UI feedback.
pub fn handle_clicks(
    mut events: EventReader<ClickRequestEvent>,
    mut wallet: ResMut<Wallet>,
    roster: Res<UpgradeRoster>,
    mut stats: ResMut<SessionStats>,
    mut scored: EventWriter<ClickScoredEvent>,
) {
    for _ in events.read() {
        let gain = apply_click(&mut wallet, &roster);
        stats.total_clicks += 1;
        stats.click_earned += gain;
        scored.send(ClickScoredEvent { amount: gain });
    }
}

/// Processes PurchaseRequestEvents against the roster.
pub fn handle_purchases(
    mut events: EventReader<PurchaseRequestEvent>,
    mut wallet: ResMut<Wallet>,
    mut roster: ResMut<UpgradeRoster>,
    mut stats: ResMut<SessionStats>,
) {
    for ev in events.read() {
        match apply_purchase(&mut wallet, &mut roster, &ev.upgrade_id) {
            PurchaseOutcome::Purchased { cost_paid } => {
                stats.upgrades_bought += 1;
                info!(
                    "[Clicker] Bought '{}' for {}. Balance: {}",
                    ev.upgrade_id,
                    cost_paid,
                    format_amount(wallet.balance)
                );
            }
            PurchaseOutcome::InsufficientFunds { needed, have } => {
                warn!(
                    "[Clicker] Purchase of '{}' failed — need {}, have {}",
                    ev.upgrade_id,
                    needed,
                    format_amount(have)
                );
            }
            PurchaseOutcome::UnknownUpgrade => {
                warn!(
                    "[Clicker] Purchase failed — unknown upgrade '{}'",
                    ev.upgrade_id
                );
            }
        }
    }
}

/// Drips passive income every 100 ms.
///
/// While the per-second rate is zero the timer is not ticked at all, so
/// the first generator purchase starts a fresh 100 ms interval instead
/// of cashing in banked elapsed time.
pub fn tick_accrual(
    time: Res<Time>,
    accrual: Option<ResMut<AccrualTimer>>,
    mut wallet: ResMut<Wallet>,
    roster: Res<UpgradeRoster>,
    mut stats: ResMut<SessionStats>,
) {
    let Some(mut accrual) = accrual else {
        return;
    };
    if per_second_rate(&roster) <= 0.0 {
        return;
    }

    let ticks = accrual
        .timer
        .tick(time.delta())
        .times_finished_this_tick();
    for _ in 0..ticks {
        let gain = apply_accrual_tick(&mut wallet, &roster);
        stats.passive_earned += gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upgrade(id: &str, kind: UpgradeKind, value: f64, base_cost: u64, multiplier: f64) -> Upgrade {
        Upgrade {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            icon: "⚙".into(),
            kind,
            value,
            base_cost,
            multiplier,
            cost: base_cost,
            owned: 0,
        }
    }

    fn test_roster() -> UpgradeRoster {
        UpgradeRoster {
            upgrades: vec![
                upgrade("clicker", UpgradeKind::PerClick, 10.0, 15, 1.15),
                upgrade("generator", UpgradeKind::PerSecond, 5.0, 100, 1.15),
                upgrade("big-generator", UpgradeKind::PerSecond, 25.0, 1_500, 1.25),
            ],
        }
    }

    #[test]
    fn test_base_click_rate_is_one() {
        let roster = test_roster();
        assert_eq!(per_click_rate(&roster), 1.0);
    }

    #[test]
    fn test_per_click_rate_sums_owned_upgrades() {
        let mut roster = test_roster();
        roster.upgrades[0].owned = 2;
        assert_eq!(per_click_rate(&roster), 21.0, "1 base + 2 × 10");
    }

    #[test]
    fn test_per_second_rate_sums_owned_upgrades() {
        let mut roster = test_roster();
        roster.upgrades[1].owned = 3;
        roster.upgrades[2].owned = 1;
        assert_eq!(per_second_rate(&roster), 40.0, "3 × 5 + 1 × 25");
    }

    #[test]
    fn test_per_second_rate_zero_without_generators() {
        let mut roster = test_roster();
        roster.upgrades[0].owned = 5;
        assert_eq!(per_second_rate(&roster), 0.0, "Per-click upgrades add nothing passive");
    }

    #[test]
    fn test_cost_curve_base_and_first_steps() {
        assert_eq!(next_cost(15, 1.15, 0), 15);
        assert_eq!(next_cost(15, 1.15, 1), 18, "ceil(17.25)");
        assert_eq!(next_cost(15, 1.15, 2), 20, "ceil(19.8375)");
        assert_eq!(next_cost(15, 1.15, 3), 23, "ceil(22.813125)");
        assert_eq!(next_cost(100, 1.15, 1), 115);
    }

    #[test]
    fn test_cost_curve_exact_multiplier() {
        // 1.25 is exact in binary, so the whole series is exact.
        assert_eq!(next_cost(1_500, 1.25, 1), 1_875);
        assert_eq!(next_cost(1_500, 1.25, 2), 2_344, "ceil(2343.75)");
        assert_eq!(next_cost(1_500, 1.25, 4), 3_663, "ceil(3662.109375)");
    }

    #[test]
    fn test_apply_click_earns_current_rate() {
        let mut roster = test_roster();
        roster.upgrades[0].owned = 2;
        let mut wallet = Wallet::default();

        let gain = apply_click(&mut wallet, &roster);
        assert_eq!(gain, 21.0);
        assert_eq!(wallet.balance, 21.0);
    }

    #[test]
    fn test_accrual_tick_adds_tenth_of_rate() {
        let mut roster = test_roster();
        roster.upgrades[1].owned = 1;
        let mut wallet = Wallet::default();

        let gain = apply_accrual_tick(&mut wallet, &roster);
        assert_eq!(gain, 0.5, "Rate 5 drips 0.5 per tick");
        assert_eq!(wallet.balance, 0.5);
    }

    #[test]
    fn test_ten_accrual_ticks_sum_to_one_second_of_rate() {
        let mut roster = test_roster();
        roster.upgrades[1].owned = 3;
        roster.upgrades[2].owned = 1;
        let rate = per_second_rate(&roster);
        let mut wallet = Wallet::default();

        for _ in 0..10 {
            apply_accrual_tick(&mut wallet, &roster);
        }
        assert!(
            (wallet.balance - rate).abs() < 1e-9,
            "Ten drips ≈ one second of rate: {} vs {}",
            wallet.balance,
            rate
        );
    }

    #[test]
    fn test_purchase_deducts_and_reprices() {
        let mut roster = test_roster();
        let mut wallet = Wallet { balance: 100.0 };

        let outcome = apply_purchase(&mut wallet, &mut roster, "clicker");
        assert_eq!(outcome, PurchaseOutcome::Purchased { cost_paid: 15 });
        assert_eq!(wallet.balance, 85.0);
        assert_eq!(roster.upgrades[0].owned, 1);
        assert_eq!(roster.upgrades[0].cost, 18, "Next unit is repriced");

        let outcome = apply_purchase(&mut wallet, &mut roster, "clicker");
        assert_eq!(outcome, PurchaseOutcome::Purchased { cost_paid: 18 });
        assert_eq!(wallet.balance, 67.0);
        assert_eq!(roster.upgrades[0].cost, 20);
    }

    #[test]
    fn test_purchase_exact_balance_succeeds() {
        let mut roster = test_roster();
        let mut wallet = Wallet { balance: 15.0 };

        let outcome = apply_purchase(&mut wallet, &mut roster, "clicker");
        assert_eq!(outcome, PurchaseOutcome::Purchased { cost_paid: 15 });
        assert_eq!(wallet.balance, 0.0);
    }

    #[test]
    fn test_purchase_insufficient_funds_changes_nothing() {
        let mut roster = test_roster();
        let mut wallet = Wallet { balance: 10.0 };

        let outcome = apply_purchase(&mut wallet, &mut roster, "clicker");
        assert_eq!(
            outcome,
            PurchaseOutcome::InsufficientFunds {
                needed: 15,
                have: 10.0
            }
        );
        assert_eq!(wallet.balance, 10.0);
        assert_eq!(roster.upgrades[0].owned, 0);
        assert_eq!(roster.upgrades[0].cost, 15);
    }

    #[test]
    fn test_purchase_unknown_upgrade_changes_nothing() {
        let mut roster = test_roster();
        let mut wallet = Wallet { balance: 1_000.0 };

        assert_eq!(
            apply_purchase(&mut wallet, &mut roster, "nope"),
            PurchaseOutcome::UnknownUpgrade
        );
        assert_eq!(wallet.balance, 1_000.0);
    }

    #[test]
    fn test_purchases_raise_rates() {
        let mut roster = test_roster();
        let mut wallet = Wallet { balance: 10_000.0 };

        apply_purchase(&mut wallet, &mut roster, "clicker");
        apply_purchase(&mut wallet, &mut roster, "generator");
        apply_purchase(&mut wallet, &mut roster, "generator");

        assert_eq!(per_click_rate(&roster), 11.0);
        assert_eq!(per_second_rate(&roster), 10.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.9), "999", "Display floors fractions");
        assert_eq!(format_amount(1_234.0), "1,234");
        assert_eq!(format_amount(25_000.5), "25,000");
        assert_eq!(format_amount(1_000_000.0), "1,000,000");
    }

    #[test]
    fn test_format_amount_negative_clamps_to_zero() {
        assert_eq!(format_amount(-3.2), "0");
    }
}
