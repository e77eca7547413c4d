use crate::shared::*;

/// Populate the UpgradeCatalog with the fixed 11-entry roster.
///
/// Ordering is the shop display order. Every entry starts unowned with
/// `cost == base_cost`; the live roster reprices after each purchase.
pub fn populate_upgrades(catalog: &mut UpgradeCatalog) {
    catalog.upgrades = vec![
        // ── Early game ──────────────────────────────────────────────────────
        Upgrade {
            id: "basic-tool".into(),
            name: "Beginner Skill".into(),
            description: "+1 per click".into(),
            icon: "💡".into(),
            kind: UpgradeKind::PerClick,
            value: 1.0,
            base_cost: 15,
            multiplier: 1.15,
            cost: 15,
            owned: 0,
        },
        Upgrade {
            id: "apprentice".into(),
            name: "Apprentice".into(),
            description: "1 per second".into(),
            icon: "🌱".into(),
            kind: UpgradeKind::PerSecond,
            value: 1.0,
            base_cost: 100,
            multiplier: 1.15,
            cost: 100,
            owned: 0,
        },
        Upgrade {
            id: "automated-helper".into(),
            name: "Turbo Assistant".into(),
            description: "5 per second".into(),
            icon: "⚡".into(),
            kind: UpgradeKind::PerSecond,
            value: 5.0,
            base_cost: 500,
            multiplier: 1.2,
            cost: 500,
            owned: 0,
        },
        Upgrade {
            id: "master-skill".into(),
            name: "Master Technique".into(),
            description: "+10 per click".into(),
            icon: "🔥".into(),
            kind: UpgradeKind::PerClick,
            value: 10.0,
            base_cost: 1_500,
            multiplier: 1.25,
            cost: 1_500,
            owned: 0,
        },

        // ── Mid game ────────────────────────────────────────────────────────
        Upgrade {
            id: "elite-system".into(),
            name: "Ultimate Empire".into(),
            description: "25 per second".into(),
            icon: "👑".into(),
            kind: UpgradeKind::PerSecond,
            value: 25.0,
            base_cost: 3_000,
            multiplier: 1.3,
            cost: 3_000,
            owned: 0,
        },
        Upgrade {
            id: "research-lab".into(),
            name: "Research Lab".into(),
            description: "70 per second".into(),
            icon: "🧬".into(),
            kind: UpgradeKind::PerSecond,
            value: 70.0,
            base_cost: 10_000,
            multiplier: 1.3,
            cost: 10_000,
            owned: 0,
        },
        Upgrade {
            id: "legendary-sensei".into(),
            name: "Legendary Sensei".into(),
            description: "+50 per click".into(),
            icon: "🧘".into(),
            kind: UpgradeKind::PerClick,
            value: 50.0,
            base_cost: 25_000,
            multiplier: 1.35,
            cost: 25_000,
            owned: 0,
        },
        Upgrade {
            id: "global-network".into(),
            name: "Global Network".into(),
            description: "200 per second".into(),
            icon: "🌐".into(),
            kind: UpgradeKind::PerSecond,
            value: 200.0,
            base_cost: 75_000,
            multiplier: 1.4,
            cost: 75_000,
            owned: 0,
        },

        // ── Late game ───────────────────────────────────────────────────────
        Upgrade {
            id: "quantum-core".into(),
            name: "Quantum Core".into(),
            description: "600 per second".into(),
            icon: "⚛️".into(),
            kind: UpgradeKind::PerSecond,
            value: 600.0,
            base_cost: 250_000,
            multiplier: 1.4,
            cost: 250_000,
            owned: 0,
        },
        Upgrade {
            id: "transcendent-power".into(),
            name: "Transcendent Power".into(),
            description: "+500 per click".into(),
            icon: "✨".into(),
            kind: UpgradeKind::PerClick,
            value: 500.0,
            base_cost: 1_000_000,
            multiplier: 1.45,
            cost: 1_000_000,
            owned: 0,
        },
        Upgrade {
            id: "universal-singularity".into(),
            name: "Universal Singularity".into(),
            description: "2500 per second".into(),
            icon: "🌌".into(),
            kind: UpgradeKind::PerSecond,
            value: 2_500.0,
            base_cost: 5_000_000,
            multiplier: 1.5,
            cost: 5_000_000,
            owned: 0,
        },
    ];
}
