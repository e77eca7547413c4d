use bevy::prelude::*;
use crate::shared::*;

/// Populate the ThemeCatalog with the named series skins.
///
/// Lookup is a case-insensitive substring match on the topic, so
/// "naruto shippuden" still lands on the Naruto theme. Topics matching
/// nothing use `Theme::default()` (the sushi skin).
pub fn populate_themes(catalog: &mut ThemeCatalog) {
    catalog.themes = vec![
        Theme {
            name: "One Piece".into(),
            currency_icon: "🍖".into(),
            currency_name: "Meat".into(),
            main_glyphs: vec![
                "👒".into(),
                "🏴‍☠️".into(),
                "🍖".into(),
                "🍊".into(),
                "⚔️".into(),
            ],
            background: Color::srgb(0.94, 0.96, 1.0),
            accent: Color::srgb(0.79, 0.54, 0.02),
        },
        Theme {
            name: "Naruto".into(),
            currency_icon: "🍜".into(),
            currency_name: "Ramen".into(),
            main_glyphs: vec![
                "🍥".into(),
                "🍜".into(),
                "🍃".into(),
                "🧿".into(),
                "🦊".into(),
            ],
            background: Color::srgb(1.0, 0.97, 0.93),
            accent: Color::srgb(0.92, 0.35, 0.05),
        },
        Theme {
            name: "One Punch Man".into(),
            currency_icon: "👊".into(),
            currency_name: "Punches".into(),
            main_glyphs: vec![
                "👊".into(),
                "🥚".into(),
                "🦸‍♂️".into(),
                "🛒".into(),
                "💢".into(),
            ],
            background: Color::srgb(1.0, 0.99, 0.91),
            accent: Color::srgb(0.86, 0.15, 0.15),
        },
        Theme {
            name: "Demon Slayer".into(),
            currency_icon: "⚔️".into(),
            currency_name: "Slices".into(),
            main_glyphs: vec![
                "⚔️".into(),
                "👺".into(),
                "🌊".into(),
                "🦋".into(),
                "🐗".into(),
            ],
            background: Color::srgb(0.98, 0.96, 1.0),
            accent: Color::srgb(0.31, 0.27, 0.90),
        },
        Theme {
            name: "Chainsaw Man".into(),
            currency_icon: "🪚".into(),
            currency_name: "Rips".into(),
            main_glyphs: vec![
                "🪚".into(),
                "🐶".into(),
                "🩸".into(),
                "🚬".into(),
                "😈".into(),
            ],
            background: Color::srgb(1.0, 0.95, 0.95),
            accent: Color::srgb(0.73, 0.11, 0.11),
        },
        Theme {
            name: "Jujutsu Kaisen".into(),
            currency_icon: "🧿".into(),
            currency_name: "Cursed Energy".into(),
            main_glyphs: vec![
                "🧿".into(),
                "🤞".into(),
                "👹".into(),
                "🐼".into(),
                "🕶️".into(),
            ],
            // The one dark skin in the table
            background: Color::srgb(0.06, 0.09, 0.16),
            accent: Color::srgb(0.38, 0.65, 0.98),
        },
        Theme {
            name: "Attack on Titan".into(),
            currency_icon: "🧱".into(),
            currency_name: "Freedom".into(),
            main_glyphs: vec![
                "🧱".into(),
                "🕊️".into(),
                "⚔️".into(),
                "🦷".into(),
                "🔥".into(),
            ],
            background: Color::srgb(0.96, 0.96, 0.96),
            accent: Color::srgb(0.57, 0.25, 0.05),
        },
        Theme {
            name: "Spy x Family".into(),
            currency_icon: "🥜".into(),
            currency_name: "Peanuts".into(),
            main_glyphs: vec![
                "🥜".into(),
                "🔫".into(),
                "🧸".into(),
                "🍷".into(),
                "⭐".into(),
            ],
            background: Color::srgb(0.99, 0.95, 0.97),
            accent: Color::srgb(0.86, 0.15, 0.47),
        },
    ];
}
