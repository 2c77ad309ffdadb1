//! The built-in cassette shell catalog.
//!
//! Styles are a fixed set baked into the app; tapes reference them by id.
//! Color values are CSS-style strings handed straight to the renderer.

/// Visual identity of a cassette shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapeStyle {
    pub id: &'static str,
    pub name: &'static str,
    /// Gradient stops for the shell body, top to bottom.
    pub cassette_body: &'static [&'static str],
    pub label_stripe: &'static str,
    pub window_color: &'static str,
    pub reel_color: &'static str,
}

/// Look up a style by id, falling back to the first catalog entry when the
/// id is unknown. Tapes that reference a retired style keep rendering.
pub fn style_or_default(style_id: &str) -> &'static TapeStyle {
    TAPE_STYLES
        .iter()
        .find(|style| style.id == style_id)
        .unwrap_or(&TAPE_STYLES[0])
}

pub const TAPE_STYLES: [TapeStyle; 29] = [
    TapeStyle {
        id: "classic-red",
        name: "Classic Red",
        cassette_body: &["#F5E6D3", "#E8D4B0"],
        label_stripe: "#FF6B6B",
        window_color: "rgba(0, 0, 0, 0.8)",
        reel_color: "#1A1A1A",
    },
    TapeStyle {
        id: "miami-orange",
        name: "Miami Orange",
        cassette_body: &["#FFE66D", "#FF9F1C"],
        label_stripe: "#FF006E",
        window_color: "rgba(0, 0, 0, 0.8)",
        reel_color: "#240046",
    },
    TapeStyle {
        id: "neon-cyan",
        name: "Neon Cyan",
        cassette_body: &["#00F5FF", "#0080FF"],
        label_stripe: "#FF1493",
        window_color: "rgba(0, 0, 0, 0.9)",
        reel_color: "#8B008B",
    },
    TapeStyle {
        id: "sunset-yellow",
        name: "Sunset Yellow",
        cassette_body: &["#FFE082", "#FFCC02"],
        label_stripe: "#FF4081",
        window_color: "rgba(0, 0, 0, 0.8)",
        reel_color: "#6A1B9A",
    },
    TapeStyle {
        id: "purple-haze",
        name: "Purple Haze",
        cassette_body: &["#FF00FF", "#CC00CC"],
        label_stripe: "#00FFFF",
        window_color: "rgba(0, 0, 0, 0.9)",
        reel_color: "#000033",
    },
    TapeStyle {
        id: "mint-green",
        name: "Mint Green",
        cassette_body: &["#06FFA5", "#00CC88"],
        label_stripe: "#FF6B35",
        window_color: "rgba(0, 0, 0, 0.8)",
        reel_color: "#1B263B",
    },
    TapeStyle {
        id: "hot-pink",
        name: "Hot Pink",
        cassette_body: &["#FF69B4", "#FF1493"],
        label_stripe: "#FFD700",
        window_color: "rgba(0, 0, 0, 0.8)",
        reel_color: "#4B0082",
    },
    TapeStyle {
        id: "electric-blue",
        name: "Electric Blue",
        cassette_body: &["#4169E1", "#1E90FF"],
        label_stripe: "#FF4500",
        window_color: "rgba(0, 0, 0, 0.85)",
        reel_color: "#191970",
    },
    TapeStyle {
        id: "lime-green",
        name: "Lime Green",
        cassette_body: &["#32CD32", "#00FF00"],
        label_stripe: "#FF00FF",
        window_color: "rgba(0, 0, 0, 0.8)",
        reel_color: "#006400",
    },
    TapeStyle {
        id: "golden-hour",
        name: "Golden Hour",
        cassette_body: &["#FFD700", "#FFA500"],
        label_stripe: "#DC143C",
        window_color: "rgba(0, 0, 0, 0.8)",
        reel_color: "#8B4513",
    },
    TapeStyle {
        id: "pastel-pink",
        name: "Pastel Pink",
        cassette_body: &["#FFD1DC", "#FFC0CB"],
        label_stripe: "#FFB6C1",
        window_color: "rgba(0, 0, 0, 0.7)",
        reel_color: "#8B7D82",
    },
    TapeStyle {
        id: "pastel-blue",
        name: "Pastel Blue",
        cassette_body: &["#B0E0E6", "#ADD8E6"],
        label_stripe: "#87CEEB",
        window_color: "rgba(0, 0, 0, 0.7)",
        reel_color: "#4682B4",
    },
    TapeStyle {
        id: "pastel-mint",
        name: "Pastel Mint",
        cassette_body: &["#C1FFC1", "#B4EEB4"],
        label_stripe: "#9ACD32",
        window_color: "rgba(0, 0, 0, 0.7)",
        reel_color: "#556B2F",
    },
    TapeStyle {
        id: "pastel-lavender",
        name: "Pastel Lavender",
        cassette_body: &["#E6E6FA", "#DDA0DD"],
        label_stripe: "#DA70D6",
        window_color: "rgba(0, 0, 0, 0.7)",
        reel_color: "#8B668B",
    },
    TapeStyle {
        id: "pastel-peach",
        name: "Pastel Peach",
        cassette_body: &["#FFDAB9", "#FFE4B5"],
        label_stripe: "#FFA07A",
        window_color: "rgba(0, 0, 0, 0.7)",
        reel_color: "#CD853F",
    },
    TapeStyle {
        id: "pastel-yellow",
        name: "Pastel Yellow",
        cassette_body: &["#FFFACD", "#FFEFD5"],
        label_stripe: "#FFD700",
        window_color: "rgba(0, 0, 0, 0.7)",
        reel_color: "#DAA520",
    },
    TapeStyle {
        id: "black-white",
        name: "Black & White",
        cassette_body: &["#FFFFFF", "#F5F5F5"],
        label_stripe: "#000000",
        window_color: "rgba(0, 0, 0, 0.9)",
        reel_color: "#1A1A1A",
    },
    TapeStyle {
        id: "charcoal-gray",
        name: "Charcoal Gray",
        cassette_body: &["#696969", "#808080"],
        label_stripe: "#2F4F4F",
        window_color: "rgba(0, 0, 0, 0.9)",
        reel_color: "#000000",
    },
    TapeStyle {
        id: "silver-white",
        name: "Silver White",
        cassette_body: &["#E8E8E8", "#D3D3D3"],
        label_stripe: "#A9A9A9",
        window_color: "rgba(0, 0, 0, 0.8)",
        reel_color: "#696969",
    },
    TapeStyle {
        id: "smoke-gray",
        name: "Smoke Gray",
        cassette_body: &["#C0C0C0", "#A8A8A8"],
        label_stripe: "#708090",
        window_color: "rgba(0, 0, 0, 0.85)",
        reel_color: "#2F4F4F",
    },
    TapeStyle {
        id: "disco",
        name: "Disco",
        cassette_body: &["#FF00FF", "#FFD700"],
        label_stripe: "#00FFFF",
        window_color: "rgba(0, 0, 0, 0.9)",
        reel_color: "#8B008B",
    },
    TapeStyle {
        id: "disco-gold",
        name: "Disco Ball Gold",
        cassette_body: &["#FFD700", "#FFC700", "#FFB700", "#FFA500", "#FFD700"],
        label_stripe: "#FF00FF",
        window_color: "rgba(0, 0, 0, 0.9)",
        reel_color: "#8B4513",
    },
    TapeStyle {
        id: "disco-silver",
        name: "Disco Ball Silver",
        cassette_body: &["#F5F5F5", "#E8E8E8", "#D3D3D3", "#C0C0C0", "#E8E8E8"],
        label_stripe: "#FF1493",
        window_color: "rgba(0, 0, 0, 0.9)",
        reel_color: "#696969",
    },
    TapeStyle {
        id: "christmas-red",
        name: "Christmas Red",
        cassette_body: &["#C41E3A", "#A0192C"],
        label_stripe: "#165B33",
        window_color: "rgba(0, 0, 0, 0.9)",
        reel_color: "#0F4D21",
    },
    TapeStyle {
        id: "christmas-green",
        name: "Christmas Green",
        cassette_body: &["#165B33", "#0F4D21"],
        label_stripe: "#C41E3A",
        window_color: "rgba(0, 0, 0, 0.9)",
        reel_color: "#8B0000",
    },
    TapeStyle {
        id: "festive-gold",
        name: "Festive Gold",
        cassette_body: &["#FFD700", "#B8860B"],
        label_stripe: "#8B0000",
        window_color: "rgba(0, 0, 0, 0.85)",
        reel_color: "#2F4F4F",
    },
    TapeStyle {
        id: "snowflake-white",
        name: "Snowflake White",
        cassette_body: &["#FFFAFA", "#F0F8FF"],
        label_stripe: "#4682B4",
        window_color: "rgba(0, 0, 0, 0.8)",
        reel_color: "#1A1A1A",
    },
    TapeStyle {
        id: "hanukkah-blue",
        name: "Hanukkah Blue",
        cassette_body: &["#0038A8", "#003399"],
        label_stripe: "#FFFFFF",
        window_color: "rgba(0, 0, 0, 0.9)",
        reel_color: "#000033",
    },
    TapeStyle {
        id: "hanukkah-silver",
        name: "Hanukkah Silver",
        cassette_body: &["#C0C0C0", "#A8A8A8"],
        label_stripe: "#0038A8",
        window_color: "rgba(0, 0, 0, 0.85)",
        reel_color: "#003399",
    },
];
