//! Tape record types: `Tape`, drafts, patches and label settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fonts a tape label can be written in.
///
/// Declared in the order the label font picker shows them. The `-bold`
/// variants share a family with their base font and render at a heavier
/// weight; `Bold` is the system font at that weight.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TapeFont {
    Sharpie,
    SharpieBold,
    Handwriting,
    HandwritingBold,
    #[default]
    Default,
    DefaultBold,
    Monospace,
    MonospaceBold,
    Serif,
    SerifBold,
    Bold,
}

impl TapeFont {
    /// Every font, in picker order.
    pub const ALL: [TapeFont; 11] = [
        TapeFont::Sharpie,
        TapeFont::SharpieBold,
        TapeFont::Handwriting,
        TapeFont::HandwritingBold,
        TapeFont::Default,
        TapeFont::DefaultBold,
        TapeFont::Monospace,
        TapeFont::MonospaceBold,
        TapeFont::Serif,
        TapeFont::SerifBold,
        TapeFont::Bold,
    ];

    /// Preferred font family for rendering the label.
    pub fn font_family(self) -> &'static str {
        match self {
            TapeFont::Sharpie | TapeFont::SharpieBold => "Snell Roundhand",
            TapeFont::Handwriting | TapeFont::HandwritingBold => "Bradley Hand",
            TapeFont::Monospace | TapeFont::MonospaceBold => "Courier New",
            TapeFont::Serif | TapeFont::SerifBold => "Georgia",
            TapeFont::Default | TapeFont::DefaultBold | TapeFont::Bold => "System",
        }
    }

    /// Generic family to fall back on when the preferred one is missing.
    pub fn fallback_family(self) -> &'static str {
        match self {
            TapeFont::Sharpie
            | TapeFont::SharpieBold
            | TapeFont::Handwriting
            | TapeFont::HandwritingBold => "cursive",
            TapeFont::Monospace | TapeFont::MonospaceBold => "monospace",
            TapeFont::Serif | TapeFont::SerifBold => "serif",
            TapeFont::Bold => "sans-serif-medium",
            TapeFont::Default | TapeFont::DefaultBold => "sans-serif",
        }
    }

    /// Name shown in the font picker.
    pub fn display_name(self) -> &'static str {
        match self {
            TapeFont::Sharpie => "Sharpie",
            TapeFont::SharpieBold => "Sharpie Bold",
            TapeFont::Handwriting => "Handwriting",
            TapeFont::HandwritingBold => "Handwriting Bold",
            TapeFont::Default => "Default",
            TapeFont::DefaultBold => "Default Bold",
            TapeFont::Monospace => "Monospace",
            TapeFont::MonospaceBold => "Monospace Bold",
            TapeFont::Serif => "Serif",
            TapeFont::SerifBold => "Serif Bold",
            TapeFont::Bold => "Bold",
        }
    }

    /// Whether the label renders with a bold weight.
    pub fn is_bold(self) -> bool {
        matches!(
            self,
            TapeFont::Bold
                | TapeFont::SharpieBold
                | TapeFont::HandwritingBold
                | TapeFont::DefaultBold
                | TapeFont::MonospaceBold
                | TapeFont::SerifBold
        )
    }
}

/// One mixtape on the shelf.
///
/// Stored as camelCase JSON. Missing fields decode to defaults so records
/// written by older builds (or edited by hand) still parse; whether such a
/// record is worth keeping is decided by [`Tape::is_valid`], not the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tape {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Who the tape is for.
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "unix_epoch")]
    pub created_at: DateTime<Utc>,
    /// Id of the shell style the tape is drawn with.
    #[serde(default)]
    pub style_id: String,
    #[serde(default)]
    pub font: TapeFont,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_url: Option<String>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl Tape {
    /// A tape needs an id, a name and a shell style; anything less is
    /// dropped on load and filtered out before saving.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && !self.style_id.is_empty()
    }
}

/// What the caller provides when recording a new tape; the store fills in
/// the id and creation time.
#[derive(Debug, Clone, Default)]
pub struct TapeDraft {
    pub name: String,
    pub to: String,
    pub description: String,
    pub style_id: String,
    pub font: TapeFont,
    pub playlist_url: Option<String>,
}

/// A patch over an existing tape. `None` leaves a field alone.
///
/// `playlist_url` is doubly optional: `Some(None)` clears the link,
/// `Some(Some(url))` replaces it. The id and creation time of a tape are
/// not patchable.
#[derive(Debug, Clone, Default)]
pub struct TapeUpdate {
    pub name: Option<String>,
    pub to: Option<String>,
    pub description: Option<String>,
    pub style_id: Option<String>,
    pub font: Option<TapeFont>,
    pub playlist_url: Option<Option<String>>,
}

impl TapeUpdate {
    pub(crate) fn apply_to(self, tape: &mut Tape) {
        if let Some(name) = self.name {
            tape.name = name;
        }
        if let Some(to) = self.to {
            tape.to = to;
        }
        if let Some(description) = self.description {
            tape.description = description;
        }
        if let Some(style_id) = self.style_id {
            tape.style_id = style_id;
        }
        if let Some(font) = self.font {
            tape.font = font;
        }
        if let Some(playlist_url) = self.playlist_url {
            tape.playlist_url = playlist_url;
        }
    }
}

/// Preferred font for tape labels, persisted separately from the tapes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeLabelSettings {
    #[serde(default)]
    pub font: TapeFont,
}
