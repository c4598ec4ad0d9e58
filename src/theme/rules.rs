//! The declarative role table.
//!
//! Every entry names a Zed style role and where its value comes from. The
//! table order is the serialization order of the generated style document.

/// Source of a single flat role value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The palette slot's value as-is.
    Slot(&'static str),
    /// The palette slot's value with a two-character alpha suffix.
    Alpha(&'static str, &'static str),
    /// Explicit `null`: leave the role to Zed's default.
    Null,
}

impl Rule {
    /// Palette slot this rule reads, if any.
    pub const fn slot(self) -> Option<&'static str> {
        match self {
            Self::Slot(slot) | Self::Alpha(slot, _) => Some(slot),
            Self::Null => None,
        }
    }
}

/// Color and font settings for one syntax-highlighting category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxRule {
    pub category: &'static str,
    pub color: &'static str,
    pub font_style: Option<&'static str>,
}

/// Slots for the single player (local cursor) descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerRule {
    pub cursor: &'static str,
    pub selection: &'static str,
    pub background: &'static str,
}

use Rule::{Alpha, Null, Slot};

pub static STYLE_RULES: &[(&str, Rule)] = &[
    // Borders
    ("border", Slot("bg_dim")),
    ("border.variant", Slot("bg_dim")),
    ("border.focused", Slot("bg0")),
    ("border.selected", Slot("bg_dim")),
    ("border.transparent", Slot("bg_dim")),
    ("border.disabled", Slot("bg_dim")),
    // Surfaces
    ("elevated_surface.background", Slot("bg1")),
    ("surface.background", Slot("bg0")),
    ("background", Slot("bg0")),
    // Elements
    ("element.background", Slot("bg_dim")),
    ("element.hover", Slot("bg1")),
    ("element.active", Null),
    ("element.selected", Slot("bg_dim")),
    ("element.disabled", Null),
    ("drop_target.background", Slot("bg1")),
    // Ghost elements
    ("ghost_element.background", Null),
    ("ghost_element.hover", Alpha("bg0", "00")),
    ("ghost_element.active", Null),
    ("ghost_element.selected", Alpha("bg_dim", "80")),
    ("ghost_element.disabled", Null),
    // Text
    ("text", Slot("fg")),
    ("text.muted", Slot("grey0")),
    ("text.placeholder", Slot("grey0")),
    ("text.disabled", Slot("grey0")),
    ("text.accent", Slot("green")),
    // Icons
    ("icon", Slot("fg")),
    ("icon.muted", Slot("grey0")),
    ("icon.disabled", Slot("grey0")),
    ("icon.placeholder", Slot("grey0")),
    ("icon.accent", Slot("green")),
    // Window chrome
    ("status_bar.background", Slot("bg_dim")),
    ("title_bar.background", Slot("bg_dim")),
    ("toolbar.background", Slot("bg0")),
    ("tab_bar.background", Slot("bg_dim")),
    ("tab.inactive_background", Slot("bg_dim")),
    ("tab.active_background", Slot("bg0")),
    ("search.match_background", Slot("bg_yellow")),
    ("panel.background", Slot("bg_dim")),
    ("panel.focused_border", Slot("green")),
    ("pane.focused_border", Slot("green")),
    // Scrollbar
    ("scrollbar.thumb.background", Alpha("bg3", "80")),
    ("scrollbar.thumb.hover_background", Slot("bg3")),
    ("scrollbar.thumb.border", Alpha("bg3", "80")),
    ("scrollbar.track.background", Slot("bg0")),
    ("scrollbar.track.border", Alpha("bg0", "00")),
    // Editor
    ("editor.foreground", Slot("fg")),
    ("editor.background", Slot("bg0")),
    ("editor.gutter.background", Slot("bg0")),
    ("editor.subheader.background", Slot("bg1")),
    ("editor.active_line.background", Alpha("bg_dim", "90")),
    ("editor.highlighted_line.background", Alpha("bg_dim", "30")),
    ("editor.line_number", Alpha("grey0", "80")),
    ("editor.active_line_number", Slot("fg")),
    ("editor.invisible", Slot("grey0")),
    ("editor.wrap_guide", Slot("bg1")),
    ("editor.active_wrap_guide", Slot("bg_dim")),
    ("editor.document_highlight.read_background", Alpha("bg_blue", "40")),
    ("editor.document_highlight.write_background", Alpha("bg_red", "40")),
    // Terminal
    ("terminal.background", Slot("bg0")),
    ("terminal.foreground", Slot("fg")),
    ("terminal.bright_foreground", Slot("fg")),
    ("terminal.dim_foreground", Slot("grey0")),
    ("terminal.ansi.black", Slot("bg1")),
    ("terminal.ansi.bright_black", Slot("grey1")),
    ("terminal.ansi.dim_black", Slot("grey0")),
    ("terminal.ansi.red", Slot("red")),
    ("terminal.ansi.bright_red", Slot("red")),
    ("terminal.ansi.dim_red", Alpha("red", "80")),
    ("terminal.ansi.green", Slot("green")),
    ("terminal.ansi.bright_green", Slot("green")),
    ("terminal.ansi.dim_green", Alpha("green", "80")),
    ("terminal.ansi.yellow", Slot("yellow")),
    ("terminal.ansi.bright_yellow", Slot("yellow")),
    ("terminal.ansi.dim_yellow", Alpha("yellow", "80")),
    ("terminal.ansi.blue", Slot("blue")),
    ("terminal.ansi.bright_blue", Slot("blue")),
    ("terminal.ansi.dim_blue", Alpha("blue", "80")),
    ("terminal.ansi.magenta", Slot("purple")),
    ("terminal.ansi.bright_magenta", Slot("purple")),
    ("terminal.ansi.dim_magenta", Alpha("purple", "80")),
    ("terminal.ansi.cyan", Slot("aqua")),
    ("terminal.ansi.bright_cyan", Slot("aqua")),
    ("terminal.ansi.dim_cyan", Alpha("aqua", "80")),
    ("terminal.ansi.white", Slot("fg")),
    ("terminal.ansi.bright_white", Slot("fg")),
    ("terminal.ansi.dim_white", Slot("grey2")),
    // Links
    ("link_text.hover", Slot("green")),
    // Status
    ("conflict", Slot("purple")),
    ("conflict.background", Slot("bg_purple")),
    ("conflict.border", Slot("purple")),
    ("created", Slot("green")),
    ("created.background", Slot("bg_green")),
    ("created.border", Slot("green")),
    ("deleted", Slot("red")),
    ("deleted.background", Slot("bg_red")),
    ("deleted.border", Slot("red")),
    ("error", Slot("red")),
    ("error.background", Slot("bg_red")),
    ("error.border", Slot("red")),
    ("hidden", Slot("grey0")),
    ("hidden.background", Null),
    ("hidden.border", Null),
    ("hint", Slot("aqua")),
    ("hint.background", Slot("bg_green")),
    ("hint.border", Slot("aqua")),
    ("ignored", Slot("grey0")),
    ("ignored.background", Null),
    ("ignored.border", Null),
    ("info", Slot("blue")),
    ("info.background", Slot("bg_blue")),
    ("info.border", Slot("blue")),
    ("modified", Slot("yellow")),
    ("modified.background", Slot("bg_yellow")),
    ("modified.border", Slot("yellow")),
    ("predictive", Slot("grey0")),
    ("predictive.background", Null),
    ("predictive.border", Null),
    ("renamed", Slot("aqua")),
    ("renamed.background", Slot("bg_green")),
    ("renamed.border", Slot("aqua")),
    ("success", Slot("green")),
    ("success.background", Slot("bg_green")),
    ("success.border", Slot("green")),
    ("unreachable", Slot("grey0")),
    ("unreachable.background", Null),
    ("unreachable.border", Null),
    ("warning", Slot("yellow")),
    ("warning.background", Slot("bg_yellow")),
    ("warning.border", Slot("yellow")),
];

pub static PLAYER_RULE: PlayerRule = PlayerRule {
    cursor: "fg",
    selection: "bg_dim",
    background: "bg_dim",
};

const fn syntax(category: &'static str, color: &'static str) -> SyntaxRule {
    SyntaxRule {
        category,
        color,
        font_style: None,
    }
}

pub static SYNTAX_RULES: &[SyntaxRule] = &[
    syntax("attribute", "purple"),
    syntax("constant", "purple"),
    syntax("constructor", "green"),
    SyntaxRule {
        category: "comment",
        color: "grey1",
        font_style: Some("italic"),
    },
    syntax("function", "green"),
    syntax("keyword", "red"),
    syntax("number", "purple"),
    syntax("operator", "orange"),
    syntax("property", "aqua"),
    syntax("string", "green"),
    syntax("string.escape", "aqua"),
    syntax("type", "yellow"),
    syntax("variable", "fg"),
];

/// Every palette slot the tables read, sorted and deduplicated.
pub fn required_slots() -> Vec<&'static str> {
    let mut slots: Vec<&'static str> = STYLE_RULES
        .iter()
        .filter_map(|(_, rule)| rule.slot())
        .chain([PLAYER_RULE.cursor, PLAYER_RULE.selection, PLAYER_RULE.background])
        .chain(SYNTAX_RULES.iter().map(|rule| rule.color))
        .collect();
    slots.sort_unstable();
    slots.dedup();
    slots
}
