//! Palette → style document mapping.

use tracing::trace;

use super::color::with_alpha;
use super::rules::{PLAYER_RULE, Rule, STYLE_RULES, SYNTAX_RULES};
use super::style::{Player, StyleDocument, SyntaxStyle};
use crate::error::Result;
use crate::palette::Palette;

/// Map a palette onto the fixed Zed style schema.
///
/// Rules are evaluated in table order and the first slot missing from the
/// palette aborts with [`ThemeError::MissingColorSlot`](crate::error::ThemeError::MissingColorSlot).
/// Palette slots no rule reads are ignored.
pub fn map(palette: &Palette) -> Result<StyleDocument> {
    let mut roles = Vec::with_capacity(STYLE_RULES.len());
    for &(role, rule) in STYLE_RULES {
        roles.push((role, resolve(palette, rule)?));
    }

    let players = vec![Player {
        cursor: palette.color(PLAYER_RULE.cursor)?.to_string(),
        selection: palette.color(PLAYER_RULE.selection)?.to_string(),
        background: palette.color(PLAYER_RULE.background)?.to_string(),
    }];

    let mut syntax = Vec::with_capacity(SYNTAX_RULES.len());
    for rule in SYNTAX_RULES {
        let style = SyntaxStyle {
            color: Some(palette.color(rule.color)?.to_string()),
            font_style: rule.font_style.map(str::to_string),
            font_weight: None,
        };
        syntax.push((rule.category, style));
    }

    trace!(
        roles = roles.len(),
        syntax = syntax.len(),
        "Mapped palette to style document"
    );

    Ok(StyleDocument {
        roles,
        players,
        syntax,
    })
}

fn resolve(palette: &Palette, rule: Rule) -> Result<Option<String>> {
    Ok(match rule {
        Rule::Slot(slot) => Some(palette.color(slot)?.to_string()),
        Rule::Alpha(slot, alpha) => Some(with_alpha(palette.color(slot)?, alpha)),
        Rule::Null => None,
    })
}
