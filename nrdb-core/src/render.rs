//! Render a [`CardEntry`] as a chat message.
//!
//! Both variants share one pipeline and differ only in the markup tokens:
//! a title line, a bold bullet-separated subtitle of stats, and the rules
//! text with game symbols swapped for glyphs.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::catalog::CardEntry;
use crate::types::{Card, Stat};

/// Output markup flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    /// HTML subset understood by Matrix clients (`org.matrix.custom.html`).
    #[default]
    Rich,
    /// Markdown-ish plain text.
    Plain,
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rich => write!(f, "rich"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

impl FromStr for Markup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rich" | "html" => Ok(Self::Rich),
            "plain" | "markdown" | "md" => Ok(Self::Plain),
            other => Err(format!("unknown markup '{other}' (expected rich or plain)")),
        }
    }
}

/// Game symbol tokens in rules text and their glyphs.
const GLYPHS: &[(&str, &str)] = &[
    ("[click]", "🕗"),
    ("[subroutine]", "↳"),
    ("[link]", "🔗"),
    ("[credit]", "🪙"),
    ("[interrupt]", "⚡"),
    ("[mu]", "🔋"),
    ("[recurring-credit]", "🪙↻"),
    ("[trash]", "🗑"),
];

/// Faction code (side suffix stripped) → display color.
const FACTION_COLORS: &[(&str, &str)] = &[
    ("anarch", "orangered"),
    ("criminal", "royalblue"),
    ("shaper", "limegreen"),
    ("neutral", "gray"),
    ("adam", "olive"),
    ("sunny-lebeau", "lightslategray"),
    ("apex", "red"),
    ("weyland-consortium", "darkgreen"),
    ("nbn", "darkorange"),
    ("haas-bioroid", "blueviolet"),
    ("jinteki", "crimson"),
];

/// Card types whose `cost` is a rez cost.
const REZ_TYPES: &[&str] = &["asset", "upgrade", "ice"];

const UNIQUE_MARKER: &str = "◆ ";
const INFLUENCE_PIPS: i64 = 5;

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("static pattern"));

/// Render a card in the requested markup.
pub fn render(entry: &CardEntry, markup: Markup) -> String {
    let card = &entry.card;
    let mut lines = vec![title_line(entry, markup)];
    lines.extend(subtitle_line(entry, markup));

    if let Some(text) = card.text.as_deref().filter(|t| !t.is_empty()) {
        let text = substitute_glyphs(text);
        lines.push(match markup {
            Markup::Rich => format!("<blockquote><p>{text}</p></blockquote>"),
            Markup::Plain => HTML_TAG_RE.replace_all(&text, "").trim().to_string(),
        });
    }

    let message = lines.join("\n");
    match markup {
        Markup::Rich => message.replace('\n', "<br />"),
        Markup::Plain => message,
    }
}

/// HTML rendering for rich-text clients.
pub fn render_rich(entry: &CardEntry) -> String {
    render(entry, Markup::Rich)
}

/// Markdown rendering for plain-text clients.
pub fn render_plain(entry: &CardEntry) -> String {
    render(entry, Markup::Plain)
}

/// Replace game symbol tokens with their glyphs.
pub fn substitute_glyphs(text: &str) -> String {
    GLYPHS
        .iter()
        .fold(text.to_string(), |acc, (token, glyph)| acc.replace(token, glyph))
}

fn bold(s: &str, markup: Markup) -> String {
    match markup {
        Markup::Rich => format!("<strong>{s}</strong>"),
        Markup::Plain => format!("**{s}**"),
    }
}

fn title_line(entry: &CardEntry, markup: Markup) -> String {
    let card = &entry.card;
    let marker = if card.is_unique() { UNIQUE_MARKER } else { "" };
    format!(
        "{} ({})",
        bold(&format!("{marker}{}", card.title), markup),
        entry.permalink()
    )
}

fn subtitle_line(entry: &CardEntry, markup: Markup) -> Option<String> {
    let card = &entry.card;
    let mut parts = Vec::new();

    if let Some(type_code) = card.type_code.as_deref() {
        let mut label = type_label(type_code);
        if let Some(keywords) = card.keywords.as_deref() {
            label.push_str(": ");
            label.push_str(keywords);
        }
        parts.push(label);
    }

    let is_rez = card
        .type_code
        .as_deref()
        .is_some_and(|t| REZ_TYPES.contains(&t));
    let stats: [(&str, &Stat); 7] = [
        (if is_rez { "Rez" } else { "Cost" }, &card.cost),
        ("MU", &card.memory_cost),
        ("Strength", &card.strength),
        ("Trash", &card.trash_cost),
        ("Link", &card.base_link),
        ("Minimum deck size", &card.minimum_deck_size),
        ("Influence limit", &card.influence_limit),
    ];
    for (label, stat) in stats {
        if let Some(value) = stat {
            parts.push(format!("{label}: {}", value_or_x(*value)));
        }
    }

    if let (Some(advancement), Some(points)) = (card.advancement_cost, card.agenda_points) {
        // An advancement requirement of 0 is as good as unknown.
        let advancement = advancement.filter(|&a| a != 0);
        parts.push(format!(
            "{} / {}",
            value_or_x(advancement),
            value_or_x(points)
        ));
    }

    if let Some(tag) = faction_tag(card, markup) {
        parts.push(tag);
    }
    if entry.is_banned {
        parts.push("Banned!".to_string());
    }
    if entry.has_rotated {
        parts.push("Rotated!".to_string());
    }

    if parts.is_empty() {
        return None;
    }
    Some(bold(&parts.join(" • "), markup))
}

fn value_or_x(value: Option<i64>) -> String {
    value.map_or_else(|| "X".to_string(), |v| v.to_string())
}

fn type_label(type_code: &str) -> String {
    if type_code == "ice" {
        "ICE".to_string()
    } else {
        title_case(type_code)
    }
}

fn faction_tag(card: &Card, markup: Markup) -> Option<String> {
    let code = card.faction_code.as_deref()?;
    let faction = code.replace("-corp", "").replace("-runner", "");
    let name = if faction == "nbn" {
        "NBN".to_string()
    } else {
        title_case(&faction)
    };

    let color = FACTION_COLORS
        .iter()
        .find(|(f, _)| *f == faction)
        .map(|(_, c)| *c);
    let mut tag = match (markup, color) {
        (Markup::Rich, Some(color)) => format!("<font color=\"{color}\">{name}</font>"),
        _ => name,
    };

    if let Some(influence) = card.faction_cost.filter(|&c| c > 0) {
        let filled = influence.min(INFLUENCE_PIPS) as usize;
        tag.push(' ');
        tag.push_str(&"●".repeat(filled));
        tag.push_str(&"○".repeat(INFLUENCE_PIPS as usize - filled));
    }
    Some(tag)
}

/// Capitalize the first letter of every alphabetic run, lower-case the rest.
/// `"haas-bioroid"` becomes `"Haas-Bioroid"`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
