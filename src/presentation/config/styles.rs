//! Named styles
//!
//! Loaded from the `styles` table of the configuration, for example
//! `"card_selected": { "fg": "yellow", "bold": true }`.

use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// The style registered under `name`, or the terminal default
    pub fn get_or_default(&self, name: &str) -> Style {
        self.0.get(name).copied().unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleSpec {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    dim: bool,
    italic: bool,
    reversed: bool,
}

impl From<StyleSpec> for Style {
    fn from(spec: StyleSpec) -> Self {
        let mut modifier = Modifier::empty();
        for (on, flag) in [
            (spec.bold, Modifier::BOLD),
            (spec.dim, Modifier::DIM),
            (spec.italic, Modifier::ITALIC),
            (spec.reversed, Modifier::REVERSED),
        ] {
            if on {
                modifier |= flag;
            }
        }
        let mut style = Style::default().add_modifier(modifier);
        if let Some(fg) = spec.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = spec.bg {
            style = style.bg(bg);
        }
        style
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let specs = HashMap::<String, StyleSpec>::deserialize(deserializer)?;
        Ok(Styles(
            specs
                .into_iter()
                .map(|(name, spec)| (name, Style::from(spec)))
                .collect(),
        ))
    }
}
