//! Biome theme resolver.
//!
//! A [`Biome`] picks the block palette a component is drawn with. It has no
//! behavioural meaning; the same component renders identically apart from
//! colour in every biome.
//!
//! Components pass the palette to CSS as custom properties (see
//! [`BiomePalette::css_vars`]) and the shared stylesheet reads them:
//!
//! ```css
//! .mc-button { background: linear-gradient(var(--mc-light), var(--mc-base)); }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Nether,
    Cherry,
    #[default]
    Grassland,
    Desert,
    Ice,
    Barren,
    Caves,
}

/// Colours of one biome, as CSS colour strings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BiomePalette {
    /// Top of the button gradient
    pub light: &'static str,
    /// Bottom of the button gradient, slot fill
    pub base: &'static str,
    /// Outer (bottom/right) bevel
    pub border: &'static str,
    /// Inner (top/left) bevel
    pub highlight: &'static str,
    /// Text drawn on `base`
    pub text: &'static str,
    /// Dark translucent card/form surface
    pub panel: &'static str,
    /// Light window body
    pub window: &'static str,
    /// Full-page backdrop gradient stops
    pub backdrop: [&'static str; 3],
}

impl BiomePalette {
    /// Inline `style` value exposing the palette as `--mc-*` properties
    pub fn css_vars(&self) -> String {
        format!(
            "--mc-light: {}; --mc-base: {}; --mc-border: {}; --mc-highlight: {}; --mc-text: {}; --mc-panel: {}; --mc-window: {};",
            self.light, self.base, self.border, self.highlight, self.text, self.panel, self.window
        )
    }

    /// `background` value for a full-page backdrop
    pub fn backdrop_gradient(&self) -> String {
        let [from, via, to] = self.backdrop;
        format!("linear-gradient(135deg, {} 0%, {} 50%, {} 100%)", from, via, to)
    }
}

impl Biome {
    pub const ALL: [Biome; 7] = [
        Biome::Nether,
        Biome::Cherry,
        Biome::Grassland,
        Biome::Desert,
        Biome::Ice,
        Biome::Barren,
        Biome::Caves,
    ];

    /// Lower-case key, also the CSS modifier (`biome-nether`)
    pub fn key(&self) -> &'static str {
        match self {
            Biome::Nether => "nether",
            Biome::Cherry => "cherry",
            Biome::Grassland => "grassland",
            Biome::Desert => "desert",
            Biome::Ice => "ice",
            Biome::Barren => "barren",
            Biome::Caves => "caves",
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Biome::Nether => "Nether",
            Biome::Cherry => "Cherry Grove",
            Biome::Grassland => "Grassland",
            Biome::Desert => "Desert",
            Biome::Ice => "Ice Spikes",
            Biome::Barren => "Barren Land",
            Biome::Caves => "Deep Caves",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Biome::Nether => "\u{1F525}",
            Biome::Cherry => "\u{1F338}",
            Biome::Grassland => "\u{1F331}",
            Biome::Desert => "\u{1F3DC}\u{FE0F}",
            Biome::Ice => "\u{2744}\u{FE0F}",
            Biome::Barren => "\u{1FAA8}",
            Biome::Caves => "\u{26CF}\u{FE0F}",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Biome::Nether => "Fiery hellscape with lava and danger",
            Biome::Cherry => "Pink paradise with cherry blossoms",
            Biome::Grassland => "Lush green plains perfect for building",
            Biome::Desert => "Sandy dunes and ancient temples",
            Biome::Ice => "Frozen wasteland with towering ice",
            Biome::Barren => "Desolate rocky terrain",
            Biome::Caves => "Underground caverns full of mystery",
        }
    }

    pub fn class(&self) -> String {
        format!("biome-{}", self.key())
    }

    pub fn palette(&self) -> BiomePalette {
        match self {
            Biome::Nether => BiomePalette {
                light: "#ef4444",
                base: "#b91c1c",
                border: "#991b1b",
                highlight: "#fca5a5",
                text: "#fef2f2",
                panel: "rgba(69, 10, 10, 0.9)",
                window: "#7f1d1d",
                backdrop: ["#7f1d1d", "#991b1b", "#7c2d12"],
            },
            Biome::Cherry => BiomePalette {
                light: "#f9a8d4",
                base: "#ec4899",
                border: "#db2777",
                highlight: "#fce7f3",
                text: "#831843",
                panel: "rgba(80, 7, 36, 0.8)",
                window: "#fce7f3",
                backdrop: ["#831843", "#be185d", "#6b21a8"],
            },
            Biome::Grassland => BiomePalette {
                light: "#4ade80",
                base: "#16a34a",
                border: "#15803d",
                highlight: "#bbf7d0",
                text: "#f0fdf4",
                panel: "rgba(5, 46, 22, 0.8)",
                window: "#dcfce7",
                backdrop: ["#14532d", "#15803d", "#1e3a8a"],
            },
            Biome::Desert => BiomePalette {
                light: "#facc15",
                base: "#ca8a04",
                border: "#a16207",
                highlight: "#fef08a",
                text: "#713f12",
                panel: "rgba(66, 32, 6, 0.8)",
                window: "#fef9c3",
                backdrop: ["#713f12", "#9a3412", "#7f1d1d"],
            },
            Biome::Ice => BiomePalette {
                light: "#93c5fd",
                base: "#3b82f6",
                border: "#2563eb",
                highlight: "#dbeafe",
                text: "#1e3a8a",
                panel: "rgba(23, 37, 84, 0.8)",
                window: "#dbeafe",
                backdrop: ["#1e3a8a", "#155e75", "#581c87"],
            },
            Biome::Barren => BiomePalette {
                light: "#9ca3af",
                base: "#4b5563",
                border: "#374151",
                highlight: "#e5e7eb",
                text: "#f9fafb",
                panel: "rgba(3, 7, 18, 0.9)",
                window: "#e5e7eb",
                backdrop: ["#111827", "#374151", "#1c1917"],
            },
            Biome::Caves => BiomePalette {
                light: "#78716c",
                base: "#44403c",
                border: "#292524",
                highlight: "#d6d3d1",
                text: "#fafaf9",
                panel: "rgba(12, 10, 9, 0.95)",
                window: "#e7e5e4",
                backdrop: ["#1c1917", "#111827", "#000000"],
            },
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Biome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Biome::ALL
            .iter()
            .copied()
            .find(|b| b.key() == s)
            .ok_or_else(|| format!("unknown biome: {}", s))
    }
}

/// Join a base class with an optional extra class
pub(crate) fn classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
