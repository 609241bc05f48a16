//! Sentiment classes and their fixed color mapping.

use std::fmt::{Display, Formatter};

/// One of the three sentiment classes a record can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All classes, in side-panel order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Parses a dataset label. Matches English names and the Indonesian labels
    /// of the source dataset, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "positive" | "positif" => Some(Sentiment::Positive),
            "negative" | "negatif" => Some(Sentiment::Negative),
            "neutral" | "netral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }

    /// Class color used for bars.
    pub fn color(self) -> Rgb {
        mapping(self).color
    }

    /// Sequential colormap used for word-cloud glyphs.
    pub fn colormap(self) -> Colormap {
        mapping(self).colormap
    }

    /// Position of the class in `ALL`.
    pub fn index(self) -> usize {
        match self {
            Sentiment::Positive => 0,
            Sentiment::Negative => 1,
            Sentiment::Neutral => 2,
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Plain RGB triple, independent of any rendering backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Light-to-dark sequential colormaps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Colormap {
    Greens,
    Reds,
    Blues,
}

impl Colormap {
    fn anchors(self) -> [Rgb; 3] {
        match self {
            Colormap::Greens => [Rgb(247, 252, 245), Rgb(116, 196, 118), Rgb(0, 68, 27)],
            Colormap::Reds => [Rgb(255, 245, 240), Rgb(251, 106, 74), Rgb(103, 0, 13)],
            Colormap::Blues => [Rgb(247, 251, 255), Rgb(107, 174, 214), Rgb(8, 48, 107)],
        }
    }

    /// Samples the colormap at `t` in `[0, 1]` (clamped).
    pub fn sample(self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let [light, mid, dark] = self.anchors();
        if t <= 0.5 {
            light.lerp(mid, t * 2.0)
        } else {
            mid.lerp(dark, (t - 0.5) * 2.0)
        }
    }
}

/// Entry of the static color table, indexed by `Sentiment::index`.
#[derive(Debug, Copy, Clone)]
pub struct ColorMapping {
    pub color: Rgb,
    pub colormap: Colormap,
}

/// Process-wide color table: Positive is green, Negative red, Neutral blue.
pub const COLOR_MAPPING: [ColorMapping; 3] = [
    ColorMapping {
        color: Rgb(0, 128, 0),
        colormap: Colormap::Greens,
    },
    ColorMapping {
        color: Rgb(255, 0, 0),
        colormap: Colormap::Reds,
    },
    ColorMapping {
        color: Rgb(0, 0, 255),
        colormap: Colormap::Blues,
    },
];

fn mapping(sentiment: Sentiment) -> &'static ColorMapping {
    &COLOR_MAPPING[sentiment.index()]
}

/// Looks up the bar color of a raw dataset label.
pub fn color_for_label(label: &str) -> Option<Rgb> {
    Sentiment::from_label(label).map(Sentiment::color)
}
