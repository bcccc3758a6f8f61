//! Fixed catalog vocabularies for the color, size and sort facets.
//!
//! Every term accepted anywhere in the pipeline (request validation, predicate
//! compilation, the browse command parser) is resolved through the lookup
//! tables in this module. Unknown terms never become enum values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A term that is not part of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{term:?} is not a valid {vocabulary} (expected one of: {expected})")]
pub struct UnknownTerm {
    pub vocabulary: &'static str,
    pub term: String,
    pub expected: String,
}

impl UnknownTerm {
    fn new(vocabulary: &'static str, term: &str, expected: &[&str]) -> Self {
        Self {
            vocabulary,
            term: term.to_string(),
            expected: expected.join(", "),
        }
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Product color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "white")]
    White,
    #[serde(rename = "beige")]
    Beige,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "purple")]
    Purple,
    #[serde(rename = "blue")]
    Blue,
}

static COLORS: phf::Map<&'static str, Color> = phf::phf_map! {
    "white" => Color::White,
    "beige" => Color::Beige,
    "green" => Color::Green,
    "purple" => Color::Purple,
    "blue" => Color::Blue,
};

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Beige,
        Color::Green,
        Color::Purple,
        Color::Blue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Beige => "beige",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Blue => "blue",
        }
    }

    /// Look up a color by its wire term. Matching is exact (case-sensitive).
    pub fn from_term(term: &str) -> Option<Self> {
        COLORS.get(term).copied()
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Product size tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "S")]
    S,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "L")]
    L,
}

static SIZES: phf::Map<&'static str, Size> = phf::phf_map! {
    "S" => Size::S,
    "M" => Size::M,
    "L" => Size::L,
};

impl Size {
    pub const ALL: [Size; 3] = [Size::S, Size::M, Size::L];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
        }
    }

    pub fn from_term(term: &str) -> Option<Self> {
        SIZES.get(term).copied()
    }
}

// ---------------------------------------------------------------------------
// Sort mode
// ---------------------------------------------------------------------------

/// Requested result ordering. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
}

static SORT_MODES: phf::Map<&'static str, SortMode> = phf::phf_map! {
    "none" => SortMode::None,
    "price-asc" => SortMode::PriceAsc,
    "price-desc" => SortMode::PriceDesc,
};

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::PriceAsc, SortMode::PriceDesc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }

    /// Human-readable label, as shown in the sort menu.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
        }
    }

    pub fn from_term(term: &str) -> Option<Self> {
        SORT_MODES.get(term).copied()
    }
}

// ---------------------------------------------------------------------------
// Display / FromStr
// ---------------------------------------------------------------------------

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = UnknownTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_term(s).ok_or_else(|| {
            UnknownTerm::new("color", s, &Color::ALL.map(Color::as_str))
        })
    }
}

impl FromStr for Size {
    type Err = UnknownTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::from_term(s)
            .ok_or_else(|| UnknownTerm::new("size", s, &Size::ALL.map(Size::as_str)))
    }
}

impl FromStr for SortMode {
    type Err = UnknownTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::from_term(s).ok_or_else(|| {
            UnknownTerm::new("sort mode", s, &SortMode::ALL.map(SortMode::as_str))
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
