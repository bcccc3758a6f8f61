//! Facet state store.
//!
//! [`FacetStore`] owns the user's current [`FacetSelection`] and exposes only
//! transitions. Each transition returns the new snapshot; deciding whether to
//! re-query is the caller's job (see [`Dispatcher`](crate::Dispatcher)).

use std::collections::BTreeSet;
use storefront_core::{Color, PriceRange, ProductFilter, Size, SortMode};

/// Range the custom price control spans, and its value when first selected.
pub const CUSTOM_PRICE_DEFAULT: PriceRange = PriceRange::new(0.0, 100.0);
/// Step of the custom price control.
pub const CUSTOM_PRICE_STEP: f64 = 5.0;

/// Snap a value onto the custom control: clamped to its span, rounded to the
/// nearest step.
pub fn snap_to_slider(value: f64) -> f64 {
    let (min, max) = (CUSTOM_PRICE_DEFAULT.low, CUSTOM_PRICE_DEFAULT.high);
    let stepped = (value / CUSTOM_PRICE_STEP).round() * CUSTOM_PRICE_STEP;
    stepped.clamp(min, max)
}

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// Preset price ranges offered next to the custom control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePreset {
    Any,
    Under20,
    Under40,
}

impl PricePreset {
    pub const ALL: [PricePreset; 3] = [PricePreset::Any, PricePreset::Under20, PricePreset::Under40];

    pub fn range(self) -> PriceRange {
        match self {
            PricePreset::Any => PriceRange::new(0.0, 100.0),
            PricePreset::Under20 => PriceRange::new(0.0, 20.0),
            PricePreset::Under40 => PriceRange::new(0.0, 40.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PricePreset::Any => "Any price",
            PricePreset::Under20 => "Under $20",
            PricePreset::Under40 => "Under $40",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSelection {
    pub is_custom: bool,
    pub range: PriceRange,
}

impl PriceSelection {
    /// `(min, max)` for display. The stored pair may be inverted after a
    /// custom drag; what is sent to the server is the pair as stored.
    pub fn display_bounds(&self) -> (f64, f64) {
        if self.is_custom {
            self.range.normalized()
        } else {
            (self.range.low, self.range.high)
        }
    }

    /// The preset this selection corresponds to, if any.
    pub fn preset(&self) -> Option<PricePreset> {
        if self.is_custom {
            return None;
        }
        PricePreset::ALL.into_iter().find(|p| p.range() == self.range)
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The user's current facet selections.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetSelection {
    pub color: BTreeSet<Color>,
    pub size: BTreeSet<Size>,
    pub price: PriceSelection,
    pub sort: SortMode,
}

impl Default for FacetSelection {
    /// Everything selected, any price, no sort preference.
    fn default() -> Self {
        Self {
            color: Color::ALL.into_iter().collect(),
            size: Size::ALL.into_iter().collect(),
            price: PriceSelection { is_custom: false, range: PricePreset::Any.range() },
            sort: SortMode::None,
        }
    }
}

impl FacetSelection {
    /// Wire form sent to the products endpoint.
    pub fn to_filter(&self) -> ProductFilter {
        ProductFilter {
            color: self.color.iter().copied().collect(),
            size: self.size.iter().copied().collect(),
            sort: self.sort,
            price: self.price.range,
        }
    }
}

/// A multi-valued facet toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiFacet {
    Color(Color),
    Size(Size),
}

/// A single state transition, as produced by UI events or browse commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FacetEvent {
    Toggle(MultiFacet),
    SetSort(SortMode),
    SetPrice { range: PriceRange, is_custom: bool },
    SelectPreset(PricePreset),
    SelectCustom,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct FacetStore {
    current: FacetSelection,
}

impl FacetStore {
    pub fn new(initial: FacetSelection) -> Self {
        Self { current: initial }
    }

    pub fn snapshot(&self) -> &FacetSelection {
        &self.current
    }

    /// Remove `value` if selected, add it otherwise.
    pub fn toggle_multi(&mut self, value: MultiFacet) -> FacetSelection {
        match value {
            MultiFacet::Color(c) => toggle(&mut self.current.color, c),
            MultiFacet::Size(s) => toggle(&mut self.current.size, s),
        }
        tracing::debug!(?value, "facet toggled");
        self.current.clone()
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) -> FacetSelection {
        self.current.sort = mode;
        tracing::debug!(%mode, "sort mode set");
        self.current.clone()
    }

    /// Replace the price selection wholesale.
    pub fn set_price_range(&mut self, range: PriceRange, is_custom: bool) -> FacetSelection {
        self.current.price = PriceSelection { is_custom, range };
        tracing::debug!(low = range.low, high = range.high, is_custom, "price range set");
        self.current.clone()
    }

    pub fn select_preset(&mut self, preset: PricePreset) -> FacetSelection {
        self.set_price_range(preset.range(), false)
    }

    pub fn select_custom(&mut self) -> FacetSelection {
        self.set_price_range(CUSTOM_PRICE_DEFAULT, true)
    }

    pub fn apply(&mut self, event: FacetEvent) -> FacetSelection {
        match event {
            FacetEvent::Toggle(value) => self.toggle_multi(value),
            FacetEvent::SetSort(mode) => self.set_sort_mode(mode),
            FacetEvent::SetPrice { range, is_custom } => self.set_price_range(range, is_custom),
            FacetEvent::SelectPreset(preset) => self.select_preset(preset),
            FacetEvent::SelectCustom => self.select_custom(),
        }
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if set.contains(&value) {
        set.remove(&value);
    } else {
        set.insert(value);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
