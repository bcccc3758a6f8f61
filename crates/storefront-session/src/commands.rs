// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::facets::{snap_to_slider, FacetEvent, MultiFacet, PricePreset};
use storefront_core::vocab::UnknownTerm;
use storefront_core::{Color, PriceRange, Size, SortMode};

/// A parsed, validated browse command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Apply a facet transition (and schedule a debounced re-query)
    Facet(FacetEvent),
    // Re-query immediately
    Refresh,
    // Print the current selection
    Show,
    // Print the command summary
    Help,
    // Leave the session
    Quit,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// Blank input; callers treat this as "do nothing".
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Term(#[from] UnknownTerm),
}

pub const HELP: &str = "\
color <white|beige|green|purple|blue>   toggle a color
size <S|M|L>                            toggle a size
sort <none|price-asc|price-desc>        set the sort mode
price <any|under-20|under-40>           pick a preset price range
custom [<low> <high>]                   custom price range (0-100, step 5)
refresh                                 query now
show                                    print the current selection
quit                                    leave";

impl Command {
    /// Parse one input line.
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "help" | "?" => Ok(Command::Help),
            "show" => Ok(Command::Show),
            "r" | "refresh" => Ok(Command::Refresh),
            "color" => {
                let color: Color = require(rest, "color <white|beige|green|purple|blue>")?.parse()?;
                Ok(Command::Facet(FacetEvent::Toggle(MultiFacet::Color(color))))
            }
            "size" => {
                let size: Size = require(rest, "size <S|M|L>")?.parse()?;
                Ok(Command::Facet(FacetEvent::Toggle(MultiFacet::Size(size))))
            }
            "sort" => {
                let mode: SortMode = require(rest, "sort <none|price-asc|price-desc>")?.parse()?;
                Ok(Command::Facet(FacetEvent::SetSort(mode)))
            }
            "price" => {
                let preset = match require(rest, "price <any|under-20|under-40>")? {
                    "any" => PricePreset::Any,
                    "under-20" => PricePreset::Under20,
                    "under-40" => PricePreset::Under40,
                    _ => return Err(CommandError::Usage("price <any|under-20|under-40>")),
                };
                Ok(Command::Facet(FacetEvent::SelectPreset(preset)))
            }
            "custom" => parse_custom(rest),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn require<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(rest)
    }
}

/// `custom` alone selects the custom control at its default span; with two
/// values it behaves like a slider drag. The pair is kept in the given order.
fn parse_custom(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "custom [<low> <high>]";
    if rest.is_empty() {
        return Ok(Command::Facet(FacetEvent::SelectCustom));
    }

    let values = rest
        .split_whitespace()
        .map(|v| v.parse::<f64>().map_err(|_| CommandError::Usage(USAGE)))
        .collect::<Result<Vec<_>, _>>()?;
    match values.as_slice() {
        [low, high] if low.is_finite() && high.is_finite() => {
            Ok(Command::Facet(FacetEvent::SetPrice {
                range: PriceRange::new(snap_to_slider(*low), snap_to_slider(*high)),
                is_custom: true,
            }))
        }
        _ => Err(CommandError::Usage(USAGE)),
    }
}
