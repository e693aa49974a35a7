//! Heat-risk advisory classification
//!
//! One table maps heat-index bands to a risk category, a display color token,
//! and a fixed ordered list of advisory messages. The bands use closed
//! integer bounds; values falling in the fractional gaps between bands (for
//! example 32.5 or 41.5) classify as [`RiskCategory::Normal`]. That gap is
//! long-standing dashboard behavior the thresholds were tuned around, so it
//! is kept rather than widened to the adjacent band.

use crate::core_types::units::HeatIndex;
use std::fmt;

/// Risk category for a derived heat index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskCategory {
    /// Below every advisory band
    Normal,
    /// Heat index 27-32
    Caution,
    /// Heat index 33-41
    ExtremeCaution,
    /// Heat index 42-51
    Danger,
    /// Heat index 52 and above
    ExtremeDanger,
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskCategory::Normal => "Normal",
            RiskCategory::Caution => "Caution",
            RiskCategory::ExtremeCaution => "Extreme Caution",
            RiskCategory::Danger => "Danger",
            RiskCategory::ExtremeDanger => "Extreme Danger",
        };
        f.write_str(label)
    }
}

/// Everything the dashboard shows for one risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub category: RiskCategory,
    /// CSS-style color token consumed by the renderers
    pub color: &'static str,
    /// Ordered advisory messages for the category
    pub messages: &'static [&'static str],
}

/// A closed heat-index band and the advisory it maps to.
/// `hi = None` means the band is open-ended above.
struct Band {
    lo: f32,
    hi: Option<f32>,
    advisory: Advisory,
}

/// Advisory shown when no band matches
const NORMAL: Advisory = Advisory {
    category: RiskCategory::Normal,
    color: "#2e7d32",
    messages: &["Conditions are within the normal comfort range."],
};

/// The advisory band table, ascending. Bounds are inclusive on both ends.
const BANDS: [Band; 4] = [
    Band {
        lo: 27.0,
        hi: Some(32.0),
        advisory: Advisory {
            category: RiskCategory::Caution,
            color: "#f9a825",
            messages: &[
                "Fatigue is possible with prolonged exposure and activity.",
                "Keep drinking water even if you do not feel thirsty.",
            ],
        },
    },
    Band {
        lo: 33.0,
        hi: Some(41.0),
        advisory: Advisory {
            category: RiskCategory::ExtremeCaution,
            color: "#ef6c00",
            messages: &[
                "Heat cramps and heat exhaustion are possible.",
                "Limit strenuous activity and rest in shaded or cooled areas.",
                "Check on vulnerable occupants regularly.",
            ],
        },
    },
    Band {
        lo: 42.0,
        hi: Some(51.0),
        advisory: Advisory {
            category: RiskCategory::Danger,
            color: "#d84315",
            messages: &[
                "Heat cramps and heat exhaustion are likely.",
                "Heat stroke is probable with continued activity.",
                "Move occupants to a cooled space and suspend outdoor activity.",
            ],
        },
    },
    Band {
        lo: 52.0,
        hi: None,
        advisory: Advisory {
            category: RiskCategory::ExtremeDanger,
            color: "#b71c1c",
            messages: &[
                "Heat stroke is imminent.",
                "Evacuate to a cooled space immediately and seek medical help.",
            ],
        },
    },
];

/// Classify a heat index into its advisory.
///
/// Exactly one of the five categories is returned for every finite input.
#[must_use]
pub fn classify(heat_index: HeatIndex) -> &'static Advisory {
    let v = heat_index.value();
    for band in &BANDS {
        let above = v >= band.lo;
        let below = band.hi.is_none_or(|hi| v <= hi);
        if above && below {
            return &band.advisory;
        }
    }
    &NORMAL
}
