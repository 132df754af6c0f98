//! Fixed explanatory sentences keyed by activity and score tier.

use std::fmt;

use outlook_core::Activity;

/// Coarse band an average score falls into.
///
/// Each band includes its lower bound: `80.0` is excellent, `60.0` is good
/// and `40.0` is fair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    /// `score >= 80`.
    Excellent,
    /// `60 <= score < 80`.
    Good,
    /// `40 <= score < 60`.
    Fair,
    /// Everything below 40, including `NaN`.
    Poor,
}

impl ScoreTier {
    /// Classify an average score.
    #[must_use]
    pub const fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Lower-case tier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sentence per [`ScoreTier`] for a single activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReasoningTable {
    /// Sentence for [`ScoreTier::Excellent`].
    pub excellent: &'static str,
    /// Sentence for [`ScoreTier::Good`].
    pub good: &'static str,
    /// Sentence for [`ScoreTier::Fair`].
    pub fair: &'static str,
    /// Sentence for [`ScoreTier::Poor`].
    pub poor: &'static str,
}

impl ReasoningTable {
    /// Sentence for `tier`.
    #[must_use]
    pub const fn text(&self, tier: ScoreTier) -> &'static str {
        match tier {
            ScoreTier::Excellent => self.excellent,
            ScoreTier::Good => self.good,
            ScoreTier::Fair => self.fair,
            ScoreTier::Poor => self.poor,
        }
    }
}

static SKIING: ReasoningTable = ReasoningTable {
    excellent: "Perfect skiing conditions with cold temperatures and good snow prospects",
    good: "Good skiing weather with suitable temperatures and conditions",
    fair: "Acceptable skiing conditions, though not ideal",
    poor: "Poor skiing conditions due to warm temperatures or unfavorable weather",
};

static SURFING: ReasoningTable = ReasoningTable {
    excellent: "Ideal surfing conditions with perfect temperature and wind",
    good: "Good surfing weather with favorable conditions",
    fair: "Decent surfing conditions with some limitations",
    poor: "Poor surfing conditions due to weather or temperature",
};

static OUTDOOR_SIGHTSEEING: ReasoningTable = ReasoningTable {
    excellent: "Perfect weather for outdoor exploration and photography",
    good: "Great conditions for outdoor activities and sightseeing",
    fair: "Acceptable weather for outdoor sightseeing with some precautions",
    poor: "Poor outdoor conditions, consider indoor alternatives",
};

static INDOOR_SIGHTSEEING: ReasoningTable = ReasoningTable {
    excellent: "Perfect time for museums and indoor attractions",
    good: "Good opportunity to explore indoor cultural sites",
    fair: "Decent time for indoor activities",
    poor: "Weather is actually quite nice for outdoor activities instead",
};

/// Return the sentence table for `activity`.
#[must_use]
pub const fn reasoning_table(activity: Activity) -> &'static ReasoningTable {
    match activity {
        Activity::Skiing => &SKIING,
        Activity::Surfing => &SURFING,
        Activity::OutdoorSightseeing => &OUTDOOR_SIGHTSEEING,
        Activity::IndoorSightseeing => &INDOOR_SIGHTSEEING,
    }
}

/// Explain an average score for `activity`.
///
/// # Examples
///
/// ```
/// use outlook_core::Activity;
/// use outlook_scorer::reasoning;
///
/// assert_eq!(
///     reasoning(Activity::Skiing, 80.0),
///     "Perfect skiing conditions with cold temperatures and good snow prospects",
/// );
/// ```
#[must_use]
pub const fn reasoning(activity: Activity, score: f64) -> &'static str {
    reasoning_table(activity).text(ScoreTier::from_score(score))
}

/// Explain an average score for an activity given by identifier.
///
/// Returns `None` for unrecognised identifiers.
#[must_use]
pub fn reasoning_for(activity: &str, score: f64) -> Option<&'static str> {
    activity
        .parse::<Activity>()
        .ok()
        .map(|known| reasoning(known, score))
}
