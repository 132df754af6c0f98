//! Declarative point tables for each activity.
//!
//! A [`RuleTable`] holds a baseline and a list of factors. Each factor is an
//! ordered slice of [`Rule`]s; the first rule whose [`Predicate`] holds for
//! the day contributes its points and the rest of that factor is skipped.
//! A factor with no matching rule contributes nothing. The day's raw total is
//! the baseline plus every factor's contribution.
//!
//! Numeric predicates use IEEE comparisons, so a `NaN` measurement fails
//! every bound and falls through to an [`Predicate::Always`] rule, if any.

use outlook_core::{Activity, DayConditions, WeatherClass};

use Condition::{Above, AtLeast, Below, Exactly, Outside, Within};
use Measure::{Precipitation, Temperature, Wind};

/// A numeric measurement read from [`DayConditions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Maximum temperature in °C.
    Temperature,
    /// Precipitation total in mm.
    Precipitation,
    /// Maximum wind speed in km/h.
    Wind,
}

impl Measure {
    /// Read this measurement from `day`.
    #[must_use]
    pub const fn read(self, day: &DayConditions) -> f64 {
        match self {
            Self::Temperature => day.temperature_max,
            Self::Precipitation => day.precipitation,
            Self::Wind => day.wind_speed,
        }
    }
}

/// A bound on a single measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// `value < limit`.
    Below(f64),
    /// `value <= limit`.
    AtMost(f64),
    /// `value > limit`.
    Above(f64),
    /// `value >= limit`.
    AtLeast(f64),
    /// `low <= value <= high`.
    Within(f64, f64),
    /// `value < low || value > high`.
    Outside(f64, f64),
    /// `value == target`.
    Exactly(f64),
}

impl Condition {
    /// Report whether `value` satisfies the bound.
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "rule tables compare against exact literal thresholds"
    )]
    pub const fn matches(self, value: f64) -> bool {
        match self {
            Self::Below(limit) => value < limit,
            Self::AtMost(limit) => value <= limit,
            Self::Above(limit) => value > limit,
            Self::AtLeast(limit) => value >= limit,
            Self::Within(low, high) => low <= value && value <= high,
            Self::Outside(low, high) => value < low || value > high,
            Self::Exactly(target) => value == target,
        }
    }
}

/// A test applied to a whole day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// A bound on one measurement.
    Measure(Measure, Condition),
    /// The weather code falls in the given class.
    Class(WeatherClass),
    /// The weather code does not fall in the given class.
    NotClass(WeatherClass),
    /// The weather code falls in any of the given classes.
    AnyClass(&'static [WeatherClass]),
    /// The weather code falls in none of the given classes.
    NoClass(&'static [WeatherClass]),
    /// Every nested predicate holds.
    All(&'static [Predicate]),
    /// Always holds; used as a factor's fallback.
    Always,
}

impl Predicate {
    /// Evaluate the predicate for `day`.
    #[must_use]
    pub fn matches(&self, day: &DayConditions) -> bool {
        let class = day.weather_code.class();
        match self {
            Self::Measure(measure, condition) => condition.matches(measure.read(day)),
            Self::Class(expected) => class == *expected,
            Self::NotClass(excluded) => class != *excluded,
            Self::AnyClass(classes) => classes.contains(&class),
            Self::NoClass(classes) => !classes.contains(&class),
            Self::All(predicates) => predicates.iter().all(|predicate| predicate.matches(day)),
            Self::Always => true,
        }
    }
}

/// Points awarded when a predicate holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Test applied to the day.
    pub when: Predicate,
    /// Points contributed when `when` holds.
    pub points: i32,
}

impl Rule {
    /// Pair a predicate with its points.
    #[must_use]
    pub const fn new(when: Predicate, points: i32) -> Self {
        Self { when, points }
    }
}

/// An activity's complete scoring table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleTable {
    /// Points added before any factor.
    pub baseline: i32,
    /// Independent factors; the first matching rule of each contributes.
    pub factors: &'static [&'static [Rule]],
}

impl RuleTable {
    /// Raw, unclamped point total for `day`.
    #[must_use]
    pub fn points(&self, day: &DayConditions) -> i32 {
        self.factors
            .iter()
            .filter_map(|factor| factor.iter().find(|rule| rule.when.matches(day)))
            .fold(self.baseline, |total, rule| total.saturating_add(rule.points))
    }
}

const fn measure(reading: Measure, condition: Condition, points: i32) -> Rule {
    Rule::new(Predicate::Measure(reading, condition), points)
}

static SKIING: RuleTable = RuleTable {
    baseline: 0,
    factors: &[
        &[
            measure(Temperature, Below(0.0), 40),
            measure(Temperature, Below(5.0), 30),
            measure(Temperature, Below(10.0), 10),
        ],
        &[
            Rule::new(Predicate::Class(WeatherClass::Snowy), 30),
            measure(Precipitation, Above(0.0), 10),
        ],
        &[measure(Wind, Below(20.0), 20), measure(Wind, Below(40.0), 10)],
        &[Rule::new(
            Predicate::All(&[
                Predicate::Class(WeatherClass::Clear),
                Predicate::Measure(Temperature, Below(5.0)),
            ]),
            10,
        )],
    ],
};

static SURFING: RuleTable = RuleTable {
    baseline: 0,
    factors: &[
        &[
            measure(Temperature, Within(15.0, 25.0), 30),
            measure(Temperature, Within(10.0, 30.0), 20),
            measure(Temperature, AtLeast(5.0), 10),
        ],
        &[
            measure(Precipitation, Below(1.0), 25),
            measure(Precipitation, Below(5.0), 15),
            measure(Precipitation, Below(10.0), 5),
        ],
        &[
            measure(Wind, Within(10.0, 25.0), 25),
            measure(Wind, Within(5.0, 35.0), 15),
            measure(Wind, Below(50.0), 5),
        ],
        &[Rule::new(Predicate::Class(WeatherClass::Clear), 20)],
    ],
};

static OUTDOOR_SIGHTSEEING: RuleTable = RuleTable {
    baseline: 0,
    factors: &[
        &[
            measure(Temperature, Within(18.0, 25.0), 30),
            measure(Temperature, Within(15.0, 28.0), 25),
            measure(Temperature, Within(10.0, 30.0), 15),
            measure(Temperature, AtLeast(5.0), 5),
        ],
        &[
            measure(Precipitation, Exactly(0.0), 30),
            measure(Precipitation, Below(2.0), 20),
            measure(Precipitation, Below(5.0), 10),
            measure(Precipitation, Below(10.0), 5),
        ],
        &[
            measure(Wind, Below(15.0), 20),
            measure(Wind, Below(25.0), 15),
            measure(Wind, Below(35.0), 5),
        ],
        &[
            Rule::new(Predicate::Class(WeatherClass::Clear), 20),
            Rule::new(
                Predicate::NoClass(&[WeatherClass::Rainy, WeatherClass::Snowy]),
                10,
            ),
        ],
    ],
};

static INDOOR_SIGHTSEEING: RuleTable = RuleTable {
    baseline: 20,
    factors: &[
        &[
            measure(Precipitation, Above(10.0), 30),
            measure(Precipitation, Above(5.0), 20),
            measure(Precipitation, Above(2.0), 15),
            Rule::new(Predicate::Always, 10),
        ],
        &[
            measure(Temperature, Outside(5.0, 30.0), 20),
            measure(Temperature, Outside(10.0, 25.0), 10),
            Rule::new(Predicate::Always, 5),
        ],
        &[
            measure(Wind, Above(40.0), 20),
            measure(Wind, Above(25.0), 10),
            Rule::new(Predicate::Always, 5),
        ],
        &[
            Rule::new(
                Predicate::AnyClass(&[WeatherClass::Rainy, WeatherClass::Snowy]),
                20,
            ),
            Rule::new(Predicate::NotClass(WeatherClass::Clear), 10),
            Rule::new(Predicate::Always, 5),
        ],
    ],
};

/// Return the scoring table for `activity`.
#[must_use]
pub const fn rule_table(activity: Activity) -> &'static RuleTable {
    match activity {
        Activity::Skiing => &SKIING,
        Activity::Surfing => &SURFING,
        Activity::OutdoorSightseeing => &OUTDOOR_SIGHTSEEING,
        Activity::IndoorSightseeing => &INDOOR_SIGHTSEEING,
    }
}
