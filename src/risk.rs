use core::cmp::Ordering;
use core::error::Error;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Score added per pack-year smoked
pub const PACK_YEAR_WEIGHT: f64 = 0.5;

/// Score added per year of current age
pub const AGE_WEIGHT: f64 = 0.1;

/// First-cigarette ages strictly below this fall in [`InitiationBand::Adolescent`]
pub const ADOLESCENT_CUTOFF: i32 = 18;

/// First-cigarette ages strictly below this (and at least [`ADOLESCENT_CUTOFF`])
/// fall in [`InitiationBand::YoungAdult`]
pub const YOUNG_ADULT_CUTOFF: i32 = 25;

/// Penalty per year started before [`ADOLESCENT_CUTOFF`]
pub const ADOLESCENT_PENALTY_PER_YEAR: f64 = 2.0;

/// Penalty per year started before [`YOUNG_ADULT_CUTOFF`]
pub const YOUNG_ADULT_PENALTY_PER_YEAR: f64 = 1.0;

/// Calculate the risk score for one person.
///
/// Inputs are checked in order (age, pack-years, age at first cigarette) and
/// the first failing check is reported.
///
/// # Errors
///
/// Returns [`InvalidRiskInput`] if `age <= 0`, `pack_years` is negative or NaN,
/// or `age_first_cigarette <= 0`.
///
/// Positive infinity is a valid `pack_years` and yields an infinite score.
///
/// # Examples
///
/// ```rust
/// use smoking_risk::calculate_risk_score;
///
/// // 0.5 * 20.5 + 2.0 * (18 - 16) + 0.1 * 45
/// let score = calculate_risk_score(45, 20.5, 16).unwrap();
/// assert!((score - 18.75).abs() < 1e-9);
/// ```
pub fn calculate_risk_score(
    age: i32,
    pack_years: f64,
    age_first_cigarette: i32,
) -> Result<f64, InvalidRiskInput> {
    let inputs = RiskInputs::new(age, pack_years, age_first_cigarette)?;
    Ok(inputs.score())
}

/// A validated set of inputs to the risk formula
///
/// Can only be built through [`RiskInputs::new`], so holding one means every
/// invariant has already been checked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[must_use]
pub struct RiskInputs {
    age: i32,
    pack_years: f64,
    age_first_cigarette: i32,
}

impl RiskInputs {
    /// Validate and wrap the three inputs.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidRiskInput`] found, checking `age`, then
    /// `pack_years`, then `age_first_cigarette`.
    pub fn new(
        age: i32,
        pack_years: f64,
        age_first_cigarette: i32,
    ) -> Result<Self, InvalidRiskInput> {
        if age <= 0 {
            return Err(reject(InvalidRiskInput::NonPositiveAge(age)));
        }
        if pack_years.is_nan() || pack_years < 0.0 {
            return Err(reject(InvalidRiskInput::NegativePackYears(pack_years)));
        }
        if age_first_cigarette <= 0 {
            return Err(reject(InvalidRiskInput::NonPositiveAgeFirstCigarette(
                age_first_cigarette,
            )));
        }

        Ok(Self {
            age,
            pack_years,
            age_first_cigarette,
        })
    }

    /// Current age in years
    #[inline]
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Cumulative exposure in pack-years
    #[inline]
    #[must_use]
    pub const fn pack_years(&self) -> f64 {
        self.pack_years
    }

    /// Age in years at first cigarette
    #[inline]
    #[must_use]
    pub const fn age_first_cigarette(&self) -> i32 {
        self.age_first_cigarette
    }

    /// Compute each additive component of the score
    #[must_use]
    pub fn breakdown(&self) -> RiskBreakdown {
        RiskBreakdown {
            base_risk: self.pack_years * PACK_YEAR_WEIGHT,
            early_initiation_penalty: InitiationBand::penalty(self.age_first_cigarette),
            age_factor: f64::from(self.age) * AGE_WEIGHT,
            band: InitiationBand::from_age_first_cigarette(self.age_first_cigarette),
        }
    }

    /// The risk score: sum of the [`breakdown`](Self::breakdown) components
    #[must_use]
    #[cfg_attr(not(feature = "tracing"), allow(clippy::let_and_return))]
    pub fn score(&self) -> f64 {
        let score = self.breakdown().total();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            age = self.age,
            pack_years = self.pack_years,
            age_first_cigarette = self.age_first_cigarette,
            score,
            "computed risk score"
        );

        score
    }
}

fn reject(err: InvalidRiskInput) -> InvalidRiskInput {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %err, "rejected risk score input");

    err
}

/// The additive components of a risk score
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiskBreakdown {
    /// `pack_years * 0.5`
    pub base_risk: f64,
    /// Penalty for starting young, zero from 25 onwards
    pub early_initiation_penalty: f64,
    /// `age * 0.1`
    pub age_factor: f64,
    /// Which penalty branch applied
    pub band: InitiationBand,
}

impl RiskBreakdown {
    /// Sum of the components, added as base risk, penalty, then age factor
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.base_risk + self.early_initiation_penalty + self.age_factor
    }
}

impl Display for RiskBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} (base {:.2} + initiation {:.2} [{}] + age {:.2})",
            self.total(),
            self.base_risk,
            self.early_initiation_penalty,
            self.band,
            self.age_factor
        )
    }
}

/// InitiationBand: which early initiation penalty applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub enum InitiationBand {
    /// Started before 18: `2.0` per year under 18
    Adolescent,
    /// Started from 18 up to (not including) 25: `1.0` per year under 25
    YoungAdult,
    /// Started at 25 or later: no penalty
    Adult,
}

impl InitiationBand {
    /// Classify an age at first cigarette. Both cutoffs are strict, so 18 is
    /// `YoungAdult` and 25 is `Adult`.
    #[inline]
    pub const fn from_age_first_cigarette(age_first_cigarette: i32) -> Self {
        if age_first_cigarette < ADOLESCENT_CUTOFF {
            Self::Adolescent
        } else if age_first_cigarette < YOUNG_ADULT_CUTOFF {
            Self::YoungAdult
        } else {
            Self::Adult
        }
    }

    /// Early initiation penalty for an age at first cigarette.
    ///
    /// The band is derived from the age, so the result is never negative and
    /// is zero from [`YOUNG_ADULT_CUTOFF`] onwards.
    #[must_use]
    pub fn penalty(age_first_cigarette: i32) -> f64 {
        let start = f64::from(age_first_cigarette);
        match Self::from_age_first_cigarette(age_first_cigarette) {
            Self::Adolescent => {
                ADOLESCENT_PENALTY_PER_YEAR * (f64::from(ADOLESCENT_CUTOFF) - start)
            }
            Self::YoungAdult => {
                YOUNG_ADULT_PENALTY_PER_YEAR * (f64::from(YOUNG_ADULT_CUTOFF) - start)
            }
            Self::Adult => 0.0,
        }
    }

    /// Returns the numeric rank: Adult=0, YoungAdult=1, Adolescent=2
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Adult => 0,
            Self::YoungAdult => 1,
            Self::Adolescent => 2,
        }
    }
}

impl PartialOrd for InitiationBand {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InitiationBand {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl Display for InitiationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adolescent => write!(f, "adolescent (< {ADOLESCENT_CUTOFF})"),
            Self::YoungAdult => {
                write!(f, "young adult ({ADOLESCENT_CUTOFF}-{})", YOUNG_ADULT_CUTOFF - 1)
            }
            Self::Adult => write!(f, "adult (>= {YOUNG_ADULT_CUTOFF})"),
        }
    }
}

/// Error returned when an input to the risk formula is out of range
///
/// Each variant carries the rejected value. With the `serde` feature the error
/// can be serialized for reporting but not deserialized: a NaN pack-years value
/// is written as `null` in JSON and could not be read back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum InvalidRiskInput {
    /// `age` was zero or negative
    NonPositiveAge(i32),
    /// `pack_years` was negative or NaN
    NegativePackYears(f64),
    /// `age_first_cigarette` was zero or negative
    NonPositiveAgeFirstCigarette(i32),
}

impl InvalidRiskInput {
    /// The fixed message for this kind of failure
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NonPositiveAge(_) => "Age must be positive",
            Self::NegativePackYears(_) => "Pack-years cannot be negative",
            Self::NonPositiveAgeFirstCigarette(_) => "Age of first cigarette must be positive",
        }
    }
}

impl Display for InvalidRiskInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for InvalidRiskInput {}
