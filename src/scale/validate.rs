// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::model::ScaleRange;

/// Validation problem attached to a single bound field of a range.
///
/// Offending values travel with the variant so a form can render the
/// message inline without re-deriving context.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundError {
    /// A non-terminal range has neither bound.
    MissingBounds,
    LowerNotAbovePreviousLower { lower: f64, previous_lower: f64 },
    LowerBelowPreviousUpper { lower: f64, previous_upper: f64 },
    UpperNotAbovePreviousUpper { upper: f64, previous_upper: f64 },
    UpperAboveNextLower { upper: f64, next_lower: f64 },
    UpperAboveNextUpper { upper: f64, next_upper: f64 },
    /// Own lower bound exceeds own upper bound; reported on both fields.
    BoundsInverted { lower: f64, upper: f64 },
    /// The previous range is open-ended upward and this range has no lower
    /// bound, so the handover point between the two is undefined.
    AmbiguousAdjacency,
}

impl fmt::Display for BoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBounds => f.write_str("must specify a lower or upper bound"),
            Self::LowerNotAbovePreviousLower {
                lower,
                previous_lower,
            } => write!(
                f,
                "lower bound {lower} must be greater than previous lower bound {previous_lower}"
            ),
            Self::LowerBelowPreviousUpper {
                lower,
                previous_upper,
            } => write!(
                f,
                "lower bound {lower} must not be less than previous upper bound {previous_upper}"
            ),
            Self::UpperNotAbovePreviousUpper {
                upper,
                previous_upper,
            } => write!(
                f,
                "upper bound {upper} must be greater than previous upper bound {previous_upper}"
            ),
            Self::UpperAboveNextLower { upper, next_lower } => write!(
                f,
                "upper bound {upper} must not exceed next lower bound {next_lower}"
            ),
            Self::UpperAboveNextUpper { upper, next_upper } => write!(
                f,
                "upper bound {upper} must be less than next upper bound {next_upper}"
            ),
            Self::BoundsInverted { lower, upper } => write!(
                f,
                "lower bound {lower} must not exceed upper bound {upper}"
            ),
            Self::AmbiguousAdjacency => f.write_str(
                "ambiguous: set a lower bound here or an upper bound on the previous range",
            ),
        }
    }
}

/// Outcome of validating one range against its neighbors: independent error
/// lists for the lower and upper bound fields. Advisory only; nothing stops
/// an edit because of these.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeValidation {
    lower: Vec<BoundError>,
    upper: Vec<BoundError>,
}

impl RangeValidation {
    pub fn lower_errors(&self) -> &[BoundError] {
        &self.lower
    }

    pub fn upper_errors(&self) -> &[BoundError] {
        &self.upper
    }

    pub fn is_valid(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }
}

/// Validates `range` against its positional neighbors.
///
/// Every rule is re-evaluated from the current values each call; results are
/// never patched incrementally. Numeric rules only fire when both sides are
/// present. The trailing placeholder (no bounds, no next range) is exempt
/// from the missing-bounds rule.
pub fn validate_range(
    range: &ScaleRange,
    previous: Option<&ScaleRange>,
    next: Option<&ScaleRange>,
) -> RangeValidation {
    let mut lower_errors = Vec::new();
    let mut upper_errors = Vec::new();

    let lower = range.lower();
    let upper = range.upper();
    let previous_lower = previous.and_then(ScaleRange::lower);
    let previous_upper = previous.and_then(ScaleRange::upper);
    let next_lower = next.and_then(ScaleRange::lower);
    let next_upper = next.and_then(ScaleRange::upper);

    if lower.is_none() && upper.is_none() && next.is_some() {
        lower_errors.push(BoundError::MissingBounds);
        upper_errors.push(BoundError::MissingBounds);
    }

    if let Some(lower) = lower {
        if let Some(previous_lower) = previous_lower {
            if lower <= previous_lower {
                lower_errors.push(BoundError::LowerNotAbovePreviousLower {
                    lower,
                    previous_lower,
                });
            }
        }
        // Starting exactly at the previous upper bound is legal (shared
        // boundary), hence strict less-than.
        if let Some(previous_upper) = previous_upper {
            if lower < previous_upper {
                lower_errors.push(BoundError::LowerBelowPreviousUpper {
                    lower,
                    previous_upper,
                });
            }
        }
    }

    if let Some(upper) = upper {
        if let Some(previous_upper) = previous_upper {
            if upper <= previous_upper {
                upper_errors.push(BoundError::UpperNotAbovePreviousUpper {
                    upper,
                    previous_upper,
                });
            }
        }
        if let Some(next_lower) = next_lower {
            if upper > next_lower {
                upper_errors.push(BoundError::UpperAboveNextLower { upper, next_lower });
            }
        }
        if let Some(next_upper) = next_upper {
            if upper > next_upper {
                upper_errors.push(BoundError::UpperAboveNextUpper { upper, next_upper });
            }
        }
        if let Some(lower) = lower {
            if lower > upper {
                lower_errors.push(BoundError::BoundsInverted { lower, upper });
                upper_errors.push(BoundError::BoundsInverted { lower, upper });
            }
        }
        if previous_lower.is_some() && previous_upper.is_none() && lower.is_none() {
            upper_errors.push(BoundError::AmbiguousAdjacency);
        }
    }

    RangeValidation {
        lower: lower_errors,
        upper: upper_errors,
    }
}
