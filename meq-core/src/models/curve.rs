use super::equation::{self, EquationError};
use std::str::FromStr;

/// A linear relation between quantity and price
///
/// Both demand and supply are entered as `quantity = slope × price +
/// intercept`. The curve is the unit every downstream computation operates
/// on: the equilibrium solve intersects two of them, and the series
/// generator inverts them to recover prices over a quantity range.
///
/// Invariant: slope and intercept are finite. Non-finite values indicate a
/// failed parse and are rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LinearCurveDto", into = "LinearCurveDto")
)]
pub struct LinearCurve {
    slope: f64,
    intercept: f64,
}

impl LinearCurve {
    /// Creates a new curve, validating that both coefficients are finite
    pub fn new(slope: f64, intercept: f64) -> Result<Self, EquationError> {
        Self::try_from(LinearCurveDto { slope, intercept })
    }

    /// The coefficient on the price variable
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// The quantity when price is zero
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Displaces the curve by a constant added to its intercept
    ///
    /// This is a pure parallel shift: the slope is unchanged. Shifting by a
    /// non-finite amount is treated the same as a non-finite coefficient.
    pub fn shifted(&self, by: f64) -> Result<Self, EquationError> {
        Self::new(self.slope, self.intercept + by)
    }

    /// Evaluates the curve, returning the quantity at the given price
    pub fn quantity_at(&self, price: f64) -> f64 {
        self.slope * price + self.intercept
    }

    /// Inverts the curve, returning the price at which the given quantity
    /// would be demanded or supplied
    ///
    /// A horizontal curve (zero slope) has no inverse, in which case this
    /// returns `None`. Consumers must distinguish "no price" from a price of
    /// zero.
    pub fn price_at(&self, quantity: f64) -> Option<f64> {
        if self.slope == 0.0 {
            None
        } else {
            Some((quantity - self.intercept) / self.slope)
        }
    }
}

impl FromStr for LinearCurve {
    type Err = EquationError;

    /// Parses equation text such as `"-P + 16"`, `"2P+10"`, or `"50-3P"`
    ///
    /// Terms carrying the price marker accumulate into the slope, constant
    /// terms into the intercept. Multiple price terms are legal and are
    /// summed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut slope = 0.0;
        let mut intercept = 0.0;

        for term in equation::tokenize(s)? {
            if term.variable {
                slope += term.coefficient;
            } else {
                intercept += term.coefficient;
            }
        }

        Self::new(slope, intercept)
    }
}

/// DTO to ensure that we always validate when we deserialize from an
/// untrusted source
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct LinearCurveDto {
    /// The coefficient on the price variable
    pub slope: f64,
    /// The quantity when price is zero
    pub intercept: f64,
}

impl From<LinearCurve> for LinearCurveDto {
    fn from(value: LinearCurve) -> Self {
        Self {
            slope: value.slope,
            intercept: value.intercept,
        }
    }
}

impl TryFrom<LinearCurveDto> for LinearCurve {
    type Error = EquationError;

    fn try_from(value: LinearCurveDto) -> Result<Self, Self::Error> {
        if value.slope.is_finite() && value.intercept.is_finite() {
            Ok(Self {
                slope: value.slope,
                intercept: value.intercept,
            })
        } else {
            Err(EquationError::NonFinite)
        }
    }
}
