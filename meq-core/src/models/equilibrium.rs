use super::curve::LinearCurve;

/// The point where demand and supply quantities agree
///
/// Restricted to the economically valid region: [`Equilibrium::solve`] only
/// yields non-negative finite coordinates, and deserialization validates the
/// same bounds. A market whose curves intersect outside that region simply
/// has no equilibrium, which is not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "EquilibriumDto", into = "EquilibriumDto")
)]
pub struct Equilibrium {
    /// The market-clearing price
    pub price: f64,
    /// The quantity traded at the clearing price
    pub quantity: f64,
}

/// DTO to ensure that we always validate when we deserialize from an
/// untrusted source
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct EquilibriumDto {
    /// The market-clearing price
    pub price: f64,
    /// The quantity traded at the clearing price
    pub quantity: f64,
}

impl From<Equilibrium> for EquilibriumDto {
    fn from(value: Equilibrium) -> Self {
        Self {
            price: value.price,
            quantity: value.quantity,
        }
    }
}

impl TryFrom<EquilibriumDto> for Equilibrium {
    type Error = InvalidEquilibrium;

    fn try_from(value: EquilibriumDto) -> Result<Self, Self::Error> {
        let in_region = |x: f64| x.is_finite() && x >= 0.0;
        if in_region(value.price) && in_region(value.quantity) {
            Ok(Self {
                price: value.price,
                quantity: value.quantity,
            })
        } else {
            Err(InvalidEquilibrium)
        }
    }
}

/// Error when an equilibrium lies outside the economically valid region
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("equilibrium price and quantity must be non-negative finite numbers")]
pub struct InvalidEquilibrium;

/// Error when demand and supply have equal slopes
///
/// Parallel (or identical) lines have no unique intersection, so no
/// equilibrium can be reported for either the base or the shifted market.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("demand and supply slopes are equal, so the curves never cross at a single point")]
pub struct ParallelSlopes;

impl Equilibrium {
    /// Solves for the intersection of a demand and a supply curve.
    ///
    /// With demand `q = a_d·p + b_d` and supply `q = a_s·p + b_s`, the
    /// clearing price is `(b_d − b_s) / (a_s − a_d)` and the quantity follows
    /// from the demand curve. Equal slopes are a [`ParallelSlopes`] error;
    /// an intersection with a negative price or quantity yields `Ok(None)`.
    pub fn solve(
        demand: &LinearCurve,
        supply: &LinearCurve,
    ) -> Result<Option<Self>, ParallelSlopes> {
        if supply.slope() == demand.slope() {
            return Err(ParallelSlopes);
        }

        let price = (demand.intercept() - supply.intercept()) / (supply.slope() - demand.slope());
        let quantity = demand.quantity_at(price);

        if price.is_finite() && quantity.is_finite() && price >= 0.0 && quantity >= 0.0 {
            Ok(Some(Self { price, quantity }))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(slope: f64, intercept: f64) -> LinearCurve {
        LinearCurve::new(slope, intercept).unwrap()
    }

    #[test]
    fn test_textbook_market() {
        // 16 - p = 4 + p  =>  p = 6, q = 10
        let eq = Equilibrium::solve(&curve(-1.0, 16.0), &curve(1.0, 4.0))
            .unwrap()
            .unwrap();
        assert_eq!(eq.price, 6.0);
        assert_eq!(eq.quantity, 10.0);
    }

    #[test]
    fn test_parallel_slopes() {
        assert_eq!(
            Equilibrium::solve(&curve(1.0, 10.0), &curve(1.0, 4.0)).unwrap_err(),
            ParallelSlopes
        );
    }

    #[test]
    fn test_shifted_demand() {
        let demand = curve(-1.0, 16.0).shifted(4.0).unwrap();
        let eq = Equilibrium::solve(&demand, &curve(1.0, 4.0))
            .unwrap()
            .unwrap();
        assert_eq!(eq.price, 8.0);
        assert_eq!(eq.quantity, 12.0);
    }

    #[test]
    fn test_negative_region_is_absent() {
        // Curves crossing at a negative price: demand below supply everywhere
        // in the valid region.
        let eq = Equilibrium::solve(&curve(-1.0, 2.0), &curve(1.0, 8.0)).unwrap();
        assert_eq!(eq, None);
    }

    #[test]
    fn test_negative_quantity_is_absent() {
        // Intersection at p = 8, q = -2.
        let eq = Equilibrium::solve(&curve(-1.0, 6.0), &curve(1.0, -10.0)).unwrap();
        assert_eq!(eq, None);
    }

    #[test]
    fn test_deserialize_validates_the_region() {
        let eq: Equilibrium = serde_json::from_str(r#"{"price":6.0,"quantity":10.0}"#).unwrap();
        assert_eq!(eq.price, 6.0);
        assert_eq!(eq.quantity, 10.0);

        assert!(serde_json::from_str::<Equilibrium>(r#"{"price":-1.0,"quantity":5.0}"#).is_err());
        assert!(serde_json::from_str::<Equilibrium>(r#"{"price":6.0,"quantity":null}"#).is_err());
    }
}
