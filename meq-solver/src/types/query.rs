/// The four user inputs that fully determine a market analysis
///
/// The equations are raw text as the user entered them; parsing happens in
/// the pipeline so that parse errors can be attributed to the right side of
/// the market. Shifts default to zero, meaning no displacement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketQuery {
    /// Demand equation text, e.g. `"-P + 16"`
    pub demand: String,
    /// Supply equation text, e.g. `"P + 4"`
    pub supply: String,
    /// Constant added to the demand intercept
    #[cfg_attr(feature = "serde", serde(default))]
    pub demand_shift: f64,
    /// Constant added to the supply intercept
    #[cfg_attr(feature = "serde", serde(default))]
    pub supply_shift: f64,
}

impl MarketQuery {
    /// A query with no shifts applied
    pub fn new(demand: impl Into<String>, supply: impl Into<String>) -> Self {
        Self {
            demand: demand.into(),
            supply: supply.into(),
            demand_shift: 0.0,
            supply_shift: 0.0,
        }
    }

    /// Whether either shift displaces its curve
    ///
    /// The shifted equilibrium is always computed; this gate only controls
    /// whether it is displayed as a distinct result.
    pub fn shifts_active(&self) -> bool {
        self.demand_shift != 0.0 || self.supply_shift != 0.0
    }
}
