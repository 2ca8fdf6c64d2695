/// One display-ready row of the tabulation output
///
/// The label is pre-formatted: equilibrium rows keep two decimal places so
/// the exact clearing quantity is visible, every other row reads as an
/// integer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRow {
    /// The row's quantity at full precision
    pub quantity: f64,
    /// The quantity formatted for display
    pub label: String,
    /// Implied demand price at this quantity
    pub demand: Option<f64>,
    /// Implied supply price at this quantity
    pub supply: Option<f64>,
    /// Implied demand price after the demand shift
    pub shifted_demand: Option<f64>,
    /// Implied supply price after the supply shift
    pub shifted_supply: Option<f64>,
    /// Whether this row is an equilibrium row, to be highlighted distinctly
    pub equilibrium: bool,
}
