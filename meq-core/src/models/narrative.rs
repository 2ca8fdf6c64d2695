use super::equilibrium::Equilibrium;

/// The display string used when the narrative service cannot produce text
///
/// Narrative failure only ever affects this one string; it never affects the
/// equilibrium computation.
pub const FALLBACK_NARRATIVE: &str =
    "An explanation of this market is not available right now. The computed results above are unaffected.";

/// A structured description of a solved market, sent to the narrative
/// service to request a natural-language explanation
///
/// This is the request half of an external collaborator contract: the core
/// builds and consumes it, but never implements the service itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NarrativeRequest {
    /// The demand equation as the user entered it
    pub demand_equation: String,
    /// The supply equation as the user entered it
    pub supply_equation: String,
    /// The constant added to the demand intercept
    pub demand_shift: f64,
    /// The constant added to the supply intercept
    pub supply_shift: f64,
    /// The equilibrium of the unshifted market, when one exists
    pub base: Option<Equilibrium>,
    /// The equilibrium of the shifted market, when one exists
    pub shifted: Option<Equilibrium>,
}
