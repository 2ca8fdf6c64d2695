mod config;
mod curve;
mod equation;
mod equilibrium;
mod narrative;

pub use config::SeriesConfig;
pub use curve::{LinearCurve, LinearCurveDto};
pub use equation::EquationError;
pub use equilibrium::{Equilibrium, EquilibriumDto, InvalidEquilibrium, ParallelSlopes};
pub use narrative::{FALLBACK_NARRATIVE, NarrativeRequest};
