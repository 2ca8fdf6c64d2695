#![warn(missing_docs)]
//! Domain models and ports for an interactive supply/demand equilibrium
//! explorer.
//!
//! A market is described by two linear equations of the form
//! `quantity = slope × price + intercept`, one for demand and one for supply,
//! optionally displaced by parallel shifts. This crate provides the validated
//! curve model, the equation parser that produces it, the closed-form
//! equilibrium solve, and the contract for the external narrative service.

/// Core domain models for the equilibrium explorer.
///
/// This module contains the fundamental data structures that represent the
/// domain entities: linear curves and the equation text they are parsed from,
/// equilibrium points, series-generation tunables, and the narrative request.
///
/// The models in this module are primarily data structures with minimal
/// business logic, following the principles of the hexagonal architecture to
/// separate domain entities from their processing implementations.
pub mod models;

/// Interface traits for the equilibrium explorer.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain logic and external
/// collaborators (such as the generative text service used for narrative
/// explanations) without specifying implementation details.
pub mod ports;
