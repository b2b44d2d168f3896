//! `pswarm` implements Particle Swarm Optimization (PSO): a population-based, gradient-free
//! search for the minimum of a scalar function $`f(\mathbb{R}^n) \to \mathbb{R}`$ inside an
//! axis-aligned bounding box. The user implements the [`CostFunction`](`traits::CostFunction`)
//! trait on some struct which takes a slice of parameters and returns a single-valued
//! [`Result`], supplies per-dimension bounds, and reads back the best position and fitness
//! found by the swarm.
//!
//! # Table of Contents
//! - [Key Features](#key-features)
//! - [Quick Start](#quick-start)
//! - [Bounds](#bounds)
//!
//! # Key Features
//! * Simple trait-oriented library which tries to follow the Unix philosophy of "do one thing
//!   and do it well".
//! * Deterministic runs: the random number generator is injected at construction, so a fixed
//!   seed reproduces every particle trajectory bit-for-bit.
//! * Observers which can watch (or stop) a running swarm, and serializable swarm state for
//!   offline analysis.
//! * Pressing `Ctrl-C` during an optimization with a
//!   [`CtrlCAbortSignal`](`core::CtrlCAbortSignal`) still yields a
//!   [`SwarmSummary`](`core::SwarmSummary`), with a message indicating the run was ended by
//!   the user.
//!
//! # Quick Start
//!
//! ```rust
//! use std::convert::Infallible;
//! use fastrand::Rng;
//! use pswarm::prelude::*;
//!
//! struct Parabola;
//! impl CostFunction for Parabola {
//!     fn evaluate(&self, x: &[Float], _user_data: &mut ()) -> Result<Float, Infallible> {
//!         Ok((x[0] - 3.0).powi(2))
//!     }
//! }
//!
//! fn main() -> Result<(), Infallible> {
//!     let bounds = Bounds::new(vec![-10.0], vec![10.0]).unwrap();
//!     let mut opt = SwarmOptimizer::new(bounds, Rng::with_seed(0))
//!         .with_convergence_threshold(1e-6);
//!     let summary = opt.optimize(&Parabola, &mut ())?;
//!     println!("{}", summary);
//!     assert!(summary.converged);
//!     Ok(())
//! }
//! ```
//!
//! # Bounds
//! Every optimization in `pswarm` is bounded: the feasible region is the box described by a
//! [`Bounds`](`core::Bounds`) value, validated at construction. Particles which step outside
//! the box are clamped, per dimension, onto the nearest boundary value; velocities are left
//! untouched by a boundary hit. Seeded initial positions supplied through
//! [`PositionInitializer::Seeded`](`swarm::PositionInitializer`) are trusted verbatim and are
//! not re-checked against the box.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing core swarm data structures and support types.
pub mod core;
/// Module containing the particle swarm optimizer.
pub mod swarm;
/// Module containing standard functions for testing the optimizer.
pub mod test_functions;
/// Module containing the traits used throughout this crate.
pub mod traits;

/// Prelude module containing everything someone should need to use this crate for
/// non-development purposes.
pub mod prelude {
    pub use crate::core::{Bounds, InvalidBoundsError, Point, SwarmSummary};
    pub use crate::swarm::{
        Particle, PositionInitializer, Swarm, SwarmOptimizer, TrackingSwarmObserver, VelocitySign,
    };
    pub use crate::traits::{AbortSignal, CostFunction, SwarmObserver};
    pub use crate::Float;
}

pub use nalgebra::DVector;

#[cfg(not(feature = "f32"))]
/// A floating-point number type (defaults to [`f64`], see the `f32` feature).
pub type Float = f64;

#[cfg(feature = "f32")]
/// A floating-point number type (defaults to [`f64`], see the `f32` feature).
pub type Float = f32;

#[cfg(not(feature = "f32"))]
/// The mathematical constant $`\pi`$.
pub const PI: Float = std::f64::consts::PI;

#[cfg(feature = "f32")]
/// The mathematical constant $`\pi`$.
pub const PI: Float = std::f32::consts::PI;
