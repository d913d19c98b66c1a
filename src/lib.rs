//! Indicator of the L1 norm ball and its proximal operator.
//!
//! Projecting onto \(\{x : \|x\|_1 \le r\}\) is the workhorse behind sparse
//! constraints: LASSO in constrained form, sparse coding, projected gradient
//! with a sparsity budget, and the dual step of \(\ell_\infty\)-regularized problems.
//!
//! # Which Routine Should I Use?
//!
//! | Task | Routine | Cost |
//! |------|---------|------|
//! | **Projection in a hot loop** | [`L1Ball::prox_into`] / [`L1Ball::prox_in_place`] | \(O(n \log n)\) |
//! | **Cross-checking a result** | [`L1Ball::prox_naive`] | \(O(n \cdot \text{maxit})\) |
//! | **Membership test** | [`L1Ball::evaluate`] / [`L1Ball::contains`] | \(O(n)\) |
//! | **Simplex projection of magnitudes** | [`crate::core::simplex::project_simplex`] | \(O(n \log n)\) |
//!
//! # Mathematical Background
//!
//! The indicator function is
//!
//! ```text
//! f(x) = 0    if ‖x‖₁ ≤ r
//! f(x) = +∞   otherwise
//! ```
//!
//! and its proximal operator, for every step size \(\gamma > 0\), is the
//! Euclidean projection onto the ball. Outside the ball the projection is a
//! soft-thresholding
//!
//! ```text
//! y_j = sign(x_j) · max(|x_j| − τ, 0)
//! ```
//!
//! where \(\tau > 0\) is chosen so that \(\sum_j \max(|x_j| - \tau, 0) = r\).
//! Equivalently, \(|y|\) is the projection of \(|x|\) onto the scaled simplex
//! \(\{z \ge 0 : \sum z = r\}\). For complex entries, `sign` is the phase
//! \(x_j / |x_j|\).
//!
//! Sorting the magnitudes in decreasing order turns the search for \(\tau\)
//! into a scan over prefix sums: the first prefix length \(i\) whose candidate
//! \((s_i - r)/i\) is at least the next magnitude fixes the active set.
//!
//! # Element Types
//!
//! Anything implementing [`ProxScalar`]: `f32`, `f64`, `Complex<f32>`,
//! `Complex<f64>`. The radius and thresholds live in the matching real type.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (threshold selection at `trace`,
//! bisection progress at `debug`, an exhausted bisection budget at `warn`) and
//! never installs a subscriber.
//!
//! # References
//!
//! - Held, Wolfe, Crowder (1974), "Validation of subgradient optimization"
//!   -- the sort-based simplex projection.
//! - Duchi, Shalev-Shwartz, Singer, Chandra (2008), "Efficient Projections onto
//!   the ℓ1-Ball for Learning in High Dimensions" -- the L1-ball reduction.
//! - Condat (2016), "Fast projection onto the simplex and the ℓ1 ball"
//!   -- survey and comparison of exact methods.
//! - Parikh & Boyd (2014), "Proximal Algorithms" -- prox of indicator functions.

pub mod core;
pub mod error;
pub mod scalar;
pub mod traits;

#[cfg(feature = "ndarray")]
pub mod array;

pub use crate::core::{BisectionOptions, L1Ball};
pub use error::{Error, Result};
pub use scalar::ProxScalar;
pub use traits::ProximableFunction;
