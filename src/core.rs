//! Backend-agnostic L1-ball primitives.
//!
//! Everything operates on slices; the fast projection writes into a
//! caller-owned buffer and the reference projection returns a `Vec<S>`.
//!
//! The ndarray-based API is available behind the `ndarray` feature.
//!
//! ## References (for rationale and cross-checking formulas)
//!
//! - Held, Wolfe, Crowder (1974): *Validation of subgradient optimization* (sort-based simplex projection).
//! - Duchi, Shalev-Shwartz, Singer, Chandra (2008): *Efficient projections onto the ℓ1-ball for
//!   learning in high dimensions*.
//! - Condat (2016): *Fast projection onto the simplex and the ℓ1 ball*.

use std::fmt;

use num_traits::{Float, FromPrimitive, Zero};

use crate::error::{Error, Result};
use crate::scalar::ProxScalar;

/// Indicator function of the L1 ball `{x : ‖x‖₁ ≤ r}`.
///
/// ```text
/// f(x) = 0    if ‖x‖₁ ≤ r
/// f(x) = +∞   otherwise
/// ```
///
/// Its proximal operator is the Euclidean projection onto the ball, for any
/// step size `γ > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct L1Ball<R> {
    r: R,
}

/// Iteration controls for the bisection reference projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionOptions<R> {
    /// Hard cap on the number of halvings.
    pub max_iter: usize,
    /// Stop once `|U - L| < (max|x| + |U|) * tol`.
    pub tol: R,
}

impl<R: Float> Default for BisectionOptions<R> {
    fn default() -> Self {
        Self {
            max_iter: 120,
            tol: R::epsilon(),
        }
    }
}

/// Outcome of [`simplex::bisection_threshold`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection<R> {
    /// Last midpoint evaluated; the threshold estimate.
    pub tau: R,
    /// Number of midpoints evaluated.
    pub iterations: usize,
    /// Whether the bracket shrank below tolerance within the cap.
    pub converged: bool,
}

impl<R> L1Ball<R>
where
    R: Float + FromPrimitive + fmt::Debug,
{
    /// Create the indicator of the L1 ball with radius `r` (must be positive).
    pub fn new(r: R) -> Result<Self> {
        // `!(r > 0)` also rejects NaN.
        if !(r > R::zero()) {
            return Err(Error::InvalidParameter {
                name: "r",
                reason: format!("radius must be positive, got {r:?}"),
            });
        }
        Ok(Self { r })
    }

    /// Ball radius (r > 0).
    pub fn radius(&self) -> R {
        self.r
    }

    /// Whether `‖x‖₁ ≤ r`, with a relative slack of `r · ε` at the boundary.
    pub fn contains<S>(&self, x: &[S]) -> bool
    where
        S: ProxScalar<Real = R>,
    {
        l1_norm(x) - self.r <= self.r * R::epsilon()
    }

    /// Value of the indicator: `0` inside the ball, `+∞` outside.
    pub fn evaluate<S>(&self, x: &[S]) -> R
    where
        S: ProxScalar<Real = R>,
    {
        if self.contains(x) {
            R::zero()
        } else {
            R::infinity()
        }
    }

    /// Project `x` onto the ball, writing the result into `y`.
    ///
    /// Uses the sort-based active-set method, `O(n log n)`. `gamma` does not
    /// change the projection and is accepted for signature compatibility with
    /// other proximal operators. Returns the indicator value at `y`, which is
    /// always `0`.
    ///
    /// Inputs are not checked for finiteness: NaN or infinite entries give
    /// implementation-defined output (no panic).
    pub fn prox_into<S>(&self, y: &mut [S], x: &[S], _gamma: R) -> Result<R>
    where
        S: ProxScalar<Real = R>,
    {
        if y.len() != x.len() {
            return Err(Error::DimensionMismatch {
                expected: x.len(),
                found: y.len(),
            });
        }
        if self.contains(x) {
            y.copy_from_slice(x);
            return Ok(R::zero());
        }

        let tau = self.threshold(x);
        for (yi, &xi) in y.iter_mut().zip(x) {
            *yi = xi.shrink(tau);
        }
        Ok(R::zero())
    }

    /// Project `x` onto the ball, overwriting it.
    ///
    /// The threshold is computed from a separate magnitude buffer before any
    /// element of `x` is written.
    pub fn prox_in_place<S>(&self, x: &mut [S], _gamma: R) -> R
    where
        S: ProxScalar<Real = R>,
    {
        if self.contains(x) {
            return R::zero();
        }
        let tau = self.threshold(x);
        for xi in x.iter_mut() {
            *xi = xi.shrink(tau);
        }
        R::zero()
    }

    /// Reference projection by bisection on the threshold.
    ///
    /// `O(n)` per iteration, at most 120 iterations. Meant as a correctness
    /// oracle for [`prox_into`](Self::prox_into), not for hot paths.
    pub fn prox_naive<S>(&self, x: &[S], gamma: R) -> (Vec<S>, R)
    where
        S: ProxScalar<Real = R>,
    {
        self.prox_naive_with(x, gamma, &BisectionOptions::default())
    }

    /// [`prox_naive`](Self::prox_naive) with explicit iteration controls.
    pub fn prox_naive_with<S>(
        &self,
        x: &[S],
        _gamma: R,
        opts: &BisectionOptions<R>,
    ) -> (Vec<S>, R)
    where
        S: ProxScalar<Real = R>,
    {
        if self.contains(x) {
            return (x.to_vec(), R::zero());
        }

        let b = simplex::bisection_threshold(x, self.r, opts);
        tracing::debug!(
            iterations = b.iterations,
            converged = b.converged,
            tau = ?b.tau,
            "l1 ball bisection finished"
        );
        if !b.converged {
            tracing::warn!(
                max_iter = opts.max_iter,
                tau = ?b.tau,
                "l1 ball bisection hit its iteration cap before reaching tolerance"
            );
        }

        let y = x.iter().map(|&xi| xi.shrink(b.tau)).collect();
        (y, R::zero())
    }

    /// Indicator of a set: every point of the ball is a minimizer.
    pub fn is_convex(&self) -> bool {
        true
    }

    /// Indicator functions of sets take only the values `0` and `+∞`.
    pub fn is_set(&self) -> bool {
        true
    }

    /// The fast projection is exact (up to rounding), not an approximation.
    pub fn is_prox_accurate(&self) -> bool {
        true
    }

    /// Human-readable name of the function.
    pub fn name(&self) -> &'static str {
        "indicator of an L1 norm ball"
    }

    /// Element types the function accepts.
    pub fn domain(&self) -> &'static str {
        "real or complex vectors"
    }

    /// Formula of the function.
    pub fn expression(&self) -> &'static str {
        "x ↦ 0 if ‖x‖₁ ≤ r, +∞ otherwise"
    }

    /// Parameter summary, e.g. `r = 1.0`.
    pub fn params(&self) -> String {
        format!("r = {:?}", self.r)
    }

    fn threshold<S>(&self, x: &[S]) -> R
    where
        S: ProxScalar<Real = R>,
    {
        let mut p: Vec<R> = x.iter().map(|xi| xi.modulus()).collect();
        simplex::simplex_threshold(&mut p, self.r)
    }
}

impl<R> fmt::Display for L1Ball<R>
where
    R: Float + FromPrimitive + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.params())
    }
}

/// `‖x‖₁ = Σ |x_i|`.
pub fn l1_norm<S: ProxScalar>(x: &[S]) -> S::Real {
    let mut acc = <S::Real as Zero>::zero();
    for &xi in x {
        acc = acc + xi.modulus();
    }
    acc
}

/// `max_i |x_i|`, or `0` for an empty slice.
pub fn max_modulus<S: ProxScalar>(x: &[S]) -> S::Real {
    let mut m = <S::Real as Zero>::zero();
    for &xi in x {
        m = m.max(xi.modulus());
    }
    m
}

/// Thresholds for projecting non-negative magnitudes onto the scaled simplex
/// `{z ≥ 0 : Σ z = r}`.
///
/// The L1-ball projection of `x` is `sign(x) · max(|x| − τ, 0)` where `τ` is
/// the simplex threshold of `|x|`.
pub mod simplex {
    use std::cmp::Ordering;

    use num_traits::{Float, One, Zero};

    use super::{max_modulus, Bisection, BisectionOptions};
    use crate::scalar::ProxScalar;

    /// Descending order with NaN first; total, so sorting never panics.
    fn descending<R: Float>(a: &R, b: &R) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => b.partial_cmp(a).unwrap_or(Ordering::Equal),
        }
    }

    /// Threshold `τ` of the simplex projection (sort-based active set).
    ///
    /// Sorts `p` in place (descending). With prefix sums `s_i` of the sorted
    /// values, `τ_i = (s_i − r) / i`; the first `i < n` with `τ_i ≥ p_(i+1)`
    /// gives `τ`. If there is none, all `n` coordinates are active and
    /// `τ = (s_n − r) / n`.
    ///
    /// Returns `-r` for an empty slice (no coordinates to shrink).
    pub fn simplex_threshold<R: Float + std::fmt::Debug>(p: &mut [R], r: R) -> R {
        let n = p.len();
        if n == 0 {
            return -r;
        }
        p.sort_unstable_by(descending);

        let mut s = R::zero();
        let mut k = R::zero();
        for i in 0..n - 1 {
            s = s + p[i];
            k = k + R::one();
            let tau = (s - r) / k;
            if tau >= p[i + 1] {
                tracing::trace!(active = i + 1, tau = ?tau, "simplex threshold");
                return tau;
            }
        }

        // Every coordinate is active.
        s = s + p[n - 1];
        k = k + R::one();
        let tau = (s - r) / k;
        tracing::trace!(active = n, tau = ?tau, "simplex threshold");
        tau
    }

    /// Euclidean projection of non-negative `p` onto `{z ≥ 0 : Σ z = r}`.
    pub fn project_simplex<R: Float + std::fmt::Debug>(p: &[R], r: R) -> Vec<R> {
        let mut sorted = p.to_vec();
        let tau = simplex_threshold(&mut sorted, r);
        p.iter().map(|&pi| (pi - tau).max(R::zero())).collect()
    }

    /// Bisection on `τ ∈ [0, max|x|]` for `Σ max(|x_i| − τ, 0) = r`.
    ///
    /// Each step evaluates the midpoint, moves one end of the bracket, then
    /// tests `|U − L| < (max|x| + |U|) · tol`. The tolerance is relative to the
    /// input scale, so tiny and huge vectors are resolved alike.
    pub fn bisection_threshold<S: ProxScalar>(
        x: &[S],
        r: S::Real,
        opts: &BisectionOptions<S::Real>,
    ) -> Bisection<S::Real> {
        let zero = <S::Real as Zero>::zero();
        let one = <S::Real as One>::one();
        let two = one + one;

        let scale = max_modulus(x);
        let mut lo = zero;
        let mut hi = scale;
        let mut lambda = lo;
        let mut converged = false;
        let mut iterations = 0;

        while iterations < opts.max_iter {
            iterations += 1;
            lambda = (lo + hi) / two;
            let mut v = zero;
            for &xi in x {
                v = v + (xi.modulus() - lambda).max(zero);
            }
            // Too little mass left: the threshold is too large.
            if v < r {
                hi = lambda;
            } else {
                lo = lambda;
            }
            if (hi - lo).abs() < (scale + hi.abs()) * opts.tol {
                converged = true;
                break;
            }
        }

        Bisection {
            tau: lambda,
            iterations,
            converged,
        }
    }
}
