//! Generic seam for proximable functions.
//!
//! Code that works with "some function with a cheap prox" (splitting methods,
//! projected gradient loops) can be written against [`ProximableFunction`]
//! instead of a concrete type.

use std::fmt;

use num_traits::{Float, FromPrimitive};

use crate::core::L1Ball;
use crate::error::Result;
use crate::scalar::ProxScalar;

/// A function with a computable proximal operator over elements of type `S`.
pub trait ProximableFunction<S: ProxScalar> {
    /// Function value at `x`.
    fn evaluate(&self, x: &[S]) -> S::Real;

    /// `y = prox_{γf}(x)`; returns `f(y)`.
    fn prox_into(&self, y: &mut [S], x: &[S], gamma: S::Real) -> Result<S::Real>;

    /// Allocating variant of [`prox_into`](Self::prox_into).
    fn prox(&self, x: &[S], gamma: S::Real) -> Result<(Vec<S>, S::Real)> {
        let mut y = vec![S::zero(); x.len()];
        let v = self.prox_into(&mut y, x, gamma)?;
        Ok((y, v))
    }
}

impl<S, R> ProximableFunction<S> for L1Ball<R>
where
    S: ProxScalar<Real = R>,
    R: Float + FromPrimitive + fmt::Debug,
{
    fn evaluate(&self, x: &[S]) -> R {
        L1Ball::evaluate(self, x)
    }

    fn prox_into(&self, y: &mut [S], x: &[S], gamma: R) -> Result<R> {
        L1Ball::prox_into(self, y, x, gamma)
    }
}
