//! `ndarray` front-end for [`L1Ball`].
//!
//! Contiguous views are handed to the slice core directly; strided views are
//! gathered into a temporary first.

use std::borrow::Cow;
use std::fmt;

use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use num_traits::{Float, FromPrimitive};

use crate::core::L1Ball;
use crate::error::{Error, Result};
use crate::scalar::ProxScalar;

fn as_contiguous<'a, S: ProxScalar>(x: &'a ArrayView1<'_, S>) -> Cow<'a, [S]> {
    match x.as_slice() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(x.to_vec()),
    }
}

impl<R> L1Ball<R>
where
    R: Float + FromPrimitive + fmt::Debug,
{
    /// [`evaluate`](Self::evaluate) on a 1-D view.
    pub fn evaluate_array<S>(&self, x: &ArrayView1<S>) -> R
    where
        S: ProxScalar<Real = R>,
    {
        let xs = as_contiguous(x);
        self.evaluate(&*xs)
    }

    /// Project a 1-D view onto the ball, returning a new array.
    pub fn prox_array<S>(&self, x: &ArrayView1<S>, gamma: R) -> (Array1<S>, R)
    where
        S: ProxScalar<Real = R>,
    {
        let mut y = x.to_vec();
        let v = self.prox_in_place(&mut y, gamma);
        (Array1::from_vec(y), v)
    }

    /// Project `x` into `y`. Both views must have the same length.
    pub fn prox_array_into<S>(
        &self,
        y: &mut ArrayViewMut1<S>,
        x: &ArrayView1<S>,
        gamma: R,
    ) -> Result<R>
    where
        S: ProxScalar<Real = R>,
    {
        if y.len() != x.len() {
            return Err(Error::DimensionMismatch {
                expected: x.len(),
                found: y.len(),
            });
        }
        let xs = as_contiguous(x);
        match y.as_slice_mut() {
            Some(out) => self.prox_into(out, &*xs, gamma),
            None => {
                let mut out = vec![S::zero(); xs.len()];
                let v = self.prox_into(&mut out, &*xs, gamma)?;
                for (dst, src) in y.iter_mut().zip(out) {
                    *dst = src;
                }
                Ok(v)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, s};

    const TOL: f64 = 1e-12;

    #[test]
    fn test_prox_array_single_active() {
        let ball = L1Ball::new(1.0).unwrap();
        let x = array![4.0, 0.0, 0.0];
        let (y, v) = ball.prox_array(&x.view(), 1.0);
        assert_eq!(v, 0.0);
        assert_relative_eq!(y[0], 1.0, epsilon = TOL);
        assert_relative_eq!(y[1], 0.0, epsilon = TOL);
        assert_relative_eq!(y[2], 0.0, epsilon = TOL);
    }

    #[test]
    fn test_evaluate_strided_view() {
        let ball = L1Ball::new(1.0).unwrap();
        // Every other element: [0.5, 0.3] inside, the skipped 9s would be outside.
        let x = array![0.5, 9.0, 0.3, 9.0];
        let view = x.slice(s![..;2]);
        assert!(view.as_slice().is_none());
        assert_eq!(ball.evaluate_array(&view), 0.0);
        assert_eq!(ball.evaluate_array(&x.view()), f64::INFINITY);
    }

    #[test]
    fn test_prox_array_into_strided_output() {
        let ball = L1Ball::new(2.0).unwrap();
        let x = array![2.0, 2.0];
        let mut buf = Array1::<f64>::zeros(4);
        {
            let mut out = buf.slice_mut(s![..;2]);
            let v = ball.prox_array_into(&mut out, &x.view(), 1.0).unwrap();
            assert_eq!(v, 0.0);
        }
        assert_relative_eq!(buf[0], 1.0, epsilon = TOL);
        assert_relative_eq!(buf[2], 1.0, epsilon = TOL);
        assert_eq!(buf[1], 0.0);
        assert_eq!(buf[3], 0.0);
    }

    #[test]
    fn test_prox_array_into_length_mismatch() {
        let ball = L1Ball::new(1.0).unwrap();
        let x = array![1.0, 2.0, 3.0];
        let mut y = Array1::<f64>::zeros(2);
        let err = ball
            .prox_array_into(&mut y.view_mut(), &x.view(), 1.0)
            .unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }
}
