//! Element types the projection can act on.
//!
//! The algorithm only ever needs three things from an element: its modulus,
//! the ability to rescale it by a non-negative real, and a zero. Real floats
//! and `num_complex::Complex` both provide these, so one generic
//! implementation covers `f32`, `f64`, `Complex<f32>` and `Complex<f64>`.
//!
//! Rescaling by `max(|x| - τ, 0) / |x|` keeps the sign of a real element and
//! the phase of a complex one.

use std::fmt;

use num_complex::Complex;
use num_traits::{Float, FromPrimitive};

/// A real or complex scalar with a real modulus.
pub trait ProxScalar: Copy + PartialEq + fmt::Debug {
    /// The underlying real type (`f64` for both `f64` and `Complex<f64>`).
    type Real: Float + FromPrimitive + fmt::Debug;

    /// `|x|` (absolute value for reals, modulus for complex numbers).
    fn modulus(self) -> Self::Real;

    /// `x * k` for a real factor `k`.
    fn scale(self, k: Self::Real) -> Self;

    fn zero() -> Self;

    /// Soft-thresholding: `x · max(|x| − τ, 0) / |x|`, with `0/0 → 0`.
    #[inline]
    fn shrink(self, tau: Self::Real) -> Self {
        let m = self.modulus();
        if m > tau {
            self.scale((m - tau) / m)
        } else {
            Self::zero()
        }
    }
}

macro_rules! impl_real {
    ($($t:ty),*) => {$(
        impl ProxScalar for $t {
            type Real = $t;

            #[inline]
            fn modulus(self) -> $t {
                self.abs()
            }

            #[inline]
            fn scale(self, k: $t) -> $t {
                self * k
            }

            #[inline]
            fn zero() -> $t {
                0.0
            }
        }
    )*};
}

impl_real!(f32, f64);

impl<T> ProxScalar for Complex<T>
where
    T: Float + FromPrimitive + fmt::Debug,
{
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }

    #[inline]
    fn scale(self, k: T) -> Self {
        Complex::new(self.re * k, self.im * k)
    }

    #[inline]
    fn zero() -> Self {
        Complex::new(T::zero(), T::zero())
    }
}
