//! Fixed-dimension numeric vectors with element-wise and broadcast arithmetic.
//!
//! A [`Vector`] carries a semantic [`Kind`] tag alongside its components so that
//! arithmetic on, say, a velocity yields a velocity again. The right-hand side of
//! every binary operator is any [`Operand`]: another vector of the same
//! dimension (applied index by index), a plain `f64` (broadcast across every
//! component) or a raw `[f64; N]` array.
//!
//! Floating-point edge cases are never special-cased. Division by zero,
//! `0.0.pow(-1.0)` and friends yield `inf`/`NaN` exactly as IEEE-754 dictates.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use thiserror::Error;

/// Axis labels used when rendering low-dimensional vectors.
const AXES: [&str; 3] = ["x", "y", "z"];

/// Raised when a sequence does not have exactly the vector's dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} components, found {found}")]
pub struct ShapeError {
    pub expected: usize,
    pub found: usize,
}

/// Semantic tag attached to a vector (position, velocity, ...).
pub trait Kind: Copy + Clone + fmt::Debug + Default + PartialEq + Send + Sync + 'static {
    /// Name used by the `Display` impl.
    const NAME: &'static str;
}

/// Tag for vectors with no physical meaning attached.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plain;

impl Kind for Plain {
    const NAME: &'static str = "Vector";
}

/// An immutable `N`-component vector of `f64` tagged with kind `K`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize, K: Kind = Plain> {
    components: [f64; N],
    kind: PhantomData<K>,
}

/// Right-hand operand accepted by the vector operators.
///
/// Implemented for vectors of the same dimension (any kind), for `f64`
/// (broadcast) and for `[f64; N]` arrays.
pub trait Operand<const N: usize> {
    /// Value paired with component `index` of the left operand.
    fn component(&self, index: usize) -> f64;
}

impl<const N: usize, K: Kind> Operand<N> for Vector<N, K> {
    #[inline]
    fn component(&self, index: usize) -> f64 {
        self.components[index]
    }
}

impl<const N: usize, K: Kind> Operand<N> for &Vector<N, K> {
    #[inline]
    fn component(&self, index: usize) -> f64 {
        self.components[index]
    }
}

impl<const N: usize> Operand<N> for f64 {
    #[inline]
    fn component(&self, _index: usize) -> f64 {
        *self
    }
}

impl<const N: usize> Operand<N> for [f64; N] {
    #[inline]
    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl<const N: usize, K: Kind> Vector<N, K> {
    /// Construct from an array of exactly `N` components.
    #[inline]
    pub const fn new(components: [f64; N]) -> Self {
        Self {
            components,
            kind: PhantomData,
        }
    }

    /// Construct from a slice, failing unless it holds exactly `N` values.
    pub fn from_slice(values: &[f64]) -> Result<Self, ShapeError> {
        let components: [f64; N] = values.try_into().map_err(|_| ShapeError {
            expected: N,
            found: values.len(),
        })?;
        Ok(Self::new(components))
    }

    /// Number of components.
    #[inline]
    pub const fn dimension(&self) -> usize {
        N
    }

    /// Borrow the raw components in declared order.
    #[inline]
    pub fn components(&self) -> &[f64; N] {
        &self.components
    }

    /// Copy the raw components out.
    #[inline]
    pub fn to_array(self) -> [f64; N] {
        self.components
    }

    /// Reinterpret the same components under another kind tag.
    #[inline]
    pub fn into_kind<L: Kind>(self) -> Vector<N, L> {
        Vector::new(self.components)
    }

    /// Apply `f` to every component.
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(self.components.map(&mut f))
    }

    /// Combine every component with the matching value of `rhs`.
    pub fn zip_with<R: Operand<N>>(self, rhs: R, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        let mut out = self.components;
        for (index, value) in out.iter_mut().enumerate() {
            *value = f(*value, rhs.component(index));
        }
        Self::new(out)
    }

    /// Floored division (`a // b`): `floor(a / b)` per component.
    pub fn floor_div<R: Operand<N>>(self, rhs: R) -> Self {
        self.zip_with(rhs, |a, b| (a / b).floor())
    }

    /// Raise every component to the matching power (`a ** b`).
    pub fn pow<R: Operand<N>>(self, rhs: R) -> Self {
        self.zip_with(rhs, f64::powf)
    }

    /// Inner product with another vector of the same dimension.
    pub fn dot<L: Kind>(&self, rhs: &Vector<N, L>) -> f64 {
        self.components
            .iter()
            .zip(rhs.components.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Row-vector times matrix product (`v @ M`), keeping the kind tag.
    pub fn matmul(&self, matrix: &[[f64; N]; N]) -> Self {
        let mut out = [0.0; N];
        for (column, value) in out.iter_mut().enumerate() {
            *value = self
                .components
                .iter()
                .zip(matrix.iter())
                .map(|(component, row)| component * row[column])
                .sum();
        }
        Self::new(out)
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// True when any component is NaN.
    pub fn has_nan(&self) -> bool {
        self.components.iter().any(|v| v.is_nan())
    }
}

/// Remainder with the sign of the divisor, matching floored division.
#[inline]
pub(crate) fn floored_rem(a: f64, b: f64) -> f64 {
    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        rem + b
    } else {
        rem
    }
}

impl<const N: usize, K: Kind> Default for Vector<N, K> {
    fn default() -> Self {
        Self::new([0.0; N])
    }
}

impl<const N: usize, K: Kind> From<[f64; N]> for Vector<N, K> {
    fn from(components: [f64; N]) -> Self {
        Self::new(components)
    }
}

impl<const N: usize, K: Kind> From<Vector<N, K>> for [f64; N] {
    fn from(vector: Vector<N, K>) -> Self {
        vector.components
    }
}

impl<const N: usize, K: Kind> TryFrom<&[f64]> for Vector<N, K> {
    type Error = ShapeError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl<const N: usize, K: Kind> TryFrom<Vec<f64>> for Vector<N, K> {
    type Error = ShapeError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

macro_rules! element_wise {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<const N: usize, K: Kind, R: Operand<N>> $trait<R> for Vector<N, K> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: R) -> Self::Output {
                self.zip_with(rhs, $op)
            }
        }
    };
}

element_wise!(Add, add, |a, b| a + b);
element_wise!(Sub, sub, |a, b| a - b);
element_wise!(Mul, mul, |a, b| a * b);
element_wise!(Div, div, |a, b| a / b);
// `%` follows floored semantics so that `a == b * a.floor_div(b) + a % b`.
element_wise!(Rem, rem, floored_rem);

macro_rules! scalar_lhs {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<const N: usize, K: Kind> $trait<Vector<N, K>> for f64 {
            type Output = Vector<N, K>;

            #[inline]
            fn $method(self, rhs: Vector<N, K>) -> Self::Output {
                rhs.map(|v| $op(self, v))
            }
        }
    };
}

scalar_lhs!(Add, add, |a: f64, b: f64| a + b);
scalar_lhs!(Sub, sub, |a: f64, b: f64| a - b);
scalar_lhs!(Mul, mul, |a: f64, b: f64| a * b);
scalar_lhs!(Div, div, |a: f64, b: f64| a / b);

impl<const N: usize, K: Kind> Neg for Vector<N, K> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl<const N: usize, K: Kind> fmt::Display for Vector<N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", K::NAME)?;
        for (index, value) in self.components.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            if N <= AXES.len() {
                write!(f, "{}={}", AXES[index], value)?;
            } else {
                write!(f, "x{}={}", index, value)?;
            }
        }
        write!(f, ")")
    }
}
