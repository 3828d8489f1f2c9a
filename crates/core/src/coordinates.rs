//! Coordinate-system conversions for 2D and 3D points.
//!
//! A [`Coordinates`] value stores one point in the system it was declared in
//! and renders it in any other system of the same dimensionality on demand.
//! Views are recomputed on every call.
//!
//! | system      | `[0]` | `[1]` | `[2]` |
//! |-------------|-------|-------|-------|
//! | cartesian   | x     | y     | z     |
//! | polar       | r     | θ     |       |
//! | cylindrical | ρ     | φ     | z     |
//! | spherical   | r     | θ     | φ     |
//!
//! The azimuth formulas use the single-argument arctangent `atan(y / x)`, so
//! angles for points with `x < 0` land in the wrong quadrant and the origin
//! yields NaN. These singularities are passed through untouched.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::vector::{Kind, ShapeError, Vector};

/// Errors raised while constructing coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("`{name}` is not a {dimension}D coordinate system")]
    UnsupportedSystem { name: String, dimension: usize },
}

/// The closed set of coordinate systems available for an `N`-dimensional point.
///
/// Implementors supply a conversion table keyed by (source, target) pairs.
pub trait CoordinateSystem<const N: usize>:
    Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = CoordinateError> + Send + Sync + 'static
{
    /// Name used when rendering a [`Coordinates`] value.
    const LABEL: &'static str;
    /// Every declared system, in rendering order.
    const ALL: &'static [Self];

    /// Convert `raw`, expressed in `self`, into `target`.
    fn convert(self, target: Self, raw: &[f64; N]) -> [f64; N];
}

/// A point stored in one declared coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates<const N: usize, S: CoordinateSystem<N>> {
    raw: [f64; N],
    system: S,
}

/// 2D point in cartesian or polar form.
pub type Coordinates2D = Coordinates<2, Planar>;
/// 3D point in cartesian, cylindrical or spherical form.
pub type Coordinates3D = Coordinates<3, Spatial>;

impl<const N: usize, S: CoordinateSystem<N>> Coordinates<N, S> {
    /// Construct from untyped input, validating both length and system name.
    pub fn new(raw: &[f64], system: &str) -> Result<Self, CoordinateError> {
        let raw: [f64; N] = raw.try_into().map_err(|_| ShapeError {
            expected: N,
            found: raw.len(),
        })?;
        let system = system.parse()?;
        Ok(Self { raw, system })
    }

    /// Construct from already-typed components.
    #[inline]
    pub const fn from_system(raw: [f64; N], system: S) -> Self {
        Self { raw, system }
    }

    /// Wrap an existing vector, interpreting its components in `system`.
    #[inline]
    pub fn from_vector<K: Kind>(vector: Vector<N, K>, system: S) -> Self {
        Self::from_system(vector.to_array(), system)
    }

    /// Stored components, in the stored system.
    #[inline]
    pub fn raw(&self) -> &[f64; N] {
        &self.raw
    }

    /// System the components are stored in.
    #[inline]
    pub fn system(&self) -> S {
        self.system
    }

    /// Render the point in `target`. The stored system is returned verbatim.
    pub fn view(&self, target: S) -> [f64; N] {
        if target == self.system {
            return self.raw;
        }
        self.system.convert(target, &self.raw)
    }

    /// Render the point in a system named at runtime.
    ///
    /// An unrecognised name yields an array of NaN rather than an error.
    pub fn view_named(&self, target: &str) -> [f64; N] {
        match target.parse::<S>() {
            Ok(target) => self.view(target),
            Err(_) => [f64::NAN; N],
        }
    }

    /// Render the point in `target` as a vector of kind `K`.
    pub fn to_vector<K: Kind>(&self, target: S) -> Vector<N, K> {
        Vector::new(self.view(target))
    }

    /// Re-express the point so that `target` becomes the stored system.
    pub fn to_system(&self, target: S) -> Self {
        Self::from_system(self.view(target), target)
    }
}

impl<const N: usize, S: CoordinateSystem<N>> fmt::Display for Coordinates<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", S::LABEL)?;
        for (index, system) in S::ALL.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={:?}", system, self.view(*system))?;
        }
        write!(f, ")")
    }
}

/// NumPy-style sign: zero (of either sign) and NaN map to themselves.
#[inline]
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        value
    }
}

fn unsupported(name: &str, dimension: usize) -> CoordinateError {
    CoordinateError::UnsupportedSystem {
        name: name.to_string(),
        dimension,
    }
}

/// Systems for 2D points: `(x, y)` and `(r, θ)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planar {
    Cartesian,
    Polar,
}

impl Planar {
    pub fn name(self) -> &'static str {
        match self {
            Planar::Cartesian => "cartesian",
            Planar::Polar => "polar",
        }
    }
}

impl fmt::Display for Planar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planar {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cartesian" => Ok(Planar::Cartesian),
            "polar" => Ok(Planar::Polar),
            _ => Err(unsupported(s, 2)),
        }
    }
}

impl CoordinateSystem<2> for Planar {
    const LABEL: &'static str = "Coordinates2D";
    const ALL: &'static [Self] = &[Planar::Cartesian, Planar::Polar];

    fn convert(self, target: Self, raw: &[f64; 2]) -> [f64; 2] {
        let [a, b] = *raw;
        match (self, target) {
            (Planar::Cartesian, Planar::Cartesian) | (Planar::Polar, Planar::Polar) => *raw,
            // (x, y) -> (r, θ)
            (Planar::Cartesian, Planar::Polar) => [(a * a + b * b).sqrt(), (b / a).atan()],
            // (r, θ) -> (x, y)
            (Planar::Polar, Planar::Cartesian) => [a * b.cos(), a * b.sin()],
        }
    }
}

/// Systems for 3D points: `(x, y, z)`, `(ρ, φ, z)` and `(r, θ, φ)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spatial {
    Cartesian,
    Cylindrical,
    Spherical,
}

impl Spatial {
    pub fn name(self) -> &'static str {
        match self {
            Spatial::Cartesian => "cartesian",
            Spatial::Cylindrical => "cylindrical",
            Spatial::Spherical => "spherical",
        }
    }
}

impl fmt::Display for Spatial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Spatial {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cartesian" => Ok(Spatial::Cartesian),
            "cylindrical" => Ok(Spatial::Cylindrical),
            "spherical" => Ok(Spatial::Spherical),
            _ => Err(unsupported(s, 3)),
        }
    }
}

impl CoordinateSystem<3> for Spatial {
    const LABEL: &'static str = "Coordinates3D";
    const ALL: &'static [Self] = &[Spatial::Cartesian, Spatial::Cylindrical, Spatial::Spherical];

    fn convert(self, target: Self, raw: &[f64; 3]) -> [f64; 3] {
        use Spatial::*;

        let [a, b, c] = *raw;
        match (self, target) {
            (Cartesian, Cartesian) | (Cylindrical, Cylindrical) | (Spherical, Spherical) => *raw,
            // (x, y, z) -> (ρ, φ, z)
            (Cartesian, Cylindrical) => [(a * a + b * b).sqrt(), (b / a).atan(), c],
            // (x, y, z) -> (r, θ, φ)
            (Cartesian, Spherical) => {
                let r = (a * a + b * b + c * c).sqrt();
                let rho = (a * a + b * b).sqrt();
                [r, (c / r).acos(), sign(b) * (a / rho).acos()]
            }
            // (ρ, φ, z) -> (x, y, z)
            (Cylindrical, Cartesian) => [a * b.cos(), a * b.sin(), c],
            // (ρ, φ, z) -> (r, θ, φ)
            (Cylindrical, Spherical) => [(a * a + c * c).sqrt(), (a / c).atan(), b],
            // (r, θ, φ) -> (x, y, z)
            (Spherical, Cartesian) => [a * b.sin() * c.cos(), a * b.sin() * c.sin(), a * b.cos()],
            // (r, θ, φ) -> (ρ, φ, z)
            (Spherical, Cylindrical) => [a * b.sin(), c, a * b.cos()],
        }
    }
}

impl Coordinates2D {
    /// `(x, y)`.
    pub fn cartesian(&self) -> [f64; 2] {
        self.view(Planar::Cartesian)
    }

    /// `(r, θ)`.
    pub fn polar(&self) -> [f64; 2] {
        self.view(Planar::Polar)
    }
}

impl Coordinates3D {
    /// `(x, y, z)`.
    pub fn cartesian(&self) -> [f64; 3] {
        self.view(Spatial::Cartesian)
    }

    /// `(ρ, φ, z)`: axial radius, azimuth, elevation.
    pub fn cylindrical(&self) -> [f64; 3] {
        self.view(Spatial::Cylindrical)
    }

    /// `(r, θ, φ)`: central radius, inclination, azimuth.
    pub fn spherical(&self) -> [f64; 3] {
        self.view(Spatial::Spherical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    const TOL: f64 = 1e-9;

    fn assert_close<const N: usize>(actual: [f64; N], expected: [f64; N]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < TOL, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn planar_pythagorean_triple() {
        let point = Coordinates2D::new(&[3.0, 4.0], "cartesian").unwrap();
        assert_close(point.polar(), [5.0, (4.0_f64 / 3.0).atan()]);
        assert!((point.polar()[1] - 0.927_295_218).abs() < 1e-9);
    }

    #[test]
    fn planar_origin_has_undefined_angle() {
        let origin = Coordinates2D::new(&[0.0, 0.0], "cartesian").unwrap();
        let [r, theta] = origin.polar();
        assert_eq!(r, 0.0);
        assert!(theta.is_nan());
    }

    #[test]
    fn planar_on_vertical_axis_uses_infinite_slope() {
        let up = Coordinates2D::from_system([0.0, 2.0], Planar::Cartesian);
        assert_close(up.polar(), [2.0, FRAC_PI_2]);
        let down = Coordinates2D::from_system([0.0, -2.0], Planar::Cartesian);
        assert_close(down.polar(), [2.0, -FRAC_PI_2]);
    }

    #[test]
    fn planar_angle_ignores_quadrant() {
        // atan(y / x) folds the third quadrant onto the first.
        let point = Coordinates2D::from_system([-1.0, -1.0], Planar::Cartesian);
        assert_close(point.polar(), [2.0_f64.sqrt(), FRAC_PI_4]);
    }

    #[test]
    fn unit_x_axis_in_spherical() {
        let point = Coordinates3D::new(&[1.0, 0.0, 0.0], "cartesian").unwrap();
        assert_eq!(point.spherical(), [1.0, FRAC_PI_2, 0.0]);
        assert_eq!(point.cylindrical(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn spherical_azimuth_takes_sign_of_y() {
        let point = Coordinates3D::from_system([-1.0, -1.0, 0.0], Spatial::Cartesian);
        let [_, _, phi] = point.spherical();
        assert!((phi + 3.0 * FRAC_PI_4).abs() < TOL);
    }

    #[test]
    fn identity_view_is_exact() {
        let raw = [0.1 + 0.2, 1.0 / 3.0, -7.25];
        for system in Spatial::ALL {
            let point = Coordinates3D::from_system(raw, *system);
            assert_eq!(point.view(*system), raw);
        }
    }

    #[test]
    fn round_trips_through_every_pair() {
        let samples: [[f64; 3]; 3] = [[1.0, 2.0, 3.0], [0.5, -1.5, 2.0], [4.0, 0.25, 0.75]];
        for sample in samples {
            let cart = Coordinates3D::from_system(sample, Spatial::Cartesian);
            for source in Spatial::ALL {
                let stored = cart.to_system(*source);
                for target in Spatial::ALL {
                    let there = stored.to_system(*target);
                    assert_close(there.view(*source), stored.raw);
                }
            }
        }
        let planar = Coordinates2D::from_system([2.0, -3.0], Planar::Cartesian);
        assert_close(planar.to_system(Planar::Polar).cartesian(), [2.0, -3.0]);
    }

    #[test]
    fn construction_rejects_bad_shape_and_system() {
        let err = Coordinates3D::new(&[1.0, 2.0], "cartesian").unwrap_err();
        assert_eq!(err, CoordinateError::Shape(ShapeError { expected: 3, found: 2 }));
        assert!(matches!(
            Coordinates3D::new(&[1.0, 2.0, 3.0, 4.0], "cartesian"),
            Err(CoordinateError::Shape(_))
        ));
        assert!(matches!(
            Coordinates3D::new(&[1.0, 2.0, 3.0], "polar"),
            Err(CoordinateError::UnsupportedSystem { dimension: 3, .. })
        ));
        assert!(matches!(
            Coordinates2D::new(&[1.0, 2.0], "spherical"),
            Err(CoordinateError::UnsupportedSystem { dimension: 2, .. })
        ));
    }

    #[test]
    fn unknown_view_is_nan_filled() {
        let point = Coordinates3D::from_system([1.0, 2.0, 3.0], Spatial::Cartesian);
        let view = point.view_named("toroidal");
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|v| v.is_nan()));
        assert_eq!(point.view_named("Spherical"), point.spherical());
    }

    #[test]
    fn display_lists_every_system() {
        let point = Coordinates2D::from_system([1.0, 0.0], Planar::Cartesian);
        assert_eq!(
            point.to_string(),
            "Coordinates2D(cartesian=[1.0, 0.0], polar=[1.0, 0.0])"
        );
    }

    /// A user-declared family member: points on a line, stored raw or as log10.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Linear {
        Raw,
        Log,
    }

    impl fmt::Display for Linear {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                Linear::Raw => "raw",
                Linear::Log => "log",
            })
        }
    }

    impl FromStr for Linear {
        type Err = CoordinateError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "raw" => Ok(Linear::Raw),
                "log" => Ok(Linear::Log),
                _ => Err(unsupported(s, 1)),
            }
        }
    }

    impl CoordinateSystem<1> for Linear {
        const LABEL: &'static str = "Coordinates1D";
        const ALL: &'static [Self] = &[Linear::Raw, Linear::Log];

        fn convert(self, target: Self, raw: &[f64; 1]) -> [f64; 1] {
            match (self, target) {
                (Linear::Raw, Linear::Log) => [raw[0].log10()],
                (Linear::Log, Linear::Raw) => [10.0_f64.powf(raw[0])],
                _ => *raw,
            }
        }
    }

    #[test]
    fn family_accepts_user_declared_systems() {
        let point = Coordinates::<1, Linear>::new(&[100.0], "raw").unwrap();
        assert_close(point.view(Linear::Log), [2.0]);
        assert_eq!(point.to_string(), "Coordinates1D(raw=[100.0], log=[2.0])");
        assert!(Coordinates::<1, Linear>::new(&[1.0, 2.0], "raw").is_err());
    }
}
