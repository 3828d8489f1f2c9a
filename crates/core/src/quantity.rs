//! Physical vector quantities built on [`Vector`].
//!
//! Each quantity is a `Vector` with a dedicated kind tag, so arithmetic keeps
//! the quantity (a `Velocity` plus anything is still a `Velocity`). Derived
//! readings go through a cartesian-tagged [`Coordinates`] view of the vector.
//!
//! [`Coordinates`]: crate::coordinates::Coordinates

use crate::coordinates::{Coordinates2D, Coordinates3D, Planar, Spatial};
use crate::vector::{Kind, Vector};

/// Kind tags for the physical quantities.
pub mod kind {
    use crate::vector::Kind;

    macro_rules! kinds {
        ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
            $(
                $(#[$meta])*
                #[derive(Debug, Clone, Copy, Default, PartialEq)]
                pub struct $name;

                impl Kind for $name {
                    const NAME: &'static str = stringify!($name);
                }
            )*
        };
    }

    kinds!(
        /// Location in metres.
        Position,
        /// Rate of change of position in m/s.
        Velocity,
        /// Rate of change of velocity in m/s².
        Acceleration,
        /// Horizontal air motion in m/s.
        Wind,
        /// Aerodynamic drag in newtons.
        DragForce,
    );
}

pub type Position = Vector<3, kind::Position>;
pub type Velocity = Vector<3, kind::Velocity>;
pub type Acceleration = Vector<3, kind::Acceleration>;
pub type Wind = Vector<2, kind::Wind>;
pub type DragForce = Vector<3, kind::DragForce>;

impl<K: Kind> Vector<3, K> {
    #[inline]
    pub fn x(&self) -> f64 {
        self.components()[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.components()[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.components()[2]
    }

    /// Cartesian-tagged coordinate view of this vector.
    pub fn coordinates(&self) -> Coordinates3D {
        Coordinates3D::from_vector(*self, Spatial::Cartesian)
    }

    /// Distance from the origin, `r` of the spherical form.
    pub fn central_radius(&self) -> f64 {
        self.coordinates().spherical()[0]
    }

    /// Angle from the +z axis, `θ` of the spherical form.
    pub fn inclination(&self) -> f64 {
        self.coordinates().spherical()[1]
    }

    /// Distance from the z axis, `ρ` of the cylindrical form.
    pub fn axial_radius(&self) -> f64 {
        self.coordinates().cylindrical()[0]
    }

    /// Angle in the xy plane, `φ` of the cylindrical form.
    pub fn azimuth(&self) -> f64 {
        self.coordinates().cylindrical()[1]
    }

    /// Height above the xy plane, `z` of the cylindrical form.
    pub fn elevation(&self) -> f64 {
        self.coordinates().cylindrical()[2]
    }
}

impl<K: Kind> Vector<2, K> {
    #[inline]
    pub fn x(&self) -> f64 {
        self.components()[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.components()[1]
    }

    /// Cartesian-tagged coordinate view of this vector.
    pub fn coordinates(&self) -> Coordinates2D {
        Coordinates2D::from_vector(*self, Planar::Cartesian)
    }

    /// `r` of the polar form.
    pub fn radius(&self) -> f64 {
        self.coordinates().polar()[0]
    }

    /// `θ` of the polar form.
    pub fn azimuth(&self) -> f64 {
        self.coordinates().polar()[1]
    }

    /// Lift into 3D with the given z component.
    pub fn extend(&self, z: f64) -> Vector<3, K> {
        Vector::new([self.x(), self.y(), z])
    }
}

impl Wind {
    /// Wind blowing at `speed` (m/s) along `direction` (radians from +x).
    pub fn from_speed_direction(speed: f64, direction: f64) -> Self {
        Coordinates2D::from_system([speed, direction], Planar::Polar).to_vector(Planar::Cartesian)
    }

    /// Same as [`Wind::from_speed_direction`] with the direction in degrees.
    pub fn from_speed_direction_degrees(speed: f64, direction_deg: f64) -> Self {
        Self::from_speed_direction(speed, direction_deg.to_radians())
    }

    pub fn speed(&self) -> f64 {
        self.radius()
    }

    pub fn direction(&self) -> f64 {
        self.azimuth()
    }
}

impl DragForce {
    /// Quadratic drag `ρ · (v ∘ v) · C_d · A / 2`.
    ///
    /// `v ∘ v` squares each velocity component independently, so the result is
    /// only parallel to `v` when `v` lies along an axis and every component is
    /// non-negative. This is not `ρ |v| v C_d A / 2`.
    pub fn from_velocity(density: f64, velocity: &Velocity, area: f64, drag_coefficient: f64) -> Self {
        let squared = *velocity * velocity;
        (squared * (density * drag_coefficient * area / 2.0)).into_kind()
    }
}
