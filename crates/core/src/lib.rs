//! Core numeric types for baseball flight modelling: vector algebra, coordinate
//! conversions and the physical quantities built on them.

pub mod coordinates;
pub mod drag;
pub mod quantity;
pub mod vector;

pub use coordinates::{
    CoordinateError, CoordinateSystem, Coordinates, Coordinates2D, Coordinates3D, Planar, Spatial,
};
pub use drag::{DragCoefficientSource, DragTable};
pub use quantity::{Acceleration, DragForce, Position, Velocity, Wind};
pub use vector::{Kind, Operand, Plain, ShapeError, Vector};

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Molar gas constant (J/(mol·K)).
    pub const MOLAR_GAS_CONSTANT: f64 = 8.314_462_618;
    /// Molar mass of dry air (kg/mol).
    pub const MOLAR_MASS_DRY_AIR: f64 = 0.028_964_4;
    /// Molar mass of water vapour (kg/mol).
    pub const MOLAR_MASS_WATER_VAPOR: f64 = 0.018_016;
    /// Offset between the Celsius and Kelvin scales.
    pub const ZERO_CELSIUS_K: f64 = 273.15;
    /// Metres per inch.
    pub const METERS_PER_INCH: f64 = 0.0254;
    /// Kilograms per avoirdupois ounce.
    pub const KILOGRAMS_PER_OUNCE: f64 = 0.028_349_523_125;
    /// Pascals per hectopascal (millibar).
    pub const PASCALS_PER_HECTOPASCAL: f64 = 100.0;
}

/// Regulation baseball dimensions (MLB Rule 3.01). Reference data only.
pub mod ball {
    use super::constants::{KILOGRAMS_PER_OUNCE, METERS_PER_INCH};

    /// Closed interval of permitted values.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Bounds {
        pub min: f64,
        pub max: f64,
    }

    impl Bounds {
        pub fn midpoint(&self) -> f64 {
            0.5 * (self.min + self.max)
        }

        pub fn contains(&self, value: f64) -> bool {
            (self.min..=self.max).contains(&value)
        }
    }

    /// Weight in ounces.
    pub const WEIGHT_OZ: Bounds = Bounds { min: 5.0, max: 5.25 };
    /// Circumference in inches.
    pub const CIRCUMFERENCE_IN: Bounds = Bounds { min: 9.0, max: 9.25 };

    /// Cross-sectional area (m²) of a ball with the given circumference in inches.
    #[inline]
    pub fn cross_sectional_area_m2(circumference_in: f64) -> f64 {
        let circumference_m = circumference_in * METERS_PER_INCH;
        circumference_m * circumference_m / (4.0 * std::f64::consts::PI)
    }

    /// Mass (kg) of a ball with the given weight in ounces.
    #[inline]
    pub fn mass_kg(weight_oz: f64) -> f64 {
        weight_oz * KILOGRAMS_PER_OUNCE
    }

    /// Cross-sectional area (m²) of a ball at the regulation midpoint.
    pub fn regulation_area_m2() -> f64 {
        cross_sectional_area_m2(CIRCUMFERENCE_IN.midpoint())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn regulation_ball_area_is_about_four_thousandths() {
            let area = regulation_area_m2();
            assert!((area - 0.004_26).abs() < 5e-5, "area = {area}");
        }

        #[test]
        fn bounds_are_inclusive() {
            assert!(WEIGHT_OZ.contains(5.0));
            assert!(WEIGHT_OZ.contains(5.25));
            assert!(!CIRCUMFERENCE_IN.contains(9.5));
            assert!((mass_kg(5.125) - 0.145).abs() < 1e-3);
        }
    }
}
