//! Air properties at the ballpark: temperature scales, vapour pressure and
//! dry/humid air density from the ideal gas law.

use std::fmt;
use std::str::FromStr;

use flight_core::constants::{
    MOLAR_GAS_CONSTANT, MOLAR_MASS_DRY_AIR, MOLAR_MASS_WATER_VAPOR, PASCALS_PER_HECTOPASCAL,
    ZERO_CELSIUS_K,
};
use log::debug;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AtmosphereError {
    #[error("unknown temperature unit `{0}`")]
    UnknownUnit(String),
    #[error("air pressure must be positive (got {0} Pa)")]
    InvalidPressure(f64),
    #[error("relative humidity must lie in [0, 1] (got {0})")]
    InvalidHumidity(f64),
    #[error("temperature is not a finite absolute value (got {0} K)")]
    InvalidTemperature(f64),
}

/// Supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TemperatureUnit {
    type Err = AtmosphereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
            _ => Err(AtmosphereError::UnknownUnit(s.to_string())),
        }
    }
}

/// A temperature reading that can be rendered on any scale.
///
/// A reading taken on an unrecognised scale renders as NaN everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    value: f64,
    unit: Option<TemperatureUnit>,
}

impl Temperature {
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self {
            value,
            unit: Some(unit),
        }
    }

    pub fn from_celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    pub fn from_fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    pub fn from_kelvin(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Kelvin)
    }

    /// Reading on a scale named at runtime.
    pub fn parse(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.parse().ok(),
        }
    }

    pub fn unit(&self) -> Option<TemperatureUnit> {
        self.unit
    }

    /// °C
    pub fn celsius(&self) -> f64 {
        match self.unit {
            Some(TemperatureUnit::Celsius) => self.value,
            Some(TemperatureUnit::Fahrenheit) => 5.0 / 9.0 * (self.value - 32.0),
            Some(TemperatureUnit::Kelvin) => self.value - ZERO_CELSIUS_K,
            None => f64::NAN,
        }
    }

    /// °F
    pub fn fahrenheit(&self) -> f64 {
        match self.unit {
            Some(TemperatureUnit::Celsius) => 9.0 / 5.0 * self.value + 32.0,
            Some(TemperatureUnit::Fahrenheit) => self.value,
            Some(TemperatureUnit::Kelvin) => 9.0 / 5.0 * (self.value - ZERO_CELSIUS_K) + 32.0,
            None => f64::NAN,
        }
    }

    /// K
    pub fn kelvin(&self) -> f64 {
        match self.unit {
            Some(TemperatureUnit::Celsius) => self.value + ZERO_CELSIUS_K,
            Some(TemperatureUnit::Fahrenheit) => 5.0 / 9.0 * (self.value - 32.0) + ZERO_CELSIUS_K,
            Some(TemperatureUnit::Kelvin) => self.value,
            None => f64::NAN,
        }
    }
}

/// Density (kg/m³) of dry air at `pressure_pa` and `temperature_k`.
///
/// Ideal gas law with the specific gas constant of dry air, `R / M_d`.
#[inline]
pub fn dry_air_density(pressure_pa: f64, temperature_k: f64) -> f64 {
    pressure_pa * MOLAR_MASS_DRY_AIR / (MOLAR_GAS_CONSTANT * temperature_k)
}

/// Density (kg/m³) of a dry air / water vapour mixture from partial pressures.
#[inline]
pub fn humid_air_density(dry_pressure_pa: f64, vapor_pressure_pa: f64, temperature_k: f64) -> f64 {
    (dry_pressure_pa * MOLAR_MASS_DRY_AIR + vapor_pressure_pa * MOLAR_MASS_WATER_VAPOR)
        / (MOLAR_GAS_CONSTANT * temperature_k)
}

/// Partial pressure of water vapour at relative humidity `phi` (0–1).
#[inline]
pub fn vapor_pressure(phi: f64, saturation_pressure: f64) -> f64 {
    phi * saturation_pressure
}

/// Saturation vapour pressure (hPa) over water at `temperature_c` (Tetens).
#[inline]
pub fn saturation_vapor_pressure(temperature_c: f64) -> f64 {
    6.1078 * 10.0_f64.powf(7.5 * temperature_c / (temperature_c + 237.3))
}

/// Ambient conditions used to evaluate air density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirConditions {
    pub temperature: Temperature,
    pub pressure_pa: f64,
    /// Relative humidity as a fraction in `[0, 1]`.
    pub relative_humidity: f64,
}

/// Partial pressures and density derived from [`AirConditions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    pub temperature_k: f64,
    pub saturation_pressure_pa: f64,
    pub vapor_pressure_pa: f64,
    pub dry_pressure_pa: f64,
    pub density_kg_m3: f64,
}

impl AirConditions {
    pub fn validate(&self) -> Result<(), AtmosphereError> {
        if !(self.pressure_pa > 0.0) {
            return Err(AtmosphereError::InvalidPressure(self.pressure_pa));
        }
        if !(0.0..=1.0).contains(&self.relative_humidity) {
            return Err(AtmosphereError::InvalidHumidity(self.relative_humidity));
        }
        let kelvin = self.temperature.kelvin();
        if !kelvin.is_finite() || kelvin <= 0.0 {
            return Err(AtmosphereError::InvalidTemperature(kelvin));
        }
        Ok(())
    }

    /// Split the pressure into dry and vapour parts and compute the density.
    pub fn state(&self) -> Result<AirState, AtmosphereError> {
        self.validate()?;
        let temperature_k = self.temperature.kelvin();
        let saturation_pressure_pa =
            saturation_vapor_pressure(self.temperature.celsius()) * PASCALS_PER_HECTOPASCAL;
        let vapor_pressure_pa = vapor_pressure(self.relative_humidity, saturation_pressure_pa);
        let dry_pressure_pa = self.pressure_pa - vapor_pressure_pa;
        let density_kg_m3 = humid_air_density(dry_pressure_pa, vapor_pressure_pa, temperature_k);
        debug!(
            "air at {temperature_k:.2} K, {:.0} Pa, RH {:.2}: p_v = {vapor_pressure_pa:.1} Pa, rho = {density_kg_m3:.4} kg/m3",
            self.pressure_pa, self.relative_humidity
        );
        Ok(AirState {
            temperature_k,
            saturation_pressure_pa,
            vapor_pressure_pa,
            dry_pressure_pa,
            density_kg_m3,
        })
    }

    /// Humid air density (kg/m³).
    pub fn density(&self) -> Result<f64, AtmosphereError> {
        Ok(self.state()?.density_kg_m3)
    }
}
