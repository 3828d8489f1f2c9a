//! Ballpark environment: air conditions and wind, and the drag they exert on a ball.
//!
//! Builds on the scalar air physics in [`flight_atmosphere`] and the vector
//! quantities in [`flight_core::quantity`]; configuration records are turned
//! into validated runtime values here.

use flight_atmosphere::{AirConditions, AirState, AtmosphereError, Temperature, TemperatureUnit};
use flight_config::BallparkConfig;
use flight_core::constants::PASCALS_PER_HECTOPASCAL;
use flight_core::{DragCoefficientSource, DragForce, Velocity, Wind, ball};
use flight_export::report::{ConditionsReport, DragReport};
use log::debug;

/// Errors surfaced while building an environment or evaluating drag in it.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    #[error("invalid air conditions: {0}")]
    Atmosphere(#[from] AtmosphereError),
    #[error("no drag coefficient available for {0}")]
    MissingDragCoefficient(i32),
}

/// Air and wind at one ballpark.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub name: String,
    pub air: AirConditions,
    pub wind: Wind,
}

/// Drag evaluated for one velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Ball velocity relative to the ground.
    pub velocity: Velocity,
    /// Ball velocity relative to the moving air.
    pub air_velocity: Velocity,
    pub drag_coefficient: f64,
    pub area_m2: f64,
    pub force: DragForce,
}

impl Environment {
    /// Validate the air conditions and bundle them with the wind.
    pub fn new(name: impl Into<String>, air: AirConditions, wind: Wind) -> Result<Self, EnvironmentError> {
        air.validate()?;
        Ok(Self {
            name: name.into(),
            air,
            wind,
        })
    }

    /// Convert a catalog record into a runtime environment.
    pub fn from_config(config: &BallparkConfig) -> Result<Self, EnvironmentError> {
        let unit: TemperatureUnit = config.temperature_unit.parse()?;
        let air = AirConditions {
            temperature: Temperature::new(config.temperature, unit),
            pressure_pa: config.pressure_hpa * PASCALS_PER_HECTOPASCAL,
            relative_humidity: config.relative_humidity,
        };
        let wind = config
            .wind
            .map(|w| Wind::from_speed_direction_degrees(w.speed_m_s, w.direction_deg))
            .unwrap_or_default();
        debug!("environment {}: {:?}, wind {}", config.name, air, wind);
        Self::new(config.name.clone(), air, wind)
    }

    pub fn air_state(&self) -> Result<AirState, EnvironmentError> {
        Ok(self.air.state()?)
    }

    /// Humid air density (kg/m³).
    pub fn air_density(&self) -> Result<f64, EnvironmentError> {
        Ok(self.air.density()?)
    }

    /// Velocity of the ball relative to the air mass (wind has no vertical part).
    pub fn air_velocity(&self, velocity: &Velocity) -> Velocity {
        *velocity - self.wind.extend(0.0)
    }

    /// Drag on a regulation ball moving at `velocity` in season `year`.
    pub fn drag_on<S: DragCoefficientSource + ?Sized>(
        &self,
        velocity: &Velocity,
        source: &S,
        year: i32,
    ) -> Result<DragSample, EnvironmentError> {
        let drag_coefficient = source
            .drag_coefficient(year)
            .ok_or(EnvironmentError::MissingDragCoefficient(year))?;
        let density = self.air_density()?;
        let area_m2 = ball::regulation_area_m2();
        let air_velocity = self.air_velocity(velocity);
        let force = DragForce::from_velocity(density, &air_velocity, area_m2, drag_coefficient);
        Ok(DragSample {
            velocity: *velocity,
            air_velocity,
            drag_coefficient,
            area_m2,
            force,
        })
    }

    /// Summarise the environment (and optionally one drag sample) for export.
    pub fn report(&self, drag: Option<&DragSample>) -> Result<ConditionsReport, EnvironmentError> {
        let state = self.air_state()?;
        Ok(ConditionsReport {
            ballpark: self.name.clone(),
            temperature_k: state.temperature_k,
            pressure_pa: self.air.pressure_pa,
            relative_humidity: self.air.relative_humidity,
            vapor_pressure_pa: state.vapor_pressure_pa,
            air_density_kg_m3: state.density_kg_m3,
            wind_m_s: self.wind.to_array(),
            wind_speed_m_s: self.wind.speed(),
            wind_direction_rad: if self.wind.speed() > 0.0 {
                self.wind.direction()
            } else {
                0.0
            },
            drag: drag.map(|sample| DragReport {
                velocity_m_s: sample.velocity.to_array(),
                drag_coefficient: sample.drag_coefficient,
                area_m2: sample.area_m2,
                force_n: sample.force.to_array(),
                force_magnitude_n: sample.force.norm(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_config::WindConfig;

    fn coors() -> BallparkConfig {
        BallparkConfig {
            name: "Coors Field".to_string(),
            temperature: 75.0,
            temperature_unit: "fahrenheit".to_string(),
            pressure_hpa: 843.0,
            relative_humidity: 0.3,
            wind: Some(WindConfig {
                speed_m_s: 4.0,
                direction_deg: 0.0,
            }),
        }
    }

    #[test]
    fn thin_air_at_altitude() {
        let env = Environment::from_config(&coors()).unwrap();
        let rho = env.air_density().unwrap();
        assert!(rho > 0.95 && rho < 1.0, "rho = {rho}");
        assert!((env.wind.x() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn tailwind_reduces_drag() {
        let env = Environment::from_config(&coors()).unwrap();
        let still = Environment::new("Dome", env.air, Wind::default()).unwrap();
        let v = Velocity::new([40.0, 0.0, 0.0]);
        let with_wind = env.drag_on(&v, &0.35_f64, 2024).unwrap();
        let without = still.drag_on(&v, &0.35_f64, 2024).unwrap();
        assert_eq!(with_wind.air_velocity.to_array(), [36.0, 0.0, 0.0]);
        assert!(with_wind.force.x() < without.force.x());
    }

    #[test]
    fn calm_park_reports_zero_wind_direction() {
        let mut config = coors();
        config.wind = None;
        let env = Environment::from_config(&config).unwrap();
        assert!(env.wind.direction().is_nan());
        let report = env.report(None).unwrap();
        assert_eq!(report.wind_speed_m_s, 0.0);
        assert_eq!(report.wind_direction_rad, 0.0);

        let breezy = Environment::from_config(&coors()).unwrap().report(None).unwrap();
        assert!(breezy.wind_direction_rad.abs() < 1e-12);
        assert!((breezy.wind_speed_m_s - 4.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_unit_and_missing_season_are_errors() {
        let mut config = coors();
        config.temperature_unit = "rankine".to_string();
        assert!(matches!(
            Environment::from_config(&config),
            Err(EnvironmentError::Atmosphere(AtmosphereError::UnknownUnit(_)))
        ));

        let env = Environment::from_config(&coors()).unwrap();
        let table = flight_core::DragTable::new();
        assert!(matches!(
            env.drag_on(&Velocity::default(), &table, 2024),
            Err(EnvironmentError::MissingDragCoefficient(2024))
        ));
    }
}
