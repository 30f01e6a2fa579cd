use crate::core::error::EngineError;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;
pub const MOON_GRAVITY_MPS2: f64 = 1.62;
pub const MARS_GRAVITY_MPS2: f64 = 3.71;

pub const DEFAULT_MASS_KG: f64 = 1.0;

/// Gravity is picked once at parameter-acquisition time; the physics core
/// never branches on a planet name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gravity {
    Earth,
    Moon,
    Mars,
    Custom(f64),
}

impl Gravity {
    pub fn mps2(self) -> f64 {
        match self {
            Gravity::Earth => EARTH_GRAVITY_MPS2,
            Gravity::Moon => MOON_GRAVITY_MPS2,
            Gravity::Mars => MARS_GRAVITY_MPS2,
            Gravity::Custom(g) => g,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gravity::Earth => "Earth",
            Gravity::Moon => "Moon",
            Gravity::Mars => "Mars",
            Gravity::Custom(_) => "Custom",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LaunchParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub gravity: Gravity,
    pub mass_kg: f64,
}

impl LaunchParameters {
    pub fn new(speed_mps: f64, angle_deg: f64, gravity: Gravity) -> Self {
        Self {
            speed_mps,
            angle_deg,
            gravity,
            mass_kg: DEFAULT_MASS_KG,
        }
    }

    pub fn with_mass(mut self, mass_kg: f64) -> Self {
        self.mass_kg = mass_kg;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let finite_fields = [
            ("speed", self.speed_mps),
            ("angle", self.angle_deg),
            ("gravity", self.gravity.mps2()),
            ("mass", self.mass_kg),
        ];
        for (field, value) in finite_fields {
            if !value.is_finite() {
                return Err(EngineError::InvalidParameter {
                    field,
                    value,
                    expected: "a finite number",
                });
            }
        }

        if self.speed_mps <= 0.0 {
            return Err(EngineError::InvalidParameter {
                field: "speed",
                value: self.speed_mps,
                expected: "strictly positive m/s",
            });
        }
        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(EngineError::InvalidParameter {
                field: "angle",
                value: self.angle_deg,
                expected: "between 0 and 90 degrees",
            });
        }
        if self.gravity.mps2() <= 0.0 {
            return Err(EngineError::InvalidParameter {
                field: "gravity",
                value: self.gravity.mps2(),
                expected: "strictly positive m/s^2",
            });
        }
        if self.mass_kg <= 0.0 {
            return Err(EngineError::InvalidParameter {
                field: "mass",
                value: self.mass_kg,
                expected: "strictly positive kg",
            });
        }
        Ok(())
    }
}

/// Horizontal and vertical launch-velocity components, derived once per run.
#[derive(Clone, Copy, Debug)]
pub struct MotionCoefficients {
    pub vx_mps: f64,
    pub vy_mps: f64,
}

/// Derived flight metrics, valid only under g > 0 and vy >= 0.
#[derive(Clone, Copy, Debug)]
pub struct FlightSummary {
    pub flight_time_s: f64,
    pub range_m: f64,
    pub max_height_m: f64,
}

/// Resolves launch parameters into velocity components and flight metrics.
/// Angle 0 gives a zero-length flight; angle 90 a purely vertical one.
pub fn compute(
    params: &LaunchParameters,
) -> Result<(MotionCoefficients, FlightSummary), EngineError> {
    params.validate()?;

    let theta = params.angle_deg.to_radians();
    let coeffs = MotionCoefficients {
        vx_mps: params.speed_mps * theta.cos(),
        vy_mps: params.speed_mps * theta.sin(),
    };

    let g = params.gravity.mps2();
    let flight_time_s = 2.0 * coeffs.vy_mps / g;
    let summary = FlightSummary {
        flight_time_s,
        range_m: coeffs.vx_mps * flight_time_s,
        max_height_m: (coeffs.vy_mps * coeffs.vy_mps) / (2.0 * g),
    };

    Ok((coeffs, summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn resolves_known_45_degree_launch() {
        let params = LaunchParameters::new(50.0, 45.0, Gravity::Earth);
        let (coeffs, summary) = compute(&params).expect("valid parameters");

        assert_close(coeffs.vx_mps, 35.36, 0.1);
        assert_close(coeffs.vy_mps, 35.36, 0.1);
        assert_close(summary.flight_time_s, 7.21, 0.1);
        assert_close(summary.range_m, 254.9, 0.1);
        assert_close(summary.max_height_m, 63.8, 0.1);
    }

    #[test]
    fn flat_launch_never_leaves_the_ground() {
        let params = LaunchParameters::new(30.0, 0.0, Gravity::Earth);
        let (coeffs, summary) = compute(&params).expect("angle 0 is valid");

        assert_close(coeffs.vy_mps, 0.0, 1e-12);
        assert_close(summary.flight_time_s, 0.0, 1e-12);
        assert_close(summary.range_m, 0.0, 1e-12);
        assert_close(summary.max_height_m, 0.0, 1e-12);
    }

    #[test]
    fn vertical_launch_has_no_range() {
        let params = LaunchParameters::new(30.0, 90.0, Gravity::Earth);
        let (coeffs, summary) = compute(&params).expect("angle 90 is valid");

        assert_close(coeffs.vx_mps, 0.0, 1e-9);
        assert_close(summary.range_m, 0.0, 1e-6);
        assert_close(coeffs.vy_mps, 30.0, 1e-9);
    }

    #[test]
    fn moon_gravity_stretches_flight_time() {
        let earth = LaunchParameters::new(40.0, 45.0, Gravity::Earth);
        let moon = LaunchParameters::new(40.0, 45.0, Gravity::Moon);
        let (_, earth_summary) = compute(&earth).expect("valid");
        let (_, moon_summary) = compute(&moon).expect("valid");

        assert_close(
            moon_summary.flight_time_s / earth_summary.flight_time_s,
            EARTH_GRAVITY_MPS2 / MOON_GRAVITY_MPS2,
            1e-9,
        );
    }

    #[test]
    fn rejects_out_of_domain_parameters() {
        let cases = [
            LaunchParameters::new(-5.0, 45.0, Gravity::Earth),
            LaunchParameters::new(0.0, 45.0, Gravity::Earth),
            LaunchParameters::new(50.0, 120.0, Gravity::Earth),
            LaunchParameters::new(50.0, -10.0, Gravity::Earth),
            LaunchParameters::new(50.0, 45.0, Gravity::Custom(0.0)),
            LaunchParameters::new(50.0, 45.0, Gravity::Custom(-9.81)),
            LaunchParameters::new(50.0, 45.0, Gravity::Earth).with_mass(0.0),
            LaunchParameters::new(f64::NAN, 45.0, Gravity::Earth),
        ];

        for params in cases {
            let err = compute(&params).expect_err("parameters should be rejected");
            assert!(
                matches!(err, EngineError::InvalidParameter { .. }),
                "unexpected error: {err:?}"
            );
        }
    }

    #[test]
    fn invalid_parameter_error_names_the_field() {
        let err = compute(&LaunchParameters::new(50.0, 120.0, Gravity::Earth))
            .expect_err("angle out of domain");
        match err {
            EngineError::InvalidParameter { field, value, .. } => {
                assert_eq!(field, "angle");
                assert_close(value, 120.0, 1e-12);
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
