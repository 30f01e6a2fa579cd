use crate::core::error::EngineError;
use crate::core::kinematics::LaunchParameters;
use crate::core::trajectory::InstantState;

/// Relative drift beyond which the conservation check reports a model defect.
pub const CONSERVATION_REL_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergySplit {
    pub kinetic_j: f64,
    pub potential_j: f64,
}

impl EnergySplit {
    pub fn total(&self) -> f64 {
        self.kinetic_j + self.potential_j
    }
}

/// Instantaneous kinetic/potential split from raw kinematic scalars.
pub fn split(y_m: f64, vx_mps: f64, vy_mps: f64, gravity_mps2: f64, mass_kg: f64) -> EnergySplit {
    EnergySplit {
        kinetic_j: 0.5 * mass_kg * ((vx_mps * vx_mps) + (vy_mps * vy_mps)),
        potential_j: mass_kg * gravity_mps2 * y_m,
    }
}

/// The conserved reference value: all of the launch energy is kinetic.
pub fn total_mechanical_energy(params: &LaunchParameters) -> f64 {
    0.5 * params.mass_kg * params.speed_mps * params.speed_mps
}

/// Confirms KE + PE still equals the launch energy at `state`. A failure here
/// is a defect in the model, not a recoverable runtime condition.
pub fn check_conservation(
    state: &InstantState,
    params: &LaunchParameters,
) -> Result<(), EngineError> {
    let reference = total_mechanical_energy(params);
    let drift = (state.energy.total() - reference).abs();
    let tolerance = CONSERVATION_REL_TOLERANCE * reference.max(1.0);

    if drift > tolerance {
        return Err(EngineError::ConservationViolation {
            t_s: state.t_s,
            drift,
            tolerance,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinematics::{Gravity, compute};
    use crate::core::trajectory::state_at;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn launch_energy_is_purely_kinetic() {
        let at_launch = split(0.0, 30.0, 40.0, 9.81, 2.0);
        // |v| = 50, so KE = 0.5 * 2 * 2500.
        assert_close(at_launch.kinetic_j, 2500.0, 1e-9);
        assert_close(at_launch.potential_j, 0.0, 1e-12);
    }

    #[test]
    fn total_mechanical_energy_matches_launch_speed() {
        let params = LaunchParameters::new(60.0, 45.0, Gravity::Earth);
        assert_close(total_mechanical_energy(&params), 1800.0, 1e-9);
    }

    #[test]
    fn conservation_holds_across_the_flight() {
        let params = LaunchParameters::new(50.0, 60.0, Gravity::Mars).with_mass(2.5);
        let (coeffs, summary) = compute(&params).expect("valid");
        let g = params.gravity.mps2();

        for i in 0..=20 {
            let t = summary.flight_time_s * (i as f64) / 20.0;
            let state =
                state_at(coeffs, &summary, g, params.mass_kg, t).expect("t inside flight window");
            check_conservation(&state, &params).expect("energy must be conserved");
        }
    }

    #[test]
    fn detects_a_corrupted_state() {
        let params = LaunchParameters::new(50.0, 45.0, Gravity::Earth);
        let (coeffs, summary) = compute(&params).expect("valid");
        let g = params.gravity.mps2();
        let mut state =
            state_at(coeffs, &summary, g, params.mass_kg, 1.0).expect("t inside flight window");

        state.energy.potential_j += 5.0;
        let err = check_conservation(&state, &params).expect_err("drift must be caught");
        assert!(matches!(err, EngineError::ConservationViolation { .. }));
    }
}
