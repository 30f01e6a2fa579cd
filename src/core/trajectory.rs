use crate::core::energy::{self, EnergySplit};
use crate::core::error::EngineError;
use crate::core::kinematics::{FlightSummary, MotionCoefficients};

pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Launch-frame positions sampled at uniform time steps across the flight.
pub type TrajectoryPath = Vec<(f64, f64)>;

/// Closed-form kinematic and energy state at one instant of the flight.
/// Ephemeral: recomputed per query, never cached by the core.
#[derive(Clone, Copy, Debug)]
pub struct InstantState {
    pub t_s: f64,
    pub x_m: f64,
    pub y_m: f64,
    pub vx_mps: f64,
    pub vy_mps: f64,
    pub energy: EnergySplit,
}

fn position_at(coeffs: MotionCoefficients, gravity_mps2: f64, t_s: f64) -> (f64, f64) {
    let x = coeffs.vx_mps * t_s;
    let y = (coeffs.vy_mps * t_s) - (0.5 * gravity_mps2 * t_s * t_s);
    (x, y)
}

/// Samples the whole trajectory over the closed interval [0, flight time].
/// A zero-length flight collapses to the single launch point.
pub fn full_path(
    coeffs: MotionCoefficients,
    summary: &FlightSummary,
    gravity_mps2: f64,
    sample_count: usize,
) -> TrajectoryPath {
    if summary.flight_time_s <= 0.0 {
        return vec![(0.0, 0.0)];
    }

    let steps = sample_count.max(2) - 1;
    (0..=steps)
        .map(|i| {
            let t = summary.flight_time_s * (i as f64) / (steps as f64);
            position_at(coeffs, gravity_mps2, t)
        })
        .collect()
}

/// Exact closed-form state at elapsed time `t_s`. Never integrated, so two
/// queries at the same instant can never drift apart.
pub fn state_at(
    coeffs: MotionCoefficients,
    summary: &FlightSummary,
    gravity_mps2: f64,
    mass_kg: f64,
    t_s: f64,
) -> Result<InstantState, EngineError> {
    if t_s < 0.0 || t_s > summary.flight_time_s {
        return Err(EngineError::OutOfRange {
            t_s,
            flight_time_s: summary.flight_time_s,
        });
    }

    let (x_m, y_m) = position_at(coeffs, gravity_mps2, t_s);
    let vy_mps = coeffs.vy_mps - (gravity_mps2 * t_s);
    let energy = energy::split(y_m, coeffs.vx_mps, vy_mps, gravity_mps2, mass_kg);

    Ok(InstantState {
        t_s,
        x_m,
        y_m,
        vx_mps: coeffs.vx_mps,
        vy_mps,
        energy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::energy::total_mechanical_energy;
    use crate::core::kinematics::{Gravity, LaunchParameters, compute};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn earth_run(speed: f64, angle: f64) -> (LaunchParameters, MotionCoefficients, FlightSummary) {
        let params = LaunchParameters::new(speed, angle, Gravity::Earth);
        let (coeffs, summary) = compute(&params).expect("valid parameters");
        (params, coeffs, summary)
    }

    #[test]
    fn path_spans_the_closed_flight_window() {
        let (params, coeffs, summary) = earth_run(50.0, 45.0);
        let path = full_path(coeffs, &summary, params.gravity.mps2(), DEFAULT_SAMPLE_COUNT);

        assert_eq!(path.len(), DEFAULT_SAMPLE_COUNT);
        assert_close(path[0].0, 0.0, 1e-12);
        assert_close(path[0].1, 0.0, 1e-12);
        assert_close(path[path.len() - 1].0, summary.range_m, 1e-6);
        assert_close(path[path.len() - 1].1, 0.0, 1e-6);
    }

    #[test]
    fn path_is_idempotent() {
        let (params, coeffs, summary) = earth_run(72.0, 33.0);
        let first = full_path(coeffs, &summary, params.gravity.mps2(), 64);
        let second = full_path(coeffs, &summary, params.gravity.mps2(), 64);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_length_flight_is_a_single_point() {
        let (params, coeffs, summary) = earth_run(30.0, 0.0);
        let path = full_path(coeffs, &summary, params.gravity.mps2(), DEFAULT_SAMPLE_COUNT);
        assert_eq!(path, vec![(0.0, 0.0)]);

        let state = state_at(coeffs, &summary, params.gravity.mps2(), params.mass_kg, 0.0)
            .expect("launch instant is always queryable");
        assert_close(state.vx_mps, 30.0, 1e-9);
        assert_close(state.vy_mps, 0.0, 1e-12);
    }

    #[test]
    fn launch_state_reproduces_the_launch_velocity() {
        let (params, coeffs, summary) = earth_run(50.0, 45.0);
        let state = state_at(coeffs, &summary, params.gravity.mps2(), params.mass_kg, 0.0)
            .expect("t=0 is valid");

        assert_eq!(state.vx_mps, coeffs.vx_mps);
        assert_eq!(state.vy_mps, coeffs.vy_mps);
        assert_close(state.x_m, 0.0, 1e-12);
        assert_close(state.y_m, 0.0, 1e-12);
    }

    #[test]
    fn landing_state_returns_to_the_ground() {
        let (params, coeffs, summary) = earth_run(50.0, 45.0);
        let state = state_at(
            coeffs,
            &summary,
            params.gravity.mps2(),
            params.mass_kg,
            summary.flight_time_s,
        )
        .expect("landing instant is valid");

        assert_close(state.y_m, 0.0, 1e-6);
        assert_close(state.x_m, summary.range_m, 1e-6);
        assert_close(state.vy_mps, -coeffs.vy_mps, 1e-9);
    }

    #[test]
    fn apex_sits_at_half_flight_time() {
        let (params, coeffs, summary) = earth_run(50.0, 45.0);
        let apex = state_at(
            coeffs,
            &summary,
            params.gravity.mps2(),
            params.mass_kg,
            summary.flight_time_s / 2.0,
        )
        .expect("apex instant is valid");

        assert_close(apex.vy_mps, 0.0, 1e-9);
        assert_close(apex.y_m, summary.max_height_m, 1e-6);
        assert_close(
            apex.energy.potential_j,
            params.mass_kg * params.gravity.mps2() * summary.max_height_m,
            1e-6,
        );
    }

    #[test]
    fn energy_is_conserved_at_every_sampled_instant() {
        let (params, coeffs, summary) = earth_run(50.0, 45.0);
        let reference = total_mechanical_energy(&params);
        let g = params.gravity.mps2();

        for i in 0..DEFAULT_SAMPLE_COUNT {
            let t = summary.flight_time_s * (i as f64) / ((DEFAULT_SAMPLE_COUNT - 1) as f64);
            let state =
                state_at(coeffs, &summary, g, params.mass_kg, t).expect("t inside flight window");
            assert_close(state.energy.total(), reference, reference * 1e-6);
        }
    }

    #[test]
    fn rejects_times_outside_the_flight_window() {
        let (params, coeffs, summary) = earth_run(50.0, 45.0);
        let g = params.gravity.mps2();

        for bad_t in [-0.1, summary.flight_time_s + 0.1] {
            let err = state_at(coeffs, &summary, g, params.mass_kg, bad_t)
                .expect_err("out-of-window time must be rejected");
            assert!(matches!(err, EngineError::OutOfRange { .. }));
        }
    }
}
