use thiserror::Error;

/// Errors produced by the physics core. All are rejected synchronously;
/// none are worth retrying since the computation is deterministic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid {field}: {value} ({expected})")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("time {t_s} s is outside the flight window [0, {flight_time_s} s]")]
    OutOfRange { t_s: f64, flight_time_s: f64 },

    #[error(
        "mechanical energy drift {drift:e} at t={t_s} s exceeds tolerance {tolerance:e}"
    )]
    ConservationViolation {
        t_s: f64,
        drift: f64,
        tolerance: f64,
    },
}
