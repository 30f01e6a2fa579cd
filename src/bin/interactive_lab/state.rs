use projectile_lab::core::error::EngineError;
use projectile_lab::core::kinematics::{
    FlightSummary, Gravity, LaunchParameters, MotionCoefficients, compute,
};
use projectile_lab::core::quiz::{QuizItem, apex_energy_question};
use projectile_lab::core::sequencer::{SessionState, checkpoints};
use projectile_lab::core::trajectory::{DEFAULT_SAMPLE_COUNT, TrajectoryPath, full_path};

use crate::constants::{ANIMATION_FRAMES, FRAME_PERIOD_S};

pub(crate) const PLANETS: [Gravity; 3] = [Gravity::Earth, Gravity::Moon, Gravity::Mars];

/// Slider-owned launch input. The core re-validates, but the sliders clamp
/// to the same domain so rejection is not reachable through the UI.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct LabInput {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) planet_idx: usize,
    pub(crate) mass_kg: f32,
}

impl LabInput {
    pub(crate) fn gravity(&self) -> Gravity {
        PLANETS[self.planet_idx.min(PLANETS.len() - 1)]
    }

    pub(crate) fn to_params(self) -> LaunchParameters {
        LaunchParameters::new(self.speed_mps as f64, self.angle_deg as f64, self.gravity())
            .with_mass(self.mass_kg as f64)
    }
}

/// One resolved simulation run: everything downstream of a parameter change.
pub(crate) struct RunData {
    pub(crate) params: LaunchParameters,
    pub(crate) coeffs: MotionCoefficients,
    pub(crate) summary: FlightSummary,
    pub(crate) path: TrajectoryPath,
    pub(crate) energy_quiz: QuizItem,
}

impl RunData {
    pub(crate) fn resolve(input: LabInput) -> Result<Self, EngineError> {
        let params = input.to_params();
        let (coeffs, summary) = compute(&params)?;
        let path = full_path(coeffs, &summary, params.gravity.mps2(), DEFAULT_SAMPLE_COUNT);
        let energy_quiz = apex_energy_question(coeffs, params.mass_kg);
        Ok(Self {
            params,
            coeffs,
            summary,
            path,
            energy_quiz,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaybackPhase {
    Idle,
    Revealing,
    Complete,
}

/// Consumes the core's checkpoint sequence one frame at a time. Owns only
/// pacing; restarting simply rewinds the cursor over the same ticks.
pub(crate) struct Playback {
    pub(crate) ticks: Vec<f64>,
    pub(crate) cursor: usize,
    pub(crate) phase: PlaybackPhase,
    since_last_frame: f32,
}

impl Playback {
    pub(crate) fn for_flight(flight_time_s: f64) -> Self {
        Self {
            ticks: checkpoints(flight_time_s, ANIMATION_FRAMES),
            cursor: 0,
            phase: PlaybackPhase::Idle,
            since_last_frame: 0.0,
        }
    }

    pub(crate) fn start(&mut self) {
        self.cursor = 0;
        self.phase = PlaybackPhase::Revealing;
        self.since_last_frame = 0.0;
    }

    pub(crate) fn current_t(&self) -> f64 {
        self.ticks[self.cursor.min(self.ticks.len() - 1)]
    }

    /// Fraction of the trajectory revealed so far, in [0, 1].
    pub(crate) fn revealed_fraction(&self) -> f32 {
        if self.ticks.len() < 2 {
            return 1.0;
        }
        self.cursor as f32 / (self.ticks.len() - 1) as f32
    }

    /// Advances the cursor on the wall clock. Returns true on the frame the
    /// reveal finishes.
    pub(crate) fn advance(&mut self, frame_dt: f32) -> bool {
        if self.phase != PlaybackPhase::Revealing {
            return false;
        }

        self.since_last_frame += frame_dt;
        while self.since_last_frame >= FRAME_PERIOD_S && self.phase == PlaybackPhase::Revealing {
            self.since_last_frame -= FRAME_PERIOD_S;
            if self.cursor + 1 >= self.ticks.len() {
                self.phase = PlaybackPhase::Complete;
                return true;
            }
            self.cursor += 1;
        }
        false
    }
}

/// Per-question UI state; the reference answers live in the core's QuizItem.
pub(crate) struct QuizPanel {
    pub(crate) energy_guess: f32,
    pub(crate) energy_result: Option<bool>,
    pub(crate) fact_result: Option<bool>,
}

impl QuizPanel {
    pub(crate) fn new() -> Self {
        Self {
            energy_guess: 0.0,
            energy_result: None,
            fact_result: None,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.energy_result = None;
        self.fact_result = None;
    }
}

pub(crate) struct AppRuntime {
    pub(crate) input: LabInput,
    pub(crate) run: RunData,
    pub(crate) session: SessionState,
    pub(crate) playback: Playback,
    pub(crate) quiz: QuizPanel,
    pub(crate) show_previous: bool,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let input = LabInput {
            speed_mps: 50.0,
            angle_deg: 45.0,
            planet_idx: 0,
            mass_kg: 1.0,
        };
        let run = RunData::resolve(input).expect("default input is inside the valid domain");
        let playback = Playback::for_flight(run.summary.flight_time_s);
        Self {
            input,
            run,
            session: SessionState::new(),
            playback,
            quiz: QuizPanel::new(),
            show_previous: true,
            status_line: "Adjust the sliders, then launch".to_string(),
        }
    }

    /// One full recomputation pass after a parameter change. The previous
    /// completed run stays in the session slot for the overlay.
    pub(crate) fn apply_input(&mut self, input: LabInput) {
        match RunData::resolve(input) {
            Ok(run) => {
                self.input = input;
                self.playback = Playback::for_flight(run.summary.flight_time_s);
                self.run = run;
                self.quiz.reset();
                self.status_line = "Parameters updated".to_string();
            }
            Err(err) => {
                // Unreachable through the clamped sliders; surfaced anyway.
                self.status_line = format!("Rejected: {err}");
            }
        }
    }
}
