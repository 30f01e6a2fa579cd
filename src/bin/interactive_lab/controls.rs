use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use projectile_lab::core::quiz::{ApexFact, QuizItem};

use crate::constants::{
    ANGLE_MAX_DEG, ANGLE_MIN_DEG, MASS_MAX_KG, MASS_MIN_KG, SPEED_MAX_MPS, SPEED_MIN_MPS,
};
use crate::state::{AppRuntime, LabInput, PLANETS, PlaybackPhase};

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) reset: bool,
    pub(crate) submit_energy: bool,
    pub(crate) pick_fact: Option<ApexFact>,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            reset: self.reset || other.reset,
            submit_energy: self.submit_energy || other.submit_energy,
            pick_fact: self.pick_fact.or(other.pick_fact),
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
        ..Default::default()
    }
}

/// Draws the parameter panel and returns the edited input plus any button
/// actions. The caller decides whether the edit requires a recomputation.
pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> (LabInput, FrameActions) {
    let mut input = state.input;
    let mut actions = FrameActions::default();

    widgets::Window::new(hash!(), vec2(18.0, 140.0), vec2(340.0, 280.0))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Speed (m/s)",
                SPEED_MIN_MPS..SPEED_MAX_MPS,
                &mut input.speed_mps,
            );
            ui.slider(
                hash!(),
                "Angle (deg)",
                ANGLE_MIN_DEG..ANGLE_MAX_DEG,
                &mut input.angle_deg,
            );
            ui.slider(
                hash!(),
                "Mass (kg)",
                MASS_MIN_KG..MASS_MAX_KG,
                &mut input.mass_kg,
            );
            ui.separator();
            for (idx, planet) in PLANETS.iter().enumerate() {
                let marker = if idx == input.planet_idx { ">" } else { " " };
                let label = format!("{marker} {} (g = {:.2})", planet.label(), planet.mps2());
                if ui.button(None, label.as_str()) {
                    input.planet_idx = idx;
                }
            }
            ui.separator();
            if ui.button(None, "Launch (Space)") {
                actions.launch = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Toggle Previous Shot") {
                state.show_previous = !state.show_previous;
            }
        });

    // Sliders clamp, but keyboard focus quirks can leave a value on the rim.
    input.speed_mps = input.speed_mps.clamp(SPEED_MIN_MPS, SPEED_MAX_MPS);
    input.angle_deg = input.angle_deg.clamp(ANGLE_MIN_DEG, ANGLE_MAX_DEG);
    input.mass_kg = input.mass_kg.clamp(MASS_MIN_KG, MASS_MAX_KG);

    (input, actions)
}

/// Quiz panel: one numeric question parameterized from the current run and
/// one multiple-choice question. Grading happens in the core.
pub(crate) fn draw_quiz_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    let energy_prompt = state.run.energy_quiz.prompt().to_string();
    let reference_hint = match &state.run.energy_quiz {
        QuizItem::Numeric { reference, .. } => *reference,
        QuizItem::Choice { .. } => 0.0,
    };

    widgets::Window::new(hash!(), vec2(18.0, 440.0), vec2(340.0, 330.0))
        .label("Self-Check Quiz")
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, &energy_prompt);
            // Guess range scales with the run so the answer stays reachable.
            let guess_max = (reference_hint * 2.0).max(100.0) as f32;
            ui.slider(
                hash!(),
                "Guess (J)",
                0.0..guess_max,
                &mut state.quiz.energy_guess,
            );
            if ui.button(None, "Submit Guess") {
                actions.submit_energy = true;
            }
            match state.quiz.energy_result {
                Some(true) => ui.label(None, "Correct! Vx persists at the apex."),
                Some(false) => ui.label(None, "Not quite. Try KE = 0.5*m*Vx^2."),
                None => ui.label(None, ""),
            }
            ui.separator();
            ui.label(None, "Which is true at the highest point?");
            for fact in ApexFact::CHOICES {
                if ui.button(None, fact.label()) {
                    actions.pick_fact = Some(fact);
                }
            }
            match state.quiz.fact_result {
                Some(true) => ui.label(None, "Correct!"),
                Some(false) => ui.label(None, "Not quite. Only vertical velocity vanishes."),
                None => ui.label(None, ""),
            }
        });

    actions
}

pub(crate) fn phase_text(phase: PlaybackPhase) -> &'static str {
    match phase {
        PlaybackPhase::Idle => "Ready",
        PlaybackPhase::Revealing => "In flight",
        PlaybackPhase::Complete => "Landed",
    }
}
