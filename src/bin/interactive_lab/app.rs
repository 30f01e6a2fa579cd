use macroquad::prelude::*;

use projectile_lab::core::quiz::{QuizAnswer, apex_fact_question, grade};
use projectile_lab::core::trajectory::state_at;
use projectile_lab::core::window::axis_window_f32;

use crate::constants::{
    BACKGROUND, BALL_SPRITE_PATH, BOTTOM_MARGIN, CURRENT_PATH_COLOR, GRID_COLOR,
    INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES, PREVIOUS_PATH_COLOR,
    RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{FrameActions, draw_control_panel, draw_quiz_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{PlotFrame, draw_axis_tick_labels, draw_ball, draw_grid, draw_path};
use crate::state::{AppRuntime, Playback, PlaybackPhase};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Lab".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.launch {
        state.playback.start();
        state.status_line = "Shot launched".to_string();
    }

    if actions.reset {
        state.playback = Playback::for_flight(state.run.summary.flight_time_s);
        state.session.clear();
        state.quiz.reset();
        state.status_line = "Session reset".to_string();
    }

    if actions.submit_energy {
        let answer = QuizAnswer::Numeric(state.quiz.energy_guess as f64);
        state.quiz.energy_result = Some(grade(&state.run.energy_quiz, &answer));
    }

    if let Some(fact) = actions.pick_fact {
        let item = apex_fact_question();
        state.quiz.fact_result = Some(grade(&item, &QuizAnswer::Choice(fact)));
    }
}

fn plot_frame(state: &AppRuntime, screen_w: f32, screen_h: f32) -> PlotFrame {
    let mut raw_max_x = state.run.summary.range_m as f32;
    let mut raw_max_y = state.run.summary.max_height_m as f32;

    // The previous overlay must stay inside the window too.
    if let Some(previous) = state.session.previous() {
        for &(x, y) in previous {
            raw_max_x = raw_max_x.max(x as f32);
            raw_max_y = raw_max_y.max(y as f32);
        }
    }

    let (world_max_x, world_max_y) = axis_window_f32(raw_max_x, raw_max_y);
    PlotFrame {
        left: LEFT_MARGIN,
        right: screen_w - RIGHT_MARGIN,
        top: TOP_MARGIN,
        bottom: screen_h - BOTTOM_MARGIN,
        world_max_x,
        world_max_y,
    }
}

fn revealed_points(state: &AppRuntime) -> usize {
    let len = state.run.path.len();
    match state.playback.phase {
        // Idle shows the full preview, like the static chart in the console
        // front end; the reveal only applies to an active flight.
        PlaybackPhase::Idle | PlaybackPhase::Complete => len,
        PlaybackPhase::Revealing => {
            let fraction = state.playback.revealed_fraction();
            ((fraction * (len.saturating_sub(1)) as f32).round() as usize + 1).min(len)
        }
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            println!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    // Resolved once, before the loop; the physics never sees it.
    let ball_sprite = match load_texture(BALL_SPRITE_PATH).await {
        Ok(texture) => Some(texture),
        Err(err) => {
            println!("Could not load '{BALL_SPRITE_PATH}': {err}. Using a plain marker.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let (input, panel_actions) = draw_control_panel(&mut state);
        let quiz_actions = draw_quiz_panel(&mut state);
        let actions = hotkey_actions().merge(panel_actions).merge(quiz_actions);

        if input != state.input {
            state.apply_input(input);
        }
        apply_actions(&mut state, actions);

        if state.playback.advance(frame_dt) {
            state.session.retain_previous(state.run.path.clone());
            state.status_line = "Flight complete. Previous shot kept for comparison".to_string();
        }

        let frame = plot_frame(&state, screen_w, screen_h);
        let instant = match state_at(
            state.run.coeffs,
            &state.run.summary,
            state.run.params.gravity.mps2(),
            state.run.params.mass_kg,
            state.playback.current_t(),
        ) {
            Ok(instant) => instant,
            Err(err) => {
                state.status_line = format!("Internal error: {err}");
                next_frame().await;
                continue;
            }
        };

        clear_background(BACKGROUND);
        draw_grid(&frame, GRID_COLOR);
        draw_line(frame.left, frame.bottom, frame.right, frame.bottom, 2.0, DARKGRAY);
        draw_line(frame.left, frame.top, frame.left, frame.bottom, 2.0, DARKGRAY);
        draw_axis_tick_labels(&frame, ui_font.as_ref());

        if state.show_previous {
            if let Some(previous) = state.session.previous() {
                draw_path(&frame, previous, previous.len(), 3.0, PREVIOUS_PATH_COLOR);
            }
        }

        draw_path(
            &frame,
            &state.run.path,
            revealed_points(&state),
            3.0,
            CURRENT_PATH_COLOR,
        );
        draw_ball(&frame, instant.x_m, instant.y_m, ball_sprite.as_ref());
        draw_hud(&state, &frame, &instant, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
