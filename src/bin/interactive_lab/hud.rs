use macroquad::prelude::*;

use projectile_lab::core::energy::total_mechanical_energy;
use projectile_lab::core::trajectory::InstantState;

use crate::constants::{KINETIC_BAR_COLOR, POTENTIAL_BAR_COLOR, SUBTITLE_Y, TITLE_Y};
use crate::controls::phase_text;
use crate::render::{PlotFrame, draw_ui_text};
use crate::state::AppRuntime;

pub(crate) fn draw_hud(
    state: &AppRuntime,
    frame: &PlotFrame,
    instant: &InstantState,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_header_block(state, frame, font);
    draw_range_label(state, frame, font);
    draw_energy_bars(state, instant, frame, font);
    draw_status_block(state, instant, screen_h, font);
}

fn draw_header_block(state: &AppRuntime, frame: &PlotFrame, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "Projectile Lab - Play With Physics",
        frame.left,
        TITLE_Y,
        30,
        header_color,
        font,
    );

    let params = &state.run.params;
    let summary = &state.run.summary;
    draw_ui_text(
        &format!(
            "{} (g = {:.2} m/s^2) | V0 = {:.0} m/s @ {:.0} deg, m = {:.1} kg | \
             flight {:.2} s | range {:.1} m | max height {:.1} m",
            params.gravity.label(),
            params.gravity.mps2(),
            params.speed_mps,
            params.angle_deg,
            params.mass_kg,
            summary.flight_time_s,
            summary.range_m,
            summary.max_height_m,
        ),
        frame.left,
        SUBTITLE_Y,
        20,
        Color::from_rgba(70, 76, 85, 255),
        font,
    );
}

fn draw_range_label(state: &AppRuntime, frame: &PlotFrame, font: Option<&Font>) {
    let range_m = state.run.summary.range_m;
    let label = format!("{range_m:.1} m");
    let size = measure_text(&label, font, 18, 1.0);
    let landing = frame.world_to_screen(range_m, 0.0);
    let x = (landing.x - size.width * 0.5).clamp(frame.left + 4.0, frame.right - size.width - 4.0);
    let y = (frame.bottom - 12.0).max(frame.top + 20.0);
    draw_ui_text(&label, x, y, 18, DARKGRAY, font);
}

/// Live kinetic/potential split for the checkpoint under the marker. The two
/// bars always sum to the same width while energy is conserved.
fn draw_energy_bars(
    state: &AppRuntime,
    instant: &InstantState,
    frame: &PlotFrame,
    font: Option<&Font>,
) {
    let total = total_mechanical_energy(&state.run.params).max(1e-9);
    let bar_w = 260.0;
    let bar_h = 16.0;
    let x = frame.right - bar_w - 10.0;
    let mut y = frame.top + 14.0;

    let rows = [
        ("KE", instant.energy.kinetic_j, KINETIC_BAR_COLOR),
        ("PE", instant.energy.potential_j, POTENTIAL_BAR_COLOR),
    ];
    for (name, value, color) in rows {
        let fill = ((value / total) as f32).clamp(0.0, 1.0) * bar_w;
        draw_rectangle(x, y, bar_w, bar_h, Color::from_rgba(228, 231, 236, 255));
        draw_rectangle(x, y, fill, bar_h, color);
        draw_rectangle_lines(x, y, bar_w, bar_h, 1.5, DARKGRAY);
        draw_ui_text(
            &format!("{name} {value:.0} J"),
            x - 110.0,
            y + bar_h - 3.0,
            16,
            DARKGRAY,
            font,
        );
        y += bar_h + 10.0;
    }
    draw_ui_text(
        &format!("Total {total:.0} J (conserved)"),
        x - 110.0,
        y + 10.0,
        16,
        Color::from_rgba(105, 113, 124, 255),
        font,
    );
}

fn draw_status_block(
    state: &AppRuntime,
    instant: &InstantState,
    screen_h: f32,
    font: Option<&Font>,
) {
    let y = screen_h - 64.0;
    draw_ui_text(
        &format!(
            "{} | t = {:.2} s | x = {:.1} m, y = {:.1} m | vy = {:+.1} m/s",
            phase_text(state.playback.phase),
            instant.t_s,
            instant.x_m,
            instant.y_m,
            instant.vy_mps,
        ),
        18.0,
        y,
        20,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
    draw_ui_text(
        &state.status_line,
        18.0,
        y + 28.0,
        18,
        Color::from_rgba(105, 113, 124, 255),
        font,
    );
}
