use macroquad::prelude::*;

use crate::constants::{
    BALL_MARKER_RADIUS, BALL_SPRITE_SIZE, X_GRID_LINES, Y_GRID_LINES,
};

#[derive(Clone, Copy)]
pub(crate) struct PlotFrame {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) world_max_x: f32,
    pub(crate) world_max_y: f32,
}

impl PlotFrame {
    pub(crate) fn world_to_screen(&self, x_m: f64, y_m: f64) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let x = self.left + (x_m as f32 / self.world_max_x.max(1.0)) * plot_w;
        let y = self.bottom - (y_m as f32 / self.world_max_y.max(1.0)) * plot_h;
        vec2(x, y)
    }
}

fn format_axis_value(value: f32, axis_max: f32) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(frame: &PlotFrame, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = frame.left + t * (frame.right - frame.left);
        draw_line(x, frame.top, x, frame.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = frame.bottom - t * (frame.bottom - frame.top);
        draw_line(frame.left, y, frame.right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(frame: &PlotFrame, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = frame.left + t * (frame.right - frame.left);
        let label = format_axis_value(t * frame.world_max_x, frame.world_max_x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            frame.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = frame.bottom - t * (frame.bottom - frame.top);
        let label = format_axis_value(t * frame.world_max_y, frame.world_max_y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (frame.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Distance (m)",
        frame.right - 130.0,
        frame.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "Height (m)",
        frame.left + 10.0,
        frame.top - 8.0,
        18,
        label_color,
        font,
    );
}

/// Draws the leading `point_count` points of a world-space path.
pub(crate) fn draw_path(
    frame: &PlotFrame,
    path: &[(f64, f64)],
    point_count: usize,
    thickness: f32,
    color: Color,
) {
    let shown = &path[..point_count.min(path.len())];
    for pair in shown.windows(2) {
        let a = frame.world_to_screen(pair[0].0, pair[0].1);
        let b = frame.world_to_screen(pair[1].0, pair[1].1);
        draw_line(a.x, a.y, b.x, b.y, thickness, color);
    }
}

/// The moving body: the resolved sprite when one was loaded, a plain marker
/// otherwise. Physics never depends on which.
pub(crate) fn draw_ball(frame: &PlotFrame, x_m: f64, y_m: f64, sprite: Option<&Texture2D>) {
    let p = frame.world_to_screen(x_m, y_m);
    match sprite {
        Some(texture) => {
            draw_texture_ex(
                texture,
                p.x - BALL_SPRITE_SIZE * 0.5,
                p.y - BALL_SPRITE_SIZE * 0.5,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(BALL_SPRITE_SIZE, BALL_SPRITE_SIZE)),
                    ..Default::default()
                },
            );
        }
        None => {
            draw_circle(p.x, p.y, BALL_MARKER_RADIUS, RED);
            draw_circle_lines(p.x, p.y, BALL_MARKER_RADIUS, 2.0, MAROON);
        }
    }
}
