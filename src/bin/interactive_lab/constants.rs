use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const BALL_SPRITE_PATH: &str = "assets/ball.png";

pub const LEFT_MARGIN: f32 = 110.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 130.0;
pub const BOTTOM_MARGIN: f32 = 120.0;

pub const TITLE_Y: f32 = 44.0;
pub const SUBTITLE_Y: f32 = 84.0;

pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

// Slider domains; the core validates the same ranges defensively.
pub const SPEED_MIN_MPS: f32 = 10.0;
pub const SPEED_MAX_MPS: f32 = 150.0;
pub const ANGLE_MIN_DEG: f32 = 0.0;
pub const ANGLE_MAX_DEG: f32 = 90.0;
pub const MASS_MIN_KG: f32 = 0.5;
pub const MASS_MAX_KG: f32 = 5.0;

/// Wall-clock pause between revealed animation frames. Pacing lives here in
/// the presentation layer; the checkpoint sequence itself is pure.
pub const FRAME_PERIOD_S: f32 = 0.06;
pub const ANIMATION_FRAMES: usize = 25;

pub const BALL_MARKER_RADIUS: f32 = 8.0;
pub const BALL_SPRITE_SIZE: f32 = 26.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const CURRENT_PATH_COLOR: Color = Color::new(1.0, 0.29, 0.29, 1.0);
pub const PREVIOUS_PATH_COLOR: Color = Color::new(0.55, 0.58, 0.62, 0.55);
pub const KINETIC_BAR_COLOR: Color = Color::new(0.90, 0.36, 0.13, 1.0);
pub const POTENTIAL_BAR_COLOR: Color = Color::new(0.15, 0.45, 0.85, 1.0);
