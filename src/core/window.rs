/// Width:height ratio of the plotted data window. Trajectories are wide and
/// shallow, so the x axis gets twice the span of the y axis.
pub const RANGE_TO_HEIGHT_RATIO: f64 = 2.0;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Pads the raw data extents and widens one axis so the window keeps its
/// fixed ratio. Both spans are floored at 1 m so a degenerate run (angle 0)
/// still produces a drawable window.
pub fn axis_window(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let x_pad = raw_max_x.max(1.0) * X_PADDING_RATIO;
    let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span < y_span * RANGE_TO_HEIGHT_RATIO {
        x_span = y_span * RANGE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / RANGE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

pub fn axis_window_f32(raw_max_x: f32, raw_max_y: f32) -> (f32, f32) {
    let (x_span, y_span) = axis_window(raw_max_x as f64, raw_max_y as f64);
    (x_span as f32, y_span as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_keeps_its_fixed_ratio() {
        for (x, y) in [(254.9, 63.8), (10.0, 200.0), (500.0, 5.0)] {
            let (x_span, y_span) = axis_window(x, y);
            assert!((x_span / y_span - RANGE_TO_HEIGHT_RATIO).abs() < 1e-9);
            assert!(x_span >= x);
            assert!(y_span >= y);
        }
    }

    #[test]
    fn degenerate_extents_stay_drawable() {
        let (x_span, y_span) = axis_window(0.0, 0.0);
        assert!(x_span >= 1.0);
        assert!(y_span >= 1.0);
    }
}
