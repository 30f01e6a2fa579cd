use crate::core::trajectory::TrajectoryPath;

pub const DEFAULT_FRAME_COUNT: usize = 25;

/// Elapsed-time checkpoints for a progressive trajectory reveal: strictly
/// increasing from 0 to the flight time inclusive, `frame_count` entries,
/// deterministic for identical inputs. The presentation loop owns the actual
/// pacing; nothing here sleeps or touches a display.
pub fn checkpoints(flight_time_s: f64, frame_count: usize) -> Vec<f64> {
    if flight_time_s <= 0.0 {
        return vec![0.0];
    }

    let frames = frame_count.max(2);
    (0..frames)
        .map(|i| flight_time_s * (i as f64) / ((frames - 1) as f64))
        .collect()
}

/// Caller-owned per-session state. The single previous-path slot is replaced
/// wholesale by each completed run; `None` means the session has never
/// completed a run, which renders differently from a zero-length path.
#[derive(Default)]
pub struct SessionState {
    previous_path: Option<TrajectoryPath>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn retain_previous(&mut self, path: TrajectoryPath) {
        self.previous_path = Some(path);
    }

    pub fn previous(&self) -> Option<&TrajectoryPath> {
        self.previous_path.as_ref()
    }

    pub fn clear(&mut self) {
        self.previous_path = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn evenly_spaced_from_launch_to_landing() {
        let ticks = checkpoints(8.0, DEFAULT_FRAME_COUNT);

        assert_eq!(ticks.len(), 25);
        assert_close(ticks[0], 0.0, 1e-12);
        assert_close(ticks[24], 8.0, 1e-12);

        let step = 8.0 / 24.0;
        for pair in ticks.windows(2) {
            assert!(pair[1] > pair[0], "checkpoints must strictly increase");
            assert_close(pair[1] - pair[0], step, 1e-9);
        }
    }

    #[test]
    fn restartable_with_identical_output() {
        assert_eq!(checkpoints(7.21, 25), checkpoints(7.21, 25));
    }

    #[test]
    fn degenerate_flight_yields_the_launch_instant() {
        assert_eq!(checkpoints(0.0, 25), vec![0.0]);
    }

    #[test]
    fn frame_count_is_floored_at_two() {
        let ticks = checkpoints(4.0, 0);
        assert_eq!(ticks.len(), 2);
        assert_close(ticks[0], 0.0, 1e-12);
        assert_close(ticks[1], 4.0, 1e-12);
    }

    #[test]
    fn previous_slot_distinguishes_never_run_from_empty() {
        let mut session = SessionState::new();
        assert!(session.previous().is_none());

        session.retain_previous(vec![(0.0, 0.0)]);
        assert_eq!(session.previous(), Some(&vec![(0.0, 0.0)]));

        // Last writer wins, no history stack.
        session.retain_previous(vec![(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(session.previous().map(Vec::len), Some(2));

        session.retain_previous(Vec::new());
        assert_eq!(session.previous(), Some(&Vec::new()));

        session.clear();
        assert!(session.previous().is_none());
    }
}
