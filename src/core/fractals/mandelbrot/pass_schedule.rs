//! Progressive refinement schedule: each pass quadruples the iteration cap.

pub const NUM_PASSES: u32 = 8;

/// Pass the schedule jumps to when the first pass comes out all black.
pub const DEGENERATE_RESUME_PASS: u32 = 4;

#[inline]
#[must_use]
pub fn max_iterations(pass: u32) -> u32 {
    (1 << (2 * pass + 6)) + 32
}

/// An all-black first pass means nothing escaped at the lowest cap, so the
/// intermediate caps would most likely produce the same black image. Such a
/// pass is not published.
#[inline]
#[must_use]
pub fn is_degenerate_pass(pass: u32, all_black: bool) -> bool {
    pass == 0 && all_black
}

/// Pass to run after `pass`, or `None` when the schedule is exhausted.
#[must_use]
pub fn next_pass(pass: u32, all_black: bool) -> Option<u32> {
    let next = if is_degenerate_pass(pass, all_black) {
        DEGENERATE_RESUME_PASS
    } else {
        pass + 1
    };

    (next < NUM_PASSES).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_iterations_per_pass() {
        let caps: Vec<u32> = (0..NUM_PASSES).map(max_iterations).collect();

        assert_eq!(
            caps,
            vec![96, 288, 1056, 4128, 16416, 65568, 262176, 1048608]
        );
    }

    #[test]
    fn test_all_black_first_pass_skips_to_pass_four() {
        assert_eq!(next_pass(0, true), Some(4));
    }

    #[test]
    fn test_all_black_later_pass_does_not_skip() {
        assert!(!is_degenerate_pass(1, true));
        assert_eq!(next_pass(1, true), Some(2));
        assert_eq!(next_pass(4, true), Some(5));
    }

    #[test]
    fn test_schedule_ends_after_last_pass() {
        assert_eq!(next_pass(6, false), Some(7));
        assert_eq!(next_pass(7, false), None);
    }
}
