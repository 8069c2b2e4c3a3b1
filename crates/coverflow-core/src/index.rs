//! Circular index arithmetic over a wrap-around sequence.

/// Shortest signed offset from `active` to `index` on a circle of `len`
/// slots, normalized into `(-len/2, len/2]`.
///
/// The raw delta is adjusted by `len` at most once, so the result is the
/// nearest representation of the same slot relative to the active one.
pub fn circular_delta(index: usize, active: usize, len: usize) -> i64 {
    debug_assert!(len > 0, "circular_delta on an empty sequence");
    debug_assert!(index < len && active < len);

    let len = len as i64;
    let mut delta = index as i64 - active as i64;
    if 2 * delta > len {
        delta -= len;
    } else if 2 * delta <= -len {
        delta += len;
    }
    delta
}

/// Next index with wraparound.
pub fn step_forward(index: usize, len: usize) -> usize {
    debug_assert!(len > 0);
    (index + 1) % len
}

/// Previous index with wraparound.
pub fn step_back(index: usize, len: usize) -> usize {
    debug_assert!(len > 0);
    (index + len - 1) % len
}

/// Clamps a requested start index into `[0, len)`.
///
/// Logs when the caller asked for a slot past the end; the nearest valid
/// index is used instead of failing the open call.
pub fn clamp_index(index: usize, len: usize) -> usize {
    debug_assert!(len > 0);
    if index >= len {
        log::warn!("start index {index} out of range for {len} items, clamping");
        len - 1
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_zero_for_active_slot() {
        assert_eq!(circular_delta(2, 2, 5), 0);
    }

    #[test]
    fn delta_wraps_to_shortest_path() {
        // 5 slots: slot 4 is one step behind slot 0
        assert_eq!(circular_delta(4, 0, 5), -1);
        assert_eq!(circular_delta(0, 4, 5), 1);
        assert_eq!(circular_delta(3, 0, 5), -2);
    }

    #[test]
    fn delta_half_is_positive_for_even_len() {
        // For len 6 the antipode is reported as +3, not -3
        assert_eq!(circular_delta(3, 0, 6), 3);
        assert_eq!(circular_delta(0, 3, 6), 3);
    }

    #[test]
    fn delta_stays_in_window() {
        for len in 1..12usize {
            for active in 0..len {
                for index in 0..len {
                    let d = circular_delta(index, active, len);
                    let len = len as i64;
                    assert!(2 * d > -len && 2 * d <= len, "delta {d} out of window");
                }
            }
        }
    }

    #[test]
    fn stepping_forward_n_times_round_trips() {
        for len in 1..8usize {
            let mut index = 0;
            for _ in 0..len {
                index = step_forward(index, len);
            }
            assert_eq!(index, 0);
        }
    }

    #[test]
    fn step_back_inverts_step_forward() {
        for len in 1..8usize {
            for start in 0..len {
                assert_eq!(step_back(step_forward(start, len), len), start);
            }
        }
    }

    #[test]
    fn clamp_keeps_valid_and_pins_overflow() {
        assert_eq!(clamp_index(2, 5), 2);
        assert_eq!(clamp_index(5, 5), 4);
        assert_eq!(clamp_index(100, 5), 4);
    }
}
