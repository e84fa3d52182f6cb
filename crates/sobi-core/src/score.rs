//! Total score: the rounded mean of a character's three stats.

use crate::catalog::CharacterStats;

/// Mean of `plan`, `invest` and `yolo`, rounded half up.
///
/// With integer stats the mean's fractional part is 0, 1/3 or 2/3, so the
/// half-up and half-to-even rules never disagree; half up is what the
/// integer formula below implements.
pub fn total_score(stats: &CharacterStats) -> u8 {
    let sum = u32::from(stats.plan) + u32::from(stats.invest) + u32::from(stats.yolo);
    // floor(sum / 3 + 1/2)
    let rounded = (2 * sum + 3) / 6;
    u8::try_from(rounded).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stats(plan: u8, invest: u8, yolo: u8) -> CharacterStats {
        CharacterStats { plan, invest, yolo }
    }

    #[test]
    fn exact_means() {
        assert_eq!(total_score(&stats(80, 70, 90)), 80);
        assert_eq!(total_score(&stats(100, 100, 100)), 100);
        assert_eq!(total_score(&stats(0, 0, 0)), 0);
        assert_eq!(total_score(&stats(10, 15, 5)), 10);
    }

    #[test]
    fn rounds_thirds() {
        // 33.33 -> 33
        assert_eq!(total_score(&stats(33, 33, 34)), 33);
        // 33.67 -> 34
        assert_eq!(total_score(&stats(33, 34, 34)), 34);
        // 0.33 -> 0, 0.67 -> 1
        assert_eq!(total_score(&stats(1, 0, 0)), 0);
        assert_eq!(total_score(&stats(1, 1, 0)), 1);
    }

    proptest! {
        #[test]
        fn matches_float_rounding(plan in 0u8..=100, invest in 0u8..=100, yolo in 0u8..=100) {
            let mean = (f64::from(plan) + f64::from(invest) + f64::from(yolo)) / 3.0;
            let expected = mean.round() as u8;
            prop_assert_eq!(total_score(&stats(plan, invest, yolo)), expected);
        }

        #[test]
        fn stays_in_range(plan in 0u8..=100, invest in 0u8..=100, yolo in 0u8..=100) {
            let s = stats(plan, invest, yolo);
            let score = total_score(&s);
            prop_assert!(score <= 100);
            prop_assert_eq!(score, total_score(&s));
        }
    }
}
