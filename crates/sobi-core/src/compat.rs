//! Pairwise compatibility comments.
//!
//! The table is sparse and keyed by the two codes sorted and joined with
//! `-`, so argument order never matters.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::code::MainCode;

/// Returned for a self-pair with no explicit entry.
pub const SAME_TYPE_COMMENT: &str = "완벽한 이해자. 근데 약점도 같아서 위험할 수도";

/// Returned for a distinct pair with no explicit entry.
pub const DIFFERENT_TYPE_COMMENT: &str = "서로 다른 매력. 대화가 끊이지 않을 조합";

/// Explicit comments, keyed by canonical pair key.
pub const COMPAT_COMMENTS: &[(&str, &str)] = &[
    ("SNF-SRL", "한 명이 지르면 한 명이 막는다. 환상의 밸런스 💕"),
    ("PRF-SNL", "설계자가 자유로운 영혼을 만나면? 의외로 찰떡 💕"),
    ("PNF-SNL", "시스템 vs 감각. 투자 토론 3시간 각오해 🔥"),
    ("PNF-SRL", "모험가와 철벽. 서로 미치겠지만 배울 게 많아 📚"),
    ("PNF-PRL", "모험가와 안전주의자. 서로 배울 게 많음 📚"),
    ("PRF-PRF", "둘 다 자유로운 영혼? 통장도 자유롭게 비겠다 😂"),
    ("SRL-SRL", "철벽 × 철벽. 부자 될 건데 인생이 좀 심심할 수도 🧊"),
    ("PRF-SNF", "둘 다 쓰는 거 좋아하면... 통장이 울고 있다 💸"),
    ("PRL-SRF", "둘 다 현명한 소비. 함께 가성비 맛집 투어 가자 🍜"),
    ("PNL-SRF", "반전 재테커와 향유자. 의외로 통하는 조합 ✨"),
];

static TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COMPAT_COMMENTS.iter().copied().collect());

/// Canonical key for an unordered pair: sorted, joined with `-`.
pub fn compat_key(a: MainCode, b: MainCode) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{lo}-{hi}")
}

/// The explicit table entry for a pair, if there is one.
pub fn explicit_comment(a: MainCode, b: MainCode) -> Option<&'static str> {
    TABLE.get(compat_key(a, b).as_str()).copied()
}

/// Comment describing how two types get along. Symmetric and total.
pub fn compat_comment(a: MainCode, b: MainCode) -> &'static str {
    match explicit_comment(a, b) {
        Some(comment) => comment,
        None if a == b => SAME_TYPE_COMMENT,
        None => DIFFERENT_TYPE_COMMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_code() -> impl Strategy<Value = MainCode> {
        proptest::sample::select(MainCode::all())
    }

    #[test]
    fn table_keys_are_canonical() {
        for (key, _) in COMPAT_COMMENTS {
            let (a, b) = key.split_once('-').unwrap();
            let a = MainCode::parse(a).unwrap();
            let b = MainCode::parse(b).unwrap();
            assert_eq!(compat_key(a, b), *key);
            assert_eq!(compat_key(b, a), *key);
        }
    }

    #[test]
    fn known_pair() {
        assert_eq!(
            compat_comment(MainCode::Snf, MainCode::Srl),
            "한 명이 지르면 한 명이 막는다. 환상의 밸런스 💕"
        );
        assert_eq!(compat_key(MainCode::Srl, MainCode::Snf), "SNF-SRL");
    }

    #[test]
    fn explicit_self_pair_wins_over_fallback() {
        let comment = compat_comment(MainCode::Prf, MainCode::Prf);
        assert!(comment.contains("통장도 자유롭게"));
        assert_ne!(comment, SAME_TYPE_COMMENT);
    }

    #[test]
    fn self_pair_fallback() {
        let comment = compat_comment(MainCode::Snf, MainCode::Snf);
        assert!(comment.contains("약점도 같아서"));
    }

    #[test]
    fn distinct_pair_fallback() {
        let comment = compat_comment(MainCode::Snf, MainCode::Pnl);
        assert!(comment.contains("서로 다른 매력"));
        assert_eq!(explicit_comment(MainCode::Snf, MainCode::Pnl), None);
    }

    #[test]
    fn every_defined_pair_is_a_table_hit() {
        let pairs = [
            (MainCode::Snf, MainCode::Srl),
            (MainCode::Prf, MainCode::Snl),
            (MainCode::Pnf, MainCode::Snl),
            (MainCode::Pnf, MainCode::Srl),
            (MainCode::Pnf, MainCode::Prl),
            (MainCode::Prf, MainCode::Prf),
            (MainCode::Srl, MainCode::Srl),
            (MainCode::Prf, MainCode::Snf),
            (MainCode::Prl, MainCode::Srf),
            (MainCode::Pnl, MainCode::Srf),
        ];
        for (a, b) in pairs {
            assert!(explicit_comment(a, b).is_some(), "{a}-{b}");
            assert_ne!(compat_comment(a, b), DIFFERENT_TYPE_COMMENT);
        }
    }

    #[test]
    fn symmetric_over_all_pairs() {
        for a in MainCode::all() {
            for b in MainCode::all() {
                assert_eq!(compat_comment(*a, *b), compat_comment(*b, *a), "{a}/{b}");
            }
        }
    }

    proptest! {
        #[test]
        fn key_is_order_independent(a in any_code(), b in any_code()) {
            prop_assert_eq!(compat_key(a, b), compat_key(b, a));
            prop_assert_eq!(compat_comment(a, b), compat_comment(a, b));
        }
    }
}
