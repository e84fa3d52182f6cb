//! The character catalog: one immutable profile per [`MainCode`].
//!
//! The table is a `static` array in catalog order, so lookups are an index
//! and there is nothing to initialise or mutate.

use serde::Serialize;

use crate::code::{EiAxis, MainCode};
use crate::score::total_score;

/// Trait intensities shown as stat bars, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterStats {
    /// Planning.
    pub plan: u8,
    /// Investing appetite.
    pub invest: u8,
    /// Spend-it-now.
    pub yolo: u8,
}

/// Best and worst partner archetypes. Never the character's own code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchPointers {
    /// Most compatible.
    pub best: MainCode,
    /// Least compatible.
    pub worst: MainCode,
}

/// A static character profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// The archetype this profile belongs to.
    pub code: MainCode,
    /// Display emoji.
    pub emoji: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short title line.
    pub title: &'static str,
    /// Longer description paragraph.
    pub description: &'static str,
    /// Primary color (hex).
    pub color: &'static str,
    /// Card background color (hex).
    pub card_bg: &'static str,
    /// Share of the population with this type, in percent.
    pub rarity: f32,
    /// Rarity tier label.
    pub badge: &'static str,
    /// Rarity tier color (hex).
    pub badge_color: &'static str,
    /// Behavioral stats.
    pub stats: CharacterStats,
    /// One-line summary.
    pub one_liner: &'static str,
    /// Compatibility pointers.
    #[serde(rename = "match")]
    pub matches: MatchPointers,
}

impl Character {
    /// The 0-100 total score of this character's stats.
    pub fn total_score(&self) -> u8 {
        total_score(&self.stats)
    }
}

/// Look up the profile for a code. Total over the enumeration.
pub fn character(code: MainCode) -> &'static Character {
    &CHARACTERS[code.index()]
}

/// Every profile in catalog order.
pub fn characters() -> impl Iterator<Item = &'static Character> {
    CHARACTERS.iter()
}

/// Hashtag label for a sub-variant.
pub fn sub_tag(sub: EiAxis) -> &'static str {
    match sub {
        EiAxis::E => "돈얘기좋아하는",
        EiAxis::I => "조용히부자되는",
    }
}

/// Lines shown while a result is being "printed".
pub const LOADING_TEXTS: [&str; 3] = [
    "소비 내역 조회 중...",
    "유형 매칭 중...",
    "명세서 발급 중... 🧾",
];

static CHARACTERS: [Character; 8] = [
    Character {
        code: MainCode::Snf,
        emoji: "✨",
        name: "플렉스 전략가",
        title: "계획적으로 화려하게 쓴다",
        description: "예산 앱 깔아놓고 명품 사는 타입. 무계획하게 쓰는 게 아니라, 계획적으로 큰 걸 지른다. 주변에선 부자인 줄 알지만, 엑셀에는 빨간 셀이 좀 있다.",
        color: "#a362ff",
        card_bg: "#4401a5",
        rarity: 8.3,
        badge: "💎 RARE",
        badge_color: "#c6a2ff",
        stats: CharacterStats { plan: 80, invest: 70, yolo: 90 },
        one_liner: "엑셀로 예산 짜놓고 명품 지르는 타입",
        matches: MatchPointers { best: MainCode::Srl, worst: MainCode::Prf },
    },
    Character {
        code: MainCode::Snl,
        emoji: "🏗️",
        name: "자산 설계자",
        title: "시스템으로 돈을 불린다",
        description: "자동이체 세팅해놓고 복리를 믿는 타입. 30대에 벌써 노후 계획이 있다. 친구들은 재미없다고 하지만, 10년 뒤에 웃는 건 너야.",
        color: "#49b0ff",
        card_bg: "#01599c",
        rarity: 5.1,
        badge: "💎 RARE",
        badge_color: "#49b0ff",
        stats: CharacterStats { plan: 95, invest: 85, yolo: 20 },
        one_liner: "자동이체 세팅하고 복리를 기다리는 타입",
        matches: MatchPointers { best: MainCode::Prf, worst: MainCode::Pnf },
    },
    Character {
        code: MainCode::Srf,
        emoji: "🎯",
        name: "똑똑한 향유자",
        title: "아끼면서도 인생을 즐긴다",
        description: "쿠폰 써서 호텔 가고, 마일리지로 비행기 타는 타입. 적게 쓰면서 많이 누리는 기술의 달인. \"가성비 끝판왕\"이라는 칭호가 어울린다.",
        color: "#5ed0a4",
        card_bg: "#27614b",
        rarity: 14.7,
        badge: "⭐ COMMON",
        badge_color: "#b0f7cd",
        stats: CharacterStats { plan: 75, invest: 30, yolo: 65 },
        one_liner: "쿠폰으로 호캉스 가는 가성비 끝판왕",
        matches: MatchPointers { best: MainCode::Prl, worst: MainCode::Snf },
    },
    Character {
        code: MainCode::Srl,
        emoji: "🛡️",
        name: "철벽 수호자",
        title: "한 푼도 새어나가지 않는다",
        description: "가계부 앱 3개 동시 사용. 구독 서비스 하나 해지할 때도 손익 계산한다. 주변에선 짠돌이라 하지만, 너만큼 마음이 편한 사람도 없다.",
        color: "#90d5ff",
        card_bg: "#006ec3",
        rarity: 11.2,
        badge: "⭐ COMMON",
        badge_color: "#90d5ff",
        stats: CharacterStats { plan: 100, invest: 40, yolo: 5 },
        one_liner: "구독 해지할 때도 손익 계산하는 타입",
        matches: MatchPointers { best: MainCode::Snf, worst: MainCode::Pnf },
    },
    Character {
        code: MainCode::Pnf,
        emoji: "🔥",
        name: "본능적 투자자",
        title: "감으로 사고 감으로 판다",
        description: "주식 알림 켜놓고 출근하고, 코인 차트 보면서 잠든다. 수익도 크지만 손실도 큰 롤러코스터 인생. \"인생은 한 방\"이 좌우명.",
        color: "#ff7472",
        card_bg: "#8f0000",
        rarity: 18.5,
        badge: "⭐ COMMON",
        badge_color: "#ffd4d4",
        stats: CharacterStats { plan: 15, invest: 95, yolo: 85 },
        one_liner: "코인 차트 보면서 잠드는 타입",
        matches: MatchPointers { best: MainCode::Srl, worst: MainCode::Prl },
    },
    Character {
        code: MainCode::Pnl,
        emoji: "🎰",
        name: "반전매력 재테커",
        title: "즉흥인 줄 알았지? 투자는 진지",
        description: "평소엔 대충 사는 것 같은데, 투자 얘기 나오면 눈이 반짝. 겉으론 자유로워 보이지만 통장은 의외로 체계적이다.",
        color: "#ff9b4f",
        card_bg: "#9f4501",
        rarity: 4.2,
        badge: "👑 EPIC",
        badge_color: "#ff9b4f",
        stats: CharacterStats { plan: 30, invest: 80, yolo: 40 },
        one_liner: "대충 사는 것 같은데 투자 포트폴리오는 완벽",
        matches: MatchPointers { best: MainCode::Srf, worst: MainCode::Srl },
    },
    Character {
        code: MainCode::Prf,
        emoji: "🦋",
        name: "자유로운 영혼",
        title: "돈은 쓰라고 있는 거 아닌가요?",
        description: "통장 잔고? 안 본다. 카드값? 다음 달의 나에게 맡긴다. \"지금 이 순간\"을 사는 철학자. 걱정은 내일의 내가 하겠지.",
        color: "#ff7fca",
        card_bg: "#ad0065",
        rarity: 24.8,
        badge: "⭐ COMMON",
        badge_color: "#ffb7e1",
        stats: CharacterStats { plan: 10, invest: 15, yolo: 100 },
        one_liner: "카드값은 다음 달의 내가 처리해줄 거야",
        matches: MatchPointers { best: MainCode::Snl, worst: MainCode::Pnf },
    },
    Character {
        code: MainCode::Prl,
        emoji: "🐢",
        name: "느긋한 저축러",
        title: "급할 거 없다. 천천히 모으는 중",
        description: "적금 하나 들어놓고 잊고 사는 타입. 투자는 무섭고, 큰 소비도 안 한다. \"안전이 제일\"이라는 마인드인데, 물가는 기다려주지 않는다는 게 함정.",
        color: "#7be5d9",
        card_bg: "#2f716f",
        rarity: 13.2,
        badge: "⭐ COMMON",
        badge_color: "#a5f1e7",
        stats: CharacterStats { plan: 25, invest: 10, yolo: 15 },
        one_liner: "적금 하나 넣어놓고 존재를 잊는 타입",
        matches: MatchPointers { best: MainCode::Pnf, worst: MainCode::Prf },
    },
];
