//! The result "receipt": everything a renderer needs for one result.
//!
//! [`Receipt`] gathers the character, sub-variant tag, stat rows, total score
//! and either a compatibility section (when a friend's code is known) or the
//! best/worst match hint. Its `Display` impl is a plain-text receipt for
//! terminals; image rendering happens elsewhere.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::{Character, character, sub_tag};
use crate::code::{EiAxis, FullCode, MainCode};
use crate::compat::compat_comment;

const RULE: &str = "--------------------------------";
const DOUBLE_RULE: &str = "================================";
const BAR_CELLS: u8 = 10;

/// Receipt date format, e.g. `2026.10.18`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y.%m.%d").to_string()
}

/// A labelled stat bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRow {
    /// Row label.
    pub label: &'static str,
    /// Value in `0..=100`.
    pub value: u8,
}

impl StatRow {
    /// Text bar of ten cells.
    pub fn bar(&self) -> String {
        let filled = (self.value.min(100) + BAR_CELLS / 2) / BAR_CELLS;
        let mut bar = "█".repeat(usize::from(filled));
        bar.push_str(&"░".repeat(usize::from(BAR_CELLS - filled)));
        bar
    }
}

/// The section pairing this result with another type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PairSection {
    /// A friend's code is known: show how the two get along.
    Compat {
        /// The friend's character.
        partner: &'static Character,
        /// Compatibility comment for the pair.
        comment: &'static str,
    },
    /// No friend yet: show who to look for and who to avoid.
    MatchHint {
        /// Most compatible type.
        best: &'static Character,
        /// Least compatible type.
        worst: &'static Character,
    },
}

/// A rendered-ready result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Receipt number.
    pub code: FullCode,
    /// The result's character.
    pub character: &'static Character,
    /// Sub-variant hashtag.
    pub sub_tag: &'static str,
    /// Issue date, `YYYY.MM.DD`.
    pub date: String,
    /// Stat rows in display order.
    pub stats: [StatRow; 3],
    /// Rounded mean of the stats.
    pub total_score: u8,
    /// Compatibility or match-hint section.
    pub pair: PairSection,
}

impl Receipt {
    /// Assemble a receipt. With a referrer the pair section is the
    /// compatibility comment for `(main, referrer)`.
    pub fn new(main: MainCode, sub: EiAxis, referrer: Option<MainCode>, date: NaiveDate) -> Self {
        let ch = character(main);
        let pair = match referrer {
            Some(other) => PairSection::Compat {
                partner: character(other),
                comment: compat_comment(main, other),
            },
            None => PairSection::MatchHint {
                best: character(ch.matches.best),
                worst: character(ch.matches.worst),
            },
        };

        Self {
            code: FullCode::new(main, sub),
            character: ch,
            sub_tag: sub_tag(sub),
            date: format_date(date),
            stats: [
                StatRow {
                    label: "계획력",
                    value: ch.stats.plan,
                },
                StatRow {
                    label: "투자성향",
                    value: ch.stats.invest,
                },
                StatRow {
                    label: "YOLO",
                    value: ch.stats.yolo,
                },
            ],
            total_score: ch.total_score(),
            pair,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.character;

        writeln!(f, "SOBITYPE 소비연구소")?;
        writeln!(f, "{DOUBLE_RULE}")?;
        writeln!(f, "소비 성향 명세서")?;
        writeln!(f, "날짜 {}  No. #{}", self.date, self.code)?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "{} {}", c.emoji, c.name)?;
        writeln!(f, "\"{}\"", c.title)?;
        writeln!(f, "#{}", self.sub_tag)?;
        writeln!(f, "{RULE}")?;

        match &self.pair {
            PairSection::Compat { partner, comment } => {
                writeln!(f, "■ 소비 궁합 결과")?;
                writeln!(f, "나 {} {}", c.emoji, c.name)?;
                writeln!(f, "친구 {} {}", partner.emoji, partner.name)?;
                writeln!(f, "\"{comment}\"")?;
            }
            PairSection::MatchHint { .. } => {
                writeln!(f, "■ 소비 궁합")?;
                writeln!(f, "도전장을 보내고 궁합을 확인해보세요")?;
            }
        }
        writeln!(f, "{RULE}")?;

        writeln!(f, "■ 소비 성향 분석")?;
        for row in &self.stats {
            writeln!(f, "{} {} {}", row.bar(), row.value, row.label)?;
        }
        writeln!(f, "{RULE}")?;

        writeln!(f, "■ 상세 진단")?;
        writeln!(f, "{}", c.one_liner)?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "■ 희귀도")?;
        writeln!(f, "100명 중 {}명", c.rarity)?;
        writeln!(f, "등급 [{}]", c.badge)?;

        if let PairSection::MatchHint { best, worst } = &self.pair {
            writeln!(f, "{RULE}")?;
            writeln!(f, "■ 궁합 힌트")?;
            writeln!(f, "찰떡 {} {}", best.emoji, best.name)?;
            writeln!(f, "상극 {} {}", worst.emoji, worst.name)?;
        }

        writeln!(f, "{DOUBLE_RULE}")?;
        write!(f, "합계 — 총 소비력 {}", self.total_score)
    }
}

/// What a visitor sees when landing on a friend's link.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefPreview {
    /// The friend's character.
    pub character: &'static Character,
    /// The friend's total score.
    pub total_score: u8,
}

impl RefPreview {
    /// Preview for a referrer's code.
    pub fn new(referrer: MainCode) -> Self {
        let character = character(referrer);
        Self {
            character,
            total_score: character.total_score(),
        }
    }

    /// The challenge line under the preview.
    pub fn challenge(&self) -> String {
        format!("친구 소비력 {}점이래. 이길 수 있어?", self.total_score)
    }
}
