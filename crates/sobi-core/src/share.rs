//! Share links, inbound referral URLs, and link-preview text.
//!
//! Outbound links carry `ref=<main><sub>&ch=<channel>`. Reading a link back
//! only trusts the main code prefix, via [`parse_ref_code`].

use serde::Serialize;
use url::Url;

use crate::catalog::{Character, character};
use crate::code::{FullCode, MainCode};
use crate::config::SobiConfig;
use crate::error::{SobiError, SobiResult};
use crate::referral::parse_ref_code;

/// Query parameter holding the sharer's full code.
pub const REF_PARAM: &str = "ref";
/// Query parameter holding the share channel tag.
pub const CHANNEL_PARAM: &str = "ch";

/// Build the outbound share URL for a result.
pub fn share_url(config: &SobiConfig, code: FullCode, channel: &str) -> SobiResult<String> {
    let mut url = Url::parse(&config.origin).map_err(|source| SobiError::InvalidOrigin {
        origin: config.origin.clone(),
        source,
    })?;
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair(REF_PARAM, &code.to_string())
        .append_pair(CHANNEL_PARAM, channel);
    Ok(url.into())
}

/// Read the referrer's main code out of an inbound URL.
///
/// Accepts absolute URLs and relative ones such as `/?ref=SNFE`. Malformed
/// URLs, a missing `ref` parameter, or a bad value all yield `None`.
pub fn referrer_from_url(raw: &str) -> Option<MainCode> {
    let url = Url::parse(raw)
        .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(raw)))
        .ok()?;
    let (_, value) = url.query_pairs().find(|(key, _)| key == REF_PARAM)?;
    parse_ref_code(&value)
}

/// One-line text for pasting into a chat, ending in the share URL.
pub fn share_text(character: &Character, url: &str) -> String {
    format!(
        "{} {} (전국 {}%) — {} 👉 {}",
        character.emoji, character.name, character.rarity, character.one_liner, url
    )
}

/// Title and description of a feed-style share card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareCard {
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
}

impl ShareCard {
    /// Card content for a character.
    pub fn for_character(character: &Character) -> Self {
        Self {
            title: format!("{} {}", character.emoji, character.name),
            description: format!("{} — 너는 어떤 소비 캐릭터야?", character.title),
        }
    }
}

/// Text content of a link-preview image. Layout is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgCard {
    /// Large emoji.
    pub emoji: &'static str,
    /// Main line.
    pub heading: &'static str,
    /// Second line.
    pub subheading: &'static str,
    /// Background color (hex).
    pub background: &'static str,
}

/// Link-preview content for a `code` query value.
///
/// A valid main code gets its character's card; anything else gets the
/// generic brand card.
pub fn og_card(code: &str) -> OgCard {
    match MainCode::parse(code) {
        Some(code) => {
            let c = character(code);
            OgCard {
                emoji: c.emoji,
                heading: c.name,
                subheading: c.title,
                background: c.card_bg,
            }
        }
        None => OgCard {
            emoji: "💰",
            heading: "SOBITYPE",
            subheading: "소비 유형 테스트",
            background: "#141418",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::EiAxis;

    fn snfe() -> FullCode {
        FullCode::new(MainCode::Snf, EiAxis::E)
    }

    #[test]
    fn share_url_carries_full_code_and_channel() {
        let cfg = SobiConfig::default().with_origin("https://sobitype.example");
        let url = share_url(&cfg, snfe(), "kakao").unwrap();
        assert_eq!(url, "https://sobitype.example/?ref=SNFE&ch=kakao");
    }

    #[test]
    fn share_url_replaces_existing_query() {
        let cfg = SobiConfig::default().with_origin("https://sobitype.example/?ref=PRLI#top");
        let url = share_url(&cfg, snfe(), "link").unwrap();
        assert_eq!(url, "https://sobitype.example/?ref=SNFE&ch=link");
    }

    #[test]
    fn share_url_encodes_channel() {
        let url = share_url(&SobiConfig::default(), snfe(), "a b&c").unwrap();
        assert_eq!(url, "http://localhost:3000/?ref=SNFE&ch=a+b%26c");
    }

    #[test]
    fn share_url_rejects_relative_origin() {
        let cfg = SobiConfig::default().with_origin("sobitype");
        let err = share_url(&cfg, snfe(), "link").unwrap_err();
        assert!(matches!(err, SobiError::InvalidOrigin { .. }));
        assert!(err.to_string().starts_with("invalid share origin \"sobitype\""));
    }

    #[test]
    fn referrer_round_trips_through_share_url() {
        let cfg = SobiConfig::default();
        for code in MainCode::all() {
            for sub in EiAxis::all() {
                let url = share_url(&cfg, FullCode::new(*code, *sub), "compat").unwrap();
                assert_eq!(referrer_from_url(&url), Some(*code));
            }
        }
    }

    #[test]
    fn referrer_from_relative_url() {
        assert_eq!(referrer_from_url("/?ref=PNLI&ch=kakao"), Some(MainCode::Pnl));
        assert_eq!(referrer_from_url("?ref=SRF"), Some(MainCode::Srf));
    }

    #[test]
    fn referrer_degrades_to_none() {
        assert_eq!(referrer_from_url("https://sobitype.example/"), None);
        assert_eq!(referrer_from_url("https://sobitype.example/?ref=ABC"), None);
        assert_eq!(referrer_from_url("https://sobitype.example/?ch=kakao"), None);
        assert_eq!(referrer_from_url("http://[::1"), None);
    }

    #[test]
    fn share_text_format() {
        let text = share_text(character(MainCode::Pnl), "https://x.example/?ref=PNLE&ch=oneline");
        assert_eq!(
            text,
            "🎰 반전매력 재테커 (전국 4.2%) — 대충 사는 것 같은데 투자 포트폴리오는 완벽 👉 https://x.example/?ref=PNLE&ch=oneline"
        );
    }

    #[test]
    fn share_card_content() {
        let card = ShareCard::for_character(character(MainCode::Prf));
        assert_eq!(card.title, "🦋 자유로운 영혼");
        assert_eq!(card.description, "돈은 쓰라고 있는 거 아닌가요? — 너는 어떤 소비 캐릭터야?");
    }

    #[test]
    fn og_card_for_valid_and_invalid_codes() {
        let card = og_card("SRL");
        assert_eq!(card.heading, "철벽 수호자");
        assert_eq!(card.background, "#006ec3");

        let fallback = og_card("srl");
        assert_eq!(fallback.heading, "SOBITYPE");
        assert_eq!(fallback.emoji, "💰");
        assert_eq!(og_card(""), fallback);
    }
}
