//! Result derivation and compatibility engine for the Sobitype spending
//! character test.
//!
//! Four binary answers map to one of eight character archetypes
//! ([`MainCode`]) plus an `E`/`I` sub-variant ([`EiAxis`]). The crate holds
//! the static character catalog and compatibility table, the pure functions
//! over them, and the supplementary pieces a front end needs: the question
//! bank and quiz session, the result receipt, and share-link helpers.
//!
//! Everything here is synchronous and side-effect free. The catalog and
//! compatibility table are immutable statics, safe to read from any number
//! of threads.

/// Character catalog and sub-variant tags.
pub mod catalog;
/// Character codes, axes, and string validators.
pub mod code;
/// Pairwise compatibility comments.
pub mod compat;
/// Share-link configuration.
pub mod config;
/// Mapping quiz answers to a result.
pub mod derive;
/// Error types.
pub mod error;
/// Question bank and quiz session.
pub mod quiz;
/// Result receipt model.
pub mod receipt;
/// Referral code parsing.
pub mod referral;
/// Total score aggregation.
pub mod score;
/// Share links and link-preview content.
pub mod share;

/// Re-export catalog types.
pub use catalog::{Character, CharacterStats, MatchPointers, character, characters, sub_tag};
/// Re-export code types and validators.
pub use code::{EiAxis, FullCode, MainCode, is_ei_axis, is_main_code};
/// Re-export compatibility lookup.
pub use compat::compat_comment;
/// Re-export configuration.
pub use config::SobiConfig;
/// Re-export result derivation.
pub use derive::{QuizResult, derive_result};
/// Re-export error types.
pub use error::{InvalidResultError, SobiError, SobiResult};
/// Re-export the quiz session.
pub use quiz::{Choice, QUESTIONS, QuizSession};
/// Re-export the receipt model.
pub use receipt::{Receipt, RefPreview};
/// Re-export referral parsing.
pub use referral::parse_ref_code;
/// Re-export score aggregation.
pub use score::total_score;
