//! The question bank and the quiz session state machine.
//!
//! Questions are asked in the fixed order `[SP, EI, NR, FL]`, the same order
//! [`derive_result`] reads answers in. A session moves from an optional
//! referrer preview through the four questions to a result.

use std::fmt;

use serde::Serialize;

use crate::code::MainCode;
use crate::derive::{QuizResult, derive_result};
use crate::error::{SobiError, SobiResult};

/// Which of the two options was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Choice {
    /// The first option.
    A,
    /// The second option.
    B,
}

impl Choice {
    /// Parse `a`/`b` (either case).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "a" | "A" => Some(Self::A),
            "b" | "B" => Some(Self::B),
            _ => None,
        }
    }

    fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// One answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Option text.
    pub text: &'static str,
    /// Option emoji.
    pub emoji: &'static str,
    /// Answer token fed to result derivation.
    pub value: &'static str,
}

/// Share of respondents picking each option, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Ratio {
    /// Option A.
    pub a: u8,
    /// Option B.
    pub b: u8,
}

/// A quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Stable id, `q1`..`q4`.
    pub id: &'static str,
    /// Axis label this question decides.
    pub axis: &'static str,
    /// Prompt text; may contain line breaks.
    pub text: &'static str,
    /// First option.
    pub a: ChoiceOption,
    /// Second option.
    pub b: ChoiceOption,
    /// Population split between the options.
    pub ratio: Ratio,
}

impl Question {
    /// The option for a choice.
    pub fn option(&self, choice: Choice) -> &ChoiceOption {
        match choice {
            Choice::A => &self.a,
            Choice::B => &self.b,
        }
    }

    /// Percentage of respondents who made this choice.
    pub fn ratio_of(&self, choice: Choice) -> u8 {
        match choice {
            Choice::A => self.ratio.a,
            Choice::B => self.ratio.b,
        }
    }

    /// The line flashed after a pick: majority or minority.
    pub fn crowd_hint(&self, choice: Choice) -> String {
        let pct = self.ratio_of(choice);
        if pct >= self.ratio_of(choice.other()) {
            format!("🔥 {pct}%가 같은 선택!")
        } else {
            format!("💎 {pct}%만 이걸 골랐어")
        }
    }
}

/// The four questions, in answer order.
pub static QUESTIONS: [Question; 4] = [
    Question {
        id: "q1",
        axis: "SP",
        text: "로또 1등 당첨!\n어떻게 받을래?",
        a: ChoiceOption { text: "일시불 30억(세후 15억)", emoji: "📊", value: "S" },
        b: ChoiceOption { text: "매달 500만원 평생", emoji: "💸", value: "P" },
        ratio: Ratio { a: 52, b: 48 },
    },
    Question {
        id: "q2",
        axis: "EI",
        text: "친구가 투자해서\n2배 벌었대. 속마음은?",
        a: ChoiceOption { text: "뭐 샀어? 나도 알려줘!", emoji: "📱", value: "E" },
        b: ChoiceOption { text: "ㅊㅋ(나도 하는데 안 말해야지)", emoji: "🤫", value: "I" },
        ratio: Ratio { a: 38, b: 62 },
    },
    Question {
        id: "q3",
        axis: "NR",
        text: "신이 투자 기회를 줬다.\n뭘 고를래?",
        a: ChoiceOption { text: "3년 뒤 확정 2배", emoji: "🎯", value: "R" },
        b: ChoiceOption { text: "50% 확률 10배, 실패하면 0원", emoji: "🎲", value: "N" },
        ratio: Ratio { a: 45, b: 55 },
    },
    Question {
        id: "q4",
        axis: "FL",
        text: "신이 제안한다.\n뭘 고를래?",
        a: ChoiceOption { text: "1년 세계여행, 복귀 후 현재 연봉", emoji: "✈️", value: "F" },
        b: ChoiceOption { text: "1년 지옥 노동, 복귀 후 연봉 2배", emoji: "💰", value: "L" },
        ratio: Ratio { a: 58, b: 42 },
    },
];

/// Where a session is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Landing from a friend's link, before starting.
    RefPreview {
        /// The friend's code.
        referrer: MainCode,
    },
    /// Answering question `index`.
    Question {
        /// Zero-based question index.
        index: usize,
        /// Tokens collected so far, one per answered question.
        answers: Vec<&'static str>,
        /// The friend's code, if any.
        referrer: Option<MainCode>,
    },
    /// All questions answered.
    Result {
        /// The derived result.
        result: QuizResult,
        /// The friend's code, if any.
        referrer: Option<MainCode>,
    },
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Self::RefPreview { .. } => "ref-preview",
            Self::Question { .. } => "question",
            Self::Result { .. } => "result",
        }
    }

    fn first_question(referrer: Option<MainCode>) -> Self {
        Self::Question {
            index: 0,
            answers: Vec::with_capacity(QUESTIONS.len()),
            referrer,
        }
    }
}

/// What happened after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Move on to the question at this index.
    Next(usize),
    /// The quiz is over.
    Done(QuizResult),
}

/// One person's pass through the quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    phase: Phase,
}

impl QuizSession {
    /// Start a session, showing the referrer preview first if there is one.
    pub fn new(referrer: Option<MainCode>) -> Self {
        let phase = match referrer {
            Some(referrer) => Phase::RefPreview { referrer },
            None => Phase::first_question(None),
        };
        Self { phase }
    }

    /// The current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The referrer this session was opened with, if any.
    pub fn referrer(&self) -> Option<MainCode> {
        match &self.phase {
            Phase::RefPreview { referrer } => Some(*referrer),
            Phase::Question { referrer, .. } | Phase::Result { referrer, .. } => *referrer,
        }
    }

    /// The question awaiting an answer.
    pub fn current_question(&self) -> Option<&'static Question> {
        match &self.phase {
            Phase::Question { index, .. } => QUESTIONS.get(*index),
            _ => None,
        }
    }

    /// The result, once every question is answered.
    pub fn result(&self) -> Option<QuizResult> {
        match &self.phase {
            Phase::Result { result, .. } => Some(*result),
            _ => None,
        }
    }

    /// Leave the referrer preview and go to the first question.
    pub fn start(&mut self) -> SobiResult<()> {
        let Phase::RefPreview { referrer } = self.phase else {
            return Err(SobiError::WrongPhase {
                action: "start",
                phase: self.phase.name(),
            });
        };
        self.phase = Phase::first_question(Some(referrer));
        Ok(())
    }

    /// Record an answer to the current question.
    pub fn answer(&mut self, choice: Choice) -> SobiResult<Step> {
        let phase = self.phase.name();
        let Phase::Question {
            index,
            answers,
            referrer,
        } = &mut self.phase
        else {
            return Err(SobiError::WrongPhase {
                action: "answer",
                phase,
            });
        };

        answers.push(QUESTIONS[*index].option(choice).value);

        if *index + 1 < QUESTIONS.len() {
            *index += 1;
            return Ok(Step::Next(*index));
        }

        let referrer = *referrer;
        let result = derive_result(answers.as_slice())?;
        self.phase = Phase::Result { result, referrer };
        Ok(Step::Done(result))
    }

    /// Start over from the first question, dropping the referrer.
    pub fn restart(&mut self) {
        self.phase = Phase::first_question(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::EiAxis;
    use crate::derive::{EI_ANSWER, FL_ANSWER, NR_ANSWER, SP_ANSWER};

    fn run(session: &mut QuizSession, choices: [Choice; 4]) -> QuizResult {
        let mut last = None;
        for choice in choices {
            last = Some(session.answer(choice).unwrap());
        }
        match last {
            Some(Step::Done(result)) => result,
            other => panic!("quiz did not finish: {other:?}"),
        }
    }

    #[test]
    fn questions_follow_answer_order() {
        assert_eq!(QUESTIONS[SP_ANSWER].axis, "SP");
        assert_eq!(QUESTIONS[EI_ANSWER].axis, "EI");
        assert_eq!(QUESTIONS[NR_ANSWER].axis, "NR");
        assert_eq!(QUESTIONS[FL_ANSWER].axis, "FL");
    }

    #[test]
    fn options_cover_both_letters_of_each_axis() {
        for q in &QUESTIONS {
            let mut letters = [q.a.value, q.b.value];
            letters.sort_unstable();
            let mut axis: Vec<String> = q.axis.chars().map(String::from).collect();
            axis.sort_unstable();
            assert_eq!(letters.to_vec(), axis, "{}", q.id);
        }
    }

    #[test]
    fn ratios_sum_to_one_hundred() {
        for q in &QUESTIONS {
            assert_eq!(u32::from(q.ratio.a) + u32::from(q.ratio.b), 100, "{}", q.id);
        }
    }

    #[test]
    fn crowd_hint_majority_and_minority() {
        assert_eq!(QUESTIONS[0].crowd_hint(Choice::A), "🔥 52%가 같은 선택!");
        assert_eq!(QUESTIONS[0].crowd_hint(Choice::B), "💎 48%만 이걸 골랐어");
        assert_eq!(QUESTIONS[1].crowd_hint(Choice::B), "🔥 62%가 같은 선택!");
    }

    #[test]
    fn crowd_hint_tie_counts_as_majority() {
        let mut q = QUESTIONS[0].clone();
        q.ratio = Ratio { a: 50, b: 50 };
        assert!(q.crowd_hint(Choice::A).starts_with("🔥"));
        assert!(q.crowd_hint(Choice::B).starts_with("🔥"));
    }

    #[test]
    fn choice_parse() {
        assert_eq!(Choice::parse("a"), Some(Choice::A));
        assert_eq!(Choice::parse(" B\n"), Some(Choice::B));
        assert_eq!(Choice::parse("c"), None);
    }

    #[test]
    fn session_without_referrer_starts_at_first_question() {
        let session = QuizSession::new(None);
        assert_eq!(session.current_question().map(|q| q.id), Some("q1"));
        assert_eq!(session.referrer(), None);
    }

    #[test]
    fn full_run_derives_result() {
        let mut session = QuizSession::new(None);
        // S, E, N (option B on q3), F
        let result = run(&mut session, [Choice::A, Choice::A, Choice::B, Choice::A]);
        assert_eq!(result.main_code, MainCode::Snf);
        assert_eq!(result.sub_code, EiAxis::E);
        assert_eq!(session.result(), Some(result));
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn every_path_reaches_a_valid_result() {
        let choices = [Choice::A, Choice::B];
        for a in choices {
            for b in choices {
                for c in choices {
                    for d in choices {
                        let mut session = QuizSession::new(None);
                        run(&mut session, [a, b, c, d]);
                    }
                }
            }
        }
    }

    #[test]
    fn answer_steps_through_questions() {
        let mut session = QuizSession::new(None);
        assert_eq!(session.answer(Choice::B).unwrap(), Step::Next(1));
        assert_eq!(session.answer(Choice::B).unwrap(), Step::Next(2));
        assert_eq!(session.current_question().map(|q| q.id), Some("q3"));
        assert_eq!(session.answer(Choice::A).unwrap(), Step::Next(3));
        let Step::Done(result) = session.answer(Choice::B).unwrap() else {
            panic!("expected result");
        };
        assert_eq!(result.full_code().to_string(), "PRLI");
    }

    #[test]
    fn referrer_preview_then_start() {
        let mut session = QuizSession::new(Some(MainCode::Pnf));
        assert_eq!(
            session.phase(),
            &Phase::RefPreview {
                referrer: MainCode::Pnf
            }
        );
        assert!(session.answer(Choice::A).is_err());

        session.start().unwrap();
        assert_eq!(session.referrer(), Some(MainCode::Pnf));
        run(&mut session, [Choice::B, Choice::A, Choice::A, Choice::B]);
        assert_eq!(session.referrer(), Some(MainCode::Pnf));
    }

    #[test]
    fn start_outside_preview_is_wrong_phase() {
        let mut session = QuizSession::new(None);
        let err = session.start().unwrap_err();
        assert_eq!(err.to_string(), "cannot start during the question phase");
    }

    #[test]
    fn answer_after_result_is_wrong_phase() {
        let mut session = QuizSession::new(None);
        run(&mut session, [Choice::A; 4]);
        let err = session.answer(Choice::A).unwrap_err();
        assert!(matches!(
            err,
            SobiError::WrongPhase {
                action: "answer",
                phase: "result"
            }
        ));
    }

    #[test]
    fn restart_drops_referrer() {
        let mut session = QuizSession::new(Some(MainCode::Srl));
        session.start().unwrap();
        session.answer(Choice::A).unwrap();
        session.restart();
        assert_eq!(session.referrer(), None);
        assert_eq!(session.current_question().map(|q| q.id), Some("q1"));
    }
}
