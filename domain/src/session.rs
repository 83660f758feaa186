use crate::evaluation::Evaluator;
use crate::models::{InterviewConfig, Profile, Question};
use crate::question_bank;
use anyhow::bail;
use serde::{Deserialize, Serialize};
use shared::types::Result;
use std::fmt;

/// The four stages of the interview flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Upload,
    Config,
    Interview,
    Complete,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Upload => write!(f, "upload"),
            Stage::Config => write!(f, "config"),
            Stage::Interview => write!(f, "interview"),
            Stage::Complete => write!(f, "complete"),
        }
    }
}

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The trimmed answer was empty; nothing changed.
    Ignored,
    /// Answer recorded, moved on to the next question.
    Advanced,
    /// Answer recorded, that was the last question.
    Completed,
}

/// Complete mutable state for one walk through
/// upload -> config -> interview -> complete.
///
/// All mutation goes through the transition methods below; each one is
/// legal in exactly one stage and updates the record atomically. While
/// the interview runs, `answers.len() == feedback.len() == current_index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    stage: Stage,
    profile: Option<Profile>,
    config: InterviewConfig,
    questions: Vec<Question>,
    answers: Vec<String>,
    feedback: Vec<String>,
    current_index: usize,
    score: Option<u8>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            stage: Stage::Upload,
            profile: None,
            config: InterviewConfig::default(),
            questions: Vec::new(),
            answers: Vec::new(),
            feedback: Vec::new(),
            current_index: 0,
            score: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn config(&self) -> InterviewConfig {
        self.config
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Score frozen at the transition into the complete stage.
    pub fn score(&self) -> Option<u8> {
        self.score
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Progress through the interview as a percentage of questions seen.
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    /// Upload -> Config. The profile comes from the resume loader; the
    /// file itself was never read.
    pub fn attach_profile(&mut self, profile: Profile) -> Result<()> {
        if self.stage != Stage::Upload {
            bail!("cannot attach a profile in the {} stage", self.stage);
        }
        self.profile = Some(profile);
        self.stage = Stage::Config;
        Ok(())
    }

    /// Adjust interview parameters. Only legal before the interview starts.
    pub fn set_config(&mut self, config: InterviewConfig) -> Result<()> {
        if self.stage != Stage::Config {
            bail!("cannot change configuration in the {} stage", self.stage);
        }
        self.config = config;
        Ok(())
    }

    /// Config -> Interview. Builds the question list from the bank using
    /// the configured interview type.
    pub fn start(&mut self) -> Result<()> {
        if self.stage != Stage::Config {
            bail!("cannot start an interview in the {} stage", self.stage);
        }
        let profile = self
            .profile
            .as_ref()
            .expect("config stage always has a profile");
        let questions = question_bank::select_questions(profile, self.config.interview_type);
        self.begin_interview(questions)
    }

    /// Enter the interview stage with an explicit question list. Rejects
    /// an empty list so the interview can never show zero questions or
    /// divide by zero when rendering progress.
    pub fn begin_interview(&mut self, questions: Vec<Question>) -> Result<()> {
        if self.stage != Stage::Config {
            bail!("cannot start an interview in the {} stage", self.stage);
        }
        if questions.is_empty() {
            bail!(
                "no questions in the bank match the '{}' interview type",
                self.config.interview_type.label()
            );
        }
        self.questions = questions;
        self.answers.clear();
        self.feedback.clear();
        self.current_index = 0;
        self.stage = Stage::Interview;
        Ok(())
    }

    /// Record an answer for the current question.
    ///
    /// A whitespace-only answer is silently ignored, leaving the whole
    /// record untouched. Otherwise the answer and its feedback are
    /// appended and the session either advances or, after the last
    /// question, moves to the complete stage with the score frozen.
    pub fn submit(&mut self, answer: &str, evaluator: &mut dyn Evaluator) -> Result<SubmitOutcome> {
        if self.stage != Stage::Interview {
            bail!("cannot submit an answer in the {} stage", self.stage);
        }
        if answer.trim().is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        let question = &self.questions[self.current_index];
        let feedback = evaluator.evaluate(answer, question);
        self.answers.push(answer.to_string());
        self.feedback.push(feedback);

        debug_assert_eq!(self.answers.len(), self.feedback.len());

        if self.current_index + 1 == self.questions.len() {
            self.score = Some(evaluator.overall_score());
            self.stage = Stage::Complete;
            Ok(SubmitOutcome::Completed)
        } else {
            self.current_index += 1;
            Ok(SubmitOutcome::Advanced)
        }
    }

    /// Return to the upload stage, clearing every field back to its
    /// initial value.
    pub fn reset(&mut self) {
        *self = Session::new();
    }
}
