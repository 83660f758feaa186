use anyhow::bail;
use domain::evaluation::Evaluator;
use domain::models::InterviewConfig;
use domain::session::{Session, SubmitOutcome};
use infrastructure::resume_loader::ResumeLoader;
use shared::types::Result;
use std::path::Path;

/// Orchestrates one interview session over the domain state machine.
///
/// The presentation layer talks only to this service; it never mutates
/// the session record directly.
pub struct InterviewService<E: Evaluator> {
    session: Session,
    evaluator: E,
}

impl<E: Evaluator> InterviewService<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            session: Session::new(),
            evaluator,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Accept a resume file and wait for the mock analysis to finish.
    /// Only the presence of a file name is checked; content is ignored.
    pub async fn upload(&mut self, path: &Path, loader: &ResumeLoader) -> Result<()> {
        if path.as_os_str().is_empty() {
            bail!("a resume file is required");
        }
        let profile = loader.load(path).await?;
        self.session.attach_profile(profile)
    }

    pub fn configure(&mut self, config: InterviewConfig) -> Result<()> {
        self.session.set_config(config)
    }

    pub fn start(&mut self) -> Result<()> {
        self.session.start()
    }

    pub fn submit(&mut self, answer: &str) -> Result<SubmitOutcome> {
        self.session.submit(answer, &mut self.evaluator)
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}
