use application::interview_service::InterviewService;
use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use domain::models::{ExperienceLevel, InterviewConfig, InterviewType};
use domain::session::{Stage, SubmitOutcome};
use infrastructure::canned_evaluator::CannedEvaluator;
use infrastructure::config::Config;
use infrastructure::resume_loader::ResumeLoader;
use shared::confirmation::ask_confirmation;
use shared::telemetry::Telemetry;
use shared::types::Result;
use shared::utils::is_common_resume_format;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coach")]
#[command(about = "Personalized mock interviews based on your resume", long_about = None)]
pub struct Cli {
    /// Resume file to use (skips the path prompt for the first session)
    pub resume: Option<PathBuf>,

    /// Preselect the interview type: mixed, technical, behavioral or hr
    #[arg(long = "type", value_name = "TYPE")]
    pub interview_type: Option<String>,

    /// Preselect the experience level: entry, mid or senior
    #[arg(long = "level", value_name = "LEVEL")]
    pub experience_level: Option<String>,
}

pub struct CoachApp {
    service: InterviewService<CannedEvaluator>,
    loader: ResumeLoader,
    timer: Option<Telemetry>,
}

impl Default for CoachApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachApp {
    pub fn new() -> Self {
        let config = Config::load();
        Self {
            service: InterviewService::new(CannedEvaluator::new()),
            loader: ResumeLoader::new(config.upload_delay_ms),
            timer: None,
        }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        // Bad flag values should fail before any prompt appears.
        let mut preset_type = cli
            .interview_type
            .as_deref()
            .map(str::parse::<InterviewType>)
            .transpose()?;
        let mut preset_level = cli
            .experience_level
            .as_deref()
            .map(str::parse::<ExperienceLevel>)
            .transpose()?;
        let mut preset_resume = cli.resume;

        println!("{}", "AI Interview Coach".bold());
        println!("Personalized mock interviews based on your resume\n");

        loop {
            match self.service.session().stage() {
                Stage::Upload => self.stage_upload(preset_resume.take()).await?,
                Stage::Config => self.stage_config(preset_type.take(), preset_level.take())?,
                Stage::Interview => self.stage_interview()?,
                Stage::Complete => {
                    if !self.stage_complete()? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    async fn stage_upload(&mut self, preset: Option<PathBuf>) -> Result<()> {
        let path = match preset {
            Some(path) => path,
            None => {
                let raw: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Resume file")
                    .validate_with(|input: &String| -> std::result::Result<(), &str> {
                        if input.trim().is_empty() {
                            Err("a resume file is required")
                        } else {
                            Ok(())
                        }
                    })
                    .interact_text()?;
                PathBuf::from(raw.trim())
            }
        };

        if !is_common_resume_format(&path) {
            println!(
                "{}",
                "Note: PDF, DOC, or DOCX files are the usual formats; using it anyway.".yellow()
            );
        }

        eprintln!("Analyzing resume...");
        self.service.upload(&path, &self.loader).await?;

        println!("{}", "Resume uploaded successfully!".green().bold());
        println!("Your resume has been analyzed and parsed.\n");
        Ok(())
    }

    fn stage_config(
        &mut self,
        preset_type: Option<InterviewType>,
        preset_level: Option<ExperienceLevel>,
    ) -> Result<()> {
        self.print_resume_summary();

        let current = self.service.session().config();
        let initial_type = preset_type.unwrap_or(current.interview_type);
        let initial_level = preset_level.unwrap_or(current.experience_level);

        let type_labels: Vec<&str> = InterviewType::ALL.iter().map(|t| t.label()).collect();
        let type_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Interview Type")
            .items(&type_labels)
            .default(
                InterviewType::ALL
                    .iter()
                    .position(|t| *t == initial_type)
                    .unwrap_or(0),
            )
            .interact()?;

        let level_labels: Vec<&str> = ExperienceLevel::ALL.iter().map(|l| l.label()).collect();
        let level_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Experience Level")
            .items(&level_labels)
            .default(
                ExperienceLevel::ALL
                    .iter()
                    .position(|l| *l == initial_level)
                    .unwrap_or(0),
            )
            .interact()?;

        self.service.configure(InterviewConfig {
            interview_type: InterviewType::ALL[type_index],
            experience_level: ExperienceLevel::ALL[level_index],
        })?;

        if !ask_confirmation("Start the interview?", true)? {
            // Stay in the config stage; the selectors come back around.
            return Ok(());
        }

        match self.service.start() {
            Ok(()) => {
                self.timer = Some(Telemetry::new());
                println!();
            }
            Err(err) => {
                println!("{} {}", "Cannot start:".red().bold(), err.to_string().red());
            }
        }
        Ok(())
    }

    fn stage_interview(&mut self) -> Result<()> {
        let session = self.service.session();
        let total = session.questions().len();
        let number = session.current_index() + 1;
        let question = session
            .current_question()
            .expect("interview stage always has a current question");

        println!(
            "{} {}",
            format!("Question {} of {}", number, total).cyan().bold(),
            format!("[{}]", question.category).blue()
        );
        println!("Progress: {:.0}%", session.progress_percent());
        println!("\n{}\n", question.text);

        if !session.feedback().is_empty() {
            println!("{}", "Previous Feedback".bold());
            for (i, fb) in session.feedback().iter().enumerate() {
                println!("  {} {}", format!("Q{}:", i + 1).green(), fb);
            }
            println!();
        }

        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Your answer")
            .allow_empty(true)
            .interact_text()?;

        match self.service.submit(&answer)? {
            // Empty input: nothing happened, the question comes back around.
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Advanced => {
                println!("{}", "Answer submitted!".green().bold());
                println!("Moving to the next question.\n");
            }
            SubmitOutcome::Completed => {
                println!("{}", "Answer submitted!".green().bold());
                println!();
            }
        }
        Ok(())
    }

    /// Returns false once the user declines another round.
    fn stage_complete(&mut self) -> Result<bool> {
        let session = self.service.session();
        let config = session.config();

        println!("{}", "Interview Complete!".green().bold());
        println!(
            "{} — {}",
            config.interview_type.label(),
            config.experience_level.label()
        );
        if let Some(timer) = &self.timer {
            println!("Duration: {}", timer.elapsed_label());
        }

        let score = session
            .score()
            .expect("complete stage always has a frozen score");
        println!("\n  {}", format!("{}%", score).green().bold());
        println!("  Overall Performance Score\n");

        println!("{}", "Detailed Feedback:".bold());
        for (i, (question, fb)) in session
            .questions()
            .iter()
            .zip(session.feedback())
            .enumerate()
        {
            println!("  {}", format!("Q{}: {}", i + 1, question.category).bold());
            println!("  {}\n", fb);
        }

        if ask_confirmation("Start a new interview?", false)? {
            self.service.reset();
            self.timer = None;
            println!();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn print_resume_summary(&self) {
        let session = self.service.session();
        let profile = match session.profile() {
            Some(profile) => profile,
            None => return,
        };

        println!("{}", "Resume Summary".bold());
        println!("  {}", profile.name.bold());
        println!("  {}\n", profile.education);

        println!("  {}", "Skills:".bold());
        println!("    {}\n", profile.skills.join(", "));

        println!("  {}", "Experience:".bold());
        for entry in &profile.experience {
            println!("    - {}", entry);
        }
        println!();
    }
}
