use application::interview_service::InterviewService;
use domain::models::{ExperienceLevel, InterviewConfig, InterviewType, QuestionKind};
use domain::session::{Stage, SubmitOutcome};
use infrastructure::canned_evaluator::{CannedEvaluator, SCORE_MAX, SCORE_MIN};
use infrastructure::resume_loader::ResumeLoader;
use std::path::Path;

async fn uploaded_service() -> InterviewService<CannedEvaluator> {
    let mut svc = InterviewService::new(CannedEvaluator::new());
    let loader = ResumeLoader::new(0);
    svc.upload(Path::new("resume.pdf"), &loader).await.unwrap();
    svc
}

#[tokio::test]
async fn mixed_flow_walks_all_four_stages() {
    let mut svc = uploaded_service().await;
    assert_eq!(svc.session().stage(), Stage::Config);

    svc.start().unwrap();
    assert_eq!(svc.session().stage(), Stage::Interview);
    assert_eq!(svc.session().questions().len(), 7);

    for n in 0..7 {
        assert_eq!(svc.session().answers().len(), svc.session().current_index());
        assert_eq!(svc.session().feedback().len(), svc.session().current_index());
        svc.submit(&format!("answer number {}", n)).unwrap();
    }

    assert_eq!(svc.session().stage(), Stage::Complete);
    assert_eq!(svc.session().answers().len(), svc.session().questions().len());
    assert_eq!(svc.session().feedback().len(), svc.session().questions().len());
}

#[tokio::test]
async fn every_submit_appends_one_answer_and_one_feedback() {
    let mut svc = uploaded_service().await;
    svc.start().unwrap();

    let outcome = svc.submit("  a real answer  ").unwrap();
    assert_eq!(outcome, SubmitOutcome::Advanced);
    assert_eq!(svc.session().answers().len(), 1);
    assert_eq!(svc.session().feedback().len(), 1);
    assert!(!svc.session().feedback()[0].is_empty());
}

#[tokio::test]
async fn whitespace_answers_change_nothing() {
    let mut svc = uploaded_service().await;
    svc.start().unwrap();

    for blank in ["", "   ", "\t\n"] {
        assert_eq!(svc.submit(blank).unwrap(), SubmitOutcome::Ignored);
    }
    assert_eq!(svc.session().current_index(), 0);
    assert!(svc.session().answers().is_empty());
    assert!(svc.session().feedback().is_empty());
    assert_eq!(svc.session().stage(), Stage::Interview);
}

#[tokio::test]
async fn technical_interview_contains_only_technical_questions() {
    let mut svc = uploaded_service().await;
    svc.configure(InterviewConfig {
        interview_type: InterviewType::Technical,
        experience_level: ExperienceLevel::Senior,
    })
    .unwrap();
    svc.start().unwrap();

    let questions = svc.session().questions();
    assert!(questions.len() <= 5);
    assert!(!questions.is_empty());
    assert!(questions.iter().all(|q| q.kind == QuestionKind::Technical));
}

#[tokio::test]
async fn hr_interview_has_one_question_and_completes_in_one_submit() {
    let mut svc = uploaded_service().await;
    svc.configure(InterviewConfig {
        interview_type: InterviewType::Hr,
        experience_level: ExperienceLevel::Mid,
    })
    .unwrap();
    svc.start().unwrap();

    assert_eq!(svc.session().questions().len(), 1);
    assert_eq!(svc.session().questions()[0].id, 6);

    let outcome = svc.submit("It lines up with where I want to grow.").unwrap();
    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_eq!(svc.session().stage(), Stage::Complete);
}

#[tokio::test]
async fn score_is_in_range_and_stable_across_reads() {
    let mut svc = uploaded_service().await;
    svc.configure(InterviewConfig {
        interview_type: InterviewType::Hr,
        experience_level: ExperienceLevel::Mid,
    })
    .unwrap();
    svc.start().unwrap();
    svc.submit("Motivation.").unwrap();

    let first = svc.session().score().unwrap();
    assert!((SCORE_MIN..=SCORE_MAX).contains(&first));
    for _ in 0..10 {
        assert_eq!(svc.session().score().unwrap(), first);
    }
}

#[tokio::test]
async fn experience_level_never_affects_question_selection() {
    for level in ExperienceLevel::ALL {
        let mut svc = uploaded_service().await;
        svc.configure(InterviewConfig {
            interview_type: InterviewType::Behavioral,
            experience_level: level,
        })
        .unwrap();
        svc.start().unwrap();
        let ids: Vec<u32> = svc.session().questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 3, 5]);
    }
}

#[tokio::test]
async fn reset_allows_a_fresh_session() {
    let mut svc = uploaded_service().await;
    svc.start().unwrap();
    svc.submit("first answer").unwrap();
    svc.reset();

    assert_eq!(svc.session().stage(), Stage::Upload);
    assert!(svc.session().profile().is_none());
    assert!(svc.session().score().is_none());
    assert_eq!(svc.session().config().interview_type, InterviewType::Mixed);

    // The flow can be walked again from the top.
    let loader = ResumeLoader::new(0);
    svc.upload(Path::new("another.docx"), &loader).await.unwrap();
    assert_eq!(svc.session().stage(), Stage::Config);
}
