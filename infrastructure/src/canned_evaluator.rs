use domain::evaluation::Evaluator;
use domain::models::Question;
use rand::Rng;

/// The five canned feedback lines. Selection ignores the answer.
const FEEDBACK_POOL: [&str; 5] = [
    "Great answer! You provided specific examples and showed good technical knowledge.",
    "Good response. Consider adding more concrete examples to strengthen your answer.",
    "Well articulated. Your experience really shows through in this response.",
    "Nice answer. You could elaborate more on the impact of your actions.",
    "Excellent! You demonstrated both technical skills and soft skills effectively.",
];

pub const SCORE_MIN: u8 = 80;
pub const SCORE_MAX: u8 = 94;

/// Placeholder evaluator: uniform random feedback and a uniform random
/// overall score. Stands behind the [`Evaluator`] seam so a real
/// answer-aware implementation can replace it.
#[derive(Default)]
pub struct CannedEvaluator;

impl CannedEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for CannedEvaluator {
    fn evaluate(&mut self, _answer: &str, _question: &Question) -> String {
        let index = rand::thread_rng().gen_range(0..FEEDBACK_POOL.len());
        FEEDBACK_POOL[index].to_string()
    }

    fn overall_score(&mut self) -> u8 {
        rand::thread_rng().gen_range(SCORE_MIN..=SCORE_MAX)
    }
}
