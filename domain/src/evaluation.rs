use crate::models::Question;

/// Seam between the state machine and whatever judges answers.
///
/// The shipped implementation returns canned feedback picked at random;
/// a real evaluator can replace it without touching the session flow.
pub trait Evaluator {
    /// Produce one feedback string for a submitted answer.
    fn evaluate(&mut self, answer: &str, question: &Question) -> String;

    /// Overall performance score for the finished interview, in percent.
    fn overall_score(&mut self) -> u8;
}
