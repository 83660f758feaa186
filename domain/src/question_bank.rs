use crate::models::{InterviewType, Profile, Question, QuestionKind};

/// Number of questions a mixed interview takes from the bank.
pub const MIXED_TAKE: usize = 7;

/// Cap on questions when filtering the bank by a single kind.
pub const FILTERED_TAKE: usize = 5;

/// The fixed bank of 7 scripted questions, templated from the profile.
pub fn build_bank(profile: &Profile) -> Vec<Question> {
    let top_skills = profile
        .skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        Question {
            id: 1,
            text: format!(
                "I see you have experience with {}. Can you walk me through a \
                 challenging project where you used these technologies?",
                top_skills
            ),
            kind: QuestionKind::Technical,
            category: "Experience".to_string(),
        },
        Question {
            id: 2,
            text: "Tell me about yourself and what motivated you to pursue a career in technology."
                .to_string(),
            kind: QuestionKind::Behavioral,
            category: "Introduction".to_string(),
        },
        Question {
            id: 3,
            text: format!(
                "You've been working as a {}. What do you consider your greatest \
                 professional achievement?",
                profile.latest_role()
            ),
            kind: QuestionKind::Behavioral,
            category: "Achievement".to_string(),
        },
        Question {
            id: 4,
            text: format!(
                "How do you stay updated with new technologies, especially in {} and {}?",
                profile.skill(0),
                profile.skill(1)
            ),
            kind: QuestionKind::Technical,
            category: "Learning".to_string(),
        },
        Question {
            id: 5,
            text: "Describe a time when you had to work with a difficult team member. \
                   How did you handle it?"
                .to_string(),
            kind: QuestionKind::Behavioral,
            category: "Teamwork".to_string(),
        },
        Question {
            id: 6,
            text: "What interests you most about this role, and how does it align with \
                   your career goals?"
                .to_string(),
            kind: QuestionKind::Hr,
            category: "Motivation".to_string(),
        },
        Question {
            id: 7,
            text: format!(
                "Can you explain the difference between {} and {}? When would you \
                 choose one over the other?",
                profile.skill(0),
                profile.skill(1)
            ),
            kind: QuestionKind::Technical,
            category: "Technical Knowledge".to_string(),
        },
    ]
}

/// Derive a session's question list from the bank.
///
/// Mixed takes the first [`MIXED_TAKE`] questions verbatim; any other type
/// filters the bank by kind and takes up to [`FILTERED_TAKE`]. The caller
/// is responsible for rejecting an empty result before starting an
/// interview.
pub fn select_questions(profile: &Profile, interview_type: InterviewType) -> Vec<Question> {
    let bank = build_bank(profile);
    match interview_type.kind_filter() {
        None => bank.into_iter().take(MIXED_TAKE).collect(),
        Some(kind) => bank
            .into_iter()
            .filter(|q| q.kind == kind)
            .take(FILTERED_TAKE)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Alex Johnson".to_string(),
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "Python".to_string(),
            ],
            experience: vec!["Senior Frontend Developer at TechCorp (2021-2024)".to_string()],
            education: "BSc".to_string(),
        }
    }

    #[test]
    fn mixed_takes_all_seven() {
        let questions = select_questions(&profile(), InterviewType::Mixed);
        assert_eq!(questions.len(), 7);
        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn technical_filter_keeps_only_technical() {
        let questions = select_questions(&profile(), InterviewType::Technical);
        assert!(questions.len() <= FILTERED_TAKE);
        assert!(questions.iter().all(|q| q.kind == QuestionKind::Technical));
        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 4, 7]);
    }

    #[test]
    fn hr_filter_yields_the_single_motivation_question() {
        let questions = select_questions(&profile(), InterviewType::Hr);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, 6);
        assert_eq!(questions[0].category, "Motivation");
    }

    #[test]
    fn templates_interpolate_profile_fields() {
        let questions = select_questions(&profile(), InterviewType::Mixed);
        assert!(questions[0].text.contains("JavaScript, React, Node.js"));
        assert!(questions[2].text.contains("Senior Frontend Developer"));
        assert!(questions[6].text.contains("JavaScript and React"));
    }

    #[test]
    fn ids_are_unique() {
        let questions = build_bank(&profile());
        let mut ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }
}
