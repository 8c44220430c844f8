//! Prompt construction from questionnaire answers

/// Answers to the fixed five-question interview.
///
/// No validation beyond presence: empty strings are allowed and simply
/// produce a less informative prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireAnswers {
    pub purpose: String,
    pub target_audience: String,
    pub tone: String,
    pub length: String,
    pub specific_details: String,
}

/// The fixed question texts shown by the interactive shell
pub mod questions {
    pub const PURPOSE: &str =
        "What is the purpose of your prompt? (e.g., 'Write a blog post', 'Explain quantum physics')";
    pub const TARGET_AUDIENCE: &str =
        "Who is the target audience? (e.g., 'students', 'professionals', 'general public')";
    pub const TONE: &str =
        "What tone should the response have? (e.g., 'formal', 'casual', 'technical')";
    pub const LENGTH: &str =
        "How long should the response be? (e.g., 'short', 'medium', 'detailed')";
    pub const SPECIFIC_DETAILS: &str =
        "Any specific details or keywords to include? (e.g., 'focus on AI ethics', 'use simple language')";
}

/// Render the answers into the fixed prompt template.
///
/// Deterministic, pure, total. Answer text is inserted verbatim with no
/// escaping or truncation.
pub fn build_prompt(answers: &QuestionnaireAnswers) -> String {
    format!(
        "Write a {} response for {} about {}. The tone should be {}. Additional details: {}.",
        answers.length,
        answers.target_audience,
        answers.purpose,
        answers.tone,
        answers.specific_details,
    )
}
