//! Prompt builder and the fixed questionnaire

pub mod builder;

pub use builder::{QuestionnaireAnswers, build_prompt, questions};
