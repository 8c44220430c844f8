//! Template exactness tests for the prompt builder

use promptgen_core::prompts::{QuestionnaireAnswers, build_prompt};

#[test]
fn substitutes_all_five_answers_in_order() {
    let answers = QuestionnaireAnswers {
        purpose: "the history of tea".to_string(),
        target_audience: "general public".to_string(),
        tone: "friendly".to_string(),
        length: "detailed".to_string(),
        specific_details: "focus on China and Britain".to_string(),
    };

    assert_eq!(
        build_prompt(&answers),
        "Write a detailed response for general public about the history of tea. \
         The tone should be friendly. Additional details: focus on China and Britain."
    );
}

#[test]
fn is_deterministic_for_equal_answers() {
    let answers = QuestionnaireAnswers {
        purpose: "x".to_string(),
        target_audience: "y".to_string(),
        tone: "z".to_string(),
        length: "w".to_string(),
        specific_details: "v".to_string(),
    };

    assert_eq!(build_prompt(&answers), build_prompt(&answers.clone()));
}

#[test]
fn newlines_in_answers_pass_through() {
    let answers = QuestionnaireAnswers {
        purpose: "a\nmultiline\npurpose".to_string(),
        target_audience: "testers".to_string(),
        tone: "terse".to_string(),
        length: "short".to_string(),
        specific_details: "".to_string(),
    };

    let prompt = build_prompt(&answers);
    assert!(prompt.contains("a\nmultiline\npurpose"));
    assert!(prompt.ends_with("Additional details: ."));
}
