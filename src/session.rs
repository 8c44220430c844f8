//! Interactive shell: the top-level menu loop and its turns
//!
//! Every external operation (console read, model call, file I/O) blocks the
//! single thread of control. Generation and persistence failures are logged
//! and the loop continues; nothing here terminates the process except the
//! explicit Exit choice.

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::ProgressBar;
use promptgen_core::constants::defaults;
use promptgen_core::llm::{GeneratedResponse, GenerationConfig, TextGenerator};
use promptgen_core::prompts::{QuestionnaireAnswers, build_prompt, questions};
use promptgen_core::storage;
use std::time::Duration;
use tracing::{error, info};

/// Top-level menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Generate,
    Load,
    Exit,
}

/// Parse a raw menu line. Anything but a trimmed `1`, `2` or `3` is
/// unrecognized and keeps the loop running.
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Generate),
        "2" => Some(MenuChoice::Load),
        "3" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Banner printed once before the first menu
pub fn welcome(backend: &str, model: &str) {
    println!("{}", style("Welcome to promptgen!").cyan().bold());
    println!(
        "This tool helps you create effective prompts and generates sample responses using '{}' via the {} backend.",
        style(model).green(),
        backend
    );
}

/// Run the menu loop until the user picks Exit.
pub async fn run(generator: &dyn TextGenerator, config: &GenerationConfig) -> Result<()> {
    loop {
        println!();
        println!("{}", style("=== Main Menu ===").cyan().bold());
        println!("1. Generate a new prompt");
        println!("2. Load a saved prompt");
        println!("3. Exit");

        let choice: String = Input::new()
            .with_prompt("Enter your choice (1/2/3)")
            .allow_empty(true)
            .interact_text()?;

        match parse_choice(&choice) {
            Some(MenuChoice::Generate) => generate_turn(generator, config).await?,
            Some(MenuChoice::Load) => load_turn(generator, config).await?,
            Some(MenuChoice::Exit) => {
                println!("Exiting... Goodbye!");
                break;
            }
            None => {
                println!(
                    "{}",
                    style("Invalid choice. Please select 1, 2, or 3.").red()
                );
            }
        }
    }

    Ok(())
}

/// One prompt from argv, one generation round, no menu.
pub async fn ask_once(
    generator: &dyn TextGenerator,
    prompt: &str,
    config: &GenerationConfig,
) -> Result<()> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        println!("Nothing to ask: the prompt is empty.");
        return Ok(());
    }

    println!("{}", style("--- Prompt ---").green().bold());
    println!("{prompt}");
    generate_and_display(generator, prompt, config).await;
    Ok(())
}

/// Menu choice 1: questionnaire, prompt build, generation, optional save.
async fn generate_turn(generator: &dyn TextGenerator, config: &GenerationConfig) -> Result<()> {
    let answers = collect_answers()?;
    let prompt = build_prompt(&answers);

    println!();
    println!("{}", style("--- Generated Prompt ---").green().bold());
    println!("{prompt}");

    generate_and_display(generator, &prompt, config).await;
    offer_save(&prompt)?;
    Ok(())
}

/// Menu choice 2: reload a saved prompt and generate from it.
async fn load_turn(generator: &dyn TextGenerator, config: &GenerationConfig) -> Result<()> {
    let filename = prompt_for_filename("Enter filename to load prompt")?;

    match storage::load_prompt(&filename) {
        Ok(prompt) => {
            println!();
            println!("{}", style("--- Loaded Prompt ---").green().bold());
            println!("{prompt}");
            generate_and_display(generator, &prompt, config).await;
        }
        Err(err) => {
            error!("error loading prompt: {err}");
            println!("Failed to load the prompt. Please check the filename and try again.");
        }
    }

    Ok(())
}

/// Walk the fixed five-question interview. Answers are trimmed, empty
/// answers are allowed.
fn collect_answers() -> Result<QuestionnaireAnswers> {
    println!();
    println!("{}", style("--- Create a New Prompt ---").cyan().bold());
    let purpose = ask_question(questions::PURPOSE)?;

    println!();
    println!("Answer the following questions to refine your prompt:");
    let target_audience = ask_question(questions::TARGET_AUDIENCE)?;
    let tone = ask_question(questions::TONE)?;
    let length = ask_question(questions::LENGTH)?;
    let specific_details = ask_question(questions::SPECIFIC_DETAILS)?;

    Ok(QuestionnaireAnswers {
        purpose,
        target_audience,
        tone,
        length,
        specific_details,
    })
}

fn ask_question(question: &str) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(question)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

/// Yes/no save confirmation, then a filename defaulting to `prompt.json`.
/// A save failure is logged and control returns to the menu.
fn offer_save(prompt: &str) -> Result<()> {
    let save = Confirm::new()
        .with_prompt("Do you want to save this prompt?")
        .default(false)
        .interact()?;

    if !save {
        return Ok(());
    }

    let filename = prompt_for_filename("Enter filename to save prompt")?;
    match storage::save_prompt(prompt, &filename) {
        Ok(()) => info!("prompt saved to '{filename}'"),
        Err(err) => error!("error saving prompt: {err}"),
    }

    Ok(())
}

fn prompt_for_filename(message: &str) -> Result<String> {
    let filename: String = Input::new()
        .with_prompt(message)
        .default(defaults::DEFAULT_PROMPT_FILE.to_string())
        .interact_text()?;

    let trimmed = filename.trim();
    if trimmed.is_empty() {
        Ok(defaults::DEFAULT_PROMPT_FILE.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Call the gateway with a spinner and show whatever comes back. A failed
/// generation yields no output for this turn; the caller's loop continues.
pub async fn generate_and_display(
    generator: &dyn TextGenerator,
    prompt: &str,
    config: &GenerationConfig,
) {
    println!();
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Generating response(s)... Please wait.");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = generator.generate(prompt, config).await;
    spinner.finish_and_clear();

    match result {
        Ok(response) => display_responses(&response),
        Err(err) => {
            error!("error generating response: {err}");
            display_responses(&GeneratedResponse::new(Vec::new()));
        }
    }
}

/// Print each continuation under a numbered heading.
pub fn display_responses(response: &GeneratedResponse) {
    if response.is_empty() {
        println!("No responses were generated.");
        return;
    }

    for (idx, text) in response.texts.iter().enumerate() {
        println!();
        println!(
            "{}",
            style(format!("--- Generated Response {} ---", idx + 1))
                .magenta()
                .bold()
        );
        println!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_choices_parse() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Generate));
        assert_eq!(parse_choice("2"), Some(MenuChoice::Load));
        assert_eq!(parse_choice("3"), Some(MenuChoice::Exit));
    }

    #[test]
    fn choices_are_whitespace_trimmed() {
        assert_eq!(parse_choice("  1  "), Some(MenuChoice::Generate));
        assert_eq!(parse_choice("\t3\n"), Some(MenuChoice::Exit));
    }

    #[test]
    fn anything_else_is_unrecognized() {
        assert_eq!(parse_choice("9"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("exit"), None);
        assert_eq!(parse_choice("13"), None);
    }
}
