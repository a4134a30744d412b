//! Line-oriented interactive prompts for `forge new --interactive`.
//!
//! The wizard only collects answers; it never validates them beyond choosing
//! from the offered options. Its output feeds the render-context builder as
//! the highest-priority layer.
use anyhow::{Context as _, Result, bail};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use crate::config::render_context::{
    AUTHOR_NAME, LICENSE, PACKAGE_MANAGER, PERSONA, PROFILE, PROJECT_NAME, PYTHON_VERSION,
};
use crate::config::{PackageManager, RenderContext};

/// Choices offered by the wizard.
#[derive(Debug, Clone)]
pub struct Choices<'a> {
    pub profiles: &'a [&'a str],
    pub personas: &'a [&'a str],
}

/// Ask for every render-context field, offering `defaults`.
///
/// An empty answer (or end of input) keeps the default.
///
/// # Errors
///
/// Returns an error on I/O failure or when a choice answer matches no option.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    defaults: &RenderContext,
    choices: &Choices<'_>,
) -> Result<BTreeMap<String, String>> {
    let package_managers: Vec<&str> = PackageManager::ALL.iter().map(|p| p.as_str()).collect();

    let mut answers = BTreeMap::new();
    let name = prompt_text(input, output, "Project name", &defaults.project_name)?;
    answers.insert(PROJECT_NAME.to_string(), name);
    let author = prompt_text(input, output, "Author", &defaults.author_name)?;
    answers.insert(AUTHOR_NAME.to_string(), author);

    let profile = prompt_choice(input, output, "Profile", choices.profiles, &defaults.profile)?;
    answers.insert(PROFILE.to_string(), profile);
    let persona = prompt_choice(input, output, "Persona", choices.personas, &defaults.persona)?;
    answers.insert(PERSONA.to_string(), persona);

    let python = prompt_text(input, output, "Python version", &defaults.python_version)?;
    answers.insert(PYTHON_VERSION.to_string(), python);
    let manager = prompt_choice(
        input,
        output,
        "Package manager",
        &package_managers,
        defaults.package_manager.as_str(),
    )?;
    answers.insert(PACKAGE_MANAGER.to_string(), manager);
    let license = prompt_text(input, output, "License", &defaults.license)?;
    answers.insert(LICENSE.to_string(), license);

    Ok(answers)
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("reading answer")?;
    Ok(line.trim().to_string())
}

/// Prompt for free text.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn prompt_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> Result<String> {
    write!(output, "{label} [{default}]: ")?;
    output.flush()?;
    let answer = read_answer(input)?;
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}

/// Prompt for one of `options`, by number or by name.
///
/// # Errors
///
/// Returns an error on I/O failure or when the answer matches no option.
pub fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    options: &[&str],
    default: &str,
) -> Result<String> {
    writeln!(output, "{label}:")?;
    for (i, option) in options.iter().enumerate() {
        let marker = if *option == default { " (default)" } else { "" };
        writeln!(output, "  {}) {option}{marker}", i + 1)?;
    }
    write!(output, "Select [{default}]: ")?;
    output.flush()?;

    let answer = read_answer(input)?;
    if answer.is_empty() {
        return Ok(default.to_string());
    }
    if let Some(option) = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
    {
        return Ok((*option).to_string());
    }
    if let Some(option) = options.iter().find(|o| **o == answer) {
        return Ok((*option).to_string());
    }
    bail!("invalid selection '{answer}' for {label}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PROFILES: &[&str] = &["fullstack", "web", "system"];
    const PERSONAS: &[&str] = &["standard", "architect"];

    fn answer(script: &str) -> Result<BTreeMap<String, String>> {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        run(
            &mut input,
            &mut output,
            &RenderContext::default(),
            &Choices {
                profiles: PROFILES,
                personas: PERSONAS,
            },
        )
    }

    #[test]
    fn empty_answers_keep_defaults() {
        let answers = answer("").unwrap();
        assert_eq!(answers.get("project_name").unwrap(), "ai_project");
        assert_eq!(answers.get("profile").unwrap(), "fullstack");
        assert_eq!(answers.get("package_manager").unwrap(), "pip");
        assert_eq!(answers.len(), 7);
    }

    #[test]
    fn answers_by_number_and_name() {
        let answers = answer("demo\nAda\n2\narchitect\n3.12\nuv\nApache-2.0\n").unwrap();
        assert_eq!(answers.get("project_name").unwrap(), "demo");
        assert_eq!(answers.get("author_name").unwrap(), "Ada");
        assert_eq!(answers.get("profile").unwrap(), "web");
        assert_eq!(answers.get("persona").unwrap(), "architect");
        assert_eq!(answers.get("python_version").unwrap(), "3.12");
        assert_eq!(answers.get("package_manager").unwrap(), "uv");
        assert_eq!(answers.get("license").unwrap(), "Apache-2.0");
    }

    #[test]
    fn invalid_choice_is_error() {
        let err = answer("demo\nAda\n9\n").unwrap_err();
        assert!(err.to_string().contains("invalid selection '9'"), "{err}");
    }

    #[test]
    fn choice_prompt_marks_default() {
        let mut input = "\n".as_bytes();
        let mut output = Vec::new();
        let picked = prompt_choice(&mut input, &mut output, "Profile", PROFILES, "web").unwrap();
        assert_eq!(picked, "web");
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("2) web (default)"));
    }
}
