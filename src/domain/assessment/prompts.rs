//! Prompt construction for the three stages.
//!
//! The wording here is part of the contract with the model; tests pin the
//! exact shape of each prompt.

use super::{AnalysisMap, AnswerOption};

const INITIAL_RESPONSE_INSTRUCTION: &str = "You are a medical expert with wide range of knowledge, your each and every decision and answer is crucial and must be accurate and onpoint , refer internet and all the available knowledge resources and analyze each option carefully and select only one best option (A, B, C, D, or E) which you think its right according to the question. Explain your reasoning in very short and crisp points.";

const PROBE_INSTRUCTION: &str =
    "Just answer the probing questions in short and crisp points. No need for further explanation.";

const FINAL_ASSESSMENT_INSTRUCTION: &str = "Based on the following analysis, provide a final assessment and select only one best and the correct option (A, B, C, D, or E):";

/// Formats options as `label: text` lines, in the order given.
pub fn extract_options(options: &[AnswerOption]) -> String {
    options
        .iter()
        .map(|o| format!("{}: {}", o.label(), o.text()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt asking for one best option with short justification.
pub fn initial_response_prompt(question: &str, options: &[AnswerOption]) -> String {
    format!(
        "Question:\n{}\n\nOptions:\n{}\n\n{}",
        question,
        extract_options(options),
        INITIAL_RESPONSE_INSTRUCTION
    )
}

/// Prompt putting one probe to the model's initial answer.
pub fn probing_prompt(question: &str, initial_response: &str, probe: &str) -> String {
    format!(
        "{}\n\nInitial response: {}\n\n{}\n\n{}",
        question, initial_response, probe, PROBE_INSTRUCTION
    )
}

/// Prompt asking for the final pick given the analysed probe answers.
pub fn final_assessment_prompt(
    question: &str,
    initial_response: &str,
    analysis: &AnalysisMap,
) -> String {
    format!(
        "Question: {}\n\nInitial response: {}\n\n{}\n{}",
        question,
        initial_response,
        FINAL_ASSESSMENT_INSTRUCTION,
        render_analysis(analysis)
    )
}

/// Renders the analysis as a mapping literal: `{'probe': 'analysis', ...}`.
pub fn render_analysis(analysis: &AnalysisMap) -> String {
    let body = analysis
        .iter()
        .map(|(probe, text)| format!("{}: {}", quote(probe), quote(text)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

/// Single-quoted literal, switching to double quotes when the text holds a
/// single quote but no double quote. Control characters are escaped.
fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() || ('\u{80}'..='\u{9f}').contains(&c) => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}
