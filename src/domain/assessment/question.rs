//! Question input value objects.

use crate::domain::foundation::ValidationError;

/// Largest number of answer options the intake form offers (`A`–`E`).
pub const MAX_OPTIONS: usize = 5;

/// One labeled answer option, e.g. `B: Scarlet fever`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    label: char,
    text: String,
}

impl AnswerOption {
    /// Creates an option, validating that the label is a single letter.
    pub fn new(label: &str, text: impl Into<String>) -> Result<Self, ValidationError> {
        let mut chars = label.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(Self {
                label: letter,
                text: text.into(),
            }),
            _ => Err(ValidationError::invalid_format(
                "options",
                format!("option label '{}' must be a single letter", label),
            )),
        }
    }

    pub fn label(&self) -> char {
        self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the option slot was left blank.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A clinical multiple-choice question and its options, in the order given.
///
/// Immutable once built; the pipeline only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionInput {
    question: String,
    options: Vec<AnswerOption>,
}

impl QuestionInput {
    /// Builds a question from `(label, text)` pairs.
    ///
    /// Labels must be single letters and unique, and there can be at most
    /// [`MAX_OPTIONS`] of them. Blank option texts are kept as-is.
    pub fn new<I, L, T>(question: impl Into<String>, options: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (L, T)>,
        L: AsRef<str>,
        T: Into<String>,
    {
        let options = options
            .into_iter()
            .map(|(label, text)| AnswerOption::new(label.as_ref(), text))
            .collect::<Result<Vec<_>, _>>()?;

        if options.len() > MAX_OPTIONS {
            return Err(ValidationError::too_many("options", MAX_OPTIONS, options.len()));
        }

        for (index, option) in options.iter().enumerate() {
            if options[..index].iter().any(|o| o.label == option.label) {
                return Err(ValidationError::duplicate("options", option.label.to_string()));
            }
        }

        Ok(Self {
            question: question.into(),
            options,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Number of options with non-blank text.
    pub fn populated_options(&self) -> usize {
        self.options.iter().filter(|o| !o.is_blank()).count()
    }
}
