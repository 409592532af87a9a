//! Probe battery and the ordered answer maps it produces.

use serde::{Deserialize, Serialize};

/// The fixed follow-up questions put to the model after its initial answer,
/// in the order they are asked and displayed.
pub const PROBE_QUESTIONS: [&str; 8] = [
    "What are the key factors that led you to this conclusion by ruling out the other options?",
    "Can you identify any potential weaknesses in your reasoning?",
    "What alternative explanations might exist for this scenario?",
    "How might your answer change if [insert relevant detail] was different?",
    "On a scale of 1-10, how certain are you of this answer, and why?",
    "What additional information would help you be more confident in your answer?",
    "What are the potential consequences if this answer is incorrect?",
    "How does your answer align with standard medical practices or guidelines?",
];

/// Prefix `analyze` puts in front of every probe answer.
pub const ANALYSIS_PREFIX: &str = "Analysis of: ";

/// Probe text → model answer, in probe order.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbingResult {
    #[serde(with = "crate::domain::assessment::ordered")]
    entries: Vec<(String, String)>,
}

impl ProbingResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer. Re-inserting a probe replaces its answer in place.
    pub fn insert(&mut self, probe: impl Into<String>, answer: impl Into<String>) {
        let probe = probe.into();
        let answer = answer.into();
        match self.entries.iter_mut().find(|(p, _)| *p == probe) {
            Some(entry) => entry.1 = answer,
            None => self.entries.push((probe, answer)),
        }
    }

    pub fn get(&self, probe: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == probe)
            .map(|(_, a)| a.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(probe, answer)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }

    pub fn probes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }
}

impl<P, A> FromIterator<(P, A)> for ProbingResult
where
    P: Into<String>,
    A: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, A)>>(iter: I) -> Self {
        let mut result = ProbingResult::new();
        for (probe, answer) in iter {
            result.insert(probe, answer);
        }
        result
    }
}

/// Probe text → analysis string, in probe order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisMap {
    #[serde(with = "crate::domain::assessment::ordered")]
    entries: Vec<(String, String)>,
}

impl AnalysisMap {
    pub fn get(&self, probe: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == probe)
            .map(|(_, a)| a.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }
}

/// Turns probe answers into analysis entries.
///
/// Currently a plain labeled wrap of each answer. It stays a separate step
/// so real post-processing can slot in without touching the stages.
pub fn analyze(results: &ProbingResult) -> AnalysisMap {
    AnalysisMap {
        entries: results
            .iter()
            .map(|(probe, answer)| (probe.to_string(), format!("{}{}", ANALYSIS_PREFIX, answer)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn probe_battery_has_eight_distinct_questions() {
        let mut sorted = PROBE_QUESTIONS.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn insert_keeps_order_and_replaces_in_place() {
        let mut result = ProbingResult::new();
        result.insert("second?", "b");
        result.insert("first?", "a");
        result.insert("second?", "b2");

        let pairs: Vec<(&str, &str)> = result.iter().collect();
        assert_eq!(pairs, vec![("second?", "b2"), ("first?", "a")]);
    }

    #[test]
    fn analyze_wraps_each_answer() {
        let result: ProbingResult = [("Why?", "Because."), ("How sure?", "8/10")]
            .into_iter()
            .collect();

        let analysis = analyze(&result);

        assert_eq!(analysis.get("Why?"), Some("Analysis of: Because."));
        assert_eq!(analysis.get("How sure?"), Some("Analysis of: 8/10"));
    }

    #[test]
    fn analyze_of_empty_is_empty() {
        assert!(analyze(&ProbingResult::new()).is_empty());
    }

    #[test]
    fn probing_result_serializes_in_probe_order() {
        let result: ProbingResult = [("z?", "1"), ("a?", "2")].into_iter().collect();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"z?":"1","a?":"2"}"#);
    }

    proptest! {
        #[test]
        fn analyze_is_order_preserving_and_pure(
            answers in proptest::collection::vec(("[a-z ]{1,12}\\?", ".{0,40}"), 0..10)
        ) {
            let result: ProbingResult = answers.iter().cloned().collect();
            let first = analyze(&result);
            let second = analyze(&result);

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), result.len());

            let keys: Vec<&str> = first.iter().map(|(k, _)| k).collect();
            let expected: Vec<&str> = result.probes().collect();
            prop_assert_eq!(keys, expected);

            for (probe, answer) in result.iter() {
                let wrapped = format!("Analysis of: {}", answer);
                prop_assert_eq!(first.get(probe), Some(wrapped.as_str()));
            }
        }
    }
}
