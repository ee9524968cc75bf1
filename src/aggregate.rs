use crate::error::ConverterError;
use crate::types::{SeasonOutput, ShowRecord};
use serde::Serialize;
use tracing::{debug, warn};

/// What happened to one show of the season
#[derive(Debug, Clone, PartialEq)]
pub enum ShowOutcome {
    Converted(ShowRecord),
    /// At least one board clue never aired
    Incomplete,
    /// Fetch, decode or inference failure unrelated to completeness
    Failed(String),
}

impl ShowOutcome {
    /// Classify the result of fetching and transforming a show
    pub fn from_result(result: Result<ShowRecord, ConverterError>) -> Self {
        match result {
            Ok(record) => ShowOutcome::Converted(record),
            Err(e) if e.is_incomplete_game() => ShowOutcome::Incomplete,
            Err(e) => ShowOutcome::Failed(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowFailure {
    pub show_number: String,
    pub reason: String,
}

/// Accumulator folded over the shows of a season
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonSummary {
    pub output: SeasonOutput,
    /// Shows folded in so far, whatever their outcome
    pub processed: usize,
    pub skipped: usize,
    pub failures: Vec<ShowFailure>,
}

impl SeasonSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one show's outcome into the summary.
    pub fn record(mut self, show_number: &str, outcome: ShowOutcome) -> Self {
        self.processed += 1;
        match outcome {
            ShowOutcome::Converted(record) => {
                if self.output.contains_key(show_number) {
                    warn!(show = %show_number, "Show listed twice; keeping first record");
                } else {
                    debug!(show = %show_number, "Show converted");
                    self.output.insert(show_number.to_string(), record);
                }
            }
            ShowOutcome::Incomplete => {
                debug!(show = %show_number, "Show skipped as incomplete");
                self.skipped += 1;
            }
            ShowOutcome::Failed(reason) => {
                warn!(show = %show_number, %reason, "Show failed");
                self.failures.push(ShowFailure {
                    show_number: show_number.to_string(),
                    reason,
                });
            }
        }
        self
    }

    pub fn converted(&self) -> usize {
        self.output.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Fold an ordered sequence of show outcomes into a season summary.
pub fn aggregate<I, S>(outcomes: I) -> SeasonSummary
where
    I: IntoIterator<Item = (S, ShowOutcome)>,
    S: AsRef<str>,
{
    outcomes
        .into_iter()
        .fold(SeasonSummary::new(), |summary, (show_number, outcome)| {
            summary.record(show_number.as_ref(), outcome)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoundName;

    fn record() -> ShowRecord {
        let mut record = ShowRecord::new();
        record.insert(RoundName::FinalJeopardy, Default::default());
        record
    }

    #[test]
    fn test_skip_counting() {
        let summary = aggregate(vec![
            ("1", ShowOutcome::Converted(record())),
            ("2", ShowOutcome::Incomplete),
            ("3", ShowOutcome::Converted(record())),
        ]);
        assert_eq!(summary.processed, 3);
        assert_eq!(summary.converted(), 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed(), 0);
        let keys: Vec<_> = summary.output.keys().cloned().collect();
        assert_eq!(keys, vec!["1", "3"]);
    }

    #[test]
    fn test_failures_are_counted_separately() {
        let summary = aggregate(vec![
            ("7", ShowOutcome::Failed("timed out".to_string())),
            ("8", ShowOutcome::Incomplete),
        ]);
        assert_eq!(summary.skipped, 1);
        assert_eq!(
            summary.failures,
            vec![ShowFailure {
                show_number: "7".to_string(),
                reason: "timed out".to_string()
            }]
        );
        assert!(summary.output.is_empty());
    }

    #[test]
    fn test_outcome_classification() {
        let incomplete = ConverterError::IncompleteGame {
            show_number: "1".to_string(),
            round: RoundName::Jeopardy,
        };
        assert_eq!(ShowOutcome::from_result(Err(incomplete)), ShowOutcome::Incomplete);

        let failed = ShowOutcome::from_result(Err(ConverterError::Api {
            message: "502".to_string(),
        }));
        assert!(matches!(failed, ShowOutcome::Failed(reason) if reason.contains("502")));
    }

    #[test]
    fn test_duplicate_show_keeps_first() {
        let mut second = record();
        second.insert(RoundName::Jeopardy, Default::default());
        let summary = aggregate(vec![
            ("5", ShowOutcome::Converted(record())),
            ("5", ShowOutcome::Converted(second)),
        ]);
        assert_eq!(summary.converted(), 1);
        assert_eq!(summary.output["5"].len(), 1);
    }
}
