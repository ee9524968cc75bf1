use crate::error::{ConverterError, Result};
use crate::types::{ClueValue, NormalizedClue, RoundName};
use tracing::{debug, warn};

/// A grouped clue whose dollar value has not been settled yet
#[derive(Debug, Clone)]
pub(crate) struct PendingClue {
    pub value: ClueValue,
    pub clue: NormalizedClue,
}

/// Canonical values of `round` that none of the `known` values account for,
/// in ascending order.
pub fn missing_canonical_values(round: RoundName, known: &[u32]) -> Vec<u32> {
    round
        .canonical_values()
        .map(|canonical| {
            canonical
                .iter()
                .copied()
                .filter(|value| !known.contains(value))
                .collect()
        })
        .unwrap_or_default()
}

/// Currency string used by the output schema, e.g. `$600`
fn dollars(amount: u32) -> String {
    format!("${amount}")
}

/// Settle every clue of one category to a dollar amount, filling Daily
/// Doubles with the missing canonical values in ascending order.
pub(crate) fn resolve_category(
    category: &str,
    pending: Vec<PendingClue>,
    round: RoundName,
    show_number: &str,
) -> Result<Vec<NormalizedClue>> {
    let daily_doubles = pending
        .iter()
        .filter(|p| p.value == ClueValue::DailyDouble)
        .count();

    let inferred: Vec<u32> = if daily_doubles == 0 {
        Vec::new()
    } else {
        let known: Vec<u32> = pending
            .iter()
            .filter_map(|p| match p.value {
                ClueValue::Known(amount) => Some(amount),
                ClueValue::DailyDouble => None,
            })
            .collect();
        let missing = missing_canonical_values(round, &known);

        if missing.len() < daily_doubles {
            return Err(ConverterError::AmbiguousDailyDouble {
                show_number: show_number.to_string(),
                round,
                category: category.to_string(),
                daily_doubles,
                missing: missing.len(),
            });
        }
        if missing.len() > daily_doubles {
            warn!(
                show = %show_number,
                round = %round,
                category = %category,
                ?missing,
                "Category is missing more board values than it has Daily Doubles; using the lowest"
            );
        }
        debug!(show = %show_number, category = %category, ?missing, "Inferred Daily Double value");
        missing
    };
    let mut inferred = inferred.into_iter();

    pending
        .into_iter()
        .map(|p| -> Result<NormalizedClue> {
            let amount = match p.value {
                ClueValue::Known(amount) => amount,
                ClueValue::DailyDouble => inferred.next().ok_or_else(|| {
                    ConverterError::AmbiguousDailyDouble {
                        show_number: show_number.to_string(),
                        round,
                        category: category.to_string(),
                        daily_doubles,
                        missing: 0,
                    }
                })?,
            };
            Ok(NormalizedClue {
                value: Some(dollars(amount)),
                ..p.clue
            })
        })
        .collect()
}
