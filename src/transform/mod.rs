//! Converts one show's raw rounds into the category-grouped output schema.
//!
//! Board rounds are grouped by category in input order, then every Daily
//! Double is given the board value missing from its category. A single
//! unrevealed clue makes the whole show incomplete.

mod daily_double;

pub use daily_double::missing_canonical_values;

use crate::error::{ConverterError, Result};
use crate::types::{
    CategoryMap, ClueText, NormalizedClue, RawClue, RawFinalClue, RawShow, RoundName, ShowListing,
    ShowRecord,
};
use daily_double::{resolve_category, PendingClue};
use indexmap::IndexMap;
use tracing::{debug, instrument};

/// Clue text as the downstream player expects it, wrapped in single quotes
fn quote_question(text: &str) -> String {
    format!("'{text}'")
}

/// Group a Jeopardy! or Double Jeopardy! round by category and settle
/// Daily Double values.
///
/// Fails with [`ConverterError::IncompleteGame`] as soon as any clue is
/// unrevealed, wherever it sits in the round.
pub fn transform_round(
    clues: &[RawClue],
    air_date: &str,
    round: RoundName,
    show_number: &str,
) -> Result<CategoryMap> {
    if round == RoundName::FinalJeopardy {
        return Err(ConverterError::InvalidRound(round.to_string()));
    }

    // Completeness wins over any other defect in the round
    if clues.iter().any(|raw| raw.clue == ClueText::Unrevealed) {
        return Err(ConverterError::IncompleteGame {
            show_number: show_number.to_string(),
            round,
        });
    }

    let mut grouped: IndexMap<String, Vec<PendingClue>> = IndexMap::new();
    for raw in clues {
        let ClueText::Revealed(text) = &raw.clue else {
            continue;
        };
        let value = raw.value.ok_or_else(|| {
            ConverterError::MissingField(format!(
                "value for clue in '{}' ({round}) of show #{show_number}",
                raw.category
            ))
        })?;

        grouped
            .entry(raw.category.clone())
            .or_default()
            .push(PendingClue {
                value,
                clue: NormalizedClue {
                    category: raw.category.clone(),
                    air_date: air_date.to_string(),
                    question: quote_question(text),
                    value: None,
                    answer: raw.answer.clone(),
                    round,
                    show_number: show_number.to_string(),
                },
            });
    }

    grouped
        .into_iter()
        .map(|(category, pending)| -> Result<(String, Vec<NormalizedClue>)> {
            let resolved = resolve_category(&category, pending, round, show_number)?;
            Ok((category, resolved))
        })
        .collect()
}

/// Wrap the Final Jeopardy! clue as a one-category, one-clue map with no value.
pub fn transform_final(clue: &RawFinalClue, air_date: &str, show_number: &str) -> CategoryMap {
    let normalized = NormalizedClue {
        category: clue.category.clone(),
        air_date: air_date.to_string(),
        question: quote_question(&clue.clue),
        value: None,
        answer: clue.answer.clone(),
        round: RoundName::FinalJeopardy,
        show_number: show_number.to_string(),
    };
    let mut categories = CategoryMap::new();
    categories.insert(clue.category.clone(), vec![normalized]);
    categories
}

/// Convert all three rounds of a show into its output record.
#[instrument(skip(raw), fields(show = listing.show_number))]
pub fn transform_show(raw: &RawShow, listing: &ShowListing) -> Result<ShowRecord> {
    let air_date = listing.iso_air_date();
    let show_number = listing.show_id();

    let jeopardy = transform_round(&raw.jeopardy, &air_date, RoundName::Jeopardy, &show_number)?;
    let double_jeopardy = transform_round(
        &raw.double_jeopardy,
        &air_date,
        RoundName::DoubleJeopardy,
        &show_number,
    )?;
    let final_jeopardy = transform_final(&raw.final_jeopardy, &air_date, &show_number);

    debug!(
        jeopardy_categories = jeopardy.len(),
        double_jeopardy_categories = double_jeopardy.len(),
        "Transformed show"
    );

    let mut record = ShowRecord::new();
    record.insert(RoundName::Jeopardy, jeopardy);
    record.insert(RoundName::DoubleJeopardy, double_jeopardy);
    record.insert(RoundName::FinalJeopardy, final_jeopardy);
    Ok(record)
}
