use jarchive_converter::constants::{DOUBLE_JEOPARDY_VALUES, JEOPARDY_VALUES};
use jarchive_converter::transform::{transform_round, transform_show};
use jarchive_converter::types::{ClueText, RawClue, RawShow, RoundName, ShowListing};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::collections::BTreeSet;

const CATEGORIES: [&str; 5] = ["RIVERS", "POETS", "OPERA", "FLAGS", "CHEMISTRY"];

/// A full 5x5 board; category `i` has its Daily Double on board row `i`.
fn board_json(values: &[u32; 5]) -> Value {
    let mut clues = Vec::new();
    for row in 0..5 {
        for (col, category) in CATEGORIES.iter().enumerate() {
            let value = if row == col {
                json!("Daily Double")
            } else {
                json!(values[row])
            };
            clues.push(json!({
                "category": category,
                "value": value,
                "clue": format!("{category} clue {row}"),
                "answer": format!("{category} answer {row}"),
                "order": row * 5 + col + 1
            }));
        }
    }
    Value::Array(clues)
}

fn board(values: &[u32; 5]) -> Vec<RawClue> {
    serde_json::from_value(board_json(values)).unwrap()
}

#[test]
fn test_full_board_resolves_every_daily_double() {
    for (round, values) in [
        (RoundName::Jeopardy, &JEOPARDY_VALUES),
        (RoundName::DoubleJeopardy, &DOUBLE_JEOPARDY_VALUES),
    ] {
        let map = transform_round(&board(values), "2019-09-09", round, "8045").unwrap();
        assert_eq!(map.len(), 5);

        let expected: BTreeSet<String> = values.iter().map(|v| format!("${v}")).collect();
        for (category, clues) in &map {
            assert_eq!(clues.len(), 5, "category {category}");
            let seen: BTreeSet<String> = clues.iter().map(|c| c.value.clone().unwrap()).collect();
            assert_eq!(seen, expected, "category {category}");
            assert!(clues.iter().all(|c| c.value.as_deref() != Some("Daily Double")));
            assert!(clues.iter().all(|c| c.round == round));
        }
    }
}

#[test]
fn test_daily_double_example_from_first_round() {
    let clues: Vec<RawClue> = serde_json::from_value(json!([
        {"category": "SCIENCE", "value": 200, "clue": "a", "answer": "A"},
        {"category": "SCIENCE", "value": 400, "clue": "b", "answer": "B"},
        {"category": "SCIENCE", "value": "Daily Double", "clue": "c", "answer": "C"},
        {"category": "SCIENCE", "value": 800, "clue": "d", "answer": "D"},
        {"category": "SCIENCE", "value": 1000, "clue": "e", "answer": "E"}
    ]))
    .unwrap();

    let map = transform_round(&clues, "2019-09-09", RoundName::Jeopardy, "8045").unwrap();
    assert_eq!(map["SCIENCE"][2].value.as_deref(), Some("$600"));
    assert_eq!(map["SCIENCE"][2].question, "'c'");
}

#[test]
fn test_every_clue_lands_in_its_own_category() {
    let clues = board(&JEOPARDY_VALUES);
    let map = transform_round(&clues, "2019-09-09", RoundName::Jeopardy, "8045").unwrap();

    let total: usize = map.values().map(Vec::len).sum();
    assert_eq!(total, clues.len());
    for (category, grouped) in &map {
        assert!(CATEGORIES.contains(&category.as_str()));
        assert!(grouped.iter().all(|c| &c.category == category));
    }
}

#[test]
fn test_unrevealed_clue_anywhere_fails_round() {
    let clues = board(&DOUBLE_JEOPARDY_VALUES);
    for position in 0..clues.len() {
        let mut clues = clues.clone();
        clues[position].clue = ClueText::Unrevealed;
        let err = transform_round(&clues, "2019-09-09", RoundName::DoubleJeopardy, "8045")
            .unwrap_err();
        assert!(err.is_incomplete_game(), "position {position}");
    }
}

#[test]
fn test_transform_is_repeatable() {
    let first = transform_round(&board(&JEOPARDY_VALUES), "2019-09-09", RoundName::Jeopardy, "1")
        .unwrap();
    let second = transform_round(&board(&JEOPARDY_VALUES), "2019-09-09", RoundName::Jeopardy, "1")
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_show_record_has_three_rounds() {
    let raw: RawShow = serde_json::from_value(json!({
        "jeopardy": board_json(&JEOPARDY_VALUES),
        "double jeopardy": board_json(&DOUBLE_JEOPARDY_VALUES),
        "final jeopardy": {"category": "AUTHORS", "clue": "He wrote Ulysses", "answer": "James Joyce"}
    }))
    .unwrap();
    let listing = ShowListing::new(8045, NaiveDate::from_ymd_opt(2019, 9, 9).unwrap());

    let record = transform_show(&raw, &listing).unwrap();
    let rounds: Vec<_> = record.keys().copied().collect();
    assert_eq!(
        rounds,
        vec![
            RoundName::Jeopardy,
            RoundName::DoubleJeopardy,
            RoundName::FinalJeopardy
        ]
    );

    let final_round = &record[&RoundName::FinalJeopardy];
    assert_eq!(final_round.len(), 1);
    assert_eq!(final_round["AUTHORS"].len(), 1);
    assert_eq!(final_round["AUTHORS"][0].value, None);

    let json = serde_json::to_value(&record).unwrap();
    let clue = &json["Double Jeopardy!"]["RIVERS"][0];
    assert_eq!(clue["air_date"], "2019-09-09");
    assert_eq!(clue["show_number"], "8045");
    assert_eq!(clue["round"], "Double Jeopardy!");
    assert_eq!(clue["value"], "$400");
}
