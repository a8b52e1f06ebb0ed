//! Generated-input checks for description parsing and movement
//! reconstruction.

use chrono::DateTime;
use proptest::prelude::*;
use proptest::test_runner::Config;
use tix_core::movement::alphabetic_only;
use tix_core::{Description, ListMove, parse_description, reconstruct};

/// A trimmed token that can never contain the delimiter, a newline, or the
/// attachment marker (no upper case).
fn token() -> impl Strategy<Value = String> {
    "[a-z0-9@.][a-z0-9 @.]{0,12}[a-z0-9@.]"
}

/// Field pairs with distinct keys.
fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((token(), token()), 1..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (key, value))| (format!("{i}{key}"), value))
            .collect()
    })
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["###", "###\n", "\n###", " ### ", "###\n\n"])
}

fn list_move() -> impl Strategy<Value = ListMove> {
    ("\\PC{0,16}", "\\PC{0,16}", 0_i64..4_000_000_000).prop_map(|(source, destination, secs)| {
        ListMove {
            source,
            destination,
            date: DateTime::from_timestamp(secs, 0).unwrap(),
        }
    })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn even_token_descriptions_round_trip(pairs in pairs(), sep in separator()) {
        let tokens: Vec<&str> = pairs
            .iter()
            .flat_map(|(k, v)| [k.as_str(), v.as_str()])
            .collect();
        let text: String = tokens.iter().map(|t| format!("{sep}{t}")).collect();

        let Description::Parsed(fields) = parse_description(&text) else {
            panic!("delimited text must parse: {text:?}");
        };

        prop_assert_eq!(fields.len(), tokens.len() / 2);
        let rejoined: Vec<&str> = fields
            .iter()
            .flat_map(|(k, v)| [k.as_str(), v.as_str()])
            .collect();
        prop_assert_eq!(rejoined, tokens);
    }

    #[test]
    fn unpaired_trailing_token_is_dropped(pairs in pairs(), extra in token()) {
        let mut text: String = pairs.iter().map(|(k, v)| format!("###{k}###{v}")).collect();
        text.push_str(&format!("###{extra}"));

        let Description::Parsed(fields) = parse_description(&text) else {
            panic!("delimited text must parse: {text:?}");
        };
        prop_assert_eq!(fields.len(), pairs.len());
    }

    #[test]
    fn text_without_delimiter_is_kept_verbatim(
        text in prop_oneof![any::<String>(), "[a-zA-Z #\n]{0,40}"]
            .prop_filter("contains the delimiter", |s| !s.contains("###"))
    ) {
        prop_assert_eq!(parse_description(&text), Description::Raw(text.clone()));
    }

    #[test]
    fn movements_are_time_ordered(log in prop::collection::vec(list_move(), 0..24)) {
        let movements = reconstruct(log.clone());

        prop_assert_eq!(movements.len(), log.len());
        prop_assert!(movements.windows(2).all(|w| w[0].at <= w[1].at));
        for movement in &movements {
            prop_assert_eq!(alphabetic_only(&movement.source), movement.source.clone());
            prop_assert_eq!(alphabetic_only(&movement.destination), movement.destination.clone());
        }
    }

    #[test]
    fn newest_first_log_is_simply_reversed(mut log in prop::collection::vec(list_move(), 0..24)) {
        log.sort_by(|a, b| b.date.cmp(&a.date));

        let movements = reconstruct(log.clone());

        let expected: Vec<(String, String, i64)> = log
            .iter()
            .rev()
            .map(|e| (alphabetic_only(&e.source), alphabetic_only(&e.destination), e.date.timestamp()))
            .collect();
        let actual: Vec<(String, String, i64)> = movements
            .into_iter()
            .map(|m| (m.source, m.destination, m.at.timestamp()))
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
