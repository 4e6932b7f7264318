//! Property-based tests for the session store

use super::*;
use crate::advice::AdviceTable;
use proptest::prelude::*;

fn arb_subject() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 _-]{0,15}"
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("happy".to_string()),
        Just("stressed".to_string()),
        Just("tired".to_string()),
        Just("calm".to_string()),
        "[a-z]{1,10}",
    ]
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..365).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

proptest! {
    #[test]
    fn record_is_visible_first(
        subject in arb_subject(),
        category in arb_category(),
        note in "[a-zA-Z ]{0,30}",
    ) {
        let store = SessionStore::new();
        store.record(&subject, &category, &note).unwrap();

        let entries = store.entries_for(&subject);
        prop_assert!(!entries.is_empty());
        prop_assert_eq!(&entries[0].category, &normalize_category(&category));
        prop_assert_eq!(&entries[0].note, note.trim());
        prop_assert_eq!(entries[0].date, Local::now().date_naive());
    }

    #[test]
    fn whitespace_subject_never_changes_state(
        blank in "[ \t]{0,5}",
        category in arb_category(),
    ) {
        let store = SessionStore::new();
        store.record("existing", "calm", "").unwrap();
        let before = store.snapshot();

        prop_assert_eq!(store.record(&blank, &category, "x"), Err(SessionError::EmptySubject));
        prop_assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn entries_sorted_and_unique_per_day(
        records in prop::collection::vec((arb_date(), arb_category()), 1..30),
    ) {
        let store = SessionStore::new();
        for (date, category) in &records {
            store.record_on(*date, "subject", category, "").unwrap();
        }

        let entries = store.entries_for("subject");
        for pair in entries.windows(2) {
            prop_assert!(pair[0].date > pair[1].date);
        }

        // Last write for a date wins
        let mut expected: std::collections::BTreeMap<NaiveDate, String> = Default::default();
        for (date, category) in &records {
            expected.insert(*date, normalize_category(category));
        }
        prop_assert_eq!(entries.len(), expected.len());
        for entry in &entries {
            prop_assert_eq!(&expected[&entry.date], &entry.category);
        }
    }

    #[test]
    fn advice_independent_of_records(
        records in prop::collection::vec((arb_subject(), arb_category()), 0..20),
        query in arb_category(),
    ) {
        let table = AdviceTable::builtin();
        let before = table.advice_for(&query).to_string();

        let store = SessionStore::new();
        for (subject, category) in &records {
            let _ = store.record(subject, category, "");
        }

        prop_assert_eq!(table.advice_for(&query), before);
    }
}
