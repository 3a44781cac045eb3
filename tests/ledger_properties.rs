use pocket_ledger::errors::LedgerError;
use pocket_ledger::ledger::{Ledger, Record, Taxonomy};
use proptest::prelude::*;

fn valid_category() -> impl Strategy<Value = String> {
    let names: Vec<String> = Taxonomy::reference()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();
    proptest::sample::select(names)
}

fn description() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9'%.!&()_-]([a-zA-Z0-9 '%.!&()_-]{0,10}[a-zA-Z0-9'%.!&()_-])?"
}

fn any_description() -> impl Strategy<Value = String> {
    prop_oneof![
        description(),
        "[a-z ,\t\r\n]{0,12}",
        any::<String>(),
    ]
}

fn record() -> impl Strategy<Value = Record> {
    (valid_category(), description(), -10_000i64..10_000)
        .prop_map(|(category, description, amount)| Record::new(category, description, amount))
}

proptest! {
    #[test]
    fn add_moves_balance_by_amount(
        opening in -1_000i64..1_000,
        record in record(),
    ) {
        let taxonomy = Taxonomy::reference();
        let mut ledger = Ledger::new(opening);
        ledger.add(&record.category, &record.description, record.amount, &taxonomy).unwrap();
        prop_assert_eq!(ledger.balance(), opening + record.amount);
        prop_assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn balance_never_leaves_the_integer_range(
        opening in any::<i64>(),
        amount in any::<i64>(),
    ) {
        let taxonomy = Taxonomy::reference();
        let mut ledger = Ledger::new(opening);
        let result = ledger.add("salary", "pay", amount, &taxonomy).map(|record| record.clone());
        match opening.checked_add(amount) {
            Some(expected) => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(ledger.balance(), expected);
            }
            None => {
                prop_assert!(matches!(result, Err(LedgerError::BalanceOverflow(_))));
                prop_assert_eq!(ledger, Ledger::new(opening));
            }
        }
    }

    #[test]
    fn accepted_descriptions_survive_reload(
        category in valid_category(),
        description in any_description(),
        amount in -10_000i64..10_000,
    ) {
        let taxonomy = Taxonomy::reference();
        let mut ledger = Ledger::new(0);
        let accepted = ledger.add(&category, &description, amount, &taxonomy).is_ok();
        prop_assert_eq!(accepted, Record::is_storable(&description));
        if !accepted {
            prop_assert_eq!(&ledger, &Ledger::new(0));
        }

        let snapshot = Ledger::deserialize(ledger.serialize());
        prop_assert_eq!(snapshot.balance, Some(ledger.balance()));
        prop_assert_eq!(snapshot.records.as_slice(), ledger.records());
    }

    #[test]
    fn invalid_category_changes_nothing(
        existing in proptest::collection::vec(record(), 0..8),
        category in "[A-Z][a-z]{2,8}",
        amount in -500i64..500,
    ) {
        let taxonomy = Taxonomy::reference();
        let mut ledger = Ledger::new(0);
        for record in &existing {
            ledger.add(&record.category, &record.description, record.amount, &taxonomy).unwrap();
        }
        let before = ledger.clone();
        let result = ledger.add(&category, "x", amount, &taxonomy);
        prop_assert!(matches!(result, Err(LedgerError::InvalidCategory(_))));
        prop_assert_eq!(ledger, before);
    }

    #[test]
    fn delete_undoes_add(
        existing in proptest::collection::vec(record(), 0..8),
        added in record(),
    ) {
        let taxonomy = Taxonomy::reference();
        let mut ledger = Ledger::new(0);
        for record in existing.iter().filter(|record| **record != added) {
            ledger.add(&record.category, &record.description, record.amount, &taxonomy).unwrap();
        }
        let before = ledger.clone();

        ledger.add(&added.category, &added.description, added.amount, &taxonomy).unwrap();
        let removed = ledger
            .delete(&added.category, &added.description, &added.amount.to_string())
            .unwrap();
        prop_assert_eq!(removed, added);
        prop_assert_eq!(ledger, before);
    }

    #[test]
    fn serialized_ledger_reloads_identically(
        opening in -1_000i64..1_000,
        records in proptest::collection::vec(record(), 0..16),
        deletions in proptest::collection::vec(any::<prop::sample::Index>(), 0..4),
    ) {
        let taxonomy = Taxonomy::reference();
        let mut ledger = Ledger::new(opening);
        for record in &records {
            ledger.add(&record.category, &record.description, record.amount, &taxonomy).unwrap();
        }
        for index in deletions {
            if ledger.is_empty() {
                break;
            }
            let target = ledger.records()[index.index(ledger.len())].clone();
            ledger
                .delete(&target.category, &target.description, &target.amount.to_string())
                .unwrap();
        }

        let snapshot = Ledger::deserialize(ledger.serialize());
        prop_assert_eq!(snapshot.balance, Some(ledger.balance()));
        prop_assert_eq!(snapshot.records.as_slice(), ledger.records());
    }
}

#[test]
fn batch_scenario_keeps_valid_items() {
    let taxonomy = Taxonomy::reference();
    let mut ledger = Ledger::new(100);
    let results = ledger.add_batch("food meal -50, car ride -10", &taxonomy);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(LedgerError::InvalidCategory(_))));
    assert_eq!(ledger.balance(), 50);
    assert_eq!(ledger.records(), &[Record::new("food", "meal", -50)]);
}

#[test]
fn find_expense_spans_both_subtrees() {
    let taxonomy = Taxonomy::reference();
    let mut ledger = Ledger::new(0);
    ledger.add("food", "meal", -50, &taxonomy).unwrap();
    ledger.add("bus", "fare", -10, &taxonomy).unwrap();
    let report = ledger.find("expense", &taxonomy).unwrap();
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.total, -60);
}
