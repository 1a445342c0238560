use keycount_core::{summarize, KeywordTable};

#[test]
fn record_increments_by_exactly_one() {
    let mut table = KeywordTable::c_keywords();

    assert!(table.record(b"int"));
    assert_eq!(table.find(b"int").unwrap().count, 1);

    assert!(table.record(b"int"));
    assert_eq!(table.find(b"int").unwrap().count, 2);
}

#[test]
fn a_miss_leaves_every_counter_untouched() {
    let mut table = KeywordTable::c_keywords();
    table.record(b"return");

    assert!(!table.record(b"returns"));
    assert!(!table.record(b"x=5;"));

    assert_eq!(table.find(b"return").unwrap().count, 1);
    let touched: Vec<_> = table
        .entries()
        .iter()
        .filter(|entry| entry.count > 0)
        .collect();
    assert_eq!(touched.len(), 1);
}

#[test]
fn summary_keeps_table_order_and_omits_zeroes() {
    let mut table = KeywordTable::c_keywords();
    // Recorded out of alphabetical order on purpose.
    table.record(b"while");
    table.record(b"auto");
    table.record(b"int");
    table.record(b"int");

    let lines = summarize(&table);
    let rows: Vec<_> = lines
        .iter()
        .map(|line| (line.count, line.keyword))
        .collect();
    assert_eq!(rows, vec![(1, "auto"), (2, "int"), (1, "while")]);
}
