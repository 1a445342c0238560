use keycount_core::KeywordTable;

/// Linear-scan reference the binary search must agree with.
fn linear_find<'a>(table: &'a KeywordTable, token: &[u8]) -> Option<&'a str> {
    table
        .entries()
        .iter()
        .find(|entry| entry.word.as_bytes() == token)
        .map(|entry| entry.word)
}

fn probes(table: &KeywordTable) -> Vec<Vec<u8>> {
    let mut probes: Vec<Vec<u8>> = Vec::new();
    for entry in table.entries() {
        let word = entry.word.as_bytes();
        probes.push(word.to_vec());
        // Every strict prefix, and the word with one byte appended.
        for cut in 0..word.len() {
            probes.push(word[..cut].to_vec());
        }
        let mut longer = word.to_vec();
        longer.push(b'x');
        probes.push(longer);
        let mut punctuated = word.to_vec();
        punctuated.push(b';');
        probes.push(punctuated);
    }
    probes.extend([
        b"".to_vec(),
        b"a".to_vec(),
        b"zzzz".to_vec(),
        b"x=5;".to_vec(),
        b"WHILE".to_vec(),
        b"for(i=0;i<10;i++){".to_vec(),
    ]);
    probes
}

#[test]
fn binary_search_matches_linear_scan_on_standard_table() {
    count_logging::initialize_for_tests();
    let table = KeywordTable::c_keywords();

    for probe in probes(&table) {
        let binary = table.find(&probe).map(|entry| entry.word);
        let linear = linear_find(&table, &probe);
        assert_eq!(binary, linear, "probe {:?}", String::from_utf8_lossy(&probe));
    }
}

#[test]
fn binary_search_matches_linear_scan_on_custom_vocabularies() {
    let vocabularies: &[&[&'static str]] = &[
        &[],
        &["only"],
        &["alpha", "beta"],
        &["a", "ab", "abc", "b", "ba"],
        &["do", "double", "down", "downward", "dozen", "drum", "dry"],
    ];

    for words in vocabularies {
        let table = KeywordTable::from_words(words);
        for probe in probes(&table) {
            let binary = table.find(&probe).map(|entry| entry.word);
            let linear = linear_find(&table, &probe);
            assert_eq!(
                binary,
                linear,
                "vocabulary {:?}, probe {:?}",
                words,
                String::from_utf8_lossy(&probe)
            );
        }
    }
}

#[test]
fn repeated_lookups_hit_the_same_entry() {
    let mut table = KeywordTable::c_keywords();
    for _ in 0..3 {
        let entry = table.find_mut(b"while").unwrap();
        assert_eq!(entry.word, "while");
        entry.count += 1;
    }
    assert_eq!(table.find(b"while").unwrap().count, 3);
}
