use std::cmp::Ordering;

/// The 32 reserved words of C, in strictly ascending byte order.
const C_KEYWORDS: [&str; 32] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

/// One keyword paired with its occurrence counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub word: &'static str,
    pub count: u64,
}

/// An immutable, sorted vocabulary of keywords with mutable counters.
///
/// Lookup correctness depends on the entries staying strictly ascending by
/// byte-wise word order; the constructor asserts it and nothing resizes or
/// reorders the table afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<KeywordEntry>,
}

impl KeywordTable {
    /// Builds the standard table of C's reserved words, all counters zero.
    pub fn c_keywords() -> Self {
        Self::from_words(&C_KEYWORDS)
    }

    /// Builds a table from an arbitrary vocabulary.
    ///
    /// Panics unless `words` is strictly ascending in byte order.
    pub fn from_words(words: &[&'static str]) -> Self {
        assert!(
            words.windows(2).all(|pair| pair[0] < pair[1]),
            "keyword table must be strictly ascending"
        );
        let entries = words
            .iter()
            .map(|&word| KeywordEntry { word, count: 0 })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Binary search over the sorted entries, byte-wise three-way comparison
    /// of the whole token. Half-open bounds halve until they cross.
    fn position(&self, token: &[u8]) -> Option<usize> {
        let mut low = 0;
        let mut high = self.entries.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match token.cmp(self.entries[mid].word.as_bytes()) {
                Ordering::Less => high = mid,
                Ordering::Greater => low = mid + 1,
                Ordering::Equal => return Some(mid),
            }
        }
        None
    }

    /// Looks up a token by exact byte equality.
    pub fn find(&self, token: &[u8]) -> Option<&KeywordEntry> {
        self.position(token).map(|i| &self.entries[i])
    }

    /// Looks up a token by exact byte equality, yielding the mutable entry.
    pub fn find_mut(&mut self, token: &[u8]) -> Option<&mut KeywordEntry> {
        self.position(token).map(|i| &mut self.entries[i])
    }

    /// Increments the matched entry's counter. Returns whether the token was
    /// a keyword; a miss leaves the table untouched.
    pub fn record(&mut self, token: &[u8]) -> bool {
        match self.find_mut(token) {
            Some(entry) => {
                entry.count += 1;
                true
            }
            None => false,
        }
    }
}
