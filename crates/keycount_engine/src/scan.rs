use keycount_core::KeywordTable;

use crate::source::{ByteSource, ScanError};
use crate::word::{next_word, MAX_WORD_LEN};

/// Totals from one full pass over a source. These feed logging only; the
/// report is read from the table itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    pub words: u64,
    pub keyword_hits: u64,
}

/// Drives `source` to exhaustion one token at a time, counting keyword
/// occurrences into `table`.
///
/// Tokens are filtered to those starting with an ASCII letter before the
/// lookup is attempted; every table entry starts with one, so nothing else
/// could match anyway.
pub fn scan<S: ByteSource>(
    source: &mut S,
    table: &mut KeywordTable,
) -> Result<ScanStats, ScanError> {
    let mut word = Vec::with_capacity(MAX_WORD_LEN);
    let mut stats = ScanStats::default();

    while let Some(first) = next_word(source, &mut word, MAX_WORD_LEN)? {
        stats.words += 1;
        if first.is_ascii_alphabetic() && table.record(&word) {
            stats.keyword_hits += 1;
        }
    }

    count_logging::count_debug!(
        "scan done: {} words, {} keyword hits",
        stats.words,
        stats.keyword_hits
    );
    Ok(stats)
}
