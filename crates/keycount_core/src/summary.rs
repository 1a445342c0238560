use std::fmt;

use crate::KeywordTable;

/// One rendered summary row: a non-zero count and its keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub count: u64,
    pub keyword: &'static str,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4} {}", self.count, self.keyword)
    }
}

/// Collects the non-zero counters in table order (which equals sorted
/// order). Zero-count entries are omitted; no aggregate line is produced.
pub fn summarize(table: &KeywordTable) -> Vec<SummaryLine> {
    table
        .entries()
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| SummaryLine {
            count: entry.count,
            keyword: entry.word,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_summarizes_to_nothing() {
        let table = KeywordTable::c_keywords();
        assert!(summarize(&table).is_empty());
    }

    #[test]
    fn lines_render_with_right_aligned_counts() {
        let line = SummaryLine {
            count: 3,
            keyword: "for",
        };
        assert_eq!(line.to_string(), "   3 for");

        let wide = SummaryLine {
            count: 12345,
            keyword: "int",
        };
        assert_eq!(wide.to_string(), "12345 int");
    }
}
