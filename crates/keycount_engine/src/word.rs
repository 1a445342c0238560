use crate::source::{ByteSource, ScanError};

/// Longest token the scratch buffer will hold. A longer run is truncated
/// here; its unread tail re-enters the stream as the following token.
pub const MAX_WORD_LEN: usize = 99;

/// Extracts the next whitespace-delimited token from `source` into `word`,
/// storing at most `limit` bytes.
///
/// Returns the token's first byte so the caller can cheaply classify it, or
/// `None` once the source is exhausted before any token byte was captured.
/// A token cut short by end of source is still a token; only an empty
/// capture signals the end.
pub fn next_word<S: ByteSource>(
    source: &mut S,
    word: &mut Vec<u8>,
    limit: usize,
) -> Result<Option<u8>, ScanError> {
    debug_assert!(limit > 0);
    word.clear();

    let first = loop {
        match source.next_byte()? {
            Some(byte) if byte.is_ascii_whitespace() => continue,
            Some(byte) => break byte,
            None => return Ok(None),
        }
    };
    word.push(first);

    while word.len() < limit {
        match source.next_byte()? {
            // The delimiter is consumed but never stored.
            Some(byte) if byte.is_ascii_whitespace() => break,
            Some(byte) => word.push(byte),
            None => break,
        }
    }

    Ok(Some(first))
}
