//! Keycount engine: byte sources, the word tokenizer, and the scan loop.
mod scan;
mod source;
mod word;

pub use scan::{scan, ScanStats};
pub use source::{
    console, open_file, ByteSource, ConsoleSource, FileSource, ReaderSource, ScanError,
};
pub use word::{next_word, MAX_WORD_LEN};
