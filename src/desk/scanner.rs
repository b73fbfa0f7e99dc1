use std::collections::VecDeque;
use std::io::BufRead;
use crate::core::library::LibraryResult;

/// Splits terminal input into whitespace-delimited tokens, reading one more
/// line only when every token of the previous one has been consumed.
pub struct TokenScanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    // None once the input is exhausted.
    pub fn next_token(&mut self) -> LibraryResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // Undecodable bytes become U+FFFD instead of failing the read.
            let text = String::from_utf8_lossy(&line);
            self.pending.extend(text.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
