//! Line-indexed view over a raw diff buffer.
//!
//! Lines are byte slices borrowed from the input. Each slice keeps its
//! original terminator (`\n` or `\r\n`); the last line may have none.
//! Nothing is decoded or normalized, so concatenating every line yields
//! the input exactly.

/// Random-access sequence of lines over a borrowed byte buffer.
#[derive(Debug, Clone)]
pub struct LineBuffer<'a> {
    data: &'a [u8],
    /// Start offset of each line. The end of line `i` is `starts[i + 1]`,
    /// or `data.len()` for the last line.
    starts: Vec<usize>,
}

impl<'a> LineBuffer<'a> {
    /// Index the lines of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        let mut starts = Vec::new();
        if !data.is_empty() {
            starts.push(0);
            for (offset, byte) in data.iter().enumerate() {
                if *byte == b'\n' && offset + 1 < data.len() {
                    starts.push(offset + 1);
                }
            }
        }

        Self { data, starts }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Whether the buffer has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Raw bytes of line `index`, terminator included.
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        let start = *self.starts.get(index)?;
        let end = self
            .starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.data.len());
        Some(&self.data[start..end])
    }

    /// Bytes of line `index` with the terminator stripped.
    ///
    /// Only for matching; never use this for content that ends up in a
    /// parsed record.
    pub fn content(&self, index: usize) -> Option<&'a [u8]> {
        self.get(index).map(strip_terminator)
    }

    /// 1-based line number for a 0-based index.
    pub fn line_number(index: usize) -> usize {
        index + 1
    }
}

/// Strip a trailing `\n` or `\r\n`.
pub fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
