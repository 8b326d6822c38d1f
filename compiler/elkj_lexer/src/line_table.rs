//! Byte offset to line/column conversion for diagnostics.

/// Pre-computed line start offsets for `O(log L)` lookups.
///
/// Lines end at `\n`, at `\r\n`, or at a lone `\r`, matching where the
/// scanner ends a line comment.
///
/// ```
/// use elkj_lexer::LineOffsetTable;
///
/// let source = "{\n  id: n1\n}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 4), (2, 3));
/// assert_eq!(table.offset_to_line_col(source, 11), (3, 1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineOffsetTable {
    /// `offsets[i]` is the byte offset where line `i + 1` starts.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Scan `source` once for newlines.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "lexed documents are bounded by u32::MAX bytes"
    )]
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut offsets = vec![0u32];
        offsets.extend(
            memchr::memchr2_iter(b'\n', b'\r', bytes)
                .filter(|&i| bytes[i] == b'\n' || bytes.get(i + 1) != Some(&b'\n'))
                .map(|i| (i + 1) as u32),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing byte `offset`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the u32 document length"
    )]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        line_idx as u32 + 1
    }

    /// 1-based `(line, column)` of byte `offset`; columns count characters.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Byte offset where 1-based `line` starts, if the line exists.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        let idx = line.checked_sub(1)?;
        self.offsets.get(idx as usize).copied()
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
