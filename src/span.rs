/// A line/column position in the source text.
///
/// Lines start at 1, columns at 0. A newline moves to the next line
/// and resets the column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open source range attached to tokens and errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub begin_line: usize,
    pub begin_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Span {
    /// Build a span from two positions. `begin` must not come after `end`.
    #[must_use]
    pub const fn new(begin: Position, end: Position) -> Self {
        Self {
            begin_line: begin.line,
            begin_column: begin.column,
            end_line: end.line,
            end_column: end.column,
        }
    }

    /// Empty span sitting at a single position.
    #[must_use]
    pub const fn at(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    #[must_use]
    pub const fn begin(&self) -> Position {
        Position::new(self.begin_line, self.begin_column)
    }

    #[must_use]
    pub const fn end(&self) -> Position {
        Position::new(self.end_line, self.end_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        let span = Span::default();
        assert_eq!(span.begin(), Position::new(0, 0));
        assert_eq!(span.end(), Position::new(0, 0));
    }

    #[test]
    fn positions_order_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }
}
