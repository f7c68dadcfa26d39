//! A single physical line of ERV source, and its place in the tree of
//! nested lines.

/// Number of columns a tab expands to, and the number of leading spaces
/// making up one level of indentation.
pub const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-origin line number in the original source. Zero is reserved for
    /// the synthetic line standing in for an empty program.
    pub number: usize,
    /// The source line with tabs expanded.
    pub raw: String,
    pub indent: usize,
    pub children: Vec<Line>,
}

impl Line {
    pub fn new(source: &str, number: usize) -> Line {
        let raw = source.replace('\t', &" ".repeat(TAB_WIDTH));

        let count = raw
            .chars()
            .take_while(|c| *c == ' ')
            .count();

        Line {
            number,
            raw,
            indent: count / TAB_WIDTH,
            children: Vec::new(),
        }
    }

    /// The line used in place of a program with no content at all.
    pub fn empty() -> Line {
        Line::new("", 0)
    }

    /// The content of the line without surrounding whitespace.
    pub fn text(&self) -> &str {
        self.raw
            .trim()
    }

    pub fn is_blank(&self) -> bool {
        self.text()
            .is_empty()
    }
}
