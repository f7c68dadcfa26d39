//! Arrange source lines into a forest according to their indentation.

use tracing::debug;

use super::errors::ParsingError;
use super::line::Line;

// Follow the path of indices down from the top level to the list of lines
// that new lines at the current depth are appended to.
fn context<'a>(forest: &'a mut Vec<Line>, path: &[usize]) -> &'a mut Vec<Line> {
    let mut current = forest;
    for &i in path {
        current = &mut current[i].children;
    }
    current
}

/// Build the tree of lines for a program. Blank lines are skipped. A line
/// indented deeper than the line before it becomes that line's child; a
/// line indented with nothing to nest under is a structural error, after
/// which no further lines are read.
///
/// The returned forest is never empty: a program with no content yields a
/// single empty line numbered zero.
pub fn build(content: &str) -> (Vec<Line>, Vec<ParsingError>) {
    let mut forest = Vec::new();
    let mut errors = Vec::new();

    // invariant: path.len() == previous
    let mut path: Vec<usize> = Vec::new();
    let mut previous = 0;

    for (i, source) in content
        .lines()
        .enumerate()
    {
        let line = Line::new(source, i + 1);

        if line.is_blank() {
            continue;
        }

        if line.indent < previous {
            path.truncate(line.indent);
        } else if line.indent > previous {
            let siblings = context(&mut forest, &path);

            if line.indent > previous + 1 || siblings.is_empty() {
                debug!(line = line.number, "stopping at invalid indentation");
                errors.push(ParsingError::invalid_indentation(&line));
                siblings.push(line);
                break;
            }

            path.push(siblings.len() - 1);
        }

        previous = line.indent;
        context(&mut forest, &path).push(line);
    }

    if forest.is_empty() {
        forest.push(Line::empty());
    }

    (forest, errors)
}
