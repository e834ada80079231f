//! Snippet truncation functions.

/// Maximum width, in characters, of a snippet line or of its highlighted range.
const MAX_WIDTH: usize = 150;

/// Number of characters of context kept on each side when clipping.
const CONTEXT: usize = 35;

/// Separator spliced into a clipped highlight, also prepended to a clipped line start.
const GAP: &str = " ... ";

/// Marker appended to a line clipped short of its end.
const TAIL: &str = " ...";

/// Width of a highlight after clipping.
const CLIPPED: usize = 2 * CONTEXT + GAP.len();

/// A display snippet with its highlighted column range. Columns count characters into `text` and
/// satisfy `start_column <= end_column <= text.chars().count()`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snippet {
    pub text: String,
    pub start_column: usize,
    pub end_column: usize,
}

/// Shorten a source line and its highlighted range to at most a bounded display width, adjusting
/// the highlight columns so they remain valid within the shortened line. For a multi-line
/// highlight, `end_column` is ignored and the highlight extends to the end of the line. Lines and
/// ranges already within bounds pass through unchanged.
pub fn shorten(line: &str, start_column: usize, end_column: usize, multiline: bool) -> Snippet {
    let text: Vec<char> = line.chars().collect();
    let right = if multiline {
        text.len()
    } else {
        end_column.min(text.len())
    };
    let highlight = right.saturating_sub(start_column);

    let (text, highlight) = if highlight > MAX_WIDTH {
        clip_highlight(text, start_column, right)
    } else {
        (text, highlight)
    };
    let (text, start_column) = if text.len() > MAX_WIDTH {
        clip_line(text, start_column, highlight)
    } else {
        (text, start_column)
    };

    let width = text.len();
    Snippet {
        text: text.into_iter().collect(),
        start_column: start_column.min(width),
        end_column: (start_column + highlight).min(width),
    }
}

/// Clip an over-wide highlight ending at column `right`, keeping the line up to `CONTEXT`
/// characters past the start of the range and the final `CONTEXT` characters of the range, joined
/// by a separator. The clipped highlight is `CLIPPED` characters wide.
fn clip_highlight(text: Vec<char>, start_column: usize, right: usize) -> (Vec<char>, usize) {
    let left = (start_column + CONTEXT).min(text.len());
    let rest = right.saturating_sub(CONTEXT).max(left);
    let mut clipped = text[..left].to_vec();
    clipped.extend(GAP.chars());
    clipped.extend_from_slice(&text[rest..]);
    (clipped, CLIPPED)
}

/// Clip an over-wide line to a window of `CONTEXT` characters around its highlight, marking the
/// clipped ends and moving `start_column` to the window-relative position of the highlight.
fn clip_line(text: Vec<char>, start_column: usize, highlight: usize) -> (Vec<char>, usize) {
    let width = text.len();
    let from = start_column.saturating_sub(CONTEXT).min(width);
    let keep =
        start_column.min(CONTEXT) + (highlight + CONTEXT).min(width.saturating_sub(start_column));
    let to = (from + keep).min(width);

    let mut window = text[from..to].to_vec();
    if start_column + highlight + CONTEXT < width {
        window.extend(TAIL.chars());
    }
    if start_column > CONTEXT {
        let mut clipped: Vec<char> = GAP.chars().collect();
        clipped.append(&mut window);
        (clipped, CONTEXT + GAP.len())
    } else {
        (window, start_column)
    }
}
