//! Word-wrapping of free-form message text.

/// Formats message text into indented lines.
pub trait TextFormatter {
    /// Formats `text`, prefixing every output line with `indent`.
    fn format(&self, text: &str, indent: &str) -> String;
}

/// Paragraph-oriented word wrapper.
///
/// Input lines that begin with a space are treated as preformatted and copied
/// verbatim behind the indent. All other lines are paragraphs, wrapped at
/// [`width`](Self::width) columns with two spaces after a sentence-ending
/// period. A line break in the input separates paragraphs with a blank line; an
/// empty input line prints as an indented blank paragraph.
#[derive(Clone, Copy, Debug)]
pub struct DocumentationFormatter {
    width: usize,
}

impl DocumentationFormatter {
    /// The default text width, indent included.
    pub const DEFAULT_WIDTH: usize = 77;

    /// Creates a formatter with the default width.
    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
        }
    }

    /// Creates a formatter wrapping at `width` columns.
    pub fn with_width(width: usize) -> Self {
        Self { width }
    }

    /// Returns the text width, indent included.
    pub fn width(&self) -> usize {
        self.width
    }

    fn print_preformatted(&self, out: &mut String, text: &str, indent: &str) {
        let mut at_line_start = true;
        for ch in text.chars() {
            if at_line_start && ch != '\n' {
                out.push_str(indent);
                at_line_start = false;
            }
            out.push(ch);
            if ch == '\n' {
                at_line_start = true;
            }
        }
        out.push('\n');
    }

    fn print_paragraph(&self, out: &mut String, text: &str, indent: &str) {
        out.push_str(indent);
        self.print_column(out, text, indent);
        out.push('\n');
    }

    fn print_column(&self, out: &mut String, text: &str, indent: &str) {
        // At least two columns so an empty word always fits after a sentence.
        let width = self.width.saturating_sub(indent.chars().count()).max(2);
        let mut column = 0;
        let mut new_sentence = false;
        let mut first_line = true;

        let mut rest = text;
        while !rest.is_empty() {
            let end = rest.find([' ', '\n']).unwrap_or(rest.len());
            let word = &rest[..end];
            let mut after = &rest[end..];
            let word_len = word.chars().count();

            if word_len + column + usize::from(new_sentence) < width {
                if !word.is_empty() {
                    if column > 0 {
                        if new_sentence {
                            out.push_str("  ");
                            column += 2;
                        } else {
                            out.push(' ');
                            column += 1;
                        }
                    } else if !first_line {
                        out.push_str(indent);
                    }
                    out.push_str(word);
                    new_sentence = word.ends_with('.');
                }
                if let Some(tail) = after.strip_prefix('\n') {
                    out.push('\n');
                    after = tail;
                    column = 0;
                    first_line = false;
                } else {
                    column += word_len;
                }
            } else {
                out.push('\n');
                first_line = false;
                if word.is_empty() {
                    column = 0;
                } else {
                    out.push_str(indent);
                    out.push_str(word);
                    column = word_len;
                    new_sentence = word.ends_with('.');
                }
            }

            rest = after.trim_start_matches(' ');
        }
    }
}

impl Default for DocumentationFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits off the first line, returning it, the remainder, and whether a newline ended it.
fn split_line(text: &str) -> (&str, &str, bool) {
    match text.find('\n') {
        Some(pos) => (&text[..pos], &text[pos + 1..], true),
        None => (text, "", false),
    }
}

impl TextFormatter for DocumentationFormatter {
    fn format(&self, text: &str, indent: &str) -> String {
        let mut out = String::new();
        let mut rest = text;
        while !rest.is_empty() {
            let mut preformatted = String::new();
            while rest.starts_with(' ') {
                let (line, tail, ended) = split_line(rest);
                preformatted.push_str(line);
                if ended {
                    preformatted.push('\n');
                }
                rest = tail;
            }
            if !preformatted.is_empty() {
                self.print_preformatted(&mut out, &preformatted, indent);
            }

            // An empty line still ends in a newline and prints as a blank paragraph.
            let (line, tail, ended) = split_line(rest);
            rest = tail;
            let mut paragraph = line.to_string();
            if ended {
                paragraph.push('\n');
            }
            if !paragraph.is_empty() {
                self.print_paragraph(&mut out, &paragraph, indent);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(text: &str) -> String {
        DocumentationFormatter::new().format(text, "  ")
    }

    #[test]
    fn empty_text() {
        assert_eq!(format(""), "");
    }

    #[test]
    fn single_line() {
        assert_eq!(format("X is deprecated"), "  X is deprecated\n");
    }

    #[test]
    fn collapses_inner_spaces() {
        assert_eq!(format("a   b"), "  a b\n");
    }

    #[test]
    fn sentences_get_two_spaces() {
        assert_eq!(format("First. Second"), "  First.  Second\n");
    }

    #[test]
    fn paragraphs_separated_by_blank_line() {
        assert_eq!(format("first\nsecond"), "  first\n\n  second\n");
    }

    #[test]
    fn blank_input_line_becomes_blank_paragraph() {
        assert_eq!(format("first\n\nsecond"), "  first\n\n  \n\n  second\n");
    }

    #[test]
    fn leading_blank_line() {
        assert_eq!(format("\nonly"), "  \n\n  only\n");
    }

    #[test]
    fn preformatted_lines_kept_verbatim() {
        assert_eq!(
            format("Example:\n  set(A   1)\n  set(B 2)\nDone"),
            "  Example:\n\n    set(A   1)\n    set(B 2)\n\n  Done\n"
        );
    }

    #[test]
    fn wraps_long_lines() {
        let formatter = DocumentationFormatter::with_width(20);
        assert_eq!(
            formatter.format("one two three four five six", "  "),
            "  one two three four\n  five six\n"
        );
    }

    #[test]
    fn overlong_word_gets_own_line() {
        let formatter = DocumentationFormatter::with_width(10);
        assert_eq!(
            formatter.format("a abcdefghijkl b", "  "),
            "  a\n  abcdefghijkl\n  b\n"
        );
    }

    #[test]
    fn tiny_width_terminates() {
        let formatter = DocumentationFormatter::with_width(0);
        let out = formatter.format("a. b\nc", "    ");
        assert!(out.contains('a'));
        assert!(out.contains('c'));
    }
}
