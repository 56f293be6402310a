use crate::parser::{CliError, ErrorContext};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug)]
pub(crate) struct PaddingWidth(usize);

impl PaddingWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // padding must be at least 1
        if width >= 1 {
            Ok(PaddingWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // left must be at least 1
        if width >= 1 {
            Ok(LeftWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub(crate) struct MiddleWidth(usize);

impl MiddleWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // middle must be at least 2 (so we can hyphenate)
        if width >= 2 {
            Ok(MiddleWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub(crate) struct TotalWidth(pub usize);

/// Lays out a two column table: a fixed width left column, and a word-wrapped middle column.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: PaddingWidth,
    left: LeftWidth,
    middle: MiddleWidth,
}

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

impl ColumnRenderer {
    /// Produce a renderer based off the provided widths.
    /// This renderer will use a heuristic to chose the middle width.
    pub(crate) fn guided(
        padding: PaddingWidth,
        left: LeftWidth,
        middle: MiddleWidth,
        total_width: TotalWidth,
    ) -> Self {
        // We always have a left and a middle (and a padding between them).
        let non_middle: usize = left.0 + padding.0;
        let target_total_width = (total_width.0 as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_middle = std::cmp::max(middle.0, MINIMUM_MIDDLE_WIDTH);

        if guided_middle + non_middle <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} and middle fit within the target total {target_total_width}.  Selecting middle: {guided_middle}.");
            }

            Self::new(padding, left, MiddleWidth(guided_middle))
        } else if non_middle < total_width.0 {
            let calculated_middle =
                std::cmp::max(total_width.0 - non_middle, MINIMUM_MIDDLE_WIDTH);

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} fit within the total {}.  Selecting middle: {calculated_middle}.", total_width.0);
            }

            Self::new(padding, left, MiddleWidth(calculated_middle))
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} do not fit within the total {}.  Selecting middle: {MINIMUM_MIDDLE_WIDTH}.", total_width.0);
            }

            Self::new(padding, left, MiddleWidth(MINIMUM_MIDDLE_WIDTH))
        }
    }

    /// Produce a renderer based off the provided widths.
    pub(crate) fn new(padding: PaddingWidth, left: LeftWidth, middle: MiddleWidth) -> Self {
        Self {
            padding,
            left,
            middle,
        }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: &str) -> Vec<String> {
        let padding = self.padding.0;
        let padding = format!("{:padding$}", "");
        let left_column_width = self.left.0;
        assert!(
            left.chars().count() <= left_column_width,
            "internal error - left column must fit its width"
        );
        let middle_column_width = std::cmp::max(2, self.middle.0.saturating_sub(indent));
        let mut out = Vec::default();

        for (i, part) in chunk(middle, middle_column_width).iter().enumerate() {
            let left = if i == 0 { left } else { "" };
            out.push(format!(
                "{:indent$}{:left_column_width$}{padding}{part}",
                "", left
            ));
        }

        if out.is_empty() {
            out.push(
                format!("{:indent$}{:left_column_width$}", "", left)
                    .trim_end()
                    .to_string(),
            );
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = String::default();
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Splits a word wider than the column into hyphenated pieces, leaving the tail in `current`.
fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;

    while characters.len() - left > width {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// The output boundary of a [`GeneralParser`](crate::GeneralParser).
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: CliError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: CliError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn renderer(left: usize, middle: usize) -> ColumnRenderer {
        ColumnRenderer::new(
            PaddingWidth::new(4).unwrap(),
            LeftWidth::new(left).unwrap(),
            MiddleWidth::new(middle).unwrap(),
        )
    }

    #[test]
    fn widths_invalid() {
        assert_matches!(PaddingWidth::new(0), Err(()));
        assert_matches!(LeftWidth::new(0), Err(()));
        assert_matches!(MiddleWidth::new(1), Err(()));
        assert_matches!(MiddleWidth::new(2), Ok(_));
    }

    #[test]
    fn column_renderer_simple() {
        let cr = renderer(5, 23);

        assert_eq!(
            cr.render(0, "abc", "something"),
            vec!["abc      something".to_string()]
        );
        assert_eq!(
            cr.render(0, "abc", "  something  "),
            vec!["abc      something".to_string()]
        );
        assert_eq!(
            cr.render(0, "abc12", "something pieces full"),
            vec!["abc12    something pieces full".to_string()]
        );
        assert_eq!(
            cr.render(0, "abc", "something pieces full more stuff"),
            vec![
                "abc      something pieces full".to_string(),
                "         more stuff".to_string(),
            ]
        );
        assert_eq!(
            cr.render(0, "abc", "something pieces fullest more stuff extra     "),
            vec![
                "abc      something pieces".to_string(),
                "         fullest more stuff".to_string(),
                "         extra".to_string(),
            ]
        );
    }

    #[test]
    fn column_renderer_middle_overflow() {
        let cr = renderer(5, 23);

        assert_eq!(
            cr.render(0, "abc", "somethingxpiecesxfuller"),
            vec!["abc      somethingxpiecesxfuller".to_string()]
        );
        assert_eq!(
            cr.render(0, "abc", "somethingxpiecesxfullerandthenwecontinueforalongtime"),
            vec![
                "abc      somethingxpiecesxfulle-".to_string(),
                "         randthenwecontinuefora-".to_string(),
                "         longtime".to_string(),
            ]
        );
        assert_eq!(
            cr.render(0, "abc", "something pieces fullerandthenwecontinueforalongtime"),
            vec![
                "abc      something pieces".to_string(),
                "         fullerandthenwecontinu-".to_string(),
                "         eforalongtime".to_string(),
            ]
        );
    }

    #[test]
    fn column_renderer_multibyte() {
        let cr = renderer(5, 4);

        assert_eq!(
            cr.render(0, "é", "ééééé ü"),
            vec![
                "é        ééé-".to_string(),
                "         éé ü".to_string(),
            ]
        );
    }

    #[test]
    fn column_renderer_middle_empty() {
        let cr = renderer(5, 8);

        assert_eq!(cr.render(0, "abc", ""), vec!["abc".to_string()]);
        assert_eq!(cr.render(1, "abc", "   "), vec![" abc".to_string()]);
    }

    #[test]
    fn column_renderer_indent() {
        let cr = renderer(5, 23);

        assert_eq!(
            cr.render(1, "abc", "something pieces full"),
            vec![" abc      something pieces full".to_string()]
        );
        assert_eq!(
            cr.render(3, "abc", "something pieces full"),
            vec![
                "   abc      something pieces".to_string(),
                "            full".to_string(),
            ]
        );
    }

    #[test]
    #[should_panic]
    fn column_renderer_left_overflow() {
        let cr = renderer(5, 23);
        cr.render(0, "abcdef", "something");
    }

    #[rstest]
    // Too small: the minimum middle is used.
    #[case(MINIMUM_MIDDLE_WIDTH + 10, 5, MINIMUM_MIDDLE_WIDTH)]
    #[case(MINIMUM_MIDDLE_WIDTH + 10, 15, MINIMUM_MIDDLE_WIDTH)]
    // Just right.
    #[case(MINIMUM_MIDDLE_WIDTH, 26, MINIMUM_MIDDLE_WIDTH)]
    #[case(MINIMUM_MIDDLE_WIDTH + 1, 27, MINIMUM_MIDDLE_WIDTH + 1)]
    #[case(MINIMUM_MIDDLE_WIDTH + 2, 27, MINIMUM_MIDDLE_WIDTH + 3)]
    // Plenty of room.
    #[case(MINIMUM_MIDDLE_WIDTH, 50, MINIMUM_MIDDLE_WIDTH)]
    #[case(MINIMUM_MIDDLE_WIDTH + 10, 50, MINIMUM_MIDDLE_WIDTH + 10)]
    #[case(2, 50, MINIMUM_MIDDLE_WIDTH)]
    fn column_renderer_guided(
        #[case] middle: usize,
        #[case] total: usize,
        #[case] expected: usize,
    ) {
        // Setup
        let padding = PaddingWidth::new(2).unwrap();
        let left = LeftWidth::new(5).unwrap();

        // Execute
        let cr = ColumnRenderer::guided(
            padding,
            left,
            MiddleWidth::new(middle).unwrap(),
            TotalWidth(total),
        );

        // Verify
        assert_eq!(cr.middle.0, expected);
    }
}
