use crate::constant::SUBCOMMAND_HINT;
use crate::model::Documentation;
use crate::parser::{ColumnRenderer, LeftWidth, MiddleWidth, PaddingWidth, TotalWidth};

const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// Everything needed to render the help message of one command level.
///
/// Produced when the help switch is encountered, or alongside a [`CliError`](crate::CliError) in a [`Failure`](crate::Failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpContext {
    program: String,
    description: Option<String>,
    entries: Vec<Documentation>,
    subcommands: Vec<(String, String)>,
    screen_width: usize,
}

impl HelpContext {
    pub(crate) fn new(
        program: impl Into<String>,
        description: Option<String>,
        entries: Vec<Documentation>,
        subcommands: Vec<(String, String)>,
        screen_width: usize,
    ) -> Self {
        Self {
            program: program.into(),
            description,
            entries,
            subcommands,
            screen_width,
        }
    }

    /// The program name of this level, ex: `git remote`.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The documentation of every field at this level, in display order.
    pub fn entries(&self) -> &[Documentation] {
        &self.entries
    }

    /// The names and descriptions of this level's subcommands.
    pub fn subcommands(&self) -> &[(String, String)] {
        &self.subcommands
    }

    /// Render the help message.
    ///
    /// The description column is word-wrapped to fit the screen width.
    pub fn render(&self) -> String {
        let (options, positionals): (Vec<&Documentation>, Vec<&Documentation>) = self
            .entries
            .iter()
            .partition(|entry| !entry.is_positional());
        let rows = self
            .entries
            .iter()
            .map(|entry| (entry.prefix.as_str(), entry.description.as_str()))
            .chain(
                self.subcommands
                    .iter()
                    .map(|(name, description)| (name.as_str(), description.as_str())),
            );
        let mut left_column_width = 1;
        let mut middle_column_width = 2;

        for (left, middle) in rows {
            left_column_width = std::cmp::max(left_column_width, left.chars().count());
            middle_column_width =
                std::cmp::max(middle_column_width, middle.chars().count() + MAIN_INDENT);
        }

        let column_renderer = ColumnRenderer::guided(
            PaddingWidth::new(PADDING_WIDTH).expect("internal error - padding must be positive"),
            LeftWidth::new(left_column_width).expect("internal error - left must be positive"),
            MiddleWidth::new(middle_column_width)
                .expect("internal error - middle must be at least 2"),
            TotalWidth(self.screen_width),
        );
        let mut lines = vec![self.usage()];

        if let Some(description) = &self.description {
            lines.push(String::default());
            lines.push(description.clone());
        }

        let mut section = |title: &str, rows: Vec<(&str, &str)>| {
            if !rows.is_empty() {
                lines.push(String::default());
                lines.push(title.to_string());

                for (left, middle) in rows {
                    lines.extend(column_renderer.render(MAIN_INDENT, left, middle));
                }
            }
        };

        section(
            "Non-Positional Arguments:",
            options
                .iter()
                .map(|entry| (entry.prefix.as_str(), entry.description.as_str()))
                .collect(),
        );
        section(
            "Positional Arguments:",
            positionals
                .iter()
                .map(|entry| (entry.prefix.as_str(), entry.description.as_str()))
                .collect(),
        );
        section(
            "Subcommands:",
            self.subcommands
                .iter()
                .map(|(name, description)| (name.as_str(), description.as_str()))
                .collect(),
        );

        lines.join("\n")
    }

    fn usage(&self) -> String {
        let mut summary = vec![format!("usage: {}", self.program)];
        summary.extend(self.entries.iter().map(|entry| entry.hint.clone()));

        if !self.subcommands.is_empty() {
            summary.push(SUBCOMMAND_HINT.to_string());
        }

        summary.join(" ")
    }
}

/// A caret diagnostic: the input arguments, with the offending one underlined.
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::tokenize;
///
/// let error = tokenize(&["-a", "-b-", "c"]).unwrap_err();
///
/// assert_eq!(error.context().to_string(), "-a -b- c\n   ^^^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    index: usize,
    args: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(index: usize, args: &[String]) -> Self {
        Self {
            index,
            args: args.to_vec(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // One space between each argument.
        let offset = self.args[..self.index]
            .iter()
            .map(|arg| arg.chars().count())
            .sum::<usize>()
            + self.index;
        let width = std::cmp::max(
            1,
            self.args
                .get(self.index)
                .map_or(0, |arg| arg.chars().count()),
        );

        write!(
            f,
            "{}\n{:offset$}{}",
            self.args.join(" "),
            "",
            "^".repeat(width)
        )
    }
}
