/// One lexical unit of the command line.
///
/// Produced by [`tokenize`](crate::tokenize).
/// A short cluster such as `-abc=x` becomes three [`Token::Short`]s, with the inline argument only on the last.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `-s` or `-s=value`.
    Short {
        /// The single character name.
        name: char,
        /// The `=value` suffix, when present.
        argument: Option<String>,
    },
    /// `--long` or `--long=value`.
    Long {
        /// The name, without the leading `--`.
        name: String,
        /// The `=value` suffix, when present.
        argument: Option<String>,
    },
    /// Anything else, including every argument after `--`.
    Positional(String),
}

impl Token {
    /// Create a short token without an inline argument.
    pub fn short(name: char) -> Self {
        Token::Short {
            name,
            argument: None,
        }
    }

    /// Create a long token without an inline argument.
    pub fn long(name: impl Into<String>) -> Self {
        Token::Long {
            name: name.into(),
            argument: None,
        }
    }

    /// Create a positional token.
    pub fn positional(value: impl Into<String>) -> Self {
        Token::Positional(value.into())
    }

    /// Attach an inline argument (`=value`) to a short or long token.
    /// Positional tokens are returned unchanged.
    pub fn with_argument(self, value: impl Into<String>) -> Self {
        match self {
            Token::Short { name, .. } => Token::Short {
                name,
                argument: Some(value.into()),
            },
            Token::Long { name, .. } => Token::Long {
                name,
                argument: Some(value.into()),
            },
            positional => positional,
        }
    }

    /// The inline argument of a short or long token.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Token::Short { argument, .. } | Token::Long { argument, .. } => argument.as_deref(),
            Token::Positional(_) => None,
        }
    }

    /// Whether this token names the option `short`/`long`, regardless of any inline argument.
    pub fn matches(&self, short: Option<char>, long: Option<&str>) -> bool {
        match self {
            Token::Short { name, .. } => Some(*name) == short,
            Token::Long { name, .. } => Some(name.as_str()) == long,
            Token::Positional(_) => false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Short { name, .. } => write!(f, "-{name}"),
            Token::Long { name, .. } => write!(f, "--{name}"),
            Token::Positional(value) => write!(f, "'{value}'"),
        }
    }
}

/// The completion candidates offered by a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Candidates, in order.
    pub suggestions: Vec<String>,
    /// When `true`, this field alone knows the valid completions right now.
    pub overrides: bool,
}

impl Completion {
    /// Candidates to be merged with those of sibling fields.
    pub fn new(suggestions: Vec<String>) -> Self {
        Self {
            suggestions,
            overrides: false,
        }
    }

    /// Candidates that replace those of every non-overriding sibling field.
    pub fn overriding(suggestions: Vec<String>) -> Self {
        Self {
            suggestions,
            overrides: true,
        }
    }

    /// No candidates.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Documentation metadata for a field, used for help rendering and name validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
    /// The usage hint, ex: `[-o OUT]`.
    pub hint: String,
    /// The left column of the help entry, ex: `-o, --out OUT`.
    pub prefix: String,
    /// The description of the field.
    pub description: String,
    /// The short name (non-positional fields only).
    pub short: Option<char>,
    /// The long name (non-positional fields only).
    pub long: Option<String>,
}

impl Documentation {
    /// Whether this documents a positional field.
    pub fn is_positional(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Token::short('f'), "-f")]
    #[case(Token::short('f').with_argument("x"), "-f")]
    #[case(Token::long("flag"), "--flag")]
    #[case(Token::long("flag").with_argument("x"), "--flag")]
    #[case(Token::positional("value"), "'value'")]
    #[case(Token::positional("--flag"), "'--flag'")]
    fn display(#[case] token: Token, #[case] expected: &str) {
        assert_eq!(token.to_string(), expected);
    }

    #[rstest]
    #[case(Token::short('f'), true)]
    #[case(Token::short('f').with_argument("x"), true)]
    #[case(Token::short('g'), false)]
    #[case(Token::long("flag"), true)]
    #[case(Token::long("flag").with_argument(""), true)]
    #[case(Token::long("flags"), false)]
    #[case(Token::positional("f"), false)]
    #[case(Token::positional("flag"), false)]
    fn matches(#[case] token: Token, #[case] expected: bool) {
        assert_eq!(token.matches(Some('f'), Some("flag")), expected);
    }

    #[test]
    fn matches_absent_names() {
        assert!(!Token::short('f').matches(None, Some("flag")));
        assert!(!Token::long("flag").matches(Some('f'), None));
    }

    #[test]
    fn positional_ignores_argument() {
        assert_eq!(
            Token::positional("abc").with_argument("x"),
            Token::positional("abc")
        );
        assert_eq!(Token::positional("abc").argument(), None);
    }
}
