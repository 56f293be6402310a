use crate::constant::UNPARSABLE_TOKEN;
use crate::model::Token;
use crate::parser::TokenizeError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Lex the raw command line arguments into tokens.
///
/// * `--` switches into positional-only mode and produces no token.
/// * `-abc=x` produces `-a`, `-b`, `-c=x`.
/// * `--name` and `--name=value` produce a single long token.
/// * Anything not starting with `-` (or appearing after `--`) is positional.
///
/// Any other argument starting with `-` (including a bare `-`) is unparsable.
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{tokenize, Token};
///
/// let tokens = tokenize(&["-ab=1", "--cd", "x", "--", "-e"]).unwrap();
///
/// assert_eq!(
///     tokens,
///     vec![
///         Token::short('a'),
///         Token::short('b').with_argument("1"),
///         Token::long("cd"),
///         Token::positional("x"),
///         Token::positional("-e"),
///     ]
/// );
/// ```
pub fn tokenize(args: &[impl AsRef<str>]) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::default();
    let mut positional_only = false;

    for (index, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();

        if positional_only || !arg.starts_with('-') {
            tokens.push(Token::Positional(arg.to_string()));
            continue;
        }

        if arg == "--" {
            positional_only = true;
            continue;
        }

        if let Some(rest) = arg.strip_prefix("--") {
            let (name, argument) = split_argument(rest);

            if is_long_name(name) {
                tokens.push(Token::Long {
                    name: name.to_string(),
                    argument,
                });
                continue;
            }
        } else {
            let (cluster, argument) = split_argument(&arg[1..]);

            if !cluster.is_empty() && cluster.chars().all(is_short_name) {
                let last = cluster.chars().count() - 1;

                for (i, name) in cluster.chars().enumerate() {
                    tokens.push(Token::Short {
                        name,
                        argument: if i == last { argument.clone() } else { None },
                    });
                }

                continue;
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Unparsable argument at {index}: {arg}");
        }

        return Err(TokenizeError::new(
            UNPARSABLE_TOKEN,
            index,
            args.iter().map(|a| a.as_ref().to_string()).collect(),
        ));
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Tokenized: {tokens:?}");
    }

    Ok(tokens)
}

// Only the first '=' splits; the remainder is the argument verbatim.
fn split_argument(value: &str) -> (&str, Option<String>) {
    match value.split_once('=') {
        Some((name, argument)) => (name, Some(argument.to_string())),
        None => (value, None),
    }
}

pub(crate) fn is_short_name(name: char) -> bool {
    name.is_ascii_alphanumeric()
}

pub(crate) fn is_long_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()))
}
