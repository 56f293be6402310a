pub(crate) const HELP_FIELD: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_LONG: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "Prints help and quits";
pub(crate) const SUBCOMMAND_HINT: &str = "<SUBCOMMAND>";
pub(crate) const UNPARSABLE_TOKEN: &str = "Unparsable token";
pub(crate) const DEFAULT_SCREEN_WIDTH: usize = 100;
