//! `argot` is a composable, completion-aware command line parser for Rust.
//!
//! A Cli program in `argot` is a tree of commands.
//! Each level of the tree is a group of *fields*, followed by either a terminal *action* or a set of named *subcommands*.
//! Parsing walks the tree: every level consumes the tokens it recognizes, coerces them into typed values, and hands the rest to the selected subcommand.
//! The values of every level along the way are merged into one record for the terminal action.
//!
//! `argot` prioritizes the following design concerns:
//! * *Composable fields*:
//! A field is anything implementing [`TokenParser`](./prelude/trait.TokenParser.html).
//! The builtin fields cover the common cases, but nothing about them is special.
//! * *Typed values*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Fields convert via [`std::str::FromStr`], or via a custom reader.
//! * *Completion*:
//! The same command tree that parses the Cli also [suggests](GeneralParser::suggest) completions for it.
//! * *Nested subcommands*:
//! Subcommands nest to any depth, and the options of a level apply before its subcommand name.
//!
//! # Usage
//! This page includes a few demos on using `argot`.
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! ```console
//! $ summer -h
//! usage: summer [-h] [-v] [-s SCALE] ITEM*
//!
//! Sums some numbers.
//!
//! Non-Positional Arguments:
//!  -h, --help          Prints help and quits
//!  -v                  Show the items
//!  -s, --scale SCALE   Multiply the sum
//!
//! Positional Arguments:
//!  ITEM                The items to sum
//!
//! $ summer 1 2 3 -s 2
//! Sum: 12
//!
//! $ summer 1 blah
//! Parse error: cannot convert 'blah' to u32.
//! usage: summer [-h] [-v] [-s SCALE] ITEM*
//! <truncated>
//! ```
//!
//! # Builder Api
//! Configure `argot` by starting with a [`CommandParser`], and `add`ing named fields.
//! Each field name is the key of its value in the resulting [`Values`] record.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_flags.rs")]
//! ```
//!
//! ### Fields
//! * [`Flag`]: a boolean switch (ex: `--dry-run`).
//! * [`CountFlag`]: a switch counting its occurrences (ex: `-vvv`).
//! * [`Opt`]: an option taking exactly one argument, with an optional default (ex: `-t 3`).
//! * [`Optional`]: an `Option<T>` option (ex: `-s ,`).
//! * [`MultiOpt`]: a repeatable option collecting a `Vec<T>` (ex: `-x a -x b`).
//! * [`Positional`]: a single positional argument.
//! * [`MultiPositional`]: every remaining positional argument.
//!
//! Options accept their argument as the next token (`-t 3`, `--times 3`), or inline (`-t=3`, `--times=3`).
//! Short switches may be clustered (`-vv`).
//! A `--` token ends option parsing; everything after it is positional.
//!
//! ### Subcommands
//! Add a [`Command`] to any level via `subcommand`.
//! A level has either an action or subcommands, never both.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_sub_command.rs")]
//! ```
//!
//! ```console
//! $ remote -h
//! usage: remote [-h] [-v] <SUBCOMMAND>
//!
//! Manages a list of remotes.
//!
//! Non-Positional Arguments:
//!  -h, --help      Prints help and quits
//!  -v, --verbose   Explain what is being done
//!
//! Subcommands:
//!  add             Add a remote
//!  rename          Rename a remote
//!  show            Show remotes
//!
//! $ remote add -h
//! usage: remote add [-h] NAME URL
//!
//! Non-Positional Arguments:
//!  -h, --help   Prints help and quits
//!
//! Positional Arguments:
//!  NAME
//!  URL
//!
//! $ remote -v add origin https://example.com/origin.git
//! Adding remote 'origin'.
//! origin	https://example.com/origin.git
//!
//! $ remote bogus
//! Unknown subcommand: 'bogus'
//! usage: remote [-h] [-v] <SUBCOMMAND>
//! <truncated>
//! ```
//!
//! ### Completion
//! [`GeneralParser::suggest`] completes the final word of a command line, given the words before it.
//! Options suggest their names, subcommands their words, and an option awaiting its argument suggests via [`Opt::suggest_with`].
//!
//! ```no_run
#![doc = include_str!("../demos/demo_completion.rs")]
//! ```
//!
//! ```console
//! $ demo_completion ''
//! --quiet
//! --help
//! checkout
//! commit
//!
//! $ demo_completion checkout -b mai
//! main
//! maintenance
//! ```
//!
//! # Testing
//! Enable the `unit_test` feature to build a parser from any [`Command`] via `Command::build_parser`.
//! Use [`GeneralParser::execute`] to run the parser without printing or exiting.
//!
//! # Features
//! * `unit_test`: see above.
//! * `tracing_debug`: emit `tracing` debug logs for the parsing internals.
pub mod derive;

pub use argot_builder::*;
