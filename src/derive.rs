//! Derive Api for `argot` values.
//!
//! ### Getting Started
//! Instrument a struct `S` with `#[derive(FromValues)]` to convert the [`Values`](../struct.Values.html) record of a parse into `S`.
//! Each struct field is taken from the record entry of the same name, and must have the same type as the field's output.
//! A conversion failure is reported as a [`ValueError`](../enum.ValueError.html).
//!
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! ### Field Configuration
//! * `#[argot(field = "name")]` takes the struct field from the record entry `name`.
//! * `#[argot(default)]` uses `Default::default()` when the record has no such entry.
//! This is useful when a struct collects the values of several subcommands, only some of which are present.
//!
//! ```
//! use argot::derive::FromValues;
//! use argot::{CommandParser, Flag, Positional, ValueError};
//!
//! #[derive(Debug, PartialEq, FromValues)]
//! struct Parameters {
//!     #[argot(field = "dry-run")]
//!     dry_run: bool,
//!     file: String,
//!     #[argot(default)]
//!     depth: u32,
//! }
//!
//! let parser = CommandParser::new("program")
//!     .add("dry-run", Flag::new().short('n'))
//!     .add("file", Positional::<String>::new("FILE"))
//!     .action(Parameters::from_values)
//!     .build();
//! let parameters: Result<Parameters, ValueError> = parser.parse_tokens(&["-n", "main.rs"]).unwrap();
//!
//! assert_eq!(
//!     parameters.unwrap(),
//!     Parameters {
//!         dry_run: true,
//!         file: "main.rs".to_string(),
//!         depth: 0,
//!     }
//! );
//! ```
pub use argot_builder::FromValues;
pub use argot_derive::FromValues;
