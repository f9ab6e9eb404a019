//! Command-line interface.
//!
//! Flags are handled before any terminal setup:
//!
//! ```
//! use bizcard::cli::{parse_args, CliCommand};
//!
//! let args = vec!["bizcard".to_string(), "--preview".to_string()];
//! match parse_args(args.into_iter()).unwrap() {
//!     CliCommand::Run(options) => assert!(options.preview),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{version_line, VERSION};
