//! Command-line front end for uuidgen.
//!
//! Batch mode turns one set of flags into one batch; interactive mode walks
//! the user through the same choices on the console.

pub mod batch;
pub mod error;
pub mod interactive;
pub mod interrupt;
pub mod output;

pub use batch::{BatchOutcome, BatchRequest};
pub use error::CliError;
pub use interactive::{ExitReason, Session};
pub use interrupt::Interrupt;
