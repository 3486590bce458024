//! Infix expression conversion and the calculator operations built around it.
//!
//! ```
//! use stackcalc::syntax::{infix_to_postfix, infix_to_prefix};
//!
//! assert_eq!(infix_to_postfix("A+B*C").unwrap().to_string(), "ABC*+");
//! assert_eq!(infix_to_prefix("(A+B)*C").unwrap().to_string(), "*+ABC");
//! ```

pub mod calc;
pub mod cli;
pub mod config;
pub mod errors;
pub mod source_pos;
pub mod syntax;

pub use calc::{dispatch, handle, Calculator, Operation, Outcome, Response};
pub use config::Config;
pub use errors::{CalcError, Error, ErrorInfo};
pub use syntax::{infix_to_postfix, infix_to_prefix, Notation};
