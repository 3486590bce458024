pub mod lexer;

pub mod notation;

pub mod operators;

pub mod shunting_yard;

pub mod tokens;

pub use lexer::*;
pub use notation::*;
pub use shunting_yard::{infix_to_postfix, infix_to_prefix};
pub use tokens::*;
