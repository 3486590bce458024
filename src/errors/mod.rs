pub mod calc_err;
pub mod cli_err;
pub mod err;

pub use calc_err::{CalcError, CalcResult};
pub use cli_err::{CliError, CliResult};
pub use err::{ConvertResult, Error, ErrorInfo};
