//! Command line interface

use std::io::Read;

use clap::{Parser, Subcommand};

use crate::{
    calc::{Calculator, Operation, Response},
    config::{Config, OutputFormat},
    errors::{CalcError, CliError, CliResult},
};

#[derive(Parser, Debug)]
#[command(name = "stackcalc")]
#[command(author, version, about = "Converts infix expressions and runs calculator requests", long_about = None)]
pub struct Cli {
    /// Increase log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Separator placed between the tokens of a converted expression
    #[arg(long, env = "STACKCALC_SEPARATOR", default_value = "", global = true)]
    pub separator: String,

    /// Print a JSON response instead of the bare result
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an infix expression to postfix
    Postfix {
        expression: String,
    },
    /// Convert an infix expression to prefix
    Prefix {
        expression: String,
    },
    /// Run a JSON calculation request, read from stdin when omitted
    Calc {
        request: Option<String>,
    },
}

/// Runs one command, printing its result on stdout.
pub fn run(cli: &Cli, config: &Config, stdin: impl Read) -> CliResult<()> {
    let calculator = Calculator::new(config);
    match &cli.command {
        Commands::Postfix { expression } => {
            let operation = Operation::InfixToPostfix {
                expression: expression.clone(),
            };
            report(&calculator.dispatch(&operation), config.output)
        }
        Commands::Prefix { expression } => {
            let operation = Operation::InfixToPrefix {
                expression: expression.clone(),
            };
            report(&calculator.dispatch(&operation), config.output)
        }
        Commands::Calc { request } => {
            let request = match request {
                Some(request) => request.clone(),
                None => read_request(stdin)?,
            };
            report(&calculator.handle(&request), OutputFormat::Json)
        }
    }
}

fn read_request(mut stdin: impl Read) -> CliResult<String> {
    let mut request = String::new();
    stdin.read_to_string(&mut request)?;
    Ok(request)
}

fn report(response: &Response, output: OutputFormat) -> CliResult<()> {
    match output {
        OutputFormat::Json => println!("{}", response.to_json().map_err(CalcError::from)?),
        OutputFormat::Text => {
            if let Some(result) = &response.result {
                println!("{}", result);
            }
        }
    }
    if response.success {
        Ok(())
    } else {
        Err(CliError::Failed(response.message.clone().unwrap_or_default()))
    }
}
