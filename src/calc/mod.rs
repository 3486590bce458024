//! Calculation requests and their dispatch.
//!
//! A request names an operation and carries its inputs:
//!
//! ```json
//! { "operation": "infix_to_postfix", "inputs": { "expression": "A+B*C" } }
//! ```
//!
//! and is answered with `{ "success": true, "result": "ABC*+" }`, or with
//! `{ "success": false, "message": "..." }` when it cannot be carried out.

pub mod formulas;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{CalcError, CalcResult},
    syntax::{infix_to_postfix, infix_to_prefix},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "inputs", rename_all = "snake_case")]
pub enum Operation {
    InfixToPostfix {
        expression: String,
    },
    InfixToPrefix {
        expression: String,
    },
    SimpleInterest {
        principal: f64,
        rate: f64,
        time: f64,
    },
    CompoundInterest {
        principal: f64,
        rate: f64,
        time: f64,
        frequency: u32,
    },
    CircleArea {
        radius: f64,
    },
    RectangleArea {
        length: f64,
        width: f64,
    },
    Factorial {
        number: u32,
    },
    Average {
        numbers: Vec<f64>,
    },
}

impl Operation {
    /// The tag the operation is requested under.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::InfixToPostfix { .. } => "infix_to_postfix",
            Operation::InfixToPrefix { .. } => "infix_to_prefix",
            Operation::SimpleInterest { .. } => "simple_interest",
            Operation::CompoundInterest { .. } => "compound_interest",
            Operation::CircleArea { .. } => "circle_area",
            Operation::RectangleArea { .. } => "rectangle_area",
            Operation::Factorial { .. } => "factorial",
            Operation::Average { .. } => "average",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Text(String),
    Integer(u128),
    Number(f64),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Text(s) => f.write_str(s),
            Outcome::Integer(n) => write!(f, "{}", n),
            Outcome::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Response {
    pub fn success(result: Outcome) -> Self {
        Self {
            success: true,
            result: Some(result),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            message: Some(message.into()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<CalcResult<Outcome>> for Response {
    fn from(outcome: CalcResult<Outcome>) -> Self {
        match outcome {
            Ok(result) => Response::success(result),
            Err(err) => Response::failure(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    separator: String,
}

impl Calculator {
    pub fn new(config: &Config) -> Self {
        Self {
            separator: config.separator.clone(),
        }
    }

    pub fn evaluate(&self, operation: &Operation) -> CalcResult<Outcome> {
        use formulas::*;

        Ok(match operation {
            Operation::InfixToPostfix { expression } => {
                Outcome::Text(infix_to_postfix(expression)?.join(&self.separator))
            }
            Operation::InfixToPrefix { expression } => {
                Outcome::Text(infix_to_prefix(expression)?.join(&self.separator))
            }
            Operation::SimpleInterest {
                principal,
                rate,
                time,
            } => Outcome::Number(simple_interest(*principal, *rate, *time)?),
            Operation::CompoundInterest {
                principal,
                rate,
                time,
                frequency,
            } => Outcome::Number(compound_interest(*principal, *rate, *time, *frequency)?),
            Operation::CircleArea { radius } => Outcome::Number(circle_area(*radius)?),
            Operation::RectangleArea { length, width } => {
                Outcome::Number(rectangle_area(*length, *width)?)
            }
            Operation::Factorial { number } => Outcome::Integer(factorial(*number)?),
            Operation::Average { numbers } => Outcome::Number(average(numbers)?),
        })
    }

    pub fn dispatch(&self, operation: &Operation) -> Response {
        let outcome = self.evaluate(operation);
        match &outcome {
            Ok(result) => {
                tracing::info!(operation = operation.name(), %result, "calculation succeeded")
            }
            Err(err) => tracing::warn!(operation = operation.name(), %err, "calculation failed"),
        }
        outcome.into()
    }

    /// Parses a JSON request and dispatches it. Requests that do not parse fail like any other.
    pub fn handle(&self, request: &str) -> Response {
        match serde_json::from_str::<Operation>(request) {
            Ok(operation) => self.dispatch(&operation),
            Err(err) => {
                let err = CalcError::from(err);
                tracing::warn!(%err, "rejected calculation request");
                Response::failure(err.to_string())
            }
        }
    }
}

pub fn dispatch(operation: &Operation) -> Response {
    Calculator::default().dispatch(operation)
}

pub fn handle(request: &str) -> Response {
    Calculator::default().handle(request)
}
