use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("Error: Division by zero is undefined.")]
    DivisionByZero,

    #[error("Error: Invalid operation. Please enter one of +, -, *, /.")]
    InvalidOperation,

    #[error("Error: '{0}' is not a valid number.")]
    InvalidNumber(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" => Ok(Operation::Multiply),
            "/" => Ok(Operation::Divide),
            _ => Err(CalcError::InvalidOperation),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub rhs: f64,
    pub operation: Operation,
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {} {:?} = {:?}",
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.result
        )
    }
}

pub fn parse_number(text: &str) -> Result<f64, CalcError> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(text.to_string()))
}

pub fn calculate(lhs: f64, rhs: f64, operation: Operation) -> Result<Calculation, CalcError> {
    let result = match operation {
        Operation::Add => lhs + rhs,
        Operation::Subtract => lhs - rhs,
        Operation::Multiply => lhs * rhs,
        Operation::Divide if rhs == 0.0 => return Err(CalcError::DivisionByZero),
        Operation::Divide => lhs / rhs,
    };
    Ok(Calculation {
        lhs,
        rhs,
        operation,
        result,
    })
}

/// Parses the three raw inputs and produces the lines the user sees.
/// Errors become a single user-facing line; nothing propagates.
pub fn evaluate(lhs: &str, rhs: &str, operation: &str) -> Vec<String> {
    let parsed = parse_number(lhs).and_then(|a| Ok((a, parse_number(rhs)?)));
    let (a, b) = match parsed {
        Ok(numbers) => numbers,
        Err(e) => return vec![e.to_string()],
    };
    let operation = match operation.parse::<Operation>() {
        Ok(op) => op,
        Err(e) => return vec![e.to_string()],
    };

    let mut lines = vec![format!("You chose to make {}.", operation.name())];
    match calculate(a, b, operation) {
        Ok(calculation) => lines.push(calculation.to_string()),
        Err(e) => {
            log::debug!("calculation failed: {:?}", e);
            lines.push(e.to_string());
        }
    }
    lines
}

/// Prompts for both numbers and the operator, then prints the outcome.
pub fn run_interactive<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<()> {
    let mut answers = Vec::with_capacity(3);
    for prompt in [
        "Enter the first number: ",
        "Enter the second number: ",
        "Enter an operation (+, -, *, /): ",
    ] {
        write!(out, "{}", prompt)?;
        out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        answers.push(line.trim().to_string());
    }
    writeln!(out)?;

    for line in evaluate(&answers[0], &answers[1], &answers[2]) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
