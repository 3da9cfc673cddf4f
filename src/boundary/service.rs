//! The three exported operations and name-based dispatch over them.
//!
//! Validation happens before any computation; a rejected call returns the
//! error directly without building a result value.

use crate::common::error::{ArgumentTypeError, HelloError, HelloResult};

use super::domain::{Arguments, Value};

/// Text returned by `sayHello`.
pub const FIXED_GREETING: &str = "Hello from C++!";

/// Return the fixed greeting.
pub fn say_hello() -> String {
    FIXED_GREETING.to_string()
}

/// Build a personalised greeting from the first argument.
pub fn greet(args: &Arguments) -> HelloResult<String> {
    let name = args.text(0).ok_or(ArgumentTypeError::StringExpected)?;
    Ok(format!("Hello, {name}! Welcome to C++!"))
}

/// Sum the first two arguments as doubles.
pub fn add(args: &Arguments) -> HelloResult<f64> {
    if args.len() < 2 {
        return Err(ArgumentTypeError::TwoNumbersExpected.into());
    }

    match (args.number(0), args.number(1)) {
        (Some(a), Some(b)) => Ok(a + b),
        _ => Err(ArgumentTypeError::NumbersExpected.into()),
    }
}

/// Every operation the module exports.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    SayHello,
    Greet,
    Add,
}

impl Operation {
    /// Registration order.
    pub const ALL: [Operation; 3] = [Operation::SayHello, Operation::Greet, Operation::Add];

    /// Name the host sees on the module's exports.
    pub fn export_name(&self) -> &'static str {
        match self {
            Operation::SayHello => "sayHello",
            Operation::Greet => "greet",
            Operation::Add => "add",
        }
    }

    pub fn from_export_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.export_name() == name)
    }

    /// Declared parameter count. Extra arguments are ignored.
    pub fn arity(&self) -> usize {
        match self {
            Operation::SayHello => 0,
            Operation::Greet => 1,
            Operation::Add => 2,
        }
    }

    /// Run the operation against already-marshaled arguments.
    pub fn invoke(&self, args: &Arguments) -> HelloResult<Value> {
        let result = match self {
            Operation::SayHello => Ok(Value::Text(say_hello())),
            Operation::Greet => greet(args).map(Value::Text),
            Operation::Add => add(args).map(Value::Number),
        };

        match &result {
            Ok(_) => tracing::debug!(op = self.export_name(), argc = args.len(), "call accepted"),
            Err(err) => tracing::debug!(
                op = self.export_name(),
                argc = args.len(),
                kinds = %args.kinds(),
                code = err.code() as u32,
                error = %err,
                "call rejected"
            ),
        }

        result
    }
}

/// Resolve `name` and invoke it.
pub fn dispatch(name: &str, args: &Arguments) -> HelloResult<Value> {
    let op = Operation::from_export_name(name)
        .ok_or_else(|| HelloError::UnknownOperation(name.to_string()))?;
    op.invoke(args)
}
