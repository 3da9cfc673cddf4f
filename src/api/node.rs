//! N-API frontend: registers the exports on a Node.js module.
//!
//! JavaScript usage:
//! ```js
//! const hello = require('./hello_world.node');
//! hello.sayHello();    // "Hello from C++!"
//! hello.greet("Ada");  // "Hello, Ada! Welcome to C++!"
//! hello.add(5, 10);    // 15
//! hello.add("5", 10);  // throws TypeError: Arguments must be numbers
//! ```

use napi::{CallContext, Env, Error, JsNumber, JsObject, JsString, JsUnknown, Result, Status, ValueType};
use napi_derive::{js_function, module_exports};

use crate::boundary::{Arguments, Operation, Value, ValueKind};
use crate::common::config::AppCfg;
use crate::common::error::HelloError;
use crate::common::log;

#[module_exports]
fn init(mut exports: JsObject) -> Result<()> {
    log::init(&AppCfg::load());

    exports.create_named_method(Operation::SayHello.export_name(), say_hello)?;
    exports.create_named_method(Operation::Greet.export_name(), greet)?;
    exports.create_named_method(Operation::Add.export_name(), add)?;

    tracing::trace!(exports = Operation::ALL.len(), "module registered");
    Ok(())
}

#[js_function(0)]
fn say_hello(ctx: CallContext) -> Result<JsString> {
    let text = invoke(&ctx, Operation::SayHello)?;
    ctx.env.create_string(text.as_text().unwrap_or_default())
}

#[js_function(1)]
fn greet(ctx: CallContext) -> Result<JsString> {
    let text = invoke(&ctx, Operation::Greet)?;
    ctx.env.create_string(text.as_text().unwrap_or_default())
}

#[js_function(2)]
fn add(ctx: CallContext) -> Result<JsNumber> {
    let sum = invoke(&ctx, Operation::Add)?;
    ctx.env.create_double(sum.as_number().unwrap_or(f64::NAN))
}

/// Marshal the call's arguments and run `op`, throwing a `TypeError` on rejection.
fn invoke(ctx: &CallContext, op: Operation) -> Result<Value> {
    let args = arguments(ctx, op.arity())?;
    op.invoke(&args).map_err(|err| throw_type_error(&*ctx.env, err))
}

fn arguments(ctx: &CallContext, arity: usize) -> Result<Arguments> {
    // `length` is the caller's argc, which may exceed the slots napi captured.
    (0..ctx.length.min(arity))
        .map(|index| ctx.get::<JsUnknown>(index).and_then(to_value))
        .collect()
}

fn to_value(value: JsUnknown) -> Result<Value> {
    let converted = match value.get_type()? {
        ValueType::Undefined => Value::Undefined,
        ValueType::Null => Value::Null,
        ValueType::Boolean => Value::Bool(value.coerce_to_bool()?.get_value()?),
        ValueType::Number => Value::Number(value.coerce_to_number()?.get_double()?),
        ValueType::String => Value::Text(value.coerce_to_string()?.into_utf8()?.into_owned()?),
        ValueType::Symbol => Value::Opaque(ValueKind::Symbol),
        ValueType::Function => Value::Opaque(ValueKind::Function),
        ValueType::External => Value::Opaque(ValueKind::External),
        ValueType::Object => Value::Opaque(ValueKind::Object),
        _ => Value::Opaque(ValueKind::BigInt),
    };
    Ok(converted)
}

/// Throw `err` as a JS `TypeError` and return the error napi should propagate.
fn throw_type_error(env: &Env, err: HelloError) -> Error {
    let message = err.to_string();
    match env.throw_type_error(&message, Some(err.code().as_str())) {
        Ok(()) => Error::new(Status::PendingException, message),
        Err(throw_err) => throw_err,
    }
}
