//! Host-provided functions, bound into the global scope at
//! interpreter construction.
//!
//! Natives receive the interpreter so `input` can route its prompt
//! through the active print handler. Time is read from `SystemTime`
//! and rendered in UTC; the workspace carries no timezone data.

use std::io::BufRead;
use std::process;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::environment::Environment;
use crate::errors::{exit_code_not_number, prompt_not_string, RuntimeError};
use crate::function::{Arity, NativeFunction};
use crate::interpreter::Interpreter;
use crate::shared::Shared;
use crate::value::Value;

pub(crate) fn install(globals: &Shared<Environment>) {
    let natives = [
        NativeFunction {
            name: "clock",
            arity: Arity::Exactly(0),
            func: clock,
        },
        NativeFunction {
            name: "time",
            arity: Arity::Exactly(0),
            func: time,
        },
        NativeFunction {
            name: "input",
            arity: Arity::Exactly(1),
            func: input,
        },
        NativeFunction {
            name: "exit",
            arity: Arity::UpTo(1),
            func: exit,
        },
    ];
    for native in natives {
        globals
            .borrow_mut()
            .define(native.name, Value::Native(Rc::new(native)));
    }
}

fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// Seconds since the Unix epoch, scaled down by 100. The scale is
/// arbitrary but stable; scripts use `clock()` deltas, not absolutes.
fn clock(_: &mut Interpreter, _: Vec<Value>) -> Result<Value, RuntimeError> {
    Ok(Value::Number(epoch_seconds() / 100.0))
}

/// Current wall-clock time as a human-readable UTC string, in the
/// classic `Www Mmm dd hh:mm:ss yyyy` layout.
fn time(_: &mut Interpreter, _: Vec<Value>) -> Result<Value, RuntimeError> {
    #[allow(clippy::cast_possible_truncation)]
    let secs = epoch_seconds() as i64;
    Ok(Value::string(format_utc(secs)))
}

/// Write the prompt, read one line from stdin, and return a Number if
/// the whole line (modulo surrounding whitespace) parses as a float,
/// else the line as a Str.
fn input(interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, RuntimeError> {
    let prompt = match args.into_iter().next() {
        Some(Value::Str(prompt)) => prompt,
        _ => return Err(prompt_not_string()),
    };
    interpreter.printer().print(&prompt);

    let mut line = String::new();
    // EOF or a read failure behaves like an empty line.
    let _ = std::io::stdin().lock().read_line(&mut line);
    Ok(input_value(&line))
}

/// Classify one read line. The trimmed view is used only for the
/// number parse; the string fallback keeps the line as typed, with
/// just the line terminator removed.
fn input_value(line: &str) -> Value {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    match line.trim().parse::<f64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::string(line),
    }
}

/// Terminate the process: `exit()` with status 0, `exit(code)` with
/// the code truncated to an integer status.
fn exit(_: &mut Interpreter, args: Vec<Value>) -> Result<Value, RuntimeError> {
    match args.into_iter().next() {
        None => process::exit(0),
        #[allow(clippy::cast_possible_truncation)]
        Some(Value::Number(code)) => process::exit(code as i32),
        Some(_) => Err(exit_code_not_number()),
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn format_utc(epoch_secs: i64) -> String {
    let days = epoch_secs.div_euclid(86_400);
    let secs_of_day = epoch_secs.rem_euclid(86_400);
    let (year, month, day) = civil_from_days(days);
    // 1970-01-01 was a Thursday.
    let weekday = (days + 4).rem_euclid(7) as usize;
    format!(
        "{} {} {:2} {:02}:{:02}:{:02} {}",
        WEEKDAYS[weekday],
        MONTHS[(month - 1) as usize],
        day,
        secs_of_day / 3600,
        secs_of_day % 3600 / 60,
        secs_of_day % 60,
        year,
    )
}

/// Days since 1970-01-01 to proleptic Gregorian (year, month, day).
/// Howard Hinnant's `civil_from_days` algorithm.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}
