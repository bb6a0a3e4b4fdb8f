//! # Add Record Command
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Please enter a valid product code (0-39): 4                            │
//! │  Please enter a valid quantity (1-49): 2                                │
//! │  Please enter a valid shipping method: ('Pick-up', 'Delivery'): Delivery│
//! │       │                                                                 │
//! │       ▼  session.add_purchase(4, 2, "Delivery")                         │
//! │  back to the code prompt ...                                            │
//! │                                                                         │
//! │  Please enter a valid product code (0-39): END                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  record table + "Total cost is: $223.89", back to the menu              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each prompt repeats until its own value is valid, so by the time the
//! session is called every value has already passed validation. Code and
//! quantity must be plain ASCII digits: no sign, no surrounding spaces.

use std::io::{BufRead, Write};

use shopcart_core::codec::encode_purchase;
use shopcart_core::validation::{validate_code, validate_quantity, validate_shipping_method};
use shopcart_core::{Session, ValidationError};
use tracing::debug;

use super::Flow;
use crate::config::{ConfigState, OutputFormat};
use crate::console::Console;
use crate::error::{ShellResult, UserError};
use crate::render::{record_table, total_line, RecordReport};

const CODE_PROMPT: &str = "Please enter a valid product code (0-39): ";
const QUANTITY_PROMPT: &str = "Please enter a valid quantity (1-49): ";
const SHIPPING_PROMPT: &str = "Please enter a valid shipping method: ('Pick-up', 'Delivery'): ";

/// Typed at the code prompt to stop adding and list the records.
pub const END_COMMAND: &str = "END";

/// Runs the add-record loop until `END` or end of input.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
    config: &ConfigState,
) -> ShellResult<Flow> {
    loop {
        let Some(input) = console.prompt(CODE_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        if input == END_COMMAND {
            console.say("")?;
            show_records(console, session, config)?;
            return Ok(Flow::Continue);
        }

        let code = match parse_code(&input, session) {
            Ok(code) => code,
            Err(e) => {
                debug!(input = %input, code = ?e.code, "Rejected product code");
                console.say(&e.message)?;
                continue;
            }
        };

        let Some(quantity) = ask(console, QUANTITY_PROMPT, parse_quantity)? else {
            return Ok(Flow::Exit);
        };

        let Some(method) = ask(console, SHIPPING_PROMPT, parse_shipping_method)? else {
            return Ok(Flow::Exit);
        };

        let record = session.add_purchase(code, quantity, &method)?;
        debug!(
            code = record.code,
            quantity = record.quantity,
            method = %record.shipping_method,
            record = %encode_purchase(&record),
            records = session.all_records().len(),
            "Purchase recorded"
        );
    }
}

/// Prints every record and the session total.
pub fn show_records<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
    config: &ConfigState,
) -> ShellResult<()> {
    let records = session.all_records();
    let total = session.total();

    match config.output {
        OutputFormat::Table => {
            console.say_all(record_table(records))?;
            console.say("")?;
            console.say(&total_line(total))?;
        }
        OutputFormat::Json => {
            let report = RecordReport { records, total };
            console.say(&serde_json::to_string_pretty(&report)?)?;
        }
    }

    Ok(())
}

/// Re-prompts until `parse` accepts the input. `None` at end of input.
fn ask<R, W, T, F>(console: &mut Console<R, W>, prompt: &str, parse: F) -> ShellResult<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, UserError>,
{
    loop {
        let Some(input) = console.prompt(prompt)? else {
            return Ok(None);
        };

        match parse(&input) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                debug!(input = %input, code = ?e.code, "Rejected input");
                console.say(&e.message)?;
            }
        }
    }
}

/// Parses a non-empty run of ASCII digits.
fn parse_digits(input: &str) -> Option<i64> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// A code must be all digits, in range, and present in the catalog.
fn parse_code(input: &str, session: &Session) -> Result<i64, UserError> {
    let code = parse_digits(input).ok_or_else(UserError::invalid_code)?;
    let code = validate_code(code).map_err(|e| UserError::from(&e))?;

    match session.lookup_product(code as i64) {
        Some(_) => Ok(code as i64),
        None => Err(UserError::from(&ValidationError::UnknownProduct { code })),
    }
}

fn parse_quantity(input: &str) -> Result<i64, UserError> {
    let quantity = parse_digits(input).ok_or_else(UserError::invalid_quantity)?;
    validate_quantity(quantity)
        .map(i64::from)
        .map_err(|e| UserError::from(&e))
}

fn parse_shipping_method(input: &str) -> Result<String, UserError> {
    validate_shipping_method(input)
        .map(|method| method.as_str().to_string())
        .map_err(|e| UserError::from(&e))
}
