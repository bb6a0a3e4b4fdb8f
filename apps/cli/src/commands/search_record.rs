//! Search records by product-name keyword and show the aggregated rows.

use std::io::{BufRead, Write};

use shopcart_core::{CoreError, SearchOutcome, Session};
use tracing::info;

use super::Flow;
use crate::config::{ConfigState, OutputFormat};
use crate::console::Console;
use crate::error::{ShellResult, UserError};
use crate::render::{search_table, total_line};

const KEYWORD_PROMPT: &str = "Please enter a search keyword (Case Insensitive): ";
const NO_MATCHES_MESSAGE: &str = "No records found matching the keyword.";

/// Asks for one keyword, re-prompting while it is blank, and prints the result.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
    config: &ConfigState,
) -> ShellResult<Flow> {
    loop {
        let Some(keyword) = console.prompt(KEYWORD_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        let outcome = match session.search(&keyword) {
            Ok(outcome) => outcome,
            Err(e @ CoreError::EmptyKeyword) => {
                console.say(&UserError::from(&e).message)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        info!(keyword = %keyword.trim(), matches = outcome.rows().len(), "Search completed");

        match outcome {
            SearchOutcome::NoMatches => console.say(NO_MATCHES_MESSAGE)?,
            SearchOutcome::Matches(results) => match config.output {
                OutputFormat::Table => {
                    console.say_all(search_table(&results.rows))?;
                    console.say("")?;
                    console.say(&total_line(results.grand_total))?;
                }
                OutputFormat::Json => {
                    console.say(&serde_json::to_string_pretty(&results)?)?;
                }
            },
        }

        return Ok(Flow::Continue);
    }
}
