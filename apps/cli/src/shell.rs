//! # Interactive Shell
//!
//! The menu loop. Owns the console, the session and the configuration, and
//! dispatches each menu choice to its command.
//!
//! ```text
//!
//! Welcome!
//! Please select an option from the menu.
//!
//! 1 - Add Record
//! 2 - Search Record
//! 3 - Exit
//!
//! >
//! ```

use std::io::{BufRead, Write};

use shopcart_core::Session;
use tracing::{debug, info};

use crate::commands::{add_record, search_record, Flow, MenuSelection};
use crate::config::ConfigState;
use crate::console::Console;
use crate::error::ShellResult;

const MENU_PROMPT: &str = "> ";
const INCORRECT_SELECTION: &str = "Incorrect selection!";

pub struct Shell<R, W> {
    console: Console<R, W>,
    session: Session,
    config: ConfigState,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(console: Console<R, W>, session: Session, config: ConfigState) -> Self {
        Shell {
            console,
            session,
            config,
        }
    }

    /// The session, for reading its records after `run` returns.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the menu until `3` or end of input.
    pub fn run(&mut self) -> ShellResult<()> {
        info!(
            session_id = %self.session.id(),
            started_at = %self.session.started_at(),
            "Session started"
        );

        loop {
            self.print_menu()?;

            let Some(choice) = self.console.prompt(MENU_PROMPT)? else {
                break;
            };

            let flow = match MenuSelection::parse(&choice) {
                Some(MenuSelection::AddRecord) => {
                    add_record::run(&mut self.console, &mut self.session, &self.config)?
                }
                Some(MenuSelection::SearchRecord) => {
                    search_record::run(&mut self.console, &self.session, &self.config)?
                }
                Some(MenuSelection::Exit) => Flow::Exit,
                None => {
                    debug!(choice = %choice, "Unknown menu selection");
                    self.console.say(INCORRECT_SELECTION)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    fn print_menu(&mut self) -> ShellResult<()> {
        self.console.say("")?;
        self.console.say(&self.config.store_name)?;
        self.console.say_all([
            "Please select an option from the menu.",
            "",
            "1 - Add Record",
            "2 - Search Record",
            "3 - Exit",
            "",
        ])
    }

    /// Consumes the shell, returning the console writer.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Cursor;

    fn run_shell(input: &str, config: ConfigState) -> (Session, String) {
        let console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let mut shell = Shell::new(console, Session::standard().unwrap(), config);
        shell.run().unwrap();

        let session = shell.session().clone();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (session, output)
    }

    #[test]
    fn test_exit_immediately() {
        let (session, output) = run_shell("3\n", ConfigState::default());

        assert!(session.all_records().is_empty());
        assert!(output.starts_with("\nWelcome!\nPlease select an option from the menu.\n"));
        assert_eq!(output.matches("1 - Add Record").count(), 1);
    }

    #[test]
    fn test_incorrect_selection_shows_menu_again() {
        let (_, output) = run_shell("9\n3\n", ConfigState::default());

        assert!(output.contains("Incorrect selection!"));
        assert_eq!(output.matches("1 - Add Record").count(), 2);
    }

    #[test]
    fn test_add_then_end_lists_records_and_total() {
        let input = "1\n4\n2\nDelivery\n15\n1\nPick-up\nEND\n3\n";
        let (session, output) = run_shell(input, ConfigState::default());

        assert_eq!(session.all_records().len(), 2);
        assert!(output.contains("4     Knife Block Set                      High   99.95    2         Delivery"));
        assert!(output.contains("15    Pasta Machine                        High   114.95   1         Pick-up"));
        assert!(output.contains("Total cost is: $338.84"));
    }

    #[test]
    fn test_invalid_inputs_reprompt_without_recording() {
        let input = "1\n40\nabc\n4\n0\n50\n2\ndelivery\nDelivery\nEND\n3\n";
        let (session, output) = run_shell(input, ConfigState::default());

        assert_eq!(output.matches("Incorrect product code!").count(), 2);
        assert_eq!(output.matches("Incorrect quantity!").count(), 2);
        assert_eq!(output.matches("Incorrect shipping method!").count(), 1);
        assert_eq!(session.all_records().len(), 1);
        assert_eq!(session.all_records()[0].quantity, 2);
    }

    #[test]
    fn test_signed_or_padded_numbers_are_rejected() {
        let input = "1\n 4\n+4\n4\n 2\n+2\n2\nPick-up\nEND\n3\n";
        let (session, output) = run_shell(input, ConfigState::default());

        assert_eq!(output.matches("Incorrect product code!").count(), 2);
        assert_eq!(output.matches("Incorrect quantity!").count(), 2);
        assert_eq!(session.all_records().len(), 1);
        assert_eq!(session.all_records()[0].code, 4);
    }

    #[test]
    fn test_search_after_adding() {
        let input = "1\n16\n3\nPick-up\n16\n2\nDelivery\nEND\n2\nteapot\n3\n";
        let (_, output) = run_shell(input, ConfigState::default());

        assert!(output.contains("16    Teapot                               Low    29.95    5         155.74"));
        assert!(output.ends_with("Total cost is: $155.74\n\nWelcome!\nPlease select an option from the menu.\n\n1 - Add Record\n2 - Search Record\n3 - Exit\n\n> "));
    }

    #[test]
    fn test_eof_mid_record_exits_cleanly() {
        let (session, _) = run_shell("1\n4\n", ConfigState::default());
        assert!(session.all_records().is_empty());
    }

    #[test]
    fn test_custom_store_name_and_json_listing() {
        let config = ConfigState {
            store_name: "Kitchen Supplies".to_string(),
            output: OutputFormat::Json,
            ..ConfigState::default()
        };
        let (_, output) = run_shell("1\n0\n1\nPick-up\nEND\n3\n", config);

        assert!(output.contains("\nKitchen Supplies\n"));
        assert!(output.contains("\"total\": \"18.70\""));
    }
}
