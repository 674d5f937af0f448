//! Interactive menu shell.
//!
//! The shell reads raw lines, turns them into typed registry calls, and
//! reports each outcome with its latency. It is generic over its input and
//! output so sessions can be scripted in tests.
//!
//! # Components
//! - [`Shell`] - The menu loop
//! - [`MenuChoice`] - Parsed menu selection
//! - [`render`] - Formatting helpers

mod menu;
pub mod render;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::common::config::ShellConfig;
use crate::common::{Error, Rating, Result};
use crate::record::{RatingChange, Supplier, SupplierUpdate};
use crate::registry::Registry;

pub use menu::MenuChoice;
use render::{
    latency_suffix, rule, timed, write_supplier_block, write_supplier_list, CLEAR_SCREEN,
};

const TITLE: &str = "PHARMACY SUPPLIER & VENDOR MANAGEMENT SYSTEM";

/// The interactive menu loop.
///
/// # Error Handling
/// Every action runs to completion or fails with an [`Error`]. Recoverable
/// errors (not found, duplicate, bad input) are reported and the menu is
/// shown again. The session ends on menu choice 6, on end of input, or on a
/// terminal I/O failure, which is returned to the caller.
///
/// # Example
/// ```
/// use std::io::Cursor;
/// use supplierdb::common::config::ShellConfig;
/// use supplierdb::{Registry, Shell};
///
/// let config = ShellConfig {
///     clear_screen: false,
///     pause_after_action: false,
///     report_latency: false,
/// };
/// let input = Cursor::new("2\nS078\n6\n");
/// let mut shell = Shell::new(Registry::with_sample_data(), input, Vec::new(), config);
/// shell.run().unwrap();
///
/// let (_, output) = shell.into_parts();
/// assert!(String::from_utf8(output).unwrap().contains("Supplier Name: VitaCo"));
/// ```
pub struct Shell<R, W> {
    registry: Registry,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over a registry and an input/output pair.
    pub fn new(registry: Registry, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            registry,
            input,
            output,
            config,
        }
    }

    /// The registry being edited.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Take back the registry and the output sink.
    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.output)
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    /// - `Error::Io` if the terminal cannot be written or read
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.clear_screen()?;
            self.write_menu()?;

            let line = match self.prompt("Enter your choice (1-6): ") {
                Ok(line) => line,
                Err(Error::EndOfInput) => break,
                Err(err) => return Err(err),
            };

            let result = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => {
                    self.clear_screen()?;
                    writeln!(
                        self.output,
                        "Thank you for using Supplier & Vendor Management System!"
                    )?;
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                Ok(choice) => {
                    debug!(?choice, "menu selection");
                    self.dispatch(choice)
                }
                Err(_) => {
                    writeln!(self.output, "Invalid choice! Please enter 1-6.")?;
                    Ok(())
                }
            };

            let result = result.or_else(|err| self.report(err));
            match result.and_then(|()| self.pause()) {
                Ok(()) => {}
                Err(Error::EndOfInput) => break,
                Err(err) => return Err(err),
            }
        }

        self.output.flush()?;
        info!(stats = %self.registry.stats().snapshot(), "session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Add => self.add_supplier(),
            MenuChoice::Search => self.search_supplier(),
            MenuChoice::Delete => self.delete_supplier(),
            MenuChoice::Update => self.update_supplier(),
            MenuChoice::DisplayAll => self.display_suppliers(),
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Print a user-facing message for a failed action.
    ///
    /// Returns the error back if the session cannot continue.
    fn report(&mut self, err: Error) -> Result<()> {
        if !err.is_recoverable() {
            return Err(err);
        }
        debug!(error = %err, "action failed");

        match &err {
            Error::MalformedInput(_) => writeln!(
                self.output,
                "\nInvalid input! Please enter a numeric value where required."
            )?,
            Error::InvalidRating { min, max, .. } => {
                writeln!(self.output, "Rating must be between {}-{}!", min, max)?
            }
            Error::DuplicateKey(id) => {
                writeln!(self.output, "\nError! Supplier ID {} already exists!", id)?
            }
            Error::NotFound(id) => writeln!(self.output, "Supplier with ID {} not found!", id)?,
            other => writeln!(self.output, "An error occurred: {}", other)?,
        }
        Ok(())
    }

    // ========================================================================
    // Actions
    // ========================================================================

    fn add_supplier(&mut self) -> Result<()> {
        self.heading("      INSERT SUPPLIER INFORMATION")?;

        let id = self.prompt_id("Enter Supplier ID: ")?;
        if id.is_empty() {
            writeln!(self.output, "\nSupplier ID cannot be empty!")?;
            return Ok(());
        }
        if self.registry.exists(&id) {
            return Err(Error::DuplicateKey(id.into()));
        }

        let name = self.prompt("Enter Supplier Name: ")?;
        let contact = self.prompt("Enter Contact Info: ")?;
        let product = self.prompt("Enter Supplier Product: ")?;
        let rating = parse_rating_input(&self.prompt("Enter Rating (1-5): ")?)?;

        let supplier = Supplier::new(id, name, contact, product, rating);
        let as_root = self.registry.is_empty();
        let (result, elapsed) = timed(|| self.registry.insert(supplier));
        result?;

        let time = latency_suffix(elapsed, self.config.report_latency);
        if as_root {
            writeln!(self.output, "Supplier added successfully as root!{}", time)?;
        } else {
            writeln!(self.output, "Supplier added successfully!{}", time)?;
        }
        Ok(())
    }

    fn search_supplier(&mut self) -> Result<()> {
        self.heading("            SEARCH SUPPLIER")?;
        let id = self.prompt_id("Enter Supplier ID to search: ")?;
        writeln!(self.output)?;

        let ((empty, found), elapsed) = timed(|| {
            (
                self.registry.is_empty(),
                self.registry.search(&id).cloned(),
            )
        });
        let time = latency_suffix(elapsed, self.config.report_latency);

        if empty {
            writeln!(self.output, "No suppliers in the system!{}", time)?;
            return Ok(());
        }
        match found {
            Some(supplier) => {
                writeln!(self.output, "Supplier found{}:", time)?;
                write_supplier_block(&mut self.output, &supplier)?;
            }
            None => writeln!(self.output, "Supplier with ID {} not found!{}", id, time)?,
        }
        Ok(())
    }

    fn delete_supplier(&mut self) -> Result<()> {
        self.heading("            DELETE SUPPLIER")?;
        let id = self.prompt_id("Enter Supplier ID to delete: ")?;
        writeln!(self.output)?;

        let (result, elapsed) = timed(|| {
            if self.registry.is_empty() {
                None
            } else {
                Some(self.registry.delete(&id))
            }
        });
        let time = latency_suffix(elapsed, self.config.report_latency);

        match result {
            None => writeln!(self.output, "No suppliers in the system!{}", time)?,
            Some(Ok(_)) => writeln!(
                self.output,
                "Supplier with ID {} deleted successfully!{}",
                id, time
            )?,
            Some(Err(Error::NotFound(_))) => {
                writeln!(self.output, "Supplier with ID {} not found!{}", id, time)?
            }
            Some(Err(err)) => return Err(err),
        }
        Ok(())
    }

    fn update_supplier(&mut self) -> Result<()> {
        self.heading("            UPDATE SUPPLIER")?;
        let id = self.prompt_id("Enter Supplier ID to update: ")?;
        writeln!(self.output)?;

        if self.registry.is_empty() {
            writeln!(self.output, "\nNo suppliers in the system!")?;
            return Ok(());
        }

        let (found, elapsed) = timed(|| self.registry.search(&id).cloned());
        let Some(current) = found else {
            let time = latency_suffix(elapsed, self.config.report_latency);
            writeln!(self.output, "\nSupplier with ID {} not found!{}", id, time)?;
            return Ok(());
        };

        writeln!(self.output, "Current supplier information:")?;
        write_supplier_block(&mut self.output, &current)?;
        writeln!(
            self.output,
            "\nEnter new information (press Enter to keep current value):\n"
        )?;

        let name = self.prompt(&format!("Supplier Name [{}]: ", current.name()))?;
        let contact = self.prompt(&format!("Contact [{}]: ", current.contact()))?;
        let category = self.prompt(&format!("Supplier Product [{}]: ", current.category()))?;
        let rating = self.prompt(&format!("Rating (1-5) [{}]: ", current.rating()))?;
        let update = SupplierUpdate {
            name: non_blank(name),
            contact: non_blank(contact),
            category: non_blank(category),
            rating_text: non_blank(rating),
        };

        let (result, elapsed) = timed(|| self.registry.update_fields(&id, update));
        let outcome = result?;

        if let RatingChange::Rejected { input } = &outcome.rating {
            if is_integer_text(input) {
                writeln!(
                    self.output,
                    "\nRating must be between 1-5! Keeping current rating."
                )?;
            } else {
                writeln!(self.output, "\nInvalid rating! Keeping current rating.")?;
            }
        }

        let time = latency_suffix(elapsed, self.config.report_latency);
        writeln!(
            self.output,
            "\nSupplier information updated successfully!{}",
            time
        )?;
        Ok(())
    }

    fn display_suppliers(&mut self) -> Result<()> {
        let (suppliers, elapsed) = timed(|| {
            self.registry
                .in_order()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        });
        let time = latency_suffix(elapsed, self.config.report_latency);

        if suppliers.is_empty() {
            writeln!(self.output, "No suppliers in the system!{}", time)?;
            return Ok(());
        }

        write_supplier_list(&mut self.output, &suppliers)?;
        writeln!(self.output, "Total suppliers: {}{}", suppliers.len(), time)?;
        Ok(())
    }

    // ========================================================================
    // Terminal helpers
    // ========================================================================

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", TITLE)?;
        writeln!(self.output, "---")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        writeln!(self.output, "---")?;
        Ok(())
    }

    fn heading(&mut self, title: &str) -> Result<()> {
        self.clear_screen()?;
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "{}", rule('-', 40))?;
        writeln!(self.output)?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        if self.config.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if self.config.pause_after_action {
            self.prompt("\nPress Enter to return to main menu...")?;
        }
        Ok(())
    }

    /// Print a prompt and read one line without its line terminator.
    ///
    /// # Errors
    /// - `Error::EndOfInput` if the input stream is exhausted
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Prompt for a supplier ID, trimmed of surrounding whitespace.
    fn prompt_id(&mut self, label: &str) -> Result<String> {
        let answer = self.prompt(label)?;
        Ok(answer.trim().to_string())
    }
}

/// `None` for a blank answer, which keeps the current value.
fn non_blank(answer: String) -> Option<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Whether the text is a whole number of any magnitude: an optional sign
/// followed by ASCII digits.
fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a rating typed when creating a supplier.
///
/// Non-numeric text is malformed input; a number outside the accepted range
/// is an invalid rating.
fn parse_rating_input(text: &str) -> Result<Rating> {
    let trimmed = text.trim();
    if !is_integer_text(trimmed) {
        return Err(Error::MalformedInput(trimmed.to_string()));
    }
    Rating::parse(trimmed)
}
