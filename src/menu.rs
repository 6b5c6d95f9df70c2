//! Interactive menu loop.
//!
//! Prompts, reads choices, and dispatches to the contact directory. The
//! loop is generic over its input and output streams so test code can
//! drive a whole session from a byte buffer; the directory itself never
//! reads input.

use crate::directory::ContactDirectory;
use std::io::{self, BufRead, Write};

/// Menu-driven front-end over a [`ContactDirectory`].
pub struct Menu<R, W> {
    directory: ContactDirectory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu session over the given streams.
    pub fn new(directory: ContactDirectory, input: R, output: W) -> Self {
        Self {
            directory,
            input,
            output,
        }
    }

    /// Borrow the underlying directory (used by tests to inspect state).
    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    /// Run the prompt/dispatch loop until the user exits or input ends.
    ///
    /// Directory errors are printed and the loop continues; a non-numeric
    /// menu choice is a no-op plus a warning, never a crash.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_banner()?;

            let Some(choice) = self.prompt("Enter your choice (1-8): ")? else {
                // EOF on input: treated as exit
                writeln!(self.output, "Closing the contact book.")?;
                break;
            };

            match choice.parse::<u32>() {
                Ok(1) => self.add_contact()?,
                Ok(2) => self.view_contact()?,
                Ok(3) => self.list_contacts()?,
                Ok(4) => self.update_contact()?,
                Ok(5) => self.delete_contact()?,
                Ok(6) => self.search_contacts()?,
                Ok(7) => self.count_contacts()?,
                Ok(8) => {
                    tracing::info!("Program exited by user");
                    writeln!(self.output, "Closing the contact book.")?;
                    break;
                }
                Ok(_) => {
                    writeln!(self.output, "Invalid input! Please choose 1-8.")?;
                }
                Err(_) => {
                    tracing::warn!("Invalid menu input: '{}'", choice);
                    writeln!(self.output, "Invalid input! Please choose 1-8.")?;
                }
            }
        }
        Ok(())
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "********** Welcome to the Contact Book **********"
        )?;
        writeln!(self.output, "1: Add contact")?;
        writeln!(self.output, "2: View contact")?;
        writeln!(self.output, "3: List all contacts")?;
        writeln!(self.output, "4: Update contact")?;
        writeln!(self.output, "5: Delete contact")?;
        writeln!(self.output, "6: Search contacts")?;
        writeln!(self.output, "7: Count contacts")?;
        writeln!(self.output, "8: Exit")?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for the four contact fields in entry order.
    fn prompt_record(&mut self) -> io::Result<Option<(String, String, String, String)>> {
        let Some(name) = self.prompt("Enter the contact name: ")? else {
            return Ok(None);
        };
        let Some(age) = self.prompt("Enter the age: ")? else {
            return Ok(None);
        };
        let Some(email) = self.prompt("Enter the Gmail address: ")? else {
            return Ok(None);
        };
        let Some(mobile) = self.prompt("Enter the 10-digit mobile number: ")? else {
            return Ok(None);
        };
        Ok(Some((name, age, email, mobile)))
    }

    fn add_contact(&mut self) -> io::Result<()> {
        let Some((name, age, email, mobile)) = self.prompt_record()? else {
            return Ok(());
        };

        match self.directory.create(&name, &age, &email, &mobile) {
            Ok(()) => writeln!(self.output, "Contact '{}' added successfully!", name),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn view_contact(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter the contact name: ")? else {
            return Ok(());
        };

        match self.directory.view(&name) {
            Ok(contact) => writeln!(self.output, "{}", contact),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn list_contacts(&mut self) -> io::Result<()> {
        if self.directory.is_empty() {
            return writeln!(self.output, "No contacts in the directory.");
        }

        writeln!(self.output, "Contacts in the directory:")?;
        let listing: Vec<String> = self
            .directory
            .iter()
            .map(|contact| format!("{}\n", contact))
            .collect();
        for entry in listing {
            writeln!(self.output, "{}", entry)?;
        }
        Ok(())
    }

    fn update_contact(&mut self) -> io::Result<()> {
        let Some((name, age, email, mobile)) = self.prompt_record()? else {
            return Ok(());
        };

        match self.directory.update(&name, &age, &email, &mobile) {
            Ok(()) => writeln!(self.output, "Contact '{}' updated successfully!", name),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn delete_contact(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter the contact name: ")? else {
            return Ok(());
        };

        match self.directory.delete(&name) {
            Ok(_) => writeln!(self.output, "Contact '{}' has been deleted.", name),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn search_contacts(&mut self) -> io::Result<()> {
        let Some(query) = self.prompt("Enter the name to search for: ")? else {
            return Ok(());
        };

        let rendered: Vec<String> = self
            .directory
            .search(&query)
            .into_iter()
            .map(|contact| contact.to_string())
            .collect();

        if rendered.is_empty() {
            return writeln!(self.output, "No matching contacts found.");
        }

        writeln!(self.output, "Found {} matching contact(s):", rendered.len())?;
        for entry in rendered {
            writeln!(self.output, "{}\n", entry)?;
        }
        Ok(())
    }

    fn count_contacts(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "The directory holds {} contact(s).",
            self.directory.count()
        )
    }
}
