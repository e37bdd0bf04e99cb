//! Interactive diary session
//!
//! Runs the main menu against a [`Prompter`], dispatching each choice to the
//! registers. Input errors are printed and the menu continues; I/O errors end
//! the session.

use crate::cli::parsing::{parse_date, parse_id};
use crate::cli::{format_author_choices, format_entry_list, format_statistics, Prompter};
use crate::domain::validation::validate_not_null;
use crate::domain::{Author, AuthorRegister, DiaryEntry, DiaryRegister};
use crate::error::Result;
use crate::infrastructure::Config;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, info, warn};

const INVALID_CHOICE: &str = "Invalid choice, please try again.";

const MAIN_MENU: &str = "\n--- MAIN MENU ---\n\
    1. Write new entry\n\
    2. Delete entry\n\
    3. Show all entries\n\
    4. Search for entries\n\
    5. Show author statistics\n\
    6. Edit entry description\n\
    0. Exit";

const SEARCH_MENU: &str = "\n--- SEARCH MENU ---\n\
    1. Search by keyword\n\
    2. Search by date\n\
    3. Search by date range\n\
    4. Search by author\n\
    0. Back to main menu";

const AUTHOR_MENU: &str = "\n--- AUTHOR MENU ---\n\
    1. Select existing author\n\
    2. Create new author\n\
    0. Cancel";

/// Owns both registers for the lifetime of one interactive session
pub struct DiarySession {
    diary: DiaryRegister,
    authors: AuthorRegister,
    date_format: String,
}

impl DiarySession {
    pub fn new(config: &Config) -> Self {
        DiarySession {
            diary: DiaryRegister::new(),
            authors: AuthorRegister::new(),
            date_format: config.date_input_format.clone(),
        }
    }

    pub fn diary(&self) -> &DiaryRegister {
        &self.diary
    }

    pub fn authors(&self) -> &AuthorRegister {
        &self.authors
    }

    /// Load the built-in sample data
    pub fn seed_sample_data(&mut self) -> Result<usize> {
        let added = super::sample_data::seed(&mut self.diary, &mut self.authors)?;
        info!(entries = added, "sample data loaded");
        Ok(added)
    }

    /// Run the main menu until the user exits or input ends
    pub fn run<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        p.print("--- Diary Application Initialized ---")?;

        loop {
            p.print(MAIN_MENU)?;
            let Some(choice) = p.read_line("Choose a number")? else {
                break;
            };

            let choice = choice.trim();
            debug!(choice, "main menu");
            let outcome = match choice {
                "1" => self.write_entry(p),
                "2" => self.delete_entry(p),
                "3" => self.show_all_entries(p),
                "4" => self.search_menu(p),
                "5" => self.show_statistics(p),
                "6" => self.edit_entry(p),
                "0" => break,
                _ => p.error(INVALID_CHOICE),
            };
            report(p, outcome)?;
        }

        p.print("Shutting down... Goodbye!")?;
        info!(entries = self.diary.len(), "session ended");
        Ok(())
    }

    fn write_entry<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        p.print("Creating entry...")?;
        let Some(author) = self.choose_author(p)? else {
            return Ok(());
        };
        let Some(title) = p.read_line("Title")? else {
            return Ok(());
        };
        let Some(description) = p.read_line("Description")? else {
            return Ok(());
        };

        let entry = DiaryEntry::new(title, description, author)?;
        let id = self.diary.add_entry(entry)?;
        debug!(id, "entry added");
        p.success(&format!("Entry created! Got ID: {}", id))
    }

    fn choose_author<R: BufRead, W: Write>(
        &mut self,
        p: &mut Prompter<R, W>,
    ) -> Result<Option<Rc<Author>>> {
        if self.authors.is_empty() {
            p.print("No authors found! Creating one...")?;
            return self.create_author(p);
        }

        p.print(AUTHOR_MENU)?;
        let Some(choice) = p.read_line("Select an option")? else {
            return Ok(None);
        };
        match choice.trim() {
            "1" => self.select_existing_author(p),
            "2" => self.create_author(p),
            _ => Ok(None),
        }
    }

    /// Pick from the numbered author list; an empty answer cancels
    fn select_existing_author<R: BufRead, W: Write>(
        &self,
        p: &mut Prompter<R, W>,
    ) -> Result<Option<Rc<Author>>> {
        let authors = self.authors.get_all_authors();

        loop {
            p.print("\n--- EXISTING AUTHOR MENU ---")?;
            p.print_block(&format_author_choices(&authors))?;
            let Some(input) = p.read_line("Select an author number")? else {
                return Ok(None);
            };
            let input = input.trim();
            if input.is_empty() {
                return Ok(None);
            }

            match input.parse::<usize>() {
                Ok(n) if (1..=authors.len()).contains(&n) => {
                    return Ok(Some(authors[n - 1].clone()));
                }
                Ok(_) => p.error(INVALID_CHOICE)?,
                Err(_) => p.error("Invalid input, please use a number.")?,
            }
        }
    }

    /// Ask for author details until they are valid; an empty first name cancels
    fn create_author<R: BufRead, W: Write>(
        &mut self,
        p: &mut Prompter<R, W>,
    ) -> Result<Option<Rc<Author>>> {
        loop {
            p.print("\n--- CREATE NEW AUTHOR ---\nPress Enter to cancel")?;
            let Some(first_name) = p.read_line("First Name")? else {
                return Ok(None);
            };
            if first_name.is_empty() {
                return Ok(None);
            }
            let Some(last_name) = p.read_line("Last Name")? else {
                return Ok(None);
            };
            let Some(email) = p.read_line("Email")? else {
                return Ok(None);
            };

            let created = Author::new(first_name, last_name, email.trim())
                .map(Rc::new)
                .and_then(|author| {
                    self.authors.add_author(author.clone())?;
                    Ok(author)
                });
            match created {
                Ok(author) => {
                    debug!(email = author.email(), "author added");
                    return Ok(Some(author));
                }
                Err(e) if e.is_input_error() => {
                    warn!(error = %e, "author rejected");
                    p.error(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn delete_entry<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        p.print("\n--- DELETE ENTRY ---")?;
        self.show_all_entries(p)?;
        let Some(input) = p.read_line("Enter the ID of the entry you want to delete")? else {
            return Ok(());
        };

        let id = parse_id(&input)?;
        match self.diary.remove_entry_by_id(id)? {
            Some(_) => {
                debug!(id, "entry removed");
                p.success("Entry deleted!")
            }
            None => p.error(&format!("No entry with ID {}.", id)),
        }
    }

    fn show_all_entries<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let entries = self.diary.get_all_entries();
        if !entries.is_empty() {
            p.print("\n--- ALL ENTRIES ---")?;
        }
        p.print_block(&format_entry_list(&entries))
    }

    fn search_menu<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        loop {
            p.print(SEARCH_MENU)?;
            let Some(choice) = p.read_line("Choose a number")? else {
                return Ok(());
            };

            let choice = choice.trim();
            debug!(choice, "search menu");
            let outcome = match choice {
                "1" => self.search_by_keyword(p),
                "2" => self.search_by_date(p),
                "3" => self.search_between_dates(p),
                "4" => self.search_by_author(p),
                "0" => return Ok(()),
                _ => p.error(INVALID_CHOICE),
            };
            report(p, outcome)?;
        }
    }

    fn search_by_keyword<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let Some(keyword) = p.read_line("Enter keyword")? else {
            return Ok(());
        };
        print_results(p, &self.diary.search_by_keyword(&keyword))
    }

    fn search_by_date<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let Some(input) = p.read_line("Enter date (yyyy-mm-dd)")? else {
            return Ok(());
        };
        let date = parse_date(&input, &self.date_format)?;
        print_results(p, &self.diary.get_entries_by_date(date))
    }

    fn search_between_dates<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let Some(from) = p.read_line("Enter From (yyyy-mm-dd)")? else {
            return Ok(());
        };
        let Some(to) = p.read_line("Enter To (yyyy-mm-dd)")? else {
            return Ok(());
        };
        let from = parse_date(&from, &self.date_format)?;
        let to = parse_date(&to, &self.date_format)?;
        print_results(p, &self.diary.search_entries_between_dates(from, to)?)
    }

    fn search_by_author<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        if self.authors.is_empty() {
            return p.print("No authors found!");
        }
        let author = validate_not_null(self.select_existing_author(p)?, "Author")?;
        print_results(p, &self.diary.get_entries_by_author(author.email())?)
    }

    fn show_statistics<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        p.print_block(&format_statistics(&self.diary.get_author_statistics()))
    }

    fn edit_entry<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let Some(input) = p.read_line("Enter the ID of the entry you want to edit")? else {
            return Ok(());
        };
        let id = parse_id(&input)?;
        if self.diary.get_entry_by_id(id)?.is_none() {
            return p.error(&format!("No entry with ID {}.", id));
        }

        let Some(description) = p.read_line("New description")? else {
            return Ok(());
        };
        if self.diary.edit_description(id, &description)? {
            debug!(id, "entry edited");
            p.success("Entry updated!")?;
        }
        Ok(())
    }
}

fn print_results<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    results: &[&DiaryEntry],
) -> Result<()> {
    if !results.is_empty() {
        p.print("\n--- SEARCH RESULTS ---")?;
    }
    p.print_block(&format_entry_list(results))
}

/// Print input errors and keep going; anything else ends the session
fn report<R: BufRead, W: Write>(p: &mut Prompter<R, W>, outcome: Result<()>) -> Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(e) if e.is_input_error() => {
            warn!(error = %e, "menu action failed");
            p.error(&e.to_string())
        }
        Err(e) => Err(e),
    }
}
