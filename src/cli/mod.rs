//! Command-line surface: argument parsing, prompts, and rendered output.

pub mod io;
pub mod output;
pub mod table;

use clap::{Parser, Subcommand};

use crate::{
    errors::LedgerError,
    ledger::{LedgerStore, CURRENCY_SYMBOL},
};

#[derive(Parser)]
#[command(name = "ledger_cli")]
#[command(about = "Personal finance ledger backed by a flat CSV file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record an income entry
    Deposit {
        /// Amount to deposit
        amount: f64,
        #[arg(short, long, default_value = "Income")]
        category: String,
    },
    /// Record an expense entry
    Withdraw {
        /// Amount to withdraw
        amount: f64,
        #[arg(short, long, default_value = "Expense")]
        category: String,
    },
    /// Edit the entry at the given ledger position
    Edit {
        /// 0-based position of the entry (shifts after deletions)
        ledger_id: usize,
    },
    /// Delete the entry at the given ledger position
    Delete {
        /// 0-based position of the entry (shifts after deletions)
        ledger_id: usize,
    },
    /// Show the balance summary and the entry table
    Display {
        /// Show the full table instead of the last five entries
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Runs one parsed command against the ledger in the working directory.
pub fn run(cli: Cli) -> Result<(), LedgerError> {
    let mut store = LedgerStore::open_default()?;

    match cli.command {
        None => println!("{}", store.summary_text()),
        Some(Command::Deposit { amount, category }) => {
            let description = io::prompt_description()?;
            store.deposit(amount, description, &category)?;
            output::success(format!(
                "Recorded deposit of {CURRENCY_SYMBOL}{amount:.2} ({category})"
            ));
        }
        Some(Command::Withdraw { amount, category }) => {
            let description = io::prompt_description()?;
            store.withdraw(amount, description, &category)?;
            output::success(format!(
                "Recorded withdrawal of {CURRENCY_SYMBOL}{amount:.2} ({category})"
            ));
        }
        Some(Command::Edit { ledger_id }) => {
            let entry = store.select_entry(ledger_id)?.clone();
            output::info(entry.date_label());
            // The prompted side mirrors the side the entry already uses.
            let amount = if entry.deposit == 0.0 {
                io::prompt_amount("Withdrawal", entry.withdrawal)?
            } else if entry.withdrawal == 0.0 {
                io::prompt_amount("Deposit", entry.deposit)?
            } else {
                0.0
            };
            let description = io::prompt_text("Description", &entry.description)?;
            let category = io::prompt_text("Category", &entry.category)?;
            store.edit_entry(ledger_id, amount, description, category)?;
            let updated = store.select_entry(ledger_id)?;
            print!(
                "{}",
                table::render(ledger_id, std::slice::from_ref(updated))
            );
        }
        Some(Command::Delete { ledger_id }) => {
            if io::confirm(&format!("Delete entry {ledger_id}?"), false)? {
                store.delete_entry(ledger_id)?;
                output::success(format!("Deleted entry {ledger_id}"));
            } else {
                output::info("Nothing deleted");
            }
        }
        Some(Command::Display { verbose }) => {
            println!("{}", store.summary_text());
            let view = store.display(verbose);
            if view.is_empty() {
                output::info("The ledger is empty");
            } else {
                let offset = store.len() - view.len();
                print!("{}", table::render(offset, view));
            }
        }
    }
    Ok(())
}
