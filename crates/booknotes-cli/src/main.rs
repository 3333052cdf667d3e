//! Book-notes command line interface.
//!
//! Provides the `booknotes` binary: every data-layer operation (add, list,
//! show, edit, rm, clear, stats, export, import) over a SQLite-backed store.
//! The binary is a pure consumer of the core API; all collection semantics
//! live in `booknotes-core` and `booknotes-storage`.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use booknotes_core::{library_stats, sorted, BookDraft, BookPatch, SortKey};
use booknotes_storage::{BookStore, SqliteStore};

/// Track books you have read, with ratings, dates, and notes.
#[derive(Parser)]
#[command(name = "booknotes", about = "Track books you have read, with ratings and notes")]
struct Cli {
    /// Path to the database file.
    #[arg(long, default_value = "booknotes.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Add a book.
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Date the book was finished (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,

        /// Rating from 1 to 5.
        #[arg(long)]
        rating: u8,

        #[arg(long, default_value = "")]
        isbn: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List all books.
    List {
        /// Sort order: rating-desc, date-desc, date-asc, title-asc, title-desc.
        #[arg(long, default_value = "rating-desc", value_parser = parse_sort_key)]
        sort: SortKey,
    },

    /// Show one book as JSON.
    Show { id: String },

    /// Edit fields of an existing book.
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        /// New finish date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        rating: Option<u8>,

        #[arg(long)]
        isbn: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a book by id.
    Rm { id: String },

    /// Delete every book.
    Clear,

    /// Print collection statistics as JSON.
    Stats,

    /// Print the portable export document.
    Export,

    /// Import books from an export document file.
    Import { file: PathBuf },
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    SortKey::from_str(s)
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let db_path = cli.db.to_string_lossy();
    let backend = SqliteStore::open(&db_path)?;
    let mut store = BookStore::open(backend)?;

    match cli.command {
        Commands::Add {
            title,
            author,
            date,
            rating,
            isbn,
            notes,
        } => {
            let book = store.create(BookDraft {
                title,
                author,
                isbn,
                date_read: date,
                rating,
                notes,
                cover_url: None,
            })?;
            println!("Added \"{}\" ({})", book.title, book.id);
        }

        Commands::List { sort } => {
            let books = sorted(&store.list(), sort);
            if books.is_empty() {
                println!("No books yet.");
            } else {
                for book in books {
                    println!(
                        "{}  {}  {}/5  {} — {}",
                        book.id, book.date_read, book.rating, book.title, book.author
                    );
                }
            }
        }

        Commands::Show { id } => match store.get(&id) {
            Some(book) => println!("{}", serde_json::to_string_pretty(book)?),
            None => {
                eprintln!("Error: book not found: {}", id);
                process::exit(1);
            }
        },

        Commands::Edit {
            id,
            title,
            author,
            date,
            rating,
            isbn,
            notes,
        } => {
            let book = store.update(
                &id,
                BookPatch {
                    title,
                    author,
                    isbn,
                    date_read: date,
                    rating,
                    notes,
                    cover_url: None,
                },
            )?;
            println!("Updated \"{}\" ({})", book.title, book.id);
        }

        Commands::Rm { id } => {
            if store.delete(&id)? {
                println!("Deleted {}", id);
            } else {
                println!("No book with id {}", id);
            }
        }

        Commands::Clear => {
            let removed = store.clear()?;
            println!("Removed {} book(s)", removed);
        }

        Commands::Stats => {
            let stats = library_stats(&store.list());
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }

        Commands::Export => {
            println!("{}", store.export()?);
        }

        Commands::Import { file } => {
            let text = fs::read_to_string(&file)?;
            let outcome = store.import(&text)?;
            println!(
                "Imported {} book(s), rejected {}",
                outcome.accepted.len(),
                outcome.rejected
            );
        }
    }

    Ok(())
}
