//! Interactive menu loop
//!
//! Dispatch goes through the `MenuChoice` enum and a single match; each
//! command prompts for its inputs, re-prompting on validation errors, and
//! renders the core's value snapshots. Storage errors propagate out of the
//! loop and crash the process rather than risk a silently corrupted store.

use anyhow::Result;
use mmdb_core::{validate, Catalog, Error, MovieRow};
use std::io::{self, Write};

// ANSI escape codes for colors
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuChoice {
    Exit,
    List,
    Add,
    Delete,
    Update,
    Stats,
    Random,
    Search,
    SortByRating,
    SortByYear,
    Filter,
    Chart,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "0" => Some(Self::Exit),
            "1" => Some(Self::List),
            "2" => Some(Self::Add),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Update),
            "5" => Some(Self::Stats),
            "6" => Some(Self::Random),
            "7" => Some(Self::Search),
            "8" => Some(Self::SortByRating),
            "9" => Some(Self::SortByYear),
            "10" => Some(Self::Filter),
            "11" => Some(Self::Chart),
            _ => None,
        }
    }
}

fn print_menu() {
    println!(
        "{BLUE}
Menu:
0. Exit
1. List movies
2. Add movie
3. Delete movie
4. Update movie
5. Stats
6. Random movie
7. Search movie
8. Movies sorted by rating
9. Movies sorted by year
10. Filter movies
11. Rating chart
{RESET}"
    );
}

/// Run the menu loop until the user exits.
pub fn run(catalog: &Catalog) -> Result<()> {
    println!(
        "{BLUE}{} My Movies Database {}{RESET}",
        "*".repeat(10),
        "*".repeat(10)
    );

    loop {
        print_menu();
        let input = prompt("Enter choice (0-11): ")?;
        if input.is_empty() {
            continue;
        }

        let Some(choice) = MenuChoice::parse(&input) else {
            println!("{RED}Invalid choice{RESET}");
            continue;
        };
        if choice == MenuChoice::Exit {
            println!("Bye!");
            return Ok(());
        }

        dispatch(catalog, choice)?;
        pause()?;
    }
}

/// Run one command. Duplicate/not-found/empty outcomes are rendered and
/// swallowed; storage errors bubble up.
fn dispatch(catalog: &Catalog, choice: MenuChoice) -> Result<()> {
    let outcome = match choice {
        MenuChoice::Exit => unreachable!("exit is handled by the loop"),
        MenuChoice::List => cmd_list(catalog),
        MenuChoice::Add => cmd_add(catalog),
        MenuChoice::Delete => cmd_delete(catalog),
        MenuChoice::Update => cmd_update(catalog),
        MenuChoice::Stats => cmd_stats(catalog),
        MenuChoice::Random => cmd_random(catalog),
        MenuChoice::Search => cmd_search(catalog),
        MenuChoice::SortByRating => cmd_sort_by_rating(catalog),
        MenuChoice::SortByYear => cmd_sort_by_year(catalog),
        MenuChoice::Filter => cmd_filter(catalog),
        MenuChoice::Chart => cmd_chart(catalog),
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(e) => match e.downcast_ref::<Error>() {
            Some(core) if core.is_validation() || matches!(core, Error::EmptyCollection) => {
                println!("{RED}{core}{RESET}");
                Ok(())
            }
            _ => Err(e),
        },
    }
}

fn cmd_list(catalog: &Catalog) -> Result<()> {
    let rows = catalog.list_all()?;
    println!("{} movies in total", rows.len());
    print_rows(&rows);
    Ok(())
}

fn cmd_add(catalog: &Catalog) -> Result<()> {
    let title = prompt_valid("Enter new movie name: ", validate::validate_title)?;
    let rating = prompt_valid("Enter new movie rating (0-10): ", validate::validate_rating)?;
    let year = prompt_valid("Enter year of release: ", validate::validate_year)?;

    catalog.add(&title, year, rating)?;
    println!("Movie {title} successfully added");
    Ok(())
}

fn cmd_delete(catalog: &Catalog) -> Result<()> {
    let title = prompt_valid("Enter movie name to delete: ", validate::validate_title)?;
    catalog.remove(&title)?;
    println!("Movie {title} successfully deleted");
    Ok(())
}

fn cmd_update(catalog: &Catalog) -> Result<()> {
    let title = prompt_valid("Enter movie name: ", validate::validate_title)?;
    let rating = prompt_valid("Enter new movie rating (0-10): ", validate::validate_rating)?;
    catalog.update_rating(&title, rating)?;
    println!("Movie {title} successfully updated");
    Ok(())
}

fn cmd_stats(catalog: &Catalog) -> Result<()> {
    let stats = catalog.stats()?;
    println!("Average rating: {:.2}", stats.mean);
    println!("Median rating: {}", stats.median);
    println!(
        "Best movie(s): {}, {}",
        stats.best.titles.join(", "),
        stats.best.rating
    );
    println!(
        "Worst movie(s): {}, {}",
        stats.worst.titles.join(", "),
        stats.worst.rating
    );
    Ok(())
}

fn cmd_random(catalog: &Catalog) -> Result<()> {
    let pick = catalog.random_pick()?;
    println!(
        "Your movie for tonight: {}, it's rated {}.",
        pick.title, pick.rating
    );
    Ok(())
}

fn cmd_search(catalog: &Catalog) -> Result<()> {
    // Empty queries are rejected here, at the input boundary; the search
    // engine itself accepts whatever it is given.
    let query = prompt_valid("Enter part of the movie name: ", |raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(Error::InvalidTitle)
        } else {
            Ok(trimmed.to_string())
        }
    })?;

    let hits = catalog.search(&query)?;
    if hits.is_empty() {
        println!("{RED}No matches found{RESET}");
        return Ok(());
    }
    for hit in hits {
        println!("{} ({}): {}", hit.title, hit.year, hit.rating);
    }
    Ok(())
}

fn cmd_sort_by_rating(catalog: &Catalog) -> Result<()> {
    print_rows(&catalog.sorted_by_rating()?);
    Ok(())
}

fn cmd_sort_by_year(catalog: &Catalog) -> Result<()> {
    print_rows(&catalog.sorted_by_year()?);
    Ok(())
}

fn cmd_filter(catalog: &Catalog) -> Result<()> {
    let min_rating = prompt_optional(
        "Enter minimum rating (leave blank for no minimum): ",
        validate::validate_rating,
    )?;
    let start_year = prompt_optional(
        "Enter start year (leave blank for no start year): ",
        validate::validate_year,
    )?;
    let end_year = prompt_optional(
        "Enter end year (leave blank for no end year): ",
        validate::validate_year,
    )?;

    let rows = catalog.filtered(min_rating, start_year, end_year)?;
    if rows.is_empty() {
        println!("No movies match the given criteria");
    } else {
        print_rows(&rows);
    }
    Ok(())
}

/// Plain ASCII stand-in for the original bar chart: one bar per movie,
/// two characters per rating point.
fn cmd_chart(catalog: &Catalog) -> Result<()> {
    let rows = catalog.list_all()?;
    if rows.is_empty() {
        return Err(Error::EmptyCollection.into());
    }
    let width = rows.iter().map(|r| r.title.len()).max().unwrap_or(0);
    for row in rows {
        let bar = "#".repeat((row.rating * 2.0).round() as usize);
        println!("{:width$}  {bar} {}", row.title, row.rating);
    }
    Ok(())
}

fn print_rows(rows: &[MovieRow]) {
    for row in rows {
        println!("{} ({}): {}", row.title, row.year, row.rating);
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{GREEN}{message}{RESET}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt until `validate` accepts the input.
fn prompt_valid<T>(message: &str, validate: impl Fn(&str) -> mmdb_core::Result<T>) -> Result<T> {
    loop {
        let raw = prompt(message)?;
        match validate(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{RED}{e}{RESET}"),
        }
    }
}

/// Like `prompt_valid`, but blank input means "no constraint".
fn prompt_optional<T>(
    message: &str,
    validate: impl Fn(&str) -> mmdb_core::Result<T>,
) -> Result<Option<T>> {
    loop {
        let raw = prompt(message)?;
        if raw.is_empty() {
            return Ok(None);
        }
        match validate(&raw) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => println!("{RED}{e}{RESET}"),
        }
    }
}

fn pause() -> io::Result<()> {
    print!("\nPress enter to continue");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
