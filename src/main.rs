mod analytics;
mod api;
mod bookmarks;
mod error;
mod mockgen;
mod models;
mod search;
mod tui;

use anyhow::Result;
use bookmarks::BookmarkStore;
use clap::{Parser, Subcommand};
use error::HrError;
use models::{Department, Employee, EmployeeDetails};
use rand::rngs::StdRng;
use rand::SeedableRng;
use search::FilterState;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "HR dashboard - browse, search, and bookmark employees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List employees
    List {
        /// Free-text search over name, email, and department
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by department (HR, Tech, Finance); repeatable
        #[arg(short, long)]
        department: Vec<String>,

        /// Filter by performance rating (1-5); repeatable
        #[arg(short, long)]
        rating: Vec<u8>,

        /// Only show bookmarked employees
        #[arg(short, long)]
        bookmarked: bool,
    },

    /// Show one employee's detail bundle
    Show {
        /// Employee ID
        id: u64,

        /// Seed for reproducible mock detail generation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Manage bookmarks
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommands,
    },

    /// Department rating averages and bookmark trend
    Analytics,

    /// Interactive dashboard
    Browse,
}

#[derive(Subcommand)]
enum BookmarkCommands {
    /// List bookmarked employee IDs
    List,

    /// Bookmark an employee
    Add {
        /// Employee ID
        id: u64,
    },

    /// Remove a bookmark
    Remove {
        /// Employee ID
        id: u64,
    },

    /// Toggle a bookmark
    Toggle {
        /// Employee ID
        id: u64,
    },

    /// Remove all bookmarks
    Clear,
}

fn parse_departments(raw: &[String]) -> Result<Option<Vec<Department>>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let mut departments = Vec::with_capacity(raw.len());
    for s in raw {
        departments.push(s.parse::<Department>().map_err(anyhow::Error::msg)?);
    }
    Ok(Some(departments))
}

fn fetch() -> Result<Vec<Employee>> {
    let mut rng = rand::thread_rng();
    Ok(api::fetch_employees(&mut rng)?)
}

fn find_employee(employees: &[Employee], id: u64) -> Result<&Employee, HrError> {
    employees
        .iter()
        .find(|e| e.id == id)
        .ok_or(HrError::NotFound(id))
}

fn print_employee_table(employees: &[Employee], store: &BookmarkStore) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }
    println!(
        "{:<6} {:<3} {:<24} {:<32} {:<10} {:>6}",
        "ID", "", "NAME", "EMAIL", "DEPT", "RATING"
    );
    println!("{}", "-".repeat(86));
    for e in employees {
        let mark = if store.is_bookmarked(e.id) { "*" } else { "" };
        println!(
            "{:<6} {:<3} {:<24} {:<32} {:<10} {:>5}/5",
            e.id,
            mark,
            truncate(&e.full_name(), 22),
            truncate(&e.email, 30),
            e.department,
            e.rating
        );
    }
}

fn print_details(employee: &Employee, details: &EmployeeDetails) {
    println!("{} (#{})", employee.full_name(), employee.id);
    println!("Department: {}", employee.department);
    println!("Rating: {}/5", employee.rating);
    println!("Email: {}", employee.email);
    println!("Age: {}", employee.age);
    println!("Phone: {}", details.phone);
    println!("Address: {}", details.address);

    println!("\n--- Bio ---");
    for paragraph in details.bio.split("\n\n") {
        println!("{}\n", textwrap::fill(paragraph, 78));
    }

    println!("--- Performance History ---");
    for review in &details.performance_history {
        println!("{:<16} {}/5  {}", review.month, review.rating, review.comment);
    }

    println!("\n--- Projects ---");
    for project in &details.projects {
        println!(
            "{} [{}] - {} ({}%)",
            project.name, project.status, project.role, project.completion
        );
        match &project.end_date {
            Some(end) => println!("  {} to {}", project.start_date, end),
            None => println!("  Started {}", project.start_date),
        }
        println!("  {}", project.description);
    }

    if details.feedback.is_empty() {
        println!("\n--- Feedback ---\n(none this period)");
    } else {
        println!("\n--- Feedback ---");
        for entry in &details.feedback {
            println!(
                "{} ({}, {}) {}/5",
                entry.from, entry.kind, entry.date, entry.rating
            );
            println!("  {}", entry.message);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            search,
            department,
            rating,
            bookmarked,
        } => {
            let store = BookmarkStore::open()?;
            let employees = fetch()?;
            let filters = FilterState {
                search_term: search.unwrap_or_default(),
                departments: parse_departments(&department)?,
                ratings: if rating.is_empty() { None } else { Some(rating) },
            };
            let mut visible = search::select_visible(&employees, &filters);
            if bookmarked {
                visible.retain(|e| store.is_bookmarked(e.id));
            }
            print_employee_table(&visible, &store);
        }

        Commands::Show { id, seed } => {
            let employees = fetch()?;
            let employee = find_employee(&employees, id)?;
            let details = match seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    mockgen::generate_details(employee, &mut rng)
                }
                None => {
                    let mut rng = rand::thread_rng();
                    mockgen::generate_details(employee, &mut rng)
                }
            };
            print_details(employee, &details);
        }

        Commands::Bookmark { command } => {
            let mut store = BookmarkStore::open()?;
            match command {
                BookmarkCommands::List => {
                    if store.is_empty() {
                        println!("No bookmarks ({}).", store.path().display());
                    } else {
                        for id in store.ids() {
                            println!("{}", id);
                        }
                    }
                }
                BookmarkCommands::Add { id } => {
                    store.add(id)?;
                    println!("Bookmarked #{}", id);
                }
                BookmarkCommands::Remove { id } => {
                    store.remove(id)?;
                    println!("Removed bookmark for #{}", id);
                }
                BookmarkCommands::Toggle { id } => {
                    if store.toggle(id)? {
                        println!("Bookmarked #{}", id);
                    } else {
                        println!("Removed bookmark for #{}", id);
                    }
                }
                BookmarkCommands::Clear => {
                    store.clear()?;
                    println!("Cleared all bookmarks.");
                }
            }
        }

        Commands::Analytics => {
            let store = BookmarkStore::open()?;
            let employees = fetch()?;
            let stats = analytics::department_averages(&employees);

            println!("{:<10} {:>9} {:>12}", "DEPT", "HEADCOUNT", "AVG RATING");
            println!("{}", "-".repeat(33));
            for stat in &stats {
                println!(
                    "{:<10} {:>9} {:>12.1}",
                    stat.department, stat.headcount, stat.average_rating
                );
            }

            if let Some(top) = analytics::top_department(&stats) {
                println!(
                    "\nTop performing department: {} ({:.1}/5)",
                    top.department, top.average_rating
                );
            }

            let trend = analytics::bookmark_trend(store.len());
            let labels = analytics::trend_labels(chrono::Local::now().date_naive());
            println!("\nBookmark trend (last 6 months):");
            let points: Vec<String> = labels
                .iter()
                .zip(trend.iter())
                .map(|(label, count)| format!("{} {}", label, count))
                .collect();
            println!("  {}", points.join("  "));
            if analytics::trend_is_increasing(&trend) {
                println!("  Increasing trend");
            } else {
                println!("  Decreasing trend");
            }
        }

        Commands::Browse => {
            let store = BookmarkStore::open()?;
            tui::run_dashboard(store)?;
        }
    }

    Ok(())
}

/// Shortens to at most `max` bytes, cutting on a char boundary so
/// multi-byte names from the remote source never split mid-character.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let cut = max.saturating_sub(3);
    let end = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= cut)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("Ann Rao", 22), "Ann Rao");
    }

    #[test]
    fn test_truncate_long_ascii() {
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_truncate_multibyte_near_cut_point() {
        // 'é' spans bytes 18..20, straddling the cut at 19.
        let name = format!("{}ée with a long tail", "a".repeat(18));
        let short = truncate(&name, 22);
        assert!(short.ends_with("..."));
        assert!(short.len() <= 22);
        assert_eq!(short, format!("{}...", "a".repeat(18)));
    }

    #[test]
    fn test_truncate_cut_on_exact_boundary() {
        let name = format!("{}é tail", "a".repeat(19));
        let short = truncate(&name, 22);
        assert!(short.ends_with("..."));
        assert!(short.len() <= 22);
    }
}
