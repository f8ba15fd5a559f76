//! CLI Module for shoplist
//! Lets the list be read and changed straight from the shell without
//! launching the TUI. Every command opens the data file, applies one change
//! and exits.

pub mod commands;
pub mod listing;

use crate::config::Config;
use crate::models::ArticleStore;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Executes CLI commands based on the provided arguments
pub fn execute_cli(args: &[String], config: &Config, mut store: ArticleStore) -> Result<()> {
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    let currency = config.currency.as_str();
    let arg = |i: usize| args.get(i).map(String::as_str);

    match args[0].as_str() {
        "list" | "ls" => commands::list_articles(&store, currency),
        "add" => match (arg(1), arg(2)) {
            (Some(name), Some(category)) => {
                commands::add_article(&mut store, currency, name, category, arg(3).unwrap_or(""))?
            }
            _ => return Err(missing_arguments("shoplist add <NAME> <CATEGORY> [PRICE]")),
        },
        "edit" => match (arg(1), arg(2), arg(3)) {
            (Some(id), Some(name), Some(category)) => {
                commands::edit_article(&mut store, id, name, category, arg(4).unwrap_or(""))?
            }
            _ => return Err(missing_arguments("shoplist edit <ID> <NAME> <CATEGORY> [PRICE]")),
        },
        "bought" | "toggle" => match arg(1) {
            Some(id) => commands::toggle_bought(&mut store, id)?,
            None => return Err(missing_arguments("shoplist bought <ID>")),
        },
        "remove" | "rm" => match arg(1) {
            Some(id) => commands::remove_article(&mut store, id)?,
            None => return Err(missing_arguments("shoplist remove <ID>")),
        },
        "clear" => commands::clear_articles(&mut store)?,
        "total" => commands::show_total(&store, currency),
        "categories" => commands::list_categories(&store),
        "export" => match arg(1) {
            Some(path) => commands::export_articles(&store, currency, Path::new(path))?,
            None => return Err(missing_arguments("shoplist export <PATH>")),
        },
        "path" => println!(
            "{}  {}",
            "┃".bright_magenta(),
            store.storage().path().display()
        ),
        "help" | "--help" | "-h" => print_help(),
        other => {
            print_help();
            anyhow::bail!("Unknown command: {}", other);
        }
    }

    Ok(())
}

fn missing_arguments(usage: &str) -> anyhow::Error {
    println!("{}  Usage: {}", "┃".bright_magenta(), usage);
    anyhow::anyhow!("Missing arguments for `{}`", usage)
}

/// Prints the help message with available commands
fn print_help() {
    let bar = "┃".bright_magenta();
    println!("{}  {}", bar, "SHOPLIST - ARTICLE PRICE CALCULATOR".bold());
    println!("{}  {}", bar, "USAGE:".bright_yellow());
    println!("{}  shoplist [COMMAND] [ARGS]", bar);
    println!("{}  {}", bar, "COMMANDS:".bright_yellow());

    let commands = [
        ("list, ls", "List articles grouped by category with totals"),
        ("add <NAME> <CAT> [PRICE]", "Add an article (price like 1,50)"),
        ("edit <ID> <NAME> <CAT> [PRICE]", "Replace an article's fields"),
        ("bought, toggle <ID>", "Mark an article bought / not bought"),
        ("remove, rm <ID>", "Remove an article"),
        ("clear", "Remove all articles"),
        ("total", "Print the total price"),
        ("categories", "List the configured categories in order"),
        ("export <PATH>", "Write the list as JSON"),
        ("path", "Print the location of the data file"),
        ("help", "Display this help message"),
    ];
    for (command, description) in commands {
        println!("{}  {:<32} {}", bar, command.bright_white(), description);
    }

    println!("{}  {}", bar, "TIP:".bright_green());
    println!(
        "{}  IDs are the 8-character codes shown by `shoplist list`",
        bar
    );
    println!(
        "{}  Run with no arguments to launch the full TUI (Terminal User Interface) mode",
        bar
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryList, CsvStorage};
    use tempfile::TempDir;

    fn run(dir: &TempDir, args: &[&str]) -> Result<()> {
        let storage = CsvStorage::new(dir.path().join("articles.csv"));
        let store = ArticleStore::open(storage, CategoryList::default())?;
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        execute_cli(&args, &Config::default(), store)
    }

    #[test]
    fn test_missing_arguments_fail() {
        let dir = TempDir::new().unwrap();
        for args in [&["add", "Milk"][..], &["edit", "abc"], &["bought"], &["rm"], &["export"]] {
            let err = run(&dir, args).unwrap_err();
            assert!(err.to_string().contains("Missing arguments"), "{args:?}");
        }
        assert!(!dir.path().join("articles.csv").exists());
    }

    #[test]
    fn test_unknown_command_fails() {
        let dir = TempDir::new().unwrap();
        let err = run(&dir, &["frobnicate"]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: frobnicate");
    }

    #[test]
    fn test_known_commands_succeed() {
        let dir = TempDir::new().unwrap();
        run(&dir, &["add", "Milk", "Milk products", "1,50"]).unwrap();
        run(&dir, &["total"]).unwrap();
        run(&dir, &["help"]).unwrap();
    }
}
