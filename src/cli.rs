//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for recette using the
//! `clap` crate. All commands load the catalog given by `--catalog` (or the
//! configured default) and run the filter engine over it once.
//!
//! # Commands
//!
//! - **search**: Narrow the catalog by free text and selected tags
//! - **tags**: Show the tag values still available after narrowing
//! - **list**: List every recipe in the catalog (default)
//!
//! # Design Features
//!
//! - Tag selections use one repeatable flag per category (`-i`, `-a`, `-u`)
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g., `s` for `search`, `ls` for `list`)
//!
//! # Examples
//!
//! ```
//! use recette::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["recette", "search", "tarte", "-a", "four"]);
//! match cli.get_command() {
//!     Commands::Search { query, .. } => assert_eq!(query.as_deref(), Some("tarte")),
//!     _ => unreachable!(),
//! }
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::search::{Tag, TagKind};

/// Shared tag-selection arguments
#[derive(Parser, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Ingredient tags to select
    #[arg(short = 'i', long = "ingredient", value_name = "NAME", num_args = 0..)]
    pub ingredients: Vec<String>,

    /// Appliance tags to select
    #[arg(short = 'a', long = "appliance", value_name = "NAME", num_args = 0..)]
    pub appliances: Vec<String>,

    /// Utensil tags to select
    #[arg(short = 'u', long = "utensil", value_name = "NAME", num_args = 0..)]
    pub utensils: Vec<String>,
}

impl SelectionArgs {
    /// Iterate the requested tags in category order
    pub fn tags(&self) -> impl Iterator<Item = Tag> {
        let ingredients = self
            .ingredients
            .iter()
            .map(|value| Tag::new(TagKind::Ingredient, value.clone()));
        let appliances = self
            .appliances
            .iter()
            .map(|value| Tag::new(TagKind::Appliance, value.clone()));
        let utensils = self
            .utensils
            .iter()
            .map(|value| Tag::new(TagKind::Utensil, value.clone()));
        ingredients.chain(appliances).chain(utensils)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.appliances.is_empty() && self.utensils.is_empty()
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "recette")]
#[command(about = "An in-memory recipe search engine with tag filtering", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the catalog JSON file (overrides config)
    #[arg(short = 'c', long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search recipes by free text and selected tags
    #[command(visible_alias = "s")]
    Search {
        /// Free-text query matched against names, descriptions and ingredients
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Show full descriptions and ingredient quantities
        #[arg(short = 'l', long = "long")]
        long: bool,
    },

    /// Show the tag values still available after narrowing
    #[command(visible_alias = "t")]
    Tags {
        /// Free-text query applied before deriving available tags
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Print only tag values matching this text
        #[arg(short = 'm', long = "matching", value_name = "TEXT")]
        matching: Option<String>,
    },

    /// List every recipe in the catalog (default)
    #[command(visible_alias = "ls")]
    List,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List)
    }
}
