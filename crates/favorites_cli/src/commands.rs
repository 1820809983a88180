//! Command modules for the favorites CLI.
//!
//! This module contains all the command implementations for the CLI
//! application. Each submodule handles one command:
//!
//! - `add_cmd`: Add an account to the favorites, enriched via GitHub
//! - `list_cmd`: Print the stored favorites, newest first
//! - `remove_cmd`: Remove an account from the favorites

pub mod add_cmd;
pub mod list_cmd;
pub mod remove_cmd;
