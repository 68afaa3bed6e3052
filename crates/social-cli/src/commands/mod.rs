pub mod init;
pub mod post;
pub mod serve;
pub mod user;

use anyhow::Result;
use serde::Serialize;

/// Print a record as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
