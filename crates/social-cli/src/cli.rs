use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "social")]
#[command(about = "Users and posts over a JSON document", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "SOCIAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database file, overriding the configured path
    #[arg(long, global = true, env = "SOCIAL_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Create the database file if it is missing
    Init,

    /// Manage users
    #[command(subcommand)]
    User(UserCommands),

    /// Manage posts
    #[command(subcommand)]
    Post(PostCommands),
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a user (an existing email is left untouched)
    Create {
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "0")]
        age: i64,
    },

    /// Show a user
    Get { email: String },

    /// Replace an existing user
    Update {
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "0")]
        age: i64,
    },

    /// Delete a user
    Delete { email: String },
}

#[derive(Subcommand)]
pub enum PostCommands {
    /// Create a post for a user
    Create {
        /// Owner's email
        user_email: String,

        /// Post body
        text: String,
    },

    /// List a user's posts
    List { user_email: String },

    /// Delete a post by ID
    Delete { id: String },
}
