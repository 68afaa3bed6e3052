use anyhow::Result;
use social_storage::Storage;

use crate::cli::PostCommands;
use crate::commands::print_json;

pub async fn handle(cmd: PostCommands, storage: &Storage) -> Result<()> {
    match cmd {
        PostCommands::Create { user_email, text } => {
            let post = storage.create_post(&user_email, &text).await?;
            print_json(&post)
        }
        PostCommands::List { user_email } => {
            let mut posts = storage.get_posts(&user_email).await?;
            // Stable output for humans; storage order is arbitrary.
            posts.sort_by_key(|post| post.created_at);
            print_json(&posts)
        }
        PostCommands::Delete { id } => {
            storage.delete_post(&id).await?;
            println!("✓ Deleted post {}", id);
            Ok(())
        }
    }
}
