use anyhow::Result;
use social_storage::Storage;

use crate::cli::UserCommands;
use crate::commands::print_json;

pub async fn handle(cmd: UserCommands, storage: &Storage) -> Result<()> {
    match cmd {
        UserCommands::Create {
            email,
            password,
            name,
            age,
        } => {
            let user = storage.create_user(&email, &password, &name, age).await?;
            print_json(&user)
        }
        UserCommands::Get { email } => {
            let user = storage.get_user(&email).await?;
            if user.is_zero() {
                anyhow::bail!("user {} not found", email);
            }
            print_json(&user)
        }
        UserCommands::Update {
            email,
            password,
            name,
            age,
        } => {
            let user = storage.update_user(&email, &password, &name, age).await?;
            print_json(&user)
        }
        UserCommands::Delete { email } => {
            storage.delete_user(&email).await?;
            println!("✓ Deleted user {}", email);
            Ok(())
        }
    }
}
