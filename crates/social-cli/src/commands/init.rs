use anyhow::Result;
use social_storage::Storage;

pub async fn handle(storage: &Storage) -> Result<()> {
    storage.ensure_db().await?;
    println!("✓ Database ready at {}", storage.path().display());
    Ok(())
}
