use std::collections::HashSet;

use social_core::Document;
use social_storage::Storage;
use tempfile::TempDir;

fn create_test_storage() -> (TempDir, Storage) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(temp_dir.path().join("db.json"));
    (temp_dir, storage)
}

#[tokio::test]
async fn test_post_lifecycle() {
    let (_dir, storage) = create_test_storage();
    storage.ensure_db().await.unwrap();

    storage.create_user("a@x.com", "p", "A", 30).await.unwrap();
    let first = storage.create_post("a@x.com", "hi").await.unwrap();
    let second = storage.create_post("a@x.com", "bye").await.unwrap();
    assert_ne!(first.id, second.id);

    let texts: HashSet<String> = storage
        .get_posts("a@x.com")
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.text)
        .collect();
    assert_eq!(texts, HashSet::from(["hi".to_string(), "bye".to_string()]));

    storage.delete_post(&first.id).await.unwrap();

    let posts = storage.get_posts("a@x.com").await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].text, "bye");
    assert_eq!(posts[0].id, second.id);
}

#[tokio::test]
async fn test_posts_are_scoped_to_owner() {
    let (_dir, storage) = create_test_storage();

    storage.create_user("a@x.com", "p", "A", 30).await.unwrap();
    storage.create_user("b@x.com", "p", "B", 40).await.unwrap();

    let mut a_ids = HashSet::new();
    for i in 0..3 {
        let post = storage.create_post("a@x.com", &format!("a{i}")).await.unwrap();
        a_ids.insert(post.id);
    }
    let b_post = storage.create_post("b@x.com", "b0").await.unwrap();

    let fetched: HashSet<String> = storage
        .get_posts("a@x.com")
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(fetched, a_ids);

    let b_posts = storage.get_posts("b@x.com").await.unwrap();
    assert_eq!(b_posts, vec![b_post]);
}

#[tokio::test]
async fn test_delete_post_keeps_siblings() {
    let (_dir, storage) = create_test_storage();

    let keep = storage.create_post("a@x.com", "keep").await.unwrap();
    let dropped = storage.create_post("a@x.com", "drop").await.unwrap();
    let other = storage.create_post("b@x.com", "other").await.unwrap();

    storage.delete_post(&dropped.id).await.unwrap();

    assert_eq!(storage.get_posts("a@x.com").await.unwrap(), vec![keep]);
    assert_eq!(storage.get_posts("b@x.com").await.unwrap(), vec![other]);
}

#[tokio::test]
async fn test_file_roundtrip_preserves_records() {
    let (_dir, storage) = create_test_storage();

    let user = storage.create_user("a@x.com", "p", "A", 30).await.unwrap();
    let post = storage.create_post("a@x.com", "hi").await.unwrap();

    let bytes = std::fs::read(storage.path()).unwrap();
    let doc = Document::from_json(&bytes).unwrap();
    assert_eq!(doc.users.get("a@x.com"), Some(&user));
    assert_eq!(doc.posts.get(&post.id), Some(&post));

    // Re-encoding the parsed document reproduces the same records.
    let reparsed = Document::from_json(&doc.to_json().unwrap()).unwrap();
    assert_eq!(reparsed, doc);

    // A second client on the same file sees the same state.
    let reopened = Storage::new(storage.path());
    assert_eq!(reopened.get_user("a@x.com").await.unwrap(), user);
    assert_eq!(reopened.get_posts("a@x.com").await.unwrap(), vec![post]);
}

#[tokio::test]
async fn test_reads_file_written_elsewhere() {
    let (_dir, storage) = create_test_storage();
    let json = r#"{
        "users": {
            "a@x.com": {
                "createdAt": "2023-11-05T08:09:10.5Z",
                "email": "a@x.com",
                "password": "p",
                "name": "A",
                "age": 30
            }
        },
        "posts": {
            "7f1d0c5e-6a55-4b8e-9a53-08c2b8a5b1c4": {
                "id": "7f1d0c5e-6a55-4b8e-9a53-08c2b8a5b1c4",
                "createdAt": "2023-11-05T08:10:00Z",
                "userEmail": "a@x.com",
                "text": "hello"
            }
        }
    }"#;
    std::fs::write(storage.path(), json).unwrap();

    let user = storage.get_user("a@x.com").await.unwrap();
    assert_eq!(user.name, "A");
    assert_eq!(user.created_at.year(), 2023);

    let posts = storage.get_posts("a@x.com").await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].text, "hello");
}

#[tokio::test]
async fn test_concurrent_writers_do_not_lose_updates() {
    let (_dir, storage) = create_test_storage();
    storage.ensure_db().await.unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            storage
                .create_user(&format!("user{i}@x.com"), "p", "U", i)
                .await
                .unwrap();
            storage
                .create_post(&format!("user{i}@x.com"), "post")
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let doc = Document::from_json(&std::fs::read(storage.path()).unwrap()).unwrap();
    assert_eq!(doc.users.len(), 16);
    assert_eq!(doc.posts.len(), 16);
    for i in 0..16 {
        let posts = storage.get_posts(&format!("user{i}@x.com")).await.unwrap();
        assert_eq!(posts.len(), 1);
    }
}
