use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use techtrends::db::{Database, PostRepository, schema};

struct TempDb {
    path: PathBuf,
    db: Database,
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn temp_db(tag: &str) -> TempDb {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "techtrends-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let db = Database::from_url(&format!("sqlite:{}", path.display()))
        .expect("failed to parse database url");
    TempDb { path, db }
}

async fn repository(tag: &str) -> (TempDb, PostRepository) {
    let tmp = temp_db(tag);
    schema::bootstrap(&tmp.db).await.expect("bootstrap failed");
    let repo = PostRepository::new(tmp.db.clone());
    (tmp, repo)
}

#[tokio::test]
async fn bootstrap_is_not_counted() {
    let (tmp, _repo) = repository("bootstrap").await;
    assert_eq!(tmp.db.executed_statements(), 0);

    // running it twice is harmless
    schema::bootstrap(&tmp.db).await.expect("second bootstrap failed");
    assert_eq!(tmp.db.executed_statements(), 0);
}

#[tokio::test]
async fn get_post_returns_row_or_none() {
    let (_tmp, repo) = repository("get-post").await;

    let id = repo.create_post("First", "Body").await.unwrap();

    let post = repo.get_post(id).await.unwrap().expect("post should exist");
    assert_eq!(post.id, id);
    assert_eq!(post.title, "First");
    assert_eq!(post.content, "Body");

    assert!(repo.get_post(id + 1).await.unwrap().is_none());
    assert!(repo.get_post(-1).await.unwrap().is_none());
}

#[tokio::test]
async fn get_post_binds_parameters() {
    let (_tmp, repo) = repository("binding").await;
    repo.create_post("x'); DROP TABLE posts; --", "")
        .await
        .unwrap();

    assert_eq!(repo.get_post_count().await.unwrap(), 1);
    let post = repo.get_post(1).await.unwrap().unwrap();
    assert_eq!(post.title, "x'); DROP TABLE posts; --");
}

#[tokio::test]
async fn count_tracks_inserts() {
    let (_tmp, repo) = repository("count").await;

    assert_eq!(repo.get_post_count().await.unwrap(), 0);
    for i in 0..3 {
        repo.create_post(&format!("post {i}"), "").await.unwrap();
        assert_eq!(repo.get_post_count().await.unwrap(), i + 1);
    }

    let titles: Vec<String> = repo
        .list_posts()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, ["post 0", "post 1", "post 2"]);
}

#[tokio::test]
async fn counter_equals_statements_executed() {
    let (tmp, repo) = repository("counter").await;

    repo.create_post("a", "b").await.unwrap(); // 1
    repo.get_post(1).await.unwrap(); // 2
    repo.get_post(99).await.unwrap(); // 3
    repo.get_post_count().await.unwrap(); // 4
    repo.list_posts().await.unwrap(); // 5

    assert_eq!(tmp.db.executed_statements(), 5);
}

#[tokio::test]
async fn counter_is_exact_under_concurrency() {
    let (tmp, repo) = repository("concurrent").await;

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.get_post_count().await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(tmp.db.executed_statements(), 16);
}

#[tokio::test]
async fn missing_table_surfaces_as_schema_error() {
    let tmp = temp_db("no-schema");
    let repo = PostRepository::new(tmp.db.clone());

    let err = repo.get_post_count().await.unwrap_err();
    assert!(err.is_missing_schema());
    assert_eq!(tmp.db.executed_statements(), 1);
}
