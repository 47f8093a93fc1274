use tempfile::TempDir;

use docling_extract::application::ports::StagingArea;
use docling_extract::infrastructure::staging::TempStagingArea;

#[tokio::test]
async fn given_content_when_staging_then_writes_file_with_suffix() {
    let dir = TempDir::new().unwrap();
    let staging = TempStagingArea::new(dir.path().to_path_buf()).unwrap();

    let staged = staging.stage(".docx", b"payload").await.unwrap();

    let path = staged.path().to_path_buf();
    assert!(path.starts_with(dir.path()));
    assert!(path.to_string_lossy().ends_with(".docx"));
    assert_eq!(std::fs::read(&path).unwrap(), b"payload");

    staged.release().unwrap();
    assert!(!path.exists());
}

#[tokio::test]
async fn given_two_stages_when_staging_then_paths_are_unique() {
    let dir = TempDir::new().unwrap();
    let staging = TempStagingArea::new(dir.path().to_path_buf()).unwrap();

    let first = staging.stage(".pdf", b"a").await.unwrap();
    let second = staging.stage(".pdf", b"b").await.unwrap();

    assert_ne!(first.path(), second.path());
}

#[tokio::test]
async fn given_staged_file_when_dropped_then_file_is_removed() {
    let dir = TempDir::new().unwrap();
    let staging = TempStagingArea::new(dir.path().to_path_buf()).unwrap();

    let staged = staging.stage(".pdf", b"a").await.unwrap();
    let path = staged.path().to_path_buf();
    drop(staged);

    assert!(!path.exists());
}

#[test]
fn given_nested_directory_when_creating_area_then_creates_it() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");

    let staging = TempStagingArea::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert_eq!(staging.directory(), nested.as_path());
}
