use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use docling_extract::application::ports::{ConversionError, DocumentConverter};
use docling_extract::application::services::LazyConverter;
use docling_extract::infrastructure::conversion::PlainTextConverter;

#[tokio::test]
async fn given_concurrent_first_calls_when_getting_then_constructs_once() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);
    let lazy = Arc::new(LazyConverter::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(std::time::Duration::from_millis(20));
        Ok(Arc::new(PlainTextConverter::new()) as Arc<dyn DocumentConverter>)
    }));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let lazy = Arc::clone(&lazy);
            tokio::spawn(async move { lazy.get().await.map(|c| c.engine()) })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "plain_text");
    }

    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    assert!(lazy.is_initialized());
}

#[tokio::test]
async fn given_failed_construction_when_getting_again_then_retries() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let lazy = LazyConverter::new(move || {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(ConversionError::Unavailable("model download failed".to_string()))
        } else {
            Ok(Arc::new(PlainTextConverter::new()) as Arc<dyn DocumentConverter>)
        }
    });

    let first = lazy.get().await;
    assert!(matches!(first, Err(ConversionError::Unavailable(_))));
    assert!(!lazy.is_initialized());

    let second = lazy.get().await;
    assert!(second.is_ok());
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_ready_converter_when_getting_then_returns_it_without_init() {
    let lazy = LazyConverter::ready(Arc::new(PlainTextConverter::new()));

    assert!(lazy.is_initialized());
    assert_eq!(lazy.get().await.unwrap().engine(), "plain_text");
}
