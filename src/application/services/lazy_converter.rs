use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::application::ports::{ConversionError, DocumentConverter};

type ConverterInit =
    Arc<dyn Fn() -> Result<Arc<dyn DocumentConverter>, ConversionError> + Send + Sync>;

/// Process-wide conversion engine, constructed on first use.
///
/// Concurrent first calls construct the engine once. A failed construction is
/// not cached, so the next call tries again; a constructed engine is kept for
/// the lifetime of the value.
pub struct LazyConverter {
    cell: OnceCell<Arc<dyn DocumentConverter>>,
    init: ConverterInit,
}

impl LazyConverter {
    pub fn new<F>(init: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn DocumentConverter>, ConversionError> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            init: Arc::new(init),
        }
    }

    /// Wraps an already constructed engine.
    pub fn ready(converter: Arc<dyn DocumentConverter>) -> Self {
        Self {
            cell: OnceCell::new_with(Some(converter)),
            init: Arc::new(|| {
                Err(ConversionError::Unavailable(
                    "converter was provided pre-built".to_string(),
                ))
            }),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn get(&self) -> Result<Arc<dyn DocumentConverter>, ConversionError> {
        let converter = self
            .cell
            .get_or_try_init(|| async {
                let init = Arc::clone(&self.init);
                let converter = tokio::task::spawn_blocking(move || init())
                    .await
                    .map_err(|e| {
                        ConversionError::Unavailable(format!("engine initialization aborted: {e}"))
                    })??;
                tracing::info!(engine = converter.engine(), "Conversion engine initialized");
                Ok::<_, ConversionError>(converter)
            })
            .await?;

        Ok(Arc::clone(converter))
    }
}
