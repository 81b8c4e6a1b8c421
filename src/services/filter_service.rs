use pixel_filter::{Adjustment, PixelBuffer, Traversal};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::FilterError;
use crate::models::AppConfig;
use crate::rendering::DisplaySink;
use crate::services::ImageSource;

/// Source image and its filtered copy
#[derive(Debug, Clone)]
pub struct FilteredImage {
    pub source: PixelBuffer,
    pub filtered: PixelBuffer,
    /// Time spent in the traversal alone (excludes loading)
    pub elapsed: Duration,
}

/// Loads an image, applies one adjustment, and optionally presents it
pub struct FilterService {
    source: Arc<dyn ImageSource>,
    config: Arc<AppConfig>,
}

impl FilterService {
    pub fn new(source: Arc<dyn ImageSource>, config: Arc<AppConfig>) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load `identifier` and copy it through `adjustment`.
    ///
    /// Load failures are returned before any pixel is filtered.
    pub fn process(
        &self,
        identifier: &str,
        adjustment: &Adjustment,
    ) -> Result<FilteredImage, FilterError> {
        let source = self.source.load(identifier).map_err(|e| {
            tracing::warn!(identifier, error = %e, "Failed to load source image");
            e
        })?;

        let started = Instant::now();
        let filtered = source.apply(Traversal::Filter(*adjustment));
        let elapsed = started.elapsed();

        tracing::info!(
            identifier,
            filter = %adjustment.filter,
            amount = adjustment.amount,
            width = source.width(),
            height = source.height(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "Applied filter"
        );

        Ok(FilteredImage {
            source,
            filtered,
            elapsed,
        })
    }

    /// Process and hand the filtered image to `sink`
    pub fn render(
        &self,
        identifier: &str,
        adjustment: &Adjustment,
        sink: &dyn DisplaySink,
    ) -> Result<FilteredImage, FilterError> {
        let result = self.process(identifier, adjustment)?;
        sink.present(&result.filtered)?;
        Ok(result)
    }

    /// Run [`process`](Self::process) on the blocking thread pool.
    ///
    /// Both loading (blocking HTTP/file IO) and the traversal are CPU- or
    /// IO-bound and must not run on the async executor.
    pub async fn process_async(
        self: &Arc<Self>,
        identifier: String,
        adjustment: Adjustment,
    ) -> Result<FilteredImage, FilterError> {
        let service = Arc::clone(self);
        tokio::task::spawn_blocking(move || service.process(&identifier, &adjustment))
            .await
            .map_err(|e| FilterError::Task(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::rendering::MemorySink;
    use pixel_filter::Filter;
    use std::collections::HashMap;

    /// In-memory source keyed by identifier
    struct StaticSource(HashMap<String, PixelBuffer>);

    impl ImageSource for StaticSource {
        fn load(&self, identifier: &str) -> Result<PixelBuffer, SourceError> {
            self.0
                .get(identifier)
                .cloned()
                .ok_or_else(|| SourceError::load(identifier, "not found"))
        }
    }

    fn service() -> FilterService {
        let image = PixelBuffer::from_raw(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 128]).unwrap();
        let source = StaticSource(HashMap::from([("red-green".to_string(), image)]));
        FilterService::new(Arc::new(source), Arc::new(AppConfig::default()))
    }

    #[test]
    fn test_process_applies_filter_and_keeps_source() {
        let result = service()
            .process("red-green", &Adjustment::new(Filter::AverageGrayscale))
            .unwrap();
        assert_eq!(result.source.as_bytes(), &[255, 0, 0, 255, 0, 255, 0, 128]);
        assert_eq!(result.filtered.as_bytes(), &[85, 85, 85, 255, 85, 85, 85, 128]);
    }

    #[test]
    fn test_process_surfaces_load_error() {
        let err = service()
            .process("missing", &Adjustment::new(Filter::Contrast))
            .unwrap_err();
        assert!(matches!(err, FilterError::Source(SourceError::Load { .. })));
    }

    #[test]
    fn test_render_presents_filtered_image() {
        let sink = MemorySink::new();
        let result = service()
            .render(
                "red-green",
                &Adjustment::new(Filter::Brightness).amount(0.5),
                &sink,
            )
            .unwrap();
        assert_eq!(sink.last(), Some(result.filtered));
    }

    #[test]
    fn test_render_does_not_present_on_load_failure() {
        let sink = MemorySink::new();
        let err = service().render("missing", &Adjustment::new(Filter::Contrast), &sink);
        assert!(err.is_err());
        assert!(sink.last().is_none());
    }

    #[tokio::test]
    async fn test_process_async() {
        let service = Arc::new(service());
        let result = service
            .process_async(
                "red-green".to_string(),
                Adjustment::new(Filter::Saturation).amount(0.0),
            )
            .await
            .unwrap();
        assert_eq!(result.filtered.as_bytes(), &[85, 85, 85, 255, 85, 85, 85, 128]);
    }
}
