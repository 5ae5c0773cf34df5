use crate::core::{LoadSummary, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<LoadSummary> {
        tracing::info!("Starting ingest");

        // Extract
        let lines = self.pipeline.extract().await?;
        tracing::info!("Extracted {} lines", lines.len());
        self.monitor.log_stats("Extract");

        // Transform
        let words = self.pipeline.transform(lines).await?;
        tracing::info!("Prepared {} words", words.len());
        self.monitor.log_stats("Transform");

        // Load
        let summary = self.pipeline.load(words).await?;
        tracing::info!("Submitted {} words", summary.submitted);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(summary)
    }
}
