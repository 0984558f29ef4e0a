//! Completion hand-off seam
//!
//! The core never transmits results anywhere; on completion the ordered
//! batch is handed to a [`ResultSink`] chosen by the surrounding
//! application.

use crate::session::SurveyResult;

/// Receiver for a completed survey batch
pub trait ResultSink {
    /// Deliver the ordered batch of results
    fn deliver(&mut self, results: &[SurveyResult]) -> Result<(), SinkError>;
}

/// Delivery failure reported by a sink
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("result delivery failed: {0}")]
pub struct SinkError(pub String);

/// Sink that logs the completed batch instead of transmitting it
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ResultSink for LogSink {
    fn deliver(&mut self, results: &[SurveyResult]) -> Result<(), SinkError> {
        tracing::info!(count = results.len(), "survey completed");
        for result in results {
            tracing::info!(
                scenario = result.scenario_id,
                probability = result.cooperation_probability,
                "survey result"
            );
        }
        Ok(())
    }
}

/// Sink that retains batches in memory, for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Batches received, oldest first
    pub batches: Vec<Vec<SurveyResult>>,
}

impl ResultSink for MemorySink {
    fn deliver(&mut self, results: &[SurveyResult]) -> Result<(), SinkError> {
        self.batches.push(results.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_retains_batches() {
        let mut sink = MemorySink::default();
        let batch = vec![SurveyResult::new(1, 0.4).unwrap()];
        sink.deliver(&batch).unwrap();
        sink.deliver(&batch).unwrap();
        assert_eq!(sink.batches.len(), 2);
        assert_eq!(sink.batches[0], batch);
    }

    #[test]
    fn log_sink_accepts_empty_batch() {
        assert!(LogSink.deliver(&[]).is_ok());
    }
}
