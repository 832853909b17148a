//! Submission seam between the form and whatever consumes submitted URLs.
//!
//! The downstream contract (request shape, response handling) is not decided
//! yet, so the only shipped sink reports the value to the structured log and
//! always succeeds. The event loop surfaces a sink error as an activity line
//! without retrying.

use anyhow::Result;

pub trait SubmitSink {
    fn submit(&mut self, url: &str) -> Result<()>;
}

/// Observation-only sink: one log line per submission.
pub struct LogSink;

impl SubmitSink for LogSink {
    fn submit(&mut self, url: &str) -> Result<()> {
        tracing::info!(url, "submit");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingSink {
        seen: Vec<String>,
    }

    impl SubmitSink for RecordingSink {
        fn submit(&mut self, url: &str) -> Result<()> {
            self.seen.push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn log_sink_always_succeeds() {
        let mut sink = LogSink;
        assert!(sink.submit("http://image.com/cat.png").is_ok());
        assert!(sink.submit("").is_ok());
    }

    #[test]
    fn each_submit_reaches_the_sink() {
        let mut sink = RecordingSink { seen: Vec::new() };
        sink.submit("http://image.com").unwrap();
        sink.submit("http://image.com").unwrap();
        assert_eq!(sink.seen, vec!["http://image.com", "http://image.com"]);
    }
}
