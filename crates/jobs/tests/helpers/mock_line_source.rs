use async_trait::async_trait;
use querytail_application::ports::LineSource;
use tokio::sync::mpsc;

// ============================================================================
// Mock LineSource fed from a channel
// ============================================================================

pub struct ScriptedLineSource {
    lines: mpsc::UnboundedReceiver<String>,
}

impl ScriptedLineSource {
    pub fn new() -> (Self, mpsc::UnboundedSender<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { lines: rx }, tx)
    }
}

#[async_trait]
impl LineSource for ScriptedLineSource {
    async fn next_line(&mut self) -> String {
        match self.lines.recv().await {
            Some(line) => line,
            // A real source never ends; park like one with nothing to read.
            None => std::future::pending().await,
        }
    }
}
