use async_trait::async_trait;

/// An unbounded source of raw log lines, in the order they were written.
///
/// Implementations never end and never surface transient errors: they
/// retry internally and only return once a complete line is available.
/// A source is not restartable; resuming requires a new instance.
#[async_trait]
pub trait LineSource: Send {
    /// Waits for the next complete line, without its line terminator.
    async fn next_line(&mut self) -> String;
}
