/// Hand-off point to the managed queue. Implementations must be usable from
/// concurrent invocations; the handler never retries.
pub trait QueuePublisher {
    fn publish(&self, body: &str) -> Result<(), String>;
}
