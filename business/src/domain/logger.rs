/// Logging port used by the cart use cases.
///
/// The business crate never talks to a logging backend directly; adapters in
/// the infrastructure layer decide where messages go.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
