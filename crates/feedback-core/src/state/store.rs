use super::events::Event;
use super::types::Command;

/// Trait for dispatching app commands.
///
/// Decouples command definitions from their execution. The CLI subcommands
/// and the interactive shell both drive the app through this trait.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received.
/// - **Error handling**: Implementations define their own error type. Errors
///   should distinguish user errors (bad input, wrong credentials) from system
///   errors (storage failure).
/// - **Events**: On success, dispatch returns a `Vec<Event>` describing what
///   changed. An empty vector means the command was accepted but changed nothing.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
