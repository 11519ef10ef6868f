//! Trait describing a runnable client front-end.
use anyhow::Result;
use runtime::Runtime;

/// Frontend abstraction for UI layers.
///
/// The game is strictly turn based and single threaded, so a frontend drives
/// the [`Runtime`] directly: it reads a selection, calls the matching runtime
/// method, and presents the returned events.
///
/// # Implementations
///
/// - `CliFrontend`: line-based terminal UI (crossterm)
pub trait Frontend {
    /// Run the frontend loop.
    ///
    /// It should block until the user quits the application or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error (terminal
    /// I/O failure, empty encounter pool). Invalid selections are never fatal.
    fn run(&mut self, runtime: &mut Runtime) -> Result<()>;
}
