/// Lifecycle of a runtime session.
///
/// Linear and one-directional, advanced only by successful
/// [`initialize`](RuntimeSession::initialize) and
/// [`terminate`](RuntimeSession::terminate) calls. Data operations are
/// never gated on it: a host receiving an out-of-session call reports
/// its own error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No successful initialize yet.
    #[default]
    Uninitialized,
    /// Between a successful initialize and a successful terminate.
    Active,
    /// After a successful terminate.
    Terminated,
}

/// Uniform lifecycle contract shared by both dialect adapters.
///
/// Every operation is a synchronous call into the host API object.
/// Failures never propagate: they degrade to `false` or `""` and emit a
/// log diagnostic.
pub trait RuntimeSession {
    /// Open the session with the host. Call once, before any data
    /// access. On success the dialect's baseline data-model elements
    /// are written best-effort.
    fn initialize(&mut self) -> bool;

    /// Close the session. Each call is forwarded to the host and
    /// reported independently; calling twice is safe.
    fn terminate(&mut self) -> bool;

    /// Read a data-model element. Returns `""` when the host is absent
    /// or reports a non-zero error code for the call.
    fn get_value(&self, element: &str) -> String;

    /// Write a data-model element. True only when the host returns the
    /// success sentinel and a clear error code.
    fn set_value(&self, element: &str, value: &str) -> bool;

    /// Ask the host to persist everything written so far. Same success
    /// criterion as [`set_value`](RuntimeSession::set_value).
    fn commit(&self) -> bool;
}
