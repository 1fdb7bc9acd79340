//! Service capability: start/stop/is-running, independent of any entity type.

/// Operational contract for anything that can be started and stopped.
///
/// The contract mandates no state of its own; each conforming type owns its
/// run-state representation. The states implied by the naming are
/// `Stopped` and `Running`, with `start` moving towards `Running` and `stop`
/// towards `Stopped`.
///
/// The trait is object-safe so callers can manage heterogeneous services
/// through `&mut dyn Service` or `Box<dyn Service>`.
pub trait Service {
    /// Move the service towards the running state.
    fn start(&mut self);

    /// Move the service towards the stopped state.
    fn stop(&mut self);

    /// Whether the service currently reports itself as running.
    fn is_running(&self) -> bool;
}
