//! Tick-loop progress/reporting hooks. Nearly identical in shape to
//! `dt_sim::SimObserver`: every method has a no-op default, so an
//! implementor overrides only what it cares about.

use metro_core::Tick;

/// Callbacks invoked by [`crate::worker::Worker::run_ticks`] at key points
/// in the tick loop.
///
/// # Example — printing the snapshot as it's produced
///
/// ```rust,ignore
/// struct PrintObserver;
/// impl WorkerObserver for PrintObserver {
///     fn on_snapshot(&mut self, _tick: Tick, line: &str) {
///         println!("{line}");
///     }
/// }
/// ```
pub trait WorkerObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after the transfer protocol and
    /// barrier have both completed.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once per print-window tick, but only on the worker that
    /// assembled the full snapshot (worker 0) — see
    /// [`metro_output::gather_and_format`].
    fn on_snapshot(&mut self, _tick: Tick, _line: &str) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`WorkerObserver`] that does nothing. Use when you need to call `run`
/// without wiring up progress callbacks.
pub struct NoopObserver;

impl WorkerObserver for NoopObserver {}
