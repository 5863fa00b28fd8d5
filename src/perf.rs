//! Handler latency instrumentation.
//!
//! Touch handlers run on the input path, often 120+ times per second, so a
//! slow one shows up directly as scroll lag. Wrap a handler in
//! [`profile_scope!`] to get a warning whenever it overruns its budget:
//!
//! ```ignore
//! fn handle_touch_move(&mut self, frame: &TouchFrame) -> MoveOutcome {
//!     profile_scope!("touch_move");
//!     // ... handler body ...
//! }
//! ```
//!
//! With the `profiling` feature every handler is reported via `trace!`
//! regardless of duration.

use crate::constants::HANDLER_BUDGET_MS;
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
#[cfg(not(feature = "profiling"))]
use tracing::warn;

/// Time the enclosing scope and report it when the timer drops.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        let _timer = $crate::perf::HandlerTimer::new($name);
    };
    ($name:expr, $budget_ms:expr) => {
        let _timer = $crate::perf::HandlerTimer::with_budget($name, $budget_ms);
    };
}

pub use crate::profile_scope;

/// A scoped timer that reports a handler's duration on drop.
pub struct HandlerTimer {
    name: &'static str,
    start: Instant,
    budget_ms: f64,
}

impl HandlerTimer {
    /// Timer with the default handler budget.
    pub fn new(name: &'static str) -> Self {
        Self::with_budget(name, HANDLER_BUDGET_MS)
    }

    pub fn with_budget(name: &'static str, budget_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            budget_ms,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn budget_ms(&self) -> f64 {
        self.budget_ms
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn is_over_budget(&self) -> bool {
        self.elapsed_ms() > self.budget_ms
    }
}

impl Drop for HandlerTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        trace!(
            handler = self.name,
            elapsed_ms = format!("{:.3}", elapsed_ms),
            over_budget = elapsed_ms > self.budget_ms,
            "[PERF]"
        );

        #[cfg(not(feature = "profiling"))]
        if elapsed_ms > self.budget_ms {
            warn!(
                handler = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                budget_ms = format!("{:.2}", self.budget_ms),
                "Slow touch handler"
            );
        }
    }
}
