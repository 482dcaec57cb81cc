use std::time::Duration;

use crate::render::welcome;
use crate::timer::Scheduler;

/// Hands the overlay markup to `present` once `delay` has passed. Nothing
/// records that it was seen, so every page load shows it again.
pub fn schedule(scheduler: &dyn Scheduler, delay: Duration, present: impl FnOnce(String) + 'static) {
    scheduler.after(delay, Box::new(move || present(welcome::overlay())));
}
