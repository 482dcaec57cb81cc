use std::rc::Rc;

use crate::config::Timings;
use crate::timer::Scheduler;

/// Drives a success toast: visible for `toast_visible`, then `fade` runs,
/// then `remove` runs `toast_fade` later.
pub fn schedule_dismissal(
    scheduler: Rc<dyn Scheduler>,
    timings: Timings,
    fade: impl FnOnce() + 'static,
    remove: impl FnOnce() + 'static,
) {
    let inner = scheduler.clone();
    scheduler.after(
        timings.toast_visible,
        Box::new(move || {
            fade();
            inner.after(timings.toast_fade, Box::new(remove));
        }),
    );
}
