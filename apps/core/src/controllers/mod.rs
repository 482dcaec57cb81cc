//! One controller per user action. Each owns a [`Sequence`](crate::Sequence)
//! so that only its latest invocation may write to the container.

pub mod dashboard;
pub mod maps;
pub mod risk;
pub mod toast;
pub mod welcome;

#[cfg(test)]
pub(crate) mod scripted;

pub use dashboard::DashboardLoader;
pub use maps::{MapSource, MapToggle, MarineCadastreMap};
pub use risk::{RiskAnalysis, RiskForm};

use crate::sequence::{Sequence, Ticket};
use crate::surface::Surface;

/// What an invocation did to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fresh content was written.
    Rendered,
    /// An error message was written.
    Failed,
    /// A newer invocation started first; nothing was written.
    Superseded,
    /// Existing content was made visible again without a request.
    Shown,
    Hidden,
    /// Content is on its way through a timer.
    Scheduled,
    /// An existing frame was reloaded in place.
    Refreshed,
}

/// Writes `html` only if `ticket` still belongs to the latest invocation.
pub(crate) fn commit(
    sequence: &Sequence,
    ticket: Ticket,
    surface: &impl Surface,
    html: &str,
    outcome: Outcome,
) -> Outcome {
    if !sequence.is_current(ticket) {
        log::debug!("dropping stale response for request #{}", ticket.id());
        return Outcome::Superseded;
    }
    surface.set_html(html);
    outcome
}
