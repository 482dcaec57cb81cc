//! Rendering and control logic for the AIS analytics dashboard.
//!
//! Everything here is host-independent: the browser shell and the headless
//! preview both drive the same controllers through the [`Backend`],
//! [`Surface`], [`SessionStore`] and [`Scheduler`] seams.

pub mod api;
pub mod config;
pub mod controllers;
pub mod domain;
pub mod error;
pub mod html;
pub mod messages;
pub mod render;
pub mod sequence;
pub mod session;
pub mod surface;
pub mod tabs;
pub mod timer;

pub use api::{AnalyticsClient, Backend, HttpReply};
pub use config::DashboardConfig;
pub use error::DashboardError;
pub use sequence::{Sequence, Ticket};
pub use session::{MemoryStore, SessionStore};
pub use surface::{MemorySurface, Surface};
pub use tabs::{FadeTransition, InstantTransition, TabController, TabDeck, TabTransition};
pub use timer::{ManualScheduler, Scheduler};
