use std::rc::Rc;

use crate::api::{AnalyticsClient, Backend};
use crate::html;
use crate::messages;
use crate::render;
use crate::sequence::Sequence;
use crate::surface::Surface;

use super::{commit, Outcome};

/// Loads the three analytics payloads and renders the card grid.
pub struct DashboardLoader<B> {
    client: Rc<AnalyticsClient<B>>,
    sequence: Sequence,
}

impl<B: Backend> DashboardLoader<B> {
    pub const fn new(client: Rc<AnalyticsClient<B>>) -> Self {
        Self {
            client,
            sequence: Sequence::new(),
        }
    }

    /// Replaces the container's markup with either the dashboard or a single
    /// error banner. There is no retry; the user triggers a new load.
    pub async fn load(&self, surface: &impl Surface) -> Outcome {
        let ticket = self.sequence.begin();
        surface.set_html(&html::loading_block(messages::LOADING_DASHBOARD, 50));

        match self.client.dashboard().await {
            Ok(data) => {
                log::info!("dashboard analytics loaded");
                commit(
                    &self.sequence,
                    ticket,
                    surface,
                    &render::dashboard::render(&data),
                    Outcome::Rendered,
                )
            }
            Err(error) => {
                log::warn!("dashboard load failed: {error}");
                commit(
                    &self.sequence,
                    ticket,
                    surface,
                    &html::failure_banner(&error.to_string(), 50),
                    Outcome::Failed,
                )
            }
        }
    }
}
