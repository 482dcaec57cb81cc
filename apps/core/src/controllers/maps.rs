use std::cell::Cell;
use std::rc::Rc;

use crate::api::{AnalyticsClient, Backend};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::html;
use crate::messages;
use crate::sequence::Sequence;
use crate::surface::Surface;
use crate::timer::Scheduler;

use super::{commit, Outcome};

/// Which server-rendered map a [`MapToggle`] shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSource {
    /// `/risk-map`, an HTML document.
    Risk,
    /// `map_html` of `/detect-vessel-groups`.
    VesselGroups,
}

impl MapSource {
    const fn loading_message(self) -> &'static str {
        match self {
            Self::Risk => messages::LOADING_RISK_MAP,
            Self::VesselGroups => messages::LOADING_VESSEL_GROUP_MAP,
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Risk => "Risk map",
            Self::VesselGroups => "Vessel groups map",
        }
    }
}

/// Show/hide control for a server-rendered map. The map is fetched on the
/// first show and after a failed load; later shows only flip visibility.
pub struct MapToggle<B> {
    client: Rc<AnalyticsClient<B>>,
    source: MapSource,
    loaded: Cell<bool>,
    sequence: Sequence,
}

impl<B: Backend> MapToggle<B> {
    pub const fn new(client: Rc<AnalyticsClient<B>>, source: MapSource) -> Self {
        Self {
            client,
            source,
            loaded: Cell::new(false),
            sequence: Sequence::new(),
        }
    }

    pub const fn source(&self) -> MapSource {
        self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    /// Forgets the loaded map and abandons any load in flight. Used when the
    /// container itself is thrown away and will be recreated.
    pub fn reset(&self) {
        self.sequence.begin();
        self.loaded.set(false);
    }

    pub async fn toggle(&self, surface: &impl Surface) -> Outcome {
        if surface.is_visible() {
            // Hiding abandons any load still in flight.
            self.sequence.begin();
            surface.set_visible(false);
            return Outcome::Hidden;
        }

        surface.set_visible(true);
        if self.loaded.get() {
            return Outcome::Shown;
        }

        let ticket = self.sequence.begin();
        surface.set_html(&html::loading_block(self.source.loading_message(), 50));

        match self.fetch().await {
            Ok(markup) => {
                let outcome = commit(&self.sequence, ticket, surface, &markup, Outcome::Rendered);
                if outcome == Outcome::Rendered {
                    self.loaded.set(true);
                }
                outcome
            }
            Err(error) => {
                log::warn!("{:?} map failed: {error}", self.source);
                commit(
                    &self.sequence,
                    ticket,
                    surface,
                    &html::map_failure_banner(&error.to_string()),
                    Outcome::Failed,
                )
            }
        }
    }

    async fn fetch(&self) -> Result<String> {
        let document = match self.source {
            MapSource::Risk => Some(self.client.risk_map().await?),
            MapSource::VesselGroups => self.client.vessel_group_map().await?,
        };
        Ok(document.map_or_else(
            || html::error_block(messages::NO_MAP_DATA),
            |document| html::sandboxed_document(&document, self.source.title()),
        ))
    }
}

/// Embeds the third-party Marine Cadastre viewer in a sandboxed frame.
pub struct MarineCadastreMap {
    url: String,
    frame_delay: std::time::Duration,
    frame_present: Rc<Cell<bool>>,
    sequence: Rc<Sequence>,
}

impl MarineCadastreMap {
    /// `frame_present` tells whether the page already carries the frame.
    pub fn new(config: &DashboardConfig, frame_present: bool) -> Self {
        Self {
            url: config.marine_cadastre_url.clone(),
            frame_delay: config.timings.marine_frame_delay,
            frame_present: Rc::new(Cell::new(frame_present)),
            sequence: Rc::new(Sequence::new()),
        }
    }

    pub fn frame(&self) -> String {
        format!(
            r#"<iframe class="marine-frame" src="{}" title="Marine Cadastre National Viewer" sandbox="allow-scripts allow-same-origin allow-popups allow-forms" style="width: 100%; height: 100%; border: none;"></iframe>"#,
            html::escape(&self.url)
        )
    }

    /// Reloads an existing frame in place, or shows a placeholder and inserts
    /// the frame once `frame_delay` has passed.
    pub fn load<S: Surface + 'static>(&self, surface: Rc<S>, scheduler: &dyn Scheduler) -> Outcome {
        if self.frame_present.get() {
            self.sequence.begin();
            surface.set_html(&self.frame());
            return Outcome::Refreshed;
        }

        let ticket = self.sequence.begin();
        surface.set_html(&html::loading_block(messages::LOADING_MARINE_MAP, 50));

        let frame = self.frame();
        let sequence = self.sequence.clone();
        let frame_present = self.frame_present.clone();
        scheduler.after(
            self.frame_delay,
            Box::new(move || {
                if commit(&sequence, ticket, &surface, &frame, Outcome::Rendered) == Outcome::Rendered {
                    frame_present.set(true);
                }
            }),
        );
        Outcome::Scheduled
    }
}
