//! Backend contract: endpoint paths, the transport seam and a typed client.

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::config::DashboardConfig;
use crate::domain::{
    Analytics, CorrelationReport, FailureDetail, RiskQuery, RiskStats, RiskyRoutesReport,
    TemporalReport, VesselGroupReport,
};
use crate::error::{DashboardError, Result};
use crate::messages;

pub mod endpoints {
    pub const CORRELATIONS: &str = "/analyze-correlations";
    pub const TEMPORAL_PATTERNS: &str = "/analyze-temporal-patterns";
    pub const VESSEL_GROUPS: &str = "/detect-vessel-groups";
    pub const RISK_SCORES: &str = "/calculate-risk-scores";
    pub const RISKY_ROUTES: &str = "/identify-risky-routes";
    pub const RISK_MAP: &str = "/risk-map";
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP transport. A returned `Err` means no response was obtained at all;
/// error statuses come back as an `Ok` reply.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// page's single event loop.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn get(&self, url: &str) -> Result<HttpReply>;
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpReply>;
}

impl<B: Backend + ?Sized> Backend for Rc<B> {
    async fn get(&self, url: &str) -> Result<HttpReply> {
        (**self).get(url).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpReply> {
        (**self).post_json(url, body).await
    }
}

/// The three analytics payloads shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub correlations: Analytics<CorrelationReport>,
    pub temporal: Analytics<TemporalReport>,
    pub vessel_groups: Analytics<VesselGroupReport>,
}

#[derive(Debug, Clone)]
pub struct AnalyticsClient<B> {
    backend: B,
    config: DashboardConfig,
}

impl<B: Backend> AnalyticsClient<B> {
    pub const fn new(backend: B, config: DashboardConfig) -> Self {
        Self { backend, config }
    }

    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    async fn get(&self, path: &str) -> Result<HttpReply> {
        let url = self.config.endpoint(path);
        log::debug!("GET {url}");
        self.backend.get(&url).await
    }

    /// Fetches the three dashboard endpoints concurrently. Any non-success
    /// status fails the whole load with [`DashboardError::Unavailable`].
    pub async fn dashboard(&self) -> Result<DashboardData> {
        let (correlations, temporal, vessel_groups) = futures::join!(
            self.get(endpoints::CORRELATIONS),
            self.get(endpoints::TEMPORAL_PATTERNS),
            self.get(endpoints::VESSEL_GROUPS),
        );
        let (correlations, temporal, vessel_groups) = (correlations?, temporal?, vessel_groups?);

        if !(correlations.is_success() && temporal.is_success() && vessel_groups.is_success()) {
            log::warn!(
                "analytics unavailable: statuses {} / {} / {}",
                correlations.status,
                temporal.status,
                vessel_groups.status
            );
            return Err(DashboardError::Unavailable);
        }

        Ok(DashboardData {
            correlations: correlations.json()?,
            temporal: temporal.json()?,
            vessel_groups: vessel_groups.json()?,
        })
    }

    pub async fn risk_stats(&self) -> Result<RiskStats> {
        let reply = self.get(endpoints::RISK_SCORES).await?;
        if !reply.is_success() {
            return Err(backend_failure(&reply, messages::RISK_SCORES_FAILED));
        }
        reply.json()
    }

    pub async fn risky_routes(&self, query: RiskQuery) -> Result<RiskyRoutesReport> {
        let url = self.config.endpoint(endpoints::RISKY_ROUTES);
        let body = serde_json::to_string(&query)?;
        log::debug!("POST {url} {body}");
        let reply = self.backend.post_json(&url, &body).await?;
        if !reply.is_success() {
            return Err(backend_failure(&reply, messages::RISKY_ROUTES_FAILED));
        }
        reply.json()
    }

    /// Server-rendered risk map document.
    pub async fn risk_map(&self) -> Result<String> {
        let reply = self.get(endpoints::RISK_MAP).await?;
        if !reply.is_success() {
            return Err(backend_failure(&reply, messages::RISK_MAP_UNAVAILABLE));
        }
        Ok(reply.body)
    }

    /// Map document embedded in the vessel-group analysis, if the backend
    /// produced one.
    pub async fn vessel_group_map(&self) -> Result<Option<String>> {
        let reply = self.get(endpoints::VESSEL_GROUPS).await?;
        if !reply.is_success() {
            return Err(DashboardError::Backend(
                messages::GROUP_MAP_UNAVAILABLE.to_string(),
            ));
        }
        match reply.json::<Analytics<VesselGroupReport>>()? {
            Analytics::Failed(message) => Err(DashboardError::Backend(message)),
            Analytics::Ready(report) => Ok(report.map_html),
        }
    }
}

fn backend_failure(reply: &HttpReply, fallback: &str) -> DashboardError {
    log::warn!("backend answered {}", reply.status);
    DashboardError::Backend(
        FailureDetail::parse(&reply.body).unwrap_or_else(|| fallback.to_string()),
    )
}
