use std::rc::Rc;

use crate::api::{AnalyticsClient, Backend};
use crate::domain::{RiskFactorKind, RiskQuery};
use crate::error::{DashboardError, Result};
use crate::html;
use crate::messages;
use crate::render;
use crate::sequence::Sequence;
use crate::surface::Surface;

use super::{commit, Outcome};

/// Values read from the risk form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskForm {
    pub threshold: i64,
    /// Selected risk types. Read from the form but not part of the backend
    /// request; the endpoint takes only a threshold.
    pub risk_types: Vec<RiskFactorKind>,
}

impl RiskForm {
    /// Parses the raw range-input value (leading integer, like the browser's
    /// `parseInt`) and the selected option values. Unknown options are
    /// skipped.
    pub fn parse<S: AsRef<str>>(threshold: &str, selected: &[S]) -> Result<Self> {
        let threshold = leading_integer(threshold).ok_or_else(|| {
            DashboardError::InvalidInput(format!("{}: {threshold:?}", messages::INVALID_THRESHOLD))
        })?;
        let risk_types = selected
            .iter()
            .filter_map(|value| RiskFactorKind::parse(value.as_ref()))
            .collect();
        Ok(Self {
            threshold,
            risk_types,
        })
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..digits_start + digits_len].parse().ok()
}

/// Two sequential requests (scores, then routes) and one rendered summary.
pub struct RiskAnalysis<B> {
    client: Rc<AnalyticsClient<B>>,
    sequence: Sequence,
}

impl<B: Backend> RiskAnalysis<B> {
    pub const fn new(client: Rc<AnalyticsClient<B>>) -> Self {
        Self {
            client,
            sequence: Sequence::new(),
        }
    }

    /// Reads the form, runs the pipeline and renders into `surface`.
    pub async fn run<S: AsRef<str>>(
        &self,
        threshold: &str,
        selected: &[S],
        surface: &impl Surface,
    ) -> Outcome {
        let ticket = self.sequence.begin();
        surface.set_html(&html::loading_block(messages::LOADING_RISK_ANALYSIS, 20));

        match self.analyze(threshold, selected).await {
            Ok(markup) => commit(&self.sequence, ticket, surface, &markup, Outcome::Rendered),
            Err(error) => {
                log::warn!("risk analysis failed: {error}");
                commit(
                    &self.sequence,
                    ticket,
                    surface,
                    &html::failure_banner(&error.to_string(), 20),
                    Outcome::Failed,
                )
            }
        }
    }

    async fn analyze<S: AsRef<str>>(&self, threshold: &str, selected: &[S]) -> Result<String> {
        let form = RiskForm::parse(threshold, selected)?;
        log::debug!(
            "risk analysis: threshold {} with {} selected risk types",
            form.threshold,
            form.risk_types.len()
        );

        let stats = self.client.risk_stats().await?;
        let report = self
            .client
            .risky_routes(RiskQuery {
                risk_threshold: form.threshold,
            })
            .await?;
        log::info!("{} risky routes at threshold {}", report.risky_routes.len(), form.threshold);

        Ok(render::risk::render(&stats, &report.risky_routes))
    }
}
