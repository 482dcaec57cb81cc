use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use ais_dashboard::api::endpoints;
use ais_dashboard::controllers::{DashboardLoader, MapSource, MapToggle, Outcome, RiskAnalysis};
use ais_dashboard::error::Result;
use ais_dashboard::{AnalyticsClient, Backend, DashboardConfig, HttpReply, MemorySurface, Surface};

/// Canned backend keyed by path, counting calls.
#[derive(Default)]
struct CannedBackend {
    replies: HashMap<&'static str, (u16, &'static str)>,
    calls: RefCell<Vec<String>>,
    bodies: RefCell<Vec<String>>,
}

impl CannedBackend {
    fn with(mut self, path: &'static str, status: u16, body: &'static str) -> Self {
        self.replies.insert(path, (status, body));
        self
    }

    fn calls_to(&self, path: &str) -> usize {
        self.calls.borrow().iter().filter(|call| *call == path).count()
    }

    fn answer(&self, url: &str) -> HttpReply {
        self.calls.borrow_mut().push(url.to_string());
        let (status, body) = self
            .replies
            .get(url)
            .copied()
            .unwrap_or((404, r#"{"detail": "Not Found"}"#));
        HttpReply::new(status, body)
    }
}

impl Backend for CannedBackend {
    async fn get(&self, url: &str) -> Result<HttpReply> {
        Ok(self.answer(url))
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpReply> {
        self.bodies.borrow_mut().push(body.to_string());
        Ok(self.answer(url))
    }
}

fn client(backend: &Rc<CannedBackend>) -> Rc<AnalyticsClient<Rc<CannedBackend>>> {
    Rc::new(AnalyticsClient::new(backend.clone(), DashboardConfig::default()))
}

#[tokio::test]
async fn risk_analysis_with_no_routes() {
    let backend = Rc::new(
        CannedBackend::default()
            .with(
                endpoints::RISK_SCORES,
                200,
                r#"{"high_risk": 2, "medium_risk": 3, "low_risk": 5, "avg_risk_score": 47.36}"#,
            )
            .with(endpoints::RISKY_ROUTES, 200, r#"{"risky_routes": []}"#),
    );
    let surface = MemorySurface::default();

    let outcome = RiskAnalysis::new(client(&backend))
        .run("50", &["collision", "weather"], &surface)
        .await;

    assert_eq!(outcome, Outcome::Rendered);
    let html = surface.html();
    assert!(html.contains("0 hành trình"));
    for tile in ["2", "3", "5", "47.4"] {
        assert!(html.contains(&format!(r#"<div class="stat-number">{tile}</div>"#)));
    }
    assert!(!html.contains("risky-route-card"));
    assert_eq!(*backend.bodies.borrow(), vec![r#"{"risk_threshold":50}"#.to_string()]);
}

#[tokio::test]
async fn dashboard_with_many_correlations_and_no_groups() {
    let backend = Rc::new(
        CannedBackend::default()
            .with(
                endpoints::CORRELATIONS,
                200,
                r#"{"correlations": [
                    {"variable1": "a", "variable2": "b", "correlation": 0.735, "direction": "thuận", "strength": "mạnh"},
                    {"variable1": "c", "variable2": "d", "correlation": -0.2, "direction": "nghịch", "strength": "yếu"},
                    {"variable1": "e", "variable2": "f", "correlation": 0.5, "direction": "thuận", "strength": "trung bình"},
                    {"variable1": "g", "variable2": "h", "correlation": 0.4, "direction": "thuận", "strength": "yếu"},
                    {"variable1": "i", "variable2": "j", "correlation": 0.3, "direction": "thuận", "strength": "yếu"},
                    {"variable1": "k", "variable2": "l", "correlation": 0.2, "direction": "thuận", "strength": "yếu"}
                ]}"#,
            )
            .with(endpoints::TEMPORAL_PATTERNS, 200, r#"{"temporal_patterns": []}"#)
            .with(
                endpoints::VESSEL_GROUPS,
                200,
                r#"{"total_groups": 0, "total_vessels_in_groups": 0, "vessel_groups": []}"#,
            ),
    );
    let surface = MemorySurface::default();

    let outcome = DashboardLoader::new(client(&backend)).load(&surface).await;

    assert_eq!(outcome, Outcome::Rendered);
    let html = surface.html();
    assert_eq!(html.matches(r#"<span class="corr-value">"#).count(), 5);
    assert!(html.contains(r#"<span class="corr-value">0.74</span>"#));
    assert!(html.contains(r#"<span class="corr-value">-0.20</span>"#));
    assert!(!html.contains("k &amp; l"));
    assert!(html.contains("Không tìm thấy mẫu thời gian đáng kể nào."));
    assert!(!html.contains(r#"class="pattern-list""#));
    assert!(!html.contains("data-action=\"vessel-groups-map\""));
}

#[tokio::test]
async fn risk_map_toggle_fetches_once() {
    let backend = Rc::new(CannedBackend::default().with(endpoints::RISK_MAP, 200, "<div>risk</div>"));
    let surface = MemorySurface::new(false);
    let toggle = MapToggle::new(client(&backend), MapSource::Risk);

    assert_eq!(toggle.toggle(&surface).await, Outcome::Rendered);
    assert_eq!(toggle.toggle(&surface).await, Outcome::Hidden);
    assert!(!surface.is_visible());
    assert_eq!(backend.calls_to(endpoints::RISK_MAP), 1);
}
