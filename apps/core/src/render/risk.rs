use crate::domain::{RiskFactorKind, RiskLevel, RiskRoute, RiskStats};
use crate::html::escape;
use crate::messages;

/// Route count heading, the four summary tiles, then one card per route.
pub fn render(stats: &RiskStats, routes: &[RiskRoute]) -> String {
    let mut html = format!("<h4>{}</h4>", messages::risky_routes_found(routes.len()));
    html.push_str(&render_stats(stats));

    if routes.is_empty() {
        html.push_str(&format!("<p>{}</p>", messages::NO_RISKY_ROUTES));
        return html;
    }

    html.push_str(r#"<div class="risky-routes-container">"#);
    for route in routes {
        html.push_str(&render_route(route));
    }
    html.push_str("</div>");
    html
}

fn render_stats(stats: &RiskStats) -> String {
    let tiles = [
        (stats.high_risk.to_string(), messages::RISK_HIGH),
        (stats.medium_risk.to_string(), messages::RISK_MEDIUM),
        (stats.low_risk.to_string(), messages::RISK_LOW),
        (super::fixed(stats.avg_risk_score, 1), messages::RISK_AVERAGE),
    ];

    let mut html = String::from(r#"<div class="risk-stats">"#);
    for (value, label) in tiles {
        html.push_str(&format!(
            r#"<div class="risk-stat-card"><div class="stat-number">{value}</div><div class="stat-label">{label}</div></div>"#
        ));
    }
    html.push_str("</div>");
    html
}

fn render_route(route: &RiskRoute) -> String {
    let level = RiskLevel::classify(route.risk_score);
    let bars: String = RiskFactorKind::ALL
        .iter()
        .map(|kind| {
            let value = route.risk_factors.value(*kind);
            format!(
                r#"<div class="risk-factor" data-factor="{}" style="width: {value}%">{}: {value}</div>"#,
                kind.as_str(),
                kind.label(),
            )
        })
        .collect();

    format!(
        r#"<div class="risky-route-card"><div class="risk-score {}" style="background: {}">{}</div><div class="route-details"><h5>{} ({})</h5><p><strong>{}</strong> {}</p><p><strong>{}</strong> {}</p><div class="risk-factors">{bars}</div></div></div>"#,
        level.class_name(),
        level.color(),
        route.risk_score,
        escape(&route.vessel_name.or(messages::UNKNOWN_VESSEL)),
        escape(&route.vessel_type.or(messages::UNKNOWN_VESSEL)),
        messages::MMSI_LABEL,
        escape(&route.mmsi.to_string()),
        messages::DESCRIPTION_LABEL,
        escape(&route.description.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mmsi, RiskFactors};

    fn stats() -> RiskStats {
        RiskStats {
            high_risk: 2,
            medium_risk: 3,
            low_risk: 5,
            avg_risk_score: 47.36,
            total_vessels: None,
            max_risk_score: None,
            risk_factors: None,
        }
    }

    fn route(score: f64) -> RiskRoute {
        RiskRoute {
            mmsi: Mmsi::Text("574001230".to_string()),
            vessel_name: "HAI PHONG 01".into(),
            vessel_type: "Cargo".into(),
            description: "nguy cơ va chạm cao".into(),
            risk_score: score,
            risk_factors: RiskFactors {
                collision: 90.0,
                weather: 40.5,
                route: 10.0,
                speed: 55.0,
                navigation: 0.0,
            },
        }
    }

    #[test]
    fn empty_routes_show_zero_count_and_tiles() {
        let html = render(&stats(), &[]);
        assert!(html.contains("Đã phát hiện 0 hành trình rủi ro"));
        for value in ["2", "3", "5", "47.4"] {
            assert!(html.contains(&format!(r#"<div class="stat-number">{value}</div>"#)));
        }
        assert!(!html.contains("risky-route-card"));
        assert!(html.contains(messages::NO_RISKY_ROUTES));
    }

    #[test]
    fn route_card_has_five_proportional_bars() {
        let html = render(&stats(), &[route(82.0)]);
        assert_eq!(html.matches(r#"class="risk-factor""#).count(), 5);
        assert!(html.contains(r#"style="width: 90%">Va chạm: 90</div>"#));
        assert!(html.contains(r#"style="width: 40.5%">Thời tiết: 40.5</div>"#));
        assert!(html.contains(r#"style="width: 0%">Chướng ngại: 0</div>"#));
        assert!(html.contains("<h5>HAI PHONG 01 (Cargo)</h5>"));
        assert!(html.contains("<strong>MMSI:</strong> 574001230"));
    }

    #[test]
    fn badge_colour_follows_score_bands() {
        for (score, class, color) in [
            (80.0, "risk-red", "#dc3545"),
            (79.0, "risk-orange", "#fd7e14"),
            (60.0, "risk-orange", "#fd7e14"),
            (59.0, "risk-green", "#28a745"),
        ] {
            let html = render(&stats(), &[route(score)]);
            assert!(
                html.contains(&format!(r#"<div class="risk-score {class}" style="background: {color}">{score}</div>"#)),
                "score {score} should render as {class}"
            );
        }
    }

    #[test]
    fn vessel_text_is_escaped() {
        let mut risky = route(70.0);
        risky.vessel_name = "<script>x</script>".into();
        let html = render(&stats(), &[risky]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[test]
    fn numeric_type_and_missing_name_still_render() {
        let routes: Vec<RiskRoute> = serde_json::from_str(
            r#"[{
                "mmsi": 367000001,
                "vesselName": null,
                "vesselType": 70,
                "description": null,
                "riskScore": 64,
                "riskFactors": {"collision": 70}
            }]"#,
        )
        .unwrap();
        let html = render(&stats(), &routes);
        assert!(html.contains("<h5>Unknown (70)</h5>"));
        assert!(html.contains("<strong>MMSI:</strong> 367000001"));
        assert!(html.contains("Đã phát hiện 1 hành trình rủi ro"));
    }
}
