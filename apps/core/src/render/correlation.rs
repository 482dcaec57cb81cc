use crate::domain::{Analytics, Correlation, CorrelationReport};
use crate::html::{chart_image, error_block, escape};
use crate::messages;

/// Entries shown; the backend already orders them by strength.
pub const MAX_CORRELATIONS: usize = 5;

pub fn render(payload: &Analytics<CorrelationReport>) -> String {
    let report = match payload {
        Analytics::Failed(message) => return error_block(message),
        Analytics::Ready(report) => report,
    };

    let mut html = chart_image(report.chart.as_deref(), "Correlation Chart");

    if report.correlations.is_empty() {
        html.push_str(&format!("<p>{}</p>", messages::NO_CORRELATIONS));
        return html;
    }

    html.push_str(&format!(
        r#"<h5>{}</h5><ul class="correlation-list">"#,
        messages::TOP_CORRELATIONS
    ));
    for entry in report.correlations.iter().take(MAX_CORRELATIONS) {
        html.push_str(&render_entry(entry));
    }
    html.push_str("</ul>");
    html
}

fn render_entry(entry: &Correlation) -> String {
    let class = if entry.correlation > 0.0 {
        "positive"
    } else {
        "negative"
    };
    format!(
        r#"<li class="{class}"><span class="var-names">{} &amp; {}</span><span class="corr-value">{}</span><span class="corr-desc">({}, {})</span></li>"#,
        escape(&entry.variable1),
        escape(&entry.variable2),
        super::fixed(entry.correlation, 2),
        escape(&entry.direction),
        escape(&entry.strength),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(variable1: &str, correlation: f64) -> Correlation {
        Correlation {
            variable1: variable1.to_string(),
            variable2: "SOG".to_string(),
            correlation,
            direction: "thuận".to_string(),
            strength: "mạnh".to_string(),
        }
    }

    #[test]
    fn error_payload_renders_only_the_message() {
        let html = render(&Analytics::Failed("Không đủ dữ liệu".to_string()));
        assert_eq!(html, r#"<div class="error-message">Không đủ dữ liệu</div>"#);
        assert!(!html.contains("<img"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn renders_first_five_in_input_order() {
        let correlations = (0..7)
            .map(|i| entry(&format!("var{i}"), 0.9 - f64::from(i) * 0.1))
            .collect();
        let html = render(&Analytics::Ready(CorrelationReport {
            chart: None,
            correlations,
        }));

        assert_eq!(html.matches("<li ").count(), 5);
        let positions: Vec<usize> = (0..5)
            .map(|i| html.find(&format!("var{i} &amp;")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!html.contains("var5"));
    }

    #[test]
    fn coefficients_use_two_decimals_and_sign_class() {
        let html = render(&Analytics::Ready(CorrelationReport {
            chart: None,
            correlations: vec![entry("LAT", 0.735_00), entry("LON", -0.2)],
        }));
        assert!(html.contains(r#"<li class="positive"><span class="var-names">LAT &amp; SOG</span><span class="corr-value">0.74</span>"#));
        assert!(html.contains(r#"<li class="negative"><span class="var-names">LON &amp; SOG</span><span class="corr-value">-0.20</span>"#));
        assert!(html.contains("(thuận, mạnh)"));
    }

    #[test]
    fn chart_is_rendered_before_the_list() {
        let html = render(&Analytics::Ready(CorrelationReport {
            chart: Some("iVBORw0KGgo=".to_string()),
            correlations: vec![entry("COG", 0.5)],
        }));
        let image = html.find("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert!(image < html.find("<ul").unwrap());
    }

    #[test]
    fn empty_list_renders_fixed_message() {
        let html = render(&Analytics::Ready(CorrelationReport::default()));
        assert_eq!(html, format!("<p>{}</p>", messages::NO_CORRELATIONS));
    }

    #[test]
    fn variable_names_are_escaped() {
        let html = render(&Analytics::Ready(CorrelationReport {
            chart: None,
            correlations: vec![entry("<img src=x onerror=alert(1)>", 0.3)],
        }));
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }
}
