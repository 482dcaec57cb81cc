use crate::domain::{Analytics, TemporalReport};
use crate::html::{chart_image, error_block, escape};
use crate::messages;

pub fn render(payload: &Analytics<TemporalReport>) -> String {
    let report = match payload {
        Analytics::Failed(message) => return error_block(message),
        Analytics::Ready(report) => report,
    };

    let mut html = chart_image(report.chart.as_deref(), "Temporal Patterns Chart");

    if report.temporal_patterns.is_empty() {
        html.push_str(&format!("<p>{}</p>", messages::NO_PATTERNS));
        return html;
    }

    html.push_str(&format!(
        r#"<h5>{}</h5><ul class="pattern-list">"#,
        messages::PATTERNS_FOUND
    ));
    for pattern in &report.temporal_patterns {
        html.push_str(&format!("<li>{}</li>", escape(&pattern.description)));
    }
    html.push_str("</ul>");
    html
}
