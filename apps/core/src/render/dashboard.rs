use crate::api::DashboardData;
use crate::messages;

use super::{correlation, temporal, vessel_groups};

/// Header plus the three analytics cards.
pub fn render(data: &DashboardData) -> String {
    let cards = [
        (messages::CARD_CORRELATIONS, correlation::render(&data.correlations)),
        (messages::CARD_TEMPORAL, temporal::render(&data.temporal)),
        (messages::CARD_VESSEL_GROUPS, vessel_groups::render(&data.vessel_groups)),
    ];

    let mut html = format!(
        r#"<div class="dashboard-header"><h3>{}</h3><p>{}</p></div><div class="dashboard-grid">"#,
        messages::DASHBOARD_TITLE,
        messages::DASHBOARD_SUBTITLE
    );
    for (title, body) in cards {
        html.push_str(&format!(
            r#"<div class="dashboard-card"><div class="card-header"><h4>{title}</h4></div><div class="card-body">{body}</div></div>"#
        ));
    }
    html.push_str("</div>");
    html
}
