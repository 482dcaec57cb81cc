use crate::domain::{Analytics, VesselGroup, VesselGroupReport};
use crate::html::{error_block, escape};
use crate::messages;

pub const MAX_GROUPS: usize = 3;

/// `data-action` value of the button that opens the vessel-group map.
pub const SHOW_MAP_ACTION: &str = "vessel-groups-map";

pub fn render(payload: &Analytics<VesselGroupReport>) -> String {
    let report = match payload {
        Analytics::Failed(message) => return error_block(message),
        Analytics::Ready(report) => report,
    };

    let mut html = format!(
        r#"<div class="groups-summary"><div class="summary-item"><div class="summary-value">{}</div><div class="summary-label">{}</div></div><div class="summary-item"><div class="summary-value">{}</div><div class="summary-label">{}</div></div></div>"#,
        report.total_groups,
        messages::GROUP_COUNT_LABEL,
        report.total_vessels_in_groups,
        messages::GROUPED_VESSELS_LABEL,
    );

    if report.vessel_groups.is_empty() {
        html.push_str(&format!("<p>{}</p>", messages::NO_GROUPS));
        return html;
    }

    html.push_str(&format!(
        r#"<h5>{}</h5><div class="groups-list">"#,
        messages::LARGEST_GROUPS
    ));
    for (index, group) in report.vessel_groups.iter().take(MAX_GROUPS).enumerate() {
        html.push_str(&render_group(index + 1, group));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<div class="view-map-button"><button type="button" data-action="{SHOW_MAP_ACTION}" style="background: linear-gradient(45deg, #20c997, #0ca678);">{}</button></div>"#,
        messages::SHOW_GROUP_MAP
    ));
    html
}

fn render_group(number: usize, group: &VesselGroup) -> String {
    let types = if group.vessel_types.is_empty() {
        messages::UNKNOWN_TYPES.to_string()
    } else {
        escape(&group.vessel_types.join(", "))
    };
    format!(
        r#"<div class="group-card"><div class="group-header">{} {number}</div><div class="group-details"><p><strong>{}</strong> {}</p><p><strong>{}</strong> {} km</p><p><strong>{}</strong> {types}</p></div></div>"#,
        messages::GROUP_LABEL,
        messages::GROUP_VESSELS,
        group.vessel_count,
        messages::GROUP_DISTANCE,
        group.avg_distance_km,
        messages::GROUP_TYPES,
    )
}
