//! Markup helpers shared by every renderer. Backend text only reaches the
//! page through [`escape`].

use crate::messages;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// True when `data` only holds base64 alphabet characters and can be
/// embedded in a `data:` URL without escaping.
pub fn is_base64(data: &str) -> bool {
    !data.is_empty()
        && data
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=' | b'\n' | b'\r'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chart<'a> {
    Absent,
    Image(&'a str),
    Rejected,
}

/// An empty payload counts as no chart at all.
fn classify_chart(chart: Option<&str>) -> Chart<'_> {
    match chart {
        None | Some("") => Chart::Absent,
        Some(data) if is_base64(data) => Chart::Image(data),
        Some(_) => Chart::Rejected,
    }
}

/// `<img>` inside a chart container, or nothing when the payload is unusable.
pub fn chart_image(chart: Option<&str>, alt: &str) -> String {
    match classify_chart(chart) {
        Chart::Absent => String::new(),
        Chart::Image(data) => format!(
            r#"<div class="chart-container"><img src="data:image/png;base64,{data}" alt="{alt}"></div>"#,
            alt = escape(alt),
        ),
        Chart::Rejected => {
            log::warn!("dropping chart payload with non-base64 content");
            String::new()
        }
    }
}

/// Error block used inside cards for backend-reported errors.
pub fn error_block(message: &str) -> String {
    format!(r#"<div class="error-message">{}</div>"#, escape(message))
}

/// Spinner placeholder shown while a request is in flight.
pub fn loading_block(message: &str, padding_px: u32) -> String {
    format!(
        r#"<div style="text-align: center; padding: {padding_px}px;"><div class="loading"></div> {}</div>"#,
        escape(message)
    )
}

/// Full-container failure banner: "Lỗi: <message>".
pub fn failure_banner(message: &str, padding_px: u32) -> String {
    prefixed_banner(messages::ERROR_PREFIX, message, padding_px)
}

/// Failure banner for map loaders: "Lỗi khi tải bản đồ: <message>".
pub fn map_failure_banner(message: &str) -> String {
    prefixed_banner(messages::MAP_ERROR_PREFIX, message, 50)
}

fn prefixed_banner(prefix: &str, message: &str, padding_px: u32) -> String {
    format!(
        r#"<div style="text-align: center; padding: {padding_px}px; color: #dc3545;">{prefix}: {}</div>"#,
        escape(message)
    )
}

/// Puts a server-rendered document in an isolated frame. Scripts run, but in
/// an opaque origin with no access to the dashboard page.
pub fn sandboxed_document(document: &str, title: &str) -> String {
    format!(
        r#"<iframe class="map-frame" title="{}" sandbox="allow-scripts" srcdoc="{}" style="width: 100%; height: 100%; border: none;"></iframe>"#,
        escape(title),
        escape(document)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escape_leaves_vietnamese_text_alone() {
        assert_eq!(escape("Giờ cao điểm là 8h"), "Giờ cao điểm là 8h");
    }

    #[test]
    fn base64_check_rejects_quotes() {
        assert!(is_base64("iVBORw0KGgo="));
        assert!(!is_base64(r#"abc" onerror="alert(1)"#));
        assert!(!is_base64(""));
    }

    #[test]
    fn chart_image_skips_invalid_payload() {
        assert!(chart_image(Some("<svg>"), "Chart").is_empty());
        assert!(chart_image(None, "Chart").is_empty());
        assert!(chart_image(Some("AAAA"), "Chart").contains("data:image/png;base64,AAAA"));
    }

    #[test]
    fn empty_chart_is_absent_not_rejected() {
        assert_eq!(classify_chart(Some("")), Chart::Absent);
        assert_eq!(classify_chart(None), Chart::Absent);
        assert_eq!(classify_chart(Some("a\"b")), Chart::Rejected);
        assert!(chart_image(Some(""), "Chart").is_empty());
    }

    #[test]
    fn sandboxed_document_escapes_srcdoc() {
        let frame = sandboxed_document(r#"<div class="map">x</div>"#, "Map");
        assert!(frame.contains(r#"sandbox="allow-scripts""#));
        assert!(frame.contains("srcdoc=\"&lt;div class=&quot;map&quot;&gt;x&lt;/div&gt;\""));
        assert!(!frame.contains("allow-same-origin"));
    }

    #[test]
    fn failure_banner_escapes_message() {
        let banner = failure_banner("<b>boom</b>", 20);
        assert!(banner.contains("Lỗi: &lt;b&gt;boom&lt;/b&gt;"));
        assert!(banner.contains("padding: 20px"));
    }
}
