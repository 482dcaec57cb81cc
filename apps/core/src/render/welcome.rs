//! One-shot welcome overlay shown shortly after page load.

/// `data-action` of the overlay's close button.
pub const CLOSE_ACTION: &str = "close-welcome";
pub const OVERLAY_CLASS: &str = "welcome-message";

const FEATURES: [(&str, &str); 4] = [
    (
        "Tích hợp Marine Cadastre:",
        "Xem bản đồ trực tiếp từ marinecadastre.gov",
    ),
    (
        "Phân tích rủi ro:",
        "Dự đoán và phân tích các hành trình có rủi ro cao",
    ),
    (
        "Bản đồ rủi ro:",
        "Hiển thị trực quan các khu vực có nguy cơ cao",
    ),
    (
        "Khai phá dữ liệu ẩn:",
        "Phát hiện các mẫu ẩn trong dữ liệu AIS",
    ),
];

/// Inner markup of the overlay element.
pub fn overlay() -> String {
    let features: String = FEATURES
        .iter()
        .map(|(title, text)| format!("<li><strong>{title}</strong> {text}</li>"))
        .collect();

    format!(
        r#"<div class="welcome-header"><h3>🚢 Chào mừng đến với AIS Marine Traffic Analyzer!</h3><button type="button" class="close-btn" data-action="{CLOSE_ACTION}">&times;</button></div><div class="welcome-content"><p>Ứng dụng đã được cập nhật với các tính năng mới:</p><ul>{features}</ul><p>Hãy khám phá các tab mới để trải nghiệm các tính năng này!</p></div>"#
    )
}
