//! User-facing text. The dashboard is served in Vietnamese.

pub const DATA_UNAVAILABLE: &str = "Không thể tải dữ liệu phân tích";
pub const ERROR_PREFIX: &str = "Lỗi";
pub const MAP_ERROR_PREFIX: &str = "Lỗi khi tải bản đồ";

pub const LOADING_DASHBOARD: &str = "Đang tải dữ liệu phân tích...";
pub const LOADING_RISK_ANALYSIS: &str = "Đang phân tích hành trình rủi ro...";
pub const LOADING_RISK_MAP: &str = "Đang tải bản đồ rủi ro...";
pub const LOADING_VESSEL_GROUP_MAP: &str = "Đang tải bản đồ nhóm tàu...";
pub const LOADING_MARINE_MAP: &str = "Đang tải bản đồ Marine Cadastre...";

pub const DASHBOARD_TITLE: &str = "Bảng điều khiển phân tích";
pub const DASHBOARD_SUBTITLE: &str = "Tổng hợp các phân tích nâng cao từ dữ liệu AIS";
pub const CARD_CORRELATIONS: &str = "Phân tích tương quan";
pub const CARD_TEMPORAL: &str = "Phân tích theo thời gian";
pub const CARD_VESSEL_GROUPS: &str = "Nhóm tàu di chuyển cùng nhau";

pub const TOP_CORRELATIONS: &str = "Tương quan mạnh nhất:";
pub const NO_CORRELATIONS: &str = "Không tìm thấy tương quan đáng kể nào.";
pub const PATTERNS_FOUND: &str = "Mẫu thời gian phát hiện được:";
pub const NO_PATTERNS: &str = "Không tìm thấy mẫu thời gian đáng kể nào.";

pub const GROUP_COUNT_LABEL: &str = "Nhóm tàu";
pub const GROUPED_VESSELS_LABEL: &str = "Tổng số tàu";
pub const LARGEST_GROUPS: &str = "Các nhóm tàu lớn nhất:";
pub const GROUP_LABEL: &str = "Nhóm";
pub const GROUP_VESSELS: &str = "Số tàu:";
pub const GROUP_DISTANCE: &str = "Khoảng cách TB:";
pub const GROUP_TYPES: &str = "Loại tàu:";
pub const UNKNOWN_TYPES: &str = "Không xác định";
/// Shown for a route whose vessel name or type cell is empty, as the backend does.
pub const UNKNOWN_VESSEL: &str = "Unknown";
pub const NO_GROUPS: &str = "Không tìm thấy nhóm tàu nào.";
pub const SHOW_GROUP_MAP: &str = "Xem bản đồ nhóm tàu";
pub const NO_MAP_DATA: &str = "Không có dữ liệu bản đồ";
pub const GROUP_MAP_UNAVAILABLE: &str = "Không thể tải dữ liệu nhóm tàu";
pub const RISK_MAP_UNAVAILABLE: &str = "Không thể tải bản đồ rủi ro";

pub const RISK_SCORES_FAILED: &str = "Failed to calculate risk scores";
pub const RISKY_ROUTES_FAILED: &str = "Failed to identify risky routes";
pub const INVALID_THRESHOLD: &str = "Ngưỡng rủi ro không hợp lệ";
pub const RISK_HIGH: &str = "Rủi ro cao";
pub const RISK_MEDIUM: &str = "Rủi ro trung bình";
pub const RISK_LOW: &str = "Rủi ro thấp";
pub const RISK_AVERAGE: &str = "Điểm rủi ro TB";
pub const NO_RISKY_ROUTES: &str = "Không tìm thấy hành trình rủi ro nào với ngưỡng đã chọn.";
pub const MMSI_LABEL: &str = "MMSI:";
pub const DESCRIPTION_LABEL: &str = "Mô tả:";

pub const RISK_MAP_LOADED: &str = "Bản đồ rủi ro đã được tải thành công!";
pub const MARINE_MAP_LOADED: &str = "Bản đồ Marine Cadastre đã được tải thành công!";

/// Heading for the risky-route summary, e.g. "Đã phát hiện 3 hành trình rủi ro".
pub fn risky_routes_found(count: usize) -> String {
    format!("Đã phát hiện {count} hành trình rủi ro")
}
