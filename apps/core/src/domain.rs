use std::borrow::Cow;
use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// One analytics endpoint's answer: either a backend-reported error or the
/// payload itself. A falsy `error` field (`null`, `false`, `0`, `""`) counts
/// as absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Analytics<T> {
    Failed(String),
    Ready(T),
}

impl<T: DeserializeOwned> Analytics<T> {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Analytics<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value.get("error") {
            Some(serde_json::Value::String(message)) if !message.is_empty() => {
                return Ok(Self::Failed(message.clone()));
            }
            Some(other) if is_truthy(other) && !other.is_string() => {
                return Ok(Self::Failed(other.to_string()));
            }
            _ => {}
        }
        T::deserialize(value).map(Self::Ready).map_err(D::Error::custom)
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(number) => {
            number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan())
        }
        serde_json::Value::String(text) => !text.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

/// Prints whole floats without a fractional part, like a JavaScript template
/// literal does (`574001230.0` shows as `574001230`).
fn format_number(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
            format!("{value:.0}")
        }
        _ => number.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CorrelationReport {
    pub chart: Option<String>,
    pub correlations: Vec<Correlation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Correlation {
    pub variable1: String,
    pub variable2: String,
    pub correlation: f64,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub strength: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TemporalReport {
    pub chart: Option<String>,
    pub temporal_patterns: Vec<TemporalPattern>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemporalPattern {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VesselGroupReport {
    pub total_groups: u64,
    pub total_vessels_in_groups: u64,
    pub vessel_groups: Vec<VesselGroup>,
    pub map_html: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VesselGroup {
    pub vessel_count: u64,
    pub avg_distance_km: f64,
    pub vessel_types: Vec<String>,
}

/// Summary returned by `/calculate-risk-scores`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RiskStats {
    pub high_risk: u64,
    pub medium_risk: u64,
    pub low_risk: u64,
    pub avg_risk_score: f64,
    #[serde(default)]
    pub total_vessels: Option<u64>,
    #[serde(default)]
    pub max_risk_score: Option<f64>,
    #[serde(default)]
    pub risk_factors: Option<RiskFactors>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RiskyRoutesReport {
    pub risky_routes: Vec<RiskRoute>,
    #[serde(default)]
    pub total_routes: Option<usize>,
    #[serde(default)]
    pub risk_threshold: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRoute {
    pub mmsi: Mmsi,
    #[serde(default)]
    pub vessel_name: ColumnText,
    #[serde(default)]
    pub vessel_type: ColumnText,
    #[serde(default)]
    pub description: ColumnText,
    pub risk_score: f64,
    pub risk_factors: RiskFactors,
}

/// Vessel identifier; the backend sends it as a number or a string depending
/// on the source column.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Mmsi {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Mmsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => f.write_str(&format_number(number)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A dataset column passed through verbatim: vessel types are numeric AIS
/// codes in some sources, and empty cells arrive as `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ColumnText {
    Text(String),
    Number(serde_json::Number),
    #[default]
    Missing,
}

impl ColumnText {
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The cell's text, or `fallback` for an empty cell.
    pub fn or<'a>(&'a self, fallback: &'a str) -> Cow<'a, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(format_number(number)),
            Self::Missing => Cow::Borrowed(fallback),
        }
    }
}

impl From<&str> for ColumnText {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl fmt::Display for ColumnText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.or(""))
    }
}

/// Per-factor contributions, each on a 0..=100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RiskFactors {
    pub collision: f64,
    pub weather: f64,
    pub route: f64,
    pub speed: f64,
    pub navigation: f64,
}

impl RiskFactors {
    pub const fn value(&self, kind: RiskFactorKind) -> f64 {
        match kind {
            RiskFactorKind::Collision => self.collision,
            RiskFactorKind::Weather => self.weather,
            RiskFactorKind::Route => self.route,
            RiskFactorKind::Speed => self.speed,
            RiskFactorKind::Navigation => self.navigation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFactorKind {
    Collision,
    Weather,
    Route,
    Speed,
    Navigation,
}

impl RiskFactorKind {
    pub const ALL: [Self; 5] = [
        Self::Collision,
        Self::Weather,
        Self::Route,
        Self::Speed,
        Self::Navigation,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collision => "collision",
            Self::Weather => "weather",
            Self::Route => "route",
            Self::Speed => "speed",
            Self::Navigation => "navigation",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "collision" => Some(Self::Collision),
            "weather" => Some(Self::Weather),
            "route" => Some(Self::Route),
            "speed" => Some(Self::Speed),
            "navigation" => Some(Self::Navigation),
            _ => None,
        }
    }

    /// Short bar label used on route cards.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Collision => "Va chạm",
            Self::Weather => "Thời tiết",
            Self::Route => "Lệch tuyến",
            Self::Speed => "Tốc độ",
            Self::Navigation => "Chướng ngại",
        }
    }
}

/// Badge colour band for a route's aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Elevated,
    Normal,
}

impl RiskLevel {
    pub fn classify(score: f64) -> Self {
        if score >= 80.0 {
            Self::High
        } else if score >= 60.0 {
            Self::Elevated
        } else {
            Self::Normal
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::High => "#dc3545",
            Self::Elevated => "#fd7e14",
            Self::Normal => "#28a745",
        }
    }

    pub const fn class_name(self) -> &'static str {
        match self {
            Self::High => "risk-red",
            Self::Elevated => "risk-orange",
            Self::Normal => "risk-green",
        }
    }
}

/// Body of `POST /identify-risky-routes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskQuery {
    pub risk_threshold: i64,
}

/// FastAPI failure body. `detail` is a string for handled errors and a list
/// of objects for validation failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FailureDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl FailureDetail {
    /// The human-readable detail, if the body carried one.
    pub fn parse(body: &str) -> Option<String> {
        let failure: Self = serde_json::from_str(body).ok()?;
        match failure.detail? {
            serde_json::Value::String(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}
