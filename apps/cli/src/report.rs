use std::fmt::Write as _;
use std::path::Path;
use std::rc::Rc;

use ais_dashboard::controllers::{DashboardLoader, MapSource, MapToggle, Outcome, RiskAnalysis};
use ais_dashboard::domain::RiskFactorKind;
use ais_dashboard::render::styles;
use ais_dashboard::{AnalyticsClient, Backend, MemorySurface, Surface};
use serde::Serialize;

use crate::cli::Section;

const ERROR_BLOCK_MARKER: &str = r#"class="error-message""#;

/// One rendered container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub section: Section,
    pub outcome: Outcome,
    pub visible: bool,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct FragmentSummary {
    pub section: &'static str,
    pub visible: bool,
    pub bytes: usize,
    pub failed: bool,
    pub error_blocks: usize,
}

impl From<&Fragment> for FragmentSummary {
    fn from(fragment: &Fragment) -> Self {
        Self {
            section: fragment.section.as_str(),
            visible: fragment.visible,
            bytes: fragment.html.len(),
            failed: fragment.outcome == Outcome::Failed,
            error_blocks: fragment.html.matches(ERROR_BLOCK_MARKER).count(),
        }
    }
}

/// Runs the controllers for `section` against in-memory containers.
pub async fn render<B: Backend>(
    client: Rc<AnalyticsClient<B>>,
    section: Section,
    threshold: &str,
) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    for part in section.expand() {
        let surface = MemorySurface::default();
        let outcome = match part {
            Section::Dashboard => DashboardLoader::new(client.clone()).load(&surface).await,
            Section::Risk => {
                let kinds: Vec<&str> = RiskFactorKind::ALL.iter().map(|kind| kind.as_str()).collect();
                RiskAnalysis::new(client.clone())
                    .run(threshold, kinds.as_slice(), &surface)
                    .await
            }
            Section::RiskMap => {
                surface.set_visible(false);
                MapToggle::new(client.clone(), MapSource::Risk)
                    .toggle(&surface)
                    .await
            }
            Section::All => continue,
        };
        log::info!("{} -> {outcome:?}", part.as_str());
        fragments.push(Fragment {
            section: part,
            outcome,
            visible: surface.is_visible(),
            html: surface.html(),
        });
    }
    fragments
}

pub fn summary_json(fragments: &[Fragment]) -> serde_json::Result<String> {
    let summaries: Vec<FragmentSummary> = fragments.iter().map(FragmentSummary::from).collect();
    serde_json::to_string_pretty(&summaries)
}

/// Standalone page: every stylesheet inline, one `<section>` per fragment.
pub fn page(fragments: &[Fragment]) -> String {
    let mut body = String::new();
    for fragment in fragments {
        let hidden = if fragment.visible { "" } else { " hidden" };
        let _ = writeln!(
            body,
            r#"<section id="{}"{hidden}>{}</section>"#,
            fragment.section.as_str(),
            fragment.html
        );
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"vi\">\n<head>\n<meta charset=\"utf-8\">\n<title>AIS Marine Traffic Analyzer</title>\n<style>{}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        styles::ALL.concat()
    )
}

pub fn print(fragments: &[Fragment]) {
    for fragment in fragments {
        println!("\n== {} ({:?}) ==", fragment.section.as_str(), fragment.outcome);
        println!("{}", fragment.html);
    }
}

pub fn write_page(path: &Path, fragments: &[Fragment]) -> std::io::Result<()> {
    std::fs::write(path, page(fragments))
}
