mod cli;
mod config;
mod http;
mod report;

use std::rc::Rc;

use ais_dashboard::AnalyticsClient;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use http::HttpBackend;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    init_logging(args.debug);

    let settings = config::load(&args)?;
    log::info!("using backend {}", settings.dashboard.base_url);

    let client = Rc::new(AnalyticsClient::new(HttpBackend::new()?, settings.dashboard));
    let fragments = report::render(client, args.section, &settings.threshold).await;

    if args.json {
        println!("{}", report::summary_json(&fragments)?);
    } else if let Some(path) = &args.output {
        report::write_page(path, &fragments)?;
        eprintln!("Wrote {}", path.display());
    } else {
        report::print(&fragments);
    }

    Ok(())
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
