use clap::Parser;
use eduapp::core::catalog::Catalog;
use eduapp::core::config::{CliOverrides, load_config, resolve};
use eduapp::core::courses::CourseCatalog;
use eduapp::core::messages::Inbox;
use eduapp::core::navigation::Screen;
use eduapp::core::plan::Plan;
use eduapp::core::state::App;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::error::Error;
use std::fs::File;

#[derive(Parser)]
#[command(name = "eduapp", about = "Terminal learning app: explanations, courses and mentors")]
struct Args {
    /// Subscription plan to start with (free, pro, pro-plus)
    #[arg(short, long)]
    plan: Option<Plan>,

    /// Screen to open after login, by tag (e.g. explore, subscription)
    #[arg(short, long)]
    open: Option<String>,

    /// Skip the login form
    #[arg(short, long)]
    login: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to eduapp.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("eduapp.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config()?;
    let resolved = resolve(
        &config,
        &CliOverrides {
            plan: args.plan,
            login: args.login,
        },
    );
    log::info!("EduApp starting up with plan {}", resolved.plan);

    let catalog = match &resolved.catalog_file {
        Some(path) => {
            log::info!("Loading catalog from {}", path.display());
            Catalog::load(path)?
        }
        None => Catalog::builtin()?,
    };
    let app = App::new(catalog, CourseCatalog::builtin()?, Inbox::builtin()?, &resolved);

    let open = match args.open.as_deref().map(str::parse::<Screen>) {
        Some(Ok(screen)) => Some(screen),
        Some(Err(e)) => {
            log::warn!("Ignoring --open: {}", e);
            eprintln!("eduapp: {e}, ignoring --open");
            None
        }
        None => None,
    };

    eduapp::tui::run(app, &resolved, open)?;
    Ok(())
}
