use clap::Parser;
use portfolio_site::{cli, config, error, render, store};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{PortfolioError, Result};
use portfolio_common::{resolve_view, Route};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Projects { categories, filter, featured, format } => {
            let config = Config::load()?;
            let portfolio = store::open_portfolio(&config, cli.fixture.as_deref())?;
            let filter = Commands::category_filter(&categories, filter);

            let mut projects = portfolio.list_projects(&filter).await?;
            if featured {
                projects.retain(|p| p.is_featured());
            }

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&projects)?),
                OutputFormat::Text => print!("{}", render::render_project_list(&projects)),
            }
        }

        Commands::Project { id, format } => {
            let config = Config::load()?;
            let portfolio = store::open_portfolio(&config, cli.fixture.as_deref())?;

            let project = portfolio
                .project_by_id(Some(id.as_str()))
                .await?
                .ok_or(PortfolioError::ProjectNotFound(id))?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&project)?),
                OutputFormat::Text => print!("{}", render::render_project(&project)),
            }
        }

        Commands::Route { path } => {
            let route = Route::from_path(&path).unwrap_or_else(|| {
                tracing::warn!(%path, "unknown path, falling back to home");
                Route::default()
            });
            print!("{}", render::render_view(&route, &resolve_view(&route)));
        }

        Commands::Config { set_url, set_key, show } => {
            let path = Config::config_path()?;
            let mut config = Config::load_from(&path)?;

            let changed = set_url.is_some() || set_key.is_some();
            if let Some(url) = set_url {
                config.set_url(url);
            }
            if let Some(key) = set_key {
                config.set_anon_key(key);
            }
            if changed {
                config.save_to(&path)?;
                println!("✔ 設定を保存しました: {}", path.display());
            }

            if show || !changed {
                config.apply_env();
                println!("設定:");
                println!("  URL: {}", config.supabase_url.as_deref().unwrap_or("未設定"));
                println!("  anonキー: {}", config.masked_key());
                println!(
                    "  状態: {}",
                    if config.endpoint().is_some() { "接続可能" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}
