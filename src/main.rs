use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use televid::app::App;
use televid::config::Config;
use televid::portal::{Article, PortalState};
use televid::theme::ThemeVariant;
use televid::ui;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "televid", about = "TeleВИД: television industry news in your terminal")]
struct Args {
    /// Config file (default: ~/.config/televid/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color theme, overrides the config file (dark, light)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Write logs to FILE instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the article headlines and exit
    #[arg(long)]
    list: bool,

    /// Only list articles whose title or summary contains QUERY
    #[arg(long, value_name = "QUERY", requires = "list")]
    query: Option<String>,

    /// Print the listed articles as JSON
    #[arg(long, requires = "list")]
    json: bool,
}

/// Initialize tracing. Silent unless `RUST_LOG` is set.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let Some(path) = path.or_else(Config::default_path) else {
        tracing::debug!("HOME not set, using default configuration");
        return Ok(Config::default());
    };
    Config::load(&path).with_context(|| format!("Failed to load config '{}'", path.display()))
}

fn headline(article: &Article) -> String {
    format!(
        "{:>3}  {} [{}, {}] ({})",
        article.id,
        article.title,
        article.category,
        article.timestamp,
        article.comment_count()
    )
}

fn print_list(portal: &PortalState, json: bool) -> Result<()> {
    let visible = portal.visible_articles();
    if json {
        let articles: Vec<&Article> = visible.iter().map(|a| a.as_ref()).collect();
        let out = serde_json::to_string_pretty(&articles).context("Failed to encode articles")?;
        println!("{}", out);
    } else if visible.is_empty() {
        eprintln!("Нет статей по запросу '{}'", portal.query());
    } else {
        for article in &visible {
            println!("{}", headline(article));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let mut config = load_config(args.config)?;
    if let Some(theme) = args.theme {
        if ThemeVariant::from_str_name(&theme).is_none() {
            anyhow::bail!("Unknown theme '{}' (expected dark or light)", theme);
        }
        config.theme = theme;
    }

    let mut portal = PortalState::seeded();

    if args.list {
        if let Some(query) = args.query {
            portal.set_query(query);
        }
        return print_list(&portal, args.json);
    }

    let mut app = App::with_config(portal, &config);
    ui::run(&mut app).await?;

    let unsent = app.portal.drafts().pending();
    if unsent > 0 {
        tracing::info!(drafts = unsent, "Discarding unsent comment drafts");
    }

    println!("До свидания!");
    Ok(())
}
