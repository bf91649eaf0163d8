mod app;
mod logging;
mod pages;

use acme_core::config;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "acme",
    version,
    about = "ACME Learning Center - locale catalog and route table shell"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table.
    Routes,
    /// Navigate to each URL in order and print the rendered page.
    Visit {
        /// URLs to visit (browser URLs, including the base path).
        #[arg(required = true)]
        urls: Vec<String>,
        /// Render in this locale instead of the configured one.
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Translate a message key.
    T {
        /// Dotted message key, e.g. `nav.home`.
        key: String,
        /// Locale to look the key up in.
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// List locales and the keys each is missing relative to the fallback.
    Locales,
    /// Print the template bindings of the active locale.
    Bindings,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (log_handle, level_from_env) = logging::init();
    let cfg = config::load(&cli.config)?;
    if !level_from_env {
        logging::set_level(&log_handle, &cfg.app.log_level)?;
    }

    let app = app::App::new(&cfg)?;

    match cli.command {
        Commands::Routes => {
            println!("{} - routes (base: '{}')\n", cfg.app.name, cfg.router.base_url);
            for route in app.router.table().iter() {
                println!(
                    "  {:<20} {:<10} {:<22} {}",
                    route.path.as_str(),
                    route.name,
                    route.describe_target(),
                    route.meta.title().unwrap_or("-")
                );
            }
        }
        Commands::Visit { urls, locale } => {
            for url in &urls {
                let page = app.visit(url, locale.as_deref()).await?;
                println!("=== {} [{}] ({} -> {})", page.title, page.route, url, page.path);
                println!("{}\n", page.body);
            }
        }
        Commands::T { key, locale } => {
            if key.trim().is_empty() {
                anyhow::bail!("no key provided. Usage: acme t <key> [--locale <code>]");
            }
            let value = match locale {
                Some(code) => app.i18n.t_in(&key, &code),
                None => app.i18n.t(&key),
            };
            println!("{value}");
        }
        Commands::Locales => {
            println!(
                "Active: {}  Fallback: {}\n",
                app.i18n.locale(),
                app.i18n.fallback_locale()
            );
            for code in app.i18n.available_locales() {
                let count = app.i18n.dictionary(code).map_or(0, |d| d.len());
                let missing = app.i18n.missing_keys(code);
                println!("  {code}: {count} message(s), {} missing", missing.len());
                for key in missing {
                    println!("    - {key}");
                }
            }
        }
        Commands::Bindings => match app.i18n.bindings() {
            Some(bindings) => {
                for (key, value) in bindings {
                    println!("{key} = {value}");
                }
            }
            None => anyhow::bail!("global injection is disabled (i18n.global_injection = false)"),
        },
    }

    Ok(())
}
