use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use view_router::config::{
    load_config, validate_config, ConfigError, ObservabilityConfig, RouterConfig, Variant,
};
use view_router::history::HistoryMode;
use view_router::lifecycle::{build_history, build_navigator, build_router};
use view_router::observability::logging::{apply_level, init_logging};
use view_router::routing::RouteTarget;

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Resolve paths against the compressor view routes", long_about = None)]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start from a shipped setup: hash, path or path-fallback
    #[arg(long, conflicts_with = "config")]
    variant: Option<Variant>,

    /// Override the history mode (hash or path)
    #[arg(short, long)]
    mode: Option<HistoryMode>,

    /// Override the history base path
    #[arg(short, long)]
    base: Option<String>,

    /// Log level while loading; the config's level applies afterwards unless set
    #[arg(long)]
    log_level: Option<String>,

    /// Redirect unmatched paths to this target
    #[arg(long)]
    catch_all: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Resolve logical paths, in order, as successive navigations
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the external address of a logical path
    Href { path: String },
    /// Print the logical path of an external address
    Locate { address: String },
    /// Validate the configuration and report every problem
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging comes up before the config is read so loading is traced too.
    let early = ObservabilityConfig {
        log_level: cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
    };
    let log_handle = match init_logging(&early) {
        Ok(handle) => Some(handle),
        Err(_) => {
            eprintln!("warning: logging already initialized");
            None
        }
    };

    let config = match compose_config(&cli) {
        Ok(config) => config,
        Err(ConfigError::Validation(errors)) => {
            for error in &errors {
                eprintln!("error: {}", error);
            }
            return Err(format!("{} configuration problem(s) found", errors.len()).into());
        }
        Err(e) => return Err(e.into()),
    };

    if let (Some(handle), None) = (&log_handle, &cli.log_level) {
        if let Err(e) = apply_level(handle, &config.observability) {
            eprintln!("warning: could not apply log level: {}", e);
        }
    }

    match cli.command {
        Commands::Check => {
            let router = build_router(&config)?;
            println!(
                "configuration OK: {} mode, {} route(s), catch-all {}",
                config.history.mode,
                router.table().len(),
                config.catch_all.as_deref().unwrap_or("disabled")
            );
        }
        Commands::Routes => {
            let navigator = build_navigator(&config)?;
            let routes: Vec<Value> = navigator
                .router()
                .table()
                .routes()
                .map(|route| {
                    let target = match route.target() {
                        RouteTarget::View(view) => json!({ "view": view }),
                        RouteTarget::Redirect(to) => json!({ "redirect": to }),
                    };
                    json!({
                        "name": route.name(),
                        "pattern": route.pattern().to_string(),
                        "target": target,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Resolve { paths } => {
            let mut navigator = build_navigator(&config)?;
            let mut results = Vec::with_capacity(paths.len());
            for path in &paths {
                let result = match navigator.push(path) {
                    Ok(resolved) => json!({
                        "requested": path,
                        "resolved": resolved.as_ref(),
                        "href": navigator.current_href(),
                    }),
                    Err(e) => json!({
                        "requested": path,
                        "error": e.to_string(),
                    }),
                };
                results.push(result);
            }
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Href { path } => {
            println!("{}", build_history(&config).href(&path));
        }
        Commands::Locate { address } => match build_history(&config).location(&address) {
            Some(path) => println!("{}", path),
            None => {
                return Err(
                    format!("address `{}` is outside the application base", address).into(),
                );
            }
        },
    }

    Ok(())
}

/// Config file or preset, then command-line overrides, then validation.
fn compose_config(cli: &Cli) -> Result<RouterConfig, ConfigError> {
    let mut config = match (&cli.config, cli.variant) {
        (Some(path), _) => load_config(path)?,
        (None, Some(variant)) => RouterConfig::for_variant(variant),
        (None, None) => RouterConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config.history.mode = mode;
    }
    if let Some(base) = &cli.base {
        config.history.base = Some(base.clone());
    }
    if let Some(target) = &cli.catch_all {
        config.catch_all = Some(target.clone());
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
