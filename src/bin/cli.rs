//! navurl CLI
//!
//! Parse, resolve and format URLs from the shell, and dry-run the
//! navigation decisions a book runtime would make.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use navurl::{
    error::{AppError, Result},
    models::{Config, UrlRecord},
    navigation::{Navigator, site_root},
    resolver,
};

const DEFAULT_CONFIG: &str = "navurl.toml";

/// navurl - legacy URL parse / resolve / format
#[derive(Parser, Debug)]
#[command(name = "navurl", version, about = "Legacy-compatible URL toolkit")]
struct Cli {
    /// Path to a TOML config file (default: ./navurl.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a URL into its components
    Parse {
        url: String,

        /// Decode the query string into a map
        #[arg(long)]
        parse_query: bool,

        /// Treat a leading `//` as a host
        #[arg(long)]
        slashes_denote_host: bool,

        /// Print the record as JSON instead of one field per line
        #[arg(long)]
        json: bool,

        /// Read the URL argument as a JSON value (`"http://..."`)
        #[arg(long)]
        json_input: bool,
    },

    /// Resolve a reference against a base URL
    Resolve { base: String, relative: String },

    /// Serialize a JSON record (`-` reads it from stdin)
    Format { record: String },

    /// Show how a clicked link would be followed
    Navigate {
        /// URI of the currently loaded content
        #[arg(long)]
        previous: String,

        /// Pathname of the current page
        #[arg(long)]
        location: String,

        /// The clicked link
        link: String,

        /// Do not push a history entry
        #[arg(long)]
        no_push: bool,
    },

    /// Compute the absolute book root URL
    Root {
        #[arg(long, default_value = "https:")]
        protocol: String,

        #[arg(long)]
        host: String,

        /// Pathname of the current page
        #[arg(long)]
        location: String,

        /// Book root relative to the current page
        #[arg(long, default_value = ".")]
        base_path: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging. `RUST_LOG` wins; otherwise [`apply_level`] caps
/// the output.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .format_timestamp_secs()
        .init();
}

/// Cap log output at `level`, or at debug with `--verbose`.
fn apply_level(verbose: bool, level: &str) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let filter = if verbose {
        LevelFilter::Debug
    } else {
        level.parse().unwrap_or(LevelFilter::Info)
    };
    log::set_max_level(filter);
}

/// The explicit config path, or `navurl.toml` when it exists.
fn config_path(path: Option<&PathBuf>) -> Option<PathBuf> {
    match path {
        Some(path) => Some(path.clone()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            default.exists().then_some(default)
        }
    }
}

fn print_record(record: &UrlRecord) {
    let fields = [
        ("protocol", &record.protocol),
        ("auth", &record.auth),
        ("host", &record.host),
        ("hostname", &record.hostname),
        ("port", &record.port),
        ("pathname", &record.pathname),
        ("search", &record.search),
        ("hash", &record.hash),
        ("path", &record.path),
    ];
    println!("href: {}", record.href);
    println!("slashes: {}", record.slashes);
    for (name, value) in fields {
        if let Some(value) = value {
            println!("{name}: {value}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    apply_level(cli.verbose, "info");

    let config_path = config_path(cli.config.as_ref());
    let config = match &config_path {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    apply_level(cli.verbose, &config.logging.level);

    match cli.command {
        Command::Parse {
            url,
            parse_query,
            slashes_denote_host,
            json,
            json_input,
        } => {
            let parse_query = parse_query || config.resolver.parse_query;
            let slashes_denote_host = slashes_denote_host || config.resolver.slashes_denote_host;
            log::debug!(
                "Parsing {url:?} (parse_query: {parse_query}, slashes_denote_host: {slashes_denote_host})"
            );

            let record = if json_input {
                let value: serde_json::Value = serde_json::from_str(&url)?;
                resolver::parse_value(&value, parse_query, slashes_denote_host)?
            } else {
                resolver::parse(&url, parse_query, slashes_denote_host)
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_record(&record);
            }
        }

        Command::Resolve { base, relative } => {
            println!("{}", resolver::resolve(&base, &relative));
        }

        Command::Format { record } => {
            let input = if record == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                record
            };
            let record: UrlRecord = serde_json::from_str(&input)?;
            println!("{}", resolver::format(&record));
        }

        Command::Navigate {
            previous,
            location,
            link,
            no_push,
        } => {
            let mut navigator = Navigator::new(config.navigation.clone(), previous);
            let decision = navigator.navigate(&location, &link, !no_push);
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }

        Command::Root {
            protocol,
            host,
            location,
            base_path,
        } => {
            let root = site_root(
                &protocol,
                &host,
                &location,
                &base_path,
                &config.navigation.index_file,
            );
            println!("{root}");
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Some(path) = &config_path {
                if let Err(e) = Config::load(path) {
                    log::error!("Config could not be loaded from {}: {}", path.display(), e);
                    return Err(AppError::config(format!(
                        "could not load configuration: {e}"
                    )));
                }
            }
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
