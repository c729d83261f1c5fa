//! Kariaservice CLI
//!
//! Localization tooling for the site:
//! - `project`: project the catalogs onto a page skeleton and print every region
//! - `translate`: resolve one dotted key
//! - `set-locale`: persist the locale preference
//! - `locales`: list supported locales and whether their catalog loads

mod output;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kariaservice_i18n::{
    CatalogSource, DirSource, FilePreferences, I18nConfig, LocaleStore, MemoryDocument,
    MemoryPreferences, PreferenceStore, Viewport, BINDINGS, SECTIONS,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Localization tooling for the Kariaservice site
#[derive(Parser, Debug)]
#[command(name = "kariaservice")]
#[command(about = "Localization tooling for the Kariaservice site")]
#[command(version)]
struct Cli {
    /// Site configuration file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "resource/site.toml")]
    config: PathBuf,

    /// Catalog directory (defaults to `catalog_dir` next to the config file)
    #[arg(long)]
    catalogs: Option<PathBuf>,

    /// Fetch catalogs from `{url}/{code}.json` (requires the `network` feature)
    #[arg(long)]
    base_url: Option<String>,

    /// Preference file holding the persisted locale
    #[arg(long, default_value = ".kariaservice/preferences.json")]
    prefs: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project the catalogs onto a page skeleton and print each region
    Project {
        /// Preview this locale instead of the stored one (not persisted)
        #[arg(short, long)]
        lang: Option<String>,

        /// Viewport width in CSS pixels
        #[arg(short, long, default_value = "1440")]
        width: f32,

        /// Only print one section (e.g. `hero`, `footer`)
        #[arg(short, long)]
        section: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Feature-list items per list region in the skeleton
        #[arg(long, default_value = "4")]
        list_len: usize,
    },

    /// Resolve a dotted key (prints the key itself when unresolved)
    Translate {
        key: String,

        /// Locale to resolve against (defaults to the active one)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Persist the active locale
    SetLocale { code: String },

    /// List supported locales
    Locales,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let source = catalog_source(&cli, &config)?;
    let preference_key = config.preference_key.clone();

    match cli.command {
        Command::Project {
            ref lang,
            width,
            ref section,
            json,
            list_len,
        } => {
            if let Some(section) = section {
                if !SECTIONS.contains(&section.as_str()) {
                    bail!(
                        "unknown section `{}` (known: {})",
                        section,
                        SECTIONS.join(", ")
                    );
                }
            }
            let doc = MemoryDocument::skeleton(BINDINGS, list_len, Viewport::new(width));
            let prefs = stored_preferences(&cli.prefs, &preference_key);
            let mut store = LocaleStore::new(config, doc, prefs);
            store.initialize(&*source);
            if let Some(lang) = lang {
                ensure_supported(store.config(), lang)?;
                store.set_locale(lang);
            }
            info!("projected locale `{}`", store.locale());

            let rows = output::region_rows(store.document(), section.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", output::format_rows(&rows));
            }
        }
        Command::Translate { ref key, ref lang } => {
            let mut store = LocaleStore::new(
                config,
                MemoryDocument::default(),
                stored_preferences(&cli.prefs, &preference_key),
            );
            store.initialize(&*source);
            let out = match lang {
                Some(lang) => store.translate_in(key, lang),
                None => store.translate(key),
            };
            println!("{out}");
        }
        Command::SetLocale { ref code } => {
            ensure_supported(&config, code)?;
            let mut store = LocaleStore::new(
                config,
                MemoryDocument::default(),
                FilePreferences::new(&cli.prefs),
            );
            store.initialize(&*source);
            if store.set_locale(code) {
                println!("locale set to {}", store.locale());
            } else {
                println!("locale already {}", store.locale());
            }
        }
        Command::Locales => {
            let mut store = LocaleStore::new(
                config,
                MemoryDocument::default(),
                stored_preferences(&cli.prefs, &preference_key),
            );
            store.initialize(&*source);
            print!("{}", output::format_locales(&store));
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<I18nConfig> {
    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Ok(I18nConfig::default());
    }
    I18nConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()))
}

fn catalog_source(cli: &Cli, config: &I18nConfig) -> Result<Box<dyn CatalogSource>> {
    if let Some(url) = &cli.base_url {
        return http_source(url);
    }
    let dir = match &cli.catalogs {
        Some(dir) => dir.clone(),
        None => cli
            .config
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&config.catalog_dir),
    };
    debug!("reading catalogs from {}", dir.display());
    Ok(Box::new(DirSource::new(dir)))
}

#[cfg(feature = "network")]
fn http_source(url: &str) -> Result<Box<dyn CatalogSource>> {
    Ok(Box::new(kariaservice_i18n::HttpSource::new(url)))
}

#[cfg(not(feature = "network"))]
fn http_source(_url: &str) -> Result<Box<dyn CatalogSource>> {
    bail!("--base-url requires building with the `network` feature")
}

/// The persisted preference, copied into memory so previews never write it back.
fn stored_preferences(path: &Path, key: &str) -> MemoryPreferences {
    let prefs = MemoryPreferences::new();
    match FilePreferences::new(path).load(key) {
        Some(code) => prefs.with(key, code),
        None => prefs,
    }
}

fn ensure_supported(config: &I18nConfig, code: &str) -> Result<()> {
    if !config.is_supported(code) {
        let known: Vec<&str> = config.supported().map(|l| l.as_str()).collect();
        bail!("unsupported locale `{}` (supported: {})", code, known.join(", "));
    }
    Ok(())
}
