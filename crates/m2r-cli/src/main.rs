//! `m2r`: convert markdown files to reStructuredText.
//!
//! Each input `name.md` is written to `name.rst` beside it, or printed with
//! `--dry-run`. Defaults come from `~/.config/m2r/config.toml`; flags can
//! only switch options on.

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use m2r_config::Config;
use m2r_engine::TableMode;
use std::path::PathBuf;
use std::process;

mod batch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableModeArg {
    ListTable,
    RawHtml,
}

impl From<TableModeArg> for TableMode {
    fn from(arg: TableModeArg) -> Self {
        match arg {
            TableModeArg::ListTable => TableMode::ListTable,
            TableModeArg::RawHtml => TableMode::RawHtml,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "m2r", version)]
#[command(about = "Convert markdown files to reStructuredText")]
struct Cli {
    /// Markdown files to convert
    input_files: Vec<PathBuf>,

    /// Print the converted text instead of writing .rst files
    #[arg(long)]
    dry_run: bool,

    /// Replace existing .rst files without asking
    #[arg(long)]
    overwrite: bool,

    /// Do not treat _text_ as emphasis
    #[arg(long)]
    no_underscore_emphasis: bool,

    /// Write links as anonymous references (`text <url>`__)
    #[arg(long)]
    anonymous_references: bool,

    /// Leave `$math$` code spans alone
    #[arg(long)]
    disable_inline_math: bool,

    /// Turn links to local .md files and #anchors into :doc: and :ref:
    #[arg(long)]
    parse_relative_links: bool,

    /// How pipe tables are written
    #[arg(long, value_enum)]
    table_mode: Option<TableModeArg>,

    /// Stop at the first file that fails
    #[arg(long)]
    strict: bool,

    /// Configuration file [default: ~/.config/m2r/config.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective options to the configuration file
    #[arg(long)]
    save_config: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Layers the command-line flags over the file's settings.
    fn apply(&self, mut config: Config) -> Config {
        config.overwrite |= self.overwrite;
        let options = &mut config.options;
        options.no_underscore_emphasis |= self.no_underscore_emphasis;
        options.anonymous_references |= self.anonymous_references;
        options.disable_inline_math |= self.disable_inline_math;
        options.parse_relative_links |= self.parse_relative_links;
        if let Some(mode) = self.table_mode {
            options.table_mode = mode.into();
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => Config::expand_path(path),
        None => Config::config_path(),
    };
    log::debug!("Config path: {}", config_path.display());

    let config = match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => Config::default(),
    };
    let config = cli.apply(config);

    if cli.save_config {
        config.save_to_path(&config_path)?;
        log::info!("Saved config to {}", config_path.display());
    }

    if cli.input_files.is_empty() {
        if !cli.save_config {
            Cli::command().print_help()?;
        }
        return Ok(());
    }

    let settings = batch::Settings {
        dry_run: cli.dry_run,
        overwrite: config.overwrite,
        strict: cli.strict,
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let failures = batch::run(
        &cli.input_files,
        &config.options,
        &settings,
        &mut stdin.lock(),
        &mut stdout.lock(),
    );

    if failures > 0 {
        log::info!("{failures} file(s) failed");
        process::exit(1);
    }
    Ok(())
}
