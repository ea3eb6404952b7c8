//! Command line front end for themecraft.
//!
//! Resolves theme files and presets, compiles them against a design-token
//! file and prints the compiled component map.
//!
//! ```text
//! themecraft --tokens tokens.yaml --themes 'themes/**/*.yaml' --preset buttons:primary,danger
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, ValueEnum};
use console::style;
use themecraft::{
    CompiledComponent, Naming, Plugin, PresetRegistry, PresetSelector, ThemeConfig, TokenTable,
    TokenUtilities,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "themecraft", version)]
#[command(about = "Compile theme definitions into component CSS rules")]
struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme file glob, relative to the current directory
    #[arg(long = "themes", value_name = "GLOB")]
    themes: Vec<String>,

    /// Preset to layer on top, optionally filtered
    #[arg(long = "preset", value_name = "NAME[:THEME,...]", value_parser = parse_preset)]
    presets: Vec<PresetSelector>,

    /// Directory searched for presets by name
    #[arg(long = "preset-dir", value_name = "DIR")]
    preset_dirs: Vec<PathBuf>,

    /// Design-token file (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    tokens: PathBuf,

    /// Selector naming, overriding the configuration
    #[arg(long, value_enum)]
    naming: Option<NamingArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NamingArg {
    Kebab,
    Verbatim,
}

impl From<NamingArg> for Naming {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::Kebab => Naming::Kebab,
            NamingArg::Verbatim => Naming::Verbatim,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

/// Parses `name` or `name:theme,theme`.
fn parse_preset(arg: &str) -> Result<PresetSelector, String> {
    let (name, themes) = match arg.split_once(':') {
        Some((name, themes)) => (name, Some(themes)),
        None => (arg, None),
    };
    if name.is_empty() {
        return Err("preset name is empty".to_string());
    }
    Ok(match themes {
        None => PresetSelector::All(name.to_string()),
        Some(themes) => PresetSelector::Subset {
            name: name.to_string(),
            themes: themes
                .split(',')
                .map(str::trim)
                .filter(|theme| !theme.is_empty())
                .map(str::to_string)
                .collect(),
        },
    })
}

fn setup_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "themecraft=warn",
            1 => "themecraft=debug",
            _ => "themecraft=trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merges the configuration file with command line flags.
///
/// Command line themes and presets come after the configured ones, so they
/// win on name collisions.
fn build_config(cli: &Cli) -> anyhow::Result<ThemeConfig> {
    let mut config = match &cli.config {
        Some(path) => ThemeConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ThemeConfig::new(),
    };

    if !cli.themes.is_empty() {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        config.themes.extend(
            cli.themes
                .iter()
                .map(|glob| cwd.join(glob).to_string_lossy().into_owned()),
        );
    }
    config.presets.extend(cli.presets.iter().cloned());
    if let Some(naming) = cli.naming {
        config.naming = naming.into();
    }

    if config.themes.is_empty() && config.presets.is_empty() {
        bail!("no theme sources: pass --themes, --preset or a --config that names some");
    }
    Ok(config)
}

fn compile(cli: &Cli) -> anyhow::Result<CompiledComponent> {
    let config = build_config(cli)?;
    let tokens = TokenTable::from_path(&cli.tokens)
        .with_context(|| format!("failed to load tokens {}", cli.tokens.display()))?;

    let mut presets = PresetRegistry::new();
    for dir in &cli.preset_dirs {
        presets.add_search_dir(dir);
    }
    debug!(
        themes = config.themes.len(),
        presets = config.presets.len(),
        "compiling"
    );

    Plugin::new(config)
        .with_presets(presets)
        .compile(TokenUtilities::new(tokens))
        .context("failed to compile themes")
}

fn render(component: &CompiledComponent, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Json => {
            let mut out = serde_json::to_string_pretty(component)?;
            out.push('\n');
            out
        }
        Format::Yaml => serde_yaml::to_string(component)?,
    })
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let component = compile(cli)?;
    render(&component, cli.format)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()) {
                eprintln!("{} {e}", style("error:").red().bold());
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
