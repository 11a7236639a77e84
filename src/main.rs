use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tabconv::cli::{Args, Commands};
use tabconv::conversion::limits;
use tabconv::export::{default_filename, DirectorySaver};
use tabconv::{ConversionConfig, ConversionEngine, ConversionError, ParseError, Table};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = match err.downcast_ref::<ConversionError>() {
                Some(conversion) => conversion.user_message(),
                None => format!("{:#}", err),
            };
            eprintln!("✗ {}", message);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.command.to_config()?;

    match &args.command {
        Commands::Import {
            input,
            output,
            compact,
            ..
        } => handle_import(input, output.as_deref(), *compact, args.quiet, config),
        Commands::Export {
            input,
            filename,
            output_dir,
            parse_dates,
            ..
        } => handle_export(
            input,
            filename.as_deref(),
            output_dir,
            *parse_dates,
            args.quiet,
            config,
        ),
        Commands::Currency { amount, .. } => {
            println!("{}", ConversionEngine::new(config).format_currency(*amount)?);
            Ok(())
        }
    }
}

fn handle_import(
    input: &str,
    output: Option<&Path>,
    compact: bool,
    quiet: bool,
    config: ConversionConfig,
) -> Result<()> {
    let text = read_input(input, &config)?;
    let engine = ConversionEngine::new(config);
    let records = engine.read_to_json(&text);

    let json = if compact {
        serde_json::to_string(&records)?
    } else {
        serde_json::to_string_pretty(&records)?
    };

    match output {
        Some(output_path) => {
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(output_path, json)
                .with_context(|| format!("writing {}", output_path.display()))?;

            if !quiet {
                println!("✓ Converted to: {}", output_path.display());
            }
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn handle_export(
    input: &str,
    filename: Option<&str>,
    output_dir: &Path,
    parse_dates: bool,
    quiet: bool,
    config: ConversionConfig,
) -> Result<()> {
    let text = read_input(input, &config)?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| ConversionError::from(ParseError::from(e)))?;
    let table = Table::from_json(&value, parse_dates)?;

    let filename = match filename {
        Some(name) => name.to_string(),
        None => default_filename(&chrono::Local::now().naive_local()),
    };
    debug!(%filename, rows = table.len(), "exporting");

    let saver = DirectorySaver::new(output_dir);
    let engine = ConversionEngine::new(config);
    let metadata = engine.export(&filename, &table, &saver)?;

    if !quiet {
        println!(
            "✓ Exported {} rows to: {}",
            metadata.rows,
            saver.path_for(&filename).display()
        );
    }

    Ok(())
}

fn read_input(input: &str, config: &ConversionConfig) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        limits::check_size(buffer.len() as u64, config)?;
        Ok(buffer)
    } else {
        Ok(limits::read_limited(Path::new(input), config)?)
    }
}
