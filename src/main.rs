use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use csvconv::cli::{handle_error, path_mapping, CliUtils};
use csvconv::conversion::{ConversionConfig, ConversionStats, CsvData};
use csvconv::error::{ConversionError, ConversionErrorKind, ConversionResult};
use csvconv::parser::{directory, JsonSource};

/// JSON to CSV Converter
#[derive(Parser, Debug)]
#[command(name = "csvconv")]
#[command(about = "Convert JSON documents to flat CSV")]
#[command(version = "0.1.0")]
struct CliArgs {
    /// Input JSON source (inline string, file, or directory)
    #[arg()]
    input: Option<String>,

    /// Output file path, or directory to place derived .csv names in
    /// (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    recursive: bool,

    /// Maximum input size (e.g. 100MB, default: 100MB)
    #[arg(long)]
    memory_limit: Option<String>,

    /// Only validate JSON, don't convert
    #[arg(long)]
    validate_only: bool,

    /// Output conversion statistics
    #[arg(long)]
    stats: bool,

    /// Show only the first N data rows of the CSV output
    #[arg(long, value_name = "ROWS")]
    preview: Option<usize>,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    continue_on_error: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            handle_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> ConversionResult<()> {
    let config = create_conversion_config(args)?;

    if args.validate_only {
        handle_validation(args)
    } else {
        handle_conversion(args, &config)
    }
}

fn create_conversion_config(args: &CliArgs) -> ConversionResult<ConversionConfig> {
    let memory_limit = parse_memory_limit(&args.memory_limit)?;
    let config = ConversionConfig::default().with_memory_limit(memory_limit);

    config
        .validate()
        .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

    Ok(config)
}

/// Parse a memory limit string (e.g. "100MB", "1GB", "500KB")
fn parse_memory_limit(limit: &Option<String>) -> ConversionResult<usize> {
    let Some(limit_str) = limit else {
        return Ok(ConversionConfig::default().memory_limit);
    };

    let normalized = limit_str.trim().to_uppercase();
    let (number, multiplier) = if let Some(rest) = normalized.strip_suffix("GB") {
        (rest, 1024 * 1024 * 1024)
    } else if let Some(rest) = normalized.strip_suffix("MB") {
        (rest, 1024 * 1024)
    } else if let Some(rest) = normalized.strip_suffix("KB") {
        (rest, 1024)
    } else if let Some(rest) = normalized.strip_suffix('B') {
        (rest, 1)
    } else {
        (normalized.as_str(), 1)
    };

    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| *n >= 0.0)
        .map(|n| (n * multiplier as f64) as usize)
        .ok_or_else(|| {
            ConversionError::conversion(ConversionErrorKind::configuration(format!(
                "invalid memory limit: {}",
                limit_str
            )))
        })
}

fn handle_validation(args: &CliArgs) -> ConversionResult<()> {
    let report_valid = |description: &str| {
        CliUtils::show_success(&format!("Valid JSON: {}", description), args.quiet);
    };

    if args.stdin {
        let source = JsonSource::Stdin;
        source.parse()?;
        report_valid(&source.description());
        return Ok(());
    }

    let Some(input) = &args.input else {
        return Err(no_input_error());
    };

    let path = PathBuf::from(input);
    if looks_like_inline_json(input) {
        let source = JsonSource::Inline(input.clone());
        source.parse()?;
        report_valid(&source.description());
        Ok(())
    } else if path.is_file() {
        let source = JsonSource::File(path);
        source.parse()?;
        report_valid(&source.description());
        Ok(())
    } else if path.is_dir() {
        let files = directory::find_json_files(&path, args.recursive)
            .map_err(|e| io_error(e, Some(path.clone())))?;
        for file in files {
            match JsonSource::File(file.clone()).parse() {
                Ok(_) => CliUtils::show_success(&file.display().to_string(), args.quiet),
                Err(e) => CliUtils::show_error(&format!("{}: {}", file.display(), e)),
            }
        }
        Ok(())
    } else {
        Err(missing_input_error(input))
    }
}

fn handle_conversion(args: &CliArgs, config: &ConversionConfig) -> ConversionResult<()> {
    if args.stdin {
        return convert_source(JsonSource::Stdin, args.output.as_deref(), args, config);
    }

    let Some(input) = &args.input else {
        return Err(no_input_error());
    };

    let path = PathBuf::from(input);
    if looks_like_inline_json(input) {
        convert_source(JsonSource::Inline(input.clone()), args.output.as_deref(), args, config)
    } else if path.is_file() {
        let output = resolve_file_output(&path, args.output.as_deref());
        convert_source(JsonSource::File(path), output.as_deref(), args, config)
    } else if path.is_dir() {
        convert_directory(&path, args, config)
    } else {
        Err(missing_input_error(input))
    }
}

/// Treat arguments that look like JSON documents as inline input
fn looks_like_inline_json(input: &str) -> bool {
    let trimmed = input.trim();
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}

/// When `--output` names an existing directory, place the derived
/// `.csv` name inside it; otherwise use the given path as-is.
fn resolve_file_output(input_file: &Path, output: Option<&Path>) -> Option<PathBuf> {
    let output = output?;
    if output.is_dir() {
        let file_name = input_file.file_name().map(PathBuf::from).unwrap_or_default();
        Some(output.join(path_mapping::derive_csv_name(&file_name)))
    } else {
        Some(output.to_path_buf())
    }
}

fn convert_source(
    source: JsonSource,
    output: Option<&Path>,
    args: &CliArgs,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    if args.verbose {
        eprintln!("Converting {}", source.description());
    }

    let csv_data = csvconv::convert_json_from_source(&source, config)?;

    match output {
        Some(path) => {
            write_output(path, &csv_data.content)?;
            CliUtils::show_success(
                &format!(
                    "Converted to {} ({} rows, {} columns)",
                    path.display(),
                    csv_data.metadata.row_count,
                    csv_data.metadata.column_count
                ),
                args.quiet,
            );
            if let Some(rows) = args.preview {
                println!("{}", preview_of(&csv_data, rows));
            }
        }
        None => match args.preview {
            Some(rows) => println!("{}", preview_of(&csv_data, rows)),
            None => println!("{}", csv_data.content),
        },
    }

    if args.stats {
        output_statistics(&csv_data, args.quiet);
    }

    Ok(())
}

fn convert_directory(
    input_dir: &Path,
    args: &CliArgs,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    let output_dir = args.output.as_ref().ok_or_else(|| {
        ConversionError::conversion(ConversionErrorKind::configuration(
            "output directory required for directory conversion (-o)".to_string(),
        ))
    })?;

    let json_files = directory::find_json_files(input_dir, args.recursive)
        .map_err(|e| io_error(e, Some(input_dir.to_path_buf())))?;

    if json_files.is_empty() {
        CliUtils::show_warning(
            &format!("no JSON files found in {}", input_dir.display()),
            args.quiet,
        );
        return Ok(());
    }

    let progress = (!args.quiet && json_files.len() > 1)
        .then(|| CliUtils::create_progress_bar(json_files.len() as u64));

    let mut stats = ConversionStats::new();
    for json_file in &json_files {
        let output_file = path_mapping::map_input_to_output(input_dir, json_file, output_dir);

        let result = csvconv::convert_json_from_source(&JsonSource::File(json_file.clone()), config)
            .and_then(|csv_data| {
                write_output(&output_file, &csv_data.content)?;
                Ok(csv_data)
            });

        match result {
            Ok(csv_data) => {
                stats.record_success(&csv_data.metadata);
                if args.verbose {
                    eprintln!("✓ {} -> {}", json_file.display(), output_file.display());
                }
            }
            Err(e) => {
                stats.record_failure();
                CliUtils::show_error(&format!("{}: {}", json_file.display(), e.user_message()));
                if !args.continue_on_error {
                    if let Some(pb) = &progress {
                        pb.abandon();
                    }
                    return Err(e);
                }
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    CliUtils::show_success(
        &format!(
            "Converted {} of {} files into {}",
            stats.converted,
            stats.attempted(),
            output_dir.display()
        ),
        args.quiet,
    );

    if args.stats && !args.quiet {
        println!("\nBatch statistics: {}", stats.summary());
    }

    Ok(())
}

fn write_output(path: &Path, content: &str) -> ConversionResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error(e, Some(parent.to_path_buf())))?;
    }
    std::fs::write(path, content).map_err(|e| io_error(e, Some(path.to_path_buf())))
}

fn preview_of(csv_data: &CsvData, rows: usize) -> String {
    CliUtils::render_preview(&csv_data.content, rows, CliUtils::terminal_width())
}

fn output_statistics(csv_data: &CsvData, quiet: bool) {
    if quiet {
        return;
    }

    let metadata = &csv_data.metadata;
    println!("\nConversion statistics:");
    println!("Rows: {}", metadata.row_count);
    println!("Columns: {}", metadata.column_count);
    println!("Input size: {}", CliUtils::format_file_size(metadata.input_size));
    println!("Output size: {}", CliUtils::format_file_size(metadata.output_size));
    println!("Processing time: {}ms", metadata.processing_time_ms);
}

fn no_input_error() -> ConversionError {
    ConversionError::conversion(ConversionErrorKind::configuration(
        "no input provided; use --stdin or pass an input path".to_string(),
    ))
}

fn missing_input_error(input: &str) -> ConversionError {
    ConversionError::conversion(ConversionErrorKind::io(
        format!("input path does not exist: {}", input),
        Some(PathBuf::from(input)),
    ))
}

fn io_error(error: std::io::Error, path: Option<PathBuf>) -> ConversionError {
    ConversionError::conversion_with_source(
        ConversionErrorKind::io(error.to_string(), path),
        error.into(),
    )
}
