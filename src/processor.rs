//! File processing: CLI options, JSON reading and writing, batch driving.
//!
//! Everything outside the pure calculation lives here. A single file is
//! read, split, and written; a directory is walked entry by entry with
//! per-file failures logged and skipped, so one bad bill cannot block the
//! rest of a batch.

use crate::bill::{BillInput, BillOutput, BillRecord};
use crate::error::{Result, SplitError};
use crate::report::render_text;
use crate::splitter::split_bill;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Output serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON (the default).
    #[default]
    Json,

    /// Multi-line text report.
    Text,
}

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Input bill file, or a directory of bills.
    pub input: PathBuf,

    /// Output file, or a directory when the input is one.
    pub output: PathBuf,

    /// Output serialization format.
    pub format: OutputFormat,
}

impl Options {
    /// Parses `--input=`, `--output=`, and `--format=` arguments.
    ///
    /// Arguments may appear in any order; unrecognized ones are ignored.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut input = None;
        let mut output = None;
        let mut format = OutputFormat::default();

        for arg in args {
            let arg = arg.as_ref();
            if let Some(path) = arg.strip_prefix("--input=") {
                input = Some(PathBuf::from(path));
            } else if let Some(path) = arg.strip_prefix("--output=") {
                output = Some(PathBuf::from(path));
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = match value {
                    "json" => OutputFormat::Json,
                    "text" => OutputFormat::Text,
                    other => return Err(SplitError::InvalidFormat(other.to_string())),
                };
            }
        }

        match (input, output) {
            (Some(input), Some(output)) => Ok(Options {
                input,
                output,
                format,
            }),
            _ => Err(SplitError::MissingArgument),
        }
    }
}

/// Runs the splitter over the configured input.
///
/// A directory input switches to batch mode; anything else is treated as
/// a single bill file.
pub fn run(options: &Options) -> Result<()> {
    if options.input.is_dir() {
        process_directory(&options.input, &options.output, options.format)
    } else {
        process_file(&options.input, &options.output, options.format)
    }
}

/// Reads and validates a bill file.
pub fn read_bill(path: &Path) -> Result<BillInput> {
    if !path.exists() {
        return Err(SplitError::InputNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Err(SplitError::EmptyInput(path.to_path_buf()));
    }

    let record: BillRecord = serde_json::from_str(&text)?;
    record.parse()
}

/// Writes a settlement to `path` in the requested format.
pub fn write_output(path: &Path, output: &BillOutput, format: OutputFormat) -> Result<()> {
    let contents = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(output)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => render_text(output),
    };

    fs::write(path, contents)?;
    Ok(())
}

/// Processes one bill file end to end.
fn process_file(input: &Path, output: &Path, format: OutputFormat) -> Result<()> {
    let bill = read_bill(input)?;
    let settlement = split_bill(&bill)?;
    write_output(output, &settlement, format)?;
    debug!("{} -> {}", input.display(), output.display());
    Ok(())
}

/// Processes every `.json` file in `input_dir`, writing results under the
/// same filename in `output_dir`.
///
/// Entries are visited in sorted filename order. Non-JSON files are
/// skipped; a failing bill is logged and does not abort the remaining
/// files.
fn process_directory(input_dir: &Path, output_dir: &Path, format: OutputFormat) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let mut paths: Vec<PathBuf> = fs::read_dir(input_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    for path in paths {
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            debug!("Skipping non-JSON file {}", path.display());
            continue;
        }

        let file_name = match path.file_name() {
            Some(name) => name,
            None => continue,
        };
        let out_path = output_dir.join(file_name);

        if let Err(e) = process_file(&path, &out_path, format) {
            warn!("{}: {}", path.display(), e);
        }
    }

    Ok(())
}
