use anyhow::Result;
use m2r_engine::{Options, convert_file, io as engine_io};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// How a batch run treats its inputs and outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    /// Print converted text instead of writing `.rst` files.
    pub dry_run: bool,
    /// Replace existing `.rst` files without asking.
    pub overwrite: bool,
    /// Stop at the first file that fails.
    pub strict: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    Written(PathBuf),
    /// The user declined to overwrite this target.
    Skipped(PathBuf),
}

/// Asks whether `target` may be replaced. Only `y` or `yes` agrees.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    target: &Path,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<bool> {
    write!(
        output,
        "{} already exists. overwrite it? [y|n]: ",
        target.display()
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

pub fn convert_one<R: BufRead, W: Write>(
    path: &Path,
    options: &Options,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    let rst = convert_file(path, options)?;
    if settings.dry_run {
        writeln!(output, "{rst}")?;
        return Ok(Outcome::Printed);
    }

    let target = engine_io::output_path(path);
    if target.exists() && !settings.overwrite && !confirm_overwrite(&target, input, output)? {
        return Ok(Outcome::Skipped(target));
    }
    engine_io::write_file(&target, &rst)?;
    Ok(Outcome::Written(target))
}

/// Converts every path in order and returns the number of failures.
pub fn run<R: BufRead, W: Write>(
    paths: &[PathBuf],
    options: &Options,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> usize {
    let mut failures = 0;
    for path in paths {
        match convert_one(path, options, settings, input, output) {
            Ok(Outcome::Printed) => {}
            Ok(Outcome::Written(target)) => log::info!("wrote {}", target.display()),
            Ok(Outcome::Skipped(target)) => log::info!("skipped {}", target.display()),
            Err(e) => {
                failures += 1;
                eprintln!("Error: {}: {e:#}", path.display());
                if settings.strict {
                    log::warn!("stopping after first failure");
                    break;
                }
            }
        }
    }
    failures
}
