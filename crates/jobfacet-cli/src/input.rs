use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Reads the whole input from `path`, or from stdin when no path is given
/// or the path is `-`.
pub(crate) fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Values given on the command line, or one per non-empty stdin line when
/// none were given.
pub(crate) fn values_or_stdin(values: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }
    Ok(read_input(None)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Pretty-prints `value` as JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
