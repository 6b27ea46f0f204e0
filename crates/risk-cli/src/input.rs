use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read response text from `file`, or from stdin when it is absent or `-`.
pub fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read response text from stdin")?;
            Ok(text)
        }
    }
}
