use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use dddc::application::ModelCompiler;

use crate::cli::OutputFormat;

pub fn cmd_compile(
    file: &Path,
    package: &str,
    module: &str,
    format: OutputFormat,
    config: Option<&Path>,
) -> Result<()> {
    let config = super::load_config(config)?;
    let model = ModelCompiler::new(package, module)
        .with_config(config)
        .compile_file(file)
        .with_context(|| format!("compiling {}", file.display()))?;

    for warning in &model.warnings {
        eprintln!("warning: {}", warning);
    }

    let context = model.context();
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&context)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(&context)?,
    };

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}
