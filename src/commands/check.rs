use std::path::Path;

use anyhow::{Context, Result};
use dddc::application::ModelCompiler;

/// Package and module only qualify enum imports; any value validates the model.
const CHECK_PACKAGE: &str = "com.example";
const CHECK_MODULE: &str = "app";

pub fn cmd_check(file: &Path, config: Option<&Path>) -> Result<()> {
    let config = super::load_config(config)?;
    let model = ModelCompiler::new(CHECK_PACKAGE, CHECK_MODULE)
        .with_config(config)
        .compile_file(file)
        .with_context(|| format!("checking {}", file.display()))?;

    for warning in &model.warnings {
        eprintln!("warning: {}", warning);
    }

    let entities: usize = model
        .aggregates
        .iter()
        .map(|a| a.secondary_entities.len() + 1)
        .sum();
    let methods: usize = model
        .aggregates
        .iter()
        .map(|a| a.aggregate_methods.len())
        .sum();

    println!(
        "{}: {} aggregate(s), {} entit{}, {} enum(s), {} root method(s), {} warning(s)",
        file.display(),
        model.aggregates.len(),
        entities,
        if entities == 1 { "y" } else { "ies" },
        model.enums.len(),
        methods,
        model.warnings.len()
    );
    Ok(())
}
