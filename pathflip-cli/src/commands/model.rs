use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use pathflip::solver::ModelReader;
use serde::Serialize;

use crate::{app::GlobalOptions, output::print_output};

#[derive(Debug, Serialize)]
struct ModelOutput {
    file: String,
    lines_read: usize,
    models: Vec<Vec<String>>,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let file = File::open(path)
        .with_context(|| format!("failed to open solver output: {}", path.display()))?;
    let mut reader = ModelReader::new(BufReader::new(file));

    let mut models = Vec::new();
    while let Some(model) = reader
        .next_model()
        .with_context(|| format!("malformed solver output: {}", path.display()))?
    {
        models.push(model);
    }

    if models.is_empty() {
        log::warn!("no model block found in {}", path.display());
    }

    let output = ModelOutput {
        file: path.display().to_string(),
        lines_read: reader.lines_read(),
        models,
    };

    print_output(&output, opts, |out| {
        for (i, model) in out.models.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("Model {} ({} lines)", i + 1, model.len());
            for line in model {
                println!("  {line}");
            }
        }
    })
}
