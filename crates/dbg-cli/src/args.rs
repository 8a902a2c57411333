use anyhow::{bail, Result};
use clap::Parser;
use dbg_codegen::Import;

use std::path::PathBuf;

/// Compile a dbglang schema into Rust source
#[derive(Parser, Debug)]
#[command(name = "dbgc")]
#[command(version, about)]
pub struct Cli {
    /// Schema document to compile
    pub input: PathBuf,

    /// File the generated code is written to
    pub output: PathBuf,

    /// Configuration lines, then `import NAME from MODULE` clauses
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub trailing: Vec<String>,

    /// Path of the runtime crate used by the generated code
    #[arg(long, default_value = dbg_codegen::DEFAULT_RUNTIME)]
    pub runtime: String,

    /// Write the generated code without running rustfmt
    #[arg(long)]
    pub no_format: bool,
}

/// Split the trailing arguments at the first `import` word.
///
/// Everything before it is a configuration line. Everything after is read as
/// whitespace separated words forming `NAME from MODULE` clauses; further
/// `import` words are optional, so `import Sex from models Role from models`
/// and `import "Sex from models" "Role from models"` are equivalent.
pub(crate) fn split_trailing(trailing: &[String]) -> Result<(Vec<String>, Vec<Import>)> {
    let Some(idx) = trailing.iter().position(|arg| arg.trim() == "import") else {
        return Ok((trailing.to_vec(), vec![]));
    };

    let lines = trailing[..idx].to_vec();
    let mut words = trailing[idx + 1..]
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .filter(|word| *word != "import");

    let mut imports = vec![];

    while let Some(name) = words.next() {
        let (Some("from"), Some(module)) = (words.next(), words.next()) else {
            bail!("invalid import clause starting at `{name}`: expected `NAME from MODULE`");
        };

        imports.push(Import {
            name: name.to_string(),
            module: module.to_string(),
        });
    }

    if imports.is_empty() {
        bail!("`import` must be followed by at least one `NAME from MODULE` clause");
    }

    Ok((lines, imports))
}
