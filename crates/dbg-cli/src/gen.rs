use anyhow::{Context, Result};
use dbg_codegen::Config;

use std::fs;
use std::path::Path;

/// Compile `input` and write the generated code to `output`.
///
/// Every stage runs before the output is touched, so a failure leaves any
/// existing output file as it was.
pub fn exec(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
    format: bool,
) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let schema = dbg_core::schema::from_file(input).map_err(|err| stage_error(err, input))?;
    let codegen_output =
        dbg_codegen::generate(&schema, config).map_err(|err| stage_error(err, input))?;

    let mut source = codegen_output.render();

    if format {
        source = rustfmt(source)
            .context("failed to format the generated code (pass --no-format to skip)")?;
    }

    tracing::info!("  {:>10}    {}", "writing", output.display());
    fs::write(output, source)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(())
}

fn stage_error(err: dbg_core::Error, input: &Path) -> anyhow::Error {
    let stage = err.stage();
    anyhow::Error::new(err).context(format!("{stage} failed for {}", input.display()))
}

fn rustfmt(source: String) -> Result<String> {
    use std::io;
    use std::io::prelude::*;
    use std::process::{Command, Stdio};

    let mut child = Command::new("rustfmt")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .args(["--emit", "stdout", "--edition", "2021"])
        .spawn()
        .context("failed to spawn `rustfmt`")?;
    let mut child_stdin = child.stdin.take().context("`rustfmt` stdin unavailable")?;
    let mut child_stdout = child.stdout.take().context("`rustfmt` stdout unavailable")?;

    // Spawn a thread to write to stdin
    let th = std::thread::spawn(move || child_stdin.write_all(source.as_bytes()));

    let mut fmted = vec![];
    io::copy(&mut child_stdout, &mut fmted)?;

    let status = child.wait()?;

    match th.join() {
        Ok(result) => result.context("failed to feed `rustfmt`")?,
        Err(_) => anyhow::bail!("thread feeding `rustfmt` panicked"),
    }

    match status.code() {
        Some(0) => {}
        Some(2) => anyhow::bail!("rustfmt parsing errors"),
        Some(3) => anyhow::bail!("rustfmt failed to format"),
        _ => anyhow::bail!("rustfmt exited with {status}"),
    }

    Ok(String::from_utf8(fmted)?)
}
