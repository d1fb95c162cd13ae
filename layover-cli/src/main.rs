//! Entry point for the `layover` command-line interface.
#![forbid(unsafe_code)]

fn main() -> eyre::Result<()> {
    layover_cli::run()?;
    Ok(())
}
