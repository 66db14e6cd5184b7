use crate::args::Args;
use crate::tree::Mode;
use anyhow::{Context, Error};
use log::{debug, info};
use serde_json::Value;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;
use structopt::StructOpt;

mod args;
mod fetch;
mod format;
mod tree;

const TOKEN_VAR: &str = "FIGMA_TOKEN";

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::from_args();

    let token = match env::var(TOKEN_VAR) {
        Ok(token) if !token.is_empty() => token,
        _ => {
            eprintln!("{} not set", TOKEN_VAR);
            process::exit(1);
        }
    };

    let document = fetch::get(&args.api_base, &args.file_key, &token)
        .with_context(|| format!("error fetching file `{}`", args.file_key))?;

    if let Some(path) = &args.write_json {
        write_json(path, &document)
            .with_context(|| format!("error writing {}", path.display()))?;
    }

    let mode = if args.deep { Mode::Deep } else { Mode::Shallow };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = tree::print(&document, mode, &mut out).context("error writing output")?;
    out.flush().context("error writing output")?;
    info!("printed {} lines", count);

    Ok(())
}

fn write_json(path: &Path, document: &Value) -> Result<(), Error> {
    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut file, document)?;
    file.flush()?;
    debug!("wrote raw document to {}", path.display());

    Ok(())
}
