use std::io::{self, Write};
use std::path::{Path, PathBuf};

use jnigen_lang_backend::{GeneratedUnit, GeneratorConfig};
use jnigen_lang_driver::{
    CONFIG_FILE, FileSource, FileSystemSource, Session, TARGET_PATH, load_config,
};
use jnigen_lang_printer::{PrintCfg, PrintExt, StandardStream, WriteColor};

use crate::global_settings::GlobalSettings;

use super::report;

#[derive(clap::Args)]
pub struct Args {
    /// Declaration files, each processed as one round
    #[clap(value_parser, value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
    /// Configuration file (defaults to `jnigen.toml` if present)
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Directory the generated sources are written to
    #[clap(long, value_name = "DIR", default_value = TARGET_PATH)]
    out_dir: PathBuf,
    /// Name table entries by a short digest of their descriptor
    #[clap(long)]
    hashed_naming: bool,
    /// Let wrappers hand out their test instance
    #[clap(long)]
    testing: bool,
    /// Print the generated sources instead of writing them
    #[clap(long)]
    dry_run: bool,
}

pub fn exec(cmd: Args, settings: &GlobalSettings) -> Result<(), Vec<miette::Report>> {
    let mut source = FileSystemSource::new(".");

    let mut config = match &cmd.config {
        Some(path) => load_config(&mut source, path).map_err(report)?,
        None if source.exists(Path::new(CONFIG_FILE)) => {
            load_config(&mut source, Path::new(CONFIG_FILE)).map_err(report)?
        }
        None => GeneratorConfig::default(),
    };
    config.hashed_naming |= cmd.hashed_naming;
    config.testing_enabled |= cmd.testing;
    log::debug!("Using {config:?}");

    let mut session = Session::new(&mut source, config).map_err(report)?;
    for file in &cmd.files {
        session.process_file(file).map_err(report)?;
    }

    let out_dir = if cmd.dry_run { None } else { Some(cmd.out_dir.as_path()) };
    let output = session.finish(out_dir).map_err(report)?;

    if let (true, Some(unit)) = (cmd.dry_run, &output.unit) {
        let mut stream = StandardStream::stdout(settings.colorize);
        print_unit(unit, &mut stream).map_err(|err| vec![miette::Report::msg(err)])?;
    }

    if output.has_errors() {
        return Err(output.reports());
    }
    Ok(())
}

fn print_unit<W: WriteColor>(unit: &GeneratedUnit, out: &mut W) -> io::Result<()> {
    let cfg = PrintCfg::default();
    writeln!(out, "// {}", unit.table.relative_path().display())?;
    unit.table.print_colored(&cfg, out)?;
    for wrapper in &unit.wrappers {
        writeln!(out, "// {}", wrapper.relative_path().display())?;
        wrapper.print_colored(&cfg, out)?;
    }
    Ok(())
}
