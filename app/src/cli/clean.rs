use std::fs;
use std::path::PathBuf;

use jnigen_lang_driver::TARGET_PATH;

#[derive(clap::Args)]
pub struct Args {
    /// Directory the generated sources were written to
    #[clap(long, value_name = "DIR", default_value = TARGET_PATH)]
    out_dir: PathBuf,
}

pub fn exec(cmd: Args) -> Result<(), Vec<miette::Report>> {
    if cmd.out_dir.exists() {
        fs::remove_dir_all(&cmd.out_dir).map_err(|err| vec![miette::Report::msg(err)])?;
        log::info!("Removed {}", cmd.out_dir.display());
    }
    Ok(())
}
