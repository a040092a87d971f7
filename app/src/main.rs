use std::process::ExitCode;

use jnigen_lang_driver::render_reports_io;

mod cli;
mod global_settings;

use global_settings::GlobalSettings;

fn main() -> ExitCode {
    let settings = GlobalSettings::from_env();
    env_logger::Builder::new().filter_level(settings.log_level).init();

    match cli::exec(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(reports) => {
            let mut stderr = std::io::stderr();
            if render_reports_io(&mut stderr, &reports, settings.colorize).is_err() {
                log::error!("Failed to render {} error(s)", reports.len());
            }
            ExitCode::FAILURE
        }
    }
}
