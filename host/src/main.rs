// Checks and formats the RUTs given on the command line.
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use host::services::currency::ClpFormatter;
use host::HostSettings;
use shared::Rut;
use tracing::{info, warn};

fn load_settings() -> anyhow::Result<HostSettings> {
    match env::var_os("TEKNE_CONFIG") {
        Some(path) => HostSettings::load_from_path(&PathBuf::from(path)),
        None => Ok(HostSettings::load_default()?),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt::init();

    let settings = load_settings()?;
    // Fail early on settings the helpers cannot honor.
    ClpFormatter::from_settings(&settings)?;
    info!("Loaded settings for locale {}", settings.locale);

    let mut all_valid = true;
    for arg in env::args().skip(1) {
        match Rut::parse(arg.as_str()) {
            Some(rut) if rut.is_valid() => println!("{}\tválido", rut),
            Some(rut) => {
                all_valid = false;
                println!("{}\tinválido", rut);
            }
            None => {
                all_valid = false;
                warn!("Ignoring {:?}: too short to be a RUT", arg);
                println!("{}\tinválido", shared::rut::format(arg.as_str()));
            }
        }
    }

    Ok(if all_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
