// SPDX-License-Identifier: MPL-2.0
use hazard_watch::app::{self, Flags};
use hazard_watch::{config, logging};
use std::path::PathBuf;

const HELP: &str = "\
hazard_watch

USAGE:
  hazard_watch [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
  --log-level <LEVEL>  Log level (error, warn, info, debug, trace)
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (config_dir, log_level) = match parse_options(&mut args) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let (mut config, config_warning) = config::load_with_override(config_dir);
    if log_level.is_some() {
        config.logging.level = log_level;
    }

    if let Err(err) = logging::init(&config.logging) {
        eprintln!("warning: {err}");
    }
    if let Some(warning) = &config_warning {
        tracing::warn!(%warning, "using default settings");
    }

    app::run(Flags {
        config,
        config_warning,
    })
}

fn parse_options(
    args: &mut pico_args::Arguments,
) -> Result<(Option<PathBuf>, Option<String>), pico_args::Error> {
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let log_level = args.opt_value_from_str("--log-level")?;
    Ok((config_dir, log_level))
}
