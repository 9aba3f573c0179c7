// SPDX-License-Identifier: MPL-2.0
use iced_status::app::{self, config, paths, Flags};
use iced_status::logging;
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_status [--images DIR] [--config-dir DIR]

Options:
  --images DIR       Directory holding the status images
  --config-dir DIR   Directory holding settings.toml
  -h, --help         Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let images_dir: Option<PathBuf> = args.opt_value_from_str("--images").unwrap_or_else(|e| {
        eprintln!("Invalid --images argument: {e}");
        None
    });
    let config_dir: Option<PathBuf> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|e| {
            eprintln!("Invalid --config-dir argument: {e}");
            None
        });
    for unused in args.finish() {
        eprintln!("Ignoring unexpected argument: {}", unused.to_string_lossy());
    }

    paths::init_cli_overrides(config_dir);
    let (config, config_warning) = config::load();

    let broadcaster = match logging::init(&config.logging) {
        Ok(broadcaster) => Some(broadcaster),
        Err(err) => {
            eprintln!("Logging disabled: {err}");
            None
        }
    };

    app::run(Flags {
        images_dir,
        config,
        config_warning,
        broadcaster,
    })
}
