// SPDX-License-Identifier: MPL-2.0
use committee_gallery::app::{self, paths, Flags};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::path::PathBuf;

const HELP: &str = "\
Committee Gallery

USAGE:
  committee_gallery [OPTIONS]

OPTIONS:
  --lang <ID>          Interface language (e.g. en-US, fr)
  --catalog <PATH>     Catalog file to show instead of the built-in one
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("committee_gallery", LevelFilter::Info)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog_path: args.opt_value_from_str::<_, PathBuf>("--catalog")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", rest);
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_logger();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
