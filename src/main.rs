// SPDX-License-Identifier: MPL-2.0
//! Binary entry point. Parses command line flags and hands off to the
//! application loop in [`beteseb::app`].

use beteseb::app::{self, paths, Flags};

const USAGE: &str = "\
Usage: beteseb [OPTIONS]

Options:
  --lang <LOCALE>       Override the interface language (e.g. en-US, am)
  --config-dir <PATH>   Read and write the config file under PATH
  -h, --help            Print this help text
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let lang = match args.opt_value_from_str("--lang") {
        Ok(value) => value,
        Err(error) => exit_with_usage(&error),
    };
    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(error) => exit_with_usage(&error),
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        eprintln!("unexpected arguments: {leftover:?}");
        eprint!("{USAGE}");
        std::process::exit(2);
    }

    let flags = Flags { lang, config_dir };
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}

fn exit_with_usage(error: &pico_args::Error) -> ! {
    eprintln!("{error}");
    eprint!("{USAGE}");
    std::process::exit(2);
}
