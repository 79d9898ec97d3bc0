// SPDX-License-Identifier: MPL-2.0
use object_locator::app::{self, paths, Flags};

const HELP: &str = "\
Object Locator

USAGE:
  object_locator [OPTIONS]

OPTIONS:
  --lang <CODE>          UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --examples-dir <DIR>   Directory scanned for example images
  -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        examples_dir: args.opt_value_from_str("--examples-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments: {:?}", remaining);
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{}", HELP);
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {}\n\n{}", err, HELP);
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
