// SPDX-License-Identifier: MPL-2.0
use nytaarstale::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: nytaarstale [OPTIONS] [LOCATION]

Arguments:
  [LOCATION]             Page URL to open, e.g. https://nytaarstale.dk/?year=2022

Options:
  --lang <CODE>          Interface language (da, en-US)
  --assets-url <URL>     Base URL of the speech archive
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let assets_url = args.opt_value_from_str("--assets-url")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let location = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        assets_url,
        location,
        config_dir,
    })
}
