// SPDX-License-Identifier: MPL-2.0
use iced_login::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedLogin

USAGE:
  iced_login [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          UI language (e.g. en-US, fr)
  --stylesheet <FILE>      Stylesheet file, overrides the configured one
  --resource-dir <DIR>     Directory holding the stylesheet and logo
  --config-dir <DIR>       Directory holding settings.toml

ENVIRONMENT:
  ICED_LOGIN_RESOURCE_DIR  Resource directory (overridden by --resource-dir)
  ICED_LOGIN_CONFIG_DIR    Config directory (overridden by --config-dir)
  RUST_LOG                 Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        stylesheet: opt_string(&mut args, "--stylesheet"),
        resource_dir: opt_string(&mut args, "--resource-dir"),
        config_dir: opt_string(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone(), flags.resource_dir.clone());

    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%key, error = %err, "invalid command-line value");
        None
    })
}
