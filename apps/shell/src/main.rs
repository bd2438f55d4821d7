use anyhow::{Context, bail};
use clap::Parser;
use setorial::domain::config::AppConfig;
use setorial::kernel::config::load_config;
use setorial_shell::{Cli, Report, init_logger, register};

#[setorial_runtime::main(event_loop)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: AppConfig = load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = init_logger(&cfg.logging)?;

    let platform = setorial::init(&cfg)?;

    match register(platform.registration()?, cli.draft()).await? {
        Report::Registered(_) => Ok(()),
        Report::Invalid(errors) => bail!("{} field(s) failed validation", errors.len()),
    }
}
