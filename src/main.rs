use encore::config::{self, Cli, HELP, Settings};

fn main() -> encore::Result<()> {
    let cli = Cli::from_env()?;
    if cli.help {
        print!("{HELP}");
        return Ok(());
    }

    encore::init_logging(cli.log.as_deref());

    let file = config::load(cli.config.as_deref()).inspect_err(|e| {
        tracing::error!("{e}");
    })?;

    encore::run(Settings::resolve(&cli, file)).inspect_err(|e| {
        tracing::error!("{e}");
    })
}
