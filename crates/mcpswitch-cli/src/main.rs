//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `AppCore`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mcpswitch_cli::handlers::{self, add::AddArgs, import::ImportOptions};
use mcpswitch_cli::{Cli, CliConfig, CliError, Commands, bootstrap};

#[tokio::main]
async fn main() {
    // Load .env before anything reads MCPSWITCH_* variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let cli_err = CliError::from_anyhow(&err);
        tracing::debug!(error = ?err, "Command failed");
        eprintln!("{}", CliError::render(&err));
        if let Some(hint) = cli_err.suggestion() {
            eprintln!("  {hint}");
        }
        std::process::exit(cli_err.exit_code());
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::resolve(cli.db, cli.artifact)?;

    // Does not need the database
    if matches!(command, Commands::Paths) {
        return handlers::paths::execute(&config.app);
    }

    let ctx = bootstrap(config).await?;

    match command {
        Commands::List {
            enabled_only,
            detailed,
        } => handlers::list::execute(&ctx, enabled_only, detailed).await,
        Commands::Enable { server } => handlers::toggle::execute_set(&ctx, &server, true).await,
        Commands::Disable { server } => handlers::toggle::execute_set(&ctx, &server, false).await,
        Commands::Toggle { server } => handlers::toggle::execute_toggle(&ctx, &server).await,
        Commands::Add {
            name,
            command,
            args,
            env,
            url,
            headers,
            description,
            enable,
        } => {
            let args = AddArgs {
                name,
                command,
                args,
                env,
                url,
                headers,
                description,
                enable,
            };
            handlers::add::execute(&ctx, args).await
        }
        Commands::Remove { server, force } => handlers::remove::execute(&ctx, &server, force).await,
        Commands::Export {
            output,
            with_metadata,
        } => handlers::export::execute(&ctx, output.as_deref(), with_metadata).await,
        Commands::Status => handlers::status::execute(&ctx).await,
        Commands::Import {
            file,
            skip_existing,
            enable_all,
            auto,
            sync,
        } => match file {
            Some(file) if !auto => {
                let options = ImportOptions {
                    skip_existing,
                    enable_all,
                    sync_after: sync,
                };
                handlers::import::execute(&ctx, &file, options).await
            }
            _ => handlers::import::execute_auto(&ctx, sync).await,
        },
        Commands::Sync => handlers::sync::execute(&ctx).await,
        Commands::Watch { interval } => handlers::watch::execute(&ctx, interval).await,
        Commands::Paths => handlers::paths::execute(ctx.config()),
    }
}
