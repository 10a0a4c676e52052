//! Add command handler.

use anyhow::Result;
use mcpswitch_core::{CreateServerInput, ServerConfiguration};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::sync;
use crate::utils::pairs::parse_pairs;

/// Arguments for the add command.
#[derive(Debug, Default)]
pub struct AddArgs {
    pub name: String,
    pub command: Option<String>,
    pub args: Vec<String>,
    pub env: Vec<String>,
    pub url: Option<String>,
    pub headers: Vec<String>,
    pub description: Option<String>,
    pub enable: bool,
}

impl AddArgs {
    /// Build the configuration from whichever target was given.
    pub fn configuration(&self) -> Result<ServerConfiguration, CliError> {
        match (&self.command, &self.url) {
            (Some(_), None) if !self.headers.is_empty() => Err(CliError::Arguments(
                "--headers only applies to --url servers".to_string(),
            )),
            (None, Some(_)) if !self.args.is_empty() || !self.env.is_empty() => {
                Err(CliError::Arguments(
                    "--args and --env only apply to --command servers".to_string(),
                ))
            }
            (Some(command), None) => {
                let env = parse_pairs(&self.env, "--env")?;
                Ok(ServerConfiguration::command(
                    command.clone(),
                    self.args.clone(),
                    env,
                )?)
            }
            (None, Some(url)) => {
                let headers = parse_pairs(&self.headers, "--headers")?;
                Ok(ServerConfiguration::url(url.clone(), headers)?)
            }
            _ => Err(CliError::Arguments(
                "exactly one of --command or --url is required".to_string(),
            )),
        }
    }
}

/// Execute the add command.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let configuration = args.configuration()?;
    let description = args
        .description
        .clone()
        .filter(|d| !d.trim().is_empty());

    let input = CreateServerInput::new(args.name.clone(), configuration)
        .enabled(args.enable)
        .description(description);
    let server = ctx.app().servers().create(input).await?;

    println!(
        "Added {} server '{}' ({})",
        server.configuration().type_name(),
        server.name(),
        server.id()
    );
    if server.is_enabled() {
        let artifact = ctx.config().artifact_path.display();
        if sync::artifact_lists(ctx, server.name()).await {
            println!("Enabled and synced to {artifact}");
        } else {
            println!("Enabled, but {artifact} was not updated; run 'mcpswitch sync'");
        }
    } else {
        println!("Run 'mcpswitch enable {}' to activate it", server.name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_configuration() {
        let args = AddArgs {
            name: "files".into(),
            command: Some("npx".into()),
            args: vec!["-y".into(), "pkg".into()],
            env: vec!["ROOT=/tmp".into()],
            ..AddArgs::default()
        };
        let ServerConfiguration::Command { command, args, env } = args.configuration().unwrap()
        else {
            panic!("expected command configuration");
        };
        assert_eq!(command, "npx");
        assert_eq!(args, ["-y", "pkg"]);
        assert_eq!(env["ROOT"], "/tmp");
    }

    #[test]
    fn test_url_configuration() {
        let args = AddArgs {
            name: "remote".into(),
            url: Some("https://mcp.example.com".into()),
            headers: vec!["Authorization=Bearer x".into()],
            ..AddArgs::default()
        };
        let config = args.configuration().unwrap();
        assert_eq!(config.type_name(), "url");
    }

    #[test]
    fn test_invalid_url_is_argument_error() {
        let args = AddArgs {
            name: "remote".into(),
            url: Some("ftp://mcp.example.com".into()),
            ..AddArgs::default()
        };
        assert_eq!(args.configuration().unwrap_err().exit_code(), 2);
    }

    #[test]
    fn test_flags_for_the_other_kind_are_rejected() {
        let url_with_args = AddArgs {
            name: "remote".into(),
            url: Some("https://mcp.example.com".into()),
            args: vec!["a".into()],
            ..AddArgs::default()
        };
        assert_eq!(url_with_args.configuration().unwrap_err().exit_code(), 2);

        let url_with_env = AddArgs {
            name: "remote".into(),
            url: Some("https://mcp.example.com".into()),
            env: vec!["A=1".into()],
            ..AddArgs::default()
        };
        assert!(url_with_env.configuration().is_err());

        let command_with_headers = AddArgs {
            name: "files".into(),
            command: Some("npx".into()),
            headers: vec!["X=1".into()],
            ..AddArgs::default()
        };
        assert_eq!(command_with_headers.configuration().unwrap_err().exit_code(), 2);
    }

    #[test]
    fn test_missing_target() {
        let args = AddArgs {
            name: "x".into(),
            ..AddArgs::default()
        };
        assert!(args.configuration().is_err());
    }
}
