use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::auth::GitHubContext;
use crate::commands::auth::AuthCommands;
use crate::commands::dispatch::{self, DispatchArgs};
use crate::commands::resolve::ResolveArgs;
use crate::shared::config;

#[derive(Parser)]
#[command(
    name = "gh-dispatch",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Credentials file to read and update (default: ~/.netrc)
    #[arg(long, global = true, value_name = "PATH")]
    pub netrc: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq, Debug)]
pub enum Commands {
    /// Send a repository_dispatch event
    Dispatch(DispatchArgs),

    /// Print the GitHub repository the current branch tracks
    Resolve(ResolveArgs),

    /// Credential management
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Dispatch(args) => dispatch::run(args, &self.context()?).await,
            Commands::Resolve(args) => args.run(),
            Commands::Auth(cmd) => cmd.run(&self.context()?).await,
            Commands::Completions { shell } => {
                clap_complete::generate(
                    *shell,
                    &mut Cli::command(),
                    "gh-dispatch",
                    &mut std::io::stdout(),
                );
                Ok(())
            }
        }
    }

    fn context(&self) -> anyhow::Result<GitHubContext> {
        let config = config::load_config()?;
        Ok(GitHubContext::from_config(&config, self.netrc.clone()))
    }
}
