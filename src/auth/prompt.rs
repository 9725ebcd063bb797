//! Interactive credential entry.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use super::GITHUB_HOST;
use super::error::{AuthError, Result};
use crate::infra::github::validate_token;
use crate::infra::netrc::NetrcStore;

/// A username/token pair typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

/// Source of interactive answers.
pub trait Prompter: Send + Sync {
    /// Ask for a username and token. `attempt` counts from 1.
    fn credentials(&self, attempt: u32, max_attempts: u32) -> io::Result<Credentials>;

    /// Ask a yes/no question; anything but yes is no.
    fn confirm(&self, question: &str) -> io::Result<bool>;
}

/// Prompts on stderr and reads answers from stdin, keeping stdout free
/// for command output.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn credentials(&self, attempt: u32, max_attempts: u32) -> io::Result<Credentials> {
        let mut input = io::stdin().lock();
        let mut output = io::stderr().lock();
        writeln!(
            output,
            "GitHub login required (attempt {attempt} of {max_attempts})"
        )?;
        let username = ask(&mut input, &mut output, "Username: ")?;
        let token = ask(&mut input, &mut output, "Personal access token: ")?;
        Ok(Credentials { username, token })
    }

    fn confirm(&self, question: &str) -> io::Result<bool> {
        let mut input = io::stdin().lock();
        let mut output = io::stderr().lock();
        let answer = ask(&mut input, &mut output, &format!("{question} [y/N] "))?;
        Ok(is_yes(&answer))
    }
}

/// Print `label` and read one trimmed line. End of input reads as empty.
fn ask(input: &mut impl BufRead, output: &mut impl Write, label: &str) -> io::Result<String> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Bounded interactive login: ask, validate, offer to save.
pub struct CredentialPrompt<'a> {
    pub prompter: &'a dyn Prompter,
    pub store: &'a NetrcStore,
    pub api_url: &'a str,
    pub max_attempts: u32,
}

impl CredentialPrompt<'_> {
    /// Ask until a token validates or `max_attempts` attempts have failed.
    ///
    /// The credentials file is only written after a successful validation
    /// and an explicit yes from the user.
    pub async fn run(&self) -> Result<String> {
        for attempt in 1..=self.max_attempts {
            let Credentials { username, token } = self
                .prompter
                .credentials(attempt, self.max_attempts)
                .map_err(AuthError::Prompt)?;

            if username.is_empty() || token.is_empty() {
                warn!("Both a username and a token are required");
                continue;
            }

            if !validate_token(self.api_url, &token).await {
                continue;
            }

            self.offer_to_save(&username, &token)?;
            return Ok(token);
        }

        Err(AuthError::TooManyAttempts {
            attempts: self.max_attempts,
        })
    }

    fn offer_to_save(&self, username: &str, token: &str) -> Result<()> {
        let Some(path) = self.store.path() else {
            return Ok(());
        };

        let question = format!("Save credentials for {GITHUB_HOST} to {}?", path.display());
        if !self.prompter.confirm(&question).map_err(AuthError::Prompt)? {
            return Ok(());
        }

        // A validated token is returned even when it could not be saved.
        match self.store.save_credentials(GITHUB_HOST, username, token) {
            Ok(()) => info!(path = %path.display(), "saved GitHub credentials"),
            Err(e) => warn!("Could not save credentials: {e}"),
        }
        Ok(())
    }
}
