//! GitHub API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("{}", describe(.0))]
    ApiError(#[from] octocrab::Error),
}

impl GitHubError {
    /// HTTP status of the failed request, when GitHub answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError(octocrab::Error::GitHub { source, .. }) => {
                Some(source.status_code.as_u16())
            }
            Self::ApiError(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;

fn describe(err: &octocrab::Error) -> String {
    let octocrab::Error::GitHub { source, .. } = err else {
        return format!("GitHub API error: {err}");
    };
    let status = source.status_code.as_u16();
    let mut msg = format!("GitHub API error: {} (HTTP {status})", source.message);
    if let Some(errors) = &source.errors {
        msg.push_str(&field_errors(errors));
    }
    if let Some(hint) = status_hint(status) {
        msg.push_str("; ");
        msg.push_str(hint);
    }
    msg
}

fn status_hint(status: u16) -> Option<&'static str> {
    match status {
        401 => Some("the token was rejected"),
        403 => Some("the token lacks permission for this repository"),
        // GitHub answers 404 instead of 403 for private repositories.
        404 => Some("repository not found or not visible to this token"),
        422 => Some("GitHub rejected the event"),
        _ => None,
    }
}

/// Renders the `errors` array as ` [field is code, ...]`, or nothing.
fn field_errors(errors: &[serde_json::Value]) -> String {
    let parts: Vec<String> = errors
        .iter()
        .filter_map(|e| {
            let field = e.get("field").and_then(|v| v.as_str());
            let code = e.get("code").and_then(|v| v.as_str());
            match (field, code) {
                (Some(f), Some(c)) => Some(format!("{f} is {c}")),
                (Some(f), None) => Some(f.to_string()),
                (None, Some(c)) => Some(c.to_string()),
                (None, None) => None,
            }
        })
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" [{}]", parts.join(", "))
    }
}
