use std::path::PathBuf;

/// Returns the user's home directory from the HOME environment variable.
pub fn home_dir() -> Option<PathBuf> {
    non_empty_env("HOME").map(PathBuf::from)
}

/// Returns the XDG config directory (~/.config or $XDG_CONFIG_HOME).
/// Empty values are treated as unset per XDG Base Directory Specification.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(xdg) = non_empty_env("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    home_dir().map(|home| home.join(".config"))
}

/// Default credentials file: `~/.netrc`.
pub fn netrc_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".netrc"))
}

/// Expand a leading `~/` against the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Returns the value of an environment variable, treating empty strings as unset.
fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn home_dir_returns_home_env() {
        temp_env::with_vars([("HOME", Some("/test/home"))], || {
            assert_eq!(home_dir(), Some(PathBuf::from("/test/home")));
        });
    }

    #[test]
    fn config_dir_uses_xdg_config_home_when_set() {
        temp_env::with_vars([("XDG_CONFIG_HOME", Some("/custom/config"))], || {
            assert_eq!(config_dir(), Some(PathBuf::from("/custom/config")));
        });
    }

    #[test]
    fn config_dir_treats_empty_xdg_as_unset() {
        temp_env::with_vars(
            [("XDG_CONFIG_HOME", Some("")), ("HOME", Some("/test/home"))],
            || {
                assert_eq!(config_dir(), Some(PathBuf::from("/test/home/.config")));
            },
        );
    }

    #[test]
    fn netrc_path_is_in_home() {
        temp_env::with_vars([("HOME", Some("/test/home"))], || {
            assert_eq!(netrc_path(), Some(PathBuf::from("/test/home/.netrc")));
        });
    }

    #[test]
    fn netrc_path_is_none_without_home() {
        temp_env::with_vars([("HOME", None::<&str>)], || {
            assert_eq!(netrc_path(), None);
        });
    }

    #[rstest]
    #[case::tilde("~/creds/netrc", "/test/home/creds/netrc")]
    #[case::absolute("/etc/netrc", "/etc/netrc")]
    #[case::relative("netrc", "netrc")]
    #[case::tilde_user("~other/netrc", "~other/netrc")]
    fn expand_tilde_resolves_home(#[case] input: &str, #[case] expected: &str) {
        temp_env::with_vars([("HOME", Some("/test/home"))], || {
            assert_eq!(expand_tilde(input), PathBuf::from(expected));
        });
    }
}
