//! `.netrc` parsing and serialization.

use std::fmt;

use super::error::{NetrcError, Result};

/// Credentials stored for a single host (or the `default` entry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Machine {
    pub login: Option<String>,
    pub password: Option<String>,
    pub account: Option<String>,
    /// Macro name on the first line, body on the following lines.
    pub macdef: Option<String>,
    /// Keywords we don't interpret (e.g. `port`), kept so a rewrite
    /// doesn't drop them.
    pub extra: Vec<(String, String)>,
}

impl Machine {
    /// The password, unless it is missing or empty.
    pub fn token(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

/// Host-keyed credential records in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Netrc {
    machines: Vec<(String, Machine)>,
    default: Option<Machine>,
}

enum Entry {
    Machine(String, Machine),
    Default(Machine),
}

impl Netrc {
    pub fn parse(input: &str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let mut netrc = Netrc::default();
        let mut current: Option<Entry> = None;

        while let Some(token) = lexer.next_token()? {
            match token.as_str() {
                "machine" => {
                    netrc.finish(current.take());
                    let host = lexer.value_for("machine")?;
                    current = Some(Entry::Machine(host, Machine::default()));
                }
                "default" => {
                    netrc.finish(current.take());
                    current = Some(Entry::Default(Machine::default()));
                }
                keyword => {
                    let machine = match current.as_mut() {
                        Some(Entry::Machine(_, m)) | Some(Entry::Default(m)) => m,
                        None => {
                            return Err(lexer.error(format!(
                                "'{keyword}' outside of a machine entry"
                            )));
                        }
                    };
                    match keyword {
                        "login" => machine.login = Some(lexer.value_for(keyword)?),
                        "password" | "passwd" => {
                            machine.password = Some(lexer.value_for(keyword)?)
                        }
                        "account" => machine.account = Some(lexer.value_for(keyword)?),
                        "macdef" => machine.macdef = Some(lexer.macro_body()),
                        other => {
                            let value = lexer.value_for(other)?;
                            machine.extra.push((other.to_string(), value));
                        }
                    }
                }
            }
        }
        netrc.finish(current);

        Ok(netrc)
    }

    fn finish(&mut self, entry: Option<Entry>) {
        match entry {
            Some(Entry::Machine(host, machine)) => self.insert(host, machine),
            Some(Entry::Default(machine)) => self.default = Some(machine),
            None => {}
        }
    }

    /// Look up the entry for `host`. The `default` entry is not consulted.
    pub fn get(&self, host: &str) -> Option<&Machine> {
        self.machines
            .iter()
            .find(|(h, _)| h == host)
            .map(|(_, m)| m)
    }

    pub fn default_entry(&self) -> Option<&Machine> {
        self.default.as_ref()
    }

    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.machines.iter().map(|(h, _)| h.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty() && self.default.is_none()
    }

    /// Replace the entry for `host`, or append it. A later duplicate in
    /// the file replaces the earlier one in place.
    pub fn insert(&mut self, host: String, machine: Machine) {
        match self.machines.iter_mut().find(|(h, _)| *h == host) {
            Some((_, existing)) => *existing = machine,
            None => self.machines.push((host, machine)),
        }
    }

    /// Set login and password for `host`, keeping its other fields.
    pub fn set_credentials(&mut self, host: &str, login: &str, password: &str) {
        let mut machine = self.get(host).cloned().unwrap_or_default();
        machine.login = Some(login.to_string());
        machine.password = Some(password.to_string());
        self.insert(host.to_string(), machine);
    }
}

impl fmt::Display for Netrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (host, machine) in &self.machines {
            writeln!(f, "machine {}", quote(host))?;
            write_fields(f, machine)?;
        }
        // `default` must come last; entries after it are ignored by most readers.
        if let Some(machine) = &self.default {
            writeln!(f, "default")?;
            write_fields(f, machine)?;
        }
        Ok(())
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, machine: &Machine) -> fmt::Result {
    let fields = [
        ("login", &machine.login),
        ("password", &machine.password),
        ("account", &machine.account),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            writeln!(f, "  {key} {}", quote(value))?;
        }
    }
    for (key, value) in &machine.extra {
        writeln!(f, "  {key} {}", quote(value))?;
    }
    if let Some(body) = &machine.macdef {
        writeln!(f, "macdef {}", body.trim_end_matches('\n'))?;
        writeln!(f)?;
    }
    Ok(())
}

fn quote(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value.starts_with('#')
        || value.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\');
    if !needs_quotes {
        return value.to_string();
    }
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn line(&self) -> usize {
        self.input[..self.pos].matches('\n').count() + 1
    }

    fn error(&self, message: String) -> NetrcError {
        NetrcError::Parse {
            line: self.line(),
            message,
        }
    }

    fn skip_blank(&mut self) {
        loop {
            let rest = self.rest();
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();
            if trimmed.starts_with('#') {
                self.pos += trimmed.find('\n').unwrap_or(trimmed.len());
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        self.skip_blank();
        let rest = self.rest();
        if rest.is_empty() {
            return Ok(None);
        }

        if let Some(quoted) = rest.strip_prefix('"') {
            let mut value = String::new();
            let mut chars = quoted.char_indices();
            while let Some((i, c)) = chars.next() {
                match c {
                    '"' => {
                        self.pos += 1 + i + 1;
                        return Ok(Some(value));
                    }
                    '\\' => match chars.next() {
                        Some((_, escaped)) => value.push(escaped),
                        None => break,
                    },
                    c => value.push(c),
                }
            }
            return Err(self.error("unterminated quoted string".to_string()));
        }

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += end;
        Ok(Some(rest[..end].to_string()))
    }

    fn value_for(&mut self, keyword: &str) -> Result<String> {
        self.next_token()?
            .ok_or_else(|| self.error(format!("missing value for '{keyword}'")))
    }

    /// Consume the rest of the `macdef` line and every following line up to
    /// the first blank line.
    fn macro_body(&mut self) -> String {
        let rest = self.rest();
        let mut consumed = 0;
        let mut lines = Vec::new();

        for (i, line) in rest.split_inclusive('\n').enumerate() {
            consumed += line.len();
            let content = line.trim_end_matches(['\n', '\r']);
            if i == 0 {
                lines.push(content.trim());
            } else if content.trim().is_empty() {
                break;
            } else {
                lines.push(content);
            }
        }

        self.pos += consumed;
        lines.join("\n")
    }
}
