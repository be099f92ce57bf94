use regex_lite::Regex;
use std::fmt;

/// Shape of a command: how a message has to start for a responder to claim it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureKind {
    /// The whole message is this token, nothing else
    Exact(String),
    /// Keyword, a space, then `arity` arguments
    Prefixed { keyword: String, arity: usize },
}

/// A compiled command signature.
///
/// Matching is case-sensitive and anchored at the start of the message.
/// For a single argument the rest of the first line is captured and
/// trimmed; a blank argument is a no-match. For more than one argument
/// each one is a whitespace-free token and the line must end after the
/// last of them.
#[derive(Debug, Clone)]
pub struct CommandSignature {
    kind: SignatureKind,
    pattern: Option<Regex>,
}

/// Arguments captured by a successful match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandMatch {
    pub args: Vec<String>,
}

impl CommandMatch {
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(|s| s.as_str())
    }

    /// First argument, or an empty string for argument-less commands
    pub fn first(&self) -> &str {
        self.arg(0).unwrap_or("")
    }
}

impl CommandSignature {
    pub fn exact(token: impl Into<String>) -> Self {
        let token = token.into();
        let pattern = format!(r"\A{}\z", regex_lite::escape(&token));
        Self::compile(SignatureKind::Exact(token), &pattern)
    }

    pub fn prefixed(keyword: impl Into<String>) -> Self {
        Self::with_arity(keyword, 1)
    }

    pub fn with_arity(keyword: impl Into<String>, arity: usize) -> Self {
        let keyword = keyword.into();
        let escaped = regex_lite::escape(&keyword);
        let pattern = match arity {
            0 => format!(r"\A{}\z", escaped),
            1 => format!(r"\A{} (.+)", escaped),
            n => {
                let args = vec![r"(\S+)"; n].join(" +");
                format!(r"\A{} {}[ \t]*(?:\n|\z)", escaped, args)
            }
        };
        Self::compile(SignatureKind::Prefixed { keyword, arity }, &pattern)
    }

    fn compile(kind: SignatureKind, pattern: &str) -> Self {
        // Built from an escaped literal and fixed groups, so this compiles.
        // A pattern that somehow does not is a signature that matches nothing.
        Self {
            kind,
            pattern: Regex::new(pattern).ok(),
        }
    }

    pub fn kind(&self) -> &SignatureKind {
        &self.kind
    }

    pub fn arity(&self) -> usize {
        match &self.kind {
            SignatureKind::Exact(_) => 0,
            SignatureKind::Prefixed { arity, .. } => *arity,
        }
    }

    /// Match `input` against this signature.
    ///
    /// Returns `None` when the prefix is absent, an argument is missing,
    /// or an argument is blank.
    pub fn matches(&self, input: &str) -> Option<CommandMatch> {
        let caps = self.pattern.as_ref()?.captures(input)?;
        let mut args = Vec::with_capacity(self.arity());
        for index in 1..=self.arity() {
            let arg = caps.get(index)?.as_str().trim();
            if arg.is_empty() {
                return None;
            }
            args.push(arg.to_string());
        }
        Some(CommandMatch { args })
    }
}

impl fmt::Display for CommandSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SignatureKind::Exact(token) => write!(f, "{}", token),
            SignatureKind::Prefixed { keyword, arity: 1 } => write!(f, "{} <text>", keyword),
            SignatureKind::Prefixed { keyword, arity } => {
                write!(f, "{}", keyword)?;
                for i in 1..=*arity {
                    write!(f, " <arg{}>", i)?;
                }
                Ok(())
            }
        }
    }
}
