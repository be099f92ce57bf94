use std::fmt;

/// A chat message. Both the input to and the output of every responder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub body: String,
}

impl Message {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Message with an empty body
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// First `max` characters of the body, for log lines
    pub fn preview(&self, max: usize) -> String {
        self.body.chars().take(max).collect()
    }
}

impl From<&str> for Message {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for Message {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
