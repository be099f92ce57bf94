//! Console adapter for development/testing

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;

/// Line-based console adapter: one message per input line, one reply per output line
pub struct ConsoleAdapter<R, W> {
    reader: R,
    writer: W,
    prompt: Option<String>,
}

impl ConsoleAdapter<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).with_prompt("> ")
    }
}

impl<R, W> ConsoleAdapter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            prompt: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Read one line; `None` at end of input
    pub async fn read_line(&mut self) -> Result<Option<String>, BotError> {
        if let Some(prompt) = &self.prompt {
            self.writer.write_all(prompt.as_bytes()).await?;
            self.writer.flush().await?;
        }

        let mut input = String::new();
        if self.reader.read_line(&mut input).await? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub async fn send_message(&mut self, text: &str) -> Result<(), BotError> {
        self.writer.write_all(format!("[BOT] {}\n", text).as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Feed every input line through the dispatcher until end of input
    pub async fn run(&mut self, dispatcher: &MessageDispatcher) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode)");

        while let Some(input) = self.read_line().await? {
            if input.trim().is_empty() {
                continue;
            }

            match dispatcher.process_text(&input).await {
                Ok(Some(reply)) => self.send_message(&reply.body).await?,
                Ok(None) => {}
                Err(e) => self.send_message(&format!("Error: {}", e)).await?,
            }
        }

        tracing::info!("Console input closed");
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responders::GreetingResponder;

    #[tokio::test]
    async fn test_run_replies_per_line() {
        let input: &[u8] = b"hello\n\nnot a command\r\nhello\n";
        let dispatcher = MessageDispatcher::new().with_responder(GreetingResponder::new());

        let mut console = ConsoleAdapter::new(input, Vec::new());
        console.run(&dispatcher).await.unwrap();

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "[BOT] hello, world!\n[BOT] hello, world!\n");
    }

    #[tokio::test]
    async fn test_prompt_is_written() {
        let input: &[u8] = b"";
        let mut console = ConsoleAdapter::new(input, Vec::new()).with_prompt("> ");
        assert!(console.read_line().await.unwrap().is_none());
        assert_eq!(console.into_writer(), b"> ".to_vec());
    }
}
