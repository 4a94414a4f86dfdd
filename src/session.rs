//! Line-oriented interactive session over a [`PromptBrowser`].

use crate::browser::{CopyOutcome, PromptBrowser};
use crate::render::Renderer;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

const HELP: &str = "\
Commands:
  search <text>   filter prompts by heading (no text clears the search)
  list            show the current results
  open <n|id>     show a prompt in full
  close           close the open prompt
  copy [n|id]     copy a prompt; without an argument copies the open prompt
  help            show this help
  quit            leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    List,
    Open(String),
    Close,
    Copy(Option<String>),
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb.to_lowercase().as_str() {
            "" | "list" | "l" => Self::List,
            "search" | "s" | "/" => Self::Search(rest.to_string()),
            "open" | "o" | "view" if !rest.is_empty() => Self::Open(rest.to_string()),
            "close" | "x" => Self::Close,
            "copy" | "y" => Self::Copy((!rest.is_empty()).then(|| rest.to_string())),
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Reads commands from `input` until EOF or `quit`, writing rendered views to
/// `output` after each one and again whenever a "copied" flag expires.
pub async fn run<R, W>(browser: &mut PromptBrowser, renderer: &Renderer, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut revision = browser.feedback().subscribe();
    write_out(&mut output, &renderer.render(&browser.view())?).await?;
    write_out(&mut output, "> ").await?;

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read command")?,
            // Copies mark their own revision as seen, so this only fires when a flag expires.
            Ok(()) = revision.changed() => {
                debug!("Copy feedback changed, redrawing");
                write_out(&mut output, &renderer.render(&browser.view())?).await?;
                write_out(&mut output, "> ").await?;
                continue;
            }
        };
        let Some(line) = line else {
            break;
        };
        let command = SessionCommand::parse(&line);
        debug!(command = ?command, "Session command");
        let message = match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => Some(HELP.to_string()),
            SessionCommand::Unknown(text) => Some(format!("Unknown command: {} (type 'help')\n", text)),
            SessionCommand::List => {
                browser.clear();
                None
            }
            SessionCommand::Search(query) => {
                browser.clear();
                browser.set_query(query);
                None
            }
            SessionCommand::Open(target) => match browser.resolve(&target).map(|p| p.id.clone()) {
                Some(id) => {
                    browser.select(&id);
                    None
                }
                None => Some(format!("No prompt matches '{}'\n", target)),
            },
            SessionCommand::Close => {
                browser.clear();
                None
            }
            SessionCommand::Copy(target) => copy(browser, target.as_deref()).await,
        };
        revision.borrow_and_update();

        match message {
            Some(message) => write_out(&mut output, &message).await?,
            None => write_out(&mut output, &renderer.render(&browser.view())?).await?,
        }
        write_out(&mut output, "> ").await?;
    }
    Ok(())
}

async fn copy(browser: &PromptBrowser, target: Option<&str>) -> Option<String> {
    let (outcome, heading) = match target {
        Some(target) => {
            let Some(prompt) = browser.resolve(target) else {
                return Some(format!("No prompt matches '{}'\n", target));
            };
            (browser.copy_card(&prompt.id).await, prompt.heading.clone())
        }
        None => {
            let Some(prompt) = browser.selected() else {
                return Some("No prompt is open; use 'copy <n|id>'\n".to_string());
            };
            (browser.copy_detail().await, prompt.heading.clone())
        }
    };
    match outcome {
        // The refreshed view carries the "copied" flag.
        CopyOutcome::Copied => None,
        CopyOutcome::Failed => Some(format!("Could not copy '{}'\n", heading)),
        CopyOutcome::NoTarget => Some("Nothing to copy\n".to_string()),
    }
}

async fn write_out<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output
        .write_all(text.as_bytes())
        .await
        .context("Failed to write output")?;
    output.flush().await.context("Failed to flush output")
}
