use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use prompt_browser::constants::DEFAULT_PREVIEW_CHARS;
use prompt_browser::render::Renderer;
use prompt_browser::{session, Clipboard, Config, CopyOutcome, PromptBrowser, SystemClipboard};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON prompt file ({"prompts": [...]}); defaults to the bundled prompts
    #[arg(long, env = "PROMPT_BROWSER_DATA")]
    data: Option<PathBuf>,

    /// Characters of content shown in each result before truncation
    #[arg(long, default_value_t = DEFAULT_PREVIEW_CHARS)]
    preview_chars: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// List prompts whose heading contains QUERY (all prompts without one)
    List { query: Option<String> },
    /// Print one prompt in full
    Show { id: String },
    /// Copy one prompt's content to the system clipboard
    Copy { id: String },
    /// Search, open and copy prompts interactively (the default)
    Browse,
}

/// The one-shot `copy` exits right after writing, so on Linux it has to keep
/// serving the text until another application takes the clipboard over.
fn system_clipboard_for(command: &Command) -> SystemClipboard {
    match command {
        Command::Copy { .. } => SystemClipboard::until_replaced(),
        _ => SystemClipboard::new(),
    }
}

async fn run<R, W>(args: Cli, clipboard: Arc<dyn Clipboard>, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let config = Config {
        data_path: args.data.clone(),
        preview_chars: args.preview_chars,
    };
    let mut browser = PromptBrowser::load(&config, clipboard).await?;
    let renderer = Renderer::new()?;

    let text = match args.command.unwrap_or(Command::Browse) {
        Command::List { query } => {
            browser.set_query(query.unwrap_or_default());
            renderer.render_list(&browser.view())?
        }
        Command::Show { id } => {
            if !browser.select(&id) {
                bail!("No prompt with id '{}'", id);
            }
            renderer.render(&browser.view())?
        }
        Command::Copy { id } => match browser.copy_card(&id).await {
            CopyOutcome::Copied => format!("Copied '{}' to the clipboard\n", id),
            CopyOutcome::Failed => bail!("Failed to copy prompt '{}' to the clipboard", id),
            CopyOutcome::NoTarget => bail!("No prompt with id '{}'", id),
        },
        Command::Browse => {
            return session::run(&mut browser, &renderer, input, output).await;
        }
    };
    output
        .write_all(text.as_bytes())
        .await
        .context("Failed to write output")?;
    output.flush().await.context("Failed to flush output")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Use `RUST_LOG=prompt_browser=debug` to see filter and copy feedback changes.
    // Logs go to stderr so rendered output stays clean.
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    tracing::debug!(args = ?args, "Starting prompt browser");

    let command = args.command.clone().unwrap_or(Command::Browse);
    let clipboard: Arc<dyn Clipboard> = Arc::new(system_clipboard_for(&command));
    let input = BufReader::new(tokio::io::stdin());
    run(args, clipboard, input, tokio::io::stdout()).await
}
