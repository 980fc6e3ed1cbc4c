//! askcsv: terminal client for the CSV insight services.
//!
//! Interactive TUI by default; `--upload` and `--question` run one-shot
//! requests and print the rendered result to stdout.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use askcsv::api::{BackendClient, Endpoints};
use askcsv::domain::{App, ResultValue, Submission};
use askcsv::render::{dispatch, render_any};
use askcsv::ui;

/// Terminal client for the CSV insight services.
#[derive(Parser, Debug)]
#[command(name = "askcsv")]
#[command(about = "Upload a CSV, ask natural-language questions, see rendered answers")]
struct Args {
    /// Query service base URL
    #[arg(long, default_value = "http://127.0.0.1:8004")]
    query_url: String,

    /// Indexing service base URL
    #[arg(long, default_value = "http://127.0.0.1:8001")]
    ingest_url: String,

    /// Ask one question, print the rendered answer, and exit
    #[arg(short, long)]
    question: Option<String>,

    /// Upload one CSV file, print the confirmation, and exit
    #[arg(short, long)]
    upload: Option<PathBuf>,

    /// In one-shot mode, also print the backend's query plan
    #[arg(long)]
    show_plan: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let client = BackendClient::new(Endpoints {
        query_url: args.query_url.clone(),
        ingest_url: args.ingest_url.clone(),
    })
    .context("failed to create the backend client")?;

    // One-shot mode: no terminal takeover.
    if args.upload.is_some() || args.question.is_some() {
        if let Some(path) = &args.upload {
            one_shot_upload(&client, path).await?;
        }
        if let Some(question) = &args.question {
            one_shot_question(&client, question, args.show_plan).await?;
        }
        return Ok(());
    }

    run_tui(client).await
}

/// Upload one file and print the service's confirmation body verbatim
/// through the generic renderer.
async fn one_shot_upload(client: &BackendClient, path: &Path) -> anyhow::Result<()> {
    let confirmation = client
        .ingest_csv(path)
        .await
        .with_context(|| format!("upload of {} failed", path.display()))?;

    let tree = render_any(&ResultValue::from(confirmation));
    println!("{}", ui::plain_text(&tree));
    Ok(())
}

/// Ask one question and print the rendered answer.
async fn one_shot_question(
    client: &BackendClient,
    question: &str,
    show_plan: bool,
) -> anyhow::Result<()> {
    let response = client.ask(question).await.context("query failed")?;

    if show_plan {
        if let Some(plan) = &response.dsl {
            let pretty =
                serde_json::to_string_pretty(plan).unwrap_or_else(|_| plan.to_string());
            println!("{pretty}\n");
        }
    }

    let value = ResultValue::from(response.result);
    let tree = dispatch(Some(&value));
    println!("{}", ui::plain_text(&tree));
    Ok(())
}

/// Run the interactive TUI.
async fn run_tui(client: BackendClient) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new()));
    let client = Arc::new(client);

    // Background health probe feeding the header indicator.
    let probe_app = app.clone();
    let probe_client = client.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(5));
        loop {
            interval.tick().await;
            let connected = probe_client.health().await;
            probe_app.lock().await.set_connected(connected);
        }
    });

    let result = run_app(&mut terminal, app, client).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    client: Arc<BackendClient>,
) -> anyhow::Result<()> {
    loop {
        {
            let app_guard = app.lock().await;
            terminal.draw(|frame| {
                ui::render(frame, &app_guard);
            })?;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let mut app_guard = app.lock().await;
                    match key.code {
                        KeyCode::Esc => app_guard.request_quit(),
                        KeyCode::Tab => app_guard.toggle_focus(),
                        KeyCode::Backspace => app_guard.backspace(),
                        KeyCode::Up => app_guard.scroll_up(),
                        KeyCode::Down => app_guard.scroll_down(),
                        KeyCode::F(1) => app_guard.toggle_help(),
                        KeyCode::Enter => {
                            if let Some(submission) = app_guard.submit() {
                                spawn_submission(client.clone(), app.clone(), submission);
                            }
                        }
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app_guard.request_quit()
                        }
                        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app_guard.toggle_dsl()
                        }
                        KeyCode::Char(c)
                            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            app_guard.push_char(c)
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.lock().await.should_quit() {
            return Ok(());
        }
    }
}

/// Run one submission on a background task. Whichever task completes last
/// writes the result the user sees; overlapping requests are not ordered.
fn spawn_submission(client: Arc<BackendClient>, app: Arc<Mutex<App>>, submission: Submission) {
    tokio::spawn(async move {
        match submission {
            Submission::Question(question) => match client.ask(&question).await {
                Ok(response) => {
                    let value = ResultValue::from(response.result);
                    let tree = dispatch(Some(&value));
                    app.lock().await.apply_answer(tree, response.dsl);
                }
                Err(e) => app.lock().await.apply_query_error(e.to_string()),
            },
            Submission::Upload(path) => {
                match client.ingest_csv(Path::new(&path)).await {
                    Ok(confirmation) => {
                        let tree = render_any(&ResultValue::from(confirmation));
                        app.lock().await.apply_upload_confirmation(tree);
                    }
                    Err(e) => {
                        app.lock()
                            .await
                            .apply_upload_error(format!("upload failed: {e}"));
                    }
                }
            }
        }
    });
}
