//! Event loop runtime
//!
//! One cooperative loop: terminal events and request completions arrive as
//! messages on a single channel; commands returned by the update functions
//! are executed here by spawning gateway calls whose results are sent back
//! as messages. No state is shared with the spawned tasks.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::app::App;
use crate::gateway::Gateway;
use crate::msg::{Cmd, Msg};
use crate::view;

pub struct Runtime {
    gateway: Arc<dyn Gateway>,
    tx: mpsc::UnboundedSender<Msg>,
    rx: mpsc::UnboundedReceiver<Msg>,
    /// Pending deferred-refresh timer; re-arming or teardown aborts it so
    /// it can never fire into a torn-down view
    refresh_handle: Option<JoinHandle<()>>,
    /// Where fetched captcha images are written for the user to open
    captcha_path: PathBuf,
}

impl Runtime {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            gateway,
            tx,
            rx,
            refresh_handle: None,
            captcha_path: std::env::temp_dir()
                .join(format!("loglens-captcha-{}.png", std::process::id())),
        }
    }

    /// Run the UI until the user quits
    pub async fn run(mut self, mut app: App, initial: Cmd) -> Result<()> {
        let mut terminal = ratatui::init();
        crossterm::execute!(std::io::stdout(), event::EnableMouseCapture)?;

        spawn_input_reader(self.tx.clone());
        self.dispatch(initial);

        let result = loop {
            if let Err(e) = terminal.draw(|frame| view::draw(frame, &mut app)) {
                break Err(e.into());
            }
            let Some(msg) = self.rx.recv().await else {
                break Ok(());
            };
            let cmd = app.update(msg);
            self.dispatch(cmd);
            if app.should_quit {
                break Ok(());
            }
        };

        if let Some(handle) = self.refresh_handle.take() {
            handle.abort();
        }
        crossterm::execute!(std::io::stdout(), event::DisableMouseCapture)?;
        ratatui::restore();
        info!("ui loop ended");
        result
    }

    /// Execute a command, delivering any completion back as a message
    fn dispatch(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Quit => {}
            Cmd::FetchCaptcha => {
                let gateway = Arc::clone(&self.gateway);
                let tx = self.tx.clone();
                let path = self.captcha_path.clone();
                tokio::spawn(async move {
                    let result = match gateway.fetch_captcha().await {
                        Ok(bytes) => tokio::fs::write(&path, bytes)
                            .await
                            .map(|_| path)
                            .map_err(|e| format!("could not save captcha image: {}", e)),
                        Err(e) => Err(format!("could not fetch captcha: {}", e)),
                    };
                    let _ = tx.send(Msg::CaptchaReady(result));
                });
            }
            Cmd::SubmitLogin(req) => {
                let gateway = Arc::clone(&self.gateway);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = gateway.login(req).await;
                    let _ = tx.send(Msg::LoginSettled(result));
                });
            }
            Cmd::LoadLogs {
                token,
                page,
                page_size,
            } => {
                let gateway = Arc::clone(&self.gateway);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = gateway.list_logs(page, page_size).await;
                    let _ = tx.send(Msg::LogsSettled {
                        token,
                        page,
                        result,
                    });
                });
            }
            Cmd::TriggerAnalysis => {
                let gateway = Arc::clone(&self.gateway);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = gateway.trigger_analysis().await;
                    let _ = tx.send(Msg::AnalysisSettled(result));
                });
            }
            Cmd::ScheduleRefresh(delay) => {
                // Only one deferred refresh may be armed at a time
                if let Some(handle) = self.refresh_handle.take() {
                    handle.abort();
                }
                let tx = self.tx.clone();
                self.refresh_handle = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    debug!("deferred refresh due");
                    let _ = tx.send(Msg::RefreshDue);
                }));
            }
        }
    }
}

/// Feed terminal events into the loop from a dedicated reader thread
fn spawn_input_reader(tx: mpsc::UnboundedSender<Msg>) {
    std::thread::spawn(move || {
        loop {
            let msg = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Msg::Key(key),
                Ok(Event::Mouse(mouse)) => Msg::Mouse(mouse),
                Ok(Event::Resize(cols, rows)) => Msg::Resize(cols, rows),
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx.send(msg).is_err() {
                break;
            }
        }
    });
}
