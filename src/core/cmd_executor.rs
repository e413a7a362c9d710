use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{cmd::Cmd, raw_msg::RawMsg},
    infrastructure::{api::CompanySource, debounce::Debouncer},
};

/// Command executor that turns Elm commands into tokio tasks.
///
/// Every asynchronous result is reported back as a `RawMsg` on `raw_tx`; nothing here
/// touches `AppState`.
pub struct CmdExecutor {
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    source: Arc<dyn CompanySource>,
    debouncer: Debouncer,
    fetches_started: usize,
}

impl CmdExecutor {
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>, source: Arc<dyn CompanySource>) -> Self {
        Self {
            debouncer: Debouncer::new(raw_tx.clone()),
            raw_tx,
            source,
            fetches_started: 0,
        }
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::FetchPage { ticket, query } => {
                let ticket = *ticket;
                let query = query.clone();
                let source = Arc::clone(&self.source);
                let tx = self.raw_tx.clone();
                self.fetches_started += 1;
                tokio::spawn(async move {
                    let result = source.fetch_page(&query).await;
                    if tx.send(RawMsg::PageLoaded { ticket, result }).is_err() {
                        log::debug!("page {ticket:?} arrived after the runtime stopped");
                    }
                });
            }

            Cmd::ScheduleDebounce { generation, delay } => {
                self.debouncer.schedule(*generation, *delay);
            }

            Cmd::CancelDebounce => self.debouncer.cancel(),

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd)?;
                }
            }
        }
        Ok(())
    }

    /// Execute multiple commands in order
    /// Returns the names of the executed commands for logging
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut executed = Vec::with_capacity(commands.len());
        for cmd in commands {
            self.execute_command(cmd)?;
            executed.push(cmd.name().to_string());
        }
        if !executed.is_empty() {
            log::trace!("executed commands: {executed:?}");
        }
        Ok(executed)
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            fetches_started: self.fetches_started,
            debounce_pending: self.debouncer.is_pending(),
        }
    }
}

/// Executor statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub fetches_started: usize,
    pub debounce_pending: bool,
}
