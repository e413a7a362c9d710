use std::collections::VecDeque;
use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update,
    },
    infrastructure::api::CompanySource,
};

/// Drives the Elm loop: raw messages in, state transitions, commands out.
///
/// Results of executed commands come back through the raw channel and are picked up by
/// the next update cycle.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    pub fn new(initial_state: AppState, source: Arc<dyn CompanySource>) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        let cmd_executor = CmdExecutor::new(raw_msg_tx.clone(), source);

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor,
        }
    }

    /// Issue the initial page request
    pub fn init(&mut self) -> Result<()> {
        let commands = self.state.init();
        self.cmd_executor.execute_commands(&commands)?;
        Ok(())
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get raw message sender
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Wait for the next raw message produced by an executed command
    pub async fn recv(&mut self) -> Option<RawMsg> {
        self.raw_msg_rx.recv().await
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("msg: {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages queued by the host, then those produced by executed commands
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            self.translate(raw_msg);
        }
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.translate(raw_msg);
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    fn translate(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::trace!("raw: {raw_msg:?}");
        }
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(domain_msgs);
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        let commands = self.process_all_messages();
        self.cmd_executor.execute_commands(&commands)
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        let executor = self.cmd_executor.get_stats();
        RuntimeStats {
            queued_messages: self.msg_queue.len() + self.raw_msg_queue.len(),
            loaded_companies: self.state.pagination.items().len(),
            current_page: self.state.pagination.page(),
            epoch: self.state.pagination.epoch(),
            fetches_started: executor.fetches_started,
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub loaded_companies: usize,
    pub current_page: u32,
    pub epoch: u64,
    pub fetches_started: usize,
}
