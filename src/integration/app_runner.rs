use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{raw_msg::RawMsg, state::AppState},
    infrastructure::{
        api::{CompanySource, HttpCompanySource},
        config::Config,
        tui::{real::RealTui, Event, TuiLike},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Reporting the sentinel can change what the list shows (a "Loading..." row, a cache
/// hit); this many draws are enough for the geometry to settle.
const MAX_LAYOUT_PASSES: usize = 4;

/// Drives the Elm runtime from terminal events and renders after every change.
///
/// When the terminal's event stream ends the runner stops reading input and returns as
/// soon as no page request or debounce is outstanding.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike>>,
    renderer: Renderer,
    coalescer: Coalescer,
    input_closed: bool,
}

impl AppRunner {
    pub fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike>>,
        source: Arc<dyn CompanySource>,
    ) -> Self {
        let state = AppState::new_with_config(config);
        Self {
            runtime: Runtime::new(state, source),
            tui,
            renderer: Renderer::new(),
            coalescer: Coalescer::default(),
            input_closed: false,
        }
    }

    /// Production wiring: the HTTP API and a crossterm terminal
    pub fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let source = HttpCompanySource::new(
            config.api_base_url.clone(),
            Duration::from_millis(config.request_timeout_ms),
        )?;
        log::info!("using company API at {}", config.api_base_url);
        Ok(Self::new_with_config(config, tui, Arc::new(source)))
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run the main loop: terminal events and command results in, frames out.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.runtime.init()?;
        self.coalescer.mark_dirty();

        loop {
            self.runtime.run_update_cycle()?;
            if self.runtime.state().system.should_quit {
                break;
            }
            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }
            if let Some((width, height)) = self.coalescer.take_resize() {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
            }
            if self.coalescer.take_render() {
                self.render().await?;
            }

            if self.input_closed && self.is_settled() {
                log::info!("input closed and nothing outstanding; stopping");
                break;
            }

            self.wait_for_input().await;
        }

        // flush the teardown commands queued by Quit
        self.runtime.run_update_cycle()?;
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Block until a terminal event or a command result arrives and queue it
    async fn wait_for_input(&mut self) {
        let mut tui = self.tui.lock().await;
        let input_closed = self.input_closed;
        tokio::select! {
            event = tui.next(), if !input_closed => {
                drop(tui);
                match event {
                    Some(event) => self.handle_event(event),
                    None => {
                        log::debug!("terminal event stream ended");
                        self.input_closed = true;
                    }
                }
            }
            raw = self.runtime.recv() => {
                drop(tui);
                if let Some(raw) = raw {
                    self.runtime.send_raw_msg(raw);
                    self.coalescer.mark_dirty();
                }
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        let raw = match event {
            Event::Quit => RawMsg::Quit,
            Event::Tick => RawMsg::Tick,
            Event::Render => RawMsg::Render,
            Event::Resize(width, height) => {
                self.coalescer.resized(width, height);
                RawMsg::Resize(width, height)
            }
            Event::Key(key) => RawMsg::Key(key),
            Event::Error => RawMsg::Error("terminal event error".to_string()),
            Event::Init
            | Event::Closed
            | Event::FocusGained
            | Event::FocusLost
            | Event::Paste(_)
            | Event::Mouse(_) => return,
        };
        if !raw.is_frequent() {
            self.coalescer.mark_dirty();
        }
        self.runtime.send_raw_msg(raw);
    }

    /// Draw, then report the sentinel until its geometry stops changing
    async fn render(&mut self) -> Result<()> {
        for _ in 0..MAX_LAYOUT_PASSES {
            let layout = self
                .renderer
                .render(&self.tui, self.runtime.state())
                .await?;
            if !self.runtime.state().sentinel.wants_layout(layout.as_ref()) {
                return Ok(());
            }
            self.runtime.send_raw_msg(RawMsg::SentinelLaidOut(layout));
            self.runtime.run_update_cycle()?;
        }
        log::debug!("sentinel layout still changing after {MAX_LAYOUT_PASSES} passes");
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            // execution continues here once the shell resumes us
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.run_update_cycle()?;
        self.coalescer.mark_dirty();
        Ok(())
    }

    /// No page request in flight and no filter edit waiting to settle
    pub fn is_settled(&self) -> bool {
        let state = self.runtime.state();
        !state.pagination.is_loading() && !state.filters.is_pending()
    }
}
