use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::{sentinel::SentinelLayout, AppState},
    infrastructure::tui::{Frame, TuiLike},
    presentation::components::Components,
};

/// Draws the component tree and reports where the list sentinel landed
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn TuiLike>>,
        state: &AppState,
    ) -> Result<Option<SentinelLayout>> {
        let mut guard = tui.lock().await;
        let mut layout = None;
        let components = &mut self.components;
        let mut draw = |f: &mut Frame<'_>| {
            layout = components.render(f, state);
        };
        guard.draw(&mut draw)?;
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    #[tokio::test]
    async fn test_renders_with_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(80, 24)?));
        let tui: Arc<Mutex<dyn TuiLike>> = Arc::<Mutex<TestTui>>::clone(&test_tui);
        let mut renderer = Renderer::new();

        let layout = renderer.render(&tui, &AppState::default()).await?;
        assert!(layout.is_some());
        assert_eq!(test_tui.lock().await.draw_count(), 1);
        assert!(test_tui.lock().await.screen_text().contains("Company Directory"));
        Ok(())
    }
}
