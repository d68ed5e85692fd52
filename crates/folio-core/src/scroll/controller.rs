//! Scroll controller - owns the scroll state for one mounted page
//!
//! Scroll notifications can arrive many times per frame (wheel bursts, key
//! repeat). They are recorded with [`ScrollController::notify`] and evaluated
//! once per frame by [`ScrollController::flush`]. Only the latest position is
//! kept, so the state after a flush equals a direct evaluation of the final
//! position.

use tracing::debug;

use super::{on_scroll, ScrollConfig, ScrollState, SectionRegistry};

/// Single-writer owner of a page's [`ScrollState`]
#[derive(Debug, Clone)]
pub struct ScrollController {
    registry: SectionRegistry,
    config: ScrollConfig,
    state: ScrollState,
    /// Latest scroll position not yet evaluated
    pending: Option<usize>,
}

impl ScrollController {
    /// Mount a controller at the top of the page
    ///
    /// Starts from the default state with an evaluation of position 0 queued,
    /// so the first flush reflects the real layout.
    pub fn new(registry: SectionRegistry, config: ScrollConfig) -> Self {
        let state = ScrollState::initial(&registry);
        Self {
            registry,
            config,
            state,
            pending: Some(0),
        }
    }

    /// Latest completed state
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Record a scroll notification without evaluating it
    pub fn notify(&mut self, scroll_y: usize) {
        self.pending = Some(scroll_y);
    }

    /// Whether a notification is waiting for the next flush
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Evaluate the latest pending position, if any
    ///
    /// Returns true when the visible state changed.
    pub fn flush(&mut self) -> bool {
        let Some(scroll_y) = self.pending.take() else {
            return false;
        };
        self.apply(scroll_y)
    }

    /// Replace the registry after re-measurement and re-evaluate at the
    /// current position
    pub fn set_registry(&mut self, registry: SectionRegistry) {
        if registry == self.registry {
            return;
        }
        self.registry = registry;
        let scroll_y = self.pending.take().unwrap_or(self.state.scroll_y);
        self.apply(scroll_y);
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        let scroll_y = self.pending.take().unwrap_or(self.state.scroll_y);
        self.apply(scroll_y);
    }

    fn apply(&mut self, scroll_y: usize) -> bool {
        let next = on_scroll(scroll_y, &self.registry, &self.config);
        if next == self.state {
            return false;
        }
        if next.active_section_id != self.state.active_section_id {
            debug!(
                from = %self.state.active_section_id,
                to = %next.active_section_id,
                scroll_y,
                "Active section changed"
            );
        }
        self.state = next;
        true
    }
}
