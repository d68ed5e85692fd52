//! Application core - App struct, event loop and frame rendering

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use folio_core::{Config, Portfolio, ScrollConfig};
use futures::StreamExt;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::tui::components::{
    render_header, render_page_scrollbar, render_status_bar, render_toasts, ToastQueue,
    HEADER_HEIGHT,
};
use crate::tui::page::{PageLink, MAX_CONTENT_WIDTH};
use crate::tui::state::{LayoutState, PortfolioView};
use crate::tui::terminal::{TerminalGuard, Tui};
use crate::tui::themes::{Theme, THEME_REGISTRY};

const SCROLLBAR_WIDTH: u16 = 1;
/// Columns kept clear on each side of the content column
const SIDE_MARGIN: u16 = 2;

/// Hands a URL or mailto URI to the desktop
pub type Opener = fn(&str) -> io::Result<()>;

fn system_open(target: &str) -> io::Result<()> {
    open::that_detached(target)
}

/// Scroll spy settings for a page under the header, with config overrides
pub fn terminal_scroll_config(config: &Config) -> ScrollConfig {
    config
        .scroll
        .apply(ScrollConfig::terminal(HEADER_HEIGHT as usize))
}

pub struct App {
    pub theme: Arc<Theme>,
    pub theme_name: String,
    pub view: PortfolioView,
    pub layout: LayoutState,
    pub toasts: ToastQueue,
    pub frame_interval: Duration,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub(crate) last_tick: Instant,
    pub(crate) opener: Opener,
}

impl App {
    /// Mount the page for a terminal of `size` (columns, rows)
    pub fn new(
        portfolio: Portfolio,
        config: &Config,
        cli_theme: Option<&str>,
        size: (u16, u16),
    ) -> Result<Self> {
        let requested = config.theme_name(cli_theme);
        let theme = Arc::new(THEME_REGISTRY.get_or_default(requested).clone());
        let theme_name = theme.name.clone();
        let scroll_config = terminal_scroll_config(config);

        let (page, _) = split_screen(Rect::new(0, 0, size.0, size.1));
        let content = content_rect(page);
        let mut view =
            PortfolioView::mount(portfolio, &theme, scroll_config, content.width as usize)?;
        view.relayout(&theme, content.width as usize, page.height)?;
        view.flush();

        tracing::info!(
            theme = %theme.name,
            threshold = scroll_config.threshold,
            header_offset = scroll_config.header_offset,
            "App initialized"
        );

        Ok(Self {
            theme,
            theme_name,
            view,
            layout: LayoutState::new(),
            toasts: ToastQueue::new(),
            frame_interval: config.frame_interval(),
            should_quit: false,
            needs_redraw: true,
            last_tick: Instant::now(),
            opener: system_open,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let result = self.main_loop(guard.terminal()).await;
        drop(guard);
        result
    }

    /// Main event loop
    async fn main_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            self.tick();

            if self.view.spy.has_pending() {
                self.needs_redraw = true;
            }

            // Only render if something changed
            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => {
                            tracing::error!("Terminal event error: {}", e);
                            return Err(e.into());
                        }
                        None => break,
                    }
                }
                _ = tokio::time::sleep(self.frame_interval) => {}
            }

            if self.should_quit {
                tracing::info!("Quit requested");
                break;
            }
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                self.handle_key(key);
                self.needs_redraw = true;
            }
            Event::Mouse(mouse) => {
                if self.handle_mouse_event(mouse) {
                    self.needs_redraw = true;
                }
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
                self.needs_redraw = true;
            }
            _ => {}
        }
    }

    /// Render one frame: measure, scroll spy, page, then the fixed chrome
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let theme = Arc::clone(&self.theme);
        f.render_widget(Block::default().style(Style::default().bg(theme.bg_color)), area);

        let (page_area, status_area) = split_screen(area);
        let content = content_rect(page_area);

        let layout = match self
            .view
            .relayout(&theme, content.width as usize, page_area.height)
        {
            Ok(layout) => layout,
            Err(e) => {
                tracing::error!("Page layout failed: {}", e);
                return;
            }
        };
        self.view.flush();

        let total = layout.total_lines();
        let offset = self.view.scroll.offset;
        let header_bottom = page_area.y + HEADER_HEIGHT.min(page_area.height);
        let link_areas = visible_links(&layout.links, content, offset, header_bottom);
        let visible: Vec<_> = layout
            .lines
            .into_iter()
            .skip(offset)
            .take(page_area.height as usize)
            .collect();
        f.render_widget(Paragraph::new(visible), content);

        let scrollbar_area = Rect::new(
            (page_area.x + page_area.width).saturating_sub(SCROLLBAR_WIDTH),
            page_area.y + HEADER_HEIGHT.min(page_area.height),
            SCROLLBAR_WIDTH.min(page_area.width),
            page_area.height.saturating_sub(HEADER_HEIGHT),
        );
        render_page_scrollbar(
            f,
            scrollbar_area,
            offset,
            total,
            page_area.height as usize,
            &theme,
        );

        let hits = render_header(
            f,
            page_area,
            &theme,
            &self.view.portfolio.brand,
            self.view.state(),
            self.view.pointer,
        );

        render_status_bar(
            f,
            status_area,
            &theme,
            &self.view.state().active_section_id,
            offset,
            self.view.scroll.max_scroll,
            self.view.contact.is_editing(),
        );
        render_toasts(f, page_area, &self.toasts, &theme);

        self.layout.header_area = Some(Rect {
            height: HEADER_HEIGHT.min(page_area.height),
            ..page_area
        });
        self.layout.brand_area = hits.brand;
        self.layout.nav_areas = hits.nav;
        self.layout.link_areas = link_areas;
        self.layout.scrollbar_area = Some(scrollbar_area);
    }
}

/// Page viewport and status bar row
fn split_screen(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Screen areas of the page links inside the viewport and below the header
fn visible_links(
    links: &[PageLink],
    content: Rect,
    offset: usize,
    top: u16,
) -> Vec<(String, Rect)> {
    let right = content.x + content.width;
    links
        .iter()
        .filter_map(|link| {
            let row = link.line.checked_sub(offset)?;
            if row >= content.height as usize {
                return None;
            }
            let y = content.y + row as u16;
            let x = content.x + (link.column as u16).min(content.width);
            let width = (link.width as u16).min(right - x);
            if y < top || width == 0 {
                return None;
            }
            Some((link.href.clone(), Rect::new(x, y, width, 1)))
        })
        .collect()
}

/// Centered content column inside the page viewport
fn content_rect(page: Rect) -> Rect {
    let usable = page.width.saturating_sub(SCROLLBAR_WIDTH);
    let width = usable
        .saturating_sub(SIDE_MARGIN * 2)
        .min(MAX_CONTENT_WIDTH)
        .max(1)
        .min(usable.max(1));
    let x = page.x + usable.saturating_sub(width) / 2;
    Rect::new(x, page.y, width, page.height)
}
