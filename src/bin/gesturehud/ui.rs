//! Interactive ratatui front-end for the indicator demo.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use gesturehud::config::AppConfig;
use gesturehud::icons::get_icons;
use gesturehud::indicator::{card_coordinates, pulse_frame, IndicatorWidget, BANNER_HEIGHT};
use gesturehud::terminal_restore::TerminalRestoreGuard;
use gesturehud::theme::Theme;
use gesturehud::{log_debug, GestureKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};

use crate::demo::DemoApp;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Rendering options that stay fixed for the session.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ViewOptions {
    pub(crate) theme: Theme,
    pub(crate) unicode: bool,
    pub(crate) width: u16,
}

impl ViewOptions {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self {
            theme: config.theme,
            unicode: config.unicode(),
            width: config.width.min(u16::MAX as usize) as u16,
        }
    }
}

/// Configure the terminal, run the drawing loop, and tear everything down.
pub(crate) fn run_app(app: &mut DemoApp, options: ViewOptions) -> Result<()> {
    let mut stdout = io::stdout();
    let guard = TerminalRestoreGuard::enter(&mut stdout).context("failed to prepare terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = app_loop(&mut terminal, app, options);

    drop(terminal);
    drop(guard);
    result
}

fn app_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DemoApp,
    options: ViewOptions,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        // Redraw every poll so the liveness marker keeps pulsing.
        terminal.draw(|frame| draw(frame, app, options))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let quit = match event::read()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse_event(app, mouse, card_area(size, options.width));
                false
            }
            _ => false,
        };
        if quit {
            return Ok(());
        }
    }
}

/// Card placement: top-left corner with a one-cell margin.
pub(crate) fn card_area(screen: Rect, width: u16) -> Rect {
    let x = screen.x.saturating_add(2);
    let y = screen.y.saturating_add(1);
    let available = screen.width.saturating_sub(x.saturating_sub(screen.x));
    let width = width.min(available);
    let height = (BANNER_HEIGHT as u16).min(screen.height.saturating_sub(1));
    Rect::new(x, y, width, height)
}

fn draw(frame: &mut ratatui::Frame<'_>, app: &DemoApp, options: ViewOptions) {
    let screen = frame.size();
    let area = card_area(screen, options.width);
    let view = app.view();
    let pulse = pulse_frame(get_icons(options.unicode).pulse.len());
    frame.render_widget(
        IndicatorWidget::new(&view, options.theme, options.unicode).frame(pulse),
        area,
    );

    let inputs = app.inputs();
    let palette = options.theme.palette();
    let status = Line::from(vec![
        Span::styled(
            format!(
                " permission={} gesture={} tracking={} mouse={} requests={} ",
                inputs.permission,
                inputs.gesture,
                inputs.is_tracking,
                inputs.using_mouse,
                app.requests()
            ),
            Style::default().fg(palette.dim),
        ),
    ]);
    let help = Line::from(Span::styled(
        " 1-5 gesture · t tracking · m mouse · Enter/click request · r revoke · q quit ",
        Style::default().fg(palette.dim),
    ));
    if screen.height > area.bottom() + 2 {
        let footer = Rect::new(screen.x, screen.bottom() - 2, screen.width, 2);
        frame.render_widget(Paragraph::new(vec![status, help]), footer);
    }
}

/// Apply a key press. Returns true when the user asked to quit.
fn handle_key_event(app: &mut DemoApp, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    log_debug(&format!(
        "key event: {:?} with modifiers: {:?}",
        key.code, key.modifiers
    ));
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(digit @ '1'..='5') => {
            let index = digit as usize - '1' as usize;
            app.set_gesture(GestureKind::ALL[index]);
        }
        KeyCode::Char('t') => app.toggle_tracking(),
        KeyCode::Char('m') => app.toggle_mouse(),
        KeyCode::Char('r') => app.revoke(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.click(Instant::now());
        }
        _ => {}
    }
    false
}

fn handle_mouse_event(app: &mut DemoApp, mouse: MouseEvent, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let button = app.view().button_position(area.width, area.height);
    // Off-card clicks become (0, 0), which no affordance contains.
    let (x, row) = card_coordinates(area, mouse.column, mouse.row).unwrap_or((0, 0));
    let outcome = app.click_at(button.as_ref(), x, row, Instant::now());
    log_debug(&format!(
        "mouse click at {},{} -> {outcome:?}",
        mouse.column, mouse.row
    ));
}
