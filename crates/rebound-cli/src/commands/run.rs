use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Margin},
    Terminal,
};

use rebound_core::AppConfig;
use rebound_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{BouncyListWidget, StatusBarWidget},
    App,
};

pub fn run(config: &AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Rebound"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config);

    // Restore terminal even if the loop failed
    let restored = first_error([
        disable_raw_mode(),
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ),
        terminal.show_cursor(),
    ]);

    result?;
    restored?;
    Ok(())
}

/// First failure among steps that have all already run
fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config);
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    tracing::info!(
        fling = config.overscroll.fling_translation,
        pull = config.overscroll.overscroll_translation,
        "Starting bounce demo"
    );

    while !app.should_quit {
        // Advance springs by real elapsed time on every pass
        app.on_tick(Instant::now());

        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: list + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(size);

            let list_inner = main_layout[0].inner(Margin::new(1, 1));
            app.resize(list_inner.width, list_inner.height);

            BouncyListWidget::render(frame, main_layout[0], &app);
            StatusBarWidget::render(frame, main_layout[1], &app);
        })?;

        if let Some(event) = event_handler.next(app.is_animating())? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => app.handle_action(handle_key_event(key), now),
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse, now),
                // The next draw picks up the new size
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }
    }

    Ok(())
}
