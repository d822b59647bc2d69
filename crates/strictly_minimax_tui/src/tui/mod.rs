//! Terminal UI for Strictly Minimax

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use strictly_minimax::{CELL_COUNT, GameController, Input};
use tracing::{debug, error, info, instrument};

use crate::config::GameConfig;
use app::App;
use input::KeyAction;

/// Run the TUI client
pub fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting Strictly Minimax TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = GameController::new(App::new(config));
    let res = run_game(&mut terminal, &mut game);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Draws, waits for one terminal event, and feeds it to the controller.
#[instrument(skip_all)]
fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut GameController<App>,
) -> Result<()> {
    let mut cell_areas = [Rect::default(); CELL_COUNT];

    loop {
        terminal.draw(|frame| cell_areas = ui::draw(frame, game.renderer()))?;

        let input = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match input::interpret_key(key.code, game.renderer().cursor()) {
                    KeyAction::Cursor(cursor) => {
                        game.renderer_mut().set_cursor(cursor);
                        None
                    }
                    KeyAction::Game(input) => Some(input),
                    KeyAction::Ignore => None,
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => input::cell_at(&cell_areas, column, row).map(Input::CellSelected),
            _ => None,
        };

        let Some(input) = input else {
            continue;
        };
        debug!(?input, "Dispatching input");
        if let Input::CellSelected(index) = input {
            game.renderer_mut().set_cursor(index);
        }
        if !game.handle(input)? {
            info!("User quit");
            return Ok(());
        }
    }
}
