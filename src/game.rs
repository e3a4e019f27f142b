use std::thread::sleep;

use anyhow::Result;
use log::info;

use crate::config::{Config, Symbols};
use crate::rng::GameRng;
use crate::state::{GameState, Status};
use crate::term::{TermManager, frame_lines};
use crate::snake::Direction::{*, self};

use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};

const GAME_OVER_MSG: &str = "GAME OVER";
const WIN_MSG: &str = "YOU WIN";

/// What a batch of key presses asks for.
#[derive(Debug, Default, PartialEq, Eq)]
struct Input {
    turn: Option<Direction>,
    toggle_pause: bool,
    quit: bool,
}

pub struct SnakeGame {
    config: Config,
    symbols: Symbols,
    paused: bool,
    term: TermManager,
    rng: GameRng,
}

impl SnakeGame {
    pub fn new(config: Config) -> Self {
        let rng = GameRng::new(config.seed);
        SnakeGame { config, symbols: Symbols::default(), paused: false, term: TermManager::new(), rng }
    }

    /// Plays one session. The terminal is restored whether or not the loop fails.
    pub fn run(&mut self) -> Result<()> {
        let res = self.term.setup().and_then(|_| self.play());
        let restored = self.term.restore();

        let status = res?;
        restored?;

        match status {
            Some(Status::Won) => self.term.print_line(WIN_MSG)?,
            Some(_) => self.term.print_line(GAME_OVER_MSG)?,
            None => {},
        }

        Ok(())
    }

    /// Returns the final status, or `None` when the player quit.
    fn play(&mut self) -> Result<Option<Status>> {
        let (width, height) = (self.config.width as i16, self.config.height as i16);
        let mut state = GameState::init(width, height, self.symbols, &mut self.rng);

        self.render(&state)?;
        sleep(self.config.start_delay());

        while !state.is_terminated() {
            let input = read_input(&self.term.read_key_events_queue()?);

            if input.quit {
                info!("Quit by player with score {}", state.score());
                return Ok(None);
            }
            if input.toggle_pause {
                self.paused = !self.paused;
                info!("Paused: {}", self.paused);
            }

            if !self.paused {
                state.step(input.turn, &mut self.rng);
            }

            self.render(&state)?;
            sleep(self.config.tick());
        }

        info!("Session over: {:?}, score {}, length {}", state.status(), state.score(), state.snake().len());
        Ok(Some(state.status()))
    }

    fn render(&mut self, state: &GameState) -> Result<()> {
        let footer = if self.paused {
            "Paused (Esc to resume)".to_string()
        } else {
            format!("Score: {}", state.score())
        };

        self.term.draw_frame(&frame_lines(state.grid(), self.symbols.border, &footer))
    }
}

/// The last direction key wins; pause toggles cancel out in pairs.
fn read_input(events: &[KeyEvent]) -> Input {
    let mut input = Input::default();

    for key_ev in events {
        match key_ev {
            ev if is_quit(ev) => input.quit = true,
            KeyEvent { code, .. } => match code {
                KeyCode::Char('w') | KeyCode::Up => input.turn = Some(Up),
                KeyCode::Char('a') | KeyCode::Left => input.turn = Some(Left),
                KeyCode::Char('s') | KeyCode::Down => input.turn = Some(Down),
                KeyCode::Char('d') | KeyCode::Right => input.turn = Some(Right),
                KeyCode::Esc => input.toggle_pause = !input.toggle_pause,
                _ => {}
            }
        }
    }

    input
}

fn is_quit(ev: &KeyEvent) -> bool {
    match ev.code {
        KeyCode::Char('c') => ev.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn last_direction_wins() {
        let input = read_input(&[key(KeyCode::Char('w')), key(KeyCode::Left)]);
        assert_eq!(input.turn, Some(Left));
        assert!(!input.quit && !input.toggle_pause);
    }

    #[test]
    fn unknown_keys_ignored() {
        assert_eq!(read_input(&[key(KeyCode::Char('x')), key(KeyCode::Enter)]), Input::default());
        assert_eq!(read_input(&[]), Input::default());
    }

    #[test]
    fn quit_keys() {
        assert!(read_input(&[KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)]).quit);
        assert!(read_input(&[key(KeyCode::Char('q'))]).quit);
        assert!(!read_input(&[key(KeyCode::Char('c'))]).quit);
    }

    #[test]
    fn pause_toggles_pair_up() {
        assert!(read_input(&[key(KeyCode::Esc)]).toggle_pause);
        assert!(!read_input(&[key(KeyCode::Esc), key(KeyCode::Esc)]).toggle_pause);
    }
}
