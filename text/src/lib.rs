//! Terminal front-end: redraws the whole grid every tick and polls the
//! keyboard between ticks.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use shared::config::TEXT_RATE_STEP;
use shared::{Command, Flow, Simulation};

pub mod render;

/// Key binding for the terminal. Speed keys move the rate by [`TEXT_RATE_STEP`].
pub fn command_for_key(event: &KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match event.code {
        KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Char('r' | 'R') => Some(Command::Reset),
        KeyCode::Char('c' | 'C') => Some(Command::Clear),
        KeyCode::Char('+' | '=') => Some(Command::Faster),
        KeyCode::Char('-') => Some(Command::Slower),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Command::Quit),
        _ => None,
    }
}

/// Raw mode plus alternate screen for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on Drop restores the terminal, even if the rest fails
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        execute!(io::stdout(), cursor::Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
    }
}

fn draw(out: &mut impl Write, simulation: &Simulation) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        terminal::Clear(ClearType::All),
        Print(render::frame(simulation))
    )?;
    out.flush()
}

/// Runs the text front-end until the user quits.
pub fn run(mut simulation: Simulation) -> io::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    loop {
        draw(&mut stdout, &simulation)?;

        // Wait out the tick interval, reacting to keys as they arrive
        let deadline = Instant::now() + simulation.tick_rate().interval();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(command) = command_for_key(&key) else {
                continue;
            };
            if simulation.apply(command, TEXT_RATE_STEP) == Flow::Exit {
                log::trace!("quit at generation {}", simulation.generation());
                return Ok(());
            }
            draw(&mut stdout, &simulation)?;
        }

        simulation.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key(&press(KeyCode::Char(' '))), Some(Command::TogglePause));
        assert_eq!(command_for_key(&press(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(command_for_key(&press(KeyCode::Char('R'))), Some(Command::Reset));
        assert_eq!(command_for_key(&press(KeyCode::Char('c'))), Some(Command::Clear));
        assert_eq!(command_for_key(&press(KeyCode::Char('+'))), Some(Command::Faster));
        assert_eq!(command_for_key(&press(KeyCode::Char('='))), Some(Command::Faster));
        assert_eq!(command_for_key(&press(KeyCode::Char('-'))), Some(Command::Slower));
        assert_eq!(command_for_key(&press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for_key(&press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for_key(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits_instead_of_clearing() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(&event), Some(Command::Quit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let event = KeyEvent::new_with_kind_and_state(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(command_for_key(&event), None);
    }
}
