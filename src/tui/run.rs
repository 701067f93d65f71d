//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key presses
//! - Ticker thread: sends a frame tick so animations advance without input
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::state::{Action, App, AppEvent};
use super::update::{handle_action, handle_tick};
use super::view::render;

/// Interval between animation frames.
const TICK: Duration = Duration::from_millis(33);

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // AltGr arrives as Ctrl+Alt on Windows; the character is what was typed
    if let KeyCode::Char(c) = key.code {
        if key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Some(Action::Type(c));
        }
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearName),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(Action::Greet),
        KeyCode::Tab => Some(Action::Toggle),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => Some(Action::Type(c)),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key presses to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // releases, mouse, resize: the next tick redraws anyway
                Err(e) => {
                    tracing::warn!("key reader stopped: {}", e);
                    let _ = tx.send(AppEvent::InputClosed);
                    break;
                }
            }
        }
    });
}

/// Spawn a thread that sends a tick every frame until the receiver goes away.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            thread::sleep(TICK);
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the greeting screen until the user quits.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();
    tracing::info!("greeting screen started");

    let (tx, rx) = mpsc::channel::<AppEvent>();

    spawn_key_reader(tx.clone());
    spawn_ticker(tx);

    loop {
        terminal.draw(|frame| render(&app, Instant::now(), frame))?;

        if app.should_quit {
            break;
        }

        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        dispatch(&mut app, event, Instant::now());
    }

    restore_terminal()?;
    tracing::info!("greeting screen closed");
    Ok(())
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Route one channel event to its handler.
fn dispatch(app: &mut App, event: AppEvent, now: Instant) {
    match event {
        AppEvent::Key(key) => {
            if let Some(action) = map_key(key) {
                handle_action(app, &action, now);
            }
        }
        AppEvent::Tick => handle_tick(app, now),
        AppEvent::InputClosed => {
            // Nothing can quit the screen without input
            app.should_quit = true;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn ctrl_u_clears_name() {
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::ClearName));
    }

    #[test]
    fn esc_maps_to_quit() {
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn enter_greets_and_tab_toggles() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::Greet));
        assert_eq!(map_key(key(KeyCode::Tab)), Some(Action::Toggle));
    }

    #[test]
    fn printable_keys_type_into_name() {
        assert_eq!(map_key(key(KeyCode::Char('m'))), Some(Action::Type('m')));
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Action::Type(' ')));
        // q is a letter here, not a quit key
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Type('q')));
    }

    #[test]
    fn shifted_letters_type_uppercase() {
        let key = KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT);
        assert_eq!(map_key(key), Some(Action::Type('M')));
    }

    #[test]
    fn altgr_characters_type_into_name() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for c in ['@', '{', '€'] {
            let key = KeyEvent::new(KeyCode::Char(c), altgr);
            assert_eq!(map_key(key), Some(Action::Type(c)));
        }
    }

    #[test]
    fn closed_input_quits() {
        let mut app = App::new();
        dispatch(&mut app, AppEvent::InputClosed, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn key_events_reach_the_controller() {
        let mut app = App::new();
        let now = Instant::now();
        dispatch(&mut app, AppEvent::Key(key(KeyCode::Char('M'))), now);
        dispatch(&mut app, AppEvent::Key(key(KeyCode::Enter)), now);
        dispatch(&mut app, AppEvent::Tick, now);
        assert_eq!(app.greeting.message(), "Hello M!");
        assert!(!app.should_quit);
    }

    #[test]
    fn backspace_maps_to_backspace() {
        assert_eq!(map_key(key(KeyCode::Backspace)), Some(Action::Backspace));
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(map_key(key(KeyCode::F(5))), None);
        assert_eq!(map_key(key(KeyCode::Up)), None);
        let alt = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(map_key(alt), None);
        let ctrl = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl), None);
    }
}
