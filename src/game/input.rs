use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::field::Side;
use crate::config::KeyBindings;

/// One discrete input per loop iteration during a match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSignal {
    None,
    Quit,
    LeftPaddleUp,
    LeftPaddleDown,
    RightPaddleUp,
    RightPaddleDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddleMove {
    Up,
    Down,
}

impl InputSignal {
    /// The movement this signal asks of the paddle on `side`, if any
    pub fn paddle_move(self, side: Side) -> Option<PaddleMove> {
        match (side, self) {
            (Side::Left, InputSignal::LeftPaddleUp) => Some(PaddleMove::Up),
            (Side::Left, InputSignal::LeftPaddleDown) => Some(PaddleMove::Down),
            (Side::Right, InputSignal::RightPaddleUp) => Some(PaddleMove::Up),
            (Side::Right, InputSignal::RightPaddleDown) => Some(PaddleMove::Down),
            _ => None,
        }
    }
}

/// Input while a menu screen is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSignal {
    None,
    Up,
    Down,
    Confirm,
    Back,
    Quit,
}

/// Parse a key name from the config file.
///
/// Accepts "Up", "Down", "Left", "Right", "Enter", "Esc", "Space", "Tab"
/// (any case) or a single character.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "space" => Some(KeyCode::Char(' ')),
        "tab" => Some(KeyCode::Tab),
        _ => None,
    }
}

fn key_matches(binding: KeyCode, pressed: KeyCode) -> bool {
    match (binding, pressed) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
        (a, b) => a == b,
    }
}

/// Key bindings resolved to crossterm key codes
#[derive(Debug, Clone)]
pub struct KeyMap {
    left_up: KeyCode,
    left_down: KeyCode,
    right_up: KeyCode,
    right_down: KeyCode,
    quit: KeyCode,
    menu_up: KeyCode,
    menu_down: KeyCode,
    menu_select: KeyCode,
    menu_back: KeyCode,
}

impl KeyMap {
    pub fn from_bindings(bindings: &KeyBindings) -> Result<Self> {
        let resolve = |field: &str, value: &str| {
            parse_key(value)
                .ok_or_else(|| anyhow!("unknown key {:?} for keybindings.{}", value, field))
        };

        Ok(Self {
            left_up: resolve("left_paddle_up", &bindings.left_paddle_up)?,
            left_down: resolve("left_paddle_down", &bindings.left_paddle_down)?,
            right_up: resolve("right_paddle_up", &bindings.right_paddle_up)?,
            right_down: resolve("right_paddle_down", &bindings.right_paddle_down)?,
            quit: resolve("quit", &bindings.quit)?,
            menu_up: resolve("menu_up", &bindings.menu_up)?,
            menu_down: resolve("menu_down", &bindings.menu_down)?,
            menu_select: resolve("menu_select", &bindings.menu_select)?,
            menu_back: resolve("menu_back", &bindings.menu_back)?,
        })
    }

    /// Map a key press during a match. Esc and Ctrl+C always quit.
    pub fn game_signal(&self, key: KeyEvent) -> InputSignal {
        if is_interrupt(&key) || key.code == KeyCode::Esc || key_matches(self.quit, key.code) {
            return InputSignal::Quit;
        }

        let code = key.code;
        if key_matches(self.left_up, code) {
            InputSignal::LeftPaddleUp
        } else if key_matches(self.left_down, code) {
            InputSignal::LeftPaddleDown
        } else if key_matches(self.right_up, code) {
            InputSignal::RightPaddleUp
        } else if key_matches(self.right_down, code) {
            InputSignal::RightPaddleDown
        } else {
            InputSignal::None
        }
    }

    /// Map a key press on a menu screen. Vim-style j/k and Space also work.
    pub fn menu_signal(&self, key: KeyEvent) -> MenuSignal {
        if is_interrupt(&key) || key_matches(self.quit, key.code) {
            return MenuSignal::Quit;
        }

        let code = key.code;
        if key_matches(self.menu_up, code) || key_matches(KeyCode::Char('k'), code) {
            MenuSignal::Up
        } else if key_matches(self.menu_down, code) || key_matches(KeyCode::Char('j'), code) {
            MenuSignal::Down
        } else if key_matches(self.menu_select, code) || code == KeyCode::Char(' ') {
            MenuSignal::Confirm
        } else if key_matches(self.menu_back, code) {
            MenuSignal::Back
        } else {
            MenuSignal::None
        }
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key_matches(KeyCode::Char('c'), key.code)
}

/// Source of one input signal per game loop iteration
pub trait InputSource {
    /// Non-blocking; returns [`InputSignal::None`] when nothing is pending
    fn poll(&mut self) -> io::Result<InputSignal>;
}

/// Reads the real keyboard through crossterm
pub struct Keyboard {
    keymap: KeyMap,
}

impl Keyboard {
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap }
    }
}

impl InputSource for Keyboard {
    fn poll(&mut self) -> io::Result<InputSignal> {
        // One key per frame; anything else stays queued for the next one
        if event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(self.keymap.game_signal(key));
                }
            }
        }

        Ok(InputSignal::None)
    }
}

/// Wait up to `timeout` for a menu key
pub fn poll_menu_signal(keymap: &KeyMap, timeout: Duration) -> io::Result<MenuSignal> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(keymap.menu_signal(key));
            }
        }
    }

    Ok(MenuSignal::None)
}

/// Raw terminal events behind a seam so the blocking waits can be scripted
pub trait EventQueue {
    /// Whether an event is ready within `timeout`
    fn pending(&mut self, timeout: Duration) -> io::Result<bool>;
    fn next_event(&mut self) -> io::Result<Event>;
}

/// The process's crossterm event stream
pub struct TerminalEvents;

impl EventQueue for TerminalEvents {
    fn pending(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Throw away every event that is already queued. Returns how many were dropped.
pub fn drain_pending<Q: EventQueue>(queue: &mut Q) -> io::Result<usize> {
    let mut dropped = 0;
    while queue.pending(Duration::ZERO)? {
        queue.next_event()?;
        dropped += 1;
    }
    Ok(dropped)
}

/// Block until a key is pressed. Keys typed before the call (held paddle
/// keys, the quit key's repeats) do not count.
pub fn wait_for_any_key<Q: EventQueue>(queue: &mut Q) -> io::Result<KeyEvent> {
    drain_pending(queue)?;
    loop {
        if let Event::Key(key) = queue.next_event()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}
