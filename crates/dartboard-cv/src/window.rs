//! HighGUI window with click capture

use crate::traits::Screen;
use crate::Result;
use anyhow::Context;
use dartboard_core::Point;
use opencv::{core::Mat, highgui};
use std::sync::{Arc, Mutex};

const KEY_ESCAPE: i32 = 27;

/// A single named window. Left clicks are queued by the mouse callback and
/// drained by the game loop between ticks.
pub struct GameWindow {
    name: String,
    clicks: Arc<Mutex<Vec<Point>>>,
}

impl GameWindow {
    pub fn open(name: &str) -> Result<Self> {
        highgui::named_window(name, highgui::WINDOW_AUTOSIZE)
            .with_context(|| format!("Failed to create window '{}'", name))?;

        let clicks = Arc::new(Mutex::new(Vec::new()));
        let queue = Arc::clone(&clicks);
        highgui::set_mouse_callback(
            name,
            Some(Box::new(move |event, x, y, _flags| {
                if event == highgui::EVENT_LBUTTONDOWN {
                    if let Ok(mut pending) = queue.lock() {
                        pending.push(Point::new(x, y));
                    }
                }
            })),
        )
        .context("Failed to install mouse callback")?;

        Ok(Self {
            name: name.to_string(),
            clicks,
        })
    }
}

impl Screen for GameWindow {
    fn show(&self, image: &Mat) -> Result<()> {
        highgui::imshow(&self.name, image)?;
        Ok(())
    }

    /// `q`, Esc, or the window was closed.
    fn poll_quit(&self, delay_ms: i32) -> Result<bool> {
        let key = highgui::wait_key(delay_ms)?;
        if is_quit_key(key) {
            return Ok(true);
        }

        let visible = highgui::get_window_property(&self.name, highgui::WND_PROP_VISIBLE)?;
        Ok(is_closed(visible))
    }

    fn take_clicks(&self) -> Vec<Point> {
        match self.clicks.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        }
    }
}

impl Drop for GameWindow {
    fn drop(&mut self) {
        let _ = highgui::destroy_window(&self.name);
    }
}

fn is_quit_key(key: i32) -> bool {
    key >= 0 && ((key & 0xFF) == b'q' as i32 || (key & 0xFF) == KEY_ESCAPE)
}

/// A destroyed window reports -1 on GTK and Win32, a hidden one 0.
fn is_closed(visible: f64) -> bool {
    visible < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destroyed_or_hidden_window_is_closed() -> Result<()> {
        assert!(is_closed(-1.0));
        assert!(is_closed(0.0));
        assert!(is_closed(0.5));
        assert!(!is_closed(1.0));
        Ok(())
    }

    #[test]
    fn test_quit_keys() -> Result<()> {
        assert!(is_quit_key(b'q' as i32));
        assert!(is_quit_key(KEY_ESCAPE));
        // Some backends set modifier bits above the low byte.
        assert!(is_quit_key(0x10_0000 | b'q' as i32));
        assert!(!is_quit_key(-1));
        assert!(!is_quit_key(b'x' as i32));
        Ok(())
    }
}
