//! Motion: Pure state transitions for the sprite.
//!
//! [`next`] is total over its inputs. Anything that would leave the grid
//! wraps to the opposite edge of the axis being moved; the other axis is
//! never touched.

use super::glyph::Glyphs;
use super::screen::{Orientation, Screen};

/// A movement request for the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move right by one horizontal step.
    Forward,
    /// Move left by one horizontal step.
    Backward,
    /// Move up one row.
    Up,
    /// Move down one row.
    Down,
    /// Stay put.
    Idle,
}

impl Command {
    /// The orientation the sprite takes after this command.
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Forward => Orientation::Forward,
            Self::Backward => Orientation::Backward,
            Self::Up => Orientation::Up,
            Self::Down => Orientation::Down,
            Self::Idle => Orientation::Idle,
        }
    }
}

/// Horizontal step in columns: `round(max(w, h) / min(w, h))`.
///
/// Terminal cells are roughly twice as tall as they are wide, so moving
/// several columns per press keeps horizontal and vertical speed comparable.
/// Returns 0 for a degenerate grid.
pub fn step(width: u16, height: u16) -> u16 {
    let (hi, lo) = (u32::from(width.max(height)), u32::from(width.min(height)));
    if lo == 0 {
        return 0;
    }
    // Integer round-half-up of hi / lo.
    u16::try_from((hi * 2 + lo) / (lo * 2)).unwrap_or(u16::MAX)
}

/// Compute the screen that follows `screen` under `command`.
#[must_use]
pub fn next(screen: &Screen, command: Command, glyphs: &Glyphs) -> Screen {
    let mut out = screen.clone();
    let pos = &mut out.position;

    match command {
        Command::Forward => {
            let step = step(screen.width(), screen.height());
            let reach = u32::from(pos.x) + u32::from(screen.sprite_width()) + u32::from(step);
            if reach > u32::from(screen.width()) {
                pos.x = 0;
            } else {
                pos.x += step;
            }
        }
        Command::Backward => {
            let step = step(screen.width(), screen.height());
            pos.x = if pos.x < step {
                screen.max_x()
            } else {
                pos.x - step
            };
        }
        Command::Up => {
            pos.y = if pos.y == 0 {
                screen.height() - 1
            } else {
                pos.y - 1
            };
        }
        Command::Down => {
            pos.y = if pos.y + 1 >= screen.height() { 0 } else { pos.y + 1 };
        }
        Command::Idle => {}
    }

    out.orientation = command.orientation();
    glyphs
        .for_orientation(out.orientation)
        .clone_into(&mut out.sprite);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::Position;

    fn screen_80x24() -> (Screen, Glyphs) {
        let glyphs = Glyphs::default();
        (Screen::new(80, 24, &glyphs).unwrap(), glyphs)
    }

    #[test]
    fn test_step() {
        assert_eq!(step(80, 24), 3);
        assert_eq!(step(24, 80), 3);
        assert_eq!(step(100, 40), 3); // 2.5 rounds up
        assert_eq!(step(30, 30), 1);
        assert_eq!(step(0, 30), 0);
    }

    #[test]
    fn test_forward_once() {
        let (screen, glyphs) = screen_80x24();
        let moved = next(&screen, Command::Forward, &glyphs);
        assert_eq!(moved.position, Position::new(40, 12));
        assert_eq!(moved.orientation, Orientation::Forward);
        assert_eq!(moved.sprite, glyphs.forward);
    }

    #[test]
    fn test_backward_from_left_edge_wraps() {
        let (mut screen, glyphs) = screen_80x24();
        screen.position.x = 0;
        let moved = next(&screen, Command::Backward, &glyphs);
        assert_eq!(moved.position.x, 75);
        assert_eq!(moved.position.y, 12);
        assert_eq!(moved.sprite, glyphs.backward);
    }

    #[test]
    fn test_forward_past_right_edge_wraps() {
        let (mut screen, glyphs) = screen_80x24();
        screen.position.x = 73;
        let moved = next(&screen, Command::Forward, &glyphs);
        assert_eq!(moved.position.x, 0);

        screen.position.x = 72;
        let moved = next(&screen, Command::Forward, &glyphs);
        assert_eq!(moved.position.x, 75);
        assert!(moved.is_normalized());
    }

    #[test]
    fn test_forward_backward_inverse() {
        let (mut screen, glyphs) = screen_80x24();
        let step = step(80, 24);
        for x in 0..=screen.max_x() {
            screen.position.x = x;
            let there = next(&screen, Command::Forward, &glyphs);
            let back = next(&there, Command::Backward, &glyphs);
            let wrapped = there.position.x == 0 || back.position.x == screen.max_x();
            if !wrapped {
                assert!(back.position.x.abs_diff(x) <= step, "x = {x}");
            }
            assert!(back.is_normalized());
        }
    }

    #[test]
    fn test_up_full_cycle() {
        let (mut screen, glyphs) = screen_80x24();
        for y in 0..screen.height() {
            screen.position.y = y;
            let mut cur = screen.clone();
            for _ in 0..screen.height() {
                cur = next(&cur, Command::Up, &glyphs);
                assert!(cur.is_normalized());
            }
            assert_eq!(cur.position, screen.position);
        }
    }

    #[test]
    fn test_down_full_cycle() {
        let (mut screen, glyphs) = screen_80x24();
        for y in 0..screen.height() {
            screen.position.y = y;
            let mut cur = screen.clone();
            for _ in 0..screen.height() {
                cur = next(&cur, Command::Down, &glyphs);
                assert!(cur.is_normalized());
            }
            assert_eq!(cur.position, screen.position);
        }
    }

    #[test]
    fn test_vertical_edges() {
        let (mut screen, glyphs) = screen_80x24();
        screen.position.y = 0;
        assert_eq!(next(&screen, Command::Up, &glyphs).position.y, 23);
        screen.position.y = 23;
        assert_eq!(next(&screen, Command::Down, &glyphs).position.y, 0);
    }

    #[test]
    fn test_vertical_resets_glyph() {
        let (screen, glyphs) = screen_80x24();
        let fwd = next(&screen, Command::Forward, &glyphs);
        let up = next(&fwd, Command::Up, &glyphs);
        assert_eq!(up.sprite, glyphs.neutral);
        assert_eq!(up.position.x, fwd.position.x);
    }

    #[test]
    fn test_idle_never_moves() {
        let (screen, glyphs) = screen_80x24();
        let fwd = next(&screen, Command::Backward, &glyphs);
        let idle = next(&fwd, Command::Idle, &glyphs);
        assert_eq!(idle.position, fwd.position);
        assert_eq!(idle.orientation, Orientation::Idle);
        assert_eq!(idle.sprite, glyphs.neutral);
    }

    #[test]
    fn test_single_row_grid() {
        let glyphs = Glyphs::default();
        let screen = Screen::new(5, 1, &glyphs).unwrap();
        assert_eq!(next(&screen, Command::Up, &glyphs).position, screen.position);
        assert_eq!(next(&screen, Command::Down, &glyphs).position, screen.position);
        assert_eq!(next(&screen, Command::Forward, &glyphs).position.x, 0);
        assert_eq!(next(&screen, Command::Backward, &glyphs).position.x, 0);
    }
}
