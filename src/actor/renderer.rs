//! Renderer Actor: Dedicated thread for drawing frames.
//!
//! This actor owns the output sink. It receives a [`Screen`] by value for
//! every frame and repaints the whole grid in place: cursor back to the
//! previous frame's top-left, then every row. There is no diffing, so a
//! stale glyph can never survive a frame.

use super::messages::RenderCommand;
use crate::error::{Error, Result};
use crate::sprite::Screen;
use crate::terminal::OutputSink;
use crossbeam_channel::Receiver;
use std::io;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Last render time in microseconds.
    pub last_render_us: u64,
}

/// One complete frame: `height` rows, each exactly `width` columns.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    rows: Vec<String>,
}

impl Frame {
    /// Create an empty frame.
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build the frame for `screen`, reusing row allocations.
    pub fn compose(&mut self, screen: &Screen) {
        let width = usize::from(screen.width());
        let height = usize::from(screen.height());
        let sprite_row = usize::from(screen.position.y);

        self.rows.resize_with(height, String::new);
        for (y, row) in self.rows.iter_mut().enumerate() {
            row.clear();
            if y == sprite_row {
                let x = usize::from(screen.position.x);
                let glyph = screen.sprite.as_str();
                let pad = width.saturating_sub(x + glyph.width());
                row.extend(std::iter::repeat(' ').take(x));
                row.push_str(glyph);
                row.extend(std::iter::repeat(' ').take(pad));
            } else {
                row.extend(std::iter::repeat(' ').take(width));
            }
        }
    }

    /// Compose a fresh frame.
    pub fn of(screen: &Screen) -> Self {
        let mut frame = Self::new();
        frame.compose(screen);
        frame
    }

    /// The rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Draws frames to an [`OutputSink`].
#[derive(Debug)]
pub struct Renderer<S: OutputSink> {
    sink: S,
    frame: Frame,
    stats: RenderStats,
}

impl<S: OutputSink> Renderer<S> {
    /// Create a renderer writing to `sink`.
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            frame: Frame::new(),
            stats: RenderStats {
                frames: 0,
                last_render_us: 0,
            },
        }
    }

    /// Repaint the whole grid for `screen`.
    ///
    /// The cursor first moves up `height` rows and left `width` columns,
    /// which is where the previous frame started (the terminal clamps the
    /// move for the very first frame).
    pub fn draw(&mut self, screen: &Screen) -> io::Result<()> {
        let start = Instant::now();
        self.frame.compose(screen);

        self.sink
            .move_cursor(-i32::from(screen.height()), -i32::from(screen.width()))?;
        for row in self.frame.rows() {
            self.sink.write_line(row)?;
        }
        self.sink.flush()?;

        self.stats.frames += 1;
        self.stats.last_render_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        Ok(())
    }

    /// Statistics so far.
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Get a reference to the sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}

/// Renderer actor that handles terminal output.
#[derive(Debug)]
pub struct RendererActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<RenderStats>>,
}

impl RendererActor {
    /// Spawn the renderer actor thread.
    ///
    /// # Arguments
    ///
    /// * `receiver` - Channel to receive render commands from.
    /// * `sink` - Where frames are written.
    pub fn spawn<S>(receiver: Receiver<RenderCommand>, sink: S) -> Result<Self>
    where
        S: OutputSink + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("tie-render".to_string())
            .spawn(move || Self::run_loop(&receiver, Renderer::new(sink)))
            .map_err(|source| Error::Spawn {
                name: "render",
                source,
            })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Wait for the render thread to finish and collect its statistics.
    ///
    /// The thread exits on [`RenderCommand::Shutdown`] or when every sender
    /// is dropped.
    pub fn join(mut self) -> RenderStats {
        self.handle
            .take()
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default()
    }

    /// Main render loop.
    fn run_loop<S: OutputSink>(
        receiver: &Receiver<RenderCommand>,
        mut renderer: Renderer<S>,
    ) -> RenderStats {
        for command in receiver {
            match command {
                RenderCommand::Draw(screen) => {
                    if let Err(e) = renderer.draw(&screen) {
                        tracing::error!(error = %e, "render thread error");
                        break;
                    }
                }
                RenderCommand::Shutdown => break,
            }
        }

        tracing::debug!(frames = renderer.stats().frames, "render thread stopped");
        renderer.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::{next, Command, Glyphs};
    use crate::terminal::{OutputBuffer, TerminalOutput};
    use crossbeam_channel::unbounded;

    fn screen(width: u16, height: u16) -> (Screen, Glyphs) {
        let glyphs = Glyphs::default();
        (Screen::new(width, height, &glyphs).unwrap(), glyphs)
    }

    fn assert_frame_invariant(frame: &Frame, screen: &Screen) {
        assert_eq!(frame.rows().len(), usize::from(screen.height()));
        let mut sprite_rows = 0;
        for row in frame.rows() {
            assert_eq!(row.width(), usize::from(screen.width()));
            if row.chars().any(|c| c != ' ') {
                sprite_rows += 1;
            }
        }
        assert_eq!(sprite_rows, 1);
    }

    #[test]
    fn test_frame_sprite_row() {
        let (screen, _) = screen(20, 4);
        let frame = Frame::of(&screen);
        // (20 - 5) / 2 = 7, 4 / 2 = 2
        assert_eq!(frame.rows()[2], format!("{}|-o-|{}", " ".repeat(7), " ".repeat(8)));
        assert_eq!(frame.rows()[0], " ".repeat(20));
        assert_frame_invariant(&frame, &screen);
    }

    #[test]
    fn test_frame_invariant_everywhere() {
        let (mut screen, glyphs) = screen(13, 5);
        for command in [Command::Forward, Command::Backward, Command::Up, Command::Down] {
            for _ in 0..20 {
                screen = next(&screen, command, &glyphs);
                assert_frame_invariant(&Frame::of(&screen), &screen);
            }
        }
    }

    #[test]
    fn test_frame_at_right_edge_has_no_padding() {
        let (mut screen, _) = screen(10, 1);
        screen.position.x = screen.max_x();
        let frame = Frame::of(&screen);
        assert!(frame.rows()[0].ends_with("|-o-|"));
    }

    #[test]
    fn test_compose_reuses_rows() {
        let (mut screen, glyphs) = screen(10, 3);
        let mut frame = Frame::new();
        frame.compose(&screen);
        screen = next(&screen, Command::Down, &glyphs);
        frame.compose(&screen);
        assert_eq!(frame.rows()[1], " ".repeat(10));
        assert!(frame.rows()[2].contains("|-o-|"));
    }

    #[test]
    fn test_draw_moves_cursor_then_writes_rows() {
        let (screen, _) = screen(6, 2);
        let mut renderer = Renderer::new(OutputBuffer::new());
        renderer.draw(&screen).unwrap();

        let out = String::from_utf8(renderer.sink().as_bytes().to_vec()).unwrap();
        assert_eq!(out, "\x1b[2A\x1b[6D      \r\n|-o-| \r\n");
        assert_eq!(renderer.stats().frames, 1);
    }

    #[test]
    fn test_draw_does_not_touch_screen() {
        let (screen, _) = screen(30, 10);
        let before = screen.clone();
        let mut renderer = Renderer::new(OutputBuffer::new());
        renderer.draw(&screen).unwrap();
        assert_eq!(screen, before);
    }

    #[test]
    fn test_actor_draws_until_shutdown() {
        let (tx, rx) = unbounded();
        let actor = RendererActor::spawn(rx, TerminalOutput::new(io::sink())).unwrap();

        let (screen, _) = screen(10, 3);
        tx.send(RenderCommand::Draw(screen.clone())).unwrap();
        tx.send(RenderCommand::Draw(screen.clone())).unwrap();
        tx.send(RenderCommand::Shutdown).unwrap();
        // Ignored: the thread has already stopped
        let _ = tx.send(RenderCommand::Draw(screen));

        assert_eq!(actor.join().frames, 2);
    }
}
