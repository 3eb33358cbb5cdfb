use std::convert::Infallible;

use crate::frame::{Frame, WindowSnapshot};
use crate::geometry::{Insets, Rect, Size};
use crate::toolkit::Toolkit;

/// An in-process [`Toolkit`] with fixed metrics and no display.
///
/// Every character advances by the same width and every line is the same
/// height, so layouts are reproducible across machines. Presented frames are
/// recorded instead of drawn.
#[derive(Debug, Clone)]
pub struct HeadlessToolkit {
    screen: Rect,
    advance: f32,
    line_height: f32,
    insets: Insets,
    presented: Vec<WindowSnapshot>,
}

impl HeadlessToolkit {
    pub const DEFAULT_SCREEN: Rect = Rect {
        origin: crate::geometry::Point::ORIGIN,
        size: Size {
            width: 1920.0,
            height: 1080.0,
        },
    };

    pub fn new(screen: Rect) -> Self {
        Self {
            screen,
            advance: 8.0,
            line_height: 16.0,
            insets: Insets::NONE,
            presented: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, advance: f32, line_height: f32) -> Self {
        self.advance = advance;
        self.line_height = line_height;
        self
    }

    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn presented(&self) -> &[WindowSnapshot] {
        &self.presented
    }
}

impl Default for HeadlessToolkit {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCREEN)
    }
}

impl Toolkit for HeadlessToolkit {
    type Error = Infallible;

    fn screen_bounds(&self) -> Rect {
        self.screen
    }

    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&self, text: &str) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let lines = text.lines().count().max(1);
        let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        Size::new(
            widest as f32 * self.advance,
            lines as f32 * self.line_height,
        )
    }

    fn frame_insets(&self) -> Insets {
        self.insets
    }

    fn present(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        let mut snapshot = frame.snapshot();
        snapshot.visible = true;
        self.presented.push(snapshot);
        Ok(())
    }
}
