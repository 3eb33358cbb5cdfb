use gpui::{
    App, Bounds, EmptyView, TextRun, TitlebarOptions, Window, WindowBounds, WindowKind,
    WindowOptions, black, font, point, prelude::*, px, size,
};
use hiwindow_core::{Frame, Greeting, Rect, ShownFrame, Size, Toolkit};
use tracing::{debug, warn};

use crate::error::{AppError, GpuiError};
use crate::view::{GreetingView, LabelStyle};

/// [`Toolkit`] backed by a running GPUI application.
///
/// Text is laid out by `window`'s text system, the same one that shapes the
/// label when it is drawn. `window` itself is never shown.
pub struct GpuiToolkit<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
    style: LabelStyle,
}

impl<'a> GpuiToolkit<'a> {
    pub fn new(window: &'a mut Window, cx: &'a mut App, style: LabelStyle) -> Self {
        Self { window, cx, style }
    }

    fn line_width(&self, line: &str) -> f32 {
        if line.is_empty() {
            return 0.0;
        }
        let run = TextRun {
            len: line.len(),
            font: font(self.style.family.clone()),
            color: black(),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let layout = self
            .window
            .text_system()
            .layout_line(line, self.style.size, &[run], None);
        f32::from(layout.width)
    }
}

/// Runs the setup sequence against GPUI and opens the resulting window.
///
/// Setup happens inside a hidden window so text can be shaped before the
/// visible one exists; the hidden window is removed afterwards.
pub fn open(cx: &mut App, greeting: &Greeting, style: LabelStyle) -> Result<ShownFrame, AppError> {
    let hidden = WindowOptions {
        focus: false,
        show: false,
        ..Default::default()
    };
    let measurer = cx
        .open_window(hidden, |_, cx| cx.new(|_| EmptyView))
        .map_err(|e| GpuiError::OpenWindow(format!("{e:#}")))?;

    let shown = measurer
        .update(cx, |_, window, cx| {
            let shown = {
                let mut toolkit = GpuiToolkit::new(window, cx, style);
                hiwindow_core::run_with(&mut toolkit, greeting)
            };
            window.remove_window();
            shown
        })
        .map_err(|e| GpuiError::OpenWindow(format!("{e:#}")))?;

    Ok(shown?)
}

/// Size of a label whose lines are `line_widths` wide. The width is rounded
/// up to a whole pixel so the shaped text never clips.
#[allow(clippy::cast_precision_loss)]
pub fn label_extent(line_widths: impl IntoIterator<Item = f32>, line_height: f32) -> Size {
    let mut width = 0.0_f32;
    let mut lines = 0_usize;
    for line_width in line_widths {
        width = width.max(line_width);
        lines += 1;
    }
    if lines == 0 {
        return Size::ZERO;
    }
    Size::new(width.ceil(), lines as f32 * line_height)
}

impl Toolkit for GpuiToolkit<'_> {
    type Error = GpuiError;

    fn screen_bounds(&self) -> Rect {
        match self.cx.primary_display() {
            Some(display) => {
                let bounds = display.bounds();
                Rect::from_xywh(
                    f32::from(bounds.origin.x),
                    f32::from(bounds.origin.y),
                    f32::from(bounds.size.width),
                    f32::from(bounds.size.height),
                )
            }
            None => {
                warn!("no primary display");
                Rect::default()
            }
        }
    }

    fn measure_text(&self, text: &str) -> Size {
        label_extent(
            text.lines().map(|line| self.line_width(line)),
            f32::from(self.style.line_height),
        )
    }

    fn present(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        let placed = frame.bounds().ok_or(GpuiError::Unplaced)?;
        let bounds = Bounds {
            origin: point(px(placed.origin.x), px(placed.origin.y)),
            size: size(px(placed.size.width), px(placed.size.height)),
        };
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(frame.title().to_owned().into()),
                ..Default::default()
            }),
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            ..Default::default()
        };

        let labels = frame
            .labels()
            .map(|label| label.text().to_owned().into())
            .collect();
        let style = self.style.clone();
        self.cx
            .open_window(options, |_, cx| {
                cx.new(|_| GreetingView::new(labels, style))
            })
            .map_err(|e| GpuiError::OpenWindow(format!("{e:#}")))?;

        debug!(title = frame.title(), "window opened");
        Ok(())
    }
}
