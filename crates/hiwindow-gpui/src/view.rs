use gpui::{Context, Pixels, SharedString, Window, div, prelude::*, px, rgb};

/// Font settings shared by text measurement and rendering, so the packed
/// window is exactly as large as the drawn label.
#[derive(Debug, Clone)]
pub struct LabelStyle {
    pub family: SharedString,
    pub size: Pixels,
    pub line_height: Pixels,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            family: ".SystemUIFont".into(),
            size: px(16.),
            line_height: px(22.),
        }
    }
}

/// Root view of a shown frame: its labels, top to bottom.
pub struct GreetingView {
    labels: Vec<SharedString>,
    style: LabelStyle,
}

impl GreetingView {
    pub fn new(labels: Vec<SharedString>, style: LabelStyle) -> Self {
        Self { labels, style }
    }
}

impl Render for GreetingView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .bg(rgb(0x1e1e2e))
            .size_full()
            .text_color(rgb(0xcdd6f4))
            .font_family(self.style.family.clone())
            .text_size(self.style.size)
            .line_height(self.style.line_height)
            .whitespace_nowrap()
            .children(self.labels.iter().map(|text| div().child(text.clone())))
    }
}
