use crate::geometry::Size;
use crate::toolkit::Toolkit;

/// A non-interactive widget that displays fixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Label(Label),
}

impl Widget {
    /// Minimum bounds needed to draw this widget without clipping.
    pub fn preferred_size<T: Toolkit + ?Sized>(&self, toolkit: &T) -> Size {
        match self {
            Widget::Label(label) => toolkit.measure_text(label.text()),
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Widget::Label(label) => Some(label),
        }
    }
}

impl From<Label> for Widget {
    fn from(label: Label) -> Self {
        Widget::Label(label)
    }
}
