//! Toast Notifications
//!
//! Transient messages shown in the corner of the page. The queue only tracks
//! ids and the leaving state; timers live in the UI layer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Toast content. `Markup` must already be escaped.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastBody {
    Text(String),
    Markup(String),
}

/// A message requested by the session, before it gets an id
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: ToastBody,
    pub severity: Severity,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            body: ToastBody::Text(message.into()),
            severity,
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success", message, Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new("Warning", message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message, Severity::Error)
    }

    pub fn markup(title: impl Into<String>, markup: String, severity: Severity) -> Self {
        Self {
            title: title.into(),
            body: ToastBody::Markup(markup),
            severity,
        }
    }

    /// Plain text of the body, for logs and tests
    pub fn message(&self) -> &str {
        match &self.body {
            ToastBody::Text(s) | ToastBody::Markup(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
    /// Exit animation running; removal follows shortly
    pub leaving: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            notice,
            leaving: false,
        });
        id
    }

    /// Start the exit animation. Returns false when the toast is already
    /// leaving or gone, so a second close does nothing.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(toast) if !toast.leaving => {
                toast.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Detach a toast. Idempotent.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
