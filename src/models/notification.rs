#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotificationKind {
    Info,
    Warning,
    Error,
    Success,
    Update,
    Transaction,
    Security,
}

impl NotificationKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
            Self::Update => "update",
            Self::Transaction => "transaction",
            Self::Security => "security",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notification {
    pub(crate) id: String,
    pub(crate) kind: NotificationKind,
    pub(crate) title: String,
    pub(crate) description: String,
    /// Display text such as "5m ago" or "July 26, 2024".
    pub(crate) timestamp: String,
    pub(crate) is_read: bool,
}
