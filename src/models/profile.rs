#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UserProfile {
    pub(crate) full_name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) street_address: String,
    pub(crate) city: String,
    pub(crate) postal_code: String,
    pub(crate) country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NotificationPrefs {
    pub(crate) email: bool,
    pub(crate) sms: bool,
    pub(crate) transaction_alerts: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            transaction_alerts: true,
        }
    }
}
