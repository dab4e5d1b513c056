use crate::error::{Error, Result};
use crate::models::Notification;

#[derive(Debug, Clone, Default)]
pub(crate) struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub(crate) fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub(crate) fn items(&self) -> &[Notification] {
        &self.items
    }

    pub(crate) fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    pub(crate) fn mark_read(&mut self, id: &str) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::not_found("Notification", id))?;
        item.is_read = true;
        Ok(())
    }

    /// Returns how many notifications changed state.
    pub(crate) fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for n in self.items.iter_mut().filter(|n| !n.is_read) {
            n.is_read = true;
            changed += 1;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::NotificationKind;

    fn note(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.into(),
            kind: NotificationKind::Transaction,
            title: "Payment received".into(),
            description: "You received $500.00".into(),
            timestamp: "5m ago".into(),
            is_read,
        }
    }

    #[test]
    fn test_unread_count() {
        let center = NotificationCenter::new(vec![note("n1", false), note("n2", true), note("n3", false)]);
        assert_eq!(center.unread_count(), 2);
    }

    #[test]
    fn test_mark_read() {
        let mut center = NotificationCenter::new(vec![note("n1", false), note("n2", false)]);
        center.mark_read("n2").unwrap();
        assert_eq!(center.unread_count(), 1);
        assert!(center.items()[1].is_read);
        // Marking twice is harmless.
        center.mark_read("n2").unwrap();
        assert_eq!(center.unread_count(), 1);
    }

    #[test]
    fn test_mark_read_unknown_is_not_found() {
        let mut center = NotificationCenter::new(vec![note("n1", false)]);
        assert!(matches!(center.mark_read("n9"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_mark_all_read() {
        let mut center = NotificationCenter::new(vec![note("n1", false), note("n2", true), note("n3", false)]);
        assert_eq!(center.mark_all_read(), 2);
        assert_eq!(center.unread_count(), 0);
        assert_eq!(center.mark_all_read(), 0);
    }
}
