//! Remote widget synchronization for signed-in sessions
//!
//! The row store's widgets table holds the signed-in user's live dashboard
//! roster, one record per widget, listed in ascending `created_at` order
//! (layouts list newest-first; widgets list in creation order so the slot
//! sequence is stable).

use crate::format::StoredWidget;
use crate::session::UserId;
use crate::Result;
use widget_model::{Widget, WidgetId};

/// Client contract for the widgets table of the external row store
pub trait WidgetTableClient: Send + Sync {
    fn list_widgets(&self, user: &UserId) -> Result<Vec<StoredWidget>>;

    fn create_widget(&self, user: &UserId, widget: &StoredWidget) -> Result<()>;

    fn update_widget(&self, user: &UserId, id: &WidgetId, widget: &StoredWidget) -> Result<()>;

    fn delete_widget(&self, user: &UserId, id: &WidgetId) -> Result<()>;
}

/// Pushes and pulls the live widget roster for a signed-in user
pub struct WidgetSync<C: WidgetTableClient> {
    client: C,
    user: UserId,
}

impl<C: WidgetTableClient> WidgetSync<C> {
    pub fn new(client: C, user: UserId) -> Self {
        Self { client, user }
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// Fetch the user's widgets in creation order
    pub fn fetch(&self) -> Result<Vec<Widget>> {
        Ok(self
            .client
            .list_widgets(&self.user)?
            .into_iter()
            .map(Widget::from)
            .collect())
    }

    /// Reconcile the remote roster with the given widgets: stale records are
    /// deleted, existing ones updated, new ones created. A failure part-way
    /// leaves the remote side inconsistent only until the next push; the
    /// local widgets are the source of truth.
    pub fn push(&self, widgets: &[Widget]) -> Result<()> {
        let existing = self.client.list_widgets(&self.user)?;
        for stale in &existing {
            if !widgets.iter().any(|widget| widget.id == stale.id) {
                self.client.delete_widget(&self.user, &stale.id)?;
            }
        }
        for widget in widgets {
            let record = StoredWidget::from(widget);
            if existing.iter().any(|stored| stored.id == record.id) {
                self.client.update_widget(&self.user, &record.id, &record)?;
            } else {
                self.client.create_widget(&self.user, &record)?;
            }
        }
        Ok(())
    }
}
