//! Optimistic in-place editing of table cells
//!
//! Every editable cell keeps the last value the server accepted plus an
//! optional local draft. Committing sends the draft; the server's answer
//! becomes the new committed value, a failure drops the draft so the cell
//! shows the pre-edit value again. Cells never coordinate: two fields of the
//! same row save independently and the last write per field wins.

use std::fmt::Display;
use std::future::Future;

use opsdesk_domain::{DeliveryInterval, ListItem, ListItemPatch, OpsDeskError};
use tracing::{debug, warn};

use crate::delivery_list_ports::ListItemWriter;

/// Result of committing a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome<E> {
    /// No draft, or the draft equals the committed value; nothing was sent.
    Unchanged,
    /// The server accepted the edit.
    Saved,
    /// The save failed and the cell went back to its pre-edit value.
    Reverted(E),
}

impl<E> CommitOutcome<E> {
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableCell<T> {
    committed: T,
    draft: Option<T>,
}

impl<T: Clone + PartialEq> EditableCell<T> {
    pub const fn new(value: T) -> Self {
        Self { committed: value, draft: None }
    }

    /// What the cell currently displays.
    pub fn value(&self) -> &T {
        self.draft.as_ref().unwrap_or(&self.committed)
    }

    /// Last value the server accepted.
    pub const fn committed(&self) -> &T {
        &self.committed
    }

    pub fn edit(&mut self, value: T) {
        self.draft = Some(value);
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    pub fn is_dirty(&self) -> bool {
        self.draft.as_ref().is_some_and(|draft| *draft != self.committed)
    }

    /// Send the draft through `save` and settle the cell on the outcome.
    ///
    /// `save` resolves to the value the server accepted, which may differ from
    /// the draft (e.g. clamped quantities).
    pub async fn commit<F, Fut, E>(&mut self, save: F) -> CommitOutcome<E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        if !self.is_dirty() {
            self.draft = None;
            return CommitOutcome::Unchanged;
        }
        let Some(draft) = self.draft.clone() else {
            return CommitOutcome::Unchanged;
        };

        match save(draft).await {
            Ok(accepted) => {
                self.committed = accepted;
                self.draft = None;
                CommitOutcome::Saved
            }
            Err(err) => {
                warn!(error = %err, "cell update failed; reverting to previous value");
                self.draft = None;
                CommitOutcome::Reverted(err)
            }
        }
    }
}

/// Editable state of one delivery-list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemRow {
    pub list_id: String,
    /// Row id; the PATCH target.
    pub item_id: String,
    /// Catalog item the row refers to.
    pub catalog_item_id: String,
    pub item_name: Option<String>,
    pub quantity: EditableCell<u32>,
    pub comment: EditableCell<Option<String>>,
    pub interval: EditableCell<Option<DeliveryInterval>>,
    pub marked: EditableCell<bool>,
}

impl ListItemRow {
    pub fn from_item(item: &ListItem) -> Self {
        Self {
            list_id: item.list_id.clone(),
            item_id: item.id.clone(),
            catalog_item_id: item.item_id.clone(),
            item_name: item.item_name.clone(),
            quantity: EditableCell::new(item.quantity),
            comment: EditableCell::new(item.comment.clone()),
            interval: EditableCell::new(item.interval),
            marked: EditableCell::new(item.marked),
        }
    }

    pub async fn save_quantity(
        &mut self,
        writer: &dyn ListItemWriter,
    ) -> CommitOutcome<OpsDeskError> {
        let (list_id, item_id) = (&self.list_id, &self.item_id);
        self.quantity
            .commit(|quantity| async move {
                let patch = ListItemPatch { quantity: Some(quantity), ..Default::default() };
                writer.update_list_item(list_id, item_id, patch).await.map(|item| item.quantity)
            })
            .await
    }

    /// Blank comments are sent as an empty string and stored as `None`.
    pub async fn save_comment(&mut self, writer: &dyn ListItemWriter) -> CommitOutcome<OpsDeskError> {
        let (list_id, item_id) = (&self.list_id, &self.item_id);
        self.comment
            .commit(|comment| async move {
                let text = comment.unwrap_or_default().trim().to_string();
                let patch = ListItemPatch { comment: Some(text), ..Default::default() };
                writer
                    .update_list_item(list_id, item_id, patch)
                    .await
                    .map(|item| item.comment.filter(|c| !c.trim().is_empty()))
            })
            .await
    }

    /// Clearing the cadence sends an explicit `null`.
    pub async fn save_interval(
        &mut self,
        writer: &dyn ListItemWriter,
    ) -> CommitOutcome<OpsDeskError> {
        let (list_id, item_id) = (&self.list_id, &self.item_id);
        self.interval
            .commit(|interval| async move {
                let patch = ListItemPatch { interval: Some(interval), ..Default::default() };
                writer.update_list_item(list_id, item_id, patch).await.map(|item| item.interval)
            })
            .await
    }

    /// Toggle the marker checkbox and save it right away.
    pub async fn toggle_marked(&mut self, writer: &dyn ListItemWriter) -> CommitOutcome<OpsDeskError> {
        let next = !*self.marked.value();
        debug!(item_id = %self.item_id, marked = next, "toggling list item marker");
        self.marked.edit(next);
        let (list_id, item_id) = (&self.list_id, &self.item_id);
        self.marked
            .commit(|marked| async move {
                let patch = ListItemPatch { marked: Some(marked), ..Default::default() };
                writer.update_list_item(list_id, item_id, patch).await.map(|item| item.marked)
            })
            .await
    }

    /// Row as last accepted by the server.
    pub fn committed_item(&self) -> ListItem {
        ListItem {
            id: self.item_id.clone(),
            list_id: self.list_id.clone(),
            item_id: self.catalog_item_id.clone(),
            item_name: self.item_name.clone(),
            quantity: *self.quantity.committed(),
            comment: self.comment.committed().clone(),
            interval: *self.interval.committed(),
            marked: *self.marked.committed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use opsdesk_domain::Result;

    use super::*;

    /// Echoes patches back onto a stored row, or fails every call.
    struct FakeWriter {
        row: Mutex<ListItem>,
        fail: bool,
        patches: Mutex<Vec<ListItemPatch>>,
    }

    impl FakeWriter {
        fn new(row: ListItem, fail: bool) -> Self {
            Self { row: Mutex::new(row), fail, patches: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl ListItemWriter for FakeWriter {
        async fn update_list_item(
            &self,
            _list_id: &str,
            _item_id: &str,
            patch: ListItemPatch,
        ) -> Result<ListItem> {
            self.patches.lock().unwrap().push(patch.clone());
            if self.fail {
                return Err(OpsDeskError::Server("update rejected".into()));
            }
            let mut row = self.row.lock().unwrap();
            if let Some(quantity) = patch.quantity {
                row.quantity = quantity.min(1000);
            }
            if let Some(comment) = patch.comment {
                row.comment = Some(comment);
            }
            if let Some(interval) = patch.interval {
                row.interval = interval;
            }
            if let Some(marked) = patch.marked {
                row.marked = marked;
            }
            Ok(row.clone())
        }
    }

    fn row() -> ListItem {
        ListItem {
            id: "li-1".into(),
            list_id: "dl-1".into(),
            item_id: "it-1".into(),
            item_name: Some("Bracket".into()),
            quantity: 10,
            comment: None,
            interval: None,
            marked: false,
        }
    }

    #[test]
    fn committed_item_round_trips_the_row() {
        assert_eq!(ListItemRow::from_item(&row()).committed_item(), row());
    }

    #[tokio::test]
    async fn saved_value_comes_from_server() {
        let writer = FakeWriter::new(row(), false);
        let mut state = ListItemRow::from_item(&row());

        state.quantity.edit(5000);
        let outcome = state.save_quantity(&writer).await;

        assert!(outcome.is_saved());
        assert_eq!(*state.quantity.value(), 1000);
        assert!(!state.quantity.is_dirty());
    }

    #[tokio::test]
    async fn failure_reverts_to_pre_edit_value() {
        let writer = FakeWriter::new(row(), true);
        let mut state = ListItemRow::from_item(&row());

        state.quantity.edit(42);
        assert_eq!(*state.quantity.value(), 42);

        let outcome = state.save_quantity(&writer).await;
        assert!(matches!(outcome, CommitOutcome::Reverted(OpsDeskError::Server(_))));
        assert_eq!(*state.quantity.value(), 10);
    }

    #[tokio::test]
    async fn unchanged_draft_is_not_sent() {
        let writer = FakeWriter::new(row(), false);
        let mut state = ListItemRow::from_item(&row());

        state.quantity.edit(10);
        assert_eq!(state.save_quantity(&writer).await, CommitOutcome::Unchanged);
        assert!(writer.patches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn cells_save_independently() {
        let writer = FakeWriter::new(row(), false);
        let mut state = ListItemRow::from_item(&row());

        state.comment.edit(Some("  urgent  ".into()));
        state.interval.edit(Some(DeliveryInterval::Weekly));

        assert!(state.save_comment(&writer).await.is_saved());
        assert_eq!(state.comment.value().as_deref(), Some("urgent"));
        assert!(state.interval.is_dirty());

        assert!(state.save_interval(&writer).await.is_saved());
        let patches = writer.patches.lock().unwrap();
        assert_eq!(patches.len(), 2);
        assert_eq!(patches[0], ListItemPatch { comment: Some("urgent".into()), ..Default::default() });
        assert_eq!(
            patches[1],
            ListItemPatch { interval: Some(Some(DeliveryInterval::Weekly)), ..Default::default() }
        );
    }

    #[tokio::test]
    async fn clearing_interval_is_sent_and_adopted() {
        let weekly = ListItem { interval: Some(DeliveryInterval::Weekly), ..row() };
        let writer = FakeWriter::new(weekly.clone(), false);
        let mut state = ListItemRow::from_item(&weekly);

        state.interval.edit(None);
        assert!(state.save_interval(&writer).await.is_saved());

        assert_eq!(*state.interval.committed(), None);
        let patches = writer.patches.lock().unwrap();
        assert_eq!(patches[0], ListItemPatch { interval: Some(None), ..Default::default() });
    }

    #[tokio::test]
    async fn toggle_marked_flips_and_persists() {
        let writer = FakeWriter::new(row(), false);
        let mut state = ListItemRow::from_item(&row());

        assert!(state.toggle_marked(&writer).await.is_saved());
        assert!(*state.marked.committed());
        assert!(state.committed_item().marked);
    }

    #[tokio::test]
    async fn failed_toggle_keeps_old_marker() {
        let writer = FakeWriter::new(row(), true);
        let mut state = ListItemRow::from_item(&row());

        let outcome = state.toggle_marked(&writer).await;
        assert!(matches!(outcome, CommitOutcome::Reverted(_)));
        assert!(!*state.marked.value());
    }
}
