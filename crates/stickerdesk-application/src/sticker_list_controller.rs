//! Sticker list use case.
//!
//! This module provides the `StickerListController`, which keeps an in-memory
//! copy of the backend's sticker records in sync through fetch, upload and
//! delete, and exposes it one page at a time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use stickerdesk_core::config::ClientConfig;
use stickerdesk_core::notification::{Notice, Notifier};
use stickerdesk_core::pagination::ListState;
use stickerdesk_core::sticker::{StickerApi, StickerRecord, UploadFile};
use stickerdesk_core::{DeskError, Result};
use tokio::sync::RwLock;

pub const MSG_SELECT_FILE: &str = "Please select a file before uploading.";
pub const MSG_UPLOADED: &str = "Successfully Uploaded";
pub const MSG_UPLOAD_FAILED: &str = "Failed to upload sticker";
pub const MSG_DELETED: &str = "Deleted successfully";
pub const MSG_DELETE_FAILED: &str = "Failed to delete sticker";

/// Controller for the paginated sticker list.
///
/// # Consistency
///
/// - `fetch_all` replaces the whole collection; the last completed fetch wins.
/// - `delete` drops the record locally after the backend acknowledges it,
///   without refetching.
/// - A failed operation never touches the collection.
///
/// # Thread Safety
///
/// The list lives behind a `tokio::sync::RwLock` that is only taken after a
/// network call has completed. Only uploads are serialized: a second upload
/// while one is in flight is rejected with [`DeskError::Busy`].
pub struct StickerListController {
    api: Arc<dyn StickerApi>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<ListState<StickerRecord>>,
    uploading: AtomicBool,
    asset_base_url: String,
    clamp_page_on_shrink: bool,
}

/// Clears the busy flag when the upload finishes, however it finishes.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl StickerListController {
    /// Creates a controller with an empty list on page 1.
    pub fn new(api: Arc<dyn StickerApi>, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            api,
            notifier,
            state: RwLock::new(ListState::new(page_size)),
            uploading: AtomicBool::new(false),
            asset_base_url: stickerdesk_core::config::DEFAULT_ASSET_BASE_URL.to_string(),
            clamp_page_on_shrink: false,
        }
    }

    /// Creates a controller using page size, asset URL and paging policy from `config`.
    pub fn from_config(
        api: Arc<dyn StickerApi>,
        notifier: Arc<dyn Notifier>,
        config: &ClientConfig,
    ) -> Self {
        Self::new(api, notifier, config.effective_page_size())
            .with_asset_base_url(config.asset_base_url.clone())
            .with_clamp_page_on_shrink(config.clamp_page_on_shrink)
    }

    pub fn with_asset_base_url(mut self, asset_base_url: impl Into<String>) -> Self {
        self.asset_base_url = asset_base_url.into();
        self
    }

    /// When enabled, the current page is pulled back into range after a
    /// fetch or delete shrinks the list.
    pub fn with_clamp_page_on_shrink(mut self, enabled: bool) -> Self {
        self.clamp_page_on_shrink = enabled;
        self
    }

    // ============================================================================
    // Remote operations
    // ============================================================================

    /// Loads every sticker and replaces the local collection.
    ///
    /// On failure the previous collection is kept and the error is logged.
    /// No notice is shown for a failed fetch.
    ///
    /// # Returns
    ///
    /// The records as returned by the backend, in server order.
    pub async fn fetch_all(&self) -> Result<Vec<StickerRecord>> {
        let records = match self.api.list().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch stickers");
                return Err(e);
            }
        };

        let mut state = self.state.write().await;
        state.replace_all(records.clone());
        if self.clamp_page_on_shrink {
            state.clamp_page();
        }
        tracing::info!(count = records.len(), "Fetched stickers");
        Ok(records)
    }

    /// Uploads `file` labelled with `code`, then refreshes the list.
    ///
    /// # Errors
    ///
    /// - `Validation` when no file was picked; nothing is sent.
    /// - `Busy` when another upload on this controller is still running.
    /// - The transport error when the upload itself fails.
    ///
    /// A failed refresh after an accepted upload is only logged; the call
    /// still succeeds and the previous list is kept.
    pub async fn upload(&self, file: Option<UploadFile>, code: &str) -> Result<()> {
        let Some(file) = file else {
            tracing::warn!("Upload attempted without a file");
            self.notifier.notify(Notice::error(MSG_SELECT_FILE));
            return Err(DeskError::validation(MSG_SELECT_FILE));
        };

        let _guard = self
            .try_begin_upload()
            .ok_or_else(|| DeskError::busy("An upload is already in progress"))?;

        tracing::info!(file = %file.file_name, size = file.len(), code, "Uploading sticker");
        if let Err(e) = self.api.create(&file, code).await {
            tracing::error!(error = %e, file = %file.file_name, "Failed to upload sticker");
            self.notifier.notify(Notice::error(MSG_UPLOAD_FAILED));
            return Err(e);
        }

        self.notifier.notify(Notice::success(MSG_UPLOADED));
        if let Err(e) = self.fetch_all().await {
            // The sticker already exists server-side
            tracing::error!(error = %e, "Failed to refresh stickers after upload");
        }
        Ok(())
    }

    /// Deletes the sticker `id` and drops it from the local collection.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if let Err(e) = self.api.delete(id).await {
            tracing::error!(error = %e, id, "Failed to delete sticker");
            self.notifier.notify(Notice::error(MSG_DELETE_FAILED));
            return Err(e);
        }

        let mut state = self.state.write().await;
        let removed = state.remove_by_id(id);
        if self.clamp_page_on_shrink {
            state.clamp_page();
        }
        drop(state);

        tracing::info!(id, removed, "Deleted sticker");
        self.notifier.notify(Notice::warning(MSG_DELETED));
        Ok(())
    }

    fn try_begin_upload(&self) -> Option<BusyGuard<'_>> {
        self.uploading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(&self.uploading))
    }

    // ============================================================================
    // Paging
    // ============================================================================

    /// Records on the current page; empty when the page lies past the end.
    pub async fn current_page_view(&self) -> Vec<StickerRecord> {
        self.state.read().await.current_page_view().to_vec()
    }

    pub async fn next_page(&self) {
        self.state.write().await.next_page();
    }

    pub async fn previous_page(&self) {
        self.state.write().await.previous_page();
    }

    /// Jumps to `page`, clamped to the available pages.
    pub async fn set_page(&self, page: usize) {
        self.state.write().await.set_page(page);
    }

    pub async fn page(&self) -> usize {
        self.state.read().await.page()
    }

    pub async fn total_pages(&self) -> usize {
        self.state.read().await.total_pages()
    }

    pub async fn first_row_number(&self) -> usize {
        self.state.read().await.first_row_number()
    }

    pub async fn has_next(&self) -> bool {
        self.state.read().await.has_next()
    }

    pub async fn has_previous(&self) -> bool {
        self.state.read().await.has_previous()
    }

    pub async fn items(&self) -> Vec<StickerRecord> {
        self.state.read().await.items().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }

    /// True while an upload is in flight.
    pub fn is_busy(&self) -> bool {
        self.uploading.load(Ordering::Acquire)
    }

    pub fn image_url(&self, record: &StickerRecord) -> String {
        record.image_url(&self.asset_base_url)
    }
}
