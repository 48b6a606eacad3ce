use crate::error::{ApiError, StoreError};
use crate::models::{
    decode_palette, decode_size, encode_palette, encode_size, ImageInfo, SourceImage, PALETTE_KEY,
    SIZE_KEY,
};
use crate::services::SettingsStore;
use dot_grid::{Palette, PaletteError, Rgb, SizeSetting};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Everything an analysis run needs, captured under one read lock
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub image: Arc<SourceImage>,
    pub palette: Palette,
    pub size: SizeSetting,
}

#[derive(Debug, Default)]
struct SessionState {
    palette: Palette,
    size: SizeSetting,
    image: Option<Arc<SourceImage>>,
}

/// Process-wide user session: palette, size setting and loaded image.
///
/// Palette and size changes are written to the store before they become
/// visible, so a failed write leaves the session unchanged.
pub struct Session {
    store: Arc<dyn SettingsStore>,
    state: RwLock<SessionState>,
}

impl Session {
    /// Restore palette and size from the store.
    pub async fn load(store: Arc<dyn SettingsStore>) -> Result<Self, StoreError> {
        let palette = decode_palette(store.get(PALETTE_KEY).await?.as_deref());
        let size = decode_size(store.get(SIZE_KEY).await?.as_deref());

        tracing::info!(colors = palette.len(), size = size.value(), "Session restored");

        Ok(Self {
            store,
            state: RwLock::new(SessionState {
                palette,
                size,
                image: None,
            }),
        })
    }

    pub async fn palette(&self) -> Palette {
        self.state.read().await.palette.clone()
    }

    pub async fn size(&self) -> SizeSetting {
        self.state.read().await.size
    }

    pub async fn image_info(&self) -> Option<ImageInfo> {
        self.state.read().await.image.as_ref().map(|image| image.info())
    }

    /// Append a color to the palette.
    pub async fn add_color(&self, color: Rgb) -> Result<Palette, ApiError> {
        self.update_palette(|palette| {
            palette.push(color);
            Ok(())
        })
        .await
    }

    /// Remove the color at `index`.
    pub async fn delete_color(&self, index: usize) -> Result<Palette, ApiError> {
        self.update_palette(|palette| palette.remove(index).map(|_| ()))
            .await
    }

    /// Start editing the color at `index`.
    ///
    /// Nothing changes until [`PaletteEdit::commit`]; dropping the edit or
    /// calling [`PaletteEdit::cancel`] discards it.
    pub async fn begin_edit(&self, index: usize) -> Result<PaletteEdit<'_>, ApiError> {
        let state = self.state.read().await;
        let original = state.palette.get(index).ok_or(ApiError::PaletteIndex {
            index,
            len: state.palette.len(),
        })?;
        Ok(PaletteEdit {
            session: self,
            index,
            original,
        })
    }

    pub async fn set_size(&self, size: SizeSetting) -> Result<SizeSetting, ApiError> {
        let mut state = self.state.write().await;
        self.store.set(SIZE_KEY, encode_size(size)).await?;
        state.size = size;
        tracing::debug!(size = size.value(), grid = size.grid_size(), "Size updated");
        Ok(size)
    }

    /// Make `image` the source surface, replacing any previous one.
    pub async fn set_image(&self, image: SourceImage) -> ImageInfo {
        let info = image.info();
        self.state.write().await.image = Some(Arc::new(image));
        info
    }

    /// Snapshot for an analysis run.
    ///
    /// `None` while no image is loaded or the palette is empty, in which
    /// case analysis does nothing.
    pub async fn analysis_input(&self) -> Option<AnalysisInput> {
        let state = self.state.read().await;
        let image = state.image.clone()?;
        if state.palette.is_empty() {
            return None;
        }
        Some(AnalysisInput {
            image,
            palette: state.palette.clone(),
            size: state.size,
        })
    }

    async fn update_palette<F>(&self, edit: F) -> Result<Palette, ApiError>
    where
        F: FnOnce(&mut Palette) -> Result<(), PaletteError>,
    {
        let mut state = self.state.write().await;
        let mut next = state.palette.clone();
        edit(&mut next)?;

        self.store.set(PALETTE_KEY, encode_palette(&next)).await?;
        state.palette = next.clone();

        tracing::debug!(colors = next.len(), "Palette updated");
        Ok(next)
    }
}

/// A pending edit of one palette entry.
pub struct PaletteEdit<'a> {
    session: &'a Session,
    index: usize,
    original: Rgb,
}

impl PaletteEdit<'_> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// The color the entry had when the edit began
    pub fn original(&self) -> Rgb {
        self.original
    }

    /// Write `color` back to the entry's index and persist.
    ///
    /// Fails with [`ApiError::PaletteIndex`] if the entry no longer holds
    /// [`original`](Self::original) at that index.
    pub async fn commit(self, color: Rgb) -> Result<Palette, ApiError> {
        let (index, original) = (self.index, self.original);
        self.session
            .update_palette(|palette| {
                if palette.get(index) != Some(original) {
                    return Err(PaletteError::IndexOutOfRange {
                        index,
                        len: palette.len(),
                    });
                }
                palette.replace(index, color).map(|_| ())
            })
            .await
    }

    pub fn cancel(self) {}
}
