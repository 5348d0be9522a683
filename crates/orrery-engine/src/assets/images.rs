use std::collections::HashMap;

use crate::api::types::{ImageHandle, ImageRef};

/// Load state of an image, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    Pending,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
struct ImageEntry {
    image: ImageRef,
    status: ImageStatus,
}

/// Registry of requested images. The same reference always maps to the same
/// handle, so a texture shared by two bodies is fetched once.
pub struct ImageRegistry {
    entries: Vec<ImageEntry>,
    by_ref: HashMap<ImageRef, ImageHandle>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_ref: HashMap::new(),
        }
    }

    /// Register an image for loading. Returns immediately.
    pub fn request(&mut self, image: &ImageRef) -> ImageHandle {
        if let Some(&handle) = self.by_ref.get(image) {
            return handle;
        }
        let handle = ImageHandle(self.entries.len() as u32);
        self.entries.push(ImageEntry {
            image: image.clone(),
            status: ImageStatus::Pending,
        });
        self.by_ref.insert(image.clone(), handle);
        handle
    }

    pub fn mark_ready(&mut self, handle: ImageHandle) {
        if let Some(entry) = self.entries.get_mut(handle.0 as usize) {
            entry.status = ImageStatus::Ready;
        }
    }

    /// Record a failed load. Anything using the image falls back to default
    /// shading.
    pub fn mark_failed(&mut self, handle: ImageHandle, reason: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(handle.0 as usize) {
            let reason = reason.into();
            log::warn!(
                "image {} failed to load ({}); using default shading",
                entry.image.as_str(),
                reason
            );
            entry.status = ImageStatus::Failed(reason);
        }
    }

    pub fn status(&self, handle: ImageHandle) -> Option<&ImageStatus> {
        self.entries.get(handle.0 as usize).map(|e| &e.status)
    }

    /// Slot value for the wire format: the image index once it is ready,
    /// -1 otherwise.
    pub fn slot(&self, handle: Option<ImageHandle>) -> f32 {
        match handle {
            Some(h) if self.status(h) == Some(&ImageStatus::Ready) => h.0 as f32,
            _ => -1.0,
        }
    }

    /// Handles still waiting on the host.
    pub fn pending(&self) -> impl Iterator<Item = (ImageHandle, &ImageRef)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.status == ImageStatus::Pending)
            .map(|(i, e)| (ImageHandle(i as u32), &e.image))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_ref_same_handle() {
        let mut reg = ImageRegistry::new();
        let a = reg.request(&ImageRef::new("multimedia/mars.jpg"));
        let b = reg.request(&ImageRef::new("multimedia/mars-normal.jpg"));
        let c = reg.request(&ImageRef::new("multimedia/mars.jpg"));
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn slot_only_when_ready() {
        let mut reg = ImageRegistry::new();
        let h = reg.request(&ImageRef::new("sun.jpg"));
        assert_eq!(reg.slot(Some(h)), -1.0);
        reg.mark_ready(h);
        assert_eq!(reg.slot(Some(h)), 0.0);
        assert_eq!(reg.slot(None), -1.0);
    }

    #[test]
    fn failed_image_falls_back() {
        let mut reg = ImageRegistry::new();
        let h = reg.request(&ImageRef::new("missing.jpg"));
        reg.mark_failed(h, "404");
        assert_eq!(reg.status(h), Some(&ImageStatus::Failed("404".into())));
        assert_eq!(reg.slot(Some(h)), -1.0);
        assert_eq!(reg.pending().count(), 0);
    }

    #[test]
    fn unknown_handle_is_ignored() {
        let mut reg = ImageRegistry::new();
        reg.mark_ready(ImageHandle(9));
        assert!(reg.status(ImageHandle(9)).is_none());
    }
}
