//! The in-progress claim collected by the submission wizard
//!
//! A draft is owned exclusively by one wizard instance for its lifetime and
//! is never partially submitted: the whole draft is snapshotted into a single
//! create request at confirmation time.

use std::fmt;

use core_kernel::validation::is_valid_image_file;

use crate::model::DamageType;

/// Default cap on attached photos per claim
pub const DEFAULT_MAX_IMAGES: usize = 10;

/// An image file held in memory until submission or removal
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    /// Declared media type, e.g. "image/jpeg"
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn byte_size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Applies the accepted-type and size prefilter used at the selection
    /// boundary
    pub fn is_valid_image(&self) -> bool {
        is_valid_image_file(&self.content_type, self.byte_size())
    }
}

impl fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}

/// Mutable claim data collected across the wizard steps
///
/// Text fields hold the raw entered values; the vehicle year is only parsed
/// at validation time. Image slots are append-only up to `max_images` except
/// for explicit per-index removal, which never reorders the remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftClaim {
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: String,
    pub incident_date: String,
    pub incident_time: String,
    pub location: String,
    pub description: String,
    pub damage_type: Option<DamageType>,
    images: Vec<ImageAttachment>,
    max_images: usize,
}

impl DraftClaim {
    /// Creates an empty draft with the default image cap
    pub fn new() -> Self {
        Self::with_max_images(DEFAULT_MAX_IMAGES)
    }

    /// Creates an empty draft with a custom image cap
    pub fn with_max_images(max_images: usize) -> Self {
        Self {
            vehicle_make: String::new(),
            vehicle_model: String::new(),
            vehicle_year: String::new(),
            incident_date: String::new(),
            incident_time: String::new(),
            location: String::new(),
            description: String::new(),
            damage_type: None,
            images: Vec::new(),
            max_images,
        }
    }

    /// The attached images, in insertion order
    pub fn images(&self) -> &[ImageAttachment] {
        &self.images
    }

    /// The configured image cap
    pub fn max_images(&self) -> usize {
        self.max_images
    }

    /// The vehicle year, when the entered text parses as a positive integer
    pub fn parsed_year(&self) -> Option<i32> {
        self.vehicle_year
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|year| *year > 0)
    }

    /// Appends images up to the remaining slots, in order
    ///
    /// Overflow beyond `max_images` is silently dropped. Returns the number
    /// of images actually added.
    pub fn add_images(&mut self, files: impl IntoIterator<Item = ImageAttachment>) -> usize {
        let remaining = self.max_images.saturating_sub(self.images.len());
        let before = self.images.len();
        self.images.extend(files.into_iter().take(remaining));
        self.images.len() - before
    }

    /// Removes the image at `index`, preserving the order of the rest
    ///
    /// Out-of-range indices are a silent no-op.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }
}

impl Default for DraftClaim {
    fn default() -> Self {
        Self::new()
    }
}
