use image::{ImageFormat, ImageReader};
use std::io::Cursor;

/// Banner formats the course page accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Gif,
    Jpeg,
    Png,
}

impl ImageKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Gif => "gif",
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
        }
    }

    fn format(&self) -> ImageFormat {
        match self {
            ImageKind::Gif => ImageFormat::Gif,
            ImageKind::Jpeg => ImageFormat::Jpeg,
            ImageKind::Png => ImageFormat::Png,
        }
    }

    fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Gif => Some(ImageKind::Gif),
            ImageFormat::Jpeg => Some(ImageKind::Jpeg),
            ImageFormat::Png => Some(ImageKind::Png),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageRejection {
    #[error("Uploaded file is empty")]
    Empty,

    #[error("File too large: {actual_bytes} bytes (max {max_bytes})")]
    TooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("File is not a recognised image")]
    UnrecognizedFormat,

    #[error("Image format {0} is not allowed")]
    UnsupportedFormat(String),

    #[error("Image could not be decoded: {0}")]
    Corrupt(String),

    #[error("Image dimensions {width_px}x{height_px} exceed {max_px}px")]
    InvalidDimensions {
        max_px: u32,
        width_px: u32,
        height_px: u32,
    },
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_width_height_px: u32,
    pub allowed_kinds: &'static [ImageKind],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_width_height_px: 6000,
            allowed_kinds: Self::DEFAULT_ALLOWED_KINDS,
        }
    }
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_KINDS: &'static [ImageKind] =
        &[ImageKind::Gif, ImageKind::Jpeg, ImageKind::Png];

    pub fn with_max_file_size(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            ..Self::default()
        }
    }

    /// Checks an uploaded body. The format comes from the content, never the
    /// client-supplied file name.
    pub fn inspect(&self, bytes: &[u8]) -> Result<ImageKind, ImageRejection> {
        if bytes.is_empty() {
            return Err(ImageRejection::Empty);
        }

        let actual_bytes = bytes.len() as u64;
        if actual_bytes > self.max_file_size_bytes {
            return Err(ImageRejection::TooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes,
            });
        }

        let format = image::guess_format(bytes).map_err(|_| ImageRejection::UnrecognizedFormat)?;
        let kind = ImageKind::from_format(format)
            .filter(|k| self.allowed_kinds.contains(k))
            .ok_or_else(|| ImageRejection::UnsupportedFormat(format!("{:?}", format)))?;

        // Header dimensions are checked before any pixel buffer is allocated.
        let (width_px, height_px) = ImageReader::with_format(Cursor::new(bytes), kind.format())
            .into_dimensions()
            .map_err(|e| ImageRejection::Corrupt(e.to_string()))?;
        if width_px == 0
            || height_px == 0
            || width_px > self.max_width_height_px
            || height_px > self.max_width_height_px
        {
            return Err(ImageRejection::InvalidDimensions {
                max_px: self.max_width_height_px,
                width_px,
                height_px,
            });
        }

        image::load_from_memory_with_format(bytes, kind.format())
            .map_err(|e| ImageRejection::Corrupt(e.to_string()))?;

        Ok(kind)
    }
}
