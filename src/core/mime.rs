/// MIME type of an image payload, inferred from its file extension.
///
/// `Binary` is the fallback for extensions outside the supported set. The
/// scanner's allow-list currently filters those out before extraction, so
/// the variant only becomes reachable if the allow-list grows faster than
/// this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
    Bmp,
    Tiff,
    Webp,
    Binary,
}

impl ImageMime {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            "bmp" => Self::Bmp,
            "tiff" => Self::Tiff,
            "webp" => Self::Webp,
            _ => Self::Binary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
            Self::Webp => "image/webp",
            Self::Binary => "application/octet-stream",
        }
    }
}
