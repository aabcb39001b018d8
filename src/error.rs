use std::fmt;

/// Errors from the I/O edges of the crate: model loading and image export.
///
/// The rasterization, fill, clip and projection routines never fail; they
/// return empty output for degenerate input instead.
#[derive(Debug)]
pub enum Error {
    /// The OBJ file could not be read or parsed.
    Obj(tobj::LoadError),
    /// The image could not be encoded or written.
    Image(image::ImageError),
    /// The model loaded but contains no drawable faces.
    EmptyModel(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Obj(e) => Some(e),
            Self::Image(e) => Some(e),
            Self::EmptyModel(_) => None,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Obj(e) => write!(f, "Failed to load OBJ model: {}", e),
            Self::Image(e) => write!(f, "Failed to write image: {}", e),
            Self::EmptyModel(path) => write!(f, "Model \"{}\" has no faces to draw", path),
        }
    }
}

impl From<tobj::LoadError> for Error {
    #[inline]
    fn from(e: tobj::LoadError) -> Self {
        Self::Obj(e)
    }
}

impl From<image::ImageError> for Error {
    #[inline]
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn wraps_sources() {
        let err = Error::from(tobj::LoadError::OpenFileFailed);
        assert!(matches!(err, Error::Obj(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to load OBJ model"));

        let empty = Error::EmptyModel("box.obj".into());
        assert!(empty.source().is_none());
        assert_eq!(empty.to_string(), "Model \"box.obj\" has no faces to draw");
    }
}
