use crate::common::error::PamsError;
use std::path::PathBuf;

/// Result alias used across the crate.
///
/// # Examples
///
/// ```
/// use pams::common::result::PamsResult;
/// use pams::common::error::PamsError;
///
/// fn example_function() -> PamsResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> PamsResult<()> {
///     Err(PamsError::config_error("apps_dir", "must not be empty", None))
/// }
/// ```
pub type PamsResult<T> = Result<T, PamsError>;

/// Conversions from `std::io` results into [`PamsResult`].
pub trait ResultExt<T> {
    /// Wrap an I/O failure as a file system error tied to `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pams::common::result::{PamsResult, ResultExt};
    /// use std::path::PathBuf;
    ///
    /// let result: Result<(), std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let mapped: PamsResult<()> =
    ///     result.with_filesystem_error("read failed", Some(PathBuf::from("/tmp/x")));
    /// assert!(mapped.is_err());
    /// ```
    fn with_filesystem_error(self, message: impl Into<String>, path: Option<PathBuf>)
        -> PamsResult<T>;

    /// Wrap an I/O failure on stdin/stdout as a console error.
    fn with_console_error(self, message: impl Into<String>) -> PamsResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> PamsResult<T> {
        self.map_err(|e| PamsError::filesystem_error_with_source(message, path, e))
    }

    fn with_console_error(self, message: impl Into<String>) -> PamsResult<T> {
        self.map_err(|e| PamsError::console_error(message, e))
    }
}
