use std::path::PathBuf;

use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! version_error {
    ($version:expr, $fmt:expr $(, $arg:expr)*) => {
        crate::Error::VersionFormat {
            version: $version.to_string(),
            message: format!($fmt $(, $arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Bundle Identity Errors
/// - [`Error::MissingHeader`] - A required manifest header is absent
/// - [`Error::VersionFormat`] - A version string could not be parsed
///
/// ## Manifest Errors
/// - [`Error::Malformed`] - The manifest text violates the manifest format
/// - [`Error::NotFound`] - The exploded bundle has no `META-INF` folder
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::Error`] - Miscellaneous failures (e.g. memory mapping)
///
/// # Examples
///
/// ```rust,no_run
/// use bundlescope::{bundle::read_exploded_bundle, Error};
///
/// match read_exploded_bundle::<()>("plugins/com.example.foo_1.0.0", None) {
///     Ok(bundle) => println!("found {}", bundle.symbolic_name()),
///     Err(Error::NotFound(path)) => eprintln!("not exploded: {}", path.display()),
///     Err(Error::MissingHeader(header)) => eprintln!("not a bundle, missing {}", header),
///     Err(e) => eprintln!("error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A required header was not present in the main section of a manifest.
    ///
    /// The associated value is the header name, e.g. `Bundle-Version`.
    #[error("Header-Name {0} not found in Manifest!")]
    MissingHeader(String),

    /// A version string does not follow `major[.minor[.micro[.qualifier]]]`.
    ///
    /// # Fields
    ///
    /// * `version` - The offending input
    /// * `message` - What exactly was wrong with it
    #[error("Invalid version \"{version}\": {message}")]
    VersionFormat {
        /// The text that failed to parse
        version: String,
        /// Description of the failure
        message: String,
    },

    /// The `META-INF` folder of an exploded bundle does not exist.
    ///
    /// The associated path is the (absolute, where resolvable) bundle folder that was searched.
    #[error("can't find folder META-INF in folder {}", .0.display())]
    NotFound(PathBuf),

    /// The manifest is damaged and could not be parsed.
    ///
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while opening or reading a manifest,
    /// such as a missing `MANIFEST.MF` or permission issues.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}
