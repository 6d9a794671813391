// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory

//! # bundlescope
//!
//! Identify OSGi bundles from their JAR manifests.
//!
//! An OSGi bundle declares who it is in `META-INF/MANIFEST.MF` through two headers,
//! `Bundle-SymbolicName` and `Bundle-Version`. `bundlescope` reads manifests, extracts that
//! identity into a comparable, sortable [`BundleInfo`], and lets callers attach their own context
//! (a path, a repository handle, anything) to each identity.
//!
//! ## Features
//!
//! - **📄 Manifest parsing** - Main and entry sections, continuation lines, case-insensitive headers
//! - **🏷️ Bundle identity** - Symbolic name and version, ordered by name then version
//! - **🔢 OSGi versions** - `major.minor.micro.qualifier` parsing with OSGi ordering rules
//! - **📂 Exploded bundles** - Read the identity of a bundle unpacked into a folder
//! - **📦 Efficient memory access** - Memory-mapped manifest files, released after every read
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust,no_run
//! use bundlescope::prelude::*;
//!
//! let bundle = read_exploded_bundle("plugins/com.example.foo_1.2.3", Some("plugins"))?;
//! println!("{}", bundle); // com.example.foo:1.2.3:plugins
//! # Ok::<(), bundlescope::Error>(())
//! ```
//!
//! ### From Manifest Text
//!
//! ```rust
//! use bundlescope::{BundleInfo, Manifest};
//!
//! let manifest = Manifest::parse(
//!     b"Manifest-Version: 1.0\r\n\
//!       Bundle-SymbolicName: com.example.foo;singleton:=true\r\n\
//!       Bundle-Version: 1.2.3\r\n",
//! )?;
//!
//! let bundle = BundleInfo::<String>::from_manifest(&manifest, None)?;
//! assert_eq!(bundle.to_string(), "com.example.foo:1.2.3");
//! # Ok::<(), bundlescope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`bundle`] - Bundle identities, versions and exploded bundle loading
//! - [`manifest`] - Manifest reading and writing
//! - [`file`] - Data sources (memory-mapped files, memory buffers) and the line parser
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result):
//!
//! ```rust,no_run
//! use bundlescope::{bundle::read_exploded_bundle, Error};
//!
//! match read_exploded_bundle::<String>("plugins/com.example.foo", None) {
//!     Ok(bundle) => println!("Bundle {}", bundle),
//!     Err(Error::NotFound(path)) => println!("No META-INF in {}", path.display()),
//!     Err(Error::Malformed { message, .. }) => println!("Malformed manifest: {}", message),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo +nightly fuzz run manifest --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust,no_run
/// use bundlescope::prelude::*;
///
/// let manifest = read_manifest("plugins/com.example.foo")?;
/// println!("is a bundle: {}", is_bundle(Some(&manifest)));
/// # Ok::<(), bundlescope::Error>(())
/// ```
pub mod prelude;

/// OSGi bundle identities, versions and exploded bundle loading.
pub mod bundle;

/// Data sources for manifest input.
pub mod file;

/// Manifest parsing and writing.
pub mod manifest;

/// `bundlescope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust,no_run
/// use bundlescope::{Result, BundleInfo};
///
/// fn load(path: &str) -> Result<BundleInfo<String>> {
///     bundlescope::bundle::read_exploded_bundle(path, Some(path.to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `bundlescope` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

/// Bundle identity, see [`bundle::BundleInfo`].
pub use bundle::{BundleInfo, Version};

/// Parsed manifest, see [`manifest::Manifest`].
pub use manifest::Manifest;

/// Line-oriented cursor over manifest bytes.
///
/// # Example
///
/// ```rust
/// use bundlescope::Parser;
///
/// let mut parser = Parser::new(b"A: 1\r\n b\r\n");
/// assert_eq!(parser.next_line().unwrap().content, b"A: 1");
/// assert!(parser.next_line().unwrap().is_continuation());
/// assert!(parser.next_line().is_none());
/// ```
pub use file::parser::Parser;
