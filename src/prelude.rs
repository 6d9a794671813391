//! # bundlescope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! bundlescope library. Import this module to get quick access to the essential types for
//! reading bundle identities.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all bundlescope operations
pub use crate::Error;

/// The result type used throughout bundlescope
pub use crate::Result;

// ================================================================================================
// Bundle Identity
// ================================================================================================

/// Bundle identity, version and identity headers
pub use crate::bundle::{BundleHeader, BundleInfo, Version};

/// Loading bundle identities from manifests and exploded bundle folders
pub use crate::bundle::{is_bundle, read_exploded_bundle, read_manifest};

// ================================================================================================
// Manifests
// ================================================================================================

/// Manifest model and reader configuration
pub use crate::manifest::{AttributeName, Attributes, Manifest, ManifestConfig};

// ================================================================================================
// Data Sources
// ================================================================================================

/// Data source abstraction and its implementations
pub use crate::file::{Backend, Memory, Physical};

/// Line-oriented manifest parser
pub use crate::Parser;
