// SPDX-License-Identifier: MPL-2.0
//! Image decoding and the logical-name image library.
//!
//! - [`image`]: decode files into [`ImageData`]
//! - [`library`]: lazy, path-keyed cache of decoded images by logical name
//! - [`catalog`]: names seeded into every library

pub mod catalog;
pub mod image;
pub mod library;

// Re-export commonly used types
pub use catalog::{CatalogEntry, CATALOG};
pub use image::{load_image, ImageData};
pub use library::{FileDecoder, ImageDecoder, ImageLibrary};
