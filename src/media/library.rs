// SPDX-License-Identifier: MPL-2.0
//! Lazy image library keyed by logical names.
//!
//! Names map to files below a base directory; files are decoded on first
//! [`ImageLibrary::get`] and the decoded [`ImageData`] is cached by *path*, so
//! two names pointing at the same file share one decoded image.
//!
//! The library lives on the GUI thread. It is built once by the application
//! root and handed down as `Rc<ImageLibrary>`; interior mutability keeps
//! lookups usable through shared references.
//!
//! ```no_run
//! use iced_status::media::library::ImageLibrary;
//!
//! let library = ImageLibrary::seeded("/usr/share/operator/images")?;
//! let ok = library.get("OK")?;
//! assert!(ok.same_image(&library.get("ok")?));
//! # Ok::<(), iced_status::error::Error>(())
//! ```

use super::catalog::CATALOG;
use super::image::{load_image, ImageData};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Turns a file into decoded image data.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<ImageData>;
}

impl<F> ImageDecoder for F
where
    F: Fn(&Path) -> Result<ImageData>,
{
    fn decode(&self, path: &Path) -> Result<ImageData> {
        self(path)
    }
}

/// Decodes files from disk with [`load_image`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<ImageData> {
        load_image(path)
    }
}

pub struct ImageLibrary {
    base_dir: PathBuf,
    names: RefCell<HashMap<String, PathBuf>>,
    handles: RefCell<HashMap<PathBuf, ImageData>>,
    decoder: Box<dyn ImageDecoder>,
}

impl fmt::Debug for ImageLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageLibrary")
            .field("base_dir", &self.base_dir)
            .field("names", &self.names.borrow().len())
            .field("cached", &self.handles.borrow().len())
            .finish()
    }
}

fn canonical_name(name: &str) -> String {
    name.to_lowercase()
}

impl ImageLibrary {
    /// Creates an empty library rooted at `base_dir`, decoding from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `base_dir` is not an existing directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_decoder(base_dir, FileDecoder)
    }

    /// Creates an empty library that decodes through `decoder`.
    pub fn with_decoder(
        base_dir: impl Into<PathBuf>,
        decoder: impl ImageDecoder + 'static,
    ) -> Result<Self> {
        let base_dir = base_dir.into();
        if !base_dir.is_dir() {
            return Err(Error::NotFound(base_dir));
        }
        Ok(Self {
            base_dir,
            names: RefCell::new(HashMap::new()),
            handles: RefCell::new(HashMap::new()),
            decoder: Box::new(decoder),
        })
    }

    /// Creates a library and registers the built-in catalog.
    pub fn seeded(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let library = Self::new(base_dir)?;
        library.seed()?;
        Ok(library)
    }

    /// Registers every built-in catalog entry.
    ///
    /// # Errors
    ///
    /// Stops at the first catalog file missing from the base directory.
    pub fn seed(&self) -> Result<()> {
        for item in CATALOG {
            self.register(item.name, item.file)?;
        }
        tracing::info!(
            base_dir = %self.base_dir.display(),
            count = CATALOG.len(),
            "seeded image catalog"
        );
        Ok(())
    }

    /// Binds a logical name to a file.
    ///
    /// Relative paths resolve against the base directory. Re-registering a
    /// name drops the image cached for its new file, so the next lookup
    /// decodes it again, and drops the image of its previous file once no
    /// other name refers to it. A new name leaves the cache untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] with the resolved path if it is not an
    /// existing file; the binding is left untouched.
    pub fn register(&self, name: &str, file: impl AsRef<Path>) -> Result<()> {
        let path = self.resolve(file.as_ref());
        if !path.is_file() {
            return Err(Error::NotFound(path));
        }

        let name = canonical_name(name);
        let mut names = self.names.borrow_mut();
        let mut handles = self.handles.borrow_mut();

        if let Some(previous) = names.insert(name.clone(), path.clone()) {
            handles.remove(&path);
            if previous != path && !names.values().any(|p| *p == previous) {
                handles.remove(&previous);
            }
            tracing::debug!(%name, path = %path.display(), "rebound image name");
        }
        Ok(())
    }

    /// Returns the decoded image for a logical name, decoding it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownImage`] if the name was never registered, or the
    /// decoder's error if the file cannot be decoded.
    pub fn get(&self, name: &str) -> Result<ImageData> {
        let name = canonical_name(name);
        let path = self
            .names
            .borrow()
            .get(&name)
            .cloned()
            .ok_or_else(|| Error::UnknownImage(name.clone()))?;

        if let Some(cached) = self.handles.borrow().get(&path) {
            tracing::trace!(%name, "image cache hit");
            return Ok(cached.clone());
        }

        tracing::debug!(%name, path = %path.display(), "decoding image");
        let decoded = self.decoder.decode(&path)?;
        self.handles.borrow_mut().insert(path, decoded.clone());
        Ok(decoded)
    }

    /// Returns true if the name (any case) is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.borrow().contains_key(&canonical_name(name))
    }

    /// Returns the file a name is bound to.
    #[must_use]
    pub fn path_of(&self, name: &str) -> Option<PathBuf> {
        self.names.borrow().get(&canonical_name(name)).cloned()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of decoded images currently held.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.handles.borrow().len()
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.base_dir.join(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::{tempdir, TempDir};

    fn write_png(dir: &Path, file: &str, shade: u8) -> PathBuf {
        let path = dir.join(file);
        RgbaImage::from_pixel(2, 2, Rgba([shade, shade, shade, 255]))
            .save(&path)
            .expect("failed to write png");
        path
    }

    /// Library over a temp dir whose decoder counts its calls.
    fn counting_library() -> (TempDir, ImageLibrary, Rc<Cell<usize>>) {
        let dir = tempdir().expect("failed to create temp dir");
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let library = ImageLibrary::with_decoder(dir.path(), move |path: &Path| {
            counter.set(counter.get() + 1);
            load_image(path)
        })
        .expect("temp dir exists");
        (dir, library, calls)
    }

    #[test]
    fn new_rejects_missing_base_dir() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("absent");
        match ImageLibrary::new(&missing) {
            Err(Error::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        let (dir, library, _) = counting_library();
        write_png(dir.path(), "ok.png", 10);
        library.register("Ok", "ok.png").expect("register ok");

        let upper = library.get("OK").expect("get OK");
        let mixed = library.get("oK").expect("get oK");
        assert!(upper.same_image(&mixed));
        assert!(library.contains("ok"));
        assert_eq!(library.names(), vec!["ok".to_string()]);
    }

    #[test]
    fn registration_does_not_decode() {
        let (dir, library, calls) = counting_library();
        write_png(dir.path(), "ok.png", 10);
        library.register("ok", "ok.png").expect("register ok");
        assert_eq!(calls.get(), 0);
        assert_eq!(library.cached_len(), 0);
    }

    #[test]
    fn decodes_each_path_at_most_once() {
        let (dir, library, calls) = counting_library();
        write_png(dir.path(), "ok.png", 10);
        library.register("ok", "ok.png").expect("register ok");

        for _ in 0..5 {
            library.get("ok").expect("get ok");
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn names_sharing_a_file_share_one_handle() {
        let (dir, library, calls) = counting_library();
        write_png(dir.path(), "ok.png", 10);
        library.register("a", "ok.png").expect("register a");
        library.register("b", "ok.png").expect("register b");

        let a = library.get("a").expect("get a");
        let b = library.get("b").expect("get b");
        assert!(a.same_image(&b));
        assert_eq!(a.handle.id(), b.handle.id());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn absolute_paths_bypass_base_dir() {
        let (_dir, library, _) = counting_library();
        let elsewhere = tempdir().expect("failed to create temp dir");
        let file = write_png(elsewhere.path(), "other.png", 20);

        library.register("other", &file).expect("register absolute");
        assert_eq!(library.path_of("OTHER"), Some(file));
    }

    #[test]
    fn missing_file_is_not_registered() {
        let (dir, library, _) = counting_library();
        match library.register("custom", "/nonexistent.png") {
            Err(Error::NotFound(path)) => assert_eq!(path, PathBuf::from("/nonexistent.png")),
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(matches!(library.get("custom"), Err(Error::UnknownImage(_))));

        match library.register("relative", "missing.png") {
            Err(Error::NotFound(path)) => assert_eq!(path, dir.path().join("missing.png")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn failed_rebinding_keeps_previous_binding() {
        let (dir, library, _) = counting_library();
        let ok = write_png(dir.path(), "ok.png", 10);
        library.register("ok", "ok.png").expect("register ok");

        assert!(library.register("ok", "gone.png").is_err());
        assert_eq!(library.path_of("ok"), Some(ok));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let (_dir, library, _) = counting_library();
        match library.get("nope") {
            Err(Error::UnknownImage(name)) => assert_eq!(name, "nope"),
            other => panic!("expected UnknownImage, got {other:?}"),
        }
    }

    #[test]
    fn rebinding_exposes_the_new_file() {
        let (dir, library, _) = counting_library();
        write_png(dir.path(), "ok.png", 10);
        write_png(dir.path(), "other.png", 200);
        library.register("ok", "ok.png").expect("register ok");
        let first = library.get("ok").expect("get ok");

        library.register("OK", "other.png").expect("rebind ok");
        let second = library.get("ok").expect("get rebound ok");

        assert!(!first.same_image(&second));
        assert_eq!(second.rgba_bytes()[0], 200);
        // Nothing refers to ok.png anymore.
        assert_eq!(library.cached_len(), 1);
    }

    #[test]
    fn rebinding_to_same_file_forces_a_fresh_decode() {
        let (dir, library, calls) = counting_library();
        write_png(dir.path(), "ok.png", 10);
        library.register("ok", "ok.png").expect("register ok");
        library.get("ok").expect("get ok");

        write_png(dir.path(), "ok.png", 90);
        library.register("ok", "ok.png").expect("re-register ok");
        let refreshed = library.get("ok").expect("get ok");

        assert_eq!(calls.get(), 2);
        assert_eq!(refreshed.rgba_bytes()[0], 90);
    }

    #[test]
    fn new_alias_keeps_existing_decoded_image() {
        let (dir, library, calls) = counting_library();
        write_png(dir.path(), "ok.png", 10);
        library.register("ok", "ok.png").expect("register ok");
        let before = library.get("ok").expect("get ok");

        library.register("alias", "ok.png").expect("register alias");
        let after = library.get("ok").expect("get ok again");
        let alias = library.get("alias").expect("get alias");

        assert!(before.same_image(&after));
        assert!(before.same_image(&alias));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn directory_is_not_registered() {
        let (dir, library, _) = counting_library();
        std::fs::create_dir(dir.path().join("icons")).expect("create dir");

        match library.register("icons", "icons") {
            Err(Error::NotFound(path)) => assert_eq!(path, dir.path().join("icons")),
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(!library.contains("icons"));
    }

    #[test]
    fn rebinding_one_name_keeps_shared_handle_for_others() {
        let (dir, library, calls) = counting_library();
        write_png(dir.path(), "ok.png", 10);
        write_png(dir.path(), "other.png", 20);
        library.register("a", "ok.png").expect("register a");
        library.register("b", "ok.png").expect("register b");
        let before = library.get("b").expect("get b");

        library.register("a", "other.png").expect("rebind a");
        let after = library.get("b").expect("get b again");

        assert!(before.same_image(&after));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn decoder_errors_propagate_and_are_not_cached() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("broken.png"), b"not a png").expect("write");
        let library = ImageLibrary::new(dir.path()).expect("library");
        library.register("broken", "broken.png").expect("file exists");

        assert!(matches!(library.get("broken"), Err(Error::Io(_))));
        assert_eq!(library.cached_len(), 0);
    }

    #[test]
    fn seed_requires_every_catalog_file() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(dir.path(), "ok.png", 10);
        let library = ImageLibrary::new(dir.path()).expect("library");

        assert!(matches!(library.seed(), Err(Error::NotFound(_))));
    }

    #[test]
    fn seed_registers_the_catalog() {
        let dir = tempdir().expect("failed to create temp dir");
        for item in CATALOG {
            write_png(dir.path(), item.file, 0);
        }
        let library = ImageLibrary::seeded(dir.path()).expect("seeded library");

        assert_eq!(library.names().len(), CATALOG.len());
        assert_eq!(
            library.path_of("maintenance"),
            Some(dir.path().join("gears.png"))
        );
        assert_eq!(library.cached_len(), 0);
    }
}
