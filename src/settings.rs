//! Reading and writing colors through a persisted key-value store.
//!
//! The store itself belongs to the host application; it only needs to hand
//! back opaque byte blobs by key. Colors are stored as their UTF-8 string
//! form. A missing key is `Ok(None)`; a stored value that is not a color
//! string is `Err(ColorError::MalformedColor)`, so callers can tell the two
//! apart instead of silently falling back to a default color.
//!
//! ```
//! use framekit::Color;
//! use framekit::settings::{self, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! settings::store_color(&mut store, "subTextColor", &Color::rgb(1.0, 1.0, 1.0));
//! assert_eq!(
//!     settings::color_string(&store, "subTextColor").unwrap().as_deref(),
//!     Some("1.0/1.0/1.0/1.0")
//! );
//! assert_eq!(settings::load_color(&store, "subBgColor"), Ok(None));
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::color::{self, Color, ColorError};

/// Persistent key-value storage holding opaque byte blobs.
pub trait SettingsStore {
    /// Stored blob for `key`, or `None` when nothing is stored.
    fn data(&self, key: &str) -> Option<Vec<u8>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_data(&mut self, key: &str, value: Vec<u8>);
}

/// In-memory [`SettingsStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `key`. Returns the previous blob, if any.
    pub fn remove(&mut self, key: &str) -> Option<Vec<u8>> {
        self.entries.remove(key)
    }
}

impl SettingsStore for MemoryStore {
    fn data(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set_data(&mut self, key: &str, value: Vec<u8>) {
        self.entries.insert(String::from(key), value);
    }
}

/// Load the color stored under `key`.
pub fn load_color<S: SettingsStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<Color>, ColorError> {
    let Some(blob) = store.data(key) else {
        return Ok(None);
    };
    let decoded = core::str::from_utf8(&blob)
        .map_err(|_| ColorError::MalformedColor)
        .and_then(color::decode);
    match decoded {
        Ok(c) => Ok(Some(c)),
        Err(e) => {
            log::debug!("stored value for {key:?} is not a color string ({} bytes)", blob.len());
            Err(e)
        }
    }
}

/// The color stored under `key`, re-encoded in canonical `"R/G/B/A"` form,
/// ready to be passed to the player backend as an option value.
pub fn color_string<S: SettingsStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<String>, ColorError> {
    Ok(load_color(store, key)?.map(|c| color::encode(&c)))
}

/// Store `color` under `key` in string form.
pub fn store_color<S: SettingsStore + ?Sized>(store: &mut S, key: &str, color: &Color) {
    store.set_data(key, color::encode(color).into_bytes());
}
