//! This crate contains the DICOM transfer syntax registry.
//! The transfer syntax registry maps a DICOM UID of a transfer syntax into the
//! respective transfer syntax specifier.
//!
//! ```
//! use dcmcodec_encoding::TransferSyntaxIndex;
//! use dcmcodec_transfer_syntax_registry::TransferSyntaxRegistry;
//!
//! let ts = TransferSyntaxRegistry.get("1.2.840.10008.1.2.1\0").unwrap();
//! assert_eq!(ts.name(), "Explicit VR Little Endian");
//! ```

pub mod entries;

use dcmcodec_encoding::transfer_syntax::{Codec, TransferSyntax, TransferSyntaxIndex};
use lazy_static::lazy_static;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Main implementation of a registry of DICOM transfer syntaxes.
///
/// Consumers would generally use [`TransferSyntaxRegistry`] instead.
pub struct TransferSyntaxRegistryImpl {
    m: HashMap<&'static str, TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistryImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> =
            self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistryImpl")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistryImpl {
    /// Obtain an iterator of all registered transfer syntaxes.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        self.m.values()
    }

    /// Obtain a DICOM codec by transfer syntax UID.
    fn get<U: AsRef<str>>(&self, uid: U) -> Option<&TransferSyntax> {
        let ts_uid = uid
            .as_ref()
            .trim_end_matches(|c: char| c == '\0' || c == ' ');
        self.m.get(ts_uid)
    }

    /// Register the given transfer syntax (TS) to the system. It can override
    /// another TS with the same UID, in the only case that the TS
    /// is known but marked as unsupported at the moment.
    /// Returns whether the registry was changed.
    fn register(&mut self, ts: TransferSyntax) -> bool {
        match self.m.entry(ts.uid()) {
            Entry::Occupied(mut e) => {
                let replace = match (e.get().codec(), ts.codec()) {
                    (Codec::Unsupported, Codec::Unsupported) => false,
                    (Codec::Unsupported, _) => true,
                    _ => false,
                };
                if replace {
                    e.insert(ts);
                } else {
                    warn!(
                        "Transfer syntax {} ({}) is already registered",
                        ts.uid(),
                        ts.name()
                    );
                }
                replace
            }
            Entry::Vacant(e) => {
                e.insert(ts);
                true
            }
        }
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistryImpl {
    #[inline]
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        Self::get(self, uid)
    }
}

/// Zero-sized representative of the main transfer syntax registry.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntaxRegistry;

impl TransferSyntaxRegistry {
    /// Obtain an iterator of all registered transfer syntaxes.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        get_registry().iter()
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    #[inline]
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        get_registry().get(uid)
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistryImpl = {
        let mut registry = TransferSyntaxRegistryImpl { m: HashMap::new() };
        for ts in initial_entries() {
            registry.register(ts);
        }
        registry
    };
}

/// Retrieve the default transfer syntax,
/// which is Implicit VR Little Endian.
pub fn default() -> TransferSyntax {
    entries::IMPLICIT_VR_LITTLE_ENDIAN
}

/// Retrieve a reference to the global codec registry.
#[inline]
pub(crate) fn get_registry() -> &'static TransferSyntaxRegistryImpl {
    &REGISTRY
}

fn initial_entries() -> Vec<TransferSyntax> {
    use crate::entries::*;
    vec![
        // the base transfer syntaxes, fully supported
        IMPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_BIG_ENDIAN,
        DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
        // stubs, pixel data kept encapsulated
        JPEG_BASELINE,
        JPEG_EXTENDED,
        JPEG_LOSSLESS_NON_HIERARCHICAL,
        JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION,
        JPEG_LS_LOSSLESS_IMAGE_COMPRESSION,
        JPEG_LS_LOSSY_IMAGE_COMPRESSION,
        JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        JPEG_2000_IMAGE_COMPRESSION,
        MPEG2_MAIN_PROFILE_MAIN_LEVEL,
        MPEG4_AVC_H264_HIGH_PROFILE,
        RLE_LOSSLESS,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmcodec_encoding::transfer_syntax::Endianness;

    #[test]
    fn contains_base_ts() {
        let ts = TransferSyntaxRegistry;

        let implicit_vr_le = ts.get("1.2.840.10008.1.2").expect("Implicit VR LE should exist");
        assert_eq!(implicit_vr_le.uid(), "1.2.840.10008.1.2");
        assert_eq!(implicit_vr_le.endianness(), Endianness::Little);
        assert!(!implicit_vr_le.is_explicit_vr());
        assert_eq!(implicit_vr_le.codec(), Codec::None);

        let explicit_vr_be = ts.get("1.2.840.10008.1.2.2").expect("Explicit VR BE should exist");
        assert_eq!(explicit_vr_be.endianness(), Endianness::Big);
        assert!(explicit_vr_be.is_explicit_vr());
        assert!(explicit_vr_be.is_supported());

        let deflated = ts.get("1.2.840.10008.1.2.1.99").unwrap();
        assert!(deflated.is_deflated());
    }

    #[test]
    fn trailing_padding_is_ignored() {
        let ts = TransferSyntaxRegistry;
        assert!(ts.get("1.2.840.10008.1.2.1\0").is_some());
        assert!(ts.get("1.2.840.10008.1.2.5 ").is_some());
        assert!(ts.get("1.2.840.10008.1.2.1.2").is_none());
    }

    #[test]
    fn stubs_keep_pixel_data_encapsulated() {
        let ts = TransferSyntaxRegistry.get("1.2.840.10008.1.2.4.50").unwrap();
        assert!(ts.is_encapsulated_pixel_data());
        assert!(ts.is_supported());
        assert!(ts.decoder().is_some());
    }

    #[test]
    fn registration_does_not_replace_supported_entries() {
        let mut registry = TransferSyntaxRegistryImpl { m: HashMap::new() };
        assert!(registry.register(entries::EXPLICIT_VR_LITTLE_ENDIAN));
        assert!(!registry.register(entries::EXPLICIT_VR_LITTLE_ENDIAN));
        assert_eq!(registry.iter().count(), 1);
    }
}
