//! Fixed catalogs of three.js shader chunks and materials
//!
//! The key sets mirror one three.js release and never grow at run time; only the
//! boolean inclusion flags change. Each catalog is a plain struct with one named
//! field per key, generated from the versioned name list by the `catalog!` macro.

/// Defines a catalog struct with one `bool` field per known name.
///
/// Each entry is written as `field => "key"`, where `key` is the name used in the
/// three.js source and in caller configuration.
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident as $label:literal {
            $($field:ident => $key:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        $vis struct $name {
            $(
                #[doc = concat!("`", $key, "`")]
                pub $field: bool,
            )*
        }

        impl $name {
            /// Human-readable catalog name used in error reports
            pub const LABEL: &'static str = $label;

            /// Every known name, in declaration order
            pub const NAMES: &'static [&'static str] = &[$($key),*];

            /// Returns the inclusion flag for `name`, or `None` if the name is unknown
            pub fn get(&self, name: &str) -> Option<bool> {
                match name {
                    $($key => Some(self.$field),)*
                    _ => None,
                }
            }

            fn slot_mut(&mut self, name: &str) -> Option<&mut bool> {
                match name {
                    $($key => Some(&mut self.$field),)*
                    _ => None,
                }
            }

            /// Sets the inclusion flag for a known name
            ///
            /// Unknown names are rejected; the catalog is left unchanged.
            pub fn set(&mut self, name: &str, included: bool) -> crate::Result<()> {
                match self.slot_mut(name) {
                    Some(slot) => {
                        *slot = included;
                        Ok(())
                    }
                    None => Err(crate::Error::UnknownNames {
                        catalog: Self::LABEL,
                        names: vec![name.to_string()],
                    }),
                }
            }

            /// Iterates over `(name, included)` pairs in declaration order
            pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
                Self::NAMES.iter().map(move |name| (*name, self.get(name).unwrap_or(false)))
            }

            /// Builds a catalog from the all-excluded default and a set of overrides
            ///
            /// The merge is all or nothing: if any override names an unknown key, every
            /// unknown key is reported and no catalog is produced.
            pub fn with_overrides<'a, I>(overrides: I) -> crate::Result<Self>
            where
                I: IntoIterator<Item = (&'a str, bool)>,
            {
                let mut catalog = Self::default();
                let mut unknown = Vec::new();
                for (name, included) in overrides {
                    match catalog.slot_mut(name) {
                        Some(slot) => *slot = included,
                        None => unknown.push(name.to_string()),
                    }
                }

                if unknown.is_empty() {
                    Ok(catalog)
                } else {
                    Err(crate::Error::UnknownNames {
                        catalog: Self::LABEL,
                        names: unknown,
                    })
                }
            }
        }
    };
}

mod chunks;
mod materials;
mod policy;

pub use chunks::ChunkCatalog;
pub use materials::{MATERIAL_STEMS, MaterialCatalog};
pub use policy::InclusionPolicy;
