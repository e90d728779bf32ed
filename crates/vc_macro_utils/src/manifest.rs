use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table, TomlError};

/// The caller's `Cargo.toml`, used to find how generated code can name a
/// crate.
///
/// # Example
///
/// ```no_run
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_inspect"));
/// ```
///
/// # Resolution rules
///
/// 1. A crate listed in `dependencies` is named `::crate_name`.
/// 2. A `vc_` crate reached through the facade `vc_testkit` is named
///    `::vc_testkit::short_name` (`vc_inspect` -> `::vc_testkit::inspect`).
/// 3. Both rules are tried again with `dev-dependencies`.
/// 4. Otherwise the path is `::crate_name`.
///
/// A crate naming itself from its own tests needs
/// `extern crate self as crate_name;` in its root for rule 4 to resolve.
#[derive(Debug)]
pub struct Manifest {
    document: Document<Box<str>>,
    modified: SystemTime,
}

const FACADE_NAME: &str = "vc_testkit";
const MODULE_PREFIX: &str = "vc_";
const DEPENDENCY_SECTIONS: [&str; 2] = ["dependencies", "dev-dependencies"];

impl Manifest {
    /// Parse a manifest from its text.
    pub fn parse(text: &str) -> Result<Self, TomlError> {
        Ok(Self {
            document: Document::parse(Box::from(text))?,
            modified: SystemTime::UNIX_EPOCH,
        })
    }

    /// Path of the `Cargo.toml` of the crate being compiled.
    fn caller_path() -> PathBuf {
        let Some(dir) = env::var_os("CARGO_MANIFEST_DIR") else {
            panic!("`CARGO_MANIFEST_DIR` is not set, the macro must be expanded by cargo");
        };
        Path::new(&dir).join("Cargo.toml")
    }

    fn load(path: &Path, modified: SystemTime) -> Self {
        let text = fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("cannot read `{}`: {err}", path.display()));
        let mut manifest = Self::parse(&text)
            .unwrap_or_else(|err| panic!("cannot parse `{}`: {err}", path.display()));
        manifest.modified = modified;
        manifest
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap_or_else(|err| panic!("Invalid crate path `{path}`: {err}"))
    }

    fn dependency_path(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }
        let module = name.strip_prefix(MODULE_PREFIX)?;
        if !deps.contains_key(FACADE_NAME) {
            return None;
        }
        let mut path = Self::parse_str::<syn::Path>(&format!("::{FACADE_NAME}"));
        path.segments.push(Self::parse_str(module));
        Some(path)
    }

    /// Path of the crate `name` as seen from this manifest, following the
    /// resolution rules above.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        DEPENDENCY_SECTIONS
            .into_iter()
            .filter_map(|section| self.document.get(section).and_then(Item::as_table))
            .find_map(|deps| Self::dependency_path(deps, name))
            .unwrap_or_else(|| Self::parse_str(&format!("::{name}")))
    }

    /// Run `func` with the caller's manifest.
    ///
    /// Manifests are cached per path and reloaded when the file changes.
    /// Reading one is still costly, so macros call this once per expansion.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static CACHE: Mutex<BTreeMap<PathBuf, Manifest>> = Mutex::new(BTreeMap::new());

        let path = Self::caller_path();
        let modified = fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .unwrap_or_else(|err| panic!("cannot stat `{}`: {err}", path.display()));

        let mut cache = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
        let manifest = match cache.get(&path) {
            Some(manifest) if manifest.modified == modified => manifest,
            _ => {
                let manifest = Self::load(&path, modified);
                cache.entry(path).insert_entry(manifest).into_mut()
            }
        };
        func(manifest)
    }
}
