//! Collection load/save
//!
//! Load pipeline: read the file's full text, decode it as a generic JSON
//! tree, run the variant's structural contract over it, then deserialize
//! into typed records. The generic tree is the trust boundary; typed
//! records only exist for collections the validator accepted.
//!
//! A missing file yields an empty collection under every policy (first-run
//! affordance). Any other failure follows the variant's `LoadPolicy`.
//!
//! Save writes 4-space-indented JSON with non-ASCII characters preserved
//! literally, to a sibling temp file that is renamed over the target, so a
//! concurrent reader never observes a partial write. Crash safety beyond
//! that is out of scope.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use crate::model::{LoadPolicy, Variant};
use crate::observability::Logger;
use crate::schema::CollectionValidator;

/// Loads a collection, surfacing every failure to the caller.
///
/// # Errors
///
/// - `StoreError::Io` if the file exists but cannot be read
/// - `StoreError::Decode` if the text is not valid JSON
/// - `StoreError::Schema` with the first contract violation
pub fn load<V: Variant>(path: &Path) -> StoreResult<Vec<V>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let tree: Value = serde_json::from_str(&text).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    CollectionValidator::validate(&V::schema(), &tree)?;

    // The validator accepted the tree; typed decoding of a conforming
    // collection only fails on defects the contract cannot express.
    serde_json::from_value(tree).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a collection under the variant's named load policy.
///
/// `Strict` propagates every failure. `Lenient` reports the failure
/// through the logger and yields an empty collection so the command can
/// continue.
pub fn load_with_policy<V: Variant>(path: &Path) -> StoreResult<Vec<V>> {
    match load(path) {
        Ok(records) => Ok(records),
        Err(err) => match V::LOAD_POLICY {
            LoadPolicy::Strict => Err(err),
            LoadPolicy::Lenient => {
                let path_text = path.display().to_string();
                let reason = err.to_string();
                Logger::warn(
                    "load_failed",
                    &[
                        ("path", path_text.as_str()),
                        ("reason", reason.as_str()),
                        ("variant", V::NAME),
                    ],
                );
                Ok(Vec::new())
            }
        },
    }
}

/// Saves a collection, overwriting the target file.
///
/// # Errors
///
/// - `StoreError::Encode` if serialization fails
/// - `StoreError::Io` if the temp file cannot be written or renamed
pub fn save<V: Variant>(path: &Path, records: &[V]) -> StoreResult<()> {
    let mut buf = Vec::with_capacity(4096);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|source| StoreError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    buf.push(b'\n');

    let tmp = temp_path(path);
    fs::write(&tmp, &buf).map_err(|source| StoreError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Sibling temp path: `<file>.tmp` in the same directory, so the final
/// rename never crosses a filesystem boundary.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
