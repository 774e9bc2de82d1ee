use crate::codec::Codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::{atomic_write, create_new};
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};

use super::helpers::require;

/// Decodes an alias back into its script.
///
/// Without a destination the script is returned in the result. With one, the
/// file is created and must not exist yet unless `overwrite` is set.
pub fn run<S: DocumentStore>(
    store: &S,
    name: &str,
    dest: Option<&Path>,
    overwrite: bool,
) -> Result<CmdResult> {
    let doc = store.load()?;
    let entry = require(&doc, name)?;
    let script = Codec::decode(&entry.payload)?;

    let Some(dest) = dest else {
        return Ok(CmdResult::default().with_script(script));
    };

    let path = destination_path(dest);
    if overwrite {
        atomic_write(&path, &script)?;
    } else {
        create_new(&path, &script)?;
    }

    let mut result = CmdResult::default().with_written_path(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Exported {} to {}",
        name,
        path.display()
    )));
    Ok(result)
}

/// Destinations without an extension are saved as `.py` files.
fn destination_path(dest: &Path) -> PathBuf {
    if dest.extension().is_some() {
        dest.to_path_buf()
    } else {
        dest.with_extension("py")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OneLinerError;
    use crate::model::Entry;
    use crate::store::memory::fixtures::StoreFixture;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn exports_to_terminal() {
        let store = StoreFixture::new().with_script("greet", "print('hi')").build();
        let out = run(&store, "greet", None, false).unwrap();
        assert_eq!(out.script.unwrap(), b"print('hi')");
        assert!(out.written_path.is_none());
    }

    #[test]
    fn exports_to_new_file_with_py_extension() {
        let dir = tempdir().unwrap();
        let store = StoreFixture::new().with_script("greet", "print('hi')").build();

        let out = run(&store, "greet", Some(&dir.path().join("greet")), false).unwrap();
        let written = out.written_path.unwrap();
        assert_eq!(written, dir.path().join("greet.py"));
        assert_eq!(fs::read_to_string(written).unwrap(), "print('hi')");
    }

    #[test]
    fn keeps_explicit_extension() {
        let dir = tempdir().unwrap();
        let store = StoreFixture::new().with_script("greet", "x").build();
        let out = run(&store, "greet", Some(&dir.path().join("greet.txt")), false).unwrap();
        assert_eq!(out.written_path.unwrap(), dir.path().join("greet.txt"));
    }

    #[test]
    fn existing_destination_needs_overwrite() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("greet.py");
        fs::write(&target, "keep me").unwrap();
        let store = StoreFixture::new().with_script("greet", "print('hi')").build();

        let err = run(&store, "greet", Some(&target), false).unwrap_err();
        assert!(matches!(err, OneLinerError::DestinationExists(ref p) if p == &target));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");

        run(&store, "greet", Some(&target), true).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "print('hi')");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let store = StoreFixture::new().build();
        assert!(matches!(
            run(&store, "ghost", None, false),
            Err(OneLinerError::NotFound(_))
        ));
    }

    #[test]
    fn corrupt_payload_is_malformed() {
        let store = StoreFixture::new()
            .with_raw_entry(Entry::new("broken", "'python3 -c \"nothing embedded\"'"))
            .build();
        assert!(matches!(
            run(&store, "broken", None, false),
            Err(OneLinerError::MalformedPayload(_))
        ));
    }
}
