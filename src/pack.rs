//! The conversion run: paths in, generated module on disk.
//!
//! This is the orchestration the interactive caller drives — derive a
//! logical name per input, encode each file in selection order, render the
//! module, and write it out. One file at a time, no shared state between
//! steps; every error surfaces to the caller untouched.
//!
//! ## Atomic output
//!
//! The module text is written to a sibling temp file and renamed into place
//! only on full success. A failed run — unreadable source, undecodable
//! image, name collision — leaves any previous output file exactly as it
//! was; there is no partial-write recovery because there are no partial
//! writes.

use crate::encoder::{EncodeError, Encoder};
use crate::generator::{self, GenerateError};
use crate::naming;
use crate::types::{EncodedAsset, ImageAsset};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}: path has no file name to use as a logical name")]
    BadSourcePath(PathBuf),
    #[error("output file {0} already exists")]
    OutputExists(PathBuf),
    #[error("{name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: EncodeError,
    },
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// What a successful run produced, for CLI display.
#[derive(Debug, Clone)]
pub struct PackReport {
    pub output: PathBuf,
    /// Encoder mode name ("capable" / "raw").
    pub mode: &'static str,
    pub entries: Vec<PackedEntry>,
}

#[derive(Debug, Clone)]
pub struct PackedEntry {
    pub logical_name: String,
    pub source_path: PathBuf,
    /// Size of the embedded payload text, in bytes.
    pub payload_bytes: usize,
}

/// Run one conversion: encode `inputs` in order and write the generated
/// module to `output`.
///
/// `target_size` applies uniformly to every input. An existing output file
/// is refused unless `overwrite` is set; with it, replacement is atomic.
pub fn pack(
    inputs: &[PathBuf],
    output: &Path,
    target_size: Option<(u32, u32)>,
    overwrite: bool,
    encoder: &dyn Encoder,
) -> Result<PackReport, PackError> {
    if output.exists() && !overwrite {
        return Err(PackError::OutputExists(output.to_path_buf()));
    }

    let mut encoded = Vec::with_capacity(inputs.len());
    let mut entries = Vec::with_capacity(inputs.len());

    for input in inputs {
        let logical_name = naming::derive_logical_name(input)
            .ok_or_else(|| PackError::BadSourcePath(input.clone()))?;

        let mut asset = ImageAsset::new(logical_name.clone(), input.clone());
        asset.target_size = target_size;

        let payload = encoder.encode(&asset).map_err(|source| PackError::Encode {
            name: logical_name.clone(),
            source,
        })?;

        entries.push(PackedEntry {
            logical_name: logical_name.clone(),
            source_path: input.clone(),
            payload_bytes: payload.len(),
        });
        encoded.push(EncodedAsset {
            logical_name,
            payload,
        });
    }

    let module = generator::generate(&encoded)?;
    write_atomic(output, &module)?;

    Ok(PackReport {
        output: output.to_path_buf(),
        mode: encoder.mode(),
        entries,
    })
}

/// Write to a sibling `.tmp` file, then rename over the destination.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    std::fs::write(&tmp, contents)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::MinimalEncoder;
    use crate::encoder::tests::MockEncoder;

    fn write_gif(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"GIF89a\x01\x00\x01\x00").unwrap();
        path
    }

    #[test]
    fn packs_files_in_selection_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        let inputs = vec![write_gif(tmp.path(), "b.gif"), write_gif(tmp.path(), "a.gif")];
        let output = tmp.path().join("images.py");

        let report = pack(&inputs, &output, None, false, &MinimalEncoder::new()).unwrap();

        assert_eq!(report.mode, "raw");
        let names: Vec<&str> = report
            .entries
            .iter()
            .map(|e| e.logical_name.as_str())
            .collect();
        assert_eq!(names, vec!["b.gif", "a.gif"]);
        assert!(report.entries.iter().all(|e| e.payload_bytes > 0));

        let module = std::fs::read_to_string(&output).unwrap();
        let b_pos = module.find("\"b.gif\"").unwrap();
        let a_pos = module.find("\"a.gif\"").unwrap();
        assert!(b_pos < a_pos, "entries must keep selection order");
        assert!(module.contains("def load_image(name):"));
    }

    #[test]
    fn target_size_reaches_every_asset() {
        let tmp = tempfile::TempDir::new().unwrap();
        let inputs = vec![write_gif(tmp.path(), "a.gif"), write_gif(tmp.path(), "b.gif")];
        let output = tmp.path().join("images.py");

        let encoder = MockEncoder::new();
        pack(&inputs, &output, Some((16, 16)), false, &encoder).unwrap();

        assert_eq!(
            encoder.get_calls(),
            vec![
                ("a.gif".to_string(), Some((16, 16))),
                ("b.gif".to_string(), Some((16, 16))),
            ]
        );
    }

    #[test]
    fn refuses_existing_output_without_overwrite() {
        let tmp = tempfile::TempDir::new().unwrap();
        let inputs = vec![write_gif(tmp.path(), "a.gif")];
        let output = tmp.path().join("images.py");
        std::fs::write(&output, "previous contents").unwrap();

        let result = pack(&inputs, &output, None, false, &MinimalEncoder::new());
        assert!(matches!(result, Err(PackError::OutputExists(_))));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "previous contents"
        );
    }

    #[test]
    fn overwrite_replaces_existing_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let inputs = vec![write_gif(tmp.path(), "a.gif")];
        let output = tmp.path().join("images.py");
        std::fs::write(&output, "previous contents").unwrap();

        pack(&inputs, &output, None, true, &MinimalEncoder::new()).unwrap();
        let module = std::fs::read_to_string(&output).unwrap();
        assert!(module.contains("\"a.gif\""));
    }

    #[test]
    fn failed_encode_leaves_previous_output_untouched() {
        let tmp = tempfile::TempDir::new().unwrap();
        let inputs = vec![
            write_gif(tmp.path(), "a.gif"),
            tmp.path().join("missing.gif"),
        ];
        let output = tmp.path().join("images.py");
        std::fs::write(&output, "previous contents").unwrap();

        let result = pack(&inputs, &output, None, true, &MinimalEncoder::new());
        assert!(matches!(
            result,
            Err(PackError::Encode { name, source: EncodeError::Read(_) }) if name == "missing.gif"
        ));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "previous contents"
        );
        assert!(!tmp.path().join("images.py.tmp").exists());
    }

    #[test]
    fn duplicate_logical_names_fail_the_run() {
        let tmp = tempfile::TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        let inputs = vec![write_gif(tmp.path(), "a.gif"), write_gif(&sub, "a.gif")];
        let output = tmp.path().join("images.py");

        let result = pack(&inputs, &output, None, false, &MinimalEncoder::new());
        assert!(matches!(
            result,
            Err(PackError::Generate(GenerateError::DuplicateName(n))) if n == "a.gif"
        ));
        assert!(!output.exists());
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let inputs = vec![PathBuf::from("/")];
        let output = tmp.path().join("images.py");

        let result = pack(&inputs, &output, None, false, &MinimalEncoder::new());
        assert!(matches!(result, Err(PackError::BadSourcePath(_))));
    }

    #[test]
    fn embedded_payload_round_trips_through_the_module() {
        let tmp = tempfile::TempDir::new().unwrap();
        let bytes = b"GIF89a\x01\x00\x01\x00";
        let inputs = vec![write_gif(tmp.path(), "a.gif")];
        let output = tmp.path().join("images.py");

        pack(&inputs, &output, None, false, &MinimalEncoder::new()).unwrap();

        let module = std::fs::read_to_string(&output).unwrap();
        let start = module.find("\"a.gif\": \"\"\"\n").unwrap() + "\"a.gif\": \"\"\"\n".len();
        let end = module[start..].find("\"\"\",").unwrap() + start;
        let payload = &module[start..end];
        assert_eq!(
            crate::encoder::decode_payload(payload).unwrap(),
            bytes.to_vec()
        );
    }
}
