//! Loading of the gzipped JSON datasets the index is built from.
//!
//! `names` is the flat run list, `control` maps decimal code points to the
//! list of aliases of a control character. Only the first alias is kept.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::{debug, warn};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::names::NameIndex;
use crate::runs::{Name, RunSequence, Validation};

pub fn read_runs<R: Read>(gzipped: R, validation: Validation) -> Result<RunSequence> {
    let value: Value = serde_json::from_reader(GzDecoder::new(gzipped))?;
    parse_runs(&value, validation)
}

pub fn read_control<R: Read>(gzipped: R, validation: Validation) -> Result<HashMap<u32, Name>> {
    let value: Value = serde_json::from_reader(GzDecoder::new(gzipped))?;
    parse_control(&value, validation)
}

pub fn parse_runs(value: &Value, validation: Validation) -> Result<RunSequence> {
    let values = value.as_array().ok_or(Error::UnexpectedShape {
        expected: "a flat array of runs",
    })?;
    RunSequence::from_flat(values, validation)
}

pub fn parse_control(value: &Value, validation: Validation) -> Result<HashMap<u32, Name>> {
    let object = value.as_object().ok_or(Error::UnexpectedShape {
        expected: "an object of code points to name lists",
    })?;

    let mut control = HashMap::with_capacity(object.len());
    for (key, names) in object {
        let cp = match key.parse::<u32>() {
            Ok(cp) => cp,
            Err(_) if validation == Validation::Strict => {
                return Err(Error::InvalidOverrideKey { key: key.clone() });
            }
            Err(_) => {
                warn!("skipping control entry with key {:?}", key);
                continue;
            }
        };

        let preferred = match names.as_array() {
            Some(list) => list.first().and_then(Value::as_str),
            None if validation == Validation::Strict => {
                return Err(Error::UnexpectedShape {
                    expected: "a list of names for each control code point",
                });
            }
            None => {
                warn!("skipping control entry {} without a name list", key);
                continue;
            }
        };

        if let Some(name) = preferred {
            control.insert(cp, Name::from(name));
        }
    }

    Ok(control)
}

/// Reads both datasets from disk and builds an index with the control names
/// as its only override map.
pub fn load_index(names: &Path, control: Option<&Path>, validation: Validation) -> Result<NameIndex> {
    let runs = read_runs(BufReader::new(File::open(names)?), validation)?;
    debug!("loaded {} runs from {}", runs.len(), names.display());

    let mut overrides = Vec::new();
    if let Some(path) = control {
        let control = read_control(BufReader::new(File::open(path)?), validation)?;
        debug!("loaded {} control names from {}", control.len(), path.display());
        overrides.push(control);
    }

    Ok(NameIndex::new(runs, overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use serde_json::json;
    use std::io::Write;

    fn gzip(value: &Value) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(value.to_string().as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn builds_index_from_gzipped_datasets() {
        let names = gzip(&json!([0, 32, "<control>", 0, 1, "SPACE", 32, 1, "LATIN CAPITAL LETTER A"]));
        let control = gzip(&json!({
            "0": ["NULL", "NUL"],
            "10": ["LINE FEED", "NEW LINE", "END OF LINE", "LF", "NL", "EOL"],
        }));

        let runs = read_runs(&names[..], Validation::Strict).unwrap();
        let control = read_control(&control[..], Validation::Strict).unwrap();
        let mut index = NameIndex::new(runs, vec![control]);

        assert_eq!(index.get_by_code_point(0), Some("NULL"));
        assert_eq!(index.get_by_code_point(10), Some("LINE FEED"));
        assert_eq!(index.get_by_code_point(1), Some("<control>"));
        assert_eq!(index.get_by_code_point(32), Some("SPACE"));
        assert_eq!(index.get_by_code_point(65), Some("LATIN CAPITAL LETTER A"));
    }

    #[test]
    fn control_with_empty_list_is_skipped() {
        let control = parse_control(&json!({"7": [], "8": ["BACKSPACE"]}), Validation::Strict).unwrap();
        assert_eq!(control.len(), 1);
        assert_eq!(control.get(&8).map(|n| &**n), Some("BACKSPACE"));
    }

    #[test]
    fn bad_control_key_depends_on_validation() {
        let value = json!({"x": ["BOGUS"], "9": ["CHARACTER TABULATION"]});
        let lenient = parse_control(&value, Validation::Lenient).unwrap();
        assert_eq!(lenient.len(), 1);

        match parse_control(&value, Validation::Strict) {
            Err(Error::InvalidOverrideKey { key }) => assert_eq!(key, "x"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(matches!(
            parse_runs(&json!({"0": 1}), Validation::Lenient),
            Err(Error::UnexpectedShape { .. })
        ));
        assert!(matches!(
            parse_control(&json!([0, 1, "A"]), Validation::Lenient),
            Err(Error::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn corrupt_gzip_fails_to_load() {
        let result = read_runs(&b"not gzip"[..], Validation::Lenient);
        assert!(result.is_err());
    }
}
