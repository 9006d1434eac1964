use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use vector2d::Vector2D;

/// One vector in an input file: either `[x, y]` or `{"x": .., "y": ..}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VectorInput {
    Pair([f64; 2]),
    Object { x: f64, y: f64 },
}

impl From<VectorInput> for Vector2D {
    fn from(v: VectorInput) -> Self {
        match v {
            VectorInput::Pair(p) => Vector2D::from(p),
            VectorInput::Object { x, y } => Vector2D::new(x, y),
        }
    }
}

/// Parse a JSON array of vectors.
pub fn parse_vectors(text: &str) -> Result<Vec<Vector2D>> {
    let raw: Vec<VectorInput> =
        serde_json::from_str(text).context("expected a JSON array of [x, y] or {x, y}")?;
    Ok(raw.into_iter().map(Vector2D::from).collect())
}

pub fn read_vectors<P: AsRef<Path>>(path: P) -> Result<Vec<Vector2D>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_vectors(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Write `bytes` to `out`, creating parent directories as needed.
pub fn write_output<P: AsRef<Path>>(out: P, bytes: &[u8]) -> Result<()> {
    let out = out.as_ref();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_pairs_and_objects() {
        let vs = parse_vectors(r#"[[1, 2], {"x": -0.5, "y": 3e2}]"#).unwrap();
        assert_eq!(vs, vec![Vector2D::new(1.0, 2.0), Vector2D::new(-0.5, 300.0)]);
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(parse_vectors("[[1, 2, 3]]").is_err());
        assert!(parse_vectors(r#"{"x": 1, "y": 2}"#).is_err());
    }

    #[test]
    fn read_and_write_roundtrip_through_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.json");
        fs::write(&input, "[[3, 4]]").unwrap();
        assert_eq!(read_vectors(&input).unwrap(), vec![Vector2D::new(3.0, 4.0)]);

        let out = dir.path().join("nested/out.json");
        write_output(&out, b"{}").unwrap();
        assert_eq!(fs::read(&out).unwrap(), b"{}");
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = read_vectors("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
