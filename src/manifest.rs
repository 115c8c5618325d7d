use crate::errors::*;
use crate::utils;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub constants: Vec<Entry>,
}

impl Manifest {
    pub fn load_from_str(s: &str) -> Result<Self> {
        let manifest = serde_yaml::from_str(s).context("Failed to load manifest from string")?;
        Ok(manifest)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| anyhow!("Failed to read file: {:?}", path))?;
        let manifest = Self::load_from_str(&s).context("Failed to deserialize manifest")?;
        manifest.validate().context("Manifest failed to validate")?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for entry in &self.constants {
            if !is_identifier(&entry.name) {
                bail!("Invalid identifier for constant: {:?}", entry.name);
            }
            if !names.insert(entry.name.as_str()) {
                bail!("Duplicate constant name: {:?}", entry.name);
            }
            if let Some(end) = entry.end {
                if end < entry.offset {
                    bail!(
                        "Range for {:?} ends before it starts: {}..{}",
                        entry.name,
                        entry.offset,
                        end
                    );
                }
            }
        }
        Ok(())
    }

    pub fn resolve(&self) -> Result<Vec<Constant>> {
        self.constants.iter().map(Entry::resolve).collect()
    }
}

pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// The identifier the constant is declared as
    pub name: String,
    /// The file providing the bytes (`-` reads from stdin)
    pub path: PathBuf,
    /// Offset of the first byte of the range
    #[serde(default)]
    pub offset: usize,
    /// Exclusive end of the range (defaults to the end of the input)
    pub end: Option<usize>,
}

impl Entry {
    pub fn slice<'a>(&self, data: &'a [u8]) -> Result<&'a [u8]> {
        let end = self.end.unwrap_or(data.len());
        if end < self.offset || end > data.len() {
            bail!(
                "Range {}..{} for {:?} is out of bounds ({} bytes available)",
                self.offset,
                end,
                self.name,
                data.len()
            );
        }
        Ok(&data[self.offset..end])
    }

    pub fn resolve(&self) -> Result<Constant> {
        debug!("Reading bytes for {:?} from {:?}...", self.name, self.path);
        let data = utils::read_input_path(&self.path)?;
        let data = self.slice(&data)?.to_vec();
        Ok(Constant {
            name: self.name.clone(),
            data,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest() -> Result<()> {
        let manifest = Manifest::load_from_str(
            "constants:
  - name: kvm_asm16_cpl3
    path: blobs/kvm_asm16_cpl3.bin
  - name: kvm_asm64_init_vm
    path: blobs/kvm.bin
    offset: 64
    end: 128
",
        )?;
        manifest.validate()?;
        assert_eq!(manifest.constants.len(), 2);
        assert_eq!(manifest.constants[0].name, "kvm_asm16_cpl3");
        assert_eq!(manifest.constants[0].offset, 0);
        assert_eq!(manifest.constants[0].end, None);
        assert_eq!(manifest.constants[1].name, "kvm_asm64_init_vm");
        assert_eq!(manifest.constants[1].offset, 64);
        assert_eq!(manifest.constants[1].end, Some(128));
        Ok(())
    }

    #[test]
    fn reject_invalid_identifier() -> Result<()> {
        let manifest = Manifest::load_from_str(
            "constants:
  - name: 1bad-name
    path: blob.bin
",
        )?;
        assert!(manifest.validate().is_err());
        Ok(())
    }

    #[test]
    fn reject_duplicate_name() -> Result<()> {
        let manifest = Manifest::load_from_str(
            "constants:
  - name: blob
    path: a.bin
  - name: blob
    path: b.bin
",
        )?;
        assert!(manifest.validate().is_err());
        Ok(())
    }

    #[test]
    fn reject_inverted_range() -> Result<()> {
        let manifest = Manifest::load_from_str(
            "constants:
  - name: blob
    path: a.bin
    offset: 8
    end: 4
",
        )?;
        assert!(manifest.validate().is_err());
        Ok(())
    }

    #[test]
    fn accept_identifiers() {
        assert!(is_identifier("kvm_asm16_cpl3"));
        assert!(is_identifier("_start"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier("no-dashes"));
        assert!(!is_identifier("no spaces"));
    }

    #[test]
    fn slice_default_range() -> Result<()> {
        let entry = Entry {
            name: "blob".to_string(),
            path: PathBuf::from("a.bin"),
            offset: 0,
            end: None,
        };
        assert_eq!(entry.slice(&[1, 2, 3])?, &[1, 2, 3]);
        Ok(())
    }

    #[test]
    fn slice_explicit_range() -> Result<()> {
        let entry = Entry {
            name: "blob".to_string(),
            path: PathBuf::from("a.bin"),
            offset: 1,
            end: Some(3),
        };
        assert_eq!(entry.slice(&[1, 2, 3, 4])?, &[2, 3]);
        Ok(())
    }

    #[test]
    fn slice_empty_range() -> Result<()> {
        let entry = Entry {
            name: "blob".to_string(),
            path: PathBuf::from("a.bin"),
            offset: 2,
            end: Some(2),
        };
        assert_eq!(entry.slice(&[1, 2, 3])?, &[] as &[u8]);
        Ok(())
    }

    #[test]
    fn slice_out_of_bounds() {
        let entry = Entry {
            name: "blob".to_string(),
            path: PathBuf::from("a.bin"),
            offset: 0,
            end: Some(4),
        };
        assert!(entry.slice(&[1, 2, 3]).is_err());

        let entry = Entry {
            name: "blob".to_string(),
            path: PathBuf::from("a.bin"),
            offset: 4,
            end: None,
        };
        assert!(entry.slice(&[1, 2, 3]).is_err());
    }
}
