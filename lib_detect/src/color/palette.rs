use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};
use thiserror::Error;

use super::rgb::Rgb;

const BUILTIN_TABLE: &str = include_str!("../../assets/colors.csv");

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("palette table contains no colors")]
    Empty,
    #[error("malformed palette row at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("failed to read palette table: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub key: String,
    pub name: String,
    pub hex: String,
    pub rgb: Rgb,
}

impl PaletteEntry {
    /// Builds an entry from a display name; the key is derived from it.
    pub fn new(name: &str, hex: &str, rgb: Rgb) -> Self {
        Self {
            key: key_from_name(name),
            name: name.to_string(),
            hex: hex.to_string(),
            rgb,
        }
    }
}

/// Reference colors in table order. Never empty.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { entries })
    }

    /// Parses comma-separated rows, either `key,name,hex,R,G,B` or
    /// `name,hex,R,G,B`, without a header. Blank lines are skipped and
    /// fields may be double-quoted.
    pub fn parse(table: &str) -> Result<Self, PaletteError> {
        let table = table.strip_prefix('\u{feff}').unwrap_or(table);
        let mut entries = Vec::new();

        for (index, raw) in table.lines().enumerate() {
            let line = index + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let entry =
                parse_row(raw).map_err(|reason| PaletteError::Malformed { line, reason })?;
            debug!("Palette row {}: {} {}", line, entry.name, entry.hex);
            entries.push(entry);
        }

        Self::new(entries)
    }

    pub fn from_path(path: &Path) -> Result<Self, PaletteError> {
        let table = fs::read_to_string(path)?;
        let palette = Self::parse(&table)?;
        info!(
            "Loaded {} palette colors from {}",
            palette.len(),
            path.display()
        );
        Ok(palette)
    }

    /// The table compiled into the binary.
    pub fn builtin() -> Result<Self, PaletteError> {
        let palette = Self::parse(BUILTIN_TABLE)?;
        info!("Loaded {} built-in palette colors", palette.len());
        Ok(palette)
    }

    /// Prefers `path` when it exists, otherwise the built-in table. A file
    /// that exists but fails to parse is an error, not a fallback.
    pub fn load_or_builtin(path: &Path) -> Result<Self, PaletteError> {
        if path.is_file() {
            Self::from_path(path)
        } else {
            debug!("{} not found, using built-in palette", path.display());
            Self::builtin()
        }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Splits a row on commas outside double quotes. A doubled quote inside a
/// quoted field is a literal quote.
fn split_fields(raw: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field).trim().to_string()),
            _ => field.push(c),
        }
    }

    if quoted {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field.trim().to_string());
    Ok(fields)
}

fn parse_row(raw: &str) -> Result<PaletteEntry, String> {
    let fields = split_fields(raw)?;

    let (key, name, hex, channels) = match fields.as_slice() {
        [key, name, hex, r, g, b] => (key.clone(), name.as_str(), hex.as_str(), [r, g, b]),
        [name, hex, r, g, b] => (key_from_name(name), name.as_str(), hex.as_str(), [r, g, b]),
        _ => {
            return Err(format!(
                "expected 5 or 6 columns, found {}",
                fields.len()
            ))
        }
    };

    if name.is_empty() {
        return Err("color name is empty".to_string());
    }

    let mut rgb = [0u8; 3];
    for (slot, field) in rgb.iter_mut().zip(channels) {
        *slot = field
            .parse::<u8>()
            .map_err(|_| format!("channel value {:?} is not in 0..=255", field))?;
    }
    let rgb = Rgb::from(rgb);

    let parsed_hex = Rgb::from_hex(hex).map_err(|e| e.to_string())?;
    if parsed_hex != rgb {
        warn!(
            "Palette color {} has hex {} but channels {}; using channels",
            name, hex, rgb
        );
    }

    Ok(PaletteEntry {
        key,
        name: name.to_string(),
        hex: hex.to_string(),
        rgb,
    })
}

fn key_from_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}
