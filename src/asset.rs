// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Asset module carries the pre-parsed payload of a baked sprite font.
//!
//! Atlas images and texture upload live elsewhere in the engine; this module
//! only moves the glyph-table side of a font around: glyph metrics, line
//! spacing, the optional default character and the atlas dimensions the
//! source rects index into. Payloads travel as bincode blobs or as json,
//! mirroring how packing tools emit them.

use crate::font::glyph::Glyph;
use crate::font::{FontError, FontResult};
use log::info;
use serde::{Deserialize, Serialize};

/// Baked sprite font payload, produced by an offline packing tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontAtlasData {
    pub glyphs: Vec<Glyph>,
    pub line_spacing: f32,
    pub default_codepoint: Option<u32>,
    pub atlas_width: u32,
    pub atlas_height: u32,
}

impl FontAtlasData {
    /// Decode a bincode payload.
    pub fn from_bytes(data: &[u8]) -> FontResult<Self> {
        let (payload, _len): (FontAtlasData, usize) =
            bincode::serde::decode_from_slice(data, bincode::config::standard())
                .map_err(|e| FontError::AssetLoadFailure(format!("bincode decode: {}", e)))?;
        payload.validate()?;
        Ok(payload)
    }

    /// Decode a json payload.
    pub fn from_json(json: &str) -> FontResult<Self> {
        let payload: FontAtlasData = serde_json::from_str(json)
            .map_err(|e| FontError::AssetLoadFailure(format!("json decode: {}", e)))?;
        payload.validate()?;
        Ok(payload)
    }

    /// Read and decode a payload file: json when the name ends with .json,
    /// bincode otherwise.
    pub fn load(path: &str) -> FontResult<Self> {
        let raw = std::fs::read(path)
            .map_err(|e| FontError::AssetLoadFailure(format!("read {}: {}", path, e)))?;
        info!("font asset load: {}", path);
        if path.to_lowercase().ends_with(".json") {
            let text = String::from_utf8(raw).map_err(|_| {
                FontError::AssetLoadFailure(format!("{} is not utf-8 json", path))
            })?;
            Self::from_json(&text)
        } else {
            Self::from_bytes(&raw)
        }
    }

    /// Encode into a bincode payload. Used by baking tools; the decode side
    /// is from_bytes.
    pub fn to_bytes(&self) -> FontResult<Vec<u8>> {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| FontError::AssetLoadFailure(format!("bincode encode: {}", e)))
    }

    // Geometry sanity: every source rect must stay inside the atlas.
    fn validate(&self) -> FontResult<()> {
        if !self.line_spacing.is_finite() {
            return Err(FontError::AssetLoadFailure(
                "line spacing is not finite".to_string(),
            ));
        }
        if self.atlas_width == 0 || self.atlas_height == 0 {
            return Err(FontError::AssetLoadFailure(
                "atlas dimensions are zero".to_string(),
            ));
        }
        for g in &self.glyphs {
            if g.source.x < 0
                || g.source.y < 0
                || g.source.right() > self.atlas_width as i32
                || g.source.bottom() > self.atlas_height as i32
            {
                return Err(FontError::AssetLoadFailure(format!(
                    "glyph U+{:04X} source rect escapes the atlas",
                    g.codepoint
                )));
            }
        }
        Ok(())
    }
}
