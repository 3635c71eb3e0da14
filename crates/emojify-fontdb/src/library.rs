//! Face discovery on top of `fontdb`

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use fontdb::{Database, Family, Query, Style, Weight, ID};
use parking_lot::RwLock;

use emojify_core::{
    error::{FontLoadError, Result},
    style::{FontStyle, FontWeight},
    traits::{FontProvider, FontRef, FontRequest},
};

use crate::Font;

type FaceKey = (ID, bool, Option<u16>);

/// Every face emojify can draw with
///
/// Requests resolve in three steps: the exact family (nearest weight and
/// style), then the database's sans-serif family, then whatever face was
/// indexed first. Each fallback is logged at `warn`.
///
/// ```ignore
/// let mut library = FontLibrary::system();
/// library.load_fonts_dir("./fonts");
/// let face = library.resolve(&style.font_request())?;
/// ```
pub struct FontLibrary {
    db: Database,
    /// Loaded faces keyed by face id, synthetic-oblique flag and, for
    /// variable faces, the requested weight
    cache: RwLock<HashMap<FaceKey, Arc<Font>>>,
}

impl FontLibrary {
    /// A library with no faces at all
    pub fn empty() -> Self {
        Self {
            db: Database::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// A library pre-filled with the platform's installed fonts
    pub fn system() -> Self {
        let mut library = Self::empty();
        library.db.load_system_fonts();
        log::debug!("Indexed {} system font faces", library.db.len());
        library
    }

    /// Index one font file
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data =
            fs::read(path).map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;
        self.load_font_data(data)?;
        log::debug!("Loaded font file {}", path.display());
        Ok(())
    }

    /// Index every font file under `path`, recursively
    pub fn load_fonts_dir(&mut self, path: impl AsRef<Path>) {
        let before = self.db.len();
        self.db.load_fonts_dir(path.as_ref());
        log::debug!(
            "Indexed {} faces from {}",
            self.db.len() - before,
            path.as_ref().display()
        );
    }

    /// Index font bytes held in memory
    pub fn load_font_data(&mut self, data: Vec<u8>) -> Result<()> {
        read_fonts::FileRef::new(&data).map_err(|_| FontLoadError::InvalidData)?;
        self.db.load_font_data(data);
        Ok(())
    }

    /// Number of indexed faces
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Sorted, de-duplicated family names
    pub fn families(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .db
            .faces()
            .filter_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Find the best face for `request`, with fallbacks
    ///
    /// Returns the face id and whether the requested family itself matched.
    pub fn query(&self, request: &FontRequest) -> Option<(ID, bool)> {
        let style = match request.style {
            FontStyle::Normal => Style::Normal,
            FontStyle::Italic => Style::Italic,
        };
        let lookup = |family: Family<'_>| {
            self.db.query(&Query {
                families: &[family],
                weight: Weight(request.weight.0),
                style,
                stretch: fontdb::Stretch::Normal,
            })
        };

        if let Some(id) = lookup(named_family(&request.family)) {
            return Some((id, true));
        }
        if let Some(id) = lookup(Family::SansSerif) {
            log::warn!(
                "Font family {:?} not found, falling back to sans-serif",
                request.family
            );
            return Some((id, false));
        }
        let first = self.db.faces().next().map(|face| face.id)?;
        log::warn!(
            "Font family {:?} not found and no sans-serif face, using the first indexed face",
            request.family
        );
        Some((first, false))
    }

    /// Load a face by id, sharing the bytes with earlier loads
    ///
    /// Variable faces are instanced at `weight`; static faces ignore it.
    pub fn load(&self, id: ID, synthetic_oblique: bool, weight: FontWeight) -> Result<Arc<Font>> {
        let face = self.load_face(id, synthetic_oblique)?;
        if !face.has_weight_axis() {
            return Ok(face);
        }

        let key = (id, synthetic_oblique, Some(weight.0));
        if let Some(font) = self.cache.read().get(&key) {
            return Ok(font.clone());
        }
        let font = Arc::new(face.at_weight(weight.0));
        log::debug!(
            "Instanced {} at wght {:?}",
            font.family(),
            font.variation_weight()
        );
        self.cache.write().insert(key, font.clone());
        Ok(font)
    }

    fn load_face(&self, id: ID, synthetic_oblique: bool) -> Result<Arc<Font>> {
        if let Some(font) = self.cache.read().get(&(id, synthetic_oblique, None)) {
            return Ok(font.clone());
        }

        let face = self.db.face(id).ok_or(FontLoadError::NoFonts)?;
        let family = face
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        let italic = face.style != Style::Normal;

        let font = self
            .db
            .with_face_data(id, |data, index| Font::from_data_index(data.to_vec(), index))
            .ok_or_else(|| FontLoadError::FamilyNotFound(family.clone()))??
            .with_face_info(&family, italic)
            .with_synthetic_oblique(synthetic_oblique);

        let font = Arc::new(font);
        self.cache.write().insert((id, synthetic_oblique, None), font.clone());
        Ok(font)
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::empty()
    }
}

impl FontProvider for FontLibrary {
    fn resolve(&self, request: &FontRequest) -> Result<Arc<dyn FontRef>> {
        let (id, _) = self.query(request).ok_or(FontLoadError::NoFonts)?;
        let upright = self
            .db
            .face(id)
            .map(|face| face.style == Style::Normal)
            .unwrap_or(true);
        let synthetic = request.style == FontStyle::Italic && upright;
        if synthetic {
            log::debug!("No italic face for {:?}, slanting upright face", request.family);
        }
        let font = self.load(id, synthetic, request.weight)?;
        log::debug!(
            "Resolved {:?} {} {:?} -> {}",
            request.family,
            request.weight,
            request.style,
            font.family()
        );
        Ok(font)
    }
}

/// CSS generic names map to fontdb's generic families
fn named_family(name: &str) -> Family<'_> {
    match name.trim().to_ascii_lowercase().as_str() {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(name.trim()),
    }
}
