//! Practice characters and their guide strokes.

use kurbo::BezPath;
use thiserror::Error;

/// Errors raised while building practice targets.
#[derive(Debug, Error)]
pub enum AlphabetError {
    #[error("invalid guide stroke for '{glyph}': {message}")]
    InvalidStrokePath { glyph: String, message: String },
}

/// One practice character: the glyph to trace plus its faint guide strokes.
///
/// Immutable once built; the engine only ever reads it. Guide strokes are
/// SVG path data parsed into [`BezPath`]s so the rendering collaborator can
/// draw them and the scorer can count them.
#[derive(Debug, Clone)]
pub struct TargetDescriptor {
    /// The character being practiced.
    pub glyph: String,
    /// Display name, e.g. "अ (a)".
    pub name: String,
    /// Pronunciation hint shown alongside the glyph.
    pub pronunciation: String,
    /// Audio asset file name for the pronunciation button.
    pub audio: String,
    guide_strokes: Vec<BezPath>,
}

impl TargetDescriptor {
    /// Build a descriptor, parsing each guide stroke from SVG path data.
    pub fn new(
        glyph: &str,
        name: &str,
        pronunciation: &str,
        audio: &str,
        stroke_specs: &[&str],
    ) -> Result<Self, AlphabetError> {
        let mut guide_strokes = Vec::with_capacity(stroke_specs.len());
        for spec in stroke_specs {
            let path = BezPath::from_svg(spec).map_err(|e| AlphabetError::InvalidStrokePath {
                glyph: glyph.to_string(),
                message: e.to_string(),
            })?;
            guide_strokes.push(path);
        }

        Ok(Self {
            glyph: glyph.to_string(),
            name: name.to_string(),
            pronunciation: pronunciation.to_string(),
            audio: audio.to_string(),
            guide_strokes,
        })
    }

    /// The guide strokes to render faintly under the child's trace.
    pub fn guide_strokes(&self) -> &[BezPath] {
        &self.guide_strokes
    }

    /// Number of guide strokes; the scorer's expected stroke activity.
    pub fn guide_stroke_count(&self) -> usize {
        self.guide_strokes.len()
    }
}

/// The built-in Devanagari vowel catalog.
///
/// Stroke data is approximate letter formation in a 100x100 design box,
/// scaled by the renderer to the practice surface.
pub fn builtin_catalog() -> Result<Vec<TargetDescriptor>, AlphabetError> {
    let entries: &[(&str, &str, &str, &str, &[&str])] = &[
        (
            "अ",
            "अ (a)",
            "Pronounced as 'a' in 'about'",
            "a.mp3",
            &[
                "M30,30 C40,20 60,20 70,30 C80,40 80,60 70,70 C60,80 40,80 30,70 C20,60 20,40 30,30",
                "M70,30 L70,70",
            ],
        ),
        (
            "आ",
            "आ (aa)",
            "Pronounced as 'a' in 'father'",
            "aa.mp3",
            &[
                "M20,30 C30,20 50,20 60,30 C70,40 70,60 60,70 C50,80 30,80 20,70 C10,60 10,40 20,30",
                "M60,30 L60,70",
                "M75,20 C85,30 85,70 75,80",
            ],
        ),
        (
            "इ",
            "इ (i)",
            "Pronounced as 'i' in 'sit'",
            "i.mp3",
            &["M50,20 L50,80", "M30,30 C40,20 60,20 70,30"],
        ),
        (
            "ई",
            "ई (ee)",
            "Pronounced as 'ee' in 'feet'",
            "ee.mp3",
            &[
                "M40,20 L40,80",
                "M20,30 C30,20 50,20 60,30",
                "M70,40 C80,50 80,70 70,80",
            ],
        ),
        (
            "उ",
            "उ (u)",
            "Pronounced as 'u' in 'put'",
            "u.mp3",
            &[
                "M30,30 C40,20 60,20 70,30",
                "M50,30 L50,70",
                "M30,70 C40,80 60,80 70,70",
            ],
        ),
        (
            "ऊ",
            "ऊ (oo)",
            "Pronounced as 'oo' in 'boot'",
            "oo.mp3",
            &[
                "M20,30 C30,20 50,20 60,30",
                "M40,30 L40,70",
                "M20,70 C30,80 50,80 60,70",
                "M70,40 C80,50 80,70 70,80",
            ],
        ),
        (
            "ए",
            "ए (e)",
            "Pronounced as 'e' in 'bed'",
            "e.mp3",
            &["M30,30 L70,30", "M50,30 L50,70", "M30,70 L70,70"],
        ),
        (
            "ऐ",
            "ऐ (ai)",
            "Pronounced as 'ai' in 'fair'",
            "ai.mp3",
            &[
                "M20,30 L60,30",
                "M40,30 L40,70",
                "M20,70 L60,70",
                "M70,20 C80,30 80,70 70,80",
            ],
        ),
        (
            "ओ",
            "ओ (o)",
            "Pronounced as 'o' in 'go'",
            "o.mp3",
            &[
                "M30,30 C40,20 60,20 70,30 C80,40 80,60 70,70 C60,80 40,80 30,70 C20,60 20,40 30,30",
                "M20,20 L80,20",
            ],
        ),
        (
            "औ",
            "औ (au)",
            "Pronounced as 'au' in 'caught'",
            "au.mp3",
            &[
                "M30,30 C40,20 60,20 70,30 C80,40 80,60 70,70 C60,80 40,80 30,70 C20,60 20,40 30,30",
                "M20,20 L80,20",
                "M85,30 C95,40 95,60 85,70",
            ],
        ),
    ];

    entries
        .iter()
        .map(|&(glyph, name, pronunciation, audio, strokes)| {
            TargetDescriptor::new(glyph, name, pronunciation, audio, strokes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.len(), 10);

        for target in &catalog {
            assert!(target.guide_stroke_count() >= 1);
            assert!(!target.glyph.is_empty());
        }
    }

    #[test]
    fn test_known_stroke_counts() {
        let catalog = builtin_catalog().unwrap();

        let a = catalog.iter().find(|t| t.glyph == "अ").unwrap();
        assert_eq!(a.guide_stroke_count(), 2);

        let oo = catalog.iter().find(|t| t.glyph == "ऊ").unwrap();
        assert_eq!(oo.guide_stroke_count(), 4);
    }

    #[test]
    fn test_invalid_stroke_path_rejected() {
        let result = TargetDescriptor::new("x", "x", "test", "x.mp3", &["not a path"]);
        assert!(matches!(result, Err(AlphabetError::InvalidStrokePath { .. })));
    }

    #[test]
    fn test_guide_strokes_nonempty_paths() {
        let catalog = builtin_catalog().unwrap();
        for target in &catalog {
            for stroke in target.guide_strokes() {
                assert!(!stroke.elements().is_empty());
            }
        }
    }
}
