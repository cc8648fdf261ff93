//! Pipe material descriptors and the shared texture cache.
//!
//! Materials here are plain descriptions. Loading images and building GPU
//! materials is left to whatever implements [`Scene`](crate::scene::Scene).

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec3;
use rand::Rng;

/// Texture used by the rare "candy cane" cohorts.
pub const CANDY_CANE_TEXTURE: &str = "images/textures/candycane.png";

/// Specular color of randomly colored pipes (`0xa9fcff`).
pub const PHONG_SPECULAR: u32 = 0x00a9_fcff;
/// Shininess of randomly colored pipes.
pub const PHONG_SHININESS: f32 = 100.0;
/// Fraction of the base color used as emissive light.
pub const EMISSIVE_SCALE: f32 = 0.3;

/// Converts a packed `0xRRGGBB` color to RGB in `[0, 1]`.
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    let [_, r, g, b] = hex.to_be_bytes();
    Vec3::new(f32::from(r), f32::from(g), f32::from(b)) / 255.0
}

/// A texture the scene should load and tile over pipe surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureDescriptor {
    /// Image path, as given in options.
    pub path: String,
    /// Repeat count along u and v.
    pub repeat: [u32; 2],
}

impl TextureDescriptor {
    /// Creates a descriptor with the standard 2x2 repeat.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            repeat: [2, 2],
        }
    }
}

/// The look of one pipe.
#[derive(Debug, Clone, PartialEq)]
pub enum PipeMaterial {
    /// Shiny solid color.
    Phong {
        color: Vec3,
        emissive: Vec3,
        specular: Vec3,
        shininess: f32,
    },
    /// Diffuse textured surface shared by every pipe of a cohort.
    Textured(Arc<TextureDescriptor>),
}

impl PipeMaterial {
    /// Creates a Phong material from a packed `0xRRGGBB` color.
    pub fn phong(hex: u32) -> Self {
        let color = rgb_from_hex(hex);
        PipeMaterial::Phong {
            color,
            emissive: color * EMISSIVE_SCALE,
            specular: rgb_from_hex(PHONG_SPECULAR),
            shininess: PHONG_SHININESS,
        }
    }

    /// Creates a Phong material with a uniformly random color.
    pub fn random_phong(rng: &mut impl Rng) -> Self {
        Self::phong(rng.gen_range(0..=0x00ff_ffff))
    }

    /// Returns the texture, if this material is textured.
    pub fn texture(&self) -> Option<&TextureDescriptor> {
        match self {
            PipeMaterial::Textured(texture) => Some(texture),
            PipeMaterial::Phong { .. } => None,
        }
    }
}

/// Texture descriptors keyed by path, shared between pipes.
///
/// Outlives scene resets so a texture is described once per session.
#[derive(Debug, Clone, Default)]
pub struct TextureCache {
    textures: HashMap<String, Arc<TextureDescriptor>>,
}

impl TextureCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor for `path`, creating it on first use.
    pub fn get_or_insert(&mut self, path: &str) -> Arc<TextureDescriptor> {
        if let Some(texture) = self.textures.get(path) {
            return Arc::clone(texture);
        }
        log::debug!("describing texture '{path}'");
        let texture = Arc::new(TextureDescriptor::new(path));
        self.textures.insert(path.to_string(), Arc::clone(&texture));
        texture
    }

    /// Returns whether `path` has been described.
    pub fn contains(&self, path: &str) -> bool {
        self.textures.contains_key(path)
    }

    /// Returns the number of cached textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns true if no texture has been described yet.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(rgb_from_hex(0xff0000), Vec3::X);
        assert_eq!(rgb_from_hex(0x000000), Vec3::ZERO);
        let c = rgb_from_hex(PHONG_SPECULAR);
        assert!((c.x - 0xa9 as f32 / 255.0).abs() < 1e-6);
        assert!((c.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_phong_emissive_is_scaled_color() {
        let PipeMaterial::Phong {
            color, emissive, ..
        } = PipeMaterial::phong(0x336699)
        else {
            panic!("expected phong material");
        };
        assert!((emissive - color * EMISSIVE_SCALE).length() < 1e-6);
    }

    #[test]
    fn test_texture_cache_shares_descriptors() {
        let mut cache = TextureCache::new();
        let a = cache.get_or_insert(CANDY_CANE_TEXTURE);
        let b = cache.get_or_insert(CANDY_CANE_TEXTURE);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
        assert_eq!(a.repeat, [2, 2]);

        let material = PipeMaterial::Textured(a);
        assert_eq!(material.texture().map(|t| t.path.as_str()), Some(CANDY_CANE_TEXTURE));
    }
}
