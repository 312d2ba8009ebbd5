use crate::errors::SceneError;
use crate::errors::SceneErrorKind;
use failure::Error;
use image::DynamicImage;
use image::GenericImageView;
use std::collections::HashMap;
use vek::vec::Extent2;

/// Maps texture keys to the pixel size of the texture. The headless scene
/// never draws anything so the pixel data itself is not kept.
#[derive(Debug, Clone, Default)]
pub struct TextureRegistry {
    textures: HashMap<String, Extent2<u32>>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        TextureRegistry::default()
    }

    /// Registers a texture, replacing any previous texture with the same key
    pub fn register(&mut self, key: &str, width: u32, height: u32) {
        debug!("Registering texture \"{}\" ({}x{})", key, width, height);
        self.textures.insert(key.to_string(), Extent2::new(width, height));
    }

    pub fn register_image(&mut self, key: &str, image: &DynamicImage) {
        let (width, height) = image.dimensions();
        self.register(key, width, height);
    }

    /// Decodes an encoded image (png, jpeg, ...) and registers its size
    pub fn register_bytes(&mut self, key: &str, bytes: &[u8]) -> Result<(), Error> {
        let image = image::load_from_memory(bytes)?;
        self.register_image(key, &image);
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    pub fn size(&self, key: &str) -> Result<Extent2<u32>, Error> {
        match self.textures.get(key) {
            Some(size) => Ok(*size),
            None => Err(SceneError::from(SceneErrorKind::UnknownTexture(key.to_string())).into()),
        }
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::SceneError;
    use crate::errors::SceneErrorKind;
    use crate::scene::headless::TextureRegistry;
    use image::DynamicImage;
    use image::RgbaImage;
    use pretty_assertions::assert_eq;
    use vek::vec::Extent2;

    #[test]
    fn it_should_remember_registered_sizes() {
        let mut registry = TextureRegistry::new();
        registry.register("btn_up", 200, 80);

        assert_eq!(Extent2::new(200, 80), registry.size("btn_up").unwrap());
        assert_eq!(true, registry.contains("btn_up"));
        assert_eq!(1, registry.len());
    }

    #[test]
    fn it_should_take_the_size_from_an_image() {
        let mut registry = TextureRegistry::new();
        let image = DynamicImage::ImageRgba8(RgbaImage::new(4, 2));

        registry.register_image("icon", &image);

        assert_eq!(Extent2::new(4, 2), registry.size("icon").unwrap());
    }

    #[test]
    fn it_should_fail_for_unknown_keys() {
        let registry = TextureRegistry::new();

        let error = registry.size("missing").unwrap_err();

        assert_eq!(
            SceneErrorKind::UnknownTexture("missing".to_string()),
            error.downcast_ref::<SceneError>().unwrap().kind()
        );
    }

    #[test]
    fn it_should_reject_bytes_that_are_not_an_image() {
        let mut registry = TextureRegistry::new();

        assert!(registry.register_bytes("broken", &[0, 1, 2, 3]).is_err());
        assert_eq!(true, registry.is_empty());
    }
}
