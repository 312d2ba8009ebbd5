use failure::Error;
use vek::vec::Extent2;
use vek::vec::Vec2;

/// A widget that can be placed and sized by whatever lays out a menu
pub trait Component {
    fn position(&self) -> Result<Vec2<f32>, Error>;

    fn resize(&mut self, size: Extent2<f32>) -> Result<(), Error>;
}
