//! Pure calculation functions for format dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::format::Format;

/// Width and height of an image or a format box, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }

    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }

    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Box a source image should be fitted into for the given format.
///
/// The original format keeps the source dimensions. Other formats use their
/// declared box, swapped when `flip` is set and the source orientation is the
/// opposite of the declared one. A square on either side never swaps.
///
/// # Examples
/// ```
/// # use visual_factory::format::Format;
/// # use visual_factory::imaging::{Dimensions, target_dimensions};
/// let format = Format::from_dimensions(800, 600, true).unwrap();
/// // Portrait source on a landscape format → swapped
/// assert_eq!(
///     target_dimensions(&format, Dimensions::new(1000, 3000)),
///     Dimensions::new(600, 800)
/// );
/// ```
pub fn target_dimensions(format: &Format, source: Dimensions) -> Dimensions {
    if format.is_original() {
        return source;
    }
    let declared = Dimensions::new(format.width(), format.height());
    let opposite = (declared.is_landscape() && source.is_portrait())
        || (declared.is_portrait() && source.is_landscape());
    if format.flip() && opposite {
        declared.swapped()
    } else {
        declared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{FlipValue, FormatParams};

    const LANDSCAPE: Dimensions = Dimensions {
        width: 3000,
        height: 2000,
    };
    const PORTRAIT: Dimensions = Dimensions {
        width: 2000,
        height: 3000,
    };
    const SQUARE: Dimensions = Dimensions {
        width: 2000,
        height: 2000,
    };

    #[test]
    fn orientation_predicates() {
        assert!(LANDSCAPE.is_landscape());
        assert!(!LANDSCAPE.is_portrait());
        assert!(PORTRAIT.is_portrait());
        assert!(!SQUARE.is_landscape() && !SQUARE.is_portrait());
    }

    #[test]
    fn matching_orientation_keeps_box() {
        let f = Format::from_dimensions(800, 600, true).unwrap();
        assert_eq!(target_dimensions(&f, LANDSCAPE), Dimensions::new(800, 600));
    }

    #[test]
    fn opposite_orientation_swaps_when_flip_set() {
        let f = Format::from_dimensions(800, 600, true).unwrap();
        assert_eq!(target_dimensions(&f, PORTRAIT), Dimensions::new(600, 800));
        let f = Format::from_dimensions(600, 800, "TRUE").unwrap();
        assert_eq!(target_dimensions(&f, LANDSCAPE), Dimensions::new(800, 600));
    }

    #[test]
    fn opposite_orientation_kept_without_flip() {
        let f = Format::from_dimensions(800, 600, false).unwrap();
        assert_eq!(target_dimensions(&f, PORTRAIT), Dimensions::new(800, 600));
    }

    #[test]
    fn squares_never_swap() {
        let f = Format::from_dimensions(800, 600, true).unwrap();
        assert_eq!(target_dimensions(&f, SQUARE), Dimensions::new(800, 600));
        let f = Format::from_dimensions(500, 500, true).unwrap();
        assert_eq!(target_dimensions(&f, PORTRAIT), Dimensions::new(500, 500));
    }

    #[test]
    fn original_keeps_source() {
        let f = Format::from_original_params(FormatParams {
            directory: "uploads".into(),
            width: 100,
            height: 100,
            flip: FlipValue::Bool(true),
        })
        .unwrap();
        assert_eq!(target_dimensions(&f, PORTRAIT), PORTRAIT);
    }
}
