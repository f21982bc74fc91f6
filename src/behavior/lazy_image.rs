use web_sys::Element;

use crate::error::Result;

/// Attribute holding the real image source until the image is on screen.
pub const DEFERRED_SRC_ATTR: &str = "data-src";

/// Attribute access needed to promote a deferred source.
pub trait ImageAttributes {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;
    fn remove_attribute(&self, name: &str) -> Result<()>;
}

impl ImageAttributes for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        Element::set_attribute(self, name, value)?;
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        Element::remove_attribute(self, name)?;
        Ok(())
    }
}

/// Copies `data-src` into `src` and drops `data-src`.
///
/// Returns false when there was nothing left to load, which makes repeated
/// calls harmless.
pub fn promote_deferred_source<I: ImageAttributes>(image: &I) -> Result<bool> {
    let Some(source) = image.attribute(DEFERRED_SRC_ATTR) else {
        return Ok(false);
    };
    image.set_attribute("src", &source)?;
    image.remove_attribute(DEFERRED_SRC_ATTR)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeImage {
        attributes: RefCell<HashMap<String, String>>,
        writes: RefCell<usize>,
    }

    impl FakeImage {
        fn with(pairs: &[(&str, &str)]) -> Self {
            let image = FakeImage::default();
            for (name, value) in pairs {
                image
                    .attributes
                    .borrow_mut()
                    .insert(name.to_string(), value.to_string());
            }
            image
        }
    }

    impl ImageAttributes for FakeImage {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attributes.borrow().get(name).cloned()
        }

        fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
            *self.writes.borrow_mut() += 1;
            self.attributes
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
            Ok(())
        }

        fn remove_attribute(&self, name: &str) -> Result<()> {
            self.attributes.borrow_mut().remove(name);
            Ok(())
        }
    }

    #[test]
    fn test_promotes_deferred_source() {
        let image = FakeImage::with(&[("src", "placeholder.svg"), (DEFERRED_SRC_ATTR, "obra-1.jpg")]);
        assert!(promote_deferred_source(&image).unwrap());
        assert_eq!(image.attribute("src").as_deref(), Some("obra-1.jpg"));
        assert_eq!(image.attribute(DEFERRED_SRC_ATTR), None);
    }

    #[test]
    fn test_second_promotion_is_a_no_op() {
        let image = FakeImage::with(&[(DEFERRED_SRC_ATTR, "obra-2.jpg")]);
        assert!(promote_deferred_source(&image).unwrap());
        assert!(!promote_deferred_source(&image).unwrap());
        assert_eq!(*image.writes.borrow(), 1);
    }
}
