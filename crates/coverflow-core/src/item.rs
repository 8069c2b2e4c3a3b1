//! Display items: the unit of content the slider arranges.

/// Opaque resource locator for an image.
///
/// The core never loads or inspects the resource; it only hands the
/// locator back to the host surface for painting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<String> for ImageRef {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

/// One entry of the slider catalog.
///
/// Immutable once built; identity is the item's position in the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayItem {
    image: ImageRef,
    alt_text: String,
    caption: Option<String>,
}

impl DisplayItem {
    pub fn new(image: impl Into<ImageRef>, alt_text: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            alt_text: alt_text.into(),
            caption: None,
        }
    }

    /// Builds an item whose alt text falls back to the gallery title when
    /// the supplied alt is missing or blank.
    pub fn with_alt_fallback(
        image: impl Into<ImageRef>,
        alt_text: Option<&str>,
        gallery_title: &str,
    ) -> Self {
        let alt = match alt_text {
            Some(alt) if !alt.trim().is_empty() => alt.to_owned(),
            _ => gallery_title.to_owned(),
        };
        Self::new(image, alt)
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_fallback_uses_gallery_title_for_blank_alt() {
        let item = DisplayItem::with_alt_fallback("cover.jpg", Some("   "), "Brand Refresh");
        assert_eq!(item.alt_text(), "Brand Refresh");

        let item = DisplayItem::with_alt_fallback("cover.jpg", None, "Brand Refresh");
        assert_eq!(item.alt_text(), "Brand Refresh");
    }

    #[test]
    fn alt_fallback_keeps_non_blank_alt() {
        let item = DisplayItem::with_alt_fallback("cover.jpg", Some("Logo sketch"), "Brand Refresh");
        assert_eq!(item.alt_text(), "Logo sketch");
    }

    #[test]
    fn caption_is_optional() {
        let plain = DisplayItem::new("a.jpg", "first");
        assert_eq!(plain.caption(), None);

        let captioned = DisplayItem::new("a.jpg", "first").with_caption("Opening spread");
        assert_eq!(captioned.caption(), Some("Opening spread"));
    }
}
