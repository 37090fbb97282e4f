//! Screenshot grid and its lightbox sequence.

use crate::types::{LightboxImage, ScreenshotRef};

/// One tile in the screenshot grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    pub src: String,
    pub caption: String,
    /// Position of this image in the lightbox sequence
    pub lightbox_index: usize,
}

/// Lightbox sequence plus the grid tiles that open it
///
/// The banner is always lightbox index 0; screenshots follow in manifest
/// order. Screenshots without a caption are captioned with the project title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotGallery {
    images: Vec<LightboxImage>,
    grid: Vec<GridItem>,
}

impl ScreenshotGallery {
    pub fn build(title: &str, banner_src: &str, screenshots: &[ScreenshotRef]) -> Self {
        let mut images = Vec::with_capacity(screenshots.len() + 1);
        images.push(LightboxImage::new(banner_src, format!("{} - Main Banner", title)));

        for shot in screenshots {
            let caption = shot.caption().unwrap_or(title);
            images.push(LightboxImage::new(shot.src(), caption));
        }

        let grid = images
            .iter()
            .enumerate()
            .map(|(i, img)| GridItem {
                src: img.src.clone(),
                caption: img.caption.clone(),
                lightbox_index: i,
            })
            .collect();

        Self { images, grid }
    }

    pub fn images(&self) -> &[LightboxImage] {
        &self.images
    }

    pub fn grid(&self) -> &[GridItem] {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_leads_the_sequence() {
        let shots = vec![
            ScreenshotRef::Locator("shots/1.png".into()),
            ScreenshotRef::Captioned {
                src: "shots/2.png".into(),
                caption: "Level editor".into(),
            },
        ];
        let gallery = ScreenshotGallery::build("Ember", "banner.gif", &shots);

        let captions: Vec<&str> = gallery.images().iter().map(|i| i.caption.as_str()).collect();
        assert_eq!(captions, vec!["Ember - Main Banner", "Ember", "Level editor"]);
        assert_eq!(gallery.images()[0].src, "banner.gif");
        assert_eq!(gallery.grid().len(), 3);
        assert_eq!(gallery.grid()[2].lightbox_index, 2);
    }

    #[test]
    fn no_screenshots_still_shows_banner() {
        let gallery = ScreenshotGallery::build("Ember", "banner.gif", &[]);
        assert_eq!(gallery.grid().len(), 1);
        assert_eq!(gallery.grid()[0].lightbox_index, 0);
    }
}
