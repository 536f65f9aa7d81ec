//! A crate for creating multi-size favicons from a single source image.
//! The source is resized to every requested size and all variants are packed
//! into one ICO file.
//!
//! ## Examples
//! ### Basic
//! Writes a `favicon.ico` holding 16px, 32px, and 48px versions of `logo.png`.
//!
//! ```no_run
//! # use favicon_builder::IconBuilder;
//! IconBuilder::default()
//!     .source_file("logo.png")
//!     .build_file("favicon.ico");
//! ```
//!
//! ### Custom Icon Sizes
//! The first size is stored as the primary entry of the icon.
//!
//! ```no_run
//! # use favicon_builder::IconBuilder;
//! IconBuilder::default()
//!     .sizes(&[32, 16])
//!     .source_file("logo.png")
//!     .build_file("app-icon.ico");
//! ```

mod error;

pub use crate::error::{Error, Result};

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::imageops::{resize, FilterType};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The largest edge length an ICO directory entry can describe.
pub const MAX_ICON_SIZE: u32 = 256;

/// Builds an ICO file from a single source image.
/// Every size is resampled from the full-resolution source.
#[derive(Debug, Default)]
pub struct IconBuilder {
    sizes: IconSizes,
    source: Option<Source>,
}

#[derive(Debug)]
enum Source {
    File(PathBuf),
    Image(DynamicImage),
}

impl IconBuilder {
    /// Customizes the sizes included in the ICO file. Defaults to [`IconSizes::FAVICON`].
    pub fn sizes(&mut self, sizes: impl Into<IconSizes>) -> &mut IconBuilder {
        self.sizes = sizes.into();
        self
    }

    /// Sets the source file. This can be PNG, BMP or any other format enabled on the
    /// [`image`] crate through this crate's features. Replaces any earlier source.
    ///
    /// Non-square sources are stretched to fill each square variant.
    pub fn source_file(&mut self, source_file: impl AsRef<Path>) -> &mut IconBuilder {
        self.source = Some(Source::File(source_file.as_ref().to_owned()));
        self
    }

    /// Uses an already decoded image as the source. Replaces any earlier source.
    pub fn source_image(&mut self, image: DynamicImage) -> &mut IconBuilder {
        self.source = Some(Source::Image(image));
        self
    }

    /// Builds the ICO file and writes it to the specified `output_file_path`,
    /// replacing an existing file.
    ///
    /// The output is only opened once every frame has been encoded, so a source that
    /// fails to decode leaves the destination untouched.
    pub fn build_file(&self, output_file_path: impl AsRef<Path>) -> Result<()> {
        let output_file_path = output_file_path.as_ref();
        let ico = self.build_bytes()?;
        fs::write(output_file_path, &ico)?;

        info!(
            path = %output_file_path.display(),
            bytes = ico.len(),
            "wrote icon"
        );
        Ok(())
    }

    /// Builds the ICO file in memory.
    pub fn build_bytes(&self) -> Result<Vec<u8>> {
        self.sizes.validate()?;

        let source = match &self.source {
            Some(Source::File(path)) => into_rgba(decode_source(path)?),
            Some(Source::Image(image)) => into_rgba(image.clone()),
            None => return Err(Error::MissingSource),
        };

        let frames: Vec<_> = self
            .sizes
            .0
            .iter()
            .copied()
            .map(|size| create_ico_frame(&source, size))
            .collect::<Result<_>>()?;

        let mut ico = Vec::new();
        IcoEncoder::new(&mut ico).encode_images(&frames)?;
        Ok(ico)
    }
}

/// Writes a favicon for `input_path` to `output_path` with the given sizes.
pub fn build(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    sizes: impl Into<IconSizes>,
) -> Result<()> {
    IconBuilder::default()
        .sizes(sizes)
        .source_file(input_path)
        .build_file(output_path)
}

/// A list of icon sizes, in the order they are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSizes(Cow<'static, [u32]>);

impl IconSizes {
    /// The classic favicon set: 16x16, 32x32, and 48x48.
    pub const FAVICON: Self = Self::new(&[16, 32, 48]);

    /// The [bare minimum] recommended app icon sizes: 16x16, 24x24, 32x32, 48x48, and 256x256.
    ///
    /// [bare minimum]: https://learn.microsoft.com/en-us/windows/apps/design/style/iconography/app-icon-construction#icon-scaling
    pub const MINIMAL: Self = Self::new(&[16, 24, 32, 48, 256]);

    pub const fn new(sizes: &'static [u32]) -> IconSizes {
        Self(Cow::Borrowed(sizes))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(Error::NoIconSizes);
        }
        for (index, &size) in self.0.iter().enumerate() {
            if !(1..=MAX_ICON_SIZE).contains(&size) {
                return Err(Error::InvalidIconSize(size));
            }
            if self.0[..index].contains(&size) {
                return Err(Error::DuplicateIconSize(size));
            }
        }
        Ok(())
    }
}

impl Default for IconSizes {
    fn default() -> Self {
        IconSizes::FAVICON
    }
}

impl<'a, I> From<I> for IconSizes
where
    I: IntoIterator<Item = &'a u32>,
{
    fn from(sizes: I) -> Self {
        IconSizes(Cow::Owned(sizes.into_iter().copied().collect()))
    }
}

fn decode_source(path: &Path) -> Result<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded source image"
    );
    Ok(image)
}

/// Every variant is resampled from RGBA so transparency survives uniformly.
fn into_rgba(image: DynamicImage) -> RgbaImage {
    match image {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.into_rgba8(),
    }
}

fn create_ico_frame(source: &RgbaImage, size: u32) -> Result<IcoFrame<'static>> {
    let resized = resize(source, size, size, FilterType::Lanczos3);
    debug!(size, "resized icon frame");
    encode_png_frame(&resized)
}

/// Stores the variant as a PNG entry, tagged with the variant's own dimensions.
fn encode_png_frame(variant: &RgbaImage) -> Result<IcoFrame<'static>> {
    let (width, height) = variant.dimensions();
    let mut png = Vec::new();
    PngEncoder::new(Cursor::new(&mut png)).write_image(
        variant.as_raw(),
        width,
        height,
        ExtendedColorType::Rgba8,
    )?;
    Ok(IcoFrame::with_encoded(png, width, height, ExtendedColorType::Rgba8)?)
}
