//! Presentation settings chosen alongside the content.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Slide counts accepted by the validation layer.
pub const SLIDE_COUNT_RANGE: RangeInclusive<u32> = 1..=20;

/// Visual aesthetic of the deck.
///
/// Tags are the kebab-case identifiers used on the wire.
///
/// # Examples
///
/// ```
/// use slideprompt_core::SlideStyle;
/// use std::str::FromStr;
///
/// assert_eq!(SlideStyle::from_str("dark-neon").unwrap(), SlideStyle::DarkNeon);
/// assert_eq!(SlideStyle::ThreeDIsometric.to_string(), "3d-isometric");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SlideStyle {
    /// Corporate, structured
    #[default]
    Professional,
    /// Blueprint and diagram
    Technical,
    /// Bold and artistic
    Creative,
    /// Charts and stat cards
    Infographic,
    /// Step-by-step instructional
    Educational,
    /// 8-bit retro
    PixelArt,
    /// Whitespace and single focal points
    Minimalist,
    /// Neon on black
    DarkNeon,
    /// Sketchbook lines
    HandDrawn,
    /// Frosted translucent layers
    Glassmorphism,
    /// Aged paper
    Vintage,
    /// Isometric 3D
    #[serde(rename = "3d-isometric")]
    #[strum(serialize = "3d-isometric")]
    ThreeDIsometric,
    /// Painted washes
    Watercolor,
    /// Editorial print
    Newspaper,
    /// Solid colours, no shadows
    FlatDesign,
    /// Flowing mesh gradients
    GradientMesh,
    /// Holographic heads-up display
    SciFiHud,
    /// Nature documentary graphics
    DeepOcean,
    /// Dark developer documentation
    DevConsole,
    /// Bioluminescent science visualization
    NeonScientific,
}

/// Colour scheme, or [`ColorPalette::Auto`] to let the model choose.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ColorPalette {
    /// Model picks harmonious colours
    #[default]
    Auto,
    /// Navy and light blue
    CorporateBlue,
    /// Deep purple and violet
    ModernPurple,
    /// Forest green and sage
    NatureGreen,
    /// Burnt orange and coral
    WarmOrange,
    /// Black, white and greys
    ElegantMonochrome,
    /// Cyan to magenta gradients
    VibrantGradient,
    /// Teal and aquamarine
    OceanTeal,
    /// Hot pink and peach
    SunsetPink,
    /// Brown and terracotta
    ForestEarth,
    /// Royal blue and gold
    RoyalGold,
    /// Ice blue and silver
    ArcticFrost,
    /// Electric purple and neon green
    NeonNight,
}

impl ColorPalette {
    /// Whether the palette is left to the model.
    pub fn is_auto(self) -> bool {
        self == Self::Auto
    }
}

/// Balance between visuals and text.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LayoutStructure {
    /// Hero visuals dominate
    VisualHeavy,
    /// Text dominates
    TextHeavy,
    /// Even split
    #[default]
    Balanced,
}

/// Slide frame proportions.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum AspectRatio {
    /// Widescreen
    #[default]
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Widescreen,
    /// Traditional
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    Standard,
    /// Square
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
    /// Vertical portrait
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Portrait,
}

/// Visual settings for one deck.
///
/// The slide count is expected to lie in [`SLIDE_COUNT_RANGE`]; enforcing that
/// is the validation layer's job, so the builder accepts any value.
///
/// # Examples
///
/// ```
/// use slideprompt_core::{PresentationConfig, SlideStyle};
///
/// let config = PresentationConfig::builder()
///     .style(SlideStyle::Technical)
///     .slide_count(3u32)
///     .build()
///     .unwrap();
/// assert_eq!(*config.slide_count(), 3);
/// assert!(config.color_palette().is_auto());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct PresentationConfig {
    /// Visual aesthetic
    #[builder(default)]
    style: SlideStyle,
    /// Colour scheme
    #[builder(default)]
    color_palette: ColorPalette,
    /// Visual/text balance
    #[builder(default)]
    layout_structure: LayoutStructure,
    /// Frame proportions
    #[builder(default)]
    aspect_ratio: AspectRatio,
    /// Number of slides to generate
    slide_count: u32,
}

impl PresentationConfig {
    /// Creates a new builder for `PresentationConfig`.
    pub fn builder() -> PresentationConfigBuilder {
        PresentationConfigBuilder::default()
    }

    /// Config from fully resolved parts.
    pub fn new(
        style: SlideStyle,
        color_palette: ColorPalette,
        layout_structure: LayoutStructure,
        aspect_ratio: AspectRatio,
        slide_count: u32,
    ) -> Self {
        Self {
            style,
            color_palette,
            layout_structure,
            aspect_ratio,
            slide_count,
        }
    }

    /// Config with default visuals and the given slide count.
    pub fn with_slide_count(slide_count: u32) -> Self {
        Self::new(
            SlideStyle::default(),
            ColorPalette::default(),
            LayoutStructure::default(),
            AspectRatio::default(),
            slide_count,
        )
    }
}
