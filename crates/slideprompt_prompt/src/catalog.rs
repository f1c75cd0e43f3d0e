//! Fixed text looked up by presentation tag.
//!
//! Each table is an exhaustive `match` over a closed enum, so a missing entry
//! is a compile error rather than a runtime miss.

use slideprompt_core::{AspectRatio, ColorPalette, LayoutStructure, SlideStyle};

/// Creative identity the model adopts for a style.
pub const fn persona(style: SlideStyle) -> &'static str {
    match style {
        SlideStyle::Professional => {
            "You are a senior corporate designer at a Fortune 500 company. Your presentations close billion-dollar deals. Every element exudes trust, competence, and sophistication."
        }
        SlideStyle::Technical => {
            "You are a lead engineer at NASA creating mission briefings. Your diagrams explain complex systems with precision. Technical accuracy meets visual clarity."
        }
        SlideStyle::Creative => {
            "You are an award-winning art director at a top creative agency. Your work wins Cannes Lions. Bold, unexpected, visually striking. You push boundaries."
        }
        SlideStyle::Infographic => {
            "You are a data visualization expert at The New York Times. Your infographics go viral. Complex data becomes beautiful, digestible visual stories."
        }
        SlideStyle::Educational => {
            "You are a curriculum designer for Khan Academy. Learning should be engaging and clear. Your slides make complex topics accessible and memorable."
        }
        SlideStyle::PixelArt => {
            "You are a pixel artist who worked on iconic 8-bit games. Nostalgia meets modern design. Every pixel is intentional, every color evokes retro gaming magic."
        }
        SlideStyle::Minimalist => {
            "You are a Zen master of design inspired by Dieter Rams. Less is more. Every element earns its place. Whitespace is your primary tool."
        }
        SlideStyle::DarkNeon => {
            "You are a concept artist for Blade Runner and Cyberpunk 2077. Neon cuts through darkness. Futuristic, edgy, electric: the city never sleeps."
        }
        SlideStyle::HandDrawn => {
            "You are an illustrator whose sketchbook work went viral. Imperfection is charming. Warmth, personality, and human touch in every line."
        }
        SlideStyle::Glassmorphism => {
            "You are a UI designer at Apple working on visionOS. Frosted glass, depth, and light. Your interfaces feel like floating in clouds."
        }
        SlideStyle::Vintage => {
            "You are a designer who restores classic print advertisements. Nostalgia, warmth, timeless elegance. The past reimagined for today."
        }
        SlideStyle::ThreeDIsometric => {
            "You are a 3D artist creating iconic app illustrations. Depth, dimension, and playful perspective. Objects float in perfect isometric harmony."
        }
        SlideStyle::Watercolor => {
            "You are a fine artist whose watercolor work hangs in galleries. Soft edges, organic flow, dreamy atmosphere. Paint meets presentation."
        }
        SlideStyle::Newspaper => {
            "You are an editor at a legendary newspaper designing front pages. Bold headlines, tight columns, ink on paper. Journalism meets design."
        }
        SlideStyle::FlatDesign => {
            "You are a product designer at Google creating Material Design. Clean vectors, bold colors, no shadows. Modern simplicity at its finest."
        }
        SlideStyle::GradientMesh => {
            "You are a designer creating album covers for top artists. Flowing gradients, abstract beauty, contemporary art. Your work is Instagram-worthy."
        }
        SlideStyle::SciFiHud => {
            "You are the UI designer for Iron Man and The Expanse. Holographic interfaces, tactical displays, aerospace precision. Futuristic tech made tangible."
        }
        SlideStyle::DeepOcean => {
            "You are a graphics artist at National Geographic creating nature documentaries. Scientific accuracy meets cinematic beauty. David Attenborough would narrate your slides."
        }
        SlideStyle::DevConsole => {
            "You are a senior developer at GitHub designing documentation. Dark mode, syntax highlighting, clean architecture. Engineers will appreciate every detail."
        }
        SlideStyle::NeonScientific => {
            "You are a VFX artist creating science visualizations for Netflix documentaries. Bioluminescent, dramatic, cinematic. Science made spectacular."
        }
    }
}

/// Prose description of a style's visual language.
pub const fn style_description(style: SlideStyle) -> &'static str {
    match style {
        SlideStyle::Professional => {
            "clean corporate aesthetic with soft gradients, subtle geometric background accents, modern sans-serif typography, structured multi-column layouts, professional color palette with 1-2 accent colors plus neutrals"
        }
        SlideStyle::Technical => {
            "technical blueprint or diagram style with clear labeling, arrows, measurement lines, grid backgrounds, high contrast text, minimal color palette (blue, white, accents), engineering-focused aesthetic"
        }
        SlideStyle::Creative => {
            "bold artistic design with vibrant colors, dynamic asymmetric layouts, creative typography mixing, gradient backgrounds, artistic illustrations, expressive visual hierarchy"
        }
        SlideStyle::Infographic => {
            "data visualization focused with charts, graphs, stat cards, icon grids, clear visual hierarchy for information, balanced text and visual elements, professional yet engaging"
        }
        SlideStyle::Educational => {
            "clear instructional design with step-by-step visual flow, numbered sections, friendly illustrations, warm approachable aesthetic, process diagrams, learning-focused with clear progression"
        }
        SlideStyle::PixelArt => {
            "8-bit pixel art style with retro game aesthetic, blocky graphics, nostalgic color palette, pixelated icons and illustrations, chunky geometric elements, playful vintage gaming vibes"
        }
        SlideStyle::Minimalist => {
            "ultra-minimal design with abundant whitespace, single focal points, simple geometry, maximum negative space, elegant simplicity, zen-like clarity, limited color palette"
        }
        SlideStyle::DarkNeon => {
            "dark background with neon glow effects, cyberpunk aesthetic, high contrast design, electric colors on deep black, futuristic atmosphere, glowing accents and borders"
        }
        SlideStyle::HandDrawn => {
            "sketchy illustration style with hand-drawn aesthetic, rough organic lines, warm paper texture, pencil sketch feel, artistic imperfection, doodle borders and accents"
        }
        SlideStyle::Glassmorphism => {
            "frosted glass effect with translucent layers, soft blur backgrounds, modern UI aesthetic, glass-like transparency, backdrop blur effects, ethereal floating card elements"
        }
        SlideStyle::Vintage => {
            "aged-paper aesthetic with muted color palette (beige, brown, soft green), subtle vintage decor like compass or rope motifs, classic serif fonts, nostalgic warm tones"
        }
        SlideStyle::ThreeDIsometric => {
            "isometric 3D illustration with dimensional graphics, depth effects, isometric perspective objects, spatial design with shadows, geometric 3D floating elements"
        }
        SlideStyle::Watercolor => {
            "soft watercolor painting style with flowing colors, artistic bleeding effects, painted texture, gentle brushstrokes, organic color transitions, muted earthy pastels"
        }
        SlideStyle::Newspaper => {
            "editorial print design with bold headlines, column layouts, serif typography zones, black and white with single accent color, newsprint texture, classic journalism aesthetic"
        }
        SlideStyle::FlatDesign => {
            "flat design style with bold solid colors, geometric shapes, no shadows or gradients, clean vector aesthetic, simple iconographic elements, modern minimalism"
        }
        SlideStyle::GradientMesh => {
            "modern gradient mesh with flowing color transitions, abstract fluid backgrounds, mesh gradients with smooth blends, contemporary color combinations, organic flowing shapes"
        }
        SlideStyle::SciFiHud => {
            "futuristic sci-fi HUD interface style with dark backgrounds (#0A0A12), cyan/teal primary accents (#00D4FF), orange secondary highlights (#FF6B35), technical schematics with wireframe diagrams, targeting reticles, data overlays with progress bars and stat displays, glowing edge lines, holographic effects, measurement annotations, modular panel layouts with rounded corners, sensor readout aesthetics, high-tech aerospace feel"
        }
        SlideStyle::DeepOcean => {
            "nature documentary scientific analysis style with deep blue-gray oceanic backgrounds (#1A2A3A to #0D1B2A gradient), teal/cyan accent colors (#00CED1), white text with subtle glow, animal silhouettes and anatomical diagrams, scientific data visualizations with comparison charts, measurement callouts with labeled arrows, documentary-style layouts, educational yet cinematic atmosphere"
        }
        SlideStyle::DevConsole => {
            "developer console and software architecture style with very dark charcoal/black backgrounds (#0D0D0D to #1A1A1A), gold/amber primary accent color (#FFB800), white and light gray secondary text, technical system diagrams with flowcharts and data flow arrows, modular architecture blocks, code documentation aesthetic, subtle grid patterns, API and system integration diagrams, warm gold highlights on dark surfaces"
        }
        SlideStyle::NeonScientific => {
            "cinematic scientific visualization style with very dark backgrounds (#000000 to #0A0F1A), glowing bioluminescent elements in cyan/teal (#00D4FF, #00CED1), warm orange/amber energy accents (#FF6B35, #FFB800), particle effects and flowing energy waves, holographic technical diagrams with scientific data overlays, futuristic laboratory aesthetic with transparent layers, anatomical or molecular structures with glowing edges, cinematic depth with layered composition"
        }
    }
}

/// Colour direction for a palette.
///
/// [`ColorPalette::Auto`] asks the model to choose.
pub const fn palette_description(palette: ColorPalette) -> &'static str {
    match palette {
        ColorPalette::Auto => {
            "Auto-select harmonious colors (2-3 accents + neutrals) that match the style and content"
        }
        ColorPalette::CorporateBlue => {
            "navy blue primary (#1E3A5F), light blue accents (#4A90D9), crisp white backgrounds, silver highlights - professional and trustworthy"
        }
        ColorPalette::ModernPurple => {
            "deep purple primary (#6B21A8), violet accents (#8B5CF6), soft lavender highlights, white backgrounds - innovative and creative"
        }
        ColorPalette::NatureGreen => {
            "forest green primary (#166534), sage accents (#86EFAC), warm cream backgrounds, earthy brown details - organic and sustainable"
        }
        ColorPalette::WarmOrange => {
            "burnt orange primary (#EA580C), coral accents (#FB923C), cream backgrounds, deep brown text - energetic and warm"
        }
        ColorPalette::ElegantMonochrome => {
            "black text, white backgrounds, sophisticated grays for panels and accents, subtle texture - timeless and elegant"
        }
        ColorPalette::VibrantGradient => {
            "bold gradients from cyan to magenta, electric accent colors, dynamic color transitions - modern and energetic"
        }
        ColorPalette::OceanTeal => {
            "deep teal primary (#0D9488), aquamarine accents (#5EEAD4), seafoam highlights, sandy beige backgrounds - calm and refreshing"
        }
        ColorPalette::SunsetPink => {
            "hot pink primary (#EC4899), peach accents (#FBBF24), soft coral highlights, warm cream backgrounds - playful and energetic"
        }
        ColorPalette::ForestEarth => {
            "deep brown primary (#78350F), terracotta accents (#D97706), olive green highlights, cream backgrounds - grounded and natural"
        }
        ColorPalette::RoyalGold => {
            "royal blue primary (#1E40AF), gold accents (#F59E0B), ivory backgrounds, deep navy text - prestigious and luxurious"
        }
        ColorPalette::ArcticFrost => {
            "ice blue primary (#38BDF8), silver accents (#94A3B8), white backgrounds, pale lavender highlights - cool and fresh"
        }
        ColorPalette::NeonNight => {
            "electric purple (#A855F7), neon green accents (#22C55E), hot pink highlights, dark backgrounds - bold and futuristic"
        }
    }
}

/// Space split between visuals and text.
pub const fn layout_description(layout: LayoutStructure) -> &'static str {
    match layout {
        LayoutStructure::VisualHeavy => {
            "large hero visuals taking 60-70% of space, minimal text areas, icon-centric design with dramatic imagery, strong visual impact, illustration-forward layouts"
        }
        LayoutStructure::TextHeavy => {
            "text-focused with 60-70% space for content, multi-column text layouts, bullet point sections, supporting graphics in corners or margins, subtle backgrounds"
        }
        LayoutStructure::Balanced => {
            "equal visual and text space, dual-column layouts with left-visual right-text or vice versa, versatile 50/50 compositions, flexible zones for various content"
        }
    }
}

/// Frame format sentence.
pub const fn aspect_ratio_description(ratio: AspectRatio) -> &'static str {
    match ratio {
        AspectRatio::Widescreen => "16:9 widescreen presentation format",
        AspectRatio::Standard => "4:3 traditional presentation format",
        AspectRatio::Square => "1:1 square format",
        AspectRatio::Portrait => "9:16 vertical portrait format",
    }
}

/// Human label for a style: first letter capitalised, hyphens become spaces.
///
/// # Examples
///
/// ```
/// use slideprompt_core::SlideStyle;
/// use slideprompt_prompt::style_label;
///
/// assert_eq!(style_label(SlideStyle::DarkNeon), "Dark neon");
/// assert_eq!(style_label(SlideStyle::ThreeDIsometric), "3d isometric");
/// ```
pub fn style_label(style: SlideStyle) -> String {
    let tag: &'static str = style.into();
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.map(|c| if c == '-' { ' ' } else { c }))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_of_single_word_style() {
        assert_eq!(style_label(SlideStyle::Technical), "Technical");
        assert_eq!(style_label(SlideStyle::SciFiHud), "Sci fi hud");
    }
}
