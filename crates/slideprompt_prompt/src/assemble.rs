//! Instruction assembly.
//!
//! The system instruction never changes. The user instruction is built from
//! small fragment functions, one per section, so the varying parts can be
//! checked without matching on the surrounding prose.

use crate::catalog::{
    aspect_ratio_description, layout_description, palette_description, persona,
    style_description, style_label,
};
use crate::plan::render_plan;
use slideprompt_core::{PresentationConfig, PromptPair};
use tracing::{debug, instrument};

/// Output grammar and richness rules shared by every request.
pub const SYSTEM_INSTRUCTION: &str = include_str!("../templates/system_instruction.md");

/// Build the `(system, user)` pair for already-validated inputs.
#[instrument(skip(content, config), fields(content_len = content.len(), slide_count = *config.slide_count(), style = %config.style()))]
pub fn assemble(content: &str, config: &PresentationConfig) -> PromptPair {
    let user = build_user_instruction(content, config);
    debug!(user_len = user.len(), "Assembled instruction pair");
    PromptPair::new(SYSTEM_INSTRUCTION, user)
}

/// The per-request instruction.
pub fn build_user_instruction(content: &str, config: &PresentationConfig) -> String {
    let label = style_label(*config.style());
    let count = *config.slide_count();

    [
        identity_section(config, &label),
        request_section(count, content),
        visual_direction_section(config, &label),
        RICHNESS_SECTION.to_string(),
        structure_section(count),
        REQUIREMENTS_SECTION.to_string(),
        closing_section(count, &label),
    ]
    .join("\n\n")
}

fn identity_section(config: &PresentationConfig, label: &str) -> String {
    format!(
        "## YOUR CREATIVE IDENTITY\n{}\n\nYou are creating a {label} presentation. EVERY visual decision must reflect {label} aesthetics. This style is non-negotiable; it defines every element you describe.\n\n---",
        persona(*config.style()),
    )
}

fn request_section(count: u32, content: &str) -> String {
    format!(
        "Generate {count} CINEMATICALLY RICH slide prompts for a visually stunning presentation deck.\n\n## Source Content to Transform Into Slides\n{content}\n\nIMPORTANT: Create prompts worthy of a TED talk, a nature documentary or a blockbuster movie interface. Think VISUALLY RICH with layered compositions, atmospheric effects and premium execution. Do NOT create simple, basic prompts."
    )
}

fn visual_direction_section(config: &PresentationConfig, label: &str) -> String {
    format!(
        "## Visual Direction (COMMIT TO THIS STYLE)\n**Style:** {label}\n{}\n\n**Color Palette:** {}\n\n**Layout Priority:** {}\n\n**Aspect Ratio:** {}",
        style_description(*config.style()),
        palette_description(*config.color_palette()),
        layout_description(*config.layout_structure()),
        aspect_ratio_description(*config.aspect_ratio()),
    )
}

const RICHNESS_SECTION: &str = "## Visual Richness Requirements (MANDATORY FOR ALL SLIDES)
Every prompt MUST include:
- **LAYERED BACKGROUND**: Gradient + subtle pattern (grid/particles/texture) + atmospheric depth
- **CINEMATIC HERO VISUAL**: Dramatic presentation with professional lighting, depth, and visual impact
- **5+ SUPPORTING ELEMENTS**: Callout boxes, stat cards, annotation systems, ambient particles, decorative accents
- **FOREGROUND DETAILS**: Floating UI elements, HUD-style decorations, accent lines, corner brackets
- **ATMOSPHERIC EFFECTS**: Particles, glows, subtle light effects, depth haze where appropriate";

fn structure_section(count: u32) -> String {
    format!(
        "## Slide Deck Structure\nGenerate prompts for these {count} slides using the cinematic visual techniques above:\n\n{}",
        render_plan(count)
    )
}

const REQUIREMENTS_SECTION: &str = "## Critical Requirements (NON-NEGOTIABLE)
Each prompt MUST:
- Be 150-350 words with EXTENSIVE visual detail
- Describe LAYERED COMPOSITION: deep background, mid-ground atmosphere, hero zone, overlay elements, foreground accents
- Include 5+ visual elements beyond the hero (callouts, particles, stat cards, annotations, ambient effects)
- Specify ATMOSPHERIC DETAILS: particle effects, glows, gradients, depth cues, lighting effects
- Include connecting visual systems: leader lines, HUD brackets, measurement overlays where relevant

## Output Format
For each slide, provide exactly this structure:

**Slide [N]: [Descriptive Title]**
```
[150-350 word detailed prompt covering: slide type/template applied, hero zone visual (camera angle, lighting, focal point, depth), zones (background/overlay callouts), component placements (stat cards, callouts, icons), text anchor content, layout structure, design details]
```";

fn closing_section(count: u32, label: &str) -> String {
    format!(
        "---\n**STYLE REMINDER**: You are a {label} specialist. Every prompt must unmistakably reflect {label} aesthetics. A viewer should instantly recognize the style from any slide.\n\nGenerate all {count} detailed prompts now, in order from Slide 1 to Slide {count}, applying templates and components strategically per slide."
    )
}
