//! Per-slide plan: which pattern each slide of the deck follows.

use derive_getters::Getters;

/// Interior slide families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchetypeKind {
    /// Concept or explanation around a hero diagram
    Concept,
    /// Chart-led data insight
    Data,
    /// Phases or timeline
    Process,
    /// Side-by-side contrast
    Comparison,
    /// Schematic or architecture
    Technical,
}

/// One entry of the interior rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct Archetype {
    /// Family of the pattern
    kind: ArchetypeKind,
    /// Label shown to the model
    label: &'static str,
    /// Visual treatment requested for the slide
    directive: &'static str,
}

/// Fixed interior rotation. Interior slide `i` (0-based) uses entry `i % 8`.
pub const ARCHETYPE_ROTATION: [Archetype; 8] = [
    Archetype {
        kind: ArchetypeKind::Concept,
        label: "Concept/Explanation",
        directive: "Large CINEMATIC hero diagram with 5+ callout boxes with connecting lines, measurement annotations, floating stat cards, atmospheric particles, layered background depth.",
    },
    Archetype {
        kind: ArchetypeKind::Data,
        label: "Data/Insight",
        directive: "DRAMATIC chart/visualization as hero with glowing data points, 3+ floating metric cards with trend indicators, ambient effects, translucent info panels, professional data overlays.",
    },
    Archetype {
        kind: ArchetypeKind::Process,
        label: "Process/Timeline",
        directive: "VISUAL STORYTELLING with 4-6 connected phase boxes, dramatic main illustration with motion effects, energy trails, particle systems, supporting info panels with specs.",
    },
    Archetype {
        kind: ArchetypeKind::Comparison,
        label: "Comparison",
        directive: "PREMIUM side-by-side with visual differentiation, floating comparison metrics, gradient backgrounds, icon systems, callout annotations, ambient depth effects.",
    },
    Archetype {
        kind: ArchetypeKind::Technical,
        label: "Technical/Architecture",
        directive: "HOLOGRAPHIC-STYLE schematic with wireframe overlays, glowing connection nodes, HUD-style brackets, floating spec cards, measurement systems, ambient scanning effects.",
    },
    Archetype {
        kind: ArchetypeKind::Concept,
        label: "Concept/Explanation",
        directive: "DOCUMENTARY-QUALITY hero with anatomical-style callouts, specimen presentation, scientific annotations, layered depth, atmospheric particles.",
    },
    Archetype {
        kind: ArchetypeKind::Data,
        label: "Data/Insight",
        directive: "CINEMATIC data presentation with dramatic chart, glowing highlight points, floating metrics, trend callouts, premium visual treatment.",
    },
    Archetype {
        kind: ArchetypeKind::Process,
        label: "Process/Timeline",
        directive: "DYNAMIC flow visualization with energy effects, phase indicators, dramatic illustrations, motion blur elements, supporting data panels.",
    },
];

/// Archetype for the `interior_index`-th interior slide (0-based).
///
/// # Examples
///
/// ```
/// use slideprompt_prompt::{ArchetypeKind, archetype_for};
///
/// assert_eq!(*archetype_for(0).kind(), ArchetypeKind::Concept);
/// assert_eq!(archetype_for(9), archetype_for(1));
/// ```
pub fn archetype_for(interior_index: usize) -> &'static Archetype {
    &ARCHETYPE_ROTATION[interior_index % ARCHETYPE_ROTATION.len()]
}

/// Position-dependent role of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideRole {
    /// Always slide 1
    Cover,
    /// Any slide strictly between cover and conclusion
    Interior(&'static Archetype),
    /// Last slide of a deck with more than one slide
    Conclusion,
}

/// Instruction for one slide of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct SlideDirective {
    /// 1-based slide number
    number: u32,
    /// Role at that position
    role: SlideRole,
}

impl SlideDirective {
    /// The plan line given to the model.
    pub fn render(&self) -> String {
        let n = self.number;
        match self.role {
            SlideRole::Cover => format!(
                "{n}. **Slide {n}: Title/Cover** - DRAMATIC headline with atmospheric visual, particle effects, layered depth. Full-bleed thematic hero with premium treatment."
            ),
            SlideRole::Interior(archetype) => format!(
                "{n}. **Slide {n}** - **{}** - {}",
                archetype.label, archetype.directive
            ),
            SlideRole::Conclusion => format!(
                "{n}. **Slide {n}: Conclusion** - IMPACTFUL takeaways with premium visual recap, floating key insight cards, atmospheric depth, subtle particle effects. Footer: page '{n}'."
            ),
        }
    }
}

/// Roles for every slide of a `slide_count`-slide deck.
///
/// Slide 1 is the cover. With more than one slide the last is the conclusion,
/// and every slide in between takes the next entry of [`ARCHETYPE_ROTATION`].
///
/// # Examples
///
/// ```
/// use slideprompt_prompt::{SlideRole, slide_plan};
///
/// let plan = slide_plan(2);
/// assert_eq!(*plan[0].role(), SlideRole::Cover);
/// assert_eq!(*plan[1].role(), SlideRole::Conclusion);
/// ```
pub fn slide_plan(slide_count: u32) -> Vec<SlideDirective> {
    (1..=slide_count)
        .map(|number| {
            let role = if number == 1 {
                SlideRole::Cover
            } else if number == slide_count {
                SlideRole::Conclusion
            } else {
                SlideRole::Interior(archetype_for((number - 2) as usize))
            };
            SlideDirective { number, role }
        })
        .collect()
}

/// Plan lines joined for embedding in the user instruction.
pub fn render_plan(slide_count: u32) -> String {
    slide_plan(slide_count)
        .iter()
        .map(SlideDirective::render)
        .collect::<Vec<_>>()
        .join("\n")
}
