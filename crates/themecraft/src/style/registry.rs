//! The fixed property → value generator registry.
//!
//! The table below is the complete set of supported style properties. It is
//! built into an index once per process and never mutated.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use super::generator::{Resolve, ValueGenerator};

const BOX_SIZING: &[(&str, &str)] = &[("border", "border-box"), ("content", "content-box")];

const FONT_STYLE: &[(&str, &str)] = &[("italic", "italic"), ("not-italic", "normal")];

const WHITE_SPACE: &[(&str, &str)] = &[
    ("normal", "normal"),
    ("no-wrap", "nowrap"),
    ("pre", "pre"),
    ("pre-line", "pre-line"),
    ("pre-wrap", "pre-wrap"),
];

const fn dotted(section: &'static str, emits: &'static [&'static str]) -> ValueGenerator {
    ValueGenerator::new(Resolve::Dotted(section), emits)
}

const fn indexed(section: &'static str, emits: &'static [&'static str]) -> ValueGenerator {
    ValueGenerator::new(Resolve::Indexed(section), emits)
}

const fn alias(
    aliases: &'static [(&'static str, &'static str)],
    emits: &'static [&'static str],
) -> ValueGenerator {
    ValueGenerator::new(Resolve::Alias(aliases), emits)
}

const fn verbatim(emits: &'static [&'static str]) -> ValueGenerator {
    ValueGenerator::new(Resolve::Verbatim, emits)
}

#[rustfmt::skip]
const GENERATORS: &[(&str, ValueGenerator)] = &[
    // Colors
    ("backgroundColor", dotted("backgroundColor", &["backgroundColor"])),
    ("borderColor", dotted("borderColor", &["borderColor"])),
    ("textColor", dotted("textColor", &["color"])),
    ("placeholderColor", dotted("placeholderColor", &["color"])),
    ("fill", dotted("fill", &["fill"])),
    ("stroke", dotted("stroke", &["stroke"])),

    // Spacing
    ("padding", indexed("padding", &["padding"])),
    ("paddingTop", indexed("padding", &["paddingTop"])),
    ("paddingRight", indexed("padding", &["paddingRight"])),
    ("paddingBottom", indexed("padding", &["paddingBottom"])),
    ("paddingLeft", indexed("padding", &["paddingLeft"])),
    ("paddingX", indexed("padding", &["paddingRight", "paddingLeft"])),
    ("paddingY", indexed("padding", &["paddingTop", "paddingBottom"])),
    ("margin", indexed("margin", &["margin"])),
    ("marginTop", indexed("margin", &["marginTop"])),
    ("marginRight", indexed("margin", &["marginRight"])),
    ("marginBottom", indexed("margin", &["marginBottom"])),
    ("marginLeft", indexed("margin", &["marginLeft"])),
    ("marginX", indexed("margin", &["marginRight", "marginLeft"])),
    ("marginY", indexed("margin", &["marginTop", "marginBottom"])),
    ("gap", indexed("gap", &["gap"])),

    // Sizing
    ("width", indexed("width", &["width"])),
    ("height", indexed("height", &["height"])),
    ("minWidth", indexed("minWidth", &["minWidth"])),
    ("minHeight", indexed("minHeight", &["minHeight"])),
    ("maxWidth", indexed("maxWidth", &["maxWidth"])),
    ("maxHeight", indexed("maxHeight", &["maxHeight"])),

    // Typography
    ("fontSize", indexed("fontSize", &["fontSize"])),
    ("fontWeight", indexed("fontWeight", &["fontWeight"])),
    ("fontFamily", indexed("fontFamily", &["fontFamily"])),
    ("lineHeight", indexed("lineHeight", &["lineHeight"])),
    ("letterSpacing", indexed("letterSpacing", &["letterSpacing"])),
    ("fontStyle", alias(FONT_STYLE, &["fontStyle"])),
    ("whiteSpace", alias(WHITE_SPACE, &["whiteSpace"])),
    ("textAlign", verbatim(&["textAlign"])),
    ("textTransform", verbatim(&["textTransform"])),
    ("textDecoration", verbatim(&["textDecoration"])),
    ("verticalAlign", verbatim(&["verticalAlign"])),

    // Borders and effects
    ("borderRadius", indexed("borderRadius", &["borderRadius"])),
    ("borderWidth", indexed("borderWidth", &["borderWidth"])),
    ("boxShadow", indexed("boxShadow", &["boxShadow"])),
    ("opacity", indexed("opacity", &["opacity"])),
    ("cursor", indexed("cursor", &["cursor"])),

    // Layout
    ("boxSizing", alias(BOX_SIZING, &["boxSizing"])),
    ("display", verbatim(&["display"])),
    ("clear", verbatim(&["clear"])),
    ("float", verbatim(&["float"])),
    ("position", verbatim(&["position"])),
    ("overflow", verbatim(&["overflow"])),
    ("visibility", verbatim(&["visibility"])),
    ("zIndex", indexed("zIndex", &["zIndex"])),
    ("inset", indexed("inset", &["top", "right", "bottom", "left"])),
    ("top", indexed("inset", &["top"])),
    ("right", indexed("inset", &["right"])),
    ("bottom", indexed("inset", &["bottom"])),
    ("left", indexed("inset", &["left"])),

    // Flexbox
    ("alignItems", verbatim(&["alignItems"])),
    ("justifyContent", verbatim(&["justifyContent"])),
    ("flexDirection", verbatim(&["flexDirection"])),
    ("flexWrap", verbatim(&["flexWrap"])),
];

static REGISTRY: Lazy<IndexMap<&'static str, ValueGenerator>> =
    Lazy::new(|| GENERATORS.iter().copied().collect());

/// Returns the value generator registered for an abstract style property.
pub fn generator(property: &str) -> Option<&'static ValueGenerator> {
    Lazy::force(&REGISTRY).get(property)
}

/// Iterates over every registered property name, in registry order.
pub fn registered_properties() -> impl Iterator<Item = &'static str> {
    Lazy::force(&REGISTRY).keys().copied()
}
