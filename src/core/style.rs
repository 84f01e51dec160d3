use glam::Vec2;

/// Best available way to move a layer, from feature detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformMode {
    Translate3d,
    Translate2d,
    /// No transform support: fall back to `left` / `top`.
    Position,
}

impl TransformMode {
    pub fn from_support(transform_2d: bool, transform_3d: bool) -> Self {
        if transform_3d {
            TransformMode::Translate3d
        } else if transform_2d {
            TransformMode::Translate2d
        } else {
            TransformMode::Position
        }
    }
}

/// Style write needed to put a layer at an offset.
#[derive(Clone, Debug, PartialEq)]
pub enum Placement {
    Transform(String),
    Offset { left: String, top: String },
}

pub fn placement(mode: TransformMode, offset: Vec2) -> Placement {
    let x = format!("{}px", offset.x);
    let y = format!("{}px", offset.y);
    match mode {
        TransformMode::Translate3d => Placement::Transform(format!("translate3d({},{},0)", x, y)),
        TransformMode::Translate2d => Placement::Transform(format!("translate({},{})", x, y)),
        TransformMode::Position => Placement::Offset { left: x, top: y },
    }
}

// Style prefixes probed in order: (css prefix, js property prefix)
const VENDORS: [Option<(&str, &str)>; 5] = [
    None,
    Some(("-webkit-", "webkit")),
    Some(("-moz-", "Moz")),
    Some(("-o-", "O")),
    Some(("-ms-", "ms")),
];

/// `(css name, js property name)` pairs to probe for a CSS property,
/// unprefixed first.
pub fn vendor_candidates(property: &str) -> Vec<(String, String)> {
    VENDORS
        .iter()
        .map(|v| match v {
            None => (property.to_string(), camel_case(property)),
            Some((css, js)) => (
                format!("{}{}", css, property),
                camel_case(&format!("{}-{}", js, property)),
            ),
        })
        .collect()
}

/// `backface-visibility` -> `backfaceVisibility`
pub fn camel_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut upper = false;
    for ch in value.chars() {
        if ch == '-' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
