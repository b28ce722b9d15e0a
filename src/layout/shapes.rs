use crate::{
    config::tree::{ConfigTree, Section, section_name},
    foundation::{
        core::{Point, Rgba8},
        error::{DiplomaError, DiplomaResult},
    },
    layout::text::POSITION_KEY,
    raster::{circle::RingSpec, stamp::StampSpec},
};

/// Namespace of the decoration sections (`[image.<name>]`).
pub const IMAGE_NAMESPACE: &str = "image";
/// Sub-name of the ring section (`[image.圆]`). Every other `[image.<name>]` is the stamp.
pub const RINGS_NAME: &str = "圆";
/// Stroke color `r,g,b`.
pub const COLOR_KEY: &str = "颜色";
/// Stamp glyph color `r,g,b`.
pub const INK_KEY: &str = "字颜色";
/// Ring center `x,y`.
pub const CENTER_KEY: &str = "圆心";
/// Ring radii `r1,r2,...`.
pub const RADII_KEY: &str = "半径";

/// Inscription stamped when the config has no stamp section.
pub const DEFAULT_STAMP_INSCRIPTION: &str = "陈中江印";
pub const DEFAULT_STAMP_P1: Point = Point::new(760, 570);
pub const DEFAULT_STAMP_P2: Point = Point::new(830, 640);
pub const DEFAULT_STAMP_BORDER: Rgba8 = Rgba8::opaque(157, 85, 50);
pub const DEFAULT_STAMP_INK: Rgba8 = Rgba8::opaque(187, 80, 60);
pub const DEFAULT_RING_CENTER: Point = Point::new(580, 610);
pub const DEFAULT_RING_RADII: [i32; 5] = [90, 91, 92, 93, 94];
pub const DEFAULT_RING_COLOR: Rgba8 = Rgba8::opaque(189, 59, 25);

fn parse_ints(value: &str) -> DiplomaResult<Vec<i32>> {
    value
        .replace('，', ",")
        .split(',')
        .map(str::trim)
        .map(|c| {
            c.parse::<i32>().map_err(|e| {
                DiplomaError::invalid_position(format!("component '{c}' of '{value}': {e}"))
            })
        })
        .collect()
}

/// Parse `x1,y1,x2,y2` into the two corners of a box.
pub fn parse_box(value: &str) -> DiplomaResult<(Point, Point)> {
    let ints = parse_ints(value)?;
    let [x1, y1, x2, y2] = ints.as_slice() else {
        return Err(DiplomaError::invalid_position(format!(
            "expected 'x1,y1,x2,y2', got '{value}'"
        )));
    };
    Ok((Point::new(*x1, *y1), Point::new(*x2, *y2)))
}

fn color_or(section: &Section, key: &str, default: Rgba8) -> DiplomaResult<Rgba8> {
    section
        .key(key)
        .map(Rgba8::parse_rgb)
        .transpose()
        .map(|c| c.unwrap_or(default))
}

fn stamp_names(tree: &ConfigTree) -> Vec<&str> {
    let prefix = section_name(IMAGE_NAMESPACE, "");
    tree.section_names()
        .filter_map(|n| n.strip_prefix(prefix.as_str()))
        .filter(|n| *n != RINGS_NAME)
        .collect()
}

/// Resolve the stamp. It is always drawn.
///
/// The stamp section is the single `[image.<name>]` other than `[image.圆]`; its key
/// `<name>` holds the 4-character inscription. Without one, the classic stamp is used.
pub fn resolve_stamp(tree: &ConfigTree) -> DiplomaResult<StampSpec> {
    let name = match stamp_names(tree).as_slice() {
        [] => {
            tracing::debug!("no stamp section, using the classic stamp");
            return Ok(StampSpec {
                glyphs: StampSpec::split_inscription(DEFAULT_STAMP_INSCRIPTION)?,
                p1: DEFAULT_STAMP_P1,
                p2: DEFAULT_STAMP_P2,
                border: DEFAULT_STAMP_BORDER,
                ink: DEFAULT_STAMP_INK,
            });
        }
        [name] => name.to_string(),
        many => {
            return Err(DiplomaError::invalid_stamp(format!(
                "expected one stamp section, found {}: {}",
                many.len(),
                many.join(", ")
            )));
        }
    };

    let section = tree.section(&section_name(IMAGE_NAMESPACE, &name))?;
    let inscription = section.key(&name).ok_or_else(|| {
        DiplomaError::invalid_stamp(format!("[{}] has no '{name}' inscription", section.name()))
    })?;
    let glyphs = StampSpec::split_inscription(inscription)?;

    let (p1, p2) = match section.key(POSITION_KEY) {
        Some(v) => parse_box(v)?,
        None => (DEFAULT_STAMP_P1, DEFAULT_STAMP_P2),
    };
    if p1.x > p2.x || p1.y > p2.y {
        return Err(DiplomaError::invalid_stamp(format!(
            "box corners out of order: {p1:?} .. {p2:?}"
        )));
    }
    tracing::debug!(section = %section.name(), inscription, "stamp");

    Ok(StampSpec {
        glyphs,
        p1,
        p2,
        border: color_or(section, COLOR_KEY, DEFAULT_STAMP_BORDER)?,
        ink: color_or(section, INK_KEY, DEFAULT_STAMP_INK)?,
    })
}

/// Resolve the rings. They are always drawn; `[image.圆]` overrides the classic set.
pub fn resolve_rings(tree: &ConfigTree) -> DiplomaResult<RingSpec> {
    let section = tree.section_or_empty(&section_name(IMAGE_NAMESPACE, RINGS_NAME));

    let center = match section.key(CENTER_KEY) {
        Some(v) => match parse_ints(v)?.as_slice() {
            [x, y] => Point::new(*x, *y),
            _ => {
                return Err(DiplomaError::invalid_position(format!(
                    "ring center must be 'x,y', got '{v}'"
                )));
            }
        },
        None => DEFAULT_RING_CENTER,
    };
    let radii = match section.key(RADII_KEY) {
        Some(v) => parse_ints(v)?,
        None => DEFAULT_RING_RADII.to_vec(),
    };
    if let Some(bad) = radii.iter().find(|r| **r < 1) {
        return Err(DiplomaError::invalid_position(format!(
            "ring radius must be >= 1, got {bad}"
        )));
    }

    Ok(RingSpec {
        center,
        radii,
        color: color_or(section, COLOR_KEY, DEFAULT_RING_COLOR)?,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/shapes.rs"]
mod tests;
