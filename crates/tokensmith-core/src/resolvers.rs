//! Pure value extractors for colors, typography and shadows.
//!
//! None of these fail: missing or unsupported input is replaced with the
//! fallbacks defined here.

use crate::catalog::{Shadow, Typography};
use crate::document::{Effect, EffectKind, Paint, PaintKind, Rgba, TypeStyle};

/// Color value used when a paint is absent or not a solid fill
pub const NO_COLOR: &str = "";

pub const DEFAULT_FONT_FAMILY: &str = "Default";
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_FONT_WEIGHT: u32 = 400;
pub const NORMAL: &str = "normal";

/// Format a number with a pixel unit (`4` -> `"4px"`, `0.5` -> `"0.5px"`)
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise
pub fn rgba_to_hex(color: &Rgba) -> String {
    let mut hex = format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(color.r),
        to_byte(color.g),
        to_byte(color.b)
    );
    if color.a < 1.0 {
        hex.push_str(&format!("{:02x}", to_byte(color.a)));
    }
    hex
}

pub fn resolve_color(paint: Option<&Paint>) -> String {
    match paint {
        Some(Paint {
            kind: PaintKind::Solid,
            color: Some(color),
        }) => rgba_to_hex(color),
        _ => NO_COLOR.to_string(),
    }
}

/// Fill in every unset typography field with its default
pub fn resolve_typography(style: Option<&TypeStyle>) -> Typography {
    let empty = TypeStyle::default();
    let style = style.unwrap_or(&empty);

    Typography {
        font_family: style
            .font_family
            .clone()
            .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        font_size: px(style.font_size.unwrap_or(DEFAULT_FONT_SIZE)),
        font_weight: style
            .font_weight
            .map(|w| w.round().max(0.0) as u32)
            .unwrap_or(DEFAULT_FONT_WEIGHT),
        line_height: px_or_normal(style.line_height_px),
        letter_spacing: px_or_normal(style.letter_spacing),
    }
}

// Zero counts as unset.
fn px_or_normal(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => px(v),
        _ => NORMAL.to_string(),
    }
}

/// Shadow token used when a node carries no drop shadow
pub fn zero_shadow() -> Shadow {
    Shadow {
        color: rgba_to_hex(&Rgba::TRANSPARENT),
        offset_x: px(0.0),
        offset_y: px(0.0),
        blur_radius: px(0.0),
    }
}

/// Resolve the first drop shadow of an effect list
pub fn resolve_shadow(effects: &[Effect]) -> Shadow {
    let Some(effect) = effects.iter().find(|e| e.kind == EffectKind::DropShadow) else {
        return zero_shadow();
    };

    let offset = effect.offset.unwrap_or_default();
    Shadow {
        color: rgba_to_hex(&effect.color.unwrap_or(Rgba::TRANSPARENT)),
        offset_x: px(offset.x),
        offset_y: px(offset.y),
        blur_radius: px(effect.radius.unwrap_or(0.0)),
    }
}

/// Token description, empty when the style has none
pub fn token_description(description: Option<&str>) -> String {
    description.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Offset;
    use pretty_assertions::assert_eq;

    fn solid(r: f64, g: f64, b: f64, a: f64) -> Paint {
        Paint {
            kind: PaintKind::Solid,
            color: Some(Rgba::new(r, g, b, a)),
        }
    }

    #[test]
    fn test_opaque_color_has_six_digits() {
        assert_eq!(resolve_color(Some(&solid(0.102, 0.451, 0.910, 1.0))), "#1a73e8");
        assert_eq!(resolve_color(Some(&solid(1.0, 1.0, 1.0, 1.0))), "#ffffff");
    }

    #[test]
    fn test_translucent_color_has_eight_digits() {
        assert_eq!(resolve_color(Some(&solid(0.0, 0.0, 0.0, 0.5))), "#00000080");
        assert_eq!(resolve_color(Some(&solid(1.0, 0.0, 0.0, 0.0))), "#ff000000");
        // Rounds up to ff but is still below one
        assert_eq!(resolve_color(Some(&solid(0.0, 0.0, 0.0, 0.999))), "#000000ff");
    }

    #[test]
    fn test_out_of_range_channels_are_clamped() {
        assert_eq!(resolve_color(Some(&solid(1.4, -0.2, 0.5, 1.0))), "#ff0080");
    }

    #[test]
    fn test_missing_or_non_solid_paint_falls_back() {
        assert_eq!(resolve_color(None), NO_COLOR);

        let gradient = Paint {
            kind: PaintKind::GradientLinear,
            color: Some(Rgba::new(1.0, 0.0, 0.0, 1.0)),
        };
        assert_eq!(resolve_color(Some(&gradient)), NO_COLOR);

        let colorless = Paint {
            kind: PaintKind::Solid,
            color: None,
        };
        assert_eq!(resolve_color(Some(&colorless)), NO_COLOR);
    }

    #[test]
    fn test_empty_typography_uses_defaults() {
        let expected = Typography {
            font_family: "Default".to_string(),
            font_size: "16px".to_string(),
            font_weight: 400,
            line_height: "normal".to_string(),
            letter_spacing: "normal".to_string(),
        };
        assert_eq!(resolve_typography(Some(&TypeStyle::default())), expected);
        assert_eq!(resolve_typography(None), expected);
    }

    #[test]
    fn test_full_typography() {
        let style = TypeStyle {
            font_family: Some("Inter".to_string()),
            font_size: Some(14.0),
            font_weight: Some(600.0),
            line_height_px: Some(20.5),
            letter_spacing: Some(-0.25),
        };
        let resolved = resolve_typography(Some(&style));
        assert_eq!(resolved.font_family, "Inter");
        assert_eq!(resolved.font_size, "14px");
        assert_eq!(resolved.font_weight, 600);
        assert_eq!(resolved.line_height, "20.5px");
        assert_eq!(resolved.letter_spacing, "-0.25px");
    }

    #[test]
    fn test_zero_letter_spacing_is_normal() {
        let style = TypeStyle {
            letter_spacing: Some(0.0),
            line_height_px: Some(0.0),
            ..Default::default()
        };
        let resolved = resolve_typography(Some(&style));
        assert_eq!(resolved.letter_spacing, "normal");
        assert_eq!(resolved.line_height, "normal");
    }

    #[test]
    fn test_shadow_without_drop_shadow_is_zero_token() {
        let blur = Effect {
            kind: EffectKind::LayerBlur,
            radius: Some(4.0),
            ..Default::default()
        };
        let expected = Shadow {
            color: "#00000000".to_string(),
            offset_x: "0px".to_string(),
            offset_y: "0px".to_string(),
            blur_radius: "0px".to_string(),
        };
        assert_eq!(resolve_shadow(&[blur]), expected);
        assert_eq!(resolve_shadow(&[]), expected);
    }

    #[test]
    fn test_first_drop_shadow_wins() {
        let inner = Effect {
            kind: EffectKind::InnerShadow,
            radius: Some(99.0),
            ..Default::default()
        };
        let first = Effect {
            kind: EffectKind::DropShadow,
            color: Some(Rgba::new(0.0, 0.0, 0.0, 0.25)),
            offset: Some(Offset { x: 0.0, y: 4.0 }),
            radius: Some(8.0),
        };
        let second = Effect {
            kind: EffectKind::DropShadow,
            color: Some(Rgba::new(1.0, 1.0, 1.0, 1.0)),
            offset: Some(Offset { x: 2.0, y: 2.0 }),
            radius: Some(2.0),
        };

        let shadow = resolve_shadow(&[inner, first, second]);
        assert_eq!(
            shadow,
            Shadow {
                color: "#00000040".to_string(),
                offset_x: "0px".to_string(),
                offset_y: "4px".to_string(),
                blur_radius: "8px".to_string(),
            }
        );
    }

    #[test]
    fn test_px_formatting() {
        assert_eq!(px(4.0), "4px");
        assert_eq!(px(0.5), "0.5px");
        assert_eq!(px(12.75), "12.75px");
    }
}
