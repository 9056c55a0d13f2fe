use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Colors used by the board renderer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoardStyle {
    /// Fill of live cells.
    pub live: Color,
    /// Clear color; dead cells are never drawn.
    pub background: Color,
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            live: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct StyleUniform {
    pub live: [f32; 4],
}

impl From<&BoardStyle> for StyleUniform {
    fn from(style: &BoardStyle) -> Self {
        Self { live: style.live.to_array() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white_on_black() {
        let style = BoardStyle::default();
        assert_eq!(style.live, Color::WHITE);
        assert_eq!(style.background, Color::BLACK);
    }

    #[test]
    fn uniform_carries_live_color() {
        let style = BoardStyle {
            live: Color::from_premul(0.25, 0.5, 0.75, 1.0),
            ..BoardStyle::default()
        };
        let u = StyleUniform::from(&style);
        assert_eq!(u.live, [0.25, 0.5, 0.75, 1.0]);
        assert_eq!(std::mem::size_of::<StyleUniform>(), 16);
    }
}
