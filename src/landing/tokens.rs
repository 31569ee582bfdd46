//! Visual tokens: a closed set of icons and semantic color roles.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Robot,
    Wallet,
    Payment,
    Coins,
    Shield,
    Eye,
    Brain,
    Database,
    Globe,
    People,
    Flash,
    Chart,
    Check,
    Sparkles,
    Quote,
    Book,
    Twitter,
    Telegram,
}

impl Icon {
    /// Single-cell glyph used in the terminal.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Robot => "◎",
            Icon::Wallet => "▣",
            Icon::Payment => "$",
            Icon::Coins => "◉",
            Icon::Shield => "◈",
            Icon::Eye => "◐",
            Icon::Brain => "✺",
            Icon::Database => "≣",
            Icon::Globe => "◍",
            Icon::People => "☷",
            Icon::Flash => "ϟ",
            Icon::Chart => "▁▃▅",
            Icon::Check => "✓",
            Icon::Sparkles => "✦",
            Icon::Quote => "❝",
            Icon::Book => "▤",
            Icon::Twitter => "𝕏",
            Icon::Telegram => "➤",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Brand amber.
    Primary,
    /// Warm orange used for secondary highlights.
    Accent,
    /// Payout gold.
    Reward,
    Success,
    Danger,
    Text,
    Muted,
    Border,
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualToken {
    pub icon: Icon,
    pub role: ColorRole,
}

impl VisualToken {
    pub const fn new(icon: Icon, role: ColorRole) -> Self {
        Self { icon, role }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub accent: Color,
    pub reward: Color,
    pub success: Color,
    pub danger: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub background: Color,
}

impl Palette {
    pub fn labelx() -> Self {
        Self {
            primary: Color::Rgb(0xFB, 0xBF, 0x24),
            accent: Color::Rgb(0xFF, 0x7A, 0x1A),
            reward: Color::Rgb(0xFD, 0xD5, 0x36),
            success: Color::Rgb(0x4A, 0xDE, 0x80),
            danger: Color::Rgb(0xF8, 0x71, 0x71),
            text: Color::Rgb(0xF5, 0xF5, 0xF5),
            muted: Color::Rgb(0x73, 0x73, 0x73),
            border: Color::Rgb(0x2A, 0x2A, 0x2A),
            background: Color::Rgb(0x05, 0x05, 0x05),
        }
    }

    /// Sixteen-color fallback for terminals without truecolor.
    pub fn basic() -> Self {
        Self {
            primary: Color::Yellow,
            accent: Color::LightRed,
            reward: Color::LightYellow,
            success: Color::Green,
            danger: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            background: Color::Reset,
        }
    }

    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Accent => self.accent,
            ColorRole::Reward => self.reward,
            ColorRole::Success => self.success,
            ColorRole::Danger => self.danger,
            ColorRole::Text => self.text,
            ColorRole::Muted => self.muted,
            ColorRole::Border => self.border,
            ColorRole::Background => self.background,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::labelx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_maps_every_role() {
        let palette = Palette::labelx();
        assert_eq!(palette.color(ColorRole::Primary), Color::Rgb(0xFB, 0xBF, 0x24));
        assert_eq!(palette.color(ColorRole::Accent), palette.accent);
        assert_ne!(palette.color(ColorRole::Text), palette.color(ColorRole::Muted));
    }

    #[test]
    fn test_glyphs_are_not_empty() {
        for icon in [Icon::Robot, Icon::Wallet, Icon::Check, Icon::Twitter, Icon::Chart] {
            assert!(!icon.glyph().is_empty());
        }
    }
}
