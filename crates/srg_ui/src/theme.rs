//! Theme configuration for Source Recognition GUI.
//!
//! Light palette matching the original web form.

use iced::Color;

/// Application theme colors.
pub mod colors {
    use super::Color;

    /// Window background
    pub const BACKGROUND: Color = Color::from_rgb(0.93, 0.95, 0.99);

    /// Card background
    pub const CARD: Color = Color::from_rgb(1.0, 1.0, 1.0);

    /// Drop zone background
    pub const DROP_ZONE: Color = Color::from_rgb(0.97, 0.98, 0.98);

    /// File info row background
    pub const FILE_INFO: Color = Color::from_rgb(0.94, 0.96, 1.0);

    /// Primary accent color
    pub const PRIMARY: Color = Color::from_rgb(0.15, 0.39, 0.92);

    /// Primary accent hover
    pub const PRIMARY_HOVER: Color = Color::from_rgb(0.11, 0.31, 0.85);

    /// Primary accent while disabled
    pub const PRIMARY_DISABLED: Color = Color::from_rgb(0.58, 0.70, 0.95);

    /// Text on primary-colored surfaces
    pub const ON_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);

    /// Error panel background
    pub const ERROR_BG: Color = Color::from_rgb(1.0, 0.95, 0.95);

    /// Error panel text
    pub const ERROR_TEXT: Color = Color::from_rgb(0.86, 0.15, 0.15);

    /// Result panel background
    pub const SUCCESS_BG: Color = Color::from_rgb(0.94, 0.99, 0.96);

    /// Result panel text
    pub const SUCCESS_TEXT: Color = Color::from_rgb(0.08, 0.50, 0.24);

    /// Text primary
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.07, 0.09, 0.11);

    /// Text secondary
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.42, 0.45, 0.50);

    /// Border color
    pub const BORDER: Color = Color::from_rgb(0.82, 0.84, 0.86);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Extra large spacing (24px)
    pub const XL: f32 = 24.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 12.0;
    /// Normal font size
    pub const NORMAL: f32 = 14.0;
    /// Medium font size
    pub const MD: f32 = 16.0;
    /// Large font size
    pub const LG: f32 = 18.0;
    /// Header font size
    pub const HEADER: f32 = 24.0;
}
