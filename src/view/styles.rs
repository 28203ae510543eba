//! Color configuration and the style palette for the event list screen.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors forced off, independent of the environment.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ListStyles =====

/// Styles for every part of the event list screen.
///
/// With colors disabled only modifiers remain (bold, dim, reversed), so
/// the screen stays legible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyles {
    /// Screen title.
    pub title: Style,
    /// Field labels such as `Location:`.
    pub label: Style,
    /// Field values.
    pub value: Style,
    /// Pagination controls that can be used.
    pub control: Style,
    /// Pagination controls at the first or last page.
    pub control_disabled: Style,
    /// Results table header row.
    pub table_header: Style,
    /// Highlighted results row.
    pub row_highlight: Style,
    /// Loading notification.
    pub loading: Style,
    /// Error notifications.
    pub error: Style,
    /// Borders and secondary text.
    pub muted: Style,
    /// Help overlay section headers.
    pub section_header: Style,
    /// Key names in the help overlay and status bar.
    pub key_hint: Style,
}

impl ListStyles {
    /// Build the palette for `config`.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().add_modifier(Modifier::DIM);

        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::Cyan),
                label: Style::default().fg(Color::Gray),
                value: Style::default().fg(Color::White),
                control: Style::default().fg(Color::Cyan),
                control_disabled: dim.fg(Color::DarkGray),
                table_header: bold.fg(Color::Yellow),
                row_highlight: Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                loading: Style::default().fg(Color::Yellow),
                error: Style::default().fg(Color::Red),
                muted: Style::default().fg(Color::DarkGray),
                section_header: bold.fg(Color::Magenta),
                key_hint: bold.fg(Color::Yellow),
            }
        } else {
            Self {
                title: bold,
                label: Style::default(),
                value: Style::default(),
                control: Style::default(),
                control_disabled: dim,
                table_header: bold,
                row_highlight: Style::default().add_modifier(Modifier::REVERSED),
                loading: Style::default(),
                error: bold,
                muted: dim,
                section_header: bold,
                key_hint: bold,
            }
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(env)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");

        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
    }

    #[test]
    #[serial(env)]
    fn color_config_enabled_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled());
    }

    #[test]
    fn disabled_palette_has_no_colors() {
        let styles = ListStyles::with_color_config(ColorConfig::disabled());
        for style in [
            styles.title,
            styles.control,
            styles.error,
            styles.row_highlight,
            styles.key_hint,
        ] {
            assert_eq!(style.fg, None);
            assert_eq!(style.bg, None);
        }
    }

    #[test]
    fn disabled_controls_are_dimmed_in_both_palettes() {
        let colored = ListStyles::with_color_config(ColorConfig { enabled: true });
        assert!(colored.control_disabled.add_modifier.contains(Modifier::DIM));

        let plain = ListStyles::with_color_config(ColorConfig::disabled());
        assert!(plain.control_disabled.add_modifier.contains(Modifier::DIM));
    }
}
