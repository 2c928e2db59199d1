//! ANSI banner renderer for the indicator card.

use crate::icons::{get_icons, IconSet};
use crate::theme::{BorderSet, Theme, ThemeColors, BORDER_ASCII};

use super::animation::{pulse_frame, pulse_glyph};
use super::state::{Emphasis, IndicatorView, StatusBanner};
use super::text::{display_width, pad_display};

/// Rows used by every variant: top border, title row, detail row, bottom border.
pub const BANNER_HEIGHT: usize = 4;

/// Format the view as a bordered card.
///
/// Layout:
/// ```text
/// ╭──────────────────────────────────────╮
/// │ ✋ Gesture recognized              ● │
/// │    Open hand - galaxy                │
/// ╰──────────────────────────────────────╯
/// ```
pub fn format_status_banner(
    view: &IndicatorView,
    theme: Theme,
    unicode: bool,
    width: usize,
) -> StatusBanner {
    let icons = get_icons(unicode);
    format_banner(
        view,
        &theme.colors(),
        icons,
        unicode,
        width,
        pulse_frame(icons.pulse.len()),
    )
}

fn format_banner(
    view: &IndicatorView,
    colors: &ThemeColors,
    icons: &IconSet,
    unicode: bool,
    width: usize,
    frame: usize,
) -> StatusBanner {
    let borders = if unicode {
        colors.borders
    } else {
        BORDER_ASCII
    };
    let inner_width = width.saturating_sub(2);
    let glyph = icons.glyph(view.icon());
    let indent = " ".repeat(display_width(glyph) + 2);

    let (title_row, detail_row) = match view {
        IndicatorView::RequestPrompt {
            title,
            hint,
            enabled,
            ..
        } => {
            let (icon_color, title_color) = if *enabled {
                (colors.accent, colors.text)
            } else {
                (colors.dim, colors.dim)
            };
            (
                format!(
                    " {icon_color}{glyph}{reset} {title_color}{title}{reset}",
                    reset = colors.reset
                ),
                format!("{indent}{}{hint}{}", colors.dim, colors.reset),
            )
        }
        IndicatorView::Denied { title, hint, .. } => (
            format!(
                " {}{glyph}{} {}{title}{}",
                colors.error, colors.reset, colors.text, colors.reset
            ),
            format!("{indent}{}{hint}{}", colors.dim, colors.reset),
        ),
        IndicatorView::ActiveStatus {
            label,
            caption,
            emphasis,
            ..
        } => {
            let icon_color = match emphasis {
                Emphasis::Highlighted => colors.highlight,
                Emphasis::Muted => colors.dim,
            };
            (
                format!(
                    " {icon_color}{glyph}{reset} {}{caption}{reset}",
                    colors.dim,
                    reset = colors.reset
                ),
                format!("{indent}{}{label}{}", colors.text, colors.reset),
            )
        }
    };

    let marker = match view {
        IndicatorView::ActiveStatus { liveness: true, .. } => format!(
            "{}{}{} ",
            colors.active,
            pulse_glyph(icons.pulse, frame),
            colors.reset
        ),
        _ => String::new(),
    };

    let lines = vec![
        format_horizontal(colors, borders.top_left, borders.horizontal, borders.top_right, width),
        format_row(&title_row, &marker, colors, &borders, inner_width),
        format_row(&detail_row, "", colors, &borders, inner_width),
        format_horizontal(
            colors,
            borders.bottom_left,
            borders.horizontal,
            borders.bottom_right,
            width,
        ),
    ];
    let button = view.button_position(
        width.min(u16::MAX as usize) as u16,
        BANNER_HEIGHT as u16,
    );
    StatusBanner::new(lines, button)
}

fn format_horizontal(
    colors: &ThemeColors,
    left: char,
    fill: char,
    right: char,
    width: usize,
) -> String {
    let span: String = std::iter::repeat(fill)
        .take(width.saturating_sub(2))
        .collect();
    format!("{}{left}{span}{right}{}", colors.border, colors.reset)
}

fn format_row(
    content: &str,
    right: &str,
    colors: &ThemeColors,
    borders: &BorderSet,
    inner_width: usize,
) -> String {
    let right_width = display_width(right);
    let body = pad_display(content, inner_width.saturating_sub(right_width));
    format!(
        "{border}{v}{reset}{body}{right}{border}{v}{reset}",
        border = colors.border,
        v = borders.vertical,
        reset = colors.reset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureKind;
    use crate::icons::{ASCII_ICONS, UNICODE_ICONS};
    use crate::indicator::select::select_view;
    use crate::indicator::state::DisplayInputs;
    use crate::labels::{LABELS_EN, LABELS_ZH_CN};
    use crate::permission::PermissionState;
    use crate::theme::THEME_NONE;

    fn plain(inputs: DisplayInputs, width: usize) -> StatusBanner {
        let view = select_view(&inputs, &LABELS_EN);
        format_banner(&view, &THEME_NONE, &UNICODE_ICONS, true, width, 0)
    }

    #[test]
    fn banner_rows_have_requested_width() {
        for permission in PermissionState::ALL {
            for is_tracking in [false, true] {
                let inputs =
                    DisplayInputs::new(GestureKind::Pinch, is_tracking, false, permission);
                let banner = plain(inputs, 40);
                assert_eq!(banner.lines.len(), BANNER_HEIGHT);
                for line in &banner.lines {
                    assert_eq!(display_width(line), 40, "{line:?}");
                }
            }
        }
    }

    #[test]
    fn prompt_banner_has_clickable_card() {
        let banner = plain(
            DisplayInputs::new(GestureKind::None, false, false, PermissionState::Prompt),
            36,
        );
        assert!(banner.lines[1].contains("◙ Enable gesture control"));
        assert!(banner.lines[2].contains("Click to allow camera"));
        let button = banner.button.expect("prompt affordance");
        assert_eq!((button.start_x, button.end_x), (1, 36));
        assert_eq!((button.start_row, button.end_row), (1, 4));
    }

    #[test]
    fn requesting_banner_has_no_clickable_region() {
        let banner = plain(
            DisplayInputs::new(GestureKind::Fist, true, false, PermissionState::Requesting),
            36,
        );
        assert!(banner.lines[1].contains("Requesting permission..."));
        assert!(banner.button.is_none());
        assert!(!banner.lines.iter().any(|line| line.contains("Fist")));
    }

    #[test]
    fn denied_banner_is_static() {
        let banner = plain(
            DisplayInputs::new(GestureKind::Open, true, false, PermissionState::Denied),
            60,
        );
        assert!(banner.lines[1].contains("⚠ Camera permission denied"));
        assert!(banner.lines[2].contains("Double-click with the mouse"));
        assert!(banner.button.is_none());
    }

    #[test]
    fn tracking_banner_shows_pulse_marker() {
        let banner = plain(
            DisplayInputs::new(GestureKind::Open, true, false, PermissionState::Granted),
            40,
        );
        assert!(banner.lines[1].contains("✋ Gesture recognized"));
        assert!(banner.lines[1].trim_end_matches('│').trim_end().ends_with('●'));
        assert!(banner.lines[2].contains("Open hand - galaxy"));
    }

    #[test]
    fn waiting_banner_has_no_marker() {
        let banner = plain(
            DisplayInputs::new(GestureKind::Open, false, false, PermissionState::Granted),
            40,
        );
        assert!(banner.lines[1].contains("Waiting for gesture"));
        assert!(!banner.lines[1].contains('●'));
        assert!(banner.lines[1].trim_end_matches('│').trim_end().ends_with("gesture"));
    }

    #[test]
    fn mouse_mode_banner_keeps_marker_when_tracking() {
        let banner = plain(
            DisplayInputs::new(GestureKind::Fist, true, true, PermissionState::Granted),
            44,
        );
        assert!(banner.lines[1].contains("➚ Mouse control"));
        assert!(banner.lines[2].contains("Double-click to switch modes"));
        assert!(banner.lines[1].trim_end_matches('│').trim_end().ends_with('●'));
    }

    #[test]
    fn ascii_banner_uses_ascii_glyphs() {
        let view = select_view(
            &DisplayInputs::new(GestureKind::Fist, true, false, PermissionState::Granted),
            &LABELS_EN,
        );
        let banner = format_banner(&view, &THEME_NONE, &ASCII_ICONS, false, 40, 0);
        assert!(banner.lines.iter().all(|line| line.is_ascii()));
        assert!(banner.lines[0].starts_with('+'));
        assert!(banner.lines[1].contains("# Gesture recognized"));
    }

    #[test]
    fn wide_labels_stay_inside_the_card() {
        let view = select_view(
            &DisplayInputs::new(GestureKind::Open, false, false, PermissionState::Granted),
            &LABELS_ZH_CN,
        );
        let banner = format_banner(&view, &THEME_NONE, &UNICODE_ICONS, true, 24, 0);
        for line in &banner.lines {
            assert_eq!(display_width(line), 24, "{line:?}");
        }
    }

    #[test]
    fn themed_banner_keeps_width() {
        let view = select_view(
            &DisplayInputs::new(GestureKind::Pointing, true, false, PermissionState::Granted),
            &LABELS_EN,
        );
        let banner = format_status_banner(&view, Theme::Gold, true, 40);
        assert!(banner.lines[1].contains("\x1b["));
        for line in &banner.lines {
            assert_eq!(display_width(line), 40);
        }
    }
}
