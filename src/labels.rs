//! Localized text catalogs for the indicator.
//!
//! Strings are opaque to the selection logic; it only picks which one to show.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;
use crate::gesture::GestureKind;

/// Display language for indicator text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Simplified Chinese
    #[default]
    ZhCn,
    /// English
    En,
}

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Self::ZhCn => &LABELS_ZH_CN,
            Self::En => &LABELS_EN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZhCn => write!(f, "zh-cn"),
            Self::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "zh" | "zh-cn" | "cn" => Ok(Self::ZhCn),
            "en" | "en-us" | "english" => Ok(Self::En),
            _ => Err(InputError::UnknownLocale(s.to_string())),
        }
    }
}

/// Text catalog for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub request_title: &'static str,
    pub requesting_title: &'static str,
    pub request_hint: &'static str,
    pub denied_title: &'static str,
    /// Names the mouse fallback that stays available after a denial
    pub denied_hint: &'static str,
    pub mouse_caption: &'static str,
    pub mouse_label: &'static str,
    pub tracking_caption: &'static str,
    pub waiting_caption: &'static str,
    pub gesture_none: &'static str,
    pub gesture_fist: &'static str,
    pub gesture_open: &'static str,
    pub gesture_pinch: &'static str,
    pub gesture_pointing: &'static str,
}

impl Labels {
    /// Label for a recognized gesture.
    pub fn gesture(&self, gesture: GestureKind) -> &'static str {
        match gesture {
            GestureKind::None => self.gesture_none,
            GestureKind::Fist => self.gesture_fist,
            GestureKind::Open => self.gesture_open,
            GestureKind::Pinch => self.gesture_pinch,
            GestureKind::Pointing => self.gesture_pointing,
        }
    }
}

pub static LABELS_ZH_CN: Labels = Labels {
    request_title: "启用手势控制",
    requesting_title: "正在请求权限...",
    request_hint: "点击授权摄像头",
    denied_title: "摄像头权限被拒绝",
    denied_hint: "使用鼠标双击切换模式",
    mouse_caption: "鼠标控制",
    mouse_label: "双击切换模式",
    tracking_caption: "手势已识别",
    waiting_caption: "等待手势",
    gesture_none: "检测中...",
    gesture_fist: "握拳 - 圣诞树",
    gesture_open: "张开手掌 - 银河",
    gesture_pinch: "捏合 - 选择",
    gesture_pointing: "指向",
};

pub static LABELS_EN: Labels = Labels {
    request_title: "Enable gesture control",
    requesting_title: "Requesting permission...",
    request_hint: "Click to allow camera",
    denied_title: "Camera permission denied",
    denied_hint: "Double-click with the mouse to switch modes",
    mouse_caption: "Mouse control",
    mouse_label: "Double-click to switch modes",
    tracking_caption: "Gesture recognized",
    waiting_caption: "Waiting for gesture",
    gesture_none: "Detecting...",
    gesture_fist: "Fist - tree",
    gesture_open: "Open hand - galaxy",
    gesture_pinch: "Pinch - select",
    gesture_pointing: "Pointing",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn all_fields(labels: &Labels) -> [&'static str; 9] {
        [
            labels.request_title,
            labels.requesting_title,
            labels.request_hint,
            labels.denied_title,
            labels.denied_hint,
            labels.mouse_caption,
            labels.mouse_label,
            labels.tracking_caption,
            labels.waiting_caption,
        ]
    }

    #[test]
    fn gesture_labels_are_total_and_non_empty() {
        for locale in [Locale::ZhCn, Locale::En] {
            for gesture in GestureKind::ALL {
                assert!(!locale.labels().gesture(gesture).is_empty());
            }
        }
    }

    #[test]
    fn catalog_fields_are_non_empty() {
        for locale in [Locale::ZhCn, Locale::En] {
            assert!(all_fields(locale.labels()).iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn gesture_labels_are_distinct_per_locale() {
        let labels = Locale::En.labels();
        let mut seen: Vec<_> = GestureKind::ALL
            .iter()
            .map(|g| labels.gesture(*g))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), GestureKind::ALL.len());
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("zh".parse::<Locale>(), Ok(Locale::ZhCn));
        assert_eq!("zh_CN".parse::<Locale>(), Ok(Locale::ZhCn));
        assert_eq!("EN-us".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::ZhCn);
    }
}
