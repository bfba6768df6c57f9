//! 样式定义与样式表

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Serialize;

/// 一组可选的视觉属性，未设置的属性不参与序列化
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: String,
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub radius: f32,
}

macro_rules! merge_fields {
    ($base:expr, $overrides:expr, $($field:ident),+ $(,)?) => {
        Style {
            $($field: $overrides.$field.clone().or_else(|| $base.$field.clone()),)+
        }
    };
}

impl Style {
    /// 逐属性覆盖：`overrides` 中设置的属性替换原值
    pub fn merge(&self, overrides: &Style) -> Style {
        merge_fields!(
            self,
            overrides,
            flex,
            flex_direction,
            justify_content,
            align_items,
            position,
            top,
            right,
            bottom,
            left,
            width,
            height,
            padding,
            padding_horizontal,
            padding_vertical,
            margin_bottom,
            background_color,
            border_width,
            border_bottom_width,
            border_color,
            border_bottom_color,
            border_radius,
            overflow,
            color,
            font_size,
            font_weight,
            shadow,
            elevation,
        )
    }
}

/// 不可变的样式表，按名称查找
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    entries: BTreeMap<&'static str, Style>,
}

impl StyleRegistry {
    pub fn new(entries: impl IntoIterator<Item = (&'static str, Style)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static PROFILE_STYLES: OnceLock<StyleRegistry> = OnceLock::new();

const WHITE: &str = "#FFFFFF";
const TEXT_DARK: &str = "#212529";
const TEXT_MUTED: &str = "#6C757D";
const DIVIDER: &str = "#F1F3F5";
const ACCENT: &str = "#FF9A9E";

fn color(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn card_shadow() -> Option<Shadow> {
    Some(Shadow {
        color: "#000".to_string(),
        offset_x: 0.0,
        offset_y: 2.0,
        opacity: 0.05,
        radius: 4.0,
    })
}

fn text(size: f32, value: &str) -> Style {
    Style {
        font_size: Some(size),
        color: color(value),
        ..Style::default()
    }
}

/// 个人资料页样式表
pub fn profile_styles() -> &'static StyleRegistry {
    PROFILE_STYLES.get_or_init(|| {
        StyleRegistry::new([
            (
                "safeArea",
                Style {
                    flex: Some(1.0),
                    background_color: color(WHITE),
                    ..Style::default()
                },
            ),
            (
                "header",
                Style {
                    flex_direction: Some("row"),
                    justify_content: Some("space-between"),
                    align_items: Some("center"),
                    padding_horizontal: Some(20.0),
                    padding_vertical: Some(15.0),
                    background_color: color(WHITE),
                    border_bottom_width: Some(1.0),
                    border_bottom_color: color(DIVIDER),
                    ..Style::default()
                },
            ),
            (
                "backButton",
                Style {
                    width: Some(40.0),
                    height: Some(40.0),
                    border_radius: Some(20.0),
                    background_color: color("white"),
                    justify_content: Some("center"),
                    align_items: Some("center"),
                    ..Style::default()
                },
            ),
            (
                "headerTitle",
                Style {
                    font_size: Some(18.0),
                    font_weight: Some("bold"),
                    color: color(TEXT_DARK),
                    ..Style::default()
                },
            ),
            (
                "profileHeader",
                Style {
                    align_items: Some("center"),
                    padding_vertical: Some(20.0),
                    background_color: color(WHITE),
                    ..Style::default()
                },
            ),
            (
                "profileImage",
                Style {
                    width: Some(100.0),
                    height: Some(100.0),
                    border_radius: Some(50.0),
                    ..Style::default()
                },
            ),
            (
                "editIconContainer",
                Style {
                    position: Some("absolute"),
                    bottom: Some(0.0),
                    right: Some(0.0),
                    background_color: color(ACCENT),
                    width: Some(30.0),
                    height: Some(30.0),
                    border_radius: Some(15.0),
                    justify_content: Some("center"),
                    align_items: Some("center"),
                    border_width: Some(2.0),
                    border_color: color(WHITE),
                    ..Style::default()
                },
            ),
            (
                "profileName",
                Style {
                    font_size: Some(20.0),
                    font_weight: Some("bold"),
                    color: color(TEXT_DARK),
                    margin_bottom: Some(5.0),
                    ..Style::default()
                },
            ),
            (
                "profileEmail",
                Style {
                    font_size: Some(14.0),
                    color: color(TEXT_MUTED),
                    ..Style::default()
                },
            ),
            (
                "tabContainer",
                Style {
                    flex_direction: Some("row"),
                    background_color: color(WHITE),
                    border_bottom_width: Some(1.0),
                    border_bottom_color: color(DIVIDER),
                    ..Style::default()
                },
            ),
            (
                "tabButton",
                Style {
                    flex: Some(1.0),
                    padding_vertical: Some(15.0),
                    align_items: Some("center"),
                    ..Style::default()
                },
            ),
            (
                "activeTabButton",
                Style {
                    border_bottom_width: Some(2.0),
                    border_bottom_color: color(ACCENT),
                    ..Style::default()
                },
            ),
            (
                "tabButtonText",
                Style {
                    font_size: Some(14.0),
                    color: color(TEXT_MUTED),
                    ..Style::default()
                },
            ),
            (
                "activeTabButtonText",
                Style {
                    color: color(ACCENT),
                    font_weight: Some("bold"),
                    ..Style::default()
                },
            ),
            (
                "infoCard",
                Style {
                    background_color: color(WHITE),
                    border_radius: Some(16.0),
                    padding: Some(20.0),
                    margin_bottom: Some(20.0),
                    shadow: card_shadow(),
                    elevation: Some(2.0),
                    ..Style::default()
                },
            ),
            (
                "infoLabel",
                Style {
                    width: Some(80.0),
                    font_size: Some(14.0),
                    color: color(TEXT_MUTED),
                    ..Style::default()
                },
            ),
            (
                "infoValue",
                Style {
                    flex: Some(1.0),
                    font_size: Some(14.0),
                    font_weight: Some("500"),
                    color: color(TEXT_MUTED),
                    ..Style::default()
                },
            ),
            (
                "editButton",
                Style {
                    border_radius: Some(12.0),
                    overflow: Some("hidden"),
                    ..Style::default()
                },
            ),
            (
                "editButtonText",
                Style {
                    color: color(WHITE),
                    font_size: Some(16.0),
                    font_weight: Some("bold"),
                    ..Style::default()
                },
            ),
            (
                "settingsContainer",
                Style {
                    padding: Some(20.0),
                    ..Style::default()
                },
            ),
            (
                "settingsSection",
                Style {
                    background_color: color(WHITE),
                    border_radius: Some(16.0),
                    padding: Some(15.0),
                    margin_bottom: Some(20.0),
                    shadow: card_shadow(),
                    elevation: Some(2.0),
                    ..Style::default()
                },
            ),
            (
                "settingsSectionTitle",
                Style {
                    font_weight: Some("bold"),
                    margin_bottom: Some(15.0),
                    ..text(16.0, TEXT_DARK)
                },
            ),
            (
                "settingRow",
                Style {
                    flex_direction: Some("row"),
                    justify_content: Some("space-between"),
                    align_items: Some("center"),
                    padding_vertical: Some(10.0),
                    border_bottom_width: Some(1.0),
                    border_bottom_color: color(DIVIDER),
                    ..Style::default()
                },
            ),
            ("settingLabel", text(14.0, TEXT_DARK)),
            ("settingValue", text(14.0, TEXT_MUTED)),
            (
                "settingButton",
                Style {
                    padding_vertical: Some(12.0),
                    border_bottom_width: Some(1.0),
                    border_bottom_color: color(DIVIDER),
                    ..Style::default()
                },
            ),
            ("settingButtonText", text(14.0, TEXT_DARK)),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_only_set_attributes() {
        let base = Style {
            font_size: Some(16.0),
            color: Some("#333333".to_string()),
            ..Style::default()
        };
        let overrides = Style {
            color: Some("#FF0000".to_string()),
            font_weight: Some("bold"),
            ..Style::default()
        };

        let merged = base.merge(&overrides);
        assert_eq!(merged.font_size, Some(16.0));
        assert_eq!(merged.color.as_deref(), Some("#FF0000"));
        assert_eq!(merged.font_weight, Some("bold"));
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let base = profile_styles().get("header").unwrap();
        assert_eq!(&base.merge(&Style::default()), base);
    }

    #[test]
    fn test_profile_registry_lookup() {
        let styles = profile_styles();
        assert!(!styles.is_empty());
        assert_eq!(styles.get("profileName").unwrap().font_size, Some(20.0));
        assert!(styles.get("missing").is_none());
        assert!(styles.names().any(|n| n == "activeTabButtonText"));
    }

    #[test]
    fn test_settings_rows_are_registered() {
        let styles = profile_styles();
        let row = styles.get("settingRow").unwrap();
        assert_eq!(row.flex_direction, Some("row"));
        assert_eq!(row.justify_content, Some("space-between"));
        assert_eq!(row.padding_vertical, Some(10.0));
        assert_eq!(row.border_bottom_color.as_deref(), Some(DIVIDER));

        for name in [
            "settingsContainer",
            "settingsSection",
            "settingsSectionTitle",
            "settingLabel",
            "settingValue",
            "settingButton",
            "settingButtonText",
        ] {
            assert!(styles.get(name).is_some(), "missing {}", name);
        }
        assert_eq!(styles.get("settingValue").unwrap().color.as_deref(), Some(TEXT_MUTED));
    }

    #[test]
    fn test_edit_icon_is_pinned_to_corner() {
        let icon = profile_styles().get("editIconContainer").unwrap();
        assert_eq!(icon.position, Some("absolute"));
        assert_eq!(icon.bottom, Some(0.0));
        assert_eq!(icon.right, Some(0.0));
        assert_eq!(icon.top, None);

        let moved = icon.merge(&Style {
            top: Some(4.0),
            ..Style::default()
        });
        assert_eq!(moved.top, Some(4.0));
        assert_eq!(moved.bottom, Some(0.0));
    }

    #[test]
    fn test_style_serializes_only_set_attributes() {
        let json = serde_json::to_value(profile_styles().get("editButton").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "borderRadius": 12.0, "overflow": "hidden" }));
    }
}
