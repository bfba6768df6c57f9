//! 按钮组件
//!
//! 无状态：每次渲染都根据当前明暗模式重新计算样式。

use std::fmt;

use serde::Serialize;

use super::style::Style;

/// 系统明暗模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// 只有 `"dark"` 视为暗色，其余一律为亮色
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonStyles {
    pub container: Style,
    pub text: Style,
}

/// 按明暗模式计算默认样式
pub fn button_styles(scheme: ColorScheme) -> ButtonStyles {
    let dark = scheme == ColorScheme::Dark;
    let pick = |dark_value: &str, light_value: &str| {
        let value = if dark { dark_value } else { light_value };
        Some(value.to_string())
    };

    ButtonStyles {
        container: Style {
            background_color: pick("#333333", "#FFFFFF"),
            border_width: Some(1.0),
            border_color: pick("#444444", "#DDDDDD"),
            border_radius: Some(12.0),
            padding: Some(15.0),
            align_items: Some("center"),
            justify_content: Some("center"),
            flex_direction: Some("row"),
            ..Style::default()
        },
        text: Style {
            font_size: Some(16.0),
            color: pick("#FFFFFF", "#333333"),
            ..Style::default()
        },
    }
}

type PressHandler = Box<dyn Fn() + Send + Sync>;

/// 带文字标签的按钮
#[derive(Default)]
pub struct Button {
    pub label: String,
    on_press: Option<PressHandler>,
    pub style: Option<Style>,
    pub text_style: Option<Style>,
}

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedButton {
    pub label: String,
    pub container: Style,
    pub text: Style,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn on_press(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_text_style(mut self, text_style: Style) -> Self {
        self.text_style = Some(text_style);
        self
    }

    /// 覆盖样式叠加在默认样式之上
    pub fn render(&self, scheme: ColorScheme) -> RenderedButton {
        let defaults = button_styles(scheme);
        let container = match &self.style {
            Some(style) => defaults.container.merge(style),
            None => defaults.container,
        };
        let text = match &self.text_style {
            Some(style) => defaults.text.merge(style),
            None => defaults.text,
        };

        RenderedButton {
            label: self.label.clone(),
            container,
            text,
        }
    }

    /// 每次点击调用一次回调，没有回调时什么也不做
    pub fn press(&self) {
        if let Some(handler) = &self.on_press {
            handler();
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("on_press", &self.on_press.is_some())
            .field("style", &self.style)
            .field("text_style", &self.text_style)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_colors_follow_scheme() {
        let light = button_styles(ColorScheme::Light);
        assert_eq!(light.container.background_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(light.container.border_color.as_deref(), Some("#DDDDDD"));
        assert_eq!(light.text.color.as_deref(), Some("#333333"));

        let dark = button_styles(ColorScheme::Dark);
        assert_eq!(dark.container.background_color.as_deref(), Some("#333333"));
        assert_eq!(dark.container.border_color.as_deref(), Some("#444444"));
        assert_eq!(dark.text.color.as_deref(), Some("#FFFFFF"));
        assert_eq!(dark.container.border_radius, light.container.border_radius);
    }

    #[test]
    fn test_scheme_parse() {
        assert_eq!(ColorScheme::parse(Some("dark")), ColorScheme::Dark);
        assert_eq!(ColorScheme::parse(Some("light")), ColorScheme::Light);
        assert_eq!(ColorScheme::parse(None), ColorScheme::Light);
    }

    #[test]
    fn test_render_recomputes_for_each_scheme() {
        let button = Button::new("카카오로 시작하기");
        let light = button.render(ColorScheme::Light);
        let dark = button.render(ColorScheme::Dark);
        assert_eq!(light.label, "카카오로 시작하기");
        assert_ne!(light.container, dark.container);
    }

    #[test]
    fn test_overrides_merge_on_top_of_defaults() {
        let button = Button::new("Google")
            .with_style(Style {
                background_color: Some("#FEE500".to_string()),
                ..Style::default()
            })
            .with_text_style(Style {
                font_weight: Some("bold"),
                ..Style::default()
            });

        let rendered = button.render(ColorScheme::Dark);
        assert_eq!(rendered.container.background_color.as_deref(), Some("#FEE500"));
        assert_eq!(rendered.container.border_color.as_deref(), Some("#444444"));
        assert_eq!(rendered.text.font_weight, Some("bold"));
        assert_eq!(rendered.text.color.as_deref(), Some("#FFFFFF"));
    }

    #[test]
    fn test_press_invokes_callback_once_per_tap() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let button = Button::new("Tap").on_press(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        button.press();
        button.press();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_press_without_callback_is_noop() {
        Button::new("Nothing").press();
    }
}
