//! 展示层：按钮组件与样式表

pub mod button;
pub mod style;

pub use button::{button_styles, Button, ButtonStyles, ColorScheme, RenderedButton};
pub use style::{profile_styles, Style, StyleRegistry};
