use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonColor {
    #[default]
    Orange,
    Dark,
    Light,
}

impl ButtonColor {
    fn class(self) -> &'static str {
        match self {
            ButtonColor::Orange => "button button--orange",
            ButtonColor::Dark => "button button--dark",
            ButtonColor::Light => "button button--light",
        }
    }
}

/// 通用按钮，默认作为表单提交按钮使用
#[component]
pub fn Button(
    #[prop(optional)] color: ButtonColor,
    #[prop(default = "submit")] button_type: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button type=button_type class=color.class()>
            {children()}
        </button>
    }
}
