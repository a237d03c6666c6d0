use leptos::prelude::*;

use crate::types::LinkTarget;

/// 通用超链接：站内路径原样输出，外部地址与静态资源在新标签页打开
///
/// 传入 `rel` 时覆盖默认的 rel 值
#[component]
pub fn Link(
    to: LinkTarget,
    #[prop(default = None)] rel: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    match to {
        LinkTarget::Internal(path) => view! { <a href=path rel=rel>{children()}</a> }.into_any(),
        LinkTarget::External(url) => view! {
            <a href=url target="_blank" rel=rel.unwrap_or("noopener noreferrer")>
                {children()}
            </a>
        }
        .into_any(),
        LinkTarget::Asset(path) => view! {
            <a href=path target="_blank" rel=rel.unwrap_or("noopener")>
                {children()}
            </a>
        }
        .into_any(),
    }
}
