use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::footer::Footer;
use crate::pages::home::Home;

/// 演示宿主页面：路由内容在上，页脚固定在下方
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main>
            <Routes fallback=|| "Page not found.">
                <Route path=path!("/") view=Home/>
            </Routes>
        </main>
        <Footer/>
    }
}
