use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div>
            <h1 class="text-4xl">"Mina Documentation"</h1>
        </div>
    }
}
