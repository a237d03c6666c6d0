use leptos::ev::SubmitEvent;
use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::components::button::{Button, ButtonColor};
use crate::components::link::Link;
use crate::constants::{
    legal_links, sitemap_columns, SocialLinks, ARROW_RIGHT_SMALL_SRC, COPYRIGHT,
    FOOTER_SOCIAL_ICONS, MINA_HOME_URL, MINA_LOGO_SRC,
};
use crate::types::{SignupForm, SignupState};

/// 文档站页脚：品牌与订阅、社交图标、站点地图、法律信息栏
///
/// `on_subscribe` 接收被接受的邮箱，由宿主站点接入真正的订阅服务；
/// 未提供时只记录日志。社交链接表优先读取上下文中的 `SocialLinks`。
#[component]
pub fn Footer(#[prop(optional)] on_subscribe: Option<Callback<String>>) -> impl IntoView {
    let social = use_context::<SocialLinks>().unwrap_or_default();
    let form = RwSignal::new(SignupForm::new());

    view! {
        <footer class="mina-footer">
            <div class="mina-footer__container">
                <div class="mina-footer__col1">
                    <a href=MINA_HOME_URL>
                        <img src=MINA_LOGO_SRC alt="Mina"/>
                    </a>
                    <div class="mina-footer__form">
                        <h4>"GET UPDATES"</h4>
                        <p>"Mina is growing fast! Subscribe to stay updated"</p>
                        <SignupArea form=form on_subscribe=on_subscribe/>
                    </div>
                    <div class="mina-footer__social">
                        <h4>"CONNECT"</h4>
                        <p>"Join the conversation."</p>
                    </div>
                    <SocialIcons links=social.clone()/>
                </div>
                <Sitemap links=social/>
            </div>
            <hr/>
            <LegalBar/>
        </footer>
    }
}

/// 订阅区域：Collecting 显示输入框，Submitted 显示感谢语
#[component]
pub fn SignupArea(
    form: RwSignal<SignupForm>,
    on_subscribe: Option<Callback<String>>,
) -> impl IntoView {
    // 只在状态切换时重新渲染，按键不会重建输入框
    let state = Memo::new(move |_| form.with(SignupForm::state));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        accept_submission(form, on_subscribe);
    };

    move || match state.get() {
        SignupState::Submitted => view! {
            <div class="mina-footer__thanks">"Thanks for subscribing!"</div>
        }
        .into_any(),
        SignupState::Collecting => view! {
            <form on:submit=handle_submit class="mina-footer__form-submit">
                <input
                    type="email"
                    name="email"
                    id="email"
                    placeholder="Enter Email"
                    class="mina-footer__form-input"
                    prop:value=move || form.with(|f| f.email().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.update(|f| f.set_email(text));
                    }
                />
                <Button color=ButtonColor::Orange>
                    <span>"Submit"</span>
                    <img src=ARROW_RIGHT_SMALL_SRC alt=""/>
                </Button>
            </form>
        }
        .into_any(),
    }
}

/// 处理一次表单提交：空邮箱或已提交时不做任何事，
/// 否则切换到 Submitted 并把邮箱交给 `on_subscribe`
pub fn accept_submission(
    form: RwSignal<SignupForm>,
    on_subscribe: Option<Callback<String>>,
) -> Option<String> {
    let email = form.try_update(SignupForm::submit).flatten()?;
    match on_subscribe {
        Some(callback) => {
            log!("[newsletter] 提交订阅");
            callback.run(email.clone());
        }
        None => warn!("[newsletter] 未接入订阅服务，忽略提交"),
    }
    Some(email)
}

#[component]
pub fn SocialIcons(links: SocialLinks) -> impl IntoView {
    let icons = FOOTER_SOCIAL_ICONS
        .into_iter()
        .filter_map(|platform| {
            let src = platform.icon_src()?;
            Some(view! {
                <Link to=links.target(platform)>
                    <img class="mina-footer__social-icon" src=src alt=platform.label()/>
                </Link>
            })
        })
        .collect_view();

    view! { <div class="mina-footer__social-links">{icons}</div> }
}

#[component]
fn Sitemap(links: SocialLinks) -> impl IntoView {
    let columns = sitemap_columns(&links)
        .into_iter()
        .map(|column| {
            let items = column
                .links
                .into_iter()
                .map(|link| view! { <li><Link to=link.target rel=link.rel>{link.label}</Link></li> })
                .collect_view();
            view! {
                <li>
                    <span>{column.heading}</span>
                    <ul>{items}</ul>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="mina-footer__col2">
            <ul>{columns}</ul>
        </div>
    }
}

#[component]
fn LegalBar() -> impl IntoView {
    let menu = legal_links()
        .into_iter()
        .map(|link| view! { <li><Link to=link.target rel=link.rel>{link.label}</Link></li> })
        .collect_view();

    view! {
        <div class="mina-footer__legals">
            <div class="mina-footer__legals-menu">
                <ul>{menu}</ul>
            </div>
            <div class="mina-footer__legals-info">{COPYRIGHT}</div>
        </div>
    }
}
