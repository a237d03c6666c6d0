/// 社交平台，与共享常量表 `SocialLinks` 的键一一对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Discord,
    Twitter,
    Facebook,
    Telegram,
    WeChat,
    Youtube,
    Github,
    Support,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 8] = [
        SocialPlatform::Discord,
        SocialPlatform::Twitter,
        SocialPlatform::Facebook,
        SocialPlatform::Telegram,
        SocialPlatform::WeChat,
        SocialPlatform::Youtube,
        SocialPlatform::Github,
        SocialPlatform::Support,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::Discord => "Discord",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Telegram => "Telegram",
            SocialPlatform::WeChat => "WeChat",
            SocialPlatform::Youtube => "Youtube",
            SocialPlatform::Github => "Github",
            SocialPlatform::Support => "Support",
        }
    }

    /// 页脚图标路径；Github 与 Support 只出现在站点地图中，没有图标
    pub fn icon_src(self) -> Option<&'static str> {
        match self {
            SocialPlatform::Discord => Some("/svg/socials/discord_24x24.svg"),
            SocialPlatform::Twitter => Some("/svg/socials/twitter_24x24.svg"),
            SocialPlatform::Facebook => Some("/svg/socials/facebook_24x24.svg"),
            SocialPlatform::Telegram => Some("/svg/socials/telegram_24x24.svg"),
            SocialPlatform::WeChat => Some("/svg/socials/wechat_24x24.svg"),
            SocialPlatform::Youtube => Some("/svg/socials/youtube_24x24.svg"),
            SocialPlatform::Github | SocialPlatform::Support => None,
        }
    }
}

/// 链接目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// 站内路径，由宿主站点路由
    Internal(String),
    /// 外部站点，新标签页打开
    External(String),
    /// 静态资源（白皮书 PDF 等），新标签页打开
    Asset(String),
}

impl LinkTarget {
    pub fn internal(path: impl Into<String>) -> Self {
        LinkTarget::Internal(path.into())
    }

    pub fn external(url: impl Into<String>) -> Self {
        LinkTarget::External(url.into())
    }

    pub fn asset(path: impl Into<String>) -> Self {
        LinkTarget::Asset(path.into())
    }

    pub fn href(&self) -> &str {
        match self {
            LinkTarget::Internal(href) | LinkTarget::External(href) | LinkTarget::Asset(href) => {
                href
            }
        }
    }

    pub fn opens_new_tab(&self) -> bool {
        !matches!(self, LinkTarget::Internal(_))
    }
}

/// 订阅区域的两种状态，Submitted 为终态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupState {
    #[default]
    Collecting,
    Submitted,
}

/// 订阅表单的本地状态：输入中的邮箱与是否已提交
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    email: String,
    state: SignupState,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> SignupState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SignupState::Submitted
    }

    /// 每次按键整体替换，不做校验也不去空白
    pub fn set_email(&mut self, text: impl Into<String>) {
        self.email = text.into();
    }

    /// 空邮箱或已提交时不做任何事；否则进入 Submitted 并返回被接受的邮箱
    pub fn submit(&mut self) -> Option<String> {
        if self.email.is_empty() || self.is_submitted() {
            return None;
        }
        self.state = SignupState::Submitted;
        Some(self.email.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_collecting_with_empty_email() {
        let form = SignupForm::new();
        assert_eq!(form.state(), SignupState::Collecting);
        assert_eq!(form.email(), "");
    }

    #[test]
    fn typing_echoes_exact_text() {
        let mut form = SignupForm::new();
        form.set_email("  someone@example.com ");
        assert_eq!(form.email(), "  someone@example.com ");
        form.set_email("x");
        assert_eq!(form.email(), "x");
    }

    #[test]
    fn empty_submit_is_ignored() {
        let mut form = SignupForm::new();
        assert_eq!(form.submit(), None);
        assert_eq!(form, SignupForm::new());
    }

    #[test]
    fn non_empty_submit_moves_to_submitted() {
        let mut form = SignupForm::new();
        form.set_email("a@b.com");
        assert_eq!(form.submit().as_deref(), Some("a@b.com"));
        assert!(form.is_submitted());
    }

    #[test]
    fn no_format_validation_on_submit() {
        for text in ["not-an-email", " ", "@"] {
            let mut form = SignupForm::new();
            form.set_email(text);
            assert_eq!(form.submit().as_deref(), Some(text));
            assert_eq!(form.state(), SignupState::Submitted);
        }
    }

    #[test]
    fn submitted_is_terminal() {
        let mut form = SignupForm::new();
        form.set_email("a@b.com");
        form.submit();
        form.set_email("");
        assert_eq!(form.submit(), None);
        form.set_email("c@d.com");
        assert_eq!(form.submit(), None);
        assert!(form.is_submitted());
    }

    #[test]
    fn only_internal_links_stay_in_tab() {
        assert!(!LinkTarget::internal("/").opens_new_tab());
        assert!(LinkTarget::external("https://minaprotocol.com").opens_new_tab());
        assert!(LinkTarget::asset("/assets/technicalWhitepaper.pdf").opens_new_tab());
        assert_eq!(LinkTarget::asset("/a.pdf").href(), "/a.pdf");
    }

    #[test]
    fn only_github_and_support_lack_icons() {
        let without_icon: Vec<_> = SocialPlatform::ALL
            .into_iter()
            .filter(|p| p.icon_src().is_none())
            .collect();
        assert_eq!(without_icon, vec![SocialPlatform::Github, SocialPlatform::Support]);
    }
}
