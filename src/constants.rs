use crate::types::{LinkTarget, SocialPlatform};

pub const MINA_HOME_URL: &str = "https://minaprotocol.com";
pub const MINA_LOGO_SRC: &str = "/svg/common/mina_logo.svg";
pub const ARROW_RIGHT_SMALL_SRC: &str = "/svg/common/arrow_right_small.svg";
pub const COPYRIGHT: &str = "©2022 Mina. Started by O(1) Labs.";

/// 页脚图标栏展示的平台，按顺序渲染
pub const FOOTER_SOCIAL_ICONS: [SocialPlatform; 6] = [
    SocialPlatform::Discord,
    SocialPlatform::Twitter,
    SocialPlatform::Facebook,
    SocialPlatform::Telegram,
    SocialPlatform::WeChat,
    SocialPlatform::Youtube,
];

/// 共享的社交链接表
///
/// 默认值为 Mina 的官方地址；宿主站点可以在挂载页脚之前
/// 通过 `provide_context(SocialLinks { .. })` 覆盖。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinks {
    pub discord: String,
    pub twitter: String,
    pub facebook: String,
    pub telegram: String,
    pub wechat: String,
    pub youtube: String,
    pub github: String,
    pub support: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            discord: "https://discord.com/invite/minaprotocol".into(),
            twitter: "https://twitter.com/minaprotocol".into(),
            facebook: "https://www.facebook.com/MinaProtocol".into(),
            telegram: "https://t.me/minaprotocol".into(),
            wechat: "https://minaprotocol.com/wechat".into(),
            youtube: "https://www.youtube.com/c/MinaProtocol".into(),
            github: "https://github.com/MinaProtocol/mina".into(),
            support: "https://minaprotocol.com/contact".into(),
        }
    }
}

impl SocialLinks {
    pub fn url(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Discord => &self.discord,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Telegram => &self.telegram,
            SocialPlatform::WeChat => &self.wechat,
            SocialPlatform::Youtube => &self.youtube,
            SocialPlatform::Github => &self.github,
            SocialPlatform::Support => &self.support,
        }
    }

    pub fn target(&self, platform: SocialPlatform) -> LinkTarget {
        LinkTarget::external(self.url(platform))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: LinkTarget,
    pub rel: Option<&'static str>,
}

impl FooterLink {
    fn new(label: &'static str, target: LinkTarget) -> Self {
        Self {
            label,
            target,
            rel: None,
        }
    }

    fn with_rel(mut self, rel: &'static str) -> Self {
        self.rel = Some(rel);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapColumn {
    pub heading: &'static str,
    pub links: Vec<FooterLink>,
}

/// 站点地图四列；Help and Support 一列取自社交链接表
pub fn sitemap_columns(social: &SocialLinks) -> Vec<SitemapColumn> {
    vec![
        SitemapColumn {
            heading: "Getting Started",
            links: vec![
                FooterLink::new("Documentation", LinkTarget::internal("/")),
                FooterLink::new("Write a zkApp", LinkTarget::internal("/zkapps/overview")),
                FooterLink::new(
                    "Run a Node",
                    LinkTarget::external("https://minaprotocol.com/node-operators"),
                ),
                FooterLink::new(
                    "Join Genesis",
                    LinkTarget::external("https://minaprotocol.com/genesis"),
                ),
            ],
        },
        SitemapColumn {
            heading: "Resources",
            links: vec![
                FooterLink::new(
                    "About the Tech",
                    LinkTarget::external("https://minaprotocol.com/lightweight-blockchain"),
                ),
                FooterLink::new(
                    "Get Started",
                    LinkTarget::external("https://minaprotocol.com/get-started"),
                )
                .with_rel("knowledge-base"),
                FooterLink::new(
                    "Technical Whitepaper",
                    LinkTarget::asset("/assets/technicalWhitepaper.pdf"),
                ),
                FooterLink::new(
                    "Economics Whitepaper",
                    LinkTarget::asset("/assets/economicsWhitepaper.pdf"),
                ),
                FooterLink::new("Media", LinkTarget::external("https://minaprotocol.com/media")),
            ],
        },
        SitemapColumn {
            heading: "Community",
            links: vec![
                FooterLink::new(
                    "Welcome",
                    LinkTarget::external("https://minaprotocol.com/community"),
                ),
                FooterLink::new(
                    "Genesis Program",
                    LinkTarget::external("https://minaprotocol.com/genesis"),
                ),
                FooterLink::new(
                    "Testnet Leaderboard",
                    LinkTarget::external("https://minaprotocol.com/leaderboard"),
                ),
                FooterLink::new(
                    "Careers",
                    LinkTarget::external("https://minaprotocol.com/work-with-mina"),
                ),
            ],
        },
        SitemapColumn {
            heading: "Help and Support",
            links: vec![
                FooterLink::new("Discord", social.target(SocialPlatform::Discord)),
                FooterLink::new("Forums", social.target(SocialPlatform::Telegram)),
                FooterLink::new("Github", social.target(SocialPlatform::Github)),
                FooterLink::new("Contact Us", social.target(SocialPlatform::Support)),
            ],
        },
    ]
}

pub fn legal_links() -> Vec<FooterLink> {
    vec![
        FooterLink::new("O(1) Labs", LinkTarget::external("https://o1labs.org")),
        FooterLink::new(
            "Code of Conduct",
            LinkTarget::external(
                "https://github.com/MinaProtocol/mina/blob/develop/CODE_OF_CONDUCT.md",
            ),
        ),
        FooterLink::new("Privacy", LinkTarget::external("https://minaprotocol.com/privacy")),
        FooterLink::new(
            "Terms of Service",
            LinkTarget::external("https://minaprotocol.com/tos"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_platform_has_a_url() {
        let links = SocialLinks::default();
        for platform in SocialPlatform::ALL {
            assert!(links.url(platform).starts_with("https://"), "{platform:?}");
        }
    }

    #[test]
    fn footer_icons_are_the_six_with_icons() {
        assert_eq!(FOOTER_SOCIAL_ICONS.len(), 6);
        assert!(FOOTER_SOCIAL_ICONS.iter().all(|p| p.icon_src().is_some()));
    }

    #[test]
    fn help_column_follows_social_table() {
        let social = SocialLinks {
            discord: "https://d.example".into(),
            telegram: "https://t.example".into(),
            github: "https://g.example".into(),
            support: "https://s.example".into(),
            ..SocialLinks::default()
        };
        let columns = sitemap_columns(&social);
        let help = columns
            .iter()
            .find(|c| c.heading == "Help and Support")
            .map(|c| c.links.iter().map(|l| l.target.href()).collect::<Vec<_>>());
        assert_eq!(
            help,
            Some(vec![
                "https://d.example",
                "https://t.example",
                "https://g.example",
                "https://s.example",
            ])
        );
    }

    #[test]
    fn sitemap_layout() {
        let columns = sitemap_columns(&SocialLinks::default());
        let headings: Vec<_> = columns.iter().map(|c| c.heading).collect();
        assert_eq!(
            headings,
            ["Getting Started", "Resources", "Community", "Help and Support"]
        );
        let sizes: Vec<_> = columns.iter().map(|c| c.links.len()).collect();
        assert_eq!(sizes, [4, 5, 4, 4]);

        let internal: Vec<_> = columns
            .iter()
            .flat_map(|c| c.links.iter())
            .filter(|l| !l.target.opens_new_tab())
            .map(|l| l.target.href())
            .collect();
        assert_eq!(internal, ["/", "/zkapps/overview"]);
    }

    #[test]
    fn whitepapers_are_assets() {
        let columns = sitemap_columns(&SocialLinks::default());
        let assets: Vec<_> = columns
            .iter()
            .flat_map(|c| c.links.iter())
            .filter(|l| matches!(l.target, LinkTarget::Asset(_)))
            .map(|l| l.label)
            .collect();
        assert_eq!(assets, ["Technical Whitepaper", "Economics Whitepaper"]);
    }

    #[test]
    fn only_get_started_overrides_rel() {
        let with_rel: Vec<_> = sitemap_columns(&SocialLinks::default())
            .into_iter()
            .flat_map(|c| c.links)
            .chain(legal_links())
            .filter_map(|l| l.rel.map(|rel| (l.label, rel)))
            .collect();
        assert_eq!(with_rel, [("Get Started", "knowledge-base")]);
    }

    #[test]
    fn legal_menu_order() {
        let labels: Vec<_> = legal_links().into_iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            ["O(1) Labs", "Code of Conduct", "Privacy", "Terms of Service"]
        );
    }
}
