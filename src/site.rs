//! Landing page content.
//!
//! Every page variant is the same markup fed with a different [`SiteContent`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub brand: String,
    pub nav: Vec<NavItem>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub services: Vec<Card>,
    pub portfolio: Vec<Card>,
    pub team: Vec<TeamMember>,
    pub footer: String,
}

fn nav(href: &str, label: &str) -> NavItem {
    NavItem {
        href: href.to_owned(),
        label: label.to_owned(),
    }
}

fn card(title: impl Into<String>, description: impl Into<String>) -> Card {
    Card {
        title: title.into(),
        description: description.into(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "SPM".to_owned(),
            nav: vec![
                nav("#home", "Home"),
                nav("#services", "Services"),
                nav("#portfolio", "Portfolio"),
                nav("#contact", "Contact"),
                nav("#quemsomos", "Quem Somos?"),
            ],
            hero_title: "Institutional Website Developer".to_owned(),
            hero_subtitle: "Creating powerful online presences for institutions".to_owned(),
            services: vec![
                card(
                    "Custom Web Development",
                    "Tailored websites built from the ground up to meet your institution's unique needs.",
                ),
                card(
                    "Content Management Systems",
                    "Easy-to-use CMS solutions for effortless content updates and management.",
                ),
                card(
                    "Responsive Design",
                    "Mobile-friendly websites that look great on all devices and screen sizes.",
                ),
            ],
            portfolio: (1..=6)
                .map(|n| {
                    card(
                        format!("Project {n}"),
                        "A brief description of the project and its impact.",
                    )
                })
                .collect(),
            team: Vec::new(),
            footer: "© 2023 SPM. All rights reserved.".to_owned(),
        }
    }
}

impl SiteContent {
    pub fn builder() -> SiteContentBuilder {
        SiteContentBuilder::default()
    }
}

/// Starts from [`SiteContent::default`] and overrides what is set.
#[derive(Debug, Default)]
pub struct SiteContentBuilder {
    content: SiteContent,
}

impl SiteContentBuilder {
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.content.brand = brand.into();
        self
    }

    pub fn nav(mut self, items: impl IntoIterator<Item = (String, String)>) -> Self {
        self.content.nav = items
            .into_iter()
            .map(|(href, label)| NavItem { href, label })
            .collect();
        self
    }

    pub fn hero(mut self, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        self.content.hero_title = title.into();
        self.content.hero_subtitle = subtitle.into();
        self
    }

    pub fn service(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.content.services.push(card(title, description));
        self
    }

    pub fn clear_services(mut self) -> Self {
        self.content.services.clear();
        self
    }

    pub fn project(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.content.portfolio.push(card(title, description));
        self
    }

    pub fn clear_portfolio(mut self) -> Self {
        self.content.portfolio.clear();
        self
    }

    pub fn member(mut self, name: impl Into<String>, role: impl Into<String>) -> Self {
        self.content.team.push(TeamMember {
            name: name.into(),
            role: role.into(),
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.content.footer = footer.into();
        self
    }

    pub fn build(self) -> SiteContent {
        self.content
    }
}
