use common::model::settings::SystemSettings;
use yew::{classes, html, Children, Component, Context, Html, Properties};

use crate::routes::Page;

const NAV: [Page; 5] = [
    Page::Home,
    Page::About,
    Page::Projects,
    Page::Contact,
    Page::Simulation,
];

#[derive(Properties, PartialEq)]
pub struct PublicLayoutProps {
    pub page: Page,
    #[prop_or_default]
    pub settings: Option<SystemSettings>,
    pub children: Children,
}

pub struct PublicLayout;

impl Component for PublicLayout {
    type Message = ();
    type Properties = PublicLayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PublicLayout
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let app_name = props
            .settings
            .as_ref()
            .map(|s| s.app_name.clone())
            .unwrap_or_else(|| "Lynays".to_string());
        let links = NAV.iter().map(|page| {
            let class = classes!(
                "nav-link",
                (*page == Page::Simulation).then_some("cta"),
                (*page == props.page).then_some("active")
            );
            html! { <a href={page.hash()} {class}>{ page.label() }</a> }
        });

        html! {
            <div class="public-shell">
                <header class="site-header">
                    <a class="brand" href={Page::Home.hash()}>
                        <i class="material-icons">{"wb_sunny"}</i>
                        <span>{ app_name.clone() }</span>
                    </a>
                    <nav>{ for links }</nav>
                </header>
                <main>{ for props.children.iter() }</main>
                <footer class="site-footer">
                    <span>{ format!("© {app_name}") }</span>
                    if let Some(settings) = &props.settings {
                        <span>{ settings.contact_email.clone() }</span>
                        <span>{ settings.contact_phone.clone() }</span>
                    }
                    <a href={Page::Login.hash()}>{"Espace admin"}</a>
                </footer>
            </div>
        }
    }
}
