use common::model::user::User;
use web_sys::MouseEvent;
use yew::{classes, html, Callback, Children, Component, Context, Html, Properties};

use crate::routes::Page;

const NAV: [Page; 6] = [
    Page::Dashboard,
    Page::Collections,
    Page::Messages,
    Page::AdminProjects,
    Page::Users,
    Page::Settings,
];

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub page: Page,
    pub user: Option<User>,
    /// Unread contact messages, shown as a badge on "Messages".
    pub unread: usize,
    pub on_logout: Callback<()>,
    pub children: Children,
}

pub struct AdminLayout;

impl Component for AdminLayout {
    type Message = ();
    type Properties = AdminLayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminLayout
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let current = match props.page {
            Page::CollectionEditor => Page::Collections,
            page => page,
        };
        let links = NAV.iter().map(|page| {
            let badge = (*page == Page::Messages && props.unread > 0)
                .then(|| html! { <span class="badge">{ props.unread }</span> });
            html! {
                <a href={page.hash()} class={classes!("side-link", (*page == current).then_some("active"))}>
                    <i class="material-icons">{ page.icon() }</i>
                    <span>{ page.label() }</span>
                    { badge }
                </a>
            }
        });
        let on_logout = props.on_logout.reform(|_: MouseEvent| ());

        html! {
            <div class="admin-shell">
                <aside class="sidebar">
                    <div class="brand">{"Lynays Admin"}</div>
                    <nav>{ for links }</nav>
                    <a class="side-link" href={Page::Home.hash()}>
                        <i class="material-icons">{"public"}</i>
                        <span>{"Voir le site"}</span>
                    </a>
                </aside>
                <div class="admin-main">
                    <header class="admin-header">
                        <h1>{ props.page.label() }</h1>
                        if let Some(user) = &props.user {
                            <div class="user-chip">
                                <span class="avatar">{ user.initials() }</span>
                                <div>
                                    <strong>{ user.name.clone() }</strong>
                                    <small class="muted">{ user.role.label() }</small>
                                </div>
                            </div>
                        }
                        <button class="btn ghost" onclick={on_logout}>
                            <i class="material-icons">{"logout"}</i>{" Déconnexion"}
                        </button>
                    </header>
                    <section class="admin-content">{ for props.children.iter() }</section>
                </div>
            </div>
        }
    }
}
