//! Application root: owns the session and the branding settings, follows the
//! location hash, and picks the layout and page to render.

use common::model::settings::SystemSettings;
use common::requests::LoginData;
use common::session::Session;
use log::{info, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::feedback::{show_toast, ToastKind};
use crate::components::layout::{AdminLayout, PublicLayout};
use crate::components::simulation::SimulationComponent;
use crate::pages::admin::{
    AdminProjectsPage, CollectionsPage, DashboardPage, LoginPage, MessagesPage, SettingsPage,
    UsersPage,
};
use crate::pages::public::{AboutPage, ContactPage, LandingPage, ProjectsPage};
use crate::routes::{self, Page};
use crate::services::collections::Collection;
use crate::services::{auth, contact, settings};
use crate::storage::LocalStore;

pub enum Msg {
    HashChanged(Page),
    SessionChecked(Option<LoginData>),
    LoggedIn(LoginData),
    Logout,
    Unauthorized,
    SettingsLoaded(SystemSettings),
    UnreadCount(usize),
    MessageRead,
    EditCollection(Option<Collection>),
    WizardFinished,
}

pub struct App {
    page: Page,
    session: Session,
    /// The stored token has been refreshed (or there was none).
    session_ready: bool,
    settings: Option<SystemSettings>,
    unread: usize,
    /// Record handed to the back-office wizard.
    editor_record: Option<Collection>,
    /// Bumped to remount the wizard on every entry.
    wizard_key: u32,
}

impl App {
    /// Sets the page, sending logged-in users away from the login form.
    fn go(&mut self, page: Page) {
        let page = if page == Page::Login && self.session.is_authenticated() {
            Page::Dashboard
        } else {
            page
        };
        if page != self.page {
            self.wizard_key = self.wizard_key.wrapping_add(1);
        }
        self.page = page;
        if routes::current() != page {
            routes::push(page);
        }
    }

    fn load_unread(&self, ctx: &Context<Self>) {
        if !self.session.is_authenticated() {
            return;
        }
        let link = ctx.link().clone();
        let session = self.session.clone();
        spawn_local(async move {
            match contact::unread_count(&session).await {
                Ok(count) => link.send_message(Msg::UnreadCount(count)),
                Err(err) if err.is_unauthorized() => link.send_message(Msg::Unauthorized),
                Err(err) => warn!("unread count: {err}"),
            }
        });
    }

    fn admin_page(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let session = self.session.clone();
        let on_unauthorized = link.callback(|_| Msg::Unauthorized);
        match self.page {
            Page::Collections => html! {
                <CollectionsPage {session} {on_unauthorized}
                    on_edit={link.callback(Msg::EditCollection)} />
            },
            Page::CollectionEditor => html! {
                <SimulationComponent
                    key={self.wizard_key}
                    record={self.editor_record.clone()}
                    {session}
                    {on_unauthorized}
                    on_finished={link.callback(|_| Msg::WizardFinished)}
                />
            },
            Page::Messages => html! {
                <MessagesPage {session} {on_unauthorized}
                    on_read={link.callback(|_| Msg::MessageRead)} />
            },
            Page::Users => html! { <UsersPage {session} {on_unauthorized} /> },
            Page::AdminProjects => html! { <AdminProjectsPage {session} {on_unauthorized} /> },
            Page::Settings => html! {
                <SettingsPage {session} {on_unauthorized}
                    current={self.settings.clone()}
                    on_saved={link.callback(Msg::SettingsLoaded)} />
            },
            _ => html! { <DashboardPage {session} {on_unauthorized} /> },
        }
    }

    fn public_page(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.page {
            Page::About => html! { <AboutPage /> },
            Page::Projects => html! { <ProjectsPage /> },
            Page::Contact => html! { <ContactPage settings={self.settings.clone()} /> },
            Page::Simulation => html! {
                <SimulationComponent
                    key={self.wizard_key}
                    on_finished={link.callback(|_| Msg::WizardFinished)}
                />
            },
            _ => html! { <LandingPage /> },
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        routes::listen(move |page| link.send_message(Msg::HashChanged(page)));

        let link = ctx.link().clone();
        spawn_local(async move {
            match settings::load().await {
                Ok(loaded) => link.send_message(Msg::SettingsLoaded(loaded)),
                Err(err) => warn!("settings: {err}"),
            }
        });

        let session = Session::load(&LocalStore);
        let session_ready = !session.has_token();
        if !session_ready {
            let link = ctx.link().clone();
            let stored = session.clone();
            spawn_local(async move {
                let refreshed = auth::refresh(&stored)
                    .await
                    .map_err(|err| warn!("session refresh failed: {err}"))
                    .ok();
                link.send_message(Msg::SessionChecked(refreshed));
            });
        }

        Self {
            page: routes::current(),
            session,
            session_ready,
            settings: None,
            unread: 0,
            editor_record: None,
            wizard_key: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::HashChanged(page) => {
                if page == self.page {
                    return false;
                }
                self.go(page);
            }
            Msg::SessionChecked(refreshed) => {
                self.session_ready = true;
                let kept = match refreshed {
                    Some(login) => self.session.refresh(&LocalStore, login),
                    None => false,
                };
                if kept {
                    self.load_unread(ctx);
                } else {
                    self.session.clear(&LocalStore);
                }
                self.go(self.page);
            }
            Msg::LoggedIn(login) => {
                info!("signed in as {}", login.user.email);
                self.session.establish(&LocalStore, login);
                self.load_unread(ctx);
                self.go(Page::Dashboard);
            }
            Msg::Logout => {
                let session = self.session.clone();
                spawn_local(async move { auth::logout(&session).await });
                self.session.clear(&LocalStore);
                self.unread = 0;
                self.go(Page::Login);
            }
            Msg::Unauthorized => {
                if !self.session.has_token() {
                    return false;
                }
                self.session.clear(&LocalStore);
                self.unread = 0;
                show_toast("Session expirée, veuillez vous reconnecter.", ToastKind::Error);
            }
            Msg::SettingsLoaded(loaded) => {
                settings::apply(&loaded);
                self.settings = Some(loaded);
            }
            Msg::UnreadCount(count) => self.unread = count,
            Msg::MessageRead => self.unread = self.unread.saturating_sub(1),
            Msg::EditCollection(record) => {
                self.editor_record = record;
                self.wizard_key = self.wizard_key.wrapping_add(1);
                self.go(Page::CollectionEditor);
            }
            Msg::WizardFinished => {
                self.editor_record = None;
                let target = if self.page == Page::CollectionEditor {
                    Page::Collections
                } else {
                    Page::Home
                };
                self.go(target);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if !self.page.is_admin() && self.page != Page::Login {
            return html! {
                <PublicLayout page={self.page} settings={self.settings.clone()}>
                    { self.public_page(ctx) }
                </PublicLayout>
            };
        }
        if !self.session_ready {
            return html! { <div class="spinner full"></div> };
        }
        if !self.session.is_authenticated() {
            return html! { <LoginPage on_login={link.callback(Msg::LoggedIn)} /> };
        }
        html! {
            <AdminLayout
                page={self.page}
                user={self.session.user().cloned()}
                unread={self.unread}
                on_logout={link.callback(|_| Msg::Logout)}
            >
                { self.admin_page(ctx) }
            </AdminLayout>
        }
    }
}
