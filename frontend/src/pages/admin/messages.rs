use common::error::ApiError;
use common::model::contact::ContactMessage;
use common::session::Session;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::report;
use crate::components::feedback::{confirm, show_toast, ToastKind};
use crate::services::contact;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

pub enum Msg {
    Loaded(Vec<ContactMessage>),
    Search(String),
    ToggleUnreadOnly,
    Open(String),
    MarkedRead(String),
    Delete(String),
    Deleted(String),
    Failed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct MessagesProps {
    pub session: Session,
    pub on_unauthorized: Callback<()>,
    /// One message went from unread to read.
    pub on_read: Callback<()>,
}

pub struct MessagesPage {
    messages: Vec<ContactMessage>,
    loading: bool,
    search: String,
    unread_only: bool,
    selected: Option<String>,
    sheet_ref: NodeRef,
}

impl Component for MessagesPage {
    type Message = Msg;
    type Properties = MessagesProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let session = ctx.props().session.clone();
        spawn_local(async move {
            link.send_message(match contact::list(&session).await {
                Ok(messages) => Msg::Loaded(messages),
                Err(err) => Msg::Failed(err),
            });
        });
        Self {
            messages: Vec::new(),
            loading: true,
            search: String::new(),
            unread_only: false,
            selected: None,
            sheet_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Loaded(messages) => {
                self.messages = messages;
                self.loading = false;
            }
            Msg::Search(term) => self.search = term,
            Msg::ToggleUnreadOnly => self.unread_only = !self.unread_only,
            Msg::Open(id) => {
                let unread = self
                    .messages
                    .iter()
                    .any(|m| m.id == id && m.is_unread());
                if unread {
                    let link = ctx.link().clone();
                    let session = props.session.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        link.send_message(match contact::mark_read(&id, &session).await {
                            Ok(()) => Msg::MarkedRead(id),
                            Err(err) => Msg::Failed(err),
                        });
                    });
                }
                self.selected = Some(id);
                open_top_sheet(self.sheet_ref.clone());
            }
            Msg::MarkedRead(id) => {
                if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
                    message.mark_read();
                    props.on_read.emit(());
                }
            }
            Msg::Delete(id) => {
                if !confirm("Supprimer ce message ?") {
                    return false;
                }
                let link = ctx.link().clone();
                let session = props.session.clone();
                spawn_local(async move {
                    link.send_message(match contact::delete(&id, &session).await {
                        Ok(()) => Msg::Deleted(id),
                        Err(err) => Msg::Failed(err),
                    });
                });
                return false;
            }
            Msg::Deleted(id) => {
                let was_unread = self.messages.iter().any(|m| m.id == id && m.is_unread());
                self.messages.retain(|m| m.id != id);
                if was_unread {
                    props.on_read.emit(());
                }
                if self.selected.as_deref() == Some(id.as_str()) {
                    self.selected = None;
                    close_top_sheet(self.sheet_ref.clone());
                }
                show_toast("Message supprimé.", ToastKind::Success);
            }
            Msg::Failed(err) => {
                self.loading = false;
                report(&err, &props.on_unauthorized);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visible = self
            .messages
            .iter()
            .filter(|m| !self.unread_only || m.is_unread())
            .filter(|m| m.matches(&self.search))
            .map(|m| {
                let (open, delete) = (m.id.clone(), m.id.clone());
                html! {
                    <div
                        class={classes!("message-row", m.is_unread().then_some("unread"))}
                        key={m.id.clone()}
                        onclick={link.callback(move |_| Msg::Open(open.clone()))}
                    >
                        <div class="message-meta">
                            <strong>{ m.name.clone() }</strong>
                            <small class="muted">{ m.email.clone() }</small>
                        </div>
                        <div class="message-subject">{ m.subject.clone() }</div>
                        <small class="muted">{ m.sent_at.clone().or_else(|| m.created_at.clone()).unwrap_or_default() }</small>
                        <button
                            class="icon-btn danger"
                            title="Supprimer"
                            onclick={link.callback(move |e: MouseEvent| {
                                e.stop_propagation();
                                Msg::Delete(delete.clone())
                            })}
                        >
                            <i class="material-icons">{"delete"}</i>
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>();
        let selected = self
            .selected
            .as_deref()
            .and_then(|id| self.messages.iter().find(|m| m.id == id))
            .map(|m| {
                html! {
                    <div class="detail">
                        <p><strong>{ m.name.clone() }</strong>{" · "}
                            <a href={format!("mailto:{}", m.email)}>{ m.email.clone() }</a></p>
                        <h4>{ m.subject.clone() }</h4>
                        <p class="notes">{ m.message.clone() }</p>
                    </div>
                }
            })
            .unwrap_or_default();

        html! {
            <div class="stack">
                <div class="toolbar">
                    <input
                        type="search"
                        placeholder="Rechercher un message..."
                        value={self.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::Search(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <label class="toggle">
                        <input
                            type="checkbox"
                            checked={self.unread_only}
                            onchange={link.callback(|_| Msg::ToggleUnreadOnly)}
                        />
                        {" Non lus uniquement"}
                    </label>
                </div>
                if self.loading {
                    <div class="spinner"></div>
                } else if visible.is_empty() {
                    <div class="empty-state">{"Aucun message."}</div>
                } else {
                    <div class="card list">{ for visible }</div>
                }
                <TopSheet node_ref={self.sheet_ref.clone()} title="Message">
                    { selected }
                </TopSheet>
            </div>
        }
    }
}
