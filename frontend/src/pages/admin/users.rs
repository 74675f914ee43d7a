use common::error::ApiError;
use common::model::user::{User, UserFormData, UserRole};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{report, AdminProps};
use crate::card_grid::CardGrid;
use crate::components::feedback::{alert, confirm, show_toast, ToastKind};
use crate::services::users;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

#[derive(Clone, Copy)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    Confirmation,
}

pub enum Msg {
    Loaded(Vec<User>),
    Search(String),
    OpenForm,
    OpenEdit(String),
    Edit(Field, String),
    SetRole(UserRole),
    Save,
    Created(User),
    Updated(User),
    Delete(String),
    Deleted(String),
    Failed(ApiError),
}

pub struct UsersPage {
    users: Vec<User>,
    loading: bool,
    search: String,
    /// Id of the account being edited; `None` while creating.
    editing: Option<String>,
    form: UserFormData,
    saving: bool,
    sheet_ref: NodeRef,
}

impl Component for UsersPage {
    type Message = Msg;
    type Properties = AdminProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let session = ctx.props().session.clone();
        spawn_local(async move {
            link.send_message(match users::list(&session).await {
                Ok(list) => Msg::Loaded(list),
                Err(err) => Msg::Failed(err),
            });
        });
        Self {
            users: Vec::new(),
            loading: true,
            search: String::new(),
            editing: None,
            form: UserFormData::default(),
            saving: false,
            sheet_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Loaded(list) => {
                self.users = list;
                self.loading = false;
            }
            Msg::Search(term) => self.search = term,
            Msg::OpenForm => {
                self.editing = None;
                self.form = UserFormData::default();
                open_top_sheet(self.sheet_ref.clone());
            }
            Msg::OpenEdit(id) => {
                let Some(user) = self.users.iter().find(|u| u.id == id) else {
                    return false;
                };
                self.form = UserFormData::from_user(user);
                self.editing = Some(id);
                open_top_sheet(self.sheet_ref.clone());
            }
            Msg::Edit(field, value) => {
                let optional = || Some(value.clone()).filter(|v| !v.is_empty());
                match field {
                    Field::Name => self.form.name = value.clone(),
                    Field::Email => self.form.email = value.clone(),
                    Field::Phone => self.form.phone = optional(),
                    Field::Password => self.form.password = optional(),
                    Field::Confirmation => self.form.password_confirmation = optional(),
                }
            }
            Msg::SetRole(role) => self.form.role = role,
            Msg::Save => {
                if self.saving {
                    return false;
                }
                if let Err(err) = self.form.validate(self.editing.is_none()) {
                    alert(err.title(), &err.to_string());
                    return false;
                }
                self.saving = true;
                let form = self.form.clone();
                let link = ctx.link().clone();
                let session = props.session.clone();
                let editing = self.editing.clone();
                spawn_local(async move {
                    let msg = match editing {
                        Some(id) => users::update(&id, &form, &session).await.map(Msg::Updated),
                        None => users::create(&form, &session).await.map(Msg::Created),
                    };
                    link.send_message(msg.unwrap_or_else(Msg::Failed));
                });
            }
            Msg::Created(user) => {
                self.saving = false;
                self.users.insert(0, user);
                close_top_sheet(self.sheet_ref.clone());
                show_toast("Utilisateur créé.", ToastKind::Success);
            }
            Msg::Updated(user) => {
                self.saving = false;
                self.editing = None;
                if let Some(slot) = self.users.iter_mut().find(|u| u.id == user.id) {
                    *slot = user;
                }
                close_top_sheet(self.sheet_ref.clone());
                show_toast("Utilisateur modifié.", ToastKind::Success);
            }
            Msg::Delete(id) => {
                if !confirm("Supprimer cet utilisateur ?") {
                    return false;
                }
                let link = ctx.link().clone();
                let session = props.session.clone();
                spawn_local(async move {
                    link.send_message(match users::delete(&id, &session).await {
                        Ok(()) => Msg::Deleted(id),
                        Err(err) => Msg::Failed(err),
                    });
                });
                return false;
            }
            Msg::Deleted(id) => {
                self.users.retain(|u| u.id != id);
                show_toast("Utilisateur supprimé.", ToastKind::Success);
            }
            Msg::Failed(err) => {
                self.loading = false;
                self.saving = false;
                report(&err, &props.on_unauthorized);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let me = ctx.props().session.user().map(|u| u.id.clone());
        let cards = self.users.iter().filter(|u| u.matches(&self.search)).map(|user| {
            let id = user.id.clone();
            let edit_id = user.id.clone();
            let is_me = me.as_deref() == Some(user.id.as_str());
            html! {
                <div class="card user" key={user.id.clone()}>
                    <span class="avatar">{ user.initials() }</span>
                    <div>
                        <strong>{ user.name.clone() }</strong>
                        <small class="muted block">{ user.email.clone() }</small>
                        <small class="muted block">
                            { user.phone.clone().unwrap_or_else(|| "Non renseigné".to_string()) }
                        </small>
                    </div>
                    <span class={classes!("role", user.role.as_str().to_lowercase())}>{ user.role.as_str() }</span>
                    <button class="icon-btn" title="Modifier"
                        onclick={link.callback(move |_| Msg::OpenEdit(edit_id.clone()))}>
                        <i class="material-icons">{"edit"}</i>
                    </button>
                    if !is_me {
                        <button class="icon-btn danger" title="Supprimer"
                            onclick={link.callback(move |_| Msg::Delete(id.clone()))}>
                            <i class="material-icons">{"delete"}</i>
                        </button>
                    }
                </div>
            }
        });

        let title = if self.editing.is_some() { "Modifier l'utilisateur" } else { "Nouvel utilisateur" };

        html! {
            <div class="stack">
                <div class="toolbar">
                    <input
                        type="search"
                        placeholder="Rechercher un utilisateur..."
                        value={self.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::Search(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button class="btn primary" onclick={link.callback(|_| Msg::OpenForm)}>
                        <i class="material-icons">{"person_add"}</i>{" Nouvel utilisateur"}
                    </button>
                </div>
                if self.loading {
                    <div class="spinner"></div>
                } else {
                    <CardGrid>{ for cards }</CardGrid>
                }
                <TopSheet node_ref={self.sheet_ref.clone()} title={title}>
                    { self.form_view(link) }
                </TopSheet>
            </div>
        }
    }
}

impl UsersPage {
    fn form_view(&self, link: &yew::html::Scope<Self>) -> Html {
        let form = &self.form;
        let field = |label: &'static str, kind: &'static str, value: String, target: Field| {
            html! {
                <div class="field">
                    <label>{ label }</label>
                    <input
                        type={kind}
                        value={value}
                        oninput={link.callback(move |e: InputEvent| {
                            Msg::Edit(target, e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
            }
        };
        let roles = UserRole::ALL.into_iter().map(|role| {
            html! {
                <label class={classes!("radio-card", (form.role == role).then_some("selected"))}>
                    <input
                        type="radio"
                        name="role"
                        checked={form.role == role}
                        onchange={link.callback(move |_| Msg::SetRole(role))}
                    />
                    <span>{ role.label() }</span>
                </label>
            }
        });

        html! {
            <div class="stack">
                { field("Nom complet", "text", form.name.clone(), Field::Name) }
                { field("Email", "email", form.email.clone(), Field::Email) }
                { field("Téléphone", "tel", form.phone.clone().unwrap_or_default(), Field::Phone) }
                if self.editing.is_none() {
                    <div class="form-grid">
                        { field("Mot de passe", "password", form.password.clone().unwrap_or_default(), Field::Password) }
                        { field("Confirmation", "password", form.password_confirmation.clone().unwrap_or_default(), Field::Confirmation) }
                    </div>
                }
                <div class="form-grid">{ for roles }</div>
                <button class="btn primary block" disabled={self.saving} onclick={link.callback(|_| Msg::Save)}>
                    { match (self.saving, self.editing.is_some()) {
                        (true, _) => "Enregistrement...",
                        (false, true) => "Enregistrer les modifications",
                        (false, false) => "Créer l'utilisateur",
                    } }
                </button>
            </div>
        }
    }
}
