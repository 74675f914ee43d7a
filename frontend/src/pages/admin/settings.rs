use common::error::ApiError;
use common::model::settings::{is_hex_color, SystemSettings};
use common::session::Session;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::report;
use crate::components::feedback::{alert, show_toast, ToastKind};
use crate::services::settings;

#[derive(Clone, Copy)]
pub enum Field {
    AppName,
    PrimaryColor,
    SecondaryColor,
    ContactEmail,
    ContactPhone,
}

pub enum Msg {
    Loaded(SystemSettings),
    Edit(Field, String),
    Save,
    Saved(SystemSettings),
    Failed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct SettingsProps {
    pub session: Session,
    pub on_unauthorized: Callback<()>,
    /// Settings already known to the root, if any.
    #[prop_or_default]
    pub current: Option<SystemSettings>,
    pub on_saved: Callback<SystemSettings>,
}

pub struct SettingsPage {
    draft: Option<SystemSettings>,
    saving: bool,
}

impl Component for SettingsPage {
    type Message = Msg;
    type Properties = SettingsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let current = ctx.props().current.clone();
        if current.is_none() {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(match settings::load().await {
                    Ok(loaded) => Msg::Loaded(loaded),
                    Err(err) => Msg::Failed(err),
                });
            });
        }
        Self {
            draft: current,
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Loaded(loaded) => self.draft = Some(loaded),
            Msg::Edit(field, value) => {
                let Some(draft) = &mut self.draft else {
                    return false;
                };
                match field {
                    Field::AppName => draft.app_name = value,
                    Field::PrimaryColor => draft.primary_color = value,
                    Field::SecondaryColor => draft.secondary_color = value,
                    Field::ContactEmail => draft.contact_email = value,
                    Field::ContactPhone => draft.contact_phone = value,
                }
            }
            Msg::Save => {
                let Some(draft) = self.draft.clone() else {
                    return false;
                };
                if self.saving {
                    return false;
                }
                if draft.app_name.trim().is_empty() {
                    alert("Champs manquants", "Le nom de l'application est obligatoire.");
                    return false;
                }
                if !is_hex_color(&draft.primary_color) || !is_hex_color(&draft.secondary_color) {
                    alert("Couleur invalide", "Utilisez le format #RRGGBB.");
                    return false;
                }
                self.saving = true;
                let link = ctx.link().clone();
                let session = props.session.clone();
                spawn_local(async move {
                    link.send_message(match settings::save(&draft, &session).await {
                        Ok(saved) => Msg::Saved(saved),
                        Err(err) => Msg::Failed(err),
                    });
                });
            }
            Msg::Saved(saved) => {
                self.saving = false;
                self.draft = Some(saved.clone());
                props.on_saved.emit(saved);
                show_toast("Paramètres enregistrés.", ToastKind::Success);
            }
            Msg::Failed(err) => {
                self.saving = false;
                report(&err, &props.on_unauthorized);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let Some(draft) = &self.draft else {
            return html! { <div class="spinner"></div> };
        };
        let field = |label: &'static str, kind: &'static str, value: &str, target: Field| {
            html! {
                <div class="field">
                    <label>{ label }</label>
                    <input
                        type={kind}
                        value={value.to_string()}
                        oninput={link.callback(move |e: InputEvent| {
                            Msg::Edit(target, e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
            }
        };

        html! {
            <div class="card narrow stack">
                <h3>{"Identité"}</h3>
                { field("Nom de l'application", "text", &draft.app_name, Field::AppName) }
                <div class="form-grid">
                    { field("Couleur principale", "color", &draft.primary_color, Field::PrimaryColor) }
                    { field("Couleur secondaire", "color", &draft.secondary_color, Field::SecondaryColor) }
                </div>
                <h3>{"Contact"}</h3>
                <div class="form-grid">
                    { field("Email de contact", "email", &draft.contact_email, Field::ContactEmail) }
                    { field("Téléphone", "tel", &draft.contact_phone, Field::ContactPhone) }
                </div>
                <p class="muted">{ format!("Titre de l'onglet : {}", draft.document_title()) }</p>
                <button class="btn primary" disabled={self.saving} onclick={link.callback(|_| Msg::Save)}>
                    { if self.saving { "Enregistrement..." } else { "Enregistrer" } }
                </button>
            </div>
        }
    }
}
