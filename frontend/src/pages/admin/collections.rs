//! Collection requests in the back-office: searchable table, detail sheet,
//! status changes, deletion, and entry points into the wizard.

use common::error::ApiError;
use common::model::collection::{Attachment, CollectionStatus, ConsumptionProfile};
use common::model::dashboard::short_date_fr;
use common::session::Session;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::report;
use crate::components::feedback::{confirm, show_toast, ToastKind};
use crate::services::collections::{self, Collection};
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

pub enum Msg {
    Loaded(Vec<Collection>),
    Search(String),
    Show(String),
    Edit(String),
    Create,
    SetStatus(String, CollectionStatus),
    StatusSaved(String, CollectionStatus),
    Delete(String),
    Deleted(String),
    Failed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct CollectionsProps {
    pub session: Session,
    pub on_unauthorized: Callback<()>,
    /// Opens the wizard on a stored record, or empty with `None`.
    pub on_edit: Callback<Option<Collection>>,
}

pub struct CollectionsPage {
    items: Vec<Collection>,
    loading: bool,
    search: String,
    selected: Option<String>,
    sheet_ref: NodeRef,
}

impl CollectionsPage {
    fn find(&self, id: &str) -> Option<&Collection> {
        self.items.iter().find(|c| c.id == id)
    }
}

impl Component for CollectionsPage {
    type Message = Msg;
    type Properties = CollectionsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let session = ctx.props().session.clone();
        spawn_local(async move {
            link.send_message(match collections::list(&session).await {
                Ok(items) => Msg::Loaded(items),
                Err(err) => Msg::Failed(err),
            });
        });
        Self {
            items: Vec::new(),
            loading: true,
            search: String::new(),
            selected: None,
            sheet_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Loaded(items) => {
                self.items = items;
                self.loading = false;
            }
            Msg::Search(term) => self.search = term,
            Msg::Show(id) => {
                self.selected = Some(id);
                open_top_sheet(self.sheet_ref.clone());
            }
            Msg::Edit(id) => {
                if let Some(record) = self.find(&id) {
                    props.on_edit.emit(Some(record.clone()));
                }
                return false;
            }
            Msg::Create => {
                props.on_edit.emit(None);
                return false;
            }
            Msg::SetStatus(id, status) => {
                let question = match status {
                    CollectionStatus::Processed => "Confirmer l'envoi du devis pour cette demande ?",
                    CollectionStatus::Rejected => "Rejeter cette demande ?",
                    CollectionStatus::Pending => "Remettre cette demande en attente ?",
                };
                if !confirm(question) {
                    return false;
                }
                let link = ctx.link().clone();
                let session = props.session.clone();
                spawn_local(async move {
                    link.send_message(
                        match collections::update_status(&id, status, &session).await {
                            Ok(()) => Msg::StatusSaved(id, status),
                            Err(err) => Msg::Failed(err),
                        },
                    );
                });
                return false;
            }
            Msg::StatusSaved(id, status) => {
                if let Some(record) = self.items.iter_mut().find(|c| c.id == id) {
                    record.status = status;
                }
                show_toast(&format!("Statut mis à jour : {}", status.label()), ToastKind::Success);
            }
            Msg::Delete(id) => {
                if !confirm("Êtes-vous sûr ? Cette action est irréversible.") {
                    return false;
                }
                let link = ctx.link().clone();
                let session = props.session.clone();
                spawn_local(async move {
                    link.send_message(match collections::delete(&id, &session).await {
                        Ok(()) => Msg::Deleted(id),
                        Err(err) => Msg::Failed(err),
                    });
                });
                return false;
            }
            Msg::Deleted(id) => {
                self.items.retain(|c| c.id != id);
                if self.selected.as_deref() == Some(id.as_str()) {
                    self.selected = None;
                    close_top_sheet(self.sheet_ref.clone());
                }
                show_toast("La demande a été supprimée.", ToastKind::Success);
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
        let rows = self
            .items
            .iter()
            .filter(|c| c.matches(&self.search))
            .map(|c| row(c, link));
        let detail = self
            .selected
            .as_deref()
            .and_then(|id| self.find(id))
            .map(|c| detail(c, link));

        html! {
            <div class="stack">
                <div class="toolbar">
                    <input
                        type="search"
                        placeholder="Rechercher par nom ou identifiant..."
                        value={self.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::Search(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button class="btn primary" onclick={link.callback(|_| Msg::Create)}>
                        <i class="material-icons">{"add"}</i>{" Nouvelle collecte"}
                    </button>
                </div>
                if self.loading {
                    <div class="spinner"></div>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Client"}</th>
                                <th>{"Profil"}</th>
                                <th>{"Ville"}</th>
                                <th>{"Date"}</th>
                                <th>{"Statut"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>{ for rows }</tbody>
                    </table>
                }
                <TopSheet node_ref={self.sheet_ref.clone()} title="Détails de la demande">
                    { detail.unwrap_or_default() }
                </TopSheet>
            </div>
        }
    }
}

fn status_badge(status: CollectionStatus) -> Html {
    html! {
        <span class={classes!("status", status.as_str().to_lowercase())}>{ status.label() }</span>
    }
}

fn row(record: &Collection, link: &Scope<CollectionsPage>) -> Html {
    let id = record.id.clone();
    let (show, edit, delete) = (id.clone(), id.clone(), id);
    html! {
        <tr key={record.id.clone()}>
            <td>
                <strong>{ record.draft.personal_info.full_name() }</strong>
                <small class="muted block">{ record.draft.personal_info.email.clone() }</small>
            </td>
            <td>{ record.draft.profile_kind().map(|k| k.label()).unwrap_or("-") }</td>
            <td>{ record.draft.city.clone() }</td>
            <td>{ record.submitted_at.map(short_date_fr).unwrap_or_default() }</td>
            <td>{ status_badge(record.status) }</td>
            <td class="actions">
                <button class="icon-btn" title="Voir" onclick={link.callback(move |_| Msg::Show(show.clone()))}>
                    <i class="material-icons">{"visibility"}</i>
                </button>
                <button class="icon-btn" title="Modifier" onclick={link.callback(move |_| Msg::Edit(edit.clone()))}>
                    <i class="material-icons">{"edit"}</i>
                </button>
                <button class="icon-btn danger" title="Supprimer" onclick={link.callback(move |_| Msg::Delete(delete.clone()))}>
                    <i class="material-icons">{"delete"}</i>
                </button>
            </td>
        </tr>
    }
}

fn detail(record: &Collection, link: &Scope<CollectionsPage>) -> Html {
    let draft = &record.draft;
    let info = &draft.personal_info;
    let profile = match &draft.profile {
        Some(ConsumptionProfile::Invoice(files)) => {
            let links = files.iter().enumerate().map(|(index, file)| match file {
                Attachment::Stored(url) => html! {
                    <li><a href={url.clone()} target="_blank" rel="noopener noreferrer">
                        { format!("Facture {}", index + 1) }
                    </a></li>
                },
                Attachment::Upload(file) => html! { <li>{ file.name() }</li> },
            });
            html! { <ul>{ for links }</ul> }
        }
        Some(ConsumptionProfile::Equipment(items)) => {
            let lines = items.iter().map(|item| {
                html! {
                    <tr>
                        <td>{ item.display_name() }</td>
                        <td>{ item.quantity }</td>
                        <td>{ format!("{} W", item.power_watts) }</td>
                        <td>{ format!("{} h/j", item.hours_per_day) }</td>
                    </tr>
                }
            });
            html! {
                <table class="table compact">
                    <thead><tr><th>{"Équipement"}</th><th>{"Qté"}</th><th>{"Puissance"}</th><th>{"Usage"}</th></tr></thead>
                    <tbody>{ for lines }</tbody>
                </table>
            }
        }
        None => html! { <p class="muted">{"Aucun profil renseigné."}</p> },
    };
    let installation = match draft.installation {
        Some(installation) => {
            let roof = installation
                .roof_material()
                .map(|m| format!(" ({})", m.label()))
                .unwrap_or_default();
            format!("{}{}", installation.kind().label(), roof)
        }
        None => "-".to_string(),
    };
    let (processed, rejected, edit) = (record.id.clone(), record.id.clone(), record.id.clone());

    html! {
        <div class="detail">
            <div class="detail-grid">
                <div><small class="muted">{"Client"}</small><p>{ info.full_name() }</p></div>
                <div><small class="muted">{"Email"}</small><p>{ info.email.clone() }</p></div>
                <div><small class="muted">{"Téléphone"}</small><p>{ info.phone.clone() }</p></div>
                <div><small class="muted">{"Statut"}</small><p>{ status_badge(record.status) }</p></div>
                <div><small class="muted">{"Ville / Commune"}</small><p>{ draft.city.clone() }</p></div>
                <div><small class="muted">{"Installation"}</small><p>{ installation }</p></div>
            </div>
            <h4>{ draft.profile_kind().map(|k| k.label()).unwrap_or("Profil") }</h4>
            { profile }
            if !draft.notes.is_empty() {
                <h4>{"Autres informations"}</h4>
                <p class="notes">{ draft.notes.clone() }</p>
            }
            <div class="actions">
                if record.status != CollectionStatus::Processed {
                    <button class="btn primary" onclick={link.callback(move |_| Msg::SetStatus(processed.clone(), CollectionStatus::Processed))}>
                        {"Marquer comme traité"}
                    </button>
                }
                if record.status != CollectionStatus::Rejected {
                    <button class="btn ghost danger" onclick={link.callback(move |_| Msg::SetStatus(rejected.clone(), CollectionStatus::Rejected))}>
                        {"Rejeter"}
                    </button>
                }
                <button class="btn ghost" onclick={link.callback(move |_| Msg::Edit(edit.clone()))}>
                    {"Modifier"}
                </button>
            </div>
        </div>
    }
}
