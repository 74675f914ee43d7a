use common::model::collection::{
    Attachment, InstallationKind, ProfileKind, RoofMaterial,
};
use common::wizard::{Phase, Step};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::equipment::equipment_manager;
use super::helpers::{file_size_label, object_url, open_in_new_tab, take_files};
use super::messages::Msg;
use super::state::SimulationComponent;

pub fn view(component: &SimulationComponent, ctx: &Context<SimulationComponent>) -> Html {
    let link = ctx.link();
    if component.wizard.phase() == Phase::Submitted {
        return submitted_view(component, link);
    }

    let step = component.wizard.step();
    let panel = match step {
        Step::PersonalInfo => personal_info_step(component, link),
        Step::ConsumptionProfile => profile_step(component, link),
        Step::Equipment => equipment_manager(component, link),
        Step::Installation => installation_step(component, link),
        Step::Location => location_step(component, link),
    };

    html! {
        <div class="wizard">
            { progress_bar(step) }
            <div class="wizard-card">
                <h2>{ step.title() }</h2>
                { panel }
                { error_banner(component) }
                { navigation(component, link) }
            </div>
        </div>
    }
}

fn progress_bar(step: Step) -> Html {
    let percent = step.progress_percent();
    html! {
        <div class="wizard-progress">
            <div class="wizard-progress-labels">
                <span>{ format!("Étape {} sur {}", step.number(), Step::COUNT) }</span>
                <span class="accent">{ format!("{percent}%") }</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {percent}%;")}></div>
            </div>
        </div>
    }
}

fn text_field(
    label: &'static str,
    kind: &'static str,
    value: &str,
    placeholder: &'static str,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="field">
            <label>{ label }</label>
            <input type={kind} value={value.to_string()} placeholder={placeholder} {oninput} />
        </div>
    }
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn personal_info_step(component: &SimulationComponent, link: &Scope<SimulationComponent>) -> Html {
    let info = &component.wizard.draft().personal_info;
    html! {
        <>
            <p class="muted">{"Commençons par faire connaissance."}</p>
            <div class="form-grid">
                { text_field("Nom", "text", &info.name, "", link.callback(|e| Msg::SetName(input_value(e)))) }
                { text_field("Prénoms", "text", &info.first_name, "", link.callback(|e| Msg::SetFirstName(input_value(e)))) }
                { text_field("Email", "email", &info.email, "", link.callback(|e| Msg::SetEmail(input_value(e)))) }
                { text_field("Téléphone", "tel", &info.phone, "+225...", link.callback(|e| Msg::SetPhone(input_value(e)))) }
            </div>
        </>
    }
}

fn profile_step(component: &SimulationComponent, link: &Scope<SimulationComponent>) -> Html {
    let selected = component.wizard.draft().profile_kind();
    let choice = |kind: ProfileKind, icon: &'static str, title: &'static str, hint: &'static str| {
        html! {
            <button
                type="button"
                class={classes!("choice-card", (selected == Some(kind)).then_some("selected"))}
                onclick={link.callback(move |_| Msg::SelectProfile(kind))}
            >
                <i class="material-icons">{ icon }</i>
                <h3>{ title }</h3>
                <p class="muted">{ hint }</p>
            </button>
        }
    };

    html! {
        <>
            <p class="muted">{"Comment souhaitez-vous estimer vos besoins ?"}</p>
            <div class="form-grid">
                { choice(ProfileKind::Invoice, "description", "Joindre mes factures",
                    "Plus précis. Téléversez vos 3 à 6 dernières factures CIE.") }
                { choice(ProfileKind::Equipment, "memory", "Lister mes équipements",
                    "Détaillez vos appareils pour une estimation manuelle.") }
            </div>
            if selected == Some(ProfileKind::Invoice) {
                { invoice_picker(component, link) }
            }
        </>
    }
}

fn invoice_picker(component: &SimulationComponent, link: &Scope<SimulationComponent>) -> Html {
    let input_ref = component.file_input_ref.clone();
    let open_dialog = Callback::from(move |_: MouseEvent| {
        if let Some(input) = input_ref.cast::<HtmlInputElement>() {
            input.click();
        }
    });
    let on_files = link.callback(|e: Event| {
        Msg::FilesPicked(take_files(&e.target_unchecked_into::<HtmlInputElement>()))
    });
    let attachments = component.wizard.draft().attachments();

    let rows = attachments.iter().enumerate().map(|(index, attachment)| {
        let (name, size, open) = match attachment {
            Attachment::Upload(file) => {
                let file = file.clone();
                (
                    file.name(),
                    file_size_label(&file),
                    Callback::from(move |_: MouseEvent| {
                        if let Some(url) = object_url(&file) {
                            open_in_new_tab(&url);
                        }
                    }),
                )
            }
            Attachment::Stored(url) => {
                let url = url.clone();
                (
                    format!("Facture {}", index + 1),
                    "Lien externe".to_string(),
                    Callback::from(move |_: MouseEvent| open_in_new_tab(&url)),
                )
            }
        };
        html! {
            <div class="file-row" key={index}>
                <i class="material-icons">{"description"}</i>
                <div class="file-meta">
                    <strong>{ name }</strong>
                    <small class="muted">{ size }</small>
                </div>
                <button type="button" class="icon-btn" title="Voir / Télécharger" onclick={open}>
                    <i class="material-icons">{"download"}</i>
                </button>
                <button
                    type="button"
                    class="icon-btn danger"
                    title="Supprimer"
                    onclick={link.callback(move |_| Msg::RemoveInvoice(index))}
                >
                    <i class="material-icons">{"delete"}</i>
                </button>
            </div>
        }
    });

    html! {
        <div class="invoice-picker">
            <div class="drop-zone" onclick={open_dialog}>
                <i class="material-icons">{"upload"}</i>
                <p>{"Glissez vos factures ici ou cliquez pour parcourir"}</p>
                <small class="muted">{"PDF, JPG, PNG acceptés (Max 5Mo)"}</small>
                <input
                    type="file"
                    multiple={true}
                    accept=".pdf,.jpg,.jpeg,.png"
                    style="display: none;"
                    ref={component.file_input_ref.clone()}
                    onchange={on_files}
                />
            </div>
            if !attachments.is_empty() {
                <h4>{ format!("Fichiers sélectionnés ({})", attachments.len()) }</h4>
                <div class="file-list">{ for rows }</div>
            }
        </div>
    }
}

fn installation_step(component: &SimulationComponent, link: &Scope<SimulationComponent>) -> Html {
    let installation = component.wizard.draft().installation;
    let kind = installation.map(|i| i.kind());
    let material = installation.and_then(|i| i.roof_material());

    let option = |value: InstallationKind, icon: &'static str| {
        html! {
            <label class="radio-card">
                <input
                    type="radio"
                    name="installation"
                    checked={kind == Some(value)}
                    onchange={link.callback(move |_| Msg::SelectInstallation(value))}
                />
                <i class="material-icons">{ icon }</i>
                <span>{ value.label() }</span>
            </label>
        }
    };

    let roofs = RoofMaterial::ALL.into_iter().map(|roof| {
        html! {
            <label class="radio-chip" key={roof.as_str()}>
                <input
                    type="radio"
                    name="roofType"
                    checked={material == Some(roof)}
                    onchange={link.callback(move |_| Msg::SelectRoof(roof))}
                />
                <span>{ roof.label() }</span>
            </label>
        }
    });

    html! {
        <div class="stack">
            { option(InstallationKind::Roof, "home") }
            if kind == Some(InstallationKind::Roof) {
                <div class="roof-grid">{ for roofs }</div>
            }
            { option(InstallationKind::Ground, "place") }
        </div>
    }
}

fn location_step(component: &SimulationComponent, link: &Scope<SimulationComponent>) -> Html {
    let draft = component.wizard.draft();
    html! {
        <div class="stack">
            <div class="field">
                <label>{"Ville / Commune "}<span class="required">{"*"}</span></label>
                <input
                    type="text"
                    placeholder="Ex: Abidjan, Cocody"
                    value={draft.city.clone()}
                    oninput={link.callback(|e| Msg::SetCity(input_value(e)))}
                />
            </div>
            <div class="field">
                <label>{"Autres informations utiles"}</label>
                <textarea
                    rows="4"
                    placeholder="Accès au toit, contraintes particulières..."
                    value={draft.notes.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetNotes(e.target_unchecked_into::<web_sys::HtmlTextAreaElement>().value())
                    })}
                />
            </div>
        </div>
    }
}

fn error_banner(component: &SimulationComponent) -> Html {
    match component.wizard.last_error() {
        Some(err) => html! {
            <div class="error-banner">{ err.user_message() }</div>
        },
        None => html! {},
    }
}

fn navigation(component: &SimulationComponent, link: &Scope<SimulationComponent>) -> Html {
    let wizard = &component.wizard;
    let step = wizard.step();
    let submitting = wizard.phase() == Phase::Submitting;

    let forward = if step.is_last() {
        let label = match (submitting, wizard.is_editing_existing()) {
            (true, _) => "Envoi en cours...",
            (false, true) => "Enregistrer les modifications",
            (false, false) => "Envoyer la demande",
        };
        html! {
            <button
                type="button"
                class="btn primary"
                disabled={!wizard.can_submit()}
                onclick={link.callback(|_| Msg::Submit)}
            >
                { label }
            </button>
        }
    } else {
        html! {
            <button type="button" class="btn primary" onclick={link.callback(|_| Msg::Next)}>
                {"Suivant"}
            </button>
        }
    };

    html! {
        <div class="wizard-nav">
            if step != Step::PersonalInfo {
                <button
                    type="button"
                    class="btn ghost"
                    disabled={submitting}
                    onclick={link.callback(|_| Msg::Back)}
                >
                    {"Précédent"}
                </button>
            } else {
                <span></span>
            }
            { forward }
        </div>
    }
}

fn submitted_view(component: &SimulationComponent, link: &Scope<SimulationComponent>) -> Html {
    let wizard = &component.wizard;
    let first_name = wizard.draft().personal_info.first_name.clone();
    let (title, back) = if wizard.is_editing_existing() {
        ("Demande mise à jour !", "Retour aux collectes")
    } else {
        ("Demande Envoyée !", "Retour à l'accueil")
    };
    html! {
        <div class="wizard-done">
            <div class="done-badge"><i class="material-icons">{"check_circle"}</i></div>
            <h2>{ title }</h2>
            <p>
                {"Merci "}<strong>{ first_name }</strong>
                {" ! Vos informations ont bien été transmises à nos experts. Vous recevrez votre devis personnalisé par email d'ici "}
                <strong class="accent">{"48 heures"}</strong>{"."}
            </p>
            <button type="button" class="btn dark block" onclick={link.callback(|_| Msg::Finish)}>
                { back }
            </button>
        </div>
    }
}
