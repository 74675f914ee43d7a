use base64::{engine::general_purpose, Engine as _};
use common::error::ApiError;
use common::model::project::{Project, ProjectForm};
use gloo_file::futures::read_as_bytes;
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{report, AdminProps};
use crate::card_grid::CardGrid;
use crate::components::feedback::{alert, confirm, show_toast, ToastKind};
use crate::markdown::render_markdown;
use crate::services::projects;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

#[derive(Clone, Copy)]
pub enum Field {
    Title,
    Category,
    Capacity,
    Location,
    Date,
    Description,
}

pub enum Msg {
    Reload,
    Loaded(Vec<Project>),
    OpenNew,
    OpenEdit(i64),
    Edit(Field, String),
    ImagePicked(File),
    PreviewReady(String),
    Save,
    Saved,
    Delete(i64),
    Deleted(i64),
    Failed(ApiError),
}

pub struct AdminProjectsPage {
    projects: Vec<Project>,
    loading: bool,
    editing: Option<i64>,
    form: ProjectForm,
    image: Option<File>,
    preview: Option<String>,
    saving: bool,
    sheet_ref: NodeRef,
}

impl Component for AdminProjectsPage {
    type Message = Msg;
    type Properties = AdminProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Reload);
        Self {
            projects: Vec::new(),
            loading: true,
            editing: None,
            form: ProjectForm::default(),
            image: None,
            preview: None,
            saving: false,
            sheet_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Reload => {
                let link = ctx.link().clone();
                let session = props.session.clone();
                spawn_local(async move {
                    link.send_message(match projects::list(&session).await {
                        Ok(list) => Msg::Loaded(list),
                        Err(err) => Msg::Failed(err),
                    });
                });
                return false;
            }
            Msg::Loaded(list) => {
                self.projects = list;
                self.loading = false;
            }
            Msg::OpenNew => {
                self.editing = None;
                self.form = ProjectForm::default();
                self.image = None;
                self.preview = None;
                open_top_sheet(self.sheet_ref.clone());
            }
            Msg::OpenEdit(id) => {
                let Some(project) = self.projects.iter().find(|p| p.id == id) else {
                    return false;
                };
                self.editing = Some(id);
                self.form = ProjectForm::from_project(project);
                self.image = None;
                self.preview = project.image.clone();
                open_top_sheet(self.sheet_ref.clone());
            }
            Msg::Edit(field, value) => {
                let target = match field {
                    Field::Title => &mut self.form.title,
                    Field::Category => &mut self.form.category,
                    Field::Capacity => &mut self.form.capacity,
                    Field::Location => &mut self.form.location,
                    Field::Date => &mut self.form.date,
                    Field::Description => &mut self.form.description,
                };
                *target = value;
            }
            Msg::ImagePicked(file) => {
                let mime = file.type_();
                let blob = gloo_file::File::from(file.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    if let Ok(bytes) = read_as_bytes(&blob).await {
                        let encoded = general_purpose::STANDARD.encode(&bytes);
                        link.send_message(Msg::PreviewReady(format!("data:{mime};base64,{encoded}")));
                    }
                });
                self.image = Some(file);
            }
            Msg::PreviewReady(url) => self.preview = Some(url),
            Msg::Save => {
                if self.saving {
                    return false;
                }
                if !self.form.is_complete() {
                    alert("Champs manquants", "Le titre et la catégorie sont obligatoires.");
                    return false;
                }
                self.saving = true;
                let (id, form, image) = (self.editing, self.form.clone(), self.image.clone());
                let link = ctx.link().clone();
                let session = props.session.clone();
                spawn_local(async move {
                    link.send_message(
                        match projects::save(id, &form, image.as_ref(), &session).await {
                            Ok(()) => Msg::Saved,
                            Err(err) => Msg::Failed(err),
                        },
                    );
                });
            }
            Msg::Saved => {
                self.saving = false;
                close_top_sheet(self.sheet_ref.clone());
                show_toast("Projet enregistré.", ToastKind::Success);
                ctx.link().send_message(Msg::Reload);
            }
            Msg::Delete(id) => {
                if !confirm("Supprimer ce projet ?") {
                    return false;
                }
                let link = ctx.link().clone();
                let session = props.session.clone();
                spawn_local(async move {
                    link.send_message(match projects::delete(id, &session).await {
                        Ok(()) => Msg::Deleted(id),
                        Err(err) => Msg::Failed(err),
                    });
                });
                return false;
            }
            Msg::Deleted(id) => {
                self.projects.retain(|p| p.id != id);
                show_toast("Projet supprimé.", ToastKind::Success);
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
        let cards = self.projects.iter().map(|project| {
            let (edit, delete) = (project.id, project.id);
            html! {
                <div class="card project" key={project.id.to_string()}>
                    if let Some(image) = &project.image {
                        <img src={image.clone()} alt={project.title.clone()} />
                    }
                    <div class="project-body">
                        <span class="tag">{ project.category.clone() }</span>
                        <h3>{ project.title.clone() }</h3>
                        <small class="muted">{ format!("{} · {}", project.capacity, project.location) }</small>
                    </div>
                    <div class="actions">
                        <button class="icon-btn" title="Modifier" onclick={link.callback(move |_| Msg::OpenEdit(edit))}>
                            <i class="material-icons">{"edit"}</i>
                        </button>
                        <button class="icon-btn danger" title="Supprimer" onclick={link.callback(move |_| Msg::Delete(delete))}>
                            <i class="material-icons">{"delete"}</i>
                        </button>
                    </div>
                </div>
            }
        });
        let title = if self.editing.is_some() { "Modifier le projet" } else { "Nouveau projet" };

        html! {
            <div class="stack">
                <div class="toolbar">
                    <span></span>
                    <button class="btn primary" onclick={link.callback(|_| Msg::OpenNew)}>
                        <i class="material-icons">{"add"}</i>{" Nouveau projet"}
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

impl AdminProjectsPage {
    fn form_view(&self, link: &Scope<Self>) -> Html {
        let form = &self.form;
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
        let on_image = link.batch_callback(|e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            input.files().and_then(|files| files.get(0)).map(Msg::ImagePicked)
        });

        html! {
            <div class="stack">
                <div class="form-grid">
                    { field("Titre", "text", &form.title, Field::Title) }
                    { field("Catégorie", "text", &form.category, Field::Category) }
                    { field("Puissance", "text", &form.capacity, Field::Capacity) }
                    { field("Lieu", "text", &form.location, Field::Location) }
                    { field("Date", "date", &form.date, Field::Date) }
                </div>
                <div class="field">
                    <label>{"Description (Markdown)"}</label>
                    <textarea
                        rows="5"
                        value={form.description.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::Edit(Field::Description, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />
                </div>
                if !form.description.trim().is_empty() {
                    <div class="markdown preview">{ render_markdown(&form.description) }</div>
                }
                <div class="field">
                    <label>{"Image"}</label>
                    <input type="file" accept="image/*" onchange={on_image} />
                    if let Some(preview) = &self.preview {
                        <img class="image-preview" src={preview.clone()} alt="Aperçu" />
                    }
                </div>
                <button class="btn primary block" disabled={self.saving} onclick={link.callback(|_| Msg::Save)}>
                    { if self.saving { "Enregistrement..." } else { "Enregistrer" } }
                </button>
            </div>
        }
    }
}
