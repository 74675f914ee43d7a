use common::model::project::Project;
use common::session::Session;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::card_grid::CardGrid;
use crate::markdown::render_markdown;
use crate::routes::Page;
use crate::services::projects;

const ALL_CATEGORIES: &str = "Tous";

pub enum Msg {
    Loaded(Vec<Project>),
    Failed(String),
    Filter(String),
}

pub struct ProjectsPage {
    projects: Vec<Project>,
    filter: String,
    loading: bool,
    error: Option<String>,
}

impl Component for ProjectsPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match projects::list(&Session::default()).await {
                Ok(list) => link.send_message(Msg::Loaded(list)),
                Err(err) => {
                    error!("projects: {err}");
                    link.send_message(Msg::Failed(err.user_message()));
                }
            }
        });
        Self {
            projects: Vec::new(),
            filter: ALL_CATEGORIES.to_string(),
            loading: true,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(list) => {
                self.projects = list;
                self.loading = false;
            }
            Msg::Failed(message) => {
                self.error = Some(message);
                self.loading = false;
            }
            Msg::Filter(category) => self.filter = category,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let categories = std::iter::once(ALL_CATEGORIES.to_string())
            .chain(Project::categories(&self.projects))
            .map(|category| {
                let active = category == self.filter;
                let value = category.clone();
                html! {
                    <button
                        type="button"
                        class={classes!("chip", active.then_some("active"))}
                        onclick={link.callback(move |_| Msg::Filter(value.clone()))}
                    >
                        { category }
                    </button>
                }
            });
        let visible = self
            .projects
            .iter()
            .filter(|p| self.filter == ALL_CATEGORIES || p.category == self.filter)
            .map(project_card);

        html! {
            <>
                <section class="hero small">
                    <h1>{"Nos Réalisations"}</h1>
                    <p>{"Découvrez quelques-unes de nos installations solaires à travers la Côte d'Ivoire."}</p>
                </section>
                <section class="section">
                    <div class="chips">{ for categories }</div>
                    if self.loading {
                        <div class="spinner"></div>
                    } else if let Some(message) = &self.error {
                        <div class="error-banner">{ message.clone() }</div>
                    } else {
                        <CardGrid min_width={300}>{ for visible }</CardGrid>
                    }
                </section>
                <section class="section cta-band">
                    <h2>{"Vous avez un projet similaire ?"}</h2>
                    <a class="btn primary" href={Page::Simulation.hash()}>{"Demander une étude gratuite"}</a>
                </section>
            </>
        }
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <article class="card project" key={project.id.to_string()}>
            if let Some(image) = &project.image {
                <div class="project-image">
                    <img src={image.clone()} alt={project.title.clone()} />
                    <span class="tag">{ project.category.clone() }</span>
                </div>
            }
            <div class="project-body">
                <h3>{ project.title.clone() }</h3>
                <div class="markdown">{ render_markdown(&project.description) }</div>
                <div class="project-meta">
                    <span><i class="material-icons">{"bolt"}</i>{ project.capacity.clone() }</span>
                    <span><i class="material-icons">{"place"}</i>{ project.location.clone() }</span>
                </div>
            </div>
        </article>
    }
}
