use chrono::NaiveDate;
use common::error::ApiError;
use common::model::dashboard::{short_date_fr, DashboardStats};
use common::session::Session;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{report, AdminProps};
use crate::card_grid::CardGrid;
use crate::routes::Page;
use crate::services::{collections, users};

pub enum Msg {
    Loaded(DashboardStats),
    Failed(ApiError),
}

pub struct DashboardPage {
    stats: Option<DashboardStats>,
}

/// Local calendar date of the browser.
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

async fn load(session: &Session) -> Result<DashboardStats, ApiError> {
    let requests = collections::list(session).await?;
    let accounts = users::list(session).await?;
    Ok(DashboardStats::compute(&requests, accounts.len(), today()))
}

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = AdminProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let session = ctx.props().session.clone();
        spawn_local(async move {
            link.send_message(match load(&session).await {
                Ok(stats) => Msg::Loaded(stats),
                Err(err) => Msg::Failed(err),
            });
        });
        Self { stats: None }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(stats) => {
                self.stats = Some(stats);
                true
            }
            Msg::Failed(err) => {
                report(&err, &ctx.props().on_unauthorized);
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let Some(stats) = &self.stats else {
            return html! { <div class="spinner"></div> };
        };

        let tile = |icon: &'static str, label: &'static str, value: String| {
            html! {
                <div class="card stat">
                    <i class="material-icons">{ icon }</i>
                    <div>
                        <small class="muted">{ label }</small>
                        <strong>{ value }</strong>
                    </div>
                </div>
            }
        };

        let peak = stats.activity.iter().map(|p| p.collections).max().unwrap_or(0).max(1);
        let bars = stats.activity.iter().map(|point| {
            let height = point.collections * 100 / peak;
            html! {
                <div class="bar" title={format!("{} : {}", point.label, point.collections)}>
                    <div class="bar-fill" style={format!("height: {height}%;")}></div>
                    <small>{ point.label.clone() }</small>
                </div>
            }
        });

        let shares = stats.profiles.iter().map(|share| {
            html! {
                <li>
                    <span>{ share.kind.label() }</span>
                    <strong>{ share.count }</strong>
                </li>
            }
        });

        let recent = stats.recent.iter().map(|item| {
            html! {
                <tr key={item.id.clone()}>
                    <td>{ item.customer.clone() }</td>
                    <td>{ item.city.clone() }</td>
                    <td>{ item.submitted_at.map(short_date_fr).unwrap_or_default() }</td>
                    <td><span class={classes!("status", item.status.as_str().to_lowercase())}>{ item.status.label() }</span></td>
                </tr>
            }
        });

        html! {
            <div class="stack">
                <CardGrid min_width={220}>
                    { tile("assignment", "Demandes totales", stats.total_collections.to_string()) }
                    { tile("task_alt", "Devis envoyés", stats.processed_collections.to_string()) }
                    { tile("trending_up", "Taux de conversion", format!("{}%", stats.conversion_rate)) }
                    { tile("group", "Utilisateurs", stats.total_users.to_string()) }
                </CardGrid>
                <div class="two-columns">
                    <div class="card">
                        <h3>{"Activité des 7 derniers jours"}</h3>
                        <div class="bars">{ for bars }</div>
                    </div>
                    <div class="card">
                        <h3>{"Profils de consommation"}</h3>
                        <ul class="shares">{ for shares }</ul>
                    </div>
                </div>
                <div class="card">
                    <div class="card-header">
                        <h3>{"Demandes récentes"}</h3>
                        <a href={Page::Collections.hash()}>{"Tout voir"}</a>
                    </div>
                    <table class="table">
                        <thead>
                            <tr><th>{"Client"}</th><th>{"Ville"}</th><th>{"Date"}</th><th>{"Statut"}</th></tr>
                        </thead>
                        <tbody>{ for recent }</tbody>
                    </table>
                </div>
            </div>
        }
    }
}
