use yew::{html, Component, Context, Html};

use crate::card_grid::CardGrid;
use crate::routes::Page;

const PROCESS: [(&str, &str, &str); 4] = [
    (
        "bar_chart",
        "1. Simulation",
        "Estimez vos besoins en ligne grâce à notre outil intelligent.",
    ),
    (
        "wb_sunny",
        "2. Étude",
        "Nos ingénieurs valident votre dossier et conçoivent votre système.",
    ),
    (
        "build",
        "3. Installation",
        "Pose complète par nos techniciens certifiés en moins de 48h.",
    ),
    (
        "check_circle",
        "4. Suivi",
        "Maintenance et monitoring de votre production via application.",
    ),
];

pub struct AboutPage;

impl Component for AboutPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AboutPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let steps = PROCESS.iter().map(|(icon, title, text)| {
            html! {
                <div class="card feature">
                    <i class="material-icons">{ *icon }</i>
                    <h3>{ *title }</h3>
                    <p class="muted">{ *text }</p>
                </div>
            }
        });

        html! {
            <>
                <section class="hero compact">
                    <h1>{"L'Expertise Solaire "}<span class="accent">{"LYNAYS BHCI"}</span></h1>
                    <p>{"Nous démocratisons l'accès à l'énergie solaire en Côte d'Ivoire grâce à des solutions innovantes, fiables et sur mesure."}</p>
                </section>
                <section class="section two-columns">
                    <div class="stack">
                        <span class="pill">{"Notre Mission"}</span>
                        <h2>{"Une énergie propre pour tous, sans compromis."}</h2>
                        <p class="muted">{"Chez LYNAYS BHCI, nous croyons que l'indépendance énergétique ne doit pas être un luxe. Notre mission est d'accompagner les ménages et les entreprises dans leur transition énergétique."}</p>
                        <p class="muted">{"Face à la hausse des coûts de l'électricité et aux enjeux climatiques, nous proposons une alternative durable qui allie performance technologique et rentabilité économique."}</p>
                    </div>
                    <div class="stack">
                        <div class="icon-label">
                            <i class="material-icons accent">{"eco"}</i>
                            <div>
                                <strong>{"100% Vert"}</strong>
                                <p class="small muted">{"Réduction empreinte CO2"}</p>
                            </div>
                        </div>
                        <div class="icon-label">
                            <i class="material-icons accent">{"shield"}</i>
                            <div>
                                <strong>{"Garantie 20 ans"}</strong>
                                <p class="small muted">{"Performance assurée"}</p>
                            </div>
                        </div>
                    </div>
                </section>
                <section class="section">
                    <h2>{"Comment ça marche ?"}</h2>
                    <p class="muted">{"Un processus simplifié en 4 étapes pour passer au solaire sans stress."}</p>
                    <CardGrid min_width={220}>{ for steps }</CardGrid>
                </section>
                <section class="section cta-band">
                    <h2>{"Prêt à réduire vos factures ?"}</h2>
                    <p>{"Rejoignez les centaines de foyers qui font déjà confiance à LYNAYS BHCI pour leur énergie quotidienne."}</p>
                    <a class="btn secondary" href={Page::Simulation.hash()}>{"Obtenir mon étude gratuite"}</a>
                </section>
            </>
        }
    }
}
