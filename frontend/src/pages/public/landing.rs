use yew::{html, Component, Context, Html};

use crate::card_grid::CardGrid;
use crate::routes::Page;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "eco",
        "Écologique",
        "Produisez une énergie verte et réduisez votre empreinte carbone dès le premier jour d'installation.",
    ),
    (
        "savings",
        "Économique",
        "Réduisez jusqu'à 70% votre facture d'électricité et rentabilisez votre investissement rapidement.",
    ),
    (
        "verified",
        "Fiable",
        "Matériel garanti, maintenance incluse et suivi de production en temps réel.",
    ),
];

pub struct LandingPage;

impl Component for LandingPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        LandingPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let features = FEATURES.iter().map(|(icon, title, text)| {
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
                <section class="hero">
                    <span class="pill">{"Innovation Durable"}</span>
                    <h1>{"Devenez votre propre fournisseur d'électricité."}</h1>
                    <p>{"Réduisez vos factures et adoptez une énergie propre avec nos solutions solaires sur mesure pour particuliers et entreprises."}</p>
                    <a class="btn secondary" href={Page::Simulation.hash()}>{"Commencer la simulation"}</a>
                    <p class="small">{"* Devis gratuit sous 48h sans engagement."}</p>
                </section>
                <section class="section">
                    <h2>{"Pourquoi choisir LYNAYS BHCI ?"}</h2>
                    <CardGrid>{ for features }</CardGrid>
                </section>
                <section class="section cta-band">
                    <h2>{"Prêt à passer au solaire ?"}</h2>
                    <p>{"Obtenez une estimation précise de vos besoins en moins de 5 minutes."}</p>
                    <a class="btn primary" href={Page::Simulation.hash()}>{"Demander un devis"}</a>
                </section>
            </>
        }
    }
}
