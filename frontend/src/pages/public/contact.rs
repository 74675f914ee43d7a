use common::error::ApiError;
use common::model::contact::ContactMessagePayload;
use common::model::settings::SystemSettings;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::feedback::{alert, show_toast, ToastKind};
use crate::services::contact;

pub enum Msg {
    SetName(String),
    SetEmail(String),
    SetSubject(String),
    SetMessage(String),
    Send,
    Sent(Result<(), ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or_default]
    pub settings: Option<SystemSettings>,
}

pub struct ContactPage {
    form: ContactMessagePayload,
    sending: bool,
    sent: bool,
}

impl Component for ContactPage {
    type Message = Msg;
    type Properties = ContactProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactMessagePayload::default(),
            sending: false,
            sent: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(v) => self.form.name = v,
            Msg::SetEmail(v) => self.form.email = v,
            Msg::SetSubject(v) => self.form.subject = v,
            Msg::SetMessage(v) => self.form.message = v,
            Msg::Send => {
                if self.sending {
                    return false;
                }
                if let Err(err) = self.form.validate() {
                    alert(err.title(), &err.to_string());
                    return false;
                }
                self.sending = true;
                let payload = self.form.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = contact::send(&payload).await;
                    link.send_message(Msg::Sent(result));
                });
            }
            Msg::Sent(result) => {
                self.sending = false;
                match result {
                    Ok(()) => {
                        self.sent = true;
                        self.form = ContactMessagePayload::default();
                        show_toast("Message envoyé.", ToastKind::Success);
                    }
                    Err(err) => alert("Erreur", &err.user_message()),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let input = |label: &'static str, kind: &'static str, value: &str, to_msg: fn(String) -> Msg| {
            html! {
                <div class="field">
                    <label>{ label }</label>
                    <input
                        type={kind}
                        value={value.to_string()}
                        oninput={link.callback(move |e: InputEvent| {
                            to_msg(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
            }
        };
        let details = ctx.props().settings.as_ref().map(|s| {
            html! {
                <div class="card contact-details">
                    <p><i class="material-icons">{"mail"}</i>{ s.contact_email.clone() }</p>
                    <p><i class="material-icons">{"call"}</i>{ s.contact_phone.clone() }</p>
                </div>
            }
        });

        html! {
            <section class="section narrow">
                <h1>{"Contactez-nous"}</h1>
                { details }
                if self.sent {
                    <div class="notice success">{"Merci ! Nous vous répondrons dans les plus brefs délais."}</div>
                }
                <div class="card">
                    <div class="form-grid">
                        { input("Nom complet", "text", &self.form.name, Msg::SetName) }
                        { input("Email", "email", &self.form.email, Msg::SetEmail) }
                    </div>
                    { input("Sujet", "text", &self.form.subject, Msg::SetSubject) }
                    <div class="field">
                        <label>{"Message"}</label>
                        <textarea
                            rows="6"
                            value={self.form.message.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetMessage(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                            })}
                        />
                    </div>
                    <button
                        type="button"
                        class="btn primary block"
                        disabled={self.sending}
                        onclick={link.callback(|_| Msg::Send)}
                    >
                        { if self.sending { "Envoi..." } else { "Envoyer le message" } }
                    </button>
                </div>
            </section>
        }
    }
}
