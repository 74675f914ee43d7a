use common::error::ApiError;
use common::requests::LoginData;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::routes::Page;
use crate::services::auth;

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Done(Result<LoginData, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<LoginData>,
}

pub struct LoginPage {
    email: String,
    password: String,
    loading: bool,
    error: Option<String>,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            loading: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(v) => self.email = v,
            Msg::SetPassword(v) => self.password = v,
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                self.loading = true;
                self.error = None;
                let (email, password) = (self.email.trim().to_string(), self.password.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Done(auth::login(email, password).await));
                });
            }
            Msg::Done(result) => {
                self.loading = false;
                match result {
                    Ok(login) => ctx.props().on_login.emit(login),
                    Err(err) => self.error = Some(err.user_message()),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="login-screen">
                <div class="login-card">
                    <div class="login-header">
                        <a href={Page::Home.hash()} title="Retour à l'accueil">
                            <i class="material-icons">{"wb_sunny"}</i>
                        </a>
                        <h1>{"LYNAYS Admin"}</h1>
                        <p>{"Connectez-vous pour gérer la plateforme"}</p>
                    </div>
                    <form {onsubmit}>
                        if let Some(error) = &self.error {
                            <div class="error-banner">{ error.clone() }</div>
                        }
                        <div class="field">
                            <label>{"Email"}</label>
                            <input
                                type="email"
                                placeholder="admin@lynays.com"
                                value={self.email.clone()}
                                disabled={self.loading}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </div>
                        <div class="field">
                            <label>{"Mot de passe"}</label>
                            <input
                                type="password"
                                value={self.password.clone()}
                                disabled={self.loading}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </div>
                        <button type="submit" class="btn primary block" disabled={self.loading}>
                            { if self.loading { "Connexion..." } else { "Se connecter" } }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}
