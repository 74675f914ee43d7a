use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, NodeRef, Properties};

pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: String,
    /// Called by the close button; the owner decides when to hide the sheet.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let node_ref = props.node_ref.clone();
        let on_close = props.on_close.clone();
        let close = Callback::from(move |_| {
            close_top_sheet(node_ref.clone());
            if let Some(on_close) = &on_close {
                on_close.emit(());
            }
        });
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="icon-btn" title="Fermer" onclick={close}>
                        <i class="material-icons">{"close"}</i>
                    </button>
                </div>
                <div class="top-sheet-body">
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle(top_sheet_ref, false);
}

/// Deferred by a frame-ish delay so a sheet rendered in the same update
/// exists in the DOM before its class changes.
fn toggle(top_sheet_ref: NodeRef, show: bool) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        if let Some(sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
            let classes = sheet.class_list();
            let _ = if show {
                classes.add_1("show")
            } else {
                classes.remove_1("show")
            };
        }
    });
}
