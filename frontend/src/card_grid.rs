use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Minimum card width in pixels; the grid fits as many columns as it can.
    #[prop_or(280)]
    pub min_width: u32,
    #[prop_or(16)]
    pub gap: u32,
    pub children: Children,
}

/// Responsive grid of cards (stat tiles, projects, users).
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: {}px;
             width: 100%;",
            props.min_width, props.gap
        );

        html! {
            <div class="card-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
