use yew::prelude::*;

mod equipment;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SimulationProps;
pub use state::SimulationComponent;

impl Component for SimulationComponent {
    type Message = Msg;
    type Properties = SimulationProps;

    fn create(ctx: &Context<Self>) -> Self {
        SimulationComponent::new(ctx.props().record.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        crate::components::feedback::set_window_dirty_flag(false);
    }
}
