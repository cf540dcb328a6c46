use yew::prelude::*;
use crate::config::Profile;

#[derive(Properties, PartialEq)]
pub struct HomeSectionProps {
    pub profile: Profile,
}

#[function_component(HomeSection)]
pub fn home_section(props: &HomeSectionProps) -> Html {
    html! {
        <section class="page-section" id="home" data-section="home">
            <h1>{ &props.profile.name }</h1>
            <p class="section-subtitle">{ &props.profile.role }</p>
        </section>
    }
}
