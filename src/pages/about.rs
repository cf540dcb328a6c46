use yew::prelude::*;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section class="page-section" id="about" data-section="about">
            <h1>{"About"}</h1>
            <p>{"Frontend developer building fast, accessible interfaces for the web."}</p>
        </section>
    }
}
