use yew::prelude::*;
use yew_icons::Icon;

use crate::components::navigation_header::anchor_target;
use crate::config::SocialLink;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub socials: Vec<SocialLink>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    html! {
        <section class="page-section" id="contact" data-section="contact">
            <h1>{"Contact"}</h1>
            <ul class="contact-list">
                {
                    props.socials.iter().map(|social| {
                        let target = anchor_target(&social.href);
                        html! {
                            <li key={social.id.clone()}>
                                <a href={social.href.clone()} target={target.target} rel={target.rel}>
                                    <Icon icon_id={social.icon.icon_id()} width={"18"} height={"18"} />
                                    <span>{ &social.id }</span>
                                </a>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </section>
    }
}
