use yew::prelude::*;

struct Project {
    name: &'static str,
    summary: &'static str,
}

const PROJECTS: &[Project] = &[
    Project { name: "Portfolio", summary: "This site: a single page with a responsive section header." },
    Project { name: "Dashboard", summary: "Data-heavy admin views with client-side filtering." },
];

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    html! {
        <section class="page-section" id="projects" data-section="projects">
            <h1>{"Projects"}</h1>
            <div class="project-grid">
                {
                    PROJECTS.iter().map(|project| html! {
                        <article key={project.name} class="project-card">
                            <h2>{ project.name }</h2>
                            <p>{ project.summary }</p>
                        </article>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
