use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::code_block::CodeBlock;
use crate::components::contact::ContactSection;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::project_card::ProjectCard;
use crate::components::reveal::{Reveal, RevealProvider};
use crate::components::stats::AboutStats;
use crate::content::{CODE_SNIPPET, PROJECTS, SKILLS, TIMELINE};
use crate::pages::dashboard::Dashboard;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <RevealProvider>
            <Navbar />
            <main>
                <Hero />

                <section id="about" class="about">
                    <div class="container">
                        <h2 class="section-title">{"About Me"}</h2>
                        <div class="about-content">
                            <div class="about-text">
                                <p>{"I build web platforms end to end, from the database schema to the last pixel of the interface. Most of my work today is in Rust, on both sides of the wire."}</p>
                                <p>{"I care about pages that load fast, forms that never lose input, and dashboards people actually read."}</p>
                            </div>
                            <AboutStats />
                        </div>
                    </div>
                </section>

                <section id="skills" class="skills">
                    <div class="container">
                        <h2 class="section-title">{"Skills"}</h2>
                        <div class="skills-grid">
                            { for SKILLS.iter().map(|(slug, title, items)| html! {
                                <Reveal key={*slug} id={format!("skill-{}", slug)} class={classes!("skill-category")}>
                                    <h3>{ *title }</h3>
                                    <ul>
                                        { for items.iter().map(|item| html! { <li key={*item}>{ *item }</li> }) }
                                    </ul>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="projects" class="projects">
                    <div class="container">
                        <h2 class="section-title">{"Projects"}</h2>
                        <div class="projects-grid">
                            { for PROJECTS.iter().map(|project| html! {
                                <ProjectCard
                                    key={project.slug}
                                    slug={project.slug}
                                    title={project.title}
                                    summary={project.summary}
                                    tags={project.tags.iter().map(|tag| AttrValue::Static(*tag)).collect::<Vec<_>>()}
                                />
                            }) }
                        </div>
                        <div class="code-sample">
                            <h3>{"A taste of the code"}</h3>
                            <CodeBlock code={CODE_SNIPPET} />
                        </div>
                    </div>
                </section>

                <section id="experience" class="experience">
                    <div class="container">
                        <h2 class="section-title">{"Experience"}</h2>
                        <div class="timeline">
                            { for TIMELINE.iter().enumerate().map(|(idx, role)| html! {
                                <Reveal key={idx} id={format!("timeline-{}", idx)} class={classes!("timeline-item")}>
                                    <span class="timeline-date">{ role.period }</span>
                                    <h3>{ role.title }</h3>
                                    <h4>{ role.company }</h4>
                                    <p>{ role.summary }</p>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </section>

                <Dashboard />

                <ContactSection />
            </main>
            <footer class="footer">
                <p>{"© 2024 Jane Doe. Built with Rust and WebAssembly."}</p>
            </footer>
        </RevealProvider>
    }
}
