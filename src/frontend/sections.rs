use yew::prelude::*;

use super::{scroll_to_section, use_reveal};
use crate::{
    content::{
        SectionId, SocialLink, ABOUT_CHIPS, ABOUT_HEADLINE, ABOUT_PARAGRAPHS, EDUCATION,
        EXPERIENCE, EXPERTISE, FEATURES, HERO_BLURB, HERO_SOCIAL_COUNT, OWNER, PORTRAIT_URL,
        RESUME_URL, ROLE, SKILL_CATEGORIES, SOCIAL_LINKS,
    },
    motion::{
        entrance_style, progress_style, reveal_style, Effect, Transition, CHILDREN,
        FEATURE_CARDS, HERO, PROJECT_CARD, SECTION_HEADING, SKILL_BARS, SKILL_ROWS,
    },
    projects::{filter_projects, Filter, Project, PROJECTS, REPOSITORIES_URL},
};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub intro: Option<AttrValue>,
    pub revealed: bool,
    pub node: NodeRef,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div
            ref={props.node.clone()}
            class="section-heading"
            style={reveal_style(Effect::FadeInUp, SECTION_HEADING, props.revealed)}
        >
            <h2 class="section-title">{props.title.clone()}</h2>
            { for props.intro.clone().map(|intro| html! { <p class="section-intro">{intro}</p> }) }
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SocialLinksProps {
    pub links: &'static [SocialLink],
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SocialLinks)]
pub fn social_links(props: &SocialLinksProps) -> Html {
    html! {
        <ul class={classes!("social-links", props.class.clone())}>
            { for props.links.iter().map(|link| html! {
                <li>
                    <a
                        class="social-link"
                        href={link.href}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={link.label}
                    >
                        <span aria-hidden="true">{link.glyph}</span>
                    </a>
                </li>
            }) }
        </ul>
    }
}

fn hero_step(index: usize) -> String {
    entrance_style(Effect::FadeInUp, SECTION_HEADING.delayed(HERO.delay(index)))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let on_scroll_down = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::About));

    html! {
        <section id={SectionId::Hero.as_str()} class="hero">
            <div class="hero-backdrop" aria-hidden="true"></div>
            <div class="section-container hero-body">
                <h2 class="hero-greeting" style={hero_step(0)}>{"Hello, I'm"}</h2>
                <h1 class="hero-name" style={hero_step(1)}>
                    <span class="glow-text">{OWNER}</span>
                </h1>
                <div
                    class="gradient-line"
                    style={entrance_style(Effect::GrowX, Transition::new(0.8, HERO.delay(2)))}
                ></div>
                <h3 class="hero-role" style={hero_step(3)}>{ROLE}</h3>
                <p class="hero-blurb" style={hero_step(4)}>{HERO_BLURB}</p>
                <div class="hero-actions" style={hero_step(5)}>
                    <a class="button button-primary" href={SectionId::Contact.href()}>{"Contact Me"}</a>
                    <a class="button button-outline" href={SectionId::Projects.href()}>{"View Projects"}</a>
                </div>
                <div style={hero_step(6)}>
                    <SocialLinks links={&SOCIAL_LINKS[..HERO_SOCIAL_COUNT]} class={classes!("hero-social")} />
                </div>
                <button
                    class="scroll-cue"
                    type="button"
                    aria-label="Scroll down"
                    onclick={on_scroll_down}
                    style={entrance_style(Effect::FadeIn, SECTION_HEADING.delayed(HERO.delay(8)))}
                >
                    <span aria-hidden="true">{"↓"}</span>
                </button>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <section id={SectionId::About.as_str()} class="section-block section-tinted">
            <div class="section-container">
                <SectionHeading title="About Me" node={node} revealed={revealed} />

                <div class="about-grid">
                    <div
                        class="portrait-frame"
                        style={reveal_style(Effect::FadeInUp, SECTION_HEADING.delayed(0.2), revealed)}
                    >
                        <img class="portrait" src={PORTRAIT_URL} alt={OWNER} loading="lazy" />
                    </div>

                    <div style={reveal_style(Effect::FadeInUp, SECTION_HEADING.delayed(0.3), revealed)}>
                        <h3 class="about-headline">{ABOUT_HEADLINE}</h3>
                        <p class="lead">{ABOUT_PARAGRAPHS[0]}</p>
                        <p class="muted">{ABOUT_PARAGRAPHS[1]}</p>
                        <ul class="chip-list">
                            { for ABOUT_CHIPS.iter().map(|chip| html! { <li class="chip">{*chip}</li> }) }
                        </ul>
                        <a class="button button-primary" href={SectionId::Contact.href()}>{"Get In Touch"}</a>
                    </div>
                </div>

                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <article
                            class="card feature-card"
                            style={reveal_style(Effect::FadeInUp, SECTION_HEADING.delayed(FEATURE_CARDS.delay(index)), revealed)}
                        >
                            <h3>{feature.title}</h3>
                            <p class="muted">{feature.description}</p>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <section id={SectionId::Skills.as_str()} class="section-block">
            <div class="section-container">
                <SectionHeading
                    title="Technical Skills"
                    intro="With expertise across various technologies and frameworks, I bring a comprehensive skill set to every project, ensuring robust and efficient solutions."
                    node={node}
                    revealed={revealed}
                />

                <div class="skill-grid">
                    { for SKILL_CATEGORIES.iter().enumerate().map(|(category_index, category)| html! {
                        <article
                            class="card skill-card"
                            style={reveal_style(Effect::FadeIn, Transition::new(0.5, CHILDREN.delay(category_index)), revealed)}
                        >
                            <h3>{category.title}</h3>
                            <ul class="skill-list">
                                { for category.skills.iter().enumerate().map(|(index, skill)| html! {
                                    <li
                                        class="skill-row"
                                        style={reveal_style(Effect::FadeInUp, Transition::new(0.3, SKILL_ROWS.delay(index)), revealed)}
                                    >
                                        <div class="skill-label">
                                            <span>{skill.name}</span>
                                            <span class="accent">{format!("{}%", skill.proficiency)}</span>
                                        </div>
                                        <div
                                            class="skill-bar"
                                            role="progressbar"
                                            aria-label={skill.name}
                                            aria-valuenow={skill.proficiency.to_string()}
                                            aria-valuemin="0"
                                            aria-valuemax="100"
                                        >
                                            <div
                                                class="skill-progress"
                                                style={progress_style(skill.proficiency, Transition::new(1.0, SKILL_BARS.delay(index)), revealed)}
                                            ></div>
                                        </div>
                                    </li>
                                }) }
                            </ul>
                        </article>
                    }) }
                </div>

                <div
                    class="card expertise"
                    style={reveal_style(Effect::FadeInUp, SECTION_HEADING.delayed(0.5), revealed)}
                >
                    <h3>{"Areas of Expertise"}</h3>
                    <div class="expertise-grid">
                        { for EXPERTISE.iter().map(|area| html! {
                            <div class="expertise-item">
                                <h4>{area.title}</h4>
                                <p class="muted">{area.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    index: usize,
    revealed: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let style = reveal_style(
        Effect::FadeInUp,
        PROJECT_CARD.delayed(CHILDREN.delay(props.index)),
        props.revealed,
    );

    html! {
        <article class="card project-card" style={style}>
            <div class="project-media">
                <img src={project.image} alt={project.title} loading="lazy" />
                <span class="badge">{project.category.as_str()}</span>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p class="muted clamp">{project.description}</p>
                <ul class="tag-list">
                    { for project.technologies.iter().map(|tech| html! { <li class="tag">{*tech}</li> }) }
                </ul>
                <div class="project-links">
                    { for project.live_url.map(|href| html! {
                        <a class="icon-link" href={href} target="_blank" rel="noopener noreferrer" aria-label="Live Demo">{"↗"}</a>
                    }) }
                    { for project.repo_url.map(|href| html! {
                        <a class="icon-link" href={href} target="_blank" rel="noopener noreferrer" aria-label="GitHub Repository">{"</>"}</a>
                    }) }
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let (node, revealed) = use_reveal();
    let active_filter = use_state(Filter::default);
    let visible = filter_projects(PROJECTS, *active_filter);

    html! {
        <section id={SectionId::Projects.as_str()} class="section-block section-tinted">
            <div class="section-container">
                <SectionHeading
                    title="Recent Projects"
                    intro="A showcase of my recent work, featuring a variety of projects across different domains and technologies."
                    node={node}
                    revealed={revealed}
                />

                <div
                    class="filter-bar"
                    role="group"
                    aria-label="Filter projects"
                    style={reveal_style(Effect::FadeInUp, SECTION_HEADING, revealed)}
                >
                    { for Filter::ALL.into_iter().map(|filter| {
                        let selected = *active_filter == filter;
                        let onclick = {
                            let active_filter = active_filter.clone();
                            Callback::from(move |_: MouseEvent| {
                                log::debug!("project filter: {}", filter.as_str());
                                active_filter.set(filter);
                            })
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("filter-button", selected.then_some("is-active"))}
                                aria-pressed={selected.to_string()}
                                onclick={onclick}
                            >
                                {filter.label()}
                            </button>
                        }
                    }) }
                </div>

                <div class="project-grid">
                    { for visible.into_iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.title} project={project} index={index} revealed={revealed} />
                    }) }
                </div>

                <div
                    class="centered"
                    style={reveal_style(Effect::FadeInUp, SECTION_HEADING.delayed(0.5), revealed)}
                >
                    <a class="button button-outline" href={REPOSITORIES_URL} target="_blank" rel="noopener noreferrer">
                        {"View More on GitHub"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Resume)]
pub fn resume() -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <section id={SectionId::Resume.as_str()} class="section-block">
            <div class="section-container">
                <SectionHeading
                    title="Resume & Experience"
                    intro="My professional journey, education, and achievements. Download my complete resume for a detailed overview."
                    node={node}
                    revealed={revealed}
                >
                    <a class="button button-primary" href={RESUME_URL} target="_blank" rel="noopener noreferrer" download="">
                        {"Download Resume"}
                    </a>
                </SectionHeading>

                <div class="resume-grid">
                    <div
                        class="resume-work"
                        style={reveal_style(Effect::FadeInUp, SECTION_HEADING.delayed(0.1), revealed)}
                    >
                        <h3>{"Work Experience"}</h3>
                        <ol class="timeline">
                            { for EXPERIENCE.iter().map(|job| html! {
                                <li class="timeline-item card">
                                    <div class="timeline-head">
                                        <h4>{job.title}</h4>
                                        <span class="badge">{job.duration}</span>
                                    </div>
                                    <p class="accent">{job.company}</p>
                                    <p class="muted">{job.description}</p>
                                    <ul class="tag-list">
                                        { for job.technologies.iter().map(|tech| html! { <li class="tag">{*tech}</li> }) }
                                    </ul>
                                </li>
                            }) }
                        </ol>
                    </div>

                    <div style={reveal_style(Effect::FadeInUp, SECTION_HEADING.delayed(0.3), revealed)}>
                        <h3>{"Education"}</h3>
                        { for EDUCATION.iter().map(|entry| html! {
                            <article class="card">
                                <h4>{entry.degree}</h4>
                                <p class="accent">{entry.institution}</p>
                                <p class="small">{entry.duration}</p>
                                <p class="muted small">{entry.description}</p>
                            </article>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="section-container footer-body">
                <p class="muted small">{format!("© {year} {OWNER}. All rights reserved.")}</p>
                <SocialLinks links={SOCIAL_LINKS} />
                <a class="back-to-top" href={SectionId::Hero.href()}>{"Back to top ↑"}</a>
            </div>
        </footer>
    }
}
