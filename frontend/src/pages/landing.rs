use crate::components::reveal::Reveal;
use crate::config;
use crate::pages::content::{FLOW_STEPS, PRINCIPLES, PRODUCTS, REASONS, ROADMAP, SKILLS, TECHNOLOGIES};
use crate::utils::navigation::{on_click_scroll, Section};
use crate::waitlist::form::WaitlistForm;
use yew::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <style>{PAGE_CSS}</style>

            <header class="hero">
                <div class="hero-grid" aria-hidden="true"></div>
                <div class="hero-orbit hero-orbit-left" aria-hidden="true"></div>
                <div class="hero-orbit hero-orbit-right" aria-hidden="true"></div>
                <Reveal class={classes!("hero-content")} amount={0.0}>
                    <div class="hero-header">
                        <div class="hero-badge">
                            <i class="fas fa-wand-magic-sparkles"></i>
                            <span>{"Build Faster. Think Smarter. Ship Better."}</span>
                        </div>
                        <h1 class="hero-title">{"Build SaaS Products at Lightning Speed"}</h1>
                        <p class="hero-subtitle">
                            {format!("{} is an AI-powered ecosystem of tools built for developers, founders, and builders who want to ship faster without sacrificing architecture, reliability, or UX.", config::BRAND_NAME)}
                        </p>
                        <div class="hero-cta-group">
                            <button class="hero-cta" onclick={on_click_scroll(Section::Products)}>
                                <span>{"Explore Products"}</span>
                                <i class="fas fa-arrow-right"></i>
                            </button>
                            <button class="hero-ghost" onclick={on_click_scroll(Section::AboutFounder)}>
                                {format!("Learn About {}", config::BRAND_NAME)}
                            </button>
                        </div>
                    </div>
                    <div class="glass-panel">
                        <div class="panel-head">
                            <div>
                                <p class="panel-label">{config::BRAND_NAME}</p>
                                <p>{"AI-first developer stack"}</p>
                            </div>
                            <span class="badge">{"Developer-first"}</span>
                        </div>
                        <div class="panel-row">
                            <span><i class="fas fa-code"></i>{" Python • React • Flutter"}</span>
                            <span class="chip">{"Full-stack"}</span>
                        </div>
                        <pre class="panel-code"><code>{"stack := { ui: 'Tailwind + shadcn', api: 'API-first', ai: 'LLM-powered', deploy: 'GitHub' }"}</code></pre>
                        <div class="panel-grid">
                            <div>
                                <p class="panel-title">{"Execution"}</p>
                                <p>{"Rapid prototyping, shipping in days not months."}</p>
                            </div>
                            <div>
                                <p class="panel-title">{"Systems"}</p>
                                <p>{"Clean architecture built to scale with you."}</p>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </header>

            <section class="section">
                <div class="section-inner">
                    <div class="section-intro">
                        <p class="section-label">{"Product philosophy"}</p>
                        <h2>{"A stack designed for builders, not marketing decks."}</h2>
                        <p class="section-subtitle">
                            {format!("Every decision in {} starts from the command line and design file: clear APIs, predictable behavior, and interfaces that feel invisible.", config::BRAND_NAME)}
                        </p>
                    </div>
                    <div class="card-grid four">
                        { for PRINCIPLES.iter().map(|item| html! {
                            <div class="card" key={*item}>
                                <span class="pill"><i class="fas fa-diagram-project"></i>{" Principle"}</span>
                                <p class="card-title">{*item}</p>
                                <p class="card-copy">{"Opinionated defaults that favor clarity, maintainability, and sane trade-offs."}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Products.id()} class="section section-alt">
                <div class="section-inner">
                    <Reveal class={classes!("section-intro")}>
                        <span class="section-label">{format!("SaaS Products by {}", config::BRAND_NAME)}</span>
                        <h2>{"An ecosystem of tools for modern builders."}</h2>
                        <p class="section-subtitle">
                            {format!("From AI developer companions to automation pipelines, {} ships focused utilities that plug into your existing workflow.", config::BRAND_NAME)}
                        </p>
                    </Reveal>
                    <Reveal class={classes!("card-grid", "three")} amount={0.2}>
                        { for PRODUCTS.iter().map(|product| html! {
                            <article class="card product-card" key={product.title}>
                                <div class="product-head">
                                    <div class="product-icon"><i class={classes!("fas", product.icon)}></i></div>
                                    <div>
                                        <h3 class="card-title">{product.title}</h3>
                                        <p class="card-copy">{product.copy}</p>
                                    </div>
                                    <span class="badge">{product.status}</span>
                                </div>
                                <div class="product-foot">
                                    <span>{"Designed for developers"}</span>
                                    <span><i class="fas fa-code-branch"></i>{" Versioned releases"}</span>
                                </div>
                            </article>
                        }) }
                    </Reveal>
                </div>
            </section>

            <section class="section">
                <Reveal class={classes!("section-inner", "split")}>
                    <div>
                        <span class="section-label">{format!("Why {}", config::BRAND_NAME)}</span>
                        <h2>{"Built like a product you would design yourself."}</h2>
                        <p class="section-subtitle">
                            {format!("{} is opinionated about speed, maintainability, and DX. No bloated dashboards, no noisy onboarding, just clear tools that respect your time.", config::BRAND_NAME)}
                        </p>
                        <div class="reason-list">
                            { for REASONS.iter().map(|item| html! {
                                <div class="reason" key={*item}>
                                    <i class="fas fa-arrow-right"></i>
                                    <p>{*item}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div>
                        <div class="card">
                            <div class="panel-head">
                                <p class="panel-label">{"Flow preview"}</p>
                                <span class="badge">{"From idea → deploy"}</span>
                            </div>
                            { for FLOW_STEPS.iter().enumerate().map(|(index, step)| html! {
                                <div class="flow-step" key={*step}>
                                    <span class="flow-index">{(index + 1).to_string()}</span>
                                    <span>{*step}</span>
                                </div>
                            }) }
                        </div>
                        <div class="glass-panel">
                            <p class="panel-label">{"UI snapshot"}</p>
                            <p>{"Built around modern primitives: Tailwind CSS, Radix UI, shadcn/ui, Framer Motion and Lucide icons for expressive yet minimal interfaces."}</p>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section id={Section::AboutFounder.id()} class="section section-alt">
                <div class="section-inner split">
                    <div>
                        <span class="section-label">{"Built by a modern builder"}</span>
                        <h2>{"Girish Lade, engineer, designer, SaaS founder."}</h2>
                        <p class="section-subtitle">
                            {"Based in Solapur, Maharashtra, India, Girish works across frontend, backend, mobile, and AI systems to craft products where design, logic, and automation come together."}
                        </p>
                        <p class="card-copy">
                            {format!("{} started as a personal mission: remove friction from building and scaling software. Every tool, dashboard, and service is designed to feel like an extension of your editor: opinionated, discoverable, and easy to wire into real systems.", config::BRAND_NAME)}
                        </p>
                    </div>
                    <div>
                        <div class="card">
                            <div class="panel-head">
                                <div>
                                    <p class="card-title">{"Girish Lade"}</p>
                                    <p class="card-copy">{"Engineer • UI/UX designer • SaaS founder"}</p>
                                </div>
                                <span class="chip">{"Solapur, Maharashtra"}</span>
                            </div>
                            <p class="panel-title">{"What he builds"}</p>
                            <p class="card-copy">{"AI tools, automation systems, and developer-first SaaS products."}</p>
                            <p class="panel-title">{"How he works"}</p>
                            <p class="card-copy">{"Rapid execution, clean UI, robust architecture, and measurable outcomes."}</p>
                        </div>
                        <div class="card-grid two">
                            { for SKILLS.iter().map(|skill| html! {
                                <div class="skill" key={*skill}>
                                    <span>{*skill}</span>
                                    <span class="muted">{"Production-grade"}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-inner">
                    <div class="section-intro">
                        <span class="section-label">{"Ecosystem"}</span>
                        <h2>{"Technologies in the stack."}</h2>
                        <p class="section-subtitle">
                            {"Opinionated choices around reliability and DX: React, Next.js, Flutter, Firebase, Supabase, Python, modern APIs and GitHub workflows."}
                        </p>
                    </div>
                    <div class="card-grid four">
                        { for TECHNOLOGIES.iter().map(|tech| html! {
                            <div class="card tech" key={tech.label}>
                                <span><i class={classes!("fas", tech.icon)}></i>{" "}{tech.label}</span>
                                <span class="muted">{"Core stack"}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-alt">
                <div class="section-inner">
                    <Reveal class={classes!("section-intro")}>
                        <span class="section-label">{"Vision & roadmap"}</span>
                        <h2>{format!("Where {} is headed.", config::BRAND_NAME)}</h2>
                        <p class="section-subtitle">{"A calm, open ecosystem for developers, from prototypes to production workloads."}</p>
                    </Reveal>
                    <Reveal class={classes!("card-grid", "five")} amount={0.2}>
                        { for ROADMAP.iter().enumerate().map(|(index, step)| html! {
                            <div class="card" key={step.title}>
                                <span class="muted">{format!("Step {}", index + 1)}</span>
                                <p class="card-title">{step.title}</p>
                                <p class="card-copy">{step.copy}</p>
                            </div>
                        }) }
                    </Reveal>
                </div>
            </section>

            <section class="section">
                <div class="section-inner cta">
                    <span class="section-label">{"Call to action"}</span>
                    <h2>{"Join the next wave of developer tools."}</h2>
                    <p class="section-subtitle">
                        {format!("Follow the journey as {} ships opinionated, AI-powered products for developers, indie hackers, and early-stage teams.", config::BRAND_NAME)}
                    </p>
                    <WaitlistForm />
                    <p class="muted"><i class="fas fa-users"></i>{" Follow the journey and get early product drops."}</p>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-inner">
                    <div>
                        <p class="card-title">{config::BRAND_NAME}</p>
                        <p class="muted">
                            {"Modern, AI-powered developer tools and SaaS products crafted by Girish Lade to help builders ship better software."}
                        </p>
                    </div>
                    <nav class="footer-nav">
                        <button class="story-link" onclick={on_click_scroll(Section::Products)}>{"Products"}</button>
                        <button class="story-link" onclick={on_click_scroll(Section::AboutFounder)}>{"About"}</button>
                        <a class="story-link" href={config::get_github_url()} target="_blank" rel="noreferrer">{"GitHub"}</a>
                        <a class="story-link" href={config::get_contact_href()}>{"Contact"}</a>
                    </nav>
                </div>
            </footer>
        </div>
    }
}

const PAGE_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #0b0d12;
        color: #e8ebf2;
        font-family: Inter, system-ui, sans-serif;
    }
    .hero {
        position: relative;
        overflow: hidden;
        padding: 6rem 2rem;
        background: radial-gradient(circle at top left, rgba(126, 178, 255, 0.25), transparent 60%);
    }
    .hero-grid {
        position: absolute;
        inset: 0;
        pointer-events: none;
        background-image: linear-gradient(rgba(255,255,255,0.04) 1px, transparent 1px),
            linear-gradient(90deg, rgba(255,255,255,0.04) 1px, transparent 1px);
        background-size: 40px 40px;
    }
    .hero-orbit {
        position: absolute;
        width: 18rem;
        height: 18rem;
        border-radius: 50%;
        filter: blur(64px);
        opacity: 0.6;
        pointer-events: none;
        animation: spin 30s linear infinite;
    }
    .hero-orbit-left { left: -6rem; top: -6rem; background: rgba(126, 178, 255, 0.3); }
    .hero-orbit-right { right: -5rem; bottom: -6rem; background: rgba(180, 126, 255, 0.3); animation-direction: reverse; }
    @keyframes spin { to { transform: rotate(360deg); } }
    .hero-content {
        position: relative;
        z-index: 1;
        max-width: 1100px;
        margin: 0 auto;
        display: flex;
        flex-wrap: wrap;
        gap: 2.5rem;
        align-items: center;
        justify-content: space-between;
    }
    .hero-header { max-width: 36rem; }
    .hero-badge {
        display: inline-flex;
        gap: 0.5rem;
        align-items: center;
        padding: 0.25rem 0.75rem;
        border: 1px solid rgba(126, 178, 255, 0.3);
        border-radius: 999px;
        font-size: 0.75rem;
        color: #7EB2FF;
    }
    .hero-title {
        font-size: 3.25rem;
        line-height: 1.1;
        margin: 1rem 0;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle, .section-subtitle { color: #a7adbb; line-height: 1.6; }
    .hero-cta-group { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 1.5rem; }
    .hero-cta {
        display: inline-flex;
        gap: 0.5rem;
        align-items: center;
        padding: 0.85rem 1.6rem;
        border: none;
        border-radius: 10px;
        background: linear-gradient(45deg, #1E90FF, #7EB2FF);
        color: #fff;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.2s ease;
    }
    .hero-cta:hover, .hero-ghost:hover { transform: scale(1.03); }
    .hero-ghost {
        padding: 0.85rem 1.4rem;
        border: none;
        border-radius: 10px;
        background: transparent;
        color: #e8ebf2;
        cursor: pointer;
        transition: transform 0.2s ease;
    }
    .glass-panel, .card {
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(255, 255, 255, 0.08);
        border-radius: 16px;
        padding: 1.25rem;
        margin-bottom: 1rem;
    }
    .glass-panel { max-width: 28rem; backdrop-filter: blur(12px); }
    .panel-head, .panel-row, .product-foot, .skill, .tech {
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 0.75rem;
    }
    .panel-label { font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.08em; color: #a7adbb; }
    .panel-title, .card-title { font-weight: 600; margin: 0.25rem 0; }
    .panel-code { overflow-x: auto; font-size: 0.7rem; color: #a7adbb; }
    .panel-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; font-size: 0.75rem; }
    .badge, .chip, .pill {
        border: 1px solid rgba(126, 178, 255, 0.4);
        border-radius: 999px;
        padding: 0.15rem 0.6rem;
        font-size: 0.7rem;
        color: #7EB2FF;
        white-space: nowrap;
    }
    .section { padding: 5rem 2rem; }
    .section-alt { background: rgba(255, 255, 255, 0.02); }
    .section-inner { max-width: 1100px; margin: 0 auto; }
    .section-intro { margin-bottom: 2rem; }
    .section-label { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; color: #7EB2FF; }
    .section h2 { font-size: 2rem; margin: 0.5rem 0; }
    .split { display: grid; grid-template-columns: 1.2fr 1fr; gap: 2.5rem; align-items: start; }
    .card-grid { display: grid; gap: 1rem; }
    .card-grid.two { grid-template-columns: repeat(2, 1fr); }
    .card-grid.three { grid-template-columns: repeat(3, 1fr); }
    .card-grid.four { grid-template-columns: repeat(4, 1fr); }
    .card-grid.five { grid-template-columns: repeat(5, 1fr); }
    .card-copy, .muted { color: #a7adbb; font-size: 0.85rem; }
    .product-card { transition: transform 0.2s ease; }
    .product-card:hover { transform: translateY(-4px); }
    .product-head { display: flex; gap: 0.75rem; align-items: flex-start; }
    .product-icon {
        flex: none;
        width: 2.25rem;
        height: 2.25rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(126, 178, 255, 0.1);
        color: #7EB2FF;
    }
    .product-foot { font-size: 0.7rem; color: #a7adbb; margin-top: 0.75rem; }
    .reason { display: flex; gap: 0.5rem; align-items: flex-start; background: rgba(255,255,255,0.04); border-radius: 12px; padding: 0.5rem 0.75rem; margin-bottom: 0.5rem; }
    .reason i { color: #7EB2FF; margin-top: 0.25rem; }
    .flow-step { display: flex; gap: 0.5rem; align-items: center; font-size: 0.8rem; color: #a7adbb; margin: 0.35rem 0; }
    .flow-index {
        width: 1.25rem;
        height: 1.25rem;
        border-radius: 50%;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        font-size: 0.65rem;
        background: rgba(126, 178, 255, 0.1);
        color: #7EB2FF;
    }
    .skill { background: rgba(255,255,255,0.04); border-radius: 12px; padding: 0.5rem 0.75rem; font-size: 0.8rem; }
    .cta { text-align: center; max-width: 42rem; }
    .waitlist { margin: 1.5rem 0; }
    .waitlist-form { display: flex; flex-wrap: wrap; gap: 0.75rem; }
    .waitlist-field { flex: 1; min-width: 16rem; text-align: left; }
    .waitlist-input {
        width: 100%;
        box-sizing: border-box;
        padding: 0.85rem 1rem;
        border-radius: 10px;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(0, 0, 0, 0.3);
        color: #fff;
    }
    .invalid-input { border-color: #ff6b6b; }
    .waitlist-error { color: #ff6b6b; font-size: 0.75rem; margin: 0.35rem 0 0; }
    .waitlist-joined { color: #a7adbb; font-size: 0.8rem; }
    .footer { border-top: 1px solid rgba(255, 255, 255, 0.08); }
    .footer-inner {
        max-width: 1100px;
        margin: 0 auto;
        padding: 2rem;
        display: flex;
        flex-wrap: wrap;
        gap: 1.5rem;
        justify-content: space-between;
        align-items: center;
    }
    .footer-nav { display: flex; flex-wrap: wrap; gap: 1rem; }
    .story-link {
        background: none;
        border: none;
        color: #a7adbb;
        font-size: 0.8rem;
        cursor: pointer;
        text-decoration: none;
    }
    .story-link:hover { color: #7EB2FF; }
    .reveal { opacity: 0; transform: translateY(24px); transition: opacity 0.5s ease-out, transform 0.5s ease-out; }
    .reveal.is-visible { opacity: 1; transform: none; }
    .toast-viewport {
        position: fixed;
        right: 1rem;
        bottom: 1rem;
        z-index: 100;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        max-width: 24rem;
    }
    .toast {
        display: flex;
        gap: 1rem;
        align-items: flex-start;
        padding: 1rem 1.25rem;
        border-radius: 12px;
        background: #161a23;
        border: 1px solid rgba(126, 178, 255, 0.3);
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
        color: #e8ebf2;
    }
    .toast-title { font-weight: 600; margin: 0 0 0.25rem; }
    .toast-description { color: #a7adbb; font-size: 0.85rem; margin: 0; }
    .toast-close { background: none; border: none; color: #a7adbb; cursor: pointer; font-size: 1rem; }
    @media (max-width: 768px) {
        .hero { padding: 4rem 1rem; }
        .hero-title { font-size: 2.25rem; }
        .split { grid-template-columns: 1fr; }
        .card-grid.three, .card-grid.four, .card-grid.five { grid-template-columns: 1fr; }
        .section { padding: 3rem 1rem; }
    }
"#;
