use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::HERO_STATS;
use crate::nav::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    // Both calls to action lead to the contact form
    let to_contact = props.on_navigate.reform(|_: MouseEvent| SectionId::Contact);

    html! {
        <section id={SectionId::Home.anchor()} class="hero">
            <div class="hero-background">
                <div class="hero-shade"></div>
                <img src="/hero-bg.jpg" alt="Golf swing" />
            </div>
            <div class="hero-glow hero-glow-blue"></div>
            <div class="hero-glow hero-glow-amber"></div>

            <div class="hero-content stagger">
                <span class="pill pill-amber">
                    <IconView icon={Icon::Sparkles} />
                    {"Early Access Available"}
                </span>

                <h1>
                    <span class="gradient-text">{"Learn the Golf Swing"}</span>
                    <br />
                    <span class="muted">{"the Right Way"}</span>
                </h1>

                <p class="hero-subtitle">
                    {"Simple, clear instruction built on fundamentals, from a coach teaching since 1986. Train anywhere. Improve faster."}
                </p>
                <p class="hero-points">
                    {"Structured video lessons • New lessons added over time • Optional coaching • Learn from anywhere"}
                </p>

                <div class="hero-actions">
                    <button class="button button-primary button-large" onclick={to_contact.clone()}>
                        <IconView icon={Icon::Crown} />
                        {"Explore Membership"}
                    </button>
                    <button class="button button-outline-amber button-large" onclick={to_contact}>
                        <IconView icon={Icon::Calendar} />
                        {"Book a Lesson"}
                    </button>
                </div>

                <div class="hero-stats">
                    { for HERO_STATS.iter().map(|stat| html! {
                        <div class="hero-stat" key={stat.label}>
                            <div class="hero-stat-value">{stat.value}</div>
                            <div class="hero-stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="scroll-hint"><IconView icon={Icon::ChevronDown} /></div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background { position: absolute; inset: 0; }
                    .hero-background img { width: 100%; height: 100%; object-fit: cover; opacity: 0.6; }
                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        z-index: 1;
                        background: linear-gradient(to bottom, #020617, rgba(15, 23, 42, 0.9), #020617);
                    }
                    .hero-glow { position: absolute; border-radius: 9999px; filter: blur(64px); }
                    .hero-glow-blue {
                        top: 25%; left: 2.5rem; width: 8rem; height: 8rem;
                        background: rgba(59, 130, 246, 0.1);
                        animation: drift 6s ease-in-out infinite;
                    }
                    .hero-glow-amber {
                        bottom: 25%; right: 2.5rem; width: 12rem; height: 12rem;
                        background: rgba(245, 158, 11, 0.1);
                        animation: drift 8s ease-in-out infinite reverse;
                    }
                    @keyframes drift {
                        0%, 100% { transform: translateY(0) scale(1); }
                        50% { transform: translateY(-30px) scale(1.2); }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 2;
                        max-width: 72rem;
                        padding: 8rem 1.5rem;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        margin: 1.5rem 0;
                    }
                    .hero-subtitle { font-size: 1.4rem; color: #cbd5e1; max-width: 48rem; margin: 0 auto 1rem; }
                    .hero-points { font-size: 1.1rem; color: #94a3b8; max-width: 42rem; margin: 0 auto 2rem; }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        margin-bottom: 3rem;
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .hero-stat {
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(15, 23, 42, 0.5);
                        border: 1px solid rgba(30, 58, 138, 0.3);
                    }
                    .hero-stat-value { font-size: 1.75rem; font-weight: 700; color: #60a5fa; }
                    .hero-stat-label { font-size: 0.75rem; color: #94a3b8; }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        z-index: 2;
                        color: #64748b;
                        animation: bob 2s ease-in-out infinite;
                    }
                    .scroll-hint .icon { width: 2rem; height: 2rem; }
                    @keyframes bob {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    @media (max-width: 768px) {
                        .hero-stats { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
        </section>
    }
}
