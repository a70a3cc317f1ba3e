use yew::prelude::*;

use crate::components::icon::IconView;
use crate::content::DIFFERENTIATORS;

/// "What makes it different". Not a navigation target.
#[function_component(Difference)]
pub fn difference() -> Html {
    html! {
        <section class="page-section section-slate">
            <div class="container">
                <div class="section-heading stagger">
                    <span class="eyebrow">{"The Difference"}</span>
                    <h2>{"The Truth About Your Swing"}</h2>
                    <p>{"No gimmicks. No fads. Just 37 years of understanding what actually works."}</p>
                </div>

                <div class="difference-grid">
                    { for DIFFERENTIATORS.iter().map(|item| html! {
                        <div class="difference-card" key={item.title}>
                            <div class="difference-icon"><IconView icon={item.icon} /></div>
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .difference-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .difference-card {
                        padding: 1.5rem;
                        text-align: center;
                        border-radius: 1rem;
                        border: 1px solid rgba(51, 65, 85, 0.5);
                        background: rgba(30, 41, 59, 0.5);
                        transition: transform 0.3s ease;
                        animation: fadeInUp 0.8s ease-out both;
                    }
                    .difference-card:hover { transform: translateY(-5px); }
                    .difference-icon {
                        width: 4rem; height: 4rem;
                        margin: 0 auto 1rem;
                        border-radius: 0.75rem;
                        background: rgba(59, 130, 246, 0.1);
                        color: #60a5fa;
                        display: flex; align-items: center; justify-content: center;
                    }
                    .difference-icon .icon { width: 2rem; height: 2rem; }
                    .difference-card h3 { font-size: 1.25rem; font-weight: 600; color: #fff; margin-bottom: 0.5rem; }
                    .difference-card p { color: #94a3b8; }
                    @media (max-width: 768px) {
                        .difference-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
