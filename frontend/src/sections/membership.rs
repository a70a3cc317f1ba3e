use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::{MembershipTier, MEMBERSHIP_TIERS};
use crate::nav::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct MembershipProps {
    pub on_explore: Callback<()>,
}

#[function_component(Membership)]
pub fn membership(props: &MembershipProps) -> Html {
    let tier_card = |tier: &MembershipTier| {
        let onclick = props.on_explore.reform(|_: MouseEvent| ());
        html! {
            <div
                key={tier.name}
                class={classes!("tier-card", tier.highlighted.then_some("tier-highlighted"))}
            >
                if tier.highlighted {
                    <div class="tier-stripe"></div>
                }
                <span class={classes!("tier-badge", tier.tone.class())}>{tier.badge}</span>
                <h3>{tier.name}</h3>
                <div class="tier-price">
                    <span class="price">{tier.price}</span>
                    <span class="price-was">{tier.original_price}</span>
                </div>
                <ul class="feature-list">
                    { for tier.features.iter().map(|feature| html! {
                        <li key={*feature}>
                            <IconView icon={Icon::CheckCircle} />
                            {*feature}
                        </li>
                    }) }
                </ul>
                <button
                    class={classes!("button", "button-block", if tier.highlighted { "button-amber" } else { "button-blue" })}
                    {onclick}
                >
                    {tier.cta}
                </button>
            </div>
        }
    };

    html! {
        <section id={SectionId::Membership.anchor()} class="page-section section-dark">
            <div class="section-rule"></div>
            <div class="container">
                <div class="section-heading stagger">
                    <span class="eyebrow">{"Start Here"}</span>
                    <h2>{"Membership Options"}</h2>
                    <p>{"Choose the option that fits how you learn. Start with structured lessons, then add coaching if you want faster feedback."}</p>
                </div>

                <div class="tier-grid">
                    { for MEMBERSHIP_TIERS.iter().map(tier_card) }
                </div>
            </div>

            <style>
                {r#"
                    .tier-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .tier-card {
                        position: relative;
                        overflow: hidden;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #1e293b;
                        background: rgba(15, 23, 42, 0.5);
                        transition: transform 0.3s ease;
                        animation: scaleIn 0.6s ease-out both;
                    }
                    .tier-card:hover { transform: translateY(-10px); }
                    .tier-highlighted {
                        border: 2px solid rgba(245, 158, 11, 0.5);
                        background: linear-gradient(to bottom, rgba(69, 26, 3, 0.3), #0f172a);
                    }
                    .tier-stripe {
                        position: absolute;
                        top: 0; left: 0; width: 100%; height: 4px;
                        background: linear-gradient(90deg, #fbbf24, #f59e0b);
                    }
                    .tier-badge {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 700;
                        color: #fff;
                    }
                    .tier-card h3 { font-size: 1.5rem; font-weight: 700; color: #fff; margin-bottom: 0.5rem; }
                    .tier-price { margin-bottom: 1.5rem; }
                    .tier-price .price { font-size: 2.25rem; font-weight: 700; color: #fff; }
                    .feature-list { list-style: none; padding: 0; margin: 0 0 2rem; display: grid; gap: 0.75rem; }
                    .feature-list li { display: flex; align-items: flex-start; gap: 0.75rem; color: #cbd5e1; }
                    .feature-list .icon { width: 1.25rem; height: 1.25rem; flex-shrink: 0; color: #60a5fa; }
                    .tier-highlighted .feature-list .icon { color: #fbbf24; }
                    @media (max-width: 768px) {
                        .tier-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
