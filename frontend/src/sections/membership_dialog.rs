use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::{BadgeTone, MembershipTier, MEMBERSHIP_TIERS};

#[derive(Properties, PartialEq)]
pub struct MembershipDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Any tier button; the page handles closing and moving to the form.
    pub on_select_tier: Callback<()>,
}

#[function_component(MembershipDialog)]
pub fn membership_dialog(props: &MembershipDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = props.on_close.reform(|_: MouseEvent| ());
    // Clicks inside the panel must not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let offer_row = |tier: &MembershipTier| {
        let offer = tier.offer;
        let onclick = props.on_select_tier.reform(|_: MouseEvent| ());
        let (row_class, button_class) = if tier.highlighted {
            ("offer-row offer-row-featured", "button button-amber button-block")
        } else if tier.tone == BadgeTone::Blue {
            ("offer-row", "button button-blue button-block")
        } else {
            ("offer-row", "button button-outline button-block")
        };
        html! {
            <div class={row_class} key={tier.name}>
                <div class="offer-row-head">
                    <div>
                        <p class="offer-row-name">{tier.name}</p>
                        <p class={classes!("offer-row-tagline", tier.tone.class())}>{offer.tagline}</p>
                    </div>
                    <div class="offer-row-price">
                        <p class="price">{offer.price}</p>
                        <p class={classes!("offer-row-note", offer.note_struck.then_some("price-was"))}>{offer.note}</p>
                    </div>
                </div>
                <button class={button_class} {onclick}>{offer.cta}</button>
            </div>
        }
    };

    html! {
        <div class="dialog-backdrop" onclick={close.clone()}>
            <div
                class="dialog-panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby="membership-dialog-title"
                onclick={keep_open}
            >
                <button class="dialog-close" aria-label="Close" onclick={close}>
                    <IconView icon={Icon::Close} />
                </button>
                <h2 id="membership-dialog-title">
                    <IconView icon={Icon::Crown} />
                    {"Become a Member"}
                </h2>
                <p class="dialog-description">{"Choose the membership that's right for you."}</p>
                <div class="offer-rows">
                    { for MEMBERSHIP_TIERS.iter().map(offer_row) }
                </div>
            </div>

            <style>
                {r#"
                    .dialog-backdrop {
                        position: fixed; inset: 0; z-index: 150;
                        background: rgba(0, 0, 0, 0.7);
                        display: flex; align-items: center; justify-content: center;
                        padding: 1rem;
                        animation: fadeIn 0.2s ease-out;
                    }
                    .dialog-panel {
                        position: relative;
                        width: 100%;
                        max-width: 32rem;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: #0f172a;
                        border: 1px solid #334155;
                        color: #fff;
                        animation: scaleIn 0.2s ease-out;
                    }
                    .dialog-close { position: absolute; top: 1rem; right: 1rem; color: #94a3b8; }
                    .dialog-close:hover { color: #fff; }
                    .dialog-panel h2 { display: flex; align-items: center; gap: 0.5rem; font-size: 1.25rem; font-weight: 600; }
                    .dialog-panel h2 .icon { color: #fbbf24; width: 1.5rem; height: 1.5rem; }
                    .dialog-description { color: #94a3b8; margin-top: 0.25rem; }
                    .offer-rows { display: grid; gap: 1rem; margin-top: 1rem; }
                    .offer-row { padding: 1rem; border-radius: 0.5rem; background: #1e293b; border: 1px solid #334155; }
                    .offer-row-featured {
                        background: linear-gradient(90deg, rgba(69, 26, 3, 0.5), #0f172a);
                        border-color: rgba(245, 158, 11, 0.3);
                    }
                    .offer-row-head { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 0.5rem; }
                    .offer-row-name { font-weight: 700; }
                    .offer-row-tagline { font-size: 0.875rem; background: none; }
                    .offer-row-tagline.badge-amber { color: #fbbf24; }
                    .offer-row-tagline.badge-blue { color: #60a5fa; }
                    .offer-row-tagline.badge-slate { color: #94a3b8; }
                    .offer-row-price { text-align: right; }
                    .offer-row-price .price { font-size: 1.5rem; font-weight: 700; }
                    .offer-row-note { font-size: 0.875rem; color: #64748b; }
                "#}
            </style>
        </div>
    }
}
