//! Static page content. Nothing here changes at runtime.

use crate::components::icon::Icon;
use crate::nav::section::SectionId;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BUSINESS_NAME: &str = "Golf From Tee to Green";
pub const TAGLINE: &str = "Online Golf Instruction Since 1986";
pub const INSTRUCTOR: &str = "James Cantrell";
pub const CONTACT_EMAIL: &str = "James@GolfFromTeeToGreen.com";
pub const TEACHING_SINCE: u16 = 1986;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub section: SectionId,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { section: SectionId::Home, label: "Home" },
    NavLink { section: SectionId::Membership, label: "Membership" },
    NavLink { section: SectionId::Videos, label: "Video Library" },
    NavLink { section: SectionId::Story, label: "My Story" },
    NavLink { section: SectionId::Contact, label: "Join" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Amber,
    Blue,
    Slate,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Amber => "badge-amber",
            BadgeTone::Blue => "badge-blue",
            BadgeTone::Slate => "badge-slate",
        }
    }
}

/// Condensed version of a tier for the membership dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogOffer {
    pub tagline: &'static str,
    pub price: &'static str,
    pub note: &'static str,
    /// Render `note` as a struck-through former price.
    pub note_struck: bool,
    pub cta: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MembershipTier {
    pub name: &'static str,
    pub price: &'static str,
    pub original_price: &'static str,
    pub badge: &'static str,
    pub tone: BadgeTone,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    pub cta: &'static str,
    pub offer: DialogOffer,
}

pub const MEMBERSHIP_TIERS: [MembershipTier; 3] = [
    MembershipTier {
        name: "Lifetime Access",
        price: "$497",
        original_price: "$1,997",
        badge: "Best Value",
        tone: BadgeTone::Amber,
        features: &[
            "Lifetime access to all video content",
            "New videos added monthly",
            "Private community access",
            "Quarterly live Q&A sessions",
            "Swing analysis discounts",
            "Early supporter recognition",
            "Never pay again - ever",
        ],
        highlighted: true,
        cta: "Get Lifetime Access",
        offer: DialogOffer {
            tagline: "Best value",
            price: "$497",
            note: "$1,997",
            note_struck: true,
            cta: "Get Lifetime Access",
        },
    },
    MembershipTier {
        name: "Annual Membership",
        price: "$197/year",
        original_price: "$297/year",
        badge: "Most Popular",
        tone: BadgeTone::Blue,
        features: &[
            "Full video library access",
            "New videos added monthly",
            "Private community access",
            "Monthly live Q&A sessions",
            "Member-only content",
            "Cancel anytime",
        ],
        highlighted: false,
        cta: "Start Annual Membership",
        offer: DialogOffer {
            tagline: "Most popular",
            price: "$197",
            note: "/year",
            note_struck: false,
            cta: "Choose Annual",
        },
    },
    MembershipTier {
        name: "Monthly Membership",
        price: "$29/month",
        original_price: "$49/month",
        badge: "Flexible",
        tone: BadgeTone::Slate,
        features: &[
            "Full video library access",
            "New videos added monthly",
            "Community access",
            "Cancel anytime",
            "7-day free trial",
        ],
        highlighted: false,
        cta: "Start Free Trial",
        offer: DialogOffer {
            tagline: "7-day free trial",
            price: "$29",
            note: "/month",
            note_struck: false,
            cta: "Start Free Trial",
        },
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoCategory {
    pub name: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub image: &'static str,
}

pub const VIDEO_CATEGORIES: [VideoCategory; 4] = [
    VideoCategory { name: "The Driver", label: "Lessons", icon: Icon::Target, image: "/driver.jpg" },
    VideoCategory { name: "Iron Play", label: "Lessons", icon: Icon::TrendingUp, image: "/iron-shot.jpg" },
    VideoCategory { name: "Short Game", label: "Lessons", icon: Icon::Trophy, image: "/putting.jpg" },
    VideoCategory { name: "Course Strategy", label: "Lessons", icon: Icon::Globe, image: "/hero-bg.jpg" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 4] = [
    Stat { value: "37+", label: "Years Teaching" },
    Stat { value: "Decades", label: "of Coaching Experience" },
    Stat { value: "Growing", label: "Video Library" },
    Stat { value: "Step-by-step", label: "Skill Building" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Differentiator {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const DIFFERENTIATORS: [Differentiator; 3] = [
    Differentiator {
        icon: Icon::Target,
        title: "Clear Mechanics",
        description: "Understand exactly what your body should be doing at every point in the swing.",
    },
    Differentiator {
        icon: Icon::Unlock,
        title: "No Secrets",
        description: "I share everything I know. No holding back the \"pro secrets\" - you get it all.",
    },
    Differentiator {
        icon: Icon::TrendingUp,
        title: "Real Progress",
        description: "Trackable improvement with clear drills and practice plans that actually work.",
    },
];

/// Short feature list on the contact section's lifetime offer card.
pub const LIFETIME_HIGHLIGHTS: [&str; 5] = [
    "Lifetime access to all videos",
    "New content every month",
    "Private community",
    "Quarterly live Q&A",
    "Never pay again",
];

pub fn lifetime_tier() -> &'static MembershipTier {
    &MEMBERSHIP_TIERS[0]
}
