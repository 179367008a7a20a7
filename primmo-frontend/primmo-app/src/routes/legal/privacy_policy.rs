use crate::clock::{format_policy_date, use_clock};
use crate::components::page_meta::PageMeta;
use crate::components::policy_section::{PolicyBlock, PolicySection, PolicySectionView};
use leptos::prelude::*;

use PolicyBlock::{Bullets, Paragraph, Subheading};

pub const PRIVACY_POLICY_SECTIONS: [PolicySection; 9] = [
    PolicySection {
        heading: "Introduction",
        blocks: &[Paragraph(
            "Welcome to PRIMMO. This Privacy Policy explains how we collect, use, and protect \
             your information when you use our application.",
        )],
    },
    PolicySection {
        heading: "Information We Collect",
        blocks: &[
            Subheading("Information You Provide"),
            Bullets(&[
                "Account information (email, name)",
                "User-generated content",
                "Settings and preferences",
            ]),
            Subheading("Automatically Collected Information"),
            Bullets(&["Device information", "Usage statistics", "Crash reports"]),
        ],
    },
    PolicySection {
        heading: "How We Use Your Information",
        blocks: &[
            Paragraph("We use the information we collect to:"),
            Bullets(&[
                "Provide and maintain the app",
                "Improve user experience",
                "Send important notifications",
                "Analyze app usage patterns",
            ]),
        ],
    },
    PolicySection {
        heading: "Data Storage",
        blocks: &[Paragraph(
            "Your data is stored securely using industry-standard encryption.",
        )],
    },
    PolicySection {
        heading: "Data Sharing",
        blocks: &[
            Paragraph("We do not sell your personal information. We may share data with:"),
            Bullets(&[
                "Service providers (hosting, analytics)",
                "Legal authorities when required by law",
            ]),
        ],
    },
    PolicySection {
        heading: "Your Rights",
        blocks: &[
            Paragraph("You have the right to:"),
            Bullets(&[
                "Access your data",
                "Request data deletion",
                "Export your data",
                "Opt out of analytics",
            ]),
        ],
    },
    PolicySection {
        heading: "Children's Privacy",
        blocks: &[Paragraph(
            "This app is not intended for children under 13. We do not knowingly \
             collect information from children.",
        )],
    },
    PolicySection {
        heading: "Changes to This Policy",
        blocks: &[Paragraph(
            "We may update this Privacy Policy from time to time. We will notify you \
             of any changes by posting the new policy on this page.",
        )],
    },
    PolicySection {
        heading: "Contact Us",
        blocks: &[Paragraph(
            "If you have questions about this Privacy Policy, please contact us.",
        )],
    },
];

#[component]
pub fn PrivacyPolicy() -> impl IntoView {
    view! {
        <PageMeta
            title="Privacy Policy - PRIMMO"
            description="How PRIMMO collects, uses, and protects your information."
        />
        <PrivacyPolicyDocument />
    }
}

/// The policy itself. The "Last Updated" stamp is read from the clock on every render.
#[component]
pub fn PrivacyPolicyDocument() -> impl IntoView {
    let last_updated = format_policy_date(use_clock().today());
    view! {
        <main class="max-w-3xl mx-auto p-8">
            <h1 class="text-3xl font-bold mb-6">"Privacy Policy"</h1>
            <p class="text-gray-600 mb-4">
                <strong>"Last Updated:"</strong>
                {format!(" {last_updated}")}
            </p>
            {PRIVACY_POLICY_SECTIONS
                .into_iter()
                .map(|section| view! { <PolicySectionView section=section /> })
                .collect_view()}
        </main>
    }
}
