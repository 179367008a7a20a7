use leptos::prelude::*;

/// One piece of a policy section's body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyBlock {
    Paragraph(&'static str),
    Subheading(&'static str),
    Bullets(&'static [&'static str]),
}

/// A titled block of legal text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicySection {
    pub heading: &'static str,
    pub blocks: &'static [PolicyBlock],
}

#[cfg(test)]
impl PolicySection {
    /// All text in the section body, headings of subsections included.
    pub(crate) fn body_text(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.blocks.iter().flat_map(|block| match block {
            PolicyBlock::Paragraph(text) | PolicyBlock::Subheading(text) => {
                std::slice::from_ref(text).iter().copied()
            }
            PolicyBlock::Bullets(items) => items.iter().copied(),
        })
    }
}

fn policy_block(block: PolicyBlock) -> AnyView {
    match block {
        PolicyBlock::Paragraph(text) => view! { <p class="text-gray-700 mb-2">{text}</p> }.into_any(),
        PolicyBlock::Subheading(text) => {
            view! { <h3 class="text-lg font-medium mb-2">{text}</h3> }.into_any()
        }
        PolicyBlock::Bullets(items) => view! {
            <ul class="list-disc list-inside text-gray-700 mb-4">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}

#[component]
pub fn PolicySectionView(section: PolicySection) -> impl IntoView {
    view! {
        <section class="mb-8">
            <h2 class="text-xl font-semibold mb-3">{section.heading}</h2>
            {section.blocks.iter().copied().map(policy_block).collect_view()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIGHTS: PolicySection = PolicySection {
        heading: "Rights",
        blocks: &[
            PolicyBlock::Paragraph("You may:"),
            PolicyBlock::Bullets(&["Access", "Delete"]),
        ],
    };

    #[test]
    fn body_text_walks_blocks_in_order() {
        let text: Vec<_> = RIGHTS.body_text().collect();
        assert_eq!(text, ["You may:", "Access", "Delete"]);
    }

    #[test]
    fn renders_heading_and_bullets() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <PolicySectionView section=RIGHTS /> }.to_html());
        assert!(html.contains("<section"));
        assert!(html.contains(">Rights</h2>"));
        assert!(html.contains(">You may:</p>"));
        assert_eq!(html.matches("<li>").count(), 2);
    }
}
