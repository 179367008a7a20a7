use icondata as i;
use leptos::prelude::*;

use crate::components::info_panel::InfoPanel;
use crate::components::page_meta::PageMeta;
use crate::components::preference_row::PreferenceRow;
use crate::theme::ThemeChoice;

/// A static informational panel in the account section.
#[derive(Clone, Copy, Debug)]
pub struct AccountPanel {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: icondata::Icon,
}

pub fn account_panels() -> [AccountPanel; 2] {
    [
        AccountPanel {
            title: "Profile",
            description: "Manage your profile settings",
            icon: i::BiUserRegular,
        },
        AccountPanel {
            title: "Data & Privacy",
            description: "Manage your data and privacy settings",
            icon: i::BiShieldRegular,
        },
    ]
}

/// Lists every [`ThemeChoice`]. Nothing listens to it yet.
#[component]
fn ThemeSelect() -> impl IntoView {
    view! {
        <select class="px-4 py-2 border rounded-lg" name="theme">
            {ThemeChoice::ALL
                .into_iter()
                .map(|choice| view! { <option value=choice.as_str()>{choice.to_string()}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <PageMeta title="Settings - PRIMMO" description="Preferences and account settings for PRIMMO." />
        <SettingsPanel />
    }
}

/// Preferences and account sections. The controls are not connected to any store.
#[component]
pub fn SettingsPanel() -> impl IntoView {
    view! {
        <main class="max-w-3xl mx-auto p-8">
            <h1 class="text-3xl font-bold mb-6">"Settings"</h1>

            <section class="mb-8">
                <h2 class="text-xl font-semibold mb-4">"Preferences"</h2>
                <div class="space-y-4">
                    <PreferenceRow
                        label="Notifications"
                        description="Enable push notifications"
                        icon=i::BiBellRegular
                    >
                        <button type="button" class="px-4 py-2 bg-blue-600 text-white rounded-lg">
                            "Enable"
                        </button>
                    </PreferenceRow>
                    <PreferenceRow
                        label="Theme"
                        description="Choose your preferred theme"
                        icon=i::BiPaletteRegular
                    >
                        <ThemeSelect />
                    </PreferenceRow>
                </div>
            </section>

            <section class="mb-8">
                <h2 class="text-xl font-semibold mb-4">"Account"</h2>
                <div class="space-y-4">
                    {account_panels()
                        .into_iter()
                        .map(|panel| {
                            view! {
                                <InfoPanel
                                    title=panel.title
                                    description=panel.description
                                    icon=panel.icon
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <SettingsPanel /> }.to_html())
    }

    #[test]
    fn has_preferences_then_account() {
        let html = render();
        assert_eq!(html.matches("<section").count(), 2);
        let preferences = html.find(">Preferences</h2>").unwrap();
        let account = html.find(">Account</h2>").unwrap();
        assert!(preferences < account);
    }

    #[test]
    fn theme_selector_offers_three_options_in_order() {
        let html = render();
        assert_eq!(html.matches("<select").count(), 1);
        assert_eq!(html.matches("<option").count(), 3);
        let positions: Vec<_> = ["Light", "Dark", "System"]
            .iter()
            .map(|label| html.find(&format!(">{label}</option>")).unwrap())
            .collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    }

    #[test]
    fn single_enable_button() {
        let html = render();
        assert_eq!(html.matches("<button").count(), 1);
        assert_eq!(html.matches("Enable</button>").count(), 1);
    }

    #[test]
    fn account_panels_are_profile_and_data_privacy() {
        let titles: Vec<_> = account_panels().iter().map(|p| p.title).collect();
        assert_eq!(titles, ["Profile", "Data & Privacy"]);
        let html = render();
        assert!(html.contains("Manage your profile settings"));
        assert!(html.contains("Manage your data and privacy settings"));
    }

    #[test]
    fn renders_identically_every_time() {
        assert_eq!(render(), render());
    }
}
