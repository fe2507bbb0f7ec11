use api::{Section, Tile, TileAction, TileKind};
use dioxus::prelude::*;

use crate::components::{Card, CardContent, CardHeader, CardTitle};
use crate::icons::{
    FaArrowsRotate, FaCircleCheck, FaCircleInfo, FaCodeBranch, FaCube, FaDatabase, FaGear,
    FaLayerGroup, FaPlug,
};
use crate::{use_auth, ConnectionsDialog, DashboardSidebar, Icon, NavTarget};

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// Tile navigation for approved non-admin accounts.
///
/// `section` comes from the `?section=` query parameter; the page scrolls to it
/// whenever it changes.
#[component]
pub fn UserDashboardView(
    #[props(!optional)] section: Option<Section>,
    on_navigate: EventHandler<NavTarget>,
) -> Element {
    let session = use_auth();
    let mut show_connections = use_signal(|| false);

    use_effect(use_reactive!(|section| {
        if let Some(section) = section {
            let js = format!(
                "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
                section.id()
            );
            document::eval(&js);
        }
    }));

    let Some(user) = session.read().user.clone() else {
        return rsx! {};
    };

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "dashboard-layout",

            DashboardSidebar {
                user,
                active_section: section,
                on_navigate,
            }

            main {
                class: "dashboard-main",
                div { class: "dashboard-logo", "K" }
                h1 { class: "dashboard-title", "Data Sync AI" }

                for group in Section::ALL {
                    section {
                        key: "{group.id()}",
                        class: "dashboard-section",
                        h2 { id: group.id(), "{group.title()}" }
                        div {
                            class: "tile-grid",
                            for tile in group.tiles().iter().copied() {
                                Card {
                                    key: "{tile.kind.label()}",
                                    class: "tile",
                                    onclick: move |_| {
                                        if tile.action == TileAction::Connections {
                                            show_connections.set(true);
                                        } else if let Some(target) = tile_target(tile) {
                                            on_navigate.call(target);
                                        }
                                    },
                                    CardHeader { class: "tile-icon", {tile_icon(tile.kind)} }
                                    CardContent {
                                        class: "tile-label",
                                        CardTitle { "{tile.kind.label()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_connections() {
            ConnectionsDialog {
                on_close: move |_| show_connections.set(false),
            }
        }
    }
}

/// Page a tile navigates to; `None` for inert tiles and the connections dialog.
fn tile_target(tile: Tile) -> Option<NavTarget> {
    match tile.action {
        TileAction::Open(feature) => Some(NavTarget::Feature(feature)),
        TileAction::None | TileAction::Connections => None,
    }
}

fn tile_icon(kind: TileKind) -> Element {
    match kind {
        TileKind::Extract => rsx! { Icon { icon: FaDatabase, width: 40, height: 40 } },
        TileKind::Transform => rsx! { Icon { icon: FaCodeBranch, width: 40, height: 40 } },
        TileKind::Load => rsx! { Icon { icon: FaArrowsRotate, width: 40, height: 40 } },
        TileKind::Dimensions => rsx! { Icon { icon: FaLayerGroup, width: 40, height: 40 } },
        TileKind::Information => rsx! { Icon { icon: FaCircleInfo, width: 40, height: 40 } },
        TileKind::Cube => rsx! { Icon { icon: FaCube, width: 40, height: 40 } },
        TileKind::RuleConfigurations => rsx! { Icon { icon: FaGear, width: 40, height: 40 } },
        TileKind::DataValidation => rsx! { Icon { icon: FaCircleCheck, width: 40, height: 40 } },
        TileKind::Connections => rsx! { Icon { icon: FaPlug, width: 40, height: 40 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Feature;

    #[test]
    fn test_tile_targets() {
        let targets: Vec<_> = Section::ErrorCorrectionDetection
            .tiles()
            .iter()
            .map(|t| tile_target(*t))
            .collect();
        assert_eq!(
            targets,
            [
                Some(NavTarget::Feature(Feature::RuleConfigurations)),
                Some(NavTarget::Feature(Feature::DataValidations)),
                None,
            ]
        );
        assert!(Section::DataMapping
            .tiles()
            .iter()
            .all(|t| tile_target(*t).is_none()));
    }
}
