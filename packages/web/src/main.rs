use dioxus::prelude::*;

use api::{Feature, Section};
use ui::components::ToastProvider;
use ui::{AuthProvider, NavTarget};
use views::{
    DataValidations, Dashboard, Login, NotFound, PendingApproval, Protected, Register, Root,
    RuleConfigurations,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/pending-approval")]
    PendingApproval {},
    #[layout(Protected)]
        #[route("/dashboard?:section")]
        Dashboard { section: String },
        #[route("/rule-configurations")]
        RuleConfigurations {},
        #[route("/data-validations")]
        DataValidations {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Login => Route::Login {},
            NavTarget::Register => Route::Register {},
            NavTarget::PendingApproval => Route::PendingApproval {},
            NavTarget::Dashboard(section) => Route::Dashboard {
                section: section.map(Section::id).unwrap_or_default().to_string(),
            },
            NavTarget::Feature(Feature::RuleConfigurations) => Route::RuleConfigurations {},
            NavTarget::Feature(Feature::DataValidations) => Route::DataValidations {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_map_to_paths() {
        assert_eq!(Route::from(NavTarget::Login).to_string(), "/login");
        assert_eq!(
            Route::from(NavTarget::PendingApproval).to_string(),
            "/pending-approval"
        );
        assert_eq!(
            Route::from(NavTarget::Feature(Feature::DataValidations)).to_string(),
            Feature::DataValidations.path()
        );
        assert_eq!(
            Route::from(NavTarget::Dashboard(Some(Section::DataMapping))),
            Route::Dashboard {
                section: "data-mapping".to_string()
            }
        );
    }

    #[test]
    fn test_dashboard_query_parses() {
        let route: Route = "/dashboard?section=error-correction-detection".parse().unwrap();
        assert_eq!(
            route,
            Route::Dashboard {
                section: "error-correction-detection".to_string()
            }
        );
    }
}
