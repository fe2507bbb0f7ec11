use api::{Destination, Feature, Section};

/// Where a view wants to go. The router crate maps these onto its routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Login,
    Register,
    PendingApproval,
    Dashboard(Option<Section>),
    Feature(Feature),
}

impl From<Destination> for NavTarget {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => NavTarget::Login,
            Destination::PendingApproval => NavTarget::PendingApproval,
            Destination::Dashboard => NavTarget::Dashboard(None),
        }
    }
}
