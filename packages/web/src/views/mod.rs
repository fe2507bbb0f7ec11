mod guard;
pub use guard::{Guarded, Protected};

mod pages;
pub use pages::{
    DataValidations, Dashboard, Login, NotFound, PendingApproval, Register, Root,
    RuleConfigurations,
};
