//! Full-page views. Views that link elsewhere take an `on_navigate` handler; the
//! app crate maps [`NavTarget`](crate::NavTarget) onto its router.

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod spinner;
pub use spinner::LoadingSpinner;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod pending_approval;
pub use pending_approval::PendingApprovalView;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;

mod user_dashboard;
pub use user_dashboard::UserDashboardView;

mod feature_page;
pub use feature_page::FeaturePage;

/// Claim a form's in-flight flag before its request is spawned.
/// Returns false if a submission is already running.
fn begin_submit(submitting: &mut bool) -> bool {
    !std::mem::replace(submitting, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submit_is_refused_until_reset() {
        let mut submitting = false;
        assert!(begin_submit(&mut submitting));
        assert!(submitting);
        assert!(!begin_submit(&mut submitting));

        submitting = false;
        assert!(begin_submit(&mut submitting));
    }
}
