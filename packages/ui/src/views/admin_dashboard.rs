use std::collections::HashMap;

use api::admin::{can_toggle_status, displayed_role, role_change_pending};
use api::{AccountStatus, AdminData, Role, User, UserAction};
use dioxus::prelude::*;

use crate::components::{
    error_toast, role_badge_variant, use_toast, Badge, BadgeVariant, Button, ButtonSize,
    ButtonVariant, Card, CardContent, CardHeader, CardTitle, ToastOptions,
};
use crate::icons::{
    FaCircleCheck, FaCircleXmark, FaClock, FaShieldHalved, FaUserCheck, FaUserXmark, FaUsers,
};
use crate::views::LoadingSpinner;
use crate::{use_api, use_auth, Icon, LogoutButton};

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

/// User management for ADMIN and SUPER_ADMIN accounts.
///
/// Every action is a single request followed by a full reload of users, pending
/// users and roles.
#[component]
pub fn AdminDashboardView() -> Element {
    let api = use_api();
    let session = use_auth();
    let toast = use_toast();

    let mut data = use_signal(AdminData::default);
    let mut loading = use_signal(|| true);
    let mut selections = use_signal(HashMap::<i64, Role>::new);
    let mut refresh = use_signal(|| 0u32);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            // Subscribe so actions can trigger a reload.
            let _ = refresh();
            loading.set(true);
            match AdminData::load(&api).await {
                Ok(fresh) => {
                    selections.set(fresh.role_selections());
                    data.set(fresh);
                }
                Err(e) => {
                    let (_, message) = error_toast(&e, "Failed to load data");
                    toast.error("Error".to_string(), ToastOptions::new().description(message));
                }
            }
            loading.set(false);
        }
    });

    let perform = use_callback(move |(user_id, action): (i64, UserAction)| {
        let api = api.clone();
        spawn(async move {
            match action.perform(&api, user_id).await {
                Ok(()) => {
                    toast.success(
                        "Success".to_string(),
                        ToastOptions::new().description(action.success_message().to_string()),
                    );
                    *refresh.write() += 1;
                }
                Err(e) => {
                    let (_, message) = error_toast(&e, action.failure_fallback());
                    toast.error("Error".to_string(), ToastOptions::new().description(message));
                }
            }
        });
    });

    if loading() {
        return rsx! {
            LoadingSpinner { message: "Loading admin dashboard..." }
        };
    }

    let me = session.read().user.clone();
    let (first_name, role_label) = me
        .as_ref()
        .map(|u| (u.first_name.clone(), u.role_label()))
        .unwrap_or_default();
    let snapshot = data.read().clone();
    let roles = snapshot.assignable_roles();

    rsx! {
        document::Stylesheet { href: ADMIN_CSS }

        div {
            class: "admin-page",

            nav {
                class: "admin-nav",
                div {
                    class: "admin-brand",
                    div { class: "admin-logo", "K" }
                    div {
                        h1 { "Keansa Admin Dashboard" }
                        p { "Data Sync AI Suite" }
                    }
                }
                div {
                    class: "admin-account",
                    span {
                        class: "admin-identity",
                        Icon { icon: FaShieldHalved, width: 16, height: 16 }
                        "{first_name} ({role_label})"
                    }
                    LogoutButton {
                        variant: ButtonVariant::Outline,
                        class: "admin-logout",
                    }
                }
            }

            main {
                class: "admin-main",

                div {
                    class: "stat-grid",
                    StatCard { title: "Total Users", value: snapshot.total(),
                        Icon { icon: FaUsers, width: 16, height: 16 }
                    }
                    StatCard { title: "Pending Approval", value: snapshot.pending_count(), tone: "warning",
                        Icon { icon: FaClock, width: 16, height: 16 }
                    }
                    StatCard { title: "Active Users", value: snapshot.active_count(), tone: "success",
                        Icon { icon: FaUserCheck, width: 16, height: 16 }
                    }
                }

                if !snapshot.pending.is_empty() {
                    Card {
                        class: "admin-section",
                        CardHeader {
                            CardTitle {
                                class: "section-title",
                                Icon { icon: FaClock, width: 18, height: 18 }
                                "Users Pending Approval ({snapshot.pending_count()})"
                            }
                        }
                        CardContent {
                            class: "pending-list",
                            for pending in snapshot.pending.iter().cloned() {
                                PendingUserRow {
                                    key: "{pending.id}",
                                    user: pending.clone(),
                                    on_approve: move |id| perform.call((id, UserAction::Approve)),
                                }
                            }
                        }
                    }
                }

                Card {
                    class: "admin-section",
                    CardHeader {
                        CardTitle {
                            class: "section-title",
                            Icon { icon: FaUsers, width: 18, height: 18 }
                            "All Users Management"
                        }
                    }
                    CardContent {
                        div {
                            class: "table-scroll",
                            table {
                                class: "user-table",
                                thead {
                                    tr {
                                        th { "User" }
                                        th { "Email" }
                                        th { "Current Role" }
                                        th { "Status" }
                                        th { "Assign Role" }
                                        th { "Actions" }
                                    }
                                }
                                tbody {
                                    for user in snapshot.users.iter().cloned() {
                                        UserRow {
                                            key: "{user.id}",
                                            selected: selections.read().get(&user.id).copied(),
                                            roles: roles.clone(),
                                            can_toggle: can_toggle_status(me.as_ref(), &user),
                                            user: user.clone(),
                                            on_select: move |(id, role): (i64, Role)| {
                                                selections.write().insert(id, role);
                                            },
                                            on_action: move |(id, action): (i64, UserAction)| {
                                                perform.call((id, action));
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: String, value: usize, #[props(default)] tone: String, children: Element) -> Element {
    rsx! {
        Card {
            CardHeader {
                class: "stat-header",
                CardTitle { class: "stat-title", "{title}" }
                span { class: "stat-icon", {children} }
            }
            CardContent {
                div { class: "stat-value {tone}", "{value}" }
            }
        }
    }
}

#[component]
fn PendingUserRow(user: User, on_approve: EventHandler<i64>) -> Element {
    let id = user.id;
    let requested = user.requested_on().unwrap_or_default();

    rsx! {
        div {
            class: "pending-row",
            div {
                class: "pending-details",
                h4 { "{user.full_name()}" }
                p { class: "muted", "{user.email}" }
                p { class: "muted small", "Requested: {requested}" }
            }
            div {
                class: "pending-actions",
                Badge { variant: role_badge_variant(user.role), "{user.role_label()}" }
                Button {
                    variant: ButtonVariant::Success,
                    size: ButtonSize::Small,
                    onclick: move |_| on_approve.call(id),
                    Icon { icon: FaUserCheck, width: 14, height: 14 }
                    "Approve"
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: User,
    #[props(!optional)]
    selected: Option<Role>,
    roles: Vec<Role>,
    can_toggle: bool,
    on_select: EventHandler<(i64, Role)>,
    on_action: EventHandler<(i64, UserAction)>,
) -> Element {
    let id = user.id;
    let current = displayed_role(selected, &user);
    let show_update = role_change_pending(selected, &user);
    let toggle = UserAction::toggle_for(&user);
    let (toggle_variant, toggle_title) = if user.is_active {
        (ButtonVariant::Destructive, "Deactivate")
    } else {
        (ButtonVariant::Primary, "Activate")
    };
    let mobile = user.mobile.clone().unwrap_or_default();

    rsx! {
        tr {
            td {
                div { class: "cell-strong", "{user.full_name()}" }
                div { class: "muted small", "ID: {id}" }
            }
            td {
                div { "{user.email}" }
                div { class: "muted tiny", "{mobile}" }
            }
            td {
                Badge { variant: role_badge_variant(user.role), "{user.role_label()}" }
            }
            td { {status_badge(user.status())} }
            td {
                div {
                    class: "role-assign",
                    select {
                        class: "select",
                        onchange: move |evt| match evt.value().parse::<Role>() {
                            Ok(role) => on_select.call((id, role)),
                            Err(e) => tracing::warn!("Ignoring role selection: {}", e),
                        },
                        if current.is_none() {
                            option {
                                value: "",
                                disabled: true,
                                selected: true,
                                "Select role"
                            }
                        }
                        for role in roles {
                            option {
                                key: "{role}",
                                value: role.as_str(),
                                selected: current == Some(role),
                                "{role}"
                            }
                        }
                    }
                    if let Some(role) = selected.filter(|_| show_update) {
                        Button {
                            size: ButtonSize::Small,
                            onclick: move |_| on_action.call((id, UserAction::ChangeRole(role))),
                            "Update"
                        }
                    }
                }
            }
            td {
                div {
                    class: "row-actions",
                    if !user.is_approved {
                        Button {
                            variant: ButtonVariant::Success,
                            size: ButtonSize::Small,
                            title: "Approve",
                            onclick: move |_| on_action.call((id, UserAction::Approve)),
                            Icon { icon: FaUserCheck, width: 14, height: 14 }
                        }
                    }
                    if can_toggle {
                        Button {
                            variant: toggle_variant,
                            size: ButtonSize::Small,
                            title: "{toggle_title}",
                            onclick: move |_| on_action.call((id, toggle)),
                            {toggle_icon(user.is_active)}
                        }
                    }
                }
            }
        }
    }
}

fn toggle_icon(active: bool) -> Element {
    if active {
        rsx! { Icon { icon: FaUserXmark, width: 14, height: 14 } }
    } else {
        rsx! { Icon { icon: FaUserCheck, width: 14, height: 14 } }
    }
}

fn status_badge(status: AccountStatus) -> Element {
    match status {
        AccountStatus::Pending => rsx! {
            Badge {
                variant: BadgeVariant::Secondary,
                Icon { icon: FaClock, width: 10, height: 10 }
                "Pending"
            }
        },
        AccountStatus::Active => rsx! {
            Badge {
                variant: BadgeVariant::Default,
                Icon { icon: FaCircleCheck, width: 10, height: 10 }
                "Active"
            }
        },
        AccountStatus::Inactive => rsx! {
            Badge {
                variant: BadgeVariant::Destructive,
                Icon { icon: FaCircleXmark, width: 10, height: 10 }
                "Inactive"
            }
        },
    }
}
