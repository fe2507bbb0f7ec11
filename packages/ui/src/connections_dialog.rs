use api::connections::{outcome, TEST_DURATION};
use api::{Connection, ConnectionBook, ConnectionDraft, ConnectionKind, ConnectionStatus};
use dioxus::prelude::*;

use crate::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, Input, Label,
};
use crate::icons::{FaCheck, FaCloud, FaDatabase, FaGear, FaPlug, FaPlus, FaServer, FaXmark};
use crate::timer::{roll, sleep};
use crate::views::ModalOverlay;
use crate::Icon;

const DIALOG_CSS: Asset = asset!("/assets/styling/connections.css");

/// Connection management dialog. State lives only while the dialog is mounted.
#[component]
pub fn ConnectionsDialog(on_close: EventHandler<()>) -> Element {
    let book = use_signal(ConnectionBook::demo);
    let mut draft = use_signal(ConnectionDraft::default);

    let connections = book.read().connections().to_vec();
    let can_add = draft.read().is_complete();

    let handle_add = move |_| {
        let form = draft();
        let mut book = book;
        if let Some(id) = book.write().add(&form) {
            tracing::info!("Added connection {} ({})", form.name, id);
            draft.set(ConnectionDraft::default());
        };
    };

    rsx! {
        document::Stylesheet { href: DIALOG_CSS }

        ModalOverlay {
            wide: true,
            on_close: move |_| on_close.call(()),

            div {
                class: "dialog",

                div {
                    class: "dialog-header",
                    h2 {
                        class: "dialog-title",
                        Icon { icon: FaPlug, width: 18, height: 18 }
                        "Connection Management"
                    }
                    p {
                        class: "dialog-description",
                        "Manage your database connections, SFTP servers, and other data sources."
                    }
                    button {
                        class: "dialog-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }

                h3 { class: "dialog-section-title", "Existing Connections" }
                div {
                    class: "connection-list",
                    for connection in connections {
                        ConnectionRow {
                            key: "{connection.id}",
                            connection: connection.clone(),
                            on_test: move |id| run_test(book, id),
                        }
                    }
                }

                h3 { class: "dialog-section-title", "Add New Connection" }
                Card {
                    CardContent {
                        class: "connection-form",

                        div {
                            class: "form-grid two",
                            div {
                                Label { html_for: "connection-name", "Connection Name" }
                                Input {
                                    id: "connection-name",
                                    value: draft.read().name.clone(),
                                    placeholder: "My Database Connection",
                                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                                }
                            }
                            div {
                                Label { html_for: "connection-type", "Connection Type" }
                                select {
                                    id: "connection-type",
                                    class: "select",
                                    value: draft.read().kind.as_str(),
                                    onchange: move |evt| {
                                        if let Some(kind) = ConnectionKind::parse(&evt.value()) {
                                            draft.write().kind = kind;
                                        }
                                    },
                                    for kind in ConnectionKind::ALL {
                                        option {
                                            key: "{kind.as_str()}",
                                            value: kind.as_str(),
                                            selected: draft.read().kind == kind,
                                            "{kind.label()}"
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            class: "form-grid three",
                            div {
                                Label { html_for: "connection-host", "Host" }
                                Input {
                                    id: "connection-host",
                                    value: draft.read().host.clone(),
                                    placeholder: "localhost",
                                    oninput: move |evt: FormEvent| draft.write().host = evt.value(),
                                }
                            }
                            div {
                                Label { html_for: "connection-port", "Port" }
                                Input {
                                    id: "connection-port",
                                    input_type: "number",
                                    value: draft.read().port.clone(),
                                    placeholder: "5432",
                                    oninput: move |evt: FormEvent| draft.write().port = evt.value(),
                                }
                            }
                            div {
                                Label { html_for: "connection-database", "Database" }
                                Input {
                                    id: "connection-database",
                                    value: draft.read().database.clone(),
                                    placeholder: "database_name",
                                    oninput: move |evt: FormEvent| draft.write().database = evt.value(),
                                }
                            }
                        }

                        div {
                            class: "form-grid two",
                            div {
                                Label { html_for: "connection-username", "Username" }
                                Input {
                                    id: "connection-username",
                                    value: draft.read().username.clone(),
                                    placeholder: "username",
                                    oninput: move |evt: FormEvent| draft.write().username = evt.value(),
                                }
                            }
                            div {
                                Label { html_for: "connection-password", "Password" }
                                Input {
                                    id: "connection-password",
                                    input_type: "password",
                                    value: draft.read().password.clone(),
                                    placeholder: "password",
                                    oninput: move |evt: FormEvent| draft.write().password = evt.value(),
                                }
                            }
                        }

                        div {
                            class: "form-actions",
                            Button {
                                disabled: !can_add,
                                onclick: handle_add,
                                Icon { icon: FaPlus, width: 14, height: 14 }
                                "Add Connection"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Mark `id` as testing and settle it after [`TEST_DURATION`].
fn run_test(mut book: Signal<ConnectionBook>, id: u32) {
    if !book.write().begin_test(id) {
        return;
    }
    spawn(async move {
        sleep(TEST_DURATION).await;
        book.write().finish_test(id, outcome(roll()));
    });
}

#[component]
fn ConnectionRow(connection: Connection, on_test: EventHandler<u32>) -> Element {
    let id = connection.id;
    let address = connection.address().unwrap_or_default();

    rsx! {
        Card {
            CardContent {
                class: "connection-row",
                div {
                    class: "connection-info",
                    div { class: "connection-icon", {kind_icon(connection.kind)} }
                    div {
                        h4 { class: "connection-name", "{connection.name}" }
                        p { class: "connection-address", "{address}" }
                    }
                }
                div {
                    class: "connection-actions",
                    {status_badge(connection.status)}
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        disabled: connection.is_testing(),
                        onclick: move |_| on_test.call(id),
                        Icon { icon: FaGear, width: 12, height: 12 }
                        "Test"
                    }
                }
            }
        }
    }
}

fn kind_icon(kind: ConnectionKind) -> Element {
    match kind {
        ConnectionKind::Database => rsx! { Icon { icon: FaDatabase, width: 16, height: 16 } },
        ConnectionKind::Sftp => rsx! { Icon { icon: FaServer, width: 16, height: 16 } },
        ConnectionKind::Api => rsx! { Icon { icon: FaPlug, width: 16, height: 16 } },
        ConnectionKind::Cloud => rsx! { Icon { icon: FaCloud, width: 16, height: 16 } },
    }
}

fn status_badge(status: ConnectionStatus) -> Element {
    match status {
        ConnectionStatus::Connected => rsx! {
            Badge {
                variant: BadgeVariant::Success,
                Icon { icon: FaCheck, width: 10, height: 10 }
                "Connected"
            }
        },
        ConnectionStatus::Disconnected => rsx! {
            Badge {
                variant: BadgeVariant::Destructive,
                Icon { icon: FaXmark, width: 10, height: 10 }
                "Disconnected"
            }
        },
        ConnectionStatus::Testing => rsx! {
            Badge { variant: BadgeVariant::Secondary, "Testing..." }
        },
    }
}
