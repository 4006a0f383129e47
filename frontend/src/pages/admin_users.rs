use crate::components::data_table::{Column, DataTable};
use crate::components::form_field::{FieldType, FormField};
use crate::components::modal::{Modal, ModalSize};
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use shared::forms::is_valid_email;
use shared::{mock, CellValue, User, UserRole};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn role_badge(value: &CellValue, _: &User) -> Html {
    let class = match value.as_str() {
        Some("Admin") => "badge-danger",
        Some("Moderator") => "badge-info",
        _ => "badge-success",
    };
    html! { <span class={classes!("badge", class)}>{value.to_string()}</span> }
}

/// Mirror a local change to the users API. Edits stay local when it is unreachable.
fn sync_user_change(description: String, request: impl std::future::Future<Output = Result<Value, String>> + 'static) {
    spawn_local(async move {
        if let Err(e) = request.await {
            log::warn!("{} kept locally only: {}", description, e);
        }
    });
}

/// Editable fields that differ between the stored row and the edited copy
fn changed_fields(before: &User, after: &User) -> Map<String, Value> {
    let mut changes = Map::new();
    if before.name != after.name {
        changes.insert("name".to_string(), Value::from(after.name.as_str()));
    }
    if before.email != after.email {
        changes.insert("email".to_string(), Value::from(after.email.as_str()));
    }
    if before.phone != after.phone {
        changes.insert("phone".to_string(), Value::from(after.phone.as_str()));
    }
    if before.role != after.role {
        changes.insert("role".to_string(), Value::from(after.role.as_str()));
    }
    changes
}

/// Empty row for the add-user form, numbered after the highest existing id
fn blank_user(existing: &[User], joined: NaiveDate) -> User {
    let id = existing.iter().map(|user| user.id).max().unwrap_or(0) + 1;
    User {
        id,
        name: String::new(),
        email: String::new(),
        role: UserRole::User,
        phone: String::new(),
        joined_date: joined,
        avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed=user{}", id),
    }
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID").sortable(),
        Column::<User>::new("name", "Name")
            .sortable()
            .render(|value, user| html! {
                <div class="user-cell">
                    <img class="avatar" src={user.avatar.clone()} alt={user.name.clone()} />
                    <span class="font-medium">{value.to_string()}</span>
                </div>
            }),
        Column::<User>::new("email", "Email")
            .sortable()
            .render(|value, _| html! { <a href={format!("mailto:{}", value)}>{value.to_string()}</a> }),
        Column::new("role", "Role").sortable().render(role_badge),
        Column::new("phone", "Phone"),
        Column::new("joinedDate", "Joined").sortable(),
    ]
}

#[function_component(AdminUsersPage)]
pub fn admin_users_page() -> Html {
    let toast = use_toast();
    let users = use_state(|| Rc::new(mock::users()));
    let columns = use_memo((), |_| user_columns());
    let viewing = use_state(|| Option::<User>::None);
    let editing = use_state(|| Option::<User>::None);

    let on_view = {
        let viewing = viewing.clone();
        let toast = toast.clone();
        Callback::from(move |user: User| {
            toast.info(format!("Viewing details for {}", user.name), None);
            viewing.set(Some(user));
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let toast = toast.clone();
        Callback::from(move |user: User| {
            toast.info(format!("Editing {}", user.name), Some("Edit Mode"));
            editing.set(Some(user));
        })
    };

    let on_delete = {
        let users = users.clone();
        let toast = toast.clone();
        Callback::from(move |user: User| {
            let confirmed = gloo::utils::window()
                .confirm_with_message(&format!("Are you sure you want to delete {}?", user.name))
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let remaining = users.iter().filter(|u| u.id != user.id).cloned().collect();
            users.set(Rc::new(remaining));
            let endpoint = format!("/users/{}", user.id);
            sync_user_change(format!("delete of user {}", user.id), async move {
                ApiClient::new().delete::<Value>(&endpoint).await.into_result()
            });
            toast.success(format!("{} deleted successfully", user.name), Some("Deleted"));
        })
    };

    let close_view = {
        let viewing = viewing.clone();
        Callback::from(move |_: ()| viewing.set(None))
    };
    let close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    let edit_field = |update: fn(&mut User, String)| {
        let editing = editing.clone();
        Callback::from(move |value: String| {
            if let Some(mut user) = (*editing).clone() {
                update(&mut user, value);
                editing.set(Some(user));
            }
        })
    };

    // Existing rows are patched with what changed; new rows are created in place
    let on_save = {
        let editing = editing.clone();
        let users = users.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(edited) = (*editing).clone() else {
                return;
            };
            if edited.name.trim().is_empty() || !is_valid_email(&edited.email) {
                toast.error("Name and a valid email are required", Some("Validation Error"));
                return;
            }
            let endpoint = format!("/users/{}", edited.id);
            match users.iter().find(|u| u.id == edited.id).cloned() {
                Some(before) => {
                    let changes = changed_fields(&before, &edited);
                    let updated = users
                        .iter()
                        .map(|u| if u.id == edited.id { edited.clone() } else { u.clone() })
                        .collect();
                    users.set(Rc::new(updated));
                    if !changes.is_empty() {
                        sync_user_change(format!("update of user {}", edited.id), async move {
                            ApiClient::new().patch::<Value, _>(&endpoint, &changes).await.into_result()
                        });
                    }
                    toast.success("User updated successfully!", Some("Success"));
                }
                None => {
                    let mut next = (**users).clone();
                    next.push(edited.clone());
                    users.set(Rc::new(next));
                    toast.success(format!("{} added", edited.name), Some("User Created"));
                    sync_user_change(format!("creation of user {}", edited.id), async move {
                        ApiClient::new().put::<Value, _>(&endpoint, &edited).await.into_result()
                    });
                }
            }
            editing.set(None);
        })
    };

    let on_add = {
        let editing = editing.clone();
        let users = users.clone();
        Callback::from(move |_: MouseEvent| editing.set(Some(blank_user(&users, today()))))
    };

    let is_new = (*editing)
        .as_ref()
        .map(|user| !users.iter().any(|u| u.id == user.id))
        .unwrap_or(false);
    let (edit_title, save_label) = if is_new {
        ("Add User", "Create User")
    } else {
        ("Edit User", "Save Changes")
    };

    let role_options: Vec<(AttrValue, AttrValue)> = UserRole::ALL
        .iter()
        .map(|role| (AttrValue::from(role.as_str()), AttrValue::from(role.as_str())))
        .collect();

    let edit_footer = {
        let close_edit = close_edit.clone();
        html! {
            <>
                <button type="button" class="btn-secondary" onclick={move |_| close_edit.emit(())}>{"Cancel"}</button>
                <button type="button" class="btn-primary" onclick={on_save}>{save_label}</button>
            </>
        }
    };

    html! {
        <div class="page admin-users">
            <div class="page-header">
                <div>
                    <h1 class="gradient-text">{"User Management"}</h1>
                    <p>{"Manage all users, roles and permissions"}</p>
                </div>
                <button type="button" class="btn-primary" onclick={on_add}>{"+ Add User"}</button>
            </div>

            <DataTable<User>
                rows={(*users).clone()}
                columns={columns}
                show_actions={true}
                on_view={on_view}
                on_edit={on_edit}
                on_delete={on_delete}
                empty_message="No users found"
            />

            <Modal is_open={viewing.is_some()} on_close={close_view} title="User Details" size={ModalSize::Medium}>
                if let Some(user) = &*viewing {
                    <div class="user-details">
                        <img class="avatar avatar-lg" src={user.avatar.clone()} alt={user.name.clone()} />
                        <dl>
                            <dt>{"Name"}</dt><dd>{&user.name}</dd>
                            <dt>{"Email"}</dt><dd>{&user.email}</dd>
                            <dt>{"Phone"}</dt><dd>{&user.phone}</dd>
                            <dt>{"Role"}</dt><dd>{user.role.as_str()}</dd>
                            <dt>{"Joined"}</dt><dd>{user.joined_date.format("%B %-d, %Y").to_string()}</dd>
                        </dl>
                    </div>
                }
            </Modal>

            <Modal is_open={editing.is_some()} on_close={close_edit} title={edit_title} footer={edit_footer}>
                if let Some(user) = &*editing {
                    <div class="edit-user-form">
                        <FormField name="name" label="Name" required={true}
                            value={user.name.clone()} on_change={edit_field(|u, v| u.name = v)} />
                        <FormField name="email" label="Email" field_type={FieldType::Email} required={true}
                            value={user.email.clone()} on_change={edit_field(|u, v| u.email = v)} />
                        <FormField name="phone" label="Phone" field_type={FieldType::Tel}
                            value={user.phone.clone()} on_change={edit_field(|u, v| u.phone = v)} />
                        <FormField name="role" label="Role" field_type={FieldType::Select}
                            options={role_options}
                            value={user.role.as_str()}
                            on_change={edit_field(|u, v| u.role = UserRole::from_label(&v))} />
                    </div>
                }
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32) -> User {
        User {
            id,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: UserRole::User,
            phone: "+1 555 0100".to_string(),
            joined_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            avatar: String::new(),
        }
    }

    #[test]
    fn test_changed_fields_only_lists_edits() {
        let before = user(7);
        assert!(changed_fields(&before, &before).is_empty());

        let mut after = before.clone();
        after.email = "ada@bank.test".to_string();
        after.role = UserRole::Moderator;
        let changes = changed_fields(&before, &after);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes["email"], Value::from("ada@bank.test"));
        assert_eq!(changes["role"], Value::from("Moderator"));
    }

    #[test]
    fn test_blank_user_takes_next_id() {
        let joined = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let fresh = blank_user(&[user(3), user(11), user(4)], joined);
        assert_eq!(fresh.id, 12);
        assert_eq!(fresh.role, UserRole::User);
        assert_eq!(fresh.joined_date, joined);
        assert!(fresh.name.is_empty());

        assert_eq!(blank_user(&[], joined).id, 1);
    }
}
