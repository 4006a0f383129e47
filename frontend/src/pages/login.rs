use crate::components::form_field::{FieldType, FormField};
use crate::hooks::use_navigation::use_navigator;
use crate::hooks::use_session::use_session;
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use serde::Serialize;
use serde_json::Value;
use shared::forms::is_valid_email;
use shared::routes::redirect_target;
use shared::session::{Credentials, DEMO_ACCOUNTS};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ActiveForm {
    Login,
    Register,
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let active = use_state(|| ActiveForm::Login);

    let tab = |form: ActiveForm, label: &'static str| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(form))
        };
        html! {
            <button type="button" class={classes!("auth-tab", (*active == form).then_some("active"))} {onclick}>
                {label}
            </button>
        }
    };

    let on_registered = {
        let active = active.clone();
        Callback::from(move |_: ()| active.set(ActiveForm::Login))
    };

    html! {
        <div class="auth-page">
            <div class="auth-hero">
                <div class="auth-logo">{"🏦"}</div>
                <h1 class="gradient-text">{"Welcome Back!"}</h1>
                <p>{"Your trusted partner for secure banking and financial management"}</p>
            </div>
            <div class="auth-tabs">
                {tab(ActiveForm::Login, "Login")}
                {tab(ActiveForm::Register, "Register")}
            </div>
            <div class="auth-card">
                {match *active {
                    ActiveForm::Login => html! { <LoginForm /> },
                    ActiveForm::Register => html! { <RegisterForm {on_registered} /> },
                }}
            </div>
        </div>
    }
}

#[function_component(LoginForm)]
fn login_form() -> Html {
    let navigator = use_navigator();
    let session = use_session();
    let toast = use_toast();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let login = session.map(|context| context.login);
        let push = navigator.push.clone();
        let query = navigator.location.query.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(login) = &login else {
                log::error!("login form rendered without a session provider");
                return;
            };
            match login.emit(Credentials::new(username.as_str(), password.as_str())) {
                Ok(session) => {
                    error.set(None);
                    toast.success(format!("Signed in as {}", session.user_id), Some("Welcome"));
                    let target = redirect_target(&query).unwrap_or_else(|| session.role.home_path().to_string());
                    push.emit(target);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let set = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };

    html! {
        <form class="auth-form" {onsubmit}>
            <h2>{"Sign in"}</h2>
            if let Some(message) = &*error {
                <div class="form-message error">{message}</div>
            }
            <FormField name="username" label="Username" required={true}
                value={(*username).clone()} on_change={set(&username)} />
            <FormField name="password" label="Password" field_type={FieldType::Password} required={true}
                value={(*password).clone()} on_change={set(&password)} />
            <button type="submit" class="btn-primary btn-block">{"Login"}</button>
            <div class="demo-credentials">
                <p>{"Demo accounts"}</p>
                <ul>
                    {for DEMO_ACCOUNTS.iter().map(|account| html! {
                        <li>
                            <strong>{account.role.as_str()}</strong>
                            {format!(": {} / {}", account.username, account.password)}
                        </li>
                    })}
                </ul>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct RegisterFormProps {
    on_registered: Callback<()>,
}

#[derive(Clone, Default, PartialEq)]
struct Registration {
    name: String,
    email: String,
    password: String,
    confirm: String,
}

#[derive(Serialize)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

impl Registration {
    fn validate(&self) -> Result<(), &'static str> {
        if [&self.name, &self.email, &self.password].iter().any(|f| f.trim().is_empty()) {
            return Err("Please fill all required fields");
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid email address");
        }
        if self.password != self.confirm {
            return Err("Passwords do not match");
        }
        Ok(())
    }
}

/// Collects sign-up details. Without a registration endpoint the visitor is
/// pointed at the demo accounts.
#[function_component(RegisterForm)]
fn register_form(props: &RegisterFormProps) -> Html {
    let toast = use_toast();
    let form = use_state(Registration::default);

    let field = |update: fn(&mut Registration, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let on_registered = props.on_registered.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(message) = form.validate() {
                toast.error(message, Some("Validation Error"));
                return;
            }
            let request = RegisterRequest {
                name: form.name.trim().to_string(),
                email: form.email.trim().to_string(),
                password: form.password.clone(),
            };
            let toast = toast.clone();
            let on_registered = on_registered.clone();
            spawn_local(async move {
                let response = ApiClient::new().post::<Value, _>("/auth/register", &request).await;
                match response.into_result() {
                    Ok(_) => toast.success("Account created. You can sign in now.", Some("Registered")),
                    Err(e) => {
                        log::warn!("registration unavailable: {}", e);
                        toast.info("Registration is not available in the demo. Use a demo account to sign in.", Some("Demo"));
                    }
                }
                on_registered.emit(());
            });
        })
    };

    html! {
        <form class="auth-form" {onsubmit}>
            <h2>{"Create an account"}</h2>
            <FormField name="name" label="Full Name" required={true}
                value={form.name.clone()} on_change={field(|f, v| f.name = v)} />
            <FormField name="email" label="Email" field_type={FieldType::Email} required={true}
                value={form.email.clone()} on_change={field(|f, v| f.email = v)} />
            <FormField name="password" label="Password" field_type={FieldType::Password} required={true}
                value={form.password.clone()} on_change={field(|f, v| f.password = v)} />
            <FormField name="confirm" label="Confirm Password" field_type={FieldType::Password} required={true}
                value={form.confirm.clone()} on_change={field(|f, v| f.confirm = v)} />
            <button type="submit" class="btn-primary btn-block">{"Register"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_validation() {
        let mut form = Registration {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            confirm: "secret".into(),
        };
        assert_eq!(form.validate(), Ok(()));

        form.confirm = "other".into();
        assert_eq!(form.validate(), Err("Passwords do not match"));

        form.email = "ada".into();
        assert_eq!(form.validate(), Err("Please enter a valid email address"));

        form.name.clear();
        assert_eq!(form.validate(), Err("Please fill all required fields"));
    }
}
