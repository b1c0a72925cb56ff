use crate::auth::use_auth;
use crate::components::form::{AuthCard, SubmitButton, use_liveness};
use crate::notice::use_notices;
use crate::web::WebStorage;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use prompt_array::SignUpOutcome;
use prompt_array::notice::NoticeLevel;
use prompt_array_shared::{Credentials, SignUpProfile};

/// 注册成功页用于重发确认邮件的地址
const REGISTRATION_EMAIL_KEY: &str = "registrationEmail";

/// 注册表单状态
#[derive(Clone, Copy)]
struct RegisterForm {
    full_name: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm_password: RwSignal<String>,
}

impl RegisterForm {
    fn new() -> Self {
        Self {
            full_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
        }
    }

    /// 本地校验，返回给用户看的错误信息
    fn validate(&self) -> Result<(), &'static str> {
        if self.email.get().trim().is_empty() || self.password.get().is_empty() {
            return Err("Please fill in all required fields");
        }
        if self.password.get() != self.confirm_password.get() {
            return Err("Passwords do not match");
        }
        Ok(())
    }

    fn to_request(&self) -> (Credentials, SignUpProfile) {
        let full_name = self.full_name.get();
        let profile = SignUpProfile {
            full_name: (!full_name.trim().is_empty()).then(|| full_name.trim().to_string()),
        };
        (Credentials::new(self.email.get(), self.password.get()), profile)
    }
}

fn text_input(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=kind
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered"
                required
            />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();
    let form = RegisterForm::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let liveness = use_liveness();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(msg) = form.validate() {
            notices.push(NoticeLevel::Error, msg);
            return;
        }

        set_is_submitting.set(true);
        let (credentials, profile) = form.to_request();
        let token = liveness.token();
        spawn_local(async move {
            let result = auth.sign_up(credentials, profile).await;
            if !token.is_live() {
                return;
            }
            set_is_submitting.set(false);
            match result {
                Ok(SignUpOutcome::PendingEmailConfirmation { email }) => {
                    WebStorage::set(REGISTRATION_EMAIL_KEY, &email);
                    router.navigate("/register-success");
                }
                Ok(SignUpOutcome::Authenticated(_)) => {
                    let home = router.navigation().with_value(|n| n.guard.home_path().to_string());
                    router.navigate(&home);
                }
                Err(e) => notices.auth_error(&e),
            }
        });
    };

    view! {
        <AuthCard title="Create an account" subtitle="Enter your details to create your account">
            <form class="card-body" on:submit=on_submit>
                {text_input("fullName", "Full Name", "text", "Enter your full name", form.full_name)}
                {text_input("email", "Email", "email", "m@example.com", form.email)}
                {text_input("password", "Password", "password", "Create a password", form.password)}
                {text_input(
                    "confirmPassword",
                    "Confirm Password",
                    "password",
                    "Confirm your password",
                    form.confirm_password,
                )}
                <label class="label cursor-pointer justify-start gap-2">
                    <input id="terms" type="checkbox" class="checkbox checkbox-sm" required />
                    <span class="label-text">"I agree to the Terms of Service and Privacy Policy"</span>
                </label>
                <SubmitButton busy=is_submitting label="Create Account" busy_label="Creating account..." />
                <p class="text-center text-sm mt-2">
                    "Already have an account? "
                    <Link to="/signin" class="link link-primary">"Sign in"</Link>
                </p>
            </form>
        </AuthCard>
    }
}

#[component]
pub fn RegisterSuccessPage() -> impl IntoView {
    let auth = use_auth();
    let notices = use_notices();
    let (is_resending, set_is_resending) = signal(false);
    let liveness = use_liveness();

    let on_resend = move |_| {
        let email = WebStorage::get(REGISTRATION_EMAIL_KEY).unwrap_or_default();
        set_is_resending.set(true);
        let token = liveness.token();
        spawn_local(async move {
            let result = auth.resend_verification(email).await;
            if !token.is_live() {
                return;
            }
            set_is_resending.set(false);
            match result {
                Ok(()) => notices.success("Verification email sent"),
                Err(e) => notices.auth_error(&e),
            }
        });
    };

    view! {
        <AuthCard title="Check your email" subtitle="Please click the link to activate your account.">
            <div class="card-body space-y-4">
                <ol class="list-decimal list-inside space-y-2 text-sm">
                    <li>"Open the email from Prompt Array and click the verification link"</li>
                    <li>"After verification, you can sign in and start using all features"</li>
                </ol>
                <Link to="/signin" class="btn btn-primary">"Go to Sign In"</Link>
                <p class="text-center text-sm">
                    "Didn't receive the email? "
                    <button class="link link-primary" on:click=on_resend disabled=move || is_resending.get()>
                        {move || if is_resending.get() { "Resending..." } else { "Click to resend" }}
                    </button>
                </p>
            </div>
        </AuthCard>
    }
}
