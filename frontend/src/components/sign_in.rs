use crate::auth::use_auth;
use crate::components::form::{AuthCard, ErrorAlert, SubmitButton, use_liveness};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use prompt_array_shared::Credentials;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let liveness = use_liveness();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let credentials = Credentials::new(email.get(), password.get());
        let token = liveness.token();
        spawn_local(async move {
            let result = auth.sign_in(credentials).await;
            if !token.is_live() {
                return;
            }
            set_is_submitting.set(false);
            match result {
                Ok(_) => {
                    let target = router.navigation().with_value(|n| {
                        n.guard.post_sign_in_target(&router.query().get_untracked())
                    });
                    router.replace(&target);
                }
                Err(e) => set_error_msg.set(Some(e.message().to_string())),
            }
        });
    };

    view! {
        <AuthCard title="Welcome back" subtitle="Sign in to your Prompt Array account">
            <form class="card-body" on:submit=on_submit>
                <ErrorAlert message=error_msg />

                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">"Email"</span>
                    </label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">"Password"</span>
                        <Link to="/reset-password" class="label-text-alt link link-hover">
                            "Forgot password?"
                        </Link>
                    </label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        class="input input-bordered"
                        required
                    />
                </div>
                <SubmitButton busy=is_submitting label="Sign In" busy_label="Signing in..." />
                <p class="text-center text-sm mt-2">
                    "Don't have an account? "
                    <Link to="/signup" class="link link-primary">"Sign up"</Link>
                </p>
            </form>
        </AuthCard>
    }
}
