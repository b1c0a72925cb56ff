use crate::auth::use_auth;
use crate::components::form::{AuthCard, SubmitButton, use_liveness};
use crate::notice::use_notices;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();
    let (email, set_email) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let liveness = use_liveness();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        let address = email.get();
        let token = liveness.token();
        spawn_local(async move {
            let result = auth.request_password_reset(address).await;
            if !token.is_live() {
                return;
            }
            set_is_submitting.set(false);
            match result {
                Ok(()) => {
                    notices.success("Password reset instructions sent to your email");
                    router.navigate("/signin");
                }
                Err(e) => notices.auth_error(&e),
            }
        });
    };

    view! {
        <AuthCard title="Reset Password" subtitle="We'll send you instructions to reset your password">
            <form class="card-body" on:submit=on_submit>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">"Email"</span>
                    </label>
                    <input
                        id="email"
                        type="email"
                        placeholder="m@example.com"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                        class="input input-bordered"
                        required
                    />
                </div>
                <SubmitButton busy=is_submitting label="Send Reset Instructions" busy_label="Sending..." />
                <p class="text-center text-sm mt-2">
                    "Remember your password? "
                    <Link to="/signin" class="link link-primary">"Sign in"</Link>
                </p>
            </form>
        </AuthCard>
    }
}
