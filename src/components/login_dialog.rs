use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginDialogProps {
    pub open: bool,
    pub login_url: String,
    pub on_close: Callback<()>,
}

#[function_component(LoginDialog)]
pub fn login_dialog(props: &LoginDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="modal-overlay active" onclick={close_click.clone()}>
            <div class="modal login-dialog" role="dialog" aria-modal="true" onclick={stop}>
                <button class="btn-close" aria-label="Close" onclick={close_click}>{"✕"}</button>
                <h2>{"Sign in required"}</h2>
                <p>{"Log in to bookmark companies and see your saved list."}</p>
                <a class="btn-login" href={props.login_url.clone()}>{"Log in"}</a>
            </div>
        </div>
    }
}
