//! Delete Confirm Button Component
//!
//! Inline delete button that asks before running its action.

use leptos::prelude::*;

/// Where the button is in its ask-then-act cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConfirmStep {
    Idle,
    Asking,
}

impl ConfirmStep {
    fn press_delete(self) -> Self {
        ConfirmStep::Asking
    }

    /// Returns the next step and whether the action should run
    fn press_yes(self) -> (Self, bool) {
        (ConfirmStep::Idle, self == ConfirmStep::Asking)
    }

    fn press_no(self) -> Self {
        ConfirmStep::Idle
    }
}

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, shows "Are you sure?" with
/// Yes/No buttons; only "Yes" runs `on_confirm`.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (step, set_step) = signal(ConfirmStep::Idle);

    let on_yes = move |_: web_sys::MouseEvent| {
        let (next, fire) = step.get_untracked().press_yes();
        set_step.set(next);
        if fire {
            on_confirm.run(());
        }
    };

    view! {
        <Show when=move || step.get() == ConfirmStep::Idle>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |_| set_step.update(|s| *s = s.press_delete())
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || step.get() == ConfirmStep::Asking>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Are you sure?"</span>
                <button type="button" class="confirm-btn" on:click=on_yes>
                    "Yes"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| set_step.update(|s| *s = s.press_no())
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_alone_does_not_fire() {
        let step = ConfirmStep::Idle.press_delete();
        assert_eq!(step, ConfirmStep::Asking);
    }

    #[test]
    fn test_no_returns_to_idle_without_firing() {
        let step = ConfirmStep::Idle.press_delete().press_no();
        assert_eq!(step, ConfirmStep::Idle);
        // A stray "Yes" after backing out runs nothing
        assert_eq!(step.press_yes(), (ConfirmStep::Idle, false));
    }

    #[test]
    fn test_yes_after_delete_fires_once() {
        let (step, fire) = ConfirmStep::Idle.press_delete().press_yes();
        assert!(fire);
        assert_eq!(step, ConfirmStep::Idle);
        assert!(!step.press_yes().1);
    }
}
