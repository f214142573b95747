use std::collections::BTreeMap;
use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Error,
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(5000), // 5 seconds default
        }
    }
}

/// Toasts keyed by insertion order, so they stack in the order raised.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: BTreeMap<u64, Toast>,
    next_seq: u64,
}

impl ToastState {
    pub fn ordered(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.values()
    }
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_seq = self.next_seq;

        match action {
            ToastAction::Add(toast) => {
                toasts.insert(next_seq, toast);
                next_seq += 1;
            }
            ToastAction::Remove(id) => {
                toasts.retain(|_, toast| toast.id != id);
            }
        }

        Rc::new(ToastState { toasts, next_seq })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: Option<ToastContext>,
}

impl ToastHandle {
    pub fn add(&self, toast: Toast) {
        let Some(context) = self.context.clone() else {
            tracing::warn!(message = %toast.message, "toast raised outside a ToastProvider");
            return;
        };
        let toast_id = toast.id;
        let duration = toast.duration;

        context.dispatch(ToastAction::Add(toast));

        // Set up auto-dismiss if duration is specified
        if let Some(duration_ms) = duration {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::new(message.into(), ToastType::Error));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.add(Toast::new(message.into(), ToastType::Warning));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::new(message.into(), ToastType::Success));
    }

    pub fn remove(&self, id: Uuid) {
        if let Some(context) = &self.context {
            context.dispatch(ToastAction::Remove(id));
        }
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle {
        context: use_context::<ToastContext>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: Rc<ToastState>, message: &str) -> Rc<ToastState> {
        state.reduce(ToastAction::Add(Toast::new(
            message.to_string(),
            ToastType::Warning,
        )))
    }

    #[test]
    fn test_toasts_keep_insertion_order() {
        let state = Rc::new(ToastState::default());
        let state = add(state, "first");
        let state = add(state, "second");
        let state = add(state, "third");

        let messages: Vec<&str> =
            state.ordered().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third"]);

        let second = state.ordered().nth(1).map(|t| t.id).unwrap();
        let state = state.reduce(ToastAction::Remove(second));
        let messages: Vec<&str> =
            state.ordered().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["first", "third"]);
    }
}
