//! Confirmation dialogs and action sheets.

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStyle {
    Alert,
    ActionSheet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Default,
    Cancel,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertButton {
    pub title: String,
    pub style: ActionStyle,
}

/// Everything the presentation layer needs to show one dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub style: AlertStyle,
    pub buttons: Vec<AlertButton>,
}

/// Shows a dialog and resolves once the user picks a button.
#[async_trait]
pub trait AlertService: Send + Sync {
    /// Index into `request.buttons` of the chosen button, `None` if the
    /// dialog was dismissed without a choice.
    async fn show(&self, request: AlertRequest) -> Option<usize>;
}

/// A closed set of dialog choices.
pub trait AlertAction: Clone + Send + Sync {
    fn title(&self) -> String;
    fn style(&self) -> ActionStyle;
}

/// Show `actions` as buttons and map the choice back to its action.
pub async fn present<A: AlertAction>(
    service: &dyn AlertService,
    title: Option<&str>,
    message: Option<&str>,
    style: AlertStyle,
    actions: &[A],
) -> Option<A> {
    let request = AlertRequest {
        title: title.map(str::to_string),
        message: message.map(str::to_string),
        style,
        buttons: actions
            .iter()
            .map(|action| AlertButton {
                title: action.title(),
                style: action.style(),
            })
            .collect(),
    };

    let index = service.show(request).await?;
    actions.get(index).cloned()
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Choice {
        Yes,
        No,
    }

    impl AlertAction for Choice {
        fn title(&self) -> String {
            format!("{:?}", self)
        }

        fn style(&self) -> ActionStyle {
            match self {
                Choice::Yes => ActionStyle::Default,
                Choice::No => ActionStyle::Cancel,
            }
        }
    }

    struct Pick {
        index: Option<usize>,
        seen: Mutex<Option<AlertRequest>>,
    }

    #[async_trait]
    impl AlertService for Pick {
        async fn show(&self, request: AlertRequest) -> Option<usize> {
            *self.seen.lock() = Some(request);
            self.index
        }
    }

    #[tokio::test]
    async fn present_maps_index_to_action() {
        let service = Pick {
            index: Some(1),
            seen: Mutex::new(None),
        };
        let choice = present(
            &service,
            Some("Title"),
            None,
            AlertStyle::Alert,
            &[Choice::Yes, Choice::No],
        )
        .await;
        assert_eq!(choice, Some(Choice::No));

        let seen = service.seen.lock().clone().unwrap();
        assert_eq!(seen.title.as_deref(), Some("Title"));
        assert_eq!(seen.buttons.len(), 2);
        assert_eq!(seen.buttons[0].title, "Yes");
        assert_eq!(seen.buttons[1].style, ActionStyle::Cancel);
    }

    #[tokio::test]
    async fn dismissed_or_out_of_range_is_none() {
        let dismissed = Pick {
            index: None,
            seen: Mutex::new(None),
        };
        assert_eq!(
            present(&dismissed, None, None, AlertStyle::ActionSheet, &[Choice::Yes]).await,
            None
        );

        let out_of_range = Pick {
            index: Some(5),
            seen: Mutex::new(None),
        };
        assert_eq!(
            present(&out_of_range, None, None, AlertStyle::ActionSheet, &[Choice::Yes]).await,
            None
        );
    }
}
